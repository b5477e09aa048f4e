use rand::Rng;

use super::model::Cart;

/// The artifacts of an order hand-off: the human-readable message body and
/// the messaging deep link carrying it.
#[derive(Debug, Clone)]
pub struct OrderHandoff {
    pub message: String,
    pub link: String,
}

/// Service port that turns a cart into a messaging hand-off. The order is
/// never persisted server-side; the link is the whole checkout.
pub trait OrderHandoffService: Send + Sync {
    fn build(&self, cart: &Cart, order_number: &str) -> OrderHandoff;
}

/// Client-generated order reference, meaningless to any backend record.
pub fn generate_order_number() -> String {
    let n: u32 = rand::rng().random_range(100_000..1_000_000);
    format!("ORD-{n}")
}
