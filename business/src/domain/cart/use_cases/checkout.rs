use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;

pub struct CheckoutParams {
    pub cart_id: Uuid,
}

/// Result of a checkout: nothing is charged or recorded server-side. The
/// caller opens the link; the order number only exists in the message.
#[derive(Debug)]
pub struct CheckoutSummary {
    pub order_number: String,
    pub total: f64,
    pub message: String,
    pub link: String,
}

#[async_trait]
pub trait CheckoutUseCase: Send + Sync {
    async fn execute(&self, params: CheckoutParams) -> Result<CheckoutSummary, CartError>;
}
