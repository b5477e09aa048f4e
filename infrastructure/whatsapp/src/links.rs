use url::form_urlencoded;

use business::domain::cart::model::Cart;
use business::domain::cart::services::{OrderHandoff, OrderHandoffService};
use business::domain::enquiry::services::EnquiryLinkService;
use business::domain::product::model::Product;

const SEND_BASE_URL: &str = "https://wa.me";

/// Builds `wa.me` deep links carrying pre-filled message text. The store's
/// WhatsApp number is the only state; everything else is string assembly.
pub struct WhatsAppLinks {
    phone: String,
}

impl WhatsAppLinks {
    /// `phone` is the store number in international format; anything that
    /// is not a digit is stripped.
    pub fn new(phone: &str) -> Self {
        Self {
            phone: phone.chars().filter(char::is_ascii_digit).collect(),
        }
    }

    fn send_url(&self, text: &str) -> String {
        let query: String = form_urlencoded::Serializer::new(String::new())
            .append_pair("text", text)
            .finish();
        format!("{SEND_BASE_URL}/{}?{}", self.phone, query)
    }

    fn order_message(cart: &Cart, order_number: &str) -> String {
        let mut lines = vec![format!("New order {order_number}"), String::new()];
        for (index, item) in cart.items.iter().enumerate() {
            lines.push(format!(
                "{}. {} ({}) - {} x ₹{:.2} = ₹{:.2}",
                index + 1,
                item.brand_name,
                item.company,
                item.quantity,
                item.mrp,
                item.subtotal(),
            ));
        }
        lines.push(String::new());
        lines.push(format!("Total: ₹{:.2}", cart.total()));
        lines.join("\n")
    }
}

impl OrderHandoffService for WhatsAppLinks {
    fn build(&self, cart: &Cart, order_number: &str) -> OrderHandoff {
        let message = Self::order_message(cart, order_number);
        let link = self.send_url(&message);
        OrderHandoff { message, link }
    }
}

impl EnquiryLinkService for WhatsAppLinks {
    fn product_link(&self, product: &Product) -> String {
        let message = format!(
            "Hi, I would like to enquire about {} ({}) - {}.",
            product.brand_name, product.company, product.id,
        );
        self.send_url(&message)
    }
}
