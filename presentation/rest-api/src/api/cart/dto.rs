use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::cart::model::{Cart, CartItem};
use business::domain::cart::use_cases::checkout::CheckoutSummary;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CartItemResponse {
    pub product_id: String,
    /// Brand name captured when the item was added
    pub brand_name: String,
    pub company: String,
    /// Price captured when the item was added
    pub mrp: f64,
    pub quantity: u32,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    pub subtotal: f64,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        let subtotal = item.subtotal();
        Self {
            product_id: item.product_id.to_string(),
            brand_name: item.brand_name,
            company: item.company,
            mrp: item.mrp,
            quantity: item.quantity,
            image_url: item.image_url,
            subtotal,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CartResponse {
    pub id: String,
    pub items: Vec<CartItemResponse>,
    pub total: f64,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        let total = cart.total();
        Self {
            id: cart.id.to_string(),
            items: cart.items.into_iter().map(|i| i.into()).collect(),
            total,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct AddCartItemRequest {
    pub product_id: String,
    /// Quantity to add; merged into an existing line for the same product
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct UpdateCartQuantityRequest {
    /// New quantity; 0 removes the line
    pub quantity: u32,
}

/// Checkout result. Nothing was charged or stored; the link carries the
/// whole order to the store's WhatsApp.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CheckoutResponse {
    pub order_number: String,
    pub total: f64,
    pub message: String,
    pub whatsapp_link: String,
}

impl From<CheckoutSummary> for CheckoutResponse {
    fn from(summary: CheckoutSummary) -> Self {
        Self {
            order_number: summary.order_number,
            total: summary.total,
            message: summary.message,
            whatsapp_link: summary.link,
        }
    }
}
