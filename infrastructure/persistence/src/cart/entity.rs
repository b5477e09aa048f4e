use sqlx::FromRow;
use uuid::Uuid;

use business::domain::cart::model::CartItem;
use business::domain::product::value_objects::ProductId;

/// One line of the `cart_items` table, keyed by (cart_id, product_id).
/// Price and names are the snapshot taken at add time, not a join against
/// the live product row.
#[derive(Debug, FromRow)]
pub struct CartItemEntity {
    pub cart_id: Uuid,
    pub product_id: String,
    pub brand_name: String,
    pub company: String,
    pub mrp: f64,
    pub quantity: i32,
    pub image_url: Option<String>,
}

impl CartItemEntity {
    pub fn into_domain(self) -> CartItem {
        CartItem {
            product_id: ProductId::from_repository(self.product_id),
            brand_name: self.brand_name,
            company: self.company,
            mrp: self.mrp,
            quantity: u32::try_from(self.quantity).unwrap_or(0),
            image_url: self.image_url,
        }
    }
}
