use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::product::model::Product;
use business::domain::product::value_objects::ProductId;

/// Raw row shape of the `products` table. Decoding is typed, so a row that
/// does not match this shape fails the read instead of leaking through.
#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: String,
    pub brand_name: String,
    pub salt_name: String,
    pub company: String,
    pub packing: Option<String>,
    pub mrp: Option<f64>,
    pub category: String,
    pub in_stock: bool,
    pub visible: bool,
    pub new_arrival: bool,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            ProductId::from_repository(self.id),
            self.brand_name,
            self.salt_name,
            self.company,
            self.packing,
            // Legacy rows carry NULL prices; the storefront shows 0.
            self.mrp.unwrap_or(0.0),
            self.category,
            self.in_stock,
            self.visible,
            self.new_arrival,
            self.image_url,
            self.created_at,
            self.updated_at,
        )
    }
}
