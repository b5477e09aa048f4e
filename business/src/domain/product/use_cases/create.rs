use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct CreateProductParams {
    /// Explicit id; slugified from the brand name when absent.
    pub id: Option<String>,
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
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
