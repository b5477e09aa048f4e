use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductId;

pub struct UpdateProductParams {
    pub id: ProductId,
    /// When set and different from `id`, the row is re-keyed:
    /// inserted under the new id, then deleted under the old one.
    pub new_id: Option<String>,
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
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
