use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::product::value_objects::ProductId;

pub struct UpdateCartQuantityParams {
    pub cart_id: Uuid,
    pub product_id: ProductId,
    /// Zero removes the line.
    pub quantity: u32,
}

#[async_trait]
pub trait UpdateCartQuantityUseCase: Send + Sync {
    async fn execute(&self, params: UpdateCartQuantityParams) -> Result<Cart, CartError>;
}
