use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::product::value_objects::ProductId;

pub struct AddCartItemParams {
    pub cart_id: Uuid,
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Snapshots the product into the cart. Hidden or unknown products cannot
/// be added.
#[async_trait]
pub trait AddCartItemUseCase: Send + Sync {
    async fn execute(&self, params: AddCartItemParams) -> Result<Cart, CartError>;
}
