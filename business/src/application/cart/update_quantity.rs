use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::update_quantity::{
    UpdateCartQuantityParams, UpdateCartQuantityUseCase,
};
use crate::domain::logger::Logger;

pub struct UpdateCartQuantityUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCartQuantityUseCase for UpdateCartQuantityUseCaseImpl {
    async fn execute(&self, params: UpdateCartQuantityParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Setting {} to quantity {} in cart {}",
            params.product_id, params.quantity, params.cart_id
        ));

        let mut cart = self.repository.get(params.cart_id).await?;
        cart.update_quantity(&params.product_id, params.quantity)?;
        self.repository.save(&cart).await?;

        Ok(cart)
    }
}
