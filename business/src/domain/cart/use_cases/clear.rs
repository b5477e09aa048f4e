use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;

pub struct ClearCartParams {
    pub cart_id: Uuid,
}

#[async_trait]
pub trait ClearCartUseCase: Send + Sync {
    async fn execute(&self, params: ClearCartParams) -> Result<(), CartError>;
}
