use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::value_objects::ProductId;

pub struct DeleteProductsParams {
    pub ids: Vec<ProductId>,
}

/// Bulk delete. Rows are removed one by one; a failing row does not stop
/// the rest, and the first failure is surfaced once the batch finishes.
#[async_trait]
pub trait DeleteProductsUseCase: Send + Sync {
    async fn execute(&self, params: DeleteProductsParams) -> Result<(), ProductError>;
}
