use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductId;

pub struct GetSimilarProductsParams {
    pub id: ProductId,
    pub limit: usize,
}

#[async_trait]
pub trait GetSimilarProductsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetSimilarProductsParams,
    ) -> Result<Vec<Product>, ProductError>;
}
