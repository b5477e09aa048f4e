use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;
use super::value_objects::ProductId;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every product, hidden ones included. Admin reads only.
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    /// Customer-facing read: products with `visible = true`.
    async fn get_visible(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError>;
    /// Fails with `Duplicated` when the id already exists.
    async fn insert(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn update(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError>;
    async fn set_visibility(&self, id: &ProductId, visible: bool) -> Result<(), RepositoryError>;
    async fn set_new_arrival(
        &self,
        id: &ProductId,
        new_arrival: bool,
    ) -> Result<(), RepositoryError>;
}
