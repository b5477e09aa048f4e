#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.invalid_quantity")]
    InvalidQuantity,
    #[error("cart.item_not_found")]
    ItemNotFound,
    #[error("cart.product_not_found")]
    ProductNotFound,
    #[error("cart.empty")]
    Empty,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
