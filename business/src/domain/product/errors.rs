#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.invalid_id")]
    InvalidId,
    #[error("product.brand_name_empty")]
    BrandNameEmpty,
    #[error("product.not_found")]
    NotFound,
    #[error("product.already_exists")]
    AlreadyExists,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
