use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::filter::ProductFilter;
use crate::domain::product::model::Product;

pub struct ListCatalogParams {
    pub filter: ProductFilter,
    pub page: usize,
    pub per_page: usize,
}

/// One page of the filtered catalog. `total` counts every product that
/// survived the filter, not just the returned page.
pub struct CatalogPage {
    pub products: Vec<Product>,
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
}

#[async_trait]
pub trait ListCatalogUseCase: Send + Sync {
    async fn execute(&self, params: ListCatalogParams) -> Result<CatalogPage, ProductError>;
}
