use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::cache::CatalogCache;
use crate::domain::product::errors::ProductError;
use crate::domain::product::filter;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::list_catalog::{
    CatalogPage, ListCatalogParams, ListCatalogUseCase,
};

pub struct ListCatalogUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub cache: Arc<CatalogCache>,
    pub logger: Arc<dyn Logger>,
}

impl ListCatalogUseCaseImpl {
    async fn visible_products(&self) -> Result<Vec<Product>, ProductError> {
        if let Some(products) = self.cache.get() {
            self.logger.debug("Serving catalog from cache");
            return Ok(products);
        }

        let fresh = self.repository.get_visible().await?;
        self.cache.store(fresh.clone());
        self.logger
            .info(&format!("Catalog refreshed: {} products", fresh.len()));
        Ok(fresh)
    }
}

#[async_trait]
impl ListCatalogUseCase for ListCatalogUseCaseImpl {
    async fn execute(&self, params: ListCatalogParams) -> Result<CatalogPage, ProductError> {
        let products = self.visible_products().await?;
        let filtered = filter::apply(&products, &params.filter);

        let total = filtered.len();
        let page = params.page.max(1);
        let per_page = params.per_page.max(1);
        let products = filtered
            .into_iter()
            .skip((page - 1) * per_page)
            .take(per_page)
            .collect();

        Ok(CatalogPage {
            products,
            total,
            page,
            per_page,
        })
    }
}
