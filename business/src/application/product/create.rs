use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::cache::CatalogCache;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::product::value_objects::ProductId;

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub cache: Arc<CatalogCache>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.brand_name));

        let id = params.id.map(ProductId::new).transpose()?;
        let product = Product::new(NewProductProps {
            id,
            brand_name: params.brand_name,
            salt_name: params.salt_name,
            company: params.company,
            packing: params.packing,
            mrp: params.mrp,
            category: params.category,
            in_stock: params.in_stock,
            visible: params.visible,
            new_arrival: params.new_arrival,
            image_url: params.image_url,
        })?;

        self.repository
            .insert(&product)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated => ProductError::AlreadyExists,
                other => ProductError::Repository(other),
            })?;

        self.cache.invalidate();
        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}
