use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::cache::CatalogCache;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::product::value_objects::ProductId;

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub cache: Arc<CatalogCache>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        if params.brand_name.trim().is_empty() {
            return Err(ProductError::BrandNameEmpty);
        }

        let existing = self
            .repository
            .get_by_id(&params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        let target_id = match &params.new_id {
            Some(new_id) if new_id.as_str() != params.id.as_str() => {
                ProductId::new(new_id.clone())?
            }
            _ => existing.id.clone(),
        };
        let rekeyed = target_id != existing.id;

        let updated = Product::from_repository(
            target_id,
            params.brand_name,
            params.salt_name,
            params.company,
            params.packing,
            params.mrp.unwrap_or(0.0),
            params.category,
            params.in_stock,
            params.visible,
            params.new_arrival,
            params.image_url,
            existing.created_at,
            chrono::Utc::now(),
        );

        if rekeyed {
            // No transaction spans the two halves. A failed insert leaves
            // the old row in place; a failed delete leaves both rows.
            self.repository
                .insert(&updated)
                .await
                .map_err(|e| match e {
                    RepositoryError::Duplicated => ProductError::AlreadyExists,
                    other => ProductError::Repository(other),
                })?;

            if let Err(e) = self.repository.delete(&existing.id).await {
                self.logger.warn(&format!(
                    "Re-key of {} left the old row behind: {}",
                    existing.id, e
                ));
            }
        } else {
            self.repository.update(&updated).await?;
        }

        self.cache.invalidate();
        self.logger
            .info(&format!("Product updated: {}", updated.id));
        Ok(updated)
    }
}
