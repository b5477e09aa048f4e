use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::cache::CatalogCache;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update_visibility::{
    UpdateVisibilityParams, UpdateVisibilityUseCase,
};

pub struct UpdateVisibilityUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub cache: Arc<CatalogCache>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateVisibilityUseCase for UpdateVisibilityUseCaseImpl {
    async fn execute(&self, params: UpdateVisibilityParams) -> Result<(), ProductError> {
        self.logger.info(&format!(
            "Toggling visibility on {} products",
            params.changes.len()
        ));

        let mut first_failure: Option<RepositoryError> = None;
        for change in &params.changes {
            if let Err(e) = self
                .repository
                .set_visibility(&change.id, change.visible)
                .await
            {
                self.logger.warn(&format!(
                    "Failed to set visibility on {}: {}",
                    change.id, e
                ));
                first_failure.get_or_insert(e);
            }
        }

        self.cache.invalidate();

        match first_failure {
            Some(RepositoryError::NotFound) => Err(ProductError::NotFound),
            Some(other) => Err(ProductError::Repository(other)),
            None => Ok(()),
        }
    }
}
