use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::cache::CatalogCache;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductsParams, DeleteProductsUseCase};

pub struct DeleteProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub cache: Arc<CatalogCache>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductsUseCase for DeleteProductsUseCaseImpl {
    async fn execute(&self, params: DeleteProductsParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting {} products", params.ids.len()));

        // Every row is attempted regardless of earlier failures; the first
        // failure is surfaced afterwards. Applied rows stay applied.
        let mut first_failure: Option<RepositoryError> = None;
        for id in &params.ids {
            if let Err(e) = self.repository.delete(id).await {
                self.logger
                    .warn(&format!("Failed to delete product {id}: {e}"));
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::cache::{Clock, DEFAULT_CATALOG_TTL};
    use crate::domain::product::model::Product;
    use crate::domain::product::value_objects::ProductId;
    use mockall::mock;
    use std::time::Instant;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_visible(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError>;
            async fn insert(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn update(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError>;
            async fn set_visibility(&self, id: &ProductId, visible: bool) -> Result<(), RepositoryError>;
            async fn set_new_arrival(&self, id: &ProductId, new_arrival: bool) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    struct FrozenClock;

    impl Clock for FrozenClock {
        fn now(&self) -> Instant {
            Instant::now()
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn catalog_cache() -> Arc<CatalogCache> {
        Arc::new(CatalogCache::new(DEFAULT_CATALOG_TTL, Box::new(FrozenClock)))
    }

    fn ids(raw: &[&str]) -> Vec<ProductId> {
        raw.iter().map(|id| ProductId::from_repository(*id)).collect()
    }

    #[tokio::test]
    async fn should_delete_every_listed_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_delete().times(3).returning(|_| Ok(()));

        let use_case = DeleteProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            cache: catalog_cache(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductsParams {
                ids: ids(&["a", "b", "c"]),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_attempt_remaining_rows_and_surface_first_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_delete().times(3).returning(|id| {
            if id.as_str() == "b" {
                Err(RepositoryError::DatabaseError)
            } else {
                Ok(())
            }
        });

        let use_case = DeleteProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            cache: catalog_cache(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductsParams {
                ids: ids(&["a", "b", "c"]),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError)
        ));
    }

    #[tokio::test]
    async fn should_surface_missing_row_as_not_found() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_delete()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = DeleteProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            cache: catalog_cache(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductsParams { ids: ids(&["a"]) })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }
}
