use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::cache::CatalogCache;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update_new_arrivals::{
    UpdateNewArrivalsParams, UpdateNewArrivalsUseCase,
};

pub struct UpdateNewArrivalsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub cache: Arc<CatalogCache>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateNewArrivalsUseCase for UpdateNewArrivalsUseCaseImpl {
    async fn execute(&self, params: UpdateNewArrivalsParams) -> Result<(), ProductError> {
        self.logger.info(&format!(
            "Toggling new-arrival flag on {} products",
            params.changes.len()
        ));

        let mut first_failure: Option<RepositoryError> = None;
        for change in &params.changes {
            if let Err(e) = self
                .repository
                .set_new_arrival(&change.id, change.new_arrival)
                .await
            {
                self.logger.warn(&format!(
                    "Failed to set new-arrival flag on {}: {}",
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::cache::{Clock, DEFAULT_CATALOG_TTL};
    use crate::domain::product::model::Product;
    use crate::domain::product::use_cases::update_new_arrivals::NewArrivalChange;
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

    #[tokio::test]
    async fn should_flag_listed_products_as_new_arrivals() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_set_new_arrival()
            .times(2)
            .returning(|_, _| Ok(()));

        let use_case = UpdateNewArrivalsUseCaseImpl {
            repository: Arc::new(mock_repo),
            cache: Arc::new(CatalogCache::new(DEFAULT_CATALOG_TTL, Box::new(FrozenClock))),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateNewArrivalsParams {
                changes: vec![
                    NewArrivalChange {
                        id: ProductId::from_repository("a"),
                        new_arrival: true,
                    },
                    NewArrivalChange {
                        id: ProductId::from_repository("b"),
                        new_arrival: false,
                    },
                ],
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_surface_first_failure_after_finishing_batch() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_set_new_arrival()
            .times(2)
            .returning(|_, _| Err(RepositoryError::DatabaseError));

        let use_case = UpdateNewArrivalsUseCaseImpl {
            repository: Arc::new(mock_repo),
            cache: Arc::new(CatalogCache::new(DEFAULT_CATALOG_TTL, Box::new(FrozenClock))),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateNewArrivalsParams {
                changes: vec![
                    NewArrivalChange {
                        id: ProductId::from_repository("a"),
                        new_arrival: true,
                    },
                    NewArrivalChange {
                        id: ProductId::from_repository("b"),
                        new_arrival: true,
                    },
                ],
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
