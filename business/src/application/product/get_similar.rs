use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::cache::CatalogCache;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::similarity;
use crate::domain::product::use_cases::get_similar::{
    GetSimilarProductsParams, GetSimilarProductsUseCase,
};

pub struct GetSimilarProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub cache: Arc<CatalogCache>,
    pub logger: Arc<dyn Logger>,
}

impl GetSimilarProductsUseCaseImpl {
    async fn visible_products(&self) -> Result<Vec<Product>, ProductError> {
        if let Some(products) = self.cache.get() {
            return Ok(products);
        }
        let fresh = self.repository.get_visible().await?;
        self.cache.store(fresh.clone());
        Ok(fresh)
    }
}

#[async_trait]
impl GetSimilarProductsUseCase for GetSimilarProductsUseCaseImpl {
    async fn execute(
        &self,
        params: GetSimilarProductsParams,
    ) -> Result<Vec<Product>, ProductError> {
        let products = self.visible_products().await?;

        // The anchor must itself be on the storefront.
        let anchor = similarity::find_by_id(&products, &params.id)
            .ok_or(ProductError::NotFound)?
            .clone();

        let similar = similarity::rank_similar(&anchor, &products, params.limit);
        self.logger.debug(&format!(
            "Found {} products similar to {}",
            similar.len(),
            anchor.id
        ));
        Ok(similar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::cache::{Clock, DEFAULT_CATALOG_TTL};
    use crate::domain::product::value_objects::ProductId;
    use chrono::Utc;
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

    fn product(id: &str, brand: &str) -> Product {
        let now = Utc::now();
        Product::from_repository(
            ProductId::from_repository(id),
            brand.to_string(),
            "amoxicillin".to_string(),
            "GSK".to_string(),
            None,
            100.0,
            "antibiotics".to_string(),
            true,
            true,
            false,
            None,
            now,
            now,
        )
    }

    #[tokio::test]
    async fn should_rank_similar_visible_products() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_visible().returning(|| {
            Ok(vec![
                product("amoxil-capsules", "Amoxil Capsules"),
                product("amoxil-tablets", "Amoxil Tablets"),
            ])
        });

        let use_case = GetSimilarProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            cache: Arc::new(CatalogCache::new(DEFAULT_CATALOG_TTL, Box::new(FrozenClock))),
            logger: mock_logger(),
        };

        let similar = use_case
            .execute(GetSimilarProductsParams {
                id: ProductId::from_repository("amoxil-capsules"),
                limit: 6,
            })
            .await
            .unwrap();

        assert_eq!(similar.len(), 1);
        assert_eq!(similar[0].id.as_str(), "amoxil-tablets");
    }

    #[tokio::test]
    async fn should_return_not_found_when_anchor_not_on_storefront() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_visible()
            .returning(|| Ok(vec![product("amoxil-tablets", "Amoxil Tablets")]));

        let use_case = GetSimilarProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            cache: Arc::new(CatalogCache::new(DEFAULT_CATALOG_TTL, Box::new(FrozenClock))),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetSimilarProductsParams {
                id: ProductId::from_repository("hidden-product"),
                limit: 6,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }
}
