use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use crate::domain::logger::Logger;

pub struct RemoveCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveCartItemUseCase for RemoveCartItemUseCaseImpl {
    async fn execute(&self, params: RemoveCartItemParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Removing {} from cart {}",
            params.product_id, params.cart_id
        ));

        let mut cart = self.repository.get(params.cart_id).await?;
        cart.remove(&params.product_id)?;
        self.repository.save(&cart).await?;

        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::CartItem;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::Product;
    use crate::domain::product::value_objects::ProductId;
    use chrono::Utc;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn get(&self, cart_id: Uuid) -> Result<Cart, RepositoryError>;
            async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
            async fn delete(&self, cart_id: Uuid) -> Result<(), RepositoryError>;
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

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn line(id: &str) -> CartItem {
        let now = Utc::now();
        let product = Product::from_repository(
            ProductId::from_repository(id),
            "Amoxil".to_string(),
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
        );
        CartItem::from_product(&product, 1)
    }

    #[tokio::test]
    async fn should_remove_line_and_save() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_get()
            .returning(|id| Ok(Cart::from_repository(id, vec![line("p1")])));
        mock_repo
            .expect_save()
            .withf(|cart| cart.is_empty())
            .returning(|_| Ok(()));

        let use_case = RemoveCartItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(RemoveCartItemParams {
                cart_id: Uuid::new_v4(),
                product_id: ProductId::from_repository("p1"),
            })
            .await
            .unwrap();

        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn should_error_when_line_missing() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_get().returning(|id| Ok(Cart::empty(id)));

        let use_case = RemoveCartItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveCartItemParams {
                cart_id: Uuid::new_v4(),
                product_id: ProductId::from_repository("ghost"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::ItemNotFound));
    }
}
