use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartItem};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct AddCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    async fn execute(&self, params: AddCartItemParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Adding {} x{} to cart {}",
            params.product_id, params.quantity, params.cart_id
        ));

        let product = self
            .product_repository
            .get_by_id(&params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotFound,
                other => CartError::Repository(other),
            })?;
        if !product.visible {
            return Err(CartError::ProductNotFound);
        }

        let mut cart = self.repository.get(params.cart_id).await?;
        cart.add(CartItem::from_product(&product, params.quantity))?;
        self.repository.save(&cart).await?;

        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn make_product(id: &str, visible: bool) -> Product {
        let now = Utc::now();
        Product::from_repository(
            ProductId::from_repository(id),
            "Amoxil Capsules".to_string(),
            "amoxicillin".to_string(),
            "GSK".to_string(),
            None,
            120.0,
            "antibiotics".to_string(),
            true,
            visible,
            false,
            None,
            now,
            now,
        )
    }

    #[tokio::test]
    async fn should_snapshot_product_into_cart_and_save() {
        let mut mock_cart_repo = MockCartRepo::new();
        mock_cart_repo.expect_get().returning(|id| Ok(Cart::empty(id)));
        mock_cart_repo
            .expect_save()
            .times(1)
            .withf(|cart| cart.items.len() == 1 && cart.items[0].quantity == 2)
            .returning(|_| Ok(()));

        let mut mock_product_repo = MockProductRepo::new();
        mock_product_repo
            .expect_get_by_id()
            .returning(|_| Ok(make_product("p1", true)));

        let use_case = AddCartItemUseCaseImpl {
            repository: Arc::new(mock_cart_repo),
            product_repository: Arc::new(mock_product_repo),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(AddCartItemParams {
                cart_id: Uuid::new_v4(),
                product_id: ProductId::from_repository("p1"),
                quantity: 2,
            })
            .await
            .unwrap();

        assert_eq!(cart.items[0].mrp, 120.0);
    }

    #[tokio::test]
    async fn should_reject_hidden_product() {
        let mock_cart_repo = MockCartRepo::new();
        let mut mock_product_repo = MockProductRepo::new();
        mock_product_repo
            .expect_get_by_id()
            .returning(|_| Ok(make_product("p1", false)));

        let use_case = AddCartItemUseCaseImpl {
            repository: Arc::new(mock_cart_repo),
            product_repository: Arc::new(mock_product_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddCartItemParams {
                cart_id: Uuid::new_v4(),
                product_id: ProductId::from_repository("p1"),
                quantity: 1,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::ProductNotFound));
    }

    #[tokio::test]
    async fn should_reject_unknown_product() {
        let mock_cart_repo = MockCartRepo::new();
        let mut mock_product_repo = MockProductRepo::new();
        mock_product_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = AddCartItemUseCaseImpl {
            repository: Arc::new(mock_cart_repo),
            product_repository: Arc::new(mock_product_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddCartItemParams {
                cart_id: Uuid::new_v4(),
                product_id: ProductId::from_repository("ghost"),
                quantity: 1,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::ProductNotFound));
    }

    #[tokio::test]
    async fn should_merge_quantities_for_existing_line() {
        let product = make_product("p1", true);
        let existing_line = CartItem::from_product(&product, 2);
        let mut mock_cart_repo = MockCartRepo::new();
        mock_cart_repo.expect_get().returning(move |id| {
            Ok(Cart::from_repository(id, vec![existing_line.clone()]))
        });
        mock_cart_repo
            .expect_save()
            .withf(|cart| cart.items.len() == 1 && cart.items[0].quantity == 5)
            .returning(|_| Ok(()));

        let mut mock_product_repo = MockProductRepo::new();
        mock_product_repo
            .expect_get_by_id()
            .returning(|_| Ok(make_product("p1", true)));

        let use_case = AddCartItemUseCaseImpl {
            repository: Arc::new(mock_cart_repo),
            product_repository: Arc::new(mock_product_repo),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(AddCartItemParams {
                cart_id: Uuid::new_v4(),
                product_id: ProductId::from_repository("p1"),
                quantity: 3,
            })
            .await
            .unwrap();

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 5);
    }
}
