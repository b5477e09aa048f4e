use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;

use super::entity::CartItemEntity;

pub struct CartRepositoryPostgres {
    pool: PgPool,
}

impl CartRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryPostgres {
    async fn get(&self, cart_id: Uuid) -> Result<Cart, RepositoryError> {
        let entities = sqlx::query_as::<_, CartItemEntity>(
            "SELECT cart_id, product_id, brand_name, company, mrp, quantity, image_url FROM cart_items WHERE cart_id = $1 ORDER BY added_at ASC",
        )
        .bind(cart_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(Cart::from_repository(
            cart_id,
            entities.into_iter().map(|e| e.into_domain()).collect(),
        ))
    }

    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError> {
        // Replace-all write. The delete and the inserts are separate
        // statements; the hosted service's row-level behavior is all the
        // coordination there is.
        sqlx::query("DELETE FROM cart_items WHERE cart_id = $1")
            .bind(cart.id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        for item in &cart.items {
            sqlx::query(
                r#"INSERT INTO cart_items (cart_id, product_id, brand_name, company, mrp, quantity, image_url, added_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, NOW())"#,
            )
            .bind(cart.id)
            .bind(item.product_id.as_str())
            .bind(&item.brand_name)
            .bind(&item.company)
            .bind(item.mrp)
            .bind(i32::try_from(item.quantity).unwrap_or(i32::MAX))
            .bind(&item.image_url)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;
        }

        Ok(())
    }

    async fn delete(&self, cart_id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM cart_items WHERE cart_id = $1")
            .bind(cart_id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
