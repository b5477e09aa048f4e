use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductId;

use super::entity::ProductEntity;

const PRODUCT_COLUMNS: &str = "id, brand_name, salt_name, company, packing, mrp, category, in_stock, visible, new_arrival, image_url, created_at, updated_at";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_write_error(e: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db) = &e
        && db.is_unique_violation()
    {
        return RepositoryError::Duplicated;
    }
    RepositoryError::DatabaseError
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY created_at DESC",
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_visible(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE visible = TRUE ORDER BY brand_name ASC",
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1",
        ))
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn insert(&self, product: &Product) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO products (id, brand_name, salt_name, company, packing, mrp, category, in_stock, visible, new_arrival, image_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)"#,
        )
        .bind(product.id.as_str())
        .bind(&product.brand_name)
        .bind(&product.salt_name)
        .bind(&product.company)
        .bind(&product.packing)
        .bind(product.mrp)
        .bind(&product.category)
        .bind(product.in_stock)
        .bind(product.visible)
        .bind(product.new_arrival)
        .bind(&product.image_url)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"UPDATE products SET
                brand_name = $2,
                salt_name = $3,
                company = $4,
                packing = $5,
                mrp = $6,
                category = $7,
                in_stock = $8,
                visible = $9,
                new_arrival = $10,
                image_url = $11,
                updated_at = $12
            WHERE id = $1"#,
        )
        .bind(product.id.as_str())
        .bind(&product.brand_name)
        .bind(&product.salt_name)
        .bind(&product.company)
        .bind(&product.packing)
        .bind(product.mrp)
        .bind(&product.category)
        .bind(product.in_stock)
        .bind(product.visible)
        .bind(product.new_arrival)
        .bind(&product.image_url)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn set_visibility(&self, id: &ProductId, visible: bool) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE products SET visible = $2, updated_at = NOW() WHERE id = $1")
            .bind(id.as_str())
            .bind(visible)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn set_new_arrival(
        &self,
        id: &ProductId,
        new_arrival: bool,
    ) -> Result<(), RepositoryError> {
        let result =
            sqlx::query("UPDATE products SET new_arrival = $2, updated_at = NOW() WHERE id = $1")
                .bind(id.as_str())
                .bind(new_arrival)
                .execute(&self.pool)
                .await
                .map_err(|_| RepositoryError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
