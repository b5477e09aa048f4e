use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Cart;

#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Loads the cart for the given id; unknown ids yield an empty cart.
    async fn get(&self, cart_id: Uuid) -> Result<Cart, RepositoryError>;
    /// Persists the cart as-is, replacing whatever was stored before.
    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
    async fn delete(&self, cart_id: Uuid) -> Result<(), RepositoryError>;
}
