use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::value_objects::ProductId;

pub struct VisibilityChange {
    pub id: ProductId,
    pub visible: bool,
}

pub struct UpdateVisibilityParams {
    pub changes: Vec<VisibilityChange>,
}

/// Batch visibility toggle with the same partial-application contract as
/// bulk delete: every row is attempted, first failure wins.
#[async_trait]
pub trait UpdateVisibilityUseCase: Send + Sync {
    async fn execute(&self, params: UpdateVisibilityParams) -> Result<(), ProductError>;
}
