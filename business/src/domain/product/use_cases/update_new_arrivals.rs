use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::value_objects::ProductId;

pub struct NewArrivalChange {
    pub id: ProductId,
    pub new_arrival: bool,
}

pub struct UpdateNewArrivalsParams {
    pub changes: Vec<NewArrivalChange>,
}

#[async_trait]
pub trait UpdateNewArrivalsUseCase: Send + Sync {
    async fn execute(&self, params: UpdateNewArrivalsParams) -> Result<(), ProductError>;
}
