use async_trait::async_trait;

use crate::domain::enquiry::errors::EnquiryError;

pub struct SubmitEnquiryParams {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: String,
    pub product_id: Option<String>,
}

#[async_trait]
pub trait SubmitEnquiryUseCase: Send + Sync {
    async fn execute(&self, params: SubmitEnquiryParams) -> Result<(), EnquiryError>;
}
