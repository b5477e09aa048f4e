use async_trait::async_trait;

use crate::domain::enquiry::errors::EnquiryError;
use crate::domain::product::value_objects::ProductId;

pub struct ProductEnquiryLinkParams {
    pub product_id: ProductId,
}

/// WhatsApp deep link pre-filled with an enquiry about one product.
/// Hidden products resolve to `ProductNotFound`.
#[async_trait]
pub trait ProductEnquiryLinkUseCase: Send + Sync {
    async fn execute(&self, params: ProductEnquiryLinkParams) -> Result<String, EnquiryError>;
}
