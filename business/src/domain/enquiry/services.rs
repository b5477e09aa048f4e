use async_trait::async_trait;

use crate::domain::product::model::Product;

use super::errors::EnquiryError;
use super::model::Enquiry;

/// Service port for handing an enquiry to the third-party form-relay
/// service. Nothing is stored on success or failure.
#[async_trait]
pub trait EnquiryRelayService: Send + Sync {
    async fn relay(&self, enquiry: &Enquiry) -> Result<(), EnquiryError>;
}

/// Service port for building a messaging deep link pre-filled with a
/// product enquiry.
pub trait EnquiryLinkService: Send + Sync {
    fn product_link(&self, product: &Product) -> String;
}
