use poem_openapi::Object;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct SubmitEnquiryRequest {
    /// Sender name (cannot be empty)
    pub name: String,
    /// Contact email; at least one of email/phone is required
    #[oai(skip_serializing_if_is_none)]
    pub email: Option<String>,
    /// Contact phone; at least one of email/phone is required
    #[oai(skip_serializing_if_is_none)]
    pub phone: Option<String>,
    /// Free-text message (cannot be empty)
    pub message: String,
    /// Optional product the enquiry is about
    #[oai(skip_serializing_if_is_none)]
    pub product_id: Option<String>,
}

/// Acknowledgement only; enquiries are relayed, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct EnquiryAcceptedResponse {
    pub status: String,
}
