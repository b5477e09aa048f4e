use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use business::domain::enquiry::errors::EnquiryError;
use business::domain::enquiry::model::Enquiry;
use business::domain::enquiry::services::EnquiryRelayService;

use crate::client::FormRelayClient;

/// The relay's acknowledgement. Anything that does not decode into this
/// shape, or decodes with `success: false`, counts as a failed relay.
#[derive(Debug, Deserialize)]
struct RelayResponse {
    success: bool,
    #[allow(dead_code)]
    message: Option<String>,
}

pub struct EnquiryRelayFormRelay {
    client: FormRelayClient,
}

impl EnquiryRelayFormRelay {
    pub fn new(client: FormRelayClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EnquiryRelayService for EnquiryRelayFormRelay {
    async fn relay(&self, enquiry: &Enquiry) -> Result<(), EnquiryError> {
        let body = json!({
            "access_key": self.client.access_key,
            "subject": match &enquiry.product_id {
                Some(id) => format!("Product enquiry: {id}"),
                None => "General enquiry".to_string(),
            },
            "name": enquiry.name,
            "email": enquiry.email,
            "phone": enquiry.phone,
            "message": enquiry.message,
        });

        let response = self
            .client
            .client
            .post(self.client.submit_url())
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|_| EnquiryError::RelayFailed)?;

        if !response.status().is_success() {
            return Err(EnquiryError::RelayFailed);
        }

        let ack: RelayResponse = response
            .json()
            .await
            .map_err(|_| EnquiryError::RelayFailed)?;

        if !ack.success {
            return Err(EnquiryError::RelayFailed);
        }

        Ok(())
    }
}
