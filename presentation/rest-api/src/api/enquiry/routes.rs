use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::enquiry::use_cases::submit::{SubmitEnquiryParams, SubmitEnquiryUseCase};

use crate::api::enquiry::dto::{EnquiryAcceptedResponse, SubmitEnquiryRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct EnquiryApi {
    submit_use_case: Arc<dyn SubmitEnquiryUseCase>,
}

impl EnquiryApi {
    pub fn new(submit_use_case: Arc<dyn SubmitEnquiryUseCase>) -> Self {
        Self { submit_use_case }
    }
}

/// Enquiry API
///
/// Validates contact requests and relays them to the form service.
#[OpenApi]
impl EnquiryApi {
    /// Submit an enquiry
    ///
    /// Relays the enquiry to the third-party form service. Nothing is
    /// stored here; a relay failure surfaces as 502.
    #[oai(path = "/enquiries", method = "post", tag = "ApiTags::Enquiries")]
    async fn submit(&self, body: Json<SubmitEnquiryRequest>) -> SubmitEnquiryResponse {
        let params = SubmitEnquiryParams {
            name: body.0.name,
            email: body.0.email,
            phone: body.0.phone,
            message: body.0.message,
            product_id: body.0.product_id,
        };

        match self.submit_use_case.execute(params).await {
            Ok(()) => SubmitEnquiryResponse::Accepted(Json(EnquiryAcceptedResponse {
                status: "accepted".to_string(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SubmitEnquiryResponse::BadRequest(json),
                    404 => SubmitEnquiryResponse::NotFound(json),
                    502 => SubmitEnquiryResponse::BadGateway(json),
                    _ => SubmitEnquiryResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SubmitEnquiryResponse {
    #[oai(status = 202)]
    Accepted(Json<EnquiryAcceptedResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
