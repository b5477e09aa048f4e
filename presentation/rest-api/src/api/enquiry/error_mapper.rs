use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::enquiry::errors::EnquiryError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for EnquiryError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            EnquiryError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "enquiry.name_empty",
            ),
            EnquiryError::MessageEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "enquiry.message_empty",
            ),
            EnquiryError::ContactMissing => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "enquiry.contact_missing",
            ),
            EnquiryError::EmailInvalid => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "enquiry.email_invalid",
            ),
            EnquiryError::ProductNotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "enquiry.product_not_found",
            ),
            EnquiryError::RelayFailed => (
                StatusCode::BAD_GATEWAY,
                "RelayError",
                "enquiry.relay_failed",
            ),
            EnquiryError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
