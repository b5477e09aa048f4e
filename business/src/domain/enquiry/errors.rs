#[derive(Debug, thiserror::Error)]
pub enum EnquiryError {
    #[error("enquiry.name_empty")]
    NameEmpty,
    #[error("enquiry.message_empty")]
    MessageEmpty,
    #[error("enquiry.contact_missing")]
    ContactMissing,
    #[error("enquiry.email_invalid")]
    EmailInvalid,
    #[error("enquiry.product_not_found")]
    ProductNotFound,
    #[error("enquiry.relay_failed")]
    RelayFailed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
