use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::product::value_objects::ProductId;

use super::errors::EnquiryError;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid"));

/// A contact request. Ephemeral: relayed to the form service or encoded
/// into a messaging link, never stored by this system.
#[derive(Debug, Clone)]
pub struct Enquiry {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: String,
    pub product_id: Option<ProductId>,
}

pub struct NewEnquiryProps {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: String,
    pub product_id: Option<ProductId>,
}

impl Enquiry {
    pub fn new(props: NewEnquiryProps) -> Result<Self, EnquiryError> {
        if props.name.trim().is_empty() {
            return Err(EnquiryError::NameEmpty);
        }
        if props.message.trim().is_empty() {
            return Err(EnquiryError::MessageEmpty);
        }
        if props.email.is_none() && props.phone.is_none() {
            return Err(EnquiryError::ContactMissing);
        }
        if let Some(email) = &props.email
            && !EMAIL_PATTERN.is_match(email)
        {
            return Err(EnquiryError::EmailInvalid);
        }

        Ok(Self {
            name: props.name,
            email: props.email,
            phone: props.phone,
            message: props.message,
            product_id: props.product_id,
        })
    }
}
