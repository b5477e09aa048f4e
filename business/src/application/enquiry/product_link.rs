use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::enquiry::errors::EnquiryError;
use crate::domain::enquiry::services::EnquiryLinkService;
use crate::domain::enquiry::use_cases::product_link::{
    ProductEnquiryLinkParams, ProductEnquiryLinkUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct ProductEnquiryLinkUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub links: Arc<dyn EnquiryLinkService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ProductEnquiryLinkUseCase for ProductEnquiryLinkUseCaseImpl {
    async fn execute(&self, params: ProductEnquiryLinkParams) -> Result<String, EnquiryError> {
        let product = self
            .repository
            .get_by_id(&params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => EnquiryError::ProductNotFound,
                other => EnquiryError::Repository(other),
            })?;
        if !product.visible {
            return Err(EnquiryError::ProductNotFound);
        }

        self.logger
            .debug(&format!("Built enquiry link for: {}", product.id));
        Ok(self.links.product_link(&product))
    }
}
