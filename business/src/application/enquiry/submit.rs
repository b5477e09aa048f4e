use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::enquiry::errors::EnquiryError;
use crate::domain::enquiry::model::{Enquiry, NewEnquiryProps};
use crate::domain::enquiry::services::EnquiryRelayService;
use crate::domain::enquiry::use_cases::submit::{SubmitEnquiryParams, SubmitEnquiryUseCase};
use crate::domain::logger::Logger;
use crate::domain::product::value_objects::ProductId;

pub struct SubmitEnquiryUseCaseImpl {
    pub relay: Arc<dyn EnquiryRelayService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SubmitEnquiryUseCase for SubmitEnquiryUseCaseImpl {
    async fn execute(&self, params: SubmitEnquiryParams) -> Result<(), EnquiryError> {
        let product_id = params
            .product_id
            .map(|id| ProductId::new(id).map_err(|_| EnquiryError::ProductNotFound))
            .transpose()?;

        let enquiry = Enquiry::new(NewEnquiryProps {
            name: params.name,
            email: params.email,
            phone: params.phone,
            message: params.message,
            product_id,
        })?;

        self.logger
            .info(&format!("Relaying enquiry from: {}", enquiry.name));
        self.relay.relay(&enquiry).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        pub Relay {}

        #[async_trait]
        impl EnquiryRelayService for Relay {
            async fn relay(&self, enquiry: &Enquiry) -> Result<(), EnquiryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn params() -> SubmitEnquiryParams {
        SubmitEnquiryParams {
            name: "Asha".to_string(),
            email: Some("asha@example.com".to_string()),
            phone: None,
            message: "Do you stock nebulizer masks?".to_string(),
            product_id: None,
        }
    }

    #[tokio::test]
    async fn should_relay_valid_enquiry() {
        let mut mock_relay = MockRelay::new();
        mock_relay.expect_relay().times(1).returning(|_| Ok(()));

        let use_case = SubmitEnquiryUseCaseImpl {
            relay: Arc::new(mock_relay),
            logger: mock_logger(),
        };

        assert!(use_case.execute(params()).await.is_ok());
    }

    #[tokio::test]
    async fn should_not_relay_invalid_enquiry() {
        let mut mock_relay = MockRelay::new();
        mock_relay.expect_relay().never();

        let use_case = SubmitEnquiryUseCaseImpl {
            relay: Arc::new(mock_relay),
            logger: mock_logger(),
        };

        let mut p = params();
        p.message = String::new();

        let result = use_case.execute(p).await;

        assert!(matches!(result.unwrap_err(), EnquiryError::MessageEmpty));
    }

    #[tokio::test]
    async fn should_propagate_relay_failure() {
        let mut mock_relay = MockRelay::new();
        mock_relay
            .expect_relay()
            .returning(|_| Err(EnquiryError::RelayFailed));

        let use_case = SubmitEnquiryUseCaseImpl {
            relay: Arc::new(mock_relay),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(result.unwrap_err(), EnquiryError::RelayFailed));
    }

    #[tokio::test]
    async fn should_reject_malformed_product_reference() {
        let mock_relay = MockRelay::new();

        let use_case = SubmitEnquiryUseCaseImpl {
            relay: Arc::new(mock_relay),
            logger: mock_logger(),
        };

        let mut p = params();
        p.product_id = Some("Not A Product".to_string());

        let result = use_case.execute(p).await;

        assert!(matches!(result.unwrap_err(), EnquiryError::ProductNotFound));
    }
}
