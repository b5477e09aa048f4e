use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::services::{OrderHandoffService, generate_order_number};
use crate::domain::cart::use_cases::checkout::{CheckoutParams, CheckoutSummary, CheckoutUseCase};
use crate::domain::logger::Logger;

pub struct CheckoutUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub handoff: Arc<dyn OrderHandoffService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CheckoutUseCase for CheckoutUseCaseImpl {
    async fn execute(&self, params: CheckoutParams) -> Result<CheckoutSummary, CartError> {
        let cart = self.repository.get(params.cart_id).await?;
        if cart.is_empty() {
            return Err(CartError::Empty);
        }

        let order_number = generate_order_number();
        let handoff = self.handoff.build(&cart, &order_number);
        let total = cart.total();

        // The cart is cleared optimistically: the hand-off already happened
        // from the customer's point of view, so a failed clear must not
        // fail the checkout.
        if let Err(e) = self.repository.delete(params.cart_id).await {
            self.logger.warn(&format!(
                "Failed to clear cart {} after checkout: {}",
                params.cart_id, e
            ));
        }

        self.logger.info(&format!(
            "Order {} handed off ({} lines, total {:.2})",
            order_number,
            cart.items.len(),
            total
        ));

        Ok(CheckoutSummary {
            order_number,
            total,
            message: handoff.message,
            link: handoff.link,
        })
    }
}
