use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use greencart_cart::Cart;

use crate::settlement::{SettlementGateway, SettlementReceipt, SettlementRequest};

/// Checkout lifecycle.
///
/// `Completed` is transient, not terminal: the flow passes through it while
/// clearing the cart and always relaxes back to `Idle`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutState {
    #[default]
    Idle,
    Processing,
    Completed,
}

/// Reported (non-fatal) checkout conditions. Each surfaces to the user as a
/// notice with an acknowledge/retry action; none crashes anything.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// `begin` on an empty cart.
    #[error("your cart is empty, add some products before checking out")]
    EmptyCart,

    /// `begin` while a checkout is already in flight (double-submission).
    #[error("a checkout is already being processed")]
    AlreadyProcessing,

    /// `settle` without a preceding `begin`.
    #[error("no checkout in progress")]
    NotProcessing,

    /// The gateway reported a failure; the cart is untouched.
    #[error("settlement failed: {0}")]
    SettlementFailed(String),
}

/// The checkout state machine.
///
/// One flow per cart session. There is deliberately no cancellation path out
/// of `Processing`: the only exits are settlement success and settlement
/// failure.
#[derive(Debug, Clone, Default)]
pub struct CheckoutFlow {
    state: CheckoutState,
}

impl CheckoutFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CheckoutState {
        self.state
    }

    pub fn is_processing(&self) -> bool {
        self.state == CheckoutState::Processing
    }

    /// Start a checkout over the cart's current contents.
    ///
    /// Refused (not crashed) when the cart is empty or a checkout is already
    /// in flight. On success the flow is `Processing` and the returned
    /// snapshot is what will be settled.
    pub fn begin(&mut self, cart: &Cart) -> Result<SettlementRequest, CheckoutError> {
        match self.state {
            CheckoutState::Processing => {
                warn!("checkout rejected: already processing");
                return Err(CheckoutError::AlreadyProcessing);
            }
            CheckoutState::Idle | CheckoutState::Completed => {}
        }

        if cart.is_empty() {
            warn!("checkout rejected: cart is empty");
            return Err(CheckoutError::EmptyCart);
        }

        let request = SettlementRequest::from_cart(cart);
        self.state = CheckoutState::Processing;
        info!(
            item_count = request.item_count,
            subtotal = %request.subtotal,
            "checkout started"
        );
        Ok(request)
    }

    /// Drive the settlement step.
    ///
    /// On gateway success the flow enters `Completed`, clears the cart, then
    /// relaxes to `Idle` and hands back the receipt. On gateway failure the
    /// flow returns to `Idle` with the cart untouched so the user can retry.
    pub async fn settle(
        &mut self,
        cart: &mut Cart,
        request: &SettlementRequest,
        gateway: &dyn SettlementGateway,
    ) -> Result<SettlementReceipt, CheckoutError> {
        if self.state != CheckoutState::Processing {
            return Err(CheckoutError::NotProcessing);
        }

        match gateway.settle(request).await {
            Ok(receipt) => {
                self.state = CheckoutState::Completed;
                cart.clear();
                self.state = CheckoutState::Idle;
                info!(
                    confirmation = %receipt.confirmation,
                    total = %receipt.total,
                    "checkout completed"
                );
                Ok(receipt)
            }
            Err(err) => {
                self.state = CheckoutState::Idle;
                warn!(error = %err, "settlement failed");
                Err(CheckoutError::SettlementFailed(err.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use greencart_catalog::Product;
    use greencart_core::{Money, ProductId};

    use crate::settlement::{SettlementError, SimulatedGateway};

    fn product(id: u64, dollars: u64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Money::from_dollars(dollars),
            image: String::new(),
            category: "Electronics".to_string(),
            description: String::new(),
        }
    }

    fn loaded_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_or_set_quantity(&product(1, 299), 2);
        cart.add_or_set_quantity(&product(2, 89), 1);
        cart
    }

    struct DecliningGateway;

    #[async_trait]
    impl SettlementGateway for DecliningGateway {
        async fn settle(
            &self,
            _request: &SettlementRequest,
        ) -> Result<SettlementReceipt, SettlementError> {
            Err(SettlementError::Declined("insufficient funds".to_string()))
        }
    }

    #[test]
    fn begin_on_empty_cart_is_rejected_at_idle() {
        let cart = Cart::new();
        let mut flow = CheckoutFlow::new();

        let err = flow.begin(&cart).unwrap_err();
        assert_eq!(err, CheckoutError::EmptyCart);
        assert_eq!(flow.state(), CheckoutState::Idle);
    }

    #[test]
    fn begin_while_processing_is_rejected() {
        let cart = loaded_cart();
        let mut flow = CheckoutFlow::new();

        flow.begin(&cart).unwrap();
        assert!(flow.is_processing());

        let err = flow.begin(&cart).unwrap_err();
        assert_eq!(err, CheckoutError::AlreadyProcessing);
        assert_eq!(flow.state(), CheckoutState::Processing);
    }

    #[test]
    fn begin_snapshots_the_cart() {
        let cart = loaded_cart();
        let mut flow = CheckoutFlow::new();

        let request = flow.begin(&cart).unwrap();
        assert_eq!(request.subtotal, Money::from_cents(68700));
        assert_eq!(request.item_count, 3);
        assert_eq!(request.lines.len(), 2);
    }

    #[tokio::test]
    async fn settlement_completes_clears_cart_and_relaxes_to_idle() {
        let mut cart = loaded_cart();
        let mut flow = CheckoutFlow::new();
        let gateway = SimulatedGateway::instant();

        let request = flow.begin(&cart).unwrap();
        assert_eq!(flow.state(), CheckoutState::Processing);

        let receipt = flow.settle(&mut cart, &request, &gateway).await.unwrap();
        assert_eq!(receipt.total, Money::from_cents(68700));
        assert!(cart.is_empty());
        assert_eq!(flow.state(), CheckoutState::Idle);

        // The relaxed flow accepts a new session.
        cart.add_or_set_quantity(&product(4, 199), 1);
        assert!(flow.begin(&cart).is_ok());
    }

    #[tokio::test]
    async fn settlement_failure_returns_to_idle_with_cart_untouched() {
        let mut cart = loaded_cart();
        let mut flow = CheckoutFlow::new();

        let request = flow.begin(&cart).unwrap();
        let err = flow
            .settle(&mut cart, &request, &DecliningGateway)
            .await
            .unwrap_err();

        assert!(matches!(err, CheckoutError::SettlementFailed(_)));
        assert_eq!(flow.state(), CheckoutState::Idle);
        assert_eq!(cart.item_count(), 3);
    }

    #[tokio::test]
    async fn settle_without_begin_is_rejected() {
        let mut cart = loaded_cart();
        let mut flow = CheckoutFlow::new();
        let request = SettlementRequest::from_cart(&cart);

        let err = flow
            .settle(&mut cart, &request, &SimulatedGateway::instant())
            .await
            .unwrap_err();
        assert_eq!(err, CheckoutError::NotProcessing);
    }
}
