//! Settlement boundary.
//!
//! Settlement is the external step that finalizes a checkout — in production
//! it would be a payment-gateway call. The flow depends on the capability but
//! does not implement it; there is no cancellation once settlement starts.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::time::Duration;
use uuid::Uuid;

use greencart_cart::{Cart, CartLine};
use greencart_core::Money;

/// Immutable snapshot of the cart handed to the gateway.
///
/// Taken when checkout begins, so concurrent-looking UI edits (there are
/// none; the cart is single-owner) can never change what gets charged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementRequest {
    pub lines: Vec<CartLine>,
    pub subtotal: Money,
    pub item_count: u32,
}

impl SettlementRequest {
    pub fn from_cart(cart: &Cart) -> Self {
        Self {
            lines: cart.lines().to_vec(),
            subtotal: cart.subtotal(),
            item_count: cart.item_count(),
        }
    }
}

/// Proof of a settled checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementReceipt {
    /// Opaque confirmation identifier.
    pub confirmation: Uuid,
    pub total: Money,
    pub settled_at: DateTime<Utc>,
}

/// Settlement failure, reported back to the user as a notice.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettlementError {
    #[error("payment was declined: {0}")]
    Declined(String),

    #[error("settlement transport failed: {0}")]
    Transport(String),
}

/// The asynchronous payment-capture capability.
#[async_trait]
pub trait SettlementGateway: Send + Sync {
    async fn settle(
        &self,
        request: &SettlementRequest,
    ) -> Result<SettlementReceipt, SettlementError>;
}

/// Gateway that waits a fixed delay and then succeeds.
///
/// Stands in for a real payment provider; the delay is injectable so tests
/// run at zero.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    delay: Duration,
}

impl SimulatedGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// No delay at all, for tests.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        // Long enough to see the processing state in the demo.
        Self::new(Duration::from_secs(2))
    }
}

#[async_trait]
impl SettlementGateway for SimulatedGateway {
    async fn settle(
        &self,
        request: &SettlementRequest,
    ) -> Result<SettlementReceipt, SettlementError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        Ok(SettlementReceipt {
            confirmation: Uuid::now_v7(),
            total: request.subtotal,
            settled_at: Utc::now(),
        })
    }
}
