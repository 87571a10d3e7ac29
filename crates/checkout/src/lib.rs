//! Checkout domain module.
//!
//! A small state machine (Idle → Processing → Completed → Idle) driven by the
//! cart's emptiness check and an injectable asynchronous settlement step.

pub mod flow;
pub mod settlement;

pub use flow::{CheckoutError, CheckoutFlow, CheckoutState};
pub use settlement::{
    SettlementError, SettlementGateway, SettlementReceipt, SettlementRequest, SimulatedGateway,
};
