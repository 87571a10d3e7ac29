//! Cart domain module.
//!
//! Sole owner of the authoritative list of line items; all quantity and total
//! arithmetic flows through here so every view observes consistent numbers.
//! Out-of-range quantities are clamped rather than rejected, and removal of
//! the last unit of a line goes through an explicit two-phase confirmation.

pub mod cart;
pub mod line;

pub use cart::{Cart, DecrementOutcome, RemovalRequest};
pub use line::{CartLine, MAX_QUANTITY, MIN_QUANTITY};
