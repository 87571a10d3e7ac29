//! `greencart-storefront` — session wiring for the demo binary.
//!
//! The GUI itself is out of scope; this crate owns the one-object-per-user
//! bundle the screens would share (cart + checkout flow + auth session) and
//! the convenience that drives a whole checkout.

pub mod session;

pub use session::StorefrontSession;
