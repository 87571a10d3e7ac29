//! Domain error model.
//!
//! Deliberately small: cart mutations clamp/refuse instead of erroring, and
//! the checkout/auth/catalog crates carry their own error enums, so the only
//! shared domain failure is a malformed identifier.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_id_carries_its_message() {
        let err = DomainError::invalid_id("ProductId: bad digit");
        assert_eq!(err, DomainError::InvalidId("ProductId: bad digit".to_string()));
        assert_eq!(err.to_string(), "invalid identifier: ProductId: bad digit");
    }
}
