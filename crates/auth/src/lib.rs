//! `greencart-auth` — authentication boundary and form validation.
//!
//! This crate is intentionally decoupled from any UI: the session object is
//! passed explicitly into whatever needs it (no ambient context), and the
//! credential check lives behind the [`AuthSource`] trait.

pub mod http;
pub mod session;
pub mod source;
pub mod validation;

pub use http::HttpAuthSource;
pub use session::AuthSession;
pub use source::{AuthError, AuthSource, AuthToken, Credentials, MockAuthSource};
pub use validation::{
    LoginForm, PasswordStrength, RegistrationForm, ValidationError, password_strength,
    validate_login, validate_registration,
};
