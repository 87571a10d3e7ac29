//! Form validation predicates.
//!
//! Pure, synchronous, first-failure-wins: for multi-violation input the user
//! sees exactly one message, determined by the check order below. The order
//! is part of the contract — do not reorder.

use thiserror::Error;

/// The single rule a form submission violated first.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("full name is required")]
    FullNameRequired,

    #[error("email is required")]
    EmailRequired,

    #[error("please enter a valid email address")]
    EmailInvalid,

    #[error("username is required")]
    UsernameRequired,

    #[error("username must be at least 3 characters")]
    UsernameTooShort,

    #[error("password is required")]
    PasswordRequired,

    #[error("password must be at least 6 characters")]
    PasswordTooShort,

    #[error("you must confirm your password")]
    ConfirmationRequired,

    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("you must accept the terms and conditions")]
    TermsNotAccepted,
}

/// Registration form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
}

/// Login form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Validate a registration submission, reporting the first violated rule.
pub fn validate_registration(form: &RegistrationForm) -> Result<(), ValidationError> {
    if form.full_name.trim().is_empty() {
        return Err(ValidationError::FullNameRequired);
    }

    if form.email.trim().is_empty() {
        return Err(ValidationError::EmailRequired);
    }

    if !is_valid_email(&form.email) {
        return Err(ValidationError::EmailInvalid);
    }

    if form.username.trim().is_empty() {
        return Err(ValidationError::UsernameRequired);
    }

    if form.username.chars().count() < 3 {
        return Err(ValidationError::UsernameTooShort);
    }

    if form.password.trim().is_empty() {
        return Err(ValidationError::PasswordRequired);
    }

    if form.password.chars().count() < 6 {
        return Err(ValidationError::PasswordTooShort);
    }

    if form.confirm_password.trim().is_empty() {
        return Err(ValidationError::ConfirmationRequired);
    }

    if form.password != form.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }

    if !form.accept_terms {
        return Err(ValidationError::TermsNotAccepted);
    }

    Ok(())
}

/// Validate a login submission (non-empty fields only; the credential check
/// itself belongs to the auth source).
pub fn validate_login(form: &LoginForm) -> Result<(), ValidationError> {
    if form.username.trim().is_empty() {
        return Err(ValidationError::UsernameRequired);
    }

    if form.password.trim().is_empty() {
        return Err(ValidationError::PasswordRequired);
    }

    Ok(())
}

/// `local@domain.tld` shape: no whitespace, exactly one `@` with a non-empty
/// local part, and a dot inside the domain with non-empty parts either side.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    domain
        .rfind('.')
        .is_some_and(|dot| dot > 0 && dot < domain.len() - 1)
}

/// Coarse password strength for the registration screen's meter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    Empty,
    VeryWeak,
    Weak,
    Good,
    Strong,
}

/// Length-threshold strength rating (0 / <4 / <6 / <8 / 8+).
pub fn password_strength(password: &str) -> PasswordStrength {
    match password.chars().count() {
        0 => PasswordStrength::Empty,
        1..=3 => PasswordStrength::VeryWeak,
        4..=5 => PasswordStrength::Weak,
        6..=7 => PasswordStrength::Good,
        _ => PasswordStrength::Strong,
    }
}
