//! Password strength rule for new accounts.

use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Why a password was refused. Checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PasswordIssue {
    #[error("password must be at least {MIN_PASSWORD_LEN} characters long")]
    TooShort,

    #[error("password must contain an uppercase letter")]
    NoUppercase,

    #[error("password must contain a special character")]
    NoSpecial,
}

pub fn check_password(password: &str) -> Result<(), PasswordIssue> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PasswordIssue::TooShort);
    }
    if !password.chars().any(char::is_uppercase) {
        return Err(PasswordIssue::NoUppercase);
    }
    if password.chars().all(char::is_alphanumeric) {
        return Err(PasswordIssue::NoSpecial);
    }
    Ok(())
}

pub fn valid_password(password: &str) -> bool {
    check_password(password).is_ok()
}
