//! Password-change validation policy.
//!
//! # Responsibility
//! - Enforce the password rules for the update-password flow.
//! - Report every violated rule, not just the first, so forms can show
//!   per-field feedback.
//!
//! # Invariants
//! - A request that passes validation has a non-blank current password, a
//!   compliant new password differing from the current one, and a matching
//!   confirmation.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static UPPERCASE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z]").expect("valid uppercase regex"));
static LOWERCASE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z]").expect("valid lowercase regex"));
static DIGIT_OR_SYMBOL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]|[^A-Za-z0-9]").expect("valid digit-or-symbol regex"));

/// Minimum length of a new password, in characters.
pub const MIN_NEW_PASSWORD_CHARS: usize = 8;

/// A password-change request as submitted by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
    pub confirm_new_password: String,
}

/// Form field a violation is reported against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordField {
    Current,
    New,
    Confirm,
}

/// One violated password rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRuleViolation {
    CurrentRequired,
    NewRequired,
    NewTooShort { min_chars: usize },
    NewMissingUppercase,
    NewMissingLowercase,
    NewMissingDigitOrSymbol,
    NewMatchesCurrent,
    ConfirmMismatch,
}

impl PasswordRuleViolation {
    /// Field the violation should be surfaced on.
    pub fn field(&self) -> PasswordField {
        match self {
            Self::CurrentRequired => PasswordField::Current,
            Self::ConfirmMismatch => PasswordField::Confirm,
            _ => PasswordField::New,
        }
    }
}

impl Display for PasswordRuleViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CurrentRequired => write!(f, "current password is required"),
            Self::NewRequired => write!(f, "new password is required"),
            Self::NewTooShort { min_chars } => {
                write!(f, "new password must be at least {min_chars} characters long")
            }
            Self::NewMissingUppercase => {
                write!(f, "new password must include at least one uppercase letter")
            }
            Self::NewMissingLowercase => {
                write!(f, "new password must include at least one lowercase letter")
            }
            Self::NewMissingDigitOrSymbol => write!(
                f,
                "new password must include at least one number or special character"
            ),
            Self::NewMatchesCurrent => {
                write!(f, "new password must not be the same as the old password")
            }
            Self::ConfirmMismatch => write!(f, "confirmation must match the new password"),
        }
    }
}

impl Error for PasswordRuleViolation {}

/// Validates a password-change request against the full rule set.
///
/// Returns every violated rule; an empty result is impossible (`Err` always
/// carries at least one violation).
pub fn validate_password_change(
    change: &PasswordChange,
) -> Result<(), Vec<PasswordRuleViolation>> {
    let mut violations = Vec::new();

    if change.current_password.is_empty() {
        violations.push(PasswordRuleViolation::CurrentRequired);
    }

    if change.new_password.is_empty() {
        violations.push(PasswordRuleViolation::NewRequired);
    } else {
        if change.new_password.chars().count() < MIN_NEW_PASSWORD_CHARS {
            violations.push(PasswordRuleViolation::NewTooShort {
                min_chars: MIN_NEW_PASSWORD_CHARS,
            });
        }
        if !UPPERCASE_RE.is_match(&change.new_password) {
            violations.push(PasswordRuleViolation::NewMissingUppercase);
        }
        if !LOWERCASE_RE.is_match(&change.new_password) {
            violations.push(PasswordRuleViolation::NewMissingLowercase);
        }
        if !DIGIT_OR_SYMBOL_RE.is_match(&change.new_password) {
            violations.push(PasswordRuleViolation::NewMissingDigitOrSymbol);
        }
        if change.new_password == change.current_password {
            violations.push(PasswordRuleViolation::NewMatchesCurrent);
        }
    }

    if change.confirm_new_password != change.new_password {
        violations.push(PasswordRuleViolation::ConfirmMismatch);
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
