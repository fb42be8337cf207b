// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Credential policy for contractor signup.
//!
//! Field-level password rules live in the domain validators; this module
//! adds the signup-only checks around them.

use facilitydesk_domain::{DomainError, login_email, password};
use thiserror::Error;

/// Credential policy errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialPolicyError {
    /// The email is not a valid address.
    #[error("{0}")]
    InvalidEmail(String),

    /// The password breaks a password rule.
    #[error("{0}")]
    InvalidPassword(String),

    /// Password and confirmation do not match.
    #[error("Password and confirmation do not match")]
    ConfirmationMismatch,
}

impl CredentialPolicyError {
    /// Returns the name of the rejected field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidEmail(_) => "email",
            Self::InvalidPassword(_) => "password",
            Self::ConfirmationMismatch => "confirmPassword",
        }
    }
}

/// Credentials that passed the policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedCredentials {
    /// Lowercase login email.
    pub email: String,
    /// Trimmed password, not yet hashed.
    pub password: String,
}

/// Validates signup credentials.
///
/// # Errors
///
/// Returns a `CredentialPolicyError` if the email is malformed, the
/// password breaks a rule, or the confirmation differs.
pub fn check_credentials(
    email: &str,
    raw_password: &str,
    confirmation: Option<&str>,
) -> Result<AcceptedCredentials, CredentialPolicyError> {
    let email: String = login_email(email)
        .map_err(|e: DomainError| CredentialPolicyError::InvalidEmail(e.to_string()))?;
    let accepted: String = password(raw_password)
        .map_err(|e: DomainError| CredentialPolicyError::InvalidPassword(e.to_string()))?;

    if let Some(confirmation) = confirmation
        && confirmation.trim() != accepted
    {
        return Err(CredentialPolicyError::ConfirmationMismatch);
    }

    Ok(AcceptedCredentials {
        email,
        password: accepted,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_credentials_are_normalized() {
        let accepted: AcceptedCredentials =
            check_credentials("  Sam@Example.COM ", " hunter22 ", Some("hunter22")).unwrap();
        assert_eq!(accepted.email, "sam@example.com");
        assert_eq!(accepted.password, "hunter22");
    }

    #[test]
    fn test_short_password_is_rejected() {
        let result: Result<AcceptedCredentials, CredentialPolicyError> =
            check_credentials("sam@example.com", "short", None);
        assert!(matches!(result, Err(CredentialPolicyError::InvalidPassword(_))));
    }

    #[test]
    fn test_password_with_inner_space_is_rejected() {
        let result: Result<AcceptedCredentials, CredentialPolicyError> =
            check_credentials("sam@example.com", "hunter 22 abc", None);
        assert!(matches!(result, Err(CredentialPolicyError::InvalidPassword(_))));
    }

    #[test]
    fn test_confirmation_mismatch() {
        let result: Result<AcceptedCredentials, CredentialPolicyError> =
            check_credentials("sam@example.com", "hunter22", Some("hunter23"));
        assert_eq!(result, Err(CredentialPolicyError::ConfirmationMismatch));
        assert_eq!(
            CredentialPolicyError::ConfirmationMismatch.field(),
            "confirmPassword"
        );
    }

    #[test]
    fn test_bad_email_is_rejected() {
        let result: Result<AcceptedCredentials, CredentialPolicyError> =
            check_credentials("not-an-email", "hunter22", None);
        assert!(matches!(result, Err(CredentialPolicyError::InvalidEmail(_))));
    }
}
