// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.
//!
//! Every repository operation fails with an [`ApiError`]. Callers branch on
//! [`ApiError::kind`] rather than on message text.

use crate::credential_policy::CredentialPolicyError;
use facilitydesk_domain::DomainError;
use facilitydesk_persistence::PersistenceError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// The category of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or missing input. Safe to show the field-level message.
    Validation,
    /// A referenced id or name has no matching record.
    NotFound,
    /// A uniqueness rule was violated.
    Conflict,
    /// A reference exists but fails a business rule.
    Referential,
    /// Credentials were rejected.
    Authentication,
    /// The principal lacks the role for the action.
    Authorization,
    /// The store failed.
    Internal,
}

/// API-level errors.
///
/// These are distinct from domain and persistence errors and represent the
/// API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the principal does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A record with the same unique key already exists.
    Conflict {
        /// The type of resource that collided.
        resource_type: String,
        /// A human-readable description of the collision.
        message: String,
    },
    /// A referenced record exists but may not be used this way.
    ReferentialViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::AuthenticationFailed { .. } => ErrorKind::Authentication,
            Self::Unauthorized { .. } => ErrorKind::Authorization,
            Self::InvalidInput { .. } => ErrorKind::Validation,
            Self::ResourceNotFound { .. } => ErrorKind::NotFound,
            Self::Conflict { .. } => ErrorKind::Conflict,
            Self::ReferentialViolation { .. } => ErrorKind::Referential,
            Self::Internal { .. } => ErrorKind::Internal,
        }
    }

    /// Builds a not-found error for a resource looked up by id or name.
    #[must_use]
    pub fn not_found(resource_type: &str, key: &str) -> Self {
        Self::ResourceNotFound {
            resource_type: resource_type.to_string(),
            message: format!("{resource_type} '{key}' does not exist"),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Conflict {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} conflict: {message}")
            }
            Self::ReferentialViolation { rule, message } => {
                write!(f, "Referential rule violation ({rule}): {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

impl From<CredentialPolicyError> for ApiError {
    fn from(err: CredentialPolicyError) -> Self {
        Self::InvalidInput {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// Every domain error is a validation failure on one field.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    ApiError::InvalidInput {
        field: err.field().to_string(),
        message: err.to_string(),
    }
}

/// Translates a persistence error into an API error.
///
/// # Arguments
///
/// * `resource_type` - The kind of record the failed operation touched
/// * `err` - The persistence error
#[must_use]
pub fn translate_persistence_error(resource_type: &str, err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::NotFound(message) => ApiError::ResourceNotFound {
            resource_type: resource_type.to_string(),
            message,
        },
        PersistenceError::UniqueViolation(message) => ApiError::Conflict {
            resource_type: resource_type.to_string(),
            message,
        },
        other => ApiError::Internal {
            message: format!("{resource_type} store operation failed: {other}"),
        },
    }
}
