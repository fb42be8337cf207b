// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
///
/// Every variant names the field that was rejected so the caller can
/// surface a field-level message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required string was empty or whitespace only.
    EmptyField {
        /// The field that was empty.
        field: String,
    },
    /// A list that must contain at least one entry was empty.
    EmptyList {
        /// The field that was empty.
        field: String,
    },
    /// An identifier could not be parsed as a store id.
    InvalidIdentifier {
        /// The field holding the identifier.
        field: String,
        /// The rejected value.
        value: String,
    },
    /// A US state code was not two letters.
    InvalidUsState(String),
    /// A zip code was neither five digits nor a non-negative integer.
    InvalidZipCode(String),
    /// A phone number did not match `000-000-0000`.
    InvalidPhone {
        /// The field holding the phone number.
        field: String,
        /// The rejected value.
        value: String,
    },
    /// An email address did not match `local@domain.tld`.
    InvalidEmail {
        /// The field holding the email address.
        field: String,
        /// The rejected value.
        value: String,
    },
    /// A priority was not one of low, medium, high.
    InvalidPriority(String),
    /// A job request status was not recognized.
    InvalidJobRequestStatus(String),
    /// A work order status was not recognized.
    InvalidWorkOrderStatus(String),
    /// An invoice status was not recognized.
    InvalidInvoiceStatus(String),
    /// A user role was not recognized.
    InvalidRole(String),
    /// A monetary amount was negative, non-finite, or out of range.
    InvalidMoney {
        /// The field holding the amount.
        field: String,
        /// Why the amount was rejected.
        reason: String,
    },
    /// A value that must be a positive integer was not.
    InvalidPositiveInteger {
        /// The field holding the value.
        field: String,
        /// The rejected value, rendered for display.
        value: String,
    },
    /// A date could not be parsed.
    InvalidDate {
        /// The field holding the date.
        field: String,
        /// The rejected value.
        value: String,
    },
    /// A URL did not start with `http://` or `https://`.
    InvalidUrl {
        /// The field holding the URL.
        field: String,
        /// The rejected value.
        value: String,
    },
    /// A coordinate was not a number.
    InvalidCoordinate {
        /// The field holding the coordinate.
        field: String,
    },
    /// A person's name violated the naming rules.
    InvalidName {
        /// The field holding the name.
        field: String,
        /// Why the name was rejected.
        reason: String,
    },
    /// A city violated the naming rules.
    InvalidCity(String),
    /// A value that must be purely alphabetic was not.
    NotAlphabetic {
        /// The field holding the value.
        field: String,
        /// The rejected value.
        value: String,
    },
    /// A password did not satisfy the credential rules.
    InvalidPassword(String),
    /// Arithmetic on a monetary amount overflowed.
    AmountOverflow {
        /// The computation that overflowed.
        operation: String,
    },
}

impl DomainError {
    /// Returns the name of the field this error refers to.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::EmptyField { field }
            | Self::EmptyList { field }
            | Self::InvalidIdentifier { field, .. }
            | Self::InvalidPhone { field, .. }
            | Self::InvalidEmail { field, .. }
            | Self::InvalidMoney { field, .. }
            | Self::InvalidPositiveInteger { field, .. }
            | Self::InvalidDate { field, .. }
            | Self::InvalidUrl { field, .. }
            | Self::InvalidCoordinate { field }
            | Self::InvalidName { field, .. }
            | Self::NotAlphabetic { field, .. } => field,
            Self::InvalidUsState(_) => "state",
            Self::InvalidZipCode(_) => "zipCode",
            Self::InvalidPriority(_) => "priority",
            Self::InvalidJobRequestStatus(_)
            | Self::InvalidWorkOrderStatus(_)
            | Self::InvalidInvoiceStatus(_) => "status",
            Self::InvalidRole(_) => "role",
            Self::InvalidCity(_) => "city",
            Self::InvalidPassword(_) => "password",
            Self::AmountOverflow { .. } => "total",
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { field } => write!(f, "{field} cannot be empty"),
            Self::EmptyList { field } => write!(f, "{field} must contain at least one entry"),
            Self::InvalidIdentifier { field, value } => {
                write!(f, "{field} is not a valid id: '{value}'")
            }
            Self::InvalidUsState(value) => {
                write!(f, "state must be 2 letters, got '{value}'")
            }
            Self::InvalidZipCode(value) => {
                write!(
                    f,
                    "zipCode must be 5 digits or a non-negative integer, got '{value}'"
                )
            }
            Self::InvalidPhone { field, value } => {
                write!(f, "{field} must be in 000-000-0000 format, got '{value}'")
            }
            Self::InvalidEmail { field, value } => {
                write!(f, "{field} is not a valid email address: '{value}'")
            }
            Self::InvalidPriority(value) => {
                write!(f, "priority must be low, medium, or high, got '{value}'")
            }
            Self::InvalidJobRequestStatus(value) => {
                write!(
                    f,
                    "status must be one of: pending, approved, rejected, cancelled, got '{value}'"
                )
            }
            Self::InvalidWorkOrderStatus(value) => {
                write!(
                    f,
                    "status must be one of: open, assigned, in progress, completed, cancelled, not started, got '{value}'"
                )
            }
            Self::InvalidInvoiceStatus(value) => {
                write!(
                    f,
                    "invoice status must be one of: draft, issued, paid, cancelled, got '{value}'"
                )
            }
            Self::InvalidRole(value) => {
                write!(f, "role must be admin or contractor, got '{value}'")
            }
            Self::InvalidMoney { field, reason } => {
                write!(f, "{field} must be a non-negative number: {reason}")
            }
            Self::InvalidPositiveInteger { field, value } => {
                write!(f, "{field} must be a positive integer, got {value}")
            }
            Self::InvalidDate { field, value } => {
                write!(f, "{field} is not a valid date: '{value}'")
            }
            Self::InvalidUrl { field, value } => {
                write!(
                    f,
                    "{field} must start with http:// or https://, got '{value}'"
                )
            }
            Self::InvalidCoordinate { field } => write!(f, "{field} must be a number"),
            Self::InvalidName { field, reason } => write!(f, "{field} {reason}"),
            Self::InvalidCity(reason) => write!(f, "city {reason}"),
            Self::NotAlphabetic { field, value } => {
                write!(
                    f,
                    "{field} must contain only alphabetic characters, got '{value}'"
                )
            }
            Self::InvalidPassword(reason) => write!(f, "password {reason}"),
            Self::AmountOverflow { operation } => {
                write!(f, "Amount overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
