// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field validators.
//!
//! Every validator takes a raw caller-supplied value plus the name of the
//! field it came from, and returns either the normalized value or a
//! [`DomainError`] naming that field. Validators are pure.

use crate::error::DomainError;
use crate::money::{Money, TaxRate};
use crate::types::{
    InvoiceStatus, JobRequestStatus, Priority, RecordId, Role, WorkOrderComment, WorkOrderStatus,
    ZipCodeInput,
};
use num_traits::ToPrimitive;
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Compiles one of the fixed patterns below.
#[allow(clippy::expect_used)]
fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("validation pattern should compile")
}

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?i)^https?://.+"));
static PERSON_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[A-Za-z\s-]+$"));
static CITY_PATTERN: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[A-Za-z\s.]+$"));

/// Exactly five ASCII digits.
fn is_zip_code(value: &str) -> bool {
    value.len() == 5 && value.bytes().all(|b| b.is_ascii_digit())
}

/// `NNN-NNN-NNNN`.
fn is_phone_number(value: &str) -> bool {
    value.len() == 12
        && value.bytes().enumerate().all(|(index, b)| match index {
            3 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

const PERSON_NAME_MIN_LEN: usize = 2;
const PERSON_NAME_MAX_LEN: usize = 50;
const PASSWORD_MIN_LEN: usize = 8;

/// Trims a required string.
///
/// # Arguments
///
/// * `value` - The raw value
/// * `field` - The field name used in error messages
///
/// # Returns
///
/// * `Ok(String)` holding the trimmed value
/// * `Err(DomainError::EmptyField)` if nothing remains after trimming
///
/// # Errors
///
/// Returns an error if the value is empty or whitespace only.
pub fn non_empty_string(value: &str, field: &str) -> Result<String, DomainError> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyField {
            field: field.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// Trims an optional string, mapping an absent or blank value to `""`.
#[must_use]
pub fn optional_string(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

/// Parses a store identifier.
///
/// # Errors
///
/// Returns `DomainError::EmptyField` for a blank value and
/// `DomainError::InvalidIdentifier` for anything that is not a positive
/// integer.
pub fn identifier(value: &str, field: &str) -> Result<RecordId, DomainError> {
    let trimmed: String = non_empty_string(value, field)?;
    RecordId::from_str(&trimmed).map_err(|_| DomainError::InvalidIdentifier {
        field: field.to_string(),
        value: trimmed,
    })
}

/// Validates a two-letter US state code and uppercases it.
///
/// # Errors
///
/// Returns an error unless the trimmed value is exactly two ASCII letters.
pub fn us_state(value: &str) -> Result<String, DomainError> {
    let trimmed: String = non_empty_string(value, "state")?;
    if trimmed.len() != 2 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(DomainError::InvalidUsState(trimmed));
    }
    Ok(trimmed.to_ascii_uppercase())
}

/// Validates a zip code.
///
/// Text must be exactly five digits. Numbers must be non-negative integers
/// that fit in 32 bits.
///
/// # Errors
///
/// Returns `DomainError::InvalidZipCode` for anything else.
pub fn zip_code(value: &ZipCodeInput) -> Result<u32, DomainError> {
    match value {
        ZipCodeInput::Text(text) => {
            let trimmed: String = non_empty_string(text, "zipCode")?;
            if !is_zip_code(&trimmed) {
                return Err(DomainError::InvalidZipCode(trimmed));
            }
            trimmed
                .parse::<u32>()
                .map_err(|_| DomainError::InvalidZipCode(trimmed.clone()))
        }
        ZipCodeInput::Number(number) => {
            if !number.is_finite() || number.fract() != 0.0 || *number < 0.0 {
                return Err(DomainError::InvalidZipCode(number.to_string()));
            }
            number
                .to_u32()
                .ok_or_else(|| DomainError::InvalidZipCode(number.to_string()))
        }
    }
}

/// Validates a phone number in `000-000-0000` form.
///
/// # Errors
///
/// Returns an error if the trimmed value is empty or not in that form.
pub fn phone(value: &str, field: &str) -> Result<String, DomainError> {
    let trimmed: String = non_empty_string(value, field)?;
    if !is_phone_number(&trimmed) {
        return Err(DomainError::InvalidPhone {
            field: field.to_string(),
            value: trimmed,
        });
    }
    Ok(trimmed)
}

/// Validates an email address of the form `local@domain.tld`.
///
/// Case is preserved. Use [`login_email`] for credential lookups.
///
/// # Errors
///
/// Returns an error if the trimmed value is empty or not an address.
pub fn email(value: &str, field: &str) -> Result<String, DomainError> {
    let trimmed: String = non_empty_string(value, field)?;
    if !EMAIL_PATTERN.is_match(&trimmed) {
        return Err(DomainError::InvalidEmail {
            field: field.to_string(),
            value: trimmed,
        });
    }
    Ok(trimmed)
}

/// Validates and lowercases an email address used as a login name.
///
/// # Errors
///
/// Returns an error under the same conditions as [`email`].
pub fn login_email(value: &str) -> Result<String, DomainError> {
    email(value, "email").map(|address| address.to_lowercase())
}

/// Parses a priority, ignoring case.
///
/// # Errors
///
/// Returns an error unless the value is low, medium, or high.
pub fn priority(value: &str) -> Result<Priority, DomainError> {
    let trimmed: String = non_empty_string(value, "priority")?;
    Priority::from_str(&trimmed)
}

/// Parses an optional job request status.
///
/// An absent value stays absent so callers can apply their own default.
///
/// # Errors
///
/// Returns an error if a value is present but not a known status.
pub fn job_request_status(value: Option<&str>) -> Result<Option<JobRequestStatus>, DomainError> {
    value
        .map(|raw| {
            let trimmed: String = non_empty_string(raw, "status")?;
            JobRequestStatus::from_str(&trimmed)
        })
        .transpose()
}

/// Parses a work order status, ignoring case and treating hyphens as spaces.
///
/// # Errors
///
/// Returns an error if the value is blank or not a known status.
pub fn work_order_status(value: &str) -> Result<WorkOrderStatus, DomainError> {
    let trimmed: String = non_empty_string(value, "status")?;
    WorkOrderStatus::from_str(&trimmed)
}

/// Parses an invoice status, defaulting to draft when absent.
///
/// # Errors
///
/// Returns an error if a value is present but not a known status.
pub fn invoice_status(value: Option<&str>) -> Result<InvoiceStatus, DomainError> {
    match value {
        None => Ok(InvoiceStatus::default()),
        Some(raw) => {
            let trimmed: String = non_empty_string(raw, "status")?;
            InvoiceStatus::from_str(&trimmed)
        }
    }
}

/// Validates a non-negative amount and rounds it to cents.
///
/// # Errors
///
/// Returns an error if the value is negative, non-finite, or too large.
pub fn money(value: f64, field: &str) -> Result<Money, DomainError> {
    Money::from_amount(value, field)
}

/// Validates a tax rate.
///
/// # Errors
///
/// Returns an error under the same conditions as [`money`].
pub fn tax_rate(value: f64) -> Result<TaxRate, DomainError> {
    TaxRate::from_rate(value, "taxRate")
}

/// Validates a whole number greater than zero.
///
/// # Errors
///
/// Returns an error if the value has a fractional part, is not positive,
/// or does not fit in 32 bits.
pub fn positive_integer(value: f64, field: &str) -> Result<u32, DomainError> {
    let invalid = || DomainError::InvalidPositiveInteger {
        field: field.to_string(),
        value: value.to_string(),
    };

    if !value.is_finite() || value.fract() != 0.0 || value <= 0.0 {
        return Err(invalid());
    }
    value.to_u32().ok_or_else(invalid)
}

/// Parses an optional date.
///
/// Accepts an RFC 3339 timestamp or a `YYYY-MM-DD` calendar date, which is
/// taken as midnight UTC. An absent value passes through as `None`.
///
/// # Errors
///
/// Returns `DomainError::InvalidDate` if a present value parses as neither.
pub fn date(value: Option<&str>, field: &str) -> Result<Option<OffsetDateTime>, DomainError> {
    let Some(raw) = value else {
        return Ok(None);
    };
    let trimmed: &str = raw.trim();

    if let Ok(timestamp) = OffsetDateTime::parse(trimmed, &Rfc3339) {
        return Ok(Some(timestamp));
    }

    Date::parse(trimmed, format_description!("[year]-[month]-[day]"))
        .map(|day| Some(day.midnight().assume_utc()))
        .map_err(|_| DomainError::InvalidDate {
            field: field.to_string(),
            value: raw.to_string(),
        })
}

/// Validates a work order comment.
///
/// The comment text is required. An absent or empty id or author name
/// becomes `None`; one that is present but blank is rejected.
///
/// # Errors
///
/// Returns `DomainError::EmptyField` naming the offending part.
pub fn comment_shape(
    comment_id: Option<&str>,
    author_name: Option<&str>,
    text: &str,
    field: &str,
) -> Result<WorkOrderComment, DomainError> {
    let optional_part = |value: Option<&str>, part: &str| -> Result<Option<String>, DomainError> {
        match value {
            None | Some("") => Ok(None),
            Some(raw) => non_empty_string(raw, &format!("{field}.{part}")).map(Some),
        }
    };

    Ok(WorkOrderComment {
        comment_id: optional_part(comment_id, "_id")?,
        author_name: optional_part(author_name, "name")?,
        text: non_empty_string(text, &format!("{field}.comment"))?,
    })
}

/// Validates an optional attachment URL.
///
/// # Errors
///
/// Returns `DomainError::InvalidUrl` unless a present, non-blank value
/// starts with `http://` or `https://`.
pub fn attachment_url(value: Option<&str>) -> Result<Option<String>, DomainError> {
    let Some(trimmed) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    if !URL_PATTERN.is_match(trimmed) {
        return Err(DomainError::InvalidUrl {
            field: String::from("attachmentUrl"),
            value: trimmed.to_string(),
        });
    }
    Ok(Some(trimmed.to_string()))
}

/// Validates an optional latitude or longitude.
///
/// # Errors
///
/// Returns `DomainError::InvalidCoordinate` if the value is not a number.
pub fn coordinate(value: Option<f64>, field: &str) -> Result<Option<f64>, DomainError> {
    match value {
        Some(number) if !number.is_finite() => Err(DomainError::InvalidCoordinate {
            field: field.to_string(),
        }),
        other => Ok(other),
    }
}

/// Validates a first or last name.
///
/// Names contain only letters, spaces, and hyphens, include at least one
/// letter, and are 2 to 50 characters long.
///
/// # Errors
///
/// Returns `DomainError::InvalidName` describing the broken rule.
pub fn person_name(value: &str, field: &str) -> Result<String, DomainError> {
    let trimmed: String = non_empty_string(value, field)?;
    let invalid = |reason: &str| DomainError::InvalidName {
        field: field.to_string(),
        reason: reason.to_string(),
    };

    if !PERSON_NAME_PATTERN.is_match(&trimmed) {
        return Err(invalid(
            "must contain only letters, spaces, or hyphens",
        ));
    }
    if !trimmed.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(invalid("must contain at least one letter"));
    }
    let length: usize = trimmed.chars().count();
    if !(PERSON_NAME_MIN_LEN..=PERSON_NAME_MAX_LEN).contains(&length) {
        return Err(invalid("must be between 2 and 50 characters"));
    }
    Ok(trimmed)
}

/// Validates a city name: letters, spaces, and periods with at least one letter.
///
/// # Errors
///
/// Returns `DomainError::InvalidCity` describing the broken rule.
pub fn city_name(value: &str) -> Result<String, DomainError> {
    let trimmed: String = non_empty_string(value, "city")?;
    if !CITY_PATTERN.is_match(&trimmed) {
        return Err(DomainError::InvalidCity(String::from(
            "must contain only letters, spaces, or periods",
        )));
    }
    if !trimmed.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(DomainError::InvalidCity(String::from(
            "must contain at least one letter",
        )));
    }
    Ok(trimmed)
}

/// Validates a skill list and lowercases each entry.
///
/// # Errors
///
/// Returns an error if the list is empty or any entry is not purely
/// alphabetic.
pub fn skills(values: &[String]) -> Result<Vec<String>, DomainError> {
    if values.is_empty() {
        return Err(DomainError::EmptyList {
            field: String::from("skills"),
        });
    }

    values
        .iter()
        .map(|skill| {
            let trimmed: String = non_empty_string(skill, "skills")?;
            if !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(DomainError::NotAlphabetic {
                    field: String::from("skills"),
                    value: trimmed,
                });
            }
            Ok(trimmed.to_lowercase())
        })
        .collect()
}

/// Parses a user role, ignoring case.
///
/// # Errors
///
/// Returns an error unless the value is admin or contractor.
pub fn role(value: &str) -> Result<Role, DomainError> {
    let trimmed: String = non_empty_string(value, "role")?;
    Role::from_str(&trimmed)
}

/// Validates a password: at least eight characters and no whitespace.
///
/// # Errors
///
/// Returns `DomainError::InvalidPassword` describing the broken rule.
pub fn password(value: &str) -> Result<String, DomainError> {
    let trimmed: String = non_empty_string(value, "password")?;
    if trimmed.chars().count() < PASSWORD_MIN_LEN {
        return Err(DomainError::InvalidPassword(String::from(
            "must be at least 8 characters",
        )));
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidPassword(String::from(
            "cannot contain spaces",
        )));
    }
    Ok(trimmed)
}
