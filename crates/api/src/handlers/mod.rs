// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Entity repositories.
//!
//! Each handler validates raw caller input, checks cross-entity references,
//! writes through the persistence layer, and returns a normalized `*Info`
//! response. Every failure is an [`ApiError`].

pub mod charges;
pub mod companies;
pub mod invoices;
pub mod job_requests;
pub mod users;
pub mod work_orders;

use facilitydesk_domain::{DomainError, RecordId, identifier};

use crate::error::{ApiError, translate_domain_error};

/// Maps a validator result into the API error space.
fn validated<T>(result: Result<T, DomainError>) -> Result<T, ApiError> {
    result.map_err(translate_domain_error)
}

/// Parses a caller-supplied id.
fn parse_id(value: &str, field: &str) -> Result<RecordId, ApiError> {
    validated(identifier(value, field))
}

/// Error for an update request that names no recognized field.
fn empty_update(resource_type: &str) -> ApiError {
    ApiError::InvalidInput {
        field: String::from("update"),
        message: format!("No fields provided to update the {resource_type}"),
    }
}
