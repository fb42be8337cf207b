// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Charge catalog.
//!
//! Charges are keyed by a caller-assigned code. Writes require an admin.

use facilitydesk_domain::{Charge, date, money, non_empty_string};
use facilitydesk_persistence::{ChargePatch, Persistence, PersistenceError};
use tracing::{info, warn};

use super::{empty_update, validated};
use crate::auth::{AuthenticatedPrincipal, AuthorizationService};
use crate::error::{ApiError, translate_persistence_error};
use crate::request_response::{ChargeInfo, CreateChargeRequest, UpdateChargeRequest};

const RESOURCE: &str = "Charge";

fn store_error(err: PersistenceError) -> ApiError {
    translate_persistence_error(RESOURCE, err)
}

/// Loads a charge by code.
///
/// # Errors
///
/// Returns `ResourceNotFound` if no charge has the code.
pub fn load_charge(persistence: &mut Persistence, charge_id: &str) -> Result<Charge, ApiError> {
    let code: String = validated(non_empty_string(charge_id, "_id"))?;
    persistence
        .get_charge(&code)
        .map_err(store_error)?
        .ok_or_else(|| ApiError::not_found(RESOURCE, &code))
}

/// Adds a charge to the catalog.
///
/// # Errors
///
/// Returns an error if:
/// - The principal is not an admin
/// - Any field fails validation
/// - A charge with the same code already exists
pub fn create_charge(
    persistence: &mut Persistence,
    principal: &AuthenticatedPrincipal,
    request: &CreateChargeRequest,
) -> Result<ChargeInfo, ApiError> {
    AuthorizationService::authorize_manage_charges(principal)?;

    let charge: Charge = Charge {
        charge_id: validated(non_empty_string(&request.charge_id, "_id"))?,
        category: validated(non_empty_string(&request.category, "category"))?,
        description: validated(non_empty_string(&request.description, "description"))?,
        avg_charge: validated(money(request.avg_charge, "avgCharge"))?,
        last_updated: validated(date(request.last_updated.as_deref(), "lastUpdated"))?,
    };

    if persistence
        .get_charge(&charge.charge_id)
        .map_err(store_error)?
        .is_some()
    {
        warn!(charge_id = %charge.charge_id, "Rejected duplicate charge code");
        return Err(ApiError::Conflict {
            resource_type: String::from(RESOURCE),
            message: format!("Charge '{}' already exists", charge.charge_id),
        });
    }

    persistence.create_charge(&charge).map_err(store_error)?;
    info!(charge_id = %charge.charge_id, "Charge created");
    ChargeInfo::from_charge(charge)
}

/// Retrieves a charge by code.
///
/// # Errors
///
/// Returns an error if no charge has the code.
pub fn get_charge(persistence: &mut Persistence, charge_id: &str) -> Result<ChargeInfo, ApiError> {
    ChargeInfo::from_charge(load_charge(persistence, charge_id)?)
}

/// Lists charges, optionally only those in one category.
///
/// # Errors
///
/// Returns an error if the category is blank.
pub fn list_charges(
    persistence: &mut Persistence,
    category: Option<&str>,
) -> Result<Vec<ChargeInfo>, ApiError> {
    let category: Option<String> = category
        .map(|value| validated(non_empty_string(value, "category")))
        .transpose()?;
    persistence
        .list_charges(category.as_deref())
        .map_err(store_error)?
        .into_iter()
        .map(ChargeInfo::from_charge)
        .collect()
}

/// Applies a partial update to a charge and returns the result.
///
/// # Errors
///
/// Returns an error if:
/// - The principal is not an admin
/// - Any supplied field fails validation
/// - No field was supplied
/// - No charge has the code
pub fn update_charge(
    persistence: &mut Persistence,
    principal: &AuthenticatedPrincipal,
    charge_id: &str,
    request: &UpdateChargeRequest,
) -> Result<ChargeInfo, ApiError> {
    AuthorizationService::authorize_manage_charges(principal)?;
    let code: String = validated(non_empty_string(charge_id, "_id"))?;

    let patch: ChargePatch = ChargePatch {
        category: request
            .category
            .as_deref()
            .map(|value| validated(non_empty_string(value, "category")))
            .transpose()?,
        description: request
            .description
            .as_deref()
            .map(|value| validated(non_empty_string(value, "description")))
            .transpose()?,
        avg_charge: request
            .avg_charge
            .map(|value| validated(money(value, "avgCharge")))
            .transpose()?,
        last_updated: request
            .last_updated
            .as_ref()
            .map(|value| validated(date(value.as_deref(), "lastUpdated")))
            .transpose()?,
    };
    if patch.is_empty() {
        return Err(empty_update("charge"));
    }

    persistence.update_charge(&code, &patch).map_err(store_error)?;
    info!(charge_id = %code, "Charge updated");
    get_charge(persistence, &code)
}

/// Removes a charge and returns it as it was.
///
/// Invoices that already bill the charge keep their copied line data.
///
/// # Errors
///
/// Returns an error if the principal is not an admin or no charge has
/// the code.
pub fn delete_charge(
    persistence: &mut Persistence,
    principal: &AuthenticatedPrincipal,
    charge_id: &str,
) -> Result<ChargeInfo, ApiError> {
    AuthorizationService::authorize_manage_charges(principal)?;
    let existing: Charge = load_charge(persistence, charge_id)?;
    persistence
        .delete_charge(&existing.charge_id)
        .map_err(store_error)?;
    info!(charge_id = %existing.charge_id, "Charge removed");
    ChargeInfo::from_charge(existing)
}
