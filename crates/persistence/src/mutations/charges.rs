// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Charge catalog mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use facilitydesk_domain::Charge;
use tracing::info;

use crate::data_models::{ChargePatch, encode_optional_timestamp};
use crate::diesel_schema::charges;
use crate::error::PersistenceError;

/// Column changes for a charge update. `None` fields are skipped.
#[derive(AsChangeset)]
#[diesel(table_name = charges)]
struct ChargeChangeset {
    category: Option<String>,
    description: Option<String>,
    avg_charge_cents: Option<i64>,
    last_updated: Option<Option<String>>,
}

/// Inserts a charge under its caller-supplied code.
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the code is taken, or
/// another error if the insert fails.
pub fn insert_charge(conn: &mut SqliteConnection, charge: &Charge) -> Result<(), PersistenceError> {
    info!(charge_id = %charge.charge_id, "Creating charge");

    diesel::insert_into(charges::table)
        .values((
            charges::charge_id.eq(&charge.charge_id),
            charges::category.eq(&charge.category),
            charges::description.eq(&charge.description),
            charges::avg_charge_cents.eq(charge.avg_charge.cents()),
            charges::last_updated.eq(encode_optional_timestamp(charge.last_updated)?),
        ))
        .execute(conn)?;

    Ok(())
}

/// Applies a sparse update to a charge.
///
/// The patch must not be empty.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no charge has this code.
pub fn update_charge(
    conn: &mut SqliteConnection,
    charge_id: &str,
    patch: &ChargePatch,
) -> Result<(), PersistenceError> {
    info!(charge_id, "Updating charge");

    let changeset: ChargeChangeset = ChargeChangeset {
        category: patch.category.clone(),
        description: patch.description.clone(),
        avg_charge_cents: patch.avg_charge.map(facilitydesk_domain::Money::cents),
        last_updated: patch
            .last_updated
            .map(encode_optional_timestamp)
            .transpose()?,
    };

    let rows_affected: usize = diesel::update(charges::table)
        .filter(charges::charge_id.eq(charge_id))
        .set(changeset)
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Charge with code {charge_id} not found"
        )));
    }

    Ok(())
}

/// Deletes a charge.
///
/// Invoices that already bill this code keep their copied lines.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no charge has this code.
pub fn delete_charge(conn: &mut SqliteConnection, charge_id: &str) -> Result<(), PersistenceError> {
    info!(charge_id, "Deleting charge");

    let rows_affected: usize = diesel::delete(charges::table)
        .filter(charges::charge_id.eq(charge_id))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Charge with code {charge_id} not found"
        )));
    }

    Ok(())
}
