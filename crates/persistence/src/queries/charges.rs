// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Charge catalog queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use facilitydesk_domain::Charge;
use tracing::debug;

use crate::data_models::{decode_money, decode_optional_timestamp};
use crate::diesel_schema::charges;
use crate::error::PersistenceError;

/// Diesel Queryable struct for charge rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = charges)]
struct ChargeRow {
    charge_id: String,
    category: String,
    description: String,
    avg_charge_cents: i64,
    last_updated: Option<String>,
}

impl ChargeRow {
    fn into_charge(self) -> Result<Charge, PersistenceError> {
        Ok(Charge {
            charge_id: self.charge_id,
            category: self.category,
            description: self.description,
            avg_charge: decode_money(self.avg_charge_cents)?,
            last_updated: decode_optional_timestamp(self.last_updated.as_deref())?,
        })
    }
}

/// Retrieves a charge by its code.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the charge is not found.
pub fn get_charge(
    conn: &mut SqliteConnection,
    charge_id: &str,
) -> Result<Option<Charge>, PersistenceError> {
    debug!(charge_id, "Looking up charge");

    let result: Result<ChargeRow, diesel::result::Error> = charges::table
        .filter(charges::charge_id.eq(charge_id))
        .select(ChargeRow::as_select())
        .first(conn);

    match result {
        Ok(row) => row.into_charge().map(Some),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists charges ordered by code, optionally restricted to one category.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_charges(
    conn: &mut SqliteConnection,
    category: Option<&str>,
) -> Result<Vec<Charge>, PersistenceError> {
    let mut query = charges::table
        .order(charges::charge_id.asc())
        .select(ChargeRow::as_select())
        .into_boxed();

    if let Some(category) = category {
        query = query.filter(charges::category.eq(category.to_string()));
    }

    let rows: Vec<ChargeRow> = query.load(conn)?;
    rows.into_iter().map(ChargeRow::into_charge).collect()
}
