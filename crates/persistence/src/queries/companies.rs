// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Company queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use facilitydesk_domain::{Company, PrimaryContact};
use tracing::debug;

use crate::data_models::{decode_record_id, decode_zip_code};
use crate::diesel_schema::companies;
use crate::error::PersistenceError;

/// Diesel Queryable struct for company rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = companies)]
struct CompanyRow {
    company_id: i64,
    company_name: String,
    website: String,
    address: String,
    city: String,
    state: String,
    zip_code: i64,
    contact_name: String,
    contact_email: String,
    contact_phone: String,
    contact_title: String,
    is_active: i32,
}

impl CompanyRow {
    fn into_company(self) -> Result<Company, PersistenceError> {
        Ok(Company {
            company_id: Some(decode_record_id(self.company_id)?),
            company_name: self.company_name,
            website: self.website,
            address: self.address,
            city: self.city,
            state: self.state,
            zip_code: decode_zip_code(self.zip_code)?,
            primary_contact: PrimaryContact {
                name: self.contact_name,
                email: self.contact_email,
                phone: self.contact_phone,
                title: self.contact_title,
            },
            is_active: self.is_active != 0,
        })
    }
}

/// Retrieves a company by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the company is not found.
pub fn get_company_by_id(
    conn: &mut SqliteConnection,
    company_id: i64,
) -> Result<Option<Company>, PersistenceError> {
    debug!(company_id, "Looking up company by ID");

    let result: Result<CompanyRow, diesel::result::Error> = companies::table
        .filter(companies::company_id.eq(company_id))
        .select(CompanyRow::as_select())
        .first(conn);

    match result {
        Ok(row) => row.into_company().map(Some),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Retrieves a company by its exact, case-sensitive name.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the company is not found.
pub fn get_company_by_name(
    conn: &mut SqliteConnection,
    company_name: &str,
) -> Result<Option<Company>, PersistenceError> {
    debug!(company_name, "Looking up company by name");

    let result: Result<CompanyRow, diesel::result::Error> = companies::table
        .filter(companies::company_name.eq(company_name))
        .select(CompanyRow::as_select())
        .first(conn);

    match result {
        Ok(row) => row.into_company().map(Some),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists all companies ordered by name.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_companies(conn: &mut SqliteConnection) -> Result<Vec<Company>, PersistenceError> {
    let rows: Vec<CompanyRow> = companies::table
        .order(companies::company_name.asc())
        .select(CompanyRow::as_select())
        .load(conn)?;

    rows.into_iter().map(CompanyRow::into_company).collect()
}
