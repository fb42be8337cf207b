// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Company mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use facilitydesk_domain::Company;
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::companies;
use crate::error::PersistenceError;

/// Inserts a company and returns its new ID.
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the name is taken, or
/// another error if the insert fails.
pub fn insert_company(
    conn: &mut SqliteConnection,
    company: &Company,
) -> Result<i64, PersistenceError> {
    info!(company_name = %company.company_name, "Creating company");

    diesel::insert_into(companies::table)
        .values((
            companies::company_name.eq(&company.company_name),
            companies::website.eq(&company.website),
            companies::address.eq(&company.address),
            companies::city.eq(&company.city),
            companies::state.eq(&company.state),
            companies::zip_code.eq(i64::from(company.zip_code)),
            companies::contact_name.eq(&company.primary_contact.name),
            companies::contact_email.eq(&company.primary_contact.email),
            companies::contact_phone.eq(&company.primary_contact.phone),
            companies::contact_title.eq(&company.primary_contact.title),
            companies::is_active.eq(i32::from(company.is_active)),
        ))
        .execute(conn)?;

    let company_id: i64 = conn.get_last_insert_rowid()?;
    info!(company_id, "Company created");

    Ok(company_id)
}

/// Sets a company's active flag.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no company has this ID.
pub fn set_company_active(
    conn: &mut SqliteConnection,
    company_id: i64,
    is_active: bool,
) -> Result<(), PersistenceError> {
    info!(company_id, is_active, "Setting company active flag");

    let rows_affected: usize = diesel::update(companies::table)
        .filter(companies::company_id.eq(company_id))
        .set(companies::is_active.eq(i32::from(is_active)))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Company with ID {company_id} not found"
        )));
    }

    Ok(())
}
