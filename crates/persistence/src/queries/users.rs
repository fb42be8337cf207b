// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User and credential queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use facilitydesk_domain::{Role, User};
use tracing::debug;

use crate::data_models::{AuthRecordData, decode_enum, decode_record_id};
use crate::diesel_schema::{user_auth, users};
use crate::error::PersistenceError;

/// Diesel Queryable struct for user rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = users)]
struct UserRow {
    user_id: i64,
    role: String,
    first_name: String,
    last_name: String,
    city: String,
    state: String,
    phone: String,
    skills_json: String,
}

impl UserRow {
    fn into_user(self) -> Result<User, PersistenceError> {
        Ok(User {
            user_id: Some(decode_record_id(self.user_id)?),
            role: decode_enum(&self.role)?,
            first_name: self.first_name,
            last_name: self.last_name,
            city: self.city,
            state: self.state,
            phone: self.phone,
            skills: serde_json::from_str(&self.skills_json)?,
        })
    }
}

/// Diesel Queryable struct for credential rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = user_auth)]
struct AuthRow {
    user_id: i64,
    email: String,
    password_hash: String,
}

/// Retrieves a user by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the user is not found.
pub fn get_user_by_id(
    conn: &mut SqliteConnection,
    user_id: i64,
) -> Result<Option<User>, PersistenceError> {
    debug!(user_id, "Looking up user by ID");

    let result: Result<UserRow, diesel::result::Error> = users::table
        .filter(users::user_id.eq(user_id))
        .select(UserRow::as_select())
        .first(conn);

    match result {
        Ok(row) => row.into_user().map(Some),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists users, optionally restricted to one role, ordered by last then first name.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_users(
    conn: &mut SqliteConnection,
    role: Option<Role>,
) -> Result<Vec<User>, PersistenceError> {
    let mut query = users::table
        .order((users::last_name.asc(), users::first_name.asc()))
        .select(UserRow::as_select())
        .into_boxed();

    if let Some(role) = role {
        query = query.filter(users::role.eq(role.as_str()));
    }

    let rows: Vec<UserRow> = query.load(conn)?;
    rows.into_iter().map(UserRow::into_user).collect()
}

/// Retrieves the credentials stored under a login email.
///
/// The email must already be normalized to lowercase.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no credentials use this email.
pub fn get_auth_by_email(
    conn: &mut SqliteConnection,
    email: &str,
) -> Result<Option<AuthRecordData>, PersistenceError> {
    debug!(email, "Looking up credentials by email");

    let result: Result<AuthRow, diesel::result::Error> = user_auth::table
        .filter(user_auth::email.eq(email))
        .select(AuthRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(AuthRecordData {
            user_id: decode_record_id(row.user_id)?,
            email: row.email,
            password_hash: row.password_hash,
        })),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
