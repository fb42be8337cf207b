// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User and credential mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use facilitydesk_domain::User;
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{user_auth, users};
use crate::error::PersistenceError;

/// Hashes a password with bcrypt.
///
/// # Errors
///
/// Returns an error if hashing fails.
pub fn hash_password(password: &str) -> Result<String, PersistenceError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| PersistenceError::Other(format!("Failed to hash password: {e}")))
}

/// Inserts a user and returns its new ID.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_user(conn: &mut SqliteConnection, user: &User) -> Result<i64, PersistenceError> {
    info!(role = %user.role, "Creating user");

    let skills_json: String = serde_json::to_string(&user.skills)?;

    diesel::insert_into(users::table)
        .values((
            users::role.eq(user.role.as_str()),
            users::first_name.eq(&user.first_name),
            users::last_name.eq(&user.last_name),
            users::city.eq(&user.city),
            users::state.eq(&user.state),
            users::phone.eq(&user.phone),
            users::skills_json.eq(&skills_json),
        ))
        .execute(conn)?;

    let user_id: i64 = conn.get_last_insert_rowid()?;
    info!(user_id, "User created");

    Ok(user_id)
}

/// Inserts a credential row for an existing user.
///
/// `email` must already be lowercase and `password_hash` already hashed.
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the email or user already
/// has credentials, or another error if the insert fails.
pub fn insert_auth_record(
    conn: &mut SqliteConnection,
    user_id: i64,
    email: &str,
    password_hash: &str,
) -> Result<(), PersistenceError> {
    info!(user_id, email, "Creating credentials");

    diesel::insert_into(user_auth::table)
        .values((
            user_auth::user_id.eq(user_id),
            user_auth::email.eq(email),
            user_auth::password_hash.eq(password_hash),
        ))
        .execute(conn)?;

    Ok(())
}

/// Inserts a user and its credentials in one transaction.
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the email is taken. No
/// user row is left behind in that case.
pub fn insert_user_with_credentials(
    conn: &mut SqliteConnection,
    user: &User,
    email: &str,
    password_hash: &str,
) -> Result<i64, PersistenceError> {
    conn.transaction::<_, PersistenceError, _>(|conn| {
        let user_id: i64 = insert_user(conn, user)?;
        insert_auth_record(conn, user_id, email, password_hash)?;
        Ok(user_id)
    })
}
