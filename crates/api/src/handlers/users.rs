// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User repository and credentials.

use facilitydesk_domain::{
    RecordId, Role, User, city_name, person_name, phone, role, skills, us_state,
};
use facilitydesk_persistence::{Persistence, PersistenceError};
use tracing::{info, warn};

use super::{parse_id, validated};
use crate::auth::{AuthenticatedPrincipal, AuthenticationService};
use crate::credential_policy::{AcceptedCredentials, check_credentials};
use crate::error::{ApiError, translate_persistence_error};
use crate::request_response::{
    CreateAuthRecordRequest, CreateUserRequest, LoginRequest, SignupRequest, UserInfo,
};

const RESOURCE: &str = "User";

fn store_error(err: PersistenceError) -> ApiError {
    translate_persistence_error(RESOURCE, err)
}

/// Maps a credential insert failure, reporting a taken email as a conflict.
fn credential_store_error(email: &str, err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::UniqueViolation(_) => {
            warn!(email, "Rejected duplicate email");
            ApiError::Conflict {
                resource_type: String::from("Account"),
                message: format!("An account with email '{email}' already exists"),
            }
        }
        other => store_error(other),
    }
}

fn build_user(
    user_role: Role,
    first_name: &str,
    last_name: &str,
    city: &str,
    state: &str,
    phone_number: &str,
    skill_list: &[String],
) -> Result<User, ApiError> {
    Ok(User {
        user_id: None,
        role: user_role,
        first_name: validated(person_name(first_name, "firstName"))?,
        last_name: validated(person_name(last_name, "lastName"))?,
        city: validated(city_name(city))?,
        state: validated(us_state(state))?,
        phone: validated(phone(phone_number, "phone"))?,
        skills: validated(skills(skill_list))?,
    })
}

/// Creates a user without login credentials.
///
/// # Errors
///
/// Returns an error if any field fails validation.
pub fn create_user(
    persistence: &mut Persistence,
    request: &CreateUserRequest,
) -> Result<UserInfo, ApiError> {
    let user_role: Role = validated(role(&request.role))?;
    let user: User = build_user(
        user_role,
        &request.first_name,
        &request.last_name,
        &request.city,
        &request.state,
        &request.phone,
        &request.skills,
    )?;

    let user_id: RecordId = persistence.create_user(&user).map_err(store_error)?;
    info!(%user_id, role = %user.role, "User created");

    UserInfo::from_user(User {
        user_id: Some(user_id),
        ..user
    })
}

/// Registers a contractor together with their login credentials.
///
/// The user and credentials are stored atomically: if the email is
/// already registered, no user is created.
///
/// # Errors
///
/// Returns an error if:
/// - Any field fails validation
/// - The password breaks the policy or does not match its confirmation
/// - The email is already registered
pub fn signup_contractor(
    persistence: &mut Persistence,
    request: &SignupRequest,
) -> Result<UserInfo, ApiError> {
    let user: User = build_user(
        Role::Contractor,
        &request.first_name,
        &request.last_name,
        &request.city,
        &request.state,
        &request.phone,
        &request.skills,
    )?;
    let credentials: AcceptedCredentials = check_credentials(
        &request.email,
        &request.password,
        Some(&request.confirm_password),
    )?;

    let user_id: RecordId = persistence
        .create_user_with_credentials(&user, &credentials.email, &credentials.password)
        .map_err(|e| credential_store_error(&credentials.email, e))?;
    info!(%user_id, "Contractor registered");

    UserInfo::from_user(User {
        user_id: Some(user_id),
        ..user
    })
}

/// Attaches login credentials to an existing user.
///
/// # Errors
///
/// Returns an error if:
/// - The user id is malformed or no user has it
/// - The email or password breaks the policy
/// - The email is already registered or the user already has credentials
pub fn create_auth_record(
    persistence: &mut Persistence,
    request: &CreateAuthRecordRequest,
) -> Result<(), ApiError> {
    let user_id: RecordId = parse_id(&request.user_id, "userId")?;
    if persistence.get_user(user_id).map_err(store_error)?.is_none() {
        return Err(ApiError::not_found(RESOURCE, &user_id.to_string()));
    }
    let credentials: AcceptedCredentials =
        check_credentials(&request.email, &request.password, None)?;

    persistence
        .create_auth_record(user_id, &credentials.email, &credentials.password)
        .map_err(|e| credential_store_error(&credentials.email, e))?;
    info!(%user_id, "Credentials created");
    Ok(())
}

/// Retrieves a user by id.
///
/// # Errors
///
/// Returns an error if the id is malformed or no user has it.
pub fn get_user(persistence: &mut Persistence, user_id: &str) -> Result<UserInfo, ApiError> {
    let id: RecordId = parse_id(user_id, "userId")?;
    let user: User = persistence
        .get_user(id)
        .map_err(store_error)?
        .ok_or_else(|| ApiError::not_found(RESOURCE, &id.to_string()))?;
    UserInfo::from_user(user)
}

/// Loads a user and requires the contractor role.
///
/// # Errors
///
/// Returns `ResourceNotFound` if no user has the id, or
/// `ReferentialViolation` if the user is not a contractor.
pub fn resolve_contractor(
    persistence: &mut Persistence,
    contractor_id: RecordId,
) -> Result<User, ApiError> {
    let user: User = persistence
        .get_user(contractor_id)
        .map_err(store_error)?
        .ok_or_else(|| ApiError::not_found(RESOURCE, &contractor_id.to_string()))?;
    if user.role != Role::Contractor {
        warn!(%contractor_id, role = %user.role, "Rejected non-contractor assignee");
        return Err(ApiError::ReferentialViolation {
            rule: String::from("contractor_assignee"),
            message: format!("User {contractor_id} is not a contractor"),
        });
    }
    Ok(user)
}

/// Lists users, optionally only those with one role.
///
/// # Errors
///
/// Returns an error if the role is not recognized.
pub fn list_users(
    persistence: &mut Persistence,
    role_filter: Option<&str>,
) -> Result<Vec<UserInfo>, ApiError> {
    let parsed: Option<Role> = validated(role_filter.map(role).transpose())?;
    persistence
        .list_users(parsed)
        .map_err(store_error)?
        .into_iter()
        .map(UserInfo::from_user)
        .collect()
}

/// Logs a user in.
///
/// # Errors
///
/// Returns `AuthenticationFailed` if the email is unknown or the password
/// is wrong.
pub fn login(
    persistence: &mut Persistence,
    request: &LoginRequest,
) -> Result<AuthenticatedPrincipal, ApiError> {
    let principal: AuthenticatedPrincipal =
        AuthenticationService::login(persistence, &request.email, &request.password)?;
    info!(user_id = %principal.user_id, role = %principal.role, "User logged in");
    Ok(principal)
}
