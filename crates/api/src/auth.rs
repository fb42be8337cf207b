// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.
//!
//! Operations that depend on who is acting take an explicit
//! [`AuthenticatedPrincipal`]. There is no ambient session state.

use facilitydesk_domain::{RecordId, Role, User, WorkOrder, login_email};
use facilitydesk_persistence::{AuthRecordData, Persistence};
use tracing::{debug, warn};

use crate::error::AuthError;

/// Message returned for every failed login so callers cannot probe which
/// emails are registered.
const LOGIN_FAILED: &str = "Invalid email or password";

/// An authenticated user acting on the system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedPrincipal {
    /// The user's store identifier.
    pub user_id: RecordId,
    /// `First Last`, used as the author name on comments.
    pub display_name: String,
    /// The user's role.
    pub role: Role,
}

impl AuthenticatedPrincipal {
    /// Creates a new principal.
    #[must_use]
    pub const fn new(user_id: RecordId, display_name: String, role: Role) -> Self {
        Self {
            user_id,
            display_name,
            role,
        }
    }

    /// Returns `true` if this principal is an admin.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Authorization service for enforcing role-based access control.
pub struct AuthorizationService;

impl AuthorizationService {
    fn require_admin(principal: &AuthenticatedPrincipal, action: &str) -> Result<(), AuthError> {
        match principal.role {
            Role::Admin => Ok(()),
            Role::Contractor => {
                warn!(user_id = %principal.user_id, action, "Rejected non-admin action");
                Err(AuthError::Unauthorized {
                    action: action.to_string(),
                    required_role: String::from("admin"),
                })
            }
        }
    }

    /// Checks if a principal may approve job requests.
    ///
    /// # Errors
    ///
    /// Returns an error unless the principal is an admin.
    pub fn authorize_approve_job_request(principal: &AuthenticatedPrincipal) -> Result<(), AuthError> {
        Self::require_admin(principal, "approve_job_request")
    }

    /// Checks if a principal may reject job requests.
    ///
    /// # Errors
    ///
    /// Returns an error unless the principal is an admin.
    pub fn authorize_reject_job_request(principal: &AuthenticatedPrincipal) -> Result<(), AuthError> {
        Self::require_admin(principal, "reject_job_request")
    }

    /// Checks if a principal may create, edit, or remove invoices.
    ///
    /// # Errors
    ///
    /// Returns an error unless the principal is an admin.
    pub fn authorize_manage_invoices(principal: &AuthenticatedPrincipal) -> Result<(), AuthError> {
        Self::require_admin(principal, "manage_invoices")
    }

    /// Checks if a principal may create, edit, or remove charges.
    ///
    /// # Errors
    ///
    /// Returns an error unless the principal is an admin.
    pub fn authorize_manage_charges(principal: &AuthenticatedPrincipal) -> Result<(), AuthError> {
        Self::require_admin(principal, "manage_charges")
    }

    /// Checks if a principal may view or comment on a work order.
    ///
    /// Admins see every work order. Contractors see only those assigned
    /// to them.
    ///
    /// # Errors
    ///
    /// Returns an error if a contractor is not the assignee.
    pub fn authorize_view_work_order(
        principal: &AuthenticatedPrincipal,
        work_order: &WorkOrder,
    ) -> Result<(), AuthError> {
        match principal.role {
            Role::Admin => Ok(()),
            Role::Contractor if work_order.assigned_contractor_id == Some(principal.user_id) => {
                Ok(())
            }
            Role::Contractor => Err(AuthError::Unauthorized {
                action: String::from("view_work_order"),
                required_role: String::from("admin or assigned contractor"),
            }),
        }
    }

    /// Returns the contractor a work order listing must be restricted to.
    ///
    /// `None` for admins, who see every work order.
    #[must_use]
    pub const fn work_order_scope(principal: &AuthenticatedPrincipal) -> Option<RecordId> {
        match principal.role {
            Role::Admin => None,
            Role::Contractor => Some(principal.user_id),
        }
    }
}

/// Authentication service for email and password login.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Authenticates a user by email and password.
    ///
    /// The email is matched case-insensitively. Unknown emails and wrong
    /// passwords fail with the same message.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `email` - The login email as typed
    /// * `password` - The plain-text password
    ///
    /// # Errors
    ///
    /// Returns `AuthError::AuthenticationFailed` if the credentials do not
    /// match a stored user.
    pub fn login(
        persistence: &mut Persistence,
        email: &str,
        password: &str,
    ) -> Result<AuthenticatedPrincipal, AuthError> {
        let Ok(email) = login_email(email) else {
            return Err(Self::failed());
        };

        let auth: AuthRecordData = persistence
            .get_auth_by_email(&email)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Database error: {e}"),
            })?
            .ok_or_else(|| {
                debug!(email, "Login for unknown email");
                Self::failed()
            })?;

        let matches: bool = bcrypt::verify(password.trim(), &auth.password_hash).map_err(|e| {
            AuthError::AuthenticationFailed {
                reason: format!("Failed to verify password: {e}"),
            }
        })?;
        if !matches {
            debug!(user_id = %auth.user_id, "Login with wrong password");
            return Err(Self::failed());
        }

        let user: User = persistence
            .get_user(auth.user_id)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Database error: {e}"),
            })?
            .ok_or_else(Self::failed)?;

        Ok(AuthenticatedPrincipal::new(
            auth.user_id,
            user.display_name(),
            user.role,
        ))
    }

    fn failed() -> AuthError {
        AuthError::AuthenticationFailed {
            reason: String::from(LOGIN_FAILED),
        }
    }
}
