// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-process API for the facilities work-order core.
//!
//! Every operation validates raw caller input, enforces cross-entity
//! rules, writes through [`facilitydesk_persistence::Persistence`], and
//! returns a normalized response with ids rendered as strings. Failures
//! are [`ApiError`]s, classified by [`ApiError::kind`].

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod credential_policy;
mod error;
pub mod handlers;
pub mod reporting;
mod request_response;
pub mod workflows;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedPrincipal, AuthenticationService, AuthorizationService};
pub use credential_policy::{AcceptedCredentials, CredentialPolicyError, check_credentials};
pub use error::{
    ApiError, AuthError, ErrorKind, translate_domain_error, translate_persistence_error,
};
pub use request_response::{
    AdminDashboard, ApproveJobRequestResponse, ChargeInfo, CommentInfo, CommentRequest,
    CompanyInfo, CreateAuthRecordRequest, CreateChargeRequest, CreateCompanyRequest,
    CreateInvoiceRequest, CreateJobRequestRequest, CreateUserRequest, CreateWorkOrderRequest,
    DashboardWorkOrder, InvoiceInfo, InvoiceItemInfo, InvoiceItemRequest, InvoiceListRequest,
    JobRequestInfo, JobRequestListRequest, LoginRequest, LoginResponse, PrimaryContactInfo,
    PrimaryContactRequest, ScheduleDay, ScheduleEntry, SignupRequest, UpdateChargeRequest,
    UpdateInvoiceRequest, UpdateJobRequestRequest, UpdateWorkOrderRequest, UserInfo,
    WeekSchedule, WorkOrderInfo, WorkOrderListRequest, WorkOrderStatistics,
};
