// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Job request repository.
//!
//! A job request snapshots its company's id and name when created or when
//! its company is changed. Later edits to the company do not reach it.

use facilitydesk_domain::{
    Company, JobRequest, JobRequestStatus, RecordId, attachment_url, date, job_request_status,
    non_empty_string, priority, us_state, zip_code,
};
use facilitydesk_persistence::{JobRequestFilter, JobRequestPatch, Persistence, PersistenceError};
use time::OffsetDateTime;
use tracing::info;

use super::companies::resolve_active_company;
use super::{empty_update, parse_id, validated};
use crate::error::{ApiError, translate_persistence_error};
use crate::request_response::{
    CreateJobRequestRequest, JobRequestInfo, JobRequestListRequest, UpdateJobRequestRequest,
};

const RESOURCE: &str = "Job request";

fn store_error(err: PersistenceError) -> ApiError {
    translate_persistence_error(RESOURCE, err)
}

/// Loads a job request by id.
///
/// # Errors
///
/// Returns `ResourceNotFound` if no job request has the id.
pub fn load_job_request(
    persistence: &mut Persistence,
    job_request_id: RecordId,
) -> Result<JobRequest, ApiError> {
    persistence
        .get_job_request(job_request_id)
        .map_err(store_error)?
        .ok_or_else(|| ApiError::not_found(RESOURCE, &job_request_id.to_string()))
}

/// Submits a job request on behalf of an active company.
///
/// # Errors
///
/// Returns an error if:
/// - Any field fails validation
/// - No company has the given name (`ResourceNotFound`)
/// - The company is inactive (`ReferentialViolation`)
pub fn create_job_request(
    persistence: &mut Persistence,
    request: &CreateJobRequestRequest,
) -> Result<JobRequestInfo, ApiError> {
    let company: Company = resolve_active_company(persistence, &request.company_name)?;
    let company_id: RecordId = company.company_id.ok_or_else(|| ApiError::Internal {
        message: String::from("Stored company has no id"),
    })?;

    let job_request: JobRequest = JobRequest {
        job_request_id: None,
        company_id,
        company_name: company.company_name,
        category: validated(non_empty_string(&request.category, "category"))?,
        priority: validated(priority(&request.priority))?,
        description: validated(non_empty_string(&request.description, "description"))?,
        address: validated(non_empty_string(&request.address, "address"))?,
        city: validated(non_empty_string(&request.city, "city"))?,
        state: validated(us_state(&request.state))?,
        zip_code: validated(zip_code(&request.zip_code))?,
        attachment_url: validated(attachment_url(request.attachment_url.as_deref()))?,
        status: validated(job_request_status(request.status.as_deref()))?.unwrap_or_default(),
        requested_date: validated(date(request.requested_date.as_deref(), "requestedDate"))?,
        created_at: OffsetDateTime::now_utc(),
    };

    let job_request_id: RecordId = persistence
        .create_job_request(&job_request)
        .map_err(store_error)?;
    info!(%job_request_id, company_name = %job_request.company_name, "Job request created");

    JobRequestInfo::from_job_request(JobRequest {
        job_request_id: Some(job_request_id),
        ..job_request
    })
}

/// Retrieves a job request by id.
///
/// # Errors
///
/// Returns an error if the id is malformed or no job request has it.
pub fn get_job_request(
    persistence: &mut Persistence,
    job_request_id: &str,
) -> Result<JobRequestInfo, ApiError> {
    let id: RecordId = parse_id(job_request_id, "jobRequestId")?;
    JobRequestInfo::from_job_request(load_job_request(persistence, id)?)
}

/// Lists job requests matching every supplied filter.
///
/// Filters are validated like create-time values. One bad filter fails
/// the whole call.
///
/// # Errors
///
/// Returns an error if any filter fails validation.
pub fn list_job_requests(
    persistence: &mut Persistence,
    request: &JobRequestListRequest,
) -> Result<Vec<JobRequestInfo>, ApiError> {
    let filter: JobRequestFilter = JobRequestFilter {
        status: validated(job_request_status(request.status.as_deref()))?,
        company_name: request
            .company_name
            .as_deref()
            .map(|name| validated(non_empty_string(name, "companyName")))
            .transpose()?,
        priority: request
            .priority
            .as_deref()
            .map(|value| validated(priority(value)))
            .transpose()?,
        category: request
            .category
            .as_deref()
            .map(|value| validated(non_empty_string(value, "category")))
            .transpose()?,
    };

    persistence
        .list_job_requests(&filter)
        .map_err(store_error)?
        .into_iter()
        .map(JobRequestInfo::from_job_request)
        .collect()
}

/// Lists job requests still awaiting triage.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_pending_job_requests(
    persistence: &mut Persistence,
) -> Result<Vec<JobRequestInfo>, ApiError> {
    let filter: JobRequestFilter = JobRequestFilter {
        status: Some(JobRequestStatus::Pending),
        ..JobRequestFilter::default()
    };
    persistence
        .list_job_requests(&filter)
        .map_err(store_error)?
        .into_iter()
        .map(JobRequestInfo::from_job_request)
        .collect()
}

/// Builds a sparse patch from an update request.
fn build_patch(
    persistence: &mut Persistence,
    request: &UpdateJobRequestRequest,
) -> Result<JobRequestPatch, ApiError> {
    let company: Option<(RecordId, String)> = match &request.company_name {
        Some(name) => {
            let company: Company = resolve_active_company(persistence, name)?;
            let company_id: RecordId = company.company_id.ok_or_else(|| ApiError::Internal {
                message: String::from("Stored company has no id"),
            })?;
            Some((company_id, company.company_name))
        }
        None => None,
    };

    Ok(JobRequestPatch {
        company,
        category: request
            .category
            .as_deref()
            .map(|value| validated(non_empty_string(value, "category")))
            .transpose()?,
        priority: request
            .priority
            .as_deref()
            .map(|value| validated(priority(value)))
            .transpose()?,
        description: request
            .description
            .as_deref()
            .map(|value| validated(non_empty_string(value, "description")))
            .transpose()?,
        address: request
            .address
            .as_deref()
            .map(|value| validated(non_empty_string(value, "address")))
            .transpose()?,
        city: request
            .city
            .as_deref()
            .map(|value| validated(non_empty_string(value, "city")))
            .transpose()?,
        state: request
            .state
            .as_deref()
            .map(|value| validated(us_state(value)))
            .transpose()?,
        zip_code: request
            .zip_code
            .as_ref()
            .map(|value| validated(zip_code(value)))
            .transpose()?,
        attachment_url: request
            .attachment_url
            .as_ref()
            .map(|value| validated(attachment_url(value.as_deref())))
            .transpose()?,
        status: validated(job_request_status(request.status.as_deref()))?,
        requested_date: request
            .requested_date
            .as_ref()
            .map(|value| validated(date(value.as_deref(), "requestedDate")))
            .transpose()?,
    })
}

/// Applies a partial update to a job request.
///
/// Only supplied fields are validated and written. Changing the company
/// name re-resolves the company, which must exist and be active.
///
/// # Errors
///
/// Returns an error if:
/// - The id is malformed
/// - Any supplied field fails validation
/// - No field was supplied
/// - No job request has the id
pub fn update_job_request(
    persistence: &mut Persistence,
    job_request_id: &str,
    request: &UpdateJobRequestRequest,
) -> Result<JobRequestInfo, ApiError> {
    let id: RecordId = parse_id(job_request_id, "jobRequestId")?;
    let patch: JobRequestPatch = build_patch(persistence, request)?;
    if patch.is_empty() {
        return Err(empty_update("job request"));
    }

    persistence
        .update_job_request(id, &patch)
        .map_err(store_error)?;
    info!(job_request_id = %id, "Job request updated");

    JobRequestInfo::from_job_request(load_job_request(persistence, id)?)
}

/// Writes a new status to a job request.
///
/// # Errors
///
/// Returns `ResourceNotFound` if no job request has the id.
pub fn set_job_request_status(
    persistence: &mut Persistence,
    job_request_id: RecordId,
    status: JobRequestStatus,
) -> Result<(), ApiError> {
    let patch: JobRequestPatch = JobRequestPatch {
        status: Some(status),
        ..JobRequestPatch::default()
    };
    persistence
        .update_job_request(job_request_id, &patch)
        .map_err(store_error)?;
    info!(%job_request_id, %status, "Job request status changed");
    Ok(())
}

/// Removes a job request and returns it as it was.
///
/// # Errors
///
/// Returns an error if the id is malformed or no job request has it.
pub fn delete_job_request(
    persistence: &mut Persistence,
    job_request_id: &str,
) -> Result<JobRequestInfo, ApiError> {
    let id: RecordId = parse_id(job_request_id, "jobRequestId")?;
    let existing: JobRequest = load_job_request(persistence, id)?;
    persistence.delete_job_request(id).map_err(store_error)?;
    info!(job_request_id = %id, "Job request removed");
    JobRequestInfo::from_job_request(existing)
}
