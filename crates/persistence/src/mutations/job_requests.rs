// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Job request mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use facilitydesk_domain::JobRequest;
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::data_models::{JobRequestPatch, encode_optional_timestamp, encode_timestamp};
use crate::diesel_schema::job_requests;
use crate::error::PersistenceError;

/// Column changes for a job request update. `None` fields are skipped.
#[derive(AsChangeset)]
#[diesel(table_name = job_requests)]
struct JobRequestChangeset {
    company_id: Option<i64>,
    company_name: Option<String>,
    category: Option<String>,
    priority: Option<String>,
    description: Option<String>,
    address: Option<String>,
    city: Option<String>,
    state: Option<String>,
    zip_code: Option<i64>,
    attachment_url: Option<Option<String>>,
    status: Option<String>,
    requested_date: Option<Option<String>>,
}

impl JobRequestChangeset {
    fn from_patch(patch: &JobRequestPatch) -> Result<Self, PersistenceError> {
        Ok(Self {
            company_id: patch.company.as_ref().map(|(id, _)| id.value()),
            company_name: patch.company.as_ref().map(|(_, name)| name.clone()),
            category: patch.category.clone(),
            priority: patch.priority.map(|p| p.as_str().to_string()),
            description: patch.description.clone(),
            address: patch.address.clone(),
            city: patch.city.clone(),
            state: patch.state.clone(),
            zip_code: patch.zip_code.map(i64::from),
            attachment_url: patch.attachment_url.clone(),
            status: patch.status.map(|s| s.as_str().to_string()),
            requested_date: patch
                .requested_date
                .map(encode_optional_timestamp)
                .transpose()?,
        })
    }
}

/// Inserts a job request and returns its new ID.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_job_request(
    conn: &mut SqliteConnection,
    request: &JobRequest,
) -> Result<i64, PersistenceError> {
    info!(company_name = %request.company_name, "Creating job request");

    diesel::insert_into(job_requests::table)
        .values((
            job_requests::company_id.eq(request.company_id.value()),
            job_requests::company_name.eq(&request.company_name),
            job_requests::category.eq(&request.category),
            job_requests::priority.eq(request.priority.as_str()),
            job_requests::description.eq(&request.description),
            job_requests::address.eq(&request.address),
            job_requests::city.eq(&request.city),
            job_requests::state.eq(&request.state),
            job_requests::zip_code.eq(i64::from(request.zip_code)),
            job_requests::attachment_url.eq(request.attachment_url.as_deref()),
            job_requests::status.eq(request.status.as_str()),
            job_requests::requested_date.eq(encode_optional_timestamp(request.requested_date)?),
            job_requests::created_at.eq(encode_timestamp(request.created_at)?),
        ))
        .execute(conn)?;

    let job_request_id: i64 = conn.get_last_insert_rowid()?;
    info!(job_request_id, "Job request created");

    Ok(job_request_id)
}

/// Applies a sparse update to a job request.
///
/// The patch must not be empty.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no job request has this ID.
pub fn update_job_request(
    conn: &mut SqliteConnection,
    job_request_id: i64,
    patch: &JobRequestPatch,
) -> Result<(), PersistenceError> {
    info!(job_request_id, "Updating job request");

    let rows_affected: usize = diesel::update(job_requests::table)
        .filter(job_requests::job_request_id.eq(job_request_id))
        .set(JobRequestChangeset::from_patch(patch)?)
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Job request with ID {job_request_id} not found"
        )));
    }

    Ok(())
}

/// Deletes a job request.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no job request has this ID.
pub fn delete_job_request(
    conn: &mut SqliteConnection,
    job_request_id: i64,
) -> Result<(), PersistenceError> {
    info!(job_request_id, "Deleting job request");

    let rows_affected: usize = diesel::delete(job_requests::table)
        .filter(job_requests::job_request_id.eq(job_request_id))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Job request with ID {job_request_id} not found"
        )));
    }

    Ok(())
}
