// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Job request queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use facilitydesk_domain::JobRequest;
use tracing::debug;

use crate::data_models::{
    JobRequestFilter, decode_enum, decode_optional_timestamp, decode_record_id, decode_timestamp,
    decode_zip_code,
};
use crate::diesel_schema::job_requests;
use crate::error::PersistenceError;

/// Diesel Queryable struct for job request rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = job_requests)]
struct JobRequestRow {
    job_request_id: i64,
    company_id: i64,
    company_name: String,
    category: String,
    priority: String,
    description: String,
    address: String,
    city: String,
    state: String,
    zip_code: i64,
    attachment_url: Option<String>,
    status: String,
    requested_date: Option<String>,
    created_at: String,
}

impl JobRequestRow {
    fn into_job_request(self) -> Result<JobRequest, PersistenceError> {
        Ok(JobRequest {
            job_request_id: Some(decode_record_id(self.job_request_id)?),
            company_id: decode_record_id(self.company_id)?,
            company_name: self.company_name,
            category: self.category,
            priority: decode_enum(&self.priority)?,
            description: self.description,
            address: self.address,
            city: self.city,
            state: self.state,
            zip_code: decode_zip_code(self.zip_code)?,
            attachment_url: self.attachment_url,
            status: decode_enum(&self.status)?,
            requested_date: decode_optional_timestamp(self.requested_date.as_deref())?,
            created_at: decode_timestamp(&self.created_at)?,
        })
    }
}

/// Retrieves a job request by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the job request is not found.
pub fn get_job_request(
    conn: &mut SqliteConnection,
    job_request_id: i64,
) -> Result<Option<JobRequest>, PersistenceError> {
    debug!(job_request_id, "Looking up job request");

    let result: Result<JobRequestRow, diesel::result::Error> = job_requests::table
        .filter(job_requests::job_request_id.eq(job_request_id))
        .select(JobRequestRow::as_select())
        .first(conn);

    match result {
        Ok(row) => row.into_job_request().map(Some),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists job requests matching every set filter, oldest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_job_requests(
    conn: &mut SqliteConnection,
    filter: &JobRequestFilter,
) -> Result<Vec<JobRequest>, PersistenceError> {
    let mut query = job_requests::table
        .order(job_requests::job_request_id.asc())
        .select(JobRequestRow::as_select())
        .into_boxed();

    if let Some(status) = filter.status {
        query = query.filter(job_requests::status.eq(status.as_str()));
    }
    if let Some(company_name) = &filter.company_name {
        query = query.filter(job_requests::company_name.eq(company_name.clone()));
    }
    if let Some(priority) = filter.priority {
        query = query.filter(job_requests::priority.eq(priority.as_str()));
    }
    if let Some(category) = &filter.category {
        query = query.filter(job_requests::category.eq(category.clone()));
    }

    let rows: Vec<JobRequestRow> = query.load(conn)?;
    debug!(count = rows.len(), "Loaded job requests");

    rows.into_iter()
        .map(JobRequestRow::into_job_request)
        .collect()
}
