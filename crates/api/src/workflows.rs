// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Multi-step use cases that act on behalf of a principal.
//!
//! Approving a job request writes two records. There is no transaction
//! spanning them, so a failed work order insert is compensated by putting
//! the request's previous status back.

use facilitydesk_domain::{
    JobRequest, JobRequestStatus, RecordId, WorkOrder, WorkOrderComment, WorkOrderStatus,
    identifier, non_empty_string,
};
use facilitydesk_persistence::Persistence;
use time::OffsetDateTime;
use tracing::{error, info, warn};

use crate::auth::{AuthenticatedPrincipal, AuthorizationService};
use crate::error::{ApiError, translate_domain_error};
use crate::handlers::job_requests::{load_job_request, set_job_request_status};
use crate::handlers::work_orders::{append_comment, insert_work_order, load_work_order};
use crate::request_response::{ApproveJobRequestResponse, JobRequestInfo, WorkOrderInfo};

fn parse_job_request_id(value: &str) -> Result<RecordId, ApiError> {
    identifier(value, "jobRequestId").map_err(translate_domain_error)
}

/// Builds the work order an approved request turns into.
///
/// The contractor is left unassigned and work is not yet started.
fn seed_work_order(request: &JobRequest, job_request_id: RecordId) -> WorkOrder {
    let now: OffsetDateTime = OffsetDateTime::now_utc();
    WorkOrder {
        work_order_id: None,
        job_request_id,
        company_name: request.company_name.clone(),
        assigned_contractor_id: None,
        priority: request.priority,
        description: request.description.clone(),
        address: request.address.clone(),
        city: request.city.clone(),
        state: request.state.clone(),
        zip_code: request.zip_code,
        latitude: None,
        longitude: None,
        status: WorkOrderStatus::NotStarted,
        start_date: Some(now),
        estimated_end_date: None,
        comments: Vec::new(),
        created_at: now,
    }
}

/// Approves a job request and opens a work order for it.
///
/// Any current status may be approved again; there is no transition
/// graph. If the work order cannot be stored the request's previous
/// status is restored on a best-effort basis and the insert error is
/// returned.
///
/// # Errors
///
/// Returns an error if:
/// - The principal is not an admin
/// - The id is malformed or no job request has it
/// - Either write fails
pub fn approve_job_request(
    persistence: &mut Persistence,
    principal: &AuthenticatedPrincipal,
    id: &str,
) -> Result<ApproveJobRequestResponse, ApiError> {
    AuthorizationService::authorize_approve_job_request(principal)?;
    let job_request_id: RecordId = parse_job_request_id(id)?;
    let request: JobRequest = load_job_request(persistence, job_request_id)?;
    let previous_status: JobRequestStatus = request.status;

    set_job_request_status(persistence, job_request_id, JobRequestStatus::Approved)?;

    let work_order: WorkOrderInfo =
        match insert_work_order(persistence, seed_work_order(&request, job_request_id)) {
            Ok(info) => info,
            Err(err) => {
                warn!(%job_request_id, %err, "Work order creation failed, reverting approval");
                if let Err(revert_err) =
                    set_job_request_status(persistence, job_request_id, previous_status)
                {
                    error!(
                        %job_request_id,
                        %previous_status,
                        %revert_err,
                        "Failed to revert job request status"
                    );
                }
                return Err(err);
            }
        };

    info!(
        %job_request_id,
        work_order_id = %work_order.id,
        approved_by = %principal.user_id,
        "Job request approved"
    );

    Ok(ApproveJobRequestResponse {
        job_request: JobRequestInfo::from_job_request(load_job_request(
            persistence,
            job_request_id,
        )?)?,
        work_order,
    })
}

/// Rejects a job request.
///
/// # Errors
///
/// Returns an error if the principal is not an admin or no job request
/// has the id.
pub fn reject_job_request(
    persistence: &mut Persistence,
    principal: &AuthenticatedPrincipal,
    id: &str,
) -> Result<JobRequestInfo, ApiError> {
    AuthorizationService::authorize_reject_job_request(principal)?;
    let job_request_id: RecordId = parse_job_request_id(id)?;
    load_job_request(persistence, job_request_id)?;

    set_job_request_status(persistence, job_request_id, JobRequestStatus::Rejected)?;
    info!(%job_request_id, rejected_by = %principal.user_id, "Job request rejected");

    JobRequestInfo::from_job_request(load_job_request(persistence, job_request_id)?)
}

/// Appends a comment authored by the principal.
///
/// Contractors may only comment on work orders assigned to them.
///
/// # Errors
///
/// Returns an error if:
/// - The text is blank or the id is malformed
/// - No work order has the id
/// - The principal may not view the work order
pub fn add_comment_as(
    persistence: &mut Persistence,
    principal: &AuthenticatedPrincipal,
    work_order_id: &str,
    text: &str,
) -> Result<WorkOrderInfo, ApiError> {
    let id: RecordId = identifier(work_order_id, "workOrderId").map_err(translate_domain_error)?;
    let comment: WorkOrderComment = WorkOrderComment {
        comment_id: None,
        author_name: Some(principal.display_name.clone()),
        text: non_empty_string(text, "comment").map_err(translate_domain_error)?,
    };

    let work_order: WorkOrder = load_work_order(persistence, id)?;
    AuthorizationService::authorize_view_work_order(principal, &work_order)?;

    append_comment(persistence, id, &comment)
}
