// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Work order repository.

use facilitydesk_domain::{
    RecordId, WorkOrder, WorkOrderComment, WorkOrderStatus, comment_shape, coordinate, date,
    identifier, non_empty_string, priority, us_state, work_order_status, zip_code,
};
use facilitydesk_persistence::{Persistence, PersistenceError, WorkOrderFilter, WorkOrderPatch};
use time::OffsetDateTime;
use tracing::{debug, info};

use super::job_requests::load_job_request;
use super::users::resolve_contractor;
use super::{empty_update, parse_id, validated};
use crate::auth::{AuthenticatedPrincipal, AuthorizationService};
use crate::error::{ApiError, translate_persistence_error};
use crate::request_response::{
    CommentRequest, CreateWorkOrderRequest, UpdateWorkOrderRequest, WorkOrderInfo,
    WorkOrderListRequest,
};

const RESOURCE: &str = "Work order";

fn store_error(err: PersistenceError) -> ApiError {
    translate_persistence_error(RESOURCE, err)
}

/// Loads a work order by id.
///
/// # Errors
///
/// Returns `ResourceNotFound` if no work order has the id.
pub fn load_work_order(
    persistence: &mut Persistence,
    work_order_id: RecordId,
) -> Result<WorkOrder, ApiError> {
    persistence
        .get_work_order(work_order_id)
        .map_err(store_error)?
        .ok_or_else(|| ApiError::not_found(RESOURCE, &work_order_id.to_string()))
}

/// Validates an optional contractor id and checks the user is a contractor.
///
/// Only an absent id means no contractor. A blank id is rejected.
fn checked_contractor(
    persistence: &mut Persistence,
    contractor_id: Option<&str>,
) -> Result<Option<RecordId>, ApiError> {
    let Some(raw) = contractor_id else {
        return Ok(None);
    };
    let id: RecordId = parse_id(raw, "assignedContractorId")?;
    resolve_contractor(persistence, id)?;
    Ok(Some(id))
}

fn validated_comments(comments: &[CommentRequest]) -> Result<Vec<WorkOrderComment>, ApiError> {
    comments
        .iter()
        .enumerate()
        .map(|(index, comment)| {
            validated(comment_shape(
                comment.id.as_deref(),
                comment.name.as_deref(),
                &comment.comment,
                &format!("comments[{index}]"),
            ))
        })
        .collect()
}

/// Creates a work order for an existing job request.
///
/// Status defaults to open and the start date to now.
///
/// # Errors
///
/// Returns an error if:
/// - Any field fails validation
/// - The job request does not exist
/// - The assigned contractor does not exist or is not a contractor
pub fn create_work_order(
    persistence: &mut Persistence,
    request: &CreateWorkOrderRequest,
) -> Result<WorkOrderInfo, ApiError> {
    let job_request_id: RecordId = parse_id(&request.job_request_id, "jobRequestId")?;
    load_job_request(persistence, job_request_id)?;
    let assigned_contractor_id: Option<RecordId> =
        checked_contractor(persistence, request.assigned_contractor_id.as_deref())?;

    let now: OffsetDateTime = OffsetDateTime::now_utc();
    let work_order: WorkOrder = WorkOrder {
        work_order_id: None,
        job_request_id,
        company_name: validated(non_empty_string(&request.company_name, "companyName"))?,
        assigned_contractor_id,
        priority: validated(priority(&request.priority))?,
        description: validated(non_empty_string(&request.description, "description"))?,
        address: validated(non_empty_string(&request.address, "address"))?,
        city: validated(non_empty_string(&request.city, "city"))?,
        state: validated(us_state(&request.state))?,
        zip_code: validated(zip_code(&request.zip_code))?,
        latitude: validated(coordinate(request.latitude, "latitude"))?,
        longitude: validated(coordinate(request.longitude, "longitude"))?,
        status: match request.status.as_deref() {
            Some(value) => validated(work_order_status(value))?,
            None => WorkOrderStatus::default(),
        },
        start_date: validated(date(request.start_date.as_deref(), "startDate"))?.or(Some(now)),
        estimated_end_date: validated(date(
            request.estimated_end_date.as_deref(),
            "estimatedEndDate",
        ))?,
        comments: validated_comments(request.comments.as_deref().unwrap_or_default())?,
        created_at: now,
    };

    insert_work_order(persistence, work_order)
}

/// Stores an already validated work order.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn insert_work_order(
    persistence: &mut Persistence,
    work_order: WorkOrder,
) -> Result<WorkOrderInfo, ApiError> {
    let work_order_id: RecordId = persistence
        .create_work_order(&work_order)
        .map_err(store_error)?;
    info!(
        %work_order_id,
        job_request_id = %work_order.job_request_id,
        "Work order created"
    );

    WorkOrderInfo::from_work_order(WorkOrder {
        work_order_id: Some(work_order_id),
        ..work_order
    })
}

/// Retrieves a work order by id.
///
/// # Errors
///
/// Returns an error if the id is malformed or no work order has it.
pub fn get_work_order(
    persistence: &mut Persistence,
    work_order_id: &str,
) -> Result<WorkOrderInfo, ApiError> {
    let id: RecordId = parse_id(work_order_id, "workOrderId")?;
    WorkOrderInfo::from_work_order(load_work_order(persistence, id)?)
}

/// Retrieves a work order on behalf of a principal.
///
/// Contractors may only see work orders assigned to them.
///
/// # Errors
///
/// Returns an error if the work order does not exist or the principal
/// may not view it.
pub fn get_work_order_as(
    persistence: &mut Persistence,
    principal: &AuthenticatedPrincipal,
    work_order_id: &str,
) -> Result<WorkOrderInfo, ApiError> {
    let id: RecordId = parse_id(work_order_id, "workOrderId")?;
    let work_order: WorkOrder = load_work_order(persistence, id)?;
    AuthorizationService::authorize_view_work_order(principal, &work_order)?;
    WorkOrderInfo::from_work_order(work_order)
}

fn build_filter(request: &WorkOrderListRequest) -> Result<WorkOrderFilter, ApiError> {
    Ok(WorkOrderFilter {
        status: request
            .status
            .as_deref()
            .map(|value| validated(work_order_status(value)))
            .transpose()?,
        contractor_id: request
            .contractor_id
            .as_deref()
            .map(|value| validated(identifier(value, "contractorId")))
            .transpose()?,
        job_request_id: request
            .job_request_id
            .as_deref()
            .map(|value| validated(identifier(value, "jobRequestId")))
            .transpose()?,
        priority: request
            .priority
            .as_deref()
            .map(|value| validated(priority(value)))
            .transpose()?,
    })
}

fn load_filtered(
    persistence: &mut Persistence,
    filter: &WorkOrderFilter,
) -> Result<Vec<WorkOrderInfo>, ApiError> {
    persistence
        .list_work_orders(filter)
        .map_err(store_error)?
        .into_iter()
        .map(WorkOrderInfo::from_work_order)
        .collect()
}

/// Lists work orders matching every supplied filter.
///
/// # Errors
///
/// Returns an error if any filter fails validation.
pub fn list_work_orders(
    persistence: &mut Persistence,
    request: &WorkOrderListRequest,
) -> Result<Vec<WorkOrderInfo>, ApiError> {
    let filter: WorkOrderFilter = build_filter(request)?;
    load_filtered(persistence, &filter)
}

/// Lists work orders visible to a principal.
///
/// For a contractor the contractor filter is forced to their own id.
///
/// # Errors
///
/// Returns an error if any filter fails validation.
pub fn list_work_orders_as(
    persistence: &mut Persistence,
    principal: &AuthenticatedPrincipal,
    request: &WorkOrderListRequest,
) -> Result<Vec<WorkOrderInfo>, ApiError> {
    let mut filter: WorkOrderFilter = build_filter(request)?;
    if let Some(own_id) = AuthorizationService::work_order_scope(principal) {
        debug!(user_id = %own_id, "Scoping work order list to contractor");
        filter.contractor_id = Some(own_id);
    }
    load_filtered(persistence, &filter)
}

fn build_patch(
    persistence: &mut Persistence,
    request: &UpdateWorkOrderRequest,
) -> Result<WorkOrderPatch, ApiError> {
    let assigned_contractor_id: Option<Option<RecordId>> = match &request.assigned_contractor_id
    {
        Some(value) => Some(checked_contractor(persistence, value.as_deref())?),
        None => None,
    };

    Ok(WorkOrderPatch {
        company_name: request
            .company_name
            .as_deref()
            .map(|value| validated(non_empty_string(value, "companyName")))
            .transpose()?,
        assigned_contractor_id,
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
        latitude: request
            .latitude
            .map(|value| validated(coordinate(value, "latitude")))
            .transpose()?,
        longitude: request
            .longitude
            .map(|value| validated(coordinate(value, "longitude")))
            .transpose()?,
        status: request
            .status
            .as_deref()
            .map(|value| validated(work_order_status(value)))
            .transpose()?,
        start_date: request
            .start_date
            .as_ref()
            .map(|value| validated(date(value.as_deref(), "startDate")))
            .transpose()?,
        estimated_end_date: request
            .estimated_end_date
            .as_ref()
            .map(|value| validated(date(value.as_deref(), "estimatedEndDate")))
            .transpose()?,
        comments: request
            .comments
            .as_deref()
            .map(validated_comments)
            .transpose()?,
    })
}

/// Applies a partial update to a work order.
///
/// A supplied comments array replaces the stored comments in full.
/// The contractor and the coordinates may be cleared with an explicit null.
/// Nothing is written unless every supplied field is valid.
///
/// # Errors
///
/// Returns an error if:
/// - The id is malformed
/// - Any supplied field fails validation
/// - A supplied contractor does not exist or is not a contractor
/// - No field was supplied
/// - No work order has the id
pub fn update_work_order(
    persistence: &mut Persistence,
    work_order_id: &str,
    request: &UpdateWorkOrderRequest,
) -> Result<WorkOrderInfo, ApiError> {
    let id: RecordId = parse_id(work_order_id, "workOrderId")?;
    let patch: WorkOrderPatch = build_patch(persistence, request)?;
    if patch.is_empty() {
        return Err(empty_update("work order"));
    }

    persistence
        .update_work_order(id, &patch)
        .map_err(store_error)?;
    info!(work_order_id = %id, "Work order updated");

    WorkOrderInfo::from_work_order(load_work_order(persistence, id)?)
}

/// Appends one comment to a work order.
///
/// Existing comments are kept in order and the new one goes last.
///
/// # Errors
///
/// Returns an error if the comment is malformed or the work order does
/// not exist.
pub fn add_comment(
    persistence: &mut Persistence,
    work_order_id: &str,
    request: &CommentRequest,
) -> Result<WorkOrderInfo, ApiError> {
    let id: RecordId = parse_id(work_order_id, "workOrderId")?;
    let comment: WorkOrderComment = validated(comment_shape(
        request.id.as_deref(),
        request.name.as_deref(),
        &request.comment,
        "comment",
    ))?;
    append_comment(persistence, id, &comment)
}

/// Appends an already validated comment.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the work order does not exist.
pub fn append_comment(
    persistence: &mut Persistence,
    work_order_id: RecordId,
    comment: &WorkOrderComment,
) -> Result<WorkOrderInfo, ApiError> {
    persistence
        .append_work_order_comment(work_order_id, comment)
        .map_err(store_error)?;
    info!(%work_order_id, "Comment appended");
    WorkOrderInfo::from_work_order(load_work_order(persistence, work_order_id)?)
}

/// Removes a work order and returns it as it was.
///
/// # Errors
///
/// Returns an error if the id is malformed or no work order has it.
pub fn delete_work_order(
    persistence: &mut Persistence,
    work_order_id: &str,
) -> Result<WorkOrderInfo, ApiError> {
    let id: RecordId = parse_id(work_order_id, "workOrderId")?;
    let existing: WorkOrder = load_work_order(persistence, id)?;
    persistence.delete_work_order(id).map_err(store_error)?;
    info!(work_order_id = %id, "Work order removed");
    WorkOrderInfo::from_work_order(existing)
}
