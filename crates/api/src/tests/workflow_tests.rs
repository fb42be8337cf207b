// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::handlers::job_requests::get_job_request;
use crate::handlers::work_orders::update_work_order;
use crate::workflows::{add_comment_as, approve_job_request, reject_job_request};
use crate::{
    ApiError, ApproveJobRequestResponse, AuthenticatedPrincipal, ErrorKind, JobRequestInfo,
    UpdateWorkOrderRequest, WorkOrderInfo,
};

use super::helpers::{
    seed_admin, seed_company, seed_contractor, seed_job_request, seed_work_order,
    setup_test_persistence,
};

#[test]
fn test_approve_creates_seeded_work_order() {
    let mut persistence = setup_test_persistence();
    seed_company(&mut persistence, "Acme");
    let request: JobRequestInfo = seed_job_request(&mut persistence, "Acme");
    let admin: AuthenticatedPrincipal = seed_admin(&mut persistence);

    let response: ApproveJobRequestResponse =
        approve_job_request(&mut persistence, &admin, &request.id).unwrap();

    assert_eq!(response.job_request.status, "approved");
    let work_order: WorkOrderInfo = response.work_order;
    assert_eq!(work_order.job_request_id, request.id);
    assert_eq!(work_order.company_name, "Acme");
    assert_eq!(work_order.priority, request.priority);
    assert_eq!(work_order.description, request.description);
    assert_eq!(work_order.zip_code, request.zip_code);
    assert_eq!(work_order.status, "not started");
    assert_eq!(work_order.assigned_contractor_id, None);
    assert!(work_order.start_date.is_some());
    assert!(work_order.comments.is_empty());
}

#[test]
fn test_approve_twice_is_allowed() {
    let mut persistence = setup_test_persistence();
    seed_company(&mut persistence, "Acme");
    let request: JobRequestInfo = seed_job_request(&mut persistence, "Acme");
    let admin: AuthenticatedPrincipal = seed_admin(&mut persistence);

    let first: ApproveJobRequestResponse =
        approve_job_request(&mut persistence, &admin, &request.id).unwrap();
    let second: ApproveJobRequestResponse =
        approve_job_request(&mut persistence, &admin, &request.id).unwrap();

    assert_ne!(first.work_order.id, second.work_order.id);
}

#[test]
fn test_contractor_cannot_approve() {
    let mut persistence = setup_test_persistence();
    seed_company(&mut persistence, "Acme");
    let request: JobRequestInfo = seed_job_request(&mut persistence, "Acme");
    let contractor: AuthenticatedPrincipal = seed_contractor(&mut persistence, "Sam", "Smith");

    let result: Result<ApproveJobRequestResponse, ApiError> =
        approve_job_request(&mut persistence, &contractor, &request.id);

    assert_eq!(result.unwrap_err().kind(), ErrorKind::Authorization);
    let unchanged: JobRequestInfo = get_job_request(&mut persistence, &request.id).unwrap();
    assert_eq!(unchanged.status, "pending");
}

#[test]
fn test_approve_missing_job_request() {
    let mut persistence = setup_test_persistence();
    let admin: AuthenticatedPrincipal = seed_admin(&mut persistence);

    let result: Result<ApproveJobRequestResponse, ApiError> =
        approve_job_request(&mut persistence, &admin, "31");

    assert_eq!(result.unwrap_err().kind(), ErrorKind::NotFound);
}

#[test]
fn test_reject_sets_status() {
    let mut persistence = setup_test_persistence();
    seed_company(&mut persistence, "Acme");
    let request: JobRequestInfo = seed_job_request(&mut persistence, "Acme");
    let admin: AuthenticatedPrincipal = seed_admin(&mut persistence);

    let rejected: JobRequestInfo =
        reject_job_request(&mut persistence, &admin, &request.id).unwrap();

    assert_eq!(rejected.status, "rejected");
}

#[test]
fn test_contractor_cannot_reject() {
    let mut persistence = setup_test_persistence();
    seed_company(&mut persistence, "Acme");
    let request: JobRequestInfo = seed_job_request(&mut persistence, "Acme");
    let contractor: AuthenticatedPrincipal = seed_contractor(&mut persistence, "Sam", "Smith");

    let result: Result<JobRequestInfo, ApiError> =
        reject_job_request(&mut persistence, &contractor, &request.id);

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[test]
fn test_comment_author_comes_from_principal() {
    let mut persistence = setup_test_persistence();
    let work_order: WorkOrderInfo = seed_work_order(&mut persistence);
    let admin: AuthenticatedPrincipal = seed_admin(&mut persistence);

    let updated: WorkOrderInfo =
        add_comment_as(&mut persistence, &admin, &work_order.id, "Scheduled for Monday").unwrap();

    let last = updated.comments.last().unwrap();
    assert_eq!(last.name.as_deref(), Some("Alex Admin"));
    assert_eq!(last.comment, "Scheduled for Monday");
}

#[test]
fn test_contractor_comments_only_on_own_work_orders() {
    let mut persistence = setup_test_persistence();
    let work_order: WorkOrderInfo = seed_work_order(&mut persistence);
    let sam: AuthenticatedPrincipal = seed_contractor(&mut persistence, "Sam", "Smith");

    let denied: Result<WorkOrderInfo, ApiError> =
        add_comment_as(&mut persistence, &sam, &work_order.id, "On my way");
    update_work_order(
        &mut persistence,
        &work_order.id,
        &UpdateWorkOrderRequest {
            assigned_contractor_id: Some(Some(sam.user_id.to_string())),
            ..UpdateWorkOrderRequest::default()
        },
    )
    .unwrap();
    let allowed: WorkOrderInfo =
        add_comment_as(&mut persistence, &sam, &work_order.id, "On my way").unwrap();

    assert_eq!(denied.unwrap_err().kind(), ErrorKind::Authorization);
    assert_eq!(allowed.comments.len(), 1);
    assert_eq!(allowed.comments[0].name.as_deref(), Some("Sam Smith"));
}

#[test]
fn test_blank_comment_is_rejected() {
    let mut persistence = setup_test_persistence();
    let work_order: WorkOrderInfo = seed_work_order(&mut persistence);
    let admin: AuthenticatedPrincipal = seed_admin(&mut persistence);

    let result: Result<WorkOrderInfo, ApiError> =
        add_comment_as(&mut persistence, &admin, &work_order.id, "  ");

    assert_eq!(result.unwrap_err().kind(), ErrorKind::Validation);
}
