// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::handlers::companies::set_company_active;
use crate::handlers::job_requests::{
    create_job_request, delete_job_request, get_job_request, list_job_requests,
    update_job_request,
};
use crate::{
    ApiError, CompanyInfo, CreateJobRequestRequest, ErrorKind, JobRequestInfo,
    JobRequestListRequest, UpdateJobRequestRequest,
};

use super::helpers::{job_request_request, seed_company, seed_job_request, setup_test_persistence};

#[test]
fn test_create_job_request_defaults_to_pending() {
    let mut persistence = setup_test_persistence();
    let company: CompanyInfo = seed_company(&mut persistence, "Acme");

    let request: JobRequestInfo = seed_job_request(&mut persistence, "Acme");

    assert_eq!(request.status, "pending");
    assert_eq!(request.company_id, company.id);
    assert_eq!(request.company_name, "Acme");
    assert_eq!(request.priority, "high");
}

#[test]
fn test_create_job_request_for_inactive_company_is_referential() {
    let mut persistence = setup_test_persistence();
    let company: CompanyInfo = seed_company(&mut persistence, "Acme");
    let first: JobRequestInfo = seed_job_request(&mut persistence, "Acme");
    set_company_active(&mut persistence, &company.id, false).unwrap();

    let result: Result<JobRequestInfo, ApiError> =
        create_job_request(&mut persistence, &job_request_request("Acme"));

    assert_eq!(result.unwrap_err().kind(), ErrorKind::Referential);
    let unaffected: JobRequestInfo = get_job_request(&mut persistence, &first.id).unwrap();
    assert_eq!(unaffected, first);
}

#[test]
fn test_create_job_request_for_missing_company_is_not_found() {
    let mut persistence = setup_test_persistence();

    let result: Result<JobRequestInfo, ApiError> =
        create_job_request(&mut persistence, &job_request_request("Nobody Inc"));

    assert_eq!(result.unwrap_err().kind(), ErrorKind::NotFound);
}

#[test]
fn test_create_job_request_rejects_non_http_attachment() {
    let mut persistence = setup_test_persistence();
    seed_company(&mut persistence, "Acme");
    let request: CreateJobRequestRequest = CreateJobRequestRequest {
        attachment_url: Some(String::from("ftp://files.example.com/photo.jpg")),
        ..job_request_request("Acme")
    };

    let result: Result<JobRequestInfo, ApiError> = create_job_request(&mut persistence, &request);

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "attachmentUrl"
    ));
}

#[test]
fn test_create_job_request_keeps_attachment_and_date() {
    let mut persistence = setup_test_persistence();
    seed_company(&mut persistence, "Acme");
    let request: CreateJobRequestRequest = CreateJobRequestRequest {
        attachment_url: Some(String::from(" https://files.example.com/photo.jpg ")),
        requested_date: Some(String::from("2026-02-01")),
        ..job_request_request("Acme")
    };

    let created: JobRequestInfo = create_job_request(&mut persistence, &request).unwrap();

    assert_eq!(
        created.attachment_url.as_deref(),
        Some("https://files.example.com/photo.jpg")
    );
    assert_eq!(
        created.requested_date.as_deref(),
        Some("2026-02-01T00:00:00Z")
    );
}

#[test]
fn test_list_job_requests_filters() {
    let mut persistence = setup_test_persistence();
    seed_company(&mut persistence, "Acme");
    seed_company(&mut persistence, "Zenith");
    seed_job_request(&mut persistence, "Acme");
    seed_job_request(&mut persistence, "Zenith");

    let acme: Vec<JobRequestInfo> = list_job_requests(
        &mut persistence,
        &JobRequestListRequest {
            company_name: Some(String::from("Acme")),
            status: Some(String::from("Pending")),
            ..JobRequestListRequest::default()
        },
    )
    .unwrap();

    assert_eq!(acme.len(), 1);
    assert_eq!(acme[0].company_name, "Acme");
}

#[test]
fn test_list_job_requests_with_bad_filter_fails() {
    let mut persistence = setup_test_persistence();
    seed_company(&mut persistence, "Acme");
    seed_job_request(&mut persistence, "Acme");

    let result: Result<Vec<JobRequestInfo>, ApiError> = list_job_requests(
        &mut persistence,
        &JobRequestListRequest {
            company_name: Some(String::from("Acme")),
            priority: Some(String::from("urgent")),
            ..JobRequestListRequest::default()
        },
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "priority"
    ));
}

#[test]
fn test_update_job_request_applies_only_supplied_fields() {
    let mut persistence = setup_test_persistence();
    seed_company(&mut persistence, "Acme");
    let created: JobRequestInfo = seed_job_request(&mut persistence, "Acme");

    let updated: JobRequestInfo = update_job_request(
        &mut persistence,
        &created.id,
        &UpdateJobRequestRequest {
            priority: Some(String::from("low")),
            status: Some(String::from("cancelled")),
            ..UpdateJobRequestRequest::default()
        },
    )
    .unwrap();

    assert_eq!(updated.priority, "low");
    assert_eq!(updated.status, "cancelled");
    assert_eq!(updated.description, created.description);
}

#[test]
fn test_update_job_request_changes_company_snapshot() {
    let mut persistence = setup_test_persistence();
    seed_company(&mut persistence, "Acme");
    let zenith: CompanyInfo = seed_company(&mut persistence, "Zenith");
    let created: JobRequestInfo = seed_job_request(&mut persistence, "Acme");

    let updated: JobRequestInfo = update_job_request(
        &mut persistence,
        &created.id,
        &UpdateJobRequestRequest {
            company_name: Some(String::from("Zenith")),
            ..UpdateJobRequestRequest::default()
        },
    )
    .unwrap();

    assert_eq!(updated.company_name, "Zenith");
    assert_eq!(updated.company_id, zenith.id);
}

#[test]
fn test_update_job_request_to_inactive_company_fails() {
    let mut persistence = setup_test_persistence();
    seed_company(&mut persistence, "Acme");
    let zenith: CompanyInfo = seed_company(&mut persistence, "Zenith");
    set_company_active(&mut persistence, &zenith.id, false).unwrap();
    let created: JobRequestInfo = seed_job_request(&mut persistence, "Acme");

    let result: Result<JobRequestInfo, ApiError> = update_job_request(
        &mut persistence,
        &created.id,
        &UpdateJobRequestRequest {
            company_name: Some(String::from("Zenith")),
            ..UpdateJobRequestRequest::default()
        },
    );

    assert_eq!(result.unwrap_err().kind(), ErrorKind::Referential);
}

#[test]
fn test_update_job_request_clears_attachment() {
    let mut persistence = setup_test_persistence();
    seed_company(&mut persistence, "Acme");
    let request: CreateJobRequestRequest = CreateJobRequestRequest {
        attachment_url: Some(String::from("https://files.example.com/a.png")),
        ..job_request_request("Acme")
    };
    let created: JobRequestInfo = create_job_request(&mut persistence, &request).unwrap();

    let updated: JobRequestInfo = update_job_request(
        &mut persistence,
        &created.id,
        &UpdateJobRequestRequest {
            attachment_url: Some(None),
            ..UpdateJobRequestRequest::default()
        },
    )
    .unwrap();

    assert_eq!(updated.attachment_url, None);
}

#[test]
fn test_empty_update_is_rejected() {
    let mut persistence = setup_test_persistence();
    seed_company(&mut persistence, "Acme");
    let created: JobRequestInfo = seed_job_request(&mut persistence, "Acme");

    let result: Result<JobRequestInfo, ApiError> = update_job_request(
        &mut persistence,
        &created.id,
        &UpdateJobRequestRequest::default(),
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "update"
    ));
}

#[test]
fn test_update_missing_job_request_is_not_found() {
    let mut persistence = setup_test_persistence();

    let result: Result<JobRequestInfo, ApiError> = update_job_request(
        &mut persistence,
        "77",
        &UpdateJobRequestRequest {
            category: Some(String::from("Electrical")),
            ..UpdateJobRequestRequest::default()
        },
    );

    assert_eq!(result.unwrap_err().kind(), ErrorKind::NotFound);
}

#[test]
fn test_delete_job_request_returns_removed_record() {
    let mut persistence = setup_test_persistence();
    seed_company(&mut persistence, "Acme");
    let created: JobRequestInfo = seed_job_request(&mut persistence, "Acme");

    let removed: JobRequestInfo = delete_job_request(&mut persistence, &created.id).unwrap();

    assert_eq!(removed, created);
    let again: Result<JobRequestInfo, ApiError> = delete_job_request(&mut persistence, &created.id);
    assert_eq!(again.unwrap_err().kind(), ErrorKind::NotFound);
}

#[test]
fn test_blank_job_request_id_is_rejected() {
    let mut persistence = setup_test_persistence();
    seed_company(&mut persistence, "Acme");
    let existing: JobRequestInfo = seed_job_request(&mut persistence, "Acme");

    let get: Result<JobRequestInfo, ApiError> = get_job_request(&mut persistence, "   ");
    let update: Result<JobRequestInfo, ApiError> = update_job_request(
        &mut persistence,
        "",
        &UpdateJobRequestRequest {
            description: Some(String::from("Burst pipe")),
            ..UpdateJobRequestRequest::default()
        },
    );
    let delete: Result<JobRequestInfo, ApiError> = delete_job_request(&mut persistence, " ");

    for result in [get, update, delete] {
        assert!(matches!(
            result,
            Err(ApiError::InvalidInput { ref field, .. }) if field == "jobRequestId"
        ));
    }
    assert_eq!(get_job_request(&mut persistence, &existing.id).unwrap(), existing);
}
