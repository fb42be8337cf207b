// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use facilitydesk_domain::ZipCodeInput;

use crate::handlers::companies::{
    create_company, get_active_company_by_name, get_company, get_company_by_name, list_companies,
    set_company_active,
};
use crate::{ApiError, CompanyInfo, CreateCompanyRequest, ErrorKind};

use super::helpers::{company_request, seed_company, setup_test_persistence};

#[test]
fn test_create_company_normalizes_fields() {
    let mut persistence = setup_test_persistence();

    let company: CompanyInfo = seed_company(&mut persistence, "Acme");

    assert_eq!(company.company_name, "Acme");
    assert_eq!(company.state, "OR");
    assert_eq!(company.zip_code, 97201);
    assert!(company.is_active);
    assert!(!company.id.is_empty());
}

#[test]
fn test_duplicate_company_name_is_conflict() {
    let mut persistence = setup_test_persistence();
    seed_company(&mut persistence, "Acme");

    let result: Result<CompanyInfo, ApiError> =
        create_company(&mut persistence, company_request("Acme"));

    assert_eq!(result.unwrap_err().kind(), ErrorKind::Conflict);
}

#[test]
fn test_company_names_are_case_sensitive() {
    let mut persistence = setup_test_persistence();
    seed_company(&mut persistence, "Acme");

    let result: Result<CompanyInfo, ApiError> =
        create_company(&mut persistence, company_request("ACME"));

    assert!(result.is_ok());
    let missing: Result<CompanyInfo, ApiError> = get_company_by_name(&mut persistence, "acme");
    assert!(matches!(missing, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_invalid_zip_code_names_field() {
    let mut persistence = setup_test_persistence();
    let request: CreateCompanyRequest = CreateCompanyRequest {
        zip_code: ZipCodeInput::from("9720"),
        ..company_request("Acme")
    };

    let result: Result<CompanyInfo, ApiError> = create_company(&mut persistence, request);

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "zipCode"
    ));
}

#[test]
fn test_get_company_by_id() {
    let mut persistence = setup_test_persistence();
    let created: CompanyInfo = seed_company(&mut persistence, "Acme");

    let fetched: CompanyInfo = get_company(&mut persistence, &created.id).unwrap();

    assert_eq!(fetched, created);
}

#[test]
fn test_get_company_with_malformed_id_is_validation_error() {
    let mut persistence = setup_test_persistence();

    let result: Result<CompanyInfo, ApiError> = get_company(&mut persistence, "abc");

    assert_eq!(result.unwrap_err().kind(), ErrorKind::Validation);
}

#[test]
fn test_get_active_company_rejects_inactive() {
    let mut persistence = setup_test_persistence();
    let created: CompanyInfo = seed_company(&mut persistence, "Acme");
    set_company_active(&mut persistence, &created.id, false).unwrap();

    let result: Result<CompanyInfo, ApiError> =
        get_active_company_by_name(&mut persistence, "Acme");

    assert_eq!(result.unwrap_err().kind(), ErrorKind::Referential);
    assert!(get_company_by_name(&mut persistence, "Acme").is_ok());
}

#[test]
fn test_set_company_active_on_missing_company() {
    let mut persistence = setup_test_persistence();

    let result: Result<CompanyInfo, ApiError> = set_company_active(&mut persistence, "42", false);

    assert_eq!(result.unwrap_err().kind(), ErrorKind::NotFound);
}

#[test]
fn test_list_companies() {
    let mut persistence = setup_test_persistence();
    seed_company(&mut persistence, "Zenith");
    seed_company(&mut persistence, "Acme");

    let companies: Vec<CompanyInfo> = list_companies(&mut persistence).unwrap();

    let names: Vec<&str> = companies.iter().map(|c| c.company_name.as_str()).collect();
    assert_eq!(names, vec!["Acme", "Zenith"]);
}
