// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Company repository.

use facilitydesk_domain::{
    Company, PrimaryContact, RecordId, email, non_empty_string, optional_string, phone, us_state,
    zip_code,
};
use facilitydesk_persistence::Persistence;
use tracing::{info, warn};

use super::{parse_id, validated};
use crate::error::{ApiError, translate_persistence_error};
use crate::request_response::{CompanyInfo, CreateCompanyRequest};

const RESOURCE: &str = "Company";

fn store_error(err: facilitydesk_persistence::PersistenceError) -> ApiError {
    translate_persistence_error(RESOURCE, err)
}

/// Creates a company.
///
/// # Errors
///
/// Returns an error if:
/// - Any field fails validation
/// - A company with the same name already exists
pub fn create_company(
    persistence: &mut Persistence,
    request: CreateCompanyRequest,
) -> Result<CompanyInfo, ApiError> {
    let company_name: String = validated(non_empty_string(&request.company_name, "companyName"))?;
    let contact = &request.primary_contact;
    let company: Company = Company {
        company_id: None,
        website: optional_string(request.website.as_deref()),
        address: validated(non_empty_string(&request.address, "address"))?,
        city: validated(non_empty_string(&request.city, "city"))?,
        state: validated(us_state(&request.state))?,
        zip_code: validated(zip_code(&request.zip_code))?,
        primary_contact: PrimaryContact {
            name: validated(non_empty_string(&contact.name, "primaryContact.name"))?,
            email: validated(email(&contact.email, "primaryContact.email"))?,
            phone: validated(phone(&contact.phone, "primaryContact.phone"))?,
            title: validated(non_empty_string(&contact.title, "primaryContact.title"))?,
        },
        is_active: request.is_active.unwrap_or(true),
        company_name,
    };

    if persistence
        .get_company_by_name(&company.company_name)
        .map_err(store_error)?
        .is_some()
    {
        warn!(company_name = %company.company_name, "Rejected duplicate company name");
        return Err(ApiError::Conflict {
            resource_type: String::from(RESOURCE),
            message: format!("Company '{}' already exists", company.company_name),
        });
    }

    let company_id: RecordId = persistence.create_company(&company).map_err(store_error)?;
    info!(%company_id, company_name = %company.company_name, "Company created");

    CompanyInfo::from_company(Company {
        company_id: Some(company_id),
        ..company
    })
}

/// Retrieves a company by id.
///
/// # Errors
///
/// Returns an error if the id is malformed or no company has it.
pub fn get_company(persistence: &mut Persistence, company_id: &str) -> Result<CompanyInfo, ApiError> {
    let id: RecordId = parse_id(company_id, "companyId")?;
    let company: Company = persistence
        .get_company(id)
        .map_err(store_error)?
        .ok_or_else(|| ApiError::not_found(RESOURCE, company_id.trim()))?;
    CompanyInfo::from_company(company)
}

/// Loads a company by its exact name.
///
/// # Errors
///
/// Returns an error if the name is blank or no company has it.
pub fn resolve_company_by_name(
    persistence: &mut Persistence,
    company_name: &str,
) -> Result<Company, ApiError> {
    let name: String = validated(non_empty_string(company_name, "companyName"))?;
    persistence
        .get_company_by_name(&name)
        .map_err(store_error)?
        .ok_or_else(|| ApiError::not_found(RESOURCE, &name))
}

/// Loads a company by name and requires it to be active.
///
/// # Errors
///
/// Returns `ResourceNotFound` if no company has the name, or
/// `ReferentialViolation` if the company is inactive.
pub fn resolve_active_company(
    persistence: &mut Persistence,
    company_name: &str,
) -> Result<Company, ApiError> {
    let company: Company = resolve_company_by_name(persistence, company_name)?;
    if !company.is_active {
        warn!(company_name = %company.company_name, "Rejected inactive company");
        return Err(ApiError::ReferentialViolation {
            rule: String::from("active_company"),
            message: format!("Company '{}' is inactive", company.company_name),
        });
    }
    Ok(company)
}

/// Retrieves a company by its exact, case-sensitive name.
///
/// # Errors
///
/// Returns an error if no company has the name.
pub fn get_company_by_name(
    persistence: &mut Persistence,
    company_name: &str,
) -> Result<CompanyInfo, ApiError> {
    CompanyInfo::from_company(resolve_company_by_name(persistence, company_name)?)
}

/// Retrieves an active company by name.
///
/// # Errors
///
/// Returns an error if no company has the name or it is inactive.
pub fn get_active_company_by_name(
    persistence: &mut Persistence,
    company_name: &str,
) -> Result<CompanyInfo, ApiError> {
    CompanyInfo::from_company(resolve_active_company(persistence, company_name)?)
}

/// Lists every company ordered by name.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_companies(persistence: &mut Persistence) -> Result<Vec<CompanyInfo>, ApiError> {
    persistence
        .list_companies()
        .map_err(store_error)?
        .into_iter()
        .map(CompanyInfo::from_company)
        .collect()
}

/// Activates or deactivates a company.
///
/// Existing job requests are not touched.
///
/// # Errors
///
/// Returns an error if the id is malformed or no company has it.
pub fn set_company_active(
    persistence: &mut Persistence,
    company_id: &str,
    is_active: bool,
) -> Result<CompanyInfo, ApiError> {
    let id: RecordId = parse_id(company_id, "companyId")?;
    persistence
        .set_company_active(id, is_active)
        .map_err(store_error)?;
    info!(company_id = %id, is_active, "Company active flag changed");
    get_company(persistence, company_id)
}
