// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use facilitydesk_domain::{RecordId, Role, ZipCodeInput};
use facilitydesk_persistence::Persistence;

use crate::handlers::{charges, companies, job_requests, users, work_orders};
use crate::{
    AuthenticatedPrincipal, ChargeInfo, CompanyInfo, CreateChargeRequest, CreateCompanyRequest,
    CreateJobRequestRequest, CreateUserRequest, CreateWorkOrderRequest, JobRequestInfo,
    PrimaryContactRequest, SignupRequest, UserInfo, WorkOrderInfo,
};

pub const TEST_PASSWORD: &str = "hunter22";

pub fn setup_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

pub fn company_request(name: &str) -> CreateCompanyRequest {
    CreateCompanyRequest {
        company_name: String::from(name),
        website: Some(String::from("https://example.com")),
        address: String::from("1 Main St"),
        city: String::from("Portland"),
        state: String::from("or"),
        zip_code: ZipCodeInput::from("97201"),
        primary_contact: PrimaryContactRequest {
            name: String::from("Pat Lee"),
            email: String::from("pat@example.com"),
            phone: String::from("503-555-0100"),
            title: String::from("Facilities Manager"),
        },
        is_active: None,
    }
}

pub fn seed_company(persistence: &mut Persistence, name: &str) -> CompanyInfo {
    companies::create_company(persistence, company_request(name)).expect("Failed to seed company")
}

pub fn job_request_request(company_name: &str) -> CreateJobRequestRequest {
    CreateJobRequestRequest {
        company_name: String::from(company_name),
        category: String::from("Plumbing"),
        priority: String::from("high"),
        description: String::from("Leaking pipe in basement"),
        address: String::from("1 Main St"),
        city: String::from("Portland"),
        state: String::from("OR"),
        zip_code: ZipCodeInput::from(97201),
        attachment_url: None,
        requested_date: None,
        status: None,
    }
}

pub fn seed_job_request(persistence: &mut Persistence, company_name: &str) -> JobRequestInfo {
    job_requests::create_job_request(persistence, &job_request_request(company_name))
        .expect("Failed to seed job request")
}

pub fn work_order_request(job_request_id: &str) -> CreateWorkOrderRequest {
    CreateWorkOrderRequest {
        job_request_id: String::from(job_request_id),
        company_name: String::from("Acme"),
        assigned_contractor_id: None,
        priority: String::from("medium"),
        description: String::from("Replace pipe section"),
        address: String::from("1 Main St"),
        city: String::from("Portland"),
        state: String::from("OR"),
        zip_code: ZipCodeInput::from("97201"),
        latitude: None,
        longitude: None,
        status: None,
        start_date: None,
        estimated_end_date: None,
        comments: None,
    }
}

pub fn seed_work_order(persistence: &mut Persistence) -> WorkOrderInfo {
    seed_company(persistence, "Acme");
    let job_request: JobRequestInfo = seed_job_request(persistence, "Acme");
    work_orders::create_work_order(persistence, &work_order_request(&job_request.id))
        .expect("Failed to seed work order")
}

pub fn user_request(role: &str, first_name: &str, last_name: &str) -> CreateUserRequest {
    CreateUserRequest {
        role: String::from(role),
        first_name: String::from(first_name),
        last_name: String::from(last_name),
        city: String::from("Portland"),
        state: String::from("OR"),
        phone: String::from("503-555-0101"),
        skills: vec![String::from("Plumbing")],
    }
}

pub fn signup_request(email: &str) -> SignupRequest {
    SignupRequest {
        first_name: String::from("Casey"),
        last_name: String::from("Jones"),
        city: String::from("St. Helens"),
        state: String::from("OR"),
        phone: String::from("503-555-0102"),
        skills: vec![String::from("electrical")],
        email: String::from(email),
        password: String::from(TEST_PASSWORD),
        confirm_password: String::from(TEST_PASSWORD),
    }
}

fn principal_for(user: &UserInfo, role: Role) -> AuthenticatedPrincipal {
    let user_id: RecordId = user.id.parse().expect("User id should parse");
    AuthenticatedPrincipal::new(
        user_id,
        format!("{} {}", user.first_name, user.last_name),
        role,
    )
}

pub fn seed_admin(persistence: &mut Persistence) -> AuthenticatedPrincipal {
    let user: UserInfo = users::create_user(persistence, &user_request("admin", "Alex", "Admin"))
        .expect("Failed to seed admin");
    principal_for(&user, Role::Admin)
}

pub fn seed_contractor(
    persistence: &mut Persistence,
    first_name: &str,
    last_name: &str,
) -> AuthenticatedPrincipal {
    let user: UserInfo = users::create_user(
        persistence,
        &user_request("contractor", first_name, last_name),
    )
    .expect("Failed to seed contractor");
    principal_for(&user, Role::Contractor)
}

pub fn charge_request(code: &str, avg_charge: f64) -> CreateChargeRequest {
    CreateChargeRequest {
        charge_id: String::from(code),
        category: String::from("Hardware"),
        description: String::from("Standard hardware install"),
        avg_charge,
        last_updated: Some(String::from("2026-01-05")),
    }
}

pub fn seed_charge(
    persistence: &mut Persistence,
    admin: &AuthenticatedPrincipal,
    code: &str,
    avg_charge: f64,
) -> ChargeInfo {
    charges::create_charge(persistence, admin, &charge_request(code, avg_charge))
        .expect("Failed to seed charge")
}
