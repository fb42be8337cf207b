// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command execution.
//!
//! Every command returns the JSON document that `main` prints.

use std::path::Path;

use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use facilitydesk_api::handlers::{charges, companies, invoices, job_requests, users, work_orders};
use facilitydesk_api::{
    AuthenticatedPrincipal, CreateAuthRecordRequest, InvoiceListRequest, JobRequestListRequest,
    LoginRequest, LoginResponse, WorkOrderListRequest, reporting, workflows,
};
use facilitydesk_persistence::Persistence;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use time::{Date, OffsetDateTime};
use tracing::debug;

use crate::cli::{
    ChargeCommand, Command, CompanyCommand, Credentials, InvoiceCommand, InvoiceFilterArgs,
    JobRequestCommand, JobRequestFilterArgs, UserCommand, WorkOrderCommand, WorkOrderFilterArgs,
};

/// Reads and parses a JSON payload file.
pub fn read_payload<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text: String = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read payload {}", path.display()))?;
    serde_json::from_str(&text).wrap_err_with(|| format!("Invalid payload in {}", path.display()))
}

fn to_json<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).wrap_err("Failed to encode response")
}

/// Logs in with the supplied credentials.
fn login(persistence: &mut Persistence, credentials: &Credentials) -> Result<AuthenticatedPrincipal> {
    let (Some(email), Some(password)) = (&credentials.email, &credentials.password) else {
        return Err(eyre!("This command needs --email and --password"));
    };
    let request: LoginRequest = LoginRequest {
        email: email.clone(),
        password: password.clone(),
    };
    Ok(users::login(persistence, &request)?)
}

/// Logs in only when credentials were given.
fn optional_login(
    persistence: &mut Persistence,
    credentials: &Credentials,
) -> Result<Option<AuthenticatedPrincipal>> {
    if credentials.email.is_none() && credentials.password.is_none() {
        return Ok(None);
    }
    login(persistence, credentials).map(Some)
}

/// Runs one command against an open store.
///
/// # Errors
///
/// Returns an error if a payload cannot be read, a login fails, or the
/// operation is rejected.
pub fn run(
    command: Command,
    persistence: &mut Persistence,
    credentials: &Credentials,
    today: Date,
) -> Result<Value> {
    debug!(?command, "Running command");
    match command {
        Command::Companies(command) => run_company(command, persistence),
        Command::Users(command) => run_user(command, persistence, credentials),
        Command::JobRequests(command) => run_job_request(command, persistence, credentials),
        Command::WorkOrders(command) => run_work_order(command, persistence, credentials),
        Command::Charges(command) => run_charge(command, persistence, credentials),
        Command::Invoices(command) => run_invoice(command, persistence, credentials),
        Command::Stats => to_json(&reporting::work_order_statistics(persistence)?),
        Command::Schedule {
            week_offset,
            today: requested,
        } => to_json(&reporting::week_schedule(
            persistence,
            requested.unwrap_or(today),
            week_offset,
        )?),
        Command::Dashboard => to_json(&reporting::admin_dashboard(persistence)?),
    }
}

/// The current UTC date.
#[must_use]
pub fn current_date() -> Date {
    OffsetDateTime::now_utc().date()
}

fn run_company(command: CompanyCommand, persistence: &mut Persistence) -> Result<Value> {
    match command {
        CompanyCommand::Create { payload } => {
            to_json(&companies::create_company(persistence, read_payload(&payload)?)?)
        }
        CompanyCommand::List => to_json(&companies::list_companies(persistence)?),
        CompanyCommand::Show { key, by_name } => {
            if by_name {
                to_json(&companies::get_company_by_name(persistence, &key)?)
            } else {
                to_json(&companies::get_company(persistence, &key)?)
            }
        }
        CompanyCommand::SetActive { id, active } => {
            to_json(&companies::set_company_active(persistence, &id, active)?)
        }
    }
}

fn run_user(
    command: UserCommand,
    persistence: &mut Persistence,
    credentials: &Credentials,
) -> Result<Value> {
    match command {
        UserCommand::Create { payload } => {
            to_json(&users::create_user(persistence, &read_payload(&payload)?)?)
        }
        UserCommand::List { role } => to_json(&users::list_users(persistence, role.as_deref())?),
        UserCommand::Show { id } => to_json(&users::get_user(persistence, &id)?),
        UserCommand::Signup { payload } => {
            to_json(&users::signup_contractor(persistence, &read_payload(&payload)?)?)
        }
        UserCommand::Credentials { payload } => {
            let request: CreateAuthRecordRequest = read_payload(&payload)?;
            users::create_auth_record(persistence, &request)?;
            Ok(json!({ "userId": request.user_id.trim() }))
        }
        UserCommand::Whoami => {
            let principal: AuthenticatedPrincipal = login(persistence, credentials)?;
            to_json(&LoginResponse::from(&principal))
        }
    }
}

fn job_request_filter(filter: JobRequestFilterArgs) -> JobRequestListRequest {
    JobRequestListRequest {
        status: filter.status,
        company_name: filter.company,
        priority: filter.priority,
        category: filter.category,
    }
}

fn run_job_request(
    command: JobRequestCommand,
    persistence: &mut Persistence,
    credentials: &Credentials,
) -> Result<Value> {
    match command {
        JobRequestCommand::Submit { payload } => to_json(&job_requests::create_job_request(
            persistence,
            &read_payload(&payload)?,
        )?),
        JobRequestCommand::List { filter } => to_json(&job_requests::list_job_requests(
            persistence,
            &job_request_filter(filter),
        )?),
        JobRequestCommand::Show { id } => to_json(&job_requests::get_job_request(persistence, &id)?),
        JobRequestCommand::Update { id, payload } => to_json(&job_requests::update_job_request(
            persistence,
            &id,
            &read_payload(&payload)?,
        )?),
        JobRequestCommand::Approve { id } => {
            let principal: AuthenticatedPrincipal = login(persistence, credentials)?;
            to_json(&workflows::approve_job_request(persistence, &principal, &id)?)
        }
        JobRequestCommand::Reject { id } => {
            let principal: AuthenticatedPrincipal = login(persistence, credentials)?;
            to_json(&workflows::reject_job_request(persistence, &principal, &id)?)
        }
        JobRequestCommand::Remove { id } => {
            to_json(&job_requests::delete_job_request(persistence, &id)?)
        }
    }
}

fn work_order_filter(filter: WorkOrderFilterArgs) -> WorkOrderListRequest {
    WorkOrderListRequest {
        status: filter.status,
        contractor_id: filter.contractor,
        job_request_id: filter.job_request,
        priority: filter.priority,
    }
}

fn run_work_order(
    command: WorkOrderCommand,
    persistence: &mut Persistence,
    credentials: &Credentials,
) -> Result<Value> {
    match command {
        WorkOrderCommand::Create { payload } => to_json(&work_orders::create_work_order(
            persistence,
            &read_payload(&payload)?,
        )?),
        WorkOrderCommand::List { filter } => {
            let request: WorkOrderListRequest = work_order_filter(filter);
            match optional_login(persistence, credentials)? {
                Some(principal) => to_json(&work_orders::list_work_orders_as(
                    persistence,
                    &principal,
                    &request,
                )?),
                None => to_json(&work_orders::list_work_orders(persistence, &request)?),
            }
        }
        WorkOrderCommand::Show { id } => match optional_login(persistence, credentials)? {
            Some(principal) => to_json(&work_orders::get_work_order_as(
                persistence,
                &principal,
                &id,
            )?),
            None => to_json(&work_orders::get_work_order(persistence, &id)?),
        },
        WorkOrderCommand::Update { id, payload } => to_json(&work_orders::update_work_order(
            persistence,
            &id,
            &read_payload(&payload)?,
        )?),
        WorkOrderCommand::Comment { id, text } => {
            let principal: AuthenticatedPrincipal = login(persistence, credentials)?;
            to_json(&workflows::add_comment_as(persistence, &principal, &id, &text)?)
        }
        WorkOrderCommand::Remove { id } => {
            to_json(&work_orders::delete_work_order(persistence, &id)?)
        }
    }
}

fn run_charge(
    command: ChargeCommand,
    persistence: &mut Persistence,
    credentials: &Credentials,
) -> Result<Value> {
    match command {
        ChargeCommand::Create { payload } => {
            let principal: AuthenticatedPrincipal = login(persistence, credentials)?;
            to_json(&charges::create_charge(
                persistence,
                &principal,
                &read_payload(&payload)?,
            )?)
        }
        ChargeCommand::List { category } => {
            to_json(&charges::list_charges(persistence, category.as_deref())?)
        }
        ChargeCommand::Show { id } => to_json(&charges::get_charge(persistence, &id)?),
        ChargeCommand::Update { id, payload } => {
            let principal: AuthenticatedPrincipal = login(persistence, credentials)?;
            to_json(&charges::update_charge(
                persistence,
                &principal,
                &id,
                &read_payload(&payload)?,
            )?)
        }
        ChargeCommand::Remove { id } => {
            let principal: AuthenticatedPrincipal = login(persistence, credentials)?;
            to_json(&charges::delete_charge(persistence, &principal, &id)?)
        }
    }
}

fn invoice_filter(filter: InvoiceFilterArgs) -> InvoiceListRequest {
    InvoiceListRequest {
        status: filter.status,
        company_name: filter.company,
        work_order_id: filter.work_order,
    }
}

fn run_invoice(
    command: InvoiceCommand,
    persistence: &mut Persistence,
    credentials: &Credentials,
) -> Result<Value> {
    match command {
        InvoiceCommand::Create { payload } => {
            let principal: AuthenticatedPrincipal = login(persistence, credentials)?;
            to_json(&invoices::create_invoice(
                persistence,
                &principal,
                &read_payload(&payload)?,
            )?)
        }
        InvoiceCommand::List { filter } => to_json(&invoices::list_invoices(
            persistence,
            &invoice_filter(filter),
        )?),
        InvoiceCommand::Show { id } => to_json(&invoices::get_invoice(persistence, &id)?),
        InvoiceCommand::Update { id, payload } => {
            let principal: AuthenticatedPrincipal = login(persistence, credentials)?;
            to_json(&invoices::update_invoice(
                persistence,
                &principal,
                &id,
                &read_payload(&payload)?,
            )?)
        }
        InvoiceCommand::Remove { id } => {
            let principal: AuthenticatedPrincipal = login(persistence, credentials)?;
            to_json(&invoices::delete_invoice(persistence, &principal, &id)?)
        }
    }
}
