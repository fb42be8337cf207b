// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod charge_tests;
mod company_tests;
mod invoice_tests;

use facilitydesk_domain::{
    Charge, Company, Invoice, InvoiceItem, InvoiceStatus, JobRequest, JobRequestStatus, Money,
    PrimaryContact, Priority, RecordId, Role, TaxRate, User, WorkOrder, WorkOrderComment,
    WorkOrderStatus,
};
use time::OffsetDateTime;
use time::macros::datetime;

pub const fn created_at() -> OffsetDateTime {
    datetime!(2026-01-12 09:30 UTC)
}

pub fn create_test_company(name: &str) -> Company {
    Company {
        company_id: None,
        company_name: name.to_string(),
        website: String::from("https://acme.example.com"),
        address: String::from("100 Main St"),
        city: String::from("Austin"),
        state: String::from("TX"),
        zip_code: 78701,
        primary_contact: PrimaryContact {
            name: String::from("Jane Doe"),
            email: String::from("jane@acme.example.com"),
            phone: String::from("512-555-0100"),
            title: String::from("Facilities Manager"),
        },
        is_active: true,
    }
}

pub fn create_test_user(role: Role, first_name: &str, last_name: &str) -> User {
    User {
        user_id: None,
        role,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        city: String::from("Austin"),
        state: String::from("TX"),
        phone: String::from("512-555-0199"),
        skills: vec![String::from("plumbing"), String::from("electrical")],
    }
}

pub fn create_test_job_request(company_id: RecordId, company_name: &str) -> JobRequest {
    JobRequest {
        job_request_id: None,
        company_id,
        company_name: company_name.to_string(),
        category: String::from("Plumbing"),
        priority: Priority::High,
        description: String::from("Leaking pipe in break room"),
        address: String::from("100 Main St"),
        city: String::from("Austin"),
        state: String::from("TX"),
        zip_code: 78701,
        attachment_url: None,
        status: JobRequestStatus::Pending,
        requested_date: None,
        created_at: created_at(),
    }
}

pub fn create_test_work_order(job_request_id: RecordId) -> WorkOrder {
    WorkOrder {
        work_order_id: None,
        job_request_id,
        company_name: String::from("Acme"),
        assigned_contractor_id: None,
        priority: Priority::High,
        description: String::from("Leaking pipe in break room"),
        address: String::from("100 Main St"),
        city: String::from("Austin"),
        state: String::from("TX"),
        zip_code: 78701,
        latitude: None,
        longitude: None,
        status: WorkOrderStatus::NotStarted,
        start_date: Some(created_at()),
        estimated_end_date: None,
        comments: Vec::new(),
        created_at: created_at(),
    }
}

pub fn create_test_comment(text: &str) -> WorkOrderComment {
    WorkOrderComment {
        comment_id: None,
        author_name: Some(String::from("Sam Smith")),
        text: text.to_string(),
    }
}

pub fn create_test_charge(code: &str, cents: i64) -> Charge {
    Charge {
        charge_id: code.to_string(),
        category: String::from("Hardware"),
        description: format!("Service {code}"),
        avg_charge: Money::from_cents(cents).unwrap(),
        last_updated: None,
    }
}

pub fn create_test_item(code: &str, cents: i64, quantity: u32) -> InvoiceItem {
    let price: Money = Money::from_cents(cents).unwrap();
    InvoiceItem {
        charge_code: code.to_string(),
        description: format!("Service {code}"),
        price,
        quantity,
        line_total: price.checked_mul(quantity).unwrap(),
    }
}

/// Builds the 2 x 150.00 at 9% invoice used across the invoice tests.
pub fn create_test_invoice(work_order_id: RecordId) -> Invoice {
    Invoice {
        invoice_id: None,
        work_order_id,
        company_name: String::from("Acme"),
        dataset_work_ids: vec![String::from("WO-1")],
        items: vec![create_test_item("HWO-101", 15000, 2)],
        subtotal: Money::from_cents(30000).unwrap(),
        tax_rate: TaxRate::from_hundredths(9).unwrap(),
        tax: Money::from_cents(2700).unwrap(),
        total: Money::from_cents(32700).unwrap(),
        status: InvoiceStatus::Draft,
        issued_date: None,
        paid_date: None,
        created_at: created_at(),
    }
}
