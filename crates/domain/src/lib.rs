// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod invoice;
mod money;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use invoice::{InvoiceTotals, ItemInput, compute_totals, price_item};
pub use money::{Money, TaxRate};

// Re-export public types
pub use types::{
    Charge, Company, Invoice, InvoiceItem, InvoiceStatus, JobRequest, JobRequestStatus,
    PrimaryContact, Priority, RecordId, Role, User, WorkOrder, WorkOrderComment, WorkOrderStatus,
    ZipCodeInput,
};
pub use validation::{
    attachment_url, city_name, comment_shape, coordinate, date, email, identifier,
    invoice_status, job_request_status, login_email, money, non_empty_string, optional_string,
    password, person_name, phone, positive_integer, priority, role, skills, tax_rate, us_state,
    work_order_status, zip_code,
};
