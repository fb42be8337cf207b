// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for facilitydesk.
//!
//! Each entity family owns one table (plus a child table for work order
//! comments and invoice items). Cross-entity references such as a job
//! request's company or a work order's contractor are plain id columns with
//! no foreign key: the API layer checks them when records are written, and
//! later edits to the referenced record do not cascade.
//!
//! ## Backend
//!
//! `SQLite` via Diesel. In-memory databases back the test suite; file
//! databases are opened in WAL mode. Migrations are embedded and applied on
//! every open.
//!
//! ## Conventions
//!
//! - Money is stored as integer cents and tax rates as hundredths
//! - Timestamps are stored as RFC 3339 text
//! - Lookups return `Ok(None)` for a missing record; updates and deletes
//!   return `PersistenceError::NotFound`

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
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use facilitydesk_domain::{Charge, Company, Invoice, JobRequest, RecordId, Role, User, WorkOrder, WorkOrderComment};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use data_models::{
    AuthRecordData, ChargePatch, InvoiceFilter, InvoicePatch, JobRequestFilter, JobRequestPatch,
    StoredTotals, WorkOrderFilter, WorkOrderPatch,
};
pub use error::PersistenceError;
pub use mutations::users::hash_password;

use backend::PersistenceBackend;
use data_models::decode_record_id;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Type alias used by callers that name the backend explicitly.
pub type SqlitePersistence = Persistence;

/// Persistence adapter over a single `SQLite` connection.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives its own shared-cache database, so tests are isolated.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("facilitydesk_mem_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        conn.verify_foreign_key_enforcement()?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        conn.verify_foreign_key_enforcement()?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        self.conn.verify_foreign_key_enforcement()
    }

    // ========================================================================
    // Companies
    // ========================================================================

    /// Stores a new company.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::UniqueViolation` if the name is taken.
    pub fn create_company(&mut self, company: &Company) -> Result<RecordId, PersistenceError> {
        decode_record_id(mutations::companies::insert_company(&mut self.conn, company)?)
    }

    /// Retrieves a company by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_company(&mut self, company_id: RecordId) -> Result<Option<Company>, PersistenceError> {
        queries::companies::get_company_by_id(&mut self.conn, company_id.value())
    }

    /// Retrieves a company by exact name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_company_by_name(
        &mut self,
        company_name: &str,
    ) -> Result<Option<Company>, PersistenceError> {
        queries::companies::get_company_by_name(&mut self.conn, company_name)
    }

    /// Lists every company.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_companies(&mut self) -> Result<Vec<Company>, PersistenceError> {
        queries::companies::list_companies(&mut self.conn)
    }

    /// Sets a company's active flag.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the company does not exist.
    pub fn set_company_active(
        &mut self,
        company_id: RecordId,
        is_active: bool,
    ) -> Result<(), PersistenceError> {
        mutations::companies::set_company_active(&mut self.conn, company_id.value(), is_active)
    }

    // ========================================================================
    // Users & Credentials
    // ========================================================================

    /// Stores a new user without credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_user(&mut self, user: &User) -> Result<RecordId, PersistenceError> {
        decode_record_id(mutations::users::insert_user(&mut self.conn, user)?)
    }

    /// Stores a new user and its credentials atomically.
    ///
    /// # Arguments
    ///
    /// * `user` - The user to store
    /// * `email` - Lowercase login email
    /// * `password` - Plain-text password, hashed before storage
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::UniqueViolation` if the email is taken,
    /// in which case no user is stored.
    pub fn create_user_with_credentials(
        &mut self,
        user: &User,
        email: &str,
        password: &str,
    ) -> Result<RecordId, PersistenceError> {
        let password_hash: String = hash_password(password)?;
        decode_record_id(mutations::users::insert_user_with_credentials(
            &mut self.conn,
            user,
            email,
            &password_hash,
        )?)
    }

    /// Stores credentials for an existing user.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::UniqueViolation` if the email is taken or
    /// the user already has credentials.
    pub fn create_auth_record(
        &mut self,
        user_id: RecordId,
        email: &str,
        password: &str,
    ) -> Result<(), PersistenceError> {
        let password_hash: String = hash_password(password)?;
        mutations::users::insert_auth_record(&mut self.conn, user_id.value(), email, &password_hash)
    }

    /// Retrieves a user by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_user(&mut self, user_id: RecordId) -> Result<Option<User>, PersistenceError> {
        queries::users::get_user_by_id(&mut self.conn, user_id.value())
    }

    /// Lists users, optionally only those with one role.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_users(&mut self, role: Option<Role>) -> Result<Vec<User>, PersistenceError> {
        queries::users::list_users(&mut self.conn, role)
    }

    /// Retrieves the credentials stored under a lowercase login email.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_auth_by_email(
        &mut self,
        email: &str,
    ) -> Result<Option<AuthRecordData>, PersistenceError> {
        queries::users::get_auth_by_email(&mut self.conn, email)
    }

    // ========================================================================
    // Job Requests
    // ========================================================================

    /// Stores a new job request.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_job_request(&mut self, request: &JobRequest) -> Result<RecordId, PersistenceError> {
        decode_record_id(mutations::job_requests::insert_job_request(
            &mut self.conn,
            request,
        )?)
    }

    /// Retrieves a job request by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_job_request(
        &mut self,
        job_request_id: RecordId,
    ) -> Result<Option<JobRequest>, PersistenceError> {
        queries::job_requests::get_job_request(&mut self.conn, job_request_id.value())
    }

    /// Lists job requests matching a filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_job_requests(
        &mut self,
        filter: &JobRequestFilter,
    ) -> Result<Vec<JobRequest>, PersistenceError> {
        queries::job_requests::list_job_requests(&mut self.conn, filter)
    }

    /// Applies a non-empty patch to a job request.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the job request does not exist.
    pub fn update_job_request(
        &mut self,
        job_request_id: RecordId,
        patch: &JobRequestPatch,
    ) -> Result<(), PersistenceError> {
        mutations::job_requests::update_job_request(&mut self.conn, job_request_id.value(), patch)
    }

    /// Deletes a job request.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the job request does not exist.
    pub fn delete_job_request(&mut self, job_request_id: RecordId) -> Result<(), PersistenceError> {
        mutations::job_requests::delete_job_request(&mut self.conn, job_request_id.value())
    }

    // ========================================================================
    // Work Orders
    // ========================================================================

    /// Stores a new work order with its initial comments.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_work_order(&mut self, work_order: &WorkOrder) -> Result<RecordId, PersistenceError> {
        decode_record_id(mutations::work_orders::insert_work_order(
            &mut self.conn,
            work_order,
        )?)
    }

    /// Retrieves a work order with its comments.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_work_order(
        &mut self,
        work_order_id: RecordId,
    ) -> Result<Option<WorkOrder>, PersistenceError> {
        queries::work_orders::get_work_order(&mut self.conn, work_order_id.value())
    }

    /// Lists work orders matching a filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_work_orders(
        &mut self,
        filter: &WorkOrderFilter,
    ) -> Result<Vec<WorkOrder>, PersistenceError> {
        queries::work_orders::list_work_orders(&mut self.conn, filter)
    }

    /// Applies a non-empty patch to a work order.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the work order does not exist.
    pub fn update_work_order(
        &mut self,
        work_order_id: RecordId,
        patch: &WorkOrderPatch,
    ) -> Result<(), PersistenceError> {
        mutations::work_orders::update_work_order(&mut self.conn, work_order_id.value(), patch)
    }

    /// Appends a comment to a work order.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the work order does not exist.
    pub fn append_work_order_comment(
        &mut self,
        work_order_id: RecordId,
        comment: &WorkOrderComment,
    ) -> Result<(), PersistenceError> {
        mutations::work_orders::append_comment(&mut self.conn, work_order_id.value(), comment)
    }

    /// Deletes a work order and its comments.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the work order does not exist.
    pub fn delete_work_order(&mut self, work_order_id: RecordId) -> Result<(), PersistenceError> {
        mutations::work_orders::delete_work_order(&mut self.conn, work_order_id.value())
    }

    // ========================================================================
    // Charges
    // ========================================================================

    /// Stores a new charge under its caller-supplied code.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::UniqueViolation` if the code is taken.
    pub fn create_charge(&mut self, charge: &Charge) -> Result<(), PersistenceError> {
        mutations::charges::insert_charge(&mut self.conn, charge)
    }

    /// Retrieves a charge by code.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_charge(&mut self, charge_id: &str) -> Result<Option<Charge>, PersistenceError> {
        queries::charges::get_charge(&mut self.conn, charge_id)
    }

    /// Lists charges, optionally only those in one category.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_charges(&mut self, category: Option<&str>) -> Result<Vec<Charge>, PersistenceError> {
        queries::charges::list_charges(&mut self.conn, category)
    }

    /// Applies a non-empty patch to a charge.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the charge does not exist.
    pub fn update_charge(
        &mut self,
        charge_id: &str,
        patch: &ChargePatch,
    ) -> Result<(), PersistenceError> {
        mutations::charges::update_charge(&mut self.conn, charge_id, patch)
    }

    /// Deletes a charge.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the charge does not exist.
    pub fn delete_charge(&mut self, charge_id: &str) -> Result<(), PersistenceError> {
        mutations::charges::delete_charge(&mut self.conn, charge_id)
    }

    // ========================================================================
    // Invoices
    // ========================================================================

    /// Stores a new invoice with its items.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_invoice(&mut self, invoice: &Invoice) -> Result<RecordId, PersistenceError> {
        decode_record_id(mutations::invoices::insert_invoice(&mut self.conn, invoice)?)
    }

    /// Retrieves an invoice with its items.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_invoice(&mut self, invoice_id: RecordId) -> Result<Option<Invoice>, PersistenceError> {
        queries::invoices::get_invoice(&mut self.conn, invoice_id.value())
    }

    /// Lists invoices matching a filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_invoices(&mut self, filter: &InvoiceFilter) -> Result<Vec<Invoice>, PersistenceError> {
        queries::invoices::list_invoices(&mut self.conn, filter)
    }

    /// Applies a non-empty patch to an invoice.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the invoice does not exist.
    pub fn update_invoice(
        &mut self,
        invoice_id: RecordId,
        patch: &InvoicePatch,
    ) -> Result<(), PersistenceError> {
        mutations::invoices::update_invoice(&mut self.conn, invoice_id.value(), patch)
    }

    /// Deletes an invoice and its items.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the invoice does not exist.
    pub fn delete_invoice(&mut self, invoice_id: RecordId) -> Result<(), PersistenceError> {
        mutations::invoices::delete_invoice(&mut self.conn, invoice_id.value())
    }
}
