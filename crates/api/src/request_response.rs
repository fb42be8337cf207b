// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Requests carry raw caller input (strings, numbers, optional fields) and
//! are validated by the handlers. Responses render every id as a decimal
//! string and every timestamp as RFC 3339 text.

use facilitydesk_domain::{
    Charge, Company, Invoice, InvoiceItem, JobRequest, Money, TaxRate, User, WorkOrder,
    WorkOrderComment, ZipCodeInput,
};
use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::auth::AuthenticatedPrincipal;
use crate::error::ApiError;

/// Deserializes a field that distinguishes "absent" from "explicitly null".
///
/// Used with `#[serde(default)]`: a missing key stays `None`, `null`
/// becomes `Some(None)`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn format_timestamp(value: OffsetDateTime) -> Result<String, ApiError> {
    value.format(&Rfc3339).map_err(|e| ApiError::Internal {
        message: format!("Failed to format timestamp: {e}"),
    })
}

fn format_optional_timestamp(value: Option<OffsetDateTime>) -> Result<Option<String>, ApiError> {
    value.map(format_timestamp).transpose()
}

// ============================================================================
// Companies
// ============================================================================

/// A company's primary contact as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub title: String,
}

/// API request to create a company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompanyRequest {
    pub company_name: String,
    #[serde(default)]
    pub website: Option<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: ZipCodeInput,
    pub primary_contact: PrimaryContactRequest,
    /// Defaults to `true`.
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// A company's primary contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub title: String,
}

/// API response describing a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    pub id: String,
    pub company_name: String,
    pub website: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: u32,
    pub primary_contact: PrimaryContactInfo,
    pub is_active: bool,
}

impl CompanyInfo {
    /// Renders a stored company.
    ///
    /// # Errors
    ///
    /// Returns an error if the company was never persisted.
    pub fn from_company(company: Company) -> Result<Self, ApiError> {
        let id = company.company_id.ok_or_else(|| ApiError::Internal {
            message: String::from("Company has no id"),
        })?;
        Ok(Self {
            id: id.to_string(),
            company_name: company.company_name,
            website: company.website,
            address: company.address,
            city: company.city,
            state: company.state,
            zip_code: company.zip_code,
            primary_contact: PrimaryContactInfo {
                name: company.primary_contact.name,
                email: company.primary_contact.email,
                phone: company.primary_contact.phone,
                title: company.primary_contact.title,
            },
            is_active: company.is_active,
        })
    }
}

// ============================================================================
// Users
// ============================================================================

/// API request to create a user without credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub role: String,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub skills: Vec<String>,
}

/// API request for contractor self-signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// API request to attach login credentials to an existing user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuthRecordRequest {
    pub user_id: String,
    pub email: String,
    pub password: String,
}

/// API response describing a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub role: String,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub skills: Vec<String>,
}

impl UserInfo {
    /// Renders a stored user.
    ///
    /// # Errors
    ///
    /// Returns an error if the user was never persisted.
    pub fn from_user(user: User) -> Result<Self, ApiError> {
        let id = user.user_id.ok_or_else(|| ApiError::Internal {
            message: String::from("User has no id"),
        })?;
        Ok(Self {
            id: id.to_string(),
            role: user.role.to_string(),
            first_name: user.first_name,
            last_name: user.last_name,
            city: user.city,
            state: user.state,
            phone: user.phone,
            skills: user.skills,
        })
    }
}

/// API request to log in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// API response for a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user_id: String,
    pub display_name: String,
    pub role: String,
}

impl From<&AuthenticatedPrincipal> for LoginResponse {
    fn from(principal: &AuthenticatedPrincipal) -> Self {
        Self {
            user_id: principal.user_id.to_string(),
            display_name: principal.display_name.clone(),
            role: principal.role.to_string(),
        }
    }
}

// ============================================================================
// Job requests
// ============================================================================

/// API request to submit a job request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequestRequest {
    pub company_name: String,
    pub category: String,
    pub priority: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: ZipCodeInput,
    #[serde(default)]
    pub attachment_url: Option<String>,
    #[serde(default)]
    pub requested_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Filters for listing job requests. Every filter is validated first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRequestListRequest {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// API request to update a job request. Absent keys are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobRequestRequest {
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip_code: Option<ZipCodeInput>,
    #[serde(default, deserialize_with = "double_option")]
    pub attachment_url: Option<Option<String>>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub requested_date: Option<Option<String>>,
}

/// API response describing a job request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRequestInfo {
    pub id: String,
    pub company_id: String,
    pub company_name: String,
    pub category: String,
    pub priority: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: u32,
    pub attachment_url: Option<String>,
    pub status: String,
    pub requested_date: Option<String>,
    pub created_at: String,
}

impl JobRequestInfo {
    /// Renders a stored job request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request was never persisted or a timestamp
    /// cannot be formatted.
    pub fn from_job_request(request: JobRequest) -> Result<Self, ApiError> {
        let id = request.job_request_id.ok_or_else(|| ApiError::Internal {
            message: String::from("Job request has no id"),
        })?;
        Ok(Self {
            id: id.to_string(),
            company_id: request.company_id.to_string(),
            company_name: request.company_name,
            category: request.category,
            priority: request.priority.to_string(),
            description: request.description,
            address: request.address,
            city: request.city,
            state: request.state,
            zip_code: request.zip_code,
            attachment_url: request.attachment_url,
            status: request.status.to_string(),
            requested_date: format_optional_timestamp(request.requested_date)?,
            created_at: format_timestamp(request.created_at)?,
        })
    }
}

// ============================================================================
// Work orders
// ============================================================================

/// A work order comment as supplied by a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRequest {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Required. A missing key is treated as empty and rejected.
    #[serde(default)]
    pub comment: String,
}

/// API request to create a work order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkOrderRequest {
    pub job_request_id: String,
    pub company_name: String,
    #[serde(default)]
    pub assigned_contractor_id: Option<String>,
    pub priority: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: ZipCodeInput,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Defaults to `open`.
    #[serde(default)]
    pub status: Option<String>,
    /// Defaults to now.
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub estimated_end_date: Option<String>,
    #[serde(default)]
    pub comments: Option<Vec<CommentRequest>>,
}

/// Filters for listing work orders. Every filter is validated first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrderListRequest {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub contractor_id: Option<String>,
    #[serde(default)]
    pub job_request_id: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
}

/// API request to update a work order. Absent keys are left untouched.
///
/// `comments`, when present, replaces the whole list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkOrderRequest {
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub assigned_contractor_id: Option<Option<String>>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip_code: Option<ZipCodeInput>,
    #[serde(default, deserialize_with = "double_option")]
    pub latitude: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub longitude: Option<Option<f64>>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub start_date: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub estimated_end_date: Option<Option<String>>,
    #[serde(default)]
    pub comments: Option<Vec<CommentRequest>>,
}

/// A work order comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentInfo {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub comment: String,
}

impl From<WorkOrderComment> for CommentInfo {
    fn from(comment: WorkOrderComment) -> Self {
        Self {
            id: comment.comment_id,
            name: comment.author_name,
            comment: comment.text,
        }
    }
}

/// API response describing a work order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrderInfo {
    pub id: String,
    pub job_request_id: String,
    pub company_name: String,
    pub assigned_contractor_id: Option<String>,
    pub priority: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: u32,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub status: String,
    pub start_date: Option<String>,
    pub estimated_end_date: Option<String>,
    pub comments: Vec<CommentInfo>,
    pub created_at: String,
}

impl WorkOrderInfo {
    /// Renders a stored work order.
    ///
    /// # Errors
    ///
    /// Returns an error if the work order was never persisted or a
    /// timestamp cannot be formatted.
    pub fn from_work_order(work_order: WorkOrder) -> Result<Self, ApiError> {
        let id = work_order.work_order_id.ok_or_else(|| ApiError::Internal {
            message: String::from("Work order has no id"),
        })?;
        Ok(Self {
            id: id.to_string(),
            job_request_id: work_order.job_request_id.to_string(),
            company_name: work_order.company_name,
            assigned_contractor_id: work_order
                .assigned_contractor_id
                .map(|contractor_id| contractor_id.to_string()),
            priority: work_order.priority.to_string(),
            description: work_order.description,
            address: work_order.address,
            city: work_order.city,
            state: work_order.state,
            zip_code: work_order.zip_code,
            latitude: work_order.latitude,
            longitude: work_order.longitude,
            status: work_order.status.to_string(),
            start_date: format_optional_timestamp(work_order.start_date)?,
            estimated_end_date: format_optional_timestamp(work_order.estimated_end_date)?,
            comments: work_order
                .comments
                .into_iter()
                .map(CommentInfo::from)
                .collect(),
            created_at: format_timestamp(work_order.created_at)?,
        })
    }
}

/// API response for an approved job request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproveJobRequestResponse {
    pub job_request: JobRequestInfo,
    pub work_order: WorkOrderInfo,
}

// ============================================================================
// Charges
// ============================================================================

/// API request to create a charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChargeRequest {
    /// Caller-assigned code, e.g. `HWO-101`.
    #[serde(rename = "_id", alias = "id")]
    pub charge_id: String,
    pub category: String,
    pub description: String,
    pub avg_charge: f64,
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// API request to update a charge. Absent keys are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateChargeRequest {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub avg_charge: Option<f64>,
    #[serde(default, deserialize_with = "double_option")]
    pub last_updated: Option<Option<String>>,
}

/// API response describing a charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeInfo {
    #[serde(rename = "_id")]
    pub id: String,
    pub category: String,
    pub description: String,
    pub avg_charge: Money,
    pub last_updated: Option<String>,
}

impl ChargeInfo {
    /// Renders a stored charge.
    ///
    /// # Errors
    ///
    /// Returns an error if a timestamp cannot be formatted.
    pub fn from_charge(charge: Charge) -> Result<Self, ApiError> {
        Ok(Self {
            id: charge.charge_id,
            category: charge.category,
            description: charge.description,
            avg_charge: charge.avg_charge,
            last_updated: format_optional_timestamp(charge.last_updated)?,
        })
    }
}

// ============================================================================
// Invoices
// ============================================================================

/// An invoice line as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItemRequest {
    pub charge_code: String,
    /// Defaults to the charge's description.
    #[serde(default)]
    pub description: Option<String>,
    /// Defaults to the charge's average price.
    #[serde(default)]
    pub price: Option<f64>,
    /// Defaults to one.
    #[serde(default)]
    pub quantity: Option<f64>,
}

/// API request to create an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceRequest {
    pub work_order_id: String,
    pub company_name: String,
    #[serde(default)]
    pub dataset_work_ids: Option<Vec<String>>,
    #[serde(default)]
    pub items: Option<Vec<InvoiceItemRequest>>,
    /// Defaults to zero.
    #[serde(default)]
    pub tax_rate: Option<f64>,
    /// Defaults to `draft`.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub issued_date: Option<String>,
    #[serde(default)]
    pub paid_date: Option<String>,
}

/// Filters for listing invoices. Every filter is validated first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceListRequest {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub work_order_id: Option<String>,
}

/// API request to update an invoice. Absent keys are left untouched.
///
/// `items`, when present, replaces every line. Changing `items` or
/// `taxRate` recomputes the totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInvoiceRequest {
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub dataset_work_ids: Option<Vec<String>>,
    #[serde(default)]
    pub items: Option<Vec<InvoiceItemRequest>>,
    #[serde(default)]
    pub tax_rate: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub issued_date: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub paid_date: Option<Option<String>>,
}

/// One billed line on an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItemInfo {
    pub charge_code: String,
    pub description: String,
    pub price: Money,
    pub quantity: u32,
    pub line_total: Money,
}

impl From<InvoiceItem> for InvoiceItemInfo {
    fn from(item: InvoiceItem) -> Self {
        Self {
            charge_code: item.charge_code,
            description: item.description,
            price: item.price,
            quantity: item.quantity,
            line_total: item.line_total,
        }
    }
}

/// API response describing an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceInfo {
    pub id: String,
    pub work_order_id: String,
    pub company_name: String,
    pub dataset_work_ids: Vec<String>,
    pub items: Vec<InvoiceItemInfo>,
    pub subtotal: Money,
    pub tax_rate: TaxRate,
    pub tax: Money,
    pub total: Money,
    pub status: String,
    pub issued_date: Option<String>,
    pub paid_date: Option<String>,
    pub created_at: String,
}

impl InvoiceInfo {
    /// Renders a stored invoice.
    ///
    /// # Errors
    ///
    /// Returns an error if the invoice was never persisted or a timestamp
    /// cannot be formatted.
    pub fn from_invoice(invoice: Invoice) -> Result<Self, ApiError> {
        let id = invoice.invoice_id.ok_or_else(|| ApiError::Internal {
            message: String::from("Invoice has no id"),
        })?;
        Ok(Self {
            id: id.to_string(),
            work_order_id: invoice.work_order_id.to_string(),
            company_name: invoice.company_name,
            dataset_work_ids: invoice.dataset_work_ids,
            items: invoice
                .items
                .into_iter()
                .map(InvoiceItemInfo::from)
                .collect(),
            subtotal: invoice.subtotal,
            tax_rate: invoice.tax_rate,
            tax: invoice.tax,
            total: invoice.total,
            status: invoice.status.to_string(),
            issued_date: format_optional_timestamp(invoice.issued_date)?,
            paid_date: format_optional_timestamp(invoice.paid_date)?,
            created_at: format_timestamp(invoice.created_at)?,
        })
    }
}

// ============================================================================
// Reporting
// ============================================================================

/// Work order counts by progress.
///
/// Percentages are of `total`, rounded to the nearest whole percent, and
/// zero when there are no work orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrderStatistics {
    pub completed: usize,
    pub in_progress: usize,
    pub not_started: usize,
    pub total: usize,
    pub completed_percentage: usize,
    pub in_progress_percentage: usize,
    pub not_started_percentage: usize,
}

/// A work order shown on a schedule day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub work_order_id: String,
    pub company_name: String,
    pub description: String,
    pub priority: String,
    pub status: String,
    /// The assignee's display name, or `Unassigned`.
    pub contractor_name: String,
}

/// One day of a weekly schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDay {
    /// `YYYY-MM-DD`.
    pub date: String,
    /// `Mon` through `Sun`.
    pub weekday: String,
    pub is_today: bool,
    pub work_orders: Vec<ScheduleEntry>,
}

/// Monday through Sunday of one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekSchedule {
    pub week_offset: i64,
    pub week_start: String,
    pub week_end: String,
    pub days: Vec<ScheduleDay>,
}

/// A work order with its assignee's name resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardWorkOrder {
    #[serde(flatten)]
    pub work_order: WorkOrderInfo,
    pub contractor_name: String,
}

/// Everything an admin sees on login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    pub statistics: WorkOrderStatistics,
    pub work_orders: Vec<DashboardWorkOrder>,
    pub pending_job_requests: Vec<JobRequestInfo>,
}
