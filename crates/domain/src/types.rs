// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::money::{Money, TaxRate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// A store-assigned record identifier.
///
/// Identifiers are positive row ids. They are rendered as decimal strings
/// at the API boundary and parsed back with [`crate::identifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(i64);

impl RecordId {
    /// Wraps a row id.
    ///
    /// Returns `None` unless `value` is positive.
    #[must_use]
    pub const fn new(value: i64) -> Option<Self> {
        if value > 0 { Some(Self(value)) } else { None }
    }

    /// Returns the underlying row id.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| DomainError::InvalidIdentifier {
                field: String::from("id"),
                value: s.to_string(),
            })
    }
}

/// Urgency of a job request or work order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl FromStr for Priority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(DomainError::InvalidPriority(s.to_string())),
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Priority {
    /// Converts this priority to its stored string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Triage state of a job request.
///
/// This is a plain enumeration: any status may be written over any other.
/// Callers decide which writes are legal in context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobRequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl FromStr for JobRequestStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidJobRequestStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for JobRequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl JobRequestStatus {
    /// Converts this status to its stored string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Progress state of a work order.
///
/// Like [`JobRequestStatus`] there is no transition graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WorkOrderStatus {
    #[default]
    #[serde(rename = "open")]
    Open,
    #[serde(rename = "assigned")]
    Assigned,
    #[serde(rename = "in progress")]
    InProgress,
    #[serde(rename = "completed")]
    Completed,
    #[serde(rename = "cancelled")]
    Cancelled,
    #[serde(rename = "not started")]
    NotStarted,
}

impl FromStr for WorkOrderStatus {
    type Err = DomainError;

    /// Parses a status, ignoring case and treating hyphens as spaces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s.trim().to_lowercase().replace('-', " ");
        match normalized.as_str() {
            "open" => Ok(Self::Open),
            "assigned" => Ok(Self::Assigned),
            "in progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            "not started" => Ok(Self::NotStarted),
            _ => Err(DomainError::InvalidWorkOrderStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for WorkOrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl WorkOrderStatus {
    /// Converts this status to its stored string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Assigned => "assigned",
            Self::InProgress => "in progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::NotStarted => "not started",
        }
    }
}

/// Billing state of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    #[default]
    Draft,
    Issued,
    Paid,
    Cancelled,
}

impl FromStr for InvoiceStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "issued" => Ok(Self::Issued),
            "paid" => Ok(Self::Paid),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidInvoiceStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl InvoiceStatus {
    /// Converts this status to its stored string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Issued => "issued",
            Self::Paid => "paid",
            Self::Cancelled => "cancelled",
        }
    }
}

/// The role of an application user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Triages job requests, manages work orders, issues invoices.
    Admin,
    /// Performs work orders assigned to them.
    Contractor,
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "contractor" => Ok(Self::Contractor),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Role {
    /// Converts this role to its stored string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Contractor => "contractor",
        }
    }
}

/// The person to contact at a client company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub title: String,
}

/// A client company that submits job requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    /// Store identifier. `None` until persisted.
    pub company_id: Option<RecordId>,
    /// Unique, case-sensitive company name.
    pub company_name: String,
    /// Company website, empty when unknown.
    pub website: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: u32,
    pub primary_contact: PrimaryContact,
    /// Only active companies may submit job requests.
    pub is_active: bool,
}

/// An application user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Store identifier. `None` until persisted.
    pub user_id: Option<RecordId>,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    /// Lowercase alphabetic skill tags, never empty.
    pub skills: Vec<String>,
}

impl User {
    /// Returns the user's name as shown on work orders and comments.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// An inbound service request from a client company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRequest {
    /// Store identifier. `None` until persisted.
    pub job_request_id: Option<RecordId>,
    /// Snapshot of the submitting company's id at creation time.
    pub company_id: RecordId,
    /// Snapshot of the submitting company's name at creation time.
    pub company_name: String,
    pub category: String,
    pub priority: Priority,
    pub description: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: u32,
    /// Absolute http(s) URL of a supporting attachment.
    pub attachment_url: Option<String>,
    pub status: JobRequestStatus,
    pub requested_date: Option<OffsetDateTime>,
    pub created_at: OffsetDateTime,
}

/// A comment appended to a work order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkOrderComment {
    /// Caller-supplied comment id, if any.
    pub comment_id: Option<String>,
    /// Display name of the author, if any.
    pub author_name: Option<String>,
    pub text: String,
}

/// Schedulable work derived from an approved job request.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkOrder {
    /// Store identifier. `None` until persisted.
    pub work_order_id: Option<RecordId>,
    pub job_request_id: RecordId,
    pub company_name: String,
    /// Weak reference to a user whose role is contractor.
    pub assigned_contractor_id: Option<RecordId>,
    pub priority: Priority,
    pub description: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: u32,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub status: WorkOrderStatus,
    pub start_date: Option<OffsetDateTime>,
    pub estimated_end_date: Option<OffsetDateTime>,
    /// Comments in the order they were appended.
    pub comments: Vec<WorkOrderComment>,
    pub created_at: OffsetDateTime,
}

/// A catalog entry for a standard billable service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charge {
    /// Human-assigned code, e.g. `HWO-101`.
    pub charge_id: String,
    pub category: String,
    pub description: String,
    pub avg_charge: Money,
    pub last_updated: Option<OffsetDateTime>,
}

/// One billed line on an invoice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceItem {
    /// Code of the charge this line bills.
    pub charge_code: String,
    pub description: String,
    pub price: Money,
    pub quantity: u32,
    /// `price * quantity`.
    pub line_total: Money,
}

/// A billing document tied to one work order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    /// Store identifier. `None` until persisted.
    pub invoice_id: Option<RecordId>,
    pub work_order_id: RecordId,
    pub company_name: String,
    pub dataset_work_ids: Vec<String>,
    pub items: Vec<InvoiceItem>,
    pub subtotal: Money,
    pub tax_rate: TaxRate,
    pub tax: Money,
    pub total: Money,
    pub status: InvoiceStatus,
    pub issued_date: Option<OffsetDateTime>,
    pub paid_date: Option<OffsetDateTime>,
    pub created_at: OffsetDateTime,
}

/// A zip code as supplied by a caller.
///
/// Forms and JSON payloads carry zip codes either as text or as a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ZipCodeInput {
    Text(String),
    Number(f64),
}

impl From<u32> for ZipCodeInput {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for ZipCodeInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}
