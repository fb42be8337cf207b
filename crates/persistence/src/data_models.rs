// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use facilitydesk_domain::{
    InvoiceItem, InvoiceStatus, JobRequestStatus, Money, Priority, RecordId, TaxRate,
    WorkOrderComment, WorkOrderStatus,
};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::error::PersistenceError;

/// Stored credentials for a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthRecordData {
    pub user_id: RecordId,
    /// Lowercase login email.
    pub email: String,
    /// Bcrypt hash of the password.
    pub password_hash: String,
}

/// Equality filters for listing job requests. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobRequestFilter {
    pub status: Option<JobRequestStatus>,
    pub company_name: Option<String>,
    pub priority: Option<Priority>,
    pub category: Option<String>,
}

/// Equality filters for listing work orders. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkOrderFilter {
    pub status: Option<WorkOrderStatus>,
    pub contractor_id: Option<RecordId>,
    pub job_request_id: Option<RecordId>,
    pub priority: Option<Priority>,
}

/// Equality filters for listing invoices. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvoiceFilter {
    pub status: Option<InvoiceStatus>,
    pub company_name: Option<String>,
    pub work_order_id: Option<RecordId>,
}

/// A sparse set of job request field changes.
///
/// `None` leaves a field untouched. For nullable fields `Some(None)` clears
/// the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobRequestPatch {
    /// New company snapshot, id and name together.
    pub company: Option<(RecordId, String)>,
    pub category: Option<String>,
    pub priority: Option<Priority>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<u32>,
    pub attachment_url: Option<Option<String>>,
    pub status: Option<JobRequestStatus>,
    pub requested_date: Option<Option<OffsetDateTime>>,
}

impl JobRequestPatch {
    /// Returns `true` if the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A sparse set of work order field changes.
///
/// `comments`, when present, replaces the whole comment list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkOrderPatch {
    pub company_name: Option<String>,
    pub assigned_contractor_id: Option<Option<RecordId>>,
    pub priority: Option<Priority>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<u32>,
    pub latitude: Option<Option<f64>>,
    pub longitude: Option<Option<f64>>,
    pub status: Option<WorkOrderStatus>,
    pub start_date: Option<Option<OffsetDateTime>>,
    pub estimated_end_date: Option<Option<OffsetDateTime>>,
    pub comments: Option<Vec<WorkOrderComment>>,
}

impl WorkOrderPatch {
    /// Returns `true` if the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A sparse set of charge field changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChargePatch {
    pub category: Option<String>,
    pub description: Option<String>,
    pub avg_charge: Option<Money>,
    pub last_updated: Option<Option<OffsetDateTime>>,
}

impl ChargePatch {
    /// Returns `true` if the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A sparse set of invoice changes.
///
/// Totals are never patched on their own: `totals` is set by the caller
/// whenever items or the tax rate change, and `items`, when present,
/// replaces every stored line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvoicePatch {
    pub company_name: Option<String>,
    pub dataset_work_ids: Option<Vec<String>>,
    pub status: Option<InvoiceStatus>,
    pub issued_date: Option<Option<OffsetDateTime>>,
    pub paid_date: Option<Option<OffsetDateTime>>,
    pub items: Option<Vec<InvoiceItem>>,
    pub totals: Option<StoredTotals>,
}

impl InvoicePatch {
    /// Returns `true` if the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Derived invoice amounts written alongside the rate they were computed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoredTotals {
    pub subtotal: Money,
    pub tax_rate: TaxRate,
    pub tax: Money,
    pub total: Money,
}

pub fn encode_timestamp(value: OffsetDateTime) -> Result<String, PersistenceError> {
    Ok(value.format(&Rfc3339)?)
}

pub fn encode_optional_timestamp(
    value: Option<OffsetDateTime>,
) -> Result<Option<String>, PersistenceError> {
    value.map(encode_timestamp).transpose()
}

pub fn decode_timestamp(value: &str) -> Result<OffsetDateTime, PersistenceError> {
    OffsetDateTime::parse(value, &Rfc3339)
        .map_err(|e| PersistenceError::CorruptRecord(format!("timestamp '{value}': {e}")))
}

pub fn decode_optional_timestamp(
    value: Option<&str>,
) -> Result<Option<OffsetDateTime>, PersistenceError> {
    value.map(decode_timestamp).transpose()
}

pub fn decode_record_id(value: i64) -> Result<RecordId, PersistenceError> {
    RecordId::new(value)
        .ok_or_else(|| PersistenceError::CorruptRecord(format!("record id {value}")))
}

pub fn decode_money(cents: i64) -> Result<Money, PersistenceError> {
    Money::from_cents(cents)
        .ok_or_else(|| PersistenceError::CorruptRecord(format!("amount {cents} cents")))
}

pub fn decode_zip_code(value: i64) -> Result<u32, PersistenceError> {
    u32::try_from(value)
        .map_err(|_| PersistenceError::CorruptRecord(format!("zip code {value}")))
}

pub fn decode_enum<T>(value: &str) -> Result<T, PersistenceError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse::<T>()
        .map_err(|e| PersistenceError::CorruptRecord(e.to_string()))
}
