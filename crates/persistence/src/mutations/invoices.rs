// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Invoice mutations.
//!
//! An invoice and its items are one aggregate: every write that touches
//! both runs in a single transaction.

use diesel::SqliteConnection;
use diesel::prelude::*;
use facilitydesk_domain::{Invoice, InvoiceItem};
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::data_models::{InvoicePatch, encode_optional_timestamp, encode_timestamp};
use crate::diesel_schema::{invoice_items, invoices};
use crate::error::PersistenceError;

/// Column changes for an invoice update. `None` fields are skipped.
#[derive(AsChangeset)]
#[diesel(table_name = invoices)]
struct InvoiceChangeset {
    company_name: Option<String>,
    dataset_work_ids_json: Option<String>,
    subtotal_cents: Option<i64>,
    tax_rate_hundredths: Option<i64>,
    tax_cents: Option<i64>,
    total_cents: Option<i64>,
    status: Option<String>,
    issued_date: Option<Option<String>>,
    paid_date: Option<Option<String>>,
}

impl InvoiceChangeset {
    fn from_patch(patch: &InvoicePatch) -> Result<Self, PersistenceError> {
        Ok(Self {
            company_name: patch.company_name.clone(),
            dataset_work_ids_json: patch
                .dataset_work_ids
                .as_ref()
                .map(serde_json::to_string)
                .transpose()?,
            subtotal_cents: patch.totals.map(|t| t.subtotal.cents()),
            tax_rate_hundredths: patch.totals.map(|t| t.tax_rate.hundredths()),
            tax_cents: patch.totals.map(|t| t.tax.cents()),
            total_cents: patch.totals.map(|t| t.total.cents()),
            status: patch.status.map(|s| s.as_str().to_string()),
            issued_date: patch.issued_date.map(encode_optional_timestamp).transpose()?,
            paid_date: patch.paid_date.map(encode_optional_timestamp).transpose()?,
        })
    }
}

fn insert_items(
    conn: &mut SqliteConnection,
    invoice_id: i64,
    items: &[InvoiceItem],
) -> Result<(), PersistenceError> {
    for item in items {
        diesel::insert_into(invoice_items::table)
            .values((
                invoice_items::invoice_id.eq(invoice_id),
                invoice_items::charge_code.eq(&item.charge_code),
                invoice_items::description.eq(&item.description),
                invoice_items::price_cents.eq(item.price.cents()),
                invoice_items::quantity.eq(i64::from(item.quantity)),
                invoice_items::line_total_cents.eq(item.line_total.cents()),
            ))
            .execute(conn)?;
    }
    Ok(())
}

/// Inserts an invoice with its items and returns its new ID.
///
/// # Errors
///
/// Returns an error if any insert fails. Nothing is written in that case.
pub fn insert_invoice(
    conn: &mut SqliteConnection,
    invoice: &Invoice,
) -> Result<i64, PersistenceError> {
    info!(
        work_order_id = invoice.work_order_id.value(),
        total = %invoice.total,
        "Creating invoice"
    );

    let dataset_work_ids_json: String = serde_json::to_string(&invoice.dataset_work_ids)?;
    let issued_date: Option<String> = encode_optional_timestamp(invoice.issued_date)?;
    let paid_date: Option<String> = encode_optional_timestamp(invoice.paid_date)?;
    let created_at: String = encode_timestamp(invoice.created_at)?;

    conn.transaction::<_, PersistenceError, _>(|conn| {
        diesel::insert_into(invoices::table)
            .values((
                invoices::work_order_id.eq(invoice.work_order_id.value()),
                invoices::company_name.eq(&invoice.company_name),
                invoices::dataset_work_ids_json.eq(&dataset_work_ids_json),
                invoices::subtotal_cents.eq(invoice.subtotal.cents()),
                invoices::tax_rate_hundredths.eq(invoice.tax_rate.hundredths()),
                invoices::tax_cents.eq(invoice.tax.cents()),
                invoices::total_cents.eq(invoice.total.cents()),
                invoices::status.eq(invoice.status.as_str()),
                invoices::issued_date.eq(&issued_date),
                invoices::paid_date.eq(&paid_date),
                invoices::created_at.eq(&created_at),
            ))
            .execute(conn)?;

        let invoice_id: i64 = conn.get_last_insert_rowid()?;
        insert_items(conn, invoice_id, &invoice.items)?;

        info!(invoice_id, "Invoice created");
        Ok(invoice_id)
    })
}

/// Applies a sparse update to an invoice.
///
/// When the patch carries items, the stored items are replaced wholesale
/// in the same transaction as the recomputed totals.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no invoice has this ID.
pub fn update_invoice(
    conn: &mut SqliteConnection,
    invoice_id: i64,
    patch: &InvoicePatch,
) -> Result<(), PersistenceError> {
    info!(invoice_id, "Updating invoice");

    let column_patch: InvoicePatch = InvoicePatch {
        items: None,
        ..patch.clone()
    };
    let changeset: Option<InvoiceChangeset> = if column_patch.is_empty() {
        None
    } else {
        Some(InvoiceChangeset::from_patch(&column_patch)?)
    };

    conn.transaction::<_, PersistenceError, _>(|conn| {
        let found: bool = match changeset {
            Some(changeset) => {
                let rows_affected: usize = diesel::update(invoices::table)
                    .filter(invoices::invoice_id.eq(invoice_id))
                    .set(changeset)
                    .execute(conn)?;
                rows_affected > 0
            }
            None => {
                let count: i64 = invoices::table
                    .filter(invoices::invoice_id.eq(invoice_id))
                    .count()
                    .get_result(conn)?;
                count > 0
            }
        };

        if !found {
            return Err(PersistenceError::NotFound(format!(
                "Invoice with ID {invoice_id} not found"
            )));
        }

        if let Some(items) = &patch.items {
            debug!(invoice_id, count = items.len(), "Replacing invoice items");
            diesel::delete(invoice_items::table)
                .filter(invoice_items::invoice_id.eq(invoice_id))
                .execute(conn)?;
            insert_items(conn, invoice_id, items)?;
        }

        Ok(())
    })
}

/// Deletes an invoice and its items.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no invoice has this ID.
pub fn delete_invoice(conn: &mut SqliteConnection, invoice_id: i64) -> Result<(), PersistenceError> {
    info!(invoice_id, "Deleting invoice");

    let rows_affected: usize = diesel::delete(invoices::table)
        .filter(invoices::invoice_id.eq(invoice_id))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Invoice with ID {invoice_id} not found"
        )));
    }

    Ok(())
}
