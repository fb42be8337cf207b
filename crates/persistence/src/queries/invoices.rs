// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Invoice queries.

use std::collections::HashMap;

use diesel::SqliteConnection;
use diesel::prelude::*;
use facilitydesk_domain::{Invoice, InvoiceItem, TaxRate};
use tracing::debug;

use crate::data_models::{
    InvoiceFilter, decode_enum, decode_money, decode_optional_timestamp, decode_record_id,
    decode_timestamp,
};
use crate::diesel_schema::{invoice_items, invoices};
use crate::error::PersistenceError;

/// Diesel Queryable struct for invoice rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = invoices)]
struct InvoiceRow {
    invoice_id: i64,
    work_order_id: i64,
    company_name: String,
    dataset_work_ids_json: String,
    subtotal_cents: i64,
    tax_rate_hundredths: i64,
    tax_cents: i64,
    total_cents: i64,
    status: String,
    issued_date: Option<String>,
    paid_date: Option<String>,
    created_at: String,
}

impl InvoiceRow {
    fn into_invoice(self, items: Vec<InvoiceItem>) -> Result<Invoice, PersistenceError> {
        let tax_rate: TaxRate = TaxRate::from_hundredths(self.tax_rate_hundredths).ok_or_else(
            || PersistenceError::CorruptRecord(format!("tax rate {}", self.tax_rate_hundredths)),
        )?;

        Ok(Invoice {
            invoice_id: Some(decode_record_id(self.invoice_id)?),
            work_order_id: decode_record_id(self.work_order_id)?,
            company_name: self.company_name,
            dataset_work_ids: serde_json::from_str(&self.dataset_work_ids_json)?,
            items,
            subtotal: decode_money(self.subtotal_cents)?,
            tax_rate,
            tax: decode_money(self.tax_cents)?,
            total: decode_money(self.total_cents)?,
            status: decode_enum(&self.status)?,
            issued_date: decode_optional_timestamp(self.issued_date.as_deref())?,
            paid_date: decode_optional_timestamp(self.paid_date.as_deref())?,
            created_at: decode_timestamp(&self.created_at)?,
        })
    }
}

/// Diesel Queryable struct for invoice item rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = invoice_items)]
struct InvoiceItemRow {
    invoice_id: i64,
    charge_code: String,
    description: String,
    price_cents: i64,
    quantity: i64,
    line_total_cents: i64,
}

impl InvoiceItemRow {
    fn into_item(self) -> Result<InvoiceItem, PersistenceError> {
        let quantity: u32 = u32::try_from(self.quantity)
            .map_err(|_| PersistenceError::CorruptRecord(format!("quantity {}", self.quantity)))?;

        Ok(InvoiceItem {
            charge_code: self.charge_code,
            description: self.description,
            price: decode_money(self.price_cents)?,
            quantity,
            line_total: decode_money(self.line_total_cents)?,
        })
    }
}

/// Loads the items for a set of invoices, grouped by invoice, in line order.
fn load_items(
    conn: &mut SqliteConnection,
    invoice_ids: &[i64],
) -> Result<HashMap<i64, Vec<InvoiceItem>>, PersistenceError> {
    let rows: Vec<InvoiceItemRow> = invoice_items::table
        .filter(invoice_items::invoice_id.eq_any(invoice_ids))
        .order(invoice_items::invoice_item_id.asc())
        .select(InvoiceItemRow::as_select())
        .load(conn)?;

    let mut grouped: HashMap<i64, Vec<InvoiceItem>> = HashMap::new();
    for row in rows {
        let invoice_id: i64 = row.invoice_id;
        grouped.entry(invoice_id).or_default().push(row.into_item()?);
    }
    Ok(grouped)
}

/// Retrieves an invoice and its items by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the invoice is not found.
pub fn get_invoice(
    conn: &mut SqliteConnection,
    invoice_id: i64,
) -> Result<Option<Invoice>, PersistenceError> {
    debug!(invoice_id, "Looking up invoice");

    let result: Result<InvoiceRow, diesel::result::Error> = invoices::table
        .filter(invoices::invoice_id.eq(invoice_id))
        .select(InvoiceRow::as_select())
        .first(conn);

    let row: InvoiceRow = match result {
        Ok(row) => row,
        Err(diesel::result::Error::NotFound) => return Ok(None),
        Err(e) => return Err(PersistenceError::from(e)),
    };

    let mut items = load_items(conn, &[invoice_id])?;
    let own: Vec<InvoiceItem> = items.remove(&invoice_id).unwrap_or_default();
    row.into_invoice(own).map(Some)
}

/// Lists invoices matching every set filter, oldest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_invoices(
    conn: &mut SqliteConnection,
    filter: &InvoiceFilter,
) -> Result<Vec<Invoice>, PersistenceError> {
    let mut query = invoices::table
        .order(invoices::invoice_id.asc())
        .select(InvoiceRow::as_select())
        .into_boxed();

    if let Some(status) = filter.status {
        query = query.filter(invoices::status.eq(status.as_str()));
    }
    if let Some(company_name) = &filter.company_name {
        query = query.filter(invoices::company_name.eq(company_name.clone()));
    }
    if let Some(work_order_id) = filter.work_order_id {
        query = query.filter(invoices::work_order_id.eq(work_order_id.value()));
    }

    let rows: Vec<InvoiceRow> = query.load(conn)?;
    let ids: Vec<i64> = rows.iter().map(|row| row.invoice_id).collect();
    let mut items = load_items(conn, &ids)?;
    debug!(count = rows.len(), "Loaded invoices");

    rows.into_iter()
        .map(|row| {
            let own: Vec<InvoiceItem> = items.remove(&row.invoice_id).unwrap_or_default();
            row.into_invoice(own)
        })
        .collect()
}
