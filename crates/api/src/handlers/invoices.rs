// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Invoice repository.
//!
//! Items are priced against the charge catalog and the totals are always
//! derived from the priced items and the tax rate. Callers never supply
//! totals. Writes require an admin.

use facilitydesk_domain::{
    Charge, Invoice, InvoiceItem, InvoiceTotals, ItemInput, RecordId, TaxRate, compute_totals,
    date, identifier, invoice_status, non_empty_string, price_item, tax_rate,
};
use facilitydesk_persistence::{
    InvoiceFilter, InvoicePatch, Persistence, PersistenceError, StoredTotals,
};
use time::OffsetDateTime;
use tracing::{debug, info};

use super::charges::load_charge;
use super::work_orders::load_work_order;
use super::{empty_update, parse_id, validated};
use crate::auth::{AuthenticatedPrincipal, AuthorizationService};
use crate::error::{ApiError, translate_persistence_error};
use crate::request_response::{
    CreateInvoiceRequest, InvoiceInfo, InvoiceItemRequest, InvoiceListRequest,
    UpdateInvoiceRequest,
};

const RESOURCE: &str = "Invoice";

fn store_error(err: PersistenceError) -> ApiError {
    translate_persistence_error(RESOURCE, err)
}

fn load_invoice(persistence: &mut Persistence, invoice_id: RecordId) -> Result<Invoice, ApiError> {
    persistence
        .get_invoice(invoice_id)
        .map_err(store_error)?
        .ok_or_else(|| ApiError::not_found(RESOURCE, &invoice_id.to_string()))
}

/// Resolves each line against the catalog and prices it.
///
/// Every charge lookup finishes before any totals are computed.
fn price_items(
    persistence: &mut Persistence,
    items: &[InvoiceItemRequest],
) -> Result<Vec<InvoiceItem>, ApiError> {
    let mut priced: Vec<InvoiceItem> = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let code: String = validated(non_empty_string(
            &item.charge_code,
            &format!("items[{index}].chargeCode"),
        ))?;
        let charge: Charge = load_charge(persistence, &code)?;
        let input: ItemInput = ItemInput {
            charge_code: code,
            description: item.description.clone(),
            price: item.price,
            quantity: item.quantity,
        };
        priced.push(validated(price_item(index, &input, &charge))?);
    }
    debug!(count = priced.len(), "Priced invoice items");
    Ok(priced)
}

fn validated_work_ids(ids: &[String]) -> Result<Vec<String>, ApiError> {
    ids.iter()
        .enumerate()
        .map(|(index, id)| validated(non_empty_string(id, &format!("datasetWorkIds[{index}]"))))
        .collect()
}

/// Creates an invoice for an existing work order.
///
/// Items default their description and price from the catalog and their
/// quantity to one. The tax rate defaults to zero and the status to draft.
///
/// # Errors
///
/// Returns an error if:
/// - The principal is not an admin
/// - Any field fails validation
/// - The work order does not exist
/// - An item names a charge code that does not exist
pub fn create_invoice(
    persistence: &mut Persistence,
    principal: &AuthenticatedPrincipal,
    request: &CreateInvoiceRequest,
) -> Result<InvoiceInfo, ApiError> {
    AuthorizationService::authorize_manage_invoices(principal)?;

    let work_order_id: RecordId = parse_id(&request.work_order_id, "workOrderId")?;
    load_work_order(persistence, work_order_id)?;
    let company_name: String = validated(non_empty_string(&request.company_name, "companyName"))?;
    let rate: TaxRate = request
        .tax_rate
        .map(|value| validated(tax_rate(value)))
        .transpose()?
        .unwrap_or(TaxRate::ZERO);
    let items: Vec<InvoiceItem> =
        price_items(persistence, request.items.as_deref().unwrap_or_default())?;
    let totals: InvoiceTotals = validated(compute_totals(&items, rate))?;

    let invoice: Invoice = Invoice {
        invoice_id: None,
        work_order_id,
        company_name,
        dataset_work_ids: validated_work_ids(
            request.dataset_work_ids.as_deref().unwrap_or_default(),
        )?,
        items,
        subtotal: totals.subtotal,
        tax_rate: totals.tax_rate,
        tax: totals.tax,
        total: totals.total,
        status: validated(invoice_status(request.status.as_deref()))?,
        issued_date: validated(date(request.issued_date.as_deref(), "issuedDate"))?,
        paid_date: validated(date(request.paid_date.as_deref(), "paidDate"))?,
        created_at: OffsetDateTime::now_utc(),
    };

    let invoice_id: RecordId = persistence.create_invoice(&invoice).map_err(store_error)?;
    info!(
        %invoice_id,
        %work_order_id,
        total = %invoice.total,
        "Invoice created"
    );

    InvoiceInfo::from_invoice(Invoice {
        invoice_id: Some(invoice_id),
        ..invoice
    })
}

/// Retrieves an invoice by id.
///
/// # Errors
///
/// Returns an error if the id is malformed or no invoice has it.
pub fn get_invoice(persistence: &mut Persistence, invoice_id: &str) -> Result<InvoiceInfo, ApiError> {
    let id: RecordId = parse_id(invoice_id, "invoiceId")?;
    InvoiceInfo::from_invoice(load_invoice(persistence, id)?)
}

/// Lists invoices matching every supplied filter.
///
/// # Errors
///
/// Returns an error if any filter fails validation.
pub fn list_invoices(
    persistence: &mut Persistence,
    request: &InvoiceListRequest,
) -> Result<Vec<InvoiceInfo>, ApiError> {
    let filter: InvoiceFilter = InvoiceFilter {
        status: request
            .status
            .as_deref()
            .map(|value| validated(invoice_status(Some(value))))
            .transpose()?,
        company_name: request
            .company_name
            .as_deref()
            .map(|value| validated(non_empty_string(value, "companyName")))
            .transpose()?,
        work_order_id: request
            .work_order_id
            .as_deref()
            .map(|value| validated(identifier(value, "workOrderId")))
            .transpose()?,
    };

    persistence
        .list_invoices(&filter)
        .map_err(store_error)?
        .into_iter()
        .map(InvoiceInfo::from_invoice)
        .collect()
}

/// Applies a partial update to an invoice.
///
/// A supplied items array replaces every line. When the items or the tax
/// rate change, the totals are recomputed from the resulting items and
/// rate; otherwise they are left alone.
///
/// # Errors
///
/// Returns an error if:
/// - The principal is not an admin
/// - The id is malformed or no invoice has it
/// - Any supplied field fails validation
/// - An item names a charge code that does not exist
/// - No field was supplied
pub fn update_invoice(
    persistence: &mut Persistence,
    principal: &AuthenticatedPrincipal,
    invoice_id: &str,
    request: &UpdateInvoiceRequest,
) -> Result<InvoiceInfo, ApiError> {
    AuthorizationService::authorize_manage_invoices(principal)?;
    let id: RecordId = parse_id(invoice_id, "invoiceId")?;

    let mut patch: InvoicePatch = InvoicePatch {
        company_name: request
            .company_name
            .as_deref()
            .map(|value| validated(non_empty_string(value, "companyName")))
            .transpose()?,
        dataset_work_ids: request
            .dataset_work_ids
            .as_deref()
            .map(validated_work_ids)
            .transpose()?,
        status: request
            .status
            .as_deref()
            .map(|value| validated(invoice_status(Some(value))))
            .transpose()?,
        issued_date: request
            .issued_date
            .as_ref()
            .map(|value| validated(date(value.as_deref(), "issuedDate")))
            .transpose()?,
        paid_date: request
            .paid_date
            .as_ref()
            .map(|value| validated(date(value.as_deref(), "paidDate")))
            .transpose()?,
        items: None,
        totals: None,
    };
    let new_rate: Option<TaxRate> = request
        .tax_rate
        .map(|value| validated(tax_rate(value)))
        .transpose()?;
    let new_items: Option<Vec<InvoiceItem>> = request
        .items
        .as_deref()
        .map(|items| price_items(persistence, items))
        .transpose()?;

    if new_items.is_some() || new_rate.is_some() {
        let existing: Invoice = load_invoice(persistence, id)?;
        let rate: TaxRate = new_rate.unwrap_or(existing.tax_rate);
        let totals: InvoiceTotals = validated(compute_totals(
            new_items.as_deref().unwrap_or(&existing.items),
            rate,
        ))?;
        debug!(invoice_id = %id, total = %totals.total, "Recomputed invoice totals");
        patch.totals = Some(StoredTotals {
            subtotal: totals.subtotal,
            tax_rate: totals.tax_rate,
            tax: totals.tax,
            total: totals.total,
        });
        patch.items = new_items;
    }

    if patch.is_empty() {
        return Err(empty_update("invoice"));
    }

    persistence.update_invoice(id, &patch).map_err(store_error)?;
    info!(invoice_id = %id, "Invoice updated");

    InvoiceInfo::from_invoice(load_invoice(persistence, id)?)
}

/// Removes an invoice and returns it as it was.
///
/// # Errors
///
/// Returns an error if the principal is not an admin, the id is
/// malformed, or no invoice has it.
pub fn delete_invoice(
    persistence: &mut Persistence,
    principal: &AuthenticatedPrincipal,
    invoice_id: &str,
) -> Result<InvoiceInfo, ApiError> {
    AuthorizationService::authorize_manage_invoices(principal)?;
    let id: RecordId = parse_id(invoice_id, "invoiceId")?;
    let existing: Invoice = load_invoice(persistence, id)?;
    persistence.delete_invoice(id).map_err(store_error)?;
    info!(invoice_id = %id, "Invoice removed");
    InvoiceInfo::from_invoice(existing)
}
