// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use facilitydesk_domain::{Invoice, InvoiceStatus, Money, RecordId, TaxRate};
use time::macros::datetime;

use super::{create_test_invoice, create_test_item};
use crate::{InvoiceFilter, InvoicePatch, PersistenceError, SqlitePersistence, StoredTotals};

fn work_order_id() -> RecordId {
    RecordId::new(1).unwrap()
}

#[test]
fn test_create_and_get_invoice() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let invoice: Invoice = create_test_invoice(work_order_id());
    let invoice_id: RecordId = persistence.create_invoice(&invoice).unwrap();

    let stored: Invoice = persistence.get_invoice(invoice_id).unwrap().unwrap();
    assert_eq!(stored.invoice_id, Some(invoice_id));
    assert_eq!(stored.items, invoice.items);
    assert_eq!(stored.dataset_work_ids, vec!["WO-1"]);
    assert_eq!(stored.tax_rate.hundredths(), 9);
    assert_eq!(stored.tax.cents(), 2700);
    assert_eq!(stored.total.cents(), 32700);
    assert_eq!(stored.status, InvoiceStatus::Draft);
}

#[test]
fn test_update_invoice_replaces_items_and_totals() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let invoice_id: RecordId = persistence
        .create_invoice(&create_test_invoice(work_order_id()))
        .unwrap();

    let items = vec![
        create_test_item("HWO-101", 15000, 1),
        create_test_item("LAB-001", 8500, 2),
    ];
    let patch = InvoicePatch {
        items: Some(items.clone()),
        totals: Some(StoredTotals {
            subtotal: Money::from_cents(32000).unwrap(),
            tax_rate: TaxRate::from_hundredths(9).unwrap(),
            tax: Money::from_cents(2880).unwrap(),
            total: Money::from_cents(34880).unwrap(),
        }),
        ..InvoicePatch::default()
    };
    persistence.update_invoice(invoice_id, &patch).unwrap();

    let stored: Invoice = persistence.get_invoice(invoice_id).unwrap().unwrap();
    assert_eq!(stored.items, items);
    assert_eq!(stored.subtotal.cents(), 32000);
    assert_eq!(stored.total.cents(), 34880);
}

#[test]
fn test_update_invoice_status_keeps_items() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let invoice: Invoice = create_test_invoice(work_order_id());
    let invoice_id: RecordId = persistence.create_invoice(&invoice).unwrap();

    let patch = InvoicePatch {
        status: Some(InvoiceStatus::Paid),
        paid_date: Some(Some(datetime!(2026-02-15 00:00 UTC))),
        ..InvoicePatch::default()
    };
    persistence.update_invoice(invoice_id, &patch).unwrap();

    let stored: Invoice = persistence.get_invoice(invoice_id).unwrap().unwrap();
    assert_eq!(stored.status, InvoiceStatus::Paid);
    assert_eq!(stored.paid_date, Some(datetime!(2026-02-15 00:00 UTC)));
    assert_eq!(stored.items, invoice.items);
}

#[test]
fn test_list_invoices_filters() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    persistence
        .create_invoice(&create_test_invoice(work_order_id()))
        .unwrap();
    let mut other: Invoice = create_test_invoice(RecordId::new(2).unwrap());
    other.company_name = String::from("Zenith");
    other.status = InvoiceStatus::Issued;
    persistence.create_invoice(&other).unwrap();

    let zenith: Vec<Invoice> = persistence
        .list_invoices(&InvoiceFilter {
            company_name: Some(String::from("Zenith")),
            ..InvoiceFilter::default()
        })
        .unwrap();
    assert_eq!(zenith.len(), 1);
    assert_eq!(zenith[0].items.len(), 1);

    let for_work_order: Vec<Invoice> = persistence
        .list_invoices(&InvoiceFilter {
            work_order_id: Some(work_order_id()),
            ..InvoiceFilter::default()
        })
        .unwrap();
    assert_eq!(for_work_order.len(), 1);
    assert_eq!(for_work_order[0].company_name, "Acme");

    let drafts: Vec<Invoice> = persistence
        .list_invoices(&InvoiceFilter {
            status: Some(InvoiceStatus::Draft),
            ..InvoiceFilter::default()
        })
        .unwrap();
    assert_eq!(drafts.len(), 1);
}

#[test]
fn test_delete_invoice() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let invoice_id: RecordId = persistence
        .create_invoice(&create_test_invoice(work_order_id()))
        .unwrap();

    persistence.delete_invoice(invoice_id).unwrap();
    assert!(persistence.get_invoice(invoice_id).unwrap().is_none());

    let result: Result<(), PersistenceError> = persistence.delete_invoice(invoice_id);
    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}
