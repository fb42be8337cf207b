// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Charge, DomainError, InvoiceItem, InvoiceTotals, ItemInput, Money, TaxRate, compute_totals,
    price_item,
};

fn create_test_charge(code: &str, avg_charge: f64) -> Charge {
    Charge {
        charge_id: String::from(code),
        category: String::from("Plumbing"),
        description: String::from("Standard service call"),
        avg_charge: Money::from_amount(avg_charge, "avgCharge").unwrap(),
        last_updated: None,
    }
}

fn item(code: &str, quantity: Option<f64>) -> ItemInput {
    ItemInput {
        charge_code: String::from(code),
        description: None,
        price: None,
        quantity,
    }
}

#[test]
fn test_price_item_defaults_from_charge() {
    let charge: Charge = create_test_charge("HWO-101", 150.0);
    let priced: InvoiceItem = price_item(0, &item("HWO-101", None), &charge).unwrap();

    assert_eq!(priced.description, "Standard service call");
    assert_eq!(priced.price.to_string(), "150.00");
    assert_eq!(priced.quantity, 1);
    assert_eq!(priced.line_total.to_string(), "150.00");
}

#[test]
fn test_price_item_uses_caller_overrides() {
    let charge: Charge = create_test_charge("HWO-101", 150.0);
    let input: ItemInput = ItemInput {
        charge_code: String::from("HWO-101"),
        description: Some(String::from(" After-hours call ")),
        price: Some(99.999),
        quantity: Some(3.0),
    };
    let priced: InvoiceItem = price_item(0, &input, &charge).unwrap();

    assert_eq!(priced.description, "After-hours call");
    assert_eq!(priced.price.to_string(), "100.00");
    assert_eq!(priced.line_total.to_string(), "300.00");
}

#[test]
fn test_price_item_rejects_bad_quantity() {
    let charge: Charge = create_test_charge("HWO-101", 150.0);
    let result: Result<InvoiceItem, DomainError> =
        price_item(2, &item("HWO-101", Some(0.0)), &charge);

    assert!(matches!(
        result,
        Err(DomainError::InvalidPositiveInteger { ref field, .. }) if field == "items[2].quantity"
    ));
}

#[test]
fn test_compute_totals_with_rounded_tax_rate() {
    let charge: Charge = create_test_charge("HWO-101", 150.0);
    let priced: InvoiceItem = price_item(0, &item("HWO-101", Some(2.0)), &charge).unwrap();
    let rate: TaxRate = TaxRate::from_rate(0.0875, "taxRate").unwrap();

    let totals: InvoiceTotals = compute_totals(&[priced.clone()], rate).unwrap();

    assert_eq!(priced.line_total.to_string(), "300.00");
    assert_eq!(totals.subtotal.to_string(), "300.00");
    assert_eq!(totals.tax_rate.hundredths(), 9);
    assert_eq!(totals.tax.to_string(), "27.00");
    assert_eq!(totals.total.to_string(), "327.00");
}

#[test]
fn test_compute_totals_sums_lines() {
    let plumbing: Charge = create_test_charge("HWO-101", 150.0);
    let electrical: Charge = create_test_charge("HWO-205", 89.99);
    let items: Vec<InvoiceItem> = vec![
        price_item(0, &item("HWO-101", Some(2.0)), &plumbing).unwrap(),
        price_item(1, &item("HWO-205", Some(3.0)), &electrical).unwrap(),
    ];
    let rate: TaxRate = TaxRate::from_rate(0.07, "taxRate").unwrap();

    let totals: InvoiceTotals = compute_totals(&items, rate).unwrap();

    let line_sum: i64 = items.iter().map(|i| i.line_total.cents()).sum();
    assert_eq!(totals.subtotal.cents(), line_sum);
    assert_eq!(totals.subtotal.to_string(), "569.97");
    // 569.97 * 0.07 = 39.8979
    assert_eq!(totals.tax.to_string(), "39.90");
    assert_eq!(
        totals.total.cents(),
        totals.subtotal.cents() + totals.tax.cents()
    );
}

#[test]
fn test_compute_totals_of_no_items_is_zero() {
    let totals: InvoiceTotals = compute_totals(&[], TaxRate::ZERO).unwrap();
    assert_eq!(totals.subtotal, Money::ZERO);
    assert_eq!(totals.tax, Money::ZERO);
    assert_eq!(totals.total, Money::ZERO);
}
