// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Invoice line pricing and totals.
//!
//! Totals are always derived from the priced items and the tax rate:
//!
//! - `line_total = price * quantity`
//! - `subtotal = sum(line_total)`
//! - `tax = subtotal * tax_rate`, rounded half-up to cents
//! - `total = subtotal + tax`

use crate::error::DomainError;
use crate::money::{Money, TaxRate};
use crate::types::{Charge, InvoiceItem};
use crate::validation::{money, non_empty_string, positive_integer};

/// A caller-supplied invoice line before pricing.
///
/// Description and price fall back to the referenced charge when absent.
/// Quantity defaults to one.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemInput {
    pub charge_code: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<f64>,
}

/// Totals derived from a set of invoice items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvoiceTotals {
    /// Sum of all line totals.
    pub subtotal: Money,
    /// The rate that was applied.
    pub tax_rate: TaxRate,
    /// `subtotal * tax_rate`.
    pub tax: Money,
    /// `subtotal + tax`.
    pub total: Money,
}

/// Prices one invoice line against the charge it references.
///
/// # Arguments
///
/// * `index` - Position of the line, used in field names such as `items[0].price`
/// * `input` - The caller-supplied line
/// * `charge` - The catalog entry named by `input.charge_code`
///
/// # Errors
///
/// Returns an error if a supplied description is blank, a supplied price is
/// negative, the quantity is not a positive integer, or the line total
/// overflows.
pub fn price_item(
    index: usize,
    input: &ItemInput,
    charge: &Charge,
) -> Result<InvoiceItem, DomainError> {
    let description: String = match &input.description {
        Some(text) => non_empty_string(text, &format!("items[{index}].description"))?,
        None => charge.description.clone(),
    };
    let price: Money = match input.price {
        Some(amount) => money(amount, &format!("items[{index}].price"))?,
        None => charge.avg_charge,
    };
    let quantity: u32 = match input.quantity {
        Some(count) => positive_integer(count, &format!("items[{index}].quantity"))?,
        None => 1,
    };

    Ok(InvoiceItem {
        charge_code: charge.charge_id.clone(),
        description,
        price,
        quantity,
        line_total: price.checked_mul(quantity)?,
    })
}

/// Computes invoice totals from priced items and a tax rate.
///
/// # Errors
///
/// Returns `DomainError::AmountOverflow` if any sum or product does not fit.
pub fn compute_totals(items: &[InvoiceItem], tax_rate: TaxRate) -> Result<InvoiceTotals, DomainError> {
    let subtotal: Money = items
        .iter()
        .try_fold(Money::ZERO, |sum, item| sum.checked_add(item.line_total))?;
    let tax: Money = tax_rate.apply(subtotal)?;
    let total: Money = subtotal.checked_add(tax)?;

    Ok(InvoiceTotals {
        subtotal,
        tax_rate,
        tax,
        total,
    })
}
