// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, Money, TaxRate, money};

#[test]
fn test_money_rounds_to_cents() {
    assert_eq!(money(10.004, "amount").unwrap().cents(), 1000);
    assert_eq!(money(10.125, "amount").unwrap().cents(), 1013);
    assert_eq!(money(150.0, "amount").unwrap().to_string(), "150.00");
}

#[test]
fn test_money_is_idempotent() {
    for value in [0.0, 0.01, 1.005, 19.999, 123.456, 2500.5] {
        let once: Money = money(value, "amount").unwrap();
        let twice: Money = money(once.to_f64(), "amount").unwrap();
        assert_eq!(once, twice, "money({value}) was not idempotent");
    }
}

#[test]
fn test_money_rejects_negative_and_non_finite() {
    assert!(matches!(
        money(-0.01, "price"),
        Err(DomainError::InvalidMoney { .. })
    ));
    assert!(matches!(
        money(f64::NAN, "price"),
        Err(DomainError::InvalidMoney { .. })
    ));
    assert!(matches!(
        money(f64::INFINITY, "price"),
        Err(DomainError::InvalidMoney { .. })
    ));
    assert!(matches!(
        money(1e300, "price"),
        Err(DomainError::InvalidMoney { .. })
    ));
}

#[test]
fn test_money_checked_arithmetic() {
    let price: Money = Money::from_cents(15_000).unwrap();
    assert_eq!(price.checked_mul(2).unwrap().cents(), 30_000);
    assert_eq!(price.checked_add(price).unwrap().cents(), 30_000);

    let huge: Money = Money::from_cents(i64::MAX).unwrap();
    assert!(matches!(
        huge.checked_add(price),
        Err(DomainError::AmountOverflow { .. })
    ));
}

#[test]
fn test_tax_rate_is_rounded_to_two_decimals() {
    let rate: TaxRate = TaxRate::from_rate(0.0875, "taxRate").unwrap();
    assert_eq!(rate.hundredths(), 9);
    assert!((rate.to_f64() - 0.09).abs() < f64::EPSILON);
}

#[test]
fn test_tax_rate_apply_rounds_half_up() {
    let rate: TaxRate = TaxRate::from_hundredths(5).unwrap();
    // 0.05 * 0.10 = 0.005 -> 0.01
    let tax: Money = rate.apply(Money::from_cents(10).unwrap()).unwrap();
    assert_eq!(tax.cents(), 1);

    // 0.05 * 0.09 = 0.0045 -> 0.00
    let tax: Money = rate.apply(Money::from_cents(9).unwrap()).unwrap();
    assert_eq!(tax.cents(), 0);
}

#[test]
fn test_money_serializes_as_dollars() {
    let amount: Money = Money::from_cents(32_700).unwrap();
    assert_eq!(serde_json::to_string(&amount).unwrap(), "327.0");

    let parsed: Money = serde_json::from_str("12.375").unwrap();
    assert_eq!(parsed.cents(), 1238);

    let rejected: Result<Money, _> = serde_json::from_str::<Money>("-1.0");
    assert!(rejected.is_err());
}
