// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use facilitydesk_domain::{Charge, Money};
use time::macros::datetime;

use super::create_test_charge;
use crate::{ChargePatch, PersistenceError, SqlitePersistence};

#[test]
fn test_create_and_get_charge() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    persistence
        .create_charge(&create_test_charge("HWO-101", 15000))
        .unwrap();

    let charge: Charge = persistence.get_charge("HWO-101").unwrap().unwrap();
    assert_eq!(charge.avg_charge, Money::from_cents(15000).unwrap());
    assert_eq!(charge.category, "Hardware");
    assert!(persistence.get_charge("HWO-999").unwrap().is_none());
}

#[test]
fn test_duplicate_charge_code_is_unique_violation() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    persistence
        .create_charge(&create_test_charge("HWO-101", 15000))
        .unwrap();

    let result: Result<(), PersistenceError> =
        persistence.create_charge(&create_test_charge("HWO-101", 9900));
    assert!(matches!(result, Err(PersistenceError::UniqueViolation(_))));
}

#[test]
fn test_list_charges_by_category() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    persistence
        .create_charge(&create_test_charge("HWO-102", 2500))
        .unwrap();
    persistence
        .create_charge(&create_test_charge("HWO-101", 15000))
        .unwrap();
    let mut labor: Charge = create_test_charge("LAB-001", 8500);
    labor.category = String::from("Labor");
    persistence.create_charge(&labor).unwrap();

    let codes: Vec<String> = persistence
        .list_charges(Some("Hardware"))
        .unwrap()
        .into_iter()
        .map(|charge| charge.charge_id)
        .collect();
    assert_eq!(codes, vec!["HWO-101", "HWO-102"]);
    assert_eq!(persistence.list_charges(None).unwrap().len(), 3);
}

#[test]
fn test_update_and_delete_charge() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    persistence
        .create_charge(&create_test_charge("HWO-101", 15000))
        .unwrap();

    let patch = ChargePatch {
        avg_charge: Some(Money::from_cents(16250).unwrap()),
        last_updated: Some(Some(datetime!(2026-03-01 00:00 UTC))),
        ..ChargePatch::default()
    };
    persistence.update_charge("HWO-101", &patch).unwrap();

    let charge: Charge = persistence.get_charge("HWO-101").unwrap().unwrap();
    assert_eq!(charge.avg_charge.cents(), 16250);
    assert_eq!(charge.last_updated, Some(datetime!(2026-03-01 00:00 UTC)));

    persistence.delete_charge("HWO-101").unwrap();
    let again: Result<(), PersistenceError> = persistence.delete_charge("HWO-101");
    assert!(matches!(again, Err(PersistenceError::NotFound(_))));
}

#[test]
fn test_update_missing_charge_is_not_found() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let patch = ChargePatch {
        description: Some(String::from("Anything")),
        ..ChargePatch::default()
    };
    let result: Result<(), PersistenceError> = persistence.update_charge("NOPE", &patch);
    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}
