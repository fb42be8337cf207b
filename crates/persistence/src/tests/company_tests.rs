// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use facilitydesk_domain::{Company, RecordId};

use super::create_test_company;
use crate::{PersistenceError, SqlitePersistence};

#[test]
fn test_create_and_get_company() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let company_id: RecordId = persistence
        .create_company(&create_test_company("Acme"))
        .unwrap();

    let company: Company = persistence.get_company(company_id).unwrap().unwrap();
    assert_eq!(company.company_id, Some(company_id));
    assert_eq!(company.company_name, "Acme");
    assert_eq!(company.zip_code, 78701);
    assert_eq!(company.primary_contact.title, "Facilities Manager");
    assert!(company.is_active);
}

#[test]
fn test_get_missing_company_returns_none() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let missing: RecordId = RecordId::new(42).unwrap();
    assert!(persistence.get_company(missing).unwrap().is_none());
    assert!(persistence.get_company_by_name("Nobody").unwrap().is_none());
}

#[test]
fn test_company_name_lookup_is_case_sensitive() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    persistence
        .create_company(&create_test_company("Acme"))
        .unwrap();

    assert!(persistence.get_company_by_name("Acme").unwrap().is_some());
    assert!(persistence.get_company_by_name("acme").unwrap().is_none());
}

#[test]
fn test_duplicate_company_name_is_unique_violation() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    persistence
        .create_company(&create_test_company("Acme"))
        .unwrap();

    let result: Result<RecordId, PersistenceError> =
        persistence.create_company(&create_test_company("Acme"));
    assert!(matches!(result, Err(PersistenceError::UniqueViolation(_))));
}

#[test]
fn test_list_companies_is_ordered_by_name() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    for name in ["Zenith", "Acme", "Midway"] {
        persistence.create_company(&create_test_company(name)).unwrap();
    }

    let names: Vec<String> = persistence
        .list_companies()
        .unwrap()
        .into_iter()
        .map(|company| company.company_name)
        .collect();
    assert_eq!(names, vec!["Acme", "Midway", "Zenith"]);
}

#[test]
fn test_set_company_active() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let company_id: RecordId = persistence
        .create_company(&create_test_company("Acme"))
        .unwrap();

    persistence.set_company_active(company_id, false).unwrap();
    assert!(!persistence.get_company(company_id).unwrap().unwrap().is_active);

    persistence.set_company_active(company_id, true).unwrap();
    assert!(persistence.get_company(company_id).unwrap().unwrap().is_active);
}

#[test]
fn test_set_missing_company_active_is_not_found() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let result: Result<(), PersistenceError> =
        persistence.set_company_active(RecordId::new(7).unwrap(), false);
    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}
