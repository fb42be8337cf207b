// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::path::PathBuf;

use clap::Parser;
use facilitydesk_persistence::Persistence;
use serde_json::{Value, json};
use time::Date;
use time::macros::date;
use tracing::level_filters::LevelFilter;

use crate::cli::{Args, Command, CompanyCommand, Credentials, JobRequestCommand, WorkOrderCommand};
use crate::commands::{read_payload, run};

const TODAY: Date = date!(2026 - 01 - 14);

fn parse(args: &[&str]) -> Args {
    Args::try_parse_from(args).expect("Arguments should parse")
}

fn write_payload(name: &str, payload: &Value) -> PathBuf {
    let path: PathBuf = std::env::temp_dir().join(format!(
        "facilitydesk-{name}-{}.json",
        std::process::id()
    ));
    std::fs::write(&path, payload.to_string()).expect("Failed to write payload");
    path
}

fn company_payload(name: &str) -> Value {
    json!({
        "companyName": name,
        "address": "1 Main St",
        "city": "Portland",
        "state": "OR",
        "zipCode": 97201,
        "primaryContact": {
            "name": "Pat Lee",
            "email": "pat@example.com",
            "phone": "503-555-0100",
            "title": "Facilities Manager"
        }
    })
}

fn no_credentials() -> Credentials {
    Credentials::default()
}

#[test]
fn test_parse_company_create() {
    let args: Args = parse(&["facilitydesk", "companies", "create", "acme.json"]);
    assert!(args.database.is_none());
    assert!(matches!(
        args.command,
        Command::Companies(CompanyCommand::Create { payload }) if payload == PathBuf::from("acme.json")
    ));
}

#[test]
fn test_parse_set_active_takes_explicit_bool() {
    let args: Args = parse(&["facilitydesk", "companies", "set-active", "3", "false"]);
    assert!(matches!(
        args.command,
        Command::Companies(CompanyCommand::SetActive { ref id, active: false }) if id == "3"
    ));
}

#[test]
fn test_parse_aliases_and_global_credentials() {
    let args: Args = parse(&[
        "facilitydesk",
        "jr",
        "approve",
        "7",
        "--email",
        "alex@example.com",
        "--password",
        "hunter22",
    ]);
    assert_eq!(args.credentials.email.as_deref(), Some("alex@example.com"));
    assert_eq!(args.credentials.password.as_deref(), Some("hunter22"));
    assert!(matches!(
        args.command,
        Command::JobRequests(JobRequestCommand::Approve { ref id }) if id == "7"
    ));
}

#[test]
fn test_parse_work_order_filters() {
    let args: Args = parse(&[
        "facilitydesk",
        "wo",
        "list",
        "--status",
        "in-progress",
        "--contractor",
        "4",
    ]);
    let Command::WorkOrders(WorkOrderCommand::List { filter }) = args.command else {
        panic!("Expected work order list");
    };
    assert_eq!(filter.status.as_deref(), Some("in-progress"));
    assert_eq!(filter.contractor.as_deref(), Some("4"));
    assert!(filter.priority.is_none());
}

#[test]
fn test_parse_schedule_negative_week() {
    let args: Args = parse(&[
        "facilitydesk",
        "schedule",
        "--week",
        "-1",
        "--today",
        "2026-01-14",
    ]);
    assert!(matches!(
        args.command,
        Command::Schedule { week_offset: -1, today: Some(day) } if day == TODAY
    ));
}

#[test]
fn test_parse_rejects_bad_today() {
    let result = Args::try_parse_from(["facilitydesk", "schedule", "--today", "14/01/2026"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_database_and_verbosity() {
    let args: Args = parse(&["facilitydesk", "-d", "/tmp/fd.db", "-v", "stats"]);
    assert_eq!(args.database, Some(PathBuf::from("/tmp/fd.db")));
    assert_eq!(args.log_level(), LevelFilter::DEBUG);
    assert!(matches!(args.command, Command::Stats));
}

#[test]
fn test_read_payload_reports_missing_file() {
    let result: color_eyre::Result<Value> =
        read_payload(&PathBuf::from("/nonexistent/facilitydesk/payload.json"));
    let message: String = format!("{:#}", result.unwrap_err());
    assert!(message.contains("Failed to read payload"));
}

#[test]
fn test_run_stats_on_empty_store() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let output: Value = run(Command::Stats, &mut persistence, &no_credentials(), TODAY).unwrap();
    assert_eq!(output["total"], 0);
    assert_eq!(output["completedPercentage"], 0);
}

#[test]
fn test_run_company_create_then_list() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let payload: PathBuf = write_payload("company", &company_payload("Acme"));

    let created: Value = run(
        Command::Companies(CompanyCommand::Create { payload }),
        &mut persistence,
        &no_credentials(),
        TODAY,
    )
    .unwrap();
    assert_eq!(created["companyName"], "Acme");
    assert_eq!(created["isActive"], true);

    let listed: Value = run(
        Command::Companies(CompanyCommand::List),
        &mut persistence,
        &no_credentials(),
        TODAY,
    )
    .unwrap();
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
}

#[test]
fn test_run_approve_requires_login() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let result: color_eyre::Result<Value> = run(
        Command::JobRequests(JobRequestCommand::Approve {
            id: String::from("1"),
        }),
        &mut persistence,
        &no_credentials(),
        TODAY,
    );
    assert!(result.unwrap_err().to_string().contains("--email"));
}

#[test]
fn test_run_schedule_uses_given_today() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let output: Value = run(
        Command::Schedule {
            week_offset: 0,
            today: None,
        },
        &mut persistence,
        &no_credentials(),
        TODAY,
    )
    .unwrap();
    assert_eq!(output["weekStart"], "2026-01-12");
    assert_eq!(output["weekEnd"], "2026-01-18");
    assert_eq!(output["days"][2]["isToday"], true);
}

#[test]
fn test_run_work_order_list_rejects_wrong_password() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let credentials: Credentials = Credentials {
        email: Some(String::from("nobody@example.com")),
        password: Some(String::from("hunter22")),
    };
    let result: color_eyre::Result<Value> = run(
        Command::WorkOrders(WorkOrderCommand::List {
            filter: crate::cli::WorkOrderFilterArgs::default(),
        }),
        &mut persistence,
        &credentials,
        TODAY,
    );
    assert!(result.is_err());
}
