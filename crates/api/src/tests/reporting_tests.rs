// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use facilitydesk_persistence::Persistence;
use time::macros::date;

use crate::handlers::work_orders::{create_work_order, update_work_order};
use crate::reporting::{UNASSIGNED, admin_dashboard, week_schedule, work_order_statistics};
use crate::{
    AdminDashboard, ApiError, AuthenticatedPrincipal, CreateWorkOrderRequest, JobRequestInfo,
    UpdateWorkOrderRequest, WeekSchedule, WorkOrderInfo, WorkOrderStatistics,
};

use super::helpers::{
    seed_company, seed_contractor, seed_job_request, setup_test_persistence, work_order_request,
};

fn scheduled_work_order(
    persistence: &mut Persistence,
    job_request: &JobRequestInfo,
    start: &str,
    end: Option<&str>,
    status: &str,
) -> WorkOrderInfo {
    let request: CreateWorkOrderRequest = CreateWorkOrderRequest {
        start_date: Some(String::from(start)),
        estimated_end_date: end.map(String::from),
        status: Some(String::from(status)),
        ..work_order_request(&job_request.id)
    };
    create_work_order(persistence, &request).unwrap()
}

#[test]
fn test_statistics_with_no_work_orders() {
    let mut persistence = setup_test_persistence();

    let stats: WorkOrderStatistics = work_order_statistics(&mut persistence).unwrap();

    assert_eq!(stats, WorkOrderStatistics::default());
}

#[test]
fn test_statistics_counts_and_percentages() {
    let mut persistence = setup_test_persistence();
    seed_company(&mut persistence, "Acme");
    let job_request: JobRequestInfo = seed_job_request(&mut persistence, "Acme");
    scheduled_work_order(&mut persistence, &job_request, "2026-01-12", None, "completed");
    scheduled_work_order(&mut persistence, &job_request, "2026-01-12", None, "in progress");
    scheduled_work_order(&mut persistence, &job_request, "2026-01-12", None, "not started");

    let stats: WorkOrderStatistics = work_order_statistics(&mut persistence).unwrap();

    assert_eq!(stats.total, 3);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.in_progress, 1);
    assert_eq!(stats.not_started, 1);
    assert_eq!(stats.completed_percentage, 33);
}

#[test]
fn test_week_schedule_spans_date_ranges() {
    let mut persistence = setup_test_persistence();
    seed_company(&mut persistence, "Acme");
    let job_request: JobRequestInfo = seed_job_request(&mut persistence, "Acme");
    let ranged: WorkOrderInfo = scheduled_work_order(
        &mut persistence,
        &job_request,
        "2026-01-13",
        Some("2026-01-15"),
        "open",
    );
    let single: WorkOrderInfo =
        scheduled_work_order(&mut persistence, &job_request, "2026-01-18", None, "open");
    let sam: AuthenticatedPrincipal = seed_contractor(&mut persistence, "Sam", "Smith");
    update_work_order(
        &mut persistence,
        &ranged.id,
        &UpdateWorkOrderRequest {
            assigned_contractor_id: Some(Some(sam.user_id.to_string())),
            ..UpdateWorkOrderRequest::default()
        },
    )
    .unwrap();

    let week: WeekSchedule = week_schedule(&mut persistence, date!(2026 - 01 - 14), 0).unwrap();

    assert_eq!(week.week_start, "2026-01-12");
    assert_eq!(week.week_end, "2026-01-18");
    let weekdays: Vec<&str> = week.days.iter().map(|d| d.weekday.as_str()).collect();
    assert_eq!(weekdays, vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
    let counts: Vec<usize> = week.days.iter().map(|d| d.work_orders.len()).collect();
    assert_eq!(counts, vec![0, 1, 1, 1, 0, 0, 1]);
    assert!(week.days[2].is_today);
    assert_eq!(week.days[1].work_orders[0].contractor_name, "Sam Smith");
    assert_eq!(week.days[6].work_orders[0].work_order_id, single.id);
    assert_eq!(week.days[6].work_orders[0].contractor_name, UNASSIGNED);
}

#[test]
fn test_week_schedule_offset() {
    let mut persistence = setup_test_persistence();

    let next: WeekSchedule = week_schedule(&mut persistence, date!(2026 - 01 - 18), 1).unwrap();
    let previous: WeekSchedule =
        week_schedule(&mut persistence, date!(2026 - 01 - 12), -1).unwrap();

    assert_eq!(next.week_start, "2026-01-19");
    assert!(next.days.iter().all(|d| !d.is_today));
    assert_eq!(previous.week_start, "2026-01-05");
    assert_eq!(previous.week_end, "2026-01-11");
}

#[test]
fn test_admin_dashboard() {
    let mut persistence = setup_test_persistence();
    seed_company(&mut persistence, "Acme");
    let job_request: JobRequestInfo = seed_job_request(&mut persistence, "Acme");
    seed_job_request(&mut persistence, "Acme");
    scheduled_work_order(&mut persistence, &job_request, "2026-01-12", None, "completed");

    let dashboard: AdminDashboard = admin_dashboard(&mut persistence).unwrap();

    assert_eq!(dashboard.statistics.total, 1);
    assert_eq!(dashboard.statistics.completed_percentage, 100);
    assert_eq!(dashboard.work_orders.len(), 1);
    assert_eq!(dashboard.work_orders[0].contractor_name, UNASSIGNED);
    assert_eq!(dashboard.pending_job_requests.len(), 2);
}

#[test]
fn test_week_schedule_rejects_out_of_range_offset() {
    let mut persistence = setup_test_persistence();

    for offset in [1_000_000_000_000_000, i64::MAX, i64::MIN, 1_000_000] {
        let result: Result<WeekSchedule, ApiError> =
            week_schedule(&mut persistence, date!(2026 - 10 - 16), offset);

        assert!(matches!(
            result,
            Err(ApiError::InvalidInput { ref field, .. }) if field == "weekOffset"
        ));
    }
}
