// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only reports over work orders: statistics, the weekly schedule,
//! and the admin dashboard.

use std::collections::HashMap;

use facilitydesk_domain::{RecordId, User, WorkOrder, WorkOrderStatus};
use facilitydesk_persistence::{Persistence, PersistenceError, WorkOrderFilter};
use time::{Date, Duration, Weekday};
use tracing::debug;

use crate::error::{ApiError, translate_persistence_error};
use crate::handlers::job_requests::list_pending_job_requests;
use crate::request_response::{
    AdminDashboard, DashboardWorkOrder, ScheduleDay, ScheduleEntry, WeekSchedule, WorkOrderInfo,
    WorkOrderStatistics,
};

/// Name shown for work orders with no resolvable contractor.
pub const UNASSIGNED: &str = "Unassigned";

fn store_error(err: PersistenceError) -> ApiError {
    translate_persistence_error("Work order", err)
}

fn all_work_orders(persistence: &mut Persistence) -> Result<Vec<WorkOrder>, ApiError> {
    persistence
        .list_work_orders(&WorkOrderFilter::default())
        .map_err(store_error)
}

/// Maps user ids to display names.
fn user_names(persistence: &mut Persistence) -> Result<HashMap<RecordId, String>, ApiError> {
    let users: Vec<User> = persistence
        .list_users(None)
        .map_err(|e| translate_persistence_error("User", e))?;
    Ok(users
        .into_iter()
        .filter_map(|user| user.user_id.map(|id| (id, user.display_name())))
        .collect())
}

fn contractor_name(names: &HashMap<RecordId, String>, work_order: &WorkOrder) -> String {
    work_order
        .assigned_contractor_id
        .and_then(|id| names.get(&id).cloned())
        .unwrap_or_else(|| String::from(UNASSIGNED))
}

/// Rounds `part / total` to the nearest whole percent, halves up.
const fn percentage(part: usize, total: usize) -> usize {
    if total == 0 {
        0
    } else {
        (part * 200 + total) / (total * 2)
    }
}

fn statistics_of(work_orders: &[WorkOrder]) -> WorkOrderStatistics {
    let count = |status: WorkOrderStatus| {
        work_orders
            .iter()
            .filter(|work_order| work_order.status == status)
            .count()
    };
    let completed: usize = count(WorkOrderStatus::Completed);
    let in_progress: usize = count(WorkOrderStatus::InProgress);
    let not_started: usize = count(WorkOrderStatus::NotStarted);
    let total: usize = work_orders.len();

    WorkOrderStatistics {
        completed,
        in_progress,
        not_started,
        total,
        completed_percentage: percentage(completed, total),
        in_progress_percentage: percentage(in_progress, total),
        not_started_percentage: percentage(not_started, total),
    }
}

/// Moves a date by whole days, `None` outside the representable range.
fn days_after(date: Date, days: i64) -> Option<Date> {
    let seconds: i64 = days.checked_mul(86_400)?;
    date.checked_add(Duration::seconds(seconds))
}

/// Counts work orders by progress.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn work_order_statistics(persistence: &mut Persistence) -> Result<WorkOrderStatistics, ApiError> {
    let work_orders: Vec<WorkOrder> = all_work_orders(persistence)?;
    Ok(statistics_of(&work_orders))
}

const fn short_weekday(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "Mon",
        Weekday::Tuesday => "Tue",
        Weekday::Wednesday => "Wed",
        Weekday::Thursday => "Thu",
        Weekday::Friday => "Fri",
        Weekday::Saturday => "Sat",
        Weekday::Sunday => "Sun",
    }
}

/// Returns whether a work order is scheduled on a day.
///
/// A work order covers every calendar day from its start date through its
/// estimated end date, or only its start date when there is no end date.
/// Work orders with no start date are never scheduled.
fn scheduled_on(work_order: &WorkOrder, day: Date) -> bool {
    let Some(start) = work_order.start_date.map(|value| value.date()) else {
        return false;
    };
    let end: Date = work_order
        .estimated_end_date
        .map_or(start, |value| value.date());
    start <= day && day <= end
}

fn offset_out_of_range(week_offset: i64) -> ApiError {
    ApiError::InvalidInput {
        field: String::from("weekOffset"),
        message: format!("Week offset {week_offset} is out of range"),
    }
}

/// Builds the Monday to Sunday schedule for a week.
///
/// The week is the one containing `today`, moved by `week_offset` weeks.
/// Each day lists the work orders scheduled on it, each with its
/// contractor's name.
///
/// # Errors
///
/// Returns an error if the offset moves outside the supported date range
/// or the store fails.
pub fn week_schedule(
    persistence: &mut Persistence,
    today: Date,
    week_offset: i64,
) -> Result<WeekSchedule, ApiError> {
    let back_to_monday: i64 = i64::from(today.weekday().number_days_from_monday());
    let shift: i64 = week_offset
        .checked_mul(7)
        .and_then(|days| days.checked_sub(back_to_monday))
        .ok_or_else(|| offset_out_of_range(week_offset))?;
    let monday: Date =
        days_after(today, shift).ok_or_else(|| offset_out_of_range(week_offset))?;

    let work_orders: Vec<WorkOrder> = all_work_orders(persistence)?;
    let names: HashMap<RecordId, String> = user_names(persistence)?;

    let mut days: Vec<ScheduleDay> = Vec::with_capacity(7);
    for index in 0..7 {
        let day: Date =
            days_after(monday, index).ok_or_else(|| offset_out_of_range(week_offset))?;
        let entries: Vec<ScheduleEntry> = work_orders
            .iter()
            .filter(|work_order| scheduled_on(work_order, day))
            .filter_map(|work_order| {
                work_order.work_order_id.map(|id| ScheduleEntry {
                    work_order_id: id.to_string(),
                    company_name: work_order.company_name.clone(),
                    description: work_order.description.clone(),
                    priority: work_order.priority.to_string(),
                    status: work_order.status.to_string(),
                    contractor_name: contractor_name(&names, work_order),
                })
            })
            .collect();
        days.push(ScheduleDay {
            date: day.to_string(),
            weekday: String::from(short_weekday(day.weekday())),
            is_today: day == today,
            work_orders: entries,
        });
    }

    let sunday: Date =
        days_after(monday, 6).ok_or_else(|| offset_out_of_range(week_offset))?;
    debug!(%monday, week_offset, "Built week schedule");

    Ok(WeekSchedule {
        week_offset,
        week_start: monday.to_string(),
        week_end: sunday.to_string(),
        days,
    })
}

/// Collects statistics, every work order with its contractor's name, and
/// the job requests awaiting triage.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn admin_dashboard(persistence: &mut Persistence) -> Result<AdminDashboard, ApiError> {
    let work_orders: Vec<WorkOrder> = all_work_orders(persistence)?;
    let names: HashMap<RecordId, String> = user_names(persistence)?;
    let statistics: WorkOrderStatistics = statistics_of(&work_orders);

    let listed: Vec<DashboardWorkOrder> = work_orders
        .into_iter()
        .map(|work_order| {
            let contractor_name: String = contractor_name(&names, &work_order);
            Ok(DashboardWorkOrder {
                work_order: WorkOrderInfo::from_work_order(work_order)?,
                contractor_name,
            })
        })
        .collect::<Result<_, ApiError>>()?;

    Ok(AdminDashboard {
        statistics,
        work_orders: listed,
        pending_job_requests: list_pending_job_requests(persistence)?,
    })
}
