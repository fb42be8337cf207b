// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Work order queries.
//!
//! Comments live in their own table and are reattached in row id order,
//! which is the order they were appended in.

use std::collections::HashMap;

use diesel::SqliteConnection;
use diesel::prelude::*;
use facilitydesk_domain::{WorkOrder, WorkOrderComment};
use tracing::debug;

use crate::data_models::{
    WorkOrderFilter, decode_enum, decode_optional_timestamp, decode_record_id, decode_timestamp,
    decode_zip_code,
};
use crate::diesel_schema::{work_order_comments, work_orders};
use crate::error::PersistenceError;

/// Diesel Queryable struct for work order rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = work_orders)]
struct WorkOrderRow {
    work_order_id: i64,
    job_request_id: i64,
    company_name: String,
    assigned_contractor_id: Option<i64>,
    priority: String,
    description: String,
    address: String,
    city: String,
    state: String,
    zip_code: i64,
    latitude: Option<f64>,
    longitude: Option<f64>,
    status: String,
    start_date: Option<String>,
    estimated_end_date: Option<String>,
    created_at: String,
}

impl WorkOrderRow {
    fn into_work_order(
        self,
        comments: Vec<WorkOrderComment>,
    ) -> Result<WorkOrder, PersistenceError> {
        Ok(WorkOrder {
            work_order_id: Some(decode_record_id(self.work_order_id)?),
            job_request_id: decode_record_id(self.job_request_id)?,
            company_name: self.company_name,
            assigned_contractor_id: self
                .assigned_contractor_id
                .map(decode_record_id)
                .transpose()?,
            priority: decode_enum(&self.priority)?,
            description: self.description,
            address: self.address,
            city: self.city,
            state: self.state,
            zip_code: decode_zip_code(self.zip_code)?,
            latitude: self.latitude,
            longitude: self.longitude,
            status: decode_enum(&self.status)?,
            start_date: decode_optional_timestamp(self.start_date.as_deref())?,
            estimated_end_date: decode_optional_timestamp(self.estimated_end_date.as_deref())?,
            comments,
            created_at: decode_timestamp(&self.created_at)?,
        })
    }
}

/// Diesel Queryable struct for comment rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = work_order_comments)]
struct CommentRow {
    work_order_id: i64,
    comment_id: Option<String>,
    author_name: Option<String>,
    comment: String,
}

impl From<CommentRow> for WorkOrderComment {
    fn from(row: CommentRow) -> Self {
        Self {
            comment_id: row.comment_id,
            author_name: row.author_name,
            text: row.comment,
        }
    }
}

/// Loads the comments for a set of work orders, grouped by work order.
fn load_comments(
    conn: &mut SqliteConnection,
    work_order_ids: &[i64],
) -> Result<HashMap<i64, Vec<WorkOrderComment>>, PersistenceError> {
    let rows: Vec<CommentRow> = work_order_comments::table
        .filter(work_order_comments::work_order_id.eq_any(work_order_ids))
        .order(work_order_comments::work_order_comment_id.asc())
        .select(CommentRow::as_select())
        .load(conn)?;

    let mut grouped: HashMap<i64, Vec<WorkOrderComment>> = HashMap::new();
    for row in rows {
        grouped
            .entry(row.work_order_id)
            .or_default()
            .push(WorkOrderComment::from(row));
    }
    Ok(grouped)
}

/// Returns whether a work order with this ID exists.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn work_order_exists(
    conn: &mut SqliteConnection,
    work_order_id: i64,
) -> Result<bool, PersistenceError> {
    let count: i64 = work_orders::table
        .filter(work_orders::work_order_id.eq(work_order_id))
        .count()
        .get_result(conn)?;
    Ok(count > 0)
}

/// Retrieves a work order and its comments by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the work order is not found.
pub fn get_work_order(
    conn: &mut SqliteConnection,
    work_order_id: i64,
) -> Result<Option<WorkOrder>, PersistenceError> {
    debug!(work_order_id, "Looking up work order");

    let result: Result<WorkOrderRow, diesel::result::Error> = work_orders::table
        .filter(work_orders::work_order_id.eq(work_order_id))
        .select(WorkOrderRow::as_select())
        .first(conn);

    let row: WorkOrderRow = match result {
        Ok(row) => row,
        Err(diesel::result::Error::NotFound) => return Ok(None),
        Err(e) => return Err(PersistenceError::from(e)),
    };

    let mut comments = load_comments(conn, &[work_order_id])?;
    let own: Vec<WorkOrderComment> = comments.remove(&work_order_id).unwrap_or_default();
    row.into_work_order(own).map(Some)
}

/// Lists work orders matching every set filter, oldest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_work_orders(
    conn: &mut SqliteConnection,
    filter: &WorkOrderFilter,
) -> Result<Vec<WorkOrder>, PersistenceError> {
    let mut query = work_orders::table
        .order(work_orders::work_order_id.asc())
        .select(WorkOrderRow::as_select())
        .into_boxed();

    if let Some(status) = filter.status {
        query = query.filter(work_orders::status.eq(status.as_str()));
    }
    if let Some(contractor_id) = filter.contractor_id {
        query = query.filter(work_orders::assigned_contractor_id.eq(contractor_id.value()));
    }
    if let Some(job_request_id) = filter.job_request_id {
        query = query.filter(work_orders::job_request_id.eq(job_request_id.value()));
    }
    if let Some(priority) = filter.priority {
        query = query.filter(work_orders::priority.eq(priority.as_str()));
    }

    let rows: Vec<WorkOrderRow> = query.load(conn)?;
    let ids: Vec<i64> = rows.iter().map(|row| row.work_order_id).collect();
    let mut comments = load_comments(conn, &ids)?;
    debug!(count = rows.len(), "Loaded work orders");

    rows.into_iter()
        .map(|row| {
            let own: Vec<WorkOrderComment> =
                comments.remove(&row.work_order_id).unwrap_or_default();
            row.into_work_order(own)
        })
        .collect()
}
