// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Work order mutations.
//!
//! A work order and its comments are one aggregate: every write that
//! touches both runs in a single transaction.

use diesel::SqliteConnection;
use diesel::prelude::*;
use facilitydesk_domain::{WorkOrder, WorkOrderComment};
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::data_models::{WorkOrderPatch, encode_optional_timestamp, encode_timestamp};
use crate::diesel_schema::{work_order_comments, work_orders};
use crate::error::PersistenceError;
use crate::queries::work_orders::work_order_exists;

/// Column changes for a work order update. `None` fields are skipped.
#[derive(AsChangeset)]
#[diesel(table_name = work_orders)]
struct WorkOrderChangeset {
    company_name: Option<String>,
    assigned_contractor_id: Option<Option<i64>>,
    priority: Option<String>,
    description: Option<String>,
    address: Option<String>,
    city: Option<String>,
    state: Option<String>,
    zip_code: Option<i64>,
    latitude: Option<Option<f64>>,
    longitude: Option<Option<f64>>,
    status: Option<String>,
    start_date: Option<Option<String>>,
    estimated_end_date: Option<Option<String>>,
}

impl WorkOrderChangeset {
    fn from_patch(patch: &WorkOrderPatch) -> Result<Self, PersistenceError> {
        Ok(Self {
            company_name: patch.company_name.clone(),
            assigned_contractor_id: patch
                .assigned_contractor_id
                .map(|id| id.map(|id| id.value())),
            priority: patch.priority.map(|p| p.as_str().to_string()),
            description: patch.description.clone(),
            address: patch.address.clone(),
            city: patch.city.clone(),
            state: patch.state.clone(),
            zip_code: patch.zip_code.map(i64::from),
            latitude: patch.latitude,
            longitude: patch.longitude,
            status: patch.status.map(|s| s.as_str().to_string()),
            start_date: patch.start_date.map(encode_optional_timestamp).transpose()?,
            estimated_end_date: patch
                .estimated_end_date
                .map(encode_optional_timestamp)
                .transpose()?,
        })
    }
}

fn insert_comments(
    conn: &mut SqliteConnection,
    work_order_id: i64,
    comments: &[WorkOrderComment],
) -> Result<(), PersistenceError> {
    for comment in comments {
        diesel::insert_into(work_order_comments::table)
            .values((
                work_order_comments::work_order_id.eq(work_order_id),
                work_order_comments::comment_id.eq(comment.comment_id.as_deref()),
                work_order_comments::author_name.eq(comment.author_name.as_deref()),
                work_order_comments::comment.eq(&comment.text),
            ))
            .execute(conn)?;
    }
    Ok(())
}

/// Inserts a work order with its initial comments and returns its new ID.
///
/// # Errors
///
/// Returns an error if either insert fails. Nothing is written in that case.
pub fn insert_work_order(
    conn: &mut SqliteConnection,
    work_order: &WorkOrder,
) -> Result<i64, PersistenceError> {
    info!(
        job_request_id = work_order.job_request_id.value(),
        "Creating work order"
    );

    let start_date: Option<String> = encode_optional_timestamp(work_order.start_date)?;
    let estimated_end_date: Option<String> =
        encode_optional_timestamp(work_order.estimated_end_date)?;
    let created_at: String = encode_timestamp(work_order.created_at)?;

    conn.transaction::<_, PersistenceError, _>(|conn| {
        diesel::insert_into(work_orders::table)
            .values((
                work_orders::job_request_id.eq(work_order.job_request_id.value()),
                work_orders::company_name.eq(&work_order.company_name),
                work_orders::assigned_contractor_id
                    .eq(work_order.assigned_contractor_id.map(|id| id.value())),
                work_orders::priority.eq(work_order.priority.as_str()),
                work_orders::description.eq(&work_order.description),
                work_orders::address.eq(&work_order.address),
                work_orders::city.eq(&work_order.city),
                work_orders::state.eq(&work_order.state),
                work_orders::zip_code.eq(i64::from(work_order.zip_code)),
                work_orders::latitude.eq(work_order.latitude),
                work_orders::longitude.eq(work_order.longitude),
                work_orders::status.eq(work_order.status.as_str()),
                work_orders::start_date.eq(&start_date),
                work_orders::estimated_end_date.eq(&estimated_end_date),
                work_orders::created_at.eq(&created_at),
            ))
            .execute(conn)?;

        let work_order_id: i64 = conn.get_last_insert_rowid()?;
        insert_comments(conn, work_order_id, &work_order.comments)?;

        info!(work_order_id, "Work order created");
        Ok(work_order_id)
    })
}

/// Applies a sparse update to a work order.
///
/// When the patch carries comments, the stored comments are replaced
/// wholesale in the same transaction.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no work order has this ID.
pub fn update_work_order(
    conn: &mut SqliteConnection,
    work_order_id: i64,
    patch: &WorkOrderPatch,
) -> Result<(), PersistenceError> {
    info!(work_order_id, "Updating work order");

    let column_patch: WorkOrderPatch = WorkOrderPatch {
        comments: None,
        ..patch.clone()
    };
    let changeset: Option<WorkOrderChangeset> = if column_patch.is_empty() {
        None
    } else {
        Some(WorkOrderChangeset::from_patch(&column_patch)?)
    };

    conn.transaction::<_, PersistenceError, _>(|conn| {
        let found: bool = match changeset {
            Some(changeset) => {
                let rows_affected: usize = diesel::update(work_orders::table)
                    .filter(work_orders::work_order_id.eq(work_order_id))
                    .set(changeset)
                    .execute(conn)?;
                rows_affected > 0
            }
            None => work_order_exists(conn, work_order_id)?,
        };

        if !found {
            return Err(PersistenceError::NotFound(format!(
                "Work order with ID {work_order_id} not found"
            )));
        }

        if let Some(comments) = &patch.comments {
            debug!(work_order_id, count = comments.len(), "Replacing comments");
            diesel::delete(work_order_comments::table)
                .filter(work_order_comments::work_order_id.eq(work_order_id))
                .execute(conn)?;
            insert_comments(conn, work_order_id, comments)?;
        }

        Ok(())
    })
}

/// Appends a comment to the end of a work order's comments.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no work order has this ID.
pub fn append_comment(
    conn: &mut SqliteConnection,
    work_order_id: i64,
    comment: &WorkOrderComment,
) -> Result<(), PersistenceError> {
    info!(work_order_id, "Appending work order comment");

    conn.transaction::<_, PersistenceError, _>(|conn| {
        if !work_order_exists(conn, work_order_id)? {
            return Err(PersistenceError::NotFound(format!(
                "Work order with ID {work_order_id} not found"
            )));
        }
        insert_comments(conn, work_order_id, std::slice::from_ref(comment))
    })
}

/// Deletes a work order and its comments.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no work order has this ID.
pub fn delete_work_order(
    conn: &mut SqliteConnection,
    work_order_id: i64,
) -> Result<(), PersistenceError> {
    info!(work_order_id, "Deleting work order");

    let rows_affected: usize = diesel::delete(work_orders::table)
        .filter(work_orders::work_order_id.eq(work_order_id))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Work order with ID {work_order_id} not found"
        )));
    }

    Ok(())
}
