//! # Floor Operations
//!
//! The table map: reservations, and bussing dirty tables back into
//! service. Seating itself happens implicitly when the first item is
//! ordered (see [`crate::orders`]).
//!
//! ## Table Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Floor Screen Actions                               │
//! │                                                                         │
//! │  Shell Action             Service Function         Table Change         │
//! │  ────────────             ────────────────         ────────────         │
//! │                                                                         │
//! │  View Floor ─────────────► floor_view() ─────────► (read only)          │
//! │                                                                         │
//! │  Reserve for "John" ─────► reserve_table() ──────► Free → Reserved      │
//! │                                                    label: "T-5 (John)"  │
//! │                                                                         │
//! │  Cancel Reservation ─────► cancel_reservation() ─► Reserved → Free      │
//! │                                                    label: "T-5"         │
//! │                                                                         │
//! │  Mark Cleaned ───────────► clear_table() ────────► Dirty → Free         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ts_rs::TS;

use gilded_core::validation::validate_guest_name;
use gilded_core::{DiningTable, TableStatus};
use gilded_db::Database;

use crate::error::ServiceResult;
use crate::session::SessionState;

/// Table DTO for the floor map.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TableDto {
    pub id: i64,
    /// Display label; carries the guest name while reserved
    pub label: String,
    pub capacity: i64,
    pub status: TableStatus,
    /// The open order seated at this table, if any
    pub current_order_id: Option<i64>,
}

impl From<DiningTable> for TableDto {
    fn from(t: DiningTable) -> Self {
        TableDto {
            id: t.id,
            label: t.label,
            capacity: t.capacity,
            status: t.status,
            current_order_id: t.current_order_id,
        }
    }
}

/// Reservation request from the floor screen.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReserveTableRequest {
    pub table_id: i64,
    pub guest_name: String,
}

/// Returns every table for the floor map, in table-number order.
pub async fn floor_view(db: &Database, sessions: &SessionState) -> ServiceResult<Vec<TableDto>> {
    sessions.require()?;
    debug!("floor_view");

    let tables = db.floor().list().await?;
    Ok(tables.into_iter().map(TableDto::from).collect())
}

/// Reserves a free table under a guest's name.
///
/// ## Errors
/// - `VALIDATION_ERROR` for an empty or oversized guest name
/// - `NOT_FOUND` for an unknown table
/// - `BUSINESS_LOGIC` when the table is not `Free`
pub async fn reserve_table(
    db: &Database,
    sessions: &SessionState,
    request: ReserveTableRequest,
) -> ServiceResult<TableDto> {
    sessions.require()?;
    debug!(table_id = %request.table_id, "reserve_table");

    let guest_name = validate_guest_name(&request.guest_name)?;
    let table = db.floor().reserve(request.table_id, &guest_name).await?;

    info!(table_id = %table.id, label = %table.label, "Table reserved");
    Ok(TableDto::from(table))
}

/// Cancels a reservation, restoring the plain table label.
///
/// ## Errors
/// - `NOT_FOUND` for an unknown table
/// - `BUSINESS_LOGIC` when the table is not `Reserved`
pub async fn cancel_reservation(
    db: &Database,
    sessions: &SessionState,
    table_id: i64,
) -> ServiceResult<TableDto> {
    sessions.require()?;
    debug!(table_id = %table_id, "cancel_reservation");

    let table = db.floor().cancel_reservation(table_id).await?;

    info!(table_id = %table.id, "Reservation cancelled");
    Ok(TableDto::from(table))
}

/// Marks a dirty table as cleaned and back in service.
///
/// ## Errors
/// - `NOT_FOUND` for an unknown table
/// - `BUSINESS_LOGIC` when the table is not `Dirty`
pub async fn clear_table(
    db: &Database,
    sessions: &SessionState,
    table_id: i64,
) -> ServiceResult<TableDto> {
    sessions.require()?;
    debug!(table_id = %table_id, "clear_table");

    let table = db.floor().clear(table_id).await?;

    info!(table_id = %table.id, "Table cleared");
    Ok(TableDto::from(table))
}
