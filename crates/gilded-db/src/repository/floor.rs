//! # Floor Repository
//!
//! Table state machine transitions.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Table Status Transitions                            │
//! │                                                                         │
//! │            reserve(guest)                                               │
//! │      Free ───────────────► Reserved                                     │
//! │       ▲  ▲                  │    │                                      │
//! │       │  └──────────────────┘    │ first item added                     │
//! │       │    cancel_reservation    │ (order.rs)                           │
//! │       │                          ▼                                      │
//! │       │                      Occupied                                   │
//! │       │                          │                                      │
//! │       │                          │ checkout (order.rs)                  │
//! │       │        clear             ▼                                      │
//! │       └─────────────────────── Dirty                                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every transition is a guarded UPDATE: the WHERE clause names the only
//! status the transition is legal from, and zero affected rows means the
//! table was missing or in the wrong state. The two transitions owned by
//! the order flow (seating and checkout) live in [`order`](super::order).

use sqlx::SqlitePool;
use tracing::debug;

use gilded_core::{canonical_table_label, CoreError, DiningTable};

use crate::error::{DbError, DbResult};

/// Repository for floor operations.
#[derive(Debug, Clone)]
pub struct FloorRepository {
    pool: SqlitePool,
}

impl FloorRepository {
    /// Creates a new floor repository.
    pub fn new(pool: SqlitePool) -> Self {
        FloorRepository { pool }
    }

    /// Lists every table on the floor, in table-number order.
    pub async fn list(&self) -> DbResult<Vec<DiningTable>> {
        let tables = sqlx::query_as::<_, DiningTable>(
            r#"
            SELECT id, label, capacity, status, current_order_id
            FROM restaurant_tables
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tables)
    }

    /// Fetches one table.
    pub async fn get(&self, table_id: i64) -> DbResult<Option<DiningTable>> {
        let table = sqlx::query_as::<_, DiningTable>(
            r#"
            SELECT id, label, capacity, status, current_order_id
            FROM restaurant_tables
            WHERE id = ?1
            "#,
        )
        .bind(table_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(table)
    }

    /// Reserves a Free table for a named guest.
    ///
    /// The guest name is appended to the label: `T-5` becomes `T-5 (John)`.
    ///
    /// ## Returns
    /// * `Ok(table)` - The updated table
    /// * `Err(Domain)` - Table missing or not Free
    pub async fn reserve(&self, table_id: i64, guest_name: &str) -> DbResult<DiningTable> {
        let result = sqlx::query(
            r#"
            UPDATE restaurant_tables
            SET status = 'Reserved', label = label || ' (' || ?1 || ')'
            WHERE id = ?2 AND status = 'Free'
            "#,
        )
        .bind(guest_name)
        .bind(table_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(self.status_guard_failure(table_id).await);
        }

        debug!(table_id = table_id, guest = %guest_name, "Table reserved");
        self.get_expected(table_id).await
    }

    /// Cancels a reservation, restoring the canonical label.
    ///
    /// ## Returns
    /// * `Ok(table)` - The updated table, Free again
    /// * `Err(Domain)` - Table missing or not Reserved
    pub async fn cancel_reservation(&self, table_id: i64) -> DbResult<DiningTable> {
        let result = sqlx::query(
            r#"
            UPDATE restaurant_tables
            SET status = 'Free', label = ?1
            WHERE id = ?2 AND status = 'Reserved'
            "#,
        )
        .bind(canonical_table_label(table_id))
        .bind(table_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(self.status_guard_failure(table_id).await);
        }

        debug!(table_id = table_id, "Reservation cancelled");
        self.get_expected(table_id).await
    }

    /// Clears a Dirty table after bussing.
    ///
    /// Restores the canonical label and drops any stale order reference.
    ///
    /// ## Returns
    /// * `Ok(table)` - The updated table, Free again
    /// * `Err(Domain)` - Table missing or not Dirty
    pub async fn clear(&self, table_id: i64) -> DbResult<DiningTable> {
        let result = sqlx::query(
            r#"
            UPDATE restaurant_tables
            SET status = 'Free', label = ?1, current_order_id = NULL
            WHERE id = ?2 AND status = 'Dirty'
            "#,
        )
        .bind(canonical_table_label(table_id))
        .bind(table_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(self.status_guard_failure(table_id).await);
        }

        debug!(table_id = table_id, "Table cleared");
        self.get_expected(table_id).await
    }

    /// Explains a failed guarded transition: missing table or wrong status.
    async fn status_guard_failure(&self, table_id: i64) -> DbError {
        match self.get(table_id).await {
            Ok(Some(table)) => CoreError::InvalidTableStatus {
                table_id,
                current_status: table.status.to_string(),
            }
            .into(),
            Ok(None) => CoreError::TableNotFound(table_id).into(),
            Err(e) => e,
        }
    }

    async fn get_expected(&self, table_id: i64) -> DbResult<DiningTable> {
        self.get(table_id)
            .await?
            .ok_or_else(|| CoreError::TableNotFound(table_id).into())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
