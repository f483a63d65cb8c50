//! # Manager Reports
//!
//! End-of-day figures for the back office. Manager role required.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use gilded_db::Database;

use crate::error::ServiceResult;
use crate::session::SessionState;

/// The single most-ordered menu item, by line count.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BestSellerDto {
    pub name: String,
    pub times_ordered: i64,
}

/// Sales summary for the manager screen.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SalesSummary {
    /// Sum of completed order totals (open orders count for nothing yet)
    pub revenue_cents: i64,

    /// Every order ever opened, completed or not
    pub order_count: i64,

    /// `None` until the first line item is ever ordered
    pub best_seller: Option<BestSellerDto>,
}

/// Computes the sales summary. Manager only.
pub async fn sales_summary(db: &Database, sessions: &SessionState) -> ServiceResult<SalesSummary> {
    sessions.require_manager()?;
    debug!("sales_summary");

    let orders = db.orders();
    let revenue_cents = orders.revenue().await?;
    let order_count = orders.order_count().await?;
    let best_seller = orders
        .best_seller()
        .await?
        .map(|(name, times_ordered)| BestSellerDto {
            name,
            times_ordered,
        });

    Ok(SalesSummary {
        revenue_cents,
        order_count,
        best_seller,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{create_staff_account, sign_in, CreateStaffRequest, SignInRequest};
    use crate::error::ErrorCode;
    use crate::orders::{add_item_to_table, checkout, AddItemRequest};
    use gilded_core::Role;
    use gilded_db::DbConfig;

    async fn signed_in() -> (Database, SessionState) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let sessions = SessionState::new();
        sign_in(
            &db,
            &sessions,
            SignInRequest {
                username: "admin".to_string(),
                password: "admin".to_string(),
            },
        )
        .await
        .unwrap();
        (db, sessions)
    }

    async fn cola_id(db: &Database, sessions: &SessionState) -> i64 {
        let categories = crate::menu::list_categories(db, sessions).await.unwrap();
        let beverages = categories.iter().find(|c| c.name == "Beverages").unwrap();
        crate::menu::list_items(db, sessions, beverages.id)
            .await
            .unwrap()
            .into_iter()
            .find(|i| i.name == "Cola")
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_fresh_database_has_empty_summary() {
        let (db, sessions) = signed_in().await;

        let summary = sales_summary(&db, &sessions).await.unwrap();
        assert_eq!(summary.revenue_cents, 0);
        assert_eq!(summary.order_count, 0);
        assert!(summary.best_seller.is_none());
    }

    #[tokio::test]
    async fn test_revenue_counts_completed_orders_only() {
        let (db, sessions) = signed_in().await;
        let cola = cola_id(&db, &sessions).await;

        // Table 1: two colas, settled.
        for _ in 0..2 {
            add_item_to_table(
                &db,
                &sessions,
                AddItemRequest {
                    table_id: 1,
                    menu_item_id: cola,
                },
            )
            .await
            .unwrap();
        }
        let dir = tempfile::tempdir().unwrap();
        checkout(&db, &sessions, 1, dir.path()).await.unwrap();

        // Table 2: one cola, still open.
        add_item_to_table(
            &db,
            &sessions,
            AddItemRequest {
                table_id: 2,
                menu_item_id: cola,
            },
        )
        .await
        .unwrap();

        let summary = sales_summary(&db, &sessions).await.unwrap();
        assert_eq!(summary.revenue_cents, 648);
        assert_eq!(summary.order_count, 2);

        let best = summary.best_seller.unwrap();
        assert_eq!(best.name, "Cola");
        assert_eq!(best.times_ordered, 3);
    }

    #[tokio::test]
    async fn test_requires_manager_role() {
        let (db, sessions) = signed_in().await;
        create_staff_account(
            &db,
            &sessions,
            CreateStaffRequest {
                username: "carla".to_string(),
                password: "s3cret".to_string(),
                role: Role::Server,
            },
        )
        .await
        .unwrap();
        sign_in(
            &db,
            &sessions,
            SignInRequest {
                username: "carla".to_string(),
                password: "s3cret".to_string(),
            },
        )
        .await
        .unwrap();

        let err = sales_summary(&db, &sessions).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);

        sessions.sign_out();
        let err = sales_summary(&db, &sessions).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }
}
