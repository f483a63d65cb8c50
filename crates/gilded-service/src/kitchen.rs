//! # Kitchen Operations
//!
//! The kitchen display: one ticket per order with lines on the fire,
//! bumped off the screen when the food goes out.
//!
//! ## Ticket Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Kitchen Display                                   │
//! │                                                                         │
//! │  ┌───────────────┐   ┌───────────────┐                                  │
//! │  │ T-3    18:42  │   │ T-7    18:45  │  ◄─ oldest ticket first          │
//! │  │ ───────────── │   │ ───────────── │                                  │
//! │  │ Ribeye Steak  │   │ Salmon        │  ◄─ Cooking lines only           │
//! │  │ Pasta         │   │               │                                  │
//! │  └───────┬───────┘   └───────────────┘                                  │
//! │          │ bump                                                         │
//! │          ▼                                                              │
//! │  Lines → Served, ticket leaves the screen.                              │
//! │                                                                         │
//! │  A ticket reappears if the table fires another round later.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ts_rs::TS;

use gilded_db::Database;

use crate::error::ServiceResult;
use crate::session::SessionState;

/// One line on a kitchen ticket.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TicketLineDto {
    pub line_id: i64,
    pub name: String,
}

/// One ticket on the kitchen display.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TicketDto {
    pub order_id: i64,
    /// Table label at display time (includes a guest suffix if reserved)
    pub table_label: String,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    pub lines: Vec<TicketLineDto>,
}

/// Result of bumping a ticket.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BumpResponse {
    pub order_id: i64,
    /// How many lines went from Cooking to Served
    pub served_count: u64,
}

/// Returns the kitchen display: every order with Cooking lines, oldest
/// first, each carrying only its Cooking lines.
pub async fn kitchen_display(
    db: &Database,
    sessions: &SessionState,
) -> ServiceResult<Vec<TicketDto>> {
    sessions.require()?;
    debug!("kitchen_display");

    let orders = db.orders();
    let mut tickets = Vec::new();
    for ticket in orders.tickets().await? {
        let lines = orders.ticket_lines(ticket.order_id).await?;
        tickets.push(TicketDto {
            order_id: ticket.order_id,
            table_label: ticket.table_label,
            created_at: ticket.created_at,
            lines: lines
                .into_iter()
                .map(|l| TicketLineDto {
                    line_id: l.line_id,
                    name: l.name,
                })
                .collect(),
        });
    }

    Ok(tickets)
}

/// Bumps a ticket: every Cooking line of the order becomes Served.
///
/// Unsent lines are untouched, so a round fired later puts the ticket
/// back on the display. Bumping an order with nothing cooking (or an
/// unknown order) serves zero lines and is not an error.
pub async fn bump_ticket(
    db: &Database,
    sessions: &SessionState,
    order_id: i64,
) -> ServiceResult<BumpResponse> {
    sessions.require()?;
    debug!(order_id = %order_id, "bump_ticket");

    let served_count = db.orders().bump(order_id).await?;
    info!(order_id = %order_id, served = %served_count, "Ticket bumped");

    Ok(BumpResponse {
        order_id,
        served_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{sign_in, SignInRequest};
    use crate::error::ErrorCode;
    use crate::orders::{add_item_to_table, fire_order, table_bill, AddItemRequest};
    use gilded_core::KitchenStatus;
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

    async fn add(db: &Database, sessions: &SessionState, table_id: i64, item: i64) {
        add_item_to_table(
            db,
            sessions,
            AddItemRequest {
                table_id,
                menu_item_id: item,
            },
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_display_shows_fired_tables_oldest_first() {
        let (db, sessions) = signed_in().await;
        let cola = cola_id(&db, &sessions).await;

        add(&db, &sessions, 1, cola).await;
        fire_order(&db, &sessions, 1).await.unwrap();
        add(&db, &sessions, 2, cola).await;
        fire_order(&db, &sessions, 2).await.unwrap();
        add(&db, &sessions, 3, cola).await; // never fired

        let tickets = kitchen_display(&db, &sessions).await.unwrap();
        let labels: Vec<&str> = tickets.iter().map(|t| t.table_label.as_str()).collect();
        assert_eq!(labels, ["T-1", "T-2"]);
        assert!(tickets.iter().all(|t| !t.lines.is_empty()));
        assert_eq!(tickets[0].lines[0].name, "Cola");
    }

    #[tokio::test]
    async fn test_tickets_carry_only_cooking_lines() {
        let (db, sessions) = signed_in().await;
        let cola = cola_id(&db, &sessions).await;

        add(&db, &sessions, 1, cola).await;
        add(&db, &sessions, 1, cola).await;
        fire_order(&db, &sessions, 1).await.unwrap();
        add(&db, &sessions, 1, cola).await; // third round not fired yet

        let tickets = kitchen_display(&db, &sessions).await.unwrap();
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].lines.len(), 2);
    }

    #[tokio::test]
    async fn test_bump_clears_the_ticket() {
        let (db, sessions) = signed_in().await;
        let cola = cola_id(&db, &sessions).await;

        add(&db, &sessions, 1, cola).await;
        add(&db, &sessions, 1, cola).await;
        let fired = fire_order(&db, &sessions, 1).await.unwrap().unwrap();

        let bumped = bump_ticket(&db, &sessions, fired.order_id).await.unwrap();
        assert_eq!(bumped.served_count, 2);
        assert!(kitchen_display(&db, &sessions).await.unwrap().is_empty());

        let bill = table_bill(&db, &sessions, 1).await.unwrap().unwrap();
        assert!(bill
            .lines
            .iter()
            .all(|l| l.status == Some(KitchenStatus::Served)));

        // Nothing left to serve.
        let again = bump_ticket(&db, &sessions, fired.order_id).await.unwrap();
        assert_eq!(again.served_count, 0);
    }

    #[tokio::test]
    async fn test_later_round_reopens_the_ticket() {
        let (db, sessions) = signed_in().await;
        let cola = cola_id(&db, &sessions).await;

        add(&db, &sessions, 1, cola).await;
        let fired = fire_order(&db, &sessions, 1).await.unwrap().unwrap();
        bump_ticket(&db, &sessions, fired.order_id).await.unwrap();

        add(&db, &sessions, 1, cola).await;
        fire_order(&db, &sessions, 1).await.unwrap();

        let tickets = kitchen_display(&db, &sessions).await.unwrap();
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].lines.len(), 1);
    }

    #[tokio::test]
    async fn test_bump_leaves_other_orders_cooking() {
        let (db, sessions) = signed_in().await;
        let cola = cola_id(&db, &sessions).await;

        add(&db, &sessions, 1, cola).await;
        let first = fire_order(&db, &sessions, 1).await.unwrap().unwrap();
        add(&db, &sessions, 2, cola).await;
        fire_order(&db, &sessions, 2).await.unwrap();

        bump_ticket(&db, &sessions, first.order_id).await.unwrap();

        let tickets = kitchen_display(&db, &sessions).await.unwrap();
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].table_label, "T-2");

        let other = table_bill(&db, &sessions, 2).await.unwrap().unwrap();
        assert!(other
            .lines
            .iter()
            .all(|l| l.status == Some(KitchenStatus::Cooking)));
    }

    #[tokio::test]
    async fn test_bump_unknown_order_serves_nothing() {
        let (db, sessions) = signed_in().await;

        let bumped = bump_ticket(&db, &sessions, 999).await.unwrap();
        assert_eq!(bumped.served_count, 0);
    }

    #[tokio::test]
    async fn test_requires_session() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let sessions = SessionState::new();

        let err = kitchen_display(&db, &sessions).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }
}
