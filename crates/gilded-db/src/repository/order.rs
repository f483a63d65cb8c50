//! # Order Repository
//!
//! Order lifecycle, kitchen flow and sales figures.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Order Lifecycle                                  │
//! │                                                                         │
//! │  add_item (first item on the table)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  INSERT orders (Open) ──► table becomes Occupied, holds order ref      │
//! │       │                                                                 │
//! │       │  add_item (further items)  ──► one order_details row each      │
//! │       │  send_to_kitchen           ──► NULL lines become Cooking       │
//! │       │  bump                      ──► Cooking lines become Served     │
//! │       ▼                                                                 │
//! │  checkout(total) ──► order Completed, table Dirty, ref cleared         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Transactions
//! `add_item` and `checkout` each touch several tables and own a single
//! transaction: either every statement lands or none do. The stock check
//! runs inside the add transaction, so an insufficient stock result rolls
//! back the deduction, the order row and the table update together.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::{debug, warn};

use gilded_core::{CoreError, DiningTable, KitchenStatus, MenuItem, Order, TableStatus};

use crate::error::DbResult;
use crate::repository::stock;

// =============================================================================
// Row Projections
// =============================================================================

/// One line of a guest bill, joined with its menu item.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BillLine {
    pub line_id: i64,
    pub name: String,
    pub price_cents: i64,
    pub status: Option<KitchenStatus>,
}

/// One ticket on the kitchen display: an order with at least one
/// Cooking line.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct KitchenTicket {
    pub order_id: i64,
    pub table_label: String,
    pub created_at: DateTime<Utc>,
}

/// One Cooking line on a kitchen ticket.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TicketLine {
    pub line_id: i64,
    pub name: String,
}

/// Result of adding an item to a table's order.
#[derive(Debug, Clone, Copy)]
pub struct AddItemOutcome {
    pub order_id: i64,
    pub line_id: i64,
    /// True when this add created the order and seated the table.
    pub opened_order: bool,
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for order operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new order repository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Fetches one order.
    pub async fn get(&self, order_id: i64) -> DbResult<Option<Order>> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, table_id, server_id, status, total_cents, created_at
            FROM orders
            WHERE id = ?1
            "#,
        )
        .bind(order_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }

    /// Adds one unit of a menu item to a table's open order.
    ///
    /// ## What This Does (one transaction)
    /// 1. Loads the table; rejects a Dirty one
    /// 2. Loads the menu item
    /// 3. Checks and deducts recipe-linked stock
    /// 4. Opens an order and seats the table if it has none
    /// 5. Inserts a single-quantity line with no kitchen status
    ///
    /// A Reserved table is seated by its first item and keeps the guest
    /// name in its label. Ordering the same item again inserts another
    /// row; quantities never aggregate.
    ///
    /// ## Returns
    /// * `Ok(outcome)` - Order id, new line id, whether the order was opened
    /// * `Err(Domain(InsufficientStock))` - Nothing changed
    /// * `Err(Domain(..))` - Table/item missing, or table Dirty
    pub async fn add_item(
        &self,
        table_id: i64,
        menu_item_id: i64,
        server_id: i64,
    ) -> DbResult<AddItemOutcome> {
        let mut tx = self.pool.begin().await?;

        let table = sqlx::query_as::<_, DiningTable>(
            r#"
            SELECT id, label, capacity, status, current_order_id
            FROM restaurant_tables
            WHERE id = ?1
            "#,
        )
        .bind(table_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(CoreError::TableNotFound(table_id))?;

        // A Dirty table must be cleared before the next party orders.
        if table.status == TableStatus::Dirty {
            return Err(CoreError::InvalidTableStatus {
                table_id,
                current_status: table.status.to_string(),
            }
            .into());
        }

        let item = sqlx::query_as::<_, MenuItem>(
            r#"
            SELECT id, category_id, name, price_cents, description
            FROM menu_items
            WHERE id = ?1
            "#,
        )
        .bind(menu_item_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(CoreError::MenuItemNotFound(menu_item_id))?;

        // An error here drops the transaction and rolls everything back.
        stock::check_for_item(&mut tx, &item).await?;
        stock::deduct_for_item(&mut tx, item.id).await?;

        let (order_id, opened_order) = match table.current_order_id {
            Some(order_id) => (order_id, false),
            None => {
                let result = sqlx::query(
                    r#"
                    INSERT INTO orders (table_id, server_id, created_at, status, total_cents)
                    VALUES (?1, ?2, ?3, 'Open', 0)
                    "#,
                )
                .bind(table_id)
                .bind(server_id)
                .bind(Utc::now())
                .execute(&mut *tx)
                .await?;
                let order_id = result.last_insert_rowid();

                // Seat the table. A Reserved label keeps its guest suffix.
                sqlx::query(
                    r#"
                    UPDATE restaurant_tables
                    SET status = 'Occupied', current_order_id = ?1
                    WHERE id = ?2
                    "#,
                )
                .bind(order_id)
                .bind(table_id)
                .execute(&mut *tx)
                .await?;

                (order_id, true)
            }
        };

        let result = sqlx::query(
            "INSERT INTO order_details (order_id, menu_item_id, quantity) VALUES (?1, ?2, 1)",
        )
        .bind(order_id)
        .bind(menu_item_id)
        .execute(&mut *tx)
        .await?;
        let line_id = result.last_insert_rowid();

        tx.commit().await?;

        debug!(
            table_id = table_id,
            order_id = order_id,
            line_id = line_id,
            item = %item.name,
            "Item added to order"
        );

        Ok(AddItemOutcome {
            order_id,
            line_id,
            opened_order,
        })
    }

    /// Lists an order's lines for the bill, in the order they were added.
    pub async fn bill_lines(&self, order_id: i64) -> DbResult<Vec<BillLine>> {
        let lines = sqlx::query_as::<_, BillLine>(
            r#"
            SELECT od.id AS line_id, m.name, m.price_cents, od.status
            FROM order_details od
            JOIN menu_items m ON m.id = od.menu_item_id
            WHERE od.order_id = ?1
            ORDER BY od.id
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(lines)
    }

    /// Sends an order's unsent lines to the kitchen.
    ///
    /// Only lines with no kitchen status are promoted to Cooking, so
    /// firing the same order twice is a no-op for already-sent lines.
    ///
    /// ## Returns
    /// The number of lines promoted (0 when nothing was waiting).
    pub async fn send_to_kitchen(&self, order_id: i64) -> DbResult<u64> {
        let result = sqlx::query(
            "UPDATE order_details SET status = 'Cooking' WHERE order_id = ?1 AND status IS NULL",
        )
        .bind(order_id)
        .execute(&self.pool)
        .await?;

        let sent = result.rows_affected();
        debug!(order_id = order_id, lines = sent, "Sent order to kitchen");
        Ok(sent)
    }

    /// Finalizes an order with its computed total and dirties its table.
    ///
    /// ## What This Does (one transaction)
    /// 1. Guarded UPDATE: `Open` → `Completed`, writing `total_cents`
    /// 2. The referencing table goes Dirty and drops the order reference
    ///
    /// ## Returns
    /// * `Ok(order)` - The completed order
    /// * `Err(Domain(InvalidOrderStatus))` - Already completed
    /// * `Err(Domain(OrderNotFound))` - No such order
    pub async fn checkout(&self, order_id: i64, total_cents: i64) -> DbResult<Order> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE orders
            SET status = 'Completed', total_cents = ?1
            WHERE id = ?2 AND status = 'Open'
            "#,
        )
        .bind(total_cents)
        .bind(order_id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            let current = sqlx::query_as::<_, (String,)>(
                "SELECT status FROM orders WHERE id = ?1",
            )
            .bind(order_id)
            .fetch_optional(&mut *tx)
            .await?;

            return Err(match current {
                Some((current_status,)) => CoreError::InvalidOrderStatus {
                    order_id,
                    current_status,
                }
                .into(),
                None => CoreError::OrderNotFound(order_id).into(),
            });
        }

        let table_update = sqlx::query(
            r#"
            UPDATE restaurant_tables
            SET status = 'Dirty', current_order_id = NULL
            WHERE current_order_id = ?1
            "#,
        )
        .bind(order_id)
        .execute(&mut *tx)
        .await?;

        if table_update.rows_affected() == 0 {
            warn!(order_id = order_id, "Checked-out order had no table referencing it");
        }

        let order = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, table_id, server_id, status, total_cents, created_at
            FROM orders
            WHERE id = ?1
            "#,
        )
        .bind(order_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        debug!(order_id = order_id, total_cents = total_cents, "Order checked out");
        Ok(order)
    }

    // =========================================================================
    // Kitchen Display
    // =========================================================================

    /// Lists the kitchen tickets: every order with at least one Cooking
    /// line, oldest first.
    pub async fn tickets(&self) -> DbResult<Vec<KitchenTicket>> {
        let tickets = sqlx::query_as::<_, KitchenTicket>(
            r#"
            SELECT DISTINCT o.id AS order_id, t.label AS table_label, o.created_at
            FROM orders o
            JOIN restaurant_tables t ON t.id = o.table_id
            JOIN order_details od ON od.order_id = o.id
            WHERE od.status = 'Cooking'
            ORDER BY o.created_at, o.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tickets)
    }

    /// Lists the Cooking lines of one ticket.
    pub async fn ticket_lines(&self, order_id: i64) -> DbResult<Vec<TicketLine>> {
        let lines = sqlx::query_as::<_, TicketLine>(
            r#"
            SELECT od.id AS line_id, m.name
            FROM order_details od
            JOIN menu_items m ON m.id = od.menu_item_id
            WHERE od.order_id = ?1 AND od.status = 'Cooking'
            ORDER BY od.id
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(lines)
    }

    /// Marks an order's Cooking lines as Served (a kitchen bump).
    ///
    /// Lines never sent stay unsent; the ticket leaves the display once
    /// no Cooking line remains.
    ///
    /// ## Returns
    /// The number of lines served.
    pub async fn bump(&self, order_id: i64) -> DbResult<u64> {
        let result = sqlx::query(
            "UPDATE order_details SET status = 'Served' WHERE order_id = ?1 AND status = 'Cooking'",
        )
        .bind(order_id)
        .execute(&self.pool)
        .await?;

        let served = result.rows_affected();
        debug!(order_id = order_id, lines = served, "Ticket bumped");
        Ok(served)
    }

    // =========================================================================
    // Sales Figures
    // =========================================================================

    /// Total revenue in cents across Completed orders.
    ///
    /// Open orders carry a zero total until checkout and are excluded.
    pub async fn revenue(&self) -> DbResult<i64> {
        let (revenue,): (i64,) = sqlx::query_as(
            "SELECT COALESCE(SUM(total_cents), 0) FROM orders WHERE status = 'Completed'",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(revenue)
    }

    /// Counts every order ever opened, regardless of status.
    pub async fn order_count(&self) -> DbResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// The most-ordered menu item and how many times it was ordered.
    ///
    /// Counts order lines (each line is one unit), so an item ordered
    /// three times across two tables counts three.
    pub async fn best_seller(&self) -> DbResult<Option<(String, i64)>> {
        let best = sqlx::query_as::<_, (String, i64)>(
            r#"
            SELECT m.name, COUNT(od.id) AS times_ordered
            FROM order_details od
            JOIN menu_items m ON m.id = od.menu_item_id
            GROUP BY m.name
            ORDER BY times_ordered DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(best)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};
    use gilded_core::{password_digest, OrderStatus};

    async fn fresh_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    async fn admin_id(db: &Database) -> i64 {
        db.staff()
            .find_by_credentials("admin", &password_digest("admin"))
            .await
            .unwrap()
            .unwrap()
            .id
    }

    async fn menu_item(db: &Database, name: &str) -> MenuItem {
        let categories = db.menu().categories().await.unwrap();
        for category in categories {
            let items = db.menu().items_by_category(category.id).await.unwrap();
            if let Some(item) = items.into_iter().find(|i| i.name == name) {
                return item;
            }
        }
        panic!("menu item {name} not seeded");
    }

    #[tokio::test]
    async fn test_first_item_opens_order_and_occupies_table() {
        let db = fresh_db().await;
        let server = admin_id(&db).await;
        let cola = menu_item(&db, "Cola").await;

        let outcome = db.orders().add_item(1, cola.id, server).await.unwrap();
        assert!(outcome.opened_order);

        let table = db.floor().get(1).await.unwrap().unwrap();
        assert_eq!(table.status, TableStatus::Occupied);
        assert_eq!(table.current_order_id, Some(outcome.order_id));

        let order = db.orders().get(outcome.order_id).await.unwrap().unwrap();
        assert_eq!(order.status, OrderStatus::Open);
        assert_eq!(order.total_cents, 0);
        assert_eq!(order.table_id, 1);
        assert_eq!(order.server_id, server);
    }

    #[tokio::test]
    async fn test_repeat_item_adds_rows_not_quantity() {
        let db = fresh_db().await;
        let server = admin_id(&db).await;
        let cola = menu_item(&db, "Cola").await;

        let first = db.orders().add_item(1, cola.id, server).await.unwrap();
        let second = db.orders().add_item(1, cola.id, server).await.unwrap();

        assert!(!second.opened_order);
        assert_eq!(first.order_id, second.order_id);
        assert_ne!(first.line_id, second.line_id);

        let lines = db.orders().bill_lines(first.order_id).await.unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.name == "Cola" && l.status.is_none()));
    }

    #[tokio::test]
    async fn test_add_item_seats_reserved_table_keeping_label() {
        let db = fresh_db().await;
        let server = admin_id(&db).await;
        let cola = menu_item(&db, "Cola").await;

        db.floor().reserve(3, "John").await.unwrap();
        let outcome = db.orders().add_item(3, cola.id, server).await.unwrap();

        let table = db.floor().get(3).await.unwrap().unwrap();
        assert_eq!(table.status, TableStatus::Occupied);
        assert_eq!(table.label, "T-3 (John)");
        assert_eq!(table.current_order_id, Some(outcome.order_id));
    }

    #[tokio::test]
    async fn test_add_item_rejected_on_dirty_table() {
        let db = fresh_db().await;
        let server = admin_id(&db).await;
        let cola = menu_item(&db, "Cola").await;

        let outcome = db.orders().add_item(1, cola.id, server).await.unwrap();
        db.orders().checkout(outcome.order_id, 324).await.unwrap();

        let err = db.orders().add_item(1, cola.id, server).await.unwrap_err();
        assert!(matches!(
            err,
            DbError::Domain(CoreError::InvalidTableStatus { .. })
        ));
    }

    #[tokio::test]
    async fn test_insufficient_stock_rolls_back_everything() {
        let db = fresh_db().await;
        let server = admin_id(&db).await;
        let ribeye = menu_item(&db, "Ribeye Steak").await;

        sqlx::query("UPDATE inventory SET quantity = 0 WHERE name = 'Steak Meat'")
            .execute(db.pool())
            .await
            .unwrap();

        let err = db.orders().add_item(2, ribeye.id, server).await.unwrap_err();
        assert!(matches!(
            err,
            DbError::Domain(CoreError::InsufficientStock { .. })
        ));

        // Nothing changed: no order, table untouched, stock untouched.
        assert_eq!(db.orders().order_count().await.unwrap(), 0);
        let table = db.floor().get(2).await.unwrap().unwrap();
        assert_eq!(table.status, TableStatus::Free);
        assert!(table.current_order_id.is_none());
        let stocks = db.stock().list().await.unwrap();
        let steak = stocks.iter().find(|s| s.name == "Steak Meat").unwrap();
        assert_eq!(steak.quantity, 0);
    }

    #[tokio::test]
    async fn test_insufficient_stock_keeps_existing_order_lines() {
        let db = fresh_db().await;
        let server = admin_id(&db).await;
        let cola = menu_item(&db, "Cola").await;
        let ribeye = menu_item(&db, "Ribeye Steak").await;

        let outcome = db.orders().add_item(2, cola.id, server).await.unwrap();

        sqlx::query("UPDATE inventory SET quantity = 0 WHERE name = 'Steak Meat'")
            .execute(db.pool())
            .await
            .unwrap();

        db.orders().add_item(2, ribeye.id, server).await.unwrap_err();

        let lines = db.orders().bill_lines(outcome.order_id).await.unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].name, "Cola");
    }

    #[tokio::test]
    async fn test_stock_deducted_on_successful_add() {
        let db = fresh_db().await;
        let server = admin_id(&db).await;
        let ribeye = menu_item(&db, "Ribeye Steak").await;

        db.orders().add_item(2, ribeye.id, server).await.unwrap();

        let stocks = db.stock().list().await.unwrap();
        let steak = stocks.iter().find(|s| s.name == "Steak Meat").unwrap();
        assert_eq!(steak.quantity, 4);
    }

    #[tokio::test]
    async fn test_add_item_unknown_table_or_item() {
        let db = fresh_db().await;
        let server = admin_id(&db).await;
        let cola = menu_item(&db, "Cola").await;

        let err = db.orders().add_item(999, cola.id, server).await.unwrap_err();
        assert!(matches!(err, DbError::Domain(CoreError::TableNotFound(999))));

        let err = db.orders().add_item(1, 999, server).await.unwrap_err();
        assert!(matches!(
            err,
            DbError::Domain(CoreError::MenuItemNotFound(999))
        ));
    }

    #[tokio::test]
    async fn test_send_to_kitchen_promotes_only_unsent_lines() {
        let db = fresh_db().await;
        let server = admin_id(&db).await;
        let cola = menu_item(&db, "Cola").await;

        let outcome = db.orders().add_item(1, cola.id, server).await.unwrap();
        db.orders().add_item(1, cola.id, server).await.unwrap();

        assert_eq!(db.orders().send_to_kitchen(outcome.order_id).await.unwrap(), 2);
        // Second fire with nothing new: no-op.
        assert_eq!(db.orders().send_to_kitchen(outcome.order_id).await.unwrap(), 0);

        db.orders().add_item(1, cola.id, server).await.unwrap();
        assert_eq!(db.orders().send_to_kitchen(outcome.order_id).await.unwrap(), 1);

        let lines = db.orders().bill_lines(outcome.order_id).await.unwrap();
        assert!(lines.iter().all(|l| l.status == Some(KitchenStatus::Cooking)));
    }

    #[tokio::test]
    async fn test_tickets_show_cooking_orders_with_table_labels() {
        let db = fresh_db().await;
        let server = admin_id(&db).await;
        let cola = menu_item(&db, "Cola").await;
        let pasta = menu_item(&db, "Pasta Carbonara").await;

        let first = db.orders().add_item(1, cola.id, server).await.unwrap();
        let second = db.orders().add_item(2, pasta.id, server).await.unwrap();

        // Unsent orders are not on the display.
        assert!(db.orders().tickets().await.unwrap().is_empty());

        db.orders().send_to_kitchen(first.order_id).await.unwrap();
        db.orders().send_to_kitchen(second.order_id).await.unwrap();

        let tickets = db.orders().tickets().await.unwrap();
        assert_eq!(tickets.len(), 2);
        let labels: Vec<&str> = tickets.iter().map(|t| t.table_label.as_str()).collect();
        assert!(labels.contains(&"T-1"));
        assert!(labels.contains(&"T-2"));

        let lines = db.orders().ticket_lines(second.order_id).await.unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].name, "Pasta Carbonara");
    }

    #[tokio::test]
    async fn test_bump_serves_cooking_lines_and_clears_ticket() {
        let db = fresh_db().await;
        let server = admin_id(&db).await;
        let cola = menu_item(&db, "Cola").await;

        let outcome = db.orders().add_item(1, cola.id, server).await.unwrap();
        db.orders().add_item(1, cola.id, server).await.unwrap();
        db.orders().send_to_kitchen(outcome.order_id).await.unwrap();

        // A third line added after the fire stays unsent through the bump.
        db.orders().add_item(1, cola.id, server).await.unwrap();

        assert_eq!(db.orders().bump(outcome.order_id).await.unwrap(), 2);
        assert!(db.orders().tickets().await.unwrap().is_empty());

        let lines = db.orders().bill_lines(outcome.order_id).await.unwrap();
        let served = lines
            .iter()
            .filter(|l| l.status == Some(KitchenStatus::Served))
            .count();
        let unsent = lines.iter().filter(|l| l.status.is_none()).count();
        assert_eq!(served, 2);
        assert_eq!(unsent, 1);
    }

    #[tokio::test]
    async fn test_checkout_finalizes_order_and_dirties_table() {
        let db = fresh_db().await;
        let server = admin_id(&db).await;
        let cola = menu_item(&db, "Cola").await;

        let outcome = db.orders().add_item(1, cola.id, server).await.unwrap();
        db.orders().add_item(1, cola.id, server).await.unwrap();

        let order = db.orders().checkout(outcome.order_id, 648).await.unwrap();
        assert_eq!(order.status, OrderStatus::Completed);
        assert_eq!(order.total_cents, 648);

        let table = db.floor().get(1).await.unwrap().unwrap();
        assert_eq!(table.status, TableStatus::Dirty);
        assert!(table.current_order_id.is_none());

        // The freed table can be bussed back to service.
        let table = db.floor().clear(1).await.unwrap();
        assert_eq!(table.status, TableStatus::Free);
    }

    #[tokio::test]
    async fn test_checkout_rejects_completed_and_unknown_orders() {
        let db = fresh_db().await;
        let server = admin_id(&db).await;
        let cola = menu_item(&db, "Cola").await;

        let outcome = db.orders().add_item(1, cola.id, server).await.unwrap();
        db.orders().checkout(outcome.order_id, 324).await.unwrap();

        let err = db.orders().checkout(outcome.order_id, 324).await.unwrap_err();
        match err {
            DbError::Domain(CoreError::InvalidOrderStatus {
                order_id,
                current_status,
            }) => {
                assert_eq!(order_id, outcome.order_id);
                assert_eq!(current_status, "Completed");
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = db.orders().checkout(999, 100).await.unwrap_err();
        assert!(matches!(err, DbError::Domain(CoreError::OrderNotFound(999))));
    }

    #[tokio::test]
    async fn test_sales_figures() {
        let db = fresh_db().await;
        let server = admin_id(&db).await;
        let cola = menu_item(&db, "Cola").await;
        let pasta = menu_item(&db, "Pasta Carbonara").await;

        // Completed order: two colas.
        let first = db.orders().add_item(1, cola.id, server).await.unwrap();
        db.orders().add_item(1, cola.id, server).await.unwrap();
        db.orders().checkout(first.order_id, 648).await.unwrap();

        // Open order: one pasta, not yet paid.
        db.orders().add_item(2, pasta.id, server).await.unwrap();

        // Revenue counts Completed orders only; the count counts all.
        assert_eq!(db.orders().revenue().await.unwrap(), 648);
        assert_eq!(db.orders().order_count().await.unwrap(), 2);

        let (name, times) = db.orders().best_seller().await.unwrap().unwrap();
        assert_eq!(name, "Cola");
        assert_eq!(times, 2);
    }

    #[tokio::test]
    async fn test_sales_figures_on_fresh_database() {
        let db = fresh_db().await;

        assert_eq!(db.orders().revenue().await.unwrap(), 0);
        assert_eq!(db.orders().order_count().await.unwrap(), 0);
        assert!(db.orders().best_seller().await.unwrap().is_none());
    }
}
