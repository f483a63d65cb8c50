//! # Stock Repository
//!
//! Inventory reads plus the recipe-link availability helpers used inside
//! the order transaction.
//!
//! ## Recipe Links
//! A menu item consumes tracked stock only if a `recipe_links` row says
//! so. An item with no links is always available. A link pointing at a
//! missing stock row counts as zero on hand, which reads as insufficient.

use sqlx::{SqliteConnection, SqlitePool};

use gilded_core::{CoreError, MenuItem, RecipeLink, StockItem};

use crate::error::DbResult;

/// Repository for inventory reads.
#[derive(Debug, Clone)]
pub struct StockRepository {
    pool: SqlitePool,
}

impl StockRepository {
    /// Creates a new stock repository.
    pub fn new(pool: SqlitePool) -> Self {
        StockRepository { pool }
    }

    /// Lists all tracked stocks.
    pub async fn list(&self) -> DbResult<Vec<StockItem>> {
        let stocks = sqlx::query_as::<_, StockItem>(
            "SELECT id, name, quantity FROM inventory ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(stocks)
    }

    /// Fetches one stock.
    pub async fn get(&self, stock_id: i64) -> DbResult<Option<StockItem>> {
        let stock = sqlx::query_as::<_, StockItem>(
            "SELECT id, name, quantity FROM inventory WHERE id = ?1",
        )
        .bind(stock_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(stock)
    }

    /// Lists the recipe links for a menu item.
    pub async fn links_for_item(&self, menu_item_id: i64) -> DbResult<Vec<RecipeLink>> {
        let links = sqlx::query_as::<_, RecipeLink>(
            r#"
            SELECT menu_item_id, inventory_id, amount_needed
            FROM recipe_links
            WHERE menu_item_id = ?1
            "#,
        )
        .bind(menu_item_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(links)
    }
}

// =============================================================================
// Transaction Helpers
// =============================================================================

/// Verifies every recipe link of `item` can be satisfied.
///
/// Runs on the caller's connection so the check holds inside the order
/// transaction. The LEFT JOIN makes a dangling link read as zero on hand.
///
/// ## Returns
/// * `Ok(())` - All links satisfied (vacuously true with no links)
/// * `Err(Domain(InsufficientStock))` - First shortfall found
pub(crate) async fn check_for_item(
    conn: &mut SqliteConnection,
    item: &MenuItem,
) -> DbResult<()> {
    let links = sqlx::query_as::<_, (i64, i64, Option<String>, Option<i64>)>(
        r#"
        SELECT rl.inventory_id, rl.amount_needed, inv.name, inv.quantity
        FROM recipe_links rl
        LEFT JOIN inventory inv ON inv.id = rl.inventory_id
        WHERE rl.menu_item_id = ?1
        "#,
    )
    .bind(item.id)
    .fetch_all(&mut *conn)
    .await?;

    for (inventory_id, amount_needed, stock_name, quantity) in links {
        let available = quantity.unwrap_or(0);
        if available < amount_needed {
            return Err(CoreError::InsufficientStock {
                item: item.name.clone(),
                stock: stock_name.unwrap_or_else(|| format!("stock #{inventory_id}")),
                available,
                required: amount_needed,
            }
            .into());
        }
    }

    Ok(())
}

/// Deducts one unit's worth of stock for `menu_item_id`, link by link.
///
/// Call only after [`check_for_item`] passed on the same connection.
pub(crate) async fn deduct_for_item(
    conn: &mut SqliteConnection,
    menu_item_id: i64,
) -> DbResult<()> {
    let links = sqlx::query_as::<_, (i64, i64)>(
        "SELECT inventory_id, amount_needed FROM recipe_links WHERE menu_item_id = ?1",
    )
    .bind(menu_item_id)
    .fetch_all(&mut *conn)
    .await?;

    for (inventory_id, amount_needed) in links {
        sqlx::query("UPDATE inventory SET quantity = quantity - ?1 WHERE id = ?2")
            .bind(amount_needed)
            .bind(inventory_id)
            .execute(&mut *conn)
            .await?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};

    async fn fresh_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
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
    async fn test_list_seeded_stock() {
        let db = fresh_db().await;

        let stocks = db.stock().list().await.unwrap();
        assert_eq!(stocks.len(), 4);
        assert_eq!(stocks[0].name, "Steak Meat");
        assert_eq!(stocks[0].quantity, 5);
    }

    #[tokio::test]
    async fn test_links_for_item() {
        let db = fresh_db().await;

        let ribeye = menu_item(&db, "Ribeye Steak").await;
        let links = db.stock().links_for_item(ribeye.id).await.unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].amount_needed, 1);

        let cola = menu_item(&db, "Cola").await;
        assert!(db.stock().links_for_item(cola.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_check_passes_without_links() {
        let db = fresh_db().await;
        let cola = menu_item(&db, "Cola").await;

        let mut conn = db.pool().acquire().await.unwrap();
        check_for_item(&mut conn, &cola).await.unwrap();
    }

    #[tokio::test]
    async fn test_check_fails_when_stock_short() {
        let db = fresh_db().await;
        let ribeye = menu_item(&db, "Ribeye Steak").await;

        sqlx::query("UPDATE inventory SET quantity = 0 WHERE name = 'Steak Meat'")
            .execute(db.pool())
            .await
            .unwrap();

        let mut conn = db.pool().acquire().await.unwrap();
        let err = check_for_item(&mut conn, &ribeye).await.unwrap_err();

        match err {
            DbError::Domain(CoreError::InsufficientStock {
                item,
                stock,
                available,
                required,
            }) => {
                assert_eq!(item, "Ribeye Steak");
                assert_eq!(stock, "Steak Meat");
                assert_eq!(available, 0);
                assert_eq!(required, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_deduct_decrements_linked_stock() {
        let db = fresh_db().await;
        let ribeye = menu_item(&db, "Ribeye Steak").await;

        let mut conn = db.pool().acquire().await.unwrap();
        deduct_for_item(&mut conn, ribeye.id).await.unwrap();
        drop(conn);

        let stocks = db.stock().list().await.unwrap();
        let steak = stocks.iter().find(|s| s.name == "Steak Meat").unwrap();
        assert_eq!(steak.quantity, 4);
    }
}
