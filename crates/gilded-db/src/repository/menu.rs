//! # Menu Repository
//!
//! Read access to categories and menu items. The menu is reference data:
//! it is written once by the seed and only read afterwards.

use sqlx::SqlitePool;

use gilded_core::{Category, MenuItem};

use crate::error::DbResult;

/// Repository for menu reads.
#[derive(Debug, Clone)]
pub struct MenuRepository {
    pool: SqlitePool,
}

impl MenuRepository {
    /// Creates a new menu repository.
    pub fn new(pool: SqlitePool) -> Self {
        MenuRepository { pool }
    }

    /// Lists all categories in seed order.
    pub async fn categories(&self) -> DbResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, name FROM categories ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    /// Lists the items in one category.
    pub async fn items_by_category(&self, category_id: i64) -> DbResult<Vec<MenuItem>> {
        let items = sqlx::query_as::<_, MenuItem>(
            r#"
            SELECT id, category_id, name, price_cents, description
            FROM menu_items
            WHERE category_id = ?1
            ORDER BY id
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Fetches one menu item.
    pub async fn get_item(&self, id: i64) -> DbResult<Option<MenuItem>> {
        let item = sqlx::query_as::<_, MenuItem>(
            r#"
            SELECT id, category_id, name, price_cents, description
            FROM menu_items
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
