//! # Schema Bootstrap and Seed Data
//!
//! The entire schema is embedded as one idempotent script. There is no
//! migration machinery: every statement is `CREATE TABLE IF NOT EXISTS`,
//! so running the bootstrap against an existing database is a no-op.
//!
//! ## Tables
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Schema Overview                                 │
//! │                                                                         │
//! │  users              staff accounts (username, password digest, role)   │
//! │  categories         menu sections                                      │
//! │  menu_items         orderable items, price in cents                    │
//! │  restaurant_tables  floor state machine (Free/Occupied/Reserved/Dirty) │
//! │  orders             one guest check per seating                        │
//! │  order_details      one row per item ordered (kitchen work unit)       │
//! │  inventory          tracked ingredient stocks                          │
//! │  recipe_links       menu item → stock consumption per unit             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Seed Data
//! Inserted exactly once, guarded by a user-count check: the `admin`
//! account, five categories, twenty tables, five menu items, four stocks
//! and the Ribeye Steak recipe link.

use sqlx::SqlitePool;
use tracing::{debug, info};

use gilded_core::{canonical_table_label, password_digest, Role, TABLE_COUNT};

use crate::error::{DbError, DbResult};

// =============================================================================
// Schema
// =============================================================================

/// The full schema as a single idempotent script.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id              INTEGER PRIMARY KEY,
    username        TEXT NOT NULL UNIQUE,
    password_hash   TEXT NOT NULL,
    role            TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS categories (
    id              INTEGER PRIMARY KEY,
    name            TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS menu_items (
    id              INTEGER PRIMARY KEY,
    category_id     INTEGER NOT NULL,
    name            TEXT NOT NULL,
    price_cents     INTEGER NOT NULL,
    description     TEXT,
    FOREIGN KEY (category_id) REFERENCES categories (id)
);

CREATE TABLE IF NOT EXISTS restaurant_tables (
    id              INTEGER PRIMARY KEY,
    label           TEXT NOT NULL,
    capacity        INTEGER NOT NULL,
    status          TEXT NOT NULL DEFAULT 'Free',
    current_order_id INTEGER
);

CREATE TABLE IF NOT EXISTS orders (
    id              INTEGER PRIMARY KEY,
    table_id        INTEGER NOT NULL,
    server_id       INTEGER NOT NULL,
    created_at      TEXT NOT NULL,
    status          TEXT NOT NULL DEFAULT 'Open',
    total_cents     INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS order_details (
    id              INTEGER PRIMARY KEY,
    order_id        INTEGER NOT NULL,
    menu_item_id    INTEGER NOT NULL,
    quantity        INTEGER NOT NULL,
    status          TEXT,
    FOREIGN KEY (order_id) REFERENCES orders (id),
    FOREIGN KEY (menu_item_id) REFERENCES menu_items (id)
);

CREATE TABLE IF NOT EXISTS inventory (
    id              INTEGER PRIMARY KEY,
    name            TEXT NOT NULL UNIQUE,
    quantity        INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS recipe_links (
    menu_item_id    INTEGER NOT NULL,
    inventory_id    INTEGER NOT NULL,
    amount_needed   INTEGER NOT NULL,
    FOREIGN KEY (menu_item_id) REFERENCES menu_items (id),
    FOREIGN KEY (inventory_id) REFERENCES inventory (id)
);
"#;

// =============================================================================
// Seed Data
// =============================================================================

/// Menu sections, in display order.
const SEED_CATEGORIES: &[&str] = &["Appetizers", "Mains", "Desserts", "Beverages", "Alcohol"];

/// Opening menu: (category, item name, price in cents).
const SEED_MENU_ITEMS: &[(&str, &str, i64)] = &[
    ("Mains", "Ribeye Steak", 3200),
    ("Mains", "Salmon", 2400),
    ("Mains", "Pasta Carbonara", 1800),
    ("Beverages", "Cola", 300),
    ("Alcohol", "House Red", 900),
];

/// Tracked ingredient stocks: (name, units on hand).
const SEED_STOCK: &[(&str, i64)] = &[
    ("Steak Meat", 5),
    ("Salmon Fillet", 10),
    ("Pasta Portion", 20),
    ("Wine Bottle", 10),
];

/// Seating capacity for a table number.
///
/// Tables 1-10 are four-tops, 11-16 are two-tops, 17-20 are six-top booths.
fn table_capacity(table_number: i64) -> i64 {
    if table_number <= 10 {
        4
    } else if table_number <= 16 {
        2
    } else {
        6
    }
}

// =============================================================================
// Operations
// =============================================================================

/// Creates all tables. Safe to call on an existing database.
pub async fn create_all(pool: &SqlitePool) -> DbResult<()> {
    sqlx::raw_sql(SCHEMA)
        .execute(pool)
        .await
        .map_err(|e| DbError::SchemaFailed(e.to_string()))?;

    debug!("Schema statements executed");
    Ok(())
}

/// Checks whether seed data is already present.
///
/// Any row in `users` marks the database as seeded; the seed itself
/// always creates the admin account.
pub async fn is_seeded(pool: &SqlitePool) -> DbResult<bool> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}

/// Inserts the seed data if the database is empty.
///
/// ## Returns
/// * `Ok(true)` - seed rows were inserted
/// * `Ok(false)` - database already seeded, nothing changed
///
/// ## What Gets Seeded
/// - `admin` / digest of `admin` / Manager role
/// - 5 categories, 20 tables, 5 menu items, 4 stocks
/// - one recipe link: Ribeye Steak consumes 1 Steak Meat per order
pub async fn seed(pool: &SqlitePool) -> DbResult<bool> {
    if is_seeded(pool).await? {
        debug!("Seed data already present, skipping");
        return Ok(false);
    }

    let mut tx = pool.begin().await?;

    sqlx::query("INSERT INTO users (username, password_hash, role) VALUES (?1, ?2, ?3)")
        .bind("admin")
        .bind(password_digest("admin"))
        .bind(Role::Manager)
        .execute(&mut *tx)
        .await?;

    for name in SEED_CATEGORIES {
        sqlx::query("INSERT INTO categories (name) VALUES (?1)")
            .bind(name)
            .execute(&mut *tx)
            .await?;
    }

    for table_number in 1..=TABLE_COUNT {
        sqlx::query("INSERT INTO restaurant_tables (label, capacity) VALUES (?1, ?2)")
            .bind(canonical_table_label(table_number))
            .bind(table_capacity(table_number))
            .execute(&mut *tx)
            .await?;
    }

    for (category, name, price_cents) in SEED_MENU_ITEMS {
        let (category_id,): (i64,) = sqlx::query_as("SELECT id FROM categories WHERE name = ?1")
            .bind(category)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("INSERT INTO menu_items (category_id, name, price_cents) VALUES (?1, ?2, ?3)")
            .bind(category_id)
            .bind(name)
            .bind(price_cents)
            .execute(&mut *tx)
            .await?;
    }

    for (name, quantity) in SEED_STOCK {
        sqlx::query("INSERT INTO inventory (name, quantity) VALUES (?1, ?2)")
            .bind(name)
            .bind(quantity)
            .execute(&mut *tx)
            .await?;
    }

    // The steak is the only seeded item whose availability is tracked.
    let (ribeye_id,): (i64,) =
        sqlx::query_as("SELECT id FROM menu_items WHERE name = 'Ribeye Steak'")
            .fetch_one(&mut *tx)
            .await?;
    let (steak_stock_id,): (i64,) = sqlx::query_as("SELECT id FROM inventory WHERE name = 'Steak Meat'")
        .fetch_one(&mut *tx)
        .await?;

    sqlx::query(
        "INSERT INTO recipe_links (menu_item_id, inventory_id, amount_needed) VALUES (?1, ?2, ?3)",
    )
    .bind(ribeye_id)
    .bind(steak_stock_id)
    .bind(1_i64)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    info!("Database seeded");
    Ok(true)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn fresh_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[test]
    fn test_table_capacity_rule() {
        assert_eq!(table_capacity(1), 4);
        assert_eq!(table_capacity(10), 4);
        assert_eq!(table_capacity(11), 2);
        assert_eq!(table_capacity(16), 2);
        assert_eq!(table_capacity(17), 6);
        assert_eq!(table_capacity(20), 6);
    }

    #[tokio::test]
    async fn test_create_all_is_idempotent() {
        let config = DbConfig::in_memory().bootstrap(false);
        let db = Database::new(config).await.unwrap();

        create_all(db.pool()).await.unwrap();
        create_all(db.pool()).await.unwrap();

        assert!(!is_seeded(db.pool()).await.unwrap());
    }

    #[tokio::test]
    async fn test_seed_runs_once() {
        let db = fresh_db().await;

        // Bootstrap already seeded; a second call must change nothing.
        let seeded_again = seed(db.pool()).await.unwrap();
        assert!(!seeded_again);

        let (users,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(users, 1);
    }

    #[tokio::test]
    async fn test_seed_contents() {
        let db = fresh_db().await;

        let count = |sql: &'static str| {
            let pool = db.pool().clone();
            async move {
                let (n,): (i64,) = sqlx::query_as(sql).fetch_one(&pool).await.unwrap();
                n
            }
        };

        assert_eq!(count("SELECT COUNT(*) FROM categories").await, 5);
        assert_eq!(count("SELECT COUNT(*) FROM restaurant_tables").await, 20);
        assert_eq!(count("SELECT COUNT(*) FROM menu_items").await, 5);
        assert_eq!(count("SELECT COUNT(*) FROM inventory").await, 4);
        assert_eq!(count("SELECT COUNT(*) FROM recipe_links").await, 1);

        let (role,): (String,) =
            sqlx::query_as("SELECT role FROM users WHERE username = 'admin'")
                .fetch_one(db.pool())
                .await
                .unwrap();
        assert_eq!(role, "Manager");

        let (price,): (i64,) =
            sqlx::query_as("SELECT price_cents FROM menu_items WHERE name = 'Ribeye Steak'")
                .fetch_one(db.pool())
                .await
                .unwrap();
        assert_eq!(price, 3200);

        // Capacity boundaries: 1-10 four-tops, 11-16 two-tops, 17-20 booths
        let (cap_10,): (i64,) =
            sqlx::query_as("SELECT capacity FROM restaurant_tables WHERE label = 'T-10'")
                .fetch_one(db.pool())
                .await
                .unwrap();
        let (cap_11,): (i64,) =
            sqlx::query_as("SELECT capacity FROM restaurant_tables WHERE label = 'T-11'")
                .fetch_one(db.pool())
                .await
                .unwrap();
        let (cap_17,): (i64,) =
            sqlx::query_as("SELECT capacity FROM restaurant_tables WHERE label = 'T-17'")
                .fetch_one(db.pool())
                .await
                .unwrap();
        assert_eq!(cap_10, 4);
        assert_eq!(cap_11, 2);
        assert_eq!(cap_17, 6);
    }
}
