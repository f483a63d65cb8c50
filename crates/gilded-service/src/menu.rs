//! # Menu Operations
//!
//! Category and menu item browsing for the ordering screen.
//!
//! ## Browse Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Ordering Screen                                   │
//! │                                                                         │
//! │  ┌──────────┬────────┬──────────┬───────────┬─────────┐                │
//! │  │Appetizers│ Mains  │ Desserts │ Beverages │ Alcohol │ ◄─ categories  │
//! │  └──────────┴───┬────┴──────────┴───────────┴─────────┘                │
//! │                 │ click                                                 │
//! │                 ▼                                                       │
//! │  ┌─────────────────────────────────────────────────────┐               │
//! │  │  Ribeye Steak        $32.00                         │               │
//! │  │  Salmon              $24.00   ◄─ items in category  │               │
//! │  │  Pasta Carbonara     $18.00                         │               │
//! │  └─────────────────────────────────────────────────────┘               │
//! │                                                                         │
//! │  The menu is static reference data: seeded once, never edited here.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use gilded_core::{Category, MenuItem};
use gilded_db::Database;

use crate::error::ServiceResult;
use crate::session::SessionState;

/// Category DTO for the tab bar.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
}

impl From<Category> for CategoryDto {
    fn from(c: Category) -> Self {
        CategoryDto {
            id: c.id,
            name: c.name,
        }
    }
}

/// Menu item DTO for the item grid.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MenuItemDto {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    pub price_cents: i64,
    pub description: Option<String>,
}

impl From<MenuItem> for MenuItemDto {
    fn from(m: MenuItem) -> Self {
        MenuItemDto {
            id: m.id,
            category_id: m.category_id,
            name: m.name,
            price_cents: m.price_cents,
            description: m.description,
        }
    }
}

/// Lists all categories in insertion order.
pub async fn list_categories(
    db: &Database,
    sessions: &SessionState,
) -> ServiceResult<Vec<CategoryDto>> {
    sessions.require()?;
    debug!("list_categories");

    let categories = db.menu().categories().await?;
    Ok(categories.into_iter().map(CategoryDto::from).collect())
}

/// Lists the menu items of one category, in insertion order.
///
/// An unknown category is not an error; it simply has no items.
pub async fn list_items(
    db: &Database,
    sessions: &SessionState,
    category_id: i64,
) -> ServiceResult<Vec<MenuItemDto>> {
    sessions.require()?;
    debug!(category_id = %category_id, "list_items");

    let items = db.menu().items_by_category(category_id).await?;
    Ok(items.into_iter().map(MenuItemDto::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{sign_in, SignInRequest};
    use crate::error::ErrorCode;
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

    #[tokio::test]
    async fn test_requires_session() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let sessions = SessionState::new();

        let err = list_categories(&db, &sessions).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }

    #[tokio::test]
    async fn test_categories_in_seed_order() {
        let (db, sessions) = signed_in().await;

        let categories = list_categories(&db, &sessions).await.unwrap();
        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            ["Appetizers", "Mains", "Desserts", "Beverages", "Alcohol"]
        );
    }

    #[tokio::test]
    async fn test_items_for_category() {
        let (db, sessions) = signed_in().await;
        let categories = list_categories(&db, &sessions).await.unwrap();
        let mains = categories.iter().find(|c| c.name == "Mains").unwrap();

        let items = list_items(&db, &sessions, mains.id).await.unwrap();
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Ribeye Steak", "Salmon", "Pasta Carbonara"]);
        assert_eq!(items[0].price_cents, 3200);
        assert!(items.iter().all(|i| i.category_id == mains.id));
    }

    #[tokio::test]
    async fn test_unknown_category_is_empty() {
        let (db, sessions) = signed_in().await;

        let items = list_items(&db, &sessions, 999).await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_dto_serializes_camel_case() {
        let dto = MenuItemDto {
            id: 4,
            category_id: 4,
            name: "Cola".to_string(),
            price_cents: 300,
            description: None,
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["categoryId"], 4);
        assert_eq!(json["priceCents"], 300);
    }
}
