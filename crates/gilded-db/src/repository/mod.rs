//! # Repository Module
//!
//! Database repository implementations for the Gilded Fork POS.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │                                                                         │
//! │  Service operation                                                     │
//! │       │                                                                 │
//! │       │  db.orders().add_item(table_id, item_id, server_id)            │
//! │       │  ↓                                                              │
//! │       ▼                                                                 │
//! │  OrderRepository                                                       │
//! │  ├── add_item(&self, ...)      ← owns its transaction                  │
//! │  ├── bill_lines(&self, ...)                                            │
//! │  ├── send_to_kitchen(&self, ...)                                       │
//! │  └── checkout(&self, ...)      ← owns its transaction                  │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • SQL is isolated in one place                                        │
//! │  • Multi-statement flows commit or roll back as a unit                 │
//! │  • Status guards live next to the writes they protect                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`StaffRepository`] - Credential lookup and staff accounts
//! - [`MenuRepository`] - Category and menu item reads
//! - [`FloorRepository`] - Table state machine transitions
//! - [`OrderRepository`] - Order lifecycle, kitchen flow, sales figures
//! - [`StockRepository`] - Inventory and recipe link reads
//!
//! [`StaffRepository`]: staff::StaffRepository
//! [`MenuRepository`]: menu::MenuRepository
//! [`FloorRepository`]: floor::FloorRepository
//! [`OrderRepository`]: order::OrderRepository
//! [`StockRepository`]: stock::StockRepository

pub mod floor;
pub mod menu;
pub mod order;
pub mod staff;
pub mod stock;
