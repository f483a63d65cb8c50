//! # gilded-db: Database Layer for the Gilded Fork POS
//!
//! This crate provides database access for the Gilded Fork POS system.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Gilded Fork Data Flow                               │
//! │                                                                         │
//! │  Service operation (add_item_to_table)                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     gilded-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │    Schema    │  │   │
//! │  │   │   (pool.rs)   │    │ (order.rs...) │    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │    │ FloorRepo     │    │ CREATE TABLE │  │   │
//! │  │   │ Connection    │◄───│ OrderRepo     │    │ IF NOT EXISTS│  │   │
//! │  │   │ Management    │    │ StaffRepo ... │    │ + seed rows  │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │              ./gilded_fork_enterprise.db                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`schema`] - Embedded schema bootstrap and seed data
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (floor, order, etc.)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gilded_db::{Database, DbConfig};
//!
//! // Create database with default config (bootstraps schema + seed)
//! let config = DbConfig::new(gilded_db::DEFAULT_DB_FILE);
//! let db = Database::new(config).await?;
//!
//! // Use repositories
//! let tables = db.floor().list().await?;
//! let outcome = db.orders().add_item(5, ribeye_id, server_id).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod pool;
pub mod repository;
pub mod schema;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::floor::FloorRepository;
pub use repository::menu::MenuRepository;
pub use repository::order::{
    AddItemOutcome, BillLine, KitchenTicket, OrderRepository, TicketLine,
};
pub use repository::staff::StaffRepository;
pub use repository::stock::StockRepository;

// =============================================================================
// Constants
// =============================================================================

/// Default database file, created in the working directory.
pub const DEFAULT_DB_FILE: &str = "gilded_fork_enterprise.db";
