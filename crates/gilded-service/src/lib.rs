//! # Gilded Service Library
//!
//! Operation layer for the Gilded Fork POS. The UI shell calls these
//! functions; nothing here renders anything.
//!
//! ## Module Organization
//! ```text
//! gilded_service/
//! ├── lib.rs          ◄─── You are here (exports & tracing init)
//! ├── session.rs      ◄─── Who is signed in (Arc<Mutex<Option<Session>>>)
//! ├── auth.rs         ◄─── Sign-in, sign-out, staff account creation
//! ├── menu.rs         ◄─── Category and menu item browsing
//! ├── floor.rs        ◄─── Table map, reservations, bussing
//! ├── orders.rs       ◄─── Ordering, firing to kitchen, checkout
//! ├── kitchen.rs      ◄─── Kitchen display and ticket bumping
//! ├── reports.rs      ◄─── Manager sales summary
//! ├── receipt.rs      ◄─── Receipt file writing
//! └── error.rs        ◄─── Service error type for the shell
//! ```
//!
//! ## Calling Convention
//! Every operation is a plain async function taking the shared state it
//! needs, so any shell (desktop window, terminal, test harness) can drive
//! it the same way:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Service Call Shape                                 │
//! │                                                                         │
//! │  operation(&Database, &SessionState, Request) -> ServiceResult<Dto>    │
//! │                                                                         │
//! │  1. Guard the session  (require / require_manager)                     │
//! │  2. Validate the request                                               │
//! │  3. Delegate to a gilded-db repository                                 │
//! │  4. Map rows into camelCase DTOs                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod auth;
pub mod error;
pub mod floor;
pub mod kitchen;
pub mod menu;
pub mod orders;
pub mod receipt;
pub mod reports;
pub mod session;

use tracing::Level;
use tracing_subscriber::EnvFilter;

pub use error::{ErrorCode, ServiceError, ServiceResult};
pub use session::{Session, SessionState};

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=gilded=trace` - Show trace for gilded crates only
/// - Default: INFO level
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,gilded=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}
