//! # gilded-core: Pure Business Logic for the Gilded Fork POS
//!
//! This crate is the **heart** of the Gilded Fork POS. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Gilded Fork Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  UI Shell (external)                            │   │
//! │  │   Floor plan ──► Order pad ──► Kitchen display ──► Admin        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  gilded-service (operations)                    │   │
//! │  │    login, reserve_table, add_item, checkout, bump, ...          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ gilded-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  receipt  │  │ validation│  │   │
//! │  │   │  statuses │  │   Money   │  │  renderer │  │   rules   │  │   │
//! │  │   │  entities │  │  TaxRate  │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  gilded-db (Database Layer)                     │   │
//! │  │            SQLite schema, seed, repositories                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (DiningTable, Order, MenuItem, statuses, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`receipt`] - Fixed-width receipt rendering
//! - [`auth`] - Credential digest
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use gilded_core::money::Money;
//! use gilded_core::types::TaxRate;
//! use gilded_core::TAX_RATE_BPS;
//!
//! // Create money from cents (never from floats!)
//! let subtotal = Money::from_cents(3500); // $35.00
//!
//! // Calculate tax at the house rate
//! let tax = subtotal.calculate_tax(TaxRate::from_bps(TAX_RATE_BPS));
//!
//! // Tax on $35.00 at 8% = $2.80
//! assert_eq!(tax.cents(), 280);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod auth;
pub mod error;
pub mod money;
pub mod receipt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use gilded_core::Money` instead of
// `use gilded_core::money::Money`

pub use auth::password_digest;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use receipt::{Receipt, ReceiptLine};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Name printed at the top of every receipt.
pub const RESTAURANT_NAME: &str = "THE GILDED FORK";

/// The house tax rate in basis points (800 = 8%).
///
/// ## Why a constant?
/// The rate is fixed for this single-location system. There is no
/// per-item or per-category taxation; checkout applies this rate to the
/// whole subtotal.
pub const TAX_RATE_BPS: u32 = 800;

/// Number of tables seeded onto the floor.
pub const TABLE_COUNT: i64 = 20;
