//! # Domain Types
//!
//! Core domain types used throughout the Gilded Fork POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   DiningTable   │   │      Order      │   │    OrderLine    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  label "T-5"    │   │  table_id (FK)  │   │  order_id (FK)  │       │
//! │  │  capacity       │   │  server_id (FK) │   │  menu_item_id   │       │
//! │  │  status         │   │  status         │   │  quantity (=1)  │       │
//! │  │  current_order  │   │  total_cents    │   │  kitchen status │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   TableStatus   │   │   OrderStatus   │   │  KitchenStatus  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Free           │   │  Open           │   │  (unset = NULL) │       │
//! │  │  Occupied       │   │  Completed      │   │  Cooking        │       │
//! │  │  Reserved       │   └─────────────────┘   │  Served         │       │
//! │  │  Dirty          │                         └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Status Storage
//! Every status enum is stored in SQLite as its capitalized variant name
//! (`'Free'`, `'Open'`, `'Cooking'`, ...). A line item that has not been
//! sent to the kitchen has no status at all: SQL NULL, `None` here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 800 bps = 8% (the house rate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Staff
// =============================================================================

/// Staff role controlling which operations a session may perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[ts(export)]
pub enum Role {
    /// Full access: floor, orders, kitchen, reports, staff management.
    Manager,
    /// Floor and order operations only.
    Server,
}

impl Role {
    /// Returns the stored string form of the role.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Manager => "Manager",
            Role::Server => "Server",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A staff member who can sign in and serve tables.
///
/// The stored password digest never leaves the database layer; this type
/// carries only what the rest of the system needs.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct StaffUser {
    pub id: i64,
    /// Unique sign-in name.
    pub username: String,
    pub role: Role,
}

// =============================================================================
// Menu
// =============================================================================

/// A menu category (static reference data).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Category {
    pub id: i64,
    /// Unique display name ("Mains", "Beverages", ...).
    pub name: String,
}

/// An item guests can order.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct MenuItem {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    /// Price in cents (smallest currency unit).
    pub price_cents: i64,
    pub description: Option<String>,
}

impl MenuItem {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Table Status
// =============================================================================

/// The floor status of a dining table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[ts(export)]
pub enum TableStatus {
    /// Available for seating or reservation.
    Free,
    /// Has an open order.
    Occupied,
    /// Held for a named guest; label carries the guest name.
    Reserved,
    /// Checked out, awaiting bussing.
    Dirty,
}

impl TableStatus {
    /// Returns the stored string form of the status.
    pub const fn as_str(&self) -> &'static str {
        match self {
            TableStatus::Free => "Free",
            TableStatus::Occupied => "Occupied",
            TableStatus::Reserved => "Reserved",
            TableStatus::Dirty => "Dirty",
        }
    }
}

impl fmt::Display for TableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for TableStatus {
    fn default() -> Self {
        TableStatus::Free
    }
}

// =============================================================================
// Dining Table
// =============================================================================

/// A table on the restaurant floor.
///
/// ## Invariant
/// `current_order_id` is Some iff `status` is Occupied. A table has at
/// most one open order at a time.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct DiningTable {
    pub id: i64,
    /// Canonical form is `T-{id}`; a reservation appends ` ({guest})`.
    pub label: String,
    pub capacity: i64,
    pub status: TableStatus,
    pub current_order_id: Option<i64>,
}

/// Returns the canonical label for a table id (`T-5` for id 5).
///
/// Cancel-reservation and clear-table restore this form.
#[inline]
pub fn canonical_table_label(table_id: i64) -> String {
    format!("T-{table_id}")
}

// =============================================================================
// Order Status
// =============================================================================

/// The lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[ts(export)]
pub enum OrderStatus {
    /// Items are being added; the table holds a reference to it.
    Open,
    /// Checked out and totaled. Terminal.
    Completed,
}

impl OrderStatus {
    /// Returns the stored string form of the status.
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Open => "Open",
            OrderStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Open
    }
}

// =============================================================================
// Order
// =============================================================================

/// A guest check attached to a table.
///
/// Created when the first item is added to an empty table; `total_cents`
/// stays 0 until checkout finalizes it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Order {
    pub id: i64,
    pub table_id: i64,
    /// The staff user who opened the order.
    pub server_id: i64,
    pub status: OrderStatus,
    /// Finalized at checkout; 0 while Open.
    pub total_cents: i64,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Returns the finalized total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Kitchen Status
// =============================================================================

/// The kitchen progress of one line item.
///
/// A line item starts with no status at all (NULL in the database). It is
/// promoted to Cooking by send-to-kitchen and to Served by a kitchen bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[ts(export)]
pub enum KitchenStatus {
    /// On the kitchen display, being prepared.
    Cooking,
    /// Delivered to the table. Terminal.
    Served,
}

impl KitchenStatus {
    /// Returns the stored string form of the status.
    pub const fn as_str(&self) -> &'static str {
        match self {
            KitchenStatus::Cooking => "Cooking",
            KitchenStatus::Served => "Served",
        }
    }
}

impl fmt::Display for KitchenStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Order Line
// =============================================================================

/// One unit of kitchen work: a single-quantity row linking an order to a
/// menu item.
///
/// Repeated orders of the same item produce multiple rows, never a row
/// with quantity 2. `status` is None until the line is sent to the
/// kitchen.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct OrderLine {
    pub id: i64,
    pub order_id: i64,
    pub menu_item_id: i64,
    /// Always 1 per insertion.
    pub quantity: i64,
    pub status: Option<KitchenStatus>,
}

// =============================================================================
// Inventory
// =============================================================================

/// A tracked ingredient stock.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct StockItem {
    pub id: i64,
    pub name: String,
    /// Units on hand; decremented by recipe-linked orders.
    pub quantity: i64,
}

/// Static mapping from a menu item to the stock it consumes per unit sold.
///
/// A menu item with no links consumes no tracked inventory.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct RecipeLink {
    pub menu_item_id: i64,
    pub inventory_id: i64,
    /// Units of stock consumed per unit of the menu item.
    pub amount_needed: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================
