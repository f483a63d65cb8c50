//! # Order Operations
//!
//! Everything a server does at a seated table: ordering items, firing
//! them to the kitchen, and settling the bill.
//!
//! ## Table Service Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       One Table, Start to Finish                        │
//! │                                                                         │
//! │  add_item_to_table(T-3, Ribeye)                                         │
//! │       │  opens the order on first item, table becomes Occupied          │
//! │       ▼                                                                 │
//! │  add_item_to_table(T-3, Cola)        (one row per tap, quantity 1)      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  fire_order(T-3)                     unsent lines → Cooking             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  table_bill(T-3)                     lines + subtotal/tax/total         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  checkout(T-3, receipts_dir)                                            │
//! │       ├── order → Completed, total frozen on the row                    │
//! │       ├── table → Dirty, order reference cleared                        │
//! │       └── receipt_<order>_<timestamp>.txt written (best effort)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ordering deducts recipe-linked stock immediately, inside the same
//! transaction that writes the line. There is no reservation step to
//! release later: a rejected add leaves nothing behind.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use ts_rs::TS;

use gilded_core::{
    CoreError, KitchenStatus, Money, Receipt, ReceiptLine, TaxRate, TAX_RATE_BPS,
};
use gilded_db::{BillLine, Database};

use crate::error::ServiceResult;
use crate::receipt::write_receipt_file;
use crate::session::SessionState;

/// Request to put one menu item on a table's order.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AddItemRequest {
    pub table_id: i64,
    pub menu_item_id: i64,
}

/// Result of adding an item.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AddItemResponse {
    pub order_id: i64,
    pub line_id: i64,
    /// True when this add opened the order (first item at the table)
    pub opened_order: bool,
}

/// One line on a table's bill.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BillLineDto {
    pub line_id: i64,
    pub name: String,
    pub price_cents: i64,
    /// `None` until the line is fired to the kitchen
    pub status: Option<KitchenStatus>,
}

impl From<BillLine> for BillLineDto {
    fn from(l: BillLine) -> Self {
        BillLineDto {
            line_id: l.line_id,
            name: l.name,
            price_cents: l.price_cents,
            status: l.status,
        }
    }
}

/// A table's running bill, totals included.
///
/// Doubles as the checkout confirmation figures: the totals here are
/// computed with the same money math the receipt uses, so the preview
/// always matches what gets charged.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BillResponse {
    pub order_id: i64,
    pub table_id: i64,
    pub table_label: String,
    pub lines: Vec<BillLineDto>,
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
}

/// Result of firing a table's order to the kitchen.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FireResponse {
    pub order_id: i64,
    /// How many lines went from unsent to Cooking (0 is a valid no-op)
    pub sent_count: u64,
}

/// Result of settling a table's bill.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CheckoutResponse {
    pub order_id: i64,
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
    /// Where the receipt file landed; `None` if writing failed
    pub receipt_path: Option<String>,
}

/// Puts one menu item on a table's order, opening the order if the
/// table does not have one yet.
///
/// Each call inserts one quantity-1 line; tapping an item three times
/// produces three lines. Recipe-linked stock is checked and deducted in
/// the same transaction, so a shortage rejects the add without leaving
/// a partial order behind.
///
/// ## Errors
/// - `NOT_FOUND` for an unknown table or menu item
/// - `BUSINESS_LOGIC` when the table is `Dirty` (bus it first)
/// - `INSUFFICIENT_STOCK` when a linked stock runs short
pub async fn add_item_to_table(
    db: &Database,
    sessions: &SessionState,
    request: AddItemRequest,
) -> ServiceResult<AddItemResponse> {
    let session = sessions.require()?;
    debug!(
        table_id = %request.table_id,
        menu_item_id = %request.menu_item_id,
        "add_item_to_table"
    );

    let outcome = db
        .orders()
        .add_item(request.table_id, request.menu_item_id, session.user_id)
        .await?;

    info!(
        order_id = %outcome.order_id,
        line_id = %outcome.line_id,
        opened = %outcome.opened_order,
        "Item added to order"
    );

    Ok(AddItemResponse {
        order_id: outcome.order_id,
        line_id: outcome.line_id,
        opened_order: outcome.opened_order,
    })
}

/// Returns the running bill for a table, or `None` when the table has
/// no open order.
pub async fn table_bill(
    db: &Database,
    sessions: &SessionState,
    table_id: i64,
) -> ServiceResult<Option<BillResponse>> {
    sessions.require()?;
    debug!(table_id = %table_id, "table_bill");

    let table = db
        .floor()
        .get(table_id)
        .await?
        .ok_or(CoreError::TableNotFound(table_id))?;

    let Some(order_id) = table.current_order_id else {
        return Ok(None);
    };

    let lines = db.orders().bill_lines(order_id).await?;
    let (subtotal_cents, tax_cents, total_cents) = bill_totals(&lines);

    Ok(Some(BillResponse {
        order_id,
        table_id: table.id,
        table_label: table.label,
        lines: lines.into_iter().map(BillLineDto::from).collect(),
        subtotal_cents,
        tax_cents,
        total_cents,
    }))
}

/// Fires a table's unsent lines to the kitchen.
///
/// Lines already Cooking or Served are untouched; firing twice in a row
/// sends nothing the second time. Returns `None` when the table has no
/// open order.
pub async fn fire_order(
    db: &Database,
    sessions: &SessionState,
    table_id: i64,
) -> ServiceResult<Option<FireResponse>> {
    sessions.require()?;
    debug!(table_id = %table_id, "fire_order");

    let table = db
        .floor()
        .get(table_id)
        .await?
        .ok_or(CoreError::TableNotFound(table_id))?;

    let Some(order_id) = table.current_order_id else {
        return Ok(None);
    };

    let sent_count = db.orders().send_to_kitchen(order_id).await?;
    info!(order_id = %order_id, sent = %sent_count, "Order fired to kitchen");

    Ok(Some(FireResponse {
        order_id,
        sent_count,
    }))
}

/// Settles a table's bill.
///
/// Writes the receipt file into `receipt_dir`, then completes the order
/// at the receipt total and marks the table `Dirty`. A receipt write
/// failure only logs a warning and returns `receipt_path: None`; the
/// checkout still goes through.
///
/// Returns `None` when the table has no open order.
pub async fn checkout(
    db: &Database,
    sessions: &SessionState,
    table_id: i64,
    receipt_dir: &Path,
) -> ServiceResult<Option<CheckoutResponse>> {
    sessions.require()?;
    debug!(table_id = %table_id, "checkout");

    let table = db
        .floor()
        .get(table_id)
        .await?
        .ok_or(CoreError::TableNotFound(table_id))?;

    let Some(order_id) = table.current_order_id else {
        debug!(table_id = %table_id, "Checkout on a table with no open order");
        return Ok(None);
    };

    let lines = db.orders().bill_lines(order_id).await?;
    let receipt_lines = lines
        .iter()
        .map(|l| ReceiptLine::new(l.name.clone(), 1, Money::from_cents(l.price_cents)))
        .collect();
    let receipt = Receipt::new(
        order_id,
        chrono::Local::now().naive_local(),
        receipt_lines,
        TaxRate::from_bps(TAX_RATE_BPS),
    );

    // Receipt goes out before the row flips Completed; a failed write is
    // a warning, not an abort.
    let receipt_path = match write_receipt_file(receipt_dir, &receipt) {
        Ok(path) => Some(path.display().to_string()),
        Err(e) => {
            warn!(order_id = %order_id, error = %e, "Receipt file write failed");
            None
        }
    };

    db.orders().checkout(order_id, receipt.total.cents()).await?;

    info!(
        order_id = %order_id,
        table_id = %table_id,
        total = %receipt.total.cents(),
        "Order checked out"
    );

    Ok(Some(CheckoutResponse {
        order_id,
        subtotal_cents: receipt.subtotal.cents(),
        tax_cents: receipt.tax.cents(),
        total_cents: receipt.total.cents(),
        receipt_path,
    }))
}

/// Subtotal, tax, and total for a set of bill lines.
///
/// Same math as the receipt: tax on the subtotal, rounded half-up.
fn bill_totals(lines: &[BillLine]) -> (i64, i64, i64) {
    let subtotal: i64 = lines.iter().map(|l| l.price_cents).sum();
    let tax = Money::from_cents(subtotal)
        .calculate_tax(TaxRate::from_bps(TAX_RATE_BPS))
        .cents();
    (subtotal, tax, subtotal + tax)
}
