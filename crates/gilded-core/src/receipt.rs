//! # Receipt Rendering
//!
//! Pure rendering of the printed guest receipt. No file I/O here; the
//! service layer writes the rendered text to disk at checkout.
//!
//! ## The Artifact
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  receipt_7_2026-02-14_19-30-05.txt                                      │
//! │                                                                         │
//! │  ====================================                                   │
//! │          THE GILDED FORK                                                │
//! │  ====================================                                   │
//! │  Order ID: 7                                                            │
//! │  Date: 2026-02-14 19:30:05                                              │
//! │  ------------------------------------                                   │
//! │  Item                 Qty   Price                                       │
//! │  ------------------------------------                                   │
//! │  Ribeye Steak         1     $32.00                                      │
//! │  ------------------------------------                                   │
//! │  Subtotal:             $32.00                                           │
//! │  Tax (8%):             $2.56                                            │
//! │  TOTAL:                $34.56                                           │
//! │  ====================================                                   │
//! │        Thank you for dining!                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The format is fixed-width and byte-for-byte stable: existing receipts
//! on disk must remain comparable to new ones. Item names pad to 20
//! columns, quantities to 5, and the three total labels pad to 22 so the
//! amounts line up.

use chrono::NaiveDateTime;

use crate::money::Money;
use crate::types::TaxRate;
use crate::RESTAURANT_NAME;

/// 36-column heavy rule framing the header and footer.
const RULE_HEAVY: &str = "====================================";
/// 36-column light rule separating the listing sections.
const RULE_LIGHT: &str = "------------------------------------";

// =============================================================================
// Receipt Types
// =============================================================================

/// One printed line of the receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptLine {
    /// Menu item name as it appears on the bill.
    pub name: String,
    /// Always 1 per line in practice; printed anyway.
    pub quantity: i64,
    /// Unit price.
    pub price: Money,
}

impl ReceiptLine {
    pub fn new(name: impl Into<String>, quantity: i64, price: Money) -> Self {
        ReceiptLine {
            name: name.into(),
            quantity,
            price,
        }
    }

    /// The amount this line contributes to the subtotal.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

/// A fully computed receipt, ready to render.
///
/// Totals are computed once at construction; rendering and the database
/// write at checkout both read the same figures.
#[derive(Debug, Clone)]
pub struct Receipt {
    pub order_id: i64,
    /// Wall-clock time at checkout (local), printed and embedded in the
    /// file name.
    pub issued_at: NaiveDateTime,
    pub lines: Vec<ReceiptLine>,
    pub tax_rate: TaxRate,
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

impl Receipt {
    /// Builds a receipt, computing subtotal, tax, and total from the lines.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::NaiveDate;
    /// use gilded_core::money::Money;
    /// use gilded_core::receipt::{Receipt, ReceiptLine};
    /// use gilded_core::types::TaxRate;
    ///
    /// let issued = NaiveDate::from_ymd_opt(2026, 2, 14)
    ///     .unwrap()
    ///     .and_hms_opt(19, 30, 5)
    ///     .unwrap();
    /// let lines = vec![
    ///     ReceiptLine::new("Ribeye Steak", 1, Money::from_cents(3200)),
    ///     ReceiptLine::new("Cola", 1, Money::from_cents(300)),
    /// ];
    /// let receipt = Receipt::new(7, issued, lines, TaxRate::from_bps(800));
    ///
    /// assert_eq!(receipt.subtotal.cents(), 3500);
    /// assert_eq!(receipt.tax.cents(), 280);
    /// assert_eq!(receipt.total.cents(), 3780);
    /// ```
    pub fn new(
        order_id: i64,
        issued_at: NaiveDateTime,
        lines: Vec<ReceiptLine>,
        tax_rate: TaxRate,
    ) -> Self {
        let subtotal = lines
            .iter()
            .fold(Money::zero(), |acc, line| acc + line.line_total());
        let tax = subtotal.calculate_tax(tax_rate);
        let total = subtotal + tax;

        Receipt {
            order_id,
            issued_at,
            lines,
            tax_rate,
            subtotal,
            tax,
            total,
        }
    }

    /// The file name the artifact is written under:
    /// `receipt_{orderId}_{yyyy-mm-dd_HH-MM-SS}.txt`.
    pub fn file_name(&self) -> String {
        format!(
            "receipt_{}_{}.txt",
            self.order_id,
            self.issued_at.format("%Y-%m-%d_%H-%M-%S")
        )
    }

    /// Renders the full receipt text, newline-terminated.
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str(RULE_HEAVY);
        out.push('\n');
        out.push_str(&format!("        {RESTAURANT_NAME}\n"));
        out.push_str(RULE_HEAVY);
        out.push('\n');
        out.push_str(&format!("Order ID: {}\n", self.order_id));
        out.push_str(&format!(
            "Date: {}\n",
            self.issued_at.format("%Y-%m-%d %H:%M:%S")
        ));
        out.push_str(RULE_LIGHT);
        out.push('\n');
        out.push_str(&format!("{:<20} {:<5} {}\n", "Item", "Qty", "Price"));
        out.push_str(RULE_LIGHT);
        out.push('\n');

        for line in &self.lines {
            out.push_str(&format!(
                "{:<20} {:<5} {}\n",
                line.name, line.quantity, line.price
            ));
        }

        out.push_str(RULE_LIGHT);
        out.push('\n');
        out.push_str(&format!("{:<22}{}\n", "Subtotal:", self.subtotal));
        out.push_str(&format!(
            "{:<22}{}\n",
            format!("Tax ({}%):", self.tax_rate.percentage()),
            self.tax
        ));
        out.push_str(&format!("{:<22}{}\n", "TOTAL:", self.total));
        out.push_str(RULE_HEAVY);
        out.push('\n');
        out.push_str("      Thank you for dining!\n");

        out
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
