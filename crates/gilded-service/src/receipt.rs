//! # Receipt File Writing
//!
//! Persists a rendered receipt as a text file next to the till.
//!
//! The receipt itself (line items, tax math, layout) is pure logic in
//! `gilded-core`; this module only puts the bytes on disk. Checkout writes
//! the receipt before finalizing the order and treats a write failure as
//! a warning, not an abort.

use std::fs;
use std::path::{Path, PathBuf};

use gilded_core::Receipt;
use tracing::debug;

/// Writes `receipt` into `dir`, creating the directory if needed.
///
/// ## Returns
/// The full path of the written file, named by
/// [`Receipt::file_name`] (`receipt_<order>_<timestamp>.txt`).
pub fn write_receipt_file(dir: &Path, receipt: &Receipt) -> std::io::Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let path = dir.join(receipt.file_name());
    fs::write(&path, receipt.render())?;
    debug!(path = %path.display(), "Receipt written");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use gilded_core::{Money, ReceiptLine, TaxRate};

    fn sample_receipt() -> Receipt {
        let issued_at = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(19, 42, 7)
            .unwrap();
        Receipt::new(
            12,
            issued_at,
            vec![ReceiptLine::new("Cola", 1, Money::from_cents(300))],
            TaxRate::from_bps(800),
        )
    }

    #[test]
    fn test_writes_rendered_bytes_under_canonical_name() {
        let dir = tempfile::tempdir().unwrap();
        let receipt = sample_receipt();

        let path = write_receipt_file(dir.path(), &receipt).unwrap();

        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "receipt_12_2024-03-15_19-42-07.txt"
        );
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, receipt.render());
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("receipts");

        let path = write_receipt_file(&nested, &sample_receipt()).unwrap();

        assert!(path.starts_with(&nested));
        assert!(path.exists());
    }
}
