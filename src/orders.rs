//! Order-status lookup table.
//!
//! A small read-only table of orders, loaded once per session from a CSV
//! file with the columns `order_id, customer_name, status, eta`. Lookups
//! are exact but case-insensitive on the order ID. A helper scans free text
//! for something that looks like an order ID ("OD" followed by at least
//! three digits).

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use csv::ReaderBuilder;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{DeskbotError, Result};

/// Pattern for order IDs embedded in free text: "OD" + >=3 digits.
static ORDER_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)OD\d{3,}").expect("order id pattern compiles"));

/// One row of the order table. All fields are plain strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Unique order identifier, matched case-insensitively.
    pub order_id: String,
    /// Customer the order belongs to.
    pub customer_name: String,
    /// Current fulfillment status.
    pub status: String,
    /// Estimated delivery date.
    pub eta: String,
}

/// The in-memory order table for one session.
///
/// # Examples
///
/// ```
/// use deskbot::orders::OrderBook;
///
/// let csv = "order_id,customer_name,status,eta\nOD1001,Jane,Shipped,2025-01-10\n";
/// let book = OrderBook::from_csv_str(csv).unwrap();
///
/// let record = book.lookup("od1001").unwrap();
/// assert_eq!(record.status, "Shipped");
/// assert!(book.lookup("OD10010").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    records: Vec<OrderRecord>,
}

impl OrderBook {
    /// Create an empty order book.
    pub fn new() -> Self {
        OrderBook {
            records: Vec::new(),
        }
    }

    /// Create an order book from records.
    pub fn from_records(records: Vec<OrderRecord>) -> Self {
        OrderBook { records }
    }

    /// Load an order book from a CSV file.
    ///
    /// A missing file is not an error: lookups simply find nothing. A file
    /// that exists but cannot be parsed is an error.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(OrderBook::new());
        }
        let content = fs::read_to_string(path)?;
        Self::from_csv_str(&content)
    }

    /// Parse an order book from CSV text with a header row.
    ///
    /// Quoting and blank lines are handled by the `csv` reader; fields are
    /// trimmed of surrounding whitespace.
    pub fn from_csv_str(csv: &str) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(csv.as_bytes());

        let mut records = Vec::new();
        for result in reader.deserialize() {
            let record: OrderRecord = result
                .map_err(|e| DeskbotError::config(format!("malformed orders row: {e}")))?;
            records.push(record);
        }

        Ok(OrderBook { records })
    }

    /// Look up an order by ID, case-insensitively and exactly.
    pub fn lookup(&self, order_id: &str) -> Option<&OrderRecord> {
        let wanted = order_id.trim().to_uppercase();
        self.records
            .iter()
            .find(|record| record.order_id.to_uppercase() == wanted)
    }

    /// Number of orders in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no orders.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Scan free text for the first token shaped like an order ID.
///
/// Returns the match uppercased, or `None` when the text contains nothing
/// that looks like an order ID.
///
/// # Examples
///
/// ```
/// use deskbot::orders::extract_order_id;
///
/// assert_eq!(extract_order_id("where is od1001 please"), Some("OD1001".to_string()));
/// assert_eq!(extract_order_id("OD12 is too short"), None);
/// assert_eq!(extract_order_id("no id here"), None);
/// ```
pub fn extract_order_id(text: &str) -> Option<String> {
    ORDER_ID_PATTERN
        .find(text)
        .map(|m| m.as_str().to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
order_id,customer_name,status,eta
OD1001,Jane,Shipped,2025-01-10
OD1002,Ravi,Processing,2025-01-14
";

    #[test]
    fn test_lookup_case_insensitive_exact() {
        let book = OrderBook::from_csv_str(SAMPLE).unwrap();
        assert_eq!(book.len(), 2);

        assert_eq!(book.lookup("OD1001").unwrap().status, "Shipped");
        assert_eq!(book.lookup("od1001").unwrap().status, "Shipped");
        assert_eq!(book.lookup("Od1002").unwrap().eta, "2025-01-14");

        // Exact match only: a longer ID with the same prefix is not found.
        assert!(book.lookup("OD10010").is_none());
        assert!(book.lookup("OD9999").is_none());
    }

    #[test]
    fn test_missing_file_yields_empty_book() {
        let book = OrderBook::load_from_file("/nonexistent/orders.csv").unwrap();
        assert!(book.is_empty());
        assert!(book.lookup("OD1001").is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let book = OrderBook::load_from_file(file.path()).unwrap();
        assert_eq!(book.len(), 2);
        assert_eq!(book.lookup("od1002").unwrap().customer_name, "Ravi");
    }

    #[test]
    fn test_quoted_field_with_comma() {
        let csv = "\
order_id,customer_name,status,eta
OD1005,\"Smith, John\",Shipped,2025-02-01
";
        let book = OrderBook::from_csv_str(csv).unwrap();
        assert_eq!(book.len(), 1);

        let record = book.lookup("OD1005").unwrap();
        assert_eq!(record.customer_name, "Smith, John");
        assert_eq!(record.status, "Shipped");
    }

    #[test]
    fn test_blank_lines_around_header() {
        let csv = "\n\norder_id,customer_name,status,eta\n\nOD1001,Jane,Shipped,2025-01-10\n";
        let book = OrderBook::from_csv_str(csv).unwrap();
        assert_eq!(book.len(), 1);
        assert_eq!(book.lookup("OD1001").unwrap().customer_name, "Jane");
    }

    #[test]
    fn test_malformed_row_is_an_error() {
        let csv = "order_id,customer_name,status,eta\nOD1001,Jane,Shipped\n";
        assert!(OrderBook::from_csv_str(csv).is_err());
    }

    #[test]
    fn test_extract_order_id() {
        assert_eq!(
            extract_order_id("where is my order OD1001?"),
            Some("OD1001".to_string())
        );
        assert_eq!(
            extract_order_id("check od20041 and od20042"),
            Some("OD20041".to_string())
        );
        assert_eq!(extract_order_id("OD99"), None);
        assert_eq!(extract_order_id(""), None);
    }
}
