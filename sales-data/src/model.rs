//! Sales record and table types.
//!
//! `Row` derives `Deserialize` so the loader can read it straight from CSV.

use chrono::NaiveDate;
use serde::Deserialize;
use std::rc::Rc;

/// Columns every sales CSV must provide.
pub const REQUIRED_COLUMNS: [&str; 3] = ["date", "sales", "region"];

/// A single sales record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Row {
    /// Calendar date of the record ("YYYY-MM-DD" in the CSV).
    pub date: NaiveDate,
    /// Sales amount.
    pub sales: f64,
    /// Region label as written in the CSV, e.g. "north".
    pub region: String,
}

impl Row {
    pub fn new(date: NaiveDate, sales: f64, region: impl Into<String>) -> Self {
        Self {
            date,
            sales,
            region: region.into(),
        }
    }
}

/// The loaded dataset.
///
/// Rows keep file order and are never mutated after load. The table is
/// cheaply cloneable (via `Rc`) so Dioxus signals and the CLI can share it.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    rows: Rc<[Row]>,
}

impl Table {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows: rows.into() }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_clone_shares_rows() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let table = Table::new(vec![Row::new(date, 100.0, "north")]);
        let other = table.clone();
        assert!(
            std::ptr::eq(table.rows().as_ptr(), other.rows().as_ptr()),
            "Clone should point at the same rows"
        );
    }

    #[test]
    fn default_table_is_empty() {
        let table = Table::default();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }
}
