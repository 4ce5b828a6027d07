//! CSV loading for the sales table.
//!
//! # CSV Format
//!
//! Header row required; `date`, `sales` and `region` must be present, in any
//! order. Other columns are ignored.
//!
//! ```text
//! date,sales,region
//! 2024-01-01,100,north
//! 2024-01-02,150,south
//! ```

use crate::error::{Result, SalesDataError};
use crate::model::{Row, Table, REQUIRED_COLUMNS};
use std::fs::File;
use std::io;
use std::path::Path;

impl Table {
    /// Load a table from CSV text (typically embedded with `include_str!`).
    pub fn from_csv_str(csv_data: &str) -> Result<Self> {
        Self::from_reader(csv_data.as_bytes())
    }

    /// Load a table from a CSV file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SalesDataError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_reader(file)
    }

    /// Load a table from any CSV byte stream.
    ///
    /// Fails on a missing required column, on the first row whose date or
    /// sales value does not parse, or on a non-finite sales value (`NaN`,
    /// `inf`). Nothing is skipped silently.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(SalesDataError::MissingColumn(column.to_string()));
            }
        }

        let rows = rdr
            .deserialize::<Row>()
            .collect::<std::result::Result<Vec<_>, _>>()?;

        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| !row.sales.is_finite())
        {
            return Err(SalesDataError::InvalidSales {
                record: index + 1,
                value: row.sales,
            });
        }

        log::info!("loader: loaded {} sales rows", rows.len());
        Ok(Table::new(rows))
    }
}
