/// Error types for loading and interpreting sales data
use thiserror::Error;

/// Main error type for sales data operations
#[derive(Error, Debug)]
pub enum SalesDataError {
    /// The CSV could not be tokenized or a row could not be deserialized
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The header row lacks one of `date`, `sales`, `region`
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A sales value parsed as NaN or infinity
    #[error("Invalid sales value {value} in record {record}")]
    InvalidSales { record: usize, value: f64 },

    /// The input file could not be opened
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A selection value outside north/east/south/west/all
    #[error("Unknown region: {0} (expected one of north, east, south, west, all)")]
    UnknownRegion(String),
}

/// Type alias for Results using SalesDataError
pub type Result<T> = std::result::Result<T, SalesDataError>;
