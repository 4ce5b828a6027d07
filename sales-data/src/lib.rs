//! Sales records, region filtering and chart specifications.
//!
//! This crate holds everything the dashboard computes, independent of any UI:
//!
//! - [`Table`] / [`Row`]: the dataset, loaded once from CSV and shared read-only
//! - [`Region`]: the selector's five options (`all` is the default)
//! - [`filter_rows`]: rows matching a selection, in table order
//! - [`build_chart`] / [`update_figure`]: the line chart description for D3.js
//! - [`Summary`]: counts and totals for captions and the CLI
//!
//! # Usage
//!
//! ```rust
//! use sales_data::{filter_rows, update_figure, Region, Table};
//!
//! let table = Table::from_csv_str(
//!     "date,sales,region\n2024-01-01,100,north\n2024-01-02,150,south\n",
//! )
//! .unwrap();
//!
//! let north = filter_rows(&table, Region::North);
//! assert_eq!(north.len(), 1);
//!
//! let spec = update_figure(&table, Region::North);
//! assert_eq!(spec.title, "Sales in North Region");
//! ```

pub mod error;
pub mod figure;
pub mod filter;
mod loader;
pub mod model;
pub mod region;
pub mod summary;

pub use error::{Result, SalesDataError};
pub use figure::{build_chart, update_figure, ChartKind, ChartPoint, ChartSpec};
pub use filter::filter_rows;
pub use model::{Row, Table};
pub use region::Region;
pub use summary::{region_breakdown, Summary};
