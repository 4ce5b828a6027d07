//! Aggregates over a set of rows, used for the chart caption and the CLI.

use crate::filter::filter_rows;
use crate::model::{Row, Table};
use crate::region::Region;
use chrono::NaiveDate;
use sales_utils::dates::format_span;

/// Row count, total sales and date span of a selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub rows: usize,
    pub total_sales: f64,
    /// Earliest date in the selection, None when empty.
    pub earliest: Option<NaiveDate>,
    /// Latest date in the selection, None when empty.
    pub latest: Option<NaiveDate>,
}

impl Summary {
    pub fn of(rows: &[&Row]) -> Self {
        Self {
            rows: rows.len(),
            total_sales: rows.iter().map(|row| row.sales).sum(),
            earliest: rows.iter().map(|row| row.date).min(),
            latest: rows.iter().map(|row| row.date).max(),
        }
    }

    /// One-line caption, e.g. "2 records, total sales 250.00, 2024-01-01 to 2024-01-02".
    /// The total is printed with two decimals, matching the CLI summary.
    pub fn caption(&self) -> String {
        match (self.earliest, self.latest) {
            (Some(earliest), Some(latest)) => format!(
                "{} record{}, total sales {:.2}, {}",
                self.rows,
                if self.rows == 1 { "" } else { "s" },
                self.total_sales,
                format_span(&earliest, &latest)
            ),
            _ => "No records for this selection".to_string(),
        }
    }
}

/// Summaries for every selector option, in control order.
pub fn region_breakdown(table: &Table) -> Vec<(Region, Summary)> {
    Region::OPTIONS
        .into_iter()
        .map(|region| (region, Summary::of(&filter_rows(table, region))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table {
        Table::from_csv_str(
            "\
date,sales,region
2024-01-03,120,north
2024-01-01,100,north
2024-01-02,150,south
",
        )
        .unwrap()
    }

    #[test]
    fn summary_of_rows() {
        let table = table();
        let summary = Summary::of(&filter_rows(&table, Region::North));
        assert_eq!(summary.rows, 2);
        assert_eq!(summary.total_sales, 220.0);
        assert_eq!(summary.earliest, "2024-01-01".parse::<NaiveDate>().ok());
        assert_eq!(summary.latest, "2024-01-03".parse::<NaiveDate>().ok());
        assert_eq!(
            summary.caption(),
            "2 records, total sales 220.00, 2024-01-01 to 2024-01-03"
        );
    }

    #[test]
    fn single_row_caption() {
        let table = table();
        let summary = Summary::of(&filter_rows(&table, Region::South));
        assert_eq!(summary.caption(), "1 record, total sales 150.00, 2024-01-02");
    }

    #[test]
    fn caption_rounds_fractional_totals() {
        let table = Table::from_csv_str(
            "date,sales,region\n2024-01-01,0.1,north\n2024-01-02,0.2,north\n",
        )
        .unwrap();
        let summary = Summary::of(&filter_rows(&table, Region::North));
        assert_eq!(
            summary.caption(),
            "2 records, total sales 0.30, 2024-01-01 to 2024-01-02"
        );
    }

    #[test]
    fn empty_summary() {
        let summary = Summary::of(&[]);
        assert_eq!(summary.rows, 0);
        assert_eq!(summary.total_sales, 0.0);
        assert!(summary.earliest.is_none());
        assert_eq!(summary.caption(), "No records for this selection");
    }

    #[test]
    fn breakdown_covers_every_option() {
        let breakdown = region_breakdown(&table());
        let regions: Vec<Region> = breakdown.iter().map(|(r, _)| *r).collect();
        assert_eq!(regions, Region::OPTIONS.to_vec());

        let counts: Vec<usize> = breakdown.iter().map(|(_, s)| s.rows).collect();
        assert_eq!(counts, vec![2, 0, 1, 0, 3]);
    }
}
