use anyhow::Context;
use sales_data::{region_breakdown, Table};
use sales_utils::dates::format_date;
use std::io::Write;

/// Load `csv_path` and write a per-region table: region, rows, total, first, last.
pub fn run_summary(csv_path: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let table = Table::from_path(csv_path)
        .with_context(|| format!("Failed to load sales data from {}", csv_path))?;

    writeln!(
        out,
        "{:<8} {:>6} {:>14} {:<10} {:<10}",
        "REGION", "ROWS", "TOTAL", "FIRST", "LAST"
    )?;
    for (region, summary) in region_breakdown(&table) {
        let first = summary.earliest.map(|d| format_date(&d)).unwrap_or_else(|| "-".into());
        let last = summary.latest.map(|d| format_date(&d)).unwrap_or_else(|| "-".into());
        writeln!(
            out,
            "{:<8} {:>6} {:>14.2} {:<10} {:<10}",
            region.label(),
            summary.rows,
            summary.total_sales,
            first,
            last
        )?;
    }
    Ok(())
}
