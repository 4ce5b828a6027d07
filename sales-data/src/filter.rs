//! Region filter over the loaded table.

use crate::model::{Row, Table};
use crate::region::Region;

/// Rows whose `region` equals the selection's value, in table order.
///
/// `Region::All` passes every row through unchanged. The comparison is exact,
/// so a CSV label such as "North" does not match the `north` option.
pub fn filter_rows(table: &Table, selection: Region) -> Vec<&Row> {
    match selection {
        Region::All => table.rows().iter().collect(),
        region => table
            .rows()
            .iter()
            .filter(|row| row.region == region.value())
            .collect(),
    }
}
