//! Line chart specifications for the sales dashboard.
//!
//! A [`ChartSpec`] is rebuilt from scratch on every selection change and
//! handed to D3.js as two JSON strings: the points and the layout config.

use crate::filter::filter_rows;
use crate::model::{Row, Table};
use crate::region::Region;
use chrono::NaiveDate;
use serde::Serialize;

/// Field plotted on the x axis.
pub const X_FIELD: &str = "date";
/// Field plotted on the y axis.
pub const Y_FIELD: &str = "sales";
pub const X_AXIS_TITLE: &str = "Date";
pub const Y_AXIS_TITLE: &str = "Sales";
/// Stroke colour for the sales line.
pub const LINE_COLOR: &str = "#2196F3";

/// Kind of chart the renderer should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
}

/// A single (date, sales) point on the line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub sales: f64,
}

/// Declarative description of the sales chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub x_field: &'static str,
    pub y_field: &'static str,
    pub title: String,
    pub x_axis_title: &'static str,
    pub y_axis_title: &'static str,
    /// Points in row order; may be empty.
    pub points: Vec<ChartPoint>,
}

impl ChartSpec {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points as a JSON array of `{"date": "YYYY-MM-DD", "sales": n}`.
    pub fn data_json(&self) -> String {
        serde_json::to_string(&self.points).unwrap_or_else(|_| "[]".to_string())
    }

    /// Layout config consumed by `renderSalesLineChart`.
    pub fn config_json(&self) -> String {
        serde_json::json!({
            "kind": self.kind,
            "title": self.title,
            "xField": self.x_field,
            "yField": self.y_field,
            "xAxisLabel": self.x_axis_title,
            "yAxisLabel": self.y_axis_title,
            "color": LINE_COLOR,
        })
        .to_string()
    }
}

/// Chart title for a selection, e.g. "Sales in North Region".
pub fn chart_title(selection: Region) -> String {
    format!("Sales in {} Region", selection.label())
}

/// Build the line chart for already-filtered rows.
///
/// An empty `rows` slice produces a chart with no points but the same title
/// and axis titles.
pub fn build_chart(rows: &[&Row], selection: Region) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Line,
        x_field: X_FIELD,
        y_field: Y_FIELD,
        title: chart_title(selection),
        x_axis_title: X_AXIS_TITLE,
        y_axis_title: Y_AXIS_TITLE,
        points: rows
            .iter()
            .map(|row| ChartPoint {
                date: row.date,
                sales: row.sales,
            })
            .collect(),
    }
}

/// One full update cycle: filter the table by the selection, then build the chart.
pub fn update_figure(table: &Table, selection: Region) -> ChartSpec {
    let rows = filter_rows(table, selection);
    build_chart(&rows, selection)
}
