//! Sales Data Visualizer
//!
//! One page: a region radio group and a D3.js line chart of sales over time.
//! Picking a region re-filters the table and redraws the chart.
//!
//! Data flow:
//! 1. `build.rs` copies `sales_data.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount: parse the CSV into a `Table` (once; a failure is fatal).
//! 4. On selection change: filter the table, build the chart spec and
//!    re-render via D3.js.

use dioxus::prelude::*;
use sales_chart_ui::components::{Dashboard, CHART_CONTAINER_ID};
use sales_chart_ui::js_bridge;
use sales_chart_ui::state::AppState;
use sales_data::{update_figure, Table};

/// Sales records (date,sales,region) embedded at compile time.
const SALES_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/sales_data.csv"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("sales-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Load the table once on mount ───
    use_effect(move || {
        let result = Table::from_csv_str(SALES_CSV);
        if result.is_ok() {
            js_bridge::init_charts();
        }
        state.finish_load(result);
    });

    // ─── Effect 2: Filter by selection and render the chart ───
    // Re-runs whenever selection, loading or table change.
    use_effect(move || {
        let selection = (state.selection)();
        if (state.loading)() {
            return;
        }

        let table = match &*state.table.read() {
            Some(table) => table.clone(),
            None => return,
        };

        let spec = update_figure(&table, selection);
        log::debug!(
            "chart: {} selected, {} points",
            selection,
            spec.points.len()
        );
        js_bridge::render_line_chart(CHART_CONTAINER_ID, &spec.data_json(), &spec.config_json());
    });

    rsx! { Dashboard {} }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sales_data::{filter_rows, region_breakdown, Region};

    #[test]
    fn embedded_dataset_loads() {
        let table = Table::from_csv_str(SALES_CSV).expect("embedded CSV should parse");
        assert!(!table.is_empty(), "embedded dataset should have rows");
    }

    #[test]
    fn embedded_dataset_covers_named_regions() {
        let table = Table::from_csv_str(SALES_CSV).unwrap();
        for (region, summary) in region_breakdown(&table) {
            assert!(summary.rows > 0, "{} has no rows", region);
        }
    }

    #[test]
    fn every_option_builds_a_chart() {
        let table = Table::from_csv_str(SALES_CSV).unwrap();
        for region in Region::OPTIONS {
            let spec = update_figure(&table, region);
            assert_eq!(spec.title, format!("Sales in {} Region", region.label()));
            assert_eq!(spec.points.len(), filter_rows(&table, region).len());
        }
    }
}
