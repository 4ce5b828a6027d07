//! The full page: heading, region selector, chart target and caption.

use crate::components::{
    ChartCaption, ChartContainer, ErrorDisplay, LoadingSpinner, PageHeader, RegionSelector,
};
use crate::state::AppState;
use dioxus::prelude::*;
use sales_data::{filter_rows, Summary};

pub const PAGE_TITLE: &str = "Sales Data Visualizer";

/// DOM id for the D3 chart container div.
pub const CHART_CONTAINER_ID: &str = "sales-line-chart";

/// Page body driven by AppState. The heading is always shown; the loading
/// indicator or the error box replaces the selector and chart.
#[component]
pub fn Dashboard() -> Element {
    let state = use_context::<AppState>();

    let caption = use_memo(move || {
        let selection = (state.selection)();
        match &*state.table.read() {
            Some(table) => Summary::of(&filter_rows(table, selection)).caption(),
            None => String::new(),
        }
    });

    rsx! {
        div {
            class: "container",
            style: "max-width: 900px; margin: 0 auto; padding: 16px; font-family: system-ui, -apple-system, sans-serif;",

            PageHeader { title: PAGE_TITLE.to_string() }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                RegionSelector {}

                ChartContainer {
                    id: CHART_CONTAINER_ID.to_string(),
                    min_height: 420,
                }

                ChartCaption { text: caption() }
            }
        }
    }
}
