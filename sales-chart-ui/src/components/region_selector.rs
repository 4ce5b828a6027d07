//! Radio group for choosing the region.

use crate::state::AppState;
use dioxus::prelude::*;
use sales_data::Region;

/// DOM id of the radio group.
pub const REGION_SELECTOR_ID: &str = "region-selector";

/// Radio input group name shared by the five options.
const RADIO_GROUP: &str = "region";

/// Region radio buttons (North, East, South, West, All).
/// Reads and writes `selection` in AppState; exactly one option is checked.
#[component]
pub fn RegionSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.selection)();
    let options: Vec<(Region, String)> = Region::OPTIONS
        .into_iter()
        .map(|region| (region, region.label()))
        .collect();

    rsx! {
        div {
            id: "{REGION_SELECTOR_ID}",
            class: "radio-buttons",
            style: "margin: 8px 0; display: flex; gap: 16px; align-items: center;",
            for (region, text) in options {
                label {
                    key: "{region}",
                    style: "cursor: pointer;",
                    input {
                        r#type: "radio",
                        name: RADIO_GROUP,
                        value: region.value(),
                        checked: region == selected,
                        onchange: move |_| {
                            log::debug!("region selector: {} selected", region);
                            state.selection.set(region);
                        },
                    }
                    " {text}"
                }
            }
        }
    }
}
