use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartCaptionProps {
    pub text: String,
}

/// Small centered line under the chart.
#[component]
pub fn ChartCaption(props: ChartCaptionProps) -> Element {
    rsx! {
        p {
            class: "chart-caption",
            style: "font-size: 12px; color: #888; text-align: center; margin-top: 4px;",
            "{props.text}"
        }
    }
}
