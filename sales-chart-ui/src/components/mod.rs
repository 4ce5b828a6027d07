//! Reusable Dioxus RSX components for the sales dashboard.

mod chart_caption;
mod chart_container;
mod dashboard;
mod error_display;
mod loading_spinner;
mod page_header;
mod region_selector;

pub use chart_caption::ChartCaption;
pub use chart_container::ChartContainer;
pub use dashboard::{Dashboard, CHART_CONTAINER_ID, PAGE_TITLE};
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use page_header::PageHeader;
pub use region_selector::{RegionSelector, REGION_SELECTOR_ID};
