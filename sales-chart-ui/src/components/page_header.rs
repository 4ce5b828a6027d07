//! Page heading.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PageHeaderProps {
    /// Heading text
    pub title: String,
}

/// `h1.header` at the top of the page.
#[component]
pub fn PageHeader(props: PageHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 12px;",
            h1 {
                class: "header",
                style: "margin: 0 0 4px 0; font-size: 24px;",
                "{props.title}"
            }
        }
    }
}
