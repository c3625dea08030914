//! Section header for one dashboard.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SectionHeaderProps {
    /// Section title
    pub title: String,
}

#[component]
pub fn SectionHeader(props: SectionHeaderProps) -> Element {
    rsx! {
        h2 {
            style: "margin: 0 0 16px 0; font-size: 20px; font-weight: 600; color: #111827;",
            "{props.title}"
        }
    }
}
