//! Content root: one titled section per registered dashboard.

use crate::components::{SectionHeader, TableauDashboard};
use crate::registry::DashboardRegistry;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct DashboardContainerProps {
    /// Dashboards to render, in order
    #[props(default = DashboardRegistry::builtin())]
    pub registry: DashboardRegistry,
}

/// Renders every registry entry as a bordered card holding its own
/// `TableauDashboard`. Each entry gets an independent embed lifecycle.
#[component]
pub fn DashboardContainer(props: DashboardContainerProps) -> Element {
    rsx! {
        div {
            style: "padding: 16px;",
            h1 {
                style: "margin: 0 0 24px 0; font-size: 24px; font-weight: 700; color: #111827;",
                "E-commerce Analytics"
            }

            for entry in props.registry.iter() {
                section {
                    key: "{entry.name}",
                    style: "margin-bottom: 32px;",
                    SectionHeader { title: entry.title.clone() }
                    div {
                        style: "border: 1px solid #e5e7eb; border-radius: 8px; box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1); overflow: hidden;",
                        TableauDashboard {
                            url: entry.url.clone(),
                            mount_id: entry.mount_id(),
                        }
                    }
                }
            }
        }
    }
}
