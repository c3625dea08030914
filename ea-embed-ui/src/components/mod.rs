//! Reusable Dioxus RSX components for the dashboard page.

#[cfg(test)]
use dioxus::prelude::{Element, VirtualDom};

mod dashboard_container;
mod page_shell;
mod section_header;
mod tableau_dashboard;
mod viz_container;

pub use dashboard_container::DashboardContainer;
pub use page_shell::{Footer, NavBar, PageShell, APP_TITLE};
pub use section_header::SectionHeader;
pub use tableau_dashboard::{TableauDashboard, DEFAULT_MOUNT_ID};
pub use viz_container::VizContainer;

/// Render a root component to an HTML string.
#[cfg(test)]
pub(crate) fn test_render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus::ssr::render(&dom)
}
