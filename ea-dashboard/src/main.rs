//! E-commerce Analytics dashboard page.
//!
//! Renders the page shell (nav bar, content, footer) around a
//! `DashboardContainer` that embeds one Tableau visualization per configured
//! dashboard.
//!
//! Setup:
//! 1. `Dioxus.toml` adds the Tableau JS API script to the host page, so
//!    `window.tableau` exists before the app mounts.
//! 2. `config/dashboards.json` is embedded at compile time and parsed into the
//!    dashboard registry; a bad config falls back to the built-in registry.
//! 3. `AppState` injects the Tableau provider into every embed component.

use dioxus::prelude::*;
use dioxus_logger::tracing::{error, info, Level};
use ea_embed_ui::components::{DashboardContainer, PageShell};
use ea_embed_ui::js_bridge;
use ea_embed_ui::registry::DashboardRegistry;
use ea_embed_ui::state::AppState;

// Dashboard name -> title/URL mapping, embedded at compile time.
const DASHBOARDS_JSON: &str = include_str!("../config/dashboards.json");

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("Starting E-commerce Analytics dashboard");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(AppState::new);
    let registry = use_hook(|| DashboardRegistry::from_json_or_builtin(DASHBOARDS_JSON));

    use_effect(|| {
        if !js_bridge::tableau_available() {
            error!("Tableau JS API not found on window; dashboards will not render");
        }
    });

    rsx! {
        PageShell {
            DashboardContainer { registry }
        }
    }
}
