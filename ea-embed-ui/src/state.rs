//! Application state shared via Dioxus context.
//!
//! `AppState` carries the visualization provider. The composition root
//! installs it with `use_context_provider`; embed components retrieve it with
//! `try_use_context::<AppState>()` and fall back to the Tableau provider.

use crate::js_bridge::TableauProvider;
use crate::provider::VizProvider;
use std::rc::Rc;

/// Shared application state for the dashboard page.
#[derive(Clone)]
pub struct AppState {
    /// Provider used to instantiate every embedded visualization
    pub provider: Rc<dyn VizProvider>,
}

impl AppState {
    /// State backed by the global `tableau.Viz` API.
    pub fn new() -> Self {
        Self::with_provider(Rc::new(TableauProvider))
    }

    pub fn with_provider(provider: Rc<dyn VizProvider>) -> Self {
        Self { provider }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
