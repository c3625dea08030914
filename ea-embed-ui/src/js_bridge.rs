//! Typed bindings to the Tableau JavaScript API.
//!
//! The host page loads `tableau-2.min.js` before the app starts, which exposes
//! the `tableau.Viz` constructor as a global. Calls are imported with
//! `catch` so a missing global or a throwing constructor surfaces as an
//! `Err` instead of aborting the wasm instance.

use crate::provider::{MountPoint, VizHandle, VizOptions, VizProvider};
use anyhow::{anyhow, Context};
use dioxus_logger::tracing::warn;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// A live `tableau.Viz` instance.
    #[wasm_bindgen(js_namespace = tableau, js_name = Viz)]
    type TableauViz;

    #[wasm_bindgen(constructor, catch, js_namespace = tableau, js_class = "Viz")]
    fn new(
        parent: &web_sys::Element,
        url: &str,
        options: &JsValue,
    ) -> Result<TableauViz, JsValue>;

    #[wasm_bindgen(method, catch, js_class = "Viz")]
    fn dispose(this: &TableauViz) -> Result<(), JsValue>;
}

/// Render a JS exception as a string for logging.
fn js_error(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            js_sys::JSON::stringify(err)
                .ok()
                .and_then(|s| s.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", err))
}

/// Whether the Tableau API has been loaded into the page.
pub fn tableau_available() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("tableau")).unwrap_or(false)
}

/// Provider backed by the global `tableau.Viz` constructor.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableauProvider;

impl VizProvider for TableauProvider {
    fn create(
        &self,
        mount: &MountPoint,
        url: &str,
        options: &VizOptions,
    ) -> anyhow::Result<Box<dyn VizHandle>> {
        if !tableau_available() {
            return Err(anyhow!("Tableau JS API is not loaded (window.tableau is undefined)"));
        }

        let document = web_sys::window()
            .and_then(|w| w.document())
            .context("No browser document available")?;
        let parent = document
            .get_element_by_id(mount.id())
            .with_context(|| format!("Mount point {} not found", mount))?;

        let js_options = serde_wasm_bindgen::to_value(options)
            .map_err(|e| anyhow!("Failed to convert viz options: {}", e))?;

        let viz = TableauViz::new(&parent, url, &js_options)
            .map_err(|e| anyhow!("tableau.Viz failed: {}", js_error(&e)))?;

        Ok(Box::new(TableauHandle { viz }))
    }
}

struct TableauHandle {
    viz: TableauViz,
}

impl VizHandle for TableauHandle {
    fn dispose(self: Box<Self>) {
        if let Err(e) = self.viz.dispose() {
            warn!("tableau.Viz.dispose failed: {}", js_error(&e));
        }
    }
}
