//! Shared Dioxus components and Tableau embedding bridge for the analytics dashboard.
//!
//! This crate provides:
//! - `provider`: the `VizProvider`/`VizHandle` seam and fixed display options
//! - `embed`: `EmbedSlot`, the create/dispose lifecycle for one mount point
//! - `registry`: the named dashboard registry
//! - `js_bridge`: `wasm-bindgen` bindings to `tableau.Viz`
//! - `state`: `AppState` provided through Dioxus context
//! - `components`: page shell, dashboard container and embed components

pub mod components;
pub mod embed;
pub mod js_bridge;
pub mod provider;
pub mod registry;
pub mod state;
