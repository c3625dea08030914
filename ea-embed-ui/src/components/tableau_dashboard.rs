//! Component that embeds one Tableau visualization.

use crate::components::VizContainer;
use crate::embed::EmbedSlot;
use crate::provider::{MountPoint, VizOptions};
use crate::state::AppState;
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Default DOM id when a page embeds a single visualization.
pub const DEFAULT_MOUNT_ID: &str = "tableau-viz";

#[derive(Props, Clone, PartialEq)]
pub struct TableauDashboardProps {
    /// URL of the published visualization
    pub url: String,
    /// DOM id of the mount point; must be unique on the page.
    ///
    /// Read once when the component mounts. To move a visualization to a new
    /// id, key the component by the id so it remounts.
    #[props(default = DEFAULT_MOUNT_ID.to_string())]
    pub mount_id: String,
}

/// Embeds the visualization at `url` and keeps it in sync with the prop.
///
/// The component owns one `EmbedSlot`. After mount and on every `url` change
/// the slot disposes the previous visualization and creates a new one; on
/// unmount it disposes the last one.
#[component]
pub fn TableauDashboard(props: TableauDashboardProps) -> Element {
    let provider = try_use_context::<AppState>().unwrap_or_default().provider;
    let mount_id = props.mount_id.clone();
    let slot = use_hook(move || {
        Rc::new(RefCell::new(EmbedSlot::new(
            provider,
            MountPoint::new(mount_id),
            VizOptions::default(),
        )))
    });

    // Runs after the mount point is in the DOM, then again whenever `url` changes.
    let url = props.url.clone();
    let effect_slot = slot.clone();
    use_effect(use_reactive!(|url| {
        effect_slot.borrow_mut().load(&url);
    }));

    // The div id always comes from the slot, so it matches what `load` targets.
    let mount_id = slot.borrow().mount().id().to_string();

    use_drop(move || slot.borrow_mut().unload());

    rsx! {
        VizContainer { id: mount_id }
    }
}
