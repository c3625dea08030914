//! Lifecycle slot binding one visualization to one mount point.
//!
//! States:
//!
//! ```text
//! {empty} --load--> {active} --load--> dispose, create --> {active}
//!                   {active} --unload--> dispose --> {empty}
//! ```
//!
//! The previous handle is always disposed before the next create call.

use crate::provider::{MountPoint, VizHandle, VizOptions, VizProvider};
use dioxus_logger::tracing::{debug, warn};
use std::rc::Rc;

struct ActiveViz {
    url: String,
    handle: Box<dyn VizHandle>,
}

/// Owns at most one live visualization for a mount point.
pub struct EmbedSlot {
    provider: Rc<dyn VizProvider>,
    mount: MountPoint,
    options: VizOptions,
    active: Option<ActiveViz>,
}

impl EmbedSlot {
    pub fn new(provider: Rc<dyn VizProvider>, mount: MountPoint, options: VizOptions) -> Self {
        Self {
            provider,
            mount,
            options,
            active: None,
        }
    }

    /// Dispose the current visualization (if any), then create one for `url`.
    ///
    /// A failed create is logged and leaves the slot empty.
    pub fn load(&mut self, url: &str) {
        self.unload();

        match self.provider.create(&self.mount, url, &self.options) {
            Ok(handle) => {
                debug!("created viz in {} for {}", self.mount, url);
                self.active = Some(ActiveViz {
                    url: url.to_string(),
                    handle,
                });
            }
            Err(e) => {
                warn!("failed to create viz in {} for {}: {:#}", self.mount, url, e);
            }
        }
    }

    /// Dispose the current visualization. No-op when empty.
    pub fn unload(&mut self) {
        if let Some(active) = self.active.take() {
            debug!("disposing viz in {} for {}", self.mount, active.url);
            active.handle.dispose();
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// URL of the live visualization, if there is one.
    pub fn current_url(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.url.as_str())
    }

    pub fn mount(&self) -> &MountPoint {
        &self.mount
    }
}

impl Drop for EmbedSlot {
    fn drop(&mut self) {
        self.unload();
    }
}
