//! The visualization provider seam.
//!
//! A provider turns `(mount point, url, options)` into a live visualization and
//! hands back a handle whose only capability is disposing what it created.
//! The browser build uses [`crate::js_bridge::TableauProvider`]; tests use a
//! recording mock.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed height of every embedded visualization, in CSS pixels.
pub const VIZ_HEIGHT_PX: u32 = 800;

/// Display options passed to the provider on every create call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VizOptions {
    pub hide_tabs: bool,
    pub hide_toolbar: bool,
    pub width: String,
    pub height: String,
}

impl Default for VizOptions {
    fn default() -> Self {
        Self {
            hide_tabs: true,
            hide_toolbar: true,
            width: "100%".to_string(),
            height: format!("{}px", VIZ_HEIGHT_PX),
        }
    }
}

/// DOM id of the element a visualization renders into.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MountPoint(String);

impl MountPoint {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MountPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An instantiated visualization. Consumed by disposal.
pub trait VizHandle {
    /// Release the visualization and any DOM content it created.
    fn dispose(self: Box<Self>);
}

/// Something that can instantiate visualizations into a mount point.
pub trait VizProvider {
    fn create(
        &self,
        mount: &MountPoint,
        url: &str,
        options: &VizOptions,
    ) -> anyhow::Result<Box<dyn VizHandle>>;
}

/// Recording provider used by the lifecycle and component tests.
#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Create {
            id: usize,
            mount: String,
            url: String,
            options: VizOptions,
        },
        Dispose {
            id: usize,
        },
    }

    /// Mock provider that logs every create/dispose in order.
    #[derive(Clone, Default)]
    pub struct RecordingProvider {
        calls: Rc<RefCell<Vec<Call>>>,
        next_id: Rc<RefCell<usize>>,
        fail_next: Rc<RefCell<bool>>,
    }

    impl RecordingProvider {
        pub fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        pub fn creates(&self) -> usize {
            self.calls()
                .iter()
                .filter(|c| matches!(c, Call::Create { .. }))
                .count()
        }

        pub fn disposes(&self) -> usize {
            self.calls()
                .iter()
                .filter(|c| matches!(c, Call::Dispose { .. }))
                .count()
        }

        /// Make the next create call fail, as a missing `tableau` global would.
        pub fn fail_next_create(&self) {
            *self.fail_next.borrow_mut() = true;
        }
    }

    struct RecordingHandle {
        id: usize,
        calls: Rc<RefCell<Vec<Call>>>,
    }

    impl VizHandle for RecordingHandle {
        fn dispose(self: Box<Self>) {
            self.calls.borrow_mut().push(Call::Dispose { id: self.id });
        }
    }

    impl VizProvider for RecordingProvider {
        fn create(
            &self,
            mount: &MountPoint,
            url: &str,
            options: &VizOptions,
        ) -> anyhow::Result<Box<dyn VizHandle>> {
            if self.fail_next.replace(false) {
                anyhow::bail!("tableau is not defined");
            }
            let id = {
                let mut next = self.next_id.borrow_mut();
                *next += 1;
                *next
            };
            self.calls.borrow_mut().push(Call::Create {
                id,
                mount: mount.id().to_string(),
                url: url.to_string(),
                options: options.clone(),
            });
            Ok(Box::new(RecordingHandle {
                id,
                calls: self.calls.clone(),
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = VizOptions::default();
        assert!(opts.hide_tabs);
        assert!(opts.hide_toolbar);
        assert_eq!(opts.width, "100%");
        assert_eq!(opts.height, "800px");
    }

    #[test]
    fn test_options_serialize_camel_case() {
        let json = serde_json::to_value(VizOptions::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "hideTabs": true,
                "hideToolbar": true,
                "width": "100%",
                "height": "800px",
            })
        );
    }

    #[test]
    fn test_mount_point_display() {
        let mount = MountPoint::new("viz-regional");
        assert_eq!(mount.id(), "viz-regional");
        assert_eq!(mount.to_string(), "#viz-regional");
    }
}
