//! Mount-point container for an embedded visualization.

use crate::provider::VIZ_HEIGHT_PX;
use dioxus::prelude::*;

/// Props for VizContainer
#[derive(Props, Clone, PartialEq)]
pub struct VizContainerProps {
    /// The DOM id of the mount point (the provider renders into this)
    pub id: String,
    /// Fixed height in pixels
    #[props(default = VIZ_HEIGHT_PX)]
    pub height: u32,
}

/// An empty, fixed-height div reserved for one visualization.
#[component]
pub fn VizContainer(props: VizContainerProps) -> Element {
    let style = format!("width: 100%; height: {}px;", props.height);

    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_render;

    #[test]
    fn test_fixed_height_mount_point() {
        fn app() -> Element {
            rsx! { VizContainer { id: "viz-test".to_string() } }
        }
        let html = test_render(app);
        assert!(html.contains(r#"id="viz-test""#));
        assert!(html.contains("width: 100%; height: 800px;"));
    }
}
