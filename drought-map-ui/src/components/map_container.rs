//! Map container component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MapContainerProps {
    /// The DOM id for the map container (Leaflet will render into this)
    pub id: String,
}

/// A full-size div for the Leaflet map.
#[component]
pub fn MapContainer(props: MapContainerProps) -> Element {
    rsx! {
        div {
            id: "{props.id}",
            style: "position: absolute; top: 0; bottom: 0; left: 0; right: 0; background: #1a1a1a;",
        }
    }
}
