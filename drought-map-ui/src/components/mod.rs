//! Dioxus RSX components for the drought map page.

mod legend;
mod map_container;
mod metadata_banner;
mod page_style;
mod search_box;

pub use legend::Legend;
pub use map_container::MapContainer;
pub use metadata_banner::MetadataBanner;
pub use page_style::PageStyle;
pub use search_box::SearchBox;
