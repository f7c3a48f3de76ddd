//! Photo gallery: tile grid plus full-screen lightbox

mod grid;
mod lightbox;
mod view;

pub use grid::{GalleryEmptyState, GalleryErrorState, GalleryGrid, ImageTile};
pub use lightbox::Lightbox;
pub use view::{Gallery, GalleryView};

use moe_common::OverlayControl;

/// DOM id of a grid tile
pub fn tile_id(gallery_id: &str, index: usize) -> String {
    format!("{gallery_id}-tile-{index}")
}

/// DOM id of a lightbox control
pub fn control_id(gallery_id: &str, control: OverlayControl) -> String {
    format!("{gallery_id}-{}", control.id_suffix())
}

/// DOM id of the lightbox dialog element
pub fn viewer_id(gallery_id: &str) -> String {
    format!("{gallery_id}-viewer")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_scoped_to_gallery() {
        assert_eq!(tile_id("gallery-0", 4), "gallery-0-tile-4");
        assert_eq!(control_id("gallery-0", OverlayControl::Close), "gallery-0-close");
        assert_eq!(control_id("gallery-2", OverlayControl::Next), "gallery-2-next");
        assert_eq!(viewer_id("gallery-1"), "gallery-1-viewer");
        assert_ne!(tile_id("gallery-0", 1), tile_id("gallery-1", 1));
    }
}
