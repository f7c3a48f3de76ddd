//! Gallery section: owns the viewer state and wires grid, lightbox and focus

use std::sync::atomic::{AtomicU64, Ordering};

use crate::wasm_utils::focus_element_by_id;
use dioxus::prelude::*;
use moe_common::{load_catalog, Catalog, GalleryConfig, TileInput, ViewerController};
use tracing::{debug, warn};

use super::{tile_id, GalleryErrorState, GalleryGrid, Lightbox};

/// Counter for generating unique gallery IDs
static GALLERY_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Gallery backed by the built-in manifest
///
/// Shows the error state if the manifest cannot be parsed.
#[component]
pub fn Gallery(#[props(default)] class: Option<String>) -> Element {
    let loaded = use_hook(|| match load_catalog() {
        Ok(loaded) => Some(loaded),
        Err(e) => {
            warn!("Failed to load gallery catalog: {}", e);
            None
        }
    });

    match loaded {
        Some((catalog, config)) => rsx! {
            GalleryView { catalog, config, class }
        },
        None => rsx! {
            GalleryErrorState { class: class.unwrap_or_default() }
        },
    }
}

/// Gallery over an explicit catalog
///
/// One [`ViewerController`] per instance. Closing the viewer moves focus back
/// to the tile that opened it, after the lightbox has unmounted and released
/// its scroll lock.
#[component]
pub fn GalleryView(
    catalog: Catalog,
    config: GalleryConfig,
    #[props(default)] class: Option<String>,
) -> Element {
    let gallery_id = use_hook(|| {
        let id = GALLERY_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("gallery-{}", id)
    });
    let catalog_len = catalog.len();
    let mut viewer = use_signal(|| ViewerController::new(catalog_len));
    let mut restore_focus = use_signal(|| None::<usize>);

    use_effect({
        let gallery_id = gallery_id.clone();
        move || {
            if viewer.read().is_open() {
                return;
            }
            if let Some(origin) = restore_focus.take() {
                focus_element_by_id(&tile_id(&gallery_id, origin));
            }
        }
    });

    let is_open = viewer.read().is_open();

    rsx! {
        GalleryGrid {
            catalog: catalog.clone(),
            config: config.clone(),
            gallery_id: gallery_id.clone(),
            class,
            on_tile_input: move |(index, input): (usize, TileInput)| {
                if viewer.write().activate(index, input) {
                    debug!("Opened gallery viewer at image {} via {:?}", index, input);
                }
            },
        }

        if is_open {
            Lightbox {
                catalog: catalog.clone(),
                viewer,
                restore_focus,
                gallery_id: gallery_id.clone(),
                preload_neighbors: config.preload_neighbors,
            }
        }
    }
}
