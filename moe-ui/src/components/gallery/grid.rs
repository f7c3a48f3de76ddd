//! Gallery grid - pure view with callbacks

use crate::components::icons::{AlertTriangleIcon, ImageIcon, ZoomInIcon};
use moe_common::{Catalog, GalleryConfig, ImageDescriptor, TileInput};
use dioxus::prelude::*;

use super::tile_id;

/// Grid of gallery tiles
///
/// Renders the empty state instead of a grid when the catalog has no images,
/// so no tile exists to open a viewer from.
#[component]
pub fn GalleryGrid(
    catalog: Catalog,
    config: GalleryConfig,
    gallery_id: String,
    /// Called with the tile index and the input that reached it
    on_tile_input: EventHandler<(usize, TileInput)>,
    #[props(default)] class: Option<String>,
) -> Element {
    let extra_class = class.unwrap_or_default();

    if catalog.is_empty() {
        return rsx! {
            GalleryEmptyState { class: extra_class }
        };
    }

    let grid_classes = config.columns.grid_classes();
    let total = catalog.len();

    rsx! {
        div { class: "{extra_class}",
            if config.show_image_count {
                p { class: "text-center text-gray-500 text-sm mb-6",
                    if total == 1 {
                        "1 photo"
                    } else {
                        "{total} photos"
                    }
                }
            }
            div { class: "grid {grid_classes} gap-6",
                for image in catalog.iter() {
                    ImageTile {
                        key: "{image.ordinal_index}",
                        image: image.clone(),
                        tile_id: tile_id(&gallery_id, image.ordinal_index),
                        aspect_ratio: config.aspect_ratio.clone(),
                        lazy: config.lazy_loading,
                        on_input: on_tile_input,
                    }
                }
            }
        }
    }
}

/// One focusable gallery tile
///
/// Click and Enter/Space both emit through `on_input`; the caller decides
/// what activation does.
#[component]
pub fn ImageTile(
    image: ImageDescriptor,
    tile_id: String,
    aspect_ratio: String,
    lazy: bool,
    on_input: EventHandler<(usize, TileInput)>,
) -> Element {
    let index = image.ordinal_index;
    let mut failed = use_signal(|| false);

    rsx! {
        div {
            id: "{tile_id}",
            class: "relative group overflow-hidden rounded-2xl {aspect_ratio} bg-gradient-to-br from-pink-200 to-purple-200 cursor-pointer select-none focus:outline-none focus-visible:ring-2 focus-visible:ring-pink-500 focus-visible:ring-offset-2",
            role: "button",
            tabindex: "0",
            "aria-label": "View larger version of {image.alt_text}",
            "data-testid": "gallery-tile",
            onclick: move |evt| {
                evt.prevent_default();
                evt.stop_propagation();
                on_input.call((index, TileInput::Pointer));
            },
            onkeydown: move |evt| {
                let input = TileInput::from_key(&evt.key().to_string());
                if input.activates() {
                    evt.prevent_default();
                    evt.stop_propagation();
                    on_input.call((index, input));
                }
            },
            if failed() {
                div { class: "w-full h-full flex items-center justify-center",
                    ImageIcon { class: "w-12 h-12 text-pink-400" }
                }
            } else {
                img {
                    src: "{image.path}",
                    alt: "{image.alt_text}",
                    class: "w-full h-full object-cover pointer-events-none transition-transform duration-300 group-hover:scale-110",
                    loading: if lazy { "lazy" } else { "eager" },
                    draggable: "false",
                    onerror: move |_| failed.set(true),
                }
            }

            // Hover overlay
            div { class: "absolute inset-0 bg-gradient-to-t from-black/50 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300",
                div { class: "absolute bottom-4 left-4 text-white",
                    h4 { class: "font-semibold text-sm", "Event Photo" }
                    p { class: "text-xs opacity-90", "Click to view larger" }
                }
                div { class: "absolute top-4 right-4 text-white opacity-80",
                    ZoomInIcon { class: "w-6 h-6" }
                }
            }
        }
    }
}

/// Shown in place of the grid when there are no images
#[component]
pub fn GalleryEmptyState(#[props(default)] class: String) -> Element {
    rsx! {
        div {
            class: "text-center py-12 {class}",
            "data-testid": "gallery-empty",
            div { class: "flex justify-center mb-4",
                ImageIcon { class: "w-16 h-16 text-pink-400" }
            }
            h3 { class: "text-xl font-semibold text-gray-900 mb-2", "Gallery Coming Soon" }
            p { class: "text-gray-600 mb-4",
                "We're currently updating our gallery with beautiful event photos."
            }
            a {
                href: "#contact",
                class: "inline-block bg-gradient-to-r from-pink-500 to-purple-600 text-white px-6 py-3 rounded-full font-semibold hover:shadow-lg transition-all",
                "Get in Touch"
            }
        }
    }
}

/// Shown when the gallery manifest could not be read
#[component]
pub fn GalleryErrorState(#[props(default)] class: String) -> Element {
    rsx! {
        div {
            class: "text-center py-12 {class}",
            "data-testid": "gallery-error",
            div { class: "flex justify-center mb-4",
                AlertTriangleIcon { class: "w-16 h-16 text-pink-400" }
            }
            h3 { class: "text-xl font-semibold text-gray-900 mb-2", "Unable to Load Gallery" }
            p { class: "text-gray-600 mb-4",
                "We're having trouble loading our event photos right now."
            }
            a {
                href: "#contact",
                class: "inline-block bg-gradient-to-r from-pink-500 to-purple-600 text-white px-6 py-3 rounded-full font-semibold hover:shadow-lg transition-all",
                "Contact Us for Photos"
            }
        }
    }
}
