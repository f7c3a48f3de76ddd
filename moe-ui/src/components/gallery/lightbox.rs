//! Full-screen image viewer for the gallery
//!
//! Mounted by the parent only while the viewer is open, so its DOM, its
//! document keydown listener and its scroll lock all live exactly as long as
//! the open state does. Unmounting for any reason drops the listener and
//! releases the scroll lock.

use std::collections::HashSet;

use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon, ImageIcon, XIcon};
use crate::wasm_utils::{
    active_element_id, focus_element_by_id, DocumentEventListener, DomScrollSurface, KeyPress,
};
use dioxus::prelude::*;
use moe_common::{
    Catalog, FocusScope, OverlayCommand, OverlayControl, OverlayRegion, OverlayView, ScrollLock,
    ViewerController,
};
use tracing::debug;

use super::{control_id, viewer_id};

/// Close the viewer and hand the originating tile to `restore_focus`.
pub(super) fn close_viewer(
    mut viewer: Signal<ViewerController>,
    mut restore_focus: Signal<Option<usize>>,
) {
    if let Some(origin) = viewer.write().close() {
        debug!("Closed gallery viewer, returning focus to tile {}", origin);
        restore_focus.set(Some(origin));
    }
}

/// Close on a backdrop click; keep every other region's clicks off the backdrop.
fn handle_region_click(
    region: OverlayRegion,
    evt: &MouseEvent,
    viewer: Signal<ViewerController>,
    restore_focus: Signal<Option<usize>>,
) {
    if region.dismisses() {
        close_viewer(viewer, restore_focus);
    } else {
        evt.stop_propagation();
    }
}

fn handle_key(
    press: &KeyPress,
    catalog: &Catalog,
    gallery_id: &str,
    mut viewer: Signal<ViewerController>,
    restore_focus: Signal<Option<usize>>,
) {
    let Some(command) = OverlayCommand::from_key(&press.key, press.shift) else {
        return;
    };

    match command {
        OverlayCommand::Close => {
            press.prevent_default();
            close_viewer(viewer, restore_focus);
        }
        OverlayCommand::Previous => {
            press.prevent_default();
            viewer.write().previous();
        }
        OverlayCommand::Next => {
            press.prevent_default();
            viewer.write().next();
        }
        OverlayCommand::FocusForward | OverlayCommand::FocusBackward => {
            let state = viewer.peek().state();
            let Some(view) = OverlayView::project(catalog, state) else {
                return;
            };
            let scope = FocusScope::new(
                view.focus_order()
                    .into_iter()
                    .map(|control| control_id(gallery_id, control))
                    .collect(),
            );
            let backward = command == OverlayCommand::FocusBackward;
            if let Some(target) = scope.on_tab(active_element_id().as_ref(), backward) {
                press.prevent_default();
                focus_element_by_id(&target);
            }
        }
    }
}

/// Lightbox for the image selected in `viewer`
///
/// Renders nothing when the viewer is closed or its selection is out of range.
#[component]
pub fn Lightbox(
    catalog: Catalog,
    viewer: Signal<ViewerController>,
    /// Receives the originating tile index when the viewer closes
    restore_focus: Signal<Option<usize>>,
    gallery_id: String,
    #[props(default = true)] preload_neighbors: bool,
) -> Element {
    let mut scroll_lock = use_signal(|| None::<ScrollLock<DomScrollSurface>>);
    let mut key_listener = use_signal(|| None::<DocumentEventListener>);
    let mut failed_images = use_signal(HashSet::<usize>::new);

    use_hook({
        let catalog = catalog.clone();
        let gallery_id = gallery_id.clone();
        move || {
            scroll_lock.set(DomScrollSurface::from_window().map(ScrollLock::acquire));
            key_listener.set(DocumentEventListener::on_document("keydown", move |event| {
                if let Some(press) = KeyPress::from_event(event) {
                    handle_key(&press, &catalog, &gallery_id, viewer, restore_focus);
                }
            }));
        }
    });

    use_drop(move || {
        drop(key_listener.write().take());
        drop(scroll_lock.write().take());
    });

    // Focus the close control on open and after every navigation
    let close_id = control_id(&gallery_id, OverlayControl::Close);
    use_effect({
        let close_id = close_id.clone();
        move || {
            let _ = viewer.read().selected_index();
            focus_element_by_id(&close_id);
        }
    });

    let state = viewer.read().state();
    let Some(view) = OverlayView::project(&catalog, state) else {
        return rsx! {};
    };

    let index = view.image.ordinal_index;
    let image = view.image.clone();
    let position_label = view.position_label();
    let has_previous = view.has_previous;
    let has_next = view.has_next;
    let image_failed = failed_images.read().contains(&index);
    let neighbors: Vec<String> = if preload_neighbors {
        catalog.neighbors(index).into_iter().map(String::from).collect()
    } else {
        Vec::new()
    };

    let dialog_id = viewer_id(&gallery_id);
    let title_id = format!("{dialog_id}-title");
    let description_id = format!("{dialog_id}-description");
    let prev_id = control_id(&gallery_id, OverlayControl::Previous);
    let next_id = control_id(&gallery_id, OverlayControl::Next);

    rsx! {
        div {
            id: "{dialog_id}",
            class: "fixed inset-0 z-50 bg-black/90 flex items-center justify-center p-4",
            role: "dialog",
            "aria-modal": "true",
            "aria-labelledby": "{title_id}",
            "aria-describedby": "{description_id}",
            "data-testid": "gallery-lightbox",
            onclick: move |evt| handle_region_click(OverlayRegion::Backdrop, &evt, viewer, restore_focus),

            for path in neighbors {
                link { key: "{path}", rel: "preload", "as": "image", href: "{path}" }
            }

            // Close button
            button {
                id: "{close_id}",
                class: "absolute top-4 right-4 z-10 text-white hover:text-pink-300 focus:outline-none focus:ring-2 focus:ring-white focus:ring-offset-2 focus:ring-offset-black rounded-full p-2 transition-colors",
                "aria-label": OverlayControl::Close.aria_label(),
                onclick: move |evt| {
                    evt.stop_propagation();
                    close_viewer(viewer, restore_focus);
                },
                XIcon { class: "w-8 h-8" }
            }

            // Previous button
            if has_previous {
                button {
                    id: "{prev_id}",
                    class: "absolute left-4 top-1/2 -translate-y-1/2 z-10 text-white hover:text-pink-300 focus:outline-none focus:ring-2 focus:ring-white focus:ring-offset-2 focus:ring-offset-black rounded-full p-3 transition-colors bg-black/30 hover:bg-black/50",
                    "aria-label": OverlayControl::Previous.aria_label(),
                    onclick: move |evt| {
                        evt.stop_propagation();
                        viewer.write().previous();
                    },
                    ChevronLeftIcon { class: "w-8 h-8" }
                }
            }

            // Next button
            if has_next {
                button {
                    id: "{next_id}",
                    class: "absolute right-4 top-1/2 -translate-y-1/2 z-10 text-white hover:text-pink-300 focus:outline-none focus:ring-2 focus:ring-white focus:ring-offset-2 focus:ring-offset-black rounded-full p-3 transition-colors bg-black/30 hover:bg-black/50",
                    "aria-label": OverlayControl::Next.aria_label(),
                    onclick: move |evt| {
                        evt.stop_propagation();
                        viewer.write().next();
                    },
                    ChevronRightIcon { class: "w-8 h-8" }
                }
            }

            // Image content
            div {
                class: "relative max-w-4xl max-h-[80vh] flex items-center justify-center",
                onclick: move |evt| handle_region_click(OverlayRegion::Image, &evt, viewer, restore_focus),
                if image_failed {
                    div { class: "w-[min(32rem,80vw)] aspect-square bg-gray-800 rounded-lg flex flex-col items-center justify-center gap-3 text-gray-400",
                        ImageIcon { class: "w-12 h-12" }
                        span { class: "text-sm", "Image unavailable" }
                    }
                } else {
                    img {
                        key: "{index}",
                        src: "{image.path}",
                        alt: "{image.alt_text}",
                        class: "max-w-full max-h-[80vh] object-contain",
                        onerror: move |_| {
                            failed_images.write().insert(index);
                        },
                    }
                }
            }

            // Image counter and info
            div {
                class: "absolute bottom-4 left-1/2 -translate-x-1/2 text-white text-center",
                onclick: move |evt| handle_region_click(OverlayRegion::Caption, &evt, viewer, restore_focus),
                h2 { id: "{title_id}", class: "text-lg font-semibold mb-1", "Event Photo" }
                p { id: "{description_id}", class: "text-sm opacity-80", "{position_label}" }
            }

            // Keyboard instructions
            div {
                class: "absolute bottom-4 right-4 text-white text-xs opacity-60 hidden md:block",
                onclick: move |evt| handle_region_click(OverlayRegion::KeyboardHint, &evt, viewer, restore_focus),
                p { "Use ← → keys to navigate • ESC to close" }
            }
        }
    }
}
