//! Mobile navigation overlay
//!
//! Hamburger toggle plus a full-width menu of section links. While open the
//! menu traps Tab focus, closes on Escape or an outside click, and locks page
//! scrolling. Closing returns focus to the toggle, except when a link was
//! chosen: then the page scrolls to that section instead.

use crate::components::icons::{MenuIcon, XIcon};
use crate::wasm_utils::{
    active_element_id, event_target_within, focus_element_by_id, scroll_element_into_view,
    DocumentEventListener, DomScrollSurface, KeyPress,
};
use dioxus::prelude::*;
use moe_common::{FocusScope, OverlayCommand, ScrollLock};
use tracing::debug;

const TOGGLE_ID: &str = "mobile-nav-toggle";
const MENU_ID: &str = "mobile-nav-menu";

/// A link to a section of the page
#[derive(Clone, Debug, PartialEq)]
pub struct NavLink {
    pub label: String,
    /// Id of the target section, without `#`
    pub section_id: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, section_id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            section_id: section_id.into(),
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.section_id)
    }
}

fn link_id(index: usize) -> String {
    format!("mobile-nav-link-{index}")
}

/// Where focus goes once the menu has closed and unlocked the page
#[derive(Clone, Debug, PartialEq)]
enum AfterClose {
    ReturnToToggle,
    ScrollTo(String),
}

/// Cleanup handle for the open menu's document listeners
struct MenuListeners {
    _keydown: DocumentEventListener,
    _mousedown: DocumentEventListener,
}

#[component]
pub fn MobileNav(links: Vec<NavLink>) -> Element {
    let mut is_open = use_signal(|| false);
    let mut after_close = use_signal(|| None::<AfterClose>);
    let mut listeners = use_signal(|| None::<MenuListeners>);
    let mut scroll_lock = use_signal(|| None::<ScrollLock<DomScrollSurface>>);
    let link_count = links.len();

    use_effect(move || {
        if !is_open() {
            listeners.set(None);
            // Unlock first so the restored offset is in place before focus moves
            let was_locked = scroll_lock.write().take().is_some();
            if !was_locked {
                return;
            }
            match after_close.take() {
                Some(AfterClose::ScrollTo(section_id)) => {
                    scroll_element_into_view(&section_id);
                }
                Some(AfterClose::ReturnToToggle) | None => {
                    focus_element_by_id(TOGGLE_ID);
                }
            }
            return;
        }

        debug!("Mobile menu opened");
        scroll_lock.set(DomScrollSurface::from_window().map(ScrollLock::acquire));

        let ids: Vec<String> = (0..link_count).map(link_id).collect();
        if let Some(first) = ids.first() {
            focus_element_by_id(first);
        }
        let scope = FocusScope::new(ids);

        let keydown = DocumentEventListener::on_document("keydown", move |event| {
            let Some(press) = KeyPress::from_event(event) else {
                return;
            };
            match OverlayCommand::from_key(&press.key, press.shift) {
                Some(OverlayCommand::Close) => {
                    press.prevent_default();
                    after_close.set(Some(AfterClose::ReturnToToggle));
                    is_open.set(false);
                }
                Some(command @ (OverlayCommand::FocusForward | OverlayCommand::FocusBackward)) => {
                    let backward = command == OverlayCommand::FocusBackward;
                    if let Some(target) = scope.on_tab(active_element_id().as_ref(), backward) {
                        press.prevent_default();
                        focus_element_by_id(&target);
                    }
                }
                _ => {}
            }
        });

        let mousedown = DocumentEventListener::on_document("mousedown", move |event| {
            if !event_target_within(&event, MENU_ID) && !event_target_within(&event, TOGGLE_ID) {
                after_close.set(Some(AfterClose::ReturnToToggle));
                is_open.set(false);
            }
        });

        listeners.set(keydown.zip(mousedown).map(|(keydown, mousedown)| MenuListeners {
            _keydown: keydown,
            _mousedown: mousedown,
        }));
    });

    use_drop(move || {
        drop(listeners.write().take());
        drop(scroll_lock.write().take());
    });

    let open = is_open();

    rsx! {
        button {
            id: TOGGLE_ID,
            class: "md:hidden p-2 rounded-md text-gray-700 hover:text-pink-600 focus:outline-none focus-visible:ring-2 focus-visible:ring-pink-500",
            "aria-label": if open { "Close menu" } else { "Open menu" },
            "aria-expanded": "{open}",
            "aria-controls": MENU_ID,
            onclick: move |_| {
                if is_open() {
                    after_close.set(Some(AfterClose::ReturnToToggle));
                }
                is_open.toggle();
            },
            if open {
                XIcon { class: "w-6 h-6" }
            } else {
                MenuIcon { class: "w-6 h-6" }
            }
        }

        if open {
            div { class: "md:hidden fixed inset-0 top-16 z-40 bg-black/30", "aria-hidden": "true" }
            nav {
                id: MENU_ID,
                class: "md:hidden fixed top-16 inset-x-0 z-50 bg-white shadow-lg border-t border-pink-100",
                "aria-label": "Mobile navigation",
                ul { class: "flex flex-col py-2",
                    for (i , link) in links.iter().enumerate() {
                        {
                            let section_id = link.section_id.clone();
                            rsx! {
                                li { key: "{link.section_id}",
                                    a {
                                        id: link_id(i),
                                        href: link.href(),
                                        class: "block px-6 py-3 text-gray-800 hover:bg-pink-50 hover:text-pink-600 focus:outline-none focus-visible:bg-pink-50",
                                        onclick: move |evt| {
                                            evt.prevent_default();
                                            after_close.set(Some(AfterClose::ScrollTo(section_id.clone())));
                                            is_open.set(false);
                                        },
                                        "{link.label}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
