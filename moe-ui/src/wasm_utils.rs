//! WASM utilities for browser interop
//!
//! # Event Listener Cleanup Pattern
//!
//! A JavaScript listener backed by a Rust `Closure` must keep the closure alive
//! for as long as it is attached. Rather than `closure.forget()`, which leaks and
//! never detaches, [`DocumentEventListener`] owns the closure and removes the
//! listener in `Drop`:
//!
//! ```ignore
//! let listener = DocumentEventListener::new(document, "keydown", callback);
//! // Listener is removed here
//! drop(listener);
//! ```
//!
//! Store it in a `Signal<Option<DocumentEventListener>>` and set it to `None`
//! to detach. The same ownership rule applies to [`ScrollLock`] guards over
//! [`DomScrollSurface`].
//!
//! [`ScrollLock`]: moe_common::ScrollLock

use moe_common::ScrollSurface;
use wasm_bindgen_x::prelude::*;

/// A document event listener that automatically removes itself when dropped.
pub struct DocumentEventListener {
    document: web_sys_x::Document,
    event_name: &'static str,
    callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)>,
}

impl DocumentEventListener {
    /// Attaches an event listener to the document.
    pub fn new(
        document: web_sys_x::Document,
        event_name: &'static str,
        callback: impl FnMut(wasm_bindgen_x::JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)> =
            Closure::wrap(Box::new(callback));

        document
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok();

        Self {
            document,
            event_name,
            callback,
        }
    }

    /// Attach to the current window's document, if there is one.
    pub fn on_document(
        event_name: &'static str,
        callback: impl FnMut(wasm_bindgen_x::JsValue) + 'static,
    ) -> Option<Self> {
        let document = web_sys_x::window()?.document()?;
        Some(Self::new(document, event_name, callback))
    }
}

impl Drop for DocumentEventListener {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Fields of a raw DOM `keydown` event
pub struct KeyPress {
    pub key: String,
    pub shift: bool,
    event: JsValue,
}

impl KeyPress {
    pub fn from_event(event: JsValue) -> Option<Self> {
        let key = js_sys_x::Reflect::get(&event, &"key".into())
            .ok()?
            .as_string()?;
        let shift = js_sys_x::Reflect::get(&event, &"shiftKey".into())
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
        Some(Self { key, shift, event })
    }

    pub fn prevent_default(&self) {
        if let Ok(prevent) = js_sys_x::Reflect::get(&self.event, &"preventDefault".into()) {
            if let Some(func) = prevent.dyn_ref::<js_sys_x::Function>() {
                let _ = func.call0(&self.event);
            }
        }
    }
}

/// Whether a DOM event's target sits inside the element with `container_id`
pub fn event_target_within(event: &JsValue, container_id: &str) -> bool {
    let Ok(target) = js_sys_x::Reflect::get(event, &"target".into()) else {
        return false;
    };
    let Some(node) = target.dyn_ref::<web_sys_x::Element>() else {
        return false;
    };
    node.closest(&format!("#{container_id}"))
        .ok()
        .flatten()
        .is_some()
}

fn element_by_id(id: &str) -> Option<web_sys_x::Element> {
    web_sys_x::window()?.document()?.get_element_by_id(id)
}

/// Move keyboard focus to the element with `id`. Returns whether it was found.
///
/// Focus never scrolls the page. Restoring focus runs right after a scroll
/// lock puts the page back at its saved offset, and a scrolling `focus()`
/// would move it again.
pub fn focus_element_by_id(id: &str) -> bool {
    let Some(element) = element_by_id(id) else {
        return false;
    };
    let Ok(element) = element.dyn_into::<web_sys_x::HtmlElement>() else {
        return false;
    };
    let options = web_sys_x::FocusOptions::new();
    options.set_prevent_scroll(true);
    element.focus_with_options(&options).is_ok()
}

/// Scroll the element with `id` into view. Returns whether it was found.
pub fn scroll_element_into_view(id: &str) -> bool {
    match element_by_id(id) {
        Some(element) => {
            element.scroll_into_view();
            true
        }
        None => false,
    }
}

/// Id of the element that currently has focus, if it has one
pub fn active_element_id() -> Option<String> {
    let active = web_sys_x::window()?.document()?.active_element()?;
    let id = active.id();
    (!id.is_empty()).then_some(id)
}

/// The browser page as a [`ScrollSurface`]
///
/// Freezing pins `<body>` with `position: fixed` at the negated offset, which
/// also stops momentum and bounce scrolling on touch devices. `<html>` gets
/// `overflow: hidden` for the same reason.
pub struct DomScrollSurface {
    window: web_sys_x::Window,
    body: web_sys_x::HtmlElement,
    root: Option<web_sys_x::HtmlElement>,
}

impl DomScrollSurface {
    pub fn from_window() -> Option<Self> {
        let window = web_sys_x::window()?;
        let document = window.document()?;
        let body = document.body()?;
        let root = document
            .document_element()
            .and_then(|e| e.dyn_into::<web_sys_x::HtmlElement>().ok());
        Some(Self { window, body, root })
    }
}

const BODY_LOCK_PROPERTIES: [&str; 4] = ["overflow", "position", "top", "width"];
const ROOT_LOCK_PROPERTIES: [&str; 2] = ["overflow", "height"];

impl ScrollSurface for DomScrollSurface {
    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn freeze(&self, offset: f64) {
        let style = self.body.style();
        let _ = style.set_property("overflow", "hidden");
        let _ = style.set_property("position", "fixed");
        let _ = style.set_property("top", &format!("-{offset}px"));
        let _ = style.set_property("width", "100%");
        if let Some(root) = &self.root {
            let style = root.style();
            let _ = style.set_property("overflow", "hidden");
            let _ = style.set_property("height", "100%");
        }
    }

    fn thaw(&self) {
        let style = self.body.style();
        for property in BODY_LOCK_PROPERTIES {
            let _ = style.remove_property(property);
        }
        if let Some(root) = &self.root {
            let style = root.style();
            for property in ROOT_LOCK_PROPERTIES {
                let _ = style.remove_property(property);
            }
        }
    }

    fn scroll_to(&self, offset: f64) {
        // Instant overrides `scroll-behavior: smooth` on <html>
        let options = web_sys_x::ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(offset);
        options.set_behavior(web_sys_x::ScrollBehavior::Instant);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}
