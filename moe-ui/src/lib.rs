//! moe-ui - UI components for the Moe Balloons site
//!
//! Dioxus views over the pure gallery logic in `moe-common`: the gallery grid,
//! the lightbox, the mobile navigation overlay, and the browser glue they
//! share.

pub mod components;
pub mod wasm_utils;

pub use components::*;
