//! moe-common - Pure gallery logic for the Moe Balloons site
//!
//! Catalog loading, viewer state transitions, focus trapping and scroll
//! locking, with no dependency on a rendering engine.

pub mod catalog;
pub mod config;
pub mod focus_scope;
pub mod keys;
pub mod scroll_lock;
pub mod viewer;

pub use catalog::{get_catalog, load_catalog, Catalog, CatalogError, ImageDescriptor, Manifest};
pub use config::{ColumnLayout, GalleryConfig};
pub use focus_scope::FocusScope;
pub use keys::{OverlayCommand, TileInput};
pub use scroll_lock::{ScrollLock, ScrollSurface};
pub use viewer::{OverlayControl, OverlayRegion, OverlayView, ViewerController, ViewerState};
