//! Shared UI components

pub mod gallery;
pub mod icons;
pub mod mobile_nav;

pub use gallery::{
    Gallery, GalleryEmptyState, GalleryErrorState, GalleryGrid, GalleryView, ImageTile, Lightbox,
};
pub use icons::{
    AlertTriangleIcon, ChevronLeftIcon, ChevronRightIcon, ImageIcon, MenuIcon, XIcon, ZoomInIcon,
};
pub use mobile_nav::{MobileNav, NavLink};
