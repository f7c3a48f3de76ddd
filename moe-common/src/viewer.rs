//! Gallery viewer state and transitions
//!
//! [`ViewerController`] is the only thing that mutates [`ViewerState`]. Every
//! operation is synchronous, reports whether it changed anything, and treats
//! out-of-range requests and boundary moves as silent no-ops. Navigation never
//! wraps around.

use crate::catalog::{Catalog, ImageDescriptor};
use crate::keys::TileInput;

/// Open/closed state of the viewer
///
/// Open implies a valid selected index; closed implies none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewerState {
    pub selected_index: Option<usize>,
    pub is_open: bool,
}

impl ViewerState {
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn open_at(index: usize) -> Self {
        Self {
            selected_index: Some(index),
            is_open: true,
        }
    }
}

/// State machine for one gallery instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerController {
    catalog_len: usize,
    state: ViewerState,
    /// Tile whose activation opened the viewer
    focus_origin: Option<usize>,
}

impl ViewerController {
    pub fn new(catalog_len: usize) -> Self {
        Self {
            catalog_len,
            state: ViewerState::closed(),
            focus_origin: None,
        }
    }

    pub fn state(&self) -> ViewerState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.state.selected_index
    }

    fn in_range(&self, index: usize) -> bool {
        index < self.catalog_len
    }

    /// Open the viewer at `index`, remembering it as the focus origin.
    pub fn open(&mut self, index: usize) -> bool {
        if !self.in_range(index) {
            return false;
        }
        let next = ViewerState::open_at(index);
        if self.state == next {
            return false;
        }
        if !self.state.is_open {
            self.focus_origin = Some(index);
        }
        self.state = next;
        true
    }

    /// Route a tile input to [`ViewerController::open`].
    ///
    /// Pointer and keyboard activation share this path, so both land in the
    /// same state.
    pub fn activate(&mut self, index: usize, input: TileInput) -> bool {
        input.activates() && self.open(index)
    }

    /// Close the viewer.
    ///
    /// Returns the tile that opened it so the host can put focus back there.
    /// `None` when already closed.
    pub fn close(&mut self) -> Option<usize> {
        if !self.state.is_open {
            return None;
        }
        self.state = ViewerState::closed();
        self.focus_origin.take()
    }

    pub fn next(&mut self) -> bool {
        match self.state.selected_index {
            Some(i) if self.state.is_open && i + 1 < self.catalog_len => {
                self.state.selected_index = Some(i + 1);
                true
            }
            _ => false,
        }
    }

    pub fn previous(&mut self) -> bool {
        match self.state.selected_index {
            Some(i) if self.state.is_open && i > 0 => {
                self.state.selected_index = Some(i - 1);
                true
            }
            _ => false,
        }
    }

    /// Jump to `index` without touching the open flag.
    ///
    /// A closed viewer has no selection, so jumping while closed leaves the
    /// state alone; open the viewer instead.
    pub fn go_to(&mut self, index: usize) -> bool {
        if !self.in_range(index) || !self.state.is_open {
            return false;
        }
        if self.state.selected_index == Some(index) {
            return false;
        }
        self.state.selected_index = Some(index);
        true
    }
}

/// Interactive controls inside the open viewer, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayControl {
    Close,
    Previous,
    Next,
}

impl OverlayControl {
    /// Suffix used to build the control's DOM id
    pub fn id_suffix(&self) -> &'static str {
        match self {
            OverlayControl::Close => "close",
            OverlayControl::Previous => "prev",
            OverlayControl::Next => "next",
        }
    }

    pub fn aria_label(&self) -> &'static str {
        match self {
            OverlayControl::Close => "Close lightbox",
            OverlayControl::Previous => "Previous image",
            OverlayControl::Next => "Next image",
        }
    }
}

/// Areas of the open viewer a pointer click can land in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayRegion {
    /// The dimmed area around the content
    Backdrop,
    Image,
    /// Title and "Image N of M" line
    Caption,
    KeyboardHint,
}

impl OverlayRegion {
    /// Only a click on the backdrop itself dismisses the viewer
    pub fn dismisses(&self) -> bool {
        matches!(self, OverlayRegion::Backdrop)
    }
}

/// Render-ready projection of an open viewer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayView<'a> {
    pub image: &'a ImageDescriptor,
    /// 1-based position
    pub position: usize,
    pub total: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl<'a> OverlayView<'a> {
    /// Project `state` onto `catalog`.
    ///
    /// `None` when the viewer is closed or the selection is out of range, in
    /// which case nothing is rendered.
    pub fn project(catalog: &'a Catalog, state: ViewerState) -> Option<Self> {
        if !state.is_open {
            return None;
        }
        let index = state.selected_index?;
        let image = catalog.get(index)?;
        let total = catalog.len();
        Some(Self {
            image,
            position: index + 1,
            total,
            has_previous: index > 0,
            has_next: index + 1 < total,
        })
    }

    pub fn position_label(&self) -> String {
        format!("Image {} of {}", self.position, self.total)
    }

    /// Controls present in this view, in tab order
    pub fn focus_order(&self) -> Vec<OverlayControl> {
        let mut order = vec![OverlayControl::Close];
        if self.has_previous {
            order.push(OverlayControl::Previous);
        }
        if self.has_next {
            order.push(OverlayControl::Next);
        }
        order
    }
}
