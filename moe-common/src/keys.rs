//! Key routing for the gallery
//!
//! Key names are the DOM `KeyboardEvent.key` strings.

/// Command produced by a key press while the viewer is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayCommand {
    Close,
    Previous,
    Next,
    /// Tab: move focus forward within the overlay
    FocusForward,
    /// Shift+Tab: move focus backward within the overlay
    FocusBackward,
}

impl OverlayCommand {
    pub fn from_key(key: &str, shift: bool) -> Option<Self> {
        match key {
            "Escape" | "Esc" => Some(Self::Close),
            "ArrowLeft" | "Left" => Some(Self::Previous),
            "ArrowRight" | "Right" => Some(Self::Next),
            "Tab" if shift => Some(Self::FocusBackward),
            "Tab" => Some(Self::FocusForward),
            _ => None,
        }
    }
}

/// Input that reached a grid tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileInput {
    Pointer,
    Enter,
    Space,
    /// Any other key; never activates
    OtherKey,
}

impl TileInput {
    pub fn from_key(key: &str) -> Self {
        match key {
            "Enter" => TileInput::Enter,
            " " | "Spacebar" => TileInput::Space,
            _ => TileInput::OtherKey,
        }
    }

    /// Whether this input should open the viewer at the tile
    pub fn activates(&self) -> bool {
        !matches!(self, TileInput::OtherKey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_bindings() {
        assert_eq!(OverlayCommand::from_key("Escape", false), Some(OverlayCommand::Close));
        assert_eq!(OverlayCommand::from_key("ArrowLeft", false), Some(OverlayCommand::Previous));
        assert_eq!(OverlayCommand::from_key("ArrowRight", false), Some(OverlayCommand::Next));
        assert_eq!(OverlayCommand::from_key("Tab", false), Some(OverlayCommand::FocusForward));
        assert_eq!(OverlayCommand::from_key("Tab", true), Some(OverlayCommand::FocusBackward));
        assert_eq!(OverlayCommand::from_key("a", false), None);
        assert_eq!(OverlayCommand::from_key("Enter", false), None);
    }

    #[test]
    fn test_tile_activation() {
        assert!(TileInput::Pointer.activates());
        assert_eq!(TileInput::from_key("Enter"), TileInput::Enter);
        assert_eq!(TileInput::from_key(" "), TileInput::Space);
        assert!(TileInput::from_key("Enter").activates());
        assert!(TileInput::from_key(" ").activates());
        assert!(!TileInput::from_key("Tab").activates());
        assert!(!TileInput::from_key("ArrowRight").activates());
        assert_eq!(TileInput::from_key("Spacebar"), TileInput::Space);
        assert!(!TileInput::from_key("Escape").activates());
    }
}
