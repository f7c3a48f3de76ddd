use serde::{Deserialize, Serialize};

/// Number of grid columns per breakpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnLayout {
    pub mobile: u8,
    pub tablet: u8,
    pub desktop: u8,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            mobile: 1,
            tablet: 2,
            desktop: 3,
        }
    }
}

impl ColumnLayout {
    /// Tailwind grid classes for this layout.
    ///
    /// Column counts are clamped to 1..=6 so the classes always exist in the
    /// generated stylesheet.
    pub fn grid_classes(&self) -> String {
        let clamp = |n: u8| n.clamp(1, 6);
        format!(
            "grid-cols-{} md:grid-cols-{} lg:grid-cols-{}",
            clamp(self.mobile),
            clamp(self.tablet),
            clamp(self.desktop)
        )
    }
}

/// Presentation settings for the gallery grid and viewer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub columns: ColumnLayout,
    /// CSS class giving each tile its aspect ratio
    pub aspect_ratio: String,
    /// Let the browser defer loading off-screen tiles
    pub lazy_loading: bool,
    /// Show the "N photos" line above the grid
    pub show_image_count: bool,
    /// Emit preload hints for the images next to the one being viewed
    pub preload_neighbors: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            columns: ColumnLayout::default(),
            aspect_ratio: "aspect-square".to_string(),
            lazy_loading: true,
            show_image_count: true,
            preload_neighbors: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: GalleryConfig = serde_json::from_str(r#"{"lazy_loading": false}"#).unwrap();
        assert!(!config.lazy_loading);
        assert_eq!(config.columns, ColumnLayout::default());
        assert_eq!(config.aspect_ratio, "aspect-square");
        assert!(config.show_image_count);
    }

    #[test]
    fn test_partial_column_layout() {
        let config: GalleryConfig =
            serde_json::from_str(r#"{"columns": {"desktop": 4}}"#).unwrap();
        assert_eq!(config.columns.mobile, 1);
        assert_eq!(config.columns.tablet, 2);
        assert_eq!(config.columns.desktop, 4);
    }

    #[test]
    fn test_grid_classes_clamped() {
        let layout = ColumnLayout {
            mobile: 0,
            tablet: 2,
            desktop: 12,
        };
        assert_eq!(layout.grid_classes(), "grid-cols-1 md:grid-cols-2 lg:grid-cols-6");
    }
}
