//! Image catalog built from the static gallery manifest
//!
//! The manifest is a JSON document embedded at build time. Each file in it
//! becomes an [`ImageDescriptor`] whose `ordinal_index` is its position in the
//! manifest, assigned once when the catalog is built.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::GalleryConfig;

/// Manifest shipped with the site
const BUILTIN_MANIFEST: &str = include_str!("../manifest/gallery.json");

/// Catalog errors
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Malformed gallery manifest: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Manifest entry {index} has an empty filename")]
    EmptyFilename { index: usize },
}

/// Gallery manifest: where the images live and in what order they appear
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default = "default_base_path")]
    pub base_path: String,
    pub files: Vec<String>,
    #[serde(default)]
    pub config: GalleryConfig,
}

fn default_base_path() -> String {
    "/images".to_string()
}

impl Manifest {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let manifest: Manifest = serde_json::from_str(json)?;
        if let Some(index) = manifest.files.iter().position(|f| f.trim().is_empty()) {
            return Err(CatalogError::EmptyFilename { index });
        }
        Ok(manifest)
    }

    /// The manifest compiled into the binary
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_MANIFEST)
    }

    /// Asset path for a manifest filename
    pub fn asset_path(&self, filename: &str) -> String {
        format!("{}/{}", self.base_path.trim_end_matches('/'), filename)
    }
}

/// One image in the gallery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDescriptor {
    pub path: String,
    pub alt_text: String,
    pub filename: String,
    pub ordinal_index: usize,
}

/// Ordered, read-only collection of gallery images
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    images: Vec<ImageDescriptor>,
}

impl Catalog {
    pub fn from_manifest(manifest: &Manifest) -> Self {
        let images = manifest
            .files
            .iter()
            .enumerate()
            .map(|(ordinal_index, filename)| ImageDescriptor {
                path: manifest.asset_path(filename),
                alt_text: generate_alt_text(filename, ordinal_index),
                filename: filename.clone(),
                ordinal_index,
            })
            .collect();
        Self { images }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ImageDescriptor> {
        self.images.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageDescriptor> {
        self.images.iter()
    }

    /// Paths of the images directly before and after `index`
    pub fn neighbors(&self, index: usize) -> Vec<&str> {
        if index >= self.images.len() {
            return Vec::new();
        }
        let before = index.checked_sub(1).and_then(|i| self.images.get(i));
        let after = self.images.get(index + 1);
        before
            .into_iter()
            .chain(after)
            .map(|image| image.path.as_str())
            .collect()
    }
}

/// Load the catalog from the built-in manifest, along with its config.
pub fn load_catalog() -> Result<(Catalog, GalleryConfig), CatalogError> {
    let manifest = Manifest::builtin()?;
    Ok((Catalog::from_manifest(&manifest), manifest.config))
}

/// Catalog for the built-in manifest.
///
/// The built-in manifest is validated by tests; should it ever fail to parse,
/// this yields an empty catalog and the gallery shows its empty state.
pub fn get_catalog() -> Catalog {
    load_catalog()
        .map(|(catalog, _)| catalog)
        .unwrap_or_default()
}

fn photo_date_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"PHOTO-(\d{4}-\d{2}-\d{2})").ok())
        .as_ref()
}

/// Alt text for a manifest file, using the capture date when the filename has one
pub fn generate_alt_text(filename: &str, index: usize) -> String {
    let date = photo_date_pattern()
        .and_then(|pattern| pattern.captures(filename))
        .and_then(|caps| caps.get(1));
    match date {
        Some(date) => format!("Beautiful balloon decoration from event on {}", date.as_str()),
        None => format!("Beautiful balloon decoration from event photo {}", index + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(files: &[&str]) -> Manifest {
        Manifest {
            base_path: "/images".to_string(),
            files: files.iter().map(|f| f.to_string()).collect(),
            config: GalleryConfig::default(),
        }
    }

    #[test]
    fn test_indices_follow_manifest_order() {
        let catalog = Catalog::from_manifest(&manifest(&["a.jpg", "b.jpg", "c.jpg"]));
        let indices: Vec<usize> = catalog.iter().map(|i| i.ordinal_index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(catalog.get(1).unwrap().path, "/images/b.jpg");
    }

    #[test]
    fn test_builtin_manifest_parses() {
        let (catalog, config) = load_catalog().unwrap();
        assert_eq!(catalog.len(), 20);
        assert_eq!(config, GalleryConfig::default());
        for (i, image) in catalog.iter().enumerate() {
            assert_eq!(image.ordinal_index, i);
            assert!(image.path.starts_with("/images/"));
        }
    }

    #[test]
    fn test_get_catalog_is_deterministic() {
        assert_eq!(get_catalog(), get_catalog());
    }

    #[test]
    fn test_base_path_trailing_slash() {
        let mut m = manifest(&["x.jpg"]);
        m.base_path = "/static/photos/".to_string();
        assert_eq!(m.asset_path("x.jpg"), "/static/photos/x.jpg");
    }

    #[test]
    fn test_alt_text_uses_photo_date() {
        assert_eq!(
            generate_alt_text("PHOTO-2025-07-04-23-14-26.jpg", 0),
            "Beautiful balloon decoration from event on 2025-07-04"
        );
        assert_eq!(
            generate_alt_text("7019a44b-a1a4.jpg", 5),
            "Beautiful balloon decoration from event photo 6"
        );
    }

    #[test]
    fn test_from_json_defaults() {
        let m = Manifest::from_json(r#"{"files": ["one.jpg"]}"#).unwrap();
        assert_eq!(m.base_path, "/images");
        assert_eq!(m.config, GalleryConfig::default());
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let err = Manifest::from_json(r#"{"files": "nope"}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_from_json_rejects_empty_filename() {
        let err = Manifest::from_json(r#"{"files": ["a.jpg", "  "]}"#).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyFilename { index: 1 }));
    }

    #[test]
    fn test_neighbors() {
        let catalog = Catalog::from_manifest(&manifest(&["a.jpg", "b.jpg", "c.jpg"]));
        assert_eq!(catalog.neighbors(0), vec!["/images/b.jpg"]);
        assert_eq!(catalog.neighbors(1), vec!["/images/a.jpg", "/images/c.jpg"]);
        assert_eq!(catalog.neighbors(2), vec!["/images/b.jpg"]);
        assert!(catalog.neighbors(3).is_empty());
    }

    #[test]
    fn test_empty_manifest() {
        let catalog = Catalog::from_manifest(&manifest(&[]));
        assert!(catalog.is_empty());
        assert!(catalog.neighbors(0).is_empty());
    }
}
