//! Shelf types - collectible items and their editable content

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::PhotoRef;

/// Identifier of a shelf item within the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShelfItemId(pub String);

impl ShelfItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ShelfItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// What kind of collectible an item is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShelfKind {
    Book,
    Vinyl,
    PhotoAlbum,
    Sketchbook,
}

impl ShelfKind {
    /// Books and sketchbooks hold text per page
    pub fn is_paged(&self) -> bool {
        matches!(self, ShelfKind::Book | ShelfKind::Sketchbook)
    }

    /// Photo albums collect photos
    pub fn holds_photos(&self) -> bool {
        matches!(self, ShelfKind::PhotoAlbum)
    }

    /// Glyph drawn on the spine
    pub fn glyph(&self) -> &'static str {
        match self {
            ShelfKind::Book => "📖",
            ShelfKind::Vinyl => "🎵",
            ShelfKind::PhotoAlbum => "📷",
            ShelfKind::Sketchbook => "✏",
        }
    }

    /// Label used in buttons ("Close sketchbook")
    pub fn label(&self) -> &'static str {
        match self {
            ShelfKind::Book => "book",
            ShelfKind::Vinyl => "record",
            ShelfKind::PhotoAlbum => "album",
            ShelfKind::Sketchbook => "sketchbook",
        }
    }
}

impl std::fmt::Display for ShelfKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ShelfKind::Book => "book",
            ShelfKind::Vinyl => "vinyl record",
            ShelfKind::PhotoAlbum => "photo album",
            ShelfKind::Sketchbook => "sketchbook",
        };
        f.write_str(name)
    }
}

/// A collectible on the shelf
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShelfItem {
    pub id: ShelfItemId,
    pub title: String,
    pub kind: ShelfKind,
    /// CSS color of the spine or record
    pub color: String,
    /// Tilt on the shelf, in degrees
    pub rotation: i16,
    /// Spine height in pixels
    pub height: u16,
}

/// Content the user has written into a shelf item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShelfContent {
    pub pages: BTreeMap<usize, String>,
    pub photos: Vec<PhotoRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paged_kinds() {
        assert!(ShelfKind::Book.is_paged());
        assert!(ShelfKind::Sketchbook.is_paged());
        assert!(!ShelfKind::Vinyl.is_paged());
        assert!(!ShelfKind::PhotoAlbum.is_paged());
        assert!(ShelfKind::PhotoAlbum.holds_photos());
    }

    #[test]
    fn test_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&ShelfKind::PhotoAlbum).unwrap();
        assert_eq!(json, "\"photo-album\"");

        let kind: ShelfKind = serde_json::from_str("\"sketchbook\"").unwrap();
        assert_eq!(kind, ShelfKind::Sketchbook);
    }
}
