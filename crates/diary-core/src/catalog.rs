//! Shelf item catalog
//!
//! The shelf is fixed when the diary starts; items cannot be added or
//! removed afterwards.

use crate::types::{ShelfItem, ShelfItemId, ShelfKind};

/// Ordered, immutable list of shelf items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<ShelfItem>,
}

impl Catalog {
    /// Build a catalog from explicit items, keeping their order
    pub fn from_items(items: Vec<ShelfItem>) -> Self {
        Self { items }
    }

    /// Look up an item by id
    pub fn get(&self, id: &ShelfItemId) -> Option<&ShelfItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShelfItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let item = |id: &str, title: &str, kind, color: &str, rotation, height| ShelfItem {
            id: ShelfItemId::new(id),
            title: title.to_string(),
            kind,
            color: color.to_string(),
            rotation,
            height,
        };

        Self::from_items(vec![
            item("1", "The Master and Margarita", ShelfKind::Book, "#8B5CF6", -2, 180),
            item("2", "The Beatles", ShelfKind::Vinyl, "#1A1F2C", 0, 160),
            item("3", "Summer Photos", ShelfKind::PhotoAlbum, "#D946EF", 1, 170),
            item("4", "My Sketches", ShelfKind::Sketchbook, "#F97316", -1, 175),
            item("5", "War and Peace", ShelfKind::Book, "#0EA5E9", 2, 190),
            item("6", "Pink Floyd", ShelfKind::Vinyl, "#1A1F2C", 0, 160),
        ])
    }
}
