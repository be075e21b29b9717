//! In-memory content stores
//!
//! Two keyed stores back the diary: one entry per saved day, one record per
//! shelf item that has been written to. Both are last-write-wins and total;
//! nothing here can fail.

use std::collections::{BTreeMap, HashMap};

use crate::types::{DayContent, DayIndex, Mood, PhotoRef, ShelfContent, ShelfItemId};

/// Saved day entries keyed by day index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayStore {
    entries: BTreeMap<DayIndex, DayContent>,
}

impl DayStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, day: DayIndex) -> Option<&DayContent> {
        self.entries.get(&day)
    }

    /// Create or overwrite the whole entry for `day`.
    ///
    /// The mood is always derived from the day index.
    pub fn save(&mut self, day: DayIndex, text: String, photos: Vec<PhotoRef>) {
        let mood = Mood::for_day(day);
        tracing::debug!(%day, photos = photos.len(), "Saving day entry");
        self.entries.insert(day, DayContent { text, photos, mood });
    }

    pub fn contains(&self, day: DayIndex) -> bool {
        self.entries.contains_key(&day)
    }

    /// Number of days with a saved entry
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DayIndex, &DayContent)> {
        self.entries.iter().map(|(day, content)| (*day, content))
    }
}

/// Per-item shelf content, created lazily on first write
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShelfStore {
    records: HashMap<ShelfItemId, ShelfContent>,
}

impl ShelfStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saved text of one page
    pub fn page(&self, id: &ShelfItemId, page: usize) -> Option<&str> {
        self.records
            .get(id)
            .and_then(|record| record.pages.get(&page))
            .map(String::as_str)
    }

    /// Store one page, leaving the item's other pages and photos alone
    pub fn save_page(&mut self, id: &ShelfItemId, page: usize, text: String) {
        tracing::debug!(item = %id, page, "Saving shelf page");
        self.records
            .entry(id.clone())
            .or_default()
            .pages
            .insert(page, text);
    }

    /// Photos collected in an item; empty if nothing was added yet
    pub fn photos(&self, id: &ShelfItemId) -> &[PhotoRef] {
        self.records
            .get(id)
            .map(|record| record.photos.as_slice())
            .unwrap_or(&[])
    }

    pub fn append_photo(&mut self, id: &ShelfItemId, photo: PhotoRef) {
        let record = self.records.entry(id.clone()).or_default();
        record.photos.push(photo);
        tracing::debug!(item = %id, photos = record.photos.len(), "Added shelf photo");
    }

    /// Full record for an item, if it has been written to
    pub fn content(&self, id: &ShelfItemId) -> Option<&ShelfContent> {
        self.records.get(id)
    }
}
