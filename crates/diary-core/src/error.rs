//! Error types for Creative Diary

use std::path::PathBuf;

use thiserror::Error;

use crate::types::ShelfKind;

/// Main error type for diary operations.
///
/// Reducer rejections never modify state, so every variant except
/// [`DiaryError::PhotoRead`] is informational for the UI.
#[derive(Error, Debug)]
pub enum DiaryError {
    /// Day index outside the month
    #[error("Day index out of range: {0}")]
    DayOutOfRange(usize),

    /// Shelf item id not present in the catalog
    #[error("Shelf item not found: {0}")]
    UnknownShelfItem(String),

    /// Day action dispatched with no day dialog open
    #[error("No day is open")]
    NoDayOpen,

    /// Shelf action dispatched with no shelf dialog open
    #[error("No shelf item is open")]
    NoShelfItemOpen,

    /// Paging or page text on a kind without pages
    #[error("A {0} has no pages")]
    NotPaged(ShelfKind),

    /// Photo added to a kind that does not collect photos
    #[error("A {0} does not hold photos")]
    NoPhotos(ShelfKind),

    /// Day already holds the maximum number of photos
    #[error("Photo limit reached ({0} per day)")]
    PhotoLimitReached(usize),

    /// Photo result arrived after its dialog was closed or reopened
    #[error("Photo result arrived for a dialog that is no longer open")]
    StaleIngest,

    /// Photo file could not be read
    #[error("Could not read photo {path:?}: {source}")]
    PhotoRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias using DiaryError
pub type DiaryResult<T> = Result<T, DiaryError>;
