//! Creative Diary Core Library
//!
//! In-memory content model behind the diary window: a month of day entries,
//! a shelf of collectibles with their own pages and photos, and the
//! dialog/navigation state that edits them.
//!
//! ## Overview
//!
//! Everything lives in a single [`DiaryState`]. Views read it and change it
//! only through [`DiaryState::update`], which takes an [`Action`] and either
//! applies it or rejects it with a [`DiaryError`], leaving the state as it
//! was.
//!
//! ## Quick Start
//!
//! ```ignore
//! use diary_core::{Action, DayIndex, DiaryState};
//!
//! let mut diary = DiaryState::new();
//! let day = DayIndex::new(5)?;
//!
//! diary.update(Action::OpenDay(day))?;
//! diary.update(Action::EditDayText("Had coffee".into()))?;
//! diary.update(Action::SaveDay)?;
//!
//! let entry = diary.days().get(day).unwrap();
//! assert_eq!(entry.mood.name(), "Car");
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod ingest;
pub mod state;
pub mod store;
pub mod types;

// Re-exports
pub use catalog::Catalog;
pub use config::DiaryConfig;
pub use error::{DiaryError, DiaryResult};
pub use ingest::{encode_photo, ingest_file, PHOTO_EXTENSIONS};
pub use state::{Action, DayDialog, DiaryState, IngestTicket, PhotoTarget, SessionId, ShelfDialog};
pub use store::{DayStore, ShelfStore};
pub use types::*;
