//! Diary context for Creative Diary.
//!
//! Provides the diary state and display configuration to all components via
//! use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // Read
//! let diary = use_diary();
//! let saved = diary.read().days().len();
//!
//! // Write, always through the reducer
//! dispatch(diary, Action::OpenDay(day));
//! ```

use diary_core::{Action, DiaryConfig, DiaryState};
use dioxus::prelude::*;

/// Get the display configuration.
/// Uses the global config set from command line args.
pub fn get_config() -> DiaryConfig {
    crate::get_config()
}

/// Hook to access the diary state from context.
pub fn use_diary() -> Signal<DiaryState> {
    use_context::<Signal<DiaryState>>()
}

/// Hook to access the display configuration.
pub fn use_config() -> DiaryConfig {
    use_context::<DiaryConfig>()
}

/// Run an action through the reducer.
///
/// Rejections leave the state untouched and are only logged.
pub fn dispatch(mut diary: Signal<DiaryState>, action: Action) {
    if let Err(e) = diary.write().update(action) {
        tracing::debug!("Action rejected: {}", e);
    }
}
