//! Visual theme for Creative Diary.

mod styles;

pub use styles::GLOBAL_STYLES;
