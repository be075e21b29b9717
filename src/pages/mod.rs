//! Page components for Creative Diary.

mod diary;

pub use diary::Diary;
