//! UI Components for Creative Diary.
//!
//! Paper, wood and ink: a month calendar, a notes pad and a shelf of
//! keepsakes, plus the two dialogs that edit them.

mod calendar;
mod day_editor;
pub mod markdown_editor;
mod notes_panel;
pub mod photos;
mod shelf;
mod shelf_viewer;
mod sidebar;

pub use calendar::Calendar;
pub use day_editor::DayEditor;
pub use notes_panel::NotesPanel;
pub use shelf::Shelf;
pub use shelf_viewer::ShelfViewer;
pub use sidebar::Sidebar;
