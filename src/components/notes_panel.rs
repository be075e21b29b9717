//! Notes Panel Component

use diary_core::Action;
use dioxus::prelude::*;

use crate::context::{dispatch, use_diary};

/// Ruled scratch pad next to the calendar
#[component]
pub fn NotesPanel() -> Element {
    let diary = use_diary();
    let notes = diary.read().notes().to_string();

    rsx! {
        section { class: "card notes-panel",
            h3 { class: "card-title", "notes" }
            textarea {
                class: "notes-panel__lines",
                rows: 8,
                value: "{notes}",
                oninput: move |e| dispatch(diary, Action::EditNotes(e.value())),
            }
        }
    }
}
