//! Diary page - the whole creative space on one screen.

use dioxus::prelude::*;

use crate::components::{Calendar, DayEditor, NotesPanel, Shelf, ShelfViewer, Sidebar};

/// Diary page component.
///
/// Both dialogs are always mounted; each renders nothing while closed.
#[component]
pub fn Diary() -> Element {
    rsx! {
        div { class: "diary",
            Sidebar {}

            main { class: "diary__main",
                header { class: "diary__header",
                    h1 { class: "page-title", "creative space" }
                    p { class: "tagline", "your personal diary in digital form" }
                }

                div { class: "diary__content",
                    div { class: "diary__top",
                        Calendar {}
                        NotesPanel {}
                    }
                    Shelf {}
                }
            }

            DayEditor {}
            ShelfViewer {}
        }
    }
}
