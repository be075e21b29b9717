//! Day Editor Modal
//!
//! Text and up to three photos for one calendar day. Changes only reach the
//! diary on save; cancelling or clicking outside throws them away.

use diary_core::{Action, PhotoTarget};
use dioxus::prelude::*;

use crate::components::photos::{PhotoError, PhotoPicker, PhotoTile};
use crate::context::{dispatch, use_diary};

#[component]
pub fn DayEditor() -> Element {
    let diary = use_diary();
    let Some(dialog) = diary.read().day_dialog().cloned() else {
        return rsx! {};
    };

    let day = dialog.day;
    let glyph = dialog.mood().glyph();
    let roman = day.roman();
    let can_add_photo = dialog.can_add_photo();

    let close = move |_| dispatch(diary, Action::CloseDay);

    rsx! {
        div {
            class: "modal-overlay",
            onclick: close,

            div {
                class: "modal day-editor",
                onclick: move |e| e.stop_propagation(),

                h2 { class: "modal-title",
                    span { class: "modal-title__icon", "{glyph}" }
                    "Day {roman}"
                }

                div { class: "modal-section",
                    h3 { class: "modal-section__title", "✏ entries of the day" }
                    textarea {
                        class: "day-editor__text",
                        value: "{dialog.text}",
                        oninput: move |e| dispatch(diary, Action::EditDayText(e.value())),
                        placeholder: "What happened today? Describe your thoughts, impressions, ideas...",
                        autofocus: true,
                    }
                }

                div { class: "modal-section",
                    h3 { class: "modal-section__title", "🖼 photos" }
                    div { class: "photo-grid",
                        for (i, photo) in dialog.photos.iter().cloned().enumerate() {
                            PhotoTile {
                                key: "{i}",
                                photo,
                                alt: format!("Photo {}", i + 1),
                                on_remove: move |_| dispatch(diary, Action::RemoveDayPhoto(i)),
                            }
                        }
                        if can_add_photo {
                            PhotoPicker { target: PhotoTarget::Day(day) }
                        }
                    }
                    if let Some(err) = dialog.photo_error.clone() {
                        PhotoError { message: err, target: PhotoTarget::Day(day) }
                    }
                }

                div { class: "modal-actions",
                    button {
                        class: "btn-primary",
                        onclick: move |_| dispatch(diary, Action::SaveDay),
                        "✓ Save"
                    }
                    button {
                        class: "btn-secondary",
                        onclick: close,
                        "✕ Cancel"
                    }
                }
            }
        }
    }
}
