//! Photo components
//!
//! Pick, embed, and show photos attached to days and albums.

mod photo_picker;

pub use photo_picker::PhotoPicker;

use diary_core::{Action, PhotoRef, PhotoTarget};
use dioxus::prelude::*;

use crate::context::{dispatch, use_diary};

/// Square photo frame with an optional remove button
#[component]
pub fn PhotoTile(
    photo: PhotoRef,
    alt: String,
    #[props(default)] on_remove: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div { class: "photo-tile",
            img {
                class: "photo-tile__img",
                src: "{photo}",
                alt: "{alt}",
            }
            if let Some(handler) = on_remove {
                button {
                    class: "photo-tile__remove",
                    "aria-label": "Remove photo",
                    onclick: move |_| handler.call(()),
                    "\u{00D7}"
                }
            }
        }
    }
}

/// Failed photo read with a dismiss button; picking again retries
#[component]
pub fn PhotoError(message: String, target: PhotoTarget) -> Element {
    let diary = use_diary();

    rsx! {
        div { class: "photo-error",
            span { "⚠ Could not add photo: {message}" }
            button {
                class: "photo-error__dismiss",
                onclick: move |_| dispatch(diary, Action::DismissPhotoError(target.clone())),
                "dismiss"
            }
        }
    }
}
