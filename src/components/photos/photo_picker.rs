//! Photo Picker Component
//!
//! Native file picker that embeds the chosen image into the open dialog.

use diary_core::{ingest_file, Action, PhotoTarget, PHOTO_EXTENSIONS};
use dioxus::prelude::*;
use rfd::FileDialog;

use crate::context::{dispatch, use_diary};

/// "Add photo" tile
///
/// Takes an ingest ticket before the picker opens, so a result that arrives
/// after its dialog was closed is dropped by the diary instead of landing in
/// another entry.
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     PhotoPicker {
///         target: PhotoTarget::Day(day),
///     }
/// }
/// ```
#[component]
pub fn PhotoPicker(
    /// Dialog the photo belongs to
    target: PhotoTarget,
    /// Tile label
    #[props(default = "add photo".to_string())]
    label: String,
) -> Element {
    let diary = use_diary();
    let mut picking = use_signal(|| false);

    let handle_pick = move |_| {
        let ticket = match diary.read().photo_ticket(target.clone()) {
            Ok(ticket) => ticket,
            Err(e) => {
                tracing::debug!("Photo pick refused: {}", e);
                return;
            }
        };
        picking.set(true);

        spawn(async move {
            // Open file picker (blocking, but in spawn so UI stays responsive)
            let picked = tokio::task::spawn_blocking(|| {
                FileDialog::new()
                    .add_filter("images", PHOTO_EXTENSIONS)
                    .set_title("Select Photo")
                    .pick_file()
            })
            .await;

            let action = match picked {
                Ok(Some(path)) => match ingest_file(&path).await {
                    Ok(photo) => Some(Action::PhotoIngested { ticket, photo }),
                    Err(e) => Some(Action::PhotoFailed {
                        ticket,
                        reason: e.to_string(),
                    }),
                },
                // User cancelled
                Ok(None) => None,
                Err(e) => Some(Action::PhotoFailed {
                    ticket,
                    reason: format!("File picker error: {}", e),
                }),
            };

            picking.set(false);
            if let Some(action) = action {
                dispatch(diary, action);
            }
        });
    };

    rsx! {
        button {
            class: "photo-picker",
            onclick: handle_pick,
            disabled: picking(),
            title: "{label}",
            if picking() {
                span { class: "photo-picker__icon", "⏳" }
            } else {
                span { class: "photo-picker__icon", "+" }
            }
            span { class: "photo-picker__label", "{label}" }
        }
    }
}
