//! Shelf Viewer Modal
//!
//! Opens a shelf item: books and sketchbooks are paged notebooks, albums
//! collect photos, records just spin.
//!
//! Turning a page or closing the item keeps what was written on the page.

use diary_core::{Action, PhotoTarget, ShelfDialog, ShelfKind};
use dioxus::prelude::*;

use crate::components::markdown_editor::{MarkdownEditor, MarkdownRenderer};
use crate::components::photos::{PhotoError, PhotoPicker, PhotoTile};
use crate::context::{dispatch, use_diary};

/// Placeholder frames shown in an album
const ALBUM_FRAMES: usize = 4;

/// Ruled lines drawn on an empty book page
const PAGE_LINES: usize = 15;

#[component]
pub fn ShelfViewer() -> Element {
    let diary = use_diary();
    let Some(dialog) = diary.read().shelf_dialog().cloned() else {
        return rsx! {};
    };

    let kind = dialog.item.kind;

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| dispatch(diary, Action::CloseShelfItem),

            div {
                class: "modal shelf-viewer",
                onclick: move |e| e.stop_propagation(),

                {match kind {
                    ShelfKind::Book => rsx! { BookView { dialog } },
                    ShelfKind::Sketchbook => rsx! { SketchbookView { dialog } },
                    ShelfKind::PhotoAlbum => rsx! { AlbumView { dialog } },
                    ShelfKind::Vinyl => rsx! { VinylView { dialog } },
                }}
            }
        }
    }
}

#[component]
fn BookView(dialog: ShelfDialog) -> Element {
    let diary = use_diary();
    let (left, right) = dialog.spread();

    rsx! {
        div { class: "book",
            div { class: "book__spread",
                div { class: "book__page",
                    span { class: "book__page-number", "{left}" }
                    textarea {
                        class: "book__text",
                        value: "{dialog.page_text}",
                        oninput: move |e| dispatch(diary, Action::EditPageText(e.value())),
                        placeholder: "Start writing...",
                    }
                }
                div { class: "book__page",
                    span { class: "book__page-number", "{right}" }
                    if dialog.page_text.trim().is_empty() {
                        div { class: "book__lines",
                            for i in 0..PAGE_LINES {
                                div { key: "{i}", class: "book__line" }
                            }
                        }
                    } else {
                        MarkdownRenderer { content: dialog.page_text.clone() }
                    }
                }
            }
            PageNav { dialog: dialog.clone() }
        }
    }
}

#[component]
fn SketchbookView(dialog: ShelfDialog) -> Element {
    let diary = use_diary();
    let sheet = dialog.page + 1;

    rsx! {
        div { class: "sketchbook",
            h3 { class: "shelf-viewer__title", "{dialog.item.title}" }
            p { class: "sketchbook__sheet", "sheet {sheet}" }
            MarkdownEditor {
                content: dialog.page_text.clone(),
                on_change: move |text| dispatch(diary, Action::EditPageText(text)),
                placeholder: "Ideas, sketches in words, colors to try...".to_string(),
            }
            PageNav { dialog: dialog.clone() }
        }
    }
}

/// Back / forward buttons shared by paged items
#[component]
fn PageNav(dialog: ShelfDialog) -> Element {
    let diary = use_diary();

    rsx! {
        div { class: "page-nav",
            button {
                class: "btn-secondary",
                disabled: !dialog.can_go_back(),
                onclick: move |_| dispatch(diary, Action::PrevPage),
                "‹ Back"
            }
            span { class: "page-nav__title", "{dialog.item.title}" }
            button {
                class: "btn-secondary",
                onclick: move |_| dispatch(diary, Action::NextPage),
                "Forward ›"
            }
        }
    }
}

#[component]
fn AlbumView(dialog: ShelfDialog) -> Element {
    let diary = use_diary();
    let id = dialog.item.id.clone();
    let photos = diary.read().shelf().photos(&id).to_vec();
    let captions: Vec<String> = (photos.len()..ALBUM_FRAMES)
        .map(|i| format!("Photo {}", i + 1))
        .collect();

    rsx! {
        div { class: "album",
            div { class: "album__pages",
                h3 { class: "shelf-viewer__title", "{dialog.item.title}" }
                div { class: "album__grid",
                    for (i, photo) in photos.into_iter().enumerate() {
                        div { key: "photo-{i}", class: "album__frame",
                            PhotoTile { photo, alt: format!("Photo {}", i + 1) }
                        }
                    }
                    for caption in captions {
                        div { key: "{caption}", class: "album__frame album__frame--empty",
                            div { class: "album__placeholder", "📷" }
                            p { class: "album__caption", "{caption}" }
                        }
                    }
                }
                PhotoPicker { target: PhotoTarget::Shelf(id.clone()), label: "add to album".to_string() }
                if let Some(err) = dialog.photo_error.clone() {
                    PhotoError { message: err, target: PhotoTarget::Shelf(id) }
                }
            }
            CloseButton { label: "Close album".to_string() }
        }
    }
}

#[component]
fn VinylView(dialog: ShelfDialog) -> Element {
    rsx! {
        div { class: "vinyl",
            div { class: "vinyl__stage",
                div {
                    class: "vinyl__record",
                    style: "background: {dialog.item.color};",
                    div { class: "vinyl__label", "🎵" }
                }
                h3 { class: "vinyl__title", "{dialog.item.title}" }
                p { class: "vinyl__subtitle", "rock classics" }
            }
            CloseButton { label: "Close".to_string() }
        }
    }
}

#[component]
fn CloseButton(label: String) -> Element {
    let diary = use_diary();

    rsx! {
        button {
            class: "btn-primary btn-wide",
            onclick: move |_| dispatch(diary, Action::CloseShelfItem),
            "{label}"
        }
    }
}
