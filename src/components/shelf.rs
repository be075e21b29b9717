//! Shelf Component
//!
//! Wooden shelf with books, records, albums and sketchbooks standing on it.

use diary_core::{Action, ShelfItem, ShelfKind};
use dioxus::prelude::*;

use crate::context::{dispatch, use_diary};

#[component]
pub fn Shelf() -> Element {
    let diary = use_diary();
    let items: Vec<ShelfItem> = diary.read().catalog().iter().cloned().collect();

    rsx! {
        section { class: "card shelf-card",
            h2 { class: "section-title", "📚 my shelf" }

            div { class: "shelf",
                div { class: "shelf__items",
                    for (index, item) in items.into_iter().enumerate() {
                        ShelfSlot { key: "{item.id}", item: item.clone(), index }
                    }
                }
                div { class: "shelf__plank" }
            }
        }
    }
}

#[component]
fn ShelfSlot(item: ShelfItem, index: usize) -> Element {
    let diary = use_diary();
    let id = item.id.clone();
    // Items settle onto the shelf one after another
    let delay = index as f32 * 0.1;
    let title = item.title.clone();
    let glyph = item.kind.glyph();
    let color = item.color.clone();
    let rotation = item.rotation;
    let height = item.height;

    rsx! {
        button {
            class: "shelf-slot",
            style: "transform: rotate({rotation}deg); animation-delay: {delay}s;",
            onclick: move |_| dispatch(diary, Action::OpenShelfItem(id.clone())),

            if item.kind == ShelfKind::Vinyl {
                div {
                    class: "shelf-record",
                    style: "background: {color};",
                    div { class: "shelf-record__hole" }
                }
            } else {
                div {
                    class: "shelf-spine",
                    style: "background: {color}; height: {height}px;",
                    span { class: "shelf-spine__icon", "{glyph}" }
                    span { class: "shelf-spine__title", "{title}" }
                }
            }

            div { class: "shelf-slot__tooltip", "{title}" }
        }
    }
}
