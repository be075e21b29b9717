//! Sidebar Component
//!
//! Profile card and running totals for the month.

use diary_core::DAYS_IN_MONTH;
use dioxus::prelude::*;

use crate::context::{use_config, use_diary};

#[component]
pub fn Sidebar() -> Element {
    let diary = use_diary();
    let config = use_config();

    let initials = config.initials();
    let name = config.profile_name;
    let tagline = config.tagline;
    let saved_days = diary.read().days().len();
    let shelf_size = diary.read().catalog().len();

    rsx! {
        aside { class: "sidebar",
            div { class: "profile",
                div { class: "profile__avatar", "{initials}" }
                h2 { class: "profile__name", "{name}" }
                p { class: "profile__tagline", "{tagline}" }
            }

            div { class: "stats",
                StatCard {
                    icon: "📅".to_string(),
                    label: "activity".to_string(),
                    value: format!("{} / {}", saved_days, DAYS_IN_MONTH),
                }
                StatCard {
                    icon: "📚".to_string(),
                    label: "on the shelf".to_string(),
                    value: shelf_size.to_string(),
                }
            }
        }
    }
}

#[component]
fn StatCard(icon: String, label: String, value: String) -> Element {
    rsx! {
        div { class: "stat-card",
            div { class: "stat-card__header",
                span { class: "stat-card__icon", "{icon}" }
                span { class: "stat-card__label", "{label}" }
            }
            p { class: "stat-card__value", "{value}" }
        }
    }
}
