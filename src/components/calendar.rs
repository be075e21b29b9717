//! Calendar Component
//!
//! Month grid of days; a day with a saved entry is filled in and marked.

use diary_core::{Action, DayIndex, Mood};
use dioxus::prelude::*;

use crate::context::{dispatch, use_config, use_diary};

#[component]
pub fn Calendar() -> Element {
    let diary = use_diary();
    let config = use_config();
    let month = config.month_label;

    rsx! {
        section { class: "card calendar",
            div { class: "calendar__header",
                h2 { class: "month-pill", "{month}" }
            }

            div { class: "calendar__grid",
                for day in DayIndex::all() {
                    DayCell {
                        key: "{day.get()}",
                        day,
                        filled: diary.read().days().contains(day),
                        onclick: move |_| dispatch(diary, Action::OpenDay(day)),
                    }
                }
            }
        }
    }
}

#[component]
fn DayCell(day: DayIndex, filled: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let glyph = Mood::for_day(day).glyph();
    let label = day.roman();
    let class = if filled {
        "day-cell day-cell--filled"
    } else {
        "day-cell"
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |e| onclick.call(e),
            if filled {
                span { class: "day-cell__dot" }
            }
            span { class: "day-cell__icon", "{glyph}" }
            span { class: "day-cell__label", "{label}" }
        }
    }
}
