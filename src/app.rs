use dioxus::prelude::*;
use diary_core::DiaryState;

use crate::context::get_config;
use crate::pages::Diary;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The diary: calendar, notes and shelf
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Diary {},
}

/// Root application component.
///
/// Provides global styles, diary state, configuration and routing.
#[component]
pub fn App() -> Element {
    // One in-memory diary for the whole session
    let diary: Signal<DiaryState> = use_signal(DiaryState::new);

    use_context_provider(|| diary);
    use_context_provider(get_config);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
