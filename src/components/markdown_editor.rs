//! Markdown Editor and Renderer
//!
//! Edit/preview toggle and read-only markdown display for shelf pages.

use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

/// Convert page markdown to HTML
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(source, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Markdown editor with a preview toggle
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     MarkdownEditor {
///         content: dialog.page_text.clone(),
///         on_change: move |text| dispatch(diary, Action::EditPageText(text)),
///     }
/// }
/// ```
#[component]
pub fn MarkdownEditor(
    /// Current markdown content
    content: ReadOnlySignal<String>,
    /// Callback when content changes
    on_change: EventHandler<String>,
    #[props(default = "Write your thoughts...".to_string())] placeholder: String,
) -> Element {
    let mut preview_mode = use_signal(|| false);

    let html_preview = use_memo(move || render_markdown(&content()));

    rsx! {
        div { class: "markdown-editor",
            div { class: "markdown-toolbar",
                button {
                    class: if !preview_mode() { "active" } else { "" },
                    onclick: move |_| preview_mode.set(false),
                    "write"
                }
                button {
                    class: if preview_mode() { "active" } else { "" },
                    onclick: move |_| preview_mode.set(true),
                    "preview"
                }
            }

            if preview_mode() {
                div {
                    class: "markdown-preview page-markdown",
                    dangerous_inner_html: "{html_preview()}",
                }
            } else {
                textarea {
                    class: "markdown-textarea",
                    value: "{content()}",
                    oninput: move |e| on_change.call(e.value()),
                    placeholder: "{placeholder}",
                }
            }
        }
    }
}

/// Read-only markdown display
#[component]
pub fn MarkdownRenderer(
    /// Markdown content to render
    content: ReadOnlySignal<String>,
) -> Element {
    let html_content = use_memo(move || render_markdown(&content()));

    rsx! {
        div {
            class: "page-markdown",
            dangerous_inner_html: "{html_content()}",
        }
    }
}
