//! Live Markdown to HTML preview.
//!
//! Raw HTML in the source is shown as text rather than injected, so the
//! preview can be set with `inner_html` without running user markup.

#[cfg(test)]
#[path = "markdown_preview_test.rs"]
mod markdown_preview_test;

use leptos::prelude::*;
use pulldown_cmark::{Event, Options, Parser, html};

use crate::util::clipboard::copy_text;

pub fn render_markdown(source: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[component]
pub fn MarkdownPreview() -> impl IntoView {
    let source = RwSignal::new("# Hello\n\nType some *Markdown* here.".to_owned());
    let rendered = Memo::new(move |_| source.with(|text| render_markdown(text)));

    view! {
        <div class="tool-widget markdown-preview">
            <div class="markdown-preview__panes">
                <textarea
                    class="tool-widget__input tool-widget__input--mono"
                    rows="16"
                    prop:value=move || source.get()
                    on:input=move |ev| source.set(event_target_value(&ev))
                ></textarea>
                <article class="markdown-preview__output" inner_html=move || rendered.get()></article>
            </div>
            <button class="btn btn--small" on:click=move |_| {
                rendered.with_untracked(|markup| copy_text(markup));
            }>
                "Copy HTML"
            </button>
        </div>
    }
}
