//! Tool widgets and the registry that maps catalog ids to them.
//!
//! SYSTEM CONTEXT
//! ==============
//! The catalog lists every tool; only some have a working widget. This
//! module is the single place that pairs a tool id with its widget. `App`
//! calls [`build_registry`] once and shares the result through context.
//!
//! DESIGN
//! ======
//! A widget is a plain function returning an erased view. Function pointers
//! are `Copy`, compare by address, and need no allocation, which keeps the
//! registry cheap to clone into every route.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod base64_codec;
pub mod case_converter;
pub mod color_converter;
pub mod hash_generator;
pub mod json_formatter;
pub mod markdown_preview;
pub mod url_codec;
pub mod uuid_generator;
pub mod word_counter;

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use catalog::Registry;

/// Renders one tool's interactive UI.
pub type Widget = fn() -> AnyView;

/// Implemented widgets, keyed by catalog tool id.
pub const WIDGETS: &[(&str, Widget)] = &[
    ("uuid-generator", uuid_generator_widget),
    ("hash-generator", hash_generator_widget),
    ("base64-encoder", base64_codec_widget),
    ("url-encoder", url_codec_widget),
    ("json-formatter", json_formatter_widget),
    ("case-converter", case_converter_widget),
    ("word-counter", word_counter_widget),
    ("color-converter", color_converter_widget),
    ("markdown-previewer", markdown_preview_widget),
];

/// Build the application's tool registry.
pub fn build_registry() -> Registry<Widget> {
    Registry::build(WIDGETS.iter().copied())
}

fn uuid_generator_widget() -> AnyView {
    view! { <uuid_generator::UuidGenerator/> }.into_any()
}

fn hash_generator_widget() -> AnyView {
    view! { <hash_generator::HashGenerator/> }.into_any()
}

fn base64_codec_widget() -> AnyView {
    view! { <base64_codec::Base64Codec/> }.into_any()
}

fn url_codec_widget() -> AnyView {
    view! { <url_codec::UrlCodec/> }.into_any()
}

fn json_formatter_widget() -> AnyView {
    view! { <json_formatter::JsonFormatter/> }.into_any()
}

fn case_converter_widget() -> AnyView {
    view! { <case_converter::CaseConverter/> }.into_any()
}

fn word_counter_widget() -> AnyView {
    view! { <word_counter::WordCounter/> }.into_any()
}

fn color_converter_widget() -> AnyView {
    view! { <color_converter::ColorConverter/> }.into_any()
}

fn markdown_preview_widget() -> AnyView {
    view! { <markdown_preview::MarkdownPreview/> }.into_any()
}
