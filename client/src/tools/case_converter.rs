//! Identifier and prose case conversion.
//!
//! Input is first split into words: any non-alphanumeric character is a
//! separator, and a lowercase-to-uppercase transition starts a new word
//! (`fooBar`), as does the last capital of an acronym run (`HTTPServer`).

#[cfg(test)]
#[path = "case_converter_test.rs"]
mod case_converter_test;

use leptos::prelude::*;

use crate::util::clipboard::copy_text;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Case {
    Camel,
    Pascal,
    Snake,
    Kebab,
    Constant,
    Title,
    Upper,
    Lower,
}

impl Case {
    pub const ALL: [Self; 8] = [
        Self::Camel,
        Self::Pascal,
        Self::Snake,
        Self::Kebab,
        Self::Constant,
        Self::Title,
        Self::Upper,
        Self::Lower,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Camel => "camelCase",
            Self::Pascal => "PascalCase",
            Self::Snake => "snake_case",
            Self::Kebab => "kebab-case",
            Self::Constant => "CONSTANT_CASE",
            Self::Title => "Title Case",
            Self::Upper => "UPPER CASE",
            Self::Lower => "lower case",
        }
    }
}

pub fn split_words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower) {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

pub fn convert(input: &str, case: Case) -> String {
    let words = split_words(input);
    let lower = || words.iter().map(|w| w.to_lowercase());
    let upper = || words.iter().map(|w| w.to_uppercase());
    match case {
        Case::Camel => words
            .iter()
            .enumerate()
            .map(|(i, w)| if i == 0 { w.to_lowercase() } else { capitalize(w) })
            .collect(),
        Case::Pascal => words.iter().map(|w| capitalize(w)).collect(),
        Case::Snake => lower().collect::<Vec<_>>().join("_"),
        Case::Kebab => lower().collect::<Vec<_>>().join("-"),
        Case::Constant => upper().collect::<Vec<_>>().join("_"),
        Case::Title => words.iter().map(|w| capitalize(w)).collect::<Vec<_>>().join(" "),
        Case::Upper => input.to_uppercase(),
        Case::Lower => input.to_lowercase(),
    }
}

#[component]
pub fn CaseConverter() -> impl IntoView {
    let input = RwSignal::new(String::new());

    view! {
        <div class="tool-widget case-converter">
            <textarea
                class="tool-widget__input"
                rows="4"
                placeholder="Type or paste text"
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
            ></textarea>
            <dl class="tool-widget__output case-converter__results">
                {Case::ALL
                    .into_iter()
                    .map(|case| {
                        let converted = move || input.with(|text| convert(text, case));
                        view! {
                            <div class="case-converter__row">
                                <dt>{case.label()}</dt>
                                <dd>
                                    <code>{converted}</code>
                                    <button class="btn btn--small" on:click=move |_| {
                                        copy_text(&input.with_untracked(|text| convert(text, case)));
                                    }>
                                        "Copy"
                                    </button>
                                </dd>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </dl>
        </div>
    }
}
