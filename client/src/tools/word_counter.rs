//! Word, character, and reading-time statistics.

#[cfg(test)]
#[path = "word_counter_test.rs"]
mod word_counter_test;

use leptos::prelude::*;

/// Average silent reading speed used for the reading-time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextStats {
    pub words: usize,
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub lines: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    pub reading_minutes: usize,
}

pub fn count(text: &str) -> TextStats {
    if text.trim().is_empty() {
        return TextStats { characters: text.chars().count(), ..TextStats::default() };
    }
    let words = text.split_whitespace().count();
    TextStats {
        words,
        characters: text.chars().count(),
        characters_no_spaces: text.chars().filter(|c| !c.is_whitespace()).count(),
        lines: text.lines().count(),
        sentences: count_sentences(text),
        paragraphs: text.split("\n\n").filter(|p| !p.trim().is_empty()).count(),
        reading_minutes: words.div_ceil(WORDS_PER_MINUTE),
    }
}

/// Runs of `.`, `!`, or `?` end a sentence; trailing text without a
/// terminator counts as one more.
fn count_sentences(text: &str) -> usize {
    let mut sentences = 0;
    let mut pending = false;
    let mut in_terminator = false;
    for c in text.chars() {
        if matches!(c, '.' | '!' | '?') {
            if pending && !in_terminator {
                sentences += 1;
            }
            pending = false;
            in_terminator = true;
        } else {
            in_terminator = false;
            if c.is_alphanumeric() {
                pending = true;
            }
        }
    }
    if pending {
        sentences += 1;
    }
    sentences
}

#[component]
pub fn WordCounter() -> impl IntoView {
    let input = RwSignal::new(String::new());
    let stats = Memo::new(move |_| input.with(|text| count(text)));

    let stat = move |label: &'static str, value: fn(&TextStats) -> usize| {
        view! {
            <div class="word-counter__stat">
                <span class="word-counter__value">{move || value(&stats.get())}</span>
                <span class="word-counter__label">{label}</span>
            </div>
        }
    };

    view! {
        <div class="tool-widget word-counter">
            <textarea
                class="tool-widget__input"
                rows="10"
                placeholder="Start typing or paste your text"
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
            ></textarea>
            <div class="tool-widget__output word-counter__grid">
                {stat("Words", |s| s.words)}
                {stat("Characters", |s| s.characters)}
                {stat("Characters (no spaces)", |s| s.characters_no_spaces)}
                {stat("Lines", |s| s.lines)}
                {stat("Sentences", |s| s.sentences)}
                {stat("Paragraphs", |s| s.paragraphs)}
                {stat("Minutes to read", |s| s.reading_minutes)}
            </div>
        </div>
    }
}
