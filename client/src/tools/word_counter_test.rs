use super::*;

#[test]
fn empty_text_has_no_words() {
    assert_eq!(count(""), TextStats::default());
    let blank = count("   \n ");
    assert_eq!(blank.words, 0);
    assert_eq!(blank.characters, 5);
    assert_eq!(blank.reading_minutes, 0);
}

#[test]
fn counts_words_and_characters() {
    let stats = count("Hello brave  new world");
    assert_eq!(stats.words, 4);
    assert_eq!(stats.characters, 22);
    assert_eq!(stats.characters_no_spaces, 18);
    assert_eq!(stats.lines, 1);
}

#[test]
fn characters_are_unicode_scalars() {
    assert_eq!(count("héllo").characters, 5);
}

#[test]
fn counts_sentences_ignoring_repeated_punctuation() {
    assert_eq!(count("One. Two! Three?").sentences, 3);
    assert_eq!(count("Wait... what?!").sentences, 2);
    assert_eq!(count("No terminator here").sentences, 1);
    assert_eq!(count("...").sentences, 0);
}

#[test]
fn counts_lines_and_paragraphs() {
    let stats = count("First para\nstill first.\n\nSecond para.\n\n\n");
    assert_eq!(stats.lines, 6);
    assert_eq!(stats.paragraphs, 2);
}

#[test]
fn reading_time_rounds_up() {
    let text = "word ".repeat(WORDS_PER_MINUTE + 1);
    assert_eq!(count(&text).reading_minutes, 2);
    assert_eq!(count("short").reading_minutes, 1);
}
