use std::sync::LazyLock;

use regex::Regex;

static SENTENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.!?]+[.!?]*").unwrap());

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{Alphabetic}\p{N}][\p{Alphabetic}\p{N}'-]*").unwrap());

/// Splits text into ordered sentence slices.
pub fn sentences(text: &str) -> Vec<&str> {
    SENTENCE_RE
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Splits a sentence into ordered word tokens. Tokens keep their original
/// case and internal apostrophes/hyphens; surrounding punctuation is dropped.
pub fn words(sentence: &str) -> Vec<String> {
    WORD_RE
        .find_iter(sentence)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Per-sentence word tokens, the shape the embedding trainer consumes.
pub fn tokenized_sentences(text: &str) -> Vec<Vec<String>> {
    sentences(text).into_iter().map(words).collect()
}
