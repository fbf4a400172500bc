//! Tokenization and sentence splitting

use regex::Regex;
use std::sync::LazyLock;

/// Anything that is neither a word character, whitespace, nor a hyphen
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("static pattern compiles"));

/// Lower-case and replace every character that is not a word character,
/// whitespace, or hyphen with a space
///
/// Never fails: arbitrary input (control characters, emoji, markup) is
/// reduced to whitespace-separated word fragments.
pub fn sanitize(text: &str) -> String {
    NON_WORD.replace_all(&text.to_lowercase(), " ").into_owned()
}

/// Split text into lower-cased alphanumeric tokens
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}

/// Split text into whitespace-separated words with edge punctuation removed,
/// case preserved
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .collect()
}

/// Split text into sentences on terminal punctuation
///
/// Fragments without any alphanumeric character are dropped.
pub fn sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| s.chars().any(char::is_alphanumeric))
        .collect()
}
