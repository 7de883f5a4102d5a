//! Spell checker
//!
//! A word is accepted if it is in the word set as written, or if lower-casing
//! only its first character ("detitling") yields a known word. The second rule
//! lets sentence-initial capitals through without accepting arbitrary casing.

use std::borrow::Cow;

use lsp_types::Range;

use crate::spelling::tokenizer::words;
use crate::spelling::wordset::WordSet;

/// Returns the ranges of every unknown word in `text`, in document order.
///
/// Repeated occurrences of the same misspelling each get their own range.
pub fn check_spelling(text: &str, known_words: &WordSet) -> Vec<Range> {
    words(text)
        .into_iter()
        .filter(|word| !is_known(word.text, known_words))
        .map(|word| word.range())
        .collect()
}

fn is_known(word: &str, known_words: &WordSet) -> bool {
    known_words.contains(word) || known_words.contains(&detitle(word))
}

/// Lower-cases the first character of `word`, leaving the rest untouched
pub fn detitle(word: &str) -> Cow<'_, str> {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if !first.is_lowercase() => {
            let mut detitled: String = first.to_lowercase().collect();
            detitled.push_str(chars.as_str());
            Cow::Owned(detitled)
        }
        _ => Cow::Borrowed(word),
    }
}
