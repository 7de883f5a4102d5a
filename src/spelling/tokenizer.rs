//! Word tokenizer
//!
//! Splits a document into lines (CR, LF and CRLF all terminate a line) and
//! extracts maximal runs of alphabetic characters from each line. Offsets are
//! counted in `char`s from the start of the line.

use lsp_types::Range;

use crate::lsp::types::word_range;

/// A single alphabetic run found in a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word<'a> {
    /// Zero-based line number
    pub line: u32,
    /// Zero-based character offset of the first letter within the line
    pub character: u32,
    /// The word as it appears in the document
    pub text: &'a str,
}

impl Word<'_> {
    /// Range the word covers on its line
    pub fn range(&self) -> Range {
        word_range(self.line, self.character, self.text.chars().count() as u32)
    }
}

/// Iterator over the lines of a text, treating `\r`, `\n` and `\r\n` as
/// terminators. A trailing terminator does not produce an empty final line.
pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let Some(end) = self.rest.find(['\r', '\n']) else {
            let line = self.rest;
            self.rest = "";
            return Some(line);
        };

        let line = &self.rest[..end];
        let terminator = if self.rest[end..].starts_with("\r\n") {
            2
        } else {
            1
        };
        self.rest = &self.rest[end + terminator..];
        Some(line)
    }
}

pub fn lines(text: &str) -> Lines<'_> {
    Lines { rest: text }
}

/// Extracts the alphabetic runs of a single line as `(offset, word)` pairs
fn line_words(line: &str) -> Vec<(u32, &str)> {
    let mut words = Vec::new();
    // (byte index, char offset) of the run currently being scanned
    let mut start: Option<(usize, u32)> = None;

    for (offset, (index, ch)) in line.char_indices().enumerate() {
        if ch.is_alphabetic() {
            if start.is_none() {
                start = Some((index, offset as u32));
            }
        } else if let Some((begin, character)) = start.take() {
            words.push((character, &line[begin..index]));
        }
    }

    if let Some((begin, character)) = start {
        words.push((character, &line[begin..]));
    }

    words
}

/// Returns every word of `text` in document order
pub fn words(text: &str) -> Vec<Word<'_>> {
    lines(text)
        .enumerate()
        .flat_map(|(line, content)| {
            line_words(content)
                .into_iter()
                .map(move |(character, text)| Word {
                    line: line as u32,
                    character,
                    text,
                })
        })
        .collect()
}
