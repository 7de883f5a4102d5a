//! Known-word vocabulary
//!
//! Word lists use one entry per line. Anything from the first `/` onwards
//! (Hunspell affix flags) is dropped and the remainder is trimmed. Case is
//! preserved exactly as written.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::spelling::error::WordListError;

/// Immutable set of known words, loaded once before the session starts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    /// Loads a word list from a file on disk
    pub fn load(path: &Path) -> Result<Self, WordListError> {
        let read_error = |source| WordListError::Read {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(read_error)?;
        let words = Self::from_reader(BufReader::new(file)).map_err(read_error)?;

        info!("Loaded {} words from {:?}", words.len(), path);
        Ok(words)
    }

    /// Reads a word list from any buffered reader
    pub fn from_reader(reader: impl BufRead) -> io::Result<Self> {
        let mut words = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            match parse_entry(&line) {
                Some(word) => {
                    words.insert(word.to_string());
                }
                None => debug!("Skipping blank word list entry"),
            }
        }
        Ok(Self { words })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Extracts the known word from a single word-list line
fn parse_entry(line: &str) -> Option<&str> {
    let word = line.split('/').next().unwrap_or_default().trim();
    (!word.is_empty()).then_some(word)
}
