use lsp_types::Diagnostic;

use crate::lsp::types::spelling_diagnostic;
use crate::spelling::{WordSet, check_spelling};

/// Generates one error diagnostic per misspelled word in `content`
pub fn generate_diagnostics(words: &WordSet, content: &str) -> Vec<Diagnostic> {
    check_spelling(content, words)
        .into_iter()
        .map(spelling_diagnostic)
        .collect()
}
