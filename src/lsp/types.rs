//! Protocol data types exchanged with the client

use lsp_types::{Diagnostic, DiagnosticSeverity, Position, Range};
use serde::{Deserialize, Serialize};

/// Range covering a word of `len` characters starting at `(line, offset)`.
/// `character` counts `char`s.
pub fn word_range(line: u32, offset: u32, len: u32) -> Range {
    Range::new(Position::new(line, offset), Position::new(line, offset + len))
}

/// Error-severity diagnostic with an empty message
pub fn spelling_diagnostic(range: Range) -> Diagnostic {
    Diagnostic {
        range,
        severity: Some(DiagnosticSeverity::ERROR),
        message: String::new(),
        ..Default::default()
    }
}

/// Snapshot of a document taken from a single open/change notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocument {
    pub uri: String,
    pub text: String,
    pub version: Option<i64>,
}

/// Params of `textDocument/didOpen` and `textDocument/didChange`.
///
/// didOpen carries the text on `textDocument`, didChange carries it in
/// `contentChanges`; both shapes are accepted here.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentChangeParams {
    pub text_document: DocumentIdentifier,
    #[serde(default)]
    pub content_changes: Vec<ContentChange>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentIdentifier {
    pub uri: String,
    #[serde(default)]
    pub version: Option<i64>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentChange {
    pub text: String,
}

/// Params of `textDocument/publishDiagnostics`. `version` is always emitted,
/// as `null` when the document carried none, and `uri` is echoed unparsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishDiagnosticsParams {
    pub uri: String,
    pub version: Option<i64>,
    pub diagnostics: Vec<Diagnostic>,
}
