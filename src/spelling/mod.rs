//! Spelling layer
//! - tokenizer.rs: Line splitting and alphabetic word extraction
//! - wordset.rs: Known-word vocabulary and word-list loading
//! - checker.rs: Flags words missing from the vocabulary
//! - error.rs: Word-list errors

pub mod checker;
pub mod error;
pub mod tokenizer;
pub mod wordset;

pub use checker::check_spelling;
pub use error::WordListError;
pub use wordset::WordSet;
