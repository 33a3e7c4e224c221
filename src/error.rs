// WHY: Typed errors so callers can tell a missing marker from an undefined accuracy
// The binary wraps these in anyhow; library callers match on the variants

use std::io;

use thiserror::Error;

/// Errors produced by the text preparation utilities.
#[derive(Error, Debug)]
pub enum TextPrepError {
    /// No `*** START OF THE PROJECT GUTENBERG EBOOK ... ***` line in the text
    #[error("Start marker not found in text")]
    MarkerNotFound,

    /// Accuracy against an empty reference list is undefined
    #[error("Reference sentence list is empty; accuracy is undefined")]
    EmptyReference,

    /// A built-in pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex_automata::meta::BuildError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A sentence list line could not be parsed (line numbers are 1-based)
    #[error("Malformed sentence list at line {line}: {message}")]
    SentenceFormat { line: usize, message: String },
}

impl From<walkdir::Error> for TextPrepError {
    fn from(err: walkdir::Error) -> Self {
        TextPrepError::Io(err.into())
    }
}

pub type Result<T> = std::result::Result<T, TextPrepError>;
