use std::io;

use compseg_core::SequenceError;
use thiserror::Error;

/// Error type for compseg-io operations.
#[derive(Error, Debug)]
pub enum CsvError {
    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input file could not be opened.
    #[error(transparent)]
    Sequence(#[from] SequenceError),

    /// Error raised by the csv reader or writer.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row could not be parsed.
    #[error("Malformed row on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// The first line is missing or is not the expected header.
    #[error("Missing or unexpected header, expected `{0}`")]
    MissingHeader(&'static str),
}

/// Result type alias for compseg-io operations.
pub type Result<T> = std::result::Result<T, CsvError>;
