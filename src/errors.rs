/*!
 * Error types for the polint application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors produced while decoding one quoted, escaped catalog line.
///
/// The decoder is a pure function of a single line and knows nothing about
/// line numbers; the parser wraps these into [`ParseError::Escape`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EscapeError {
    /// An escape sequence other than `\t`, `\n`, `\\` or `\"`
    #[error("unknown escape sequence >>\\{0}<<")]
    UnknownEscape(char),

    /// A character found outside any double-quoted segment
    #[error("character {0:?} not inside double quotes")]
    OutsideQuotes(char),

    /// Line ended while still inside a quoted segment
    #[error("quoted string is not terminated")]
    Unterminated,

    /// Line ended in the middle of an escape sequence
    #[error("unfinished escape sequence at end of line")]
    UnfinishedEscape,
}

/// Errors that abort the parse of one catalog file.
///
/// Every variant carries the 1-based line number of the offending line so the
/// reporting layer can point at the input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// A line failed string decoding
    #[error("line {line}: {source}")]
    Escape {
        /// Offending line number
        line: usize,
        /// Underlying decoder error
        source: EscapeError,
    },

    /// The first non-comment line is not a msgid declaration
    #[error("line {line}: expected beginning of msgid")]
    ExpectedMsgid {
        /// Offending line number
        line: usize,
    },

    /// A msgid keyword not directly followed by a quoted string
    #[error("line {line}: msgid does not directly continue with a string")]
    MsgidWithoutString {
        /// Offending line number
        line: usize,
    },

    /// A new msgid started while the entry from `started_at` has no msgstr yet
    #[error("line {line}: start of new entry, but entry from line {started_at} is not complete")]
    PreviousEntryIncomplete {
        /// Offending line number
        line: usize,
        /// Line where the incomplete entry began
        started_at: usize,
    },

    /// A second msgstr for the entry from `started_at`
    #[error("line {line}: duplicate msgstr for entry from line {started_at}")]
    DuplicateMsgstr {
        /// Offending line number
        line: usize,
        /// Line where the entry began
        started_at: usize,
    },

    /// Input ended while the entry from `started_at` had no msgstr
    #[error("line {line}: end of file, but entry from line {started_at} is not complete")]
    UnexpectedEof {
        /// Last line number of the input
        line: usize,
        /// Line where the incomplete entry began
        started_at: usize,
    },

    /// Input contained no entries at all
    #[error("catalog contains no entries")]
    EmptyCatalog,
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from catalog parsing
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
