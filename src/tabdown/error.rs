//! Error types for lexing and parsing
//!
//! Every error is fatal for the operation that raised it: a document is either accepted
//! whole or rejected, there is no recovery or resynchronization.

use thiserror::Error;

/// Errors produced while configuring, lexing or parsing a tabdown document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabdownError {
    /// The indentation unit is empty or is not made of a single whitespace kind.
    #[error("invalid indentation unit {unit:?}: must be tabs xor spaces")]
    Configuration { unit: String },

    /// A content line's leading whitespace contains the other whitespace kind.
    #[error("line {line}, column {column}: cannot mix tabs and spaces in indentation")]
    MixedIndentation { line: usize, column: usize },

    /// A dedent landed between two open indentation levels.
    #[error(
        "line {line}: inconsistent indentation: dedent to {found} unit(s) does not match \
         an open level (nearest open level is {nearest})"
    )]
    InconsistentIndentation {
        line: usize,
        found: usize,
        nearest: usize,
    },

    /// The tree builder received a token stream that disagrees with its own parent stack.
    /// Token streams from [Lexer](crate::tabdown::lexing::Lexer) never trigger this.
    #[error("structural inconsistency: {reason}")]
    StructuralInconsistency { reason: String },

    /// The lexer session already finished or already failed.
    #[error("lexer session is closed")]
    SessionClosed,
}

impl TabdownError {
    pub(crate) fn structural(reason: impl Into<String>) -> Self {
        TabdownError::StructuralInconsistency {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TabdownError>;
