//! Token types produced by the lexer
//!
//!     The token stream is flat and strictly ordered: tokens appear in the order of the source
//!     lines they describe, and consumers rely on that order.
//!
//!     Content:
//!         One logical line with its indentation stripped. An empty payload is a blank line
//!         placeholder, only produced when blank lines are requested.
//!     IndentBy / DedentBy:
//!         Structural markers, similar to open/close braces in c-style languages. The payload is
//!         the number of indent units the level changed by and is always at least one.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Token {
    Content(String),
    IndentBy(usize),
    DedentBy(usize),
}

impl Token {
    pub fn content(text: impl Into<String>) -> Self {
        Token::Content(text.into())
    }

    pub fn is_content(&self) -> bool {
        matches!(self, Token::Content(_))
    }

    /// True for IndentBy and DedentBy.
    pub fn is_structural(&self) -> bool {
        matches!(self, Token::IndentBy(_) | Token::DedentBy(_))
    }

    /// Net change in indent units: positive for IndentBy, negative for DedentBy.
    pub fn level_delta(&self) -> isize {
        match self {
            Token::Content(_) => 0,
            Token::IndentBy(levels) => *levels as isize,
            Token::DedentBy(levels) => -(*levels as isize),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Content(text) => write!(f, "Content({text:?})"),
            Token::IndentBy(levels) => write!(f, "IndentBy({levels})"),
            Token::DedentBy(levels) => write!(f, "DedentBy({levels})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Token::content("a b").to_string(), "Content(\"a b\")");
        assert_eq!(Token::IndentBy(2).to_string(), "IndentBy(2)");
        assert_eq!(Token::DedentBy(1).to_string(), "DedentBy(1)");
    }

    #[test]
    fn test_level_delta() {
        let tokens = [
            Token::content("a"),
            Token::IndentBy(2),
            Token::content("b"),
            Token::DedentBy(2),
        ];
        assert_eq!(tokens.iter().map(Token::level_delta).sum::<isize>(), 0);
        assert!(tokens[1].is_structural());
        assert!(tokens[0].is_content());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_string(&Token::content("x")).unwrap();
        assert_eq!(json, r#"{"type":"Content","value":"x"}"#);
        let json = serde_json::to_string(&Token::IndentBy(1)).unwrap();
        assert_eq!(json, r#"{"type":"IndentBy","value":1}"#);
    }
}
