//! Lexing
//!
//! This module turns tabdown text into a flat token stream.
//!
//! Structure:
//!     - [indent_unit]: the validated whitespace string that makes one nesting level.
//!     - [indent_stack]: open indentation steps with their running total.
//!     - [tokens]: the Content / IndentBy / DedentBy token type.
//!     - [lexer]: the incremental, character-level state machine.
//!
//! Indentation Handling
//!
//!     Leading whitespace is measured in whole indent units. A content line deeper than the
//!     previous one opens a level with a single IndentBy carrying the full step, however
//!     many units it spans. A shallower line closes levels one DedentBy per open step and
//!     must land exactly on a level that was opened before, as in Python.

pub mod indent_stack;
pub mod indent_unit;
pub mod lexer;
pub mod tokens;

pub use indent_stack::IndentStack;
pub use indent_unit::IndentUnit;
pub use lexer::Lexer;
pub use tokens::Token;

use crate::tabdown::config::LexerConfig;
use crate::tabdown::error::Result;

/// Lex a whole document with `config`.
///
/// Equivalent to feeding `source` to a fresh [Lexer] in one chunk and finishing it. On
/// error no tokens are returned.
pub fn lex(source: &str, config: &LexerConfig) -> Result<Vec<Token>> {
    Lexer::new(config).lex(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_matches_feed_and_finish() {
        let source = "a\n b\n  c\n d\ne";
        let config = LexerConfig::default();

        let mut lexer = Lexer::new(&config);
        let mut tokens = Vec::new();
        for ch in source.chars() {
            tokens.extend(lexer.feed(&ch.to_string()).unwrap());
        }
        tokens.extend(lexer.finish().unwrap());

        assert_eq!(lex(source, &config).unwrap(), tokens);
    }

    #[test]
    fn test_lex_blank_line_placement() {
        let config = LexerConfig::new().with_blank_lines(true);
        assert_eq!(
            lex("A\n B\n\n C", &config).unwrap(),
            vec![
                Token::content("A"),
                Token::IndentBy(1),
                Token::content("B"),
                Token::content(""),
                Token::content("C"),
                Token::DedentBy(1),
            ]
        );
        assert_eq!(
            lex("A\n B\n\nC", &config).unwrap(),
            vec![
                Token::content("A"),
                Token::IndentBy(1),
                Token::content("B"),
                Token::DedentBy(1),
                Token::content(""),
                Token::content("C"),
            ]
        );
    }
}
