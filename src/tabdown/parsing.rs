//! Parsing
//!
//! Folds the lexer's token stream into a [Document](crate::tabdown::ast::Document).
//!
//! Structure:
//!     - [tree_builder]: the stack-based fold from tokens to nodes.
//!     - [parser]: configuration plus the lexer/builder pipeline, whole or incremental.

pub mod parser;
pub mod tree_builder;

pub use parser::{ParseSession, Parser};
pub use tree_builder::TreeBuilder;

use crate::tabdown::ast::Document;
use crate::tabdown::config::LexerConfig;
use crate::tabdown::error::Result;

/// Parse a whole document with `config`.
pub fn parse(source: &str, config: &LexerConfig) -> Result<Document> {
    Parser::new(config.clone()).parse(source)
}
