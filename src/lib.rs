//! # tabdown
//!
//! An indentation-aware lexer and tree parser for tabdown outlines.
//!
//! Tabdown is plain text where leading whitespace carries the structure, much like Python
//! blocks: every line is a node, and lines indented below it are its children. See the
//! [tabdown] module for the pipeline.

pub mod tabdown;

pub use tabdown::ast::{Document, Node};
pub use tabdown::config::{IndentSetting, LexerConfig};
pub use tabdown::error::{Result, TabdownError};
pub use tabdown::lexing::{lex, IndentUnit, Lexer, Token};
pub use tabdown::parsing::{parse, ParseSession, Parser, TreeBuilder};
