//! Main module for tabdown library functionality
//!
//! The pipeline has two stages:
//!
//!     1. [lexing]: text is scanned character by character into a flat stream of
//!        [Token](lexing::Token)s. Indentation becomes IndentBy / DedentBy markers, the way
//!        Python's tokenizer turns leading whitespace into INDENT / DEDENT.
//!     2. [parsing]: the token stream is folded into a [Document](ast::Document) of nested
//!        [Node](ast::Node)s with a stack of open parents.
//!
//!     Both stages are incremental. Text can be fed in arbitrary chunks and tokens can be
//!     accepted in arbitrary slices; the result never depends on where the input was split.

pub mod ast;
pub mod config;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod testing;
