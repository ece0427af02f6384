//! Parser - lexer and tree builder wired together
//!
//! The parser owns a [LexerConfig] and runs a fresh [Lexer] and [TreeBuilder] per document.
//! [ParseSession] exposes the same pipeline incrementally, so a large document can be
//! lexed and folded chunk by chunk without holding all of it in memory.

use super::tree_builder::TreeBuilder;
use crate::tabdown::ast::Document;
use crate::tabdown::config::LexerConfig;
use crate::tabdown::error::Result;
use crate::tabdown::lexing::Lexer;

#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: LexerConfig,
}

impl Parser {
    pub fn new(config: LexerConfig) -> Self {
        Parser { config }
    }

    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Parse a whole document.
    pub fn parse(&self, source: &str) -> Result<Document> {
        let mut session = self.session();
        session.feed(source)?;
        session.finish()
    }

    pub fn session(&self) -> ParseSession {
        ParseSession {
            lexer: Lexer::new(&self.config),
            builder: TreeBuilder::new(),
        }
    }
}

/// One document being parsed incrementally.
#[derive(Debug, Clone)]
pub struct ParseSession {
    lexer: Lexer,
    builder: TreeBuilder,
}

impl ParseSession {
    /// Lex `chunk` and fold the tokens it completes into the tree.
    pub fn feed(&mut self, chunk: &str) -> Result<()> {
        let tokens = self.lexer.feed(chunk)?;
        self.builder.accept(&tokens)
    }

    /// The tree built so far. Lines not yet terminated by a newline are not included.
    pub fn snapshot(&self) -> Document {
        let mut document = self.builder.snapshot();
        document.indent_unit = self.lexer.indent_unit().cloned();
        document
    }

    pub fn finish(mut self) -> Result<Document> {
        let tokens = self.lexer.finish()?;
        self.builder.accept(&tokens)?;
        let mut document = self.builder.finish()?;
        document.indent_unit = self.lexer.indent_unit().cloned();
        Ok(document)
    }
}
