//! Tree Builder - folds a token stream into a Document
//!
//! The builder keeps a stack of open blocks: nodes that received an IndentBy and are still
//! collecting children. Tokens are handled as follows:
//!
//! 1. Content appends a new node to the innermost open block (or the document).
//! 2. IndentBy opens the node created last, recording the step as its depth. Before any
//!    node exists the document itself is the node created last, so an indented first line
//!    opens the document.
//! 3. DedentBy closes the innermost block, whose depth must equal the dedent step.
//!
//! Open blocks are owned by the stack and move back into their parent when closed, so the
//! tree never holds more than one owner per node.

use crate::tabdown::ast::{Document, Node};
use crate::tabdown::error::{Result, TabdownError};
use crate::tabdown::lexing::Token;

#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    top_level: Vec<Node>,
    open: Vec<Node>,
    /// Step the document was opened by, while it is open. Always below every open node.
    root_depth: Option<usize>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of blocks currently open.
    pub fn depth(&self) -> usize {
        self.open.len() + usize::from(self.root_depth.is_some())
    }

    /// Accept a slice of tokens. May be called any number of times.
    pub fn accept(&mut self, tokens: &[Token]) -> Result<()> {
        tokens
            .iter()
            .try_for_each(|token| self.accept_token(token.clone()))
    }

    pub fn accept_token(&mut self, token: Token) -> Result<()> {
        match token {
            Token::Content(text) => {
                self.insertion_target().push(Node::new(text));
                Ok(())
            }
            Token::IndentBy(levels) => {
                if self.open.is_empty() && self.top_level.is_empty() && self.root_depth.is_none() {
                    tracing::trace!(levels, "document opened by indented first line");
                    self.root_depth = Some(levels);
                    return Ok(());
                }
                let Some(mut node) = self.insertion_target().pop() else {
                    return Err(TabdownError::structural(format!(
                        "indent by {levels} with no preceding content line to open"
                    )));
                };
                if let Some(depth) = node.depth {
                    return Err(TabdownError::structural(format!(
                        "indent by {levels} reopens {:?}, already opened by {depth}",
                        node.value
                    )));
                }
                node.depth = Some(levels);
                self.open.push(node);
                Ok(())
            }
            Token::DedentBy(levels) => {
                let Some(node) = self.open.pop() else {
                    return self.close_root(levels);
                };
                if node.depth != Some(levels) {
                    return Err(TabdownError::structural(format!(
                        "dedent by {levels} closes {:?}, opened by {}",
                        node.value,
                        node.depth.unwrap_or(0)
                    )));
                }
                self.insertion_target().push(node);
                Ok(())
            }
        }
    }

    /// A copy of the tree built so far, with open blocks folded into their parents.
    pub fn snapshot(&self) -> Document {
        let mut open = self.open.clone();
        let mut top_level = self.top_level.clone();
        while let Some(node) = open.pop() {
            match open.last_mut() {
                Some(parent) => parent.children.push(node),
                None => top_level.push(node),
            }
        }
        Document::with_children(top_level)
    }

    /// Hand over the tree. Every block must have been closed.
    pub fn finish(self) -> Result<Document> {
        if self.depth() > 0 {
            return Err(TabdownError::structural(format!(
                "{} block(s) still open at end of input",
                self.depth()
            )));
        }
        tracing::debug!(top_level = self.top_level.len(), "tree built");
        Ok(Document::with_children(self.top_level))
    }

    fn close_root(&mut self, levels: usize) -> Result<()> {
        match self.root_depth.take() {
            Some(depth) if depth == levels => Ok(()),
            Some(depth) => Err(TabdownError::structural(format!(
                "dedent by {levels} closes the document, opened by {depth}"
            ))),
            None => Err(TabdownError::structural(format!(
                "dedent by {levels} with no open block"
            ))),
        }
    }

    fn insertion_target(&mut self) -> &mut Vec<Node> {
        match self.open.last_mut() {
            Some(node) => &mut node.children,
            None => &mut self.top_level,
        }
    }
}
