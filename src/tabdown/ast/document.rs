//! Document element
//!
//! The document is the synthetic root of the tree. It carries no value of its own, only the
//! top-level nodes and the indent unit the source was lexed with, so the tree can be turned
//! back into the same text.

use super::node::Node;
use crate::tabdown::lexing::IndentUnit;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub children: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indent_unit: Option<IndentUnit>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_children(children: Vec<Node>) -> Self {
        Document {
            children,
            indent_unit: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Top-level lines, unprefixed, each followed by its descendants.
    pub fn render_lines(&self) -> Vec<String> {
        let indent = self.indent_str();
        self.children
            .iter()
            .flat_map(|child| child.render_lines(indent))
            .collect()
    }

    /// Reconstruct the source with the document's own indent unit, or one space when the
    /// document never saw one.
    pub fn to_source(&self) -> String {
        self.render_lines().join("\n")
    }

    pub fn to_source_with(&self, indent: &str) -> String {
        self.children
            .iter()
            .flat_map(|child| child.render_lines(indent))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Depth-first, pre-order traversal yielding each node with its nesting level (0 for
    /// top-level nodes).
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            pending: self.children.iter().rev().map(|node| (0, node)).collect(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.walk().count()
    }

    /// Number of nesting levels below the top level.
    pub fn max_depth(&self) -> usize {
        self.walk().map(|(level, _)| level).max().unwrap_or(0)
    }

    fn indent_str(&self) -> &str {
        self.indent_unit.as_ref().map_or(" ", IndentUnit::as_str)
    }
}

/// Iterator returned by [Document::walk].
pub struct Walk<'a> {
    pending: Vec<(usize, &'a Node)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let (level, node) = self.pending.pop()?;
        self.pending
            .extend(node.children.iter().rev().map(|child| (level + 1, child)));
        Some((level, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        Document::with_children(vec![
            Node::with_children(
                "a",
                1,
                vec![Node::with_children("b", 1, vec![Node::new("c")]), Node::new("d")],
            ),
            Node::new("e"),
        ])
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.to_source(), "");
        assert_eq!(doc.node_count(), 0);
        assert_eq!(doc.max_depth(), 0);
    }

    #[test]
    fn test_to_source() {
        assert_eq!(sample().to_source(), "a\n b\n  c\n d\ne");
    }

    #[test]
    fn test_to_source_uses_recorded_unit() {
        let mut doc = sample();
        doc.indent_unit = Some(IndentUnit::tabs(1).unwrap());
        assert_eq!(doc.to_source(), "a\n\tb\n\t\tc\n\td\ne");
        assert_eq!(doc.to_source_with("  "), "a\n  b\n    c\n  d\ne");
    }

    #[test]
    fn test_walk_is_preorder() {
        let doc = sample();
        let visited: Vec<(usize, &str)> = doc
            .walk()
            .map(|(level, node)| (level, node.value.as_str()))
            .collect();
        assert_eq!(
            visited,
            vec![(0, "a"), (1, "b"), (2, "c"), (1, "d"), (0, "e")]
        );
        assert_eq!(doc.node_count(), 5);
        assert_eq!(doc.max_depth(), 2);
    }
}
