//! Node element
//!
//! A node is one content line. When the following lines are indented below it, the node
//! opens a block: it records the step of that indent in `depth` and owns the block's lines
//! as `children`.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub value: String,
    /// Indent units between this node and its children. Set only once the node opens a block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(value: impl Into<String>) -> Self {
        Node {
            value: value.into(),
            depth: None,
            children: Vec::new(),
        }
    }

    /// A node that opens a block `depth` units deep holding `children`.
    pub fn with_children(value: impl Into<String>, depth: usize, children: Vec<Node>) -> Self {
        Node {
            value: value.into(),
            depth: Some(depth),
            children,
        }
    }

    /// Placeholder for a blank line.
    pub fn is_blank(&self) -> bool {
        self.value.is_empty()
    }

    /// True once the node has been opened as a block, even before any child arrived.
    pub fn is_open_block(&self) -> bool {
        self.depth.is_some()
    }

    /// The node's line followed by its descendants' lines, each child line prefixed with
    /// `indent` repeated `depth` times. Empty lines are never prefixed.
    pub fn render_lines(&self, indent: &str) -> Vec<String> {
        let mut lines = vec![self.value.clone()];
        let prefix = indent.repeat(self.depth.unwrap_or(0));
        for child in &self.children {
            lines.extend(child.render_lines(indent).into_iter().map(|line| {
                if line.is_empty() {
                    line
                } else {
                    format!("{prefix}{line}")
                }
            }));
        }
        lines
    }

    /// Render with a single-space unit.
    pub fn to_source(&self) -> String {
        self.to_source_with(" ")
    }

    pub fn to_source_with(&self, indent: &str) -> String {
        self.render_lines(indent).join("\n")
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({:?}, {} children)", self.value, self.children.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_renders_itself() {
        assert_eq!(Node::new("hello").render_lines(" "), vec!["hello"]);
    }

    #[test]
    fn test_children_prefixed_by_depth() {
        let node = Node::with_children(
            "a",
            2,
            vec![Node::with_children("b", 1, vec![Node::new("c")])],
        );
        assert_eq!(node.render_lines(" "), vec!["a", "  b", "   c"]);
        assert_eq!(node.to_source_with("\t"), "a\n\t\tb\n\t\t\tc");
    }

    #[test]
    fn test_blank_children_stay_empty() {
        let node = Node::with_children("a", 1, vec![Node::new("b"), Node::new(""), Node::new("c")]);
        assert_eq!(node.to_source(), "a\n b\n\n c");
    }

    #[test]
    fn test_flags() {
        assert!(Node::new("").is_blank());
        assert!(!Node::new("x").is_open_block());
        assert!(Node::with_children("x", 1, vec![]).is_open_block());
        assert_eq!(Node::new("x").to_string(), "Node(\"x\", 0 children)");
    }

    #[test]
    fn test_serialization_omits_empty_fields() {
        let json = serde_json::to_string(&Node::new("x")).unwrap();
        assert_eq!(json, r#"{"value":"x"}"#);
        let json = serde_json::to_string(&Node::with_children("x", 1, vec![Node::new("y")])).unwrap();
        assert_eq!(json, r#"{"value":"x","depth":1,"children":[{"value":"y"}]}"#);
    }
}
