//! Output tree of the parser
//!
//! A [Document] owns the top-level [Node]s; every node owns its children exclusively. A node
//! is one content line plus the block indented below it.

pub mod document;
pub mod node;

pub use document::{Document, Walk};
pub use node::Node;
