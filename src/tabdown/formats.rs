//! Output formats for tokens and trees
//!
//! Tokens:
//!     - simple: one token per line, `Content("text")`, `IndentBy(1)`, `DedentBy(1)`.
//!     - json / yaml: the serialized token list.
//!
//! Trees:
//!     - treeviz: one line per node, nesting drawn with box connectors.
//!     - source: the reconstructed text.
//!     - json / yaml: the serialized document.
//!
//! Treeviz icons
//!     Block (node with children): §, followed by its indent step
//!     Leaf: ¶
//!     Blank line placeholder: ↵

use crate::tabdown::ast::{Document, Node};
use crate::tabdown::lexing::Token;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const LABEL_WIDTH: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Yaml,
    Treeviz,
    Source,
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("unknown format {0:?} (expected simple, json, yaml, treeviz or source)")]
    Unknown(String),
    #[error("format {format} does not apply to {target}")]
    Unsupported {
        format: OutputFormat,
        target: &'static str,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Treeviz => "treeviz",
            OutputFormat::Source => "source",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(OutputFormat::Simple),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            "treeviz" => Ok(OutputFormat::Treeviz),
            "source" => Ok(OutputFormat::Source),
            other => Err(FormatError::Unknown(other.to_string())),
        }
    }
}

pub fn format_tokens(tokens: &[Token], format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Simple => Ok(tokens_to_simple(tokens)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(tokens)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(tokens)?),
        OutputFormat::Treeviz | OutputFormat::Source => Err(FormatError::Unsupported {
            format,
            target: "tokens",
        }),
    }
}

pub fn format_document(document: &Document, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Treeviz => Ok(to_treeviz_str(document)),
        OutputFormat::Source => Ok(document.to_source()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(document)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(document)?),
        OutputFormat::Simple => Err(FormatError::Unsupported {
            format,
            target: "trees",
        }),
    }
}

pub fn tokens_to_simple(tokens: &[Token]) -> String {
    tokens.iter().map(|token| format!("{token}\n")).collect()
}

pub fn to_treeviz_str(document: &Document) -> String {
    let mut result = String::new();
    append_children(&mut result, &document.children, "");
    result
}

fn append_node(result: &mut String, node: &Node, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    result.push_str(&format!("{prefix}{connector} {}\n", label(node)));

    let new_prefix = format!("{prefix}{}", if is_last { "  " } else { "│ " });
    append_children(result, &node.children, &new_prefix);
}

fn append_children(result: &mut String, children: &[Node], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        append_node(result, child, prefix, i + 1 == children.len());
    }
}

fn label(node: &Node) -> String {
    match node.depth {
        _ if node.is_blank() && node.children.is_empty() => "↵".to_string(),
        Some(depth) => format!("§ {} (+{depth})", truncate(&node.value, LABEL_WIDTH)),
        None => format!("¶ {}", truncate(&node.value, LABEL_WIDTH)),
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push('…');
        truncated
    } else {
        s.to_string()
    }
}
