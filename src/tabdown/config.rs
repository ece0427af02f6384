//! Lexer and parser configuration
//!
//! A [LexerConfig] decides how indentation is discovered and whether blank lines survive
//! as placeholder tokens. The parser is configured with the same struct and forwards it to
//! its lexer.
//!
//! Configurations can be built in code or loaded from YAML:
//!
//! ```yaml
//! emit_blank_lines: true
//! indent: auto        # or the unit itself, e.g. "    " or "\t"
//! ```

use crate::tabdown::error::{Result, TabdownError};
use crate::tabdown::lexing::IndentUnit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The literal accepted in place of an indent unit to request detection.
pub const AUTO: &str = "auto";

/// How the lexer learns the indentation unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum IndentSetting {
    /// Use this unit for the whole document.
    Explicit(IndentUnit),
    /// Take the leading whitespace of the first indented content line as the unit.
    Auto,
}

impl IndentSetting {
    /// Parse a unit string, or `"auto"`.
    pub fn parse(value: &str) -> Result<Self> {
        if value == AUTO {
            Ok(IndentSetting::Auto)
        } else {
            IndentUnit::new(value).map(IndentSetting::Explicit)
        }
    }

    /// The configured unit, if it is known up front.
    pub fn unit(&self) -> Option<&IndentUnit> {
        match self {
            IndentSetting::Explicit(unit) => Some(unit),
            IndentSetting::Auto => None,
        }
    }
}

impl Default for IndentSetting {
    fn default() -> Self {
        IndentSetting::Explicit(IndentUnit::default())
    }
}

impl fmt::Display for IndentSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndentSetting::Explicit(unit) => write!(f, "{:?}", unit.as_str()),
            IndentSetting::Auto => f.write_str(AUTO),
        }
    }
}

impl TryFrom<String> for IndentSetting {
    type Error = TabdownError;

    fn try_from(value: String) -> Result<Self> {
        IndentSetting::parse(&value)
    }
}

impl From<IndentSetting> for String {
    fn from(setting: IndentSetting) -> Self {
        match setting {
            IndentSetting::Explicit(unit) => unit.into(),
            IndentSetting::Auto => AUTO.to_string(),
        }
    }
}

/// Configuration shared by [Lexer](crate::tabdown::lexing::Lexer) and
/// [Parser](crate::tabdown::parsing::Parser).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LexerConfig {
    /// Emit an empty Content token for every blank line between content lines.
    pub emit_blank_lines: bool,
    pub indent: IndentSetting,
}

impl LexerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blank_lines(mut self, emit: bool) -> Self {
        self.emit_blank_lines = emit;
        self
    }

    /// Set the indent unit from a string, `"auto"` requesting detection.
    pub fn with_indent(mut self, indent: &str) -> Result<Self> {
        self.indent = IndentSetting::parse(indent)?;
        Ok(self)
    }

    pub fn with_indent_unit(mut self, unit: IndentUnit) -> Self {
        self.indent = IndentSetting::Explicit(unit);
        self
    }

    pub fn with_auto_indent(mut self) -> Self {
        self.indent = IndentSetting::Auto;
        self
    }

    /// Load a configuration from a YAML document. Missing keys take their defaults.
    pub fn from_yaml_str(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }
}
