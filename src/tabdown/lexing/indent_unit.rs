//! Indentation unit
//!
//!     The indentation unit is the literal whitespace string that makes up one nesting level,
//!     for instance four spaces or a single tab. A unit is made of one whitespace kind only:
//!     the character it repeats is its base character, and the other kind is its off
//!     character. Meeting the off character where a unit is expected is what makes a line's
//!     indentation "mixed".

use crate::tabdown::error::{Result, TabdownError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static UNIT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\t+| +)$").expect("indent unit pattern is valid"));

/// An immutable, validated indentation unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IndentUnit {
    unit: String,
    base: char,
}

impl IndentUnit {
    /// Validate `unit`: one or more tabs, or one or more spaces, and nothing else.
    pub fn new(unit: &str) -> Result<Self> {
        if !UNIT_PATTERN.is_match(unit) {
            return Err(TabdownError::Configuration {
                unit: unit.to_string(),
            });
        }
        // The pattern guarantees at least one character.
        let base = unit.chars().next().unwrap_or(' ');
        Ok(IndentUnit {
            unit: unit.to_string(),
            base,
        })
    }

    /// A unit of `width` spaces.
    pub fn spaces(width: usize) -> Result<Self> {
        Self::new(&" ".repeat(width))
    }

    /// A unit of `width` tabs.
    pub fn tabs(width: usize) -> Result<Self> {
        Self::new(&"\t".repeat(width))
    }

    /// The character this unit repeats.
    pub fn base_char(&self) -> char {
        self.base
    }

    /// The whitespace character that must not appear in indentation made of this unit.
    pub fn off_char(&self) -> char {
        if self.base == ' ' {
            '\t'
        } else {
            ' '
        }
    }

    /// Number of characters in the unit.
    pub fn width(&self) -> usize {
        self.unit.len()
    }

    pub fn as_str(&self) -> &str {
        &self.unit
    }

    /// The whitespace prefix for `levels` units.
    pub fn repeat(&self, levels: usize) -> String {
        self.unit.repeat(levels)
    }
}

impl Default for IndentUnit {
    fn default() -> Self {
        IndentUnit {
            unit: " ".to_string(),
            base: ' ',
        }
    }
}

impl fmt::Display for IndentUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.unit)
    }
}

impl AsRef<str> for IndentUnit {
    fn as_ref(&self) -> &str {
        &self.unit
    }
}

impl FromStr for IndentUnit {
    type Err = TabdownError;

    fn from_str(s: &str) -> Result<Self> {
        IndentUnit::new(s)
    }
}

impl TryFrom<String> for IndentUnit {
    type Error = TabdownError;

    fn try_from(value: String) -> Result<Self> {
        IndentUnit::new(&value)
    }
}

impl From<IndentUnit> for String {
    fn from(unit: IndentUnit) -> Self {
        unit.unit
    }
}
