//! Incremental indentation lexer
//!
//!     The lexer is a state machine fed one character at a time. It keeps the current logical
//!     line, the indent unit being matched, the number of units already seen on the line, the
//!     count of blank lines waiting to be emitted and the stack of open indentation steps.
//!     None of that state depends on how the input was chunked, so feeding a document in one
//!     call or one character per call yields the same tokens.
//!
//! Line closure
//!
//!     When a newline arrives the buffered line is classified:
//!
//!     - Formatting lines (blank or whitespace-only) produce nothing and never change the
//!       stack. With blank lines enabled they are counted and later flushed as empty
//!       Content tokens.
//!     - Content lines are measured against the stack total:
//!         - shallower: pop steps, one DedentBy each, until the total is at most the line's
//!           units. It must then be exactly equal, otherwise the line dedents between two open
//!           levels. Pending blank lines go after the dedents.
//!         - deeper: pending blank lines first, then push the difference as one IndentBy.
//!         - equal: pending blank lines only.
//!       The line's own Content token always comes last.
//!
//!     Placing blanks after dedents and before indents attaches them to the shallower of the
//!     two surrounding levels, which is how an outline reads.
//!
//! Indent detection
//!
//!     With [IndentSetting::Auto] the whitespace prefix of the first indented content line
//!     becomes the unit, and that line counts as one level. Until then every leading
//!     whitespace character is buffered.
//!
//! Mixed indentation
//!
//!     The character that is not the unit's base fails the session as soon as it appears
//!     in a line's indentation, whitespace-only lines included. Before detection the same
//!     holds for a prefix that switches between spaces and tabs.

use super::indent_stack::IndentStack;
use super::indent_unit::IndentUnit;
use super::tokens::Token;
use crate::tabdown::config::{IndentSetting, LexerConfig};
use crate::tabdown::error::{Result, TabdownError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Open,
    Closed,
}

/// A single lexing session. Feed text with [Lexer::feed], then call [Lexer::finish] once.
///
/// Any error closes the session; later calls return [TabdownError::SessionClosed].
#[derive(Debug, Clone)]
pub struct Lexer {
    emit_blank_lines: bool,
    /// `None` until detected when the configuration asks for auto detection.
    unit: Option<IndentUnit>,
    line_buf: String,
    unit_buf: String,
    units_on_line: usize,
    pending_blank_lines: usize,
    stack: IndentStack,
    /// A `\r` held back until we know whether a newline follows it.
    pending_cr: bool,
    line: usize,
    column: usize,
    state: SessionState,
}

impl Lexer {
    pub fn new(config: &LexerConfig) -> Self {
        let unit = match &config.indent {
            IndentSetting::Explicit(unit) => Some(unit.clone()),
            IndentSetting::Auto => None,
        };
        Lexer {
            emit_blank_lines: config.emit_blank_lines,
            unit,
            line_buf: String::new(),
            unit_buf: String::new(),
            units_on_line: 0,
            pending_blank_lines: 0,
            stack: IndentStack::new(),
            pending_cr: false,
            line: 1,
            column: 0,
            state: SessionState::Open,
        }
    }

    /// A lexer for `indent` (a unit string or `"auto"`) with blank lines disabled.
    pub fn with_indent(indent: &str) -> Result<Self> {
        Ok(Self::new(&LexerConfig::new().with_indent(indent)?))
    }

    /// The unit in use: the configured one, or the detected one once known.
    pub fn indent_unit(&self) -> Option<&IndentUnit> {
        self.unit.as_ref()
    }

    /// Current absolute indentation depth in units.
    pub fn depth(&self) -> usize {
        self.stack.total()
    }

    pub fn is_closed(&self) -> bool {
        self.state == SessionState::Closed
    }

    /// Lex a chunk of text, returning the tokens completed by it.
    ///
    /// Tokens for a line are only produced once its newline is seen, so a chunk that ends
    /// mid-line leaves that line buffered for the next call.
    pub fn feed(&mut self, chunk: &str) -> Result<Vec<Token>> {
        self.ensure_open()?;
        let mut tokens = Vec::new();
        let result = chunk
            .chars()
            .try_for_each(|c| self.push_char(c, &mut tokens));
        match result {
            Ok(()) => Ok(tokens),
            Err(err) => {
                self.state = SessionState::Closed;
                Err(err)
            }
        }
    }

    /// Flush the buffered line and close every open level.
    ///
    /// Blank lines are not emitted from here on, so trailing blank lines never produce
    /// placeholder tokens.
    pub fn finish(&mut self) -> Result<Vec<Token>> {
        self.ensure_open()?;
        self.emit_blank_lines = false;
        let mut tokens = Vec::new();
        let flushed = self.push_char('\n', &mut tokens);
        self.state = SessionState::Closed;
        flushed?;

        for step in self.stack.unwind_to(0) {
            tracing::trace!(step, "closing level at end of input");
            tokens.push(Token::DedentBy(step));
        }
        tracing::debug!(lines = self.line - 1, "lexer session finished");
        Ok(tokens)
    }

    /// Lex a whole document: one [Lexer::feed] followed by [Lexer::finish].
    pub fn lex(mut self, source: &str) -> Result<Vec<Token>> {
        let mut tokens = self.feed(source)?;
        tokens.extend(self.finish()?);
        Ok(tokens)
    }

    fn ensure_open(&self) -> Result<()> {
        match self.state {
            SessionState::Open => Ok(()),
            SessionState::Closed => Err(TabdownError::SessionClosed),
        }
    }

    fn push_char(&mut self, c: char, tokens: &mut Vec<Token>) -> Result<()> {
        if self.pending_cr {
            self.pending_cr = false;
            if c != '\n' {
                self.push_line_char('\r')?;
            }
        }

        match c {
            '\n' => self.close_line(tokens),
            '\r' => {
                self.column += 1;
                self.pending_cr = true;
                Ok(())
            }
            _ => {
                self.column += 1;
                self.push_line_char(c)
            }
        }
    }

    fn push_line_char(&mut self, c: char) -> Result<()> {
        if !self.line_buf.is_empty() {
            self.line_buf.push(c);
            return Ok(());
        }

        let unit = self
            .unit
            .as_ref()
            .map(|unit| (unit.base_char(), unit.off_char(), unit.width()));
        match unit {
            Some((base, _, width)) if c == base => {
                // unit_buf only ever holds base characters.
                self.unit_buf.push(c);
                if self.unit_buf.len() == width {
                    self.units_on_line += 1;
                    self.unit_buf.clear();
                }
                return Ok(());
            }
            Some((_, off, _)) if c == off => return Err(self.mixed_indentation()),
            Some(_) => {}
            None if c == ' ' || c == '\t' => {
                if self.unit_buf.chars().next().is_some_and(|first| first != c) {
                    return Err(self.mixed_indentation());
                }
                self.unit_buf.push(c);
                return Ok(());
            }
            None => self.detect_unit()?,
        }

        // First character of the line's content.
        self.line_buf.push(c);
        Ok(())
    }

    /// Error for an off character in the indentation at the current column.
    fn mixed_indentation(&self) -> TabdownError {
        TabdownError::MixedIndentation {
            line: self.line,
            column: self.column,
        }
    }

    /// Adopt the buffered leading whitespace as the unit, if there is any.
    fn detect_unit(&mut self) -> Result<()> {
        if self.unit_buf.is_empty() {
            return Ok(());
        }
        // unit_buf holds a single kind of whitespace here.
        let unit = IndentUnit::new(&self.unit_buf)?;
        tracing::debug!(unit = ?unit.as_str(), line = self.line, "detected indent unit");
        self.unit = Some(unit);
        self.units_on_line = 1;
        self.unit_buf.clear();
        Ok(())
    }

    fn close_line(&mut self, tokens: &mut Vec<Token>) -> Result<()> {
        let line = self.line;
        let units = self.units_on_line;
        let text = std::mem::take(&mut self.line_buf);
        self.unit_buf.clear();
        self.units_on_line = 0;
        self.column = 0;
        self.line += 1;

        if text.chars().all(char::is_whitespace) {
            if self.emit_blank_lines {
                self.pending_blank_lines += 1;
            }
            return Ok(());
        }

        let total = self.stack.total();
        if units < total {
            for step in self.stack.unwind_to(units) {
                tracing::trace!(step, line, "dedent");
                tokens.push(Token::DedentBy(step));
            }
            if self.stack.total() != units {
                return Err(TabdownError::InconsistentIndentation {
                    line,
                    found: units,
                    nearest: self.stack.total(),
                });
            }
            self.flush_blank_lines(tokens);
        } else if units > total {
            self.flush_blank_lines(tokens);
            let step = units - total;
            tracing::trace!(step, line, "indent");
            self.stack.push(step);
            tokens.push(Token::IndentBy(step));
        } else {
            self.flush_blank_lines(tokens);
        }

        tokens.push(Token::Content(text));
        Ok(())
    }

    fn flush_blank_lines(&mut self, tokens: &mut Vec<Token>) {
        for _ in 0..self.pending_blank_lines {
            tokens.push(Token::Content(String::new()));
        }
        self.pending_blank_lines = 0;
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new(&LexerConfig::default())
    }
}
