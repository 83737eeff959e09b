//! Source positions.
//!
//! Every token and AST node carries a `Position`. The script name is shared
//! (`Arc<str>`) so cloning a position never copies the name.

use std::fmt;
use std::sync::Arc;

/// A location in script source.
///
/// `line` and `column` are 1-based; `column` counts characters, `offset`
/// counts bytes. `script` is empty when the source is a direct statement
/// rather than a loaded file.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub offset: usize,
    pub script: Arc<str>,
}

impl Position {
    /// Create a position.
    pub fn new(script: Arc<str>, line: u32, column: u32, offset: usize) -> Self {
        Position {
            line,
            column,
            offset,
            script,
        }
    }

    /// The first character of a script.
    pub fn start(script: Arc<str>) -> Self {
        Position::new(script, 1, 1, 0)
    }

    /// Name of the script this position belongs to (may be empty).
    pub fn script_name(&self) -> &str {
        &self.script
    }

    /// Move past `text`, counting newlines and characters.
    pub fn advance(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.line = self.line.saturating_add(1);
                self.column = 1;
            } else {
                self.column = self.column.saturating_add(1);
            }
        }
        self.offset = self.offset.saturating_add(text.len());
    }

    /// Return a copy of this position moved past `text`.
    #[must_use]
    pub fn advanced(&self, text: &str) -> Position {
        let mut pos = self.clone();
        pos.advance(text);
        pos
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::start(Arc::from(""))
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}@{}", self.offset)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.script.is_empty() {
            write!(f, "{}:{}", self.line, self.column)
        } else {
            write!(f, "{}:{}:{}", self.script, self.line, self.column)
        }
    }
}
