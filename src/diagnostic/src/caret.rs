//! Line and column positions.

use std::fmt;

/// A line and column in some input.
///
/// Both are zero-indexed with the caret before the character, so
/// `Caret::new(0, 0)` is the very start of the input. Columns count [`char`]s,
/// which matches what most editors show in their status bars.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Caret {
    line: u32,
    column: u32,
}

impl Caret {
    /// Create a new [`Caret`] from a zero-indexed line and column.
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// The line the caret in on.
    pub fn line(self) -> u32 {
        self.line
    }

    /// The column of the caret.
    pub fn column(self) -> u32 {
        self.column
    }

    /// The caret `count` characters further along the same line.
    pub fn right(self, count: u32) -> Self {
        Self::new(self.line, self.column + count)
    }
}

impl From<(u32, u32)> for Caret {
    fn from((line, column): (u32, u32)) -> Self {
        Caret::new(line, column)
    }
}

impl fmt::Display for Caret {
    /// Lines and columns are shown one-indexed, the way editors number them.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}
