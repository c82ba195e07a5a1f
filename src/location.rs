use core::fmt::{Debug, Display, Formatter};

/// Location holds the position of the given element in the data source
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Location {
    line: u32,
    column: u32,
}

impl Default for Location {
    /// Default to line 1, column 1
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl Location {
    /// Create a new Location
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Line number, 1-based
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Column number, 1-based, counted in UTF-8 bytes
    pub fn column(&self) -> u32 {
        self.column
    }
}

impl Debug for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}:{})", self.line, self.column)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
