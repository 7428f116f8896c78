use std::fmt::Display;

/// The file used for locations that cannot be tied to any source.
const UNKNOWN_FILE: &str = "unknown-file.txt";

/// A position in template source (file, line, column)
///
/// Lines are 1-based. Columns are 0-based, count Unicode scalar values and
/// reset to 0 after every newline. Locations order lexicographically by
/// file, then line, then column; this ordering is relied on by tests and by
/// error rendering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    /// The file the position refers to
    pub file: String,
    /// The line number (1-based)
    pub line: i32,
    /// The column number (0-based)
    pub column: i32,
}

impl Location {
    /// Creates a new location
    ///
    /// ### Arguments
    /// * `file` - The file the position refers to
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (0-based)
    pub fn new(file: impl Into<String>, line: i32, column: i32) -> Self {
        Location {
            file: file.into(),
            line,
            column,
        }
    }

    /// The sentinel location for diagnostics with no usable source position
    pub fn unknown() -> Self {
        Location::new(UNKNOWN_FILE, -1, -1)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}
