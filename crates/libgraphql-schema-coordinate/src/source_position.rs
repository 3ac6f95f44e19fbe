/// A position within the text of a schema coordinate.
///
/// This is a pure data struct with no mutation methods. The
/// [`CoordinateLexer`](crate::CoordinateLexer) computes position values as it
/// scans input.
///
/// # Indexing Convention
///
/// **All stored values are 0-based:**
/// - `line`: 0 = first line. Coordinates cannot contain line terminators, so
///   every position produced by the lexer is on line 0.
/// - `col_utf8`: UTF-8 character count from the start of the line. A leading
///   byte-order mark counts as one character.
/// - `byte_offset`: byte offset from the start of the source text.
///
/// Use [`display_line()`](Self::display_line) and
/// [`display_col()`](Self::display_col) for the 1-based numbers shown to
/// humans.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SourcePosition {
    line: usize,
    col_utf8: usize,
    byte_offset: usize,
}

impl SourcePosition {
    /// Create a new `SourcePosition` from 0-based values.
    pub fn new(line: usize, col_utf8: usize, byte_offset: usize) -> Self {
        Self {
            line,
            col_utf8,
            byte_offset,
        }
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based UTF-8 character column.
    pub fn col_utf8(&self) -> usize {
        self.col_utf8
    }

    /// Returns the 0-based byte offset from the start of the source.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// Returns the 1-based line number, for diagnostics.
    pub fn display_line(&self) -> usize {
        self.line + 1
    }

    /// Returns the 1-based column number, for diagnostics.
    pub fn display_col(&self) -> usize {
        self.col_utf8 + 1
    }
}
