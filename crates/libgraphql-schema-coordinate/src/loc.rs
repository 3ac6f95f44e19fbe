//! Locations of schema definitions.
//!
//! These describe where a *schema* element was defined (SDL file and
//! line/column as reported by `graphql_parser`). Positions within a coordinate
//! string are described by [`CoordinateSourceSpan`](crate::CoordinateSourceSpan)
//! instead.

use std::path::Path;
use std::path::PathBuf;

/// Very similar to graphql_parser's [Pos](graphql_parser::Pos), except it
/// includes the path to the file (if the schema was loaded from one).
///
/// `line` and `col` are 1-based, as `graphql_parser` reports them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePosition {
    pub col: usize,
    pub file: Option<PathBuf>,
    pub line: usize,
}
impl FilePosition {
    pub(crate) fn from_pos(
        file: Option<&Path>,
        pos: graphql_parser::Pos,
    ) -> Self {
        Self {
            col: pos.column,
            file: file.map(|f| f.to_path_buf()),
            line: pos.line,
        }
    }
}
impl std::fmt::Display for FilePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}:{}:{}", file.display(), self.line, self.col),
            None => write!(f, "<str>:{}:{}", self.line, self.col),
        }
    }
}

/// Where some named schema element was defined.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SchemaDefLocation {
    /// Defined implicitly by GraphQL itself (built-in scalars and directives,
    /// `__typename`).
    GraphQLBuiltIn,

    /// Constructed in Rust code and added via
    /// [`SchemaBuilder`](crate::schema::SchemaBuilder) rather than loaded
    /// from SDL.
    Programmatic,

    /// Loaded from SDL.
    Schema(FilePosition),
}
impl SchemaDefLocation {
    pub(crate) fn from_pos(
        file: Option<&Path>,
        pos: graphql_parser::Pos,
    ) -> Self {
        Self::Schema(FilePosition::from_pos(file, pos))
    }
}
impl std::convert::From<FilePosition> for SchemaDefLocation {
    fn from(value: FilePosition) -> Self {
        Self::Schema(value)
    }
}
impl std::fmt::Display for SchemaDefLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GraphQLBuiltIn => f.write_str("<builtin>"),
            Self::Programmatic => f.write_str("<programmatic>"),
            Self::Schema(file_pos) => write!(f, "{file_pos}"),
        }
    }
}
