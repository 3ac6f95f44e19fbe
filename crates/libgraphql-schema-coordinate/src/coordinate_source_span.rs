use crate::ByteSpan;
use crate::SourcePosition;
use std::path::PathBuf;

/// Represents a span of coordinate source text from start to end position.
///
/// The span is a half-open interval: `[start_inclusive, end_exclusive)`.
///
/// Optionally includes the path of the file the coordinate was read from, so
/// diagnostics can point back at it (e.g. a coordinate listed in a
/// deprecation-tracking config file).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CoordinateSourceSpan {
    pub start_inclusive: SourcePosition,
    pub end_exclusive: SourcePosition,
    pub file_path: Option<PathBuf>,
}

impl CoordinateSourceSpan {
    /// Creates a span without file path information.
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
            file_path: None,
        }
    }

    /// Creates a span with file path information.
    pub fn with_file(
        start: SourcePosition,
        end: SourcePosition,
        file_path: PathBuf,
    ) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
            file_path: Some(file_path),
        }
    }

    /// Extracts a compact [`ByteSpan`] from this span's byte offsets,
    /// discarding line/column and file path information.
    pub fn byte_span(&self) -> ByteSpan {
        ByteSpan {
            start: self.start_inclusive.byte_offset() as u32,
            end: self.end_exclusive.byte_offset() as u32,
        }
    }

    /// The file name shown in diagnostics: the file path if there is one,
    /// `<input>` otherwise.
    pub fn display_file_name(&self) -> String {
        self.file_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<input>".to_string())
    }
}
