use crate::CoordinateErrorNoteKind;
use crate::CoordinateSourceSpan;
use crate::SmallVec;

/// Notes attached to a [`CoordinateParseError`](crate::CoordinateParseError).
///
/// Most errors carry zero or one note, so a single inline slot avoids a heap
/// allocation in the common case.
pub type CoordinateErrorNotes = SmallVec<[CoordinateErrorNote; 1]>;

/// An error note providing additional context about a coordinate error.
#[derive(Clone, Debug, PartialEq)]
pub struct CoordinateErrorNote {
    /// The kind of note (determines rendering prefix).
    pub kind: CoordinateErrorNoteKind,

    /// The note message.
    pub message: String,

    /// Optional span pointing to a related location in the coordinate.
    pub span: Option<CoordinateSourceSpan>,
}

impl CoordinateErrorNote {
    /// Creates a general note without a span.
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            kind: CoordinateErrorNoteKind::General,
            message: message.into(),
            span: None,
        }
    }

    /// Creates a general note pointing at a related location.
    pub fn general_with_span(
        message: impl Into<String>,
        span: CoordinateSourceSpan,
    ) -> Self {
        Self {
            kind: CoordinateErrorNoteKind::General,
            message: message.into(),
            span: Some(span),
        }
    }

    /// Creates a help note without a span.
    pub fn help(message: impl Into<String>) -> Self {
        Self {
            kind: CoordinateErrorNoteKind::Help,
            message: message.into(),
            span: None,
        }
    }
}
