/// The kind of a [`CoordinateErrorNote`](crate::CoordinateErrorNote).
///
/// Determines the prefix used when rendering the note (`note:` or `help:`).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CoordinateErrorNoteKind {
    /// Extra context about why the error occurred.
    General,

    /// An actionable suggestion for fixing the coordinate.
    Help,
}

impl CoordinateErrorNoteKind {
    /// The prefix used when rendering a note of this kind.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::General => "note",
            Self::Help => "help",
        }
    }
}
