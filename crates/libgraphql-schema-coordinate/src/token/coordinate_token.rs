use crate::CoordinateSourceSpan;
use crate::token::CoordinateTokenKind;

/// A schema coordinate token with location (span) information.
///
/// Coordinates have no trivia (no whitespace, comments, or commas), so unlike
/// a document token a `CoordinateToken` is only a kind and a span.
#[derive(Clone, Debug, PartialEq)]
pub struct CoordinateToken<'src> {
    /// The kind of token.
    pub kind: CoordinateTokenKind<'src>,

    /// The source location span of this token.
    pub span: CoordinateSourceSpan,
}

impl<'src> CoordinateToken<'src> {
    pub fn new(kind: CoordinateTokenKind<'src>, span: CoordinateSourceSpan) -> Self {
        Self { kind, span }
    }
}
