/// The kind of a schema coordinate token.
///
/// Only the punctuators that appear in the five coordinate productions are
/// represented. Everything else a GraphQL document lexer would accept (`{`,
/// `$`, `...`, string and number literals) is a lexical error in a
/// coordinate.
///
/// # Lifetime Parameter
///
/// `Name` borrows directly from the source text, so lexing never allocates.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CoordinateTokenKind<'src> {
    /// Start of input. Emitted once, before any other token.
    Sof,

    /// End of input. Once reached, the lexer keeps returning it.
    Eof,

    /// A GraphQL name (`[_A-Za-z][_0-9A-Za-z]*`).
    Name(&'src str),

    /// `.`
    Dot,
    /// `(`
    ParenOpen,
    /// `)`
    ParenClose,
    /// `:`
    Colon,
    /// `@`
    At,
}

impl<'src> CoordinateTokenKind<'src> {
    /// Returns `true` if this token is one of the single-character
    /// punctuators.
    pub fn is_punctuator(&self) -> bool {
        match self {
            Self::Dot
            | Self::ParenOpen
            | Self::ParenClose
            | Self::Colon
            | Self::At => true,

            Self::Sof
            | Self::Eof
            | Self::Name(_) => false,
        }
    }

    /// The source text of this token, or a `<SOF>`/`<EOF>` marker.
    pub fn as_str(&self) -> &'src str {
        match self {
            Self::Sof => "<SOF>",
            Self::Eof => "<EOF>",
            Self::Name(value) => *value,
            Self::Dot => ".",
            Self::ParenOpen => "(",
            Self::ParenClose => ")",
            Self::Colon => ":",
            Self::At => "@",
        }
    }

    /// A description of this token for use in error messages: punctuators and
    /// names are quoted with backticks, `<SOF>`/`<EOF>` are not.
    pub fn description(&self) -> String {
        match self {
            Self::Sof | Self::Eof => self.as_str().to_string(),
            Self::Name(value) => format!("name `{value}`"),
            _ => format!("`{}`", self.as_str()),
        }
    }

    /// Compares token kinds, ignoring the payload of `Name`.
    ///
    /// The match is exhaustive over `self` so that adding a variant forces
    /// this function to be revisited.
    pub fn is_same_kind(&self, other: &CoordinateTokenKind<'_>) -> bool {
        match self {
            Self::Name(_) => matches!(other, CoordinateTokenKind::Name(_)),
            Self::Sof => matches!(other, CoordinateTokenKind::Sof),
            Self::Eof => matches!(other, CoordinateTokenKind::Eof),
            Self::Dot => matches!(other, CoordinateTokenKind::Dot),
            Self::ParenOpen => matches!(other, CoordinateTokenKind::ParenOpen),
            Self::ParenClose => matches!(other, CoordinateTokenKind::ParenClose),
            Self::Colon => matches!(other, CoordinateTokenKind::Colon),
            Self::At => matches!(other, CoordinateTokenKind::At),
        }
    }
}

impl std::fmt::Display for CoordinateTokenKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
