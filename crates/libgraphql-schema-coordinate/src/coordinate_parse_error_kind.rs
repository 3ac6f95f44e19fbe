/// Categorizes coordinate parse errors for programmatic handling.
///
/// Each variant contains the minimal data needed for programmatic decisions.
/// The full human-readable message lives in
/// [`CoordinateParseError::message()`](crate::CoordinateParseError::message).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CoordinateParseErrorKind {
    /// The lexer found a character that cannot appear in a schema coordinate.
    ///
    /// Nothing is ignorable inside a coordinate, so this includes whitespace,
    /// commas, and line terminators.
    ///
    /// # Example
    /// ```text
    /// Query.user(id: ID)
    ///               ^ invalid character " "
    /// ```
    #[error("invalid character: {character:?}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
    },

    /// Expected a specific token but found another one.
    ///
    /// # Example
    /// ```text
    /// Query.user.name
    ///           ^ expected <EOF>, found `.`
    /// ```
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        /// What was expected (e.g. `["name"]` or `["<EOF>"]`).
        expected: Vec<String>,
        /// The source text of the token that was found.
        found: String,
    },

    /// The coordinate ended before a production was complete.
    ///
    /// # Example
    /// ```text
    /// Query.
    ///       ^ expected name, found <EOF>
    /// ```
    #[error("unexpected end of input")]
    UnexpectedEof {
        /// What was expected when the end of input was reached.
        expected: Vec<String>,
    },
}

impl CoordinateParseErrorKind {
    /// Returns `true` for errors raised by the lexer rather than the parser.
    pub fn is_lexical(&self) -> bool {
        matches!(self, Self::InvalidCharacter { .. })
    }
}
