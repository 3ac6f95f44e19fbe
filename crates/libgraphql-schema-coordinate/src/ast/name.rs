use crate::ByteSpan;
use std::borrow::Cow;

/// A GraphQL name within a schema coordinate.
///
/// Always non-empty: the lexer only produces a name token for at least one
/// valid name-start character.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Name<'src> {
    pub value: Cow<'src, str>,
    pub span: ByteSpan,
}

impl<'src> Name<'src> {
    pub fn new(value: impl Into<Cow<'src, str>>, span: ByteSpan) -> Self {
        Self {
            value: value.into(),
            span,
        }
    }

    pub fn as_str(&self) -> &str {
        self.value.as_ref()
    }

    /// Detaches this name from the source text it was parsed from.
    pub fn into_owned(self) -> Name<'static> {
        Name {
            value: Cow::Owned(self.value.into_owned()),
            span: self.span,
        }
    }
}

impl std::fmt::Display for Name<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
