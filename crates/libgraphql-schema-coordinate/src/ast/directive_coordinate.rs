use crate::ByteSpan;
use crate::ast::Name;

/// `@Name`: addresses a directive definition, e.g. `@deprecated`.
///
/// `name` excludes the leading `@`; `span` includes it.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct DirectiveCoordinate<'src> {
    pub span: ByteSpan,
    pub name: Name<'src>,
}

impl DirectiveCoordinate<'_> {
    pub fn into_owned(self) -> DirectiveCoordinate<'static> {
        DirectiveCoordinate {
            span: self.span,
            name: self.name.into_owned(),
        }
    }
}

impl std::fmt::Display for DirectiveCoordinate<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}", self.name)
    }
}
