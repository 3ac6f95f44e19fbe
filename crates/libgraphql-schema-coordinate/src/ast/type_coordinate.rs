use crate::ByteSpan;
use crate::ast::Name;

/// `Name`: addresses a named type, e.g. `User`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct TypeCoordinate<'src> {
    pub span: ByteSpan,
    pub name: Name<'src>,
}

impl TypeCoordinate<'_> {
    pub fn into_owned(self) -> TypeCoordinate<'static> {
        TypeCoordinate {
            span: self.span,
            name: self.name.into_owned(),
        }
    }
}

impl std::fmt::Display for TypeCoordinate<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
