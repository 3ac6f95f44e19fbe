use crate::ByteSpan;
use crate::ast::Name;

/// `@Name(Name:)`: addresses an argument of a directive definition, e.g.
/// `@deprecated(reason:)`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct DirectiveArgumentCoordinate<'src> {
    pub span: ByteSpan,
    pub name: Name<'src>,
    pub argument_name: Name<'src>,
}

impl DirectiveArgumentCoordinate<'_> {
    pub fn into_owned(self) -> DirectiveArgumentCoordinate<'static> {
        DirectiveArgumentCoordinate {
            span: self.span,
            name: self.name.into_owned(),
            argument_name: self.argument_name.into_owned(),
        }
    }
}

impl std::fmt::Display for DirectiveArgumentCoordinate<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}({}:)", self.name, self.argument_name)
    }
}
