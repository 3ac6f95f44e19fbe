use crate::ByteSpan;
use crate::ast::Name;

/// `Name.Name(Name:)`: addresses an argument of a field, e.g.
/// `Query.user(id:)`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ArgumentCoordinate<'src> {
    pub span: ByteSpan,
    pub name: Name<'src>,
    pub field_name: Name<'src>,
    pub argument_name: Name<'src>,
}

impl ArgumentCoordinate<'_> {
    pub fn into_owned(self) -> ArgumentCoordinate<'static> {
        ArgumentCoordinate {
            span: self.span,
            name: self.name.into_owned(),
            field_name: self.field_name.into_owned(),
            argument_name: self.argument_name.into_owned(),
        }
    }
}

impl std::fmt::Display for ArgumentCoordinate<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}({}:)", self.name, self.field_name, self.argument_name)
    }
}
