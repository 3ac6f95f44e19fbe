use crate::ByteSpan;
use crate::ast::Name;

/// `Name.Name`: addresses a field, input field, or enum value, e.g.
/// `User.email` or `Role.ADMIN`.
///
/// Which of the three it addresses depends on the kind of the named type, so
/// the node records only the member's name.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct MemberCoordinate<'src> {
    pub span: ByteSpan,
    pub name: Name<'src>,
    pub member_name: Name<'src>,
}

impl MemberCoordinate<'_> {
    pub fn into_owned(self) -> MemberCoordinate<'static> {
        MemberCoordinate {
            span: self.span,
            name: self.name.into_owned(),
            member_name: self.member_name.into_owned(),
        }
    }
}

impl std::fmt::Display for MemberCoordinate<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.name, self.member_name)
    }
}
