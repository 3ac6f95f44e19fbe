/// Similar to [`SchemaCoordinate`](crate::ast::SchemaCoordinate) except
/// without the names. Useful for reporting which production matched.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SchemaCoordinateKind {
    Type,
    Member,
    Argument,
    Directive,
    DirectiveArgument,
}

impl SchemaCoordinateKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Type => "TypeCoordinate",
            Self::Member => "MemberCoordinate",
            Self::Argument => "ArgumentCoordinate",
            Self::Directive => "DirectiveCoordinate",
            Self::DirectiveArgument => "DirectiveArgumentCoordinate",
        }
    }
}

impl std::fmt::Display for SchemaCoordinateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
