use crate::ByteSpan;
use crate::CoordinateParseError;
use crate::ast::ArgumentCoordinate;
use crate::ast::DirectiveArgumentCoordinate;
use crate::ast::DirectiveCoordinate;
use crate::ast::MemberCoordinate;
use crate::ast::Name;
use crate::ast::SchemaCoordinateKind;
use crate::ast::TypeCoordinate;

/// A parsed schema coordinate: exactly one of the five coordinate
/// productions.
///
/// `Display` prints the canonical textual form, so parsing and printing a
/// valid coordinate is lossless:
///
/// ```rust
/// use libgraphql_schema_coordinate::ast::SchemaCoordinate;
///
/// let coordinate = SchemaCoordinate::parse("@deprecated(reason:)").unwrap();
/// assert_eq!(coordinate.to_string(), "@deprecated(reason:)");
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum SchemaCoordinate<'src> {
    Type(TypeCoordinate<'src>),
    Member(MemberCoordinate<'src>),
    Argument(ArgumentCoordinate<'src>),
    Directive(DirectiveCoordinate<'src>),
    DirectiveArgument(DirectiveArgumentCoordinate<'src>),
}

impl<'src> SchemaCoordinate<'src> {
    /// Parses `source` as a schema coordinate.
    ///
    /// Shorthand for [`parse_schema_coordinate()`](crate::parse_schema_coordinate).
    pub fn parse(source: &'src str) -> Result<Self, CoordinateParseError> {
        crate::parse_schema_coordinate(source)
    }

    /// Which of the five productions this coordinate is.
    pub fn kind(&self) -> SchemaCoordinateKind {
        match self {
            Self::Type(_) => SchemaCoordinateKind::Type,
            Self::Member(_) => SchemaCoordinateKind::Member,
            Self::Argument(_) => SchemaCoordinateKind::Argument,
            Self::Directive(_) => SchemaCoordinateKind::Directive,
            Self::DirectiveArgument(_) => SchemaCoordinateKind::DirectiveArgument,
        }
    }

    /// The root name of the coordinate: the type name, or the directive name
    /// (without `@`).
    pub fn name(&self) -> &Name<'src> {
        match self {
            Self::Type(coord) => &coord.name,
            Self::Member(coord) => &coord.name,
            Self::Argument(coord) => &coord.name,
            Self::Directive(coord) => &coord.name,
            Self::DirectiveArgument(coord) => &coord.name,
        }
    }

    /// Returns `true` for the `@`-prefixed productions.
    pub fn is_directive_coordinate(&self) -> bool {
        matches!(self, Self::Directive(_) | Self::DirectiveArgument(_))
    }

    /// The span of the whole coordinate.
    pub fn span(&self) -> ByteSpan {
        match self {
            Self::Type(coord) => coord.span,
            Self::Member(coord) => coord.span,
            Self::Argument(coord) => coord.span,
            Self::Directive(coord) => coord.span,
            Self::DirectiveArgument(coord) => coord.span,
        }
    }

    /// Detaches this coordinate from the source text it was parsed from.
    pub fn into_owned(self) -> SchemaCoordinate<'static> {
        match self {
            Self::Type(coord) => SchemaCoordinate::Type(coord.into_owned()),
            Self::Member(coord) => SchemaCoordinate::Member(coord.into_owned()),
            Self::Argument(coord) => SchemaCoordinate::Argument(coord.into_owned()),
            Self::Directive(coord) => SchemaCoordinate::Directive(coord.into_owned()),
            Self::DirectiveArgument(coord) =>
                SchemaCoordinate::DirectiveArgument(coord.into_owned()),
        }
    }
}

impl std::fmt::Display for SchemaCoordinate<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Type(coord) => std::fmt::Display::fmt(coord, f),
            Self::Member(coord) => std::fmt::Display::fmt(coord, f),
            Self::Argument(coord) => std::fmt::Display::fmt(coord, f),
            Self::Directive(coord) => std::fmt::Display::fmt(coord, f),
            Self::DirectiveArgument(coord) => std::fmt::Display::fmt(coord, f),
        }
    }
}
