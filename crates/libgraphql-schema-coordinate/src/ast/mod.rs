//! Syntax nodes for the five schema coordinate productions.
//!
//! | Production | Shape | Node |
//! |---|---|---|
//! | Type | `Name` | [`TypeCoordinate`] |
//! | Member | `Name.Name` | [`MemberCoordinate`] |
//! | Argument | `Name.Name(Name:)` | [`ArgumentCoordinate`] |
//! | Directive | `@Name` | [`DirectiveCoordinate`] |
//! | Directive argument | `@Name(Name:)` | [`DirectiveArgumentCoordinate`] |
//!
//! Every node owns only [`Name`]s; there are no nested coordinates and no
//! literal values. Names borrow from the source text (`'src`) and can be
//! detached with `into_owned()`.

mod argument_coordinate;
mod directive_argument_coordinate;
mod directive_coordinate;
mod member_coordinate;
mod name;
mod schema_coordinate;
mod schema_coordinate_kind;
mod type_coordinate;

pub use argument_coordinate::ArgumentCoordinate;
pub use directive_argument_coordinate::DirectiveArgumentCoordinate;
pub use directive_coordinate::DirectiveCoordinate;
pub use member_coordinate::MemberCoordinate;
pub use name::Name;
pub use schema_coordinate::SchemaCoordinate;
pub use schema_coordinate_kind::SchemaCoordinateKind;
pub use type_coordinate::TypeCoordinate;
