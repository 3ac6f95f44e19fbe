//! A library for parsing GraphQL
//! [schema coordinates](https://spec.graphql.org/September2025/#sec-Schema-Coordinates)
//! (e.g. `User.email`, `Query.user(id:)`, `@deprecated(reason:)`) and
//! resolving them to the element of a [`Schema`] they point at.
//!
//! The pipeline has three stages:
//!
//! 1. [`CoordinateLexer`] turns the coordinate text into tokens. Unlike a
//!    GraphQL document lexer, nothing is ignorable: whitespace, commas, and
//!    line terminators are all lexical errors.
//! 2. [`SchemaCoordinateParser`] recognizes exactly one of the five
//!    coordinate productions and builds an [`ast::SchemaCoordinate`].
//! 3. [`resolve::resolve_schema_coordinate()`] looks the coordinate up in a
//!    [`Schema`] and produces a [`resolve::ResolvedSchemaElement`] (or `None`
//!    when the addressed element does not exist).
//!
//! ```rust
//! use libgraphql_schema_coordinate::Schema;
//! use libgraphql_schema_coordinate::resolve::ResolvedSchemaElement;
//!
//! let schema = Schema::builder()
//!     .load_str(None, "type Query { user(id: ID!): String }")
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! let element = schema.resolve_coordinate("Query.user(id:)").unwrap();
//! assert!(matches!(
//!     element,
//!     Some(ResolvedSchemaElement::FieldArgument { .. }),
//! ));
//! assert!(schema.resolve_coordinate("Query.user(name:)").unwrap().is_none());
//! ```

pub mod ast;
mod byte_span;
mod coordinate_error_note;
mod coordinate_error_note_kind;
mod coordinate_lexer;
mod coordinate_parse_error;
mod coordinate_parse_error_kind;
mod coordinate_source_span;
pub mod loc;
pub mod resolve;
pub mod schema;
mod schema_coordinate_parser;
mod source_position;
pub mod token;
pub mod types;

pub use byte_span::ByteSpan;
pub use coordinate_error_note::CoordinateErrorNote;
pub use coordinate_error_note::CoordinateErrorNotes;
pub use coordinate_error_note_kind::CoordinateErrorNoteKind;
pub use coordinate_lexer::CoordinateLexer;
pub use coordinate_parse_error::CoordinateParseError;
pub use coordinate_parse_error_kind::CoordinateParseErrorKind;
pub use coordinate_source_span::CoordinateSourceSpan;
pub use schema::Schema;
pub use schema_coordinate_parser::SchemaCoordinateParser;
pub use schema_coordinate_parser::parse_schema_coordinate;
pub use smallvec::SmallVec;
pub use smallvec::smallvec;
pub use source_position::SourcePosition;

#[cfg(test)]
mod tests;
