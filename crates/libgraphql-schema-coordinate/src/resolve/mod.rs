//! Resolution of parsed schema coordinates against a [`Schema`](crate::Schema).

mod resolve_coordinate_error;
mod resolve_schema_coordinate;
mod resolved_schema_element;
mod schema_consistency_error;

pub use resolve_coordinate_error::ResolveCoordinateError;
pub use resolve_schema_coordinate::resolve_schema_coordinate;
pub use resolved_schema_element::ResolvedSchemaElement;
pub use schema_consistency_error::SchemaConsistencyError;

#[cfg(test)]
mod tests;
