use crate::CoordinateParseError;
use crate::resolve::SchemaConsistencyError;

/// Either way [`Schema::resolve_coordinate()`](crate::Schema::resolve_coordinate)
/// can fail.
#[derive(Clone, Debug, thiserror::Error)]
pub enum ResolveCoordinateError {
    #[error(transparent)]
    Parse(#[from] CoordinateParseError),

    #[error(transparent)]
    SchemaConsistency(#[from] SchemaConsistencyError),
}
