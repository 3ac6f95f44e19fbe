use crate::types::GraphQLTypeKind;

/// A coordinate asserted that some schema element exists (by naming one of
/// its members), but the schema disagrees.
///
/// This is distinct from an ordinary miss: `Type.field` against a schema with
/// no `Type` means the coordinate and the schema are out of sync, whereas a
/// schema that has `Type` but no `field` simply answers "not found".
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SchemaConsistencyError {
    #[error(
        "`{coordinate}` refers to a member of `{type_name}`, but no type named \
        `{type_name}` is defined"
    )]
    UndefinedType {
        coordinate: String,
        type_name: String,
    },

    #[error(
        "`{coordinate}` refers to an argument of `{type_name}.{field_name}`, but \
        `{type_name}` has no field named `{field_name}`"
    )]
    UndefinedField {
        coordinate: String,
        type_name: String,
        field_name: String,
    },

    #[error(
        "`{coordinate}` refers to an argument of `@{directive_name}`, but no \
        directive named `@{directive_name}` is defined"
    )]
    UndefinedDirective {
        coordinate: String,
        directive_name: String,
    },

    #[error(
        "`{coordinate}` cannot be resolved: `{type_name}` is a {type_kind} type, \
        which has no {target}"
    )]
    InvalidCoordinateTarget {
        coordinate: String,
        type_name: String,
        type_kind: GraphQLTypeKind,
        target: &'static str,
    },
}
impl SchemaConsistencyError {
    /// The coordinate (in canonical form) that failed to resolve.
    pub fn coordinate(&self) -> &str {
        match self {
            Self::UndefinedType { coordinate, .. }
            | Self::UndefinedField { coordinate, .. }
            | Self::UndefinedDirective { coordinate, .. }
            | Self::InvalidCoordinateTarget { coordinate, .. } => coordinate.as_str(),
        }
    }
}
