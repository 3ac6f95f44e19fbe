use crate::loc;
use crate::types::GraphQLTypeKind;
use std::path::PathBuf;

/// An error encountered while assembling a [`Schema`](crate::schema::Schema).
#[derive(Debug, thiserror::Error)]
pub enum SchemaBuildError {
    #[error(
        "The `{argument_name}` argument of `{owner}` is defined more than once \
        ({def1} and {def2})"
    )]
    DuplicateArgumentDefinition {
        /// The field (`Type.field`) or directive (`@directive`) declaring the
        /// argument.
        owner: String,
        argument_name: String,
        def1: loc::SchemaDefLocation,
        def2: loc::SchemaDefLocation,
    },

    #[error(
        "The `@{directive_name}` directive is defined more than once ({def1} and \
        {def2})"
    )]
    DuplicateDirectiveDefinition {
        directive_name: String,
        def1: loc::SchemaDefLocation,
        def2: loc::SchemaDefLocation,
    },

    #[error(
        "`{type_name}.{member_name}` is defined more than once ({def1} and \
        {def2})"
    )]
    DuplicateMemberDefinition {
        type_name: String,
        member_name: String,
        def1: loc::SchemaDefLocation,
        def2: loc::SchemaDefLocation,
    },

    #[error("The `{type_name}` type is defined more than once ({def1} and {def2})")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SchemaDefLocation,
        def2: loc::SchemaDefLocation,
    },

    #[error(
        "Attempted to extend the `{type_name}` type at {extension_location}, but \
        no such type is defined"
    )]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_location: loc::SchemaDefLocation,
    },

    #[error(
        "Attempted to extend the `{type_name}` type at {extension_location} \
        using a type extension of kind {extension_kind}, but `{type_name}` has \
        kind {type_kind}"
    )]
    InvalidExtensionType {
        type_name: String,
        type_kind: GraphQLTypeKind,
        extension_kind: GraphQLTypeKind,
        extension_location: loc::SchemaDefLocation,
    },

    #[error(
        "Error parsing schema {}: {err}",
        file.as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "string".to_string()),
    )]
    ParseError {
        file: Option<PathBuf>,
        err: String,
    },

    #[error("Failure while trying to read schema file {}: {err}", file_path.display())]
    SchemaFileReadError {
        file_path: PathBuf,
        #[source]
        err: std::io::Error,
    },
}
