use crate::loc;
use crate::types::DeprecationState;
use crate::types::Directive;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::Parameter;

/// The schema element a coordinate resolved to.
///
/// Every variant borrows from the [`Schema`](crate::Schema); nothing is
/// copied. Variants that address a member also carry the element that owns
/// it. `Display` prints the canonical coordinate of the element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ResolvedSchemaElement<'schema> {
    /// `Type`
    NamedType {
        graphql_type: &'schema GraphQLType,
    },

    /// `Type.field` where `Type` is an object or interface type.
    Field {
        parent_type: &'schema GraphQLType,
        field: &'schema Field,
    },

    /// `Type.field` where `Type` is an input object type.
    InputField {
        input_object_type: &'schema InputObjectType,
        input_field: &'schema InputField,
    },

    /// `Type.VALUE` where `Type` is an enum type.
    EnumValue {
        enum_type: &'schema EnumType,
        enum_value: &'schema EnumValue,
    },

    /// `Type.field(argument:)`
    FieldArgument {
        parent_type: &'schema GraphQLType,
        field: &'schema Field,
        argument: &'schema Parameter,
    },

    /// `@directive`
    Directive {
        directive: &'schema Directive,
    },

    /// `@directive(argument:)`
    DirectiveArgument {
        directive: &'schema Directive,
        argument: &'schema Parameter,
    },
}
impl<'schema> ResolvedSchemaElement<'schema> {
    /// A short name for the kind of element, for display.
    pub fn element_kind(&self) -> &'static str {
        match self {
            Self::NamedType { .. } => "NamedType",
            Self::Field { .. } => "Field",
            Self::InputField { .. } => "InputField",
            Self::EnumValue { .. } => "EnumValue",
            Self::FieldArgument { .. } => "FieldArgument",
            Self::Directive { .. } => "Directive",
            Self::DirectiveArgument { .. } => "DirectiveArgument",
        }
    }

    /// Where the addressed element (not its owner) was defined.
    pub fn def_location(&self) -> &'schema loc::SchemaDefLocation {
        match self {
            Self::NamedType { graphql_type } => graphql_type.def_location(),
            Self::Field { field, .. } => field.def_location(),
            Self::InputField { input_field, .. } => input_field.def_location(),
            Self::EnumValue { enum_value, .. } => enum_value.def_location(),
            Self::FieldArgument { argument, .. } => argument.def_location(),
            Self::Directive { directive } => directive.def_location(),
            Self::DirectiveArgument { argument, .. } => argument.def_location(),
        }
    }

    /// Whether the addressed element is marked `@deprecated`.
    ///
    /// Directive definitions cannot be deprecated.
    pub fn deprecation_state(&self) -> DeprecationState<'schema> {
        match self {
            Self::NamedType { graphql_type } => graphql_type.deprecation_state(),
            Self::Field { field, .. } => field.deprecation_state(),
            Self::InputField { input_field, .. } => input_field.deprecation_state(),
            Self::EnumValue { enum_value, .. } => enum_value.deprecation_state(),
            Self::FieldArgument { argument, .. } => argument.deprecation_state(),
            Self::Directive { .. } => DeprecationState::NotDeprecated,
            Self::DirectiveArgument { argument, .. } => argument.deprecation_state(),
        }
    }

    /// The description of the addressed element, if it has one.
    pub fn description(&self) -> Option<&'schema str> {
        match self {
            Self::NamedType { graphql_type } => graphql_type.description(),
            Self::Field { field, .. } => field.description(),
            Self::InputField { input_field, .. } => input_field.description(),
            Self::EnumValue { enum_value, .. } => enum_value.description(),
            Self::FieldArgument { argument, .. } => argument.description(),
            Self::Directive { directive } => directive.description(),
            Self::DirectiveArgument { argument, .. } => argument.description(),
        }
    }

    /// The name of the addressed element: the last name in its coordinate.
    pub fn name(&self) -> &'schema str {
        match self {
            Self::NamedType { graphql_type } => graphql_type.name(),
            Self::Field { field, .. } => field.name(),
            Self::InputField { input_field, .. } => input_field.name(),
            Self::EnumValue { enum_value, .. } => enum_value.name(),
            Self::FieldArgument { argument, .. } => argument.name(),
            Self::Directive { directive } => directive.name(),
            Self::DirectiveArgument { argument, .. } => argument.name(),
        }
    }
}
impl std::fmt::Display for ResolvedSchemaElement<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NamedType { graphql_type } =>
                f.write_str(graphql_type.name()),
            Self::Field { parent_type, field } =>
                write!(f, "{}.{}", parent_type.name(), field.name()),
            Self::InputField { input_object_type, input_field } =>
                write!(f, "{}.{}", input_object_type.name(), input_field.name()),
            Self::EnumValue { enum_type, enum_value } =>
                write!(f, "{}.{}", enum_type.name(), enum_value.name()),
            Self::FieldArgument { parent_type, field, argument } =>
                write!(f, "{}.{}({}:)", parent_type.name(), field.name(), argument.name()),
            Self::Directive { directive } =>
                write!(f, "@{}", directive.name()),
            Self::DirectiveArgument { directive, argument } =>
                write!(f, "@{}({}:)", directive.name(), argument.name()),
        }
    }
}
