use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::DEFAULT_DEPRECATION_REASON;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use crate::types::Value;
use graphql_parser::schema as ast;
use indexmap::IndexMap;
use std::path::Path;

/// Represents a defined directive: either one of the four GraphQL built-ins
/// (`@deprecated`, `@include`, `@skip`, `@specifiedBy`) or a custom directive
/// loaded from SDL.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) is_repeatable: bool,
    pub(crate) locations: Vec<String>,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, Parameter>,
}
impl Directive {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::Programmatic,
            description: None,
            is_repeatable: false,
            locations: vec![],
            name: name.into(),
            parameters: IndexMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a location (e.g. `"FIELD_DEFINITION"`) this directive may be
    /// applied at.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.locations.push(location.into());
        self
    }

    /// Adds `param` to this directive, replacing any parameter of the same
    /// name.
    pub fn with_parameter(mut self, param: Parameter) -> Self {
        self.parameters.insert(param.name.to_string(), param);
        self
    }

    pub fn with_repeatable(mut self, is_repeatable: bool) -> Self {
        self.is_repeatable = is_repeatable;
        self
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_builtin(&self) -> bool {
        self.def_location == loc::SchemaDefLocation::GraphQLBuiltIn
    }

    pub fn is_repeatable(&self) -> bool {
        self.is_repeatable
    }

    /// The locations this directive may be applied at, as written in its
    /// definition (`FIELD_DEFINITION`, `ENUM_VALUE`, ...).
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    /// The name of this directive, without the leading `@`.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Looks up one of this directive's parameters by name.
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.get(name)
    }

    /// A map from ParameterName -> [`Parameter`], in definition order.
    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }

    /// The built-in directives every schema has unless it defines its own
    /// directive of the same name.
    pub(crate) fn builtins() -> Vec<Self> {
        let builtin = |name: &str| Self {
            def_location: loc::SchemaDefLocation::GraphQLBuiltIn,
            ..Self::new(name)
        };
        let builtin_param = |name: &str, type_annotation: TypeAnnotation| Parameter {
            def_location: loc::SchemaDefLocation::GraphQLBuiltIn,
            ..Parameter::new(name, type_annotation)
        };

        vec![
            builtin("deprecated")
                .with_parameter(
                    builtin_param("reason", TypeAnnotation::named("String"))
                        .with_default_value(Value::String(
                            DEFAULT_DEPRECATION_REASON.to_string(),
                        )),
                )
                .with_location("FIELD_DEFINITION")
                .with_location("ARGUMENT_DEFINITION")
                .with_location("INPUT_FIELD_DEFINITION")
                .with_location("ENUM_VALUE"),

            builtin("include")
                .with_parameter(builtin_param(
                    "if",
                    TypeAnnotation::named("Boolean").non_null(),
                ))
                .with_location("FIELD")
                .with_location("FRAGMENT_SPREAD")
                .with_location("INLINE_FRAGMENT"),

            builtin("skip")
                .with_parameter(builtin_param(
                    "if",
                    TypeAnnotation::named("Boolean").non_null(),
                ))
                .with_location("FIELD")
                .with_location("FRAGMENT_SPREAD")
                .with_location("INLINE_FRAGMENT"),

            builtin("specifiedBy")
                .with_parameter(builtin_param(
                    "url",
                    TypeAnnotation::named("String").non_null(),
                ))
                .with_location("SCALAR"),
        ]
    }

    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        def: &ast::DirectiveDefinition<'static, String>,
    ) -> Result<Self, SchemaBuildError> {
        Ok(Self {
            def_location: loc::SchemaDefLocation::from_pos(file_path, def.position),
            description: def.description.to_owned(),
            is_repeatable: def.repeatable,
            locations: def.locations
                .iter()
                .map(|location| location.as_str().to_string())
                .collect(),
            name: def.name.to_string(),
            parameters: Parameter::map_from_ast(
                file_path,
                &format!("@{}", def.name),
                &def.arguments,
            )?,
        })
    }
}
