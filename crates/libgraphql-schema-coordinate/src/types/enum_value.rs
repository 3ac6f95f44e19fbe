use crate::loc;
use crate::types::DeprecationState;
use crate::types::DirectiveAnnotation;
use graphql_parser::schema as ast;
use std::path::Path;

/// Represents an
/// [enum value](https://spec.graphql.org/October2021/#sec-Enum-Value) defined
/// within a specific [`EnumType`](crate::types::EnumType).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) enum_type_name: String,
    pub(crate) name: String,
}

impl EnumValue {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::Programmatic,
            description: None,
            directives: vec![],
            enum_type_name: String::new(),
            name: name.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_directive(mut self, annot: DirectiveAnnotation) -> Self {
        self.directives.push(annot);
        self
    }

    /// The [`SchemaDefLocation`](loc::SchemaDefLocation) indicating where this
    /// [`EnumValue`] was defined within the schema.
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    /// The [`DeprecationState`] of this [`EnumValue`] as indicated by the
    /// presence of a `@deprecated` annotation.
    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        self.directives.as_slice().into()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The list of [`DirectiveAnnotation`]s applied to this [`EnumValue`], in
    /// the order they were written.
    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    /// The name of the [`EnumType`](crate::types::EnumType) to which this
    /// value belongs.
    pub fn enum_type_name(&self) -> &str {
        self.enum_type_name.as_str()
    }

    /// The name of this [`EnumValue`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        enum_type_name: &str,
        value: &ast::EnumValue<'static, String>,
    ) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::from_pos(file_path, value.position),
            description: value.description.to_owned(),
            directives: DirectiveAnnotation::from_ast(file_path, &value.directives),
            enum_type_name: enum_type_name.to_string(),
            name: value.name.to_string(),
        }
    }
}
