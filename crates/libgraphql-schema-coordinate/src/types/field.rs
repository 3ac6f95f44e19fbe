use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::DeprecationState;
use crate::types::DirectiveAnnotation;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use graphql_parser::schema as ast;
use indexmap::IndexMap;
use std::path::Path;

/// Represents a field defined on an [`ObjectType`](crate::types::ObjectType)
/// or [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, Parameter>,
    pub(crate) parent_type_name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Field {
    /// Creates a field with no parameters. The parent type name is filled in
    /// when the field is added to a type.
    pub fn new(name: impl Into<String>, type_annotation: TypeAnnotation) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::Programmatic,
            description: None,
            directives: vec![],
            name: name.into(),
            parameters: IndexMap::new(),
            parent_type_name: String::new(),
            type_annotation,
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

    /// Adds `param` to this field, replacing any parameter of the same name.
    pub fn with_parameter(mut self, param: Parameter) -> Self {
        self.parameters.insert(param.name.to_string(), param);
        self
    }

    /// The [`SchemaDefLocation`](loc::SchemaDefLocation) indicating where
    /// this [`Field`] was defined.
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    /// The [`DeprecationState`] of this [`Field`] as indicated by the
    /// presence of a `@deprecated` annotation.
    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        self.directives.as_slice().into()
    }

    /// The description of this [`Field`] as defined in the schema (e.g. in a
    /// `"""`-string immediately before the field definition).
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Looks up one of this field's parameters by name.
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.get(name)
    }

    /// A map from ParameterName -> [`Parameter`], in definition order.
    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }

    /// The name of the object or interface type that defines this field.
    pub fn parent_type_name(&self) -> &str {
        self.parent_type_name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }

    /// The implicit `__typename: String!` field every object and interface
    /// type has.
    pub(crate) fn typename_field(parent_type_name: &str) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::GraphQLBuiltIn,
            description: None,
            directives: vec![],
            name: "__typename".to_string(),
            parameters: IndexMap::new(),
            parent_type_name: parent_type_name.to_string(),
            type_annotation: TypeAnnotation::named("String").non_null(),
        }
    }

    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        parent_type_name: &str,
        field: &ast::Field<'static, String>,
    ) -> Result<Self, SchemaBuildError> {
        Ok(Self {
            def_location: loc::SchemaDefLocation::from_pos(file_path, field.position),
            description: field.description.to_owned(),
            directives: DirectiveAnnotation::from_ast(file_path, &field.directives),
            name: field.name.to_string(),
            parameters: Parameter::map_from_ast(
                file_path,
                &format!("{parent_type_name}.{}", field.name),
                &field.arguments,
            )?,
            parent_type_name: parent_type_name.to_string(),
            type_annotation: TypeAnnotation::from_ast_type(&field.field_type),
        })
    }
}
