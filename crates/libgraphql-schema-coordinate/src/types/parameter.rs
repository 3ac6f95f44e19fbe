use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::DeprecationState;
use crate::types::DirectiveAnnotation;
use crate::types::TypeAnnotation;
use crate::types::Value;
use graphql_parser::schema as ast;
use indexmap::IndexMap;
use std::path::Path;

/// An argument declared on a [`Field`](crate::types::Field) or
/// [`Directive`](crate::types::Directive) definition.
///
/// Schema coordinates call these "arguments" (`Type.field(arg:)`,
/// `@directive(arg:)`).
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) default_value: Option<Value>,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Parameter {
    pub fn new(name: impl Into<String>, type_annotation: TypeAnnotation) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::Programmatic,
            default_value: None,
            description: None,
            directives: vec![],
            name: name.into(),
            type_annotation,
        }
    }

    pub fn with_default_value(mut self, default_value: Value) -> Self {
        self.default_value = Some(default_value);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_directive(mut self, annot: DirectiveAnnotation) -> Self {
        self.directives.push(annot);
        self
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    /// The [`DeprecationState`] of this [`Parameter`] as indicated by the
    /// presence of a `@deprecated` annotation.
    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        self.directives.as_slice().into()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }

    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        input_val: &ast::InputValue<'static, String>,
    ) -> Self {
        Parameter {
            def_location: loc::SchemaDefLocation::from_pos(
                file_path,
                input_val.position,
            ),
            default_value: input_val.default_value.clone(),
            description: input_val.description.to_owned(),
            directives: DirectiveAnnotation::from_ast(
                file_path,
                &input_val.directives,
            ),
            name: input_val.name.to_owned(),
            type_annotation: TypeAnnotation::from_ast_type(&input_val.value_type),
        }
    }

    /// Converts the argument definitions of `owner` (`Type.field` or
    /// `@directive`), rejecting any argument name declared twice.
    pub(crate) fn map_from_ast(
        file_path: Option<&Path>,
        owner: &str,
        input_vals: &[ast::InputValue<'static, String>],
    ) -> Result<IndexMap<String, Parameter>, SchemaBuildError> {
        let mut params = IndexMap::<String, Parameter>::with_capacity(input_vals.len());
        for input_val in input_vals {
            let param = Self::from_ast(file_path, input_val);
            if let Some(existing) = params.get(&param.name) {
                return Err(SchemaBuildError::DuplicateArgumentDefinition {
                    owner: owner.to_string(),
                    argument_name: param.name,
                    def1: existing.def_location.to_owned(),
                    def2: param.def_location,
                });
            }
            params.insert(param.name.to_string(), param);
        }
        Ok(params)
    }
}
