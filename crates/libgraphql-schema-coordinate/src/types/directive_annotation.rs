use crate::loc;
use graphql_parser::schema as ast;
use indexmap::IndexMap;
use std::path::Path;

/// A GraphQL input value literal, as written in a directive annotation or as
/// a parameter's default value.
pub type Value = ast::Value<'static, String>;

/// Represents a
/// [directive annotation](https://spec.graphql.org/October2021/#sec-Language.Directives)
/// placed on some schema definition, e.g. the `@deprecated(reason: "...")`
/// in `field: String @deprecated(reason: "...")`.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation {
    pub(crate) args: IndexMap<String, Value>,
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) directive_name: String,
}
impl DirectiveAnnotation {
    /// Creates an annotation with no arguments.
    pub fn new(directive_name: impl Into<String>) -> Self {
        Self {
            args: IndexMap::new(),
            def_location: loc::SchemaDefLocation::Programmatic,
            directive_name: directive_name.into(),
        }
    }

    pub fn with_arg(mut self, name: impl Into<String>, value: Value) -> Self {
        self.args.insert(name.into(), value);
        self
    }

    /// A map from ParameterName -> [`Value`] for all arguments passed to this
    /// [`DirectiveAnnotation`], in the order they were written.
    pub fn args(&self) -> &IndexMap<String, Value> {
        &self.args
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    /// The name of the directive being applied (without the `@`).
    pub fn directive_name(&self) -> &str {
        self.directive_name.as_str()
    }

    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        ast_annots: &[ast::Directive<'static, String>],
    ) -> Vec<Self> {
        ast_annots.iter().map(|ast_annot| Self {
            args: ast_annot.arguments
                .iter()
                .map(|(arg_name, arg_val)| (arg_name.to_string(), arg_val.clone()))
                .collect(),
            def_location: loc::SchemaDefLocation::from_pos(
                file_path,
                ast_annot.position,
            ),
            directive_name: ast_annot.name.to_string(),
        }).collect()
    }
}
