use crate::loc;
use crate::types::DeprecationState;
use crate::types::DirectiveAnnotation;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions) defined
/// within some [`Schema`](crate::schema::Schema).
///
/// Unions have no members a schema coordinate can address: `Union.member` is
/// a [`SchemaConsistencyError`](crate::resolve::SchemaConsistencyError).
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) member_type_names: Vec<String>,
    pub(crate) name: String,
}
impl UnionType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::Programmatic,
            description: None,
            directives: vec![],
            member_type_names: vec![],
            name: name.into(),
        }
    }

    pub fn with_member(mut self, type_name: impl Into<String>) -> Self {
        self.member_type_names.push(type_name.into());
        self
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        self.directives.as_slice().into()
    }

    /// The description of this [`UnionType`] as defined in the schema
    /// (e.g. in a """-string immediately before the type definition).
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    /// An ordered list of the names of each member type of this union.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.member_type_names
            .iter()
            .map(|type_name| type_name.as_str())
            .collect()
    }

    /// The name of this [`UnionType`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
