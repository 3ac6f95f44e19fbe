use crate::loc;
use crate::types::DeprecationState;
use crate::types::DirectiveAnnotation;

/// Represents a custom
/// [scalar type](https://spec.graphql.org/October2021/#sec-Scalars) defined
/// within some [`Schema`](crate::schema::Schema).
///
/// The five built-in scalars are represented by dedicated
/// [`GraphQLType`](crate::types::GraphQLType) variants instead.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
}

impl ScalarType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::Programmatic,
            description: None,
            directives: vec![],
            name: name.into(),
        }
    }

    /// The [loc::SchemaDefLocation] indicating where this [ScalarType] was
    /// defined within the schema.
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        self.directives.as_slice().into()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The list of [DirectiveAnnotation]s applied to this [ScalarType].
    ///
    /// Annotations added from a type extension follow those on the original
    /// definition.
    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    // The name of this [ScalarType].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
