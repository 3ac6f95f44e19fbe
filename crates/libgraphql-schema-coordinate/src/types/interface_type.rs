use crate::loc;
use crate::types::DeprecationState;
use crate::types::DirectiveAnnotation;
use crate::types::Field;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an
/// [interface type](https://spec.graphql.org/October2021/#sec-Interfaces)
/// defined within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceType(pub(crate) ObjectOrInterfaceTypeData);
impl InterfaceType {
    /// Creates a type with only the implicit `__typename` field.
    pub fn new(name: impl Into<String>) -> Self {
        Self(ObjectOrInterfaceTypeData::new(
            name,
            loc::SchemaDefLocation::Programmatic,
        ))
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    /// Adds `field` to this type, replacing any field of the same name
    /// (including the implicit `__typename`).
    pub fn with_field(mut self, field: Field) -> Self {
        self.0.add_field(field);
        self
    }

    pub fn with_interface(mut self, interface_name: impl Into<String>) -> Self {
        self.0.interfaces.push(interface_name.into());
        self
    }
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for InterfaceType {
    /// The [`SchemaDefLocation`](loc::SchemaDefLocation) indicating where
    /// this [`InterfaceType`] was defined.
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        self.0.def_location()
    }

    /// The [`DeprecationState`] of this [`InterfaceType`] as indicated by the
    /// presence of a `@deprecated` annotation.
    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        self.0.deprecation_state()
    }

    /// The description of this [`InterfaceType`] as defined in the schema
    /// (e.g. in a """-string immediately before the type definition).
    pub fn description(&self) -> Option<&str> {
        self.0.description()
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        self.0.directives()
    }

    /// Looks up one of this type's fields by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.0.field(name)
    }

    /// A map from FieldName -> [`Field`] for all fields defined on this
    /// [`InterfaceType`], starting with the implicit `__typename`.
    ///
    /// Entries keep the order of the definition; fields added by type
    /// extensions follow the fields of the original definition.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.0.fields()
    }

    /// The names of the interfaces this type declares it implements.
    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }

    // The name of this [`InterfaceType`].
    pub fn name(&self) -> &str {
        self.0.name()
    }
}
