use crate::schema::Schema;
use crate::types::GraphQLType;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NamedTypeAnnotation {
    pub(crate) nullable: bool,
    pub(crate) type_name: String,
}

impl NamedTypeAnnotation {
    /// Looks up the annotated type in `schema`.
    ///
    /// Returns `None` if the schema has no type by this name; the schema
    /// builder does not check that every annotation refers to a defined type.
    pub fn graphql_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Option<&'schema GraphQLType> {
        schema.get_type(&self.type_name)
    }

    pub fn graphql_type_name(&self) -> &str {
        self.type_name.as_str()
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}
