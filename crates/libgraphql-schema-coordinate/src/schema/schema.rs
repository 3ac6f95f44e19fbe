use crate::resolve::ResolveCoordinateError;
use crate::resolve::ResolvedSchemaElement;
use crate::resolve::resolve_schema_coordinate;
use crate::schema::SchemaBuilder;
use crate::types::Directive;
use crate::types::GraphQLType;
use indexmap::IndexMap;

/// Represents a fully built and immutable GraphQL schema.
///
/// A `Schema` is the read-only oracle schema coordinates are resolved
/// against. It is `Send + Sync`; any number of resolutions may share one
/// `&Schema`.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) directive_defs: IndexMap<String, Directive>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Every directive in the schema (built-in and custom), in definition
    /// order.
    pub fn all_directives(&self) -> impl Iterator<Item = &Directive> {
        self.directive_defs.values()
    }

    /// Every type in the schema, starting with the built-in scalars.
    pub fn all_types(&self) -> impl Iterator<Item = &GraphQLType> {
        self.types.values()
    }

    /// Looks up a directive by name (without the `@`).
    pub fn get_directive(&self, name: &str) -> Option<&Directive> {
        self.directive_defs.get(name)
    }

    /// Looks up a type by name.
    pub fn get_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    /// Parses `coordinate` and resolves it against this schema.
    ///
    /// `Ok(None)` means the coordinate is well-formed but names nothing in
    /// this schema. See [`resolve_schema_coordinate()`] for which misses are
    /// errors.
    ///
    /// ```rust
    /// use libgraphql_schema_coordinate::Schema;
    /// use libgraphql_schema_coordinate::resolve::ResolvedSchemaElement;
    ///
    /// let schema = Schema::builder()
    ///     .load_str(None, "enum Color { RED GREEN }")
    ///     .unwrap()
    ///     .build()
    ///     .unwrap();
    ///
    /// assert!(matches!(
    ///     schema.resolve_coordinate("Color.RED"),
    ///     Ok(Some(ResolvedSchemaElement::EnumValue { .. })),
    /// ));
    /// assert!(matches!(schema.resolve_coordinate("Color.BLUE"), Ok(None)));
    /// assert!(schema.resolve_coordinate("Shade.RED").is_err());
    /// ```
    pub fn resolve_coordinate<'schema>(
        &'schema self,
        coordinate: &str,
    ) -> Result<Option<ResolvedSchemaElement<'schema>>, ResolveCoordinateError> {
        let coordinate = crate::parse_schema_coordinate(coordinate)?;
        Ok(resolve_schema_coordinate(self, &coordinate)?)
    }
}
