use crate::ast;
use crate::resolve::ResolvedSchemaElement;
use crate::resolve::SchemaConsistencyError;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;

type Result<T> = std::result::Result<T, SchemaConsistencyError>;

/// Resolves a parsed schema coordinate against `schema`.
///
/// Lookups fall into two tiers:
///
/// * The root name of a single-name coordinate (`Type`, `@directive`) and the
///   final name of every coordinate are ordinary lookups. A miss returns
///   `Ok(None)`.
/// * Every name a multi-name coordinate treats as an owner (the type in
///   `Type.member`, the type and field in `Type.field(arg:)`, the directive in
///   `@directive(arg:)`) is asserted to exist. A miss, or an owner whose kind
///   cannot have the addressed member, is a [`SchemaConsistencyError`].
///
/// | Coordinate                | owner missing / wrong kind | leaf missing |
/// |---------------------------|----------------------------|--------------|
/// | `Type`                    | n/a                        | `Ok(None)`   |
/// | `Type.member`             | error                      | `Ok(None)`   |
/// | `Type.field(arg:)`        | error (type or field)      | `Ok(None)`   |
/// | `@directive`              | n/a                        | `Ok(None)`   |
/// | `@directive(arg:)`        | error                      | `Ok(None)`   |
pub fn resolve_schema_coordinate<'schema>(
    schema: &'schema Schema,
    coordinate: &ast::SchemaCoordinate<'_>,
) -> Result<Option<ResolvedSchemaElement<'schema>>> {
    match coordinate {
        ast::SchemaCoordinate::Type(coord) =>
            Ok(schema.get_type(coord.name.as_str()).map(|graphql_type| {
                ResolvedSchemaElement::NamedType { graphql_type }
            })),

        ast::SchemaCoordinate::Member(coord) =>
            resolve_member(schema, coordinate, coord),

        ast::SchemaCoordinate::Argument(coord) =>
            resolve_field_argument(schema, coordinate, coord),

        ast::SchemaCoordinate::Directive(coord) =>
            Ok(schema.get_directive(coord.name.as_str()).map(|directive| {
                ResolvedSchemaElement::Directive { directive }
            })),

        ast::SchemaCoordinate::DirectiveArgument(coord) => {
            let directive_name = coord.name.as_str();
            let directive = schema.get_directive(directive_name).ok_or_else(|| {
                SchemaConsistencyError::UndefinedDirective {
                    coordinate: coordinate.to_string(),
                    directive_name: directive_name.to_string(),
                }
            })?;
            Ok(directive.parameter(coord.argument_name.as_str()).map(|argument| {
                ResolvedSchemaElement::DirectiveArgument { directive, argument }
            }))
        },
    }
}

fn resolve_member<'schema>(
    schema: &'schema Schema,
    coordinate: &ast::SchemaCoordinate<'_>,
    coord: &ast::MemberCoordinate<'_>,
) -> Result<Option<ResolvedSchemaElement<'schema>>> {
    let parent_type = lookup_owner_type(schema, coordinate, coord.name.as_str())?;
    let member_name = coord.member_name.as_str();

    match parent_type {
        GraphQLType::Enum(enum_type) =>
            Ok(enum_type.value(member_name).map(|enum_value| {
                ResolvedSchemaElement::EnumValue { enum_type, enum_value }
            })),

        GraphQLType::InputObject(input_object_type) =>
            Ok(input_object_type.field(member_name).map(|input_field| {
                ResolvedSchemaElement::InputField { input_object_type, input_field }
            })),

        GraphQLType::Interface(_) | GraphQLType::Object(_) =>
            Ok(lookup_field(parent_type, member_name).map(|field| {
                ResolvedSchemaElement::Field { parent_type, field }
            })),

        GraphQLType::Bool
        | GraphQLType::Float
        | GraphQLType::ID
        | GraphQLType::Int
        | GraphQLType::Scalar(_)
        | GraphQLType::String
        | GraphQLType::Union(_) =>
            Err(invalid_target_error(coordinate, parent_type, "members")),
    }
}

fn resolve_field_argument<'schema>(
    schema: &'schema Schema,
    coordinate: &ast::SchemaCoordinate<'_>,
    coord: &ast::ArgumentCoordinate<'_>,
) -> Result<Option<ResolvedSchemaElement<'schema>>> {
    let parent_type = lookup_owner_type(schema, coordinate, coord.name.as_str())?;
    if !matches!(parent_type, GraphQLType::Interface(_) | GraphQLType::Object(_)) {
        return Err(invalid_target_error(coordinate, parent_type, "fields with arguments"));
    }

    let field_name = coord.field_name.as_str();
    let field = lookup_field(parent_type, field_name).ok_or_else(|| {
        SchemaConsistencyError::UndefinedField {
            coordinate: coordinate.to_string(),
            type_name: parent_type.name().to_string(),
            field_name: field_name.to_string(),
        }
    })?;

    Ok(field.parameter(coord.argument_name.as_str()).map(|argument| {
        ResolvedSchemaElement::FieldArgument { parent_type, field, argument }
    }))
}

/// Looks up a type that the coordinate names as the owner of a member.
fn lookup_owner_type<'schema>(
    schema: &'schema Schema,
    coordinate: &ast::SchemaCoordinate<'_>,
    type_name: &str,
) -> Result<&'schema GraphQLType> {
    schema.get_type(type_name).ok_or_else(|| {
        SchemaConsistencyError::UndefinedType {
            coordinate: coordinate.to_string(),
            type_name: type_name.to_string(),
        }
    })
}

/// Field lookup on an object or interface type; `None` for any other kind.
fn lookup_field<'schema>(
    parent_type: &'schema GraphQLType,
    field_name: &str,
) -> Option<&'schema Field> {
    match parent_type {
        GraphQLType::Interface(iface_type) => iface_type.field(field_name),
        GraphQLType::Object(obj_type) => obj_type.field(field_name),
        _ => None,
    }
}

fn invalid_target_error(
    coordinate: &ast::SchemaCoordinate<'_>,
    parent_type: &GraphQLType,
    target: &'static str,
) -> SchemaConsistencyError {
    SchemaConsistencyError::InvalidCoordinateTarget {
        coordinate: coordinate.to_string(),
        type_name: parent_type.name().to_string(),
        type_kind: GraphQLTypeKind::from(parent_type),
        target,
    }
}
