use crate::ast;
use crate::resolve::ResolvedSchemaElement;
use crate::resolve::SchemaConsistencyError;
use crate::resolve::resolve_schema_coordinate;
use crate::resolve::tests::test_schema::test_schema;
use crate::schema::Schema;
use crate::types::GraphQLTypeKind;

fn resolve<'schema>(
    schema: &'schema Schema,
    source: &str,
) -> Result<Option<ResolvedSchemaElement<'schema>>, SchemaConsistencyError> {
    let coordinate = ast::SchemaCoordinate::parse(source).unwrap();
    resolve_schema_coordinate(schema, &coordinate)
}

fn resolve_found<'schema>(schema: &'schema Schema, source: &str) -> ResolvedSchemaElement<'schema> {
    match resolve(schema, source) {
        Ok(Some(element)) => element,
        other => panic!("expected `{source}` to resolve, got {other:?}"),
    }
}

fn assert_not_found(schema: &Schema, source: &str) {
    let result = resolve(schema, source);
    assert!(matches!(result, Ok(None)), "`{source}`: {result:?}");
}

// =============================================================================
// Type coordinates
// =============================================================================

#[test]
fn type_coordinate_resolves_every_kind() {
    let schema = test_schema();
    for (source, kind) in [
        ("Query", GraphQLTypeKind::Object),
        ("Node", GraphQLTypeKind::Interface),
        ("Role", GraphQLTypeKind::Enum),
        ("UserFilter", GraphQLTypeKind::InputObject),
        ("SearchResult", GraphQLTypeKind::Union),
        ("DateTime", GraphQLTypeKind::Scalar),
        ("Boolean", GraphQLTypeKind::Bool),
        ("ID", GraphQLTypeKind::ID),
    ] {
        let ResolvedSchemaElement::NamedType { graphql_type } = resolve_found(&schema, source)
        else {
            panic!("expected `{source}` to resolve to a named type");
        };
        assert_eq!(graphql_type.kind(), kind, "{source}");
        assert_eq!(graphql_type.name(), source);
    }
}

#[test]
fn type_coordinate_miss_is_not_found() {
    let schema = test_schema();
    assert_not_found(&schema, "Mutation");
    // Lookups are case-sensitive.
    assert_not_found(&schema, "query");
}

// =============================================================================
// Member coordinates
// =============================================================================

#[test]
fn member_coordinate_resolves_object_field() {
    let schema = test_schema();
    let ResolvedSchemaElement::Field { parent_type, field } = resolve_found(&schema, "User.name")
    else {
        panic!("expected a field");
    };
    assert_eq!(parent_type.name(), "User");
    assert_eq!(field.name(), "name");
    assert_eq!(field.parent_type_name(), "User");
}

#[test]
fn member_coordinate_resolves_interface_field() {
    let schema = test_schema();
    let element = resolve_found(&schema, "Node.children");
    let ResolvedSchemaElement::Field { parent_type, field } = element else {
        panic!("expected a field, got {element:?}");
    };
    assert_eq!(parent_type.kind(), GraphQLTypeKind::Interface);
    assert_eq!(field.type_annotation().to_string(), "[Node!]!");
}

#[test]
fn member_coordinate_resolves_typename() {
    let schema = test_schema();
    let element = resolve_found(&schema, "User.__typename");
    assert_eq!(element.element_kind(), "Field");
    assert_eq!(element.to_string(), "User.__typename");
}

#[test]
fn member_coordinate_resolves_enum_value() {
    let schema = test_schema();
    let ResolvedSchemaElement::EnumValue { enum_type, enum_value } =
        resolve_found(&schema, "Role.MEMBER")
    else {
        panic!("expected an enum value");
    };
    assert_eq!(enum_type.name(), "Role");
    assert_eq!(enum_value.name(), "MEMBER");
    assert_eq!(enum_value.description(), Some("A regular user."));
}

#[test]
fn member_coordinate_resolves_input_field() {
    let schema = test_schema();
    let ResolvedSchemaElement::InputField { input_object_type, input_field } =
        resolve_found(&schema, "UserFilter.nameContains")
    else {
        panic!("expected an input field");
    };
    assert_eq!(input_object_type.name(), "UserFilter");
    assert_eq!(input_field.type_annotation().to_string(), "String");
}

#[test]
fn member_coordinate_leaf_miss_is_not_found() {
    let schema = test_schema();
    assert_not_found(&schema, "User.email");
    assert_not_found(&schema, "Node.name");
    assert_not_found(&schema, "Role.OWNER");
    assert_not_found(&schema, "Role.admin");
    assert_not_found(&schema, "UserFilter.email");
    // Input objects have no implicit `__typename`.
    assert_not_found(&schema, "UserFilter.__typename");
}

#[test]
fn member_coordinate_on_missing_type_is_error() {
    let schema = test_schema();
    let err = resolve(&schema, "MissingType.field").unwrap_err();
    assert_eq!(err, SchemaConsistencyError::UndefinedType {
        coordinate: "MissingType.field".to_string(),
        type_name: "MissingType".to_string(),
    });
    assert_eq!(err.coordinate(), "MissingType.field");
}

#[test]
fn member_coordinate_on_memberless_type_is_error() {
    let schema = test_schema();
    for (source, type_name, type_kind) in [
        ("DateTime.value", "DateTime", GraphQLTypeKind::Scalar),
        ("SearchResult.User", "SearchResult", GraphQLTypeKind::Union),
        ("String.length", "String", GraphQLTypeKind::String),
        ("Boolean.true", "Boolean", GraphQLTypeKind::Bool),
    ] {
        let err = resolve(&schema, source).unwrap_err();
        assert_eq!(err, SchemaConsistencyError::InvalidCoordinateTarget {
            coordinate: source.to_string(),
            type_name: type_name.to_string(),
            type_kind,
            target: "members",
        });
    }
}

#[test]
fn invalid_target_message() {
    let schema = test_schema();
    let err = resolve(&schema, "SearchResult.User").unwrap_err();
    assert_eq!(
        err.to_string(),
        "`SearchResult.User` cannot be resolved: `SearchResult` is a Union type, \
        which has no members",
    );
}

// =============================================================================
// Argument coordinates
// =============================================================================

#[test]
fn argument_coordinate_resolves_field_argument() {
    let schema = test_schema();
    let ResolvedSchemaElement::FieldArgument { parent_type, field, argument } =
        resolve_found(&schema, "Query.user(includeDisabled:)")
    else {
        panic!("expected a field argument");
    };
    assert_eq!(parent_type.name(), "Query");
    assert_eq!(field.name(), "user");
    assert_eq!(argument.name(), "includeDisabled");
    assert_eq!(argument.description(), Some("Include disabled users."));
    assert_eq!(argument.type_annotation().to_string(), "Boolean");
    assert!(argument.default_value().is_some());
}

#[test]
fn argument_coordinate_resolves_interface_field_argument() {
    let schema = test_schema();
    let element = resolve_found(&schema, "Node.children(first:)");
    assert_eq!(element.element_kind(), "FieldArgument");
    assert_eq!(element.name(), "first");
}

#[test]
fn argument_coordinate_leaf_miss_is_not_found() {
    let schema = test_schema();
    assert_not_found(&schema, "Query.user(missingArg:)");
    assert_not_found(&schema, "User.name(id:)");
}

#[test]
fn argument_coordinate_on_missing_type_is_error() {
    let schema = test_schema();
    let err = resolve(&schema, "Mutation.createUser(input:)").unwrap_err();
    assert!(matches!(
        &err,
        SchemaConsistencyError::UndefinedType { type_name, .. } if type_name == "Mutation",
    ));
}

#[test]
fn argument_coordinate_on_missing_field_is_error() {
    let schema = test_schema();
    let err = resolve(&schema, "Query.users(first:)").unwrap_err();
    assert_eq!(err, SchemaConsistencyError::UndefinedField {
        coordinate: "Query.users(first:)".to_string(),
        type_name: "Query".to_string(),
        field_name: "users".to_string(),
    });
}

/// Enum values and input fields have no arguments, so the type itself is the
/// wrong kind even when the member exists.
#[test]
fn argument_coordinate_on_non_field_type_is_error() {
    let schema = test_schema();
    for (source, type_kind) in [
        ("Role.ADMIN(arg:)", GraphQLTypeKind::Enum),
        ("UserFilter.role(arg:)", GraphQLTypeKind::InputObject),
        ("SearchResult.User(arg:)", GraphQLTypeKind::Union),
        ("DateTime.value(arg:)", GraphQLTypeKind::Scalar),
    ] {
        let err = resolve(&schema, source).unwrap_err();
        assert!(
            matches!(
                &err,
                SchemaConsistencyError::InvalidCoordinateTarget {
                    type_kind: k,
                    target: "fields with arguments",
                    ..
                } if *k == type_kind,
            ),
            "`{source}`: {err:?}",
        );
    }
}

// =============================================================================
// Directive coordinates
// =============================================================================

#[test]
fn directive_coordinate_resolves_custom_and_builtin() {
    let schema = test_schema();
    let ResolvedSchemaElement::Directive { directive } = resolve_found(&schema, "@cached")
    else {
        panic!("expected a directive");
    };
    assert_eq!(directive.description(), Some("Caches a field's result."));

    for builtin in ["@deprecated", "@include", "@skip", "@specifiedBy"] {
        let element = resolve_found(&schema, builtin);
        assert_eq!(element.to_string(), builtin);
    }
}

#[test]
fn directive_coordinate_miss_is_not_found() {
    let schema = test_schema();
    assert_not_found(&schema, "@missingDirective");
    assert_not_found(&schema, "@Cached");
}

#[test]
fn directive_argument_coordinate_resolves() {
    let schema = test_schema();
    let ResolvedSchemaElement::DirectiveArgument { directive, argument } =
        resolve_found(&schema, "@cached(ttl:)")
    else {
        panic!("expected a directive argument");
    };
    assert_eq!(directive.name(), "cached");
    assert_eq!(argument.name(), "ttl");

    let element = resolve_found(&schema, "@deprecated(reason:)");
    assert_eq!(element.to_string(), "@deprecated(reason:)");
}

#[test]
fn directive_argument_leaf_miss_is_not_found() {
    let schema = test_schema();
    assert_not_found(&schema, "@cached(ttl2:)");
    assert_not_found(&schema, "@skip(unless:)");
}

#[test]
fn directive_argument_on_missing_directive_is_error() {
    let schema = test_schema();
    let err = resolve(&schema, "@missingDirective(arg:)").unwrap_err();
    assert_eq!(err, SchemaConsistencyError::UndefinedDirective {
        coordinate: "@missingDirective(arg:)".to_string(),
        directive_name: "missingDirective".to_string(),
    });
    assert_eq!(
        err.to_string(),
        "`@missingDirective(arg:)` refers to an argument of `@missingDirective`, but \
        no directive named `@missingDirective` is defined",
    );
}

// =============================================================================
// Properties
// =============================================================================

/// Every coordinate that resolves prints back to itself.
#[test]
fn resolved_elements_display_their_coordinate() {
    let schema = test_schema();
    for source in [
        "Query",
        "User.fullName",
        "Role.GUEST",
        "UserFilter.role",
        "Query.search(term:)",
        "@cached",
        "@cached(scope:)",
    ] {
        assert_eq!(resolve_found(&schema, source).to_string(), source);
    }
}

/// Resolution is a pure function of the coordinate and the schema.
#[test]
fn resolution_is_deterministic() {
    let schema = test_schema();
    for source in ["User.name", "Role.OWNER", "Missing.x", "@cached(ttl:)"] {
        assert_eq!(resolve(&schema, source), resolve(&schema, source));
    }
}

/// An owned coordinate resolves exactly like the borrowed one.
#[test]
fn owned_coordinate_resolves_the_same() {
    let schema = test_schema();
    let owned = ast::SchemaCoordinate::parse("Query.user(id:)").unwrap().into_owned();
    let element = resolve_schema_coordinate(&schema, &owned).unwrap().unwrap();
    assert_eq!(element, resolve_found(&schema, "Query.user(id:)"));
}
