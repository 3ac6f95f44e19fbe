use crate::loc;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::types::DeprecationState;
use crate::types::Directive;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::ObjectType;
use crate::types::Value;
use std::path::PathBuf;

fn build(sdl: &str) -> Result<Schema, SchemaBuildError> {
    Schema::builder().load_str(None, sdl)?.build()
}

#[test]
fn empty_schema_has_builtins() {
    let schema = Schema::builder().build().unwrap();
    let type_names: Vec<_> = schema.all_types().map(GraphQLType::name).collect();
    assert_eq!(type_names, vec!["Boolean", "Float", "ID", "Int", "String"]);
    let directive_names: Vec<_> = schema.all_directives().map(Directive::name).collect();
    assert_eq!(directive_names, vec!["deprecated", "include", "skip", "specifiedBy"]);
}

#[test]
fn loads_every_kind_of_type() {
    let schema = build(r#"
        scalar DateTime
        enum Role { ADMIN USER }
        input UserFilter { role: Role }
        interface Node { id: ID! }
        type User implements Node { id: ID! role: Role }
        union SearchResult = User
        type Query { users(filter: UserFilter): [User!]! }
    "#).unwrap();

    for (name, kind) in [
        ("DateTime", GraphQLTypeKind::Scalar),
        ("Role", GraphQLTypeKind::Enum),
        ("UserFilter", GraphQLTypeKind::InputObject),
        ("Node", GraphQLTypeKind::Interface),
        ("User", GraphQLTypeKind::Object),
        ("SearchResult", GraphQLTypeKind::Union),
        ("Query", GraphQLTypeKind::Object),
    ] {
        assert_eq!(schema.get_type(name).unwrap().kind(), kind, "{name}");
    }

    let user = schema.get_type("User").unwrap().as_object().unwrap();
    assert_eq!(user.interface_names(), vec!["Node"]);
    let users_field = schema.get_type("Query").unwrap().as_object().unwrap()
        .field("users")
        .unwrap();
    assert_eq!(users_field.type_annotation().to_string(), "[User!]!");
    let filter_param = users_field.parameter("filter").unwrap();
    assert_eq!(
        filter_param
            .type_annotation()
            .innermost_named_type_annotation()
            .graphql_type(&schema)
            .map(GraphQLType::kind),
        Some(GraphQLTypeKind::InputObject),
    );
}

#[test]
fn records_sdl_locations() {
    let schema = Schema::builder()
        .load_str(Some(PathBuf::from("schema.graphql")), "type Query {\n  hello: String\n}")
        .unwrap()
        .build()
        .unwrap();
    let query = schema.get_type("Query").unwrap();
    let loc::SchemaDefLocation::Schema(file_pos) = query.def_location() else {
        panic!("expected an SDL location, got {:?}", query.def_location());
    };
    assert_eq!(file_pos.line, 1);
    assert_eq!(file_pos.file.as_deref(), Some(std::path::Path::new("schema.graphql")));
    assert_eq!(query.def_location().to_string(), "schema.graphql:1:1");

    let hello = query.as_object().unwrap().field("hello").unwrap();
    assert!(matches!(
        hello.def_location(),
        loc::SchemaDefLocation::Schema(loc::FilePosition { line: 2, .. }),
    ));
}

#[test]
fn records_descriptions_and_deprecations() {
    let schema = build(r#"
        "A person."
        type User {
          "Full name."
          name: String
          fullName: String @deprecated(reason: "Use `name`.")
          nick: String @deprecated
        }
    "#).unwrap();
    let user = schema.get_type("User").unwrap();
    assert_eq!(user.description(), Some("A person."));

    let user = user.as_object().unwrap();
    assert_eq!(user.field("name").unwrap().description(), Some("Full name."));
    assert_eq!(
        user.field("fullName").unwrap().deprecation_state(),
        DeprecationState::Deprecated("Use `name`."),
    );
    assert_eq!(
        user.field("nick").unwrap().deprecation_state(),
        DeprecationState::Deprecated("No longer supported"),
    );
}

#[test]
fn loads_parameter_default_values() {
    let schema = build("type Query { posts(first: Int = 10): [String] }").unwrap();
    let first = schema.get_type("Query").unwrap().as_object().unwrap()
        .field("posts").unwrap()
        .parameter("first").unwrap();
    assert_eq!(first.default_value(), Some(&Value::Int(10.into())));
}

#[test]
fn schema_definition_is_accepted_and_ignored() {
    let schema = build("schema { query: Root } type Root { ok: Boolean }").unwrap();
    assert!(schema.get_type("Root").is_some());
    assert!(schema.get_type("schema").is_none());
}

// =============================================================================
// Directives
// =============================================================================

#[test]
fn loads_custom_directives() {
    let schema = build(r#"
        "Marks a field as requiring auth."
        directive @auth(role: String! = "ADMIN") repeatable on FIELD_DEFINITION | OBJECT
    "#).unwrap();
    let auth = schema.get_directive("auth").unwrap();
    assert_eq!(auth.description(), Some("Marks a field as requiring auth."));
    assert!(auth.is_repeatable());
    assert!(!auth.is_builtin());
    assert_eq!(auth.locations(), ["FIELD_DEFINITION", "OBJECT"]);
    assert_eq!(
        auth.parameter("role").unwrap().default_value(),
        Some(&Value::String("ADMIN".to_string())),
    );
}

#[test]
fn sdl_may_redefine_builtin_directive() {
    let schema = build("directive @deprecated(reason: String, since: String) on FIELD_DEFINITION")
        .unwrap();
    let deprecated = schema.get_directive("deprecated").unwrap();
    assert!(!deprecated.is_builtin());
    assert!(deprecated.parameter("since").is_some());
    assert_eq!(schema.all_directives().filter(|d| d.name() == "deprecated").count(), 1);
}

#[test]
fn duplicate_directive_is_rejected() {
    let err = build("directive @a on FIELD directive @a on OBJECT").unwrap_err();
    assert!(matches!(
        err,
        SchemaBuildError::DuplicateDirectiveDefinition { ref directive_name, .. }
            if directive_name == "a",
    ));
}

// =============================================================================
// Duplicates
// =============================================================================

#[test]
fn duplicate_type_is_rejected() {
    let err = build("type A { x: Int } enum A { X }").unwrap_err();
    let SchemaBuildError::DuplicateTypeDefinition { type_name, def1, def2 } = &err else {
        panic!("expected DuplicateTypeDefinition, got {err:?}");
    };
    assert_eq!(type_name, "A");
    assert_ne!(def1, def2);
}

#[test]
fn redefining_builtin_scalar_is_rejected() {
    let err = build("scalar String").unwrap_err();
    let SchemaBuildError::DuplicateTypeDefinition { type_name, def1, .. } = &err else {
        panic!("expected DuplicateTypeDefinition, got {err:?}");
    };
    assert_eq!(type_name, "String");
    assert_eq!(def1, &loc::SchemaDefLocation::GraphQLBuiltIn);
}

#[test]
fn duplicate_members_are_rejected() {
    for (sdl, type_name, member_name) in [
        ("type A { x: Int x: String }", "A", "x"),
        ("interface I { x: Int x: Int }", "I", "x"),
        ("input In { x: Int x: Int }", "In", "x"),
        ("enum E { X Y X }", "E", "X"),
        ("type A { x: Int } extend type A { x: Int }", "A", "x"),
        ("enum E { X } extend enum E { X }", "E", "X"),
    ] {
        let err = build(sdl).unwrap_err();
        assert!(
            matches!(
                &err,
                SchemaBuildError::DuplicateMemberDefinition {
                    type_name: t,
                    member_name: m,
                    ..
                } if t == type_name && m == member_name,
            ),
            "{sdl}: {err:?}",
        );
    }
}

#[test]
fn duplicate_field_arguments_are_rejected() {
    let err = build("type Query { f(a: Int, a: String): Int }").unwrap_err();
    let SchemaBuildError::DuplicateArgumentDefinition {
        owner,
        argument_name,
        def1,
        def2,
    } = &err else {
        panic!("expected DuplicateArgumentDefinition, got {err:?}");
    };
    assert_eq!(owner, "Query.f");
    assert_eq!(argument_name, "a");
    assert_ne!(def1, def2);
    assert!(
        err.to_string()
            .starts_with("The `a` argument of `Query.f` is defined more than once ("),
        "{err}",
    );
}

#[test]
fn duplicate_field_arguments_in_extension_are_rejected() {
    let err = build("type Query { f: Int } extend type Query { g(x: Int, x: Int): Int }")
        .unwrap_err();
    assert!(
        matches!(
            &err,
            SchemaBuildError::DuplicateArgumentDefinition { owner, argument_name, .. }
                if owner == "Query.g" && argument_name == "x",
        ),
        "{err:?}",
    );
}

#[test]
fn duplicate_directive_arguments_are_rejected() {
    let err = build("directive @d(x: Int, x: String) on FIELD").unwrap_err();
    let SchemaBuildError::DuplicateArgumentDefinition { owner, argument_name, .. } = &err else {
        panic!("expected DuplicateArgumentDefinition, got {err:?}");
    };
    assert_eq!(owner, "@d");
    assert_eq!(argument_name, "x");
}

#[test]
fn same_argument_name_on_different_fields_is_allowed() {
    let schema = build(
        "type Query { a(id: ID): Int b(id: ID): Int } directive @d(id: ID) on FIELD",
    ).unwrap();
    assert!(schema.resolve_coordinate("Query.a(id:)").unwrap().is_some());
    assert!(schema.resolve_coordinate("Query.b(id:)").unwrap().is_some());
    assert!(schema.resolve_coordinate("@d(id:)").unwrap().is_some());
}

#[test]
fn duplicates_across_strings_are_rejected() {
    let err = Schema::builder()
        .load_str(Some(PathBuf::from("a.graphql")), "type A { x: Int }")
        .unwrap()
        .load_str(Some(PathBuf::from("b.graphql")), "type A { y: Int }")
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "The `A` type is defined more than once (a.graphql:1:1 and b.graphql:1:1)",
    );
}

// =============================================================================
// Extensions
// =============================================================================

#[test]
fn extensions_add_members() {
    let schema = build(r#"
        type Query { a: Int }
        extend type Query { b: Int }
        interface Node { id: ID }
        extend interface Node @tag { name: String }
        enum Color { RED }
        extend enum Color { GREEN }
        input Filter { a: Int }
        extend input Filter { b: Int }
        union U = Query
        extend union U = Node
        scalar Url
        extend scalar Url @specifiedBy(url: "https://url.spec.whatwg.org")
    "#).unwrap();

    let query = schema.get_type("Query").unwrap().as_object().unwrap();
    assert!(query.field("a").is_some() && query.field("b").is_some());
    let node = schema.get_type("Node").unwrap().as_interface().unwrap();
    assert!(node.field("name").is_some());
    assert_eq!(node.directives().len(), 1);
    let color = schema.get_type("Color").unwrap().as_enum().unwrap();
    assert!(color.value("GREEN").is_some());
    let filter = schema.get_type("Filter").unwrap().as_input_object().unwrap();
    assert_eq!(filter.field("b").unwrap().parent_type_name(), "Filter");
    let union_type = schema.get_type("U").unwrap().as_union().unwrap();
    assert_eq!(union_type.member_type_names(), vec!["Query", "Node"]);
    let url = schema.get_type("Url").unwrap().as_scalar().unwrap();
    assert_eq!(url.directives()[0].directive_name(), "specifiedBy");
}

/// Extensions are applied at build time, so an extension may precede the
/// definition it extends.
#[test]
fn extension_may_precede_definition() {
    let schema = Schema::builder()
        .load_str(None, "extend type Query { b: Int }")
        .unwrap()
        .load_str(None, "type Query { a: Int }")
        .unwrap()
        .build()
        .unwrap();
    let query = schema.get_type("Query").unwrap().as_object().unwrap();
    let names: Vec<_> = query.fields().keys().map(String::as_str).collect();
    assert_eq!(names, vec!["__typename", "a", "b"]);
}

#[test]
fn extension_of_undefined_type_is_rejected() {
    let err = build("extend type Missing { a: Int }").unwrap_err();
    assert!(matches!(
        err,
        SchemaBuildError::ExtensionOfUndefinedType { ref type_name, .. } if type_name == "Missing",
    ));
}

#[test]
fn extension_of_wrong_kind_is_rejected() {
    let err = build("enum Color { RED } extend type Color { a: Int }").unwrap_err();
    let SchemaBuildError::InvalidExtensionType { type_name, type_kind, extension_kind, .. } = &err
    else {
        panic!("expected InvalidExtensionType, got {err:?}");
    };
    assert_eq!(type_name, "Color");
    assert_eq!(*type_kind, GraphQLTypeKind::Enum);
    assert_eq!(*extension_kind, GraphQLTypeKind::Object);
}

// =============================================================================
// Programmatic construction and loading errors
// =============================================================================

#[test]
fn programmatic_types_and_directives() {
    let schema = Schema::builder()
        .add_type(GraphQLType::Enum(
            EnumType::new("Color").with_value(EnumValue::new("RED")),
        ))
        .unwrap()
        .add_type(GraphQLType::Object(ObjectType::new("Query")))
        .unwrap()
        .add_directive(Directive::new("cached").with_location("FIELD_DEFINITION"))
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(
        schema.get_type("Color").unwrap().def_location(),
        &loc::SchemaDefLocation::Programmatic,
    );
    assert!(schema.get_directive("cached").is_some());
    assert!(schema.get_directive("skip").is_some());

    let err = Schema::builder()
        .add_type(GraphQLType::Object(ObjectType::new("Query")))
        .unwrap()
        .load_str(None, "type Query { a: Int }")
        .unwrap_err();
    assert!(matches!(err, SchemaBuildError::DuplicateTypeDefinition { .. }));
}

#[test]
fn invalid_sdl_is_a_parse_error() {
    let err = Schema::builder()
        .load_str(Some(PathBuf::from("bad.graphql")), "type Query {")
        .unwrap_err();
    let SchemaBuildError::ParseError { file, .. } = &err else {
        panic!("expected ParseError, got {err:?}");
    };
    assert_eq!(file.as_deref(), Some(std::path::Path::new("bad.graphql")));
    assert!(err.to_string().starts_with("Error parsing schema bad.graphql: "));
}

#[test]
fn missing_file_is_a_read_error() {
    let path = std::env::temp_dir().join("libgraphql-schema-coordinate-missing.graphql");
    let err = Schema::builder().load_file(&path).unwrap_err();
    assert!(matches!(
        err,
        SchemaBuildError::SchemaFileReadError { ref file_path, .. } if file_path == &path,
    ));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn loads_files() {
    let dir = std::env::temp_dir()
        .join(format!("libgraphql-schema-coordinate-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let types_path = dir.join("types.graphql");
    let ext_path = dir.join("ext.graphql");
    std::fs::write(&types_path, "type Query { a: Int }").unwrap();
    std::fs::write(&ext_path, "extend type Query { b: Int }").unwrap();

    let schema = Schema::builder()
        .load_files([&ext_path, &types_path])
        .unwrap()
        .build()
        .unwrap();
    let b_field = schema.get_type("Query").unwrap().as_object().unwrap()
        .field("b")
        .unwrap();
    let loc::SchemaDefLocation::Schema(file_pos) = b_field.def_location() else {
        panic!("expected an SDL location");
    };
    assert_eq!(file_pos.file.as_ref(), Some(&ext_path));

    std::fs::remove_dir_all(&dir).unwrap();
}
