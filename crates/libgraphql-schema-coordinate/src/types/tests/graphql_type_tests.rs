use crate::loc;
use crate::types::DirectiveAnnotation;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;

#[test]
fn builtin_scalars() {
    for (graphql_type, name, kind) in [
        (GraphQLType::Bool, "Boolean", GraphQLTypeKind::Bool),
        (GraphQLType::Float, "Float", GraphQLTypeKind::Float),
        (GraphQLType::ID, "ID", GraphQLTypeKind::ID),
        (GraphQLType::Int, "Int", GraphQLTypeKind::Int),
        (GraphQLType::String, "String", GraphQLTypeKind::String),
    ] {
        assert_eq!(graphql_type.name(), name);
        assert_eq!(graphql_type.kind(), kind);
        assert_eq!(kind.name(), name);
        assert!(graphql_type.is_builtin());
        assert!(!kind.has_members());
        assert!(graphql_type.description().is_none());
        assert!(!graphql_type.deprecation_state().is_deprecated());
        assert_eq!(graphql_type.def_location(), &loc::SchemaDefLocation::GraphQLBuiltIn);
    }
}

#[test]
fn kinds_with_members() {
    assert!(GraphQLTypeKind::Enum.has_members());
    assert!(GraphQLTypeKind::InputObject.has_members());
    assert!(GraphQLTypeKind::Interface.has_members());
    assert!(GraphQLTypeKind::Object.has_members());
    assert!(!GraphQLTypeKind::Scalar.has_members());
    assert!(!GraphQLTypeKind::Union.has_members());
    assert_eq!(GraphQLTypeKind::InputObject.to_string(), "InputObject");
}

#[test]
fn enum_values_know_their_enum() {
    let color = EnumType::new("Color")
        .with_description("A color.")
        .with_value(EnumValue::new("RED"))
        .with_value(
            EnumValue::new("BLUE")
                .with_directive(DirectiveAnnotation::new("deprecated")),
        );

    assert_eq!(color.value("RED").unwrap().enum_type_name(), "Color");
    assert!(color.value("BLUE").unwrap().deprecation_state().is_deprecated());
    assert!(color.value("red").is_none());
    let names: Vec<_> = color.values().keys().map(String::as_str).collect();
    assert_eq!(names, vec!["RED", "BLUE"]);

    let graphql_type = GraphQLType::Enum(color);
    assert_eq!(graphql_type.description(), Some("A color."));
    assert_eq!(graphql_type.as_enum().unwrap().name(), "Color");
    assert!(graphql_type.as_object().is_none());
    assert!(!graphql_type.is_builtin());
}

#[test]
fn input_fields_know_their_parent() {
    let input = InputObjectType::new("UserFilter")
        .with_field(InputField::new("nameContains", TypeAnnotation::named("String")));
    let field = input.field("nameContains").unwrap();
    assert_eq!(field.parent_type_name(), "UserFilter");
    assert!(input.field("__typename").is_none());
}

#[test]
fn union_members_keep_order() {
    let union_type = UnionType::new("SearchResult")
        .with_member("User")
        .with_member("Post");
    assert_eq!(union_type.member_type_names(), vec!["User", "Post"]);

    let graphql_type = GraphQLType::Union(union_type);
    assert_eq!(graphql_type.kind(), GraphQLTypeKind::Union);
    assert!(graphql_type.as_union().is_some());
}

#[test]
fn custom_scalar() {
    let graphql_type = GraphQLType::Scalar(ScalarType::new("DateTime"));
    assert_eq!(graphql_type.name(), "DateTime");
    assert!(!graphql_type.is_builtin());
    assert_eq!(graphql_type.def_location(), &loc::SchemaDefLocation::Programmatic);
    assert_eq!(graphql_type.def_location().to_string(), "<programmatic>");
}
