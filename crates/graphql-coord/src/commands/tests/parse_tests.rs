use crate::commands::parse::describe_coordinate;
use libgraphql_schema_coordinate::parse_schema_coordinate;

#[test]
fn describes_argument_coordinate() {
    let coordinate = parse_schema_coordinate("Query.user(id:)").unwrap();
    assert_eq!(
        describe_coordinate(&coordinate),
        "ArgumentCoordinate `Query.user(id:)`\n  type: Query\n  field: user\n  argument: id",
    );
}

#[test]
fn describes_directive_coordinate() {
    let coordinate = parse_schema_coordinate("@deprecated").unwrap();
    assert_eq!(
        describe_coordinate(&coordinate),
        "DirectiveCoordinate `@deprecated`\n  directive: deprecated",
    );
}
