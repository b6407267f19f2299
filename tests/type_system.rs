mod support;

use graphql_doc_parser::ast::{Definition, OperationType, TypeDefinition};
use support::{parse_err, parse_ok};

#[test]
fn scalar_with_description() {
    let doc = parse_ok(r#""doc" scalar S"#);
    let Definition::TypeDefinition(TypeDefinition::Scalar(scalar)) = &doc.definitions[0] else {
        panic!("expected a scalar type definition");
    };
    assert_eq!(scalar.description.as_ref().unwrap().value, "doc");
    assert_eq!(scalar.name.value, "S");
}

#[test]
fn block_string_description_on_object_type() {
    let doc = parse_ok(
        r#"
        """
        A user account.
        """
        type User {
            id: ID!
        }
        "#,
    );
    let Definition::TypeDefinition(TypeDefinition::Object(obj)) = &doc.definitions[0] else {
        panic!("expected an object type definition");
    };
    let description = obj.description.as_ref().unwrap();
    assert!(description.block);
    assert_eq!(description.value, "A user account.");
}

#[test]
fn object_type_with_interfaces_and_fields() {
    let doc = parse_ok(
        r#"
        type User implements Node Timestamped {
            id: ID!
            name: String
        }
        "#,
    );
    let Definition::TypeDefinition(TypeDefinition::Object(obj)) = &doc.definitions[0] else {
        panic!("expected an object type definition");
    };
    assert_eq!(obj.name.value, "User");
    assert_eq!(obj.implements.len(), 2);
    assert_eq!(obj.implements[0].value, "Node");
    assert_eq!(obj.implements[1].value, "Timestamped");
    assert_eq!(obj.fields.len(), 2);
    assert_eq!(obj.fields[0].name.value, "id");
}

#[test]
fn interface_and_union_and_enum_and_input() {
    let doc = parse_ok(
        r#"
        interface Node { id: ID! }
        union SearchResult = User | Post
        enum Status { ACTIVE INACTIVE }
        input UserInput { name: String = "anon" }
        "#,
    );
    assert_eq!(doc.definitions.len(), 4);

    let Definition::TypeDefinition(TypeDefinition::Interface(iface)) = &doc.definitions[0] else {
        panic!("expected an interface type definition");
    };
    assert_eq!(iface.name.value, "Node");

    let Definition::TypeDefinition(TypeDefinition::Union(union_def)) = &doc.definitions[1] else {
        panic!("expected a union type definition");
    };
    assert_eq!(union_def.members.len(), 2);
    assert_eq!(union_def.members[0].value, "User");
    assert_eq!(union_def.members[1].value, "Post");

    let Definition::TypeDefinition(TypeDefinition::Enum(enum_def)) = &doc.definitions[2] else {
        panic!("expected an enum type definition");
    };
    assert_eq!(enum_def.values.len(), 2);
    assert_eq!(enum_def.values[0].name.value, "ACTIVE");

    let Definition::TypeDefinition(TypeDefinition::InputObject(input_def)) = &doc.definitions[3]
    else {
        panic!("expected an input object type definition");
    };
    assert_eq!(input_def.fields.len(), 1);
    assert!(input_def.fields[0].default_value.is_some());
}

#[test]
fn union_members_with_leading_pipe() {
    let doc = parse_ok("union SearchResult = | User | Post");
    let Definition::TypeDefinition(TypeDefinition::Union(union_def)) = &doc.definitions[0] else {
        panic!("expected a union type definition");
    };
    assert_eq!(union_def.members.len(), 2);
}

#[test]
fn schema_definition_with_operation_types() {
    let doc = parse_ok(
        r#"
        schema {
            query: Query
            mutation: Mutation
        }
        "#,
    );
    let Definition::SchemaDefinition(schema) = &doc.definitions[0] else {
        panic!("expected a schema definition");
    };
    assert_eq!(schema.operation_types.len(), 2);
    assert_eq!(schema.operation_types[0].operation_type, OperationType::Query);
    assert_eq!(schema.operation_types[0].named_type.value, "Query");
    assert_eq!(schema.operation_types[1].operation_type, OperationType::Mutation);
}

#[test]
fn directive_definition_with_locations() {
    let doc = parse_ok("directive @cached(ttl: Int) repeatable on FIELD | FIELD_DEFINITION");
    let Definition::DirectiveDefinition(directive) = &doc.definitions[0] else {
        panic!("expected a directive definition");
    };
    assert_eq!(directive.name.value, "cached");
    assert_eq!(directive.arguments.len(), 1);
    assert!(directive.repeatable);
    assert_eq!(directive.locations.len(), 2);
    assert_eq!(directive.locations[0].name, "FIELD");
    assert_eq!(directive.locations[1].name, "FIELD_DEFINITION");
}

#[test]
fn directive_location_must_be_from_the_closed_set() {
    let err = parse_err("directive @d on NOT_A_LOCATION");
    assert!(err.offset() > 0);
}

#[test]
fn object_type_extension_requires_at_least_one_addition() {
    parse_ok("extend type User implements Node");
    parse_ok("extend type User @deprecated");
    parse_ok("extend type User { newField: String }");
    let err = parse_err("extend type User");
    assert!(err.offset() > 0);
}

#[test]
fn extend_scalar_is_not_recognized() {
    // Only ObjectTypeExtension is recognized; every other extension kind
    // raises unexpected at the keyword after `extend`.
    let err = parse_err("extend scalar S @foo");
    assert!(err.offset() > 0);
}
