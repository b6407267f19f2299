mod support;

use graphql_doc_parser::ast::{Definition, OperationType, Selection, Value};
use support::{parse_err, parse_ok};

#[test]
fn shorthand_query_has_implicit_query_operation() {
    let doc = parse_ok("{ a b }");
    assert_eq!(doc.definitions.len(), 1);
    let Definition::OperationDefinition(op) = &doc.definitions[0] else {
        panic!("expected an operation definition");
    };
    assert_eq!(op.operation_type, OperationType::Query);
    assert!(op.name.is_none());
    assert!(op.variable_definitions.is_empty());
    assert!(op.directives.is_empty());
    assert_eq!(op.selection_set.selections.len(), 2);

    let names: Vec<&str> = op
        .selection_set
        .selections
        .iter()
        .map(|s| match s {
            Selection::Field(f) => f.name.value.as_ref(),
            _ => panic!("expected a field"),
        })
        .collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn named_query_with_variables_and_directives() {
    let doc = parse_ok(
        r#"query Hero($episode: Episode, $withFriends: Boolean! = true) @cached {
            hero(episode: $episode) {
                name
                friends @include(if: $withFriends) { name }
            }
        }"#,
    );
    let Definition::OperationDefinition(op) = &doc.definitions[0] else {
        panic!("expected an operation definition");
    };
    assert_eq!(op.operation_type, OperationType::Query);
    assert_eq!(op.name.as_ref().unwrap().value, "Hero");
    assert_eq!(op.variable_definitions.len(), 2);
    assert_eq!(op.variable_definitions[0].variable.value, "episode");
    assert_eq!(op.variable_definitions[1].variable.value, "withFriends");
    assert!(op.variable_definitions[1].default_value.is_some());
    assert_eq!(op.directives.len(), 1);
    assert_eq!(op.directives[0].name.value, "cached");
}

#[test]
fn mutation_and_subscription_keywords() {
    let doc = parse_ok("mutation { likeStory(storyId: 1) { story { likeCount } } }");
    let Definition::OperationDefinition(op) = &doc.definitions[0] else {
        panic!("expected an operation definition");
    };
    assert_eq!(op.operation_type, OperationType::Mutation);

    let doc = parse_ok("subscription NewMessage { messageAdded { text } }");
    let Definition::OperationDefinition(op) = &doc.definitions[0] else {
        panic!("expected an operation definition");
    };
    assert_eq!(op.operation_type, OperationType::Subscription);
}

#[test]
fn field_alias_and_arguments() {
    let doc = parse_ok(r#"{ alias: field(arg: 1, arg2: "s") }"#);
    let Definition::OperationDefinition(op) = &doc.definitions[0] else {
        panic!("expected an operation definition");
    };
    let Selection::Field(field) = &op.selection_set.selections[0] else {
        panic!("expected a field");
    };
    assert_eq!(field.alias.as_ref().unwrap().value, "alias");
    assert_eq!(field.name.value, "field");
    assert_eq!(field.arguments.len(), 2);
    assert_eq!(field.arguments[0].name.value, "arg");
    match &field.arguments[0].value {
        Value::Int(v) => assert_eq!(v.value, "1"),
        other => panic!("expected an int value, got {other:?}"),
    }
    assert_eq!(field.arguments[1].name.value, "arg2");
    match &field.arguments[1].value {
        Value::String(v) => {
            assert_eq!(v.value, "s");
            assert!(!v.block);
        }
        other => panic!("expected a string value, got {other:?}"),
    }
}

#[test]
fn field_without_alias_has_no_alias() {
    let doc = parse_ok("{ field }");
    let Definition::OperationDefinition(op) = &doc.definitions[0] else {
        panic!("expected an operation definition");
    };
    let Selection::Field(field) = &op.selection_set.selections[0] else {
        panic!("expected a field");
    };
    assert!(field.alias.is_none());
    assert_eq!(field.name.value, "field");
}

#[test]
fn multiple_operations_in_one_document() {
    let doc = parse_ok(
        r#"
        query A { a }
        query B { b }
        mutation C { c }
        "#,
    );
    assert_eq!(doc.definitions.len(), 3);
}

#[test]
fn empty_document_fails_at_offset_zero() {
    let err = parse_err("");
    assert_eq!(err.offset(), 0);
}

#[test]
fn default_value_default_rejects_variable_reference() {
    // default values are parsed in const context; `$y` is only legal in a
    // non-const (selection-level) value position.
    let err = parse_err("query Q($x: Int = $y) { f }");
    assert_eq!(err.offset(), "query Q($x: Int = ".len());
}
