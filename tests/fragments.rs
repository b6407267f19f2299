mod support;

use graphql_doc_parser::ast::{Definition, Selection};
use support::{parse_err, parse_ok};

#[test]
fn spread_inline_with_type_condition_and_bare_inline() {
    let doc = parse_ok("{ ...A ... on T { x } ... { y } }");
    let Definition::OperationDefinition(op) = &doc.definitions[0] else {
        panic!("expected an operation definition");
    };
    let selections = &op.selection_set.selections;
    assert_eq!(selections.len(), 3);

    match &selections[0] {
        Selection::FragmentSpread(spread) => assert_eq!(spread.name.value, "A"),
        other => panic!("expected a fragment spread, got {other:?}"),
    }

    match &selections[1] {
        Selection::InlineFragment(inline) => {
            let cond = inline.type_condition.as_ref().expect("type condition");
            assert_eq!(cond.named_type.value, "T");
            assert_eq!(inline.selection_set.selections.len(), 1);
        }
        other => panic!("expected an inline fragment, got {other:?}"),
    }

    match &selections[2] {
        Selection::InlineFragment(inline) => {
            assert!(inline.type_condition.is_none());
            assert_eq!(inline.selection_set.selections.len(), 1);
        }
        other => panic!("expected an inline fragment, got {other:?}"),
    }
}

#[test]
fn fragment_definition_basic() {
    let doc = parse_ok(
        r#"
        fragment UserFields on User {
            id
            name
        }
        { user { ...UserFields } }
        "#,
    );
    assert_eq!(doc.definitions.len(), 2);
    let Definition::FragmentDefinition(fragment) = &doc.definitions[0] else {
        panic!("expected a fragment definition");
    };
    assert_eq!(fragment.name.value, "UserFields");
    assert_eq!(fragment.type_condition.named_type.value, "User");
    assert_eq!(fragment.selection_set.selections.len(), 2);
}

#[test]
fn fragment_name_cannot_be_on() {
    let err = parse_err("fragment on on Type { x }");
    // The error should be raised while parsing the fragment name, not
    // somewhere downstream.
    assert!(err.message().contains("on") || err.offset() > 0);
}

#[test]
fn fragment_spread_name_cannot_be_on() {
    let err = parse_err("{ ...on }");
    assert!(err.offset() > 0);
}

#[test]
fn inline_fragment_directives() {
    let doc = parse_ok("{ ... on T @skip(if: false) { x } }");
    let Definition::OperationDefinition(op) = &doc.definitions[0] else {
        panic!("expected an operation definition");
    };
    let Selection::InlineFragment(inline) = &op.selection_set.selections[0] else {
        panic!("expected an inline fragment");
    };
    assert_eq!(inline.directives.len(), 1);
    assert_eq!(inline.directives[0].name.value, "skip");
}
