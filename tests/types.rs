mod support;

use graphql_doc_parser::ast::Type;
use graphql_doc_parser::{parse_type, ParserOptions};

fn ty(src: &str) -> Type<'_> {
    parse_type(src, ParserOptions::default()).unwrap_or_else(|err| {
        panic!("expected `{src}` to parse as a type, got error:\n{}", err.format_detailed())
    })
}

#[test]
fn bare_named_type() {
    match ty("Int") {
        Type::Named(named) => assert_eq!(named.name.value, "Int"),
        other => panic!("expected a named type, got {other:?}"),
    }
}

#[test]
fn non_null_named_type() {
    match ty("Int!") {
        Type::NonNull(non_null) => match &non_null.of_type {
            Type::Named(named) => assert_eq!(named.name.value, "Int"),
            other => panic!("expected a named type inside non-null, got {other:?}"),
        },
        other => panic!("expected a non-null type, got {other:?}"),
    }
}

#[test]
fn nested_list_and_non_null_wrapping() {
    // `[Int!]!` -> NonNull(List(NonNull(Named(Int))))
    match ty("[Int!]!") {
        Type::NonNull(outer) => match &outer.of_type {
            Type::List(list) => match &list.of_type {
                Type::NonNull(inner) => match &inner.of_type {
                    Type::Named(named) => assert_eq!(named.name.value, "Int"),
                    other => panic!("expected named type, got {other:?}"),
                },
                other => panic!("expected non-null inner type, got {other:?}"),
            },
            other => panic!("expected list type, got {other:?}"),
        },
        other => panic!("expected non-null type, got {other:?}"),
    }
}

#[test]
fn plain_list_of_nullable_named_type() {
    match ty("[String]") {
        Type::List(list) => match &list.of_type {
            Type::Named(named) => assert_eq!(named.name.value, "String"),
            other => panic!("expected named type, got {other:?}"),
        },
        other => panic!("expected list type, got {other:?}"),
    }
}

#[test]
fn double_bang_is_a_syntax_error() {
    // The grammar never recurses into a second non-null wrapper directly;
    // `Int!!` should fail rather than silently collapse.
    assert!(parse_type("Int!!", ParserOptions::default()).is_err());
}
