//! Small shared helpers for the grammar-area test files in this directory:
//! a couple of `parse`/`expect_err` wrappers rather than a full test
//! framework.

use graphql_doc_parser::ast::Document;
use graphql_doc_parser::{parse, ParserOptions, SyntaxError};

/// Parses `src` as a full document, panicking with the syntax error's
/// detailed message on failure.
pub fn parse_ok(src: &str) -> Document<'_> {
    parse(src, ParserOptions::default()).unwrap_or_else(|err| {
        panic!("expected `{src}` to parse, got error:\n{}", err.format_detailed())
    })
}

/// Parses `src` and asserts it fails, returning the `SyntaxError`.
pub fn parse_err(src: &str) -> SyntaxError {
    match parse(src, ParserOptions::default()) {
        Ok(doc) => panic!("expected `{src}` to fail to parse, got {doc:?}"),
        Err(err) => err,
    }
}
