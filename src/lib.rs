//! A recursive-descent parser for the GraphQL query and schema-definition
//! language, producing a typed, located abstract syntax tree.
//!
//! This crate covers exactly the parsing core: lexing, the AST node
//! model, the grammar engine, and three public entry points ([`parse`],
//! [`parse_value`], [`parse_type`]). It does not validate, execute, print,
//! or otherwise interpret the documents it parses — those are the
//! responsibility of downstream consumers.
//!
//! ```
//! use graphql_doc_parser::{parse, ParserOptions};
//!
//! let document = parse("{ hero { name } }", ParserOptions::default()).unwrap();
//! assert_eq!(document.definitions.len(), 1);
//! ```

pub mod ast;
mod error;
mod lexer;
mod location;
mod parser;
mod source;
mod token;
mod token_stream;

pub use error::SyntaxError;
pub use location::Location;
pub use parser::{parse, parse_type, parse_value, ParserOptions};
pub use source::{Source, SourceLocation};
pub use token::{Token, TokenKind};
