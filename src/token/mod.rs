mod kind;

use std::borrow::Cow;

pub use kind::TokenKind;

/// A single lexical token, located within its source.
///
/// This token never carries attached trivia: comments are first-class
/// tokens of their own ([`TokenKind::Comment`]) rather than bagged onto
/// the following significant token. A token stream built on top of this
/// is what decides whether to skip them.
///
/// `prev` is the start offset of the token immediately before this one in
/// the stream (`None` for `Sof`), rather than a full back-reference chain.
/// graphql-js links tokens into a doubly-linked list kept alive by a
/// garbage collector; without a GC, making `prev` an owned `Token` would
/// mean every clone of a `Token` recursively clones the entire prefix of
/// the token stream. An offset is enough for anything this crate does
/// with it (error messages, `Location` bookkeeping).
#[derive(Clone, Debug, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    /// Byte offset of the first byte of this token in the source body.
    pub start: usize,
    /// Byte offset one past the last byte of this token.
    pub end: usize,
    /// 1-based line number of `start`.
    pub line: usize,
    /// 1-based column number of `start`.
    pub column: usize,
    /// The decoded value of the token, for kinds that carry one: `Name`,
    /// `Int`, `Float` (raw source text, still undecoded as a number),
    /// `String`/`BlockString` (escape-decoded, dedented), `Comment`
    /// (leading `#` and at most one leading space stripped). `None` for
    /// punctuators and `Sof`/`Eof`.
    pub value: Option<Cow<'src, str>>,
    /// Start offset of the previous token in the stream, or `None` if this
    /// is the `Sof` token.
    pub prev: Option<usize>,
}

impl<'src> Token<'src> {
    pub fn sof() -> Self {
        Self {
            kind: TokenKind::Sof,
            start: 0,
            end: 0,
            line: 1,
            column: 1,
            value: None,
            prev: None,
        }
    }

    pub fn description(&self) -> String {
        if let Some(text) = self.kind.punctuator_text() {
            return format!("\"{text}\"");
        }
        match (&self.kind, &self.value) {
            (TokenKind::Name, Some(v)) => format!("Name \"{v}\""),
            (TokenKind::Int, Some(v)) => format!("Int \"{v}\""),
            (TokenKind::Float, Some(v)) => format!("Float \"{v}\""),
            (TokenKind::String, _) => "String".to_string(),
            (TokenKind::BlockString, _) => "BlockString".to_string(),
            (TokenKind::Comment, _) => "Comment".to_string(),
            _ => format!("{:?}", self.kind),
        }
    }
}
