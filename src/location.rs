use crate::source::Source;
use crate::token::Token;

/// A source location attached to an AST node: a byte range plus the two
/// tokens that bound it and the source they came from.
///
/// `Location.source` is conceptually a non-owning reference to the source;
/// this type clones it instead. `Source`'s fields are plain `&str`
/// borrows, so cloning a `Location` never copies the underlying text —
/// it's a pointer-and-length copy either way.
#[derive(Clone, Debug, PartialEq)]
pub struct Location<'src> {
    pub start: usize,
    pub end: usize,
    pub start_token: Token<'src>,
    pub end_token: Token<'src>,
    pub source: Source<'src>,
}

impl<'src> Location<'src> {
    pub fn new(start_token: Token<'src>, end_token: Token<'src>, source: Source<'src>) -> Self {
        Self {
            start: start_token.start,
            end: end_token.end,
            start_token,
            end_token,
            source,
        }
    }
}

/// The JSON-serializable shape of a [`Location`]: `{start, end}` only.
/// Hand-written rather than derived so that `startToken`/`endToken`/
/// `source` never leak into the wire format.
#[cfg(feature = "serde")]
impl serde::Serialize for Location<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Location", 2)?;
        state.serialize_field("start", &self.start)?;
        state.serialize_field("end", &self.end)?;
        state.end()
    }
}
