use std::borrow::Cow;

/// A logical starting position for a [`Source`], used when the text being
/// parsed is itself an excerpt of some larger document (e.g. a GraphQL
/// block embedded in another file).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

/// An immutable bundle of the full input text, a human-readable name, and a
/// logical starting offset.
///
/// Both `body` and `name` are plain borrowed `&'src str`s: the parser always
/// lexes directly out of caller-owned text, so there is never an owned copy
/// of either living inside a `Source` value for the AST to outlive. A
/// `Source` is consequently `Copy`-cheap to clone regardless of how many
/// `Location`s embed one; `name()` returns a `Cow` only to leave room for a
/// future owned-name variant without breaking callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Source<'src> {
    pub body: &'src str,
    pub name: &'src str,
    pub location_offset: SourceLocation,
}

impl<'src> Source<'src> {
    /// The default name given to a source that wasn't constructed with an
    /// explicit name.
    pub const DEFAULT_NAME: &'static str = "GraphQL";

    pub fn new(body: &'src str) -> Self {
        Self {
            body,
            name: Self::DEFAULT_NAME,
            location_offset: SourceLocation::default(),
        }
    }

    pub fn with_name(mut self, name: &'src str) -> Self {
        self.name = name;
        self
    }

    pub fn with_location_offset(mut self, offset: SourceLocation) -> Self {
        self.location_offset = offset;
        self
    }

    pub fn body(&self) -> &'src str {
        self.body
    }

    pub fn name(&self) -> Cow<'src, str> {
        Cow::Borrowed(self.name)
    }
}

impl<'src> From<&'src str> for Source<'src> {
    fn from(body: &'src str) -> Self {
        Source::new(body)
    }
}
