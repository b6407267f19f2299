use std::borrow::Cow;

use crate::location::Location;

/// A bare identifier, e.g. a field name, type name, or argument name.
#[derive(Clone, Debug, PartialEq)]
pub struct Name<'src> {
    pub value: Cow<'src, str>,
    pub location: Option<Location<'src>>,
}

/// A `$name` variable reference, valid only in non-const value positions.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable<'src> {
    pub name: Name<'src>,
    pub location: Option<Location<'src>>,
}
