use std::borrow::Cow;

use crate::ast::names::{Name, Variable};
use crate::location::Location;

/// A GraphQL input value literal.
///
/// `Int`/`Float` carry the raw source text rather than a coerced
/// `i32`/`f64` — numeric literals are preserved verbatim, with no numeric
/// coercion performed here; that conversion belongs to a downstream
/// consumer (`valueFromAST`-style code), not to parsing.
#[derive(Clone, Debug, PartialEq)]
pub enum Value<'src> {
    Variable(Variable<'src>),
    Int(IntValue<'src>),
    Float(FloatValue<'src>),
    String(StringValue<'src>),
    Boolean(BooleanValue<'src>),
    Null(NullValue<'src>),
    Enum(EnumValue<'src>),
    List(ListValue<'src>),
    Object(ObjectValue<'src>),
}

/// An integer literal, stored as the exact source text (e.g. `"-042"` would
/// be a lexical error before this node ever exists, but `"0"`/`"-7"` are
/// kept byte-for-byte).
#[derive(Clone, Debug, PartialEq)]
pub struct IntValue<'src> {
    pub value: Cow<'src, str>,
    pub location: Option<Location<'src>>,
}

/// A float literal, stored as the exact source text.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatValue<'src> {
    pub value: Cow<'src, str>,
    pub location: Option<Location<'src>>,
}

/// A string literal. `block` distinguishes `"""…"""` from `"…"`; `value`
/// is already escape-decoded (and, for block strings, dedented).
#[derive(Clone, Debug, PartialEq)]
pub struct StringValue<'src> {
    pub value: Cow<'src, str>,
    pub block: bool,
    pub location: Option<Location<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BooleanValue<'src> {
    pub value: bool,
    pub location: Option<Location<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NullValue<'src> {
    pub location: Option<Location<'src>>,
}

/// An unquoted name that is not `true`, `false`, or `null`.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue<'src> {
    pub value: Cow<'src, str>,
    pub location: Option<Location<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListValue<'src> {
    pub values: Vec<Value<'src>>,
    pub location: Option<Location<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue<'src> {
    pub fields: Vec<ObjectField<'src>>,
    pub location: Option<Location<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField<'src> {
    pub name: Name<'src>,
    pub value: Value<'src>,
    pub location: Option<Location<'src>>,
}
