use std::borrow::Cow;

use crate::ast::executable::OperationType;
use crate::ast::names::Name;
use crate::ast::operation_inner::DirectiveAnnotation;
use crate::ast::types::Type;
use crate::ast::values::{StringValue, Value};
use crate::location::Location;

#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub operation_types: Vec<OperationTypeDefinition<'src>>,
    pub location: Option<Location<'src>>,
}

/// A single `query: Query`-shaped root operation type entry within a
/// [`SchemaDefinition`].
#[derive(Clone, Debug, PartialEq)]
pub struct OperationTypeDefinition<'src> {
    pub operation_type: OperationType,
    pub named_type: Name<'src>,
    pub location: Option<Location<'src>>,
}

/// Any named type definition. One production (`TypeDefinition`) dispatches
/// on the keyword following an optional description to build one of
/// these.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeDefinition<'src> {
    Scalar(ScalarTypeDefinition<'src>),
    Object(ObjectTypeDefinition<'src>),
    Interface(InterfaceTypeDefinition<'src>),
    Union(UnionTypeDefinition<'src>),
    Enum(EnumTypeDefinition<'src>),
    InputObject(InputObjectTypeDefinition<'src>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScalarTypeDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub location: Option<Location<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub implements: Vec<Name<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
    pub location: Option<Location<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub arguments: Vec<InputValueDefinition<'src>>,
    pub field_type: Type<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub location: Option<Location<'src>>,
}

/// An input value definition — used both for field/directive arguments
/// and for input object fields.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub value_type: Type<'src>,
    /// Parsed in const context: no `$variable` references allowed.
    pub default_value: Option<Value<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub location: Option<Location<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub implements: Vec<Name<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
    pub location: Option<Location<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub members: Vec<Name<'src>>,
    pub location: Option<Location<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub values: Vec<EnumValueDefinition<'src>>,
    pub location: Option<Location<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub location: Option<Location<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub fields: Vec<InputValueDefinition<'src>>,
    pub location: Option<Location<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub arguments: Vec<InputValueDefinition<'src>>,
    pub repeatable: bool,
    pub locations: Vec<DirectiveLocation<'src>>,
    pub location: Option<Location<'src>>,
}

/// A directive location name, e.g. `FIELD` or `OBJECT`. Validated against
/// the closed set in [`DIRECTIVE_LOCATIONS`]; any other name raises
/// `unexpected` at the name's start token.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveLocation<'src> {
    pub name: Cow<'src, str>,
    pub location: Option<Location<'src>>,
}

/// The fixed set of valid executable and type-system directive locations.
pub const DIRECTIVE_LOCATIONS: &[&str] = &[
    // Executable locations
    "QUERY",
    "MUTATION",
    "SUBSCRIPTION",
    "FIELD",
    "FRAGMENT_DEFINITION",
    "FRAGMENT_SPREAD",
    "INLINE_FRAGMENT",
    "VARIABLE_DEFINITION",
    // Type-system locations
    "SCHEMA",
    "SCALAR",
    "OBJECT",
    "FIELD_DEFINITION",
    "ARGUMENT_DEFINITION",
    "INTERFACE",
    "UNION",
    "ENUM",
    "ENUM_VALUE",
    "INPUT_OBJECT",
    "INPUT_FIELD_DEFINITION",
];
