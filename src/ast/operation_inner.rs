use crate::ast::names::Name;
use crate::ast::types::Type;
use crate::ast::values::Value;
use crate::location::Location;

/// A variable definition in an operation's variable list, e.g.
/// `$id: ID! = "default"`. The default value, if present, is parsed in
/// const context (no `$variable` references allowed within it).
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition<'src> {
    pub variable: Name<'src>,
    pub var_type: Type<'src>,
    pub default_value: Option<Value<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub location: Option<Location<'src>>,
}

/// A brace-delimited, non-empty list of selections.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet<'src> {
    pub selections: Vec<Selection<'src>>,
    pub location: Option<Location<'src>>,
}

#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, PartialEq)]
pub enum Selection<'src> {
    Field(Field<'src>),
    FragmentSpread(FragmentSpread<'src>),
    InlineFragment(InlineFragment<'src>),
}

/// A field selection, optionally aliased, with arguments, directives, and
/// an optional nested selection set.
#[derive(Clone, Debug, PartialEq)]
pub struct Field<'src> {
    /// `None` when no alias is present — the single name present is the
    /// field name, not the alias.
    pub alias: Option<Name<'src>>,
    pub name: Name<'src>,
    pub arguments: Vec<Argument<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub selection_set: Option<SelectionSet<'src>>,
    pub location: Option<Location<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Argument<'src> {
    pub name: Name<'src>,
    pub value: Value<'src>,
    pub location: Option<Location<'src>>,
}

/// A named fragment spread (`...FragmentName`). `name` is never the
/// identifier `on`, since that shape is an inline fragment instead.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread<'src> {
    pub name: Name<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub location: Option<Location<'src>>,
}

/// An inline fragment, `... on Type { … }` or `... { … }`.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment<'src> {
    pub type_condition: Option<TypeCondition<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub selection_set: SelectionSet<'src>,
    pub location: Option<Location<'src>>,
}

/// A type condition (`on TypeName`), used by fragment definitions and
/// inline fragments.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeCondition<'src> {
    pub named_type: Name<'src>,
    pub location: Option<Location<'src>>,
}

/// An applied directive, e.g. `@deprecated(reason: "use x")`. Not to be
/// confused with a [`crate::ast::type_system::DirectiveDefinition`].
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation<'src> {
    pub name: Name<'src>,
    pub arguments: Vec<Argument<'src>>,
    pub location: Option<Location<'src>>,
}
