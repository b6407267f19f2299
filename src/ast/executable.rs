use crate::ast::names::Name;
use crate::ast::operation_inner::{DirectiveAnnotation, SelectionSet, TypeCondition, VariableDefinition};
use crate::location::Location;

/// `query`, `mutation`, or `subscription`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

/// An operation definition. The shorthand form (a bare selection set, no
/// `query` keyword) yields `operation_type: Query`, `name: None`, and
/// empty `variable_definitions`/`directives`.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition<'src> {
    pub operation_type: OperationType,
    pub name: Option<Name<'src>>,
    pub variable_definitions: Vec<VariableDefinition<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub selection_set: SelectionSet<'src>,
    pub location: Option<Location<'src>>,
}

/// A named fragment definition. `name` is never the identifier `on`.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition<'src> {
    pub name: Name<'src>,
    pub type_condition: TypeCondition<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub selection_set: SelectionSet<'src>,
    pub location: Option<Location<'src>>,
}
