use crate::ast::names::Name;
use crate::ast::operation_inner::DirectiveAnnotation;
use crate::ast::type_system::FieldDefinition;
use crate::location::Location;

/// A type-system extension. Only `ObjectTypeExtension` is recognized;
/// `extend scalar|interface|union|enum|input|schema …` raises `unexpected`
/// rather than producing one of these. The enum shape is kept (rather than
/// a single bare struct) so a future extension of the grammar to the other
/// five extension kinds doesn't require reshaping every caller that
/// matches on `Definition::TypeExtension`.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeExtension<'src> {
    Object(ObjectTypeExtension<'src>),
}

/// `extend type Name implements I J @dir { fields }`. At least one of
/// `implements`, `directives`, or `fields` must be non-empty — an
/// extension with none of the three raises `unexpected`.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeExtension<'src> {
    pub name: Name<'src>,
    pub implements: Vec<Name<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
    pub location: Option<Location<'src>>,
}
