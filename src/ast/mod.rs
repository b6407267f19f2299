//! The AST node model: a closed family of types representing every
//! grammar production, each optionally carrying a [`crate::location::Location`].
//!
//! Organized by grammar area rather than one file per node — `names`,
//! `document`, `executable` (operations/fragments), `operation_inner`
//! (selection sets, fields, variable definitions, directives),
//! `values`, `types` (type references), `type_system` (schema/type/
//! directive definitions), and `extensions` (the partial type-extension
//! grammar). Every node is a plain struct or a tagged enum — no
//! inheritance, no dynamic property bags.

pub mod document;
pub mod executable;
pub mod extensions;
pub mod names;
pub mod operation_inner;
pub mod types;
pub mod type_system;
pub mod values;

pub use document::{Definition, Document};
pub use executable::{FragmentDefinition, OperationDefinition, OperationType};
pub use extensions::{ObjectTypeExtension, TypeExtension};
pub use names::{Name, Variable};
pub use operation_inner::{
    Argument, DirectiveAnnotation, Field, FragmentSpread, InlineFragment, Selection, SelectionSet,
    TypeCondition, VariableDefinition,
};
pub use types::{ListType, NamedType, NonNullType, Type};
pub use type_system::{
    DirectiveDefinition, DirectiveLocation, EnumTypeDefinition, EnumValueDefinition,
    FieldDefinition, InputObjectTypeDefinition, InputValueDefinition, InterfaceTypeDefinition,
    OperationTypeDefinition, ScalarTypeDefinition, SchemaDefinition, TypeDefinition,
    UnionTypeDefinition,
};
pub use values::{
    BooleanValue, EnumValue, FloatValue, IntValue, ListValue, NullValue, ObjectField, ObjectValue,
    StringValue, Value,
};
