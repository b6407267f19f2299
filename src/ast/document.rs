use crate::ast::extensions::TypeExtension;
use crate::ast::executable::{FragmentDefinition, OperationDefinition};
use crate::ast::type_system::{DirectiveDefinition, SchemaDefinition, TypeDefinition};
use crate::location::Location;

/// The root AST node: a non-empty ordered list of definitions.
///
/// A single unified document type covers both executable and type-system
/// content, rather than splitting into an `ExecutableDocument`/
/// `TypeSystemDocument` pair. Validation of which definition kinds are
/// permitted for a given use case (e.g. rejecting type-system content
/// before execution) is left to downstream consumers — a `Document` always
/// has at least one definition, but nothing here constrains their kinds.
#[derive(Clone, Debug, PartialEq)]
pub struct Document<'src> {
    pub definitions: Vec<Definition<'src>>,
    pub location: Option<Location<'src>>,
}

impl<'src> Document<'src> {
    /// Iterates over the type-system definitions, extensions, and directive
    /// definitions in this document.
    pub fn schema_definitions(&self) -> impl Iterator<Item = &Definition<'src>> {
        self.definitions.iter().filter(|d| {
            matches!(
                d,
                Definition::DirectiveDefinition(_)
                    | Definition::SchemaDefinition(_)
                    | Definition::TypeDefinition(_)
                    | Definition::TypeExtension(_)
            )
        })
    }

    /// Iterates over the operation and fragment definitions in this
    /// document.
    pub fn executable_definitions(&self) -> impl Iterator<Item = &Definition<'src>> {
        self.definitions.iter().filter(|d| {
            matches!(
                d,
                Definition::FragmentDefinition(_) | Definition::OperationDefinition(_)
            )
        })
    }
}

/// A single top-level definition. Covers both executable content
/// (operations, fragments) and type-system content (schema/type
/// definitions, directive definitions, and a partial extension grammar —
/// only `extend type` is recognized; see [`TypeExtension`]).
#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, PartialEq)]
pub enum Definition<'src> {
    OperationDefinition(OperationDefinition<'src>),
    FragmentDefinition(FragmentDefinition<'src>),
    SchemaDefinition(SchemaDefinition<'src>),
    TypeDefinition(TypeDefinition<'src>),
    DirectiveDefinition(DirectiveDefinition<'src>),
    TypeExtension(TypeExtension<'src>),
}
