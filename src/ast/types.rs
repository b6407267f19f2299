use crate::ast::names::Name;
use crate::location::Location;

/// A type reference: a named type, a list of some inner type, or a
/// non-null wrapper around either. Non-null cannot directly wrap
/// non-null — the grammar prevents it by construction.
#[derive(Clone, Debug, PartialEq)]
pub enum Type<'src> {
    Named(NamedType<'src>),
    List(Box<ListType<'src>>),
    NonNull(Box<NonNullType<'src>>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct NamedType<'src> {
    pub name: Name<'src>,
    pub location: Option<Location<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListType<'src> {
    pub of_type: Type<'src>,
    pub location: Option<Location<'src>>,
}

/// A non-null wrapper. `of_type` is a [`Type::Named`] or [`Type::List`]
/// only — never another `Type::NonNull` — since the grammar never
/// recurses through `parseTypeReference` twice in a row without consuming
/// a `[` or a name first.
#[derive(Clone, Debug, PartialEq)]
pub struct NonNullType<'src> {
    pub of_type: Type<'src>,
    pub location: Option<Location<'src>>,
}
