//! The grammar engine: one recursive-descent production per non-terminal,
//! plus five combinators that factor token-stream discipline and error
//! reporting out of every production (`peek`, `skip`, `expect`,
//! `expect_keyword`, `unexpected`), and two bracketed-list helpers
//! (`any`, `many`).
//!
//! One `parse_*` method per production, dispatching on the current token
//! and consuming exactly the tokens its rule describes. There is no
//! multi-error recovery machinery — no error recording, no skipping ahead
//! to the next definition on failure, no delimiter-context bookkeeping for
//! recovery diagnostics. This crate has exactly one error kind and no
//! recovery — the first syntax error aborts parsing and unwinds out of
//! every production via `?`.

use crate::ast::type_system::DIRECTIVE_LOCATIONS;
use crate::ast::*;
use crate::error::SyntaxError;
use crate::location::Location;
use crate::source::Source;
use crate::token::{Token, TokenKind};
use crate::token_stream::TokenStream;

/// Options accepted by [`parse`], [`parse_value`], and [`parse_type`].
///
/// The sole configuration surface of this crate; there is no file- or
/// environment-based configuration layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParserOptions {
    pub no_location: bool,
}

fn kind_description(kind: TokenKind) -> String {
    match kind.punctuator_text() {
        Some(text) => format!("\"{text}\""),
        None => format!("{kind:?}"),
    }
}

struct Parser<'src> {
    stream: TokenStream<'src>,
    options: ParserOptions,
}

impl<'src> Parser<'src> {
    fn new(source: Source<'src>, options: ParserOptions) -> Self {
        Self {
            stream: TokenStream::new(source),
            options,
        }
    }

    fn loc(&self, start_token: &Token<'src>) -> Option<Location<'src>> {
        if self.options.no_location {
            None
        } else {
            Some(Location::new(
                start_token.clone(),
                self.stream.last_token().clone(),
                self.stream.source(),
            ))
        }
    }

    // ---- combinators ----

    fn peek(&self, kind: TokenKind) -> bool {
        self.stream.token().kind == kind
    }

    fn peek_keyword(&self, keyword: &str) -> bool {
        let token = self.stream.token();
        token.kind == TokenKind::Name && token.value.as_deref() == Some(keyword)
    }

    fn skip(&mut self, kind: TokenKind) -> Result<bool, SyntaxError> {
        if self.peek(kind) {
            self.stream.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token<'src>, SyntaxError> {
        let token = self.stream.token().clone();
        if token.kind == kind {
            self.stream.advance()?;
            Ok(token)
        } else {
            let source = self.stream.source();
            Err(SyntaxError::new(
                &source,
                token.start,
                format!(
                    "Expected {}, found {}.",
                    kind_description(kind),
                    token.description()
                ),
            ))
        }
    }

    fn expect_keyword(&mut self, keyword: &str) -> Result<Token<'src>, SyntaxError> {
        let token = self.stream.token().clone();
        if token.kind == TokenKind::Name && token.value.as_deref() == Some(keyword) {
            self.stream.advance()?;
            Ok(token)
        } else {
            let source = self.stream.source();
            Err(SyntaxError::new(
                &source,
                token.start,
                format!("Expected \"{keyword}\", found {}.", token.description()),
            ))
        }
    }

    fn unexpected(&self, token: Option<&Token<'src>>) -> SyntaxError {
        let token = token.unwrap_or_else(|| self.stream.token());
        let source = self.stream.source();
        SyntaxError::new(
            &source,
            token.start,
            format!("Unexpected {}.", token.description()),
        )
    }

    /// `open item* close`: the list may be empty.
    fn any<T>(
        &mut self,
        open: TokenKind,
        mut item: impl FnMut(&mut Self) -> Result<T, SyntaxError>,
        close: TokenKind,
    ) -> Result<Vec<T>, SyntaxError> {
        self.expect(open)?;
        let mut items = Vec::new();
        while !self.skip(close)? {
            items.push(item(self)?);
        }
        Ok(items)
    }

    /// `open item item* close`: the list requires at least one item.
    fn many<T>(
        &mut self,
        open: TokenKind,
        mut item: impl FnMut(&mut Self) -> Result<T, SyntaxError>,
        close: TokenKind,
    ) -> Result<Vec<T>, SyntaxError> {
        self.expect(open)?;
        let mut items = vec![item(self)?];
        while !self.skip(close)? {
            items.push(item(self)?);
        }
        Ok(items)
    }

    // ---- names, variables ----

    fn parse_name(&mut self) -> Result<Name<'src>, SyntaxError> {
        let start = self.stream.token().clone();
        let token = self.expect(TokenKind::Name)?;
        Ok(Name {
            value: token.value.unwrap(),
            location: self.loc(&start),
        })
    }

    /// A fragment name/spread target: any `Name` except the identifier
    /// `on`.
    fn parse_fragment_name(&mut self) -> Result<Name<'src>, SyntaxError> {
        if self.peek_keyword("on") {
            return Err(self.unexpected(None));
        }
        self.parse_name()
    }

    // ---- document / definitions ----

    fn parse_document(&mut self) -> Result<Document<'src>, SyntaxError> {
        let start = self.stream.token().clone();
        self.expect(TokenKind::Sof)?;
        let mut definitions = vec![self.parse_definition()?];
        while !self.peek(TokenKind::Eof) {
            definitions.push(self.parse_definition()?);
        }
        self.expect(TokenKind::Eof)?;
        Ok(Document {
            definitions,
            location: self.loc(&start),
        })
    }

    fn parse_definition(&mut self) -> Result<Definition<'src>, SyntaxError> {
        if self.peek(TokenKind::BraceL) {
            return self.parse_operation_definition();
        }
        if self.peek(TokenKind::Name) {
            let keyword = self.stream.token().value.clone();
            match keyword.as_deref() {
                Some("query") | Some("mutation") | Some("subscription") => {
                    return self.parse_operation_definition();
                }
                Some("fragment") => return self.parse_fragment_definition(),
                Some("schema") | Some("scalar") | Some("type") | Some("interface")
                | Some("union") | Some("enum") | Some("input") | Some("directive") => {
                    return self.parse_type_system_definition();
                }
                Some("extend") => return self.parse_type_extension(),
                _ => {}
            }
            return Err(self.unexpected(None));
        }
        if self.peek(TokenKind::String) || self.peek(TokenKind::BlockString) {
            return self.parse_type_system_definition();
        }
        Err(self.unexpected(None))
    }

    // ---- executable definitions ----

    fn parse_operation_definition(&mut self) -> Result<Definition<'src>, SyntaxError> {
        let start = self.stream.token().clone();
        if self.peek(TokenKind::BraceL) {
            let selection_set = self.parse_selection_set()?;
            return Ok(Definition::OperationDefinition(OperationDefinition {
                operation_type: OperationType::Query,
                name: None,
                variable_definitions: Vec::new(),
                directives: Vec::new(),
                selection_set,
                location: self.loc(&start),
            }));
        }
        let operation_type = self.parse_operation_type()?;
        let name = if self.peek(TokenKind::Name) {
            Some(self.parse_name()?)
        } else {
            None
        };
        let variable_definitions = self.parse_variable_definitions()?;
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(Definition::OperationDefinition(OperationDefinition {
            operation_type,
            name,
            variable_definitions,
            directives,
            selection_set,
            location: self.loc(&start),
        }))
    }

    fn parse_operation_type(&mut self) -> Result<OperationType, SyntaxError> {
        let token = self.expect(TokenKind::Name)?;
        match token.value.as_deref() {
            Some("query") => Ok(OperationType::Query),
            Some("mutation") => Ok(OperationType::Mutation),
            Some("subscription") => Ok(OperationType::Subscription),
            _ => Err(self.unexpected(Some(&token))),
        }
    }

    fn parse_variable_definitions(&mut self) -> Result<Vec<VariableDefinition<'src>>, SyntaxError> {
        if self.peek(TokenKind::ParenL) {
            self.many(
                TokenKind::ParenL,
                |p| p.parse_variable_definition(),
                TokenKind::ParenR,
            )
        } else {
            Ok(Vec::new())
        }
    }

    fn parse_variable_definition(&mut self) -> Result<VariableDefinition<'src>, SyntaxError> {
        let start = self.stream.token().clone();
        self.expect(TokenKind::Dollar)?;
        let variable = self.parse_name()?;
        self.expect(TokenKind::Colon)?;
        let var_type = self.parse_type_reference()?;
        let default_value = if self.skip(TokenKind::Equals)? {
            Some(self.parse_value_literal(true)?)
        } else {
            None
        };
        let directives = self.parse_directives(true)?;
        Ok(VariableDefinition {
            variable,
            var_type,
            default_value,
            directives,
            location: self.loc(&start),
        })
    }

    fn parse_selection_set(&mut self) -> Result<SelectionSet<'src>, SyntaxError> {
        let start = self.stream.token().clone();
        let selections = self.many(
            TokenKind::BraceL,
            |p| p.parse_selection(),
            TokenKind::BraceR,
        )?;
        Ok(SelectionSet {
            selections,
            location: self.loc(&start),
        })
    }

    fn parse_selection(&mut self) -> Result<Selection<'src>, SyntaxError> {
        if self.peek(TokenKind::Spread) {
            let start = self.stream.token().clone();
            self.stream.advance()?;
            self.parse_fragment(start)
        } else {
            Ok(Selection::Field(self.parse_field()?))
        }
    }

    fn parse_field(&mut self) -> Result<Field<'src>, SyntaxError> {
        let start = self.stream.token().clone();
        let first = self.parse_name()?;
        let (alias, name) = if self.skip(TokenKind::Colon)? {
            (Some(first), self.parse_name()?)
        } else {
            (None, first)
        };
        let arguments = self.parse_arguments(false)?;
        let directives = self.parse_directives(false)?;
        let selection_set = if self.peek(TokenKind::BraceL) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };
        Ok(Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            location: self.loc(&start),
        })
    }

    fn parse_arguments(&mut self, is_const: bool) -> Result<Vec<Argument<'src>>, SyntaxError> {
        if self.peek(TokenKind::ParenL) {
            self.many(
                TokenKind::ParenL,
                |p| p.parse_argument(is_const),
                TokenKind::ParenR,
            )
        } else {
            Ok(Vec::new())
        }
    }

    fn parse_argument(&mut self, is_const: bool) -> Result<Argument<'src>, SyntaxError> {
        let start = self.stream.token().clone();
        let name = self.parse_name()?;
        self.expect(TokenKind::Colon)?;
        let value = self.parse_value_literal(is_const)?;
        Ok(Argument {
            name,
            value,
            location: self.loc(&start),
        })
    }

    /// Parses the rest of a fragment selection, with `...` already
    /// consumed at `start`. Dispatches on whether the next token is a
    /// fragment name (any `Name` except `on`) or the start of an inline
    /// fragment.
    fn parse_fragment(&mut self, start: Token<'src>) -> Result<Selection<'src>, SyntaxError> {
        if self.peek(TokenKind::Name) && !self.peek_keyword("on") {
            let name = self.parse_fragment_name()?;
            let directives = self.parse_directives(false)?;
            Ok(Selection::FragmentSpread(FragmentSpread {
                name,
                directives,
                location: self.loc(&start),
            }))
        } else {
            let type_condition = if self.peek_keyword("on") {
                let on_start = self.stream.token().clone();
                self.stream.advance()?;
                Some(self.finish_type_condition(on_start)?)
            } else {
                None
            };
            let directives = self.parse_directives(false)?;
            let selection_set = self.parse_selection_set()?;
            Ok(Selection::InlineFragment(InlineFragment {
                type_condition,
                directives,
                selection_set,
                location: self.loc(&start),
            }))
        }
    }

    fn finish_type_condition(&mut self, start: Token<'src>) -> Result<TypeCondition<'src>, SyntaxError> {
        let named_type = self.parse_name()?;
        Ok(TypeCondition {
            named_type,
            location: self.loc(&start),
        })
    }

    fn parse_type_condition(&mut self) -> Result<TypeCondition<'src>, SyntaxError> {
        let start = self.stream.token().clone();
        self.expect_keyword("on")?;
        self.finish_type_condition(start)
    }

    fn parse_fragment_definition(&mut self) -> Result<Definition<'src>, SyntaxError> {
        let start = self.stream.token().clone();
        self.expect_keyword("fragment")?;
        let name = self.parse_fragment_name()?;
        let type_condition = self.parse_type_condition()?;
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(Definition::FragmentDefinition(FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
            location: self.loc(&start),
        }))
    }

    // ---- directives ----

    fn parse_directives(&mut self, is_const: bool) -> Result<Vec<DirectiveAnnotation<'src>>, SyntaxError> {
        let mut directives = Vec::new();
        while self.peek(TokenKind::At) {
            directives.push(self.parse_directive(is_const)?);
        }
        Ok(directives)
    }

    fn parse_directive(&mut self, is_const: bool) -> Result<DirectiveAnnotation<'src>, SyntaxError> {
        let start = self.stream.token().clone();
        self.expect(TokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_arguments(is_const)?;
        Ok(DirectiveAnnotation {
            name,
            arguments,
            location: self.loc(&start),
        })
    }

    // ---- values ----

    fn parse_value_literal(&mut self, is_const: bool) -> Result<Value<'src>, SyntaxError> {
        let start = self.stream.token().clone();
        match start.kind {
            TokenKind::BracketL => Ok(Value::List(self.parse_list_value(is_const)?)),
            TokenKind::BraceL => Ok(Value::Object(self.parse_object_value(is_const)?)),
            TokenKind::Int => {
                self.stream.advance()?;
                let location = self.loc(&start);
                Ok(Value::Int(IntValue {
                    value: start.value.unwrap(),
                    location,
                }))
            }
            TokenKind::Float => {
                self.stream.advance()?;
                let location = self.loc(&start);
                Ok(Value::Float(FloatValue {
                    value: start.value.unwrap(),
                    location,
                }))
            }
            TokenKind::String | TokenKind::BlockString => {
                let block = start.kind == TokenKind::BlockString;
                self.stream.advance()?;
                let location = self.loc(&start);
                Ok(Value::String(StringValue {
                    value: start.value.unwrap(),
                    block,
                    location,
                }))
            }
            TokenKind::Name => {
                let value = start.value.clone().unwrap();
                self.stream.advance()?;
                match value.as_ref() {
                    "true" => Ok(Value::Boolean(BooleanValue {
                        value: true,
                        location: self.loc(&start),
                    })),
                    "false" => Ok(Value::Boolean(BooleanValue {
                        value: false,
                        location: self.loc(&start),
                    })),
                    "null" => Ok(Value::Null(NullValue {
                        location: self.loc(&start),
                    })),
                    _ => Ok(Value::Enum(EnumValue {
                        value,
                        location: self.loc(&start),
                    })),
                }
            }
            TokenKind::Dollar if !is_const => {
                self.stream.advance()?;
                let name = self.parse_name()?;
                Ok(Value::Variable(Variable {
                    name,
                    location: self.loc(&start),
                }))
            }
            _ => Err(self.unexpected(None)),
        }
    }

    fn parse_list_value(&mut self, is_const: bool) -> Result<ListValue<'src>, SyntaxError> {
        let start = self.stream.token().clone();
        let values = self.any(
            TokenKind::BracketL,
            |p| p.parse_value_literal(is_const),
            TokenKind::BracketR,
        )?;
        Ok(ListValue {
            values,
            location: self.loc(&start),
        })
    }

    /// Unlike selection sets, the object-value brace loop accepts the
    /// empty form `{}`.
    fn parse_object_value(&mut self, is_const: bool) -> Result<ObjectValue<'src>, SyntaxError> {
        let start = self.stream.token().clone();
        let fields = self.any(
            TokenKind::BraceL,
            |p| p.parse_object_field(is_const),
            TokenKind::BraceR,
        )?;
        Ok(ObjectValue {
            fields,
            location: self.loc(&start),
        })
    }

    fn parse_object_field(&mut self, is_const: bool) -> Result<ObjectField<'src>, SyntaxError> {
        let start = self.stream.token().clone();
        let name = self.parse_name()?;
        self.expect(TokenKind::Colon)?;
        let value = self.parse_value_literal(is_const)?;
        Ok(ObjectField {
            name,
            value,
            location: self.loc(&start),
        })
    }

    // ---- type references ----

    fn parse_type_reference(&mut self) -> Result<Type<'src>, SyntaxError> {
        let start = self.stream.token().clone();
        let mut ty = if self.skip(TokenKind::BracketL)? {
            let of_type = self.parse_type_reference()?;
            self.expect(TokenKind::BracketR)?;
            Type::List(Box::new(ListType {
                of_type,
                location: self.loc(&start),
            }))
        } else {
            Type::Named(self.parse_named_type()?)
        };
        if self.skip(TokenKind::Bang)? {
            ty = Type::NonNull(Box::new(NonNullType {
                of_type: ty,
                location: self.loc(&start),
            }));
        }
        Ok(ty)
    }

    fn parse_named_type(&mut self) -> Result<NamedType<'src>, SyntaxError> {
        let start = self.stream.token().clone();
        let name = self.parse_name()?;
        Ok(NamedType {
            name,
            location: self.loc(&start),
        })
    }

    // ---- descriptions ----

    fn parse_description(&mut self) -> Result<Option<StringValue<'src>>, SyntaxError> {
        if self.peek(TokenKind::String) || self.peek(TokenKind::BlockString) {
            Ok(Some(self.parse_string_value()?))
        } else {
            Ok(None)
        }
    }

    fn parse_string_value(&mut self) -> Result<StringValue<'src>, SyntaxError> {
        let start = self.stream.token().clone();
        let block = match start.kind {
            TokenKind::String => false,
            TokenKind::BlockString => true,
            _ => return Err(self.unexpected(None)),
        };
        self.stream.advance()?;
        let location = self.loc(&start);
        Ok(StringValue {
            value: start.value.unwrap(),
            block,
            location,
        })
    }

    // ---- type-system definitions ----

    /// Dispatches a type-system definition. The current token may be the
    /// defining keyword itself, or a description (`String`/`BlockString`)
    /// that precedes it — in the latter case the keyword is recovered via
    /// one step of lookahead. The description itself is (re-)consumed by
    /// the chosen production via `parse_description`, not here.
    fn parse_type_system_definition(&mut self) -> Result<Definition<'src>, SyntaxError> {
        let keyword_token = if self.peek(TokenKind::String) || self.peek(TokenKind::BlockString) {
            self.stream.peek()?.clone()
        } else {
            self.stream.token().clone()
        };
        match keyword_token.value.as_deref() {
            Some("schema") => self.parse_schema_definition(),
            Some("scalar") => self.parse_scalar_type_definition(),
            Some("type") => self.parse_object_type_definition(),
            Some("interface") => self.parse_interface_type_definition(),
            Some("union") => self.parse_union_type_definition(),
            Some("enum") => self.parse_enum_type_definition(),
            Some("input") => self.parse_input_object_type_definition(),
            Some("directive") => self.parse_directive_definition(),
            _ => Err(self.unexpected(Some(&keyword_token))),
        }
    }

    fn parse_schema_definition(&mut self) -> Result<Definition<'src>, SyntaxError> {
        let start = self.stream.token().clone();
        let description = self.parse_description()?;
        self.expect_keyword("schema")?;
        let directives = self.parse_directives(true)?;
        let operation_types = self.many(
            TokenKind::BraceL,
            |p| p.parse_operation_type_definition(),
            TokenKind::BraceR,
        )?;
        Ok(Definition::SchemaDefinition(SchemaDefinition {
            description,
            directives,
            operation_types,
            location: self.loc(&start),
        }))
    }

    fn parse_operation_type_definition(&mut self) -> Result<OperationTypeDefinition<'src>, SyntaxError> {
        let start = self.stream.token().clone();
        let operation_type = self.parse_operation_type()?;
        self.expect(TokenKind::Colon)?;
        let named_type = self.parse_name()?;
        Ok(OperationTypeDefinition {
            operation_type,
            named_type,
            location: self.loc(&start),
        })
    }

    fn parse_scalar_type_definition(&mut self) -> Result<Definition<'src>, SyntaxError> {
        let start = self.stream.token().clone();
        let description = self.parse_description()?;
        self.expect_keyword("scalar")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        Ok(Definition::TypeDefinition(TypeDefinition::Scalar(
            ScalarTypeDefinition {
                description,
                name,
                directives,
                location: self.loc(&start),
            },
        )))
    }

    fn parse_object_type_definition(&mut self) -> Result<Definition<'src>, SyntaxError> {
        let start = self.stream.token().clone();
        let description = self.parse_description()?;
        self.expect_keyword("type")?;
        let name = self.parse_name()?;
        let implements = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_fields_definition()?;
        Ok(Definition::TypeDefinition(TypeDefinition::Object(
            ObjectTypeDefinition {
                description,
                name,
                implements,
                directives,
                fields,
                location: self.loc(&start),
            },
        )))
    }

    /// Only consumed if the current name is `implements`; then one or
    /// more `NamedType` names, continuing while the next token is `Name`.
    /// This token set has no `&` separator — interfaces are just
    /// space-separated names.
    fn parse_implements_interfaces(&mut self) -> Result<Vec<Name<'src>>, SyntaxError> {
        let mut interfaces = Vec::new();
        if self.peek_keyword("implements") {
            self.stream.advance()?;
            loop {
                interfaces.push(self.parse_name()?);
                if !self.peek(TokenKind::Name) {
                    break;
                }
            }
        }
        Ok(interfaces)
    }

    fn parse_fields_definition(&mut self) -> Result<Vec<FieldDefinition<'src>>, SyntaxError> {
        if self.peek(TokenKind::BraceL) {
            self.many(
                TokenKind::BraceL,
                |p| p.parse_field_definition(),
                TokenKind::BraceR,
            )
        } else {
            Ok(Vec::new())
        }
    }

    fn parse_field_definition(&mut self) -> Result<FieldDefinition<'src>, SyntaxError> {
        let start = self.stream.token().clone();
        let description = self.parse_description()?;
        let name = self.parse_name()?;
        let arguments = self.parse_arguments_definition()?;
        self.expect(TokenKind::Colon)?;
        let field_type = self.parse_type_reference()?;
        let directives = self.parse_directives(true)?;
        Ok(FieldDefinition {
            description,
            name,
            arguments,
            field_type,
            directives,
            location: self.loc(&start),
        })
    }

    fn parse_arguments_definition(&mut self) -> Result<Vec<InputValueDefinition<'src>>, SyntaxError> {
        if self.peek(TokenKind::ParenL) {
            self.many(
                TokenKind::ParenL,
                |p| p.parse_input_value_definition(),
                TokenKind::ParenR,
            )
        } else {
            Ok(Vec::new())
        }
    }

    fn parse_input_value_definition(&mut self) -> Result<InputValueDefinition<'src>, SyntaxError> {
        let start = self.stream.token().clone();
        let description = self.parse_description()?;
        let name = self.parse_name()?;
        self.expect(TokenKind::Colon)?;
        let value_type = self.parse_type_reference()?;
        let default_value = if self.skip(TokenKind::Equals)? {
            Some(self.parse_value_literal(true)?)
        } else {
            None
        };
        let directives = self.parse_directives(true)?;
        Ok(InputValueDefinition {
            description,
            name,
            value_type,
            default_value,
            directives,
            location: self.loc(&start),
        })
    }

    fn parse_interface_type_definition(&mut self) -> Result<Definition<'src>, SyntaxError> {
        let start = self.stream.token().clone();
        let description = self.parse_description()?;
        self.expect_keyword("interface")?;
        let name = self.parse_name()?;
        let implements = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_fields_definition()?;
        Ok(Definition::TypeDefinition(TypeDefinition::Interface(
            InterfaceTypeDefinition {
                description,
                name,
                implements,
                directives,
                fields,
                location: self.loc(&start),
            },
        )))
    }

    fn parse_union_type_definition(&mut self) -> Result<Definition<'src>, SyntaxError> {
        let start = self.stream.token().clone();
        let description = self.parse_description()?;
        self.expect_keyword("union")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        let members = self.parse_union_member_types()?;
        Ok(Definition::TypeDefinition(TypeDefinition::Union(
            UnionTypeDefinition {
                description,
                name,
                directives,
                members,
                location: self.loc(&start),
            },
        )))
    }

    /// Optional leading `|`, then one `NamedType`, then zero or more
    /// `| NamedType`.
    fn parse_union_member_types(&mut self) -> Result<Vec<Name<'src>>, SyntaxError> {
        let mut members = Vec::new();
        if self.skip(TokenKind::Equals)? {
            self.skip(TokenKind::Pipe)?;
            members.push(self.parse_name()?);
            while self.skip(TokenKind::Pipe)? {
                members.push(self.parse_name()?);
            }
        }
        Ok(members)
    }

    fn parse_enum_type_definition(&mut self) -> Result<Definition<'src>, SyntaxError> {
        let start = self.stream.token().clone();
        let description = self.parse_description()?;
        self.expect_keyword("enum")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        let values = self.parse_enum_values_definition()?;
        Ok(Definition::TypeDefinition(TypeDefinition::Enum(
            EnumTypeDefinition {
                description,
                name,
                directives,
                values,
                location: self.loc(&start),
            },
        )))
    }

    fn parse_enum_values_definition(&mut self) -> Result<Vec<EnumValueDefinition<'src>>, SyntaxError> {
        if self.peek(TokenKind::BraceL) {
            self.many(
                TokenKind::BraceL,
                |p| p.parse_enum_value_definition(),
                TokenKind::BraceR,
            )
        } else {
            Ok(Vec::new())
        }
    }

    fn parse_enum_value_definition(&mut self) -> Result<EnumValueDefinition<'src>, SyntaxError> {
        let start = self.stream.token().clone();
        let description = self.parse_description()?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        Ok(EnumValueDefinition {
            description,
            name,
            directives,
            location: self.loc(&start),
        })
    }

    fn parse_input_object_type_definition(&mut self) -> Result<Definition<'src>, SyntaxError> {
        let start = self.stream.token().clone();
        let description = self.parse_description()?;
        self.expect_keyword("input")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_input_fields_definition()?;
        Ok(Definition::TypeDefinition(TypeDefinition::InputObject(
            InputObjectTypeDefinition {
                description,
                name,
                directives,
                fields,
                location: self.loc(&start),
            },
        )))
    }

    fn parse_input_fields_definition(&mut self) -> Result<Vec<InputValueDefinition<'src>>, SyntaxError> {
        if self.peek(TokenKind::BraceL) {
            self.many(
                TokenKind::BraceL,
                |p| p.parse_input_value_definition(),
                TokenKind::BraceR,
            )
        } else {
            Ok(Vec::new())
        }
    }

    fn parse_directive_definition(&mut self) -> Result<Definition<'src>, SyntaxError> {
        let start = self.stream.token().clone();
        let description = self.parse_description()?;
        self.expect_keyword("directive")?;
        self.expect(TokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_arguments_definition()?;
        let repeatable = self.skip_keyword("repeatable")?;
        self.expect_keyword("on")?;
        let locations = self.parse_directive_locations()?;
        Ok(Definition::DirectiveDefinition(DirectiveDefinition {
            description,
            name,
            arguments,
            repeatable,
            locations,
            location: self.loc(&start),
        }))
    }

    fn skip_keyword(&mut self, keyword: &str) -> Result<bool, SyntaxError> {
        if self.peek_keyword(keyword) {
            self.stream.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Same shape as union members: optional leading `|`, one location,
    /// then zero or more `| location`. Each name must belong to the fixed
    /// closed set or `unexpected` is raised at the name's start token.
    fn parse_directive_locations(&mut self) -> Result<Vec<DirectiveLocation<'src>>, SyntaxError> {
        self.skip(TokenKind::Pipe)?;
        let mut locations = vec![self.parse_directive_location()?];
        while self.skip(TokenKind::Pipe)? {
            locations.push(self.parse_directive_location()?);
        }
        Ok(locations)
    }

    fn parse_directive_location(&mut self) -> Result<DirectiveLocation<'src>, SyntaxError> {
        let start = self.stream.token().clone();
        let token = self.expect(TokenKind::Name)?;
        let name = token.value.unwrap();
        if DIRECTIVE_LOCATIONS.contains(&name.as_ref()) {
            Ok(DirectiveLocation {
                name,
                location: self.loc(&start),
            })
        } else {
            Err(self.unexpected(Some(&start)))
        }
    }

    // ---- type extensions (only ObjectTypeExtension is recognized) ----

    fn parse_type_extension(&mut self) -> Result<Definition<'src>, SyntaxError> {
        let start = self.stream.token().clone();
        self.expect_keyword("extend")?;
        if self.peek_keyword("type") {
            self.parse_object_type_extension(start)
        } else {
            Err(self.unexpected(None))
        }
    }

    fn parse_object_type_extension(&mut self, start: Token<'src>) -> Result<Definition<'src>, SyntaxError> {
        self.expect_keyword("type")?;
        let name = self.parse_name()?;
        let implements = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_fields_definition()?;
        if implements.is_empty() && directives.is_empty() && fields.is_empty() {
            return Err(self.unexpected(None));
        }
        Ok(Definition::TypeExtension(TypeExtension::Object(
            ObjectTypeExtension {
                name,
                implements,
                directives,
                fields,
                location: self.loc(&start),
            },
        )))
    }

    // ---- standalone entry points ----

    fn parse_value_standalone(&mut self) -> Result<Value<'src>, SyntaxError> {
        self.expect(TokenKind::Sof)?;
        let value = self.parse_value_literal(false)?;
        self.expect(TokenKind::Eof)?;
        Ok(value)
    }

    fn parse_type_standalone(&mut self) -> Result<Type<'src>, SyntaxError> {
        self.expect(TokenKind::Sof)?;
        let ty = self.parse_type_reference()?;
        self.expect(TokenKind::Eof)?;
        Ok(ty)
    }
}

/// Parses a full GraphQL document: executable definitions, type-system
/// definitions, and `extend type` extensions, in any order.
pub fn parse<'src>(
    source: impl Into<Source<'src>>,
    options: ParserOptions,
) -> Result<Document<'src>, SyntaxError> {
    Parser::new(source.into(), options).parse_document()
}

/// Parses a single value literal, e.g. `[1, 2, $v]`. Variables are
/// accepted, since a standalone value literal is always a non-const
/// context.
pub fn parse_value<'src>(
    source: impl Into<Source<'src>>,
    options: ParserOptions,
) -> Result<Value<'src>, SyntaxError> {
    Parser::new(source.into(), options).parse_value_standalone()
}

/// Parses a single type reference, e.g. `[Int!]!`.
pub fn parse_type<'src>(
    source: impl Into<Source<'src>>,
    options: ParserOptions,
) -> Result<Type<'src>, SyntaxError> {
    Parser::new(source.into(), options).parse_type_standalone()
}
