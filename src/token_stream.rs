//! A buffered, comment-skipping view over a [`Lexer`].
//!
//! Centralizes buffering and lookahead over the raw token source so
//! grammar productions never touch the lexer directly, and skips
//! `Comment` tokens on every advance/lookahead, since this crate's AST has
//! no trivia-attachment concept — comments are discarded once lexed, not
//! carried along for later consumers.

use crate::error::SyntaxError;
use crate::lexer::Lexer;
use crate::source::Source;
use crate::token::{Token, TokenKind};

/// A token stream positioned at a "current" token, with one-token lookahead.
///
/// `current()` starts as the synthetic [`TokenKind::Sof`] token before
/// anything has been consumed.
pub struct TokenStream<'src> {
    lexer: Lexer<'src>,
    current: Token<'src>,
    lookahead: Option<Token<'src>>,
    last_significant: Token<'src>,
}

impl<'src> TokenStream<'src> {
    pub fn new(source: Source<'src>) -> Self {
        Self {
            lexer: Lexer::new(source),
            current: Token::sof(),
            lookahead: None,
            last_significant: Token::sof(),
        }
    }

    pub fn source(&self) -> Source<'src> {
        self.lexer.source()
    }

    /// The most recently consumed token, including `Comment`s.
    pub fn token(&self) -> &Token<'src> {
        &self.current
    }

    /// The most recently consumed non-comment token. Used to close out a
    /// node's [`crate::location::Location`] when the current token is a
    /// trailing comment that should not be considered part of the node.
    pub fn last_token(&self) -> &Token<'src> {
        &self.last_significant
    }

    /// Reads the next raw token from the lexer, unconditionally (comments
    /// included). Internal helper; callers should use [`Self::advance`] or
    /// [`Self::peek`], which skip comments.
    fn next_raw(&mut self) -> Result<Token<'src>, SyntaxError> {
        match self.lexer.next_token()? {
            Some(tok) => Ok(tok),
            None => unreachable!("lexer must keep returning Eof once reached"),
        }
    }

    /// Advances past the current token, skipping any comments, and returns
    /// the new current (non-comment) token.
    pub fn advance(&mut self) -> Result<&Token<'src>, SyntaxError> {
        let next = match self.lookahead.take() {
            Some(tok) => tok,
            None => self.next_raw()?,
        };
        // The token being replaced is, by construction, always the most
        // recently consumed non-comment token (the loop below never leaves
        // a `Comment` sitting in `current`), so it becomes the new
        // `last_significant` before we move past it.
        self.last_significant = std::mem::replace(&mut self.current, next);
        while self.current.kind == TokenKind::Comment {
            self.current = self.next_raw()?;
        }
        Ok(&self.current)
    }

    /// Returns the next non-comment token without consuming it.
    pub fn peek(&mut self) -> Result<&Token<'src>, SyntaxError> {
        if self.lookahead.is_none() {
            let mut tok = self.next_raw()?;
            while tok.kind == TokenKind::Comment {
                tok = self.next_raw()?;
            }
            self.lookahead = Some(tok);
        }
        Ok(self.lookahead.as_ref().unwrap())
    }

    /// `true` once the current token is [`TokenKind::Eof`].
    pub fn at_eof(&self) -> bool {
        self.current.kind == TokenKind::Eof
    }
}
