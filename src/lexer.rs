//! A lexer that turns a GraphQL source body into a stream of [`Token`]s.
//!
//! No trivia bag, no `Error` token kind, and no lexer-level error
//! recovery. The first lexical error raises a [`SyntaxError`] directly
//! rather than being packaged into a token, matching this crate's
//! single-error no-recovery contract.

use std::borrow::Cow;

use memchr::memchr2;

use crate::error::SyntaxError;
use crate::source::Source;
use crate::token::{Token, TokenKind};

/// Lexes a GraphQL source body into tokens, one at a time.
///
/// Positions are tracked in bytes (`start`/`end`) and in 1-based
/// line/column for error reporting, following the same UTF-8-aware column
/// counting (characters, not UTF-16 units) as the rest of this crate.
pub struct Lexer<'src> {
    source: Source<'src>,
    body: &'src str,
    pos: usize,
    line: usize,
    column: usize,
    prev_start: Option<usize>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: Source<'src>) -> Self {
        // A leading UTF-8 BOM is ignored, along with any BOM appearing
        // elsewhere in the document; `skip_ignored` treats `\u{FEFF}` as
        // whitespace-like wherever it occurs. Left un-stripped here (rather
        // than sliced off up front) so `pos`/token offsets stay aligned
        // with `source.body()` byte-for-byte — a `Location` always indexes
        // into the original, unmodified source.
        let body = source.body();
        Self {
            source,
            body,
            pos: 0,
            line: source.location_offset.line,
            column: source.location_offset.column,
            prev_start: None,
        }
    }

    fn remaining(&self) -> &'src str {
        &self.body[self.pos..]
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn peek_char_at(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    pub fn source(&self) -> Source<'src> {
        self.source
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else if ch == '\r' {
            // `\r` and `\r\n` both count as one line terminator; the `\n`
            // of a `\r\n` pair is swallowed below without advancing the
            // line counter a second time.
            if self.peek_char() == Some('\n') {
                self.pos += 1;
            }
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn err(&self, start: usize, message: impl Into<String>) -> SyntaxError {
        SyntaxError::new(&self.source, start, message)
    }

    /// Skips whitespace, commas, and stray BOMs. Does not skip comments:
    /// those are emitted as first-class [`TokenKind::Comment`] tokens.
    fn skip_ignored(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' | '\t' | '\n' | '\r' | ',' | '\u{FEFF}' => {
                    self.bump();
                }
                _ => break,
            }
        }
    }

    /// Produces the next token. Once the end of input is reached, every
    /// subsequent call keeps returning a fresh `Eof` token pinned to the
    /// same final position, so callers never need to treat running past
    /// `Eof` as an error case.
    pub fn next_token(&mut self) -> Result<Option<Token<'src>>, SyntaxError> {
        self.skip_ignored();

        let start = self.pos;
        let start_line = self.line;
        let start_col = self.column;

        let token = match self.peek_char() {
            None => self.make(TokenKind::Eof, start, start_line, start_col, None),
            Some('#') => self.lex_comment(start, start_line, start_col)?,
            Some('!') => self.punct(TokenKind::Bang, start, start_line, start_col),
            Some('$') => self.punct(TokenKind::Dollar, start, start_line, start_col),
            Some('(') => self.punct(TokenKind::ParenL, start, start_line, start_col),
            Some(')') => self.punct(TokenKind::ParenR, start, start_line, start_col),
            Some(':') => self.punct(TokenKind::Colon, start, start_line, start_col),
            Some('=') => self.punct(TokenKind::Equals, start, start_line, start_col),
            Some('@') => self.punct(TokenKind::At, start, start_line, start_col),
            Some('[') => self.punct(TokenKind::BracketL, start, start_line, start_col),
            Some(']') => self.punct(TokenKind::BracketR, start, start_line, start_col),
            Some('{') => self.punct(TokenKind::BraceL, start, start_line, start_col),
            Some('|') => self.punct(TokenKind::Pipe, start, start_line, start_col),
            Some('}') => self.punct(TokenKind::BraceR, start, start_line, start_col),
            Some('.') => self.lex_spread(start, start_line, start_col)?,
            Some('"') => self.lex_string(start, start_line, start_col)?,
            Some(c) if is_name_start(c) => self.lex_name(start, start_line, start_col),
            Some(c) if c == '-' || c.is_ascii_digit() => {
                self.lex_number(start, start_line, start_col)?
            }
            Some(c) => {
                return Err(self.err(start, format!("Unexpected character: \"{c}\".")));
            }
        };

        self.prev_start = Some(start);
        Ok(Some(token))
    }

    fn make(
        &self,
        kind: TokenKind,
        start: usize,
        line: usize,
        column: usize,
        value: Option<Cow<'src, str>>,
    ) -> Token<'src> {
        Token {
            kind,
            start,
            end: self.pos,
            line,
            column,
            value,
            prev: self.prev_start,
        }
    }

    fn punct(&mut self, kind: TokenKind, start: usize, line: usize, column: usize) -> Token<'src> {
        self.bump();
        self.make(kind, start, line, column, None)
    }

    fn lex_spread(
        &mut self,
        start: usize,
        line: usize,
        column: usize,
    ) -> Result<Token<'src>, SyntaxError> {
        if self.peek_char_at(1) == Some('.') && self.peek_char_at(2) == Some('.') {
            self.bump();
            self.bump();
            self.bump();
            Ok(self.make(TokenKind::Spread, start, line, column, None))
        } else {
            Err(self.err(start, "Unexpected character: \".\"."))
        }
    }

    fn lex_comment(
        &mut self,
        start: usize,
        line: usize,
        column: usize,
    ) -> Result<Token<'src>, SyntaxError> {
        self.bump(); // '#'
        let content_start = self.pos;
        // A comment always ends at the next line terminator or EOF; find it
        // in one pass rather than decoding characters one at a time.
        let content_end = match memchr2(b'\n', b'\r', self.remaining().as_bytes()) {
            Some(rel) => content_start + rel,
            None => self.body.len(),
        };
        while self.pos < content_end {
            self.bump();
        }
        let mut content = &self.body[content_start..content_end];
        content = content.strip_prefix(' ').unwrap_or(content);
        Ok(self.make(
            TokenKind::Comment,
            start,
            line,
            column,
            Some(Cow::Borrowed(content)),
        ))
    }

    fn lex_name(&mut self, start: usize, line: usize, column: usize) -> Token<'src> {
        self.bump();
        while let Some(ch) = self.peek_char() {
            if is_name_continue(ch) {
                self.bump();
            } else {
                break;
            }
        }
        let text = &self.body[start..self.pos];
        self.make(
            TokenKind::Name,
            start,
            line,
            column,
            Some(Cow::Borrowed(text)),
        )
    }

    /// Lexes `IntValue`/`FloatValue`, enforcing the grammar's lexical rules:
    /// no leading zeros (other than a bare `0`), a digit required after `.`
    /// and after `e`/`E`.
    fn lex_number(
        &mut self,
        start: usize,
        line: usize,
        column: usize,
    ) -> Result<Token<'src>, SyntaxError> {
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.bump();
        }

        match self.peek_char() {
            Some('0') => {
                self.bump();
                if matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) {
                    return Err(self.err(start, "Invalid number, unexpected digit after 0."));
                }
            }
            Some(c) if c.is_ascii_digit() => {
                while matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) {
                    self.bump();
                }
            }
            _ => {
                return Err(self.err(start, "Invalid number, expected digit."));
            }
        }

        if self.peek_char() == Some('.') {
            if !matches!(self.peek_char_at(1), Some(c) if c.is_ascii_digit()) {
                return Err(self.err(self.pos, "Invalid number, expected digit after \".\"."));
            }
            is_float = true;
            self.bump();
            while matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) {
                self.bump();
            }
        }

        if matches!(self.peek_char(), Some('e') | Some('E')) {
            is_float = true;
            self.bump();
            if matches!(self.peek_char(), Some('+') | Some('-')) {
                self.bump();
            }
            if !matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) {
                return Err(self.err(self.pos, "Invalid number, expected digit after exponent."));
            }
            while matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) {
                self.bump();
            }
        }

        // A number must not be immediately followed by a name-start
        // character or another digit-extending dot, e.g. `1.0f` or `123abc`.
        if matches!(self.peek_char(), Some(c) if is_name_start(c) || c.is_ascii_digit() || c == '.')
        {
            return Err(self.err(self.pos, "Invalid number, unexpected trailing character."));
        }

        let text = &self.body[start..self.pos];
        let kind = if is_float {
            TokenKind::Float
        } else {
            TokenKind::Int
        };
        Ok(self.make(kind, start, line, column, Some(Cow::Borrowed(text))))
    }

    fn lex_string(
        &mut self,
        start: usize,
        line: usize,
        column: usize,
    ) -> Result<Token<'src>, SyntaxError> {
        if self.remaining().starts_with("\"\"\"") {
            return self.lex_block_string(start, line, column);
        }

        self.bump(); // opening quote
        let mut value = String::new();
        loop {
            match self.peek_char() {
                None => {
                    return Err(self.err(self.pos, "Unterminated string."));
                }
                Some('\n') | Some('\r') => {
                    return Err(self.err(self.pos, "Unterminated string."));
                }
                Some('"') => {
                    self.bump();
                    break;
                }
                Some('\\') => {
                    let escape_start = self.pos;
                    self.bump();
                    value.push(self.lex_escape(escape_start)?);
                }
                Some(c) => {
                    self.bump();
                    value.push(c);
                }
            }
        }
        Ok(self.make(
            TokenKind::String,
            start,
            line,
            column,
            Some(Cow::Owned(value)),
        ))
    }

    /// Decodes the character(s) following a `\` already consumed at
    /// `escape_start`. Handles the fixed single-character escapes plus
    /// `\uXXXX`, including surrogate pairs for characters outside the BMP.
    fn lex_escape(&mut self, escape_start: usize) -> Result<char, SyntaxError> {
        let ch = self
            .peek_char()
            .ok_or_else(|| self.err(escape_start, "Unterminated string."))?;
        match ch {
            '"' => {
                self.bump();
                Ok('"')
            }
            '\\' => {
                self.bump();
                Ok('\\')
            }
            '/' => {
                self.bump();
                Ok('/')
            }
            'b' => {
                self.bump();
                Ok('\u{0008}')
            }
            'f' => {
                self.bump();
                Ok('\u{000C}')
            }
            'n' => {
                self.bump();
                Ok('\n')
            }
            'r' => {
                self.bump();
                Ok('\r')
            }
            't' => {
                self.bump();
                Ok('\t')
            }
            'u' => {
                self.bump();
                let high = self.lex_hex4(escape_start)?;
                if (0xD800..=0xDBFF).contains(&high) {
                    if self.peek_char() != Some('\\') || self.peek_char_at(1) != Some('u') {
                        return Err(self.err(escape_start, "Invalid Unicode escape sequence."));
                    }
                    self.bump();
                    self.bump();
                    let low = self.lex_hex4(escape_start)?;
                    if !(0xDC00..=0xDFFF).contains(&low) {
                        return Err(self.err(escape_start, "Invalid Unicode escape sequence."));
                    }
                    let code = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
                    char::from_u32(code)
                        .ok_or_else(|| self.err(escape_start, "Invalid Unicode escape sequence."))
                } else {
                    char::from_u32(high)
                        .ok_or_else(|| self.err(escape_start, "Invalid Unicode escape sequence."))
                }
            }
            other => Err(self.err(
                escape_start,
                format!("Invalid character escape sequence: \"\\{other}\"."),
            )),
        }
    }

    fn lex_hex4(&mut self, escape_start: usize) -> Result<u32, SyntaxError> {
        let digits_start = self.pos;
        for _ in 0..4 {
            match self.peek_char() {
                Some(c) if c.is_ascii_hexdigit() => {
                    self.bump();
                }
                _ => return Err(self.err(escape_start, "Invalid Unicode escape sequence.")),
            }
        }
        u32::from_str_radix(&self.body[digits_start..self.pos], 16)
            .map_err(|_| self.err(escape_start, "Invalid Unicode escape sequence."))
    }

    fn lex_block_string(
        &mut self,
        start: usize,
        line: usize,
        column: usize,
    ) -> Result<Token<'src>, SyntaxError> {
        self.bump();
        self.bump();
        self.bump();
        let mut raw = String::new();
        loop {
            match self.peek_char() {
                None => {
                    return Err(self.err(self.pos, "Unterminated string."));
                }
                Some('"') if self.remaining().starts_with("\"\"\"") => {
                    self.bump();
                    self.bump();
                    self.bump();
                    break;
                }
                Some('\\') if self.remaining().starts_with("\\\"\"\"") => {
                    self.bump();
                    self.bump();
                    self.bump();
                    self.bump();
                    raw.push_str("\"\"\"");
                }
                Some('\r') => {
                    self.bump();
                    raw.push('\n');
                }
                Some(c) => {
                    self.bump();
                    raw.push(c);
                }
            }
        }
        let value = dedent_block_string(&raw);
        Ok(self.make(
            TokenKind::BlockString,
            start,
            line,
            column,
            Some(Cow::Owned(value)),
        ))
    }
}

fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

/// The block-string "fixup" algorithm from the GraphQL spec: strips a
/// common leading-whitespace indentation from every line but the first,
/// then trims wholly-blank leading/trailing lines.
fn dedent_block_string(raw: &str) -> String {
    let lines: Vec<&str> = raw.split('\n').collect();

    let common_indent = lines
        .iter()
        .skip(1)
        .filter_map(|line| {
            let indent = line.len() - line.trim_start_matches([' ', '\t']).len();
            if indent == line.len() {
                None
            } else {
                Some(indent)
            }
        })
        .min();

    let mut out_lines: Vec<String> = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        if i == 0 {
            out_lines.push((*line).to_string());
        } else if let Some(indent) = common_indent {
            out_lines.push(line.get(indent.min(line.len())..).unwrap_or("").to_string());
        } else {
            out_lines.push((*line).to_string());
        }
    }

    while out_lines.first().is_some_and(|l| l.trim().is_empty()) {
        out_lines.remove(0);
    }
    while out_lines.last().is_some_and(|l| l.trim().is_empty()) {
        out_lines.pop();
    }

    out_lines.join("\n")
}
