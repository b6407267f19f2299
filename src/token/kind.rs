/// The kind of a GraphQL token. Forms a closed set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Synthetic start-of-file marker; the token stream's initial current
    /// token before anything has been consumed.
    Sof,
    /// End of input.
    Eof,
    /// `!`
    Bang,
    /// `$`
    Dollar,
    /// `(`
    ParenL,
    /// `)`
    ParenR,
    /// `...`
    Spread,
    /// `:`
    Colon,
    /// `=`
    Equals,
    /// `@`
    At,
    /// `[`
    BracketL,
    /// `]`
    BracketR,
    /// `{`
    BraceL,
    /// `|`
    Pipe,
    /// `}`
    BraceR,
    /// A name/identifier.
    Name,
    /// An integer literal's raw source text.
    Int,
    /// A float literal's raw source text.
    Float,
    /// A quoted string literal (`"..."`), decoded.
    String,
    /// A block string literal (`"""..."""`), decoded and dedented.
    BlockString,
    /// A `#`-prefixed line comment, decoded (leading `#` and one optional
    /// leading space stripped).
    Comment,
}

impl TokenKind {
    /// A human-readable description used in error messages, e.g. `"\"}\""`
    /// or `"Name \"foo\""`. Fills the `<desc>` placeholder used throughout
    /// the combinators' error messages.
    pub fn punctuator_text(self) -> Option<&'static str> {
        use TokenKind::*;
        Some(match self {
            Bang => "!",
            Dollar => "$",
            ParenL => "(",
            ParenR => ")",
            Spread => "...",
            Colon => ":",
            Equals => "=",
            At => "@",
            BracketL => "[",
            BracketR => "]",
            BraceL => "{",
            Pipe => "|",
            BraceR => "}",
            Sof => "<SOF>",
            Eof => "<EOF>",
            _ => return None,
        })
    }
}
