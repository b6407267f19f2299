use crate::source::Source;

/// Line/column of a byte offset within a [`Source`], both 1-based.
///
/// Computed on demand from the source body plus `location_offset`, rather
/// than carried around on every token — callers that want it typically only
/// want it once, to build a [`SyntaxError`].
fn line_and_column(source: &Source<'_>, offset: usize) -> (usize, usize) {
    let body = source.body();
    let prefix = &body[..offset.min(body.len())];
    let newlines = prefix.matches('\n').count();
    let line = source.location_offset.line + newlines;
    let column = if newlines == 0 {
        source.location_offset.column + prefix.chars().count()
    } else {
        let last_newline = prefix.rfind('\n').unwrap();
        prefix[last_newline + 1..].chars().count() + 1
    };
    (line, column)
}

/// The single error kind this crate emits: a syntax error pinned to a byte
/// offset in some [`Source`].
///
/// There is no error-recovery path and no batch of errors: the first
/// production that cannot match raises exactly one of these, and it
/// unwinds out of every grammar production and out of the public entry
/// point.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{}", self.format_detailed())]
pub struct SyntaxError {
    message: String,
    offset: usize,
    line: usize,
    column: usize,
    source_name: String,
    /// The full source body, retained only so `Display`/`format_detailed`
    /// can render a caret-pointing snippet. Not part of the error's
    /// identity: two errors with the same message/offset/source_name but
    /// different snippets still compare unequal only if the bodies differ,
    /// which in practice means they came from different parses anyway.
    snippet_line: String,
}

impl SyntaxError {
    /// Constructs (does not throw/raise) a syntax error at `offset` in
    /// `source`, with the given message.
    pub fn new(source: &Source<'_>, offset: usize, message: impl Into<String>) -> Self {
        let (line, column) = line_and_column(source, offset);
        let body = source.body();
        let line_start = body[..offset.min(body.len())]
            .rfind('\n')
            .map(|i| i + 1)
            .unwrap_or(0);
        let line_end = body[line_start..]
            .find('\n')
            .map(|i| line_start + i)
            .unwrap_or(body.len());
        Self {
            message: message.into(),
            offset,
            line,
            column,
            source_name: source.name.to_string(),
            snippet_line: body[line_start..line_end].to_string(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// A one-line summary: `"<source>:<line>:<column>: <message>"`.
    pub fn format_oneline(&self) -> String {
        format!(
            "{}:{}:{}: {}",
            self.source_name, self.line, self.column, self.message
        )
    }

    /// A multi-line diagnostic with a source excerpt and a caret pointing
    /// at the offending column.
    pub fn format_detailed(&self) -> String {
        let caret_padding = " ".repeat(self.column.saturating_sub(1));
        format!(
            "Syntax Error: {}\n\n{}:{}:{}\n{}\n{}^\n",
            self.message,
            self.source_name,
            self.line,
            self.column,
            self.snippet_line,
            caret_padding
        )
    }
}
