use std::ops::Range;

use strum_macros::IntoStaticStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
pub enum TokenKind {
    /// A control word like `\alpha` or a control symbol like `\,`.
    Command,
    /// Any other single character.
    Symbol,
    #[strum(serialize = "{")]
    OpenGroup,
    #[strum(serialize = "}")]
    CloseGroup,
    #[strum(serialize = "^")]
    Superscript,
    #[strum(serialize = "_")]
    Subscript,
    /// A run of whitespace characters.
    Whitespace,
    /// End of input.
    Eof,
}

/// A lexical token.
///
/// For commands, `text` is the command name without the backslash. For all other tokens, it is
/// the matched source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'source> {
    pub kind: TokenKind,
    pub text: &'source str,
    pub span: Span,
}

impl<'source> Token<'source> {
    #[inline]
    pub const fn new(kind: TokenKind, text: &'source str, span: Span) -> Self {
        Token { kind, text, span }
    }

    #[inline]
    pub const fn eof(at: usize) -> Self {
        Token::new(TokenKind::Eof, "", Span::zero_width(at))
    }

    #[inline]
    pub fn is_command(&self, name: &str) -> bool {
        matches!(self.kind, TokenKind::Command) && self.text == name
    }

    #[inline]
    pub fn is_symbol(&self, text: &str) -> bool {
        matches!(self.kind, TokenKind::Symbol) && self.text == text
    }

    /// The single character of a symbol token.
    pub fn symbol_char(&self) -> Option<char> {
        if !matches!(self.kind, TokenKind::Symbol) {
            return None;
        }
        let mut chars = self.text.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Some(ch),
            _ => None,
        }
    }

    /// Replace the span, e.g. with the span of the macro call that produced this token.
    #[inline]
    pub(crate) const fn with_span(self, span: Span) -> Self {
        Token { span, ..self }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    #[inline]
    pub const fn zero_width(at: usize) -> Self {
        Span { start: at, end: at }
    }

    #[inline]
    pub const fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// The smallest span that covers both `self` and `other`.
    #[inline]
    pub fn to(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl From<Span> for Range<usize> {
    #[inline]
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}
