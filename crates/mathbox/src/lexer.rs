use std::mem;
use std::str::CharIndices;

use crate::token::{Span, Token, TokenKind};

/// Split `input` into tokens.
///
/// The iterator ends after the end-of-input token.
#[inline]
pub fn tokenize(input: &str) -> Lexer<'_> {
    Lexer::new(input)
}

/// The lexer.
///
/// Lexing never fails: every character of the input ends up in some token. Cloning a lexer
/// gives an independent cursor at the same position.
#[derive(Debug, Clone)]
pub struct Lexer<'source> {
    input: CharIndices<'source>,
    peek: (usize, Option<char>),
    input_string: &'source str,
    finished: bool,
}

impl<'source> Lexer<'source> {
    pub fn new(input: &'source str) -> Self {
        let mut lexer = Lexer {
            input: input.char_indices(),
            peek: (0, None),
            input_string: input,
            finished: false,
        };
        lexer.read_char(); // Initialize `peek`.
        lexer
    }

    /// One character progresses.
    fn read_char(&mut self) -> (usize, Option<char>) {
        mem::replace(
            &mut self.peek,
            self.input
                .next()
                .map(|(idx, ch)| (idx, Some(ch)))
                .unwrap_or((self.input_string.len(), None)),
        )
    }

    fn skip_whitespace(&mut self) {
        while self.peek.1.is_some_and(char::is_whitespace) {
            self.read_char();
        }
    }

    /// Read the name of a command after the backslash.
    ///
    /// A control word is a run of ASCII letters, optionally followed by `*`. Everything else is
    /// a control symbol of exactly one character.
    fn read_command(&mut self) -> (&'source str, usize) {
        let start = self.peek.0;

        while self.peek.1.is_some_and(|ch| ch.is_ascii_alphabetic()) {
            self.read_char();
        }
        let is_word = start != self.peek.0;
        if is_word {
            if self.peek.1 == Some('*') {
                self.read_char();
            }
        } else {
            // Always read at least one character.
            self.read_char();
        }

        let end = self.peek.0;
        let name = self.input_string.get(start..end).unwrap_or_default();
        if is_word {
            // Whitespace after a control word is never significant.
            self.skip_whitespace();
        }
        (name, end)
    }

    /// Read the next token.
    ///
    /// Once the input is exhausted, this keeps returning the end-of-input token.
    pub fn next_token(&mut self) -> Token<'source> {
        loop {
            let (loc, ch) = self.read_char();
            let Some(ch) = ch else {
                return Token::eof(loc);
            };
            let end = loc + ch.len_utf8();
            let text = self.text(loc, end);
            let single = |kind| Token::new(kind, text, Span::new(loc, end));
            return match ch {
                '%' => {
                    // Comments run until the end of the line, including the newline.
                    while let (_, Some(ch)) = self.read_char() {
                        if ch == '\n' {
                            break;
                        }
                    }
                    continue;
                }
                '{' => single(TokenKind::OpenGroup),
                '}' => single(TokenKind::CloseGroup),
                '^' => single(TokenKind::Superscript),
                '_' => single(TokenKind::Subscript),
                '\\' => {
                    if self.peek.1.is_none() {
                        // A lone backslash at the end of the input is just a character.
                        return single(TokenKind::Symbol);
                    }
                    let (name, end) = self.read_command();
                    Token::new(TokenKind::Command, name, Span::new(loc, end))
                }
                ch if ch.is_whitespace() => {
                    self.skip_whitespace();
                    let end = self.peek.0;
                    Token::new(TokenKind::Whitespace, self.text(loc, end), Span::new(loc, end))
                }
                _ => single(TokenKind::Symbol),
            };
        }
    }

    #[inline]
    fn text(&self, start: usize, end: usize) -> &'source str {
        self.input_string.get(start..end).unwrap_or_default()
    }
}

impl<'source> Iterator for Lexer<'source> {
    type Item = Token<'source>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let tok = self.next_token();
        if matches!(tok.kind, TokenKind::Eof) {
            self.finished = true;
        }
        Some(tok)
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::Write;

    use insta::assert_snapshot;

    use super::*;

    fn dump(input: &str) -> String {
        let mut out = String::new();
        for tok in tokenize(input) {
            writeln!(
                out,
                "{}..{}: {:?} {:?}",
                tok.span.start(),
                tok.span.end(),
                tok.kind,
                tok.text
            )
            .unwrap();
        }
        out
    }

    #[test]
    fn simple_expression() {
        assert_snapshot!(dump(r"x^2 + y_{i}"), @r#"
        0..1: Symbol "x"
        1..2: Superscript "^"
        2..3: Symbol "2"
        3..4: Whitespace " "
        4..5: Symbol "+"
        5..6: Whitespace " "
        6..7: Symbol "y"
        7..8: Subscript "_"
        8..9: OpenGroup "{"
        9..10: Symbol "i"
        10..11: CloseGroup "}"
        11..11: Eof ""
        "#);
    }

    #[test]
    fn commands() {
        assert_snapshot!(dump(r"\frac  {a}\,\operatorname*{f}\\"), @r#"
        0..5: Command "frac"
        7..8: OpenGroup "{"
        8..9: Symbol "a"
        9..10: CloseGroup "}"
        10..12: Command ","
        12..26: Command "operatorname*"
        26..27: OpenGroup "{"
        27..28: Symbol "f"
        28..29: CloseGroup "}"
        29..31: Command "\\"
        31..31: Eof ""
        "#);
    }

    #[test]
    fn control_space_keeps_following_whitespace() {
        assert_snapshot!(dump("a\\  b"), @r#"
        0..1: Symbol "a"
        1..3: Command " "
        3..4: Whitespace " "
        4..5: Symbol "b"
        5..5: Eof ""
        "#);
    }

    #[test]
    fn comments_and_whitespace_runs() {
        assert_snapshot!(dump("a %comment\n  \t b"), @r#"
        0..1: Symbol "a"
        1..2: Whitespace " "
        11..15: Whitespace "  \t "
        15..16: Symbol "b"
        16..16: Eof ""
        "#);
    }

    #[test]
    fn trailing_backslash_and_unicode() {
        assert_snapshot!(dump("α→\\"), @r#"
        0..2: Symbol "α"
        2..5: Symbol "→"
        5..6: Symbol "\\"
        6..6: Eof ""
        "#);
    }

    #[test]
    fn eof_repeats() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next_token().kind, TokenKind::Symbol);
        assert_eq!(lexer.next_token(), Token::eof(1));
        assert_eq!(lexer.next_token(), Token::eof(1));
    }

    #[test]
    fn clones_are_independent() {
        let mut lexer = Lexer::new(r"\alpha\beta");
        let mut restarted = lexer.clone();
        assert_eq!(lexer.next_token().text, "alpha");
        assert_eq!(lexer.next_token().text, "beta");
        assert_eq!(restarted.next_token().text, "alpha");
        assert_eq!(tokenize(r"\alpha\beta").count(), 3);
    }
}
