//! Macro expansion.
//!
//! The expander sits between the lexer and the parser. It replaces macro calls by their
//! definitions, registers new definitions (`\newcommand`, `\def`, ...) as it encounters them and
//! hands every other token through unchanged. Replacement text is pushed onto an explicit stack of
//! pending tokens, so deeply nested expansions never recurse.

use rustc_hash::FxHashMap;

use crate::builtin_macros::BUILTIN_MACROS;
use crate::commands::is_primitive;
use crate::error::{Closer, MacroDefProblem, RenderErrKind, RenderError};
use crate::lexer::Lexer;
use crate::token::{Span, Token, TokenKind};

/// Upper bound for the number of tokens waiting on the pending stack.
///
/// Expansion counting alone does not catch macros whose arguments double on every call.
const MAX_PENDING: usize = 1 << 18;

/// An element of the replacement text of a macro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacroToken<'a> {
    Token(Token<'a>),
    /// `#1` to `#9`.
    Param(u8),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroDefinition<'a> {
    pub arity: u8,
    pub body: Vec<MacroToken<'a>>,
}

/// Turn the tokens of a replacement text into a macro definition.
///
/// If `arity` is `None`, the number of parameters is the highest parameter number used.
pub(crate) fn parse_body<'a>(
    tokens: &[Token<'a>],
    arity: Option<u8>,
) -> Result<MacroDefinition<'a>, (MacroDefProblem, Span)> {
    let mut body = Vec::with_capacity(tokens.len());
    let mut max_param = 0u8;
    let mut iter = tokens.iter();
    while let Some(tok) = iter.next() {
        if !tok.is_symbol("#") {
            body.push(MacroToken::Token(*tok));
            continue;
        }
        let Some(next) = iter.next() else {
            return Err((MacroDefProblem::StrayParameter, tok.span));
        };
        if next.is_symbol("#") {
            // `##` stands for a literal `#`.
            body.push(MacroToken::Token(*next));
            continue;
        }
        let param = next
            .symbol_char()
            .and_then(|ch| ch.to_digit(10))
            .ok_or((MacroDefProblem::StrayParameter, tok.span.to(next.span)))?;
        let param = param as u8;
        if param == 0 || arity.is_some_and(|arity| param > arity) {
            return Err((
                MacroDefProblem::InvalidParameterNumber,
                tok.span.to(next.span),
            ));
        }
        max_param = max_param.max(param);
        body.push(MacroToken::Param(param));
    }
    Ok(MacroDefinition {
        arity: arity.unwrap_or(max_param),
        body,
    })
}

/// A macro from the configuration, stored as byte ranges into its own replacement text.
#[derive(Debug)]
struct StoredMacro {
    source: Box<str>,
    arity: u8,
    body: Vec<StoredToken>,
}

#[derive(Debug, Clone, Copy)]
enum StoredToken {
    Token {
        kind: TokenKind,
        start: usize,
        end: usize,
    },
    Param(u8),
}

impl StoredMacro {
    fn definition(&self) -> MacroDefinition<'_> {
        let body = self
            .body
            .iter()
            .map(|tok| match *tok {
                StoredToken::Token { kind, start, end } => MacroToken::Token(Token::new(
                    kind,
                    self.source.get(start..end).unwrap_or_default(),
                    Span::new(start, end),
                )),
                StoredToken::Param(n) => MacroToken::Param(n),
            })
            .collect();
        MacroDefinition {
            arity: self.arity,
            body,
        }
    }
}

/// The macros given in the configuration. They are lexed and validated once.
#[derive(Debug, Default)]
pub struct MacroTable {
    map: FxHashMap<String, StoredMacro>,
}

impl MacroTable {
    /// Lex and validate the configured macros.
    ///
    /// On failure, the error comes with the index and the definition of the offending macro.
    pub fn new(
        macros: Vec<(String, String)>,
    ) -> Result<Self, (Box<RenderError>, usize, String)> {
        let mut map = FxHashMap::with_capacity_and_hasher(macros.len(), Default::default());
        for (idx, (name, definition)) in macros.into_iter().enumerate() {
            if !is_valid_macro_name(name.as_str()) {
                return Err((
                    RenderError::boxed(
                        0..0,
                        RenderErrKind::InvalidMacroDefinition(MacroDefProblem::InvalidName),
                    ),
                    idx,
                    definition,
                ));
            }

            // The tokens borrow `definition`, so they have to be gone before it can be returned
            // in the error.
            let stored = {
                let tokens: Vec<_> = Lexer::new(definition.as_str())
                    .filter(|tok| !matches!(tok.kind, TokenKind::Eof))
                    .collect();
                parse_body(&tokens, None).map(|parsed| {
                    let body = parsed
                        .body
                        .iter()
                        .map(|tok| match tok {
                            MacroToken::Token(tok) => {
                                // Command names are stored without the backslash.
                                let start = if matches!(tok.kind, TokenKind::Command) {
                                    tok.span.start() + 1
                                } else {
                                    tok.span.start()
                                };
                                StoredToken::Token {
                                    kind: tok.kind,
                                    start,
                                    end: start + tok.text.len(),
                                }
                            }
                            MacroToken::Param(n) => StoredToken::Param(*n),
                        })
                        .collect();
                    (parsed.arity, body)
                })
            };
            match stored {
                Ok((arity, body)) => {
                    log::debug!("configured macro \\{name} with {arity} parameter(s)");
                    map.insert(
                        name,
                        StoredMacro {
                            source: definition.into_boxed_str(),
                            arity,
                            body,
                        },
                    );
                }
                Err((problem, span)) => {
                    return Err((
                        RenderError::boxed(span, RenderErrKind::InvalidMacroDefinition(problem)),
                        idx,
                        definition,
                    ));
                }
            }
        }
        Ok(MacroTable { map })
    }

    fn get(&self, name: &str) -> Option<MacroDefinition<'_>> {
        self.map.get(name).map(StoredMacro::definition)
    }

    fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }
}

fn is_valid_macro_name(s: &str) -> bool {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (None, _) => false,
        // If the name contains only one character, any character is valid.
        (Some(_), None) => true,
        // If the name contains more than one character, all characters must be ASCII alphabetic.
        _ => s.bytes().all(|b| b.is_ascii_alphabetic()),
    }
}

/// The streaming macro expander.
///
/// Lookup order for macros is: definitions made in the current input, configured macros,
/// predefined macros. Definitions made in the input live only as long as the expander.
pub struct MacroExpander<'a> {
    lexer: Lexer<'a>,
    /// Tokens produced by expansions or pushed back; the top is the next token.
    pending: Vec<Token<'a>>,
    session: FxHashMap<&'a str, MacroDefinition<'a>>,
    config: Option<&'a MacroTable>,
    expansions: usize,
    max_expand: usize,
    /// The most recent macro call.
    last_call: Option<Token<'a>>,
}

impl<'a> MacroExpander<'a> {
    pub fn new(lexer: Lexer<'a>, config: Option<&'a MacroTable>, max_expand: usize) -> Self {
        MacroExpander {
            lexer,
            pending: Vec::new(),
            session: FxHashMap::default(),
            config,
            expansions: 0,
            max_expand,
            last_call: None,
        }
    }

    #[inline]
    fn next_raw(&mut self) -> Token<'a> {
        match self.pending.pop() {
            Some(tok) => tok,
            None => self.lexer.next_token(),
        }
    }

    fn next_raw_non_whitespace(&mut self) -> Token<'a> {
        loop {
            let tok = self.next_raw();
            if !matches!(tok.kind, TokenKind::Whitespace) {
                return tok;
            }
        }
    }

    fn peek_raw_non_whitespace(&mut self) -> Token<'a> {
        let tok = self.next_raw_non_whitespace();
        self.pending.push(tok);
        tok
    }

    /// The next fully expanded token, including whitespace.
    pub fn next_with_whitespace(&mut self) -> Result<Token<'a>, Box<RenderError>> {
        loop {
            let tok = self.next_raw();
            if !matches!(tok.kind, TokenKind::Command) {
                return Ok(tok);
            }
            match tok.text {
                "newcommand" | "renewcommand" | "providecommand" => {
                    self.define_command(tok)?;
                    continue;
                }
                "def" => {
                    self.define_def(tok)?;
                    continue;
                }
                _ => {}
            }
            if let Some(definition) = self.lookup(tok.text) {
                self.expand_macro(tok, definition)?;
                continue;
            }
            return Ok(tok);
        }
    }

    /// The next fully expanded token that is not whitespace.
    pub fn next(&mut self) -> Result<Token<'a>, Box<RenderError>> {
        loop {
            let tok = self.next_with_whitespace()?;
            if !matches!(tok.kind, TokenKind::Whitespace) {
                return Ok(tok);
            }
        }
    }

    /// Look at the token that [`MacroExpander::next`] would return.
    ///
    /// Whitespace in front of it is dropped.
    pub fn peek(&mut self) -> Result<Token<'a>, Box<RenderError>> {
        let tok = self.next()?;
        // The token is fully expanded, so reading it again yields the same token.
        self.pending.push(tok);
        Ok(tok)
    }

    /// Read an unexpanded argument: a single token or a balanced group without its braces.
    pub fn read_argument(&mut self) -> Result<Vec<Token<'a>>, Box<RenderError>> {
        let tok = self.next_raw_non_whitespace();
        match tok.kind {
            TokenKind::OpenGroup => self.read_balanced(false),
            TokenKind::CloseGroup => Err(RenderError::boxed(
                tok.span,
                RenderErrKind::UnmatchedClose(Closer::Group),
            )),
            TokenKind::Eof => Err(RenderError::boxed(tok.span, RenderErrKind::UnexpectedEof)),
            _ => Ok(vec![tok]),
        }
    }

    /// Read an expanded argument: a single token or a balanced group without its braces.
    ///
    /// Whitespace inside the group is kept.
    pub fn read_group(&mut self) -> Result<(Vec<Token<'a>>, Span), Box<RenderError>> {
        let tok = self.next()?;
        match tok.kind {
            TokenKind::OpenGroup => {
                let tokens = self.read_balanced(true)?;
                let end = tokens.last().map_or(tok.span, |last| last.span);
                Ok((tokens, tok.span.to(end)))
            }
            TokenKind::CloseGroup => Err(RenderError::boxed(
                tok.span,
                RenderErrKind::UnmatchedClose(Closer::Group),
            )),
            TokenKind::Eof => Err(RenderError::boxed(tok.span, RenderErrKind::UnexpectedEof)),
            _ => Ok((vec![tok], tok.span)),
        }
    }

    /// Read tokens up to the `}` that closes an already opened group.
    fn read_balanced(&mut self, expanded: bool) -> Result<Vec<Token<'a>>, Box<RenderError>> {
        let mut depth = 0usize;
        let mut tokens = Vec::new();
        loop {
            let tok = if expanded {
                self.next_with_whitespace()?
            } else {
                self.next_raw()
            };
            match tok.kind {
                TokenKind::OpenGroup => depth += 1,
                TokenKind::CloseGroup => {
                    if depth == 0 {
                        return Ok(tokens);
                    }
                    depth -= 1;
                }
                TokenKind::Eof => {
                    return Err(RenderError::boxed(tok.span, RenderErrKind::UnexpectedEof));
                }
                _ => {}
            }
            tokens.push(tok);
        }
    }

    /// The name of the macro whose expansion produced a token at `span`.
    ///
    /// Tokens of a macro body carry the span of the outermost call, so this finds
    /// the macro that keeps expanding into itself.
    pub(crate) fn expanded_from(&self, span: Span) -> Option<&'a str> {
        self.last_call
            .filter(|call| call.span == span)
            .map(|call| call.text)
    }

    fn lookup(&self, name: &str) -> Option<MacroDefinition<'a>> {
        if let Some(definition) = self.session.get(name) {
            return Some(definition.clone());
        }
        if let Some(config) = self.config
            && let Some(definition) = config.get(name)
        {
            return Some(definition);
        }
        BUILTIN_MACROS.get(name).cloned()
    }

    fn is_defined(&self, name: &str) -> bool {
        self.session.contains_key(name)
            || self.config.is_some_and(|config| config.contains(name))
            || BUILTIN_MACROS.contains_key(name)
            || is_primitive(name)
    }

    fn expand_macro(
        &mut self,
        call: Token<'a>,
        definition: MacroDefinition<'a>,
    ) -> Result<(), Box<RenderError>> {
        self.expansions += 1;
        if self.expansions > self.max_expand {
            return Err(RenderError::boxed(
                call.span,
                RenderErrKind::MacroRecursion(call.text.into()),
            ));
        }
        log::trace!("expanding \\{} ({} argument(s))", call.text, definition.arity);
        self.last_call = Some(call);

        let mut args = Vec::with_capacity(usize::from(definition.arity));
        for _ in 0..definition.arity {
            args.push(self.read_argument()?);
        }
        for tok in definition.body.iter().rev() {
            match *tok {
                MacroToken::Token(tok) => self.pending.push(tok.with_span(call.span)),
                MacroToken::Param(n) => {
                    if let Some(arg) = args.get(usize::from(n) - 1) {
                        self.pending.extend(arg.iter().rev().copied());
                    }
                }
            }
        }
        if self.pending.len() > MAX_PENDING {
            return Err(RenderError::boxed(
                call.span,
                RenderErrKind::MacroRecursion(call.text.into()),
            ));
        }
        Ok(())
    }

    /// `\newcommand{\name}[n]{body}` and its variants.
    fn define_command(&mut self, command: Token<'a>) -> Result<(), Box<RenderError>> {
        let name = self.read_macro_name(command.span)?;

        let mut arity = 0u8;
        let bracket = self.peek_raw_non_whitespace();
        if bracket.is_symbol("[") {
            self.next_raw();
            let digit = self.next_raw_non_whitespace();
            let close = self.next_raw_non_whitespace();
            match digit.symbol_char().and_then(|ch| ch.to_digit(10)) {
                Some(n) if close.is_symbol("]") => arity = n as u8,
                _ => {
                    return Err(invalid_definition(
                        bracket.span.to(close.span),
                        MacroDefProblem::InvalidParameterNumber,
                    ));
                }
            }
        }

        let body = self.read_body(command.span)?;
        let definition = parse_body(&body, Some(arity))
            .map_err(|(problem, span)| invalid_definition(span, problem))?;
        if command.text == "providecommand" && self.is_defined(name.text) {
            return Ok(());
        }
        self.register(name, definition);
        Ok(())
    }

    /// `\def\name#1#2{body}`.
    fn define_def(&mut self, command: Token<'a>) -> Result<(), Box<RenderError>> {
        let name = self.next_raw_non_whitespace();
        if !matches!(name.kind, TokenKind::Command) {
            return Err(invalid_definition(
                command.span.to(name.span),
                MacroDefProblem::InvalidName,
            ));
        }
        let mut arity = 0u8;
        loop {
            let tok = self.peek_raw_non_whitespace();
            if !tok.is_symbol("#") {
                break;
            }
            self.next_raw();
            let digit = self.next_raw();
            let expected = char::from(b'1' + arity);
            if arity >= 9 || digit.symbol_char() != Some(expected) {
                return Err(invalid_definition(
                    tok.span.to(digit.span),
                    MacroDefProblem::InvalidParameterNumber,
                ));
            }
            arity += 1;
        }
        let open = self.peek_raw_non_whitespace();
        if !matches!(open.kind, TokenKind::OpenGroup) {
            return Err(invalid_definition(
                command.span.to(open.span),
                MacroDefProblem::MissingBody,
            ));
        }
        let body = self.read_body(command.span)?;
        let definition = parse_body(&body, Some(arity))
            .map_err(|(problem, span)| invalid_definition(span, problem))?;
        self.register(name, definition);
        Ok(())
    }

    /// The macro name of `\newcommand`, either `\name` or `{\name}`.
    fn read_macro_name(&mut self, command: Span) -> Result<Token<'a>, Box<RenderError>> {
        let tok = self.next_raw_non_whitespace();
        let name = match tok.kind {
            TokenKind::Command => return Ok(tok),
            TokenKind::OpenGroup => {
                let name = self.next_raw_non_whitespace();
                let close = self.next_raw_non_whitespace();
                if matches!(name.kind, TokenKind::Command)
                    && matches!(close.kind, TokenKind::CloseGroup)
                {
                    return Ok(name);
                }
                close
            }
            _ => tok,
        };
        Err(invalid_definition(
            command.to(name.span),
            MacroDefProblem::InvalidName,
        ))
    }

    fn read_body(&mut self, command: Span) -> Result<Vec<Token<'a>>, Box<RenderError>> {
        self.read_argument().map_err(|err| {
            if matches!(err.1, RenderErrKind::UnexpectedEof) {
                let eof = Span::new(err.0.start, err.0.end);
                invalid_definition(command.to(eof), MacroDefProblem::MissingBody)
            } else {
                err
            }
        })
    }

    fn register(&mut self, name: Token<'a>, definition: MacroDefinition<'a>) {
        log::debug!(
            "defined macro \\{} with {} parameter(s)",
            name.text,
            definition.arity
        );
        self.session.insert(name.text, definition);
    }
}

#[inline]
fn invalid_definition(span: Span, problem: MacroDefProblem) -> Box<RenderError> {
    RenderError::boxed(span, RenderErrKind::InvalidMacroDefinition(problem))
}

/// Fully expand a token stream.
///
/// The result contains every token the parser would see, including whitespace, and ends with
/// the end-of-input token.
pub fn expand<'a>(
    lexer: Lexer<'a>,
    config: Option<&'a MacroTable>,
    max_expand: usize,
) -> Result<Vec<Token<'a>>, Box<RenderError>> {
    let mut expander = MacroExpander::new(lexer, config, max_expand);
    let mut tokens = Vec::new();
    loop {
        let tok = expander.next_with_whitespace()?;
        tokens.push(tok);
        if matches!(tok.kind, TokenKind::Eof) {
            return Ok(tokens);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::Write;

    use insta::assert_snapshot;

    use super::*;

    fn expanded(input: &str) -> String {
        expanded_with(input, None)
    }

    fn expanded_with(input: &str, config: Option<&MacroTable>) -> String {
        let tokens = expand(Lexer::new(input), config, 1000).unwrap();
        let mut out = String::new();
        for tok in tokens {
            match tok.kind {
                TokenKind::Command => write!(out, "\\{} ", tok.text).unwrap(),
                TokenKind::Whitespace => out.push_str("␣ "),
                TokenKind::Eof => out.push_str("EOF"),
                _ => write!(out, "{} ", tok.text).unwrap(),
            }
        }
        out
    }

    fn expand_err(input: &str) -> RenderError {
        *expand(Lexer::new(input), None, 1000).unwrap_err()
    }

    #[test]
    fn builtin() {
        assert_snapshot!(expanded(r"a\le b"), @r"a \leq b EOF");
        assert_snapshot!(expanded(r"\bra{\psi}"), @r"\langle \psi \vert EOF");
        assert_snapshot!(expanded(r"\odv f x"), @r"\frac { \mathrm { d } f } { \mathrm { d } x } EOF");
    }

    #[test]
    fn newcommand() {
        assert_snapshot!(
            expanded(r"\newcommand{\sq}[1]{#1^2}\sq{x+1}"),
            @r"x + 1 ^ 2 EOF"
        );
        assert_snapshot!(expanded(r"\newcommand\foo{bar}\foo"), @r"b a r EOF");
    }

    #[test]
    fn def_with_parameters() {
        assert_snapshot!(expanded(r"\def\p#1#2{(#1,#2)}\p ab"), @r"( a , b ) EOF");
    }

    #[test]
    fn literal_hash() {
        assert_snapshot!(expanded(r"\def\h{##}\h"), @r"# EOF");
    }

    #[test]
    fn redefinition_overwrites() {
        assert_snapshot!(
            expanded(r"\newcommand\x{1}\renewcommand\x{2}\x"),
            @r"2 EOF"
        );
    }

    #[test]
    fn providecommand_keeps_existing() {
        assert_snapshot!(
            expanded(r"\newcommand\x{1}\providecommand\x{2}\x\providecommand\y{3}\y"),
            @r"1 3 EOF"
        );
        // Primitive commands count as defined.
        assert_snapshot!(expanded(r"\providecommand\alpha{a}\alpha"), @r"\alpha EOF");
    }

    #[test]
    fn unknown_commands_pass_through() {
        assert_snapshot!(expanded(r"\foo x"), @r"\foo x EOF");
    }

    #[test]
    fn expanded_tokens_point_at_the_call() {
        let tokens = expand(Lexer::new(r"x\le y"), None, 1000).unwrap();
        assert_eq!(tokens[1].text, "leq");
        assert_eq!(tokens[1].span, Span::new(1, 4));
    }

    #[test]
    fn recursion_is_bounded() {
        let err = expand_err(r"\def\a{\a}\a");
        assert!(matches!(err.1, RenderErrKind::MacroRecursion(ref name) if &**name == "a"));

        let err = expand_err(r"\newcommand\b{x\b}\b");
        assert!(matches!(err.1, RenderErrKind::MacroRecursion(_)));
    }

    #[test]
    fn doubling_arguments_are_bounded() {
        let err = expand_err(r"\def\a#1{\a{#1#1}}\a x");
        assert!(matches!(err.1, RenderErrKind::MacroRecursion(_)));
    }

    #[test]
    fn expansion_limit() {
        let input = r"\def\x{y}\x\x\x";
        assert!(expand(Lexer::new(input), None, 3).is_ok());
        let err = *expand(Lexer::new(input), None, 2).unwrap_err();
        assert!(matches!(err.1, RenderErrKind::MacroRecursion(_)));
        assert_eq!(err.0, 13..15);
    }

    #[test]
    fn invalid_definitions() {
        for input in [
            r"\newcommand{x}{y}",
            r"\newcommand\x[a]{y}",
            r"\newcommand\x[1]{#2}",
            r"\newcommand\x{#}",
            r"\def\x#2{y}",
            r"\def\x",
        ] {
            let err = expand_err(input);
            assert!(
                matches!(err.1, RenderErrKind::InvalidMacroDefinition(_)),
                "{input}: {err:?}"
            );
        }
    }

    #[test]
    fn arguments_and_groups() {
        let mut expander = MacroExpander::new(Lexer::new(r"{a {b} c} \le {x y}"), None, 10);
        let arg = expander.read_argument().unwrap();
        assert_eq!(arg.len(), 7);
        assert_eq!(expander.peek().unwrap().text, "leq");
        assert_eq!(expander.next().unwrap().text, "leq");
        let (group, span) = expander.read_group().unwrap();
        let text: Vec<_> = group.iter().map(|tok| tok.text).collect();
        assert_eq!(text, ["x", " ", "y"]);
        assert_eq!(span, Span::new(14, 18));
        assert_eq!(expander.next().unwrap().kind, TokenKind::Eof);
        assert_eq!(expander.next().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn unterminated_group() {
        let mut expander = MacroExpander::new(Lexer::new("{ab"), None, 10);
        let err = expander.read_argument().unwrap_err();
        assert!(matches!(err.1, RenderErrKind::UnexpectedEof));
    }

    #[test]
    fn config_macros() {
        let table = MacroTable::new(vec![
            ("d".to_string(), r"\mathrm{d}".to_string()),
            ("abs".to_string(), r"\vert #1\vert".to_string()),
        ])
        .unwrap();
        assert_snapshot!(
            expanded_with(r"\abs{x}\d", Some(&table)),
            @r"\vert x \vert \mathrm { d } EOF"
        );
        // Definitions in the input take precedence.
        assert_snapshot!(
            expanded_with(r"\def\d{D}\d", Some(&table)),
            @r"D EOF"
        );
    }

    #[test]
    fn invalid_config_macros() {
        let (err, idx, definition) = MacroTable::new(vec![
            ("ok".to_string(), "x".to_string()),
            ("a1".to_string(), "y".to_string()),
        ])
        .unwrap_err();
        assert!(matches!(err.1, RenderErrKind::InvalidMacroDefinition(_)));
        assert_eq!(idx, 1);
        assert_eq!(definition, "y");

        let (err, idx, _) =
            MacroTable::new(vec![("bad".to_string(), "#x".to_string())]).unwrap_err();
        assert!(matches!(
            err.1,
            RenderErrKind::InvalidMacroDefinition(MacroDefProblem::StrayParameter)
        ));
        assert_eq!(idx, 0);
    }
}
