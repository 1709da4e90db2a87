use std::mem;

use box_renderer::atom::AtomClass;
use box_renderer::color::Rgb;
use box_renderer::font::Font;

use crate::ast::{Array, MathFont, Node, OpName, StyleKind, TextFont};
use crate::commands::{Command, get_command};
use crate::environments::Env;
use crate::error::{Alignment, Closer, RenderErrKind, RenderError, Script, Warning};
use crate::macros::MacroExpander;
use crate::specifications::{
    Length, Unit, parse_column_specification, parse_length_specification,
};
use crate::symbols::{self, Symbol};
use crate::token::{Span, Token, TokenKind};

/// How deeply groups and arguments may be nested.
const MAX_DEPTH: usize = 128;

pub(crate) struct Parser<'a> {
    tokens: MacroExpander<'a>,
    warnings: Vec<Warning>,
    depth: usize,
}

/// The construct whose list is being parsed. It decides which tokens end the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListEnd {
    /// The whole input.
    Eof,
    /// `{...}`
    Group,
    /// The optional argument of `\sqrt`.
    Bracket,
    /// `\left ... \right`
    LeftRight,
    /// A cell of an array, ended by `&`, `\\` or `\end`.
    Cell,
}

/// A command that applies to the rest of the current list.
enum Switch {
    Style(StyleKind),
    Sizing(u8),
    Font(MathFont),
    Color(Rgb),
}

impl Switch {
    fn wrap(self, body: Vec<Node>) -> Node {
        match self {
            Switch::Style(style) => Node::Style { style, body },
            Switch::Sizing(size) => Node::Sizing { size, body },
            Switch::Font(font) => Node::FontSwitch { font, body },
            Switch::Color(color) => Node::Color { color, body },
        }
    }
}

type ParseResult<T> = Result<T, Box<RenderError>>;

impl<'a> Parser<'a> {
    pub(crate) fn new(tokens: MacroExpander<'a>) -> Self {
        Parser {
            tokens,
            warnings: Vec::new(),
            depth: 0,
        }
    }

    /// Parse the whole input. The root is an implicit group.
    pub(crate) fn parse(mut self) -> ParseResult<(Vec<Node>, Vec<Warning>)> {
        let (nodes, _) = self.parse_list(ListEnd::Eof)?;
        Ok((nodes, self.warnings))
    }

    /// Parse a list and fix up the classes of its binary operators.
    ///
    /// Returns the list together with the token that ended it. That token has been consumed.
    fn parse_list(&mut self, end: ListEnd) -> ParseResult<(Vec<Node>, Token<'a>)> {
        let (mut nodes, terminator) = self.parse_list_raw(end)?;
        reclassify(&mut nodes);
        Ok((nodes, terminator))
    }

    fn parse_list_raw(&mut self, end: ListEnd) -> ParseResult<(Vec<Node>, Token<'a>)> {
        let at = self.tokens.peek()?.span;
        self.nested(at, |parser| parser.parse_list_inner(end))
    }

    /// Run `f` one nesting level deeper.
    ///
    /// Groups and command arguments both count. Hitting the limit on tokens that a macro
    /// produced means that the macro keeps expanding into itself.
    fn nested<T>(
        &mut self,
        at: Span,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            let kind = match self.tokens.expanded_from(at) {
                Some(name) => RenderErrKind::MacroRecursion(name.into()),
                None => RenderErrKind::TooDeeplyNested { max: MAX_DEPTH },
            };
            return Err(RenderError::boxed(at, kind));
        }
        let result = f(self);
        self.depth -= 1;
        result
    }

    fn parse_list_inner(&mut self, end: ListEnd) -> ParseResult<(Vec<Node>, Token<'a>)> {
        let mut nodes = Vec::new();
        loop {
            let tok = self.tokens.next()?;
            match tok.kind {
                TokenKind::Eof => {
                    return match end {
                        ListEnd::Eof => Ok((nodes, tok)),
                        ListEnd::LeftRight => {
                            Err(RenderError::boxed(tok.span, RenderErrKind::MissingRight))
                        }
                        _ => Err(RenderError::boxed(tok.span, RenderErrKind::UnexpectedEof)),
                    };
                }
                TokenKind::CloseGroup => {
                    return match end {
                        ListEnd::Group => Ok((nodes, tok)),
                        ListEnd::LeftRight => {
                            Err(RenderError::boxed(tok.span, RenderErrKind::MissingRight))
                        }
                        _ => Err(stray(tok)),
                    };
                }
                TokenKind::Command => match tok.text {
                    "right" if end == ListEnd::LeftRight => return Ok((nodes, tok)),
                    "middle" if end == ListEnd::LeftRight => {
                        nodes.push(Node::Middle(self.parse_delimiter()?));
                        continue;
                    }
                    "end" | "\\" if end == ListEnd::Cell => return Ok((nodes, tok)),
                    "right" | "middle" | "end" | "\\" => return Err(stray(tok)),
                    _ => {}
                },
                TokenKind::Symbol => match tok.text {
                    "&" if end == ListEnd::Cell => return Ok((nodes, tok)),
                    "&" => return Err(stray(tok)),
                    "]" if end == ListEnd::Bracket => return Ok((nodes, tok)),
                    _ => {}
                },
                _ => {}
            }

            if let Some(switch) = self.parse_switch(tok)? {
                // The switch swallows the rest of the list, including the terminator.
                let (body, terminator) = self.parse_list_raw(end)?;
                nodes.push(switch.wrap(body));
                return Ok((nodes, terminator));
            }
            if let Some(atom) = self.parse_atom(tok)? {
                nodes.push(atom);
            }
        }
    }

    fn parse_switch(&mut self, tok: Token<'a>) -> ParseResult<Option<Switch>> {
        if !matches!(tok.kind, TokenKind::Command) {
            return Ok(None);
        }
        Ok(match get_command(tok.text) {
            Some(Command::Style(style)) => Some(Switch::Style(style)),
            Some(Command::Sizing(size)) => Some(Switch::Sizing(size)),
            Some(Command::OldFont(font)) => {
                self.deprecated(tok);
                Some(Switch::Font(font))
            }
            Some(Command::Color) => Some(Switch::Color(self.parse_color()?)),
            _ => None,
        })
    }

    /// Parse an atom with its scripts. `\limits` in the wrong place yields `None`.
    fn parse_atom(&mut self, tok: Token<'a>) -> ParseResult<Option<Node>> {
        let (base, mut first_script) = if is_script(&tok) {
            (Node::Group(Vec::new()), Some(tok))
        } else {
            match self.parse_primary(tok)? {
                Some(base) => (base, None),
                None => return Ok(None),
            }
        };

        let mut base = base;
        if let Node::Op { limits, .. } = &mut base {
            loop {
                let next = self.tokens.peek()?;
                match get_command_of(&next) {
                    Some(Command::Limits(value)) => {
                        self.tokens.next()?;
                        *limits = Some(value);
                    }
                    _ => break,
                }
            }
        }

        let mut sup: Option<Box<Node>> = None;
        let mut sub: Option<Box<Node>> = None;
        loop {
            let tok = match first_script.take() {
                Some(tok) => tok,
                None => {
                    if !is_script(&self.tokens.peek()?) {
                        break;
                    }
                    self.tokens.next()?
                }
            };
            match tok.kind {
                TokenKind::Superscript => {
                    if sup.is_some() {
                        return Err(double_script(tok, Script::Superscript));
                    }
                    sup = Some(Box::new(self.parse_argument()?));
                }
                TokenKind::Subscript => {
                    if sub.is_some() {
                        return Err(double_script(tok, Script::Subscript));
                    }
                    sub = Some(Box::new(self.parse_argument()?));
                }
                _ => {
                    // A run of primes, optionally followed by a superscript.
                    if sup.is_some() {
                        return Err(double_script(tok, Script::Superscript));
                    }
                    let mut primes = vec![prime()];
                    while self.tokens.peek()?.is_symbol("'") {
                        self.tokens.next()?;
                        primes.push(prime());
                    }
                    if matches!(self.tokens.peek()?.kind, TokenKind::Superscript) {
                        self.tokens.next()?;
                        primes.push(self.parse_argument()?);
                    }
                    sup = Some(Box::new(Node::Group(primes)));
                }
            }
        }

        if sup.is_none() && sub.is_none() {
            return Ok(Some(base));
        }
        Ok(Some(Node::SupSub {
            base: Box::new(base),
            sup,
            sub,
        }))
    }

    /// Parse a script or command argument: a single atom without scripts, or a group.
    fn parse_argument(&mut self) -> ParseResult<Node> {
        let tok = self.tokens.next()?;
        match tok.kind {
            TokenKind::OpenGroup => Ok(Node::Group(self.parse_list(ListEnd::Group)?.0)),
            TokenKind::Eof => Err(RenderError::boxed(tok.span, RenderErrKind::UnexpectedEof)),
            TokenKind::CloseGroup | TokenKind::Superscript | TokenKind::Subscript => {
                Err(RenderError::boxed(
                    tok.span,
                    RenderErrKind::ExpectedArgument(tok.text.into()),
                ))
            }
            _ => Ok(self.parse_primary(tok)?.unwrap_or(Node::Group(Vec::new()))),
        }
    }

    /// The contents of an argument as a list.
    ///
    /// With `reclassify` unset, the classes are left for the enclosing list to fix up.
    fn parse_argument_list(&mut self, reclassify_list: bool) -> ParseResult<Vec<Node>> {
        let tok = self.tokens.peek()?;
        if matches!(tok.kind, TokenKind::OpenGroup) {
            self.tokens.next()?;
            let (body, _) = if reclassify_list {
                self.parse_list(ListEnd::Group)?
            } else {
                self.parse_list_raw(ListEnd::Group)?
            };
            return Ok(body);
        }
        Ok(vec![self.parse_argument()?])
    }

    fn parse_primary(&mut self, tok: Token<'a>) -> ParseResult<Option<Node>> {
        match tok.kind {
            TokenKind::OpenGroup => Ok(Some(Node::Group(self.parse_list(ListEnd::Group)?.0))),
            TokenKind::Symbol => self.parse_symbol(tok),
            TokenKind::Command => self.nested(tok.span, |parser| parser.parse_command(tok)),
            TokenKind::Whitespace => Ok(None),
            TokenKind::Eof
            | TokenKind::CloseGroup
            | TokenKind::Superscript
            | TokenKind::Subscript => Err(stray(tok)),
        }
    }

    fn parse_symbol(&mut self, tok: Token<'a>) -> ParseResult<Option<Node>> {
        let Some(ch) = tok.text.chars().next() else {
            return Ok(None);
        };
        Ok(Some(match ch {
            '~' => Node::Spacing(Length {
                value: 0.25,
                unit: Unit::Em,
            }),
            '\'' => prime(),
            '&' => return Err(stray(tok)),
            _ => Node::Symbol(symbols::get_char(ch).unwrap_or(Symbol {
                ch,
                class: AtomClass::Ord,
                font: Font::MainRegular,
            })),
        }))
    }

    fn parse_command(&mut self, tok: Token<'a>) -> ParseResult<Option<Node>> {
        if let Some(symbol) = symbols::get_command(tok.text) {
            return Ok(Some(Node::Symbol(symbol)));
        }
        let Some(command) = get_command(tok.text) else {
            return Ok(Some(self.unknown_command(tok)));
        };
        let node = match command {
            Command::Frac {
                has_bar,
                delims,
                style,
            } => {
                let numer = self.parse_argument()?;
                let denom = self.parse_argument()?;
                Node::Fraction {
                    numer: Box::new(numer),
                    denom: Box::new(denom),
                    has_bar,
                    left: delims.map(|(left, _)| left),
                    right: delims.map(|(_, right)| right),
                    style,
                }
            }
            Command::Sqrt => {
                let index = if self.tokens.peek()?.is_symbol("[") {
                    self.tokens.next()?;
                    let (index, _) = self.parse_list(ListEnd::Bracket)?;
                    Some(Box::new(Node::Group(index)))
                } else {
                    None
                };
                let radicand = self.parse_argument()?;
                Node::Sqrt {
                    radicand: Box::new(radicand),
                    index,
                }
            }
            Command::Accent(kind) => Node::Accent {
                kind,
                base: Box::new(self.parse_argument()?),
            },
            Command::Left => {
                let left = self.parse_delimiter()?;
                let (body, _) = self.parse_list(ListEnd::LeftRight)?;
                let right = self.parse_delimiter()?;
                Node::LeftRight { left, body, right }
            }
            Command::Big(size, class) => Node::DelimSized {
                delim: self.parse_delimiter()?,
                size,
                class,
            },
            Command::Begin => self.parse_environment()?,
            Command::Middle | Command::Right | Command::End | Command::NewLine => {
                return Err(stray(tok));
            }
            // In argument position, a switch has nothing to apply to.
            Command::Style(style) => Node::Style {
                style,
                body: Vec::new(),
            },
            Command::Sizing(size) => Node::Sizing {
                size,
                body: Vec::new(),
            },
            Command::OldFont(font) => {
                self.deprecated(tok);
                Node::FontSwitch {
                    font,
                    body: Vec::new(),
                }
            }
            Command::Color => Node::Color {
                color: self.parse_color()?,
                body: Vec::new(),
            },
            Command::Font(font) => Node::Font {
                font,
                body: self.parse_argument_list(true)?,
            },
            Command::Text(font) => self.parse_text(font)?,
            Command::OperatorName { limits } => Node::Op {
                op: OpName::Custom {
                    body: self.parse_argument_list(true)?,
                    limits,
                },
                limits: None,
            },
            Command::TextColor => {
                let color = self.parse_color()?;
                Node::Color {
                    color,
                    body: self.parse_argument_list(false)?,
                }
            }
            Command::Class(class) => Node::Class {
                class,
                body: self.parse_argument_list(true)?,
            },
            Command::Phantom => Node::Phantom(self.parse_argument_list(true)?),
            Command::Space(length) => Node::Spacing(length),
            Command::HSpace | Command::Kern => Node::Spacing(self.parse_length()?),
            Command::Limits(_) => return Ok(None),
            Command::BigOp(ch) => Node::Op {
                op: OpName::Symbol(ch),
                limits: None,
            },
            Command::NamedOp(name) => Node::Op {
                op: OpName::Named(name),
                limits: None,
            },
        };
        Ok(Some(node))
    }

    fn unknown_command(&mut self, tok: Token<'a>) -> Node {
        log::debug!("unknown command \\{}", tok.text);
        self.warnings.push(Warning::UnknownCommand {
            name: tok.text.to_string(),
            span: tok.span.into(),
        });
        Node::Error(format!("\\{}", tok.text))
    }

    fn deprecated(&mut self, tok: Token<'a>) {
        self.warnings.push(Warning::Deprecated {
            command: tok.text.to_string(),
            span: tok.span.into(),
        });
    }

    /// The delimiter after `\left`, `\right`, `\middle` and `\big`. `.` is the null delimiter.
    fn parse_delimiter(&mut self) -> ParseResult<Option<char>> {
        let tok = self.tokens.next()?;
        let delim = match tok.kind {
            TokenKind::Symbol if tok.text == "." => return Ok(None),
            TokenKind::Symbol => tok
                .text
                .chars()
                .next()
                .and_then(symbols::delimiter_char),
            TokenKind::Command => symbols::delimiter_command(tok.text),
            TokenKind::Eof => {
                return Err(RenderError::boxed(tok.span, RenderErrKind::UnexpectedEof));
            }
            _ => None,
        };
        match delim {
            Some(delim) => Ok(Some(delim)),
            None => Err(RenderError::boxed(
                tok.span,
                RenderErrKind::InvalidDelimiter(token_text(&tok).into()),
            )),
        }
    }

    fn parse_color(&mut self) -> ParseResult<Rgb> {
        let (tokens, span) = self.tokens.read_group()?;
        let spec = tokens_to_string(&tokens);
        Rgb::parse(&spec)
            .ok_or_else(|| RenderError::boxed(span, RenderErrKind::UnknownColor(spec.into())))
    }

    /// A length, either braced (`\hspace{1em}`) or written out (`\kern-3mu`).
    fn parse_length(&mut self) -> ParseResult<Length> {
        let first = self.tokens.peek()?;
        let (spec, span) = if matches!(first.kind, TokenKind::OpenGroup) {
            let (tokens, span) = self.tokens.read_group()?;
            (tokens_to_string(&tokens), span)
        } else {
            let mut spec = String::new();
            let mut span = Span::zero_width(first.span.start());
            loop {
                let tok = self.tokens.peek()?;
                match tok.symbol_char() {
                    Some(ch) if ch.is_ascii_digit() || matches!(ch, '+' | '-' | '.') => {
                        self.tokens.next()?;
                        spec.push(ch);
                        span = span.to(tok.span);
                    }
                    _ => break,
                }
            }
            for _ in 0..2 {
                let tok = self.tokens.peek()?;
                match tok.symbol_char() {
                    Some(ch) if ch.is_ascii_alphabetic() => {
                        self.tokens.next()?;
                        spec.push(ch);
                        span = span.to(tok.span);
                    }
                    _ => break,
                }
            }
            (spec, span)
        };
        parse_length_specification(&spec)
            .map_err(|()| RenderError::boxed(span, RenderErrKind::InvalidLength(spec.into())))
    }

    fn parse_environment(&mut self) -> ParseResult<Node> {
        let env = self.parse_environment_name()?;
        let columns = if env.needs_column_spec() {
            let (tokens, span) = self.tokens.read_group()?;
            let spec = tokens_to_string(&tokens);
            parse_column_specification(&spec).map_err(|()| {
                RenderError::boxed(span, RenderErrKind::InvalidColumnSpec(spec.into()))
            })?
        } else {
            Vec::new()
        };

        let mut rows = Vec::new();
        let mut row: Vec<Vec<Node>> = Vec::new();
        loop {
            let (mut cell, terminator) = self.parse_list_raw(ListEnd::Cell)?;
            if env == Env::Aligned && row.len() % 2 == 1 {
                // The right-hand side starts with an empty atom, so that `&=` is spaced as a
                // relation.
                cell.insert(0, Node::Group(Vec::new()));
            }
            reclassify(&mut cell);
            row.push(cell);
            if terminator.is_symbol("&") {
                continue;
            }
            rows.push(mem::take(&mut row));
            if terminator.is_command("\\") {
                continue;
            }
            // The terminator is `\end`.
            let end = self.parse_environment_name()?;
            if end != env {
                return Err(RenderError::boxed(
                    terminator.span,
                    RenderErrKind::MismatchedEnvironment {
                        expected: env,
                        got: end,
                    },
                ));
            }
            break;
        }
        // A trailing `\\` does not start a new row.
        if rows.len() > 1
            && let Some(last) = rows.last()
            && matches!(last.as_slice(), [cell] if cell.is_empty())
        {
            rows.pop();
        }
        Ok(Node::Array(Box::new(Array { env, columns, rows })))
    }

    fn parse_environment_name(&mut self) -> ParseResult<Env> {
        let (tokens, span) = self.tokens.read_group()?;
        let name = tokens_to_string(&tokens);
        let name = name.trim();
        Env::from_str(name).ok_or_else(|| {
            RenderError::boxed(span, RenderErrKind::UnknownEnvironment(name.into()))
        })
    }

    /// The argument of `\text` and friends. Whitespace is significant here.
    fn parse_text(&mut self, font: TextFont) -> ParseResult<Node> {
        let mut pieces = Vec::new();
        let mut text = String::new();
        let tok = self.tokens.next()?;
        match tok.kind {
            TokenKind::OpenGroup => {
                let mut depth = 0usize;
                loop {
                    let tok = self.tokens.next_with_whitespace()?;
                    match tok.kind {
                        TokenKind::OpenGroup => depth += 1,
                        TokenKind::CloseGroup => {
                            if depth == 0 {
                                break;
                            }
                            depth -= 1;
                        }
                        TokenKind::Eof => {
                            return Err(RenderError::boxed(
                                tok.span,
                                RenderErrKind::UnexpectedEof,
                            ));
                        }
                        _ => self.push_text(tok, font, &mut text, &mut pieces),
                    }
                }
            }
            TokenKind::Symbol | TokenKind::Command => {
                self.push_text(tok, font, &mut text, &mut pieces);
            }
            TokenKind::Eof => {
                return Err(RenderError::boxed(tok.span, RenderErrKind::UnexpectedEof));
            }
            _ => {
                return Err(RenderError::boxed(
                    tok.span,
                    RenderErrKind::ExpectedArgument(tok.text.into()),
                ));
            }
        }
        if !text.is_empty() || pieces.is_empty() {
            pieces.push(Node::Text { font, text });
        }
        if pieces.len() == 1
            && let Some(piece) = pieces.pop()
        {
            return Ok(piece);
        }
        Ok(Node::Group(pieces))
    }

    fn push_text(
        &mut self,
        tok: Token<'a>,
        font: TextFont,
        text: &mut String,
        pieces: &mut Vec<Node>,
    ) {
        match tok.kind {
            TokenKind::Whitespace => text.push(' '),
            TokenKind::Command => match tok.text {
                " " => text.push(' '),
                "{" | "}" | "$" | "%" | "&" | "#" | "_" => text.push_str(tok.text),
                "textbackslash" => text.push('\\'),
                _ => {
                    if !text.is_empty() {
                        pieces.push(Node::Text {
                            font,
                            text: mem::take(text),
                        });
                    }
                    let error = self.unknown_command(tok);
                    pieces.push(error);
                }
            },
            TokenKind::Symbol if tok.text == "~" => text.push('\u{a0}'),
            _ => text.push_str(tok.text),
        }
    }
}

#[inline]
fn is_script(tok: &Token<'_>) -> bool {
    matches!(tok.kind, TokenKind::Superscript | TokenKind::Subscript) || tok.is_symbol("'")
}

fn get_command_of(tok: &Token<'_>) -> Option<Command> {
    if matches!(tok.kind, TokenKind::Command) {
        get_command(tok.text)
    } else {
        None
    }
}

fn prime() -> Node {
    Node::Symbol(symbols::get_command("prime").unwrap_or(Symbol {
        ch: '′',
        class: AtomClass::Ord,
        font: Font::MainRegular,
    }))
}

fn double_script(tok: Token<'_>, script: Script) -> Box<RenderError> {
    RenderError::boxed(tok.span, RenderErrKind::DoubleScript(script))
}

/// The error for a token that closes a construct which is not open.
fn stray(tok: Token<'_>) -> Box<RenderError> {
    let kind = match tok.kind {
        TokenKind::Eof => RenderErrKind::UnexpectedEof,
        TokenKind::CloseGroup => RenderErrKind::UnmatchedClose(Closer::Group),
        TokenKind::Command => match tok.text {
            "right" => RenderErrKind::UnmatchedClose(Closer::Right),
            "middle" => RenderErrKind::UnmatchedClose(Closer::Middle),
            "end" => RenderErrKind::UnmatchedClose(Closer::End),
            "\\" => RenderErrKind::MisplacedAlignment(Alignment::NewLine),
            _ => RenderErrKind::ExpectedArgument(token_text(&tok).into()),
        },
        TokenKind::Symbol if tok.text == "&" => {
            RenderErrKind::MisplacedAlignment(Alignment::Ampersand)
        }
        _ => RenderErrKind::ExpectedArgument(tok.text.into()),
    };
    RenderError::boxed(tok.span, kind)
}

fn token_text(tok: &Token<'_>) -> String {
    if matches!(tok.kind, TokenKind::Command) {
        format!("\\{}", tok.text)
    } else {
        tok.text.to_string()
    }
}

fn tokens_to_string(tokens: &[Token<'_>]) -> String {
    let mut out = String::new();
    for tok in tokens {
        match tok.kind {
            TokenKind::Command => {
                out.push('\\');
                out.push_str(tok.text);
            }
            TokenKind::Whitespace => out.push(' '),
            _ => out.push_str(tok.text),
        }
    }
    out
}

/// Turn binary operators that have no left or right operand into ordinary atoms.
///
/// The contents of style, size and color switches take part in the surrounding list.
fn reclassify(nodes: &mut [Node]) {
    let mut atoms = Vec::new();
    collect_atoms(nodes, &mut atoms);
    let mut prev: Option<AtomClass> = None;
    for i in 0..atoms.len() {
        let class = atoms[i].class();
        if class == Some(AtomClass::Bin) {
            let next = atoms.get(i + 1).and_then(|node| node.class());
            let no_left = matches!(
                prev,
                None | Some(
                    AtomClass::Bin
                        | AtomClass::Op
                        | AtomClass::Rel
                        | AtomClass::Open
                        | AtomClass::Punct
                )
            );
            let no_right = matches!(
                next,
                None | Some(AtomClass::Rel | AtomClass::Close | AtomClass::Punct)
            );
            if (no_left || no_right)
                && let Some(class) = atoms[i].class_mut()
            {
                *class = AtomClass::Ord;
            }
        }
        prev = atoms[i].class();
    }
}

fn collect_atoms<'n>(nodes: &'n mut [Node], out: &mut Vec<&'n mut Node>) {
    for node in nodes {
        match node {
            Node::Style { body, .. }
            | Node::Sizing { body, .. }
            | Node::FontSwitch { body, .. }
            | Node::Color { body, .. } => {
                collect_atoms(body, out);
            }
            Node::Spacing(_) | Node::Middle(_) => {}
            _ => out.push(node),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::AccentKind;
    use crate::lexer::Lexer;

    use super::*;

    fn parse_with_warnings(input: &str) -> ParseResult<(Vec<Node>, Vec<Warning>)> {
        let tokens = MacroExpander::new(Lexer::new(input), None, 1000);
        Parser::new(tokens).parse()
    }

    fn parse(input: &str) -> Vec<Node> {
        parse_with_warnings(input).unwrap().0
    }

    fn parse_err(input: &str) -> RenderError {
        *parse_with_warnings(input).unwrap_err()
    }

    fn classes(nodes: &[Node]) -> Vec<AtomClass> {
        nodes.iter().filter_map(Node::class).collect()
    }

    #[test]
    fn symbols_and_classes() {
        let nodes = parse(r"a + \alpha = 1");
        assert_eq!(
            classes(&nodes),
            [
                AtomClass::Ord,
                AtomClass::Bin,
                AtomClass::Ord,
                AtomClass::Rel,
                AtomClass::Ord
            ]
        );
        let Node::Symbol(alpha) = &nodes[2] else {
            panic!("expected a symbol");
        };
        assert_eq!(alpha.ch, 'α');
    }

    #[test]
    fn unary_operators_become_ordinary() {
        assert_eq!(classes(&parse("-x")), [AtomClass::Ord, AtomClass::Ord]);
        assert_eq!(
            classes(&parse("a=-b")),
            [AtomClass::Ord, AtomClass::Rel, AtomClass::Ord, AtomClass::Ord]
        );
        assert_eq!(classes(&parse("a+")), [AtomClass::Ord, AtomClass::Ord]);
        assert_eq!(
            classes(&parse("(+)")),
            [AtomClass::Open, AtomClass::Ord, AtomClass::Close]
        );
    }

    #[test]
    fn switches_are_transparent_for_classes() {
        let nodes = parse(r"a \color{red} + b");
        let Node::Color { body, .. } = &nodes[1] else {
            panic!("expected a color switch");
        };
        assert_eq!(body[0].class(), Some(AtomClass::Bin));
    }

    #[test]
    fn scripts() {
        let nodes = parse("x^2_i");
        let [Node::SupSub { base, sup, sub }] = nodes.as_slice() else {
            panic!("expected one scripted atom: {nodes:?}");
        };
        assert!(matches!(**base, Node::Symbol(Symbol { ch: 'x', .. })));
        assert!(sup.is_some());
        assert!(sub.is_some());
    }

    #[test]
    fn leading_script_has_empty_base() {
        let nodes = parse("^2");
        let [Node::SupSub { base, .. }] = nodes.as_slice() else {
            panic!("expected one scripted atom");
        };
        assert_eq!(**base, Node::Group(Vec::new()));
    }

    #[test]
    fn primes() {
        let nodes = parse("f''^2");
        let [Node::SupSub { sup: Some(sup), .. }] = nodes.as_slice() else {
            panic!("expected a superscript");
        };
        let Node::Group(items) = &**sup else {
            panic!("expected a group");
        };
        assert_eq!(items.len(), 3);
        assert!(matches!(items[0], Node::Symbol(Symbol { ch: '′', .. })));

        assert!(matches!(
            parse_err("f'^2^3").1,
            RenderErrKind::DoubleScript(Script::Superscript)
        ));
    }

    #[test]
    fn double_scripts() {
        let err = parse_err("x^2^3");
        assert!(matches!(
            err.1,
            RenderErrKind::DoubleScript(Script::Superscript)
        ));
        assert_eq!(err.0, 3..4);
        assert!(matches!(
            parse_err("x_1_2").1,
            RenderErrKind::DoubleScript(Script::Subscript)
        ));
    }

    #[test]
    fn fractions_and_roots() {
        let nodes = parse(r"\frac{1}{2} \binom n k \sqrt[3]{x}");
        assert!(matches!(
            nodes[0],
            Node::Fraction {
                has_bar: true,
                left: None,
                ..
            }
        ));
        assert!(matches!(
            nodes[1],
            Node::Fraction {
                has_bar: false,
                left: Some('('),
                right: Some(')'),
                ..
            }
        ));
        assert!(matches!(nodes[2], Node::Sqrt { index: Some(_), .. }));
    }

    #[test]
    fn accents() {
        let nodes = parse(r"\hat x \overline{ab}");
        assert!(matches!(
            nodes[0],
            Node::Accent {
                kind: AccentKind::Hat,
                ..
            }
        ));
        assert!(matches!(
            nodes[1],
            Node::Accent {
                kind: AccentKind::Overline,
                ..
            }
        ));
    }

    #[test]
    fn left_middle_right() {
        let nodes = parse(r"\left( a \middle| b \right.");
        let [Node::LeftRight { left, body, right }] = nodes.as_slice() else {
            panic!("expected left/right: {nodes:?}");
        };
        assert_eq!(*left, Some('('));
        assert_eq!(*right, None);
        assert_eq!(body[1], Node::Middle(Some('∣')));

        assert!(matches!(
            parse_err(r"\left( a").1,
            RenderErrKind::MissingRight
        ));
        assert!(matches!(
            parse_err(r"a \right)").1,
            RenderErrKind::UnmatchedClose(Closer::Right)
        ));
        assert!(matches!(
            parse_err(r"\left\alpha a \right)").1,
            RenderErrKind::InvalidDelimiter(_)
        ));
        assert!(matches!(
            parse_err(r"a \middle|").1,
            RenderErrKind::UnmatchedClose(Closer::Middle)
        ));
    }

    #[test]
    fn big_delimiters() {
        let nodes = parse(r"\bigl( \Bigr\rangle");
        assert_eq!(
            nodes,
            [
                Node::DelimSized {
                    delim: Some('('),
                    size: 1,
                    class: AtomClass::Open
                },
                Node::DelimSized {
                    delim: Some('⟩'),
                    size: 2,
                    class: AtomClass::Close
                },
            ]
        );
    }

    #[test]
    fn groups() {
        assert!(matches!(
            parse_err("{a").1,
            RenderErrKind::UnexpectedEof
        ));
        assert!(matches!(
            parse_err("a}").1,
            RenderErrKind::UnmatchedClose(Closer::Group)
        ));
        assert!(matches!(
            parse_err("x^}").1,
            RenderErrKind::ExpectedArgument(_)
        ));
    }

    #[test]
    fn nesting_is_bounded() {
        let input = "{".repeat(200) + &"}".repeat(200);
        assert!(matches!(
            parse_err(&input).1,
            RenderErrKind::TooDeeplyNested { .. }
        ));
        let input = "{".repeat(50) + &"}".repeat(50);
        assert!(parse_with_warnings(&input).is_ok());
    }

    #[test]
    fn nested_arguments_are_bounded() {
        for command in [r"\sqrt", r"\hat", r"\frac1", r"\mathrm"] {
            let input = command.repeat(1000) + "x";
            assert!(
                matches!(
                    parse_err(&input).1,
                    RenderErrKind::TooDeeplyNested { .. }
                ),
                "{command}"
            );
            let input = command.repeat(20) + "x";
            assert!(parse_with_warnings(&input).is_ok(), "{command}");
        }
    }

    #[test]
    fn macros_that_nest_themselves() {
        for input in [r"\def\a{{\a}}\a", r"\def\a{\sqrt\a}\a", r"\def\a{\hat\a}\a"] {
            assert!(
                matches!(
                    parse_err(input).1,
                    RenderErrKind::MacroRecursion(ref name) if &**name == "a"
                ),
                "{input}"
            );
        }
        // Deep nesting in the input itself is not a macro's fault.
        let input = r"\R".to_string() + &"{".repeat(200);
        assert!(matches!(
            parse_err(&input).1,
            RenderErrKind::TooDeeplyNested { .. }
        ));
    }

    #[test]
    fn switches() {
        let nodes = parse(r"a {\scriptstyle b c} \rm d");
        assert_eq!(nodes.len(), 3);
        let Node::Group(group) = &nodes[1] else {
            panic!("expected a group");
        };
        assert!(matches!(
            &group[0],
            Node::Style { style: StyleKind::Script, body } if body.len() == 2
        ));
        assert!(matches!(
            &nodes[2],
            Node::FontSwitch { font: MathFont::Roman, body } if body.len() == 1
        ));
    }

    #[test]
    fn colors() {
        let nodes = parse(r"\textcolor{blue}{x} \color{#f00} y");
        assert!(matches!(&nodes[0], Node::Color { body, .. } if body.len() == 1));
        assert!(matches!(
            parse_err(r"\color{nocolor} x").1,
            RenderErrKind::UnknownColor(_)
        ));
    }

    #[test]
    fn spacing() {
        let nodes = parse(r"a\,b\kern-3mu c\hspace{1.5em}d\mkern6mu e");
        let lengths: Vec<_> = nodes
            .iter()
            .filter_map(|node| match node {
                Node::Spacing(length) => Some((length.value, length.unit)),
                _ => None,
            })
            .collect();
        assert_eq!(
            lengths,
            [
                (3.0, Unit::Mu),
                (-3.0, Unit::Mu),
                (1.5, Unit::Em),
                (6.0, Unit::Mu)
            ]
        );
        assert!(matches!(
            parse_err(r"\hspace{1furlong}").1,
            RenderErrKind::InvalidLength(_)
        ));
    }

    #[test]
    fn operators() {
        let nodes = parse(r"\sum\limits_{i=1}^n \lim_{x} \operatorname*{argmax}");
        let Node::SupSub { base, .. } = &nodes[0] else {
            panic!("expected scripts");
        };
        assert_eq!(
            **base,
            Node::Op {
                op: OpName::Symbol('∑'),
                limits: Some(true)
            }
        );
        let Node::SupSub { base, .. } = &nodes[1] else {
            panic!("expected scripts");
        };
        assert!(matches!(
            **base,
            Node::Op {
                op: OpName::Named("lim"),
                limits: None
            }
        ));
        assert!(matches!(
            &nodes[2],
            Node::Op {
                op: OpName::Custom { limits: true, .. },
                ..
            }
        ));
    }

    #[test]
    fn environments() {
        let nodes = parse(r"\begin{pmatrix} a & b \\ c & d \\ \end{pmatrix}");
        let [Node::Array(array)] = nodes.as_slice() else {
            panic!("expected an array");
        };
        assert_eq!(array.env, Env::PMatrix);
        assert_eq!(array.rows.len(), 2);
        assert!(array.rows.iter().all(|row| row.len() == 2));

        let nodes = parse(r"\begin{array}{c|l} 1 & 2 \end{array}");
        let [Node::Array(array)] = nodes.as_slice() else {
            panic!("expected an array");
        };
        assert_eq!(array.columns.len(), 3);

        let nodes = parse(r"\begin{aligned} a &= b \end{aligned}");
        let [Node::Array(array)] = nodes.as_slice() else {
            panic!("expected an array");
        };
        assert_eq!(array.rows[0][1][0], Node::Group(Vec::new()));
        assert_eq!(array.rows[0][1][1].class(), Some(AtomClass::Rel));
    }

    #[test]
    fn environment_errors() {
        assert!(matches!(
            parse_err(r"\begin{foo} a \end{foo}").1,
            RenderErrKind::UnknownEnvironment(_)
        ));
        assert!(matches!(
            parse_err(r"\begin{matrix} a \end{cases}").1,
            RenderErrKind::MismatchedEnvironment {
                expected: Env::Matrix,
                got: Env::Cases
            }
        ));
        assert!(matches!(
            parse_err(r"\begin{array}{x} a \end{array}").1,
            RenderErrKind::InvalidColumnSpec(_)
        ));
        assert!(matches!(
            parse_err("a & b").1,
            RenderErrKind::MisplacedAlignment(Alignment::Ampersand)
        ));
        assert!(matches!(
            parse_err(r"a \\ b").1,
            RenderErrKind::MisplacedAlignment(Alignment::NewLine)
        ));
        assert!(matches!(
            parse_err(r"a \end{matrix}").1,
            RenderErrKind::UnmatchedClose(Closer::End)
        ));
        assert!(matches!(
            parse_err(r"\begin{matrix} a").1,
            RenderErrKind::UnexpectedEof
        ));
    }

    #[test]
    fn text() {
        let nodes = parse(r"\text{if } x \textbf{a\{b}");
        assert_eq!(
            nodes[0],
            Node::Text {
                font: TextFont::Roman,
                text: "if ".to_string()
            }
        );
        assert_eq!(
            nodes[2],
            Node::Text {
                font: TextFont::Bold,
                text: "a{b".to_string()
            }
        );
    }

    #[test]
    fn unknown_commands() {
        let (nodes, warnings) = parse_with_warnings(r"a \foo b").unwrap();
        assert_eq!(nodes[1], Node::Error(r"\foo".to_string()));
        assert_eq!(
            warnings,
            [Warning::UnknownCommand {
                name: "foo".to_string(),
                span: 2..6
            }]
        );

        let (nodes, warnings) = parse_with_warnings(r"\text{a \bar b}").unwrap();
        assert_eq!(warnings.len(), 1);
        let Node::Group(pieces) = &nodes[0] else {
            panic!("expected text pieces");
        };
        assert_eq!(pieces.len(), 3);
    }

    #[test]
    fn macros_reach_the_parser() {
        let nodes = parse(r"\newcommand{\half}{\frac12}\half");
        assert!(matches!(nodes.as_slice(), [Node::Fraction { .. }]));
    }

    #[test]
    fn deterministic() {
        let input = r"\left[ \frac{a^2}{\sqrt b} \right] + \begin{cases} x & y \end{cases}";
        assert_eq!(parse(input), parse(input));
    }
}
