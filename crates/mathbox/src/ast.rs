//! The syntax tree produced by the parser.

use box_renderer::atom::AtomClass;
use box_renderer::color::Rgb;

use crate::environments::Env;
use crate::specifications::{ColumnSpec, Length};
use crate::symbols::Symbol;

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Symbol(Symbol),
    /// A braced group, or the argument of a command. It is an ordinary atom.
    Group(Vec<Node>),
    SupSub {
        base: Box<Node>,
        sup: Option<Box<Node>>,
        sub: Option<Box<Node>>,
    },
    Fraction {
        numer: Box<Node>,
        denom: Box<Node>,
        has_bar: bool,
        left: Option<char>,
        right: Option<char>,
        style: Option<StyleKind>,
    },
    Sqrt {
        radicand: Box<Node>,
        index: Option<Box<Node>>,
    },
    Accent {
        kind: AccentKind,
        base: Box<Node>,
    },
    /// `\displaystyle` and friends. The body is the rest of the enclosing list.
    Style {
        style: StyleKind,
        body: Vec<Node>,
    },
    /// `\tiny` to `\Huge`, as a size index from 1 to 11.
    Sizing {
        size: u8,
        body: Vec<Node>,
    },
    Array(Box<Array>),
    Spacing(Length),
    Op {
        op: OpName,
        /// `Some` if `\limits` or `\nolimits` was given.
        limits: Option<bool>,
    },
    LeftRight {
        left: Option<char>,
        body: Vec<Node>,
        right: Option<char>,
    },
    /// A `\middle` delimiter inside of a `LeftRight` body.
    Middle(Option<char>),
    /// `\big` and friends, with a size from 1 to 4.
    DelimSized {
        delim: Option<char>,
        size: u8,
        class: AtomClass,
    },
    /// `\mathrm{...}` and friends.
    Font {
        font: MathFont,
        body: Vec<Node>,
    },
    /// `\rm` and friends. The body is the rest of the enclosing list.
    FontSwitch {
        font: MathFont,
        body: Vec<Node>,
    },
    Color {
        color: Rgb,
        body: Vec<Node>,
    },
    Text {
        font: TextFont,
        text: String,
    },
    /// `\mathbin{...}` and friends.
    Class {
        class: AtomClass,
        body: Vec<Node>,
    },
    Phantom(Vec<Node>),
    /// An unknown command, rendered as its name in the error color.
    Error(String),
}

impl Node {
    /// The spacing class of the atom.
    ///
    /// `None` for nodes that take no part in inter-atom spacing, and for the style, size, font
    /// and color switches, whose contents are spaced as part of the surrounding list.
    pub fn class(&self) -> Option<AtomClass> {
        match self {
            Node::Symbol(symbol) => Some(symbol.class),
            Node::SupSub { base, .. } => Some(base.class().unwrap_or(AtomClass::Ord)),
            Node::Op { .. } => Some(AtomClass::Op),
            Node::LeftRight { .. } => Some(AtomClass::Inner),
            Node::Array(array) => Some(if array.env.delimiters() == (None, None) {
                AtomClass::Ord
            } else {
                AtomClass::Inner
            }),
            Node::DelimSized { class, .. } | Node::Class { class, .. } => Some(*class),
            Node::Group(_)
            | Node::Fraction { .. }
            | Node::Sqrt { .. }
            | Node::Accent { .. }
            | Node::Font { .. }
            | Node::Text { .. }
            | Node::Phantom(_)
            | Node::Error(_) => Some(AtomClass::Ord),
            Node::Style { .. }
            | Node::Sizing { .. }
            | Node::FontSwitch { .. }
            | Node::Color { .. }
            | Node::Spacing(_)
            | Node::Middle(_) => None,
        }
    }

    /// The spacing class, if it can change.
    pub(crate) fn class_mut(&mut self) -> Option<&mut AtomClass> {
        match self {
            Node::Symbol(symbol) => Some(&mut symbol.class),
            Node::SupSub { base, .. } => base.class_mut(),
            Node::DelimSized { class, .. } | Node::Class { class, .. } => Some(class),
            _ => None,
        }
    }

    /// Whether this is a single character, for the purposes of script placement.
    pub(crate) fn is_character_box(&self) -> bool {
        match self {
            Node::Symbol(_) => true,
            Node::Group(body) | Node::Font { body, .. } | Node::Color { body, .. } => {
                matches!(body.as_slice(), [node] if node.is_character_box())
            }
            _ => false,
        }
    }
}

/// The contents of an `array`-like environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Array {
    pub env: Env,
    /// Explicit column specification; empty for environments that have none.
    pub columns: Vec<ColumnSpec>,
    /// Rows of cells; every cell is a list of nodes.
    pub rows: Vec<Vec<Vec<Node>>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OpName {
    /// A large operator symbol like `∑`.
    Symbol(char),
    /// A named operator like `\sin`.
    Named(&'static str),
    /// `\operatorname{...}`; `limits` is set for the starred form.
    Custom { body: Vec<Node>, limits: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleKind {
    Display,
    Text,
    Script,
    ScriptScript,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathFont {
    /// `\mathrm`
    Roman,
    /// `\mathit`
    Italic,
    /// `\mathbf`
    Bold,
    /// `\mathbb`
    Blackboard,
    /// `\mathcal`
    Calligraphic,
    /// `\boldsymbol`
    BoldSymbol,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFont {
    Roman,
    Bold,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccentKind {
    Hat,
    Check,
    Tilde,
    Acute,
    Grave,
    Dot,
    Ddot,
    Breve,
    Bar,
    Vec,
    Mathring,
    WideHat,
    WideTilde,
    Overline,
    Underline,
}

impl AccentKind {
    /// The accent glyph. Over- and underlines are drawn as rules.
    pub fn char(self) -> Option<char> {
        match self {
            AccentKind::Hat | AccentKind::WideHat => Some('ˆ'),
            AccentKind::Check => Some('ˇ'),
            AccentKind::Tilde | AccentKind::WideTilde => Some('˜'),
            AccentKind::Acute => Some('ˊ'),
            AccentKind::Grave => Some('ˋ'),
            AccentKind::Dot => Some('˙'),
            AccentKind::Ddot => Some('¨'),
            AccentKind::Breve => Some('˘'),
            AccentKind::Bar => Some('ˉ'),
            AccentKind::Vec => Some('\u{20D7}'),
            AccentKind::Mathring => Some('˚'),
            AccentKind::Overline | AccentKind::Underline => None,
        }
    }

    #[inline]
    pub fn is_wide(self) -> bool {
        matches!(self, AccentKind::WideHat | AccentKind::WideTilde)
    }
}

#[cfg(test)]
mod tests {
    use box_renderer::font::Font;

    use super::*;

    fn sym(ch: char, class: AtomClass) -> Node {
        Node::Symbol(Symbol {
            ch,
            class,
            font: Font::MainRegular,
        })
    }

    #[test]
    fn scripts_take_the_class_of_the_base() {
        let mut node = Node::SupSub {
            base: Box::new(sym('+', AtomClass::Bin)),
            sup: Some(Box::new(sym('2', AtomClass::Ord))),
            sub: None,
        };
        assert_eq!(node.class(), Some(AtomClass::Bin));
        *node.class_mut().unwrap() = AtomClass::Ord;
        assert_eq!(node.class(), Some(AtomClass::Ord));
    }

    #[test]
    fn switches_have_no_class() {
        let node = Node::Style {
            style: StyleKind::Script,
            body: vec![sym('x', AtomClass::Ord)],
        };
        assert_eq!(node.class(), None);
        assert_eq!(Node::Group(Vec::new()).class(), Some(AtomClass::Ord));
    }

    #[test]
    fn character_boxes() {
        assert!(sym('x', AtomClass::Ord).is_character_box());
        assert!(Node::Group(vec![sym('x', AtomClass::Ord)]).is_character_box());
        assert!(!Node::Group(Vec::new()).is_character_box());
    }
}
