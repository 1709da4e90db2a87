use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::lexer::Lexer;
use crate::macros::{MacroDefinition, parse_body};
use crate::token::TokenKind;

/// The predefined macros: name, number of parameters and replacement text.
static TEMPLATES: [(&str, u8, &str); 44] = [
    // Alternative names of symbols.
    ("le", 0, r"\leq"),
    ("ge", 0, r"\geq"),
    ("ne", 0, r"\neq"),
    ("to", 0, r"\rightarrow"),
    ("gets", 0, r"\leftarrow"),
    ("land", 0, r"\wedge"),
    ("lor", 0, r"\vee"),
    ("lnot", 0, r"\neg"),
    ("owns", 0, r"\ni"),
    ("dots", 0, r"\ldots"),
    ("dotsc", 0, r"\ldots"),
    ("dotsb", 0, r"\cdots"),
    ("dotsm", 0, r"\cdots"),
    // Delimiters.
    ("lbrace", 0, r"\{"),
    ("rbrace", 0, r"\}"),
    ("lbrack", 0, "["),
    ("rbrack", 0, "]"),
    ("lvert", 0, r"\vert"),
    ("rvert", 0, r"\vert"),
    ("lVert", 0, r"\Vert"),
    ("rVert", 0, r"\Vert"),
    ("lt", 0, "<"),
    ("gt", 0, ">"),
    // Logic.
    ("iff", 0, r"\;\Longleftrightarrow\;"),
    ("implies", 0, r"\;\Longrightarrow\;"),
    ("impliedby", 0, r"\;\Longleftarrow\;"),
    ("And", 0, r"\;\mathrel{\&}\;"),
    // Number sets.
    ("R", 0, r"\mathbb{R}"),
    ("N", 0, r"\mathbb{N}"),
    ("Z", 0, r"\mathbb{Z}"),
    ("Q", 0, r"\mathbb{Q}"),
    ("C", 0, r"\mathbb{C}"),
    ("Bbb", 1, r"\mathbb{#1}"),
    ("bold", 1, r"\mathbf{#1}"),
    // Modular arithmetic.
    ("bmod", 0, r"\mathbin{\mathrm{mod}}"),
    ("pmod", 1, r"\quad(\mathrm{mod}\mkern6mu #1)"),
    ("pod", 1, r"\quad(#1)"),
    // Operators.
    ("sgn", 0, r"\operatorname{sgn}"),
    ("argmax", 0, r"\operatorname*{arg\,max}"),
    ("argmin", 0, r"\operatorname*{arg\,min}"),
    ("idotsint", 0, r"\int\cdots\int"),
    // Physics notation.
    ("bra", 1, r"\langle #1\vert"),
    ("ket", 1, r"\vert #1\rangle"),
    ("odv", 2, r"\frac{\mathrm{d}#1}{\mathrm{d}#2}"),
];

/// The predefined macros, lexed on first use.
pub(crate) static BUILTIN_MACROS: LazyLock<FxHashMap<&'static str, MacroDefinition<'static>>> =
    LazyLock::new(|| {
        let mut map = FxHashMap::with_capacity_and_hasher(TEMPLATES.len(), Default::default());
        for (name, arity, template) in TEMPLATES {
            let tokens: Vec<_> = Lexer::new(template)
                .filter(|tok| !matches!(tok.kind, TokenKind::Eof))
                .collect();
            // The templates are fixed, so this only fails if a template above is malformed.
            if let Ok(definition) = parse_body(&tokens, Some(arity)) {
                map.insert(name, definition);
            }
        }
        map
    });
