//! The mapping from input characters and symbol commands to glyphs.

use box_renderer::atom::AtomClass;
use box_renderer::font::Font;

/// A character of the math fonts together with its spacing class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub ch: char,
    pub class: AtomClass,
    pub font: Font,
}

const fn sym(ch: char, class: AtomClass, font: Font) -> Symbol {
    Symbol { ch, class, font }
}

/// A variable: math italic ordinary symbol.
const fn mi(ch: char) -> Symbol {
    sym(ch, AtomClass::Ord, Font::MathItalic)
}

const fn ord(ch: char) -> Symbol {
    sym(ch, AtomClass::Ord, Font::MainRegular)
}

const fn bin(ch: char) -> Symbol {
    sym(ch, AtomClass::Bin, Font::MainRegular)
}

const fn rel(ch: char) -> Symbol {
    sym(ch, AtomClass::Rel, Font::MainRegular)
}

const fn open(ch: char) -> Symbol {
    sym(ch, AtomClass::Open, Font::MainRegular)
}

const fn close(ch: char) -> Symbol {
    sym(ch, AtomClass::Close, Font::MainRegular)
}

const fn punct(ch: char) -> Symbol {
    sym(ch, AtomClass::Punct, Font::MainRegular)
}

const fn inner(ch: char) -> Symbol {
    sym(ch, AtomClass::Inner, Font::MainRegular)
}

pub(crate) static SYMBOL_COMMANDS: phf::Map<&'static str, Symbol> = phf::phf_map! {
    // Greek letters
    "alpha" => mi('α'),
    "beta" => mi('β'),
    "gamma" => mi('γ'),
    "delta" => mi('δ'),
    "epsilon" => mi('ϵ'),
    "varepsilon" => mi('ε'),
    "zeta" => mi('ζ'),
    "eta" => mi('η'),
    "theta" => mi('θ'),
    "vartheta" => mi('ϑ'),
    "iota" => mi('ι'),
    "kappa" => mi('κ'),
    "lambda" => mi('λ'),
    "mu" => mi('μ'),
    "nu" => mi('ν'),
    "xi" => mi('ξ'),
    "omicron" => mi('ο'),
    "pi" => mi('π'),
    "varpi" => mi('ϖ'),
    "rho" => mi('ρ'),
    "varrho" => mi('ϱ'),
    "sigma" => mi('σ'),
    "varsigma" => mi('ς'),
    "tau" => mi('τ'),
    "upsilon" => mi('υ'),
    "phi" => mi('ϕ'),
    "varphi" => mi('φ'),
    "chi" => mi('χ'),
    "psi" => mi('ψ'),
    "omega" => mi('ω'),
    "Gamma" => ord('Γ'),
    "Delta" => ord('Δ'),
    "Theta" => ord('Θ'),
    "Lambda" => ord('Λ'),
    "Xi" => ord('Ξ'),
    "Pi" => ord('Π'),
    "Sigma" => ord('Σ'),
    "Upsilon" => ord('Υ'),
    "Phi" => ord('Φ'),
    "Psi" => ord('Ψ'),
    "Omega" => ord('Ω'),
    // Binary operators
    "pm" => bin('±'),
    "mp" => bin('∓'),
    "times" => bin('×'),
    "div" => bin('÷'),
    "cdot" => bin('⋅'),
    "ast" => bin('∗'),
    "star" => bin('⋆'),
    "circ" => bin('∘'),
    "bullet" => bin('∙'),
    "oplus" => bin('⊕'),
    "ominus" => bin('⊖'),
    "otimes" => bin('⊗'),
    "oslash" => bin('⊘'),
    "odot" => bin('⊙'),
    "cup" => bin('∪'),
    "cap" => bin('∩'),
    "uplus" => bin('⊎'),
    "sqcup" => bin('⊔'),
    "sqcap" => bin('⊓'),
    "vee" => bin('∨'),
    "wedge" => bin('∧'),
    "setminus" => bin('∖'),
    "wr" => bin('≀'),
    "diamond" => bin('⋄'),
    "bigcirc" => bin('◯'),
    "bigtriangleup" => bin('△'),
    "bigtriangledown" => bin('▽'),
    "triangleleft" => bin('◃'),
    "triangleright" => bin('▹'),
    "dagger" => bin('†'),
    "ddagger" => bin('‡'),
    // Relations
    "leq" => rel('≤'),
    "geq" => rel('≥'),
    "neq" => rel('≠'),
    "equiv" => rel('≡'),
    "approx" => rel('≈'),
    "sim" => rel('∼'),
    "simeq" => rel('≃'),
    "cong" => rel('≅'),
    "propto" => rel('∝'),
    "subset" => rel('⊂'),
    "supset" => rel('⊃'),
    "subseteq" => rel('⊆'),
    "supseteq" => rel('⊇'),
    "sqsubseteq" => rel('⊑'),
    "sqsupseteq" => rel('⊒'),
    "in" => rel('∈'),
    "ni" => rel('∋'),
    "perp" => rel('⊥'),
    "mid" => rel('∣'),
    "parallel" => rel('∥'),
    "ll" => rel('≪'),
    "gg" => rel('≫'),
    "prec" => rel('≺'),
    "succ" => rel('≻'),
    "asymp" => rel('≍'),
    "doteq" => rel('≐'),
    "models" => rel('⊨'),
    "vdash" => rel('⊢'),
    "dashv" => rel('⊣'),
    "smile" => rel('⌣'),
    "frown" => rel('⌢'),
    "bowtie" => rel('⋈'),
    // Arrows
    "leftarrow" => rel('←'),
    "rightarrow" => rel('→'),
    "leftrightarrow" => rel('↔'),
    "uparrow" => rel('↑'),
    "downarrow" => rel('↓'),
    "updownarrow" => rel('↕'),
    "Leftarrow" => rel('⇐'),
    "Rightarrow" => rel('⇒'),
    "Leftrightarrow" => rel('⇔'),
    "Uparrow" => rel('⇑'),
    "Downarrow" => rel('⇓'),
    "Updownarrow" => rel('⇕'),
    "longleftarrow" => rel('⟵'),
    "longrightarrow" => rel('⟶'),
    "longleftrightarrow" => rel('⟷'),
    "Longleftarrow" => rel('⟸'),
    "Longrightarrow" => rel('⟹'),
    "Longleftrightarrow" => rel('⟺'),
    "mapsto" => rel('↦'),
    "longmapsto" => rel('⟼'),
    // Delimiters
    "langle" => open('⟨'),
    "rangle" => close('⟩'),
    "lceil" => open('⌈'),
    "rceil" => close('⌉'),
    "lfloor" => open('⌊'),
    "rfloor" => close('⌋'),
    "{" => open('{'),
    "}" => close('}'),
    "vert" => ord('∣'),
    "Vert" => ord('∥'),
    "|" => ord('∥'),
    "backslash" => ord('\\'),
    // Miscellaneous symbols
    "infty" => ord('∞'),
    "partial" => ord('∂'),
    "nabla" => ord('∇'),
    "forall" => ord('∀'),
    "exists" => ord('∃'),
    "emptyset" => ord('∅'),
    "varnothing" => ord('∅'),
    "neg" => ord('¬'),
    "prime" => ord('′'),
    "hbar" => ord('ℏ'),
    "ell" => ord('ℓ'),
    "wp" => ord('℘'),
    "Re" => ord('ℜ'),
    "Im" => ord('ℑ'),
    "aleph" => ord('ℵ'),
    "imath" => ord('ı'),
    "jmath" => ord('ȷ'),
    "top" => ord('⊤'),
    "bot" => ord('⊥'),
    "angle" => ord('∠'),
    "triangle" => ord('△'),
    "surd" => ord('√'),
    "flat" => ord('♭'),
    "natural" => ord('♮'),
    "sharp" => ord('♯'),
    "clubsuit" => ord('♣'),
    "diamondsuit" => ord('♢'),
    "heartsuit" => ord('♡'),
    "spadesuit" => ord('♠'),
    "vdots" => ord('⋮'),
    "$" => ord('$'),
    "%" => ord('%'),
    "&" => ord('&'),
    "#" => ord('#'),
    "_" => ord('_'),
    "ldots" => inner('…'),
    "cdots" => inner('⋯'),
    "ddots" => inner('⋱'),
    "colon" => punct(':'),
};

pub(crate) static SYMBOL_CHARS: phf::Map<char, Symbol> = phf::phf_map! {
    'a' => mi('a'),
    'b' => mi('b'),
    'c' => mi('c'),
    'd' => mi('d'),
    'e' => mi('e'),
    'f' => mi('f'),
    'g' => mi('g'),
    'h' => mi('h'),
    'i' => mi('i'),
    'j' => mi('j'),
    'k' => mi('k'),
    'l' => mi('l'),
    'm' => mi('m'),
    'n' => mi('n'),
    'o' => mi('o'),
    'p' => mi('p'),
    'q' => mi('q'),
    'r' => mi('r'),
    's' => mi('s'),
    't' => mi('t'),
    'u' => mi('u'),
    'v' => mi('v'),
    'w' => mi('w'),
    'x' => mi('x'),
    'y' => mi('y'),
    'z' => mi('z'),
    'A' => mi('A'),
    'B' => mi('B'),
    'C' => mi('C'),
    'D' => mi('D'),
    'E' => mi('E'),
    'F' => mi('F'),
    'G' => mi('G'),
    'H' => mi('H'),
    'I' => mi('I'),
    'J' => mi('J'),
    'K' => mi('K'),
    'L' => mi('L'),
    'M' => mi('M'),
    'N' => mi('N'),
    'O' => mi('O'),
    'P' => mi('P'),
    'Q' => mi('Q'),
    'R' => mi('R'),
    'S' => mi('S'),
    'T' => mi('T'),
    'U' => mi('U'),
    'V' => mi('V'),
    'W' => mi('W'),
    'X' => mi('X'),
    'Y' => mi('Y'),
    'Z' => mi('Z'),
    '0' => ord('0'),
    '1' => ord('1'),
    '2' => ord('2'),
    '3' => ord('3'),
    '4' => ord('4'),
    '5' => ord('5'),
    '6' => ord('6'),
    '7' => ord('7'),
    '8' => ord('8'),
    '9' => ord('9'),
    '.' => ord('.'),
    '/' => ord('/'),
    '@' => ord('@'),
    '"' => ord('"'),
    '$' => ord('$'),
    '|' => ord('∣'),
    '+' => bin('+'),
    '-' => bin('−'),
    '*' => bin('∗'),
    '=' => rel('='),
    '<' => rel('<'),
    '>' => rel('>'),
    ':' => rel(':'),
    '(' => open('('),
    '[' => open('['),
    ')' => close(')'),
    ']' => close(']'),
    '!' => close('!'),
    '?' => close('?'),
    ',' => punct(','),
    ';' => punct(';'),
    'α' => mi('α'),
    'β' => mi('β'),
    'γ' => mi('γ'),
    'δ' => mi('δ'),
    'ϵ' => mi('ϵ'),
    'ε' => mi('ε'),
    'ζ' => mi('ζ'),
    'η' => mi('η'),
    'θ' => mi('θ'),
    'ϑ' => mi('ϑ'),
    'ι' => mi('ι'),
    'κ' => mi('κ'),
    'λ' => mi('λ'),
    'μ' => mi('μ'),
    'ν' => mi('ν'),
    'ξ' => mi('ξ'),
    'ο' => mi('ο'),
    'π' => mi('π'),
    'ϖ' => mi('ϖ'),
    'ρ' => mi('ρ'),
    'ϱ' => mi('ϱ'),
    'σ' => mi('σ'),
    'ς' => mi('ς'),
    'τ' => mi('τ'),
    'υ' => mi('υ'),
    'ϕ' => mi('ϕ'),
    'φ' => mi('φ'),
    'χ' => mi('χ'),
    'ψ' => mi('ψ'),
    'ω' => mi('ω'),
    'Γ' => ord('Γ'),
    'Δ' => ord('Δ'),
    'Θ' => ord('Θ'),
    'Λ' => ord('Λ'),
    'Ξ' => ord('Ξ'),
    'Π' => ord('Π'),
    'Σ' => ord('Σ'),
    'Υ' => ord('Υ'),
    'Φ' => ord('Φ'),
    'Ψ' => ord('Ψ'),
    'Ω' => ord('Ω'),
    '±' => bin('±'),
    '∓' => bin('∓'),
    '×' => bin('×'),
    '÷' => bin('÷'),
    '⋅' => bin('⋅'),
    '∗' => bin('∗'),
    '⋆' => bin('⋆'),
    '∘' => bin('∘'),
    '∙' => bin('∙'),
    '⊕' => bin('⊕'),
    '⊖' => bin('⊖'),
    '⊗' => bin('⊗'),
    '⊘' => bin('⊘'),
    '⊙' => bin('⊙'),
    '∪' => bin('∪'),
    '∩' => bin('∩'),
    '⊎' => bin('⊎'),
    '⊔' => bin('⊔'),
    '⊓' => bin('⊓'),
    '∨' => bin('∨'),
    '∧' => bin('∧'),
    '∖' => bin('∖'),
    '≀' => bin('≀'),
    '⋄' => bin('⋄'),
    '◯' => bin('◯'),
    '△' => bin('△'),
    '▽' => bin('▽'),
    '◃' => bin('◃'),
    '▹' => bin('▹'),
    '†' => bin('†'),
    '‡' => bin('‡'),
    '≤' => rel('≤'),
    '≥' => rel('≥'),
    '≠' => rel('≠'),
    '≡' => rel('≡'),
    '≈' => rel('≈'),
    '∼' => rel('∼'),
    '≃' => rel('≃'),
    '≅' => rel('≅'),
    '∝' => rel('∝'),
    '⊂' => rel('⊂'),
    '⊃' => rel('⊃'),
    '⊆' => rel('⊆'),
    '⊇' => rel('⊇'),
    '⊑' => rel('⊑'),
    '⊒' => rel('⊒'),
    '∈' => rel('∈'),
    '∋' => rel('∋'),
    '⊥' => rel('⊥'),
    '∣' => ord('∣'),
    '∥' => ord('∥'),
    '≪' => rel('≪'),
    '≫' => rel('≫'),
    '≺' => rel('≺'),
    '≻' => rel('≻'),
    '≍' => rel('≍'),
    '≐' => rel('≐'),
    '⊨' => rel('⊨'),
    '⊢' => rel('⊢'),
    '⊣' => rel('⊣'),
    '⌣' => rel('⌣'),
    '⌢' => rel('⌢'),
    '⋈' => rel('⋈'),
    '←' => rel('←'),
    '→' => rel('→'),
    '↔' => rel('↔'),
    '↑' => rel('↑'),
    '↓' => rel('↓'),
    '↕' => rel('↕'),
    '⇐' => rel('⇐'),
    '⇒' => rel('⇒'),
    '⇔' => rel('⇔'),
    '⇑' => rel('⇑'),
    '⇓' => rel('⇓'),
    '⇕' => rel('⇕'),
    '⟵' => rel('⟵'),
    '⟶' => rel('⟶'),
    '⟷' => rel('⟷'),
    '⟸' => rel('⟸'),
    '⟹' => rel('⟹'),
    '⟺' => rel('⟺'),
    '↦' => rel('↦'),
    '⟼' => rel('⟼'),
    '⟨' => open('⟨'),
    '⟩' => close('⟩'),
    '⌈' => open('⌈'),
    '⌉' => close('⌉'),
    '⌊' => open('⌊'),
    '⌋' => close('⌋'),
    '∞' => ord('∞'),
    '∂' => ord('∂'),
    '∇' => ord('∇'),
    '∀' => ord('∀'),
    '∃' => ord('∃'),
    '∅' => ord('∅'),
    '¬' => ord('¬'),
    '′' => ord('′'),
    'ℏ' => ord('ℏ'),
    'ℓ' => ord('ℓ'),
    '℘' => ord('℘'),
    'ℜ' => ord('ℜ'),
    'ℑ' => ord('ℑ'),
    'ℵ' => ord('ℵ'),
    'ı' => ord('ı'),
    'ȷ' => ord('ȷ'),
    '⊤' => ord('⊤'),
    '∠' => ord('∠'),
    '√' => ord('√'),
    '♭' => ord('♭'),
    '♮' => ord('♮'),
    '♯' => ord('♯'),
    '♣' => ord('♣'),
    '♢' => ord('♢'),
    '♡' => ord('♡'),
    '♠' => ord('♠'),
    '⋮' => ord('⋮'),
    '…' => inner('…'),
    '⋯' => inner('⋯'),
    '⋱' => inner('⋱'),
};

/// Delimiters that are given as control sequences, e.g. `\left\langle`.
static DELIMITER_COMMANDS: phf::Map<&'static str, char> = phf::phf_map! {
    "{" => '{',
    "}" => '}',
    "|" => '∥',
    "vert" => '∣',
    "Vert" => '∥',
    "langle" => '⟨',
    "rangle" => '⟩',
    "lceil" => '⌈',
    "rceil" => '⌉',
    "lfloor" => '⌊',
    "rfloor" => '⌋',
    "uparrow" => '↑',
    "downarrow" => '↓',
    "updownarrow" => '↕',
    "Uparrow" => '⇑',
    "Downarrow" => '⇓',
    "Updownarrow" => '⇕',
    "backslash" => '\\',
    "surd" => '√',
};

#[inline]
pub(crate) fn get_command(name: &str) -> Option<Symbol> {
    SYMBOL_COMMANDS.get(name).copied()
}

#[inline]
pub(crate) fn get_char(ch: char) -> Option<Symbol> {
    SYMBOL_CHARS.get(&ch).copied()
}

/// The delimiter named by a control sequence.
pub(crate) fn delimiter_command(name: &str) -> Option<char> {
    DELIMITER_COMMANDS.get(name).copied()
}

/// The delimiter given as a plain character.
///
/// `|` and `<`, `>` are mapped to the glyphs that are actually used as delimiters.
pub(crate) fn delimiter_char(ch: char) -> Option<char> {
    match ch {
        '|' => Some('∣'),
        '<' => Some('⟨'),
        '>' => Some('⟩'),
        '‖' => Some('∥'),
        '(' | ')' | '[' | ']' | '/' | '∣' | '∥' | '⟨' | '⟩' | '⌈' | '⌉' | '⌊' | '⌋' | '↑'
        | '↓' | '↕' | '⇑' | '⇓' | '⇕' => Some(ch),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use box_renderer::metrics::char_metrics;

    use super::*;

    #[test]
    fn every_symbol_has_metrics() {
        for (name, symbol) in SYMBOL_COMMANDS.entries() {
            assert!(
                char_metrics(symbol.font, symbol.ch).is_some(),
                "\\{name} ({:?})",
                symbol.ch
            );
        }
        for (ch, symbol) in SYMBOL_CHARS.entries() {
            assert!(
                char_metrics(symbol.font, symbol.ch).is_some(),
                "{ch:?} ({:?})",
                symbol.ch
            );
        }
    }

    #[test]
    fn classes() {
        assert_eq!(get_char('x'), Some(mi('x')));
        assert_eq!(get_char('-').unwrap().ch, '−');
        assert_eq!(get_char('-').unwrap().class, AtomClass::Bin);
        assert_eq!(get_char('(').unwrap().class, AtomClass::Open);
        assert_eq!(get_command("leq").unwrap().class, AtomClass::Rel);
        assert_eq!(get_command("Gamma").unwrap().font, Font::MainRegular);
        assert_eq!(get_command("gamma").unwrap().font, Font::MathItalic);
        assert_eq!(get_char('α'), get_command("alpha"));
    }

    #[test]
    fn delimiters() {
        assert_eq!(delimiter_char('<'), Some('⟨'));
        assert_eq!(delimiter_char('x'), None);
        assert_eq!(delimiter_command("{"), Some('{'));
        assert_eq!(delimiter_command("alpha"), None);
    }
}
