use box_renderer::atom::AtomClass;

use crate::ast::{AccentKind, MathFont, StyleKind, TextFont};
use crate::specifications::{Length, Unit};
use crate::symbols;

/// A control sequence with its own parsing rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Command {
    Frac {
        has_bar: bool,
        delims: Option<(char, char)>,
        style: Option<StyleKind>,
    },
    Sqrt,
    Accent(AccentKind),
    Left,
    Middle,
    Right,
    Big(u8, AtomClass),
    Begin,
    End,
    Style(StyleKind),
    Sizing(u8),
    /// `\mathrm{...}` and friends.
    Font(MathFont),
    /// `\rm` and friends; they apply to the rest of the list.
    OldFont(MathFont),
    Text(TextFont),
    OperatorName { limits: bool },
    /// `\color{c}`, applies to the rest of the list.
    Color,
    TextColor,
    Class(AtomClass),
    Phantom,
    Space(Length),
    HSpace,
    /// `\kern`, `\mkern`, `\mskip` and `\hskip`.
    Kern,
    Limits(bool),
    BigOp(char),
    NamedOp(&'static str),
    NewLine,
}

const fn mu(value: f64) -> Command {
    Command::Space(Length {
        value,
        unit: Unit::Mu,
    })
}

const fn em(value: f64) -> Command {
    Command::Space(Length {
        value,
        unit: Unit::Em,
    })
}

const fn frac(has_bar: bool, delims: Option<(char, char)>, style: Option<StyleKind>) -> Command {
    Command::Frac {
        has_bar,
        delims,
        style,
    }
}

static COMMANDS: phf::Map<&'static str, Command> = phf::phf_map! {
    // Fractions
    "frac" => frac(true, None, None),
    "dfrac" => frac(true, None, Some(StyleKind::Display)),
    "tfrac" => frac(true, None, Some(StyleKind::Text)),
    "binom" => frac(false, Some(('(', ')')), None),
    "dbinom" => frac(false, Some(('(', ')')), Some(StyleKind::Display)),
    "tbinom" => frac(false, Some(('(', ')')), Some(StyleKind::Text)),
    "sqrt" => Command::Sqrt,
    // Accents
    "hat" => Command::Accent(AccentKind::Hat),
    "check" => Command::Accent(AccentKind::Check),
    "tilde" => Command::Accent(AccentKind::Tilde),
    "acute" => Command::Accent(AccentKind::Acute),
    "grave" => Command::Accent(AccentKind::Grave),
    "dot" => Command::Accent(AccentKind::Dot),
    "ddot" => Command::Accent(AccentKind::Ddot),
    "breve" => Command::Accent(AccentKind::Breve),
    "bar" => Command::Accent(AccentKind::Bar),
    "vec" => Command::Accent(AccentKind::Vec),
    "mathring" => Command::Accent(AccentKind::Mathring),
    "widehat" => Command::Accent(AccentKind::WideHat),
    "widetilde" => Command::Accent(AccentKind::WideTilde),
    "overline" => Command::Accent(AccentKind::Overline),
    "underline" => Command::Accent(AccentKind::Underline),
    // Delimiters
    "left" => Command::Left,
    "middle" => Command::Middle,
    "right" => Command::Right,
    "big" => Command::Big(1, AtomClass::Ord),
    "Big" => Command::Big(2, AtomClass::Ord),
    "bigg" => Command::Big(3, AtomClass::Ord),
    "Bigg" => Command::Big(4, AtomClass::Ord),
    "bigl" => Command::Big(1, AtomClass::Open),
    "Bigl" => Command::Big(2, AtomClass::Open),
    "biggl" => Command::Big(3, AtomClass::Open),
    "Biggl" => Command::Big(4, AtomClass::Open),
    "bigm" => Command::Big(1, AtomClass::Rel),
    "Bigm" => Command::Big(2, AtomClass::Rel),
    "biggm" => Command::Big(3, AtomClass::Rel),
    "Biggm" => Command::Big(4, AtomClass::Rel),
    "bigr" => Command::Big(1, AtomClass::Close),
    "Bigr" => Command::Big(2, AtomClass::Close),
    "biggr" => Command::Big(3, AtomClass::Close),
    "Biggr" => Command::Big(4, AtomClass::Close),
    // Environments
    "begin" => Command::Begin,
    "end" => Command::End,
    "\\" => Command::NewLine,
    // Styles and sizes
    "displaystyle" => Command::Style(StyleKind::Display),
    "textstyle" => Command::Style(StyleKind::Text),
    "scriptstyle" => Command::Style(StyleKind::Script),
    "scriptscriptstyle" => Command::Style(StyleKind::ScriptScript),
    "tiny" => Command::Sizing(1),
    "sixptsize" => Command::Sizing(2),
    "scriptsize" => Command::Sizing(3),
    "footnotesize" => Command::Sizing(4),
    "small" => Command::Sizing(5),
    "normalsize" => Command::Sizing(6),
    "large" => Command::Sizing(7),
    "Large" => Command::Sizing(8),
    "LARGE" => Command::Sizing(9),
    "huge" => Command::Sizing(10),
    "Huge" => Command::Sizing(11),
    // Fonts
    "mathrm" => Command::Font(MathFont::Roman),
    "mathit" => Command::Font(MathFont::Italic),
    "mathbf" => Command::Font(MathFont::Bold),
    "mathbb" => Command::Font(MathFont::Blackboard),
    "mathcal" => Command::Font(MathFont::Calligraphic),
    "boldsymbol" => Command::Font(MathFont::BoldSymbol),
    "rm" => Command::OldFont(MathFont::Roman),
    "it" => Command::OldFont(MathFont::Italic),
    "bf" => Command::OldFont(MathFont::Bold),
    "cal" => Command::OldFont(MathFont::Calligraphic),
    "text" => Command::Text(TextFont::Roman),
    "textrm" => Command::Text(TextFont::Roman),
    "textbf" => Command::Text(TextFont::Bold),
    "textit" => Command::Text(TextFont::Italic),
    "mbox" => Command::Text(TextFont::Roman),
    "operatorname" => Command::OperatorName { limits: false },
    "operatorname*" => Command::OperatorName { limits: true },
    // Colors, classes and phantoms
    "color" => Command::Color,
    "textcolor" => Command::TextColor,
    "mathord" => Command::Class(AtomClass::Ord),
    "mathop" => Command::Class(AtomClass::Op),
    "mathbin" => Command::Class(AtomClass::Bin),
    "mathrel" => Command::Class(AtomClass::Rel),
    "mathopen" => Command::Class(AtomClass::Open),
    "mathclose" => Command::Class(AtomClass::Close),
    "mathpunct" => Command::Class(AtomClass::Punct),
    "mathinner" => Command::Class(AtomClass::Inner),
    "phantom" => Command::Phantom,
    // Spacing
    "," => mu(3.0),
    "thinspace" => mu(3.0),
    ":" => mu(4.0),
    ">" => mu(4.0),
    "medspace" => mu(4.0),
    ";" => mu(5.0),
    "thickspace" => mu(5.0),
    "!" => mu(-3.0),
    "negthinspace" => mu(-3.0),
    "negmedspace" => mu(-4.0),
    "negthickspace" => mu(-5.0),
    " " => em(0.25),
    "quad" => em(1.0),
    "qquad" => em(2.0),
    "enspace" => em(0.5),
    "hspace" => Command::HSpace,
    "kern" => Command::Kern,
    "mkern" => Command::Kern,
    "mskip" => Command::Kern,
    "hskip" => Command::Kern,
    // Operators
    "limits" => Command::Limits(true),
    "nolimits" => Command::Limits(false),
    "sum" => Command::BigOp('∑'),
    "prod" => Command::BigOp('∏'),
    "coprod" => Command::BigOp('∐'),
    "int" => Command::BigOp('∫'),
    "iint" => Command::BigOp('∬'),
    "iiint" => Command::BigOp('∭'),
    "oint" => Command::BigOp('∮'),
    "bigcup" => Command::BigOp('⋃'),
    "bigcap" => Command::BigOp('⋂'),
    "bigvee" => Command::BigOp('⋁'),
    "bigwedge" => Command::BigOp('⋀'),
    "bigoplus" => Command::BigOp('⨁'),
    "bigotimes" => Command::BigOp('⨂'),
    "bigodot" => Command::BigOp('⨀'),
    "biguplus" => Command::BigOp('⨄'),
    "bigsqcup" => Command::BigOp('⨆'),
    "arccos" => Command::NamedOp("arccos"),
    "arcsin" => Command::NamedOp("arcsin"),
    "arctan" => Command::NamedOp("arctan"),
    "arg" => Command::NamedOp("arg"),
    "cos" => Command::NamedOp("cos"),
    "cosh" => Command::NamedOp("cosh"),
    "cot" => Command::NamedOp("cot"),
    "coth" => Command::NamedOp("coth"),
    "csc" => Command::NamedOp("csc"),
    "deg" => Command::NamedOp("deg"),
    "det" => Command::NamedOp("det"),
    "dim" => Command::NamedOp("dim"),
    "exp" => Command::NamedOp("exp"),
    "gcd" => Command::NamedOp("gcd"),
    "hom" => Command::NamedOp("hom"),
    "inf" => Command::NamedOp("inf"),
    "ker" => Command::NamedOp("ker"),
    "lg" => Command::NamedOp("lg"),
    "lim" => Command::NamedOp("lim"),
    "liminf" => Command::NamedOp("liminf"),
    "limsup" => Command::NamedOp("limsup"),
    "ln" => Command::NamedOp("ln"),
    "log" => Command::NamedOp("log"),
    "max" => Command::NamedOp("max"),
    "min" => Command::NamedOp("min"),
    "Pr" => Command::NamedOp("Pr"),
    "sec" => Command::NamedOp("sec"),
    "sin" => Command::NamedOp("sin"),
    "sinh" => Command::NamedOp("sinh"),
    "sup" => Command::NamedOp("sup"),
    "tan" => Command::NamedOp("tan"),
    "tanh" => Command::NamedOp("tanh"),
};

#[inline]
pub(crate) fn get_command(name: &str) -> Option<Command> {
    COMMANDS.get(name).copied()
}

/// Whether `name` is a command that the parser knows, as opposed to a macro.
pub(crate) fn is_primitive(name: &str) -> bool {
    COMMANDS.contains_key(name)
        || symbols::get_command(name).is_some()
        || matches!(name, "newcommand" | "renewcommand" | "providecommand" | "def")
}

/// Named operators that take limits in display style.
pub(crate) fn named_op_has_limits(name: &str) -> bool {
    matches!(
        name,
        "lim" | "max" | "min" | "sup" | "inf" | "det" | "Pr" | "gcd" | "liminf" | "limsup"
    )
}

/// Integral signs put their scripts to the side even in display style.
pub(crate) fn is_integral(ch: char) -> bool {
    matches!(ch, '∫' | '∬' | '∭' | '∮')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup() {
        assert_eq!(get_command("sqrt"), Some(Command::Sqrt));
        assert_eq!(
            get_command("operatorname*"),
            Some(Command::OperatorName { limits: true })
        );
        assert!(get_command("alpha").is_none());
        assert!(is_primitive("alpha"));
        assert!(is_primitive("frac"));
        assert!(!is_primitive("foo"));
    }

    #[test]
    fn spaces() {
        let Some(Command::Space(len)) = get_command(",") else {
            panic!("not a space");
        };
        assert_eq!(len.value, 3.0);
        assert_eq!(len.unit, Unit::Mu);
    }

    #[test]
    fn operators() {
        assert!(named_op_has_limits("lim"));
        assert!(!named_op_has_limits("sin"));
        assert!(is_integral('∫'));
        assert!(!is_integral('∑'));
    }
}
