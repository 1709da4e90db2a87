//! Glyph metrics of the shipped fonts.
//!
//! Each entry is `[depth, height, italic correction, skew, width]` in em of the face's design
//! size. The numbers are the Computer Modern values as distributed with the KaTeX fonts and
//! must not be re-derived.

/// Upright text and operator face.
pub(crate) static MAIN_REGULAR: phf::Map<char, [f64; 5]> = phf::phf_map! {
    '\u{20}' => [0.0, 0.0, 0.0, 0.0, 0.25],
    '!' => [0.0, 0.69444, 0.0, 0.0, 0.27778],
    '"' => [0.0, 0.69444, 0.0, 0.0, 0.5],
    '#' => [0.19444, 0.69444, 0.0, 0.0, 0.83334],
    '$' => [0.05556, 0.75, 0.0, 0.0, 0.5],
    '%' => [0.05556, 0.75, 0.0, 0.0, 0.83334],
    '&' => [0.0, 0.69444, 0.0, 0.0, 0.77778],
    '\'' => [0.0, 0.69444, 0.0, 0.0, 0.27778],
    '(' => [0.25, 0.75, 0.0, 0.0, 0.38889],
    ')' => [0.25, 0.75, 0.0, 0.0, 0.38889],
    '*' => [0.0, 0.75, 0.0, 0.0, 0.5],
    '+' => [0.08333, 0.58333, 0.0, 0.0, 0.77778],
    ',' => [0.19444, 0.10556, 0.0, 0.0, 0.27778],
    '-' => [0.0, 0.43056, 0.0, 0.0, 0.33333],
    '.' => [0.0, 0.10556, 0.0, 0.0, 0.27778],
    '/' => [0.25, 0.75, 0.0, 0.0, 0.5],
    '0' => [0.0, 0.64444, 0.0, 0.0, 0.5],
    '1' => [0.0, 0.64444, 0.0, 0.0, 0.5],
    '2' => [0.0, 0.64444, 0.0, 0.0, 0.5],
    '3' => [0.0, 0.64444, 0.0, 0.0, 0.5],
    '4' => [0.0, 0.64444, 0.0, 0.0, 0.5],
    '5' => [0.0, 0.64444, 0.0, 0.0, 0.5],
    '6' => [0.0, 0.64444, 0.0, 0.0, 0.5],
    '7' => [0.0, 0.64444, 0.0, 0.0, 0.5],
    '8' => [0.0, 0.64444, 0.0, 0.0, 0.5],
    '9' => [0.0, 0.64444, 0.0, 0.0, 0.5],
    ':' => [0.0, 0.43056, 0.0, 0.0, 0.27778],
    ';' => [0.19444, 0.43056, 0.0, 0.0, 0.27778],
    '<' => [0.0391, 0.5391, 0.0, 0.0, 0.77778],
    '=' => [-0.13313, 0.36687, 0.0, 0.0, 0.77778],
    '>' => [0.0391, 0.5391, 0.0, 0.0, 0.77778],
    '?' => [0.0, 0.69444, 0.0, 0.0, 0.47222],
    '@' => [0.0, 0.69444, 0.0, 0.0, 0.77778],
    'A' => [0.0, 0.68333, 0.0, 0.0, 0.75],
    'B' => [0.0, 0.68333, 0.0, 0.0, 0.70834],
    'C' => [0.0, 0.68333, 0.0, 0.0, 0.72222],
    'D' => [0.0, 0.68333, 0.0, 0.0, 0.76389],
    'E' => [0.0, 0.68333, 0.0, 0.0, 0.68056],
    'F' => [0.0, 0.68333, 0.0, 0.0, 0.65278],
    'G' => [0.0, 0.68333, 0.0, 0.0, 0.78472],
    'H' => [0.0, 0.68333, 0.0, 0.0, 0.75],
    'I' => [0.0, 0.68333, 0.0, 0.0, 0.36111],
    'J' => [0.0, 0.68333, 0.0, 0.0, 0.51389],
    'K' => [0.0, 0.68333, 0.0, 0.0, 0.77778],
    'L' => [0.0, 0.68333, 0.0, 0.0, 0.625],
    'M' => [0.0, 0.68333, 0.0, 0.0, 0.91667],
    'N' => [0.0, 0.68333, 0.0, 0.0, 0.75],
    'O' => [0.0, 0.68333, 0.0, 0.0, 0.77778],
    'P' => [0.0, 0.68333, 0.0, 0.0, 0.68056],
    'Q' => [0.19444, 0.68333, 0.0, 0.0, 0.77778],
    'R' => [0.0, 0.68333, 0.0, 0.0, 0.73611],
    'S' => [0.0, 0.68333, 0.0, 0.0, 0.55556],
    'T' => [0.0, 0.68333, 0.0, 0.0, 0.72222],
    'U' => [0.0, 0.68333, 0.0, 0.0, 0.75],
    'V' => [0.0, 0.68333, 0.01389, 0.0, 0.75],
    'W' => [0.0, 0.68333, 0.01389, 0.0, 1.02778],
    'X' => [0.0, 0.68333, 0.0, 0.0, 0.75],
    'Y' => [0.0, 0.68333, 0.025, 0.0, 0.75],
    'Z' => [0.0, 0.68333, 0.0, 0.0, 0.61111],
    '[' => [0.25, 0.75, 0.0, 0.0, 0.27778],
    '\\' => [0.25, 0.75, 0.0, 0.0, 0.5],
    ']' => [0.25, 0.75, 0.0, 0.0, 0.27778],
    '^' => [0.0, 0.69444, 0.0, 0.0, 0.5],
    '_' => [0.31, 0.12056, 0.02778, 0.0, 0.5],
    '`' => [0.0, 0.69444, 0.0, 0.0, 0.5],
    'a' => [0.0, 0.43056, 0.0, 0.0, 0.5],
    'b' => [0.0, 0.69444, 0.0, 0.0, 0.55556],
    'c' => [0.0, 0.43056, 0.0, 0.0, 0.44445],
    'd' => [0.0, 0.69444, 0.0, 0.0, 0.55556],
    'e' => [0.0, 0.43056, 0.0, 0.0, 0.44445],
    'f' => [0.0, 0.69444, 0.07778, 0.0, 0.30556],
    'g' => [0.19444, 0.43056, 0.01389, 0.0, 0.5],
    'h' => [0.0, 0.69444, 0.0, 0.0, 0.55556],
    'i' => [0.0, 0.66786, 0.0, 0.0, 0.27778],
    'j' => [0.19444, 0.66786, 0.0, 0.0, 0.30556],
    'k' => [0.0, 0.69444, 0.0, 0.0, 0.52778],
    'l' => [0.0, 0.69444, 0.0, 0.0, 0.27778],
    'm' => [0.0, 0.43056, 0.0, 0.0, 0.83334],
    'n' => [0.0, 0.43056, 0.0, 0.0, 0.55556],
    'o' => [0.0, 0.43056, 0.0, 0.0, 0.5],
    'p' => [0.19444, 0.43056, 0.0, 0.0, 0.55556],
    'q' => [0.19444, 0.43056, 0.0, 0.0, 0.52778],
    'r' => [0.0, 0.43056, 0.0, 0.0, 0.39167],
    's' => [0.0, 0.43056, 0.0, 0.0, 0.39445],
    't' => [0.0, 0.61508, 0.0, 0.0, 0.38889],
    'u' => [0.0, 0.43056, 0.0, 0.0, 0.55556],
    'v' => [0.0, 0.43056, 0.01389, 0.0, 0.52778],
    'w' => [0.0, 0.43056, 0.01389, 0.0, 0.72222],
    'x' => [0.0, 0.43056, 0.0, 0.0, 0.52778],
    'y' => [0.19444, 0.43056, 0.01389, 0.0, 0.52778],
    'z' => [0.0, 0.43056, 0.0, 0.0, 0.44445],
    '{' => [0.25, 0.75, 0.0, 0.0, 0.5],
    '|' => [0.25, 0.75, 0.0, 0.0, 0.27778],
    '}' => [0.25, 0.75, 0.0, 0.0, 0.5],
    '~' => [0.35, 0.31786, 0.0, 0.0, 0.5],
    '\u{A0}' => [0.0, 0.0, 0.0, 0.0, 0.25],
    '¨' => [0.0, 0.66786, 0.0, 0.0, 0.5],
    '¬' => [0.0, 0.43056, 0.0, 0.0, 0.66667],
    '¯' => [0.0, 0.56778, 0.0, 0.0, 0.5],
    '°' => [0.0, 0.69444, 0.0, 0.0, 0.75],
    '±' => [0.08333, 0.58333, 0.0, 0.0, 0.77778],
    '´' => [0.0, 0.69444, 0.0, 0.0, 0.5],
    '×' => [0.08333, 0.58333, 0.0, 0.0, 0.77778],
    '÷' => [0.08333, 0.58333, 0.0, 0.0, 0.77778],
    'ı' => [0.0, 0.43056, 0.0, 0.0, 0.27778],
    'ȷ' => [0.19444, 0.43056, 0.0, 0.0, 0.30556],
    'ˆ' => [0.0, 0.69444, 0.0, 0.0, 0.5],
    'ˇ' => [0.0, 0.62847, 0.0, 0.0, 0.5],
    'ˉ' => [0.0, 0.56778, 0.0, 0.0, 0.5],
    'ˊ' => [0.0, 0.69444, 0.0, 0.0, 0.5],
    'ˋ' => [0.0, 0.69444, 0.0, 0.0, 0.5],
    '˘' => [0.0, 0.69444, 0.0, 0.0, 0.5],
    '˙' => [0.0, 0.66786, 0.0, 0.0, 0.27778],
    '˚' => [0.0, 0.69444, 0.0, 0.0, 0.75],
    '˜' => [0.0, 0.66786, 0.0, 0.0, 0.5],
    'Γ' => [0.0, 0.68333, 0.0, 0.0, 0.625],
    'Δ' => [0.0, 0.68333, 0.0, 0.0, 0.83334],
    'Θ' => [0.0, 0.68333, 0.0, 0.0, 0.77778],
    'Λ' => [0.0, 0.68333, 0.0, 0.0, 0.69445],
    'Ξ' => [0.0, 0.68333, 0.0, 0.0, 0.66667],
    'Π' => [0.0, 0.68333, 0.0, 0.0, 0.75],
    'Σ' => [0.0, 0.68333, 0.0, 0.0, 0.72222],
    'Υ' => [0.0, 0.68333, 0.0, 0.0, 0.77778],
    'Φ' => [0.0, 0.68333, 0.0, 0.0, 0.72222],
    'Ψ' => [0.0, 0.68333, 0.0, 0.0, 0.77778],
    'Ω' => [0.0, 0.68333, 0.0, 0.0, 0.72222],
    '–' => [0.0, 0.43056, 0.02778, 0.0, 0.5],
    '—' => [0.0, 0.43056, 0.02778, 0.0, 1.0],
    '‖' => [0.25, 0.75, 0.0, 0.0, 0.5],
    '‘' => [0.0, 0.69444, 0.0, 0.0, 0.27778],
    '’' => [0.0, 0.69444, 0.0, 0.0, 0.27778],
    '“' => [0.0, 0.69444, 0.0, 0.0, 0.5],
    '”' => [0.0, 0.69444, 0.0, 0.0, 0.5],
    '†' => [0.19444, 0.69444, 0.0, 0.0, 0.44445],
    '‡' => [0.19444, 0.69444, 0.0, 0.0, 0.44445],
    '…' => [0.0, 0.12, 0.0, 0.0, 1.172],
    '′' => [0.0, 0.55556, 0.0, 0.0, 0.275],
    '\u{20D7}' => [0.0, 0.71444, 0.15382, 0.0, 0.5],
    'ℏ' => [0.0, 0.68889, 0.0, 0.0, 0.54028],
    'ℑ' => [0.0, 0.69444, 0.0, 0.0, 0.72222],
    'ℓ' => [0.0, 0.69444, 0.0, 0.11111, 0.41667],
    '℘' => [0.19444, 0.43056, 0.0, 0.11111, 0.63646],
    'ℜ' => [0.0, 0.69444, 0.0, 0.0, 0.72222],
    'ℵ' => [0.0, 0.69444, 0.0, 0.0, 0.61111],
    '←' => [-0.13313, 0.36687, 0.0, 0.0, 1.0],
    '↑' => [0.19444, 0.69444, 0.0, 0.0, 0.5],
    '→' => [-0.13313, 0.36687, 0.0, 0.0, 1.0],
    '↓' => [0.19444, 0.69444, 0.0, 0.0, 0.5],
    '↔' => [-0.13313, 0.36687, 0.0, 0.0, 1.0],
    '↕' => [0.25, 0.75, 0.0, 0.0, 0.5],
    '↦' => [0.011, 0.511, 0.0, 0.0, 1.0],
    '⇐' => [-0.13313, 0.36687, 0.0, 0.0, 1.0],
    '⇑' => [0.19444, 0.69444, 0.0, 0.0, 0.61111],
    '⇒' => [-0.13313, 0.36687, 0.0, 0.0, 1.0],
    '⇓' => [0.19444, 0.69444, 0.0, 0.0, 0.61111],
    '⇔' => [-0.13313, 0.36687, 0.0, 0.0, 1.0],
    '⇕' => [0.25, 0.75, 0.0, 0.0, 0.61111],
    '∀' => [0.0, 0.69444, 0.0, 0.0, 0.55556],
    '∂' => [0.0, 0.69444, 0.05556, 0.08334, 0.5309],
    '∃' => [0.0, 0.69444, 0.0, 0.0, 0.55556],
    '∅' => [0.05556, 0.75, 0.0, 0.0, 0.5],
    '∇' => [0.0, 0.68333, 0.0, 0.0, 0.83334],
    '∈' => [0.0391, 0.5391, 0.0, 0.0, 0.66667],
    '∋' => [0.0391, 0.5391, 0.0, 0.0, 0.66667],
    '−' => [0.08333, 0.58333, 0.0, 0.0, 0.77778],
    '∓' => [0.08333, 0.58333, 0.0, 0.0, 0.77778],
    '∕' => [0.25, 0.75, 0.0, 0.0, 0.5],
    '∖' => [0.25, 0.75, 0.0, 0.0, 0.5],
    '∗' => [-0.03472, 0.46528, 0.0, 0.0, 0.5],
    '∘' => [-0.05555, 0.44445, 0.0, 0.0, 0.5],
    '∙' => [-0.05555, 0.44445, 0.0, 0.0, 0.5],
    '√' => [0.2, 0.8, 0.0, 0.0, 0.83334],
    '∝' => [0.0, 0.43056, 0.0, 0.0, 0.77778],
    '∞' => [0.0, 0.43056, 0.0, 0.0, 1.0],
    '∠' => [0.0, 0.69224, 0.0, 0.0, 0.72222],
    '∣' => [0.25, 0.75, 0.0, 0.0, 0.27778],
    '∥' => [0.25, 0.75, 0.0, 0.0, 0.5],
    '∧' => [0.0, 0.55556, 0.0, 0.0, 0.66667],
    '∨' => [0.0, 0.55556, 0.0, 0.0, 0.66667],
    '∩' => [0.0, 0.55556, 0.0, 0.0, 0.66667],
    '∪' => [0.0, 0.55556, 0.0, 0.0, 0.66667],
    '∫' => [0.19444, 0.69444, 0.11111, 0.0, 0.41667],
    '∼' => [-0.13313, 0.36687, 0.0, 0.0, 0.77778],
    '≀' => [0.19444, 0.69444, 0.0, 0.0, 0.27778],
    '≃' => [-0.03625, 0.46375, 0.0, 0.0, 0.77778],
    '≅' => [-0.022, 0.589, 0.0, 0.0, 0.77778],
    '≈' => [-0.01688, 0.48312, 0.0, 0.0, 0.77778],
    '≍' => [-0.03625, 0.46375, 0.0, 0.0, 0.77778],
    '≐' => [-0.133, 0.67, 0.0, 0.0, 0.778],
    '≠' => [0.215, 0.716, 0.0, 0.0, 0.778],
    '≡' => [-0.03625, 0.46375, 0.0, 0.0, 0.77778],
    '≤' => [0.13597, 0.63597, 0.0, 0.0, 0.77778],
    '≥' => [0.13597, 0.63597, 0.0, 0.0, 0.77778],
    '≪' => [0.0391, 0.5391, 0.0, 0.0, 1.0],
    '≫' => [0.0391, 0.5391, 0.0, 0.0, 1.0],
    '≺' => [0.0391, 0.5391, 0.0, 0.0, 0.77778],
    '≻' => [0.0391, 0.5391, 0.0, 0.0, 0.77778],
    '⊂' => [0.0391, 0.5391, 0.0, 0.0, 0.77778],
    '⊃' => [0.0391, 0.5391, 0.0, 0.0, 0.77778],
    '⊆' => [0.13597, 0.63597, 0.0, 0.0, 0.77778],
    '⊇' => [0.13597, 0.63597, 0.0, 0.0, 0.77778],
    '⊎' => [0.0, 0.55556, 0.0, 0.0, 0.66667],
    '⊑' => [0.13597, 0.63597, 0.0, 0.0, 0.77778],
    '⊒' => [0.13597, 0.63597, 0.0, 0.0, 0.77778],
    '⊓' => [0.0, 0.55556, 0.0, 0.0, 0.66667],
    '⊔' => [0.0, 0.55556, 0.0, 0.0, 0.66667],
    '⊕' => [0.08333, 0.58333, 0.0, 0.0, 0.77778],
    '⊖' => [0.08333, 0.58333, 0.0, 0.0, 0.77778],
    '⊗' => [0.08333, 0.58333, 0.0, 0.0, 0.77778],
    '⊘' => [0.08333, 0.58333, 0.0, 0.0, 0.77778],
    '⊙' => [0.08333, 0.58333, 0.0, 0.0, 0.77778],
    '⊢' => [0.0, 0.69444, 0.0, 0.0, 0.61111],
    '⊣' => [0.0, 0.69444, 0.0, 0.0, 0.61111],
    '⊤' => [0.0, 0.69444, 0.0, 0.0, 0.77778],
    '⊥' => [0.0, 0.69444, 0.0, 0.0, 0.77778],
    '⊨' => [0.249, 0.75, 0.0, 0.0, 0.867],
    '⋄' => [-0.05555, 0.44445, 0.0, 0.0, 0.5],
    '⋅' => [-0.05555, 0.44445, 0.0, 0.0, 0.27778],
    '⋆' => [-0.03472, 0.46528, 0.0, 0.0, 0.5],
    '⋈' => [0.005, 0.505, 0.0, 0.0, 0.9],
    '⋮' => [0.03, 0.9, 0.0, 0.0, 0.278],
    '⋯' => [-0.19, 0.31, 0.0, 0.0, 1.172],
    '⋱' => [-0.1, 0.82, 0.0, 0.0, 1.282],
    '⌈' => [0.25, 0.75, 0.0, 0.0, 0.44445],
    '⌉' => [0.25, 0.75, 0.0, 0.0, 0.44445],
    '⌊' => [0.25, 0.75, 0.0, 0.0, 0.44445],
    '⌋' => [0.25, 0.75, 0.0, 0.0, 0.44445],
    '⌢' => [-0.14236, 0.35764, 0.0, 0.0, 1.0],
    '⌣' => [-0.14236, 0.35764, 0.0, 0.0, 1.0],
    '△' => [0.19444, 0.69444, 0.0, 0.0, 0.88889],
    '▹' => [-0.03472, 0.46528, 0.0, 0.0, 0.5],
    '▽' => [0.19444, 0.69444, 0.0, 0.0, 0.88889],
    '◃' => [-0.03472, 0.46528, 0.0, 0.0, 0.5],
    '◯' => [0.19444, 0.69444, 0.0, 0.0, 1.0],
    '♠' => [0.12963, 0.69444, 0.0, 0.0, 0.77778],
    '♡' => [0.12963, 0.69444, 0.0, 0.0, 0.77778],
    '♢' => [0.12963, 0.69444, 0.0, 0.0, 0.77778],
    '♣' => [0.12963, 0.69444, 0.0, 0.0, 0.77778],
    '♭' => [0.0, 0.75, 0.0, 0.0, 0.38889],
    '♮' => [0.19444, 0.69444, 0.0, 0.0, 0.38889],
    '♯' => [0.19444, 0.69444, 0.0, 0.0, 0.38889],
    '⟨' => [0.25, 0.75, 0.0, 0.0, 0.38889],
    '⟩' => [0.25, 0.75, 0.0, 0.0, 0.38889],
    '⟵' => [0.011, 0.511, 0.0, 0.0, 1.609],
    '⟶' => [0.011, 0.511, 0.0, 0.0, 1.638],
    '⟷' => [0.011, 0.511, 0.0, 0.0, 1.859],
    '⟸' => [0.024, 0.525, 0.0, 0.0, 1.609],
    '⟹' => [0.024, 0.525, 0.0, 0.0, 1.638],
    '⟺' => [0.024, 0.525, 0.0, 0.0, 1.858],
    '⟼' => [0.011, 0.511, 0.0, 0.0, 1.638],
};

/// Bold upright face.
pub(crate) static MAIN_BOLD: phf::Map<char, [f64; 5]> = phf::phf_map! {
    '(' => [0.25, 0.75, 0.0, 0.0, 0.44722],
    ')' => [0.25, 0.75, 0.0, 0.0, 0.44722],
    '+' => [0.13333, 0.63333, 0.0, 0.0, 0.89444],
    ',' => [0.19444, 0.15556, 0.0, 0.0, 0.31944],
    '-' => [0.0, 0.44444, 0.0, 0.0, 0.38333],
    '.' => [0.0, 0.15556, 0.0, 0.0, 0.31944],
    '0' => [0.0, 0.64444, 0.0, 0.0, 0.575],
    '1' => [0.0, 0.64444, 0.0, 0.0, 0.575],
    '2' => [0.0, 0.64444, 0.0, 0.0, 0.575],
    '3' => [0.0, 0.64444, 0.0, 0.0, 0.575],
    '4' => [0.0, 0.64444, 0.0, 0.0, 0.575],
    '5' => [0.0, 0.64444, 0.0, 0.0, 0.575],
    '6' => [0.0, 0.64444, 0.0, 0.0, 0.575],
    '7' => [0.0, 0.64444, 0.0, 0.0, 0.575],
    '8' => [0.0, 0.64444, 0.0, 0.0, 0.575],
    '9' => [0.0, 0.64444, 0.0, 0.0, 0.575],
    '=' => [-0.10889, 0.39111, 0.0, 0.0, 0.89444],
    'A' => [0.0, 0.68611, 0.0, 0.0, 0.86944],
    'B' => [0.0, 0.68611, 0.0, 0.0, 0.81805],
    'C' => [0.0, 0.68611, 0.0, 0.0, 0.83055],
    'D' => [0.0, 0.68611, 0.0, 0.0, 0.88194],
    'E' => [0.0, 0.68611, 0.0, 0.0, 0.75555],
    'F' => [0.0, 0.68611, 0.0, 0.0, 0.72361],
    'G' => [0.0, 0.68611, 0.0, 0.0, 0.90416],
    'H' => [0.0, 0.68611, 0.0, 0.0, 0.9],
    'I' => [0.0, 0.68611, 0.0, 0.0, 0.43611],
    'J' => [0.0, 0.68611, 0.0, 0.0, 0.59444],
    'K' => [0.0, 0.68611, 0.0, 0.0, 0.90138],
    'L' => [0.0, 0.68611, 0.0, 0.0, 0.69166],
    'M' => [0.0, 0.68611, 0.0, 0.0, 1.09166],
    'N' => [0.0, 0.68611, 0.0, 0.0, 0.9],
    'O' => [0.0, 0.68611, 0.0, 0.0, 0.86388],
    'P' => [0.0, 0.68611, 0.0, 0.0, 0.78611],
    'Q' => [0.19444, 0.68611, 0.0, 0.0, 0.86388],
    'R' => [0.0, 0.68611, 0.0, 0.0, 0.8625],
    'S' => [0.0, 0.68611, 0.0, 0.0, 0.63889],
    'T' => [0.0, 0.68611, 0.0, 0.0, 0.8],
    'U' => [0.0, 0.68611, 0.0, 0.0, 0.88472],
    'V' => [0.0, 0.68611, 0.01597, 0.0, 0.86944],
    'W' => [0.0, 0.68611, 0.01597, 0.0, 1.18888],
    'X' => [0.0, 0.68611, 0.0, 0.0, 0.86944],
    'Y' => [0.0, 0.68611, 0.02875, 0.0, 0.86944],
    'Z' => [0.0, 0.68611, 0.0, 0.0, 0.70277],
    'a' => [0.0, 0.44444, 0.0, 0.0, 0.55902],
    'b' => [0.0, 0.69444, 0.0, 0.0, 0.63889],
    'c' => [0.0, 0.44444, 0.0, 0.0, 0.51111],
    'd' => [0.0, 0.69444, 0.0, 0.0, 0.63889],
    'e' => [0.0, 0.44444, 0.0, 0.0, 0.52708],
    'f' => [0.0, 0.69444, 0.10903, 0.0, 0.38333],
    'g' => [0.19444, 0.44444, 0.01597, 0.0, 0.575],
    'h' => [0.0, 0.69444, 0.0, 0.0, 0.63889],
    'i' => [0.0, 0.69444, 0.0, 0.0, 0.31944],
    'j' => [0.19444, 0.69444, 0.0, 0.0, 0.35139],
    'k' => [0.0, 0.69444, 0.0, 0.0, 0.60694],
    'l' => [0.0, 0.69444, 0.0, 0.0, 0.31944],
    'm' => [0.0, 0.44444, 0.0, 0.0, 0.95833],
    'n' => [0.0, 0.44444, 0.0, 0.0, 0.63889],
    'o' => [0.0, 0.44444, 0.0, 0.0, 0.575],
    'p' => [0.19444, 0.44444, 0.0, 0.0, 0.63889],
    'q' => [0.19444, 0.44444, 0.0, 0.0, 0.60694],
    'r' => [0.0, 0.44444, 0.0, 0.0, 0.47361],
    's' => [0.0, 0.44444, 0.0, 0.0, 0.45361],
    't' => [0.0, 0.63492, 0.0, 0.0, 0.44722],
    'u' => [0.0, 0.44444, 0.0, 0.0, 0.63889],
    'v' => [0.0, 0.44444, 0.01597, 0.0, 0.60694],
    'w' => [0.0, 0.44444, 0.01597, 0.0, 0.83055],
    'x' => [0.0, 0.44444, 0.0, 0.0, 0.60694],
    'y' => [0.19444, 0.44444, 0.01597, 0.0, 0.60694],
    'z' => [0.0, 0.44444, 0.0, 0.0, 0.51111],
};

/// Math italic letters.
pub(crate) static MATH_ITALIC: phf::Map<char, [f64; 5]> = phf::phf_map! {
    'A' => [0.0, 0.68333, 0.0, 0.13889, 0.75],
    'B' => [0.0, 0.68333, 0.05017, 0.08334, 0.75851],
    'C' => [0.0, 0.68333, 0.07153, 0.08334, 0.71472],
    'D' => [0.0, 0.68333, 0.02778, 0.05556, 0.82792],
    'E' => [0.0, 0.68333, 0.05764, 0.08334, 0.7382],
    'F' => [0.0, 0.68333, 0.13889, 0.08334, 0.64306],
    'G' => [0.0, 0.68333, 0.0, 0.08334, 0.78625],
    'H' => [0.0, 0.68333, 0.08125, 0.05556, 0.83125],
    'I' => [0.0, 0.68333, 0.07847, 0.11111, 0.43958],
    'J' => [0.0, 0.68333, 0.09618, 0.16667, 0.55451],
    'K' => [0.0, 0.68333, 0.07153, 0.05556, 0.84931],
    'L' => [0.0, 0.68333, 0.0, 0.02778, 0.68056],
    'M' => [0.0, 0.68333, 0.10903, 0.08334, 0.97014],
    'N' => [0.0, 0.68333, 0.10903, 0.08334, 0.80347],
    'O' => [0.0, 0.68333, 0.02778, 0.08334, 0.76278],
    'P' => [0.0, 0.68333, 0.13889, 0.08334, 0.64201],
    'Q' => [0.19444, 0.68333, 0.0, 0.08334, 0.79056],
    'R' => [0.0, 0.68333, 0.00773, 0.08334, 0.75929],
    'S' => [0.0, 0.68333, 0.05764, 0.08334, 0.6132],
    'T' => [0.0, 0.68333, 0.13889, 0.08334, 0.58438],
    'U' => [0.0, 0.68333, 0.10903, 0.02778, 0.68278],
    'V' => [0.0, 0.68333, 0.22222, 0.0, 0.58333],
    'W' => [0.0, 0.68333, 0.13889, 0.0, 0.94445],
    'X' => [0.0, 0.68333, 0.07847, 0.08334, 0.82847],
    'Y' => [0.0, 0.68333, 0.22222, 0.0, 0.58056],
    'Z' => [0.0, 0.68333, 0.07153, 0.08334, 0.68264],
    'a' => [0.0, 0.43056, 0.0, 0.0, 0.52859],
    'b' => [0.0, 0.69444, 0.0, 0.0, 0.42917],
    'c' => [0.0, 0.43056, 0.0, 0.05556, 0.43276],
    'd' => [0.0, 0.69444, 0.0, 0.16667, 0.52049],
    'e' => [0.0, 0.43056, 0.0, 0.05556, 0.46563],
    'f' => [0.19444, 0.69444, 0.10764, 0.16667, 0.48959],
    'g' => [0.19444, 0.43056, 0.03588, 0.02778, 0.47697],
    'h' => [0.0, 0.69444, 0.0, 0.0, 0.57616],
    'i' => [0.0, 0.65952, 0.0, 0.0, 0.34451],
    'j' => [0.19444, 0.65952, 0.05724, 0.0, 0.41181],
    'k' => [0.0, 0.69444, 0.03148, 0.0, 0.5206],
    'l' => [0.0, 0.69444, 0.01968, 0.08334, 0.29838],
    'm' => [0.0, 0.43056, 0.0, 0.0, 0.87801],
    'n' => [0.0, 0.43056, 0.0, 0.0, 0.60023],
    'o' => [0.0, 0.43056, 0.0, 0.05556, 0.48472],
    'p' => [0.19444, 0.43056, 0.0, 0.08334, 0.50313],
    'q' => [0.19444, 0.43056, 0.03588, 0.08334, 0.44641],
    'r' => [0.0, 0.43056, 0.02778, 0.05556, 0.45116],
    's' => [0.0, 0.43056, 0.0, 0.05556, 0.46875],
    't' => [0.0, 0.61508, 0.0, 0.08334, 0.36111],
    'u' => [0.0, 0.43056, 0.0, 0.02778, 0.57246],
    'v' => [0.0, 0.43056, 0.03588, 0.02778, 0.48472],
    'w' => [0.0, 0.43056, 0.02691, 0.08334, 0.71592],
    'x' => [0.0, 0.43056, 0.0, 0.02778, 0.57153],
    'y' => [0.19444, 0.43056, 0.03588, 0.05556, 0.49028],
    'z' => [0.0, 0.43056, 0.04398, 0.05556, 0.46505],
    'α' => [0.0, 0.43056, 0.0037, 0.02778, 0.6397],
    'β' => [0.19444, 0.69444, 0.05278, 0.08334, 0.56563],
    'γ' => [0.19444, 0.43056, 0.05556, 0.0, 0.51773],
    'δ' => [0.0, 0.69444, 0.03785, 0.05556, 0.44444],
    'ε' => [0.0, 0.43056, 0.0, 0.08334, 0.46632],
    'ζ' => [0.19444, 0.69444, 0.07378, 0.08334, 0.4375],
    'η' => [0.19444, 0.43056, 0.03588, 0.05556, 0.49653],
    'θ' => [0.0, 0.69444, 0.02778, 0.08334, 0.46944],
    'ι' => [0.0, 0.43056, 0.0, 0.05556, 0.35394],
    'κ' => [0.0, 0.43056, 0.0, 0.0, 0.57616],
    'λ' => [0.0, 0.69444, 0.0, 0.0, 0.58334],
    'μ' => [0.19444, 0.43056, 0.0, 0.02778, 0.60255],
    'ν' => [0.0, 0.43056, 0.06366, 0.02778, 0.49398],
    'ξ' => [0.19444, 0.69444, 0.04601, 0.11111, 0.4375],
    'ο' => [0.0, 0.43056, 0.0, 0.05556, 0.48472],
    'π' => [0.0, 0.43056, 0.03588, 0.0, 0.57003],
    'ρ' => [0.19444, 0.43056, 0.0, 0.08334, 0.51702],
    'ς' => [0.09722, 0.43056, 0.07986, 0.08334, 0.36285],
    'σ' => [0.0, 0.43056, 0.03588, 0.0, 0.57141],
    'τ' => [0.0, 0.43056, 0.1132, 0.02778, 0.43715],
    'υ' => [0.0, 0.43056, 0.03588, 0.02778, 0.54028],
    'φ' => [0.19444, 0.43056, 0.0, 0.08334, 0.65417],
    'χ' => [0.19444, 0.43056, 0.0, 0.05556, 0.62569],
    'ψ' => [0.19444, 0.69444, 0.03588, 0.11111, 0.65139],
    'ω' => [0.0, 0.43056, 0.03588, 0.0, 0.62245],
    'ϑ' => [0.0, 0.69444, 0.0, 0.08334, 0.59144],
    'ϕ' => [0.19444, 0.69444, 0.0, 0.08334, 0.59583],
    'ϖ' => [0.0, 0.43056, 0.02778, 0.0, 0.82813],
    'ϱ' => [0.19444, 0.43056, 0.0, 0.08334, 0.5171],
    'ϵ' => [0.0, 0.43056, 0.0, 0.05556, 0.4059],
};

/// Blackboard bold capitals.
pub(crate) static AMS_REGULAR: phf::Map<char, [f64; 5]> = phf::phf_map! {
    'A' => [0.0, 0.68889, 0.0, 0.0, 0.72222],
    'B' => [0.0, 0.68889, 0.0, 0.0, 0.66667],
    'C' => [0.0, 0.68889, 0.0, 0.0, 0.72222],
    'D' => [0.0, 0.68889, 0.0, 0.0, 0.72222],
    'E' => [0.0, 0.68889, 0.0, 0.0, 0.66667],
    'F' => [0.0, 0.68889, 0.0, 0.0, 0.61111],
    'G' => [0.0, 0.68889, 0.0, 0.0, 0.77778],
    'H' => [0.0, 0.68889, 0.0, 0.0, 0.77778],
    'I' => [0.0, 0.68889, 0.0, 0.0, 0.38889],
    'J' => [0.16667, 0.68889, 0.0, 0.0, 0.5],
    'K' => [0.0, 0.68889, 0.0, 0.0, 0.77778],
    'L' => [0.0, 0.68889, 0.0, 0.0, 0.66667],
    'M' => [0.0, 0.68889, 0.0, 0.0, 0.94445],
    'N' => [0.0, 0.68889, 0.0, 0.0, 0.72222],
    'O' => [0.16667, 0.68889, 0.0, 0.0, 0.77778],
    'P' => [0.0, 0.68889, 0.0, 0.0, 0.61111],
    'Q' => [0.16667, 0.68889, 0.0, 0.0, 0.77778],
    'R' => [0.0, 0.68889, 0.0, 0.0, 0.72222],
    'S' => [0.0, 0.68889, 0.0, 0.0, 0.55556],
    'T' => [0.0, 0.68889, 0.0, 0.0, 0.66667],
    'U' => [0.0, 0.68889, 0.0, 0.0, 0.72222],
    'V' => [0.0, 0.68889, 0.0, 0.0, 0.72222],
    'W' => [0.0, 0.68889, 0.0, 0.0, 1.0],
    'X' => [0.0, 0.68889, 0.0, 0.0, 0.72222],
    'Y' => [0.0, 0.68889, 0.0, 0.0, 0.72222],
    'Z' => [0.0, 0.68889, 0.0, 0.0, 0.66667],
};

/// Calligraphic capitals.
pub(crate) static CALIGRAPHIC_REGULAR: phf::Map<char, [f64; 5]> = phf::phf_map! {
    'A' => [0.0, 0.68333, 0.0, 0.19445, 0.79847],
    'B' => [0.0, 0.68333, 0.03041, 0.13889, 0.65681],
    'C' => [0.0, 0.68333, 0.05834, 0.13889, 0.52653],
    'D' => [0.0, 0.68333, 0.02778, 0.08334, 0.77139],
    'E' => [0.0, 0.68333, 0.08944, 0.11111, 0.52778],
    'F' => [0.0, 0.68333, 0.09931, 0.11111, 0.71875],
    'G' => [0.09722, 0.68333, 0.0593, 0.11111, 0.59487],
    'H' => [0.0, 0.68333, 0.00965, 0.11111, 0.84452],
    'I' => [0.0, 0.68333, 0.07382, 0.0, 0.54452],
    'J' => [0.09722, 0.68333, 0.18472, 0.16667, 0.67778],
    'K' => [0.0, 0.68333, 0.01445, 0.05556, 0.76195],
    'L' => [0.0, 0.68333, 0.0, 0.13889, 0.68972],
    'M' => [0.0, 0.68333, 0.0, 0.13889, 1.2009],
    'N' => [0.0, 0.68333, 0.14736, 0.08334, 0.82049],
    'O' => [0.0, 0.68333, 0.02778, 0.11111, 0.79611],
    'P' => [0.0, 0.68333, 0.08222, 0.08334, 0.69556],
    'Q' => [0.09722, 0.68333, 0.0, 0.11111, 0.81667],
    'R' => [0.0, 0.68333, 0.0, 0.08334, 0.8475],
    'S' => [0.0, 0.68333, 0.075, 0.13889, 0.60556],
    'T' => [0.0, 0.68333, 0.25417, 0.0, 0.54464],
    'U' => [0.0, 0.68333, 0.09931, 0.08334, 0.62583],
    'V' => [0.0, 0.68333, 0.08222, 0.0, 0.61278],
    'W' => [0.0, 0.68333, 0.08222, 0.08334, 0.98778],
    'X' => [0.0, 0.68333, 0.14643, 0.13889, 0.7133],
    'Y' => [0.09722, 0.68333, 0.08222, 0.08334, 0.66834],
    'Z' => [0.0, 0.68333, 0.07944, 0.13889, 0.72473],
};

/// First enlarged size of delimiters and big operators.
pub(crate) static SIZE1_REGULAR: phf::Map<char, [f64; 5]> = phf::phf_map! {
    '(' => [0.35001, 0.85, 0.0, 0.0, 0.45834],
    ')' => [0.35001, 0.85, 0.0, 0.0, 0.45834],
    '/' => [0.35001, 0.85, 0.0, 0.0, 0.57778],
    '[' => [0.35001, 0.85, 0.0, 0.0, 0.41667],
    '\\' => [0.35001, 0.85, 0.0, 0.0, 0.57778],
    ']' => [0.35001, 0.85, 0.0, 0.0, 0.41667],
    '{' => [0.35001, 0.85, 0.0, 0.0, 0.58334],
    '}' => [0.35001, 0.85, 0.0, 0.0, 0.58334],
    'ˆ' => [0.0, 0.72222, 0.0, 0.0, 0.55556],
    '˜' => [0.0, 0.72222, 0.0, 0.0, 0.55556],
    '‖' => [-0.00099, 0.601, 0.0, 0.0, 0.77778],
    '↑' => [0.00001, 0.6, 0.0, 0.0, 0.66667],
    '↓' => [0.00001, 0.6, 0.0, 0.0, 0.66667],
    '⇑' => [0.00001, 0.601, 0.0, 0.0, 0.77778],
    '⇓' => [0.00001, 0.601, 0.0, 0.0, 0.77778],
    '∏' => [0.25001, 0.75, 0.0, 0.0, 0.94445],
    '∐' => [0.25001, 0.75, 0.0, 0.0, 0.94445],
    '∑' => [0.25001, 0.75, 0.0, 0.0, 1.05556],
    '√' => [0.35001, 0.85, 0.0, 0.0, 1.0],
    '∣' => [-0.00599, 0.606, 0.0, 0.0, 0.33333],
    '∥' => [-0.00599, 0.606, 0.0, 0.0, 0.55556],
    '∫' => [0.30612, 0.805, 0.19445, 0.0, 0.47222],
    '∬' => [0.30612, 0.805, 0.19445, 0.0, 0.83334],
    '∭' => [0.30612, 0.805, 0.19445, 0.0, 1.19445],
    '∮' => [0.30612, 0.805, 0.19445, 0.0, 0.47222],
    '⋀' => [0.25001, 0.75, 0.0, 0.0, 0.83334],
    '⋁' => [0.25001, 0.75, 0.0, 0.0, 0.83334],
    '⋂' => [0.25001, 0.75, 0.0, 0.0, 0.83334],
    '⋃' => [0.25001, 0.75, 0.0, 0.0, 0.83334],
    '⌈' => [0.35001, 0.85, 0.0, 0.0, 0.47222],
    '⌉' => [0.35001, 0.85, 0.0, 0.0, 0.47222],
    '⌊' => [0.35001, 0.85, 0.0, 0.0, 0.47222],
    '⌋' => [0.35001, 0.85, 0.0, 0.0, 0.47222],
    '⏐' => [-0.00099, 0.601, 0.0, 0.0, 0.66667],
    '⟨' => [0.35001, 0.85, 0.0, 0.0, 0.47222],
    '⟩' => [0.35001, 0.85, 0.0, 0.0, 0.47222],
    '⨀' => [0.25001, 0.75, 0.0, 0.0, 1.11111],
    '⨁' => [0.25001, 0.75, 0.0, 0.0, 1.11111],
    '⨂' => [0.25001, 0.75, 0.0, 0.0, 1.11111],
    '⨄' => [0.25001, 0.75, 0.0, 0.0, 0.83334],
    '⨆' => [0.25001, 0.75, 0.0, 0.0, 0.83334],
};

/// Second enlarged size.
pub(crate) static SIZE2_REGULAR: phf::Map<char, [f64; 5]> = phf::phf_map! {
    '(' => [0.65002, 1.15, 0.0, 0.0, 0.59722],
    ')' => [0.65002, 1.15, 0.0, 0.0, 0.59722],
    '/' => [0.65002, 1.15, 0.0, 0.0, 0.81111],
    '[' => [0.65002, 1.15, 0.0, 0.0, 0.47222],
    '\\' => [0.65002, 1.15, 0.0, 0.0, 0.81111],
    ']' => [0.65002, 1.15, 0.0, 0.0, 0.47222],
    '{' => [0.65002, 1.15, 0.0, 0.0, 0.66667],
    '}' => [0.65002, 1.15, 0.0, 0.0, 0.66667],
    'ˆ' => [0.0, 0.75, 0.0, 0.0, 1.0],
    '˜' => [0.0, 0.75, 0.0, 0.0, 1.0],
    '∏' => [0.55001, 1.05, 0.0, 0.0, 1.27778],
    '∐' => [0.55001, 1.05, 0.0, 0.0, 1.27778],
    '∑' => [0.55001, 1.05, 0.0, 0.0, 1.44445],
    '√' => [0.65002, 1.15, 0.0, 0.0, 1.0],
    '∫' => [0.86225, 1.36, 0.44445, 0.0, 0.55556],
    '∬' => [0.862, 1.36, 0.44445, 0.0, 1.11111],
    '∭' => [0.862, 1.36, 0.44445, 0.0, 1.66667],
    '∮' => [0.86225, 1.36, 0.44445, 0.0, 0.55556],
    '⋀' => [0.55001, 1.05, 0.0, 0.0, 1.11111],
    '⋁' => [0.55001, 1.05, 0.0, 0.0, 1.11111],
    '⋂' => [0.55001, 1.05, 0.0, 0.0, 1.11111],
    '⋃' => [0.55001, 1.05, 0.0, 0.0, 1.11111],
    '⌈' => [0.65002, 1.15, 0.0, 0.0, 0.52778],
    '⌉' => [0.65002, 1.15, 0.0, 0.0, 0.52778],
    '⌊' => [0.65002, 1.15, 0.0, 0.0, 0.52778],
    '⌋' => [0.65002, 1.15, 0.0, 0.0, 0.52778],
    '⟨' => [0.65002, 1.15, 0.0, 0.0, 0.61111],
    '⟩' => [0.65002, 1.15, 0.0, 0.0, 0.61111],
    '⨀' => [0.55001, 1.05, 0.0, 0.0, 1.51112],
    '⨁' => [0.55001, 1.05, 0.0, 0.0, 1.51112],
    '⨂' => [0.55001, 1.05, 0.0, 0.0, 1.51112],
    '⨄' => [0.55001, 1.05, 0.0, 0.0, 1.11111],
    '⨆' => [0.55001, 1.05, 0.0, 0.0, 1.11111],
};

/// Third enlarged size.
pub(crate) static SIZE3_REGULAR: phf::Map<char, [f64; 5]> = phf::phf_map! {
    '(' => [0.95003, 1.45, 0.0, 0.0, 0.73611],
    ')' => [0.95003, 1.45, 0.0, 0.0, 0.73611],
    '/' => [0.95003, 1.45, 0.0, 0.0, 1.04445],
    '[' => [0.95003, 1.45, 0.0, 0.0, 0.52778],
    '\\' => [0.95003, 1.45, 0.0, 0.0, 1.04445],
    ']' => [0.95003, 1.45, 0.0, 0.0, 0.52778],
    '{' => [0.95003, 1.45, 0.0, 0.0, 0.75],
    '}' => [0.95003, 1.45, 0.0, 0.0, 0.75],
    'ˆ' => [0.0, 0.75, 0.0, 0.0, 1.44445],
    '˜' => [0.0, 0.75, 0.0, 0.0, 1.44445],
    '√' => [0.95003, 1.45, 0.0, 0.0, 1.0],
    '⌈' => [0.95003, 1.45, 0.0, 0.0, 0.58334],
    '⌉' => [0.95003, 1.45, 0.0, 0.0, 0.58334],
    '⌊' => [0.95003, 1.45, 0.0, 0.0, 0.58334],
    '⌋' => [0.95003, 1.45, 0.0, 0.0, 0.58334],
    '⟨' => [0.95003, 1.45, 0.0, 0.0, 0.75],
    '⟩' => [0.95003, 1.45, 0.0, 0.0, 0.75],
};

/// Largest size, also holding the pieces of extensible delimiters.
pub(crate) static SIZE4_REGULAR: phf::Map<char, [f64; 5]> = phf::phf_map! {
    '(' => [1.25003, 1.75, 0.0, 0.0, 0.79167],
    ')' => [1.25003, 1.75, 0.0, 0.0, 0.79167],
    '/' => [1.25003, 1.75, 0.0, 0.0, 1.27778],
    '[' => [1.25003, 1.75, 0.0, 0.0, 0.58334],
    '\\' => [1.25003, 1.75, 0.0, 0.0, 1.27778],
    ']' => [1.25003, 1.75, 0.0, 0.0, 0.58334],
    '{' => [1.25003, 1.75, 0.0, 0.0, 0.80556],
    '}' => [1.25003, 1.75, 0.0, 0.0, 0.80556],
    'ˆ' => [0.0, 0.825, 0.0, 0.0, 1.8889],
    '˜' => [0.0, 0.825, 0.0, 0.0, 1.8889],
    '√' => [1.25003, 1.75, 0.0, 0.0, 1.0],
    '⌈' => [1.25003, 1.75, 0.0, 0.0, 0.63889],
    '⌉' => [1.25003, 1.75, 0.0, 0.0, 0.63889],
    '⌊' => [1.25003, 1.75, 0.0, 0.0, 0.63889],
    '⌋' => [1.25003, 1.75, 0.0, 0.0, 0.63889],
    '⎛' => [0.64502, 1.155, 0.0, 0.0, 0.875],
    '⎜' => [0.00001, 0.6, 0.0, 0.0, 0.875],
    '⎝' => [0.64502, 1.155, 0.0, 0.0, 0.875],
    '⎞' => [0.64502, 1.155, 0.0, 0.0, 0.875],
    '⎟' => [0.00001, 0.6, 0.0, 0.0, 0.875],
    '⎠' => [0.64502, 1.155, 0.0, 0.0, 0.875],
    '⎡' => [0.64502, 1.155, 0.0, 0.0, 0.66667],
    '⎢' => [-0.00099, 0.601, 0.0, 0.0, 0.66667],
    '⎣' => [0.64502, 1.155, 0.0, 0.0, 0.66667],
    '⎤' => [0.64502, 1.155, 0.0, 0.0, 0.66667],
    '⎥' => [-0.00099, 0.601, 0.0, 0.0, 0.66667],
    '⎦' => [0.64502, 1.155, 0.0, 0.0, 0.66667],
    '⎧' => [0.00001, 0.9, 0.0, 0.0, 0.88889],
    '⎨' => [0.65002, 1.15, 0.0, 0.0, 0.88889],
    '⎩' => [0.90001, 0.0, 0.0, 0.0, 0.88889],
    '⎪' => [0.0, 0.3, 0.0, 0.0, 0.88889],
    '⎫' => [0.00001, 0.9, 0.0, 0.0, 0.88889],
    '⎬' => [0.65002, 1.15, 0.0, 0.0, 0.88889],
    '⎭' => [0.90001, 0.0, 0.0, 0.0, 0.88889],
    '⎷' => [0.88502, 0.915, 0.0, 0.0, 1.05556],
    '⟨' => [1.25003, 1.75, 0.0, 0.0, 0.80556],
    '⟩' => [1.25003, 1.75, 0.0, 0.0, 0.80556],
    '\u{E000}' => [-0.00499, 0.605, 0.0, 0.0, 1.05556],
    '\u{E001}' => [-0.00499, 0.605, 0.0, 0.0, 1.05556],
};
