//! Glyph metrics and math font parameters.
//!
//! All values are in em of the font at its design size. Callers scale them by the size
//! multiplier of the current style to obtain lengths in em of the base font.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::font::{Font, MathSize};
use crate::metrics_data::{
    AMS_REGULAR, CALIGRAPHIC_REGULAR, MAIN_BOLD, MAIN_REGULAR, MATH_ITALIC, SIZE1_REGULAR,
    SIZE2_REGULAR, SIZE3_REGULAR, SIZE4_REGULAR,
};

/// Dimensions of a single glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CharMetrics {
    pub depth: f64,
    pub height: f64,
    pub italic: f64,
    pub skew: f64,
    pub width: f64,
}

impl CharMetrics {
    /// Metrics used for characters the fonts do not cover.
    pub const NOTDEF: CharMetrics = CharMetrics {
        depth: 0.0,
        height: 0.68333,
        italic: 0.0,
        skew: 0.0,
        width: 0.5,
    };

    const fn from_row(row: &[f64; 5]) -> Self {
        let [depth, height, italic, skew, width] = *row;
        CharMetrics {
            depth,
            height,
            italic,
            skew,
            width,
        }
    }

    #[inline]
    pub fn total_height(&self) -> f64 {
        self.height + self.depth
    }
}

/// Look up the metrics of `ch` in `font`.
///
/// Returns `None` if the face has no glyph for the character.
pub fn char_metrics(font: Font, ch: char) -> Option<CharMetrics> {
    let table = match font {
        Font::MainRegular => &MAIN_REGULAR,
        Font::MainBold => &MAIN_BOLD,
        Font::MathItalic => &MATH_ITALIC,
        Font::AmsRegular => &AMS_REGULAR,
        Font::CaligraphicRegular => &CALIGRAPHIC_REGULAR,
        Font::Size1 => &SIZE1_REGULAR,
        Font::Size2 => &SIZE2_REGULAR,
        Font::Size3 => &SIZE3_REGULAR,
        Font::Size4 => &SIZE4_REGULAR,
    };
    table.get(&ch).map(CharMetrics::from_row)
}

/// The TeX math font parameters (σ and ξ values of `cmsy` and `cmex`) of one font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontParams {
    pub slant: f64,
    pub x_height: f64,
    pub quad: f64,
    pub num1: f64,
    pub num2: f64,
    pub num3: f64,
    pub denom1: f64,
    pub denom2: f64,
    pub sup1: f64,
    pub sup2: f64,
    pub sup3: f64,
    pub sub1: f64,
    pub sub2: f64,
    pub sup_drop: f64,
    pub sub_drop: f64,
    pub delim1: f64,
    pub delim2: f64,
    pub axis_height: f64,
    pub default_rule_thickness: f64,
    pub big_op_spacing1: f64,
    pub big_op_spacing2: f64,
    pub big_op_spacing3: f64,
    pub big_op_spacing4: f64,
    pub big_op_spacing5: f64,
    pub sqrt_rule_thickness: f64,
    pub pt_per_em: f64,
    pub double_rule_sep: f64,
    pub array_rule_width: f64,
    pub fboxsep: f64,
    pub fboxrule: f64,
}

impl FontParams {
    /// Length of one math unit, 1/18 of a quad.
    #[inline]
    pub fn em_per_mu(&self) -> f64 {
        self.quad / 18.0
    }
}

static FONT_PARAMS: [FontParams; 3] = [
    FontParams {
        slant: 0.25,
        x_height: 0.431,
        quad: 1.0,
        num1: 0.677,
        num2: 0.394,
        num3: 0.444,
        denom1: 0.686,
        denom2: 0.345,
        sup1: 0.413,
        sup2: 0.363,
        sup3: 0.289,
        sub1: 0.15,
        sub2: 0.247,
        sup_drop: 0.386,
        sub_drop: 0.05,
        delim1: 2.39,
        delim2: 1.01,
        axis_height: 0.25,
        default_rule_thickness: 0.04,
        big_op_spacing1: 0.111,
        big_op_spacing2: 0.166,
        big_op_spacing3: 0.2,
        big_op_spacing4: 0.6,
        big_op_spacing5: 0.1,
        sqrt_rule_thickness: 0.04,
        pt_per_em: 10.0,
        double_rule_sep: 0.2,
        array_rule_width: 0.04,
        fboxsep: 0.3,
        fboxrule: 0.04,
    },
    FontParams {
        slant: 0.25,
        x_height: 0.431,
        quad: 1.171,
        num1: 0.732,
        num2: 0.384,
        num3: 0.471,
        denom1: 0.752,
        denom2: 0.344,
        sup1: 0.503,
        sup2: 0.431,
        sup3: 0.286,
        sub1: 0.143,
        sub2: 0.286,
        sup_drop: 0.353,
        sub_drop: 0.071,
        delim1: 1.7,
        delim2: 1.157,
        axis_height: 0.25,
        default_rule_thickness: 0.049,
        big_op_spacing1: 0.111,
        big_op_spacing2: 0.166,
        big_op_spacing3: 0.2,
        big_op_spacing4: 0.611,
        big_op_spacing5: 0.143,
        sqrt_rule_thickness: 0.04,
        pt_per_em: 10.0,
        double_rule_sep: 0.2,
        array_rule_width: 0.04,
        fboxsep: 0.3,
        fboxrule: 0.04,
    },
    FontParams {
        slant: 0.25,
        x_height: 0.431,
        quad: 1.472,
        num1: 0.925,
        num2: 0.387,
        num3: 0.504,
        denom1: 1.025,
        denom2: 0.532,
        sup1: 0.504,
        sup2: 0.404,
        sup3: 0.294,
        sub1: 0.2,
        sub2: 0.4,
        sup_drop: 0.494,
        sub_drop: 0.1,
        delim1: 1.98,
        delim2: 1.42,
        axis_height: 0.25,
        default_rule_thickness: 0.049,
        big_op_spacing1: 0.111,
        big_op_spacing2: 0.166,
        big_op_spacing3: 0.2,
        big_op_spacing4: 0.611,
        big_op_spacing5: 0.143,
        sqrt_rule_thickness: 0.04,
        pt_per_em: 10.0,
        double_rule_sep: 0.2,
        array_rule_width: 0.04,
        fboxsep: 0.3,
        fboxrule: 0.04,
    },
];

impl MathSize {
    #[inline]
    pub fn params(self) -> &'static FontParams {
        &FONT_PARAMS[self.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_glyphs() {
        let paren = char_metrics(Font::MainRegular, '(').unwrap();
        assert_eq!(paren.height, 0.75);
        assert_eq!(paren.depth, 0.25);
        assert_eq!(paren.width, 0.38889);

        let x = char_metrics(Font::MathItalic, 'x').unwrap();
        assert_eq!(x.width, 0.57153);
        assert_eq!(x.skew, 0.02778);

        let eq = char_metrics(Font::MainRegular, '=').unwrap();
        assert!(eq.depth < 0.0);
    }

    #[test]
    fn missing_glyph() {
        assert!(char_metrics(Font::MathItalic, '🐢').is_none());
        assert!(char_metrics(Font::Size3, '∑').is_none());
    }

    #[test]
    fn delimiter_sizes_grow() {
        let mut last = 0.0;
        for font in [
            Font::MainRegular,
            Font::Size1,
            Font::Size2,
            Font::Size3,
            Font::Size4,
        ] {
            let m = char_metrics(font, '(').unwrap();
            assert!(m.total_height() > last, "{font:?}");
            last = m.total_height();
        }
    }

    #[test]
    fn params_per_size() {
        assert_eq!(MathSize::Text.params().quad, 1.0);
        assert_eq!(MathSize::Script.params().sup1, 0.503);
        assert_eq!(MathSize::ScriptScript.params().delim2, 1.42);
        assert!((MathSize::Text.params().em_per_mu() - 1.0 / 18.0).abs() < 1e-12);
    }
}
