//! Math styles, sizes and the layout context.

use box_renderer::color::Rgb;
use box_renderer::font::MathSize;
use box_renderer::metrics::FontParams;

use crate::ast::{MathFont, StyleKind};

/// One of TeX's eight math styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MathStyle {
    Display,
    DisplayCramped,
    Text,
    TextCramped,
    Script,
    ScriptCramped,
    ScriptScript,
    ScriptScriptCramped,
}

use MathStyle::*;

const STYLES: [MathStyle; 8] = [
    Display,
    DisplayCramped,
    Text,
    TextCramped,
    Script,
    ScriptCramped,
    ScriptScript,
    ScriptScriptCramped,
];

const SUP: [MathStyle; 8] = [
    Script,
    ScriptCramped,
    Script,
    ScriptCramped,
    ScriptScript,
    ScriptScriptCramped,
    ScriptScript,
    ScriptScriptCramped,
];
const SUB: [MathStyle; 8] = [
    ScriptCramped,
    ScriptCramped,
    ScriptCramped,
    ScriptCramped,
    ScriptScriptCramped,
    ScriptScriptCramped,
    ScriptScriptCramped,
    ScriptScriptCramped,
];
const FRAC_NUM: [MathStyle; 8] = [
    Text,
    TextCramped,
    Script,
    ScriptCramped,
    ScriptScript,
    ScriptScriptCramped,
    ScriptScript,
    ScriptScriptCramped,
];
const FRAC_DEN: [MathStyle; 8] = [
    TextCramped,
    TextCramped,
    ScriptCramped,
    ScriptCramped,
    ScriptScriptCramped,
    ScriptScriptCramped,
    ScriptScriptCramped,
    ScriptScriptCramped,
];
const CRAMP: [MathStyle; 8] = [
    DisplayCramped,
    DisplayCramped,
    TextCramped,
    TextCramped,
    ScriptCramped,
    ScriptCramped,
    ScriptScriptCramped,
    ScriptScriptCramped,
];
const TEXT: [MathStyle; 8] = [
    Display,
    DisplayCramped,
    Text,
    TextCramped,
    Text,
    TextCramped,
    Text,
    TextCramped,
];

impl MathStyle {
    #[inline]
    const fn id(self) -> usize {
        self as usize
    }

    pub(crate) fn sup(self) -> MathStyle {
        SUP[self.id()]
    }

    pub(crate) fn sub(self) -> MathStyle {
        SUB[self.id()]
    }

    pub(crate) fn frac_num(self) -> MathStyle {
        FRAC_NUM[self.id()]
    }

    pub(crate) fn frac_den(self) -> MathStyle {
        FRAC_DEN[self.id()]
    }

    pub(crate) fn cramp(self) -> MathStyle {
        CRAMP[self.id()]
    }

    /// The text style of the same crampedness, or display style if already in display.
    pub(crate) fn text(self) -> MathStyle {
        TEXT[self.id()]
    }

    /// 0 for display, 1 for text, 2 for script and 3 for scriptscript.
    #[inline]
    pub(crate) const fn size(self) -> usize {
        self.id() / 2
    }

    #[inline]
    pub(crate) const fn is_cramped(self) -> bool {
        self.id() % 2 == 1
    }

    /// Script styles use the tight spacing table.
    #[inline]
    pub(crate) const fn is_tight(self) -> bool {
        self.size() >= 2
    }

    #[inline]
    pub(crate) const fn is_display(self) -> bool {
        self.size() == 0
    }

    /// The style selected by `\displaystyle` and friends. It is never cramped.
    pub(crate) fn from_kind(kind: StyleKind) -> MathStyle {
        let index = match kind {
            StyleKind::Display => 0,
            StyleKind::Text => 2,
            StyleKind::Script => 4,
            StyleKind::ScriptScript => 6,
        };
        STYLES[index]
    }
}

/// Font size multipliers of `\tiny` (1) to `\Huge` (11).
const SIZE_MULTIPLIERS: [f64; 11] = [
    0.5, 0.6, 0.7, 0.8, 0.9, 1.0, 1.2, 1.44, 1.728, 2.074, 2.488,
];

/// The size used in script and scriptscript style, for every size.
const SIZE_STYLE_MAP: [[u8; 3]; 11] = [
    [1, 1, 1],
    [2, 1, 1],
    [3, 1, 1],
    [4, 2, 1],
    [5, 2, 1],
    [6, 3, 1],
    [7, 4, 2],
    [8, 6, 3],
    [9, 7, 6],
    [10, 8, 7],
    [11, 10, 9],
];

pub(crate) const NORMAL_SIZE: u8 = 6;

fn size_at_style(size: u8, style: MathStyle) -> u8 {
    let size = size.clamp(1, 11);
    if style.size() < 2 {
        size
    } else {
        SIZE_STYLE_MAP[usize::from(size - 1)][style.size() - 1]
    }
}

/// Everything that layout inherits from the enclosing list.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Ctx {
    pub style: MathStyle,
    /// The size selected by `\tiny` to `\Huge`.
    pub size: u8,
    pub font: Option<MathFont>,
    color: Option<Rgb>,
    phantom: bool,
    /// Size multiplier relative to the base font.
    pub scale: f64,
    pub math_size: MathSize,
    pub params: &'static FontParams,
}

impl Ctx {
    pub(crate) fn new(style: MathStyle) -> Ctx {
        Ctx::derive(style, NORMAL_SIZE, None, None, false)
    }

    fn derive(
        style: MathStyle,
        size: u8,
        font: Option<MathFont>,
        color: Option<Rgb>,
        phantom: bool,
    ) -> Ctx {
        let effective = size_at_style(size, style);
        let math_size = if effective >= 5 {
            MathSize::Text
        } else if effective >= 3 {
            MathSize::Script
        } else {
            MathSize::ScriptScript
        };
        Ctx {
            style,
            size,
            font,
            color,
            phantom,
            scale: SIZE_MULTIPLIERS[usize::from(effective - 1)],
            math_size,
            params: math_size.params(),
        }
    }

    pub(crate) fn with_style(self, style: MathStyle) -> Ctx {
        Ctx::derive(style, self.size, self.font, self.color, self.phantom)
    }

    pub(crate) fn with_size(self, size: u8) -> Ctx {
        Ctx::derive(self.style, size, self.font, self.color, self.phantom)
    }

    pub(crate) fn with_font(self, font: MathFont) -> Ctx {
        Ctx {
            font: Some(font),
            ..self
        }
    }

    pub(crate) fn with_color(self, color: Rgb) -> Ctx {
        Ctx {
            color: Some(color),
            ..self
        }
    }

    pub(crate) fn phantom(self) -> Ctx {
        Ctx {
            phantom: true,
            ..self
        }
    }

    /// The color to paint with. Phantoms are painted by their container.
    #[inline]
    pub(crate) fn color(&self) -> Option<Rgb> {
        if self.phantom { None } else { self.color }
    }

    /// A font parameter in em of the base font.
    #[inline]
    pub(crate) fn metric(&self, param: impl Fn(&FontParams) -> f64) -> f64 {
        param(self.params) * self.scale
    }

    /// Length of one math unit in em of the base font.
    #[inline]
    pub(crate) fn mu(&self) -> f64 {
        self.params.em_per_mu() * self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions() {
        assert_eq!(Display.sup(), Script);
        assert_eq!(TextCramped.sup(), ScriptCramped);
        assert_eq!(Text.sub(), ScriptCramped);
        assert_eq!(Display.frac_num(), Text);
        assert_eq!(Text.frac_num(), Script);
        assert_eq!(Script.frac_den(), ScriptScriptCramped);
        assert_eq!(ScriptScript.sup(), ScriptScript);
        assert_eq!(Script.text(), Text);
        assert_eq!(Display.cramp(), DisplayCramped);
        assert!(Script.is_tight());
        assert!(!TextCramped.is_tight());
        assert!(TextCramped.is_cramped());
    }

    #[test]
    fn scales() {
        let ctx = Ctx::new(Text);
        assert_eq!(ctx.scale, 1.0);
        assert_eq!(ctx.math_size, MathSize::Text);
        let script = ctx.with_style(Script);
        assert_eq!(script.scale, 0.7);
        assert_eq!(script.math_size, MathSize::Script);
        let scriptscript = ctx.with_style(ScriptScript);
        assert_eq!(scriptscript.scale, 0.5);
        assert_eq!(scriptscript.math_size, MathSize::ScriptScript);

        let large = ctx.with_size(8);
        assert_eq!(large.scale, 1.44);
        assert_eq!(large.with_style(Script).scale, 1.0);
        assert_eq!(large.with_style(Script).math_size, MathSize::Text);
    }

    #[test]
    fn phantoms_have_no_color() {
        let ctx = Ctx::new(Text).with_color(Rgb::new(1, 2, 3));
        assert!(ctx.color().is_some());
        assert!(ctx.phantom().color().is_none());
    }
}
