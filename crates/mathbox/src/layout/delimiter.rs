//! Delimiters of all sizes.
//!
//! A delimiter of a requested height is the first of a sequence of candidates that is tall
//! enough: the regular glyph at three styles, then the four larger faces, and finally a glyph
//! assembled from a top, a bottom, an optional middle and as many repeated pieces as needed.

use box_renderer::boxes::{BoxAttrs, HBox, Kern, LayoutBox, Role, VBox, VItem, VPosition};
use box_renderer::font::Font;
use box_renderer::metrics::char_metrics;

use super::Layouter;
use super::style::{Ctx, MathStyle};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Candidate {
    Small(MathStyle),
    Large(u8),
    Stack,
}

/// Delimiters that have large variants as well as pieces to assemble any size.
const STACK_LARGE: &[char] = &['(', ')', '[', ']', '{', '}', '⌊', '⌋', '⌈', '⌉', '√'];
/// Delimiters that have no large variants.
const STACK_ALWAYS: &[char] = &['↑', '↓', '↕', '⇑', '⇓', '⇕', '∣', '∥'];

const STACK_NEVER_SEQUENCE: &[Candidate] = &[
    Candidate::Small(MathStyle::ScriptScript),
    Candidate::Small(MathStyle::Script),
    Candidate::Small(MathStyle::Text),
    Candidate::Large(1),
    Candidate::Large(2),
    Candidate::Large(3),
    Candidate::Large(4),
];
const STACK_ALWAYS_SEQUENCE: &[Candidate] = &[
    Candidate::Small(MathStyle::ScriptScript),
    Candidate::Small(MathStyle::Script),
    Candidate::Small(MathStyle::Text),
    Candidate::Stack,
];
const STACK_LARGE_SEQUENCE: &[Candidate] = &[
    Candidate::Small(MathStyle::ScriptScript),
    Candidate::Small(MathStyle::Script),
    Candidate::Small(MathStyle::Text),
    Candidate::Large(1),
    Candidate::Large(2),
    Candidate::Large(3),
    Candidate::Large(4),
    Candidate::Stack,
];

/// `\nulldelimiterspace`
const NULL_DELIMITER_SPACE: f64 = 0.12;
/// `\delimiterfactor`
const DELIMITER_FACTOR: f64 = 901.0;
/// `\delimitershortfall`
const DELIMITER_EXTEND: f64 = 0.5;

/// Heights of `\big` to `\Bigg` for assembled delimiters.
const SIZE_TO_MAX_HEIGHT: [f64; 5] = [0.0, 1.2, 1.8, 2.4, 3.0];

const MAX_REPEATS: f64 = 100_000.0;

pub(super) fn null_delimiter(ctx: &Ctx) -> LayoutBox {
    LayoutBox::Kern(Kern {
        amount: NULL_DELIMITER_SPACE * ctx.scale,
    })
}

struct Pieces {
    top: char,
    middle: Option<char>,
    repeat: char,
    bottom: char,
    font: Font,
}

fn pieces(delim: char) -> Pieces {
    let (top, middle, repeat, bottom, font) = match delim {
        '↑' => ('↑', None, '⏐', '⏐', Font::Size1),
        '⇑' => ('⇑', None, '‖', '‖', Font::Size1),
        '↓' => ('⏐', None, '⏐', '↓', Font::Size1),
        '⇓' => ('‖', None, '‖', '⇓', Font::Size1),
        '↕' => ('↑', None, '⏐', '↓', Font::Size1),
        '⇕' => ('⇑', None, '‖', '⇓', Font::Size1),
        '[' => ('⎡', None, '⎢', '⎣', Font::Size4),
        ']' => ('⎤', None, '⎥', '⎦', Font::Size4),
        '⌊' => ('⎢', None, '⎢', '⎣', Font::Size4),
        '⌋' => ('⎥', None, '⎥', '⎦', Font::Size4),
        '⌈' => ('⎡', None, '⎢', '⎢', Font::Size4),
        '⌉' => ('⎤', None, '⎥', '⎥', Font::Size4),
        '(' => ('⎛', None, '⎜', '⎝', Font::Size4),
        ')' => ('⎞', None, '⎟', '⎠', Font::Size4),
        '{' => ('⎧', Some('⎨'), '⎪', '⎩', Font::Size4),
        '}' => ('⎫', Some('⎬'), '⎪', '⎭', Font::Size4),
        '√' => ('\u{E001}', None, '\u{E000}', '⎷', Font::Size4),
        // `∣` and `∥` repeat themselves.
        other => (other, None, other, other, Font::Size1),
    };
    Pieces {
        top,
        middle,
        repeat,
        bottom,
        font,
    }
}

/// Pick the first candidate taller than `height`, starting at the current style.
fn select_candidate(delim: char, height: f64, sequence: &[Candidate], ctx: &Ctx) -> Candidate {
    let start = 2usize.min(3 - ctx.style.size());
    for candidate in &sequence[start..] {
        let total = match *candidate {
            Candidate::Stack => break,
            Candidate::Small(style) => char_metrics(Font::MainRegular, delim)
                .map(|metrics| metrics.total_height() * ctx.with_style(style).scale),
            Candidate::Large(size) => Font::delim_size(size)
                .and_then(|font| char_metrics(font, delim))
                .map(|metrics| metrics.total_height() * ctx.with_style(MathStyle::Text).scale),
        };
        if let Some(total) = total
            && total >= height
        {
            return *candidate;
        }
    }
    sequence.last().copied().unwrap_or(Candidate::Stack)
}

impl Layouter {
    /// `\big` and friends, with a size from 1 to 4.
    pub(super) fn sized_delim(&mut self, delim: Option<char>, size: u8, ctx: &Ctx) -> LayoutBox {
        let Some(delim) = delim else {
            return null_delimiter(ctx);
        };
        let size = size.clamp(1, 4);
        if STACK_ALWAYS.contains(&delim) {
            let height = SIZE_TO_MAX_HEIGHT[usize::from(size)] * ctx.scale;
            self.stacked_delim(delim, height, false, ctx)
        } else {
            self.large_delim(delim, size, false, ctx)
        }
    }

    /// A delimiter around content of the given height and depth, as for `\left` and `\right`.
    pub(super) fn left_right_delim(
        &mut self,
        delim: Option<char>,
        height: f64,
        depth: f64,
        ctx: &Ctx,
    ) -> LayoutBox {
        let axis = ctx.metric(|p| p.axis_height);
        let max_dist = (height - axis).max(depth + axis);
        let total = (max_dist / 500.0 * DELIMITER_FACTOR)
            .max(2.0 * max_dist - DELIMITER_EXTEND * ctx.scale);
        self.custom_sized_delim(delim, total, true, ctx)
    }

    /// A delimiter at least `height` tall. If `center` is set, it is centered on the math axis.
    pub(super) fn custom_sized_delim(
        &mut self,
        delim: Option<char>,
        height: f64,
        center: bool,
        ctx: &Ctx,
    ) -> LayoutBox {
        let Some(delim) = delim else {
            return null_delimiter(ctx);
        };
        let sequence = if STACK_LARGE.contains(&delim) {
            STACK_LARGE_SEQUENCE
        } else if STACK_ALWAYS.contains(&delim) {
            STACK_ALWAYS_SEQUENCE
        } else {
            STACK_NEVER_SEQUENCE
        };
        let candidate = select_candidate(delim, height, sequence, ctx);
        log::debug!("delimiter {delim:?} for height {height:.3}em: {candidate:?}");
        match candidate {
            Candidate::Small(style) => self.small_delim(delim, style, center, ctx),
            Candidate::Large(size) => self.large_delim(delim, size, center, ctx),
            Candidate::Stack => self.stacked_delim(delim, height, center, ctx),
        }
    }

    fn small_delim(
        &mut self,
        delim: char,
        style: MathStyle,
        center: bool,
        ctx: &Ctx,
    ) -> LayoutBox {
        let small_ctx = ctx.with_style(style);
        let glyph = self
            .glyph(delim, Font::MainRegular, &small_ctx)
            .styled(None, ctx.color());
        let content = LayoutBox::Glyph(glyph);
        if center {
            let shift = (small_ctx.scale - ctx.scale) * ctx.params.axis_height;
            LayoutBox::VBox(VBox::shifted(content, -shift))
        } else {
            content
        }
    }

    fn large_delim(&mut self, delim: char, size: u8, center: bool, ctx: &Ctx) -> LayoutBox {
        let text_ctx = ctx.with_style(MathStyle::Text);
        let font = Font::delim_size(size).unwrap_or(Font::Size4);
        let glyph = self.glyph(delim, font, &text_ctx).styled(None, ctx.color());
        let mut content = LayoutBox::Glyph(glyph);
        if center {
            let shift = (text_ctx.scale - ctx.scale) * ctx.params.axis_height;
            content = LayoutBox::VBox(VBox::shifted(content, -shift));
        }
        LayoutBox::HBox(HBox::new(
            vec![content],
            BoxAttrs::with_role(Role::Delimiter),
        ))
    }

    /// Assemble a delimiter from pieces.
    fn stacked_delim(&mut self, delim: char, height: f64, center: bool, ctx: &Ctx) -> LayoutBox {
        let pieces = pieces(delim);
        let text_ctx = ctx.with_style(MathStyle::Text);
        let color = ctx.color();
        let mut piece =
            |ch| LayoutBox::Glyph(self.glyph(ch, pieces.font, &text_ctx).styled(None, color));
        let top = piece(pieces.top);
        let bottom = piece(pieces.bottom);
        let repeat = piece(pieces.repeat);
        let middle = pieces.middle.map(&mut piece);

        let total = |content: &LayoutBox| content.height() + content.depth();
        let mut min_height = total(&top) + total(&bottom);
        if let Some(middle) = &middle {
            min_height += total(middle);
        }
        let factor = if middle.is_some() { 2.0 } else { 1.0 };
        let repeat_height = total(&repeat);
        let count = if repeat_height > 0.0 {
            ((height - min_height) / (factor * repeat_height)).ceil()
        } else {
            0.0
        };
        let count = if count.is_finite() {
            count.clamp(0.0, MAX_REPEATS)
        } else {
            0.0
        };
        let real_height = min_height + count * factor * repeat_height;
        let count = count as usize;

        let axis = if center {
            ctx.metric(|p| p.axis_height)
        } else {
            text_ctx.metric(|p| p.axis_height)
        };
        let depth = real_height / 2.0 - axis;

        let mut items = Vec::with_capacity(2 * count + 3);
        items.push(VItem::boxed(bottom));
        items.extend((0..count).map(|_| VItem::boxed(repeat.clone())));
        if let Some(middle) = middle {
            items.push(VItem::boxed(middle));
            items.extend((0..count).map(|_| VItem::boxed(repeat.clone())));
        }
        items.push(VItem::boxed(top));
        LayoutBox::VBox(VBox::stack(
            items,
            VPosition::Bottom(depth),
            BoxAttrs::with_role(Role::Delimiter),
        ))
    }
}

#[cfg(test)]
mod tests {
    use box_renderer::boxes::Glyph;
    use box_renderer::color::Rgb;

    use super::*;

    fn fonts(content: &LayoutBox) -> Vec<(char, Font)> {
        content
            .glyphs()
            .into_iter()
            .map(|glyph: &Glyph| (glyph.ch(), glyph.font()))
            .collect()
    }

    fn layouter() -> Layouter {
        Layouter::new(Rgb::new(0xcc, 0, 0))
    }

    #[test]
    fn small_content_gets_regular_glyphs() {
        let ctx = Ctx::new(MathStyle::Text);
        let delim = layouter().left_right_delim(Some('('), 0.431, 0.0, &ctx);
        assert_eq!(fonts(&delim), [('(', Font::MainRegular)]);
    }

    #[test]
    fn taller_content_gets_larger_faces() {
        let ctx = Ctx::new(MathStyle::Text);
        let delim = layouter().custom_sized_delim(Some('('), 1.1, true, &ctx);
        assert_eq!(fonts(&delim), [('(', Font::Size1)]);
        let delim = layouter().custom_sized_delim(Some('⟨'), 100.0, true, &ctx);
        assert_eq!(fonts(&delim), [('⟨', Font::Size4)]);
    }

    #[test]
    fn very_tall_content_gets_assembled() {
        let ctx = Ctx::new(MathStyle::Text);
        let delim = layouter().custom_sized_delim(Some('('), 10.0, true, &ctx);
        let glyphs = fonts(&delim);
        assert_eq!(glyphs.first(), Some(&('⎝', Font::Size4)));
        assert_eq!(glyphs.last(), Some(&('⎛', Font::Size4)));
        assert!(glyphs.len() > 3);
        assert!(delim.height() + delim.depth() >= 10.0);

        let delim = layouter().custom_sized_delim(Some('{'), 10.0, true, &ctx);
        assert!(fonts(&delim).contains(&('⎨', Font::Size4)));
    }

    #[test]
    fn every_height_is_covered() {
        let styles = [
            MathStyle::Display,
            MathStyle::Text,
            MathStyle::Script,
            MathStyle::ScriptScript,
        ];
        for style in styles {
            let ctx = Ctx::new(style);
            for &delim in STACK_LARGE.iter().chain(STACK_ALWAYS) {
                // The tallest single glyph of the delimiter.
                let face = if STACK_LARGE.contains(&delim) {
                    Font::Size4
                } else {
                    Font::MainRegular
                };
                let largest = char_metrics(face, delim).map_or(0.0, |metrics| {
                    metrics.total_height() * ctx.with_style(MathStyle::Text).scale
                });
                for step in 1..=240 {
                    let height = f64::from(step) * 0.05;
                    let content = layouter().custom_sized_delim(Some(delim), height, false, &ctx);
                    let total = content.height() + content.depth();
                    assert!(
                        total >= height - 1e-9,
                        "{delim:?} in {style:?}: {total} < {height}"
                    );
                    let glyphs = fonts(&content);
                    if height > largest + 1e-9 {
                        // Only the assembly is tall enough.
                        assert!(glyphs.len() >= 2, "{delim:?} in {style:?} at {height}");
                        let face = pieces(delim).font;
                        assert!(glyphs.iter().all(|&(_, font)| font == face));
                    } else if STACK_LARGE.contains(&delim) {
                        assert_eq!(glyphs.len(), 1, "{delim:?} in {style:?} at {height}");
                    }
                }
            }
        }
    }

    #[test]
    fn assembled_delimiters_are_centered_on_the_axis() {
        let ctx = Ctx::new(MathStyle::Text);
        let delim = layouter().custom_sized_delim(Some('['), 6.0, true, &ctx);
        let middle = (delim.height() - delim.depth()) / 2.0;
        assert!((middle - 0.25).abs() < 1e-9);
    }

    #[test]
    fn big_delimiters() {
        let ctx = Ctx::new(MathStyle::Text);
        for size in 1..=4 {
            let delim = layouter().sized_delim(Some('('), size, &ctx);
            assert_eq!(fonts(&delim), [('(', Font::delim_size(size).unwrap())]);
        }
        let delim = layouter().sized_delim(Some('∣'), 2, &ctx);
        assert!(fonts(&delim).iter().all(|&(ch, font)| ch == '∣' && font == Font::Size1));
        let delim = layouter().sized_delim(None, 2, &ctx);
        assert!(matches!(delim, LayoutBox::Kern(_)));
    }
}
