use box_renderer::boxes::{BoxAttrs, Glyph, LayoutBox, Role, Rule, VBox, VItem, VPosition};
use box_renderer::font::Font;
use box_renderer::metrics::char_metrics;

use super::Layouter;
use super::style::Ctx;
use crate::ast::{AccentKind, Node};

impl Layouter {
    /// Accents, over- and underlines, following rule 12 of the TeXbook's Appendix G.
    pub(super) fn layout_accent(&mut self, kind: AccentKind, base: &Node, ctx: Ctx) -> LayoutBox {
        let body = self.layout_node(base, ctx.with_style(ctx.style.cramp()));
        let theta = ctx.metric(|p| p.default_rule_thickness);
        let attrs = BoxAttrs::with_role(Role::Accent);

        let Some(ch) = kind.char() else {
            let rule = VItem::boxed(LayoutBox::Rule(Rule::horizontal(
                body.width(),
                theta,
                ctx.color(),
            )));
            let vbox = if kind == AccentKind::Underline {
                let top = body.height();
                VBox::stack(
                    vec![
                        VItem::Kern(theta),
                        rule,
                        VItem::Kern(3.0 * theta),
                        VItem::boxed(body),
                    ],
                    VPosition::Top(top),
                    attrs,
                )
            } else {
                VBox::stack(
                    vec![
                        VItem::boxed(body),
                        VItem::Kern(3.0 * theta),
                        rule,
                        VItem::Kern(theta),
                    ],
                    VPosition::FirstBaseline,
                    attrs,
                )
            };
            return LayoutBox::VBox(vbox);
        };

        let skew = if base.is_character_box() {
            body.glyphs().first().map_or(0.0, |glyph| glyph.skew())
        } else {
            0.0
        };
        let accent = if kind.is_wide() {
            self.wide_accent(ch, body.width(), &ctx)
        } else {
            self.glyph(ch, Font::MainRegular, &ctx)
        }
        .styled(None, ctx.color());
        let clearance = body.height().min(ctx.metric(|p| p.x_height));
        let offset = (body.width() - accent.dims().width) / 2.0 + skew;
        LayoutBox::VBox(VBox::stack(
            vec![
                VItem::boxed(body),
                VItem::Kern(-clearance),
                VItem::Box {
                    content: LayoutBox::Glyph(accent),
                    offset,
                },
            ],
            VPosition::FirstBaseline,
            attrs,
        ))
    }

    /// The widest variant of `ch` that is not wider than `width`.
    fn wide_accent(&mut self, ch: char, width: f64, ctx: &Ctx) -> Glyph {
        let mut font = Font::MainRegular;
        for candidate in [Font::Size1, Font::Size2, Font::Size3, Font::Size4] {
            match char_metrics(candidate, ch) {
                Some(metrics) if metrics.width * ctx.scale <= width => font = candidate,
                _ => break,
            }
        }
        self.glyph(ch, font, ctx)
    }
}
