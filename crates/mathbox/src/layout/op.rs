use box_renderer::boxes::{BoxAttrs, HBox, LayoutBox, Role, VBox, VItem, VPosition};
use box_renderer::font::Font;

use super::Layouter;
use super::style::Ctx;
use crate::ast::{MathFont, Node, OpName};
use crate::commands::{is_integral, named_op_has_limits};

impl Layouter {
    /// A large or named operator, with its scripts if it has any.
    pub(super) fn layout_op(
        &mut self,
        op: &OpName,
        limits: Option<bool>,
        sup: Option<&Node>,
        sub: Option<&Node>,
        ctx: Ctx,
    ) -> LayoutBox {
        let default_limits = match op {
            OpName::Symbol(ch) => !is_integral(*ch),
            OpName::Named(name) => named_op_has_limits(name),
            OpName::Custom { limits, .. } => *limits,
        };
        let use_limits = limits.unwrap_or(default_limits && ctx.style.is_display());

        // `slant` is the italic correction of symbol operators; `shift` lowers the symbol so
        // that it is centered on the axis.
        let (base, slant, shift) = match op {
            OpName::Symbol(ch) => {
                let font = if ctx.style.is_display() {
                    Font::Size2
                } else {
                    Font::Size1
                };
                let glyph = self.glyph(*ch, font, &ctx).styled(None, ctx.color());
                let dims = glyph.dims();
                let shift = (dims.height - dims.depth) / 2.0 - ctx.metric(|p| p.axis_height);
                let slant = glyph.italic();
                (LayoutBox::Glyph(glyph), slant, shift)
            }
            OpName::Named(name) => {
                let glyphs = self.text_glyphs(name, Font::MainRegular, &ctx);
                (
                    LayoutBox::HBox(HBox::new(glyphs, BoxAttrs::default())),
                    0.0,
                    0.0,
                )
            }
            OpName::Custom { body, .. } => (
                LayoutBox::HBox(self.hbox(body, ctx.with_font(MathFont::Roman))),
                0.0,
                0.0,
            ),
        };

        if use_limits && (sup.is_some() || sub.is_some()) {
            return self.layout_limits(base, slant, shift, sup, sub, ctx);
        }
        let base = if shift == 0.0 {
            base
        } else {
            LayoutBox::VBox(VBox::shifted(base, -shift))
        };
        self.attach_scripts(base, slant, false, sup, sub, ctx)
    }

    /// Place scripts above and below the operator, following rule 13a of the TeXbook's
    /// Appendix G.
    fn layout_limits(
        &mut self,
        base: LayoutBox,
        slant: f64,
        shift: f64,
        sup: Option<&Node>,
        sub: Option<&Node>,
        ctx: Ctx,
    ) -> LayoutBox {
        let sup = sup.map(|node| {
            let content = self.layout_node(node, ctx.with_style(ctx.style.sup()));
            let kern = ctx
                .metric(|p| p.big_op_spacing1)
                .max(ctx.metric(|p| p.big_op_spacing3) - content.depth());
            (content, kern)
        });
        let sub = sub.map(|node| {
            let content = self.layout_node(node, ctx.with_style(ctx.style.sub()));
            let kern = ctx
                .metric(|p| p.big_op_spacing2)
                .max(ctx.metric(|p| p.big_op_spacing4) - content.height());
            (content, kern)
        });
        let spacing5 = ctx.metric(|p| p.big_op_spacing5);

        let width = [
            Some(&base),
            sup.as_ref().map(|(content, _)| content),
            sub.as_ref().map(|(content, _)| content),
        ]
        .into_iter()
        .flatten()
        .map(LayoutBox::width)
        .fold(0.0, f64::max);
        let centered = |content: LayoutBox, skew: f64| {
            let offset = (width - content.width()) / 2.0 + skew;
            VItem::Box { content, offset }
        };

        let (items, position) = match (sup, sub) {
            (Some((sup, sup_kern)), Some((sub, sub_kern))) => {
                let bottom =
                    spacing5 + sub.height() + sub.depth() + sub_kern + base.depth() + shift;
                (
                    vec![
                        VItem::Kern(spacing5),
                        centered(sub, -slant / 2.0),
                        VItem::Kern(sub_kern),
                        centered(base, 0.0),
                        VItem::Kern(sup_kern),
                        centered(sup, slant / 2.0),
                        VItem::Kern(spacing5),
                    ],
                    VPosition::Bottom(bottom),
                )
            }
            (None, Some((sub, sub_kern))) => {
                let top = base.height() - shift;
                (
                    vec![
                        VItem::Kern(spacing5),
                        centered(sub, -slant / 2.0),
                        VItem::Kern(sub_kern),
                        centered(base, 0.0),
                    ],
                    VPosition::Top(top),
                )
            }
            (Some((sup, sup_kern)), None) => {
                let bottom = base.depth() + shift;
                (
                    vec![
                        centered(base, 0.0),
                        VItem::Kern(sup_kern),
                        centered(sup, slant / 2.0),
                        VItem::Kern(spacing5),
                    ],
                    VPosition::Bottom(bottom),
                )
            }
            (None, None) => return LayoutBox::VBox(VBox::shifted(base, -shift)),
        };
        LayoutBox::VBox(VBox::stack(
            items,
            position,
            BoxAttrs::with_role(Role::Limits),
        ))
    }
}

#[cfg(test)]
mod tests {
    use box_renderer::boxes::{LayoutBox, Role};
    use box_renderer::font::Font;

    use crate::layout::tests::{all_glyphs, single_line};

    fn op_box(source: &str, display: bool) -> LayoutBox {
        let line = single_line(source, display);
        let LayoutBox::HBox(atom) = &line.children()[0] else {
            panic!("expected an atom");
        };
        atom.children()[0].clone()
    }

    #[test]
    fn operators_are_larger_in_display_style() {
        assert_eq!(all_glyphs("\\sum", false)[0].font(), Font::Size1);
        assert_eq!(all_glyphs("\\sum", true)[0].font(), Font::Size2);
    }

    #[test]
    fn limits_in_display_style() {
        let LayoutBox::VBox(vbox) = op_box("\\sum_{i=0}^n", true) else {
            panic!("expected limits");
        };
        assert_eq!(vbox.attrs().role, Some(Role::Limits));
        // Below, the operator, above.
        assert_eq!(vbox.children().len(), 3);
        assert!(vbox.children()[0].shift < 0.0);
        assert!(vbox.children()[2].shift > 0.0);
    }

    #[test]
    fn side_scripts_in_text_style() {
        let LayoutBox::HBox(hbox) = op_box("\\sum_{i=0}^n", false) else {
            panic!("expected scripts");
        };
        assert!(matches!(hbox.children()[1], LayoutBox::VBox(_)));
    }

    #[test]
    fn limits_can_be_forced() {
        assert!(matches!(op_box("\\sum\\limits_0", false), LayoutBox::VBox(_)));
        assert!(matches!(op_box("\\sum\\nolimits_0", true), LayoutBox::HBox(_)));
        // Integrals take side scripts even in display style.
        assert!(matches!(op_box("\\int_0^1", true), LayoutBox::HBox(_)));
        assert!(matches!(op_box("\\lim_{x}", true), LayoutBox::VBox(_)));
        assert!(matches!(op_box("\\sin_{x}", true), LayoutBox::HBox(_)));
    }

    #[test]
    fn named_operators_are_upright() {
        let glyphs = all_glyphs("\\sin x", false);
        let fonts: Vec<Font> = glyphs.iter().map(|glyph| glyph.font()).collect();
        assert_eq!(
            fonts,
            [
                Font::MainRegular,
                Font::MainRegular,
                Font::MainRegular,
                Font::MathItalic
            ]
        );
        let glyphs = all_glyphs("\\operatorname{sn}", false);
        assert!(glyphs.iter().all(|glyph| glyph.font() == Font::MainRegular));
    }
}
