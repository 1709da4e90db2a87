use box_renderer::atom::AtomClass;
use box_renderer::boxes::{BoxAttrs, HBox, LayoutBox, Role, Rule, VBox, VChild};

use super::style::{Ctx, MathStyle};
use super::{Layouter, tag};
use crate::ast::{Node, StyleKind};

impl Layouter {
    /// Fractions and binomials, following rule 15 of the TeXbook's Appendix G.
    pub(super) fn layout_fraction(
        &mut self,
        numer: &Node,
        denom: &Node,
        has_bar: bool,
        delims: (Option<char>, Option<char>),
        style: Option<StyleKind>,
        ctx: Ctx,
    ) -> LayoutBox {
        let ctx = match style {
            Some(kind) => ctx.with_style(MathStyle::from_kind(kind)),
            None => ctx,
        };
        let numer = self.layout_node(numer, ctx.with_style(ctx.style.frac_num()));
        let denom = self.layout_node(denom, ctx.with_style(ctx.style.frac_den()));

        let theta = ctx.metric(|p| p.default_rule_thickness);
        let rule_width = if has_bar { theta } else { 0.0 };
        let display = ctx.style.is_display();
        let (mut num_shift, clearance, mut denom_shift) = if display {
            let clearance = if has_bar { 3.0 * theta } else { 7.0 * theta };
            (ctx.metric(|p| p.num1), clearance, ctx.metric(|p| p.denom1))
        } else if has_bar {
            (ctx.metric(|p| p.num2), theta, ctx.metric(|p| p.denom2))
        } else {
            (ctx.metric(|p| p.num3), 3.0 * theta, ctx.metric(|p| p.denom2))
        };

        let width = numer.width().max(denom.width());
        let numer_offset = (width - numer.width()) / 2.0;
        let denom_offset = (width - denom.width()) / 2.0;

        let mut children = Vec::with_capacity(3);
        if has_bar {
            let axis = ctx.metric(|p| p.axis_height);
            let above = (num_shift - numer.depth()) - (axis + 0.5 * rule_width);
            if above < clearance {
                num_shift += clearance - above;
            }
            let below = (axis - 0.5 * rule_width) - (denom.height() - denom_shift);
            if below < clearance {
                denom_shift += clearance - below;
            }
            children.push(VChild {
                content: denom,
                shift: -denom_shift,
                offset: denom_offset,
            });
            children.push(VChild {
                content: LayoutBox::Rule(Rule::horizontal(width, rule_width, ctx.color())),
                shift: axis - 0.5 * rule_width,
                offset: 0.0,
            });
        } else {
            let gap = (num_shift - numer.depth()) - (denom.height() - denom_shift);
            if gap < clearance {
                num_shift += 0.5 * (clearance - gap);
                denom_shift += 0.5 * (clearance - gap);
            }
            children.push(VChild {
                content: denom,
                shift: -denom_shift,
                offset: denom_offset,
            });
        }
        children.push(VChild {
            content: numer,
            shift: num_shift,
            offset: numer_offset,
        });
        let frac = VBox::from_children(children, BoxAttrs::with_role(Role::Fraction));

        let delim_size = if display {
            ctx.metric(|p| p.delim1)
        } else if ctx.style.size() == 3 {
            ctx.with_style(MathStyle::Script).params.delim2 * ctx.scale
        } else {
            ctx.metric(|p| p.delim2)
        };
        let left = self.custom_sized_delim(delims.0, delim_size, true, &ctx);
        let right = self.custom_sized_delim(delims.1, delim_size, true, &ctx);
        LayoutBox::HBox(HBox::new(
            vec![
                tag(left, AtomClass::Open),
                LayoutBox::VBox(frac),
                tag(right, AtomClass::Close),
            ],
            BoxAttrs::default(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use box_renderer::boxes::{LayoutBox, Role, VBox};

    use crate::layout::tests::{all_glyphs, single_line};

    fn fraction(source: &str, display: bool) -> VBox {
        let line = single_line(source, display);
        let LayoutBox::HBox(atom) = &line.children()[0] else {
            panic!("expected an atom");
        };
        let LayoutBox::HBox(inner) = &atom.children()[0] else {
            panic!("expected a fraction");
        };
        let LayoutBox::VBox(frac) = &inner.children()[1] else {
            panic!("expected a fraction");
        };
        frac.clone()
    }

    #[test]
    fn bar_is_on_the_axis() {
        let frac = fraction("\\frac{a}{b}", false);
        assert_eq!(frac.attrs().role, Some(Role::Fraction));
        let rule = &frac.children()[1];
        assert!(matches!(rule.content, LayoutBox::Rule(_)));
        let center = rule.shift + rule.content.height() / 2.0;
        assert!((center - 0.25).abs() < 1e-9);
        assert!((rule.content.height() - 0.04).abs() < 1e-9);
    }

    #[test]
    fn parts_are_centered() {
        let frac = fraction("\\frac{1}{xyz}", false);
        let numer = &frac.children()[2];
        let denom = &frac.children()[0];
        assert_eq!(denom.offset, 0.0);
        assert!(numer.offset > 0.0);
        let total = numer.offset * 2.0 + numer.content.width();
        assert!((total - denom.content.width()).abs() < 1e-9);
    }

    #[test]
    fn parts_are_smaller_in_text_style() {
        let glyphs = all_glyphs("\\frac{a}{b}", false);
        assert!(glyphs.iter().all(|glyph| glyph.scale() == 0.7));
        let glyphs = all_glyphs("\\frac{a}{b}", true);
        assert!(glyphs.iter().all(|glyph| glyph.scale() == 1.0));
        let glyphs = all_glyphs("\\dfrac{a}{b}", false);
        assert!(glyphs.iter().all(|glyph| glyph.scale() == 1.0));
    }

    #[test]
    fn binomials_have_no_bar_but_parentheses() {
        let frac = fraction("\\binom{n}{k}", false);
        assert_eq!(frac.children().len(), 2);
        let chars: String = all_glyphs("\\binom{n}{k}", false)
            .iter()
            .map(|glyph| glyph.ch())
            .collect();
        // The denominator comes first, bottom to top.
        assert_eq!(chars, "(kn)");
    }

    #[test]
    fn display_fractions_sit_higher() {
        let text = fraction("\\frac{a}{b}", false);
        let display = fraction("\\frac{a}{b}", true);
        assert!(display.children()[2].shift > text.children()[2].shift);
        assert!(display.children()[0].shift < text.children()[0].shift);
    }
}
