use box_renderer::boxes::{BoxAttrs, HBox, Kern, LayoutBox, Role, VBox, VChild};

use super::Layouter;
use super::style::{Ctx, MathStyle};
use crate::ast::Node;

/// `\scriptspace`
const SCRIPT_SPACE: f64 = 0.05;

impl Layouter {
    pub(super) fn layout_supsub(
        &mut self,
        base: &Node,
        sup: Option<&Node>,
        sub: Option<&Node>,
        ctx: Ctx,
    ) -> LayoutBox {
        if let Node::Op { op, limits } = base {
            return self.layout_op(op, *limits, sup, sub, ctx);
        }
        let base_box = self.layout_atom(base, ctx);
        let italic = match &base_box {
            LayoutBox::Glyph(glyph) => glyph.italic(),
            _ => 0.0,
        };
        self.attach_scripts(base_box, italic, base.is_character_box(), sup, sub, ctx)
    }

    /// Place scripts to the right of `base`, following rule 18 of the TeXbook's Appendix G.
    ///
    /// The subscript is moved left by `italic`. Bases that are single characters are not
    /// taken into account for the minimum script shifts.
    pub(super) fn attach_scripts(
        &mut self,
        base: LayoutBox,
        italic: f64,
        character_box: bool,
        sup: Option<&Node>,
        sub: Option<&Node>,
        ctx: Ctx,
    ) -> LayoutBox {
        let sup_ctx = ctx.with_style(ctx.style.sup());
        let sub_ctx = ctx.with_style(ctx.style.sub());
        let sup = sup.map(|node| self.layout_node(node, sup_ctx));
        let sub = sub.map(|node| self.layout_node(node, sub_ctx));

        let (mut sup_shift, mut sub_shift) = if character_box {
            (0.0, 0.0)
        } else {
            (
                base.height() - sup_ctx.metric(|p| p.sup_drop),
                base.depth() + sub_ctx.metric(|p| p.sub_drop),
            )
        };
        let x_height = ctx.metric(|p| p.x_height);
        let min_sup_shift = match ctx.style {
            MathStyle::Display => ctx.metric(|p| p.sup1),
            style if style.is_cramped() => ctx.metric(|p| p.sup3),
            _ => ctx.metric(|p| p.sup2),
        };

        let children = match (sup, sub) {
            (Some(sup), Some(sub)) => {
                sup_shift = sup_shift
                    .max(min_sup_shift)
                    .max(sup.depth() + 0.25 * x_height);
                sub_shift = sub_shift.max(ctx.metric(|p| p.sub2));
                let gap_min = 4.0 * ctx.metric(|p| p.default_rule_thickness);
                let gap = (sup_shift - sup.depth()) - (sub.height() - sub_shift);
                if gap < gap_min {
                    sub_shift = gap_min - (sup_shift - sup.depth()) + sub.height();
                    let psi = 0.8 * x_height - (sup_shift - sup.depth());
                    if psi > 0.0 {
                        sup_shift += psi;
                        sub_shift -= psi;
                    }
                }
                vec![
                    VChild {
                        content: sub,
                        shift: -sub_shift,
                        offset: -italic,
                    },
                    VChild {
                        content: sup,
                        shift: sup_shift,
                        offset: 0.0,
                    },
                ]
            }
            (None, Some(sub)) => {
                sub_shift = sub_shift
                    .max(ctx.metric(|p| p.sub1))
                    .max(sub.height() - 0.8 * x_height);
                vec![VChild {
                    content: sub,
                    shift: -sub_shift,
                    offset: -italic,
                }]
            }
            (Some(sup), None) => {
                sup_shift = sup_shift
                    .max(min_sup_shift)
                    .max(sup.depth() + 0.25 * x_height);
                vec![VChild {
                    content: sup,
                    shift: sup_shift,
                    offset: 0.0,
                }]
            }
            (None, None) => return base,
        };

        let scripts = VBox::from_children(children, BoxAttrs::with_role(Role::Scripts));
        LayoutBox::HBox(HBox::new(
            vec![
                base,
                LayoutBox::VBox(scripts),
                LayoutBox::Kern(Kern {
                    amount: SCRIPT_SPACE,
                }),
            ],
            BoxAttrs::default(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use box_renderer::boxes::{HBox, LayoutBox};

    use crate::layout::tests::single_line;

    /// The scripts vbox of an atom with scripts.
    fn scripts(line: &HBox) -> Vec<(f64, f64)> {
        let LayoutBox::HBox(atom) = &line.children()[0] else {
            panic!("expected an atom");
        };
        let LayoutBox::HBox(inner) = &atom.children()[0] else {
            panic!("expected the scripts box");
        };
        let LayoutBox::VBox(scripts) = &inner.children()[1] else {
            panic!("expected scripts");
        };
        scripts
            .children()
            .iter()
            .map(|child| (child.shift, child.offset))
            .collect()
    }

    #[test]
    fn superscripts_are_raised() {
        let line = single_line("x^2", false);
        let shifts = scripts(&line);
        assert_eq!(shifts.len(), 1);
        // sup2 of the text size.
        assert!((shifts[0].0 - 0.363).abs() < 1e-9);
    }

    #[test]
    fn display_superscripts_are_raised_more() {
        let line = single_line("x^2", true);
        assert!((scripts(&line)[0].0 - 0.413).abs() < 1e-9);
    }

    #[test]
    fn subscripts_are_lowered() {
        let line = single_line("x_2", false);
        let shifts = scripts(&line);
        assert!(shifts[0].0 <= -0.15);
        // `x` has no italic correction.
        assert_eq!(shifts[0].1, 0.0);
        let line = single_line("f_2", false);
        assert!(scripts(&line)[0].1 < 0.0);
    }

    #[test]
    fn both_scripts_keep_a_gap() {
        let line = single_line("x^2_2", false);
        let shifts = scripts(&line);
        assert_eq!(shifts.len(), 2);
        let (sub, sup) = (shifts[0].0, shifts[1].0);
        assert!(sup > 0.0 && sub < 0.0);
        assert!(sup - sub > 4.0 * 0.04);
    }

    #[test]
    fn scripts_are_smaller() {
        let line = single_line("x^2", false);
        let glyphs = line.children()[0].glyphs();
        assert_eq!(glyphs[0].scale(), 1.0);
        assert_eq!(glyphs[1].scale(), 0.7);
        let line = single_line("x^{2^2}", false);
        let glyphs = line.children()[0].glyphs();
        assert_eq!(glyphs[2].scale(), 0.5);
    }
}
