use box_renderer::boxes::{
    BoxAttrs, HBox, Kern, LayoutBox, Role, Rule, VBox, VItem, VPosition,
};

use super::Layouter;
use super::style::{Ctx, MathStyle};
use crate::ast::Node;

impl Layouter {
    /// Radicals, following rule 11 of the TeXbook's Appendix G.
    pub(super) fn layout_sqrt(&mut self, radicand: &Node, index: Option<&Node>, ctx: Ctx) -> LayoutBox {
        let mut inner = self.layout_node(radicand, ctx.with_style(ctx.style.cramp()));
        let x_height = ctx.metric(|p| p.x_height);
        if inner.height() == 0.0 {
            // An empty radicand still gets a surd of x-height.
            inner = LayoutBox::HBox(HBox::new(
                vec![LayoutBox::Rule(Rule::new(0.0, x_height, 0.0, None)), inner],
                BoxAttrs::default(),
            ));
        }

        let theta = ctx.metric(|p| p.default_rule_thickness);
        let phi = if ctx.style.is_display() { x_height } else { theta };
        let mut clearance = theta + phi / 4.0;
        let inner_total = inner.height() + inner.depth();
        let surd = self.custom_sized_delim(Some('√'), inner_total + clearance + theta, false, &ctx);

        // Spread any excess height of the surd evenly above and below the radicand.
        let surd_total = surd.height() + surd.depth() - theta;
        if surd_total > inner_total + clearance {
            clearance = (clearance + surd_total - inner_total) / 2.0;
        }
        // The top of the surd lines up with the top of the rule.
        let surd_shift = surd.height() - (inner.height() + clearance + theta);
        let surd = LayoutBox::VBox(VBox::shifted(surd, -surd_shift));

        let rule = Rule::horizontal(inner.width(), theta, ctx.color());
        let body = VBox::stack(
            vec![
                VItem::boxed(inner),
                VItem::Kern(clearance),
                VItem::boxed(LayoutBox::Rule(rule)),
                VItem::Kern(theta),
            ],
            VPosition::FirstBaseline,
            BoxAttrs::default(),
        );

        let mut children = Vec::with_capacity(5);
        if let Some(index) = index {
            let index = self.layout_node(index, ctx.with_style(MathStyle::ScriptScript));
            let height = surd.height().max(body.dims().height);
            let depth = surd.depth().max(body.dims().depth);
            let raise = 0.6 * (height - depth);
            let mu = ctx.mu();
            children.push(LayoutBox::Kern(Kern { amount: 5.0 * mu }));
            children.push(LayoutBox::VBox(VBox::shifted(index, raise)));
            children.push(LayoutBox::Kern(Kern { amount: -10.0 * mu }));
        }
        children.push(surd);
        children.push(LayoutBox::VBox(body));
        LayoutBox::HBox(HBox::new(children, BoxAttrs::with_role(Role::Sqrt)))
    }
}

#[cfg(test)]
mod tests {
    use box_renderer::boxes::{HBox, LayoutBox, Role};
    use box_renderer::font::Font;

    use crate::layout::tests::{all_glyphs, single_line};

    fn sqrt(source: &str) -> HBox {
        let line = single_line(source, false);
        let LayoutBox::HBox(atom) = &line.children()[0] else {
            panic!("expected an atom");
        };
        let LayoutBox::HBox(sqrt) = &atom.children()[0] else {
            panic!("expected a radical");
        };
        sqrt.clone()
    }

    #[test]
    fn surd_covers_the_radicand() {
        let sqrt = sqrt("\\sqrt{x}");
        assert_eq!(sqrt.attrs().role, Some(Role::Sqrt));
        let [surd, body] = sqrt.children() else {
            panic!("expected surd and body");
        };
        // The surd and the rule end at the same height.
        assert!((surd.height() - (body.height() - 0.04)).abs() < 1e-9);
        assert!(surd.depth() >= 0.0);
        assert!(body.height() > 0.431);
    }

    #[test]
    fn tall_radicands_get_larger_surds() {
        let small = all_glyphs("\\sqrt{x}", false);
        assert_eq!((small[0].ch(), small[0].font()), ('√', Font::MainRegular));
        let large = all_glyphs("\\sqrt{\\frac{\\frac{a}{b}}{\\frac{c}{d}}}", true);
        assert_ne!(large[0].font(), Font::MainRegular);
    }

    #[test]
    fn indices_are_tiny() {
        let sqrt = sqrt("\\sqrt[3]{x}");
        assert_eq!(sqrt.children().len(), 5);
        let glyphs = sqrt.children()[1].glyphs();
        assert_eq!(glyphs[0].ch(), '3');
        assert_eq!(glyphs[0].scale(), 0.5);
    }

    #[test]
    fn empty_radicands() {
        let sqrt = sqrt("\\sqrt{}");
        assert!(sqrt.dims().height > 0.431);
    }
}
