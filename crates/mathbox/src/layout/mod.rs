//! Turning the syntax tree into boxes.
//!
//! Layout follows the TeXbook's Appendix G: every node becomes a box, and the boxes of a list are
//! joined with the inter-atom glue of the spacing tables. Lengths are in em of the base font
//! throughout, so a box never needs to know the size of its parent.

mod accent;
mod array;
mod delimiter;
mod frac;
mod op;
mod spacing;
mod sqrt;
pub(crate) mod style;
mod supsub;

use box_renderer::atom::AtomClass;
use box_renderer::boxes::{BoxAttrs, Glyph, HBox, Kern, LayoutBox, Role};
use box_renderer::color::Rgb;
use box_renderer::font::Font;
use box_renderer::metrics::{CharMetrics, char_metrics};
use rustc_hash::FxHashSet;

use crate::ast::{MathFont, Node, TextFont};
use crate::error::Warning;
use crate::specifications::{Length, Unit};
use crate::symbols::Symbol;

use self::spacing::space_between;
use self::style::{Ctx, MathStyle};

/// Lay out a whole formula. The result is split into lines after top-level relations and
/// binary operators.
pub(crate) fn layout(nodes: &[Node], display: bool, error_color: Rgb) -> (Vec<HBox>, Vec<Warning>) {
    let style = if display {
        MathStyle::Display
    } else {
        MathStyle::Text
    };
    let mut layouter = Layouter::new(error_color);
    let boxes = layouter.layout_list(nodes, Ctx::new(style));
    (split_lines(boxes), layouter.warnings)
}

pub(crate) struct Layouter {
    error_color: Rgb,
    warnings: Vec<Warning>,
    missing_glyphs: FxHashSet<(char, Font)>,
}

/// An entry of a math list, before the inter-atom glue is inserted.
enum Item {
    Atom {
        content: LayoutBox,
        class: AtomClass,
        ctx: Ctx,
    },
    /// Explicit space like `\,`. It replaces the glue from the spacing table.
    Space(LayoutBox),
    /// A `\middle` delimiter; its size depends on the rest of the list.
    Middle { delim: Option<char>, ctx: Ctx },
    /// A box that takes no part in inter-atom spacing.
    Fixed(LayoutBox),
}

impl Layouter {
    pub(crate) fn new(error_color: Rgb) -> Self {
        Layouter {
            error_color,
            warnings: Vec::new(),
            missing_glyphs: FxHashSet::default(),
        }
    }

    /// Lay out a math list, including the glue between its atoms.
    pub(crate) fn layout_list(&mut self, nodes: &[Node], ctx: Ctx) -> Vec<LayoutBox> {
        let mut items = Vec::with_capacity(nodes.len());
        self.collect_items(nodes, ctx, &mut items);
        let (height, depth) = items_extent(&items);
        self.resolve_middles(&mut items, height, depth);
        space_items(items, (None, None))
    }

    fn hbox(&mut self, nodes: &[Node], ctx: Ctx) -> HBox {
        HBox::new(self.layout_list(nodes, ctx), BoxAttrs::default())
    }

    /// Lay out a single node as one box, e.g. the argument of a command.
    fn layout_node(&mut self, node: &Node, ctx: Ctx) -> LayoutBox {
        match node {
            Node::Group(body) => LayoutBox::HBox(self.hbox(body, ctx)),
            _ => LayoutBox::HBox(self.hbox(std::slice::from_ref(node), ctx)),
        }
    }

    fn collect_items(&mut self, nodes: &[Node], ctx: Ctx, items: &mut Vec<Item>) {
        for node in nodes {
            match node {
                Node::Style { style, body } => {
                    self.collect_items(body, ctx.with_style(MathStyle::from_kind(*style)), items);
                }
                Node::Sizing { size, body } => {
                    self.collect_items(body, ctx.with_size(*size), items);
                }
                Node::Color { color, body } => {
                    self.collect_items(body, ctx.with_color(*color), items);
                }
                Node::FontSwitch { font, body } => {
                    self.collect_items(body, ctx.with_font(*font), items);
                }
                Node::Spacing(length) => items.push(Item::Space(LayoutBox::Kern(Kern {
                    amount: length_to_em(*length, &ctx),
                }))),
                Node::Middle(delim) => items.push(Item::Middle { delim: *delim, ctx }),
                _ => {
                    let class = node.class().unwrap_or_default();
                    let content = self.layout_atom(node, ctx);
                    items.push(Item::Atom {
                        content: tag(content, class),
                        class,
                        ctx,
                    });
                }
            }
        }
    }

    fn resolve_middles(&mut self, items: &mut [Item], height: f64, depth: f64) {
        for item in items.iter_mut() {
            if let Item::Middle { delim, ctx } = *item {
                let content = self.left_right_delim(delim, height, depth, &ctx);
                *item = Item::Fixed(content);
            }
        }
    }

    /// The box of an atom, without its class.
    fn layout_atom(&mut self, node: &Node, ctx: Ctx) -> LayoutBox {
        match node {
            Node::Symbol(symbol) => LayoutBox::Glyph(self.symbol(symbol, &ctx)),
            Node::Group(body) | Node::Class { body, .. } => LayoutBox::HBox(self.hbox(body, ctx)),
            Node::SupSub { base, sup, sub } => {
                self.layout_supsub(base, sup.as_deref(), sub.as_deref(), ctx)
            }
            Node::Fraction {
                numer,
                denom,
                has_bar,
                left,
                right,
                style,
            } => self.layout_fraction(numer, denom, *has_bar, (*left, *right), *style, ctx),
            Node::Sqrt { radicand, index } => self.layout_sqrt(radicand, index.as_deref(), ctx),
            Node::Accent { kind, base } => self.layout_accent(*kind, base, ctx),
            Node::Array(array) => self.layout_array(array, ctx),
            Node::Op { op, limits } => self.layout_op(op, *limits, None, None, ctx),
            Node::LeftRight { left, body, right } => {
                self.layout_left_right(*left, body, *right, ctx)
            }
            Node::DelimSized { delim, size, .. } => self.sized_delim(*delim, *size, &ctx),
            Node::Font { font, body } => LayoutBox::HBox(self.hbox(body, ctx.with_font(*font))),
            Node::Text { font, text } => self.layout_text(*font, text, &ctx),
            Node::Phantom(body) => LayoutBox::HBox(HBox::new(
                self.layout_list(body, ctx.phantom()),
                BoxAttrs::with_role(Role::Phantom),
            )),
            Node::Error(name) => self.layout_error(name, &ctx),
            Node::Style { .. }
            | Node::Sizing { .. }
            | Node::FontSwitch { .. }
            | Node::Color { .. }
            | Node::Spacing(_)
            | Node::Middle(_) => LayoutBox::HBox(self.hbox(std::slice::from_ref(node), ctx)),
        }
    }

    fn layout_left_right(
        &mut self,
        left: Option<char>,
        body: &[Node],
        right: Option<char>,
        ctx: Ctx,
    ) -> LayoutBox {
        let mut items = Vec::with_capacity(body.len());
        self.collect_items(body, ctx, &mut items);
        let (height, depth) = items_extent(&items);
        self.resolve_middles(&mut items, height, depth);

        let mut children = Vec::with_capacity(items.len() + 2);
        let open = self.left_right_delim(left, height, depth, &ctx);
        children.push(tag(open, AtomClass::Open));
        children.extend(space_items(
            items,
            (Some(AtomClass::Open), Some(AtomClass::Close)),
        ));
        let close = self.left_right_delim(right, height, depth, &ctx);
        children.push(tag(close, AtomClass::Close));
        LayoutBox::HBox(HBox::new(children, BoxAttrs::default()))
    }

    fn symbol(&mut self, symbol: &Symbol, ctx: &Ctx) -> Glyph {
        let font = ctx
            .font
            .and_then(|font| font_override(font, symbol.ch))
            .unwrap_or(symbol.font);
        self.glyph(symbol.ch, font, ctx).styled(None, ctx.color())
    }

    /// Look up a glyph, falling back to a placeholder box if the font has no such character.
    ///
    /// The italic correction is part of the width; scripts that hang below it are moved back.
    fn glyph(&mut self, ch: char, font: Font, ctx: &Ctx) -> Glyph {
        match Glyph::new(ch, font, ctx.math_size, ctx.scale, true) {
            Some(glyph) => glyph,
            None => {
                if self.missing_glyphs.insert((ch, font)) {
                    log::warn!("no metrics for {ch:?} in {}", font.css_class());
                    self.warnings.push(Warning::MetricsFallback { ch, font });
                }
                Glyph::with_metrics(
                    ch,
                    font,
                    ctx.math_size,
                    ctx.scale,
                    CharMetrics::NOTDEF,
                    false,
                )
            }
        }
    }

    /// Glyphs of `text` in `font`, or in the regular face where `font` lacks a character.
    fn text_glyphs(&mut self, text: &str, font: Font, ctx: &Ctx) -> Vec<LayoutBox> {
        text.chars()
            .map(|ch| {
                // Plain spaces would collapse in HTML.
                let ch = if ch.is_whitespace() { '\u{A0}' } else { ch };
                let face = if char_metrics(font, ch).is_some() {
                    font
                } else {
                    Font::MainRegular
                };
                LayoutBox::Glyph(self.glyph(ch, face, ctx).styled(None, ctx.color()))
            })
            .collect()
    }

    fn layout_text(&mut self, font: TextFont, text: &str, ctx: &Ctx) -> LayoutBox {
        let font = match font {
            TextFont::Roman => Font::MainRegular,
            TextFont::Bold => Font::MainBold,
            TextFont::Italic => Font::MathItalic,
        };
        let children = self.text_glyphs(text, font, ctx);
        LayoutBox::HBox(HBox::new(children, BoxAttrs::with_role(Role::Text)))
    }

    fn layout_error(&mut self, name: &str, ctx: &Ctx) -> LayoutBox {
        let ctx = ctx.with_color(self.error_color);
        let children = self.text_glyphs(name, Font::MainRegular, &ctx);
        LayoutBox::HBox(HBox::new(children, BoxAttrs::with_role(Role::Error)))
    }
}

/// The face that a font command selects for `ch`, if that face has the character.
fn font_override(font: MathFont, ch: char) -> Option<Font> {
    if !ch.is_alphanumeric() {
        return None;
    }
    let face = match font {
        MathFont::Roman => Font::MainRegular,
        MathFont::Italic => Font::MathItalic,
        MathFont::Bold | MathFont::BoldSymbol => Font::MainBold,
        MathFont::Blackboard => Font::AmsRegular,
        MathFont::Calligraphic => Font::CaligraphicRegular,
    };
    char_metrics(face, ch).is_some().then_some(face)
}

/// Mark a box with its atom class.
fn tag(content: LayoutBox, class: AtomClass) -> LayoutBox {
    match content {
        LayoutBox::Glyph(glyph) => {
            let color = glyph.color();
            LayoutBox::Glyph(glyph.styled(Some(class), color))
        }
        LayoutBox::HBox(hbox) if hbox.attrs().class == Some(class) => LayoutBox::HBox(hbox),
        other => LayoutBox::HBox(HBox::new(vec![other], BoxAttrs::with_class(class))),
    }
}

fn box_class(content: &LayoutBox) -> Option<AtomClass> {
    match content {
        LayoutBox::Glyph(glyph) => glyph.class(),
        LayoutBox::HBox(hbox) => hbox.attrs().class,
        LayoutBox::VBox(vbox) => vbox.attrs().class,
        LayoutBox::Glue(_) | LayoutBox::Kern(_) | LayoutBox::Rule(_) => None,
    }
}

/// Height and depth of the atoms of a list.
fn items_extent(items: &[Item]) -> (f64, f64) {
    items
        .iter()
        .filter_map(|item| match item {
            Item::Atom { content, .. } => Some(content.dims()),
            _ => None,
        })
        .fold((0.0f64, 0.0f64), |(height, depth), dims| {
            (height.max(dims.height), depth.max(dims.depth))
        })
}

/// Insert the glue between adjacent atoms. `surrounding` are the classes of the atoms just
/// before and after the list, if any.
fn space_items(
    items: Vec<Item>,
    surrounding: (Option<AtomClass>, Option<AtomClass>),
) -> Vec<LayoutBox> {
    let mut out = Vec::with_capacity(items.len() * 2);
    let mut prev = surrounding.0;
    let mut explicit = false;
    let mut last_ctx = None;
    for item in items {
        match item {
            Item::Atom {
                content,
                class,
                ctx,
            } => {
                if !explicit
                    && let Some(left) = prev
                    && let Some(space) = space_between(left, class, ctx.style.is_tight())
                {
                    out.push(LayoutBox::Glue(space.glue(&ctx)));
                }
                out.push(content);
                prev = Some(class);
                explicit = false;
                last_ctx = Some(ctx);
            }
            Item::Space(content) => {
                out.push(content);
                explicit = true;
            }
            Item::Fixed(content) => out.push(content),
            Item::Middle { .. } => {}
        }
    }
    if !explicit
        && let (Some(left), Some(right), Some(ctx)) = (prev, surrounding.1, last_ctx)
        && let Some(space) = space_between(left, right, ctx.style.is_tight())
    {
        out.push(LayoutBox::Glue(space.glue(&ctx)));
    }
    out
}

/// Break a top-level list after every relation and binary operator.
fn split_lines(boxes: Vec<LayoutBox>) -> Vec<HBox> {
    let mut lines = Vec::new();
    let mut current = Vec::new();
    let mut break_pending = false;
    for content in boxes {
        if break_pending && !content.is_space() {
            lines.push(HBox::new(std::mem::take(&mut current), BoxAttrs::default()));
            break_pending = false;
        }
        if matches!(
            box_class(&content),
            Some(AtomClass::Bin | AtomClass::Rel)
        ) {
            break_pending = true;
        }
        current.push(content);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(HBox::new(current, BoxAttrs::default()));
    }
    lines
}

/// Convert a length to em of the base font.
pub(crate) fn length_to_em(length: Length, ctx: &Ctx) -> f64 {
    match length.unit {
        Unit::Mu => length.value * ctx.mu(),
        Unit::Em | Unit::Ex => {
            // Font-relative units refer to the text size, even inside scripts.
            let unit_ctx = if ctx.style.is_tight() {
                ctx.with_style(ctx.style.text())
            } else {
                *ctx
            };
            let per_unit = if length.unit == Unit::Em {
                unit_ctx.params.quad
            } else {
                unit_ctx.params.x_height
            };
            length.value * per_unit * unit_ctx.scale
        }
        unit => {
            let pt_per_em = ctx.params.pt_per_em;
            length.value * unit.pt_per_unit().unwrap_or(0.0) / pt_per_em
        }
    }
}

#[cfg(test)]
mod tests {
    use box_renderer::boxes::LayoutBox;
    use box_renderer::font::Font;

    use super::*;
    use crate::lexer::Lexer;
    use crate::macros::MacroExpander;
    use crate::parser::Parser;

    fn parse(source: &str) -> Vec<Node> {
        let expander = MacroExpander::new(Lexer::new(source), None, 1000);
        let (nodes, _) = Parser::new(expander).parse().unwrap();
        nodes
    }

    pub(super) fn lay_out(source: &str, display: bool) -> (Vec<HBox>, Vec<Warning>) {
        layout(&parse(source), display, Rgb::new(0xcc, 0, 0))
    }

    pub(super) fn single_line(source: &str, display: bool) -> HBox {
        let (mut lines, _) = lay_out(source, display);
        assert_eq!(lines.len(), 1, "{source} was split into lines");
        lines.remove(0)
    }

    pub(super) fn all_glyphs(source: &str, display: bool) -> Vec<Glyph> {
        single_line(source, display).glyphs().into_iter().cloned().collect()
    }

    fn glues(line: &HBox) -> Vec<f64> {
        line.children()
            .iter()
            .filter_map(|child| match child {
                LayoutBox::Glue(glue) => Some(glue.width),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn binary_operators_get_medium_space() {
        // Top-level lists are broken after `+`, so look inside of a group.
        let line = single_line("{a+b}", false);
        let LayoutBox::HBox(group) = &line.children()[0] else {
            panic!("expected a group");
        };
        let LayoutBox::HBox(inner) = &group.children()[0] else {
            panic!("expected the group contents");
        };
        let widths = glues(inner);
        assert_eq!(widths.len(), 2);
        assert!((widths[0] - 4.0 / 18.0).abs() < 1e-9);
    }

    #[test]
    fn lines_break_after_relations() {
        let (lines, _) = lay_out("a=b+c", false);
        assert_eq!(lines.len(), 3);
        // The glue after `=` stays on the first line.
        assert!(matches!(
            lines[0].children().last(),
            Some(LayoutBox::Glue(_))
        ));
        let (lines, _) = lay_out("a=", false);
        assert_eq!(lines.len(), 1);
        let (lines, _) = lay_out("x", true);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn explicit_space_replaces_glue() {
        let line = single_line("{a\\,+b}", false);
        let LayoutBox::HBox(group) = &line.children()[0] else {
            panic!("expected a group");
        };
        let LayoutBox::HBox(inner) = &group.children()[0] else {
            panic!("expected the group contents");
        };
        // Only the glue after `+` remains.
        assert_eq!(glues(inner).len(), 1);
        assert!(matches!(inner.children()[1], LayoutBox::Kern(_)));
    }

    #[test]
    fn font_switches_keep_spacing() {
        let group_glues = |source: &str| {
            let line = single_line(source, false);
            let LayoutBox::HBox(group) = &line.children()[0] else {
                panic!("expected a group");
            };
            let LayoutBox::HBox(inner) = &group.children()[0] else {
                panic!("expected the group contents");
            };
            glues(inner).len()
        };
        // A leading `-` is unary with or without a switch.
        assert_eq!(group_glues("{-x}"), 0);
        assert_eq!(group_glues("{\\rm -x}"), 0);
        assert_eq!(group_glues("{a = b}"), 2);
        assert_eq!(group_glues("{a \\rm = b}"), 2);

        let (lines, _) = lay_out("a \\bf = b", false);
        assert_eq!(lines.len(), 2);
        let glyphs = all_glyphs("x \\rm x", false);
        assert_eq!(glyphs[0].font(), Font::MathItalic);
        assert_eq!(glyphs[1].font(), Font::MainRegular);
    }

    #[test]
    fn scripts_use_tight_spacing() {
        let line = single_line("x^{a+b}", false);
        let glue_count = line
            .children()
            .iter()
            .map(|child| format!("{child:?}").matches("Glue(").count())
            .sum::<usize>();
        assert_eq!(glue_count, 0);
    }

    #[test]
    fn letters_are_math_italic() {
        let glyphs = all_glyphs("x2", false);
        assert_eq!(glyphs[0].font(), Font::MathItalic);
        assert_eq!(glyphs[1].font(), Font::MainRegular);
        assert_eq!(glyphs[0].class(), Some(AtomClass::Ord));
    }

    #[test]
    fn font_commands() {
        let glyphs = all_glyphs("\\mathrm{x}\\mathbf{2}\\mathbb{R}\\mathcal{L}\\mathbb{x}", false);
        let fonts: Vec<Font> = glyphs.iter().map(Glyph::font).collect();
        assert_eq!(
            fonts,
            [
                Font::MainRegular,
                Font::MainBold,
                Font::AmsRegular,
                Font::CaligraphicRegular,
                Font::MathItalic,
            ]
        );
    }

    #[test]
    fn missing_glyphs_are_reported_once() {
        let (lines, warnings) = lay_out("日日", false);
        assert_eq!(lines.len(), 1);
        assert_eq!(
            warnings,
            [Warning::MetricsFallback {
                ch: '日',
                font: Font::MainRegular
            }]
        );
        let glyphs = all_glyphs("日", false);
        assert_eq!(glyphs[0].dims().width, 0.5);
    }

    #[test]
    fn text_keeps_spaces() {
        let glyphs = all_glyphs("\\text{a b}", false);
        let chars: String = glyphs.iter().map(Glyph::ch).collect();
        assert_eq!(chars, "a\u{A0}b");
        assert!(glyphs.iter().all(|glyph| glyph.font() == Font::MainRegular));
    }

    #[test]
    fn colors_reach_glyphs() {
        let glyphs = all_glyphs("\\color{red}{x}", false);
        assert_eq!(glyphs[0].color(), Rgb::parse("red"));
        let glyphs = all_glyphs("\\phantom{\\color{red}x}", false);
        assert_eq!(glyphs[0].color(), None);
    }

    #[test]
    fn unknown_commands_are_red() {
        let glyphs = all_glyphs("\\foo", false);
        let chars: String = glyphs.iter().map(Glyph::ch).collect();
        assert_eq!(chars, "\\foo");
        assert!(
            glyphs
                .iter()
                .all(|glyph| glyph.color() == Some(Rgb::new(0xcc, 0, 0)))
        );
    }

    #[test]
    fn sizes_scale_glyphs() {
        let glyphs = all_glyphs("\\Large x", false);
        assert_eq!(glyphs[0].scale(), 1.44);
        let glyphs = all_glyphs("\\scriptstyle x", false);
        assert_eq!(glyphs[0].scale(), 0.7);
    }

    #[test]
    fn lengths() {
        let ctx = Ctx::new(MathStyle::Text);
        let em = |value, unit| length_to_em(Length { value, unit }, &ctx);
        assert!((em(18.0, Unit::Mu) - 1.0).abs() < 1e-9);
        assert!((em(2.0, Unit::Em) - 2.0).abs() < 1e-9);
        assert!((em(10.0, Unit::Pt) - 1.0).abs() < 1e-9);
        assert!((em(1.0, Unit::Ex) - 0.431).abs() < 1e-9);
        let script = ctx.with_style(MathStyle::Script);
        let em = length_to_em(
            Length {
                value: 1.0,
                unit: Unit::Em,
            },
            &script,
        );
        assert!((em - 1.0).abs() < 1e-9);
    }
}
