//! The box-and-glue model.
//!
//! Boxes are built bottom-up. Every constructor computes the dimensions of the new box from the
//! dimensions of its children, and no box can be modified afterwards. All lengths are in em of
//! the base font.

#[cfg(feature = "serde")]
use serde::Serialize;
use strum_macros::IntoStaticStr;

use crate::atom::AtomClass;
use crate::color::Rgb;
use crate::font::{Font, MathSize};
use crate::metrics::{CharMetrics, char_metrics};

#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

/// The structural role of a composite box. It is emitted as an additional CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Role {
    #[strum(serialize = "mfrac")]
    Fraction,
    #[strum(serialize = "sqrt")]
    Sqrt,
    #[strum(serialize = "accent")]
    Accent,
    #[strum(serialize = "delimsizing")]
    Delimiter,
    #[strum(serialize = "msupsub")]
    Scripts,
    #[strum(serialize = "op-limits")]
    Limits,
    #[strum(serialize = "mtable")]
    Array,
    #[strum(serialize = "text")]
    Text,
    #[strum(serialize = "mathbox-error")]
    Error,
    #[strum(serialize = "phantom")]
    Phantom,
}

/// Presentation attributes shared by composite boxes.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BoxAttrs {
    pub class: Option<AtomClass>,
    pub role: Option<Role>,
    pub color: Option<Rgb>,
}

impl BoxAttrs {
    pub const fn with_class(class: AtomClass) -> Self {
        BoxAttrs {
            class: Some(class),
            role: None,
            color: None,
        }
    }

    pub const fn with_role(role: Role) -> Self {
        BoxAttrs {
            class: None,
            role: Some(role),
            color: None,
        }
    }

    pub const fn class(self, class: Option<AtomClass>) -> Self {
        BoxAttrs { class, ..self }
    }

    pub const fn color(self, color: Option<Rgb>) -> Self {
        BoxAttrs { color, ..self }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum LayoutBox {
    Glyph(Glyph),
    HBox(HBox),
    VBox(VBox),
    Glue(Glue),
    Kern(Kern),
    Rule(Rule),
}

impl LayoutBox {
    pub fn dims(&self) -> Dimensions {
        match self {
            LayoutBox::Glyph(glyph) => glyph.dims,
            LayoutBox::HBox(hbox) => hbox.dims,
            LayoutBox::VBox(vbox) => vbox.dims,
            LayoutBox::Glue(glue) => Dimensions {
                width: glue.width,
                ..Default::default()
            },
            LayoutBox::Kern(kern) => Dimensions {
                width: kern.amount,
                ..Default::default()
            },
            LayoutBox::Rule(rule) => rule.dims,
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.dims().width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.dims().height
    }

    #[inline]
    pub fn depth(&self) -> f64 {
        self.dims().depth
    }

    /// Whether this box only contributes horizontal space.
    pub fn is_space(&self) -> bool {
        matches!(self, LayoutBox::Glue(_) | LayoutBox::Kern(_))
    }

    /// Iterate over every glyph in this tree, depth first.
    pub fn glyphs(&self) -> Vec<&Glyph> {
        let mut out = Vec::new();
        self.collect_glyphs(&mut out);
        out
    }

    fn collect_glyphs<'a>(&'a self, out: &mut Vec<&'a Glyph>) {
        match self {
            LayoutBox::Glyph(glyph) => out.push(glyph),
            LayoutBox::HBox(hbox) => {
                for child in &hbox.children {
                    child.collect_glyphs(out);
                }
            }
            LayoutBox::VBox(vbox) => {
                for child in &vbox.children {
                    child.content.collect_glyphs(out);
                }
            }
            LayoutBox::Glue(_) | LayoutBox::Kern(_) | LayoutBox::Rule(_) => {}
        }
    }
}

/// A single character of one font face.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Glyph {
    ch: char,
    font: Font,
    size: MathSize,
    scale: f64,
    metrics: CharMetrics,
    italic_in_width: bool,
    class: Option<AtomClass>,
    color: Option<Rgb>,
    dims: Dimensions,
}

impl Glyph {
    /// Create a glyph from the font tables.
    ///
    /// `scale` converts the design size of the face to em of the base font. If
    /// `italic_in_width` is set, the italic correction is part of the advance width (this is
    /// what math italic letters do). Returns `None` if the face has no such glyph.
    pub fn new(
        ch: char,
        font: Font,
        size: MathSize,
        scale: f64,
        italic_in_width: bool,
    ) -> Option<Glyph> {
        let metrics = char_metrics(font, ch)?;
        Some(Glyph::with_metrics(
            ch,
            font,
            size,
            scale,
            metrics,
            italic_in_width,
        ))
    }

    /// Create a glyph with explicitly given metrics, e.g. [`CharMetrics::NOTDEF`].
    pub fn with_metrics(
        ch: char,
        font: Font,
        size: MathSize,
        scale: f64,
        metrics: CharMetrics,
        italic_in_width: bool,
    ) -> Glyph {
        let italic = if italic_in_width { metrics.italic } else { 0.0 };
        let dims = Dimensions {
            width: (metrics.width + italic) * scale,
            height: metrics.height * scale,
            depth: metrics.depth * scale,
        };
        Glyph {
            ch,
            font,
            size,
            scale,
            metrics,
            italic_in_width,
            class: None,
            color: None,
            dims,
        }
    }

    /// The same glyph tagged with an atom class and a color.
    pub fn styled(self, class: Option<AtomClass>, color: Option<Rgb>) -> Glyph {
        Glyph {
            class,
            color,
            ..self
        }
    }

    #[inline]
    pub fn ch(&self) -> char {
        self.ch
    }

    #[inline]
    pub fn font(&self) -> Font {
        self.font
    }

    #[inline]
    pub fn size(&self) -> MathSize {
        self.size
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[inline]
    pub fn class(&self) -> Option<AtomClass> {
        self.class
    }

    #[inline]
    pub fn color(&self) -> Option<Rgb> {
        self.color
    }

    #[inline]
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Italic correction in em of the base font.
    #[inline]
    pub fn italic(&self) -> f64 {
        self.metrics.italic * self.scale
    }

    /// Skew (accent placement offset) in em of the base font.
    #[inline]
    pub fn skew(&self) -> f64 {
        self.metrics.skew * self.scale
    }

    /// Italic correction that is rendered as a right margin, in em of the glyph's own size.
    pub(crate) fn margin_right(&self) -> f64 {
        if self.italic_in_width {
            self.metrics.italic
        } else {
            0.0
        }
    }
}

/// A horizontal list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct HBox {
    children: Vec<LayoutBox>,
    attrs: BoxAttrs,
    dims: Dimensions,
}

impl HBox {
    pub fn new(children: Vec<LayoutBox>, attrs: BoxAttrs) -> HBox {
        let mut dims = Dimensions::default();
        for child in &children {
            let d = child.dims();
            dims.width += d.width;
            dims.height = dims.height.max(d.height);
            dims.depth = dims.depth.max(d.depth);
        }
        HBox {
            children,
            attrs,
            dims,
        }
    }

    /// All glyphs in the box, in order.
    pub fn glyphs(&self) -> Vec<&Glyph> {
        let mut out = Vec::new();
        for child in &self.children {
            child.collect_glyphs(&mut out);
        }
        out
    }

    #[inline]
    pub fn children(&self) -> &[LayoutBox] {
        &self.children
    }

    #[inline]
    pub fn attrs(&self) -> BoxAttrs {
        self.attrs
    }

    #[inline]
    pub fn dims(&self) -> Dimensions {
        self.dims
    }
}

/// A child of a [`VBox`] together with its position.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct VChild {
    pub content: LayoutBox,
    /// Distance the child's baseline is raised above the baseline of the vbox.
    pub shift: f64,
    /// Horizontal offset of the child's left edge.
    pub offset: f64,
}

/// An item of a vertical stack, listed from bottom to top.
#[derive(Debug, Clone, PartialEq)]
pub enum VItem {
    Box { content: LayoutBox, offset: f64 },
    Kern(f64),
}

impl VItem {
    #[inline]
    pub fn boxed(content: LayoutBox) -> VItem {
        VItem::Box {
            content,
            offset: 0.0,
        }
    }
}

/// How a vertical stack is anchored to the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VPosition {
    /// The top of the stack is at the given height above the baseline.
    Top(f64),
    /// The bottom of the stack is at the given depth below the baseline.
    Bottom(f64),
    /// The baseline of the first (lowest) item is the baseline of the stack.
    FirstBaseline,
}

/// A vertical list whose children are placed at explicit offsets.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct VBox {
    children: Vec<VChild>,
    attrs: BoxAttrs,
    dims: Dimensions,
}

impl VBox {
    /// Create a vbox from children with known positions.
    pub fn from_children(children: Vec<VChild>, attrs: BoxAttrs) -> VBox {
        let mut dims = if children.is_empty() {
            Dimensions::default()
        } else {
            Dimensions {
                width: 0.0,
                height: f64::NEG_INFINITY,
                depth: f64::NEG_INFINITY,
            }
        };
        for child in &children {
            let d = child.content.dims();
            dims.width = dims.width.max(child.offset + d.width);
            dims.height = dims.height.max(child.shift + d.height);
            dims.depth = dims.depth.max(d.depth - child.shift);
        }
        VBox {
            children,
            attrs,
            dims,
        }
    }

    /// Stack `items` (bottom to top) on top of each other, anchored by `position`.
    pub fn stack(items: Vec<VItem>, position: VPosition, attrs: BoxAttrs) -> VBox {
        // `bottom` is the vertical coordinate (positive is up) of the bottom edge of the stack.
        let bottom = match position {
            VPosition::Top(top) => {
                let total: f64 = items
                    .iter()
                    .map(|item| match item {
                        VItem::Kern(size) => *size,
                        VItem::Box { content, .. } => content.height() + content.depth(),
                    })
                    .sum();
                top - total
            }
            VPosition::Bottom(depth) => -depth,
            VPosition::FirstBaseline => -first_depth(&items),
        };

        let mut current = bottom;
        let mut children = Vec::with_capacity(items.len());
        for item in items {
            match item {
                VItem::Kern(size) => current += size,
                VItem::Box { content, offset } => {
                    let (height, depth) = (content.height(), content.depth());
                    children.push(VChild {
                        shift: current + depth,
                        offset,
                        content,
                    });
                    current += height + depth;
                }
            }
        }
        // Kerns at either end of the stack count towards its size.
        let mut vbox = VBox::from_children(children, attrs);
        vbox.dims.height = vbox.dims.height.max(current);
        vbox.dims.depth = vbox.dims.depth.max(-bottom);
        vbox
    }

    /// Raise `content` by `shift` (lower it for negative values).
    pub fn shifted(content: LayoutBox, shift: f64) -> VBox {
        VBox::from_children(
            vec![VChild {
                content,
                shift,
                offset: 0.0,
            }],
            BoxAttrs::default(),
        )
    }

    #[inline]
    pub fn children(&self) -> &[VChild] {
        &self.children
    }

    #[inline]
    pub fn attrs(&self) -> BoxAttrs {
        self.attrs
    }

    #[inline]
    pub fn dims(&self) -> Dimensions {
        self.dims
    }
}

/// Distance from the bottom of the stack to the baseline of its first box.
fn first_depth(items: &[VItem]) -> f64 {
    let mut below = 0.0;
    for item in items {
        match item {
            VItem::Kern(size) => below += size,
            VItem::Box { content, .. } => return below + content.depth(),
        }
    }
    below
}

/// Flexible horizontal space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Glue {
    pub width: f64,
    pub stretch: f64,
    pub shrink: f64,
}

/// Fixed horizontal space, possibly negative.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Kern {
    pub amount: f64,
}

/// A solid rectangle, e.g. a fraction bar.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Rule {
    dims: Dimensions,
    color: Option<Rgb>,
}

impl Rule {
    pub fn new(width: f64, height: f64, depth: f64, color: Option<Rgb>) -> Rule {
        Rule {
            dims: Dimensions {
                width,
                height,
                depth,
            },
            color,
        }
    }

    /// A rule of the given thickness, sitting on the baseline.
    pub fn horizontal(width: f64, thickness: f64, color: Option<Rgb>) -> Rule {
        Rule::new(width, thickness, 0.0, color)
    }

    #[inline]
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    #[inline]
    pub fn color(&self) -> Option<Rgb> {
        self.color
    }
}
