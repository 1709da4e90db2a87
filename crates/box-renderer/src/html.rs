//! Serialization of a finished box tree to HTML.
//!
//! Every length is written in em of the base font. Only glyph elements change the font size,
//! and they contain no positioned children, so the positions of all other elements can be
//! expressed in the same unit.

use std::fmt::{self, Write};

use crate::boxes::{BoxAttrs, Glyph, HBox, LayoutBox, Role, Rule, VBox};
use crate::fmt::{new_line_and_indent, push_em};
use crate::html_utils::escape_html_content;

pub struct HtmlEmitter {
    s: String,
    pretty: bool,
}

impl HtmlEmitter {
    pub fn new(pretty: bool) -> Self {
        Self::with_buffer(String::new(), pretty)
    }

    /// Create an emitter that appends to an existing buffer.
    pub fn with_buffer(s: String, pretty: bool) -> Self {
        HtmlEmitter { s, pretty }
    }

    pub fn into_inner(self) -> String {
        self.s
    }

    /// Emit a complete formula.
    ///
    /// Each line in `lines` becomes one `base` element with its own strut, so that a browser
    /// may break the formula between them.
    pub fn emit_math(&mut self, lines: &[HBox], display: bool) -> fmt::Result {
        let base_indent = usize::from(self.pretty);
        if display {
            self.s.push_str(r#"<span class="mathbox-display">"#);
        }
        self.s.push_str(r#"<span class="mathbox">"#);
        new_line_and_indent(&mut self.s, base_indent);
        self.s.push_str(r#"<span class="mathbox-html" aria-hidden="true">"#);
        let line_indent = child_indent(base_indent);
        for line in lines {
            new_line_and_indent(&mut self.s, line_indent);
            self.s.push_str(r#"<span class="base">"#);
            let dims = line.dims();
            new_line_and_indent(&mut self.s, child_indent(line_indent));
            self.s.push_str(r#"<span class="strut" style="height:"#);
            push_em(&mut self.s, dims.height + dims.depth);
            self.s.push_str(";vertical-align:");
            push_em(&mut self.s, -dims.depth);
            self.s.push_str(r#";"></span>"#);
            for child in line.children() {
                self.emit(child, child_indent(line_indent))?;
            }
            new_line_and_indent(&mut self.s, line_indent);
            self.s.push_str("</span>");
        }
        new_line_and_indent(&mut self.s, base_indent);
        self.s.push_str("</span>");
        if self.pretty {
            self.s.push('\n');
        }
        self.s.push_str("</span>");
        if display {
            self.s.push_str("</span>");
        }
        Ok(())
    }

    pub fn emit(&mut self, node: &LayoutBox, base_indent: usize) -> fmt::Result {
        match node {
            LayoutBox::Glyph(glyph) => self.emit_glyph(glyph, base_indent),
            LayoutBox::HBox(hbox) => self.emit_hbox(hbox, base_indent),
            LayoutBox::VBox(vbox) => self.emit_vbox(vbox, base_indent),
            LayoutBox::Glue(glue) => {
                if glue.width != 0.0 {
                    self.emit_space(glue.width, base_indent);
                }
                Ok(())
            }
            LayoutBox::Kern(kern) => {
                if kern.amount != 0.0 {
                    self.emit_space(kern.amount, base_indent);
                }
                Ok(())
            }
            LayoutBox::Rule(rule) => {
                self.emit_rule(rule, base_indent);
                Ok(())
            }
        }
    }

    fn emit_glyph(&mut self, glyph: &Glyph, base_indent: usize) -> fmt::Result {
        new_line_and_indent(&mut self.s, base_indent);
        self.s.push_str(r#"<span class=""#);
        if let Some(class) = glyph.class() {
            self.s.push_str(class.css_class());
            self.s.push(' ');
        }
        self.s.push_str(glyph.font().css_class());
        self.s.push('"');
        let margin = glyph.margin_right();
        let scale = glyph.scale();
        if margin != 0.0 || scale != 1.0 || glyph.color().is_some() {
            self.s.push_str(r#" style=""#);
            if margin != 0.0 {
                self.s.push_str("margin-right:");
                push_em(&mut self.s, margin);
                self.s.push(';');
            }
            if scale != 1.0 {
                self.s.push_str("font-size:");
                push_em(&mut self.s, scale);
                self.s.push(';');
            }
            if let Some(color) = glyph.color() {
                self.s.push_str("color:");
                color.append_as_hex(&mut self.s);
                self.s.push(';');
            }
            self.s.push('"');
        }
        self.s.push('>');
        let mut buf = [0u8; 4];
        escape_html_content(&mut self.s, glyph.ch().encode_utf8(&mut buf));
        write!(self.s, "</span>")
    }

    fn emit_hbox(&mut self, hbox: &HBox, base_indent: usize) -> fmt::Result {
        let attrs = hbox.attrs();
        if attrs == BoxAttrs::default() {
            // Nothing to attach, so the children are spliced into the parent.
            for child in hbox.children() {
                self.emit(child, base_indent)?;
            }
            return Ok(());
        }
        new_line_and_indent(&mut self.s, base_indent);
        self.s.push_str("<span");
        self.push_attrs(attrs, None);
        self.s.push('>');
        for child in hbox.children() {
            self.emit(child, child_indent(base_indent))?;
        }
        new_line_and_indent(&mut self.s, base_indent);
        self.s.push_str("</span>");
        Ok(())
    }

    fn emit_vbox(&mut self, vbox: &VBox, base_indent: usize) -> fmt::Result {
        let dims = vbox.dims();
        new_line_and_indent(&mut self.s, base_indent);
        self.s.push_str("<span");
        self.push_attrs(vbox.attrs(), Some("vlist"));
        self.s.push_str(r#" style="height:"#);
        push_em(&mut self.s, dims.height + dims.depth);
        self.s.push_str(";vertical-align:");
        push_em(&mut self.s, -dims.depth);
        self.s.push_str(";width:");
        push_em(&mut self.s, dims.width);
        self.s.push_str(r#";">"#);
        let row_indent = child_indent(base_indent);
        for child in vbox.children() {
            new_line_and_indent(&mut self.s, row_indent);
            self.s.push_str(r#"<span class="vrow" style="bottom:"#);
            push_em(&mut self.s, child.shift - child.content.depth() + dims.depth);
            self.s.push_str(";left:");
            push_em(&mut self.s, child.offset);
            self.s.push_str(r#";">"#);
            self.emit(&child.content, child_indent(row_indent))?;
            new_line_and_indent(&mut self.s, row_indent);
            self.s.push_str("</span>");
        }
        new_line_and_indent(&mut self.s, base_indent);
        self.s.push_str("</span>");
        Ok(())
    }

    fn emit_space(&mut self, width: f64, base_indent: usize) {
        new_line_and_indent(&mut self.s, base_indent);
        self.s.push_str(r#"<span class="mspace" style="margin-right:"#);
        push_em(&mut self.s, width);
        self.s.push_str(r#";"></span>"#);
    }

    fn emit_rule(&mut self, rule: &Rule, base_indent: usize) {
        let dims = rule.dims();
        new_line_and_indent(&mut self.s, base_indent);
        self.s.push_str(r#"<span class="rule" style="width:"#);
        push_em(&mut self.s, dims.width);
        self.s.push_str(";height:");
        push_em(&mut self.s, dims.height + dims.depth);
        self.s.push_str(";vertical-align:");
        push_em(&mut self.s, -dims.depth);
        self.s.push(';');
        if let Some(color) = rule.color() {
            self.s.push_str("background:");
            color.append_as_hex(&mut self.s);
            self.s.push(';');
        }
        self.s.push_str(r#""></span>"#);
    }

    fn push_attrs(&mut self, attrs: BoxAttrs, extra_class: Option<&'static str>) {
        let classes = [
            extra_class,
            attrs.class.map(|class| class.css_class()),
            attrs.role.map(<&'static str>::from),
        ];
        let mut first = true;
        for class in classes.into_iter().flatten() {
            self.s.push_str(if first { r#" class=""# } else { " " });
            self.s.push_str(class);
            first = false;
        }
        if !first {
            self.s.push('"');
        }
        let phantom = matches!(attrs.role, Some(Role::Phantom));
        if phantom || attrs.color.is_some() {
            self.s.push_str(r#" style=""#);
            if phantom {
                self.s.push_str("color:transparent;");
            } else if let Some(color) = attrs.color {
                self.s.push_str("color:");
                color.append_as_hex(&mut self.s);
                self.s.push(';');
            }
            self.s.push('"');
        }
    }
}

impl Default for HtmlEmitter {
    fn default() -> Self {
        Self::new(false)
    }
}

#[inline]
fn child_indent(base_indent: usize) -> usize {
    if base_indent > 0 {
        base_indent.saturating_add(1)
    } else {
        0
    }
}
