use box_renderer::atom::AtomClass;
use box_renderer::boxes::{BoxAttrs, HBox, Kern, LayoutBox, Role, Rule, VBox, VChild};

use super::style::{Ctx, MathStyle};
use super::{Layouter, tag};
use crate::ast::Array;
use crate::environments::Env;
use crate::specifications::{ColumnAlign, ColumnSpec};

/// How a column is placed, with the space before and after it in em.
///
/// A gap of `None` means the default column separation of the environment.
#[derive(Debug, Clone, Copy)]
enum Column {
    Align {
        align: ColumnAlign,
        pregap: Option<f64>,
        postgap: Option<f64>,
    },
    Separator,
}

impl Column {
    fn align(align: ColumnAlign) -> Column {
        Column::Align {
            align,
            pregap: None,
            postgap: None,
        }
    }
}

struct Row {
    cells: Vec<LayoutBox>,
    /// Distance from the top of the array to the baseline of the row.
    pos: f64,
}

impl Env {
    fn cell_style(self) -> MathStyle {
        match self {
            Env::Aligned => MathStyle::Display,
            Env::SmallMatrix => MathStyle::Script,
            _ => MathStyle::Text,
        }
    }

    fn array_stretch(self) -> f64 {
        match self {
            Env::SmallMatrix => 0.5,
            Env::Cases => 1.2,
            _ => 1.0,
        }
    }

    /// Whether there is a column gap before the first and after the last column.
    fn hskip_before_and_after(self) -> bool {
        matches!(self, Env::Array)
    }

    fn columns(self, specs: &[ColumnSpec], num_columns: usize, quad: f64) -> Vec<Column> {
        match self {
            Env::Array => specs
                .iter()
                .map(|spec| match spec {
                    ColumnSpec::Align(align) => Column::align(*align),
                    ColumnSpec::Separator => Column::Separator,
                })
                .collect(),
            Env::Cases => vec![
                Column::Align {
                    align: ColumnAlign::Left,
                    pregap: Some(0.0),
                    postgap: Some(quad),
                },
                Column::Align {
                    align: ColumnAlign::Left,
                    pregap: Some(0.0),
                    postgap: Some(0.0),
                },
            ],
            Env::Aligned => (0..num_columns)
                .map(|c| Column::Align {
                    align: if c % 2 == 0 {
                        ColumnAlign::Right
                    } else {
                        ColumnAlign::Left
                    },
                    pregap: Some(if c % 2 == 0 && c > 0 { quad } else { 0.0 }),
                    postgap: Some(0.0),
                })
                .collect(),
            Env::Matrix
            | Env::PMatrix
            | Env::BMatrix
            | Env::Bmatrix
            | Env::VMatrix
            | Env::Vmatrix
            | Env::SmallMatrix => vec![Column::align(ColumnAlign::Center); num_columns],
        }
    }
}

impl Layouter {
    /// Arrays and matrices, centered on the axis, with their surrounding delimiters.
    pub(super) fn layout_array(&mut self, array: &Array, ctx: Ctx) -> LayoutBox {
        let env = array.env;
        let cell_ctx = ctx.with_style(env.cell_style());
        let pt = ctx.scale / ctx.params.pt_per_em;
        let col_sep = if env == Env::SmallMatrix {
            0.5 * cell_ctx.scale
        } else {
            5.0 * pt
        };
        let baseline_skip = 12.0 * pt;
        let jot = 3.0 * pt;
        let array_skip = env.array_stretch() * baseline_skip;
        let strut_height = 0.7 * array_skip;
        let strut_depth = 0.3 * array_skip;

        let mut total_height = 0.0;
        let mut rows = Vec::with_capacity(array.rows.len());
        for cells in &array.rows {
            let cells: Vec<LayoutBox> = cells
                .iter()
                .map(|cell| LayoutBox::HBox(self.hbox(cell, cell_ctx)))
                .collect();
            let height = cells.iter().map(LayoutBox::height).fold(strut_height, f64::max);
            let mut depth = cells.iter().map(LayoutBox::depth).fold(strut_depth, f64::max);
            if env == Env::Aligned {
                depth += jot;
            }
            total_height += height;
            rows.push(Row {
                cells,
                pos: total_height,
            });
            total_height += depth;
        }
        let offset = total_height / 2.0 + ctx.metric(|p| p.axis_height);
        let num_columns = rows.iter().map(|row| row.cells.len()).max().unwrap_or(0);
        let columns = env.columns(&array.columns, num_columns, ctx.metric(|p| p.quad));

        // Cells are taken column by column.
        let mut cells: Vec<_> = rows
            .iter_mut()
            .map(|row| std::mem::take(&mut row.cells).into_iter())
            .collect();

        let rule_width = ctx.metric(|p| p.array_rule_width);
        let gap = |width: f64| LayoutBox::Kern(Kern { amount: width });
        let mut children = vec![LayoutBox::Rule(Rule::new(
            0.0,
            offset.max(0.0),
            (total_height - offset).max(0.0),
            None,
        ))];
        let mut descriptions = columns.iter().copied().peekable();
        let mut c = 0;
        while c < num_columns || descriptions.peek().is_some() {
            let mut first_separator = true;
            while let Some(Column::Separator) = descriptions.peek() {
                descriptions.next();
                if !first_separator {
                    children.push(gap(ctx.metric(|p| p.double_rule_sep)));
                }
                children.push(gap(-rule_width / 2.0));
                children.push(LayoutBox::Rule(Rule::new(
                    rule_width,
                    offset,
                    total_height - offset,
                    ctx.color(),
                )));
                children.push(gap(-rule_width / 2.0));
                first_separator = false;
            }
            let (align, pregap, postgap) = match descriptions.next() {
                Some(Column::Align {
                    align,
                    pregap,
                    postgap,
                }) => (align, pregap, postgap),
                _ => (ColumnAlign::Center, None, None),
            };
            if c >= num_columns {
                c += 1;
                continue;
            }

            if c > 0 || env.hskip_before_and_after() {
                let width = pregap.unwrap_or(col_sep);
                if width != 0.0 {
                    children.push(gap(width));
                }
            }

            let column: Vec<(LayoutBox, f64)> = rows
                .iter()
                .zip(cells.iter_mut())
                .filter_map(|(row, cells)| Some((cells.next()?, offset - row.pos)))
                .collect();
            let width = column
                .iter()
                .map(|(cell, _)| cell.width())
                .fold(0.0, f64::max);
            let column = column
                .into_iter()
                .map(|(content, shift)| {
                    let offset = match align {
                        ColumnAlign::Left => 0.0,
                        ColumnAlign::Center => (width - content.width()) / 2.0,
                        ColumnAlign::Right => width - content.width(),
                    };
                    VChild {
                        content,
                        shift,
                        offset,
                    }
                })
                .collect();
            children.push(LayoutBox::VBox(VBox::from_children(
                column,
                BoxAttrs::default(),
            )));

            if c + 1 < num_columns || env.hskip_before_and_after() {
                let width = postgap.unwrap_or(col_sep);
                if width != 0.0 {
                    children.push(gap(width));
                }
            }
            c += 1;
        }

        let body = HBox::new(children, BoxAttrs::with_role(Role::Array));
        let (left, right) = env.delimiters();
        if (left, right) == (None, None) {
            return LayoutBox::HBox(body);
        }
        let (height, depth) = (body.dims().height, body.dims().depth);
        let left = self.left_right_delim(left, height, depth, &ctx);
        let right = self.left_right_delim(right, height, depth, &ctx);
        LayoutBox::HBox(HBox::new(
            vec![
                tag(left, AtomClass::Open),
                LayoutBox::HBox(body),
                tag(right, AtomClass::Close),
            ],
            BoxAttrs::default(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use box_renderer::boxes::{HBox, LayoutBox, Role, VBox};

    use crate::layout::tests::{all_glyphs, single_line};

    /// The boxes that make up the array, without delimiters.
    fn array(source: &str) -> HBox {
        let line = single_line(source, false);
        let LayoutBox::HBox(atom) = &line.children()[0] else {
            panic!("expected an atom");
        };
        let LayoutBox::HBox(outer) = &atom.children()[0] else {
            panic!("expected an array");
        };
        if outer.attrs().role == Some(Role::Array) {
            return outer.clone();
        }
        let LayoutBox::HBox(body) = &outer.children()[1] else {
            panic!("expected an array body");
        };
        body.clone()
    }

    fn columns(array: &HBox) -> Vec<VBox> {
        array
            .children()
            .iter()
            .filter_map(|child| match child {
                LayoutBox::VBox(column) => Some(column.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn matrices_are_centered_on_the_axis() {
        let array = array("\\begin{matrix} a & b \\\\ c & d \\end{matrix}");
        assert_eq!(array.attrs().role, Some(Role::Array));
        let dims = array.dims();
        // Two rows of 12pt, centered on the axis.
        assert!((dims.height - (1.2 + 0.25)).abs() < 1e-9);
        assert!((dims.depth - (1.2 - 0.25)).abs() < 1e-9);
        let columns = columns(&array);
        assert_eq!(columns.len(), 2);
        let shifts: Vec<f64> = columns[0].children().iter().map(|cell| cell.shift).collect();
        assert!((shifts[0] - shifts[1] - 1.2).abs() < 1e-9);
    }

    #[test]
    fn delimiters_surround_matrices() {
        let glyphs = all_glyphs("\\begin{pmatrix} a \\\\ b \\end{pmatrix}", false);
        assert_eq!(glyphs.first().map(|glyph| glyph.ch()), Some('('));
        assert_eq!(glyphs.last().map(|glyph| glyph.ch()), Some(')'));
        let glyphs = all_glyphs("\\begin{cases} a & b \\end{cases}", false);
        assert_eq!(glyphs.first().map(|glyph| glyph.ch()), Some('{'));
        assert_eq!(glyphs.last().map(|glyph| glyph.ch()), Some('b'));
    }

    #[test]
    fn columns_are_aligned() {
        let array = array("\\begin{array}{lr} xx & xx \\\\ x & x \\end{array}");
        let columns = columns(&array);
        let left = columns[0].children();
        assert_eq!(left[1].offset, 0.0);
        let right = columns[1].children();
        assert!((right[1].offset - right[0].content.width() / 2.0).abs() < 1e-9);
        assert_eq!(right[0].offset, 0.0);
    }

    #[test]
    fn separators_are_rules() {
        let array = array("\\begin{array}{c|c} 1 & 2 \\end{array}");
        let rules: Vec<&LayoutBox> = array
            .children()
            .iter()
            .filter(|child| matches!(child, LayoutBox::Rule(_)) && child.width() > 0.0)
            .collect();
        assert_eq!(rules.len(), 1);
        // The rule spans the whole array.
        assert!((rules[0].height() - array.dims().height).abs() < 1e-9);
        assert!((rules[0].depth() - array.dims().depth).abs() < 1e-9);
    }

    #[test]
    fn aligned_columns_meet_at_the_relation() {
        let array = array("\\begin{aligned} a &= b \\\\ ccc &= d \\end{aligned}");
        let columns = columns(&array);
        assert_eq!(columns.len(), 2);
        // Right-aligned, then left-aligned with no gap in between.
        assert!(columns[0].children()[0].offset > 0.0);
        assert_eq!(columns[0].children()[1].offset, 0.0);
        assert!(columns[1].children().iter().all(|cell| cell.offset == 0.0));
        assert!(
            !array
                .children()
                .iter()
                .any(|child| matches!(child, LayoutBox::Kern(_)))
        );
    }

    #[test]
    fn small_matrices_are_small() {
        let glyphs = all_glyphs("\\begin{smallmatrix} a & b \\end{smallmatrix}", false);
        assert!(glyphs.iter().all(|glyph| glyph.scale() == 0.7));
    }
}
