//! Inter-atom glue.

use box_renderer::atom::AtomClass;
use box_renderer::boxes::Glue;

use super::style::Ctx;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Space {
    Thin,
    Medium,
    Thick,
}

use Space::{Medium as M, Thick as K, Thin as T};

const NO: Option<Space> = None;

// Rows are the left atom, columns the right atom, both in `AtomClass` order:
// ord, op, bin, rel, open, close, punct, inner.
static SPACINGS: [[Option<Space>; 8]; 8] = [
    [NO, Some(T), Some(M), Some(K), NO, NO, NO, Some(T)],
    [Some(T), Some(T), NO, Some(K), NO, NO, NO, Some(T)],
    [Some(M), Some(M), NO, NO, Some(M), NO, NO, Some(M)],
    [Some(K), Some(K), NO, NO, Some(K), NO, NO, Some(K)],
    [NO, NO, NO, NO, NO, NO, NO, NO],
    [NO, Some(T), Some(M), Some(K), NO, NO, NO, Some(T)],
    [Some(T), Some(T), NO, Some(K), Some(T), Some(T), Some(T), Some(T)],
    [Some(T), Some(T), Some(M), Some(K), Some(T), NO, Some(T), Some(T)],
];

static TIGHT_SPACINGS: [[Option<Space>; 8]; 8] = [
    [NO, Some(T), NO, NO, NO, NO, NO, NO],
    [Some(T), Some(T), NO, NO, NO, NO, NO, NO],
    [NO; 8],
    [NO; 8],
    [NO; 8],
    [NO, Some(T), NO, NO, NO, NO, NO, NO],
    [NO; 8],
    [NO, Some(T), NO, NO, NO, NO, NO, NO],
];

/// The space between two adjacent atoms.
pub(crate) fn space_between(left: AtomClass, right: AtomClass, tight: bool) -> Option<Space> {
    let table = if tight { &TIGHT_SPACINGS } else { &SPACINGS };
    table[left.index()][right.index()]
}

impl Space {
    /// The glue for this space, with TeX's `\thinmuskip`, `\medmuskip` and `\thickmuskip`.
    pub(crate) fn glue(self, ctx: &Ctx) -> Glue {
        let mu = ctx.mu();
        let (width, stretch, shrink) = match self {
            Space::Thin => (3.0, 0.0, 0.0),
            Space::Medium => (4.0, 2.0, 4.0),
            Space::Thick => (5.0, 5.0, 0.0),
        };
        Glue {
            width: width * mu,
            stretch: stretch * mu,
            shrink: shrink * mu,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::style::{Ctx, MathStyle};
    use AtomClass::*;

    #[test]
    fn normal_spacing() {
        assert_eq!(space_between(Ord, Bin, false), Some(Space::Medium));
        assert_eq!(space_between(Bin, Ord, false), Some(Space::Medium));
        assert_eq!(space_between(Ord, Rel, false), Some(Space::Thick));
        assert_eq!(space_between(Ord, Op, false), Some(Space::Thin));
        assert_eq!(space_between(Punct, Ord, false), Some(Space::Thin));
        assert_eq!(space_between(Ord, Ord, false), None);
        assert_eq!(space_between(Open, Ord, false), None);
        assert_eq!(space_between(Ord, Close, false), None);
        assert_eq!(space_between(Inner, Close, false), None);
    }

    #[test]
    fn tight_spacing() {
        assert_eq!(space_between(Ord, Bin, true), None);
        assert_eq!(space_between(Ord, Rel, true), None);
        assert_eq!(space_between(Ord, Op, true), Some(Space::Thin));
        assert_eq!(space_between(Close, Op, true), Some(Space::Thin));
    }

    #[test]
    fn glue_widths() {
        let ctx = Ctx::new(MathStyle::Text);
        let thin = Space::Thin.glue(&ctx);
        assert!((thin.width - 3.0 / 18.0).abs() < 1e-9);
        let medium = Space::Medium.glue(&ctx);
        assert!((medium.width - 4.0 / 18.0).abs() < 1e-9);
        assert!((medium.shrink - 4.0 / 18.0).abs() < 1e-9);
        let thick = Space::Thick.glue(&ctx);
        assert!((thick.stretch - 5.0 / 18.0).abs() < 1e-9);
    }
}
