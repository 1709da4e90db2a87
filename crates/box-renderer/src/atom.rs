//! Math atom classes.
//!
//! Every atom on a math list belongs to one of TeX's eight spacing classes. The class decides
//! which glue is inserted between neighbouring atoms and is also emitted as the CSS class of the
//! element that represents the atom.

#[cfg(feature = "serde")]
use serde::Serialize;
use strum_macros::IntoStaticStr;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum AtomClass {
    /// `mathord`
    #[default]
    #[strum(serialize = "mord")]
    Ord,
    /// `mathop`
    #[strum(serialize = "mop")]
    Op,
    /// `mathbin`
    #[strum(serialize = "mbin")]
    Bin,
    /// `mathrel`
    #[strum(serialize = "mrel")]
    Rel,
    /// `mathopen`
    #[strum(serialize = "mopen")]
    Open,
    /// `mathclose`
    #[strum(serialize = "mclose")]
    Close,
    /// `mathpunct`
    #[strum(serialize = "mpunct")]
    Punct,
    /// `mathinner`
    #[strum(serialize = "minner")]
    Inner,
}

impl AtomClass {
    #[inline]
    pub fn css_class(self) -> &'static str {
        self.into()
    }

    /// Index into the inter-atom spacing tables.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::AtomClass;

    #[test]
    fn css_names() {
        assert_eq!(AtomClass::Ord.css_class(), "mord");
        assert_eq!(AtomClass::Punct.css_class(), "mpunct");
        assert_eq!(AtomClass::Inner.index(), 7);
    }
}
