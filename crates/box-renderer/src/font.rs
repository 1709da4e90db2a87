//! Font faces and the three TeX math font sizes.

#[cfg(feature = "serde")]
use serde::Serialize;
use strum_macros::IntoStaticStr;

/// A font face shipped with the renderer.
///
/// `Size1` to `Size4` hold the progressively larger variants of delimiters, radical signs and
/// big operators. Together with the regular faces they form the five discrete size classes
/// that the stretchy-glyph selection walks through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Font {
    #[strum(serialize = "mathrm")]
    MainRegular,
    #[strum(serialize = "mathbf")]
    MainBold,
    #[strum(serialize = "mathnormal")]
    MathItalic,
    #[strum(serialize = "amsrm")]
    AmsRegular,
    #[strum(serialize = "mathcal")]
    CaligraphicRegular,
    #[strum(serialize = "size1")]
    Size1,
    #[strum(serialize = "size2")]
    Size2,
    #[strum(serialize = "size3")]
    Size3,
    #[strum(serialize = "size4")]
    Size4,
}

impl Font {
    /// The CSS class that selects this face in the host stylesheet.
    #[inline]
    pub fn css_class(self) -> &'static str {
        self.into()
    }

    /// The face of the given delimiter size (1 to 4).
    pub const fn delim_size(size: u8) -> Option<Font> {
        match size {
            1 => Some(Font::Size1),
            2 => Some(Font::Size2),
            3 => Some(Font::Size3),
            4 => Some(Font::Size4),
            _ => None,
        }
    }
}

/// The three font sizes of a math formula: text size, script size and scriptscript size.
///
/// Each size has its own column of math font parameters (see [`crate::metrics::FontParams`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum MathSize {
    Text = 0,
    Script = 1,
    ScriptScript = 2,
}

impl MathSize {
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The size one step smaller, saturating at scriptscript.
    pub const fn smaller(self) -> MathSize {
        match self {
            MathSize::Text => MathSize::Script,
            MathSize::Script | MathSize::ScriptScript => MathSize::ScriptScript,
        }
    }
}
