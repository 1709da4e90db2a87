//! Typeset TeX math as positioned HTML boxes.
//!
//! The input goes through four stages: the lexer splits it into tokens, the macro expander
//! replaces macros by their definitions, the parser builds a syntax tree, and the layout engine
//! turns the tree into boxes and glue, following the rules of the TeXbook's Appendix G. The
//! resulting box tree is written out as HTML that only needs a stylesheet with the math fonts.
//!
//! # Usage
//!
//! For one-off rendering with the default settings, use [`render`]:
//!
//! ```rust
//! let result = mathbox::render(r"x = \frac{-b \pm \sqrt{b^2 - 4ac}}{2a}", true, true).unwrap();
//! assert!(result.markup.starts_with(r#"<span class="mathbox-display">"#));
//! assert!(result.warnings.is_empty());
//! ```
//!
//! To configure macros or the output, create a [`Renderer`]:
//!
//! ```rust
//! use mathbox::{Mode, RenderConfig, Renderer};
//!
//! let config = RenderConfig {
//!     macros: vec![("R".to_string(), r"\mathbb{R}".to_string())],
//!     ..Default::default()
//! };
//! let renderer = Renderer::new(config).unwrap();
//! let result = renderer.render(r"f \colon \R \to \R", Mode::INLINE_WARN).unwrap();
//! println!("{}", result.markup);
//! ```
//!
//! # Features
//!
//! - `serde`: [`RenderConfig`] implements serde's `Deserialize` and `Serialize`, and warnings
//!   implement `Serialize`.
//! - `ariadne`: [`RenderError::to_report`] builds a pretty diagnostic.
//!
pub mod ast;
mod builtin_macros;
mod commands;
mod environments;
mod error;
mod layout;
mod lexer;
mod macros;
mod parser;
mod specifications;
mod symbols;
mod token;

use std::fmt;
use std::io;

use bitflags::bitflags;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use box_renderer::boxes::HBox;
use box_renderer::color::Rgb;
use box_renderer::html::HtmlEmitter;

pub use box_renderer;

pub use self::environments::Env;
pub use self::error::{RenderError, RenderToError, Warning};
pub use self::lexer::{Lexer, tokenize};
pub use self::macros::{MacroExpander, MacroTable, expand};
pub use self::specifications::{ColumnAlign, ColumnSpec, Length, Unit};
pub use self::symbols::Symbol;
pub use self::token::{Span, Token, TokenKind};

use self::ast::Node;
use self::error::RenderErrKind;
use self::parser::Parser;

const DEFAULT_ERROR_COLOR: Rgb = Rgb::new(0xcc, 0x00, 0x00);

bitflags! {
    /// How a formula is rendered.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct Mode: u8 {
        /// Display style, like `$$...$$` in TeX. Without it, the formula is inline.
        const DISPLAY = 1;
        /// Collect warnings. Without it, [`RenderResult::warnings`] is always empty.
        const WARN = 1 << 1;

        const INLINE = 0;
        const INLINE_WARN = Self::WARN.bits();
        const DISPLAY_WARN = Self::DISPLAY.bits() | Self::WARN.bits();
    }
}

impl Mode {
    #[inline]
    pub fn new(display_mode: bool, warnings_enabled: bool) -> Self {
        let mut mode = Mode::INLINE;
        mode.set(Mode::DISPLAY, display_mode);
        mode.set(Mode::WARN, warnings_enabled);
        mode
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.contains(Mode::DISPLAY) {
            "display"
        } else {
            "inline"
        })?;
        if self.contains(Mode::WARN) {
            f.write_str("|warn")?;
        }
        Ok(())
    }
}

/// Configuration for pretty-printing the HTML output.
///
/// Pretty-printing means that newlines and indentation are added to the output, to make it
/// easier to read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[non_exhaustive]
pub enum PrettyPrint {
    /// Never pretty print.
    #[default]
    Never,
    /// Always pretty print.
    Always,
    /// Pretty print for display formulas only.
    Auto,
}

/// Configuration object for a [`Renderer`].
///
/// # Example usage
///
/// ```rust
/// use mathbox::{PrettyPrint, RenderConfig};
///
/// // Default values
/// let config = RenderConfig::default();
///
/// // Custom macros, in the syntax of `\newcommand`
/// let macros = vec![
///     ("d".to_string(), r"\mathrm{d}".to_string()),
///     ("abs".to_string(), r"\left|#1\right|".to_string()), // with argument
/// ];
/// let config = RenderConfig {
///     pretty_print: PrettyPrint::Auto,
///     macros,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct RenderConfig {
    /// A configuration for pretty-printing the output. See [`PrettyPrint`] for details.
    pub pretty_print: PrettyPrint,
    /// A list of macros; each tuple contains (macro_name, macro_definition). Parameters are
    /// written `#1` to `#9`.
    #[cfg_attr(feature = "serde", serde(with = "tuple_vec_map"))]
    pub macros: Vec<(String, String)>,
    /// The maximum number of macro expansions in one formula.
    pub max_expand: usize,
    /// The maximum length of the input in bytes.
    pub max_input_len: usize,
    /// The color of unknown commands, as a color name or `#rrggbb`.
    pub error_color: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            pretty_print: PrettyPrint::default(),
            macros: Vec::new(),
            max_expand: 1000,
            max_input_len: (1 << 30) - 1,
            error_color: "#cc0000".to_string(),
        }
    }
}

/// The output of a successful render.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RenderResult {
    pub markup: String,
    /// Recoverable problems, in the order they were found. Empty unless warnings were enabled.
    pub warnings: Vec<Warning>,
}

/// A renderer with a fixed configuration.
///
/// Rendering does not change the renderer; macros defined inside a formula are forgotten at the
/// end of the formula. A renderer can therefore be shared between threads.
#[derive(Debug)]
pub struct Renderer {
    pretty_print: PrettyPrint,
    macros: MacroTable,
    max_expand: usize,
    max_input_len: usize,
    error_color: Rgb,
}

static_assertions::assert_impl_all!(Renderer: Send, Sync);

impl Default for Renderer {
    fn default() -> Self {
        let config = RenderConfig::default();
        Self {
            pretty_print: config.pretty_print,
            macros: MacroTable::default(),
            max_expand: config.max_expand,
            max_input_len: config.max_input_len,
            error_color: DEFAULT_ERROR_COLOR,
        }
    }
}

impl Renderer {
    /// Create a new renderer with the given configuration.
    ///
    /// This function returns an error if the custom macros in the given configuration could not
    /// be parsed. The error contains the parsing error, the macro index and the macro definition
    /// that caused the error.
    pub fn new(config: RenderConfig) -> Result<Self, (Box<RenderError>, usize, String)> {
        let error_color = Rgb::parse(&config.error_color).unwrap_or_else(|| {
            log::warn!(
                "invalid error color {:?}, using the default",
                config.error_color
            );
            DEFAULT_ERROR_COLOR
        });
        Ok(Self {
            pretty_print: config.pretty_print,
            macros: MacroTable::new(config.macros)?,
            max_expand: config.max_expand,
            max_input_len: config.max_input_len,
            error_color,
        })
    }

    /// Render a formula to HTML.
    ///
    /// ```rust
    /// use mathbox::{Mode, Renderer};
    ///
    /// let renderer = Renderer::default();
    /// let result = renderer.render(r"\foo + 1", Mode::INLINE_WARN).unwrap();
    /// assert_eq!(result.warnings.len(), 1);
    /// let result = renderer.render(r"\foo + 1", Mode::INLINE).unwrap();
    /// assert!(result.warnings.is_empty());
    /// ```
    pub fn render(&self, source: &str, mode: Mode) -> Result<RenderResult, Box<RenderError>> {
        let mut markup = String::new();
        let warnings = self.render_into(&mut markup, source, mode)?;
        Ok(RenderResult { markup, warnings })
    }

    /// Render a formula into `buffer`, replacing its contents.
    ///
    /// The buffer is left empty if rendering fails.
    pub fn render_into(
        &self,
        buffer: &mut String,
        source: &str,
        mode: Mode,
    ) -> Result<Vec<Warning>, Box<RenderError>> {
        buffer.clear();
        if source.is_empty() {
            return Ok(Vec::new());
        }
        let (lines, warnings) = self.layout(source, mode)?;
        let display = mode.contains(Mode::DISPLAY);
        let pretty = match self.pretty_print {
            PrettyPrint::Never => false,
            PrettyPrint::Always => true,
            PrettyPrint::Auto => display,
        };
        let mut emitter = HtmlEmitter::with_buffer(std::mem::take(buffer), pretty);
        // Writing to a `String` does not fail.
        let _ = emitter.emit_math(&lines, display);
        *buffer = emitter.into_inner();
        Ok(warnings)
    }

    /// Render a formula and write the markup to `writer`.
    ///
    /// Nothing is written if rendering fails.
    pub fn render_to<W: io::Write>(
        &self,
        writer: &mut W,
        source: &str,
        mode: Mode,
    ) -> Result<Vec<Warning>, RenderToError> {
        let mut markup = String::new();
        let warnings = self.render_into(&mut markup, source, mode)?;
        writer.write_all(markup.as_bytes())?;
        Ok(warnings)
    }

    /// Lay out a formula without rendering it.
    ///
    /// The formula is returned as one box per line; lines break after top-level relations and
    /// binary operators.
    pub fn layout(
        &self,
        source: &str,
        mode: Mode,
    ) -> Result<(Vec<HBox>, Vec<Warning>), Box<RenderError>> {
        let (nodes, mut warnings) = self.parse(source)?;
        let (lines, layout_warnings) =
            layout::layout(&nodes, mode.contains(Mode::DISPLAY), self.error_color);
        if mode.contains(Mode::WARN) {
            warnings.extend(layout_warnings);
        } else {
            warnings.clear();
        }
        Ok((lines, warnings))
    }

    /// Parse a formula into its syntax tree, along with the warnings of the parser.
    pub fn parse(&self, source: &str) -> Result<(Vec<Node>, Vec<Warning>), Box<RenderError>> {
        if source.len() > self.max_input_len {
            return Err(RenderError::boxed(
                0..0,
                RenderErrKind::InputTooLarge {
                    len: source.len(),
                    max: self.max_input_len,
                },
            ));
        }
        let expander = MacroExpander::new(Lexer::new(source), Some(&self.macros), self.max_expand);
        Parser::new(expander).parse()
    }
}

/// Render a formula with the default configuration.
///
/// This is a shortcut for [`Renderer::render`] on a default [`Renderer`].
pub fn render(
    source: &str,
    display_mode: bool,
    warnings_enabled: bool,
) -> Result<RenderResult, Box<RenderError>> {
    Renderer::default().render(source, Mode::new(display_mode, warnings_enabled))
}
