//! Internal library for the `mathbox` crate.
//!
//! This library contains the static font data (glyph metrics and math font parameters), the
//! box-and-glue layout model, and the HTML serializer that turns a finished box tree into
//! markup.
//!
//! # Example
//!
//! ```rust
//! use mathbox_renderer_internal::atom::AtomClass;
//! use mathbox_renderer_internal::boxes::{BoxAttrs, Glyph, HBox, LayoutBox};
//! use mathbox_renderer_internal::font::{Font, MathSize};
//! use mathbox_renderer_internal::html::HtmlEmitter;
//!
//! let x = Glyph::new('x', Font::MathItalic, MathSize::Text, 1.0, true).unwrap();
//! let line = HBox::new(vec![LayoutBox::Glyph(x)], BoxAttrs::with_class(AtomClass::Ord));
//!
//! let mut emitter = HtmlEmitter::new(false);
//! emitter.emit_math(&[line], false).unwrap();
//! assert!(emitter.into_inner().contains(">x</span>"));
//! ```
pub mod atom;
pub mod boxes;
pub mod color;
pub mod font;
mod fmt;
pub mod html;
pub mod html_utils;
pub mod metrics;
mod metrics_data;
