use std::fmt::{self, Write};
use std::ops::Range;

use box_renderer::font::Font;
use box_renderer::html_utils::{escape_double_quoted_html_attribute, escape_html_content};
#[cfg(feature = "serde")]
use serde::Serialize;
use strum_macros::IntoStaticStr;

use crate::Mode;
use crate::environments::Env;

/// Represents an error that occurred while rendering a formula.
#[derive(Debug, Clone)]
pub struct RenderError(pub Range<usize>, pub(crate) RenderErrKind);

#[derive(Debug, Clone)]
pub(crate) enum RenderErrKind {
    MacroRecursion(Box<str>),
    DoubleScript(Script),
    UnexpectedEof,
    ExpectedArgument(Box<str>),
    UnmatchedClose(Closer),
    MissingRight,
    UnknownEnvironment(Box<str>),
    MismatchedEnvironment { expected: Env, got: Env },
    InvalidDelimiter(Box<str>),
    InvalidLength(Box<str>),
    InvalidColumnSpec(Box<str>),
    UnknownColor(Box<str>),
    MisplacedAlignment(Alignment),
    InvalidMacroDefinition(MacroDefProblem),
    InputTooLarge { len: usize, max: usize },
    TooDeeplyNested { max: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
pub enum Script {
    #[strum(serialize = "superscript")]
    Superscript,
    #[strum(serialize = "subscript")]
    Subscript,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
pub enum Closer {
    #[strum(serialize = "}")]
    Group,
    #[strum(serialize = r"\right")]
    Right,
    #[strum(serialize = r"\middle")]
    Middle,
    #[strum(serialize = r"\end")]
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
pub enum Alignment {
    #[strum(serialize = "&")]
    Ampersand,
    #[strum(serialize = r"\\")]
    NewLine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
pub enum MacroDefProblem {
    #[strum(serialize = "expected a control sequence as the macro name")]
    InvalidName,
    #[strum(serialize = "parameter numbers must be 1-9 and in order")]
    InvalidParameterNumber,
    #[strum(serialize = "'#' must be followed by a parameter number or '#'")]
    StrayParameter,
    #[strum(serialize = "the macro body is missing")]
    MissingBody,
}

impl RenderErrKind {
    /// Returns the error message as a string.
    pub fn string(&self) -> String {
        match self {
            RenderErrKind::MacroRecursion(name) => {
                "Too many macro expansions while expanding \"\\".to_string()
                    + name
                    + "\". Is the macro recursive?"
            }
            RenderErrKind::DoubleScript(script) => {
                "Double ".to_string() + <&str>::from(script) + " on the same base."
            }
            RenderErrKind::UnexpectedEof => "Unexpected end of input.".to_string(),
            RenderErrKind::ExpectedArgument(got) => {
                "Expected an argument, got \"".to_string() + got + "\"."
            }
            RenderErrKind::UnmatchedClose(got) => {
                "Unmatched closing token: \"".to_string() + <&str>::from(got) + "\"."
            }
            RenderErrKind::MissingRight => "Missing \\right for \\left.".to_string(),
            RenderErrKind::UnknownEnvironment(name) => {
                "Unknown environment \"".to_string() + name + "\"."
            }
            RenderErrKind::MismatchedEnvironment { expected, got } => {
                "Expected \"\\end{".to_string()
                    + expected.as_str()
                    + "}\", but got \"\\end{"
                    + got.as_str()
                    + "}\"."
            }
            RenderErrKind::InvalidDelimiter(got) => {
                "Invalid delimiter \"".to_string() + got + "\"."
            }
            RenderErrKind::InvalidLength(got) => {
                "Expected length with units, got \"".to_string() + got + "\"."
            }
            RenderErrKind::InvalidColumnSpec(got) => {
                "Expected column specification, got \"".to_string() + got + "\"."
            }
            RenderErrKind::UnknownColor(color) => "Unknown color \"".to_string() + color + "\".",
            RenderErrKind::MisplacedAlignment(got) => {
                "\"".to_string() + <&str>::from(got) + "\" may only appear inside an array."
            }
            RenderErrKind::InvalidMacroDefinition(problem) => {
                "Invalid macro definition: ".to_string() + <&str>::from(problem) + "."
            }
            RenderErrKind::InputTooLarge { len, max } => {
                format!("Input of {len} bytes exceeds the limit of {max} bytes.")
            }
            RenderErrKind::TooDeeplyNested { max } => {
                format!("Groups and arguments are nested more than {max} levels deep.")
            }
        }
    }
}

impl RenderError {
    #[inline]
    pub(crate) fn boxed(span: impl Into<Range<usize>>, kind: RenderErrKind) -> Box<RenderError> {
        Box::new(RenderError(span.into(), kind))
    }

    /// Format an error as an HTML snippet.
    ///
    /// The snippet shows the source in a `code` element and carries the message in the `title`
    /// attribute. If `css_class` is `None`, it defaults to `"mathbox-error"`.
    pub fn to_html(&self, source: &str, mode: Mode, css_class: Option<&str>) -> String {
        let mut output = String::new();
        let tag = if mode.contains(Mode::DISPLAY) {
            "p"
        } else {
            "span"
        };
        let css_class = css_class.unwrap_or("mathbox-error");
        let _ = write!(
            output,
            r#"<{} class="{}" title="{}: "#,
            tag, css_class, self.0.start
        );
        escape_double_quoted_html_attribute(&mut output, &self.1.string());
        output.push_str(r#""><code>"#);
        escape_html_content(&mut output, source);
        let _ = write!(output, "</code></{tag}>");
        output
    }

    pub fn error_message(&self) -> String {
        self.1.string()
    }
}

#[cfg(feature = "ariadne")]
impl RenderError {
    /// Convert this error into an [`ariadne::Report`] for pretty-printing.
    pub fn to_report<'name>(
        &self,
        source_name: &'name str,
        with_color: bool,
    ) -> ariadne::Report<'static, (&'name str, Range<usize>)> {
        use ariadne::{Label, Report, ReportKind};

        let label_msg = match &self.1 {
            RenderErrKind::MacroRecursion(_) => "expansion limit reached here".into(),
            RenderErrKind::DoubleScript(script) => {
                format!("second {}", <&str>::from(script))
            }
            RenderErrKind::UnexpectedEof => "input ends here".into(),
            RenderErrKind::ExpectedArgument(_) => "expected an argument here".into(),
            RenderErrKind::UnmatchedClose(got) => {
                format!("unmatched \"{}\"", <&str>::from(got))
            }
            RenderErrKind::MissingRight => "this \\left is never closed".into(),
            RenderErrKind::UnknownEnvironment(_) => "unknown environment".into(),
            RenderErrKind::MismatchedEnvironment { expected, .. } => {
                format!("expected \"\\end{{{}}}\" here", expected.as_str())
            }
            RenderErrKind::InvalidDelimiter(_) => "expected a delimiter here".into(),
            RenderErrKind::InvalidLength(_) => "expected length here".into(),
            RenderErrKind::InvalidColumnSpec(_) => "expected a column spec here".into(),
            RenderErrKind::UnknownColor(_) => "unknown color".into(),
            RenderErrKind::MisplacedAlignment(_) => "not inside an array".into(),
            RenderErrKind::InvalidMacroDefinition(problem) => <&str>::from(problem).into(),
            RenderErrKind::InputTooLarge { .. } => "input too large".into(),
            RenderErrKind::TooDeeplyNested { .. } => "nesting limit reached here".into(),
        };

        let mut config = ariadne::Config::default().with_index_type(ariadne::IndexType::Byte);
        if !with_color {
            config = config.with_color(false);
        }
        Report::build(ReportKind::Error, (source_name, self.0.start..self.0.start))
            .with_config(config)
            .with_message(self.1.string())
            .with_label(Label::new((source_name, self.0.clone())).with_message(label_msg))
            .finish()
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.0.start, self.1.string())
    }
}

impl std::error::Error for RenderError {}

/// A recoverable problem. Rendering continues with a fallback.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Warning {
    /// A control sequence that is neither a macro nor a known command.
    ///
    /// The name is rendered in the error color instead.
    UnknownCommand { name: String, span: Range<usize> },
    /// The font tables have no glyph for this character; a placeholder box was used.
    MetricsFallback { ch: char, font: Font },
    /// An old-style font switch like `\rm`. It still works.
    Deprecated { command: String, span: Range<usize> },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnknownCommand { name, span } => {
                write!(f, "{}: Unknown command \"\\{}\".", span.start, name)
            }
            Warning::MetricsFallback { ch, font } => write!(
                f,
                "No metrics for {:?} in font \"{}\".",
                ch,
                font.css_class()
            ),
            Warning::Deprecated { command, span } => {
                write!(f, "{}: Deprecated command \"\\{}\".", span.start, command)
            }
        }
    }
}

/// The error type of [`crate::Renderer::render_to`].
#[derive(Debug)]
pub enum RenderToError {
    Render(Box<RenderError>),
    Io(std::io::Error),
}

impl fmt::Display for RenderToError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderToError::Render(err) => err.fmt(f),
            RenderToError::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for RenderToError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderToError::Render(err) => Some(err.as_ref()),
            RenderToError::Io(err) => Some(err),
        }
    }
}

impl From<Box<RenderError>> for RenderToError {
    fn from(err: Box<RenderError>) -> Self {
        RenderToError::Render(err)
    }
}

impl From<std::io::Error> for RenderToError {
    fn from(err: std::io::Error) -> Self {
        RenderToError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = RenderError(3..5, RenderErrKind::UnmatchedClose(Closer::Right));
        assert_eq!(err.to_string(), r#"3: Unmatched closing token: "\right"."#);

        let err = RenderError(
            0..0,
            RenderErrKind::MismatchedEnvironment {
                expected: Env::Matrix,
                got: Env::Cases,
            },
        );
        assert_eq!(
            err.error_message(),
            r#"Expected "\end{matrix}", but got "\end{cases}"."#
        );
    }

    #[test]
    fn html_snippet() {
        let err = RenderError(2..3, RenderErrKind::DoubleScript(Script::Superscript));
        assert_eq!(
            err.to_html("x^2^3", Mode::INLINE, None),
            r#"<span class="mathbox-error" title="2: Double superscript on the same base."><code>x^2^3</code></span>"#
        );
        assert_eq!(
            err.to_html("a<b", Mode::DISPLAY, Some("err")),
            r#"<p class="err" title="2: Double superscript on the same base."><code>a&lt;b</code></p>"#
        );
    }

    #[test]
    fn warning_display() {
        let warning = Warning::UnknownCommand {
            name: "foo".to_string(),
            span: 4..8,
        };
        assert_eq!(warning.to_string(), r#"4: Unknown command "\foo"."#);
        let warning = Warning::Deprecated {
            command: "bf".to_string(),
            span: 0..3,
        };
        assert_eq!(warning.to_string(), r#"0: Deprecated command "\bf"."#);
    }

    #[cfg(feature = "ariadne")]
    #[test]
    fn report() {
        let err = RenderError(0..1, RenderErrKind::UnexpectedEof);
        let mut buf = Vec::new();
        err.to_report("input", false)
            .write(("input", ariadne::Source::from("{")), &mut buf)
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Unexpected end of input."));
    }
}
