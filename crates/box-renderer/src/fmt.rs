const INDENT: &str = "    ";

pub(crate) fn new_line_and_indent(s: &mut String, indent_num: usize) {
    if indent_num > 0 {
        s.push('\n');
    }
    for _ in 0..indent_num {
        s.push_str(INDENT);
    }
}

/// Append a length in em, rounded to five decimal places.
///
/// Non-finite values are written as zero.
pub(crate) fn push_em(s: &mut String, value: f64) {
    let rounded = (value * 1e5).round() / 1e5;
    // This also turns `-0.0` into `0.0`.
    let rounded = if rounded == 0.0 || !rounded.is_finite() {
        0.0
    } else {
        rounded
    };
    let mut buf = dtoa::Buffer::new();
    let text = buf.format_finite(rounded);
    s.push_str(text.strip_suffix(".0").unwrap_or(text));
    s.push_str("em");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn em(value: f64) -> String {
        let mut s = String::new();
        push_em(&mut s, value);
        s
    }

    #[test]
    fn formats_lengths() {
        assert_eq!(em(0.0), "0em");
        assert_eq!(em(-0.0), "0em");
        assert_eq!(em(1.0), "1em");
        assert_eq!(em(-0.25), "-0.25em");
        assert_eq!(em(5.0 / 18.0), "0.27778em");
        assert_eq!(em(0.000004), "0em");
        assert_eq!(em(0.00001), "0.00001em");
        assert_eq!(em(f64::NAN), "0em");
    }

    #[test]
    fn indentation() {
        let mut s = String::new();
        new_line_and_indent(&mut s, 0);
        assert_eq!(s, "");
        new_line_and_indent(&mut s, 2);
        assert_eq!(s, "\n        ");
    }
}
