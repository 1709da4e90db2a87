//! Escaping of text that ends up in the generated HTML.

/// Append `input` to `output`, escaping `&`, `<` and `>` for use as HTML text content.
pub fn escape_html_content(output: &mut String, input: &str) {
    escape_with(output, input, |haystack| {
        memchr::memchr3(b'&', b'<', b'>', haystack)
    });
}

/// Append `input` to `output`, escaping it for use inside a double-quoted attribute value.
pub fn escape_double_quoted_html_attribute(output: &mut String, input: &str) {
    escape_with(output, input, |haystack| {
        memchr::memchr3(b'&', b'"', b'<', haystack)
    });
}

fn escape_with(output: &mut String, input: &str, find: impl Fn(&[u8]) -> Option<usize>) {
    let mut rest = input;
    while let Some(index) = find(rest.as_bytes()) {
        // `index` points at an ASCII byte, so it is always a char boundary.
        let Some((before, after)) = rest.split_at_checked(index) else {
            break;
        };
        output.push_str(before);
        let mut chars = after.chars();
        match chars.next() {
            Some('&') => output.push_str("&amp;"),
            Some('<') => output.push_str("&lt;"),
            Some('>') => output.push_str("&gt;"),
            Some('"') => output.push_str("&quot;"),
            Some(other) => output.push(other),
            None => {}
        }
        rest = chars.as_str();
    }
    output.push_str(rest);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(input: &str) -> String {
        let mut s = String::new();
        escape_html_content(&mut s, input);
        s
    }

    fn attribute(input: &str) -> String {
        let mut s = String::new();
        escape_double_quoted_html_attribute(&mut s, input);
        s
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(content("x+y"), "x+y");
        assert_eq!(content(""), "");
        assert_eq!(content("∑ᵢ 🐢"), "∑ᵢ 🐢");
    }

    #[test]
    fn special_characters() {
        assert_eq!(content("a<b & c>d"), "a&lt;b &amp; c&gt;d");
        assert_eq!(content("<<"), "&lt;&lt;");
        assert_eq!(content("\"quoted\""), "\"quoted\"");
    }

    #[test]
    fn attribute_values() {
        assert_eq!(attribute(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(attribute("a&b<c>"), "a&amp;b&lt;c>");
        assert_eq!(attribute("ü \"x\""), "ü &quot;x&quot;");
    }
}
