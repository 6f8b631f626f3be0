//! HTML escaping for user-supplied strings.

/// Escape a string for use as HTML body content.
///
/// Escapes `&`, `<`, `>`, `"`, `'` and `/`.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a string for use inside a double- or single-quoted HTML
/// attribute value.
pub fn escape_attr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_script_tag() {
        assert_eq!(
            escape_html("<script>alert('xss')</script>"),
            "&lt;script&gt;alert(&#x27;xss&#x27;)&lt;&#x2F;script&gt;"
        );
    }

    #[test]
    fn test_escape_html_passes_plain_text() {
        assert_eq!(escape_html("Hello, world!"), "Hello, world!");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_escape_html_ampersand_first() {
        // Already-escaped input is escaped again, not left alone
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_escape_attr_quotes() {
        assert_eq!(
            escape_attr(r#"a "b" 'c'"#),
            "a &quot;b&quot; &#x27;c&#x27;"
        );
        // Slash is fine inside attributes
        assert_eq!(escape_attr("a/b"), "a/b");
    }
}
