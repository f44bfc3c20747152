/// HTML-escape a string for text and attribute positions
///
/// Escapes: & < > " '
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

/// Escape a string for an XML text node
pub fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape_basic_characters() {
        assert_eq!(html_escape("Plain City"), "Plain City");
        assert_eq!(html_escape("Sidewalks & Walkways"), "Sidewalks &amp; Walkways");
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(html_escape("Russell's Point"), "Russell&#x27;s Point");
    }

    #[test]
    fn test_html_escape_xss_attempts() {
        assert_eq!(
            html_escape("\"><script>alert(document.cookie)</script>"),
            "&quot;&gt;&lt;script&gt;alert(document.cookie)&lt;/script&gt;"
        );
        assert_eq!(
            html_escape("' onload='alert(1)"),
            "&#x27; onload=&#x27;alert(1)"
        );
    }

    #[test]
    fn test_html_escape_unicode_passthrough() {
        assert_eq!(html_escape(""), "");
        assert_eq!(html_escape("Zürich — 📞"), "Zürich — 📞");
    }

    #[test]
    fn test_xml_escape() {
        assert_eq!(
            xml_escape("https://a.example/?x=1&y=2"),
            "https://a.example/?x=1&amp;y=2"
        );
        assert_eq!(xml_escape("it's"), "it&apos;s");
        assert_eq!(xml_escape("https://acme.example/locations/dublin/"), "https://acme.example/locations/dublin/");
    }
}
