//! Shared route helpers.

/// Escape text for use in HTML content or attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape_special_chars() {
        assert_eq!(html_escape("<>&\"'"), "&lt;&gt;&amp;&quot;&#x27;");
    }

    #[test]
    fn test_html_escape_ampersand_first() {
        assert_eq!(html_escape("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_html_escape_plain_text_unchanged() {
        assert_eq!(html_escape("a.png"), "a.png");
    }
}
