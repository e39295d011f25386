//! HTML entity decoding for card text.

/// Decodes HTML entities (named, decimal and hex) in `text`.
///
/// Markup is left untouched: `<b>` stays literal text.
#[must_use]
pub fn unescape_html(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_named_and_numeric_entities() {
        assert_eq!(
            unescape_html("Oheim &amp; S&#228;dtler &#x47;bR"),
            "Oheim & Sädtler GbR"
        );
        assert_eq!(unescape_html("&quot;/&gt;Peekabo!"), "\"/>Peekabo!");
    }

    #[test]
    fn leaves_markup_alone() {
        let input = "<h1>John</h1> <script>alert('Doe')</script>";
        assert_eq!(unescape_html(input), input);
    }

    #[test]
    fn is_idempotent_without_double_escaping() {
        for input in ["Arenbergstraße 13a", "a &amp; b", "&lt;tag&gt;", "plain"] {
            let once = unescape_html(input);
            assert_eq!(unescape_html(&once), once);
        }
    }
}
