//! Escaping helpers for interpolating user text into the document.

/// Escapes text for HTML element content and attribute values.
///
/// Quotes are escaped too so the same function is safe inside `"..."` and
/// `'...'` attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escapes text for a single-quoted JavaScript string literal.
pub fn escape_js_single_quoted(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            // Keeps `</script>`-like sequences inert if the handler is ever inlined.
            '<' => escaped.push_str("\\x3C"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Builds an `onerror` handler that swaps the failed image's panel content for
/// an error box with `message`. The result is ready for a double-quoted attribute.
pub fn image_fallback_handler(message: &str) -> String {
    let markup = format!(
        "<div class='image-error'>{}</div>",
        escape_html(message)
    );
    let script = format!(
        "this.parentElement.innerHTML='{}'",
        escape_js_single_quoted(&markup)
    );
    escape_html(&script)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_and_quotes() {
        assert_eq!(
            escape_html(r#"<script>alert("x & 'y'")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; &#39;y&#39;&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn js_escaping_handles_quotes_and_tags() {
        assert_eq!(escape_js_single_quoted(r"it's \ <b>"), r"it\'s \\ \x3Cb>");
    }

    #[test]
    fn fallback_handler_has_no_raw_quotes_or_tags() {
        let handler = image_fallback_handler("[Image <failed> \"badly\"]");
        assert!(!handler.contains('"'));
        assert!(!handler.contains('<'));
        assert!(handler.starts_with("this.parentElement.innerHTML="));
        assert!(handler.contains("image-error"));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(256))]

            #[test]
            fn prop_escaped_text_has_no_markup_characters(text in any::<String>()) {
                let escaped = escape_html(&text);
                prop_assert!(!escaped.contains('<'));
                prop_assert!(!escaped.contains('>'));
                prop_assert!(!escaped.contains('"'));
                prop_assert!(!escaped.contains('\''));
            }

            #[test]
            fn prop_plain_text_passes_through(text in "[a-zA-Z0-9 .,:;!?-]{0,40}") {
                prop_assert_eq!(escape_html(&text), text);
            }
        }
    }
}
