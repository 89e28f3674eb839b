use alloc::string::String;

/// Escapes text so it can be placed in element content or a quoted attribute
/// without closing either. Surrounding whitespace is dropped.
pub fn escape_markup(text: &str) -> String {
    let text = text.trim();
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
