//! Helper utilities.

/// Escapes the HTML special characters in the text.
pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Converts an ASCII word to title case.
pub(crate) fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut output = String::with_capacity(word.len());
    output.push(first.to_ascii_uppercase());
    output.extend(chars.map(|ch| ch.to_ascii_lowercase()));
    output
}
