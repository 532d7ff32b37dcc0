use std::borrow::Cow;

/// Escapes `&`, `<` and `>` for use in HTML text. Quotes are left alone.
pub fn escape_text(s: &str) -> Cow<'_, str> {
    html_escape::encode_text(s)
}

/// Escapes a value placed inside a double-quoted attribute.
///
/// Same as [`escape_text`] plus `"`.
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(s)
}
