//! Minimal HTML escaping for rendered fragments.

/// Escapes text for inclusion in an HTML fragment.
///
/// Replaces each of `& < > " ' /` with its HTML entity. Callers rendering
/// untrusted text into a fragment must pass it through here first.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '/' => out.push_str("&#x2F;"),
            _ => out.push(c),
        }
    }
    out
}
