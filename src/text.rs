//! DTerm Text Escaping
//!
//! Keeps authored spacing intact on a markup surface: spaces become
//! non-breaking spaces and line breaks become explicit `<br>` markup.
//! Nothing else is escaped, so callers must not pass untrusted text.

/// Non-breaking space markup
pub const NBSP: &str = "&nbsp;";
/// Line break markup
pub const BR: &str = "<br>";

/// Escape spaces and line breaks (`\r\n`, `\n` or a lone `\r`)
pub fn escape_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 2);
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            ' ' => out.push_str(NBSP),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str(BR);
            }
            '\n' => out.push_str(BR),
            other => out.push(other),
        }
    }
    out
}
