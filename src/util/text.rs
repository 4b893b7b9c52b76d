use std::borrow::Cow;

/// Returns `true` for characters XML 1.0 does not allow in a document.
///
/// Covers the C0 controls other than tab (0x09), newline (0x0A) and carriage
/// return (0x0D), plus the non-characters U+FFFE and U+FFFF.
fn is_disallowed(c: char) -> bool {
    matches!(
        c,
        '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}'
    )
}

/// Strip characters that would make a document ill-formed XML.
///
/// Feed titles and descriptions often come from scraped or user-controlled
/// text, so stray NUL, ESC or other control bytes are removed rather than
/// written. Escaping cannot help here: XML 1.0 has no character reference for
/// them either.
///
/// Preserves: tab (0x09), newline (0x0A), carriage return (0x0D).
///
/// Returns `Cow::Borrowed` when the input contains nothing to strip (common case).
///
/// # Examples
///
/// ```
/// use rssgen::util::strip_control_chars;
///
/// assert_eq!(strip_control_chars("Tom\u{0} & \x1bJerry"), "Tom & Jerry");
/// assert_eq!(strip_control_chars("line\nbreak\ttab"), "line\nbreak\ttab");
/// ```
pub fn strip_control_chars(s: &str) -> Cow<'_, str> {
    if !s.chars().any(is_disallowed) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(|&c| !is_disallowed(c)).collect())
}
