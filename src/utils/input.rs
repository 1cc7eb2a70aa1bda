//! Input hygiene helpers.
//!
//! Terminals execute control sequences rather than markup, so the transcript
//! equivalent of HTML escaping is stripping control characters: whatever a
//! user types or a server returns is rendered as literal text.

/// True when the text would be rejected pre-flight (empty or whitespace).
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Remove control characters (including ESC) while keeping all printable
/// text intact. Newlines survive so multi-line replies keep their shape.
pub fn sanitize_display_text(text: &str) -> String {
    text.chars()
        .filter(|c| *c == '\n' || !c.is_control())
        .collect()
}
