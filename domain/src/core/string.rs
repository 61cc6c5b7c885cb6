//! String utilities for the domain layer.

/// Single-line preview of a text, truncated with an ellipsis (UTF-8 safe)
///
/// Line breaks are folded into spaces so the preview fits one log line or
/// one spinner message. `max_len` is measured in bytes.
pub fn preview(s: &str, max_len: usize) -> String {
    let flat: String = s
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if flat.len() <= max_len {
        return flat;
    }
    let mut end = max_len.saturating_sub(3);
    while end > 0 && !flat.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &flat[..end])
}
