// Output formatting — terminal display of run results.

pub mod terminal;

/// Shorten `text` to `max_chars` characters for log lines and tables,
/// marking the cut with "...". Cuts on character boundaries, so Ethiopic
/// script and emoji are safe.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
