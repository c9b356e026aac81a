const MAX_VISIBLE_CHARS: usize = 80;

/// Shortens user-submitted text for log lines. Uploaded dictation can hold
/// patient details, so only a short prefix is ever logged.
pub fn redact_for_log(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let visible: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
    if visible.len() < trimmed.len() {
        format!("{}... ({} chars total)", visible, trimmed.chars().count())
    } else {
        visible
    }
}
