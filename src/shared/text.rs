/// Form fields arrive untrimmed; every content module stores them trimmed.
pub fn clean(value: &str) -> String {
    value.trim().to_string()
}

/// Trimmed value, or `None` when nothing is left.
pub fn clean_opt(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// `"a, b,,c "` becomes `["a", "b", "c"]`.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// First `max` characters, counted as chars rather than bytes.
pub fn truncate_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

pub fn html_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
