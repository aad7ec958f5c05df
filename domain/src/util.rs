//! Shared utility functions.

use serde_json::Value;

/// Truncate a string to approximately `max_bytes` without splitting a UTF-8
/// character boundary.
///
/// Returns a sub-slice of the original string. If the string is shorter than
/// `max_bytes`, the entire string is returned unchanged.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Compact single-line rendering of a JSON value for log fields, cut to
/// `max_bytes` with a trailing ellipsis when longer.
pub fn preview_json(value: &Value, max_bytes: usize) -> String {
    let rendered = value.to_string();
    if rendered.len() <= max_bytes {
        rendered
    } else {
        format!("{}...", truncate_str(&rendered, max_bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn preview_short_value_unchanged() {
        assert_eq!(preview_json(&json!({"location": "Paris"}), 64), r#"{"location":"Paris"}"#);
    }

    #[test]
    fn preview_long_value_truncated() {
        let preview = preview_json(&json!({"location": "Llanfairpwllgwyngyll"}), 10);
        assert_eq!(preview, r#"{"location..."#);
    }

    #[test]
    fn truncate_ascii_location() {
        assert_eq!(truncate_str("Rio de Janeiro", 3), "Rio");
    }

    #[test]
    fn truncate_no_op_when_short() {
        assert_eq!(truncate_str("hi", 10), "hi");
    }

    #[test]
    fn truncate_multibyte_boundary() {
        let s = "あのね";
        assert_eq!(truncate_str(s, 4), "あ");
        assert_eq!(truncate_str(s, 6), "あの");
    }

    #[test]
    fn truncate_empty() {
        assert_eq!(truncate_str("", 10), "");
    }
}
