//! Shared text helpers

use unicode_width::UnicodeWidthChar;

/// Truncate a string to at most `max_bytes` on a UTF-8 character boundary.
pub fn truncate_utf8_safe(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// The longest suffix of `s` that fits in `max_width` terminal columns.
///
/// Used by the email field so the caret end of long input stays visible.
pub fn tail_to_width(s: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut start = s.len();
    for (idx, ch) in s.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        start = idx;
    }
    &s[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_at_utf8_boundary() {
        assert_eq!(truncate_utf8_safe("hello world", 5), "hello");
        assert_eq!(truncate_utf8_safe("日本語", 4), "日");
        assert_eq!(truncate_utf8_safe("short", 10), "short");
    }

    #[test]
    fn test_tail_fits_width() {
        assert_eq!(tail_to_width("user@example.com", 7), "ple.com");
        assert_eq!(tail_to_width("abc", 10), "abc");
        assert_eq!(tail_to_width("abc", 0), "");
    }

    #[test]
    fn test_tail_counts_wide_chars() {
        // Each CJK character is two columns wide
        assert_eq!(tail_to_width("日本語", 4), "本語");
        assert_eq!(tail_to_width("日本語", 5), "本語");
    }
}
