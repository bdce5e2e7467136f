//! Small text helpers for rendering.

/// Truncate a string to `max` characters, appending an ellipsis when
/// anything was cut. Char-based, so multibyte input never splits.
pub fn truncate_end(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let count = s.chars().count();
    if count <= max {
        return s.to_string();
    }
    if max == 1 {
        return "…".to_string();
    }
    let kept: String = s.chars().take(max - 1).collect();
    format!("{kept}…")
}

/// Normalize CRLF and lone CR line endings to LF.
///
/// Catalog descriptions are free-form markdown-ish text and some carry
/// Windows line endings; the paragraph widget only understands `\n`.
pub fn normalize_newlines(s: &str) -> String {
    s.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_end_short_input_untouched() {
        assert_eq!(truncate_end("adyen.com", 20), "adyen.com");
        assert_eq!(truncate_end("", 5), "");
    }

    #[test]
    fn test_truncate_end_cuts_with_ellipsis() {
        assert_eq!(truncate_end("averylongprovider.example", 10), "averylong…");
        assert_eq!(truncate_end("abc", 2), "a…");
        assert_eq!(truncate_end("abc", 1), "…");
    }

    #[test]
    fn test_truncate_end_zero_width() {
        assert_eq!(truncate_end("abc", 0), "");
    }

    #[test]
    fn test_truncate_end_multibyte_safe() {
        // Must not panic splitting a multibyte char
        assert_eq!(truncate_end("ünïcödé.example", 4), "ünï…");
        assert_eq!(truncate_end("日本語のプロバイダ", 3), "日本…");
    }

    #[test]
    fn test_normalize_newlines() {
        assert_eq!(normalize_newlines("a\r\nb\rc\nd"), "a\nb\nc\nd");
        assert_eq!(normalize_newlines("plain"), "plain");
    }
}
