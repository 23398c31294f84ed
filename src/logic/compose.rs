//! Compose dialog rules
//!
//! Pure functions deciding whether a draft can be posted and how the
//! character counter reads.

/// Soft length limit shown by the character counter
pub const MAX_POST_CHARS: usize = 280;

/// A draft can be posted once it contains something other than whitespace
///
/// # Examples
/// ```
/// use chirptui::logic::compose::is_postable;
///
/// assert!(is_postable("hello"));
/// assert!(!is_postable(""));
/// assert!(!is_postable("  \n\t"));
/// ```
pub fn is_postable(body: &str) -> bool {
    !body.trim().is_empty()
}

/// Number of characters typed (Unicode scalar values, not bytes)
pub fn char_count(body: &str) -> usize {
    body.chars().count()
}

/// Counter text shown under the input, e.g. "12/280"
pub fn format_char_counter(body: &str) -> String {
    format!("{}/{}", char_count(body), MAX_POST_CHARS)
}

/// Whether the counter should be highlighted. Posting is still allowed.
pub fn is_over_limit(body: &str) -> bool {
    char_count(body) > MAX_POST_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_postable() {
        assert!(is_postable("x"));
        assert!(is_postable("  padded  "));
        assert!(!is_postable(""));
        assert!(!is_postable("     "));
        assert!(!is_postable("\n\n"));
    }

    #[test]
    fn test_char_count_counts_chars_not_bytes() {
        assert_eq!(char_count(""), 0);
        assert_eq!(char_count("abc"), 3);
        assert_eq!(char_count("ñandú"), 5);
        assert_eq!(char_count("🚀🚀"), 2);
    }

    #[test]
    fn test_format_char_counter() {
        assert_eq!(format_char_counter(""), "0/280");
        assert_eq!(format_char_counter("hello"), "5/280");
    }

    #[test]
    fn test_is_over_limit() {
        let at_limit = "a".repeat(MAX_POST_CHARS);
        let over = "a".repeat(MAX_POST_CHARS + 1);
        assert!(!is_over_limit(&at_limit));
        assert!(is_over_limit(&over));
    }
}
