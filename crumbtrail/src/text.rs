//! Text helpers for crumb labels.

/// Maximum number of characters shown for an ancestor crumb.
pub const MAX_TITLE_LENGTH: usize = 40;

const ELLIPSIS: char = '…';

/// Truncates a title to [`MAX_TITLE_LENGTH`] characters.
///
/// Titles that fit are returned unchanged. Longer titles are cut at the last
/// word boundary that leaves room for the ellipsis, trailing whitespace is
/// trimmed and `…` appended.
///
/// # Examples
///
/// ```
/// use crumbtrail::text::truncate_title;
///
/// assert_eq!(truncate_title("Page One"), "Page One");
/// assert_eq!(
///     truncate_title("Title Should Be Truncated to Forty Characters"),
///     "Title Should Be Truncated to Forty…"
/// );
/// ```
#[must_use]
pub fn truncate_title(title: &str) -> String {
    truncate(title, MAX_TITLE_LENGTH)
}

/// Word-safe truncation to `max_length` characters including the ellipsis.
#[must_use]
pub fn truncate(text: &str, max_length: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_length {
        return text.to_string();
    }

    let limit = max_length.saturating_sub(1);

    // Longest prefix of 1..=limit characters followed by a boundary.
    let cut = (1..=limit)
        .rev()
        .find(|&len| is_word_boundary(chars[len]))
        .unwrap_or(limit);

    let mut truncated: String = chars[..cut].iter().collect();
    truncated.truncate(truncated.trim_end().len());
    truncated.push(ELLIPSIS);
    truncated
}

fn is_word_boundary(c: char) -> bool {
    c.is_whitespace() || c.is_ascii_punctuation() || is_unicode_punctuation(c)
}

fn is_unicode_punctuation(c: char) -> bool {
    matches!(
        c,
        '\u{2010}'..='\u{2027}' | '\u{2030}'..='\u{205E}' | '\u{3000}'..='\u{303F}' | '\u{00A1}'
            | '\u{00A7}' | '\u{00AB}' | '\u{00B6}' | '\u{00B7}' | '\u{00BB}' | '\u{00BF}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_exact_length_untouched() {
        let title = "a".repeat(MAX_TITLE_LENGTH);
        assert_eq!(truncate_title(&title), title);
    }

    #[test]
    fn test_no_boundary_hard_cut() {
        let title = "x".repeat(50);
        let truncated = truncate_title(&title);
        assert_eq!(truncated.chars().count(), MAX_TITLE_LENGTH);
        assert!(truncated.ends_with('…'));
    }

    #[test]
    fn test_cuts_at_punctuation() {
        assert_eq!(truncate("alpha,beta gamma", 10), "alpha…");
    }

    #[test]
    fn test_multibyte_counts_characters() {
        let title = "é".repeat(45);
        let truncated = truncate_title(&title);
        assert_eq!(truncated.chars().count(), MAX_TITLE_LENGTH);
    }

    #[test]
    fn test_trailing_space_trimmed() {
        assert_eq!(truncate("one two   three four", 10), "one two…");
    }

    proptest! {
        #[test]
        fn truncated_never_exceeds_limit(title in "\\PC{0,120}") {
            let truncated = truncate_title(&title);
            prop_assert!(truncated.chars().count() <= MAX_TITLE_LENGTH);
        }

        #[test]
        fn short_titles_are_identity(title in "\\PC{0,40}") {
            prop_assert_eq!(truncate_title(&title), title);
        }
    }
}
