//! Markup stripping and word-count helpers
//!
//! The editor stores rich text as a markup string. The word counter
//! strips tags, then counts whitespace-delimited tokens. Pure
//! functions, no side effects: re-running on the same content always
//! yields the same result.

use regex::Regex;
use std::sync::LazyLock;

/// Default writing goal used for the progress bar, in words.
pub const DEFAULT_WORD_GOAL: usize = 1000;

/// Markup tags: anything between angle brackets.
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Strip markup tags from content, leaving plain text.
///
/// # Examples
///
/// ```
/// use scenepad_core::utils::strip_markup;
///
/// assert_eq!(strip_markup("<p>Hello <b>world</b></p>"), "Hello world");
/// assert_eq!(strip_markup("no tags here"), "no tags here");
/// ```
pub fn strip_markup(content: &str) -> String {
    TAG_RE.replace_all(content, "").trim().to_string()
}

/// Count whitespace-delimited words in content, ignoring markup tags.
///
/// Empty content yields 0.
pub fn word_count(content: &str) -> usize {
    strip_markup(content).split_whitespace().count()
}

/// Progress toward the writing goal as a percentage, capped at 100.
pub fn progress_percent(count: usize, goal: usize) -> f64 {
    if goal == 0 {
        return if count > 0 { 100.0 } else { 0.0 };
    }
    ((count as f64 / goal as f64) * 100.0).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags() {
        assert_eq!(strip_markup("<p>one two</p>"), "one two");
        assert_eq!(strip_markup("text <br/> more"), "text  more");
        assert_eq!(strip_markup("<div><span>nested</span></div>"), "nested");
    }

    #[test]
    fn stripping_is_idempotent() {
        let content = "<p>It was a <b>dark</b> and stormy night.</p>";
        let once = strip_markup(content);
        assert_eq!(strip_markup(&once), once);
    }

    #[test]
    fn counts_whitespace_delimited_words() {
        assert_eq!(word_count("<p>one two three</p>"), 3);
        assert_eq!(word_count("one\n  two\tthree four"), 4);
    }

    #[test]
    fn empty_content_counts_zero() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
        assert_eq!(word_count("<p></p>"), 0);
    }

    #[test]
    fn word_count_is_stable_under_rerun() {
        let content = "<h1>Title</h1><p>body text here</p>";
        assert_eq!(word_count(content), word_count(content));
    }

    #[test]
    fn progress_caps_at_one_hundred() {
        assert_eq!(progress_percent(500, 1000), 50.0);
        assert_eq!(progress_percent(2000, 1000), 100.0);
        assert_eq!(progress_percent(0, 1000), 0.0);
    }

    #[test]
    fn zero_goal_does_not_divide() {
        assert_eq!(progress_percent(0, 0), 0.0);
        assert_eq!(progress_percent(5, 0), 100.0);
    }
}
