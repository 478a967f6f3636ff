//! End-of-stream inline-code repair.
//!
//! Pure text transforms, independent of `ParseContext`, so they can be
//! unit-tested directly against strings. `Reducer::close` is the only
//! caller: it runs these against the last paragraph's text and emits one
//! `Patch` if either rule changes anything.
//!
//! Both rules are deliberately conservative: if a guard fails, the text
//! is returned unchanged rather than guessed at.

/// Applies the two repair rules in order and returns the repaired text
/// if either fired, or `None` if the text should be left alone.
pub fn repair(text: &str) -> Option<String> {
    if let Some(repaired) = repair_inline_triple_backtick(text) {
        return Some(repaired);
    }
    repair_lone_backtick(text)
}

/// Rule 1: a paragraph with no newline that opens with ``` and ends
/// with exactly two backticks (not three) is missing its closing
/// backtick.
fn repair_inline_triple_backtick(text: &str) -> Option<String> {
    if text.contains('\n') {
        return None;
    }
    if text.starts_with("```") && text.ends_with("``") && !text.ends_with("```") {
        return Some(format!("{text}`"));
    }
    None
}

/// Rule 2: a paragraph carrying an odd count of non-triple backticks,
/// with the last one looking like an opener (non-empty, non-whitespace,
/// non-emphasis-marker content following it), and not currently inside
/// an incomplete triple-backtick run, is missing its closing backtick.
fn repair_lone_backtick(text: &str) -> Option<String> {
    let triple_runs = text.matches("```").count();
    if triple_runs % 2 != 0 {
        // Inside an incomplete ``` block, leave it alone.
        return None;
    }

    let total_backticks = text.chars().filter(|&c| c == '`').count();
    let non_triple_backticks = total_backticks.saturating_sub(triple_runs * 3);
    if non_triple_backticks % 2 != 1 {
        return None;
    }

    if looks_like_opener(text) {
        Some(format!("{text}`"))
    } else {
        None
    }
}

/// Checks whether the last backtick in `text` is followed by non-empty,
/// non-whitespace content containing at least one alphanumeric
/// character: it reads like `` `word `` rather than a bare trailing
/// backtick or an emphasis marker run like `` `**` ``.
fn looks_like_opener(text: &str) -> bool {
    let Some(pos) = text.rfind('`') else {
        return false;
    };
    let after = &text[pos + 1..];
    if after.is_empty() {
        return false;
    }
    if after.starts_with(char::is_whitespace) {
        return false;
    }
    after.chars().any(|c| c.is_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repair_lone_backtick_appends_closer() {
        assert_eq!(repair("`foo").as_deref(), Some("`foo`"));
    }

    #[test]
    fn test_repair_leaves_closed_inline_code_alone() {
        assert_eq!(repair("`foo`"), None);
    }

    #[test]
    fn test_repair_leaves_plain_text_alone() {
        assert_eq!(repair("just text"), None);
    }

    #[test]
    fn test_repair_bare_trailing_backtick_not_an_opener() {
        assert_eq!(repair("some text`"), None);
    }

    #[test]
    fn test_repair_inline_triple_backtick_missing_closer() {
        assert_eq!(repair("```rust fn main").as_deref(), Some("```rust fn main`"));
    }

    #[test]
    fn test_repair_triple_backtick_already_closed() {
        assert_eq!(repair("```rust```"), None);
    }

    #[test]
    fn test_repair_multiline_text_untouched() {
        assert_eq!(repair("`foo\nbar"), None);
    }

    #[test]
    fn test_repair_even_backtick_count_untouched() {
        assert_eq!(repair("`a` and `b"), Some("`a` and `b`".to_string()));
        // two closed spans plus a new opener: 3 backticks total -> odd -> repairs the open one
        assert_eq!(repair("`a``b`"), None);
    }
}
