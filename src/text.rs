// src/text.rs — Text trimming, placeholders, excerpts and truncation

use serde_json::Value;

use crate::record::Record;

/// Case handling for [`starts_with`] / [`ends_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchCase {
    #[default]
    Sensitive,
    /// Compare Unicode-lowercased forms.
    Insensitive,
}

/// True only for the empty string; `null`, `0`, `false` and `[]` are not
/// empty strings.
pub fn is_empty_string(value: &Value) -> bool {
    matches!(value, Value::String(s) if s.is_empty())
}

/// Remove one leading occurrence of `prefix`.
pub fn trim_prefix<'a>(s: &'a str, prefix: &str) -> &'a str {
    s.strip_prefix(prefix).unwrap_or(s)
}

/// Remove one trailing occurrence of `suffix`.
pub fn trim_suffix<'a>(s: &'a str, suffix: &str) -> &'a str {
    s.strip_suffix(suffix).unwrap_or(s)
}

pub fn starts_with(s: &str, prefix: &str, case: MatchCase) -> bool {
    match case {
        MatchCase::Sensitive => s.starts_with(prefix),
        MatchCase::Insensitive => s.to_lowercase().starts_with(&prefix.to_lowercase()),
    }
}

pub fn ends_with(s: &str, suffix: &str, case: MatchCase) -> bool {
    match case {
        MatchCase::Sensitive => s.ends_with(suffix),
        MatchCase::Insensitive => s.to_lowercase().ends_with(&suffix.to_lowercase()),
    }
}

/// Replace `{key}` style placeholders with values from `data`.
///
/// String values are inserted as-is, `null` as an empty string, anything
/// else as its JSON text. Unknown placeholders are left alone.
pub fn parse_placeholders(text: &str, data: &Record, tag_start: &str, tag_end: &str) -> String {
    let mut out = text.to_string();
    for (key, value) in data {
        let tag = format!("{tag_start}{key}{tag_end}");
        let replacement = match value {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        };
        out = out.replace(&tag, &replacement);
    }
    out
}

/// Text before the first `more_tag`, trimmed. Whole text if there is no tag.
pub fn excerpt<'a>(text: &'a str, more_tag: &str) -> &'a str {
    match text.find(more_tag) {
        Some(pos) => text[..pos].trim(),
        None => text,
    }
}

/// Remove the first occurrence of `more_tag`.
pub fn strip_more_tag(text: &str, more_tag: &str) -> String {
    if more_tag.is_empty() {
        return text.to_string();
    }
    text.replacen(more_tag, "", 1)
}

/// Drop `<...>` markup, including quoted `>` inside attribute values.
pub fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    let mut quote: Option<char> = None;

    for c in text.chars() {
        if !in_tag {
            if c == '<' {
                in_tag = true;
            } else {
                out.push(c);
            }
            continue;
        }
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None => match c {
                '"' | '\'' => quote = Some(c),
                '>' => in_tag = false,
                _ => {}
            },
        }
    }
    out
}

/// Shorten text to `max_len` characters around an ellipsis.
///
/// Tags are stripped and the text trimmed first. If it is still longer than
/// `max_len` characters, `floor(max_len * position)` characters are kept from
/// the start and the rest of the budget from the end. `position` is clamped
/// to `0.0..=1.0`: 1 puts the ellipsis at the end, 0 at the start, 0.5 in
/// the middle.
pub fn ellipsize(text: &str, max_len: usize, position: f32, ellipsis: &str) -> String {
    let stripped = strip_tags(text);
    let s = stripped.trim();
    let chars: Vec<char> = s.chars().collect();

    if chars.len() <= max_len {
        return s.to_string();
    }

    let position = position.clamp(0.0, 1.0);
    let head_len = ((max_len as f32) * position).floor() as usize;
    let tail_len = max_len - head_len.min(max_len);

    let head: String = chars[..head_len].iter().collect();
    let tail: String = chars[chars.len() - tail_len..].iter().collect();
    format!("{head}{ellipsis}{tail}")
}

/// Truncate a string for display/logging (UTF-8 safe).
///
/// Returns a substring of at most `max_len` bytes, ensuring the cut
/// point falls on a valid UTF-8 character boundary.
pub fn truncate_str(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        &s[..end]
    }
}

/// Cut text to at most `max_chars` characters without splitting a word.
///
/// The cut falls on the last whitespace inside the limit; a single word
/// longer than the limit is cut hard. Trailing spaces and separators
/// (`,;:.-`) are dropped before `ellipsis` is appended. Text that already
/// fits is returned unchanged.
pub fn truncate_words(s: &str, max_chars: usize, ellipsis: &str) -> String {
    let Some((limit, next)) = s.char_indices().nth(max_chars) else {
        return s.to_string();
    };

    let head = &s[..limit];
    let cut = if next.is_whitespace() {
        head
    } else {
        match head.rfind(char::is_whitespace) {
            Some(pos) => &head[..pos],
            None => head,
        }
    };

    let cut = cut.trim_end_matches(|c: char| c.is_whitespace() || ",;:.-".contains(c));
    format!("{cut}{ellipsis}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::record;

    #[test]
    fn test_is_empty_string_is_strict() {
        assert!(is_empty_string(&Value::from("")));
        assert!(!is_empty_string(&Value::from(" ")));
        assert!(!is_empty_string(&Value::Null));
        assert!(!is_empty_string(&Value::from(0)));
        assert!(!is_empty_string(&Value::from(false)));
        assert!(!is_empty_string(&Value::Array(Vec::new())));
    }

    #[test]
    fn test_trim_prefix_suffix_once() {
        assert_eq!(trim_prefix("//a//", "/"), "/a//");
        assert_eq!(trim_suffix("//a//", "/"), "//a/");
        assert_eq!(trim_prefix("abc", "x"), "abc");
        assert_eq!(trim_suffix("abc", ""), "abc");
    }

    #[test]
    fn test_starts_ends_with_case() {
        assert!(starts_with("Привет мир", "прив", MatchCase::Insensitive));
        assert!(!starts_with("Привет мир", "прив", MatchCase::Sensitive));
        assert!(ends_with("photo.JPG", ".jpg", MatchCase::Insensitive));
        assert!(!ends_with("photo.JPG", ".jpg", MatchCase::Sensitive));
    }

    #[test]
    fn test_parse_placeholders() {
        let data = record([
            ("name", Value::from("Ann")),
            ("count", Value::from(3)),
            ("none", Value::Null),
        ]);
        assert_eq!(
            parse_placeholders("{name} has {count} items{none} {missing}", &data, "{", "}"),
            "Ann has 3 items {missing}"
        );
        assert_eq!(
            parse_placeholders("Hi [[name]]", &data, "[[", "]]"),
            "Hi Ann"
        );
    }

    #[test]
    fn test_excerpt() {
        assert_eq!(excerpt("Intro text \n<!--more-->Rest", "<!--more-->"), "Intro text");
        assert_eq!(excerpt("No tag here ", "<!--more-->"), "No tag here ");
    }

    #[test]
    fn test_strip_more_tag_first_only() {
        assert_eq!(
            strip_more_tag("a<!--more-->b<!--more-->c", "<!--more-->"),
            "ab<!--more-->c"
        );
        assert_eq!(strip_more_tag("plain", "<!--more-->"), "plain");
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("<p>Hello <b>world</b></p>"), "Hello world");
        assert_eq!(strip_tags(r#"<a title="x>y">link</a>"#), "link");
        assert_eq!(strip_tags("a < b"), "a ");
    }

    #[test]
    fn test_ellipsize_end() {
        assert_eq!(ellipsize("Hello wonderful world", 5, 1.0, "..."), "Hello...");
    }

    #[test]
    fn test_ellipsize_middle() {
        assert_eq!(ellipsize("abcdefghij", 6, 0.5, "…"), "abc…hij");
    }

    #[test]
    fn test_ellipsize_start() {
        assert_eq!(ellipsize("abcdefghij", 4, 0.0, "…"), "…ghij");
    }

    #[test]
    fn test_ellipsize_short_text_is_only_cleaned() {
        assert_eq!(ellipsize("  <i>short</i> ", 10, 0.5, "…"), "short");
    }

    #[test]
    fn test_ellipsize_counts_characters() {
        assert_eq!(ellipsize("ёжик в тумане", 4, 1.0, "…"), "ёжик…");
    }

    #[test]
    fn test_ellipsize_position_clamped() {
        assert_eq!(ellipsize("abcdefghij", 4, 3.0, "…"), "abcd…");
    }

    #[test]
    fn test_truncate_short() {
        assert_eq!(truncate_str("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_exact() {
        assert_eq!(truncate_str("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_long() {
        assert_eq!(truncate_str("hello world", 5), "hello");
    }

    #[test]
    fn test_truncate_multibyte() {
        // "café" is 5 bytes (é = 2 bytes), truncating at 4 should not split é
        let s = "café";
        let t = truncate_str(s, 4);
        assert_eq!(t, "caf");
    }

    #[test]
    fn test_truncate_zero_max() {
        assert_eq!(truncate_str("hello", 0), "");
    }

    #[test]
    fn test_truncate_words_at_space() {
        assert_eq!(
            truncate_words("The quick brown fox jumps", 12, "…"),
            "The quick…"
        );
    }

    #[test]
    fn test_truncate_words_exact_boundary() {
        assert_eq!(truncate_words("The quick brown fox", 9, "…"), "The quick…");
    }

    #[test]
    fn test_truncate_words_drops_separators() {
        assert_eq!(truncate_words("Hello, world and more", 8, "..."), "Hello...");
    }

    #[test]
    fn test_truncate_words_long_single_word() {
        assert_eq!(truncate_words("Supercalifragilistic", 5, "…"), "Super…");
    }

    #[test]
    fn test_truncate_words_fits() {
        assert_eq!(truncate_words("short text", 10, "…"), "short text");
        assert_eq!(truncate_words("", 0, "…"), "");
    }
}
