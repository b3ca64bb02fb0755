/// Text validation rules for comments
///
/// Two rules apply to every comment accepted through the API:
/// - no whitespace-separated token may exactly match a forbidden word
///   (checked case-sensitively on the raw input, before any transform);
/// - the text must be at least [`MIN_TEXT_CHARS`] characters long after
///   the canonical casing transform.
use thiserror::Error;

/// Words that may not appear as standalone tokens in a comment
pub const FORBIDDEN_WORDS: &[&str] = &[
    "test",
    "тест",
    "тестовый",
    "тестовое",
    "тестовая",
    "тестовые",
    "тестовых",
];

/// Minimum accepted text length, in Unicode scalar values
pub const MIN_TEXT_CHARS: usize = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TextError {
    #[error("forbidden word '{0}'")]
    ForbiddenWord(&'static str),

    #[error("comment text is too short ({length} chars, minimum {MIN_TEXT_CHARS})")]
    TooShort { length: usize },
}

/// Returns the first forbidden word appearing as a standalone token, if any.
///
/// Matching is exact and case-sensitive; a forbidden word embedded in a
/// longer token does not count.
pub fn find_forbidden_word(text: &str) -> Option<&'static str> {
    text.split_whitespace()
        .find_map(|token| FORBIDDEN_WORDS.iter().find(|w| **w == token).copied())
}

/// Canonical casing transform: first character upper-cased, remainder
/// lower-cased.
///
/// Applied both when comments are accepted through the API and when the
/// bulk update job rewrites existing comments, so a rerun is a no-op.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(text.len());
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

/// Validates raw comment text and returns the canonical form to store.
///
/// The forbidden-word check runs on the raw input; the length check runs
/// on the transformed value.
pub fn validate_text(raw: &str) -> Result<String, TextError> {
    if let Some(word) = find_forbidden_word(raw) {
        return Err(TextError::ForbiddenWord(word));
    }

    let text = capitalize(raw);
    let length = text.chars().count();
    if length < MIN_TEXT_CHARS {
        return Err(TextError::TooShort { length });
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_forbidden_word_is_rejected_as_a_token() {
        for word in FORBIDDEN_WORDS {
            let text = format!("это {} комментарий", word);
            assert_eq!(find_forbidden_word(&text), Some(*word));
            assert_eq!(validate_text(&text), Err(TextError::ForbiddenWord(*word)));
        }
    }

    #[test]
    fn forbidden_word_inside_longer_token_passes() {
        assert_eq!(find_forbidden_word("testing the waters here"), None);
        assert_eq!(find_forbidden_word("протестировано полностью"), None);
    }

    #[test]
    fn forbidden_check_is_case_sensitive() {
        // The transform runs after the check, so "Test" slips through.
        assert_eq!(find_forbidden_word("Test comment body"), None);
        assert!(validate_text("Test comment body").is_ok());
    }

    #[test]
    fn short_text_is_rejected() {
        assert_eq!(
            validate_text("short"),
            Err(TextError::TooShort { length: 5 })
        );
        assert_eq!(validate_text(""), Err(TextError::TooShort { length: 0 }));
    }

    #[test]
    fn exactly_ten_chars_is_accepted() {
        assert_eq!(validate_text("abcdefghij").as_deref(), Ok("Abcdefghij"));
    }

    #[test]
    fn capitalize_uppercases_first_and_lowercases_rest() {
        assert_eq!(capitalize("hELLO WORLD"), "Hello world");
        assert_eq!(capitalize("привет МИР"), "Привет мир");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn capitalize_is_idempotent() {
        let once = capitalize("A Mixed CASE comment");
        assert_eq!(capitalize(&once), once);
    }

    #[test]
    fn validated_text_starts_with_uppercase() {
        let stored = validate_text("everything fine here").expect("valid text");
        let first = stored.chars().next().expect("non-empty");
        assert!(first.is_uppercase());
        assert_eq!(stored, "Everything fine here");
    }
}
