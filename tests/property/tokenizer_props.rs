//! Tokenizer span properties.

use proptest::prelude::*;
use verso::split_words;

/// Mixed text: ASCII words, digits, punctuation, whitespace and multi-byte letters.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 ,.;:!?'\\-éüñ中]{0,60}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Property: every token is a maximal alphanumeric run.
    #[test]
    fn prop_tokens_are_maximal_alnum_runs(text in text_strategy()) {
        for token in split_words(&text) {
            prop_assert!(token.start < token.end);
            let raw = &text[token.start..token.end];
            prop_assert!(raw.chars().all(char::is_alphanumeric), "non-alnum in {:?}", raw);
            if let Some(before) = text[..token.start].chars().next_back() {
                prop_assert!(!before.is_alphanumeric());
            }
            if let Some(after) = text[token.end..].chars().next() {
                prop_assert!(!after.is_alphanumeric());
            }
        }
    }

    /// Property: spans plus the gaps between them rebuild the text, and no gap holds a word.
    #[test]
    fn prop_spans_and_gaps_reconstruct_text(text in text_strategy()) {
        let mut rebuilt = String::new();
        let mut cursor = 0;
        for token in split_words(&text) {
            let gap = &text[cursor..token.start];
            prop_assert!(!gap.chars().any(char::is_alphanumeric), "word hidden in gap {:?}", gap);
            rebuilt.push_str(gap);
            rebuilt.push_str(&text[token.start..token.end]);
            cursor = token.end;
        }
        let tail = &text[cursor..];
        prop_assert!(!tail.chars().any(char::is_alphanumeric));
        rebuilt.push_str(tail);
        prop_assert_eq!(rebuilt, text);
    }

    /// Property: text without letters or digits yields nothing.
    #[test]
    fn prop_punctuation_yields_no_tokens(text in "[ ,.;:!?'\\-]{0,30}") {
        prop_assert!(split_words(&text).is_empty());
    }

    /// Property: a trailing single alnum character is captured.
    #[test]
    fn prop_trailing_character_captured(prefix in text_strategy(), last in "[a-z0-9]") {
        let text = format!("{} {}", prefix, last);
        let tokens = split_words(&text);
        let final_token = tokens.last().unwrap();
        prop_assert_eq!(final_token.end, text.len());
        prop_assert_eq!(&final_token.value, &last);
    }
}
