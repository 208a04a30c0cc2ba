//! Text processing utilities.
//!
//! Tokenizers for the two sentiment analyzers.

/// Split text into sentiment tokens, preserving case.
///
/// Tokens are whitespace-separated. Leading and trailing punctuation is
/// stripped unless that would leave two characters or fewer, which keeps
/// emoticons such as `:)` and `<3` intact. Single-character tokens are dropped.
pub fn sentiment_tokens(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(strip_punctuation_if_word)
        .filter(|token| token.chars().count() > 1)
        .map(str::to_string)
        .collect()
}

/// Extract lowercase words, stripping punctuation but keeping `'` and `-`.
pub fn extract_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'' && c != '-'))
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect()
}

/// Returns `true` when every cased character in `word` is uppercase and
/// there is at least one.
pub fn is_all_caps(word: &str) -> bool {
    let mut saw_cased = false;
    for c in word.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            saw_cased = true;
        }
    }
    saw_cased
}

/// Returns `true` when some, but not all, tokens are ALL CAPS.
pub fn has_mixed_case(tokens: &[String]) -> bool {
    let caps = tokens.iter().filter(|t| is_all_caps(t)).count();
    caps > 0 && caps < tokens.len()
}

fn strip_punctuation_if_word(token: &str) -> &str {
    let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
    if stripped.chars().count() <= 2 {
        token
    } else {
        stripped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_tokens_strip_punctuation() {
        let tokens = sentiment_tokens("I absolutely love this, it's amazing!");
        assert_eq!(tokens, vec!["absolutely", "love", "this", "it's", "amazing"]);
    }

    #[test]
    fn sentiment_tokens_keep_emoticons() {
        let tokens = sentiment_tokens("great :) but :-( ok");
        assert_eq!(tokens, vec!["great", ":)", "but", ":-(", "ok"]);
    }

    #[test]
    fn sentiment_tokens_empty_input() {
        assert!(sentiment_tokens("").is_empty());
        assert!(sentiment_tokens("   \n\t ").is_empty());
    }

    #[test]
    fn extract_words_basic() {
        let words = extract_words("Hello, world! It's a well-known fact.");
        assert_eq!(words, vec!["hello", "world", "it's", "a", "well-known", "fact"]);
    }

    #[test]
    fn all_caps_detection() {
        assert!(is_all_caps("GREAT"));
        assert!(is_all_caps("WOW!"));
        assert!(!is_all_caps("Great"));
        assert!(!is_all_caps("123"));
    }

    #[test]
    fn mixed_case_needs_both_kinds() {
        let mixed: Vec<String> = ["this", "is", "GREAT"].map(String::from).to_vec();
        let shouting: Vec<String> = ["THIS", "IS", "GREAT"].map(String::from).to_vec();
        assert!(has_mixed_case(&mixed));
        assert!(!has_mixed_case(&shouting));
        assert!(!has_mixed_case(&[]));
    }
}
