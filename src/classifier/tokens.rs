// Tokenizer shared by the sentiment and emotion passes
//
// Lowercases the whole input first, then splits on runs of characters outside
// the ASCII word class [A-Za-z0-9_]. Empty tokens produced by leading or
// trailing separators are dropped; they can never match a keyword anyway.

/// True for characters in the ASCII word class
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Split text into lowercase word tokens
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_splits_punctuation() {
        assert_eq!(
            tokenize("I'm SO happy, really!"),
            vec!["i", "m", "so", "happy", "really"]
        );
    }

    #[test]
    fn test_tokenize_empty_and_separators_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ...  !!").is_empty());
    }

    #[test]
    fn test_underscore_and_digits_are_word_chars() {
        assert_eq!(tokenize("feel_good 24/7"), vec!["feel_good", "24", "7"]);
    }

    #[test]
    fn test_non_ascii_letters_split_tokens() {
        // "é" is outside the ASCII word class, so "café" loses its last letter
        assert_eq!(tokenize("Café sad"), vec!["caf", "sad"]);
    }
}
