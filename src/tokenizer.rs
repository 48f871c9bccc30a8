/// Default minimum token length, in characters
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

/// Splits text into validated lowercase tokens
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    min_word_length: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_WORD_LENGTH)
    }
}

impl Tokenizer {
    pub fn new(min_word_length: usize) -> Self {
        Self { min_word_length }
    }

    pub fn min_word_length(&self) -> usize {
        self.min_word_length
    }

    /// Lowercases the text, splits on whitespace and keeps only valid tokens
    ///
    /// Leading and trailing punctuation is trimmed from each word first, so
    /// `"SEO,"` and `"seo"` produce the same token while `e-commerce` keeps
    /// its inner hyphen.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split_whitespace()
            .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|word| self.is_valid_token(word))
            .map(str::to_string)
            .collect()
    }

    /// A token is valid if it is long enough, not purely numeric, and has a letter
    pub fn is_valid_token(&self, token: &str) -> bool {
        token.chars().count() >= self.min_word_length && has_letter_and_is_not_numeric(token)
    }
}

/// Same checks as tokens, applied to a whole phrase with a fixed 3 character minimum
pub fn is_valid_phrase(phrase: &str) -> bool {
    phrase.chars().count() >= 3 && has_letter_and_is_not_numeric(phrase)
}

fn has_letter_and_is_not_numeric(text: &str) -> bool {
    let all_digits = !text.is_empty() && text.chars().all(|c| c.is_ascii_digit());
    !all_digits && text.chars().any(char::is_alphabetic)
}
