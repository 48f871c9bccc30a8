/// Collapses every run of whitespace (spaces, tabs, CR/LF, NBSP) into a single space
///
/// Leading and trailing whitespace is removed.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Returns true if the text contains nothing but whitespace
pub fn is_blank(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}
