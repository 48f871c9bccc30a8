use crate::utils::round_to;

/// Keyword density of a phrase: its count over the number of `phrase_length` windows
///
/// Returns `None` when the token stream is shorter than the phrase, since no
/// window exists. The result is rounded to 4 decimal places.
pub fn keyword_density(count: usize, total_words: usize, phrase_length: usize) -> Option<f64> {
    if phrase_length == 0 || total_words < phrase_length {
        return None;
    }

    let windows = total_words - phrase_length + 1;
    let density = count as f64 / windows as f64;
    Some(round_to(density.min(1.0), 4))
}
