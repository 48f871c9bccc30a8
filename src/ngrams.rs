use crate::tokenizer::is_valid_phrase;
use std::collections::HashMap;

/// Phrase lengths reported in an analysis result
pub const PHRASE_LENGTHS: [usize; 3] = [2, 3, 4];

/// Number of phrases kept per length by default
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Raw occurrence count of one phrase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseCount {
    pub phrase: String,
    pub count: usize,
}

/// Counts every valid `n`-token phrase, keeping first-seen order
pub fn count_phrases(tokens: &[String], n: usize) -> Vec<PhraseCount> {
    if n == 0 || tokens.len() < n {
        return Vec::new();
    }

    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<PhraseCount> = Vec::new();

    for window in tokens.windows(n) {
        let phrase = window.join(" ");
        if !is_valid_phrase(&phrase) {
            continue;
        }

        match index.get(&phrase) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(phrase.clone(), counts.len());
                counts.push(PhraseCount { phrase, count: 1 });
            }
        }
    }

    ::log::trace!("Counted {} distinct {}-word phrases", counts.len(), n);
    counts
}

/// Sorts by count descending and keeps the first `max_results`
///
/// The sort is stable, so equal counts keep first-seen order.
pub fn top_phrases(mut counts: Vec<PhraseCount>, max_results: usize) -> Vec<PhraseCount> {
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(max_results);
    counts
}
