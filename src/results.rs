use serde::{Deserialize, Serialize};

/// Title used when a page has none
pub const UNTITLED_PAGE: &str = "Untitled Page";

/// Document-level metadata of an analyzed page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    /// Page title, or "Untitled Page"
    pub title: String,

    /// Meta description (empty if absent)
    pub meta_description: String,

    /// Canonical URL (if declared)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,

    /// Document language from `<html lang>` (if declared)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Default for PageMetadata {
    fn default() -> Self {
        Self {
            title: UNTITLED_PAGE.to_string(),
            meta_description: String::new(),
            canonical_url: None,
            language: None,
        }
    }
}

/// Heading texts per level, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageHeadings {
    pub h1: Vec<String>,
    pub h2: Vec<String>,
    pub h3: Vec<String>,
    pub h4: Vec<String>,
}

impl PageHeadings {
    /// Headings grouped by level, h1 first
    pub fn levels(&self) -> [&[String]; 4] {
        [&self.h1, &self.h2, &self.h3, &self.h4]
    }
}

/// Statistics for one phrase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhraseStat {
    /// Space-joined phrase
    pub keyword: String,

    /// Number of occurrences in the token stream
    pub count: usize,

    /// Occurrences over the number of phrase windows, in [0, 1]
    pub density: f64,

    /// Weighted structural placement score, in [0, 1]
    pub prominence: f64,
}

/// Complete output of a page analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// URL the page was fetched from (if it was fetched)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(flatten)]
    pub metadata: PageMetadata,

    pub headings: PageHeadings,

    /// Number of tokens in the cleaned body text
    pub total_words: usize,

    pub two_word_phrases: Vec<PhraseStat>,
    pub three_word_phrases: Vec<PhraseStat>,
    pub four_word_phrases: Vec<PhraseStat>,

    /// Cleaned body text, possibly truncated
    pub scraped_content: String,
}

impl AnalysisResult {
    /// Phrase list for a given phrase length
    pub fn phrases(&self, phrase_length: usize) -> Option<&[PhraseStat]> {
        match phrase_length {
            2 => Some(&self.two_word_phrases),
            3 => Some(&self.three_word_phrases),
            4 => Some(&self.four_word_phrases),
            _ => None,
        }
    }
}
