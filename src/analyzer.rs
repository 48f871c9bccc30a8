use crate::config::AnalyzerConfig;
use crate::density::keyword_density;
use crate::error::{Error, Result};
use crate::fetch::WebFetcher;
use crate::filter::ContentFilter;
use crate::metadata::{extract_headings, extract_metadata};
use crate::ngrams::{count_phrases, top_phrases};
use crate::parsers::html::{HtmlDocument, looks_like_html};
use crate::parsers::text::is_blank;
use crate::prominence::{ProminenceContext, ProminenceScorer, ProminenceWeights};
use crate::results::{AnalysisResult, PhraseStat, UNTITLED_PAGE};
use crate::tokenizer::Tokenizer;
use crate::utils::truncate_chars;

/// Builder and entry point for page analysis
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalyzerConfig,
    filter: ContentFilter,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    /// Create an analyzer with default settings
    pub fn new() -> Self {
        Self {
            config: AnalyzerConfig::default(),
            filter: ContentFilter::default(),
        }
    }

    /// Create an analyzer from a configuration, compiling its filter rules
    pub fn from_config(config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        let filter = ContentFilter::new(config.filter.clone())?;
        Ok(Self { config, filter })
    }

    /// Replace all settings at once, including the filter rules
    pub fn with_config(self, config: AnalyzerConfig) -> Result<Self> {
        Self::from_config(config)
    }

    /// Set the longest phrase length to report (2 to 4)
    pub fn with_max_phrase_length(mut self, max_phrase_length: usize) -> Self {
        self.config.max_phrase_length = max_phrase_length;
        self
    }

    /// Set the minimum token length
    pub fn with_min_word_length(mut self, min_word_length: usize) -> Self {
        self.config.min_word_length = min_word_length;
        self
    }

    /// Set the number of phrases kept per length
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.config.max_results = max_results;
        self
    }

    /// Set the prominence weights
    pub fn with_weights(mut self, weights: ProminenceWeights) -> Self {
        self.config.weights = weights;
        self
    }

    /// Enable or disable the body-position prominence term
    pub fn with_position_scoring(mut self, enabled: bool) -> Self {
        self.config.position_scoring = enabled;
        self
    }

    /// Set the `scrapedContent` length cap (None keeps the full text)
    pub fn with_max_content_chars(mut self, max_content_chars: Option<usize>) -> Self {
        self.config.max_content_chars = max_content_chars;
        self
    }

    /// Replace the boilerplate filter
    pub fn with_filter(mut self, filter: ContentFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Fetch a page through WebDriver and analyze it
    pub async fn analyze_url(&self, fetcher: &WebFetcher, url: &str) -> Result<AnalysisResult> {
        let page = fetcher.fetch(url).await?;
        let mut result = self.analyze(&page.html)?;
        result.url = Some(page.final_url);
        Ok(result)
    }

    /// Analyze an HTML document
    ///
    /// Only the input checks, cleaning and tokenization can fail. Metadata,
    /// headings and prominence fall back to defaults on their own.
    pub fn analyze(&self, html: &str) -> Result<AnalysisResult> {
        self.config.validate()?;

        if html.len() > self.config.max_html_bytes {
            return Err(Error::InputTooLarge {
                size: html.len(),
                limit: self.config.max_html_bytes,
            });
        }
        if !looks_like_html(html) {
            return Err(Error::InvalidHtml);
        }

        let doc = HtmlDocument::parse(html);
        let metadata = extract_metadata(&doc);
        let headings = extract_headings(&doc);

        let clean_text = doc.clean_text();
        if is_blank(&clean_text) {
            return Err(Error::EmptyContent);
        }

        let filtered = self.filter.apply(&clean_text);
        ::log::debug!(
            "Boilerplate filter reduced body text from {} to {} bytes",
            clean_text.len(),
            filtered.len()
        );

        let tokens = Tokenizer::new(self.config.min_word_length).tokenize(&filtered);
        if tokens.is_empty() {
            return Err(Error::EmptyContent);
        }

        // The default title says nothing about the page, so it never scores
        let scoring_title = if metadata.title == UNTITLED_PAGE {
            ""
        } else {
            metadata.title.as_str()
        };
        let context = ProminenceContext::new(scoring_title, &headings).with_body_text(&tokens.join(" "));
        let scorer = ProminenceScorer::new(self.config.weights, self.config.position_scoring);

        let mut phrase_lists: [Vec<PhraseStat>; 3] = Default::default();
        for (slot, n) in phrase_lists.iter_mut().zip(self.config.phrase_lengths()) {
            *slot = self.phrase_stats(&tokens, n, &scorer, &context);
        }
        let [two_word_phrases, three_word_phrases, four_word_phrases] = phrase_lists;

        let scraped_content = match self.config.max_content_chars {
            Some(max_chars) => truncate_chars(&filtered, max_chars),
            None => filtered,
        };

        ::log::info!(
            "Analyzed '{}': {} words, {}/{}/{} phrases",
            metadata.title,
            tokens.len(),
            two_word_phrases.len(),
            three_word_phrases.len(),
            four_word_phrases.len()
        );

        Ok(AnalysisResult {
            url: None,
            metadata,
            headings,
            total_words: tokens.len(),
            two_word_phrases,
            three_word_phrases,
            four_word_phrases,
            scraped_content,
        })
    }

    /// Ranked statistics for every `n`-word phrase
    fn phrase_stats(
        &self,
        tokens: &[String],
        n: usize,
        scorer: &ProminenceScorer,
        context: &ProminenceContext,
    ) -> Vec<PhraseStat> {
        top_phrases(count_phrases(tokens, n), self.config.max_results)
            .into_iter()
            .filter_map(|phrase| {
                let density = keyword_density(phrase.count, tokens.len(), n)?;
                let prominence = scorer.score(&phrase.phrase, context);
                Some(PhraseStat {
                    keyword: phrase.phrase,
                    count: phrase.count,
                    density,
                    prominence,
                })
            })
            .collect()
    }
}
