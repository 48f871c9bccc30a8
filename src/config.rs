use crate::error::{Error, Result};
use crate::filter::ContentFilterConfig;
use crate::ngrams::{DEFAULT_MAX_RESULTS, PHRASE_LENGTHS};
use crate::prominence::ProminenceWeights;
use crate::tokenizer::DEFAULT_MIN_WORD_LENGTH;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for the analysis pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Longest phrase length to report (2 to 4)
    #[serde(default = "default_max_phrase_length")]
    pub max_phrase_length: usize,

    /// Minimum token length in characters
    #[serde(default = "default_min_word_length")]
    pub min_word_length: usize,

    /// Number of phrases kept per phrase length
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Prominence weights
    #[serde(default)]
    pub weights: ProminenceWeights,

    /// Whether prominence includes the body-position term
    #[serde(default = "default_position_scoring")]
    pub position_scoring: bool,

    /// Cap on `scrapedContent` length in characters (None keeps the full text)
    #[serde(default = "default_max_content_chars")]
    pub max_content_chars: Option<usize>,

    /// Largest HTML document accepted, in bytes
    #[serde(default = "default_max_html_bytes")]
    pub max_html_bytes: usize,

    /// Boilerplate filter rules
    #[serde(default)]
    pub filter: ContentFilterConfig,
}

/// Configuration for fetching pages through WebDriver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Maximum time for navigating to a page and reading its source
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Top-level configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    #[serde(default)]
    pub fetch: FetchConfig,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let mut config: Self = serde_json::from_str(json)?;
        config.fetch.apply_env();
        config.analyzer.validate()?;
        Ok(config)
    }
}

/// Default value for max_phrase_length
fn default_max_phrase_length() -> usize {
    4
}

/// Default value for min_word_length
fn default_min_word_length() -> usize {
    DEFAULT_MIN_WORD_LENGTH
}

/// Default value for max_results
fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

/// Default value for position_scoring
fn default_position_scoring() -> bool {
    true
}

/// Default value for max_content_chars
fn default_max_content_chars() -> Option<usize> {
    Some(5000)
}

/// Default value for max_html_bytes (10 MiB)
fn default_max_html_bytes() -> usize {
    10 * 1024 * 1024
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

/// Default value for timeout_secs
fn default_timeout_secs() -> u64 {
    45
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_phrase_length: default_max_phrase_length(),
            min_word_length: default_min_word_length(),
            max_results: default_max_results(),
            weights: ProminenceWeights::default(),
            position_scoring: default_position_scoring(),
            max_content_chars: default_max_content_chars(),
            max_html_bytes: default_max_html_bytes(),
            filter: ContentFilterConfig::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Check that every value is within its supported range
    pub fn validate(&self) -> Result<()> {
        let min_length = PHRASE_LENGTHS[0];
        let max_length = PHRASE_LENGTHS[PHRASE_LENGTHS.len() - 1];
        if !(min_length..=max_length).contains(&self.max_phrase_length) {
            return Err(Error::Config(format!(
                "max_phrase_length must be between {} and {}, got {}",
                min_length, max_length, self.max_phrase_length
            )));
        }
        if self.min_word_length == 0 {
            return Err(Error::Config("min_word_length must be at least 1".to_string()));
        }
        if self.max_results == 0 {
            return Err(Error::Config("max_results must be at least 1".to_string()));
        }
        if self.max_html_bytes == 0 {
            return Err(Error::Config("max_html_bytes must be at least 1".to_string()));
        }
        self.weights
            .validate()
            .map_err(|e| Error::Config(e.to_string()))
    }

    /// Phrase lengths to report with this configuration
    pub fn phrase_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        PHRASE_LENGTHS
            .into_iter()
            .filter(move |n| *n <= self.max_phrase_length)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        let mut config = Self {
            webdriver_url: default_webdriver_url(),
            timeout_secs: default_timeout_secs(),
        };
        config.apply_env();
        config
    }
}

impl FetchConfig {
    /// Override the WebDriver URL with the WEBDRIVER_URL environment variable if provided
    pub fn apply_env(&mut self) {
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                self.webdriver_url = webdriver_url;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.max_phrase_length, 4);
        assert_eq!(config.min_word_length, 3);
        assert_eq!(config.max_results, 10);
        assert_eq!(config.max_content_chars, Some(5000));
        assert_eq!(config.max_html_bytes, 10 * 1024 * 1024);
        assert!(config.position_scoring);
        assert_eq!(config.weights.max_total, 7.4);
        assert!(config.validate().is_ok());
        assert_eq!(config.phrase_lengths().collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{
            "analyzer": {
                "max_phrase_length": 3,
                "min_word_length": 4,
                "weights": { "title": 3.0, "max_total": 8.4 },
                "filter": { "extra_patterns": ["(?i)special offer"] }
            },
            "fetch": { "timeout_secs": 10 }
        }"#;
        let config = Config::from_json(json).unwrap();

        assert_eq!(config.analyzer.max_phrase_length, 3);
        assert_eq!(config.analyzer.min_word_length, 4);
        assert_eq!(config.analyzer.max_results, 10);
        assert_eq!(config.analyzer.weights.title, 3.0);
        assert_eq!(config.analyzer.weights.h1, 1.5);
        assert_eq!(config.analyzer.weights.max_total, 8.4);
        assert!(config.analyzer.filter.use_default_rules);
        assert_eq!(config.analyzer.filter.extra_patterns.len(), 1);
        assert_eq!(config.fetch.timeout_secs, 10);
        assert_eq!(
            config.analyzer.phrase_lengths().collect::<Vec<_>>(),
            vec![2, 3]
        );
    }

    #[test]
    fn test_empty_json_is_default() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config.analyzer.max_phrase_length, 4);
        assert_eq!(config.fetch.timeout_secs, 45);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let cases = [
            r#"{ "analyzer": { "max_phrase_length": 5 } }"#,
            r#"{ "analyzer": { "max_phrase_length": 1 } }"#,
            r#"{ "analyzer": { "min_word_length": 0 } }"#,
            r#"{ "analyzer": { "max_results": 0 } }"#,
            r#"{ "analyzer": { "weights": { "max_total": 0.0 } } }"#,
        ];
        for json in cases {
            assert!(
                matches!(Config::from_json(json), Err(Error::Config(_))),
                "expected config error for {}",
                json
            );
        }

        assert!(matches!(Config::from_json("not json"), Err(Error::Json(_))));
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("seo-lens-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "analyzer": { "max_results": 5 } }"#).unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.analyzer.max_results, 5);

        std::fs::remove_file(&path).unwrap();
        assert!(matches!(Config::from_file(&path), Err(Error::Io(_))));
    }
}
