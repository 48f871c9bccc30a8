// Re-export modules
pub mod analyzer;
pub mod config;
pub mod density;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod metadata;
pub mod ngrams;
pub mod parsers;
pub mod prominence;
pub mod results;
pub mod tokenizer;
pub mod utils;

// Re-export commonly used types for convenience
pub use analyzer::Analyzer;
pub use config::{AnalyzerConfig, Config, FetchConfig};
pub use error::{Error, Result};
pub use fetch::{FetchedPage, WebFetcher};
pub use prominence::ProminenceWeights;
pub use results::{AnalysisResult, PageHeadings, PageMetadata, PhraseStat};

/// Types of sources a page can be analyzed from
#[derive(Debug, Clone)]
pub enum SourceType {
    /// Web URL, fetched through WebDriver
    Web(String),
    /// Local HTML file
    File(std::path::PathBuf),
    /// HTML read from standard input
    Stdin,
}

/// Analyze an HTML document with default settings
pub fn analyze(html: &str) -> Result<AnalysisResult> {
    Analyzer::new().analyze(html)
}

/// Loads the HTML for a source and analyzes it
///
/// Fetching is async; the CPU-bound analysis runs on the blocking thread pool.
pub async fn analyze_source(
    source: SourceType,
    analyzer: Analyzer,
    fetcher: &WebFetcher,
) -> Result<AnalysisResult> {
    let (html, url) = match source {
        SourceType::Web(url) => {
            let page = fetcher.fetch(&url).await?;
            (page.html, Some(page.final_url))
        }
        SourceType::File(path) => (tokio::fs::read_to_string(&path).await?, None),
        SourceType::Stdin => {
            let mut html = String::new();
            tokio::io::AsyncReadExt::read_to_string(&mut tokio::io::stdin(), &mut html).await?;
            (html, None)
        }
    };

    let mut result = tokio::task::spawn_blocking(move || analyzer.analyze(&html))
        .await
        .map_err(|e| Error::Processing(format!("analysis task failed: {}", e)))??;
    result.url = url;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_with_defaults() {
        let result = analyze("<html><body><p>seo best practices seo best</p></body></html>").unwrap();
        assert_eq!(result.total_words, 5);
        assert_eq!(result.two_word_phrases[0].density, 0.5);
    }

    #[tokio::test]
    async fn test_analyze_file_source() {
        let path = std::env::temp_dir().join(format!("seo-lens-page-{}.html", std::process::id()));
        std::fs::write(
            &path,
            "<html><head><title>Local page</title></head><body><p>local file content here</p></body></html>",
        )
        .unwrap();

        let result = analyze_source(
            SourceType::File(path.clone()),
            Analyzer::new(),
            &WebFetcher::default(),
        )
        .await
        .unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(result.metadata.title, "Local page");
        assert_eq!(result.total_words, 4);
        assert_eq!(result.url, None);
    }

    #[tokio::test]
    async fn test_analyze_missing_file() {
        let result = analyze_source(
            SourceType::File("/nonexistent/seo-lens/page.html".into()),
            Analyzer::new(),
            &WebFetcher::default(),
        )
        .await;
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[tokio::test]
    async fn test_analyze_unsupported_url() {
        let result = analyze_source(
            SourceType::Web("ftp://example.com/page".to_string()),
            Analyzer::new(),
            &WebFetcher::default(),
        )
        .await;
        assert!(matches!(result, Err(Error::UnsupportedScheme(_))));
    }
}
