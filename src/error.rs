/// Error type for page analysis.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The cleaned body text (or its token stream) is empty.
    #[error("No analyzable content found")]
    EmptyContent,

    /// The input does not contain any recognizable HTML tags.
    #[error("Input does not look like HTML")]
    InvalidHtml,

    /// The input exceeds the configured HTML size limit.
    #[error("HTML document is {size} bytes, limit is {limit} bytes")]
    InputTooLarge { size: usize, limit: usize },

    /// Unexpected failure inside a pipeline stage.
    #[error("Analysis failed: {0}")]
    Processing(String),

    /// Invalid configuration value or filter pattern.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Navigation or page source retrieval failed.
    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    /// The fetch did not finish within the configured timeout.
    #[error("Timed out after {secs}s fetching {url}")]
    Timeout { url: String, secs: u64 },

    /// No WebDriver session could be created.
    #[error("WebDriver unavailable: {0}")]
    WebDriver(String),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Only http and https pages can be fetched.
    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether re-fetching the page might produce a different outcome.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::Fetch { .. } | Error::Timeout { .. } | Error::WebDriver(_)
        )
    }

    /// Whether the error is caused by the submitted input rather than by the service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::EmptyContent
                | Error::InvalidHtml
                | Error::InputTooLarge { .. }
                | Error::Url(_)
                | Error::UnsupportedScheme(_)
                | Error::Config(_)
        )
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::Config(err.to_string())
    }
}

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        assert!(Error::EmptyContent.is_client_error());
        assert!(!Error::EmptyContent.is_retryable());
        assert!(Error::InvalidHtml.is_client_error());

        let timeout = Error::Timeout {
            url: "https://example.com".to_string(),
            secs: 45,
        };
        assert!(timeout.is_retryable());
        assert!(!timeout.is_client_error());

        let processing = Error::Processing("boom".to_string());
        assert!(!processing.is_retryable());
        assert!(!processing.is_client_error());
    }

    #[test]
    fn test_regex_error_becomes_config_error() {
        let err: Error = regex::Regex::new("(unclosed").unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }
}
