use crate::config::FetchConfig;
use crate::error::{Error, Result};
use fantoccini::{Client, ClientBuilder};
use tokio::time::{Duration, timeout};
use url::Url;

/// Local WebDriver endpoints tried when the configured one is unreachable
const FALLBACK_WEBDRIVER_URLS: [&str; 4] = [
    "http://localhost:9515", // ChromeDriver default
    "http://localhost:4723", // Appium default
    "http://localhost:9222", // Chrome debug port default
    "http://127.0.0.1:4444", // Try with IP instead of localhost
];

/// Raw HTML of a fetched page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL that was requested
    pub url: String,
    /// URL after redirects
    pub final_url: String,
    /// Page source as rendered by the browser
    pub html: String,
}

impl FetchedPage {
    /// Whether the browser ended up on a different URL than requested
    pub fn redirected(&self) -> bool {
        self.url != self.final_url
    }
}

/// Fetches single pages through a WebDriver session
#[derive(Debug, Clone)]
pub struct WebFetcher {
    config: FetchConfig,
}

impl Default for WebFetcher {
    fn default() -> Self {
        Self::new(FetchConfig::default())
    }
}

impl WebFetcher {
    pub fn new(config: FetchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Navigates to `url` and returns its page source
    ///
    /// A fresh session is opened per call and closed afterwards. A lost
    /// session is reconnected and the page retried once.
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        let url = validate_url(url)?;
        ::log::info!("Fetching page: {}", url);

        let fetch_start = std::time::Instant::now();
        let mut client = connect_to_webdriver(&self.config.webdriver_url).await?;

        let mut result = self.load_page(&client, url.as_str()).await;
        if is_lost_session(&result) {
            ::log::warn!("Lost WebDriver session while fetching {}, reconnecting", url);
            client = connect_to_webdriver(&self.config.webdriver_url).await?;
            result = self.load_page(&client, url.as_str()).await;
        }

        if let Err(e) = client.close().await {
            ::log::warn!("Failed to close WebDriver client: {}", e);
        }

        match &result {
            Ok(page) => {
                if page.redirected() {
                    ::log::info!("Followed redirect from {} to {}", page.url, page.final_url);
                }
                ::log::debug!(
                    "Fetched {} ({} bytes) in {:.2} seconds",
                    page.final_url,
                    page.html.len(),
                    fetch_start.elapsed().as_secs_f64()
                );
            }
            Err(e) => ::log::error!("Failed to fetch {}: {}", url, e),
        }

        result
    }

    /// Navigates and reads the source within the configured timeout
    async fn load_page(&self, client: &Client, url: &str) -> Result<FetchedPage> {
        let secs = self.config.timeout_secs;

        let load = async {
            client
                .goto(url)
                .await
                .map_err(|e| navigation_error(url, "accessing", e))?;

            let html = client
                .source()
                .await
                .map_err(|e| navigation_error(url, "getting source for", e))?;

            let final_url = match client.current_url().await {
                Ok(current) => current.to_string(),
                Err(_) => url.to_string(),
            };

            Ok::<_, Error>(FetchedPage {
                url: url.to_string(),
                final_url,
                html,
            })
        };

        match timeout(Duration::from_secs(secs), load).await {
            Ok(result) => result,
            Err(_) => Err(Error::Timeout {
                url: url.to_string(),
                secs,
            }),
        }
    }
}

/// Parses the URL and checks that it is an http(s) page
pub fn validate_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url.trim())?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(Error::UnsupportedScheme(other.to_string())),
    }
}

/// Connects to the WebDriver instance, falling back to common local endpoints
async fn connect_to_webdriver(webdriver_url: &str) -> Result<Client> {
    match ClientBuilder::native().connect(webdriver_url).await {
        Ok(client) => {
            ::log::debug!("Connected to WebDriver at {}", webdriver_url);
            return Ok(client);
        }
        Err(e) => {
            ::log::error!(
                "Failed to connect to WebDriver at {}: {}",
                webdriver_url,
                e
            );
        }
    }

    for url in FALLBACK_WEBDRIVER_URLS {
        if url == webdriver_url {
            continue;
        }

        ::log::info!("Trying fallback WebDriver URL: {}", url);
        // Don't log fallback errors to avoid log spam
        if let Ok(client) = ClientBuilder::native().connect(url).await {
            ::log::debug!("Connected to fallback WebDriver at {}", url);
            return Ok(client);
        }
    }

    Err(Error::WebDriver(format!(
        "no WebDriver server reachable at {} or local fallbacks; \
         start one or set the WEBDRIVER_URL environment variable",
        webdriver_url
    )))
}

fn navigation_error(url: &str, context: &str, error: fantoccini::error::CmdError) -> Error {
    Error::Fetch {
        url: url.to_string(),
        message: format!("{} page: {}", context, error),
    }
}

fn is_lost_session(result: &Result<FetchedPage>) -> bool {
    matches!(result, Err(Error::Fetch { message, .. }) if message.contains("Unable to find session"))
}
