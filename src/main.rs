use clap::Parser;
use seo_lens::{Analyzer, Config, SourceType, WebFetcher};

mod args;
use args::{Args, convert_source_type};

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    ::log::info!("Starting analysis for: {}", args.source);

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("Invalid configuration: {}", e);
            std::process::exit(2);
        }
    };

    let analyzer = match Analyzer::from_config(config.analyzer) {
        Ok(analyzer) => analyzer,
        Err(e) => {
            ::log::error!("Failed to build analyzer: {}", e);
            std::process::exit(2);
        }
    };
    let fetcher = WebFetcher::new(config.fetch);

    let source = convert_source_type(args.type_, &args.source);
    if let SourceType::Web(_) = &source {
        ::log::info!(
            "Fetching through WebDriver at {} (set WEBDRIVER_URL to change)",
            fetcher.config().webdriver_url
        );
    }

    let start_time = std::time::Instant::now();
    let result = match seo_lens::analyze_source(source, analyzer, &fetcher).await {
        Ok(result) => result,
        Err(e) => {
            ::log::error!("Analysis failed: {}", e);
            std::process::exit(if e.is_client_error() { 2 } else { 1 });
        }
    };
    ::log::info!(
        "Analysis complete - {} words in {:.2} seconds",
        result.total_words,
        start_time.elapsed().as_secs_f64()
    );

    let output = if args.pretty {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result)
    };
    match output {
        Ok(json) => println!("{}", json),
        Err(e) => {
            ::log::error!("Failed to serialize result: {}", e);
            std::process::exit(1);
        }
    }
}

/// Load the configuration file (if any) and apply command-line overrides
fn load_config(args: &Args) -> seo_lens::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    if let Some(value) = args.max_phrase_length {
        config.analyzer.max_phrase_length = value;
    }
    if let Some(value) = args.min_word_length {
        config.analyzer.min_word_length = value;
    }
    if let Some(value) = args.max_results {
        config.analyzer.max_results = value;
    }
    if args.no_position {
        config.analyzer.position_scoring = false;
    }
    if let Some(url) = &args.webdriver_url {
        config.fetch.webdriver_url = url.clone();
    }
    if let Some(secs) = args.timeout {
        config.fetch.timeout_secs = secs;
    }

    config.analyzer.validate()?;
    Ok(config)
}
