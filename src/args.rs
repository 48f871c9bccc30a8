use clap::{Parser, ValueEnum};
use seo_lens::SourceType;

#[derive(Parser, Debug)]
#[command(name = "seo-lens")]
#[command(about = "Fetches a web page and reports keyword density and prominence")]
#[command(version)]
pub struct Args {
    /// Page to analyze (web URL, HTML file path, or "-" for stdin)
    pub source: String,

    /// Source type (web, file, stdin)
    #[arg(short, long, value_enum, default_value_t = SourceTypeArg::Web)]
    pub type_: SourceTypeArg,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Longest phrase length to report (2 to 4)
    #[arg(long)]
    pub max_phrase_length: Option<usize>,

    /// Minimum word length in characters
    #[arg(long)]
    pub min_word_length: Option<usize>,

    /// Number of phrases reported per length
    #[arg(long)]
    pub max_results: Option<usize>,

    /// Leave the body-position term out of prominence
    #[arg(long)]
    pub no_position: bool,

    /// WebDriver URL (overrides config and WEBDRIVER_URL)
    #[arg(long)]
    pub webdriver_url: Option<String>,

    /// Fetch timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SourceTypeArg {
    Web,
    File,
    Stdin,
}

/// Convert from CLI argument source type to internal source type
pub fn convert_source_type(arg_type: SourceTypeArg, source: &str) -> SourceType {
    match arg_type {
        SourceTypeArg::Web => SourceType::Web(source.to_string()),
        SourceTypeArg::File if source == "-" => SourceType::Stdin,
        SourceTypeArg::File => SourceType::File(source.into()),
        SourceTypeArg::Stdin => SourceType::Stdin,
    }
}
