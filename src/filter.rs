use crate::parsers::text::collapse_whitespace;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Navigation bar labels, in the capitalized form menus use
const NAV_LABELS: &str =
    r"Home|About(?:\s+[Uu]s)?|Services|Contact(?:\s+[Uu]s)?|Blog|FAQs?|Careers|Portfolio|Pricing|Shop";

/// Separators between menu or breadcrumb entries
const NAV_SEPARATORS: &str = r"[|/»›•·>]";

/// Account links that are boilerplate wherever they appear
const ACCOUNT_LINKS: &str = r"log\s?in|sign\s?in|log\s?out|sign\s?out|my\s+account|create\s+(?:an\s+)?account|forgot\s+(?:your\s+)?password";

/// Account links that are also ordinary verbs in prose
const ACCOUNT_VERBS: &str = r"register|sign\s?up";

/// Social networks commonly linked from footers and share bars
const SOCIAL_NETWORKS: &str = r"facebook|twitter|instagram|linkedin|youtube|pinterest|tiktok";

const MONTHS: &str = r"jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?";

/// Configuration for boilerplate text filtering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentFilterConfig {
    /// Whether the built-in boilerplate rules are applied
    #[serde(default = "default_use_default_rules")]
    pub use_default_rules: bool,

    /// Extra regex patterns to blank out, applied after the built-in rules
    #[serde(default)]
    pub extra_patterns: Vec<String>,
}

/// Default value for use_default_rules
fn default_use_default_rules() -> bool {
    true
}

impl Default for ContentFilterConfig {
    fn default() -> Self {
        Self {
            use_default_rules: true,
            extra_patterns: Vec::new(),
        }
    }
}

/// How a filter rule transforms text
#[derive(Debug, Clone)]
pub enum RuleKind {
    /// Every match is replaced with a single space
    Pattern(Regex),
    /// Arbitrary pure transform
    Transform(fn(&str) -> String),
}

/// A single named text transform in the filter chain
#[derive(Debug, Clone)]
pub struct FilterRule {
    name: String,
    kind: RuleKind,
}

impl FilterRule {
    /// Create a rule that blanks out every match of `pattern`
    pub fn pattern(name: impl Into<String>, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            name: name.into(),
            kind: RuleKind::Pattern(Regex::new(pattern)?),
        })
    }

    /// Create a rule from a plain function
    pub fn transform(name: impl Into<String>, transform: fn(&str) -> String) -> Self {
        Self {
            name: name.into(),
            kind: RuleKind::Transform(transform),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }

    /// Apply this rule to the text
    pub fn apply(&self, text: &str) -> String {
        match &self.kind {
            // Never delete outright, neighbouring words would merge
            RuleKind::Pattern(regex) => regex.replace_all(text, " ").into_owned(),
            RuleKind::Transform(transform) => transform(text),
        }
    }
}

/// Built-in rules, in application order.
///
/// Footer and navigation rules come before the markup and code rules so that
/// attribute-like strings such as `class="footer"` are caught first.
fn default_patterns() -> Vec<(&'static str, String)> {
    vec![
        (
            "boilerplate_attributes",
            r#"(?i)\b(?:class|id|role)\s*=\s*["'][^"']*(?:footer|header|nav|menu|sidebar|breadcrumb|copyright)[^"']*["']"#
                .to_string(),
        ),
        // Footer
        (
            "copyright",
            r"(?i)(?:©|&copy;|\(c\)|\bcopyright\b)\s*(?:©\s*)?(?:\d{4}(?:\s*[-–]\s*\d{4})?)?"
                .to_string(),
        ),
        (
            "all_rights_reserved",
            r"(?i)\ball\s+rights\s+reserved\b\.?".to_string(),
        ),
        (
            "legal_links",
            r"(?i)\b(?:terms\s+(?:of\s+(?:service|use)|and\s+conditions|&\s+conditions)|privacy\s+(?:policy|notice|statement)|cookie\s+(?:policy|settings|preferences)|site\s?map|accessibility\s+statement|legal\s+notice)\b"
                .to_string(),
        ),
        (
            "social_media",
            format!(
                r"(?i)\b(?:(?:follow|like|find|join|connect\s+with)\s+us\s+on\s+(?:{SOCIAL_NETWORKS}|x)|share\s+(?:this\s+)?on\s+(?:{SOCIAL_NETWORKS}|x)|tweet\s+this)\b"
            ),
        ),
        (
            "social_media_links",
            format!(r"(?i)\b(?:{SOCIAL_NETWORKS})(?:\s+(?:{SOCIAL_NETWORKS}))+\b"),
        ),
        (
            "credits",
            r"(?i)\b(?:powered|designed|theme|website)\s+by\s+\S+".to_string(),
        ),
        (
            "notices",
            r"(?i)\b(?:subscribe\s+to\s+(?:our|the)\s+newsletter|sign\s+up\s+for\s+(?:our|the)\s+newsletter|newsletter\s+sign[-\s]?up|we\s+use\s+cookies|accept\s+(?:all\s+)?cookies|cookie\s+consent|back\s+to\s+top)\b"
                .to_string(),
        ),
        // Navigation
        (
            "skip_links",
            r"(?i)\b(?:skip\s+to\s+(?:main\s+)?content|skip\s+navigation|main\s+menu|toggle\s+(?:navigation|menu)|(?:open|close)\s+menu|menu\s+item|drop-?down|sub-?menu)\b"
                .to_string(),
        ),
        // "Register" and "sign up" only count inside a run of account links,
        // before a separator, or at the very end of the text
        (
            "account_links",
            format!(
                r"(?i)\b(?:{ACCOUNT_LINKS}|{ACCOUNT_VERBS})(?:(?:\s+|\s*[|/•·]\s*)(?:{ACCOUNT_LINKS}|{ACCOUNT_VERBS}))+\b|\b(?:{ACCOUNT_LINKS})\b|\b(?:{ACCOUNT_VERBS})\s*(?:[|/•·]|$)"
            ),
        ),
        // Three or more capitalized labels in a row, or any labels joined by separators
        (
            "nav_label_runs",
            format!(
                r"\b(?:{NAV_LABELS})(?:\s+(?:{NAV_LABELS})){{2,}}\b|(?i:\b(?:{NAV_LABELS})(?:\s*{NAV_SEPARATORS}\s*(?:{NAV_LABELS}))+\b)"
            ),
        ),
        (
            "breadcrumb_labels",
            format!(r"(?i)\b(?:{NAV_LABELS})\s*[|»›>]"),
        ),
        // Dates
        (
            "iso_dates",
            r"\b\d{4}-\d{2}-\d{2}(?:[T ]\d{2}:\d{2}(?::\d{2}(?:\.\d+)?)?(?:Z|[+-]\d{2}:?\d{2})?)?"
                .to_string(),
        ),
        (
            "day_month_year",
            format!(r"(?i)\b\d{{1,2}}(?:st|nd|rd|th)?\s+(?:{MONTHS})\b\.?,?\s+\d{{4}}\b"),
        ),
        (
            "month_day_year",
            format!(r"(?i)\b(?:{MONTHS})\b\.?\s+\d{{1,2}}(?:st|nd|rd|th)?,?\s+\d{{4}}\b"),
        ),
        (
            "numeric_dates",
            r"\b\d{1,2}[/.-]\d{1,2}[/.-]\d{2,4}\b".to_string(),
        ),
        // Contact details
        (
            "phone_numbers",
            r"(?:\+\d{1,3}[\s-]?)?(?:\(\d{1,4}\)[\s-]?\d{1,4}(?:[\s-]\d{1,4})+|\b\d{1,4}(?:[\s-]\d{1,4}){2,}\b)"
                .to_string(),
        ),
        // Markup and code
        ("markup", r"<[^>]*>".to_string()),
        ("bracket_blocks", r"\{[^{}]*\}|\[[^\[\]]*\]".to_string()),
        (
            "code_snippets",
            r"\b[A-Za-z_][\w$]*(?:\.[A-Za-z_$][\w$]*)*\([^()]*\)\s*;?|\b(?:var|let|const)\s+[A-Za-z_$][\w$]*\s*=[^;]*;|\bfunction\s*[\w$]*\s*\([^()]*\)|=>"
                .to_string(),
        ),
    ]
}

/// Ordered chain of boilerplate-removing rules
#[derive(Debug, Clone)]
pub struct ContentFilter {
    rules: Vec<FilterRule>,
}

impl Default for ContentFilter {
    fn default() -> Self {
        Self::new(ContentFilterConfig::default()).expect("Default filter patterns should be valid")
    }
}

impl ContentFilter {
    /// Create a content filter from configuration
    pub fn new(config: ContentFilterConfig) -> Result<Self, regex::Error> {
        let mut rules = if config.use_default_rules {
            Self::default_rules()?
        } else {
            Vec::new()
        };

        for (i, pattern) in config.extra_patterns.iter().enumerate() {
            rules.push(FilterRule::pattern(format!("extra_{}", i), pattern)?);
        }

        Ok(Self::from_rules(rules))
    }

    /// Compile the built-in rule set
    pub fn default_rules() -> Result<Vec<FilterRule>, regex::Error> {
        default_patterns()
            .into_iter()
            .map(|(name, pattern)| FilterRule::pattern(name, &pattern))
            .collect()
    }

    /// Create a filter from an explicit rule list
    pub fn from_rules(rules: Vec<FilterRule>) -> Self {
        Self { rules }
    }

    /// Append a rule at the end of the chain
    pub fn with_rule(mut self, rule: FilterRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[FilterRule] {
        &self.rules
    }

    /// Look up a rule by name
    pub fn rule(&self, name: &str) -> Option<&FilterRule> {
        self.rules.iter().find(|rule| rule.name() == name)
    }

    /// Run every rule in order, then collapse the resulting whitespace
    pub fn apply(&self, text: &str) -> String {
        let filtered = self
            .rules
            .iter()
            .fold(text.to_string(), |current, rule| rule.apply(&current));

        collapse_whitespace(&filtered)
    }
}
