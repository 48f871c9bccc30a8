use crate::error::{Error, Result};
use crate::parsers::DocumentQuery;
use crate::parsers::text::collapse_whitespace;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

/// Elements whose text never counts as page content
pub const NON_CONTENT_SELECTOR: &str = "script, style, noscript, iframe, svg, nav, header, footer, aside, \
     .navigation, .menu, .footer, .header, .sidebar";

static NON_CONTENT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(NON_CONTENT_SELECTOR).expect("NON_CONTENT selector"));

static BODY: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("body").expect("BODY selector"));

/// Matches an opening/closing tag or a doctype declaration
static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(?:!doctype|/?[a-z][a-z0-9-]*)(?:\s[^>]*)?/?>").expect("HTML_TAG regex")
});

/// Returns true if the input contains at least one recognizable HTML tag
pub fn looks_like_html(input: &str) -> bool {
    HTML_TAG.is_match(input)
}

/// A leniently parsed HTML document
///
/// Parsing never fails: malformed markup produces a best-effort tree.
pub struct HtmlDocument {
    doc: Html,
}

impl HtmlDocument {
    /// Parses an HTML document
    pub fn parse(html: &str) -> Self {
        Self {
            doc: Html::parse_document(html),
        }
    }

    /// Extracts the visible body text, skipping non-content elements
    ///
    /// Text nodes are joined with a space and whitespace is collapsed. The
    /// document itself is left untouched so headings inside `<header>` can
    /// still be queried afterwards.
    pub fn clean_text(&self) -> String {
        let Some(body) = self.doc.select(&BODY).next() else {
            ::log::debug!("Document has no <body> element");
            return String::new();
        };

        let mut pieces: Vec<&str> = Vec::new();
        let mut skipped = 0usize;
        let mut stack: Vec<_> = body.children().rev().collect();

        while let Some(node) = stack.pop() {
            if let Some(text) = node.value().as_text() {
                pieces.push(&**text);
                continue;
            }

            if let Some(element) = ElementRef::wrap(node) {
                if NON_CONTENT.matches(&element) {
                    skipped += 1;
                    continue;
                }
                stack.extend(element.children().rev());
            }
        }

        ::log::debug!(
            "HTML cleaner kept {} text nodes, skipped {} non-content elements",
            pieces.len(),
            skipped
        );

        collapse_whitespace(&pieces.join(" "))
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| Error::Processing(format!("invalid selector '{}': {}", selector, e)))
}

impl DocumentQuery for HtmlDocument {
    fn select_all(&self, selector: &str) -> Result<Vec<String>> {
        let selector = parse_selector(selector)?;
        Ok(self
            .doc
            .select(&selector)
            .map(|el| collapse_whitespace(&el.text().collect::<String>()))
            .collect())
    }

    fn select_one(&self, selector: &str, attr: &str) -> Result<Option<String>> {
        let selector = parse_selector(selector)?;
        Ok(self
            .doc
            .select(&selector)
            .next()
            .and_then(|el| el.value().attr(attr))
            .map(|value| value.trim().to_string()))
    }
}
