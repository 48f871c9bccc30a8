use crate::error::Result;
use crate::parsers::DocumentQuery;
use crate::results::{PageHeadings, PageMetadata, UNTITLED_PAGE};

/// Extracts page metadata, defaulting each field that cannot be read
pub fn extract_metadata<Q: DocumentQuery>(doc: &Q) -> PageMetadata {
    PageMetadata {
        title: extract_title(doc).unwrap_or_else(|| UNTITLED_PAGE.to_string()),
        meta_description: or_default(
            "meta description",
            first_attr(
                doc,
                &[
                    ("meta[name=description]", "content"),
                    ("meta[property='og:description']", "content"),
                ],
            ),
        )
        .unwrap_or_default(),
        canonical_url: or_default(
            "canonical url",
            first_attr(doc, &[("link[rel=canonical]", "href")]),
        ),
        language: or_default("language", first_attr(doc, &[("html", "lang")])),
    }
}

/// The page's own title, without the "Untitled Page" default
///
/// Prefers `<title>`, falling back to `og:title`.
pub fn extract_title<Q: DocumentQuery>(doc: &Q) -> Option<String> {
    let from_title_tag = doc
        .select_all("title")
        .map(|titles| titles.into_iter().find(|t| !t.is_empty()));

    match or_default("title", from_title_tag) {
        Some(title) => Some(title),
        None => or_default(
            "og:title",
            first_attr(doc, &[("meta[property='og:title']", "content")]),
        ),
    }
}

/// Extracts h1–h4 texts, dropping empty entries
///
/// If any level cannot be queried, all levels come back empty.
pub fn extract_headings<Q: DocumentQuery>(doc: &Q) -> PageHeadings {
    let levels = ["h1", "h2", "h3", "h4"]
        .iter()
        .map(|tag| {
            doc.select_all(tag)
                .map(|texts| texts.into_iter().filter(|t| !t.is_empty()).collect::<Vec<_>>())
        })
        .collect::<Result<Vec<_>>>();

    match levels {
        Ok(levels) => {
            let mut levels = levels.into_iter();
            let mut next = || levels.next().unwrap_or_default();
            PageHeadings {
                h1: next(),
                h2: next(),
                h3: next(),
                h4: next(),
            }
        }
        Err(e) => {
            ::log::warn!("Heading extraction failed, using empty headings: {}", e);
            PageHeadings::default()
        }
    }
}

/// First non-empty attribute value among `(selector, attr)` candidates
fn first_attr<Q: DocumentQuery>(doc: &Q, candidates: &[(&str, &str)]) -> Result<Option<String>> {
    for (selector, attr) in candidates {
        if let Some(value) = doc.select_one(selector, attr)?.filter(|v| !v.is_empty()) {
            return Ok(Some(value));
        }
    }
    Ok(None)
}

fn or_default<T>(field: &str, result: Result<Option<T>>) -> Option<T> {
    result.unwrap_or_else(|e| {
        ::log::warn!("Failed to extract {}: {}", field, e);
        None
    })
}
