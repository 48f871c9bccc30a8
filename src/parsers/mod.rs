pub mod html;
pub mod text;

#[cfg(test)]
mod tests;

use crate::error::Result;

/// Minimal query capability over a parsed document
///
/// Heading and metadata extraction only go through this trait, so they do not
/// depend on a particular HTML parser.
pub trait DocumentQuery {
    /// Returns the whitespace-collapsed text of every element matching `selector`,
    /// in document order
    fn select_all(&self, selector: &str) -> Result<Vec<String>>;

    /// Returns the value of `attr` on the first element matching `selector`
    fn select_one(&self, selector: &str, attr: &str) -> Result<Option<String>>;
}
