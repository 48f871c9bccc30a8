use crate::error::{Error, Result};
use crate::results::PageHeadings;
use crate::utils::round_to;
use serde::{Deserialize, Serialize};

/// Weights for each structural location
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProminenceWeights {
    #[serde(default = "default_title_weight")]
    pub title: f64,
    #[serde(default = "default_h1_weight")]
    pub h1: f64,
    #[serde(default = "default_h2_weight")]
    pub h2: f64,
    #[serde(default = "default_h3_weight")]
    pub h3: f64,
    #[serde(default = "default_h4_weight")]
    pub h4: f64,
    #[serde(default = "default_position_weight")]
    pub position: f64,
    /// Normalizing denominator, the sum of all other weights by default
    #[serde(default = "default_max_total")]
    pub max_total: f64,
}

fn default_title_weight() -> f64 {
    2.0
}

fn default_h1_weight() -> f64 {
    1.5
}

fn default_h2_weight() -> f64 {
    1.2
}

fn default_h3_weight() -> f64 {
    1.0
}

fn default_h4_weight() -> f64 {
    0.8
}

fn default_position_weight() -> f64 {
    0.9
}

fn default_max_total() -> f64 {
    7.4
}

impl Default for ProminenceWeights {
    fn default() -> Self {
        Self {
            title: default_title_weight(),
            h1: default_h1_weight(),
            h2: default_h2_weight(),
            h3: default_h3_weight(),
            h4: default_h4_weight(),
            position: default_position_weight(),
            max_total: default_max_total(),
        }
    }
}

impl ProminenceWeights {
    /// Heading weights, h1 first
    pub fn heading_weights(&self) -> [f64; 4] {
        [self.h1, self.h2, self.h3, self.h4]
    }

    /// Checks that the weights can produce a score in [0, 1]
    pub fn validate(&self) -> Result<()> {
        let all = [
            self.title,
            self.h1,
            self.h2,
            self.h3,
            self.h4,
            self.position,
            self.max_total,
        ];
        if all.iter().any(|w| !w.is_finite()) {
            return Err(Error::Processing("prominence weights must be finite".to_string()));
        }
        if self.max_total <= 0.0 {
            return Err(Error::Processing(format!(
                "prominence max_total must be positive, got {}",
                self.max_total
            )));
        }
        Ok(())
    }
}

/// Lowercased title, headings and body text a phrase is scored against
#[derive(Debug, Clone, Default)]
pub struct ProminenceContext {
    title: String,
    headings: [Vec<String>; 4],
    body_text: Option<String>,
}

impl ProminenceContext {
    pub fn new(title: &str, headings: &PageHeadings) -> Self {
        let lower = |texts: &[String]| texts.iter().map(|t| t.to_lowercase()).collect::<Vec<_>>();
        let [h1, h2, h3, h4] = headings.levels();

        Self {
            title: title.to_lowercase(),
            headings: [lower(h1), lower(h2), lower(h3), lower(h4)],
            body_text: None,
        }
    }

    /// Adds the body text used by the position term
    pub fn with_body_text(mut self, body_text: &str) -> Self {
        self.body_text = Some(body_text.to_lowercase());
        self
    }
}

/// Scores phrases against a page's structure
///
/// Title and heading weights apply on case-insensitive substring containment,
/// so "seo" also scores for a heading "Best SEO Practices". The sum is
/// normalized by `max_total`.
#[derive(Debug, Clone, Copy)]
pub struct ProminenceScorer {
    weights: ProminenceWeights,
    position_scoring: bool,
}

impl Default for ProminenceScorer {
    fn default() -> Self {
        Self::new(ProminenceWeights::default(), true)
    }
}

impl ProminenceScorer {
    pub fn new(weights: ProminenceWeights, position_scoring: bool) -> Self {
        Self {
            weights,
            position_scoring,
        }
    }

    pub fn weights(&self) -> &ProminenceWeights {
        &self.weights
    }

    /// Prominence of `phrase` in [0, 1], rounded to 4 decimals
    ///
    /// A scoring fault degrades to 0 for this phrase only.
    pub fn score(&self, phrase: &str, context: &ProminenceContext) -> f64 {
        match self.try_score(phrase, context) {
            Ok(score) => score,
            Err(e) => {
                ::log::warn!("Prominence scoring failed for '{}': {}", phrase, e);
                0.0
            }
        }
    }

    /// Prominence of `phrase`, or an error if the weights are unusable
    pub fn try_score(&self, phrase: &str, context: &ProminenceContext) -> Result<f64> {
        self.weights.validate()?;

        let phrase = phrase.to_lowercase();
        let mut score = 0.0;

        if context.title.contains(&phrase) {
            score += self.weights.title;
        }

        for (headings, weight) in context.headings.iter().zip(self.weights.heading_weights()) {
            if headings.iter().any(|heading| heading.contains(&phrase)) {
                score += weight;
            }
        }

        if self.position_scoring {
            score += self.position_score(&phrase, context);
        }

        let normalized = (score / self.weights.max_total).clamp(0.0, 1.0);
        Ok(round_to(normalized, 4))
    }

    /// Earlier first occurrences in the body score closer to the full position weight
    fn position_score(&self, phrase: &str, context: &ProminenceContext) -> f64 {
        let Some(body) = context.body_text.as_deref().filter(|b| !b.is_empty()) else {
            return 0.0;
        };

        match body.find(phrase) {
            Some(index) => self.weights.position * (1.0 - index as f64 / body.len() as f64),
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headings() -> PageHeadings {
        PageHeadings {
            h1: vec!["Best SEO Practices".to_string()],
            ..PageHeadings::default()
        }
    }

    #[test]
    fn test_title_and_heading_weights() {
        let context = ProminenceContext::new("SEO Guide", &headings());
        let scorer = ProminenceScorer::new(ProminenceWeights::default(), false);

        // 2.0 (title) + 1.5 (h1) over 7.4
        assert_eq!(scorer.score("seo", &context), 0.473);
        // h1 only
        assert_eq!(scorer.score("best seo", &context), 0.2027);
        assert_eq!(scorer.score("missing phrase", &context), 0.0);
    }

    #[test]
    fn test_matching_is_case_insensitive_substring() {
        let context = ProminenceContext::new("Ultimate SEO Guide", &PageHeadings::default());
        let scorer = ProminenceScorer::new(ProminenceWeights::default(), false);

        assert_eq!(scorer.score("SEO GUIDE", &context), 0.2703);
        // Substring, not whole word
        assert_eq!(scorer.score("eo gu", &context), 0.2703);
    }

    #[test]
    fn test_every_heading_level_counts_once() {
        let headings = PageHeadings {
            h1: vec!["rust".to_string()],
            h2: vec!["rust".to_string(), "more rust".to_string()],
            h3: vec!["rust".to_string()],
            h4: vec!["rust".to_string()],
        };
        let context = ProminenceContext::new("rust", &headings);
        let scorer = ProminenceScorer::new(ProminenceWeights::default(), false);

        // (2.0 + 1.5 + 1.2 + 1.0 + 0.8) / 7.4
        assert_eq!(scorer.score("rust", &context), 0.8784);
    }

    #[test]
    fn test_position_term() {
        let body = "keyword stuffing at the start and filler text afterwards";
        let context = ProminenceContext::new("", &PageHeadings::default()).with_body_text(body);
        let scorer = ProminenceScorer::default();

        // Found at index 0: full position weight
        assert_eq!(scorer.score("keyword stuffing", &context), round_to(0.9 / 7.4, 4));

        // Found later: smaller share of the weight
        let index = body.find("filler text").unwrap() as f64;
        let expected = round_to(0.9 * (1.0 - index / body.len() as f64) / 7.4, 4);
        assert_eq!(scorer.score("filler text", &context), expected);

        assert_eq!(scorer.score("not present", &context), 0.0);
    }

    #[test]
    fn test_position_term_disabled_or_without_body() {
        let context = ProminenceContext::new("", &PageHeadings::default()).with_body_text("alpha beta");
        let scorer = ProminenceScorer::new(ProminenceWeights::default(), false);
        assert_eq!(scorer.score("alpha beta", &context), 0.0);

        let context = ProminenceContext::new("", &PageHeadings::default());
        assert_eq!(ProminenceScorer::default().score("alpha beta", &context), 0.0);
    }

    #[test]
    fn test_maximum_score_is_one() {
        let headings = PageHeadings {
            h1: vec!["seo".to_string()],
            h2: vec!["seo".to_string()],
            h3: vec!["seo".to_string()],
            h4: vec!["seo".to_string()],
        };
        let context = ProminenceContext::new("seo", &headings).with_body_text("seo at the very start");
        assert_eq!(ProminenceScorer::default().score("seo", &context), 1.0);
    }

    #[test]
    fn test_bad_weights_degrade_to_zero() {
        let context = ProminenceContext::new("SEO Guide", &headings());

        let weights = ProminenceWeights {
            max_total: 0.0,
            ..ProminenceWeights::default()
        };
        let scorer = ProminenceScorer::new(weights, false);
        assert!(scorer.try_score("seo", &context).is_err());
        assert_eq!(scorer.score("seo", &context), 0.0);

        let weights = ProminenceWeights {
            title: f64::NAN,
            ..ProminenceWeights::default()
        };
        assert_eq!(ProminenceScorer::new(weights, false).score("seo", &context), 0.0);
    }

    #[test]
    fn test_oversized_weights_are_clamped() {
        let weights = ProminenceWeights {
            title: 100.0,
            ..ProminenceWeights::default()
        };
        let context = ProminenceContext::new("SEO Guide", &headings());
        assert_eq!(ProminenceScorer::new(weights, false).score("seo", &context), 1.0);
    }
}
