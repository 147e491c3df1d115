//! Tier classification of training titles.
//!
//! Each tier has an ordered list of regular-expression patterns. A title
//! qualifies for a tier when its uppercased text contains a match for any
//! pattern in that tier's list. Classification is a pure function of the
//! title text, so the qualifying-title sets are computed once per distinct
//! title rather than once per row.

use std::collections::HashSet;

use regex::Regex;

use crate::config::TierPatterns;
use crate::error::{EngineError, EngineResult};
use crate::models::{Tier, TrainingRecord};

/// Compiled tier pattern lists.
#[derive(Debug)]
pub struct TierClassifier {
    tier1: Vec<Regex>,
    tier2: Vec<Regex>,
}

impl TierClassifier {
    /// Compiles the configured pattern lists.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPattern`] naming the tier and pattern
    /// when a pattern is not a valid regular expression.
    pub fn new(patterns: &TierPatterns) -> EngineResult<Self> {
        Ok(Self {
            tier1: compile_tier(Tier::Tier1, &patterns.tier1)?,
            tier2: compile_tier(Tier::Tier2, &patterns.tier2)?,
        })
    }

    /// Returns true when the uppercased title matches any pattern in the
    /// given tier's list.
    ///
    /// Matching is a partial-match search, not a full-string match. A title
    /// can be true for both tiers.
    pub fn matches(&self, tier: Tier, title: &str) -> bool {
        let upper = title.to_uppercase();
        self.patterns(tier).iter().any(|re| re.is_match(&upper))
    }

    /// Collects the distinct training titles in `records` that qualify for
    /// the given tier, in first-occurrence order.
    pub fn qualifying_titles(&self, tier: Tier, records: &[TrainingRecord]) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut titles = Vec::new();
        for record in records {
            if seen.contains(&record.training_title) {
                continue;
            }
            seen.insert(record.training_title.clone());
            if self.matches(tier, &record.training_title) {
                titles.push(record.training_title.clone());
            }
        }
        titles
    }

    fn patterns(&self, tier: Tier) -> &[Regex] {
        match tier {
            Tier::Tier1 => &self.tier1,
            Tier::Tier2 => &self.tier2,
        }
    }
}

fn compile_tier(tier: Tier, patterns: &[String]) -> EngineResult<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| {
            Regex::new(p).map_err(|e| EngineError::InvalidPattern {
                tier: tier.name().to_string(),
                pattern: p.clone(),
                message: e.to_string(),
            })
        })
        .collect()
}
