//! Brand inference from training titles.
//!
//! An employee is assigned a single brand label by scanning the uppercased
//! text of every training title they have a row for. Rule order is fixed and
//! exclusive: the first keyword found anywhere in the employee's titles
//! wins, so multi-brand employees collapse to the highest-priority keyword.

use crate::config::BrandConfig;
use crate::models::TrainingRecord;

/// Ordered brand keyword rules with a fallback label.
#[derive(Debug, Clone)]
pub struct BrandInferrer {
    /// (uppercased keyword, label) pairs in priority order.
    rules: Vec<(String, String)>,
    fallback: String,
}

impl BrandInferrer {
    /// Builds an inferrer from configuration, uppercasing keywords once.
    pub fn new(config: &BrandConfig) -> Self {
        Self {
            rules: config
                .rules
                .iter()
                .map(|r| (r.keyword.to_uppercase(), r.label.clone()))
                .collect(),
            fallback: config.fallback.clone(),
        }
    }

    /// Infers the brand label for one employee's rows.
    pub fn infer(&self, records: &[&TrainingRecord]) -> String {
        let titles: Vec<String> = records
            .iter()
            .map(|r| r.training_title.to_uppercase())
            .collect();

        for (keyword, label) in &self.rules {
            if titles.iter().any(|t| t.contains(keyword)) {
                return label.clone();
            }
        }
        self.fallback.clone()
    }
}
