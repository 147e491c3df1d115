//! Per-employee completion aggregation.
//!
//! Rows are grouped by the composite (user id, full name) key in
//! first-encounter order. Two rows with the same identifier but differently
//! formatted name strings form different groups; this mirrors the source
//! export's behavior and is a known fragility of that data.

use std::collections::{HashMap, HashSet};

use crate::config::PipelineConfig;
use crate::models::{EmployeeAggregate, TierCompletion, TrainingRecord};

use super::brand::BrandInferrer;

/// Splits a "Last, First" full name into (last name, first name).
///
/// The name is split on every ", " and only the second segment becomes the
/// first name; anything after a second separator (suffixes like "Jr") is
/// dropped. When the separator is absent the whole string is the last name
/// and the first name is empty. This is a fixed heuristic tied to the
/// source export's naming convention.
pub fn split_full_name(full_name: &str) -> (String, String) {
    let mut parts = full_name.split(", ");
    let last = parts.next().unwrap_or_default().to_string();
    let first = parts.next().unwrap_or_default().to_string();
    (last, first)
}

/// Produces one [`EmployeeAggregate`] per distinct (user id, full name) pair
/// in the filtered row set, in first-encounter order.
///
/// Per-tier totals count the employee's rows whose title is in that tier's
/// qualifying-title set; completed counts are the subset with a completed
/// status. Job role and division come from the employee's first row. No
/// employee is dropped, even with zero qualifying trainings.
pub fn aggregate_employees(
    records: &[TrainingRecord],
    tier1_titles: &HashSet<String>,
    tier2_titles: &HashSet<String>,
    brands: &BrandInferrer,
    config: &PipelineConfig,
) -> Vec<EmployeeAggregate> {
    // Group in first-encounter order.
    let mut group_index: HashMap<(&str, &str), usize> = HashMap::new();
    let mut groups: Vec<Vec<&TrainingRecord>> = Vec::new();

    for record in records {
        let key = (record.user_id.as_str(), record.full_name.as_str());
        match group_index.get(&key) {
            Some(&i) => groups[i].push(record),
            None => {
                group_index.insert(key, groups.len());
                groups.push(vec![record]);
            }
        }
    }

    groups
        .iter()
        .map(|rows| {
            let first = rows[0];
            let (last_name, first_name) = split_full_name(&first.full_name);

            let tier1 = tier_completion(rows, tier1_titles, config);
            let tier2 = tier_completion(rows, tier2_titles, config);

            EmployeeAggregate {
                user_id: first.user_id.clone(),
                first_name,
                last_name,
                job_role: first.position.clone(),
                division: first.division.clone(),
                brand: brands.infer(rows),
                tier1,
                tier2,
            }
        })
        .collect()
}

fn tier_completion(
    rows: &[&TrainingRecord],
    titles: &HashSet<String>,
    config: &PipelineConfig,
) -> TierCompletion {
    let assigned: Vec<&&TrainingRecord> = rows
        .iter()
        .filter(|r| titles.contains(&r.training_title))
        .collect();
    let completed = assigned
        .iter()
        .filter(|r| config.is_completed(&r.status))
        .count() as u32;

    TierCompletion::new(assigned.len() as u32, completed)
}
