//! The pipeline entry point.
//!
//! [`ReportEngine`] owns the compiled configuration and drives one full
//! pass over a transcript table: role filtering, tier classification,
//! per-employee aggregation, workbook assembly, and summary statistics.
//! The engine holds no mutable state, so one instance can serve any number
//! of independent invocations.

use std::collections::HashSet;

use rust_decimal::Decimal;
use tracing::warn;

use crate::config::PipelineConfig;
use crate::error::EngineResult;
use crate::models::{
    EmployeeAggregate, ProcessOutcome, ReportSummary, RoleCount, Tier, TrainingRecord,
    TranscriptTable,
};

use super::aggregator::aggregate_employees;
use super::brand::BrandInferrer;
use super::classifier::TierClassifier;
use super::report::assemble_workbook;

/// Role filter value meaning "all target roles".
pub const ROLE_FILTER_ALL: &str = "All";

/// Number of qualifying titles included in the summary per tier.
const SAMPLE_TITLE_LIMIT: usize = 10;

/// The training report pipeline.
#[derive(Debug)]
pub struct ReportEngine {
    config: PipelineConfig,
    classifier: TierClassifier,
    brands: BrandInferrer,
}

impl ReportEngine {
    /// Builds an engine from configuration, compiling the tier patterns.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::InvalidPattern`] when a tier
    /// pattern is not a valid regular expression.
    pub fn new(config: PipelineConfig) -> EngineResult<Self> {
        let classifier = TierClassifier::new(config.patterns())?;
        let brands = BrandInferrer::new(config.brands());
        Ok(Self {
            config,
            classifier,
            brands,
        })
    }

    /// Returns the engine's configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Runs one full pass over a transcript table.
    ///
    /// Rows are narrowed to the target-role whitelist, then to the single
    /// requested role when `role_filter` names one. Any other filter value
    /// except `"All"` is ignored and recorded as a warning in the summary —
    /// the legacy permissive behavior, preserved deliberately.
    ///
    /// Zero surviving rows is not an error: the result is a valid summary
    /// with zero metrics and a structurally valid empty workbook.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::MissingColumn`] when a required
    /// column is absent from the table.
    pub fn process(&self, table: &TranscriptTable, role_filter: &str) -> EngineResult<ProcessOutcome> {
        let records = table.records()?;

        let mut filtered: Vec<TrainingRecord> = records
            .into_iter()
            .filter(|r| self.config.is_target_role(&r.position))
            .collect();

        let mut warnings = Vec::new();
        if role_filter != ROLE_FILTER_ALL {
            if self.config.is_target_role(role_filter) {
                filtered.retain(|r| r.position == role_filter);
            } else {
                warn!(role_filter, "unrecognized role filter ignored");
                warnings.push(format!(
                    "Role filter '{}' is not a target role; no additional narrowing applied",
                    role_filter
                ));
            }
        }

        // Qualifying-title sets are computed over the already-filtered rows,
        // once per distinct title.
        let tier1_titles = self.classifier.qualifying_titles(Tier::Tier1, &filtered);
        let tier2_titles = self.classifier.qualifying_titles(Tier::Tier2, &filtered);

        let tier1_set: HashSet<String> = tier1_titles.iter().cloned().collect();
        let tier2_set: HashSet<String> = tier2_titles.iter().cloned().collect();

        let aggregates =
            aggregate_employees(&filtered, &tier1_set, &tier2_set, &self.brands, &self.config);

        let workbook = assemble_workbook(&aggregates, &tier1_titles, &tier2_titles);

        let role_breakdown = self
            .config
            .target_roles()
            .iter()
            .map(|role| RoleCount {
                role: role.clone(),
                rows: filtered.iter().filter(|r| &r.position == role).count(),
            })
            .collect();

        let summary = ReportSummary {
            total_employees: aggregates.len(),
            tier1_title_count: tier1_titles.len(),
            tier2_title_count: tier2_titles.len(),
            avg_tier1_pct: mean(&aggregates, |a| a.tier1.pct, 2),
            avg_tier2_pct: mean(&aggregates, |a| a.tier2.pct, 2),
            avg_assigned_tier1: mean(&aggregates, |a| Decimal::from(a.tier1.total), 1),
            avg_assigned_tier2: mean(&aggregates, |a| Decimal::from(a.tier2.total), 1),
            tier1_sample_titles: sample(&tier1_titles),
            tier2_sample_titles: sample(&tier2_titles),
            role_breakdown,
            warnings,
        };

        Ok(ProcessOutcome { summary, workbook })
    }
}

/// Mean of a per-aggregate quantity, rounded to `dp` decimal places; zero
/// when there are no aggregates.
fn mean(
    aggregates: &[EmployeeAggregate],
    f: impl Fn(&EmployeeAggregate) -> Decimal,
    dp: u32,
) -> Decimal {
    if aggregates.is_empty() {
        return Decimal::ZERO;
    }
    let sum: Decimal = aggregates.iter().map(f).sum();
    (sum / Decimal::from(aggregates.len())).round_dp(dp)
}

fn sample(titles: &[String]) -> Vec<String> {
    titles.iter().take(SAMPLE_TITLE_LIMIT).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::{columns, sheet_names};
    use serde_json::{Value, json};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn engine() -> ReportEngine {
        ReportEngine::new(PipelineConfig::default()).unwrap()
    }

    fn row(user_id: &str, name: &str, position: &str, title: &str, status: &str) -> Vec<Value> {
        vec![
            json!(user_id),
            json!(name),
            json!(position),
            json!("Downtown Motors"),
            json!(title),
            json!(status),
        ]
    }

    fn table(rows: Vec<Vec<Value>>) -> TranscriptTable {
        TranscriptTable {
            columns: columns::REQUIRED.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }

    #[test]
    fn test_non_target_roles_are_dropped() {
        let t = table(vec![
            row("1001", "Smith, Jane", "SER-12-Technician", "LEVEL 1 A", "Completed"),
            row("9999", "Jones, Bob", "HR-1-Recruiter", "LEVEL 1 A", "Completed"),
        ]);
        let outcome = engine().process(&t, ROLE_FILTER_ALL).unwrap();
        assert_eq!(outcome.summary.total_employees, 1);
    }

    #[test]
    fn test_specific_role_filter_narrows() {
        let t = table(vec![
            row("1001", "Smith, Jane", "SER-12-Technician", "LEVEL 1 A", "Completed"),
            row("2002", "Brown, Ada", "SER-2-Service Advisor", "LEVEL 1 A", "Completed"),
        ]);
        let outcome = engine().process(&t, "SER-2-Service Advisor").unwrap();
        assert_eq!(outcome.summary.total_employees, 1);
        assert!(outcome.summary.warnings.is_empty());
    }

    #[test]
    fn test_unrecognized_role_filter_warns_and_is_ignored() {
        let t = table(vec![row(
            "1001",
            "Smith, Jane",
            "SER-12-Technician",
            "LEVEL 1 A",
            "Completed",
        )]);
        let outcome = engine().process(&t, "SER-99-Nonexistent").unwrap();
        assert_eq!(outcome.summary.total_employees, 1);
        assert_eq!(outcome.summary.warnings.len(), 1);
        assert!(outcome.summary.warnings[0].contains("SER-99-Nonexistent"));
    }

    #[test]
    fn test_classification_runs_after_role_narrowing() {
        // Tier 1 titles exist only under a role we filter away, so the
        // title lists must come out empty.
        let t = table(vec![
            row("1001", "Smith, Jane", "SER-12-Technician", "LEVEL 1 A", "Completed"),
        ]);
        let outcome = engine().process(&t, "SER-2-Service Advisor").unwrap();
        assert_eq!(outcome.summary.total_employees, 0);
        assert_eq!(outcome.summary.tier1_title_count, 0);
        assert_eq!(outcome.summary.avg_tier1_pct, Decimal::ZERO);

        let titles = outcome.workbook.sheet(sheet_names::TITLES_REFERENCE).unwrap();
        assert!(titles.rows.is_empty());
    }

    #[test]
    fn test_summary_means() {
        let t = table(vec![
            // Employee 1: 2/2 tier1 -> 100%
            row("1001", "Smith, Jane", "SER-12-Technician", "LEVEL 1 A", "Completed"),
            row("1001", "Smith, Jane", "SER-12-Technician", "LEVEL 1 B", "Approved"),
            // Employee 2: 0/2 tier1 -> 0%
            row("2002", "Brown, Ada", "SER-12-Technician", "LEVEL 1 A", "In Progress"),
            row("2002", "Brown, Ada", "SER-12-Technician", "LEVEL 1 B", "Registered"),
        ]);
        let outcome = engine().process(&t, ROLE_FILTER_ALL).unwrap();

        assert_eq!(outcome.summary.total_employees, 2);
        assert_eq!(outcome.summary.tier1_title_count, 2);
        assert_eq!(outcome.summary.avg_tier1_pct, dec("50.00"));
        assert_eq!(outcome.summary.avg_assigned_tier1, dec("2.0"));
        assert_eq!(outcome.summary.avg_tier2_pct, Decimal::ZERO);
    }

    #[test]
    fn test_sample_titles_capped_at_ten() {
        let rows: Vec<Vec<Value>> = (0..15)
            .map(|i| {
                row(
                    "1001",
                    "Smith, Jane",
                    "SER-12-Technician",
                    &format!("LEVEL 1 MODULE {:02}", i),
                    "Completed",
                )
            })
            .collect();
        let outcome = engine().process(&table(rows), ROLE_FILTER_ALL).unwrap();

        assert_eq!(outcome.summary.tier1_title_count, 15);
        assert_eq!(outcome.summary.tier1_sample_titles.len(), 10);
        assert_eq!(outcome.summary.tier1_sample_titles[0], "LEVEL 1 MODULE 00");
    }

    #[test]
    fn test_role_breakdown_in_whitelist_order_with_zeros() {
        let t = table(vec![
            row("1001", "Smith, Jane", "SER-12-Technician", "LEVEL 1 A", "Completed"),
            row("1001", "Smith, Jane", "SER-12-Technician", "LEVEL 1 B", "Completed"),
        ]);
        let outcome = engine().process(&t, ROLE_FILTER_ALL).unwrap();

        let breakdown = &outcome.summary.role_breakdown;
        assert_eq!(breakdown.len(), 5);
        assert_eq!(breakdown[0].role, "SAL-2-New Vehicles Sales Advisor");
        assert_eq!(breakdown[0].rows, 0);
        let technician = breakdown.iter().find(|r| r.role == "SER-12-Technician").unwrap();
        assert_eq!(technician.rows, 2);
    }

    #[test]
    fn test_empty_table_yields_zero_metrics() {
        let outcome = engine().process(&table(vec![]), ROLE_FILTER_ALL).unwrap();
        assert_eq!(outcome.summary.total_employees, 0);
        assert_eq!(outcome.summary.avg_tier1_pct, Decimal::ZERO);
        assert_eq!(outcome.summary.avg_assigned_tier2, Decimal::ZERO);
        assert_eq!(outcome.workbook.sheets.len(), 3);
    }

    #[test]
    fn test_missing_column_surfaces_as_error() {
        let mut t = table(vec![]);
        t.columns.retain(|c| c != columns::POSITION);
        match engine().process(&t, ROLE_FILTER_ALL) {
            Err(EngineError::MissingColumn { column }) => assert_eq!(column, "Position"),
            other => panic!("Expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_process_is_idempotent() {
        let t = table(vec![
            row("1001", "Smith, Jane", "SER-12-Technician", "JEEP LEVEL 1", "Completed"),
            row("2002", "Brown, Ada", "SER-2-Service Advisor", "X02EN ADVANCED", "In Progress"),
            row("3003", "Lee, Kim", "SER-12-Technician", "LEVEL 1 BASICS", "Approved"),
        ]);
        let e = engine();
        let first = e.process(&t, ROLE_FILTER_ALL).unwrap();
        let second = e.process(&t, ROLE_FILTER_ALL).unwrap();

        assert_eq!(first.summary, second.summary);
        assert_eq!(first.workbook, second.workbook);
    }

    #[test]
    fn test_jeep_level1_employee_end_to_end() {
        let t = table(vec![row(
            "1001",
            "Smith, Jane",
            "SER-12-Technician",
            "JEEP INDUCTION LEVEL 1",
            "Completed",
        )]);
        let outcome = engine().process(&t, ROLE_FILTER_ALL).unwrap();

        let sheet = outcome.workbook.sheet(sheet_names::TRAINING_REPORT).unwrap();
        let brand_col = sheet.columns.iter().position(|c| c == "User Brand").unwrap();
        assert_eq!(sheet.rows[0][brand_col], crate::models::Cell::from("Jeep"));
        assert_eq!(outcome.summary.tier1_title_count, 1);
        assert_eq!(outcome.summary.tier2_title_count, 0);
    }
}
