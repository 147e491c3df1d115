//! Report output structures.
//!
//! The pipeline emits two artifacts: a [`ReportSummary`] with headline
//! statistics for display, and a [`ReportWorkbook`] of logical sheets that
//! the calling collaborator renders to an actual spreadsheet file.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sheet names used in the generated workbook.
pub mod sheet_names {
    /// Primary summary sheet, fixed column order, original grouping order.
    pub const TRAINING_REPORT: &str = "Training_Report";
    /// Detailed sheet sorted by overall completion percentage descending.
    pub const DETAILED_SUMMARY: &str = "Detailed_Completion_Summary";
    /// Reference sheet pairing the tier qualifying-title lists.
    pub const TITLES_REFERENCE: &str = "Training_Titles_Reference";
}

/// One cell of a report sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    /// A training count.
    Count(u32),
    /// A completion percentage.
    Percent(Decimal),
    /// Free text.
    Text(String),
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

/// One logical sheet of the output workbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSheet {
    /// Sheet name.
    pub name: String,
    /// Column headers; empty when the sheet has no data to describe.
    pub columns: Vec<String>,
    /// Data rows, one cell per column.
    pub rows: Vec<Vec<Cell>>,
}

/// The structured output workbook: an ordered collection of sheets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportWorkbook {
    /// Sheets in output order.
    pub sheets: Vec<ReportSheet>,
}

impl ReportWorkbook {
    /// Looks up a sheet by name.
    pub fn sheet(&self, name: &str) -> Option<&ReportSheet> {
        self.sheets.iter().find(|s| s.name == name)
    }
}

/// Row count for one target role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCount {
    /// The target role string.
    pub role: String,
    /// Number of filtered input rows with this role.
    pub rows: usize,
}

/// Headline statistics returned to the caller after a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Number of distinct employees in the filtered input.
    pub total_employees: usize,
    /// Number of distinct titles qualifying for Tier 1.
    pub tier1_title_count: usize,
    /// Number of distinct titles qualifying for Tier 2.
    pub tier2_title_count: usize,
    /// Mean Tier 1 completion percentage across employees (2 dp, zero when
    /// there are no employees).
    pub avg_tier1_pct: Decimal,
    /// Mean Tier 2 completion percentage across employees.
    pub avg_tier2_pct: Decimal,
    /// Mean number of assigned Tier 1 trainings per employee (1 dp).
    pub avg_assigned_tier1: Decimal,
    /// Mean number of assigned Tier 2 trainings per employee (1 dp).
    pub avg_assigned_tier2: Decimal,
    /// Up to the first ten Tier 1 qualifying titles, for display.
    pub tier1_sample_titles: Vec<String>,
    /// Up to the first ten Tier 2 qualifying titles, for display.
    pub tier2_sample_titles: Vec<String>,
    /// Row counts per target role, in whitelist order.
    pub role_breakdown: Vec<RoleCount>,
    /// Non-fatal processing warnings (e.g. an unrecognized role filter).
    pub warnings: Vec<String>,
}

/// The full result of one pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessOutcome {
    /// Headline statistics.
    pub summary: ReportSummary,
    /// The structured output workbook.
    pub workbook: ReportWorkbook,
}
