//! Report workbook assembly.
//!
//! Converts the aggregated per-employee records into the three logical
//! sheets of the output workbook: the primary summary, the detailed summary
//! sorted by overall completion, and the qualifying-title reference.

use crate::models::{Cell, EmployeeAggregate, ReportSheet, ReportWorkbook, sheet_names};

/// Column headers shared by the two summary sheets.
const SUMMARY_COLUMNS: [&str; 12] = [
    "User ID",
    "First Name",
    "Last Name",
    "Job Role",
    "Dealer Name",
    "User Brand",
    "Total Level 1 Trainings",
    "Completed Level 1 Trainings",
    "Level 1 Completion %",
    "Total Level 2 Trainings",
    "Completed Level 2 Trainings",
    "Level 2 Completion %",
];

/// Extra column carried only by the detailed sheet.
const OVERALL_COLUMN: &str = "Overall Completion %";

/// Assembles the output workbook from the aggregates and qualifying-title
/// lists.
///
/// An empty aggregate set yields structurally valid summary sheets with no
/// columns and no rows; the title reference sheet always carries its two
/// columns, right-padded with empty strings to equal length.
pub fn assemble_workbook(
    aggregates: &[EmployeeAggregate],
    tier1_titles: &[String],
    tier2_titles: &[String],
) -> ReportWorkbook {
    ReportWorkbook {
        sheets: vec![
            summary_sheet(aggregates),
            detailed_sheet(aggregates),
            titles_sheet(tier1_titles, tier2_titles),
        ],
    }
}

fn summary_row(agg: &EmployeeAggregate) -> Vec<Cell> {
    vec![
        Cell::from(agg.user_id.as_str()),
        Cell::from(agg.first_name.as_str()),
        Cell::from(agg.last_name.as_str()),
        Cell::from(agg.job_role.as_str()),
        Cell::from(agg.division.as_str()),
        Cell::from(agg.brand.as_str()),
        Cell::Count(agg.tier1.total),
        Cell::Count(agg.tier1.completed),
        Cell::Percent(agg.tier1.pct),
        Cell::Count(agg.tier2.total),
        Cell::Count(agg.tier2.completed),
        Cell::Percent(agg.tier2.pct),
    ]
}

fn summary_sheet(aggregates: &[EmployeeAggregate]) -> ReportSheet {
    if aggregates.is_empty() {
        return ReportSheet {
            name: sheet_names::TRAINING_REPORT.to_string(),
            columns: vec![],
            rows: vec![],
        };
    }

    ReportSheet {
        name: sheet_names::TRAINING_REPORT.to_string(),
        columns: SUMMARY_COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows: aggregates.iter().map(summary_row).collect(),
    }
}

fn detailed_sheet(aggregates: &[EmployeeAggregate]) -> ReportSheet {
    if aggregates.is_empty() {
        return ReportSheet {
            name: sheet_names::DETAILED_SUMMARY.to_string(),
            columns: vec![],
            rows: vec![],
        };
    }

    // Stable sort keeps the original grouping order for equal percentages.
    let mut sorted: Vec<&EmployeeAggregate> = aggregates.iter().collect();
    sorted.sort_by(|a, b| b.overall_pct().cmp(&a.overall_pct()));

    let mut columns: Vec<String> = SUMMARY_COLUMNS.iter().map(|c| c.to_string()).collect();
    columns.push(OVERALL_COLUMN.to_string());

    ReportSheet {
        name: sheet_names::DETAILED_SUMMARY.to_string(),
        columns,
        rows: sorted
            .iter()
            .map(|agg| {
                let mut row = summary_row(agg);
                row.push(Cell::Percent(agg.overall_pct()));
                row
            })
            .collect(),
    }
}

fn titles_sheet(tier1_titles: &[String], tier2_titles: &[String]) -> ReportSheet {
    let len = tier1_titles.len().max(tier2_titles.len());
    let pad = |titles: &[String], i: usize| {
        Cell::Text(titles.get(i).cloned().unwrap_or_default())
    };

    ReportSheet {
        name: sheet_names::TITLES_REFERENCE.to_string(),
        columns: vec![
            "Level 1 Training Titles".to_string(),
            "Level 2 Training Titles".to_string(),
        ],
        rows: (0..len)
            .map(|i| vec![pad(tier1_titles, i), pad(tier2_titles, i)])
            .collect(),
    }
}
