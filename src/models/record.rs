//! Raw transcript input types.
//!
//! This module defines the [`TranscriptTable`] the engine receives from its
//! I/O collaborators (a parsed spreadsheet: column names plus rows of cell
//! values) and the typed [`TrainingRecord`] extracted from each row.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{EngineError, EngineResult};

/// Required column names in the transcript input table.
pub mod columns {
    /// Employee identifier column.
    pub const USER_ID: &str = "User ID";
    /// Employee full name column ("Last, First" convention).
    pub const USER_FULL_NAME: &str = "User Full Name";
    /// Job-role string column.
    pub const POSITION: &str = "Position";
    /// Organizational-unit (dealer) column.
    pub const DIVISION: &str = "Division";
    /// Free-text training title column.
    pub const TRAINING_TITLE: &str = "Training Title";
    /// Completion status column.
    pub const TRANSCRIPT_STATUS: &str = "Transcript Status";

    /// All required columns, in extraction order.
    pub const REQUIRED: [&str; 6] = [
        USER_ID,
        USER_FULL_NAME,
        POSITION,
        DIVISION,
        TRAINING_TITLE,
        TRANSCRIPT_STATUS,
    ];
}

/// The two training-proficiency tiers a title can be classified into.
///
/// Classification is independent per tier: a title may count toward both
/// tiers simultaneously, or neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Level 1 (induction/foundation) trainings.
    Tier1,
    /// Level 2 (advanced/intermediate) trainings.
    Tier2,
}

impl Tier {
    /// Returns the lowercase name used in configuration and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Tier::Tier1 => "tier1",
            Tier::Tier2 => "tier2",
        }
    }
}

/// One row of raw transcript input.
///
/// Sourced externally and never mutated by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingRecord {
    /// Employee identifier.
    pub user_id: String,
    /// Employee full name as exported ("Last, First").
    pub full_name: String,
    /// Job-role string.
    pub position: String,
    /// Organizational unit (dealer name).
    pub division: String,
    /// Free-text training title.
    pub training_title: String,
    /// Transcript completion status.
    pub status: String,
}

/// A parsed tabular transcript export: column names plus rows of cells.
///
/// Cells are JSON values; the engine coerces every cell to text, so numeric
/// employee identifiers or status codes are tolerated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptTable {
    /// Column names, in source order.
    pub columns: Vec<String>,
    /// Data rows; each row holds one cell per column.
    pub rows: Vec<Vec<Value>>,
}

impl TranscriptTable {
    /// Returns the index of the named column.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MissingColumn`] naming the column when it is
    /// absent from the table.
    pub fn column_index(&self, name: &str) -> EngineResult<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| EngineError::MissingColumn {
                column: name.to_string(),
            })
    }

    /// Extracts typed [`TrainingRecord`]s from the table, preserving row order.
    ///
    /// All six required columns must be present; cell values are coerced to
    /// text. Rows shorter than the header are padded with empty strings.
    pub fn records(&self) -> EngineResult<Vec<TrainingRecord>> {
        let user_id = self.column_index(columns::USER_ID)?;
        let full_name = self.column_index(columns::USER_FULL_NAME)?;
        let position = self.column_index(columns::POSITION)?;
        let division = self.column_index(columns::DIVISION)?;
        let training_title = self.column_index(columns::TRAINING_TITLE)?;
        let status = self.column_index(columns::TRANSCRIPT_STATUS)?;

        Ok(self
            .rows
            .iter()
            .map(|row| TrainingRecord {
                user_id: cell_text(row.get(user_id)),
                full_name: cell_text(row.get(full_name)),
                position: cell_text(row.get(position)),
                division: cell_text(row.get(division)),
                training_title: cell_text(row.get(training_title)),
                status: cell_text(row.get(status)),
            })
            .collect())
    }
}

/// Coerces a cell value to text.
fn cell_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
