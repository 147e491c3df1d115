//! Request types for the Training Report Engine API.
//!
//! This module defines the JSON request structure for the `/process`
//! endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::TranscriptTable;

/// Request body for the `/process` endpoint.
///
/// Carries a parsed transcript table (column names plus rows of cells) and
/// an optional role filter. The caller is responsible for turning an
/// uploaded spreadsheet into this shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessRequest {
    /// The role filter: the literal "All" or one of the target roles.
    #[serde(default = "default_role_filter")]
    pub role_filter: String,
    /// Column names of the transcript table, in source order.
    pub columns: Vec<String>,
    /// Data rows; each row holds one cell per column.
    pub rows: Vec<Vec<Value>>,
}

fn default_role_filter() -> String {
    "All".to_string()
}

impl From<ProcessRequest> for TranscriptTable {
    fn from(req: ProcessRequest) -> Self {
        TranscriptTable {
            columns: req.columns,
            rows: req.rows,
        }
    }
}
