//! Core data models for the Training Report Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod aggregate;
mod record;
mod report;

pub use aggregate::{EmployeeAggregate, TierCompletion, completion_pct};
pub use record::{Tier, TrainingRecord, TranscriptTable, columns};
pub use report::{
    Cell, ProcessOutcome, ReportSheet, ReportSummary, ReportWorkbook, RoleCount, sheet_names,
};
