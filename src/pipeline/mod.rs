//! The classification-and-aggregation pipeline.
//!
//! This module contains the core decision logic of the engine: tier
//! classification of training titles, brand inference, per-employee
//! completion aggregation, report assembly, and the entry point that drives
//! them in sequence over a transcript table.

mod aggregator;
mod brand;
mod classifier;
mod engine;
mod report;

pub use aggregator::{aggregate_employees, split_full_name};
pub use brand::BrandInferrer;
pub use classifier::TierClassifier;
pub use engine::{ROLE_FILTER_ALL, ReportEngine};
pub use report::assemble_workbook;
