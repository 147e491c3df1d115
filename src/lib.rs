//! Training Report Engine for dealership-network curriculum tracking.
//!
//! This crate classifies free-text training titles into two proficiency
//! tiers, aggregates per-employee completion rates for a fixed set of
//! target job roles, and assembles a multi-sheet report workbook.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
