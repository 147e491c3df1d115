//! Configuration loading and management for the Training Report Engine.
//!
//! This module provides functionality to load pipeline configuration from
//! YAML files, including tier pattern lists, target job roles, completion
//! statuses, and brand keyword rules.
//!
//! # Example
//!
//! ```no_run
//! use training_report_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/stellantis").unwrap();
//! println!("Target roles: {}", config.config().target_roles().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BrandConfig, BrandRule, PipelineConfig, RoleConfig, TierPatterns};
