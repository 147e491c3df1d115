//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading pipeline
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{BrandConfig, PipelineConfig, RoleConfig, TierPatterns};

/// Loads and provides access to pipeline configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and produces a [`PipelineConfig`].
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/stellantis/
/// ├── patterns.yaml   # Ordered tier pattern lists
/// ├── roles.yaml      # Target job roles and completion statuses
/// └── brands.yaml     # Ordered brand keyword rules
/// ```
///
/// # Example
///
/// ```no_run
/// use training_report_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/stellantis").unwrap();
/// let config = loader.config();
/// println!("Tier 1 patterns: {}", config.patterns().tier1.len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PipelineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/stellantis")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let patterns_path = path.join("patterns.yaml");
        let patterns = Self::load_yaml::<TierPatterns>(&patterns_path)?;

        let roles_path = path.join("roles.yaml");
        let roles = Self::load_yaml::<RoleConfig>(&roles_path)?;

        let brands_path = path.join("brands.yaml");
        let brands = Self::load_yaml::<BrandConfig>(&brands_path)?;

        Ok(Self {
            config: PipelineConfig::new(patterns, roles, brands),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded pipeline configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> PipelineConfig {
        self.config
    }
}
