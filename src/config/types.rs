//! Configuration types for the report pipeline.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, plus the documented
//! built-in defaults used when no configuration directory is supplied.

use serde::Deserialize;

use crate::models::Tier;

/// Ordered tier pattern lists from `patterns.yaml`.
///
/// Each list is an ordered sequence of regular-expression patterns that are
/// matched (partial match, first hit wins) against uppercased training
/// titles. A title may qualify for both tiers.
#[derive(Debug, Clone, Deserialize)]
pub struct TierPatterns {
    /// Patterns identifying Tier 1 (Level 1) trainings.
    pub tier1: Vec<String>,
    /// Patterns identifying Tier 2 (Level 2) trainings.
    pub tier2: Vec<String>,
}

impl TierPatterns {
    /// Returns the pattern list for the given tier.
    pub fn for_tier(&self, tier: Tier) -> &[String] {
        match tier {
            Tier::Tier1 => &self.tier1,
            Tier::Tier2 => &self.tier2,
        }
    }
}

/// Role and status configuration from `roles.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RoleConfig {
    /// The whitelisted job-role strings the report restricts its population to.
    pub target_roles: Vec<String>,
    /// Transcript status values that count as completed.
    #[serde(default = "default_completed_statuses")]
    pub completed_statuses: Vec<String>,
}

fn default_completed_statuses() -> Vec<String> {
    vec!["Completed".to_string(), "Approved".to_string()]
}

/// A single brand inference rule: keyword to scan for, label to assign.
#[derive(Debug, Clone, Deserialize)]
pub struct BrandRule {
    /// The keyword searched for in uppercased training titles.
    pub keyword: String,
    /// The brand label assigned when the keyword is found.
    pub label: String,
}

/// Brand inference configuration from `brands.yaml`.
///
/// Rules are evaluated in order; the first keyword found in any of an
/// employee's training titles wins.
#[derive(Debug, Clone, Deserialize)]
pub struct BrandConfig {
    /// Ordered brand keyword rules.
    pub rules: Vec<BrandRule>,
    /// Label assigned when no keyword matches.
    #[serde(default = "default_brand_fallback")]
    pub fallback: String,
}

fn default_brand_fallback() -> String {
    "Other".to_string()
}

/// The complete pipeline configuration.
///
/// Aggregates the tier patterns, role whitelist, completion statuses, and
/// brand rules loaded from a configuration directory, or the built-in
/// defaults from [`PipelineConfig::default`].
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Tier pattern lists.
    patterns: TierPatterns,
    /// Role whitelist and completion statuses.
    roles: RoleConfig,
    /// Brand inference rules.
    brands: BrandConfig,
}

impl PipelineConfig {
    /// Creates a new PipelineConfig from its component parts.
    pub fn new(patterns: TierPatterns, roles: RoleConfig, brands: BrandConfig) -> Self {
        Self {
            patterns,
            roles,
            brands,
        }
    }

    /// Returns the tier pattern lists.
    pub fn patterns(&self) -> &TierPatterns {
        &self.patterns
    }

    /// Returns the whitelisted target job roles.
    pub fn target_roles(&self) -> &[String] {
        &self.roles.target_roles
    }

    /// Returns the transcript status values that count as completed.
    pub fn completed_statuses(&self) -> &[String] {
        &self.roles.completed_statuses
    }

    /// Returns the brand inference configuration.
    pub fn brands(&self) -> &BrandConfig {
        &self.brands
    }

    /// Returns true if the given status string counts as completed.
    pub fn is_completed(&self, status: &str) -> bool {
        self.roles.completed_statuses.iter().any(|s| s == status)
    }

    /// Returns true if the given position is one of the target roles.
    pub fn is_target_role(&self, position: &str) -> bool {
        self.roles.target_roles.iter().any(|r| r == position)
    }
}

impl Default for PipelineConfig {
    /// The built-in configuration matching the shipped `config/stellantis`
    /// directory. These are the documented default pattern lists, target
    /// roles, and brand rules.
    fn default() -> Self {
        let patterns = TierPatterns {
            tier1: [
                // Core patterns
                r"LEVEL 1",
                r"INDUCTION LEVEL 1",
                r"BASIC LEVEL 1",
                r"FOUNDATION LEVEL 1",
                // X01 catalogue codes
                r"X01EN",
                r"X01[A-Z]{2}",
                // Additional patterns found in data
                r"CET_LEVEL 1",
                r"CURRICULUM LEVEL 1",
                // Flexible patterns with wildcards
                r"INDUCTION.*LEVEL 1",
                r"LEVEL 1.*INDUCTION",
                r"BASIC.*LEVEL 1",
                r"FOUNDATION.*LEVEL 1",
                // Reserved for future naming conventions
                r"BEGINNER.*LEVEL 1",
                r"ENTRY.*LEVEL 1",
                r"STARTER.*LEVEL 1",
                r"FUNDAMENTAL.*LEVEL 1",
                // Brand curriculum patterns
                r".*TRAINING PATH.*LEVEL 1",
                r".*CURRICULUM.*LEVEL 1",
                r".*PROGRAM.*LEVEL 1",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            tier2: [
                // Core patterns
                r"LEVEL 2",
                r"ADVANCED LEVEL 2",
                r"INTERMEDIATE LEVEL 2",
                // X02 catalogue codes
                r"X02EN",
                r"X02[A-Z]{2}",
                // Flexible patterns with wildcards
                r"ADVANCED.*LEVEL 2",
                r"INTERMEDIATE.*LEVEL 2",
                // Reserved for future naming conventions
                r"PROFESSIONAL.*LEVEL 2",
                r"EXPERT.*LEVEL 2",
                r"MASTER.*LEVEL 2",
                // Brand curriculum patterns
                r".*TRAINING PATH.*LEVEL 2",
                r".*CURRICULUM.*LEVEL 2",
                r".*PROGRAM.*LEVEL 2",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        };

        let roles = RoleConfig {
            target_roles: [
                "SAL-2-New Vehicles Sales Advisor",
                "SAL-3-New Vehicles Sales Manager",
                "SER-12-Technician",
                "SER-1-Aftersales Manager",
                "SER-2-Service Advisor",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            completed_statuses: default_completed_statuses(),
        };

        let brands = BrandConfig {
            rules: vec![
                BrandRule {
                    keyword: "FIAT".to_string(),
                    label: "Fiat Professional".to_string(),
                },
                BrandRule {
                    keyword: "JEEP".to_string(),
                    label: "Jeep".to_string(),
                },
                BrandRule {
                    keyword: "PEUGEOT".to_string(),
                    label: "Peugeot".to_string(),
                },
                BrandRule {
                    keyword: "CITROEN".to_string(),
                    label: "Citroen".to_string(),
                },
                BrandRule {
                    keyword: "ALFA ROMEO".to_string(),
                    label: "Alfa Romeo".to_string(),
                },
            ],
            fallback: default_brand_fallback(),
        };

        Self::new(patterns, roles, brands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_five_target_roles() {
        let config = PipelineConfig::default();
        assert_eq!(config.target_roles().len(), 5);
        assert!(config.is_target_role("SER-12-Technician"));
        assert!(!config.is_target_role("HR-1-Recruiter"));
    }

    #[test]
    fn test_default_completed_statuses() {
        let config = PipelineConfig::default();
        assert!(config.is_completed("Completed"));
        assert!(config.is_completed("Approved"));
        assert!(!config.is_completed("In Progress"));
        assert!(!config.is_completed("completed"));
    }

    #[test]
    fn test_default_pattern_lists_are_nonempty() {
        let config = PipelineConfig::default();
        assert!(!config.patterns().for_tier(Tier::Tier1).is_empty());
        assert!(!config.patterns().for_tier(Tier::Tier2).is_empty());
        assert_eq!(config.patterns().for_tier(Tier::Tier1)[0], "LEVEL 1");
        assert_eq!(config.patterns().for_tier(Tier::Tier2)[0], "LEVEL 2");
    }

    #[test]
    fn test_default_brand_rules_are_ordered() {
        let config = PipelineConfig::default();
        let rules = &config.brands().rules;
        assert_eq!(rules[0].keyword, "FIAT");
        assert_eq!(rules[0].label, "Fiat Professional");
        assert_eq!(rules.last().unwrap().label, "Alfa Romeo");
        assert_eq!(config.brands().fallback, "Other");
    }

    #[test]
    fn test_role_config_deserializes_with_default_statuses() {
        let yaml = "target_roles:\n  - SER-12-Technician\n";
        let roles: RoleConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(roles.target_roles, vec!["SER-12-Technician"]);
        assert_eq!(roles.completed_statuses, vec!["Completed", "Approved"]);
    }

    #[test]
    fn test_brand_config_deserializes_with_default_fallback() {
        let yaml = "rules:\n  - keyword: JEEP\n    label: Jeep\n";
        let brands: BrandConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(brands.rules.len(), 1);
        assert_eq!(brands.fallback, "Other");
    }
}
