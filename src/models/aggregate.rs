//! Per-employee aggregation results.
//!
//! One [`EmployeeAggregate`] is produced per distinct (user id, full name)
//! pair in the filtered input. Aggregates are created once during a pipeline
//! run and never mutated afterwards.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Computes a completion percentage rounded to two decimal places.
///
/// Returns zero when `total` is zero.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use training_report_engine::models::completion_pct;
///
/// assert_eq!(completion_pct(2, 3), Decimal::from_str("66.67").unwrap());
/// assert_eq!(completion_pct(0, 0), Decimal::ZERO);
/// ```
pub fn completion_pct(completed: u32, total: u32) -> Decimal {
    if total == 0 {
        return Decimal::ZERO;
    }
    let mut pct =
        (Decimal::from(completed) / Decimal::from(total) * Decimal::from(100u32)).round_dp(2);
    // Pin the scale so 50 renders as "50.00", not "50.0".
    pct.rescale(2);
    pct
}

/// Assigned/completed counts and completion percentage for one tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCompletion {
    /// Number of the employee's rows whose title qualifies for the tier.
    pub total: u32,
    /// Number of those rows with a completed status.
    pub completed: u32,
    /// `completed / total * 100`, rounded to 2 decimal places; zero when
    /// `total` is zero.
    pub pct: Decimal,
}

impl TierCompletion {
    /// Creates a tier completion record, deriving the percentage.
    pub fn new(total: u32, completed: u32) -> Self {
        Self {
            total,
            completed,
            pct: completion_pct(completed, total),
        }
    }
}

/// The per-employee computed record holding tier totals, completions, and
/// percentages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeAggregate {
    /// Employee identifier.
    pub user_id: String,
    /// First name parsed from the "Last, First" full name (may be empty).
    pub first_name: String,
    /// Last name parsed from the full name.
    pub last_name: String,
    /// Job role, taken from the employee's first row.
    pub job_role: String,
    /// Dealer name, taken from the employee's first row.
    pub division: String,
    /// Brand label inferred from the employee's training titles.
    pub brand: String,
    /// Tier 1 completion counts.
    pub tier1: TierCompletion,
    /// Tier 2 completion counts.
    pub tier2: TierCompletion,
}

impl EmployeeAggregate {
    /// The overall completion percentage across both tiers.
    ///
    /// `(completed1 + completed2) / (total1 + total2) * 100`, rounded to 2
    /// decimal places; zero when both totals are zero.
    pub fn overall_pct(&self) -> Decimal {
        completion_pct(
            self.tier1.completed + self.tier2.completed,
            self.tier1.total + self.tier2.total,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn aggregate(t1: TierCompletion, t2: TierCompletion) -> EmployeeAggregate {
        EmployeeAggregate {
            user_id: "1001".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            job_role: "SER-12-Technician".to_string(),
            division: "Downtown Motors".to_string(),
            brand: "Jeep".to_string(),
            tier1: t1,
            tier2: t2,
        }
    }

    #[test]
    fn test_pct_two_of_three_rounds_to_66_67() {
        assert_eq!(completion_pct(2, 3), dec("66.67"));
    }

    #[test]
    fn test_pct_zero_total_is_zero() {
        assert_eq!(completion_pct(0, 0), Decimal::ZERO);
    }

    #[test]
    fn test_pct_full_completion_is_100() {
        assert_eq!(completion_pct(4, 4), dec("100.00"));
    }

    #[test]
    fn test_tier_completion_derives_pct() {
        let tc = TierCompletion::new(3, 2);
        assert_eq!(tc.total, 3);
        assert_eq!(tc.completed, 2);
        assert_eq!(tc.pct, dec("66.67"));
    }

    #[test]
    fn test_overall_pct_spans_both_tiers() {
        // 2 of 3 tier1, 0 of 0 tier2 -> overall 66.67
        let agg = aggregate(TierCompletion::new(3, 2), TierCompletion::new(0, 0));
        assert_eq!(agg.overall_pct(), dec("66.67"));

        // 1 of 2 tier1, 1 of 2 tier2 -> overall 50
        let agg = aggregate(TierCompletion::new(2, 1), TierCompletion::new(2, 1));
        assert_eq!(agg.overall_pct(), dec("50.00"));
    }

    #[test]
    fn test_overall_pct_zero_when_no_trainings() {
        let agg = aggregate(TierCompletion::new(0, 0), TierCompletion::new(0, 0));
        assert_eq!(agg.overall_pct(), Decimal::ZERO);
    }

    proptest! {
        #[test]
        fn prop_pct_is_bounded(total in 0u32..1000, completed_frac in 0.0f64..=1.0) {
            let completed = (total as f64 * completed_frac) as u32;
            let pct = completion_pct(completed, total);
            prop_assert!(pct >= Decimal::ZERO);
            prop_assert!(pct <= Decimal::from(100u32));
            if total == 0 {
                prop_assert_eq!(pct, Decimal::ZERO);
            }
        }
    }
}
