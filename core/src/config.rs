//! Risk scoring policy — every tunable constant as a named field.
//!
//! The scorer itself (risk.rs) contains no literals: changing the
//! intervention policy means editing a config file, not the algorithm.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    /// Weekly capacity substituted when an employee record carries
    /// no capacity (absent or zero).
    pub default_weekly_capacity: f64,

    /// Utilization above this ratio counts as over-allocated.
    pub overload_threshold: f64,
    /// Utilization above this ratio counts as high.
    pub high_threshold: f64,
    /// Utilization above this ratio counts as elevated.
    pub elevated_threshold: f64,

    /// Score added for the over-allocated tier.
    pub overload_weight: f64,
    /// Score added for the high tier.
    pub high_weight: f64,
    /// Score added for the elevated tier.
    pub elevated_weight: f64,

    /// A deadline within this many days (including overdue) counts as
    /// imminent for in-progress and backlog tasks.
    pub near_deadline_days: i64,
    /// Score added per task with an imminent deadline.
    pub near_deadline_weight: f64,

    /// Score added per high-priority task, regardless of status.
    pub high_priority_weight: f64,

    /// Score added per secure-channel report on the employee.
    pub secure_report_weight: f64,

    /// Upper bound of the final score.
    pub max_score: u32,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            default_weekly_capacity: 40.0,
            overload_threshold: 1.0,
            high_threshold: 0.85,
            elevated_threshold: 0.6,
            overload_weight: 50.0,
            high_weight: 30.0,
            elevated_weight: 15.0,
            near_deadline_days: 5,
            near_deadline_weight: 8.0,
            high_priority_weight: 6.0,
            secure_report_weight: 4.0,
            max_score: 100,
        }
    }
}

impl RiskConfig {
    /// Load a policy override from a JSON file. Missing fields keep
    /// their reference values.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: RiskConfig = serde_json::from_str(&content)?;
        Ok(config)
    }
}
