//! Per-employee risk scoring.
//!
//! Additive factors, then round and clamp:
//!   1. Utilization tier (highest applicable only)
//!   2. Imminent deadlines on in-progress / backlog tasks
//!   3. High-priority tasks, regardless of status
//!   4. Secure-channel report signal
//!
//! Pure and deterministic for a given `now`; the output is
//! current-moment-relative because deadline proximity is.

use crate::clock::days_until;
use crate::config::RiskConfig;
use crate::model::{Employee, Priority, Status, Task};
use chrono::NaiveDateTime;

/// Bounded composite risk score for one employee and their filtered
/// task bucket. Always in `0..=config.max_score`.
pub fn risk_score(
    config: &RiskConfig,
    employee: &Employee,
    bucket: &[&Task],
    now: NaiveDateTime,
) -> u32 {
    let capacity = if employee.weekly_capacity > 0.0 {
        employee.weekly_capacity
    } else {
        config.default_weekly_capacity
    };
    let assigned_hours: f64 = bucket.iter().map(|t| t.effort_hours).sum();
    let utilization = assigned_hours / capacity;

    let mut score = 0.0;
    if utilization > config.overload_threshold {
        score += config.overload_weight;
    } else if utilization > config.high_threshold {
        score += config.high_weight;
    } else if utilization > config.elevated_threshold {
        score += config.elevated_weight;
    }

    let deadlines_near = bucket
        .iter()
        .filter(|t| matches!(t.status, Status::InProgress | Status::Backlog))
        .filter(|t| {
            t.deadline
                .is_some_and(|d| days_until(d, now) <= config.near_deadline_days)
        })
        .count();
    score += deadlines_near as f64 * config.near_deadline_weight;

    let high_priority = bucket.iter().filter(|t| t.priority == Priority::High).count();
    score += high_priority as f64 * config.high_priority_weight;

    score += f64::from(employee.secure_reports) * config.secure_report_weight;

    (score.round() as u32).min(config.max_score)
}
