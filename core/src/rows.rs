//! Row builder — the per-employee grid rows, sorted by risk.

use crate::config::RiskConfig;
use crate::grouping::TaskBuckets;
use crate::model::{Employee, EmployeeRow};
use crate::risk::risk_score;
use chrono::NaiveDateTime;

/// Build one row per employee surviving the employee-level filters:
/// org-unit match on the employee's own unit, then case-insensitive
/// substring match of `name_query` (empty query matches all). Rows are
/// sorted by risk descending; ties keep employee enumeration order
/// (the sort is stable).
pub fn build_rows(
    config: &RiskConfig,
    employees: &[Employee],
    buckets: &TaskBuckets<'_>,
    org_unit: Option<&str>,
    name_query: &str,
    now: NaiveDateTime,
) -> Vec<EmployeeRow> {
    let query = name_query.to_lowercase();

    let mut rows: Vec<EmployeeRow> = employees
        .iter()
        .filter(|e| org_unit.is_none_or(|unit| e.org_unit == unit))
        .filter(|e| query.is_empty() || e.name.to_lowercase().contains(&query))
        .map(|employee| {
            let bucket = buckets
                .get(&employee.id)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            let assigned_hours: f64 = bucket.iter().map(|t| t.effort_hours).sum();
            let utilization = if employee.weekly_capacity > 0.0 {
                ((assigned_hours / employee.weekly_capacity) * 100.0).round() as u32
            } else {
                0
            };

            EmployeeRow {
                id: employee.id.clone(),
                name: employee.name.clone(),
                role: employee.role.clone(),
                org_unit: employee.org_unit.clone(),
                weekly_capacity: employee.weekly_capacity,
                assigned_tasks: bucket.len(),
                assigned_hours,
                utilization,
                risk: risk_score(config, employee, bucket, now),
                secure_reports: employee.secure_reports,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.risk.cmp(&a.risk));
    rows
}
