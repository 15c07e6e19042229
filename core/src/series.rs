//! Chart-series aggregators — independent pure reductions over the
//! filtered task set or the row collection. No shared state.

use crate::clock::week_key;
use crate::model::{EmployeeRow, Pattern, Task};
use crate::types::OrgUnit;
use serde::Serialize;

/// A generic named count, used by the dynamic histograms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesPoint {
    pub name: String,
    pub value: u64,
}

/// Assigned hours vs. declared capacity, one point per grid row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadPoint {
    pub name: String,
    pub assigned_hours: f64,
    pub weekly_capacity: f64,
}

/// One fixed bucket of the assignment-pattern histogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternCount {
    pub pattern: Pattern,
    pub count: u64,
}

/// Mean risk per org unit, rounded to the nearest integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgRiskPoint {
    pub org_unit: OrgUnit,
    pub avg_risk: u32,
}

/// Mirrors the row collection: one point per row, in row (risk) order.
pub fn workload_by_employee(rows: &[EmployeeRow]) -> Vec<WorkloadPoint> {
    rows.iter()
        .map(|row| WorkloadPoint {
            name: row.name.clone(),
            assigned_hours: row.assigned_hours,
            weekly_capacity: row.weekly_capacity,
        })
        .collect()
}

/// Fixed three-bucket histogram (direct, deferred, offer); zero-count
/// buckets still appear.
pub fn tasks_by_pattern(filtered: &[&Task]) -> Vec<PatternCount> {
    Pattern::ALL
        .iter()
        .map(|&pattern| PatternCount {
            pattern,
            count: filtered.iter().filter(|t| t.pattern == pattern).count() as u64,
        })
        .collect()
}

/// Dynamic histogram over org units observed in the filtered set,
/// first-seen order.
pub fn tasks_by_org_unit(filtered: &[&Task]) -> Vec<SeriesPoint> {
    let mut points: Vec<SeriesPoint> = Vec::new();
    for task in filtered {
        match points.iter_mut().find(|p| p.name == task.org_unit) {
            Some(point) => point.value += 1,
            None => points.push(SeriesPoint {
                name: task.org_unit.clone(),
                value: 1,
            }),
        }
    }
    points
}

/// Arithmetic mean of row risk per org unit, rounded. An org unit with
/// no surviving rows is absent, not zero.
pub fn risk_by_org_unit(rows: &[EmployeeRow]) -> Vec<OrgRiskPoint> {
    let mut groups: Vec<(OrgUnit, u64, u64)> = Vec::new();
    for row in rows {
        match groups.iter_mut().find(|(unit, _, _)| *unit == row.org_unit) {
            Some((_, total, count)) => {
                *total += u64::from(row.risk);
                *count += 1;
            }
            None => groups.push((row.org_unit.clone(), u64::from(row.risk), 1)),
        }
    }
    groups
        .into_iter()
        .map(|(org_unit, total, count)| OrgRiskPoint {
            org_unit,
            avg_risk: (total as f64 / count as f64).round() as u32,
        })
        .collect()
}

/// Task counts per deadline week bucket, first-seen order. Tasks
/// without a deadline are excluded.
pub fn deadline_trend(filtered: &[&Task]) -> Vec<SeriesPoint> {
    let mut points: Vec<SeriesPoint> = Vec::new();
    for task in filtered {
        let Some(deadline) = task.deadline else {
            continue;
        };
        let key = week_key(deadline);
        match points.iter_mut().find(|p| p.name == key) {
            Some(point) => point.value += 1,
            None => points.push(SeriesPoint {
                name: key,
                value: 1,
            }),
        }
    }
    points
}
