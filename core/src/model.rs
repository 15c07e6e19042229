//! Domain model — the dataset records and the derived employee row.
//!
//! Field names follow the external JSON contract (camelCase keys,
//! snake_case enum values). Optional numerics default to zero on the
//! wire; a missing or empty deadline becomes `None`.

use crate::types::{EmployeeId, OrgUnit, TaskId};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// How a task reaches an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    Direct,
    Deferred,
    Offer,
}

impl Pattern {
    /// Fixed chart/bucket order: direct, deferred, offer.
    pub const ALL: [Pattern; 3] = [Pattern::Direct, Pattern::Deferred, Pattern::Offer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Pattern::Direct => "direct",
            Pattern::Deferred => "deferred",
            Pattern::Offer => "offer",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "direct" => Some(Pattern::Direct),
            "deferred" => Some(Pattern::Deferred),
            "offer" => Some(Pattern::Offer),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Backlog,
    Offered,
    InProgress,
    Done,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Backlog => "backlog",
            Status::Offered => "offered",
            Status::InProgress => "in_progress",
            Status::Done => "done",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "backlog" => Some(Status::Backlog),
            "offered" => Some(Status::Offered),
            "in_progress" => Some(Status::InProgress),
            "done" => Some(Status::Done),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub role: String,
    pub org_unit: OrgUnit,
    #[serde(default)]
    pub weekly_capacity: f64,
    #[serde(default)]
    pub secure_reports: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub pattern: Pattern,
    #[serde(default)]
    pub assignee_id: Option<EmployeeId>,
    pub org_unit: OrgUnit,
    #[serde(default)]
    pub effort_hours: f64,
    pub created_at: NaiveDate,
    #[serde(default, deserialize_with = "deadline_or_none")]
    pub deadline: Option<NaiveDate>,
    pub status: Status,
    pub priority: Priority,
    #[serde(default)]
    pub offers_accepted: u32,
}

/// One derived row per surviving employee. Recomputed from scratch on
/// every facet change, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRow {
    pub id: EmployeeId,
    pub name: String,
    pub role: String,
    pub org_unit: OrgUnit,
    pub weekly_capacity: f64,
    pub assigned_tasks: usize,
    pub assigned_hours: f64,
    /// Integer percent of weekly capacity; may exceed 100.
    /// 0 when the employee record carries no capacity.
    pub utilization: u32,
    /// Bounded composite risk score, 0..=100.
    pub risk: u32,
    pub secure_reports: u32,
}

/// One immutable snapshot of the raw relational dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Dataset {
    /// Distinct org units observed across employees, first-seen order.
    /// Drives the org-unit facet choices.
    pub fn org_units(&self) -> Vec<OrgUnit> {
        let mut units: Vec<OrgUnit> = Vec::new();
        for employee in &self.employees {
            if !units.contains(&employee.org_unit) {
                units.push(employee.org_unit.clone());
            }
        }
        units
    }
}

/// Accepts a missing field, `null`, `""`, or an ISO `YYYY-MM-DD` string.
fn deadline_or_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
