//! Dashboard snapshot — every derived value for one facet state.
//!
//! Recompute-everything semantics: a snapshot is a pure function of
//! (dataset, facets, name query, now). Nothing is updated incrementally
//! and nothing is retained between computations; a newer snapshot
//! simply supersedes an older one.

use crate::{
    config::RiskConfig,
    facet::{filter_tasks, TaskFacets},
    grouping::group_by_assignee,
    kpi::{kpi_summary, KpiSummary},
    model::{Dataset, EmployeeRow},
    rows::build_rows,
    series::{
        deadline_trend, risk_by_org_unit, tasks_by_org_unit, tasks_by_pattern,
        workload_by_employee, OrgRiskPoint, PatternCount, SeriesPoint, WorkloadPoint,
    },
};
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub rows: Vec<EmployeeRow>,
    pub workload_by_employee: Vec<WorkloadPoint>,
    pub tasks_by_pattern: Vec<PatternCount>,
    pub tasks_by_org_unit: Vec<SeriesPoint>,
    pub risk_by_org_unit: Vec<OrgRiskPoint>,
    pub deadline_trend: Vec<SeriesPoint>,
    pub kpis: KpiSummary,
}

impl DashboardSnapshot {
    /// Derive the full dashboard state: filter tasks, bucket them by
    /// assignee, build the sorted rows, then run every aggregator over
    /// the filtered set or the rows. The org-unit facet narrows both
    /// the task set and the employee rows.
    pub fn compute(
        config: &RiskConfig,
        dataset: &Dataset,
        facets: &TaskFacets,
        name_query: &str,
        now: NaiveDateTime,
    ) -> Self {
        let filtered = filter_tasks(&dataset.tasks, facets);
        let buckets = group_by_assignee(&dataset.employees, &filtered);
        let rows = build_rows(
            config,
            &dataset.employees,
            &buckets,
            facets.org_unit.as_deref(),
            name_query,
            now,
        );

        log::debug!(
            "snapshot: {} of {} tasks pass facets, {} rows",
            filtered.len(),
            dataset.tasks.len(),
            rows.len()
        );

        Self {
            workload_by_employee: workload_by_employee(&rows),
            tasks_by_pattern: tasks_by_pattern(&filtered),
            tasks_by_org_unit: tasks_by_org_unit(&filtered),
            risk_by_org_unit: risk_by_org_unit(&rows),
            deadline_trend: deadline_trend(&filtered),
            kpis: kpi_summary(&filtered, now),
            rows,
        }
    }
}
