//! KPI summary — headline counts over the filtered task set.

use crate::clock::is_overdue;
use crate::model::{Pattern, Task};
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    pub total: u64,
    pub unassigned: u64,
    pub offered: u64,
    pub offered_unclaimed: u64,
    pub deferred: u64,
    pub direct: u64,
    /// Deadline strictly before now, regardless of status.
    pub overdue: u64,
}

pub fn kpi_summary(filtered: &[&Task], now: NaiveDateTime) -> KpiSummary {
    let count = |pred: &dyn Fn(&Task) -> bool| filtered.iter().filter(|t| pred(t)).count() as u64;

    KpiSummary {
        total: filtered.len() as u64,
        unassigned: count(&|t| t.assignee_id.is_none()),
        offered: count(&|t| t.pattern == Pattern::Offer),
        offered_unclaimed: count(&|t| t.pattern == Pattern::Offer && t.assignee_id.is_none()),
        deferred: count(&|t| t.pattern == Pattern::Deferred),
        direct: count(&|t| t.pattern == Pattern::Direct),
        overdue: count(&|t| t.deadline.is_some_and(|d| is_overdue(d, now))),
    }
}
