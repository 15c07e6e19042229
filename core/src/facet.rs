//! Task facets — the three independent selection dimensions.
//!
//! `None` on a dimension means unconstrained; default facets are the
//! identity filter.

use crate::model::{Pattern, Status, Task};
use crate::types::OrgUnit;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFacets {
    pub org_unit: Option<OrgUnit>,
    pub pattern: Option<Pattern>,
    pub status: Option<Status>,
}

impl TaskFacets {
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(unit) = &self.org_unit {
            if task.org_unit != *unit {
                return false;
            }
        }
        if let Some(pattern) = self.pattern {
            if task.pattern != pattern {
                return false;
            }
        }
        if let Some(status) = self.status {
            if task.status != status {
                return false;
            }
        }
        true
    }
}

/// Narrow the task set to those matching every constrained facet.
/// Preserves input order; never mutates the input.
pub fn filter_tasks<'a>(tasks: &'a [Task], facets: &TaskFacets) -> Vec<&'a Task> {
    tasks.iter().filter(|t| facets.matches(t)).collect()
}
