//! Assignment grouping — filtered tasks bucketed by assignee.
//!
//! Two-phase build: every known employee gets an empty bucket first, so
//! employees with no tasks still appear downstream; then filtered tasks
//! fold into their assignee's bucket. Tasks with no assignee, or with an
//! assignee id matching no known employee, are dropped from grouping
//! (they still count toward the global KPIs).

use crate::model::{Employee, Task};
use crate::types::EmployeeId;
use std::collections::HashMap;

pub type TaskBuckets<'a> = HashMap<EmployeeId, Vec<&'a Task>>;

pub fn group_by_assignee<'a>(employees: &[Employee], filtered: &[&'a Task]) -> TaskBuckets<'a> {
    let mut buckets: TaskBuckets<'a> = employees
        .iter()
        .map(|e| (e.id.clone(), Vec::new()))
        .collect();

    for &task in filtered {
        if let Some(assignee) = &task.assignee_id {
            if let Some(bucket) = buckets.get_mut(assignee) {
                bucket.push(task);
            }
        }
    }

    buckets
}
