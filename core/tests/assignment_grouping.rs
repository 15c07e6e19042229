//! Grouping properties: every employee gets a bucket, dangling and
//! null assignees drop out, bucket order follows the filtered order.

use chrono::NaiveDate;
use nom035_core::{
    grouping::group_by_assignee,
    model::{Employee, Pattern, Priority, Status, Task},
};

fn employee(id: &str) -> Employee {
    Employee {
        id: id.into(),
        name: format!("employee {id}"),
        role: "Analista".into(),
        org_unit: "TI".into(),
        weekly_capacity: 40.0,
        secure_reports: 0,
    }
}

fn task(id: &str, assignee: Option<&str>) -> Task {
    Task {
        id: id.into(),
        title: format!("task {id}"),
        pattern: Pattern::Direct,
        assignee_id: assignee.map(String::from),
        org_unit: "TI".into(),
        effort_hours: 4.0,
        created_at: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
        deadline: None,
        status: Status::InProgress,
        priority: Priority::Medium,
        offers_accepted: 0,
    }
}

/// Employees with no tasks still get an (empty) bucket.
#[test]
fn every_employee_gets_a_bucket() {
    let employees = [employee("e1"), employee("e2"), employee("e3")];
    let tasks = [task("t1", Some("e1"))];
    let refs: Vec<&Task> = tasks.iter().collect();

    let buckets = group_by_assignee(&employees, &refs);
    assert_eq!(buckets.len(), 3);
    assert_eq!(buckets["e1"].len(), 1);
    assert!(buckets["e2"].is_empty());
    assert!(buckets["e3"].is_empty());
}

/// Tasks land in their assignee's bucket in filtered order.
#[test]
fn tasks_keep_filtered_order_within_bucket() {
    let employees = [employee("e1")];
    let tasks = [
        task("t1", Some("e1")),
        task("t2", Some("e1")),
        task("t3", Some("e1")),
    ];
    let refs: Vec<&Task> = tasks.iter().collect();

    let buckets = group_by_assignee(&employees, &refs);
    let ids: Vec<&str> = buckets["e1"].iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["t1", "t2", "t3"]);
}

/// An assignee id matching no known employee is silently dropped.
#[test]
fn dangling_assignee_is_dropped() {
    let employees = [employee("e1")];
    let tasks = [task("t1", Some("ghost")), task("t2", Some("e1"))];
    let refs: Vec<&Task> = tasks.iter().collect();

    let buckets = group_by_assignee(&employees, &refs);
    assert_eq!(buckets.len(), 1);
    let ids: Vec<&str> = buckets["e1"].iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["t2"]);
}

/// Unassigned tasks belong to no bucket.
#[test]
fn unassigned_tasks_are_dropped() {
    let employees = [employee("e1")];
    let tasks = [task("t1", None), task("t2", None)];
    let refs: Vec<&Task> = tasks.iter().collect();

    let buckets = group_by_assignee(&employees, &refs);
    assert!(buckets["e1"].is_empty());
}
