//! Facet filtering properties: identity default, intersection,
//! idempotence, order preservation.

use chrono::NaiveDate;
use nom035_core::{
    facet::{filter_tasks, TaskFacets},
    model::{Pattern, Priority, Status, Task},
};

fn task(id: &str, org_unit: &str, pattern: Pattern, status: Status) -> Task {
    Task {
        id: id.into(),
        title: format!("task {id}"),
        pattern,
        assignee_id: None,
        org_unit: org_unit.into(),
        effort_hours: 4.0,
        created_at: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
        deadline: Some(NaiveDate::from_ymd_opt(2025, 8, 25).unwrap()),
        status,
        priority: Priority::Medium,
        offers_accepted: 0,
    }
}

fn fixture() -> Vec<Task> {
    vec![
        task("t1", "TI", Pattern::Direct, Status::InProgress),
        task("t2", "TI", Pattern::Offer, Status::Offered),
        task("t3", "RH", Pattern::Deferred, Status::Backlog),
        task("t4", "RH", Pattern::Direct, Status::Done),
        task("t5", "Académica", Pattern::Direct, Status::InProgress),
    ]
}

/// Default facets constrain nothing.
#[test]
fn default_facets_are_identity() {
    let tasks = fixture();
    let filtered = filter_tasks(&tasks, &TaskFacets::default());
    assert_eq!(filtered.len(), tasks.len());
}

/// A single facet narrows on its own dimension only.
#[test]
fn org_facet_narrows_to_matching_unit() {
    let tasks = fixture();
    let facets = TaskFacets {
        org_unit: Some("TI".into()),
        ..TaskFacets::default()
    };
    let filtered = filter_tasks(&tasks, &facets);
    let ids: Vec<&str> = filtered.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["t1", "t2"]);
}

/// Constrained facets intersect.
#[test]
fn combined_facets_intersect() {
    let tasks = fixture();
    let facets = TaskFacets {
        org_unit: Some("RH".into()),
        pattern: Some(Pattern::Direct),
        status: Some(Status::Done),
    };
    let filtered = filter_tasks(&tasks, &facets);
    let ids: Vec<&str> = filtered.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["t4"]);
}

/// Filtering an already-filtered set with the same facets changes
/// nothing.
#[test]
fn filtering_is_idempotent() {
    let tasks = fixture();
    let facets = TaskFacets {
        pattern: Some(Pattern::Direct),
        ..TaskFacets::default()
    };
    let once: Vec<Task> = filter_tasks(&tasks, &facets)
        .into_iter()
        .cloned()
        .collect();
    let twice = filter_tasks(&once, &facets);
    let ids_once: Vec<&str> = once.iter().map(|t| t.id.as_str()).collect();
    let ids_twice: Vec<&str> = twice.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids_once, ids_twice);
}

/// A facet value matching no task yields an empty set, not an error.
#[test]
fn unknown_org_value_matches_nothing() {
    let tasks = fixture();
    let facets = TaskFacets {
        org_unit: Some("Inexistente".into()),
        ..TaskFacets::default()
    };
    assert!(filter_tasks(&tasks, &facets).is_empty());
}

/// Input order survives filtering.
#[test]
fn input_order_is_preserved() {
    let tasks = fixture();
    let facets = TaskFacets {
        pattern: Some(Pattern::Direct),
        ..TaskFacets::default()
    };
    let ids: Vec<&str> = filter_tasks(&tasks, &facets)
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(ids, ["t1", "t4", "t5"]);
}
