//! Shared primitive types used across the entire crate.

/// A stable, unique identifier for an employee record.
pub type EmployeeId = String;

/// A stable, unique identifier for a task record.
pub type TaskId = String;

/// An organizational unit (department / area) label.
pub type OrgUnit = String;
