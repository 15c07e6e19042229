//! nom035-core — workload and psychosocial-risk analytics.
//!
//! Derives per-employee and per-org-unit early-intervention indicators
//! from a relational dataset of employees and tasks: facet filtering,
//! grouping by assignee, utilization and a bounded 0–100 risk score,
//! chart-ready series, and a KPI summary.
//!
//! RULES:
//!   - Every derivation is a pure function of explicit inputs
//!     (dataset snapshot, facet state, "now"). No hidden clock reads,
//!     no retained state, no incremental updates.
//!   - Scoring policy lives in `RiskConfig`, never in literals.
//!   - Malformed input never panics the library: load failures fall
//!     back to the embedded fixture, missing fields default, dangling
//!     references drop out of the affected aggregate.

pub mod clock;
pub mod config;
pub mod dataset;
pub mod error;
pub mod facet;
pub mod grouping;
pub mod kpi;
pub mod model;
pub mod risk;
pub mod rows;
pub mod sample_generator;
pub mod series;
pub mod snapshot;
pub mod types;
