//! report-runner: headless analytics runner for the NOM-035 workload
//! dashboard core.
//!
//! Usage:
//!   report-runner --data ./nom035-data.json
//!   report-runner --data ./nom035-data.json --org TI --status backlog
//!   report-runner --data ./nom035-data.json --json
//!   report-runner --data ./nom035-data.json --config ./risk-policy.json
//!   report-runner --sample-out ./nom035-data.json
//!   report-runner --generate 50 --seed 42 --out ./generated.json
//!
//! Computes one dashboard snapshot at the current local time and prints
//! a summary. `--org`, `--pattern`, `--status` and `--query` narrow the
//! view the way the dashboard facets do; `all` leaves a dimension
//! unconstrained.

use anyhow::Result;
use nom035_core::{
    config::RiskConfig,
    dataset::{self, SAMPLE_DATASET_JSON},
    facet::TaskFacets,
    model::{Pattern, Status},
    sample_generator,
    snapshot::DashboardSnapshot,
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if let Some(path) = str_arg(&args, "--sample-out") {
        std::fs::write(&path, SAMPLE_DATASET_JSON)?;
        println!("Sample dataset written to {path}");
        return Ok(());
    }

    if let Some(count) = opt_arg::<usize>(&args, "--generate") {
        let seed = parse_arg(&args, "--seed", 42u64);
        let out = str_arg(&args, "--out").unwrap_or_else(|| "generated.json".to_string());
        let today = chrono::Local::now().date_naive();
        let generated = sample_generator::generate(seed, count, today);
        std::fs::write(&out, serde_json::to_string_pretty(&generated)?)?;
        println!(
            "Generated dataset written to {out}: {} employees, {} tasks (seed {seed})",
            generated.employees.len(),
            generated.tasks.len()
        );
        return Ok(());
    }

    let data_path = str_arg(&args, "--data").unwrap_or_else(|| "./nom035-data.json".to_string());
    let config = match str_arg(&args, "--config") {
        Some(path) => RiskConfig::load(&path)?,
        None => RiskConfig::default(),
    };

    let facets = TaskFacets {
        org_unit: facet_value(&args, "--org"),
        pattern: facet_value(&args, "--pattern")
            .map(|v| Pattern::parse(&v).ok_or_else(|| anyhow::anyhow!("unknown pattern: {v}")))
            .transpose()?,
        status: facet_value(&args, "--status")
            .map(|v| Status::parse(&v).ok_or_else(|| anyhow::anyhow!("unknown status: {v}")))
            .transpose()?,
    };
    let name_query = str_arg(&args, "--query").unwrap_or_default();

    let loaded = dataset::load_or_sample(&data_path);
    let now = chrono::Local::now().naive_local();
    log::info!("computing snapshot for {data_path} at {now}");
    let snapshot = DashboardSnapshot::compute(&config, &loaded, &facets, &name_query, now);

    if args.iter().any(|a| a == "--json") {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print_summary(&snapshot);
    }
    Ok(())
}

fn print_summary(snapshot: &DashboardSnapshot) {
    let k = &snapshot.kpis;
    println!("=== TASK KPIS ===");
    println!("  total:             {}", k.total);
    println!("  unassigned:        {}", k.unassigned);
    println!("  offered:           {}", k.offered);
    println!("  offered unclaimed: {}", k.offered_unclaimed);
    println!("  deferred:          {}", k.deferred);
    println!("  direct:            {}", k.direct);
    println!("  overdue:           {}", k.overdue);

    println!();
    println!("=== EMPLOYEE RISK (highest first) ===");
    if snapshot.rows.is_empty() {
        println!("  (no employees match the current filters)");
    }
    for row in &snapshot.rows {
        println!(
            "  {:<24} {:<12} risk={:>3} util={:>4}% tasks={} hours={:.0} reports={}",
            row.name, row.org_unit, row.risk, row.utilization, row.assigned_tasks,
            row.assigned_hours, row.secure_reports
        );
    }

    println!();
    println!("=== TASKS BY PATTERN ===");
    for slice in &snapshot.tasks_by_pattern {
        println!("  {:<10} {}", slice.pattern.as_str(), slice.count);
    }

    println!();
    println!("=== AVERAGE RISK BY ORG UNIT ===");
    for point in &snapshot.risk_by_org_unit {
        println!("  {:<16} {}", point.org_unit, point.avg_risk);
    }

    println!();
    println!("=== DEADLINE TREND ===");
    for point in &snapshot.deadline_trend {
        println!("  {:<10} {}", point.name, point.value);
    }
}

/// Facet flag: absent or the literal `all` means unconstrained.
fn facet_value(args: &[String], flag: &str) -> Option<String> {
    str_arg(args, flag).filter(|v| v != "all")
}

fn str_arg(args: &[String], flag: &str) -> Option<String> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].clone())
}

fn opt_arg<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    opt_arg(args, flag).unwrap_or(default)
}
