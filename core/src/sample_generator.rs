//! Deterministic synthetic dataset generation using curated lists.
//!
//! Same seed = same dataset. Nothing here touches a platform RNG; a
//! single seeded stream drives every draw, so generated fixtures are
//! reproducible across machines for demos and load tests.

use crate::model::{Dataset, Employee, Pattern, Priority, Status, Task};
use chrono::{Duration, NaiveDate};
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// Seeded random stream for dataset generation.
struct GenRng {
    inner: Pcg64Mcg,
}

impl GenRng {
    fn new(seed: u64) -> Self {
        Self {
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Roll a float in [0.0, 1.0).
    fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n).
    fn next_u64_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Bernoulli trial: returns true with probability p.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Pick one element from a non-empty slice.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.next_u64_below(items.len() as u64) as usize]
    }
}

const FIRST_NAMES: &[&str] = &[
    "Ana", "Luis", "María", "Diego", "Sofía", "Carlos", "Lucía", "Jorge", "Elena", "Miguel",
    "Valeria", "Andrés", "Carmen", "Raúl", "Paola", "Héctor", "Daniela", "Fernando", "Gabriela",
    "Ricardo",
];

const LAST_NAMES: &[&str] = &[
    "López", "Pérez", "Díaz", "Flores", "Ramírez", "García", "Hernández", "Martínez", "Torres",
    "Sánchez", "Morales", "Castillo", "Ortiz", "Vargas", "Mendoza", "Rojas",
];

const ROLES: &[&str] = &[
    "Evaluadora",
    "Coordinador",
    "Analista",
    "Psicóloga Organizacional",
    "Auditor",
    "Capacitador",
];

const ORG_UNITS: &[&str] = &["Académica", "TI", "RH", "Operaciones", "Finanzas"];

const TASK_VERBS: &[&str] = &["Evaluar", "Revisar", "Auditar", "Automatizar", "Documentar", "Capacitar"];

const TASK_TOPICS: &[&str] = &[
    "plan de mejora",
    "cargas de trabajo",
    "clima laboral",
    "plataforma de workflow",
    "reporte NOM-035",
    "accesos del sistema",
    "canal seguro",
    "entrevistas de seguimiento",
];

/// Generate a synthetic dataset with `employee_count` employees and
/// roughly two tasks per employee, with deadlines spread around `today`.
pub fn generate(seed: u64, employee_count: usize, today: NaiveDate) -> Dataset {
    let mut rng = GenRng::new(seed);

    let employees: Vec<Employee> = (0..employee_count)
        .map(|i| {
            let secure_reports = if rng.chance(0.25) {
                rng.next_u64_below(4) as u32
            } else {
                0
            };
            Employee {
                id: format!("e-{:04}", i + 1),
                name: format!("{} {}", rng.pick(FIRST_NAMES), rng.pick(LAST_NAMES)),
                role: rng.pick(ROLES).to_string(),
                org_unit: rng.pick(ORG_UNITS).to_string(),
                weekly_capacity: 35.0 + rng.next_u64_below(8) as f64,
                secure_reports,
            }
        })
        .collect();

    let task_count = employee_count * 2;
    let tasks: Vec<Task> = (0..task_count)
        .map(|i| {
            let pattern = match rng.next_u64_below(10) {
                0..=4 => Pattern::Direct,
                5..=7 => Pattern::Deferred,
                _ => Pattern::Offer,
            };

            // Direct tasks are pre-assigned; deferred sit unassigned in
            // the backlog; offers are mostly unclaimed.
            let assignee = match pattern {
                Pattern::Direct => Some(rng.pick(&employees)),
                Pattern::Deferred => None,
                Pattern::Offer => {
                    if rng.chance(0.2) {
                        Some(rng.pick(&employees))
                    } else {
                        None
                    }
                }
            };

            let status = match pattern {
                Pattern::Offer => Status::Offered,
                Pattern::Deferred => Status::Backlog,
                Pattern::Direct => {
                    if rng.chance(0.2) {
                        Status::Done
                    } else {
                        Status::InProgress
                    }
                }
            };

            let priority = match rng.next_u64_below(10) {
                0..=2 => Priority::High,
                3..=6 => Priority::Medium,
                _ => Priority::Low,
            };

            let org_unit = assignee
                .map(|e| e.org_unit.clone())
                .unwrap_or_else(|| rng.pick(ORG_UNITS).to_string());

            let created_at = today - Duration::days(rng.next_u64_below(21) as i64);
            // Spread deadlines from 5 days overdue to a month out; a few
            // tasks carry none at all.
            let deadline = if rng.chance(0.9) {
                Some(today + Duration::days(rng.next_u64_below(36) as i64 - 5))
            } else {
                None
            };

            Task {
                id: format!("t-{:04}", i + 1),
                title: format!("{} {}", rng.pick(TASK_VERBS), rng.pick(TASK_TOPICS)),
                pattern,
                assignee_id: assignee.map(|e| e.id.clone()),
                org_unit,
                effort_hours: 2.0 + rng.next_u64_below(15) as f64,
                created_at,
                deadline,
                status,
                priority,
                offers_accepted: if pattern == Pattern::Offer && rng.chance(0.3) {
                    1
                } else {
                    0
                },
            }
        })
        .collect();

    Dataset { employees, tasks }
}
