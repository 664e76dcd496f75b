//! Random workload generation.
//!
//! Produces process sets for demos, benchmarks and property-style tests.
//! Generation is driven by a caller-supplied RNG, so a seeded RNG gives a
//! reproducible workload.

use rand::Rng;

use crate::models::Process;

/// Generator for random process sets.
///
/// Pids are `P1..Pn`; every generated set passes
/// [`validate_processes`](crate::validation::validate_processes).
///
/// # Example
///
/// ```
/// use cpu_sched::workload::WorkloadGenerator;
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let processes = WorkloadGenerator::new(5).with_max_burst(4).generate(&mut rng);
/// assert_eq!(processes.len(), 5);
/// assert!(processes.iter().all(|p| (1..=4).contains(&p.burst_time)));
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    /// Number of processes.
    pub count: usize,
    /// Latest possible arrival time.
    pub max_arrival: i64,
    /// Longest possible burst (at least 1).
    pub max_burst: i64,
    /// Largest priority number.
    pub max_priority: i32,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 20,
            max_burst: 10,
            max_priority: 5,
        }
    }

    /// Sets the latest arrival time.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    /// Sets the longest burst.
    pub fn with_max_burst(mut self, max_burst: i64) -> Self {
        self.max_burst = max_burst.max(1);
        self
    }

    /// Sets the largest priority number.
    pub fn with_max_priority(mut self, max_priority: i32) -> Self {
        self.max_priority = max_priority.max(0);
        self
    }

    /// Generates a process set.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        (1..=self.count)
            .map(|i| {
                Process::new(
                    format!("P{i}"),
                    rng.random_range(0..=self.max_arrival),
                    rng.random_range(1..=self.max_burst),
                )
                .with_priority(rng.random_range(0..=self.max_priority))
            })
            .collect()
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self::new(5)
    }
}
