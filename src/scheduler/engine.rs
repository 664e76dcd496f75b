//! Scheduling engine.
//!
//! Owns the process collection and runs one algorithm at a time over it.
//!
//! # Run Lifecycle
//! 1. Validate algorithm parameters (no state is touched on failure).
//! 2. Reset every process's runtime fields and clear the schedule.
//! 3. Run the algorithm, filling start and completion times.
//! 4. Derive per-process and aggregate metrics.
//! 5. Return an owned [`SimulationResult`] snapshot.
//!
//! Because step 2 is unconditional, repeated runs on the same process set
//! are idempotent and independent of the order algorithms are run in.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::algorithms::{self, Algorithm};
use crate::error::SimulationError;
use crate::models::{Process, Schedule};
use crate::validation::{validate_processes, ValidationResult};

use super::Metrics;

/// Outcome of one simulation run.
///
/// Owns copies of the schedule and processes, so results of different
/// runs can be kept side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Algorithm that produced this result.
    pub algorithm: Algorithm,
    /// Timeline in order.
    pub schedule: Schedule,
    /// Processes in insertion order with runtime fields filled in.
    pub processes: Vec<Process>,
    /// Aggregate statistics.
    pub metrics: Metrics,
}

impl SimulationResult {
    /// Finds a process by pid.
    pub fn process(&self, pid: &str) -> Option<&Process> {
        self.processes.iter().find(|p| p.pid == pid)
    }
}

/// CPU scheduling simulation engine.
///
/// The engine does not validate its input: duplicate pids are accepted
/// and make tie-breaking ambiguous. Use [`Engine::validate`] (or
/// [`SimulationRequest`](super::SimulationRequest)) at the boundary.
///
/// # Example
///
/// ```
/// use cpu_sched::scheduler::Engine;
///
/// let mut engine = Engine::new();
/// engine.add_process("P1", 0, 5, 0);
/// engine.add_process("P2", 1, 3, 0);
///
/// let result = engine.fcfs();
/// assert_eq!(result.schedule.len(), 2);
/// assert!((result.metrics.avg_waiting_time - 2.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    processes: Vec<Process>,
    schedule: Schedule,
}

impl Engine {
    /// Creates an empty engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine over an existing process list.
    pub fn with_processes(processes: Vec<Process>) -> Self {
        Self {
            processes,
            schedule: Schedule::new(),
        }
    }

    /// Adds a process (builder form).
    pub fn with_process(mut self, process: Process) -> Self {
        self.add(process);
        self
    }

    /// Constructs and appends a process.
    pub fn add_process(
        &mut self,
        pid: impl Into<String>,
        arrival_time: i64,
        burst_time: i64,
        priority: i32,
    ) {
        self.add(Process::new(pid, arrival_time, burst_time).with_priority(priority));
    }

    /// Appends a process record.
    pub fn add(&mut self, mut process: Process) {
        process.reset();
        self.processes.push(process);
    }

    /// Removes the first process with the given pid.
    pub fn remove_process(&mut self, pid: &str) -> Option<Process> {
        let index = self.processes.iter().position(|p| p.pid == pid)?;
        Some(self.processes.remove(index))
    }

    /// Removes every process and clears the schedule.
    pub fn clear_processes(&mut self) {
        self.processes.clear();
        self.schedule.clear();
    }

    /// Resets runtime fields of every process and clears the schedule.
    pub fn reset_processes(&mut self) {
        for p in &mut self.processes {
            p.reset();
        }
        self.schedule.clear();
    }

    /// Processes in insertion order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Schedule of the latest run.
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the engine holds no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Runs boundary validation over the current process set.
    pub fn validate(&self) -> ValidationResult {
        validate_processes(&self.processes)
    }

    /// Runs First-Come-First-Served.
    pub fn fcfs(&mut self) -> SimulationResult {
        self.begin(Algorithm::Fcfs);
        let schedule = algorithms::fcfs(&mut self.processes);
        self.finish(Algorithm::Fcfs, schedule)
    }

    /// Runs Shortest Job First (non-preemptive).
    pub fn sjf(&mut self) -> SimulationResult {
        self.begin(Algorithm::Sjf);
        let schedule = algorithms::sjf(&mut self.processes);
        self.finish(Algorithm::Sjf, schedule)
    }

    /// Runs Priority scheduling (non-preemptive).
    pub fn priority(&mut self) -> SimulationResult {
        self.begin(Algorithm::Priority);
        let schedule = algorithms::priority(&mut self.processes);
        self.finish(Algorithm::Priority, schedule)
    }

    /// Runs Round Robin with the given quantum.
    ///
    /// # Errors
    /// [`SimulationError::InvalidQuantum`] if `quantum <= 0`. The engine
    /// state (processes and previous schedule) is left untouched.
    pub fn round_robin(&mut self, quantum: i64) -> Result<SimulationResult, SimulationError> {
        let algorithm = Algorithm::RoundRobin { quantum };
        algorithm.validate()?;
        self.begin(algorithm);
        let schedule = algorithms::round_robin(&mut self.processes, quantum)?;
        Ok(self.finish(algorithm, schedule))
    }

    /// Runs the selected algorithm.
    pub fn run(&mut self, algorithm: Algorithm) -> Result<SimulationResult, SimulationError> {
        match algorithm {
            Algorithm::Fcfs => Ok(self.fcfs()),
            Algorithm::Sjf => Ok(self.sjf()),
            Algorithm::RoundRobin { quantum } => self.round_robin(quantum),
            Algorithm::Priority => Ok(self.priority()),
        }
    }

    fn begin(&mut self, algorithm: Algorithm) {
        self.reset_processes();
        info!(
            "running {} over {} processes",
            algorithm,
            self.processes.len()
        );
    }

    fn finish(&mut self, algorithm: Algorithm, schedule: Schedule) -> SimulationResult {
        let metrics = Metrics::calculate(&mut self.processes, &schedule);
        if !metrics.all_completed() {
            warn!(
                "{}: {} of {} processes did not complete",
                algorithm.name(),
                metrics.process_count - metrics.completed_count,
                metrics.process_count
            );
        }
        info!(
            "{} finished: avg waiting {:.2}, avg turnaround {:.2}",
            algorithm.name(),
            metrics.avg_waiting_time,
            metrics.avg_turnaround_time
        );

        self.schedule = schedule;
        SimulationResult {
            algorithm,
            schedule: self.schedule.clone(),
            processes: self.processes.clone(),
            metrics,
        }
    }
}
