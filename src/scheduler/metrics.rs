//! Simulation performance metrics.
//!
//! Derives per-process turnaround and waiting times from completion times
//! and aggregates them into run-level statistics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first dispatch - arrival |
//! | Makespan | Latest completion time |
//! | CPU Utilization | busy time / timeline span |
//! | Throughput | completed processes / timeline span |
//!
//! Averages divide by the total process count, including processes that
//! never completed. Such processes are left out of the sums.

use serde::{Deserialize, Serialize};

use crate::models::{Process, Schedule};

/// Run-level performance statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Mean waiting time over all processes.
    pub avg_waiting_time: f64,
    /// Mean turnaround time over all processes.
    pub avg_turnaround_time: f64,
    /// Mean response time over all processes.
    pub avg_response_time: f64,
    /// Sum of waiting times of completed processes.
    pub total_waiting_time: i64,
    /// Sum of turnaround times of completed processes.
    pub total_turnaround_time: i64,
    /// Number of processes in the run.
    pub process_count: usize,
    /// Number of processes that reached completion.
    pub completed_count: usize,
    /// Latest completion time (0 when nothing completed).
    pub makespan: i64,
    /// Busy fraction of the timeline (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Switches between distinct processes.
    pub context_switches: usize,
}

impl Metrics {
    /// Fills in derived per-process fields and computes run metrics.
    ///
    /// For every completed process sets `turnaround_time` and
    /// `waiting_time`. Processes without a completion time keep `None`.
    pub fn calculate(processes: &mut [Process], schedule: &Schedule) -> Self {
        let n = processes.len();
        let mut total_waiting: i64 = 0;
        let mut total_turnaround: i64 = 0;
        let mut total_response: i64 = 0;
        let mut completed: usize = 0;
        let mut makespan: i64 = 0;

        for p in processes.iter_mut() {
            if let Some(response) = p.response_time() {
                total_response += response;
            }

            let Some(completion) = p.completion_time else {
                continue;
            };
            let turnaround = completion - p.arrival_time;
            let waiting = turnaround - p.burst_time;
            p.turnaround_time = Some(turnaround);
            p.waiting_time = Some(waiting);

            total_turnaround += turnaround;
            total_waiting += waiting;
            completed += 1;
            makespan = makespan.max(completion);
        }

        let average = |total: i64| {
            if n == 0 {
                0.0
            } else {
                total as f64 / n as f64
            }
        };

        let span = schedule.span();
        let throughput = if span > 0 {
            completed as f64 / span as f64
        } else {
            0.0
        };

        Self {
            avg_waiting_time: average(total_waiting),
            avg_turnaround_time: average(total_turnaround),
            avg_response_time: average(total_response),
            total_waiting_time: total_waiting,
            total_turnaround_time: total_turnaround,
            process_count: n,
            completed_count: completed,
            makespan,
            cpu_utilization: schedule.utilization().unwrap_or(0.0),
            throughput,
            context_switches: schedule.context_switches(),
        }
    }

    /// Whether every process in the run completed.
    pub fn all_completed(&self) -> bool {
        self.completed_count == self.process_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed(pid: &str, arrival: i64, burst: i64, start: i64, completion: i64) -> Process {
        let mut p = Process::new(pid, arrival, burst);
        p.start_time = Some(start);
        p.completion_time = Some(completion);
        p.remaining_time = 0;
        p
    }

    #[test]
    fn test_metrics_basic() {
        let mut processes = vec![completed("P1", 0, 5, 0, 5), completed("P2", 1, 3, 5, 8)];
        let mut schedule = Schedule::new();
        schedule.push_busy("P1", 0, 5);
        schedule.push_busy("P2", 5, 8);

        let m = Metrics::calculate(&mut processes, &schedule);
        assert_eq!(processes[0].turnaround_time, Some(5));
        assert_eq!(processes[0].waiting_time, Some(0));
        assert_eq!(processes[1].turnaround_time, Some(7));
        assert_eq!(processes[1].waiting_time, Some(4));

        assert_eq!(m.total_waiting_time, 4);
        assert_eq!(m.total_turnaround_time, 12);
        assert!((m.avg_waiting_time - 2.0).abs() < 1e-10);
        assert!((m.avg_turnaround_time - 6.0).abs() < 1e-10);
        assert!((m.avg_response_time - 2.0).abs() < 1e-10);
        assert_eq!(m.makespan, 8);
        assert!((m.cpu_utilization - 1.0).abs() < 1e-10);
        assert!((m.throughput - 0.25).abs() < 1e-10);
        assert_eq!(m.context_switches, 1);
        assert!(m.all_completed());
    }

    #[test]
    fn test_metrics_empty() {
        let m = Metrics::calculate(&mut [], &Schedule::new());
        assert_eq!(m.process_count, 0);
        assert_eq!(m.avg_waiting_time, 0.0);
        assert_eq!(m.avg_turnaround_time, 0.0);
        assert_eq!(m.throughput, 0.0);
        assert_eq!(m.cpu_utilization, 0.0);
        assert!(m.all_completed());
    }

    #[test]
    fn test_incomplete_process_counted_in_n() {
        let mut processes = vec![completed("P1", 0, 4, 0, 4), Process::new("P2", 0, 4)];
        let mut schedule = Schedule::new();
        schedule.push_busy("P1", 0, 4);

        let m = Metrics::calculate(&mut processes, &schedule);
        assert_eq!(m.completed_count, 1);
        assert_eq!(m.process_count, 2);
        // P1 turnaround 4, averaged over both processes.
        assert!((m.avg_turnaround_time - 2.0).abs() < 1e-10);
        assert!(processes[1].turnaround_time.is_none());
        assert!(processes[1].waiting_time.is_none());
        assert!(!m.all_completed());
    }

    #[test]
    fn test_utilization_with_idle() {
        let mut processes = vec![completed("P1", 3, 2, 3, 5)];
        let mut schedule = Schedule::new();
        schedule.push_idle(0, 3);
        schedule.push_busy("P1", 3, 5);

        let m = Metrics::calculate(&mut processes, &schedule);
        assert!((m.cpu_utilization - 0.4).abs() < 1e-10);
        assert_eq!(m.makespan, 5);
    }
}
