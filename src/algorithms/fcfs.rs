//! First-Come-First-Served scheduling.
//!
//! # Algorithm
//!
//! 1. Sort processes by `(arrival_time, pid)`.
//! 2. Starting from t=0, dispatch each process in order and run it to
//!    completion. If the CPU is ahead of the next arrival, emit an idle
//!    block up to that arrival.
//!
//! # Complexity
//! O(n log n) for the sort, then a single pass.

use log::debug;

use crate::models::{Process, Schedule};

/// Runs FCFS over `processes`, which must already be reset.
pub fn fcfs(processes: &mut [Process]) -> Schedule {
    let mut schedule = Schedule::new();

    let mut order: Vec<usize> = (0..processes.len()).collect();
    order.sort_by(|&a, &b| {
        let (pa, pb) = (&processes[a], &processes[b]);
        pa.arrival_time
            .cmp(&pb.arrival_time)
            .then_with(|| pa.pid.cmp(&pb.pid))
    });

    let mut time = 0;
    for idx in order {
        let p = &mut processes[idx];
        if time < p.arrival_time {
            debug!("cpu idle from {} to {}", time, p.arrival_time);
            schedule.push_idle(time, p.arrival_time);
            time = p.arrival_time;
        }

        p.start_time = Some(time);
        time += p.burst_time;
        p.remaining_time = 0;
        p.completion_time = Some(time);
        debug!("dispatched {} over [{}, {})", p.pid, time - p.burst_time, time);
        schedule.push_busy(&p.pid, time - p.burst_time, time);
    }

    schedule
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pids(schedule: &Schedule) -> Vec<(&str, i64, i64)> {
        schedule
            .iter()
            .map(|b| (b.pid.as_str(), b.start_time, b.end_time))
            .collect()
    }

    #[test]
    fn test_fcfs_basic() {
        let mut processes = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
        let schedule = fcfs(&mut processes);

        assert_eq!(pids(&schedule), vec![("P1", 0, 5), ("P2", 5, 8)]);
        assert_eq!(processes[0].start_time, Some(0));
        assert_eq!(processes[0].completion_time, Some(5));
        assert_eq!(processes[1].start_time, Some(5));
        assert_eq!(processes[1].completion_time, Some(8));
    }

    #[test]
    fn test_fcfs_idle_gap() {
        let mut processes = vec![Process::new("P1", 3, 2)];
        let schedule = fcfs(&mut processes);

        assert_eq!(pids(&schedule), vec![("Idle", 0, 3), ("P1", 3, 5)]);
        assert!(schedule.blocks[0].is_idle);
    }

    #[test]
    fn test_fcfs_pid_tie_break() {
        let mut processes = vec![Process::new("B", 0, 2), Process::new("A", 0, 2)];
        let schedule = fcfs(&mut processes);
        assert_eq!(pids(&schedule), vec![("A", 0, 2), ("B", 2, 4)]);
    }

    #[test]
    fn test_fcfs_gap_between_processes() {
        let mut processes = vec![Process::new("P1", 0, 2), Process::new("P2", 5, 1)];
        let schedule = fcfs(&mut processes);
        assert_eq!(
            pids(&schedule),
            vec![("P1", 0, 2), ("Idle", 2, 5), ("P2", 5, 6)]
        );
        assert!(schedule.is_contiguous());
    }

    #[test]
    fn test_fcfs_empty() {
        let schedule = fcfs(&mut []);
        assert!(schedule.is_empty());
    }
}
