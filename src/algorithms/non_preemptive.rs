//! Non-preemptive ready-set scheduling (SJF and Priority).
//!
//! Both algorithms share one control loop and differ only in how the next
//! process is picked from the ready set, expressed as a [`SelectionRule`].
//!
//! # Algorithm
//!
//! 1. Start the clock at the earliest arrival.
//! 2. Ready set = processes that have arrived and not completed.
//! 3. Empty ready set: emit an idle block to the next arrival.
//! 4. Otherwise dispatch the rule's minimum and run it to completion.
//!    Jobs arriving mid-run never preempt it.
//!
//! # Complexity
//! O(n²): every dispatch scans the full process list.

use std::cmp::Ordering;

use log::debug;

use crate::models::{Process, Schedule};

/// Orders ready processes; the minimum is dispatched next.
pub trait SelectionRule {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Compares two ready processes. `Less` means `a` runs first.
    fn compare(&self, a: &Process, b: &Process) -> Ordering;
}

/// Shortest burst first; ties by arrival, then pid.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn compare(&self, a: &Process, b: &Process) -> Ordering {
        a.burst_time
            .cmp(&b.burst_time)
            .then(a.arrival_time.cmp(&b.arrival_time))
            .then_with(|| a.pid.cmp(&b.pid))
    }
}

/// Lowest priority number first; ties by arrival, then pid.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl SelectionRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn compare(&self, a: &Process, b: &Process) -> Ordering {
        a.priority
            .cmp(&b.priority)
            .then(a.arrival_time.cmp(&b.arrival_time))
            .then_with(|| a.pid.cmp(&b.pid))
    }
}

/// Runs Shortest Job First (non-preemptive).
pub fn sjf(processes: &mut [Process]) -> Schedule {
    run_to_completion(processes, &ShortestBurst)
}

/// Runs Priority scheduling (non-preemptive).
pub fn priority(processes: &mut [Process]) -> Schedule {
    run_to_completion(processes, &HighestPriority)
}

/// Shared loop: repeatedly dispatches the rule's pick from the ready set.
pub fn run_to_completion<R: SelectionRule + ?Sized>(
    processes: &mut [Process],
    rule: &R,
) -> Schedule {
    let mut schedule = Schedule::new();
    let n = processes.len();
    let mut time = processes.iter().map(|p| p.arrival_time).min().unwrap_or(0);
    let mut completed = 0;

    while completed < n {
        let selected = (0..n)
            .filter(|&i| !processes[i].is_completed() && processes[i].has_arrived(time))
            .min_by(|&a, &b| rule.compare(&processes[a], &processes[b]));

        let Some(idx) = selected else {
            let next_arrival = processes
                .iter()
                .filter(|p| !p.is_completed())
                .map(|p| p.arrival_time)
                .min();
            // Nothing left to run.
            let Some(next_arrival) = next_arrival else {
                break;
            };
            debug!("{}: cpu idle from {} to {}", rule.name(), time, next_arrival);
            schedule.push_idle(time, next_arrival);
            time = next_arrival;
            continue;
        };

        let p = &mut processes[idx];
        let start = time;
        p.start_time = Some(start);
        time += p.burst_time;
        p.remaining_time = 0;
        p.completion_time = Some(time);
        debug!("{}: dispatched {} over [{}, {})", rule.name(), p.pid, start, time);
        schedule.push_busy(&p.pid, start, time);
        completed += 1;
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
    fn test_sjf_no_preemption() {
        let mut processes = vec![
            Process::new("P1", 0, 8),
            Process::new("P2", 1, 4),
            Process::new("P3", 2, 2),
        ];
        let schedule = sjf(&mut processes);

        assert_eq!(
            pids(&schedule),
            vec![("P1", 0, 8), ("P3", 8, 10), ("P2", 10, 14)]
        );
        assert_eq!(processes[1].start_time, Some(10));
        assert_eq!(processes[2].completion_time, Some(10));
    }

    #[test]
    fn test_sjf_tie_break_arrival_then_pid() {
        let mut processes = vec![
            Process::new("P1", 0, 1),
            Process::new("C", 1, 3),
            Process::new("B", 0, 3),
            Process::new("A", 1, 3),
        ];
        let schedule = sjf(&mut processes);
        // At t=1 all of B, A, C are ready with burst 3: B arrived first, then A < C.
        assert_eq!(
            pids(&schedule),
            vec![("P1", 0, 1), ("B", 1, 4), ("A", 4, 7), ("C", 7, 10)]
        );
    }

    #[test]
    fn test_priority_tie_break_arrival_then_pid() {
        let mut processes = vec![
            Process::new("P0", 0, 3),
            Process::new("C", 2, 1).with_priority(1),
            Process::new("B", 1, 1).with_priority(1),
            Process::new("A", 2, 1).with_priority(1),
        ];
        let schedule = priority(&mut processes);
        // At t=3 B, A, C share priority 1: B arrived first, then A < C.
        assert_eq!(
            pids(&schedule),
            vec![("P0", 0, 3), ("B", 3, 4), ("A", 4, 5), ("C", 5, 6)]
        );
    }

    #[test]
    fn test_sjf_starts_at_first_arrival() {
        let mut processes = vec![Process::new("P1", 4, 2), Process::new("P2", 9, 1)];
        let schedule = sjf(&mut processes);
        assert_eq!(
            pids(&schedule),
            vec![("P1", 4, 6), ("Idle", 6, 9), ("P2", 9, 10)]
        );
    }

    #[test]
    fn test_priority_lower_number_wins() {
        let mut processes = vec![
            Process::new("P1", 0, 4).with_priority(2),
            Process::new("P2", 0, 4).with_priority(1),
        ];
        let schedule = priority(&mut processes);
        assert_eq!(pids(&schedule), vec![("P2", 0, 4), ("P1", 4, 8)]);
    }

    #[test]
    fn test_priority_non_preemptive() {
        let mut processes = vec![
            Process::new("P1", 0, 5).with_priority(3),
            Process::new("P2", 1, 2).with_priority(0),
            Process::new("P3", 2, 1).with_priority(1),
        ];
        let schedule = priority(&mut processes);
        assert_eq!(
            pids(&schedule),
            vec![("P1", 0, 5), ("P2", 5, 7), ("P3", 7, 8)]
        );
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(ShortestBurst.name(), "SJF");
        assert_eq!(HighestPriority.name(), "PRIORITY");
    }

    #[test]
    fn test_empty() {
        assert!(sjf(&mut []).is_empty());
        assert!(priority(&mut []).is_empty());
    }
}
