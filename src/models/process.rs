//! Process model.
//!
//! A process is one schedulable unit: an identity, immutable timing inputs
//! and the runtime outputs filled in by a simulation run.

use serde::{Deserialize, Serialize};

/// A process to be scheduled on the simulated CPU.
///
/// # Time Representation
/// All times are integer time units relative to the simulation epoch (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Process identifier. Ties are broken by lexicographic order.
    pub pid: String,
    /// Time the process enters the system.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// Scheduling priority (lower = more important).
    #[serde(default)]
    pub priority: i32,
    /// First dispatch time.
    #[serde(default)]
    pub start_time: Option<i64>,
    /// Time the last unit of work finished.
    #[serde(default)]
    pub completion_time: Option<i64>,
    /// `turnaround_time - burst_time`.
    #[serde(default)]
    pub waiting_time: Option<i64>,
    /// `completion_time - arrival_time`.
    #[serde(default)]
    pub turnaround_time: Option<i64>,
    /// CPU time still owed (preemptive algorithms only).
    #[serde(default)]
    pub remaining_time: i64,
}

impl Process {
    /// Creates a process with priority 0.
    pub fn new(pid: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            pid: pid.into(),
            arrival_time,
            burst_time,
            priority: 0,
            start_time: None,
            completion_time: None,
            waiting_time: None,
            turnaround_time: None,
            remaining_time: burst_time,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Clears every runtime output so the record can be simulated again.
    pub fn reset(&mut self) {
        self.start_time = None;
        self.completion_time = None;
        self.waiting_time = None;
        self.turnaround_time = None;
        self.remaining_time = self.burst_time;
    }

    /// Whether the process has finished.
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.completion_time.is_some()
    }

    /// Whether the process is in the system at `time`.
    #[inline]
    pub fn has_arrived(&self, time: i64) -> bool {
        self.arrival_time <= time
    }

    /// Response time: delay between arrival and first dispatch.
    pub fn response_time(&self) -> Option<i64> {
        self.start_time.map(|start| start - self.arrival_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new("P1", 3, 7).with_priority(2);
        assert_eq!(p.pid, "P1");
        assert_eq!(p.arrival_time, 3);
        assert_eq!(p.burst_time, 7);
        assert_eq!(p.priority, 2);
        assert_eq!(p.remaining_time, 7);
        assert!(p.start_time.is_none());
        assert!(!p.is_completed());
    }

    #[test]
    fn test_process_reset() {
        let mut p = Process::new("P1", 0, 5);
        p.start_time = Some(1);
        p.completion_time = Some(6);
        p.turnaround_time = Some(6);
        p.waiting_time = Some(1);
        p.remaining_time = 0;

        p.reset();
        assert_eq!(p, Process::new("P1", 0, 5));
    }

    #[test]
    fn test_response_time() {
        let mut p = Process::new("P1", 2, 5);
        assert_eq!(p.response_time(), None);
        p.start_time = Some(6);
        assert_eq!(p.response_time(), Some(4));
    }

    #[test]
    fn test_has_arrived() {
        let p = Process::new("P1", 4, 1);
        assert!(!p.has_arrived(3));
        assert!(p.has_arrived(4));
    }
}
