//! CPU scheduling algorithms.
//!
//! Each algorithm takes a reset process slice, fills in `start_time`,
//! `completion_time` and `remaining_time`, and returns the timeline.
//! Metrics are derived afterwards by the engine.
//!
//! | Algorithm | Preemptive | Selection |
//! |-----------|-----------|-----------|
//! | FCFS | No | (arrival, pid) |
//! | SJF | No | (burst, arrival, pid) among ready |
//! | Round Robin | Yes, fixed quantum | FIFO ready queue |
//! | Priority | No | (priority, arrival, pid) among ready |
//!
//! # Usage
//!
//! ```
//! use cpu_sched::algorithms::Algorithm;
//!
//! let algo: Algorithm = "rr:4".parse().unwrap();
//! assert_eq!(algo, Algorithm::RoundRobin { quantum: 4 });
//! ```

mod fcfs;
mod non_preemptive;
mod round_robin;

pub use fcfs::fcfs;
pub use non_preemptive::{
    priority, run_to_completion, sjf, HighestPriority, SelectionRule, ShortestBurst,
};
pub use round_robin::round_robin;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::models::{Process, Schedule};

/// Closed set of supported scheduling algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest Job First (non-preemptive).
    Sjf,
    /// Round Robin with a fixed time quantum.
    RoundRobin {
        /// Time slice length; must be positive.
        quantum: i64,
    },
    /// Priority scheduling (non-preemptive, lower number first).
    Priority,
}

impl Algorithm {
    /// Short name (e.g., "FCFS", "RR").
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::RoundRobin { .. } => "RR",
            Self::Priority => "PRIORITY",
        }
    }

    /// Long description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Fcfs => "First Come First Served",
            Self::Sjf => "Shortest Job First (non-preemptive)",
            Self::RoundRobin { .. } => "Round Robin",
            Self::Priority => "Priority (non-preemptive)",
        }
    }

    /// Whether running processes can be interrupted.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Self::RoundRobin { .. })
    }

    /// Checks algorithm parameters without touching any process.
    pub fn validate(&self) -> Result<(), SimulationError> {
        match *self {
            Self::RoundRobin { quantum } if quantum <= 0 => {
                Err(SimulationError::InvalidQuantum(quantum))
            }
            _ => Ok(()),
        }
    }

    /// Runs the algorithm over a reset process slice.
    pub fn simulate(&self, processes: &mut [Process]) -> Result<Schedule, SimulationError> {
        match *self {
            Self::Fcfs => Ok(fcfs(processes)),
            Self::Sjf => Ok(sjf(processes)),
            Self::RoundRobin { quantum } => round_robin(processes, quantum),
            Self::Priority => Ok(priority(processes)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundRobin { quantum } => write!(f, "{} (quantum={quantum})", self.description()),
            _ => f.write_str(self.description()),
        }
    }
}

/// Parses selector strings: `fcfs`, `sjf`, `priority`, `rr:<q>`,
/// `round-robin:<q>`, or the menu numbers `1`, `2`, `3:<q>`, `4`.
/// Matching is case-insensitive.
impl FromStr for Algorithm {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let selector = s.trim().to_ascii_lowercase();
        let algorithm = match selector.as_str() {
            "1" | "fcfs" => Self::Fcfs,
            "2" | "sjf" => Self::Sjf,
            "4" | "priority" => Self::Priority,
            other => {
                let quantum = ["rr:", "round-robin:", "round_robin:", "3:"]
                    .iter()
                    .find_map(|prefix| other.strip_prefix(prefix))
                    .and_then(|q| q.trim().parse::<i64>().ok())
                    .ok_or_else(|| SimulationError::UnknownAlgorithm(s.to_string()))?;
                Self::RoundRobin { quantum }
            }
        };
        algorithm.validate()?;
        Ok(algorithm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selectors() {
        assert_eq!("fcfs".parse::<Algorithm>(), Ok(Algorithm::Fcfs));
        assert_eq!("1".parse::<Algorithm>(), Ok(Algorithm::Fcfs));
        assert_eq!(" SJF ".parse::<Algorithm>(), Ok(Algorithm::Sjf));
        assert_eq!("4".parse::<Algorithm>(), Ok(Algorithm::Priority));
        assert_eq!(
            "Round-Robin:3".parse::<Algorithm>(),
            Ok(Algorithm::RoundRobin { quantum: 3 })
        );
        assert_eq!(
            "3:2".parse::<Algorithm>(),
            Ok(Algorithm::RoundRobin { quantum: 2 })
        );
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "lottery".parse::<Algorithm>(),
            Err(SimulationError::UnknownAlgorithm("lottery".into()))
        );
        assert!(matches!(
            "3".parse::<Algorithm>(),
            Err(SimulationError::UnknownAlgorithm(_))
        ));
        assert!(matches!(
            "rr:abc".parse::<Algorithm>(),
            Err(SimulationError::UnknownAlgorithm(_))
        ));
    }

    #[test]
    fn test_parse_invalid_quantum() {
        assert_eq!(
            "rr:0".parse::<Algorithm>(),
            Err(SimulationError::InvalidQuantum(0))
        );
    }

    #[test]
    fn test_display_and_names() {
        let rr = Algorithm::RoundRobin { quantum: 2 };
        assert_eq!(rr.to_string(), "Round Robin (quantum=2)");
        assert_eq!(rr.name(), "RR");
        assert!(rr.is_preemptive());
        assert!(!Algorithm::Fcfs.is_preemptive());
        assert_eq!(Algorithm::Sjf.to_string(), "Shortest Job First (non-preemptive)");
    }

    #[test]
    fn test_simulate_dispatch() {
        let mut processes = vec![Process::new("P1", 0, 3)];
        let schedule = Algorithm::Priority.simulate(&mut processes).unwrap();
        assert_eq!(schedule.len(), 1);

        let err = Algorithm::RoundRobin { quantum: 0 }
            .simulate(&mut processes)
            .unwrap_err();
        assert_eq!(err, SimulationError::InvalidQuantum(0));
    }

    #[test]
    fn test_serde_tagged() {
        let json = serde_json::to_string(&Algorithm::RoundRobin { quantum: 2 }).unwrap();
        assert_eq!(json, r#"{"kind":"round_robin","quantum":2}"#);
        let back: Algorithm = serde_json::from_str(r#"{"kind":"fcfs"}"#).unwrap();
        assert_eq!(back, Algorithm::Fcfs);
    }
}
