//! CPU scheduling simulator.
//!
//! Simulates classical single-CPU scheduling algorithms over a set of
//! processes and reports the resulting timeline, per-process times and
//! aggregate performance statistics.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Schedule`, `ScheduleBlock`
//! - **`algorithms`**: FCFS, SJF, Round Robin, Priority and the `Algorithm` selector
//! - **`scheduler`**: `Engine`, `Metrics`, `SimulationResult`, `SimulationRequest`
//! - **`validation`**: Input integrity checks (duplicate pids, timing ranges)
//! - **`report`**: Text Gantt chart and process table
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use cpu_sched::algorithms::Algorithm;
//! use cpu_sched::scheduler::Engine;
//!
//! let mut engine = Engine::new();
//! engine.add_process("P1", 0, 5, 0);
//! engine.add_process("P2", 1, 3, 0);
//!
//! let result = engine.run(Algorithm::RoundRobin { quantum: 2 }).unwrap();
//! assert_eq!(result.schedule.len(), 5);
//! assert_eq!(result.process("P2").unwrap().completion_time, Some(7));
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos, "Modern Operating Systems", Ch. 2.4

pub mod algorithms;
pub mod error;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::SimulationError;
