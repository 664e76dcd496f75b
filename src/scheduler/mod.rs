//! Simulation engine and performance metrics.
//!
//! # Engine
//!
//! `Engine` owns a process collection and runs one algorithm per call,
//! resetting runtime state first so runs never leak into each other.
//!
//! # Metrics
//!
//! `Metrics` computes turnaround, waiting and response times plus
//! utilization and throughput from a finished run.
//!
//! # Requests
//!
//! `SimulationRequest` is a serializable (process set, algorithm) pair
//! that validates its input before running.

mod engine;
mod metrics;
mod request;

pub use engine::{Engine, SimulationResult};
pub use metrics::Metrics;
pub use request::SimulationRequest;
