//! Serializable simulation request.
//!
//! A request bundles a process set with an algorithm selection so a
//! simulation can be described as data (e.g. a JSON document) and run in
//! one call. Unlike [`Engine`], a request validates its input first.

use serde::{Deserialize, Serialize};

use crate::algorithms::Algorithm;
use crate::error::SimulationError;
use crate::models::Process;
use crate::validation::validate_processes;

use super::{Engine, SimulationResult};

/// Input container for one simulation.
///
/// Runtime fields of the processes may be omitted when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to schedule.
    pub processes: Vec<Process>,
    /// Algorithm to run.
    pub algorithm: Algorithm,
}

impl SimulationRequest {
    /// Creates a request.
    pub fn new(processes: Vec<Process>, algorithm: Algorithm) -> Self {
        Self {
            processes,
            algorithm,
        }
    }

    /// Adds a process.
    pub fn with_process(mut self, process: Process) -> Self {
        self.processes.push(process);
        self
    }

    /// Validates the process set and algorithm, then runs the simulation.
    ///
    /// # Errors
    /// - [`SimulationError::InvalidQuantum`] for a non-positive quantum.
    /// - [`SimulationError::InvalidInput`] listing every validation issue.
    pub fn run(&self) -> Result<SimulationResult, SimulationError> {
        self.algorithm.validate()?;
        validate_processes(&self.processes)?;
        Engine::with_processes(self.processes.clone()).run(self.algorithm)
    }
}
