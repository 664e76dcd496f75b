//! Simulation domain models.
//!
//! Provides the data types shared by every algorithm: the process record
//! (inputs plus runtime outputs) and the timeline it is scheduled onto.

mod process;
mod schedule;

pub use process::Process;
pub use schedule::{Schedule, ScheduleBlock, IDLE_PID};
