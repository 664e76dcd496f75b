//! Round Robin scheduling with a fixed time quantum.
//!
//! # Algorithm
//!
//! 1. Sort processes by arrival time (stable: insertion order on ties).
//! 2. Start the clock at the first arrival.
//! 3. Admit every process that has arrived into a FIFO ready queue.
//! 4. Dequeue the head and run it for `min(quantum, remaining)`.
//! 5. Admit processes that arrived during the slice, THEN re-queue the
//!    preempted process at the tail (or record its completion).
//!
//! The ordering in step 5 decides who runs next when an arrival and a
//! preemption coincide; changing it changes the schedule.
//!
//! # Reference
//! Silberschatz et al., "Operating System Concepts", Ch. 5.3.4

use std::collections::VecDeque;

use log::debug;

use crate::error::SimulationError;
use crate::models::{Process, Schedule};

/// Runs Round Robin over `processes`, which must already be reset.
///
/// # Errors
/// [`SimulationError::InvalidQuantum`] if `quantum <= 0`; `processes` is
/// left untouched.
pub fn round_robin(processes: &mut [Process], quantum: i64) -> Result<Schedule, SimulationError> {
    if quantum <= 0 {
        return Err(SimulationError::InvalidQuantum(quantum));
    }

    let mut schedule = Schedule::new();
    let n = processes.len();

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by_key(|&i| processes[i].arrival_time);

    let mut time = order.first().map_or(0, |&i| processes[i].arrival_time);
    let mut next = 0;
    let mut ready: VecDeque<usize> = VecDeque::new();

    while next < n || !ready.is_empty() {
        admit_arrivals(processes, &order, &mut next, time, &mut ready);

        let Some(idx) = ready.pop_front() else {
            // Queue drained but arrivals remain: `next < n` here.
            let arrival = processes[order[next]].arrival_time;
            debug!("RR: cpu idle from {} to {}", time, arrival);
            schedule.push_idle(time, arrival);
            time = time.max(arrival);
            continue;
        };

        let p = &mut processes[idx];
        if p.start_time.is_none() {
            p.start_time = Some(time);
        }

        let slice = quantum.min(p.remaining_time);
        let start = time;
        time += slice;
        p.remaining_time -= slice;
        debug!("RR: ran {} over [{}, {}), {} left", p.pid, start, time, p.remaining_time);
        schedule.push_busy(&p.pid, start, time);

        admit_arrivals(processes, &order, &mut next, time, &mut ready);

        let p = &mut processes[idx];
        if p.remaining_time > 0 {
            ready.push_back(idx);
        } else {
            p.completion_time = Some(time);
        }
    }

    Ok(schedule)
}

/// Moves every process with `arrival_time <= time` into the ready queue.
fn admit_arrivals(
    processes: &mut [Process],
    order: &[usize],
    next: &mut usize,
    time: i64,
    ready: &mut VecDeque<usize>,
) {
    while *next < order.len() && processes[order[*next]].has_arrived(time) {
        let idx = order[*next];
        processes[idx].remaining_time = processes[idx].burst_time;
        ready.push_back(idx);
        *next += 1;
    }
}
