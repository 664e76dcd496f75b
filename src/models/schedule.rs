//! Schedule (timeline) model.
//!
//! A schedule is the ordered sequence of CPU time segments produced by one
//! simulation run. Each segment either runs a process or is idle. Segments
//! are contiguous: every block starts where the previous one ended.

use serde::{Deserialize, Serialize};

/// Reserved pid for blocks in which no process runs.
pub const IDLE_PID: &str = "Idle";

/// One contiguous segment of the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleBlock {
    /// Segment start (inclusive).
    pub start_time: i64,
    /// Segment end (exclusive).
    pub end_time: i64,
    /// Running process, or [`IDLE_PID`].
    pub pid: String,
    /// Whether the CPU is idle during this segment.
    pub is_idle: bool,
}

impl ScheduleBlock {
    /// Creates a block in which `pid` runs.
    pub fn busy(pid: impl Into<String>, start_time: i64, end_time: i64) -> Self {
        Self {
            start_time,
            end_time,
            pid: pid.into(),
            is_idle: false,
        }
    }

    /// Creates an idle block.
    pub fn idle(start_time: i64, end_time: i64) -> Self {
        Self {
            start_time,
            end_time,
            pid: IDLE_PID.to_string(),
            is_idle: true,
        }
    }

    /// Length of the segment.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }
}

/// The timeline of a simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Blocks in timeline order.
    pub blocks: Vec<ScheduleBlock>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a block.
    pub fn push(&mut self, block: ScheduleBlock) {
        self.blocks.push(block);
    }

    /// Appends a busy block for `pid` over `[start, end)`.
    pub fn push_busy(&mut self, pid: &str, start: i64, end: i64) {
        self.push(ScheduleBlock::busy(pid, start, end));
    }

    /// Appends an idle block over `[start, end)`. Empty spans are skipped.
    pub fn push_idle(&mut self, start: i64, end: i64) {
        if end > start {
            self.push(ScheduleBlock::idle(start, end));
        }
    }

    /// Removes all blocks.
    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    /// Whether the schedule has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Iterates blocks in timeline order.
    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleBlock> {
        self.blocks.iter()
    }

    /// Start of the first block (0 when empty).
    pub fn start_time(&self) -> i64 {
        self.blocks.first().map_or(0, |b| b.start_time)
    }

    /// End of the last block (0 when empty).
    pub fn end_time(&self) -> i64 {
        self.blocks.last().map_or(0, |b| b.end_time)
    }

    /// Total timeline span covered by the blocks.
    pub fn span(&self) -> i64 {
        self.end_time() - self.start_time()
    }

    /// Time spent running processes.
    pub fn busy_time(&self) -> i64 {
        self.blocks
            .iter()
            .filter(|b| !b.is_idle)
            .map(ScheduleBlock::duration)
            .sum()
    }

    /// Time the CPU sat idle.
    pub fn idle_time(&self) -> i64 {
        self.blocks
            .iter()
            .filter(|b| b.is_idle)
            .map(ScheduleBlock::duration)
            .sum()
    }

    /// Busy fraction of the span (0.0..1.0). `None` for an empty span.
    pub fn utilization(&self) -> Option<f64> {
        let span = self.span();
        if span <= 0 {
            return None;
        }
        Some(self.busy_time() as f64 / span as f64)
    }

    /// Returns all blocks in which `pid` runs.
    pub fn blocks_for(&self, pid: &str) -> Vec<&ScheduleBlock> {
        self.blocks
            .iter()
            .filter(|b| !b.is_idle && b.pid == pid)
            .collect()
    }

    /// Number of times the CPU switches from one process to a different one.
    ///
    /// Idle gaps are not counted as processes: `A, Idle, B` is one switch.
    pub fn context_switches(&self) -> usize {
        let mut switches = 0;
        let mut last: Option<&str> = None;
        for block in self.blocks.iter().filter(|b| !b.is_idle) {
            if let Some(prev) = last {
                if prev != block.pid {
                    switches += 1;
                }
            }
            last = Some(&block.pid);
        }
        switches
    }

    /// Whether blocks are non-empty, ordered and gap-free.
    pub fn is_contiguous(&self) -> bool {
        self.blocks.iter().all(|b| b.end_time > b.start_time)
            && self
                .blocks
                .windows(2)
                .all(|w| w[0].end_time == w[1].start_time)
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a ScheduleBlock;
    type IntoIter = std::slice::Iter<'a, ScheduleBlock>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
