//! Plain-text rendering of simulation results.
//!
//! Renders a Gantt chart and a per-process table. The chart uses one
//! column per time unit until the timeline exceeds [`MAX_CHART_WIDTH`],
//! then one column per `ceil(span / MAX_CHART_WIDTH)` units.

use std::fmt;

use crate::models::{Process, Schedule};
use crate::scheduler::SimulationResult;

const TABLE_WIDTH: usize = 72;

/// Widest bar [`gantt_chart`] will draw.
pub const MAX_CHART_WIDTH: usize = 120;

/// Renders a three-line text Gantt chart.
///
/// Line 1 is the bar (`#` busy, `-` idle), line 2 the pid labels centered
/// in their blocks, line 3 the time marks at block boundaries.
///
/// Timelines longer than [`MAX_CHART_WIDTH`] units are scaled down so the
/// bar stays within that width. Blocks shorter than one scaled column may
/// then vanish from the bar; their time marks are still printed.
pub fn gantt_chart(schedule: &Schedule) -> String {
    if schedule.is_empty() {
        return "No schedule to show.".to_string();
    }

    let origin = schedule.start_time();
    let span = schedule.span().max(0) as u64;
    let scale = span.div_ceil(MAX_CHART_WIDTH as u64).max(1);
    let column = |t: i64| ((t - origin) as u64 / scale) as usize;

    let mut bar = String::new();
    let mut labels: Vec<char> = Vec::new();
    let mut times = origin.to_string();

    for block in schedule {
        let start = column(block.start_time);
        let end = column(block.end_time);
        let width = end - start;
        let fill = if block.is_idle { "-" } else { "#" };
        bar.push_str(&fill.repeat(width));

        if !block.is_idle {
            let pos = start + width.saturating_sub(block.pid.chars().count()) / 2;
            write_at(&mut labels, pos, &block.pid);
        }

        if times.len() >= end {
            times.push(' ');
        }
        while times.len() < end {
            times.push(' ');
        }
        times.push_str(&block.end_time.to_string());
    }

    let labels: String = labels.into_iter().collect();
    format!("{bar}\n{}\n{times}", labels.trim_end())
}

fn write_at(line: &mut Vec<char>, pos: usize, text: &str) {
    for (i, c) in text.chars().enumerate() {
        let at = pos + i;
        if at >= line.len() {
            line.resize(at + 1, ' ');
        }
        line[at] = c;
    }
}

/// Renders a fixed-width process table sorted by pid.
pub fn process_table(processes: &[Process]) -> String {
    let rule = "-".repeat(TABLE_WIDTH);
    let mut lines = vec![
        rule.clone(),
        format!(
            "{:<8}{:<8}{:<8}{:<8}{:<8}{:<10}{:<12}{:<8}",
            "PID", "Arrive", "Burst", "Prio", "Start", "Complete", "Turnaround", "Waiting"
        ),
        rule.clone(),
    ];

    let mut sorted: Vec<&Process> = processes.iter().collect();
    sorted.sort_by(|a, b| a.pid.cmp(&b.pid));

    for p in sorted {
        let row = format!(
            "{:<8}{:<8}{:<8}{:<8}{:<8}{:<10}{:<12}{:<8}",
            p.pid,
            p.arrival_time,
            p.burst_time,
            p.priority,
            or_dash(p.start_time),
            or_dash(p.completion_time),
            or_dash(p.turnaround_time),
            or_dash(p.waiting_time),
        );
        lines.push(row.trim_end().to_string());
    }
    lines.push(rule);
    lines.join("\n")
}

fn or_dash(value: Option<i64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} ===", self.algorithm)?;
        writeln!(f, "{}", gantt_chart(&self.schedule))?;
        writeln!(f)?;
        writeln!(f, "{}", process_table(&self.processes))?;
        writeln!(
            f,
            "Average waiting time: {:.2}",
            self.metrics.avg_waiting_time
        )?;
        write!(
            f,
            "Average turnaround time: {:.2}",
            self.metrics.avg_turnaround_time
        )
    }
}
