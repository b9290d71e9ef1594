//! Per-process statistics and run quality metrics.
//!
//! [`StatisticsCollector`] receives each process exactly once, at
//! termination. [`RunStatistics`] summarizes a finished run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Wait | ticks ready but not running |
//! | Response | first dispatch - arrival |
//! | Completion tick | tick at which the run reported `Complete` |
//! | CPU utilization | busy ticks / completion tick |
//! | Dispatches | number of times a process took the CPU |

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{SimulationRun, TraceEventKind};
use crate::models::Process;

/// Immutable summary of a terminated process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStats {
    /// Process identifier.
    pub id: String,
    /// Arrival tick.
    pub arrival_time: u32,
    /// Original burst (ticks).
    pub burst_time: u32,
    /// First dispatch tick.
    pub start_time: u32,
    /// Termination tick.
    pub completion_time: u32,
    /// Ticks spent waiting.
    pub wait_time: u32,
    /// Ticks from arrival to completion.
    pub turnaround_time: u32,
}

impl ProcessStats {
    /// Ticks from arrival to first dispatch.
    pub fn response_time(&self) -> u32 {
        self.start_time - self.arrival_time
    }
}

impl From<Process> for ProcessStats {
    fn from(process: Process) -> Self {
        let completion_time = process.completion_time();
        Self {
            // A terminated process has always been dispatched.
            start_time: process.start_time.unwrap_or(process.arrival_time),
            completion_time,
            arrival_time: process.arrival_time,
            burst_time: process.original_burst,
            wait_time: process.wait_time,
            turnaround_time: process.turnaround_time,
            id: process.id,
        }
    }
}

/// Mapping from process ID to its final statistics, ordered by ID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsCollector {
    entries: BTreeMap<String, ProcessStats>,
}

impl StatisticsCollector {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of a terminated process.
    pub fn record(&mut self, process: Process) {
        let stats = ProcessStats::from(process);
        let previous = self.entries.insert(stats.id.clone(), stats);
        debug_assert!(previous.is_none(), "process terminated twice");
    }

    /// Statistics for one process.
    pub fn get(&self, id: &str) -> Option<&ProcessStats> {
        self.entries.get(id)
    }

    /// Rows ordered by process ID.
    pub fn iter(&self) -> impl Iterator<Item = &ProcessStats> {
        self.entries.values()
    }

    /// Number of recorded processes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mean turnaround time. `None` when no process was recorded.
    pub fn average_turnaround(&self) -> Option<f64> {
        self.mean(|s| s.turnaround_time)
    }

    /// Mean wait time. `None` when no process was recorded.
    pub fn average_wait(&self) -> Option<f64> {
        self.mean(|s| s.wait_time)
    }

    /// Mean response time. `None` when no process was recorded.
    pub fn average_response(&self) -> Option<f64> {
        self.mean(ProcessStats::response_time)
    }

    /// Latest completion tick among recorded processes.
    pub fn last_completion(&self) -> Option<u32> {
        self.iter().map(|s| s.completion_time).max()
    }

    fn mean(&self, value: impl Fn(&ProcessStats) -> u32) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }
        let total: u64 = self.iter().map(|s| u64::from(value(s))).sum();
        Some(total as f64 / self.entries.len() as f64)
    }
}

/// Aggregate indicators for a finished run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunStatistics {
    /// Number of processes that terminated.
    pub process_count: usize,
    /// Tick at which the run reported completion.
    pub completion_tick: u32,
    /// Mean turnaround (ticks).
    pub average_turnaround: Option<f64>,
    /// Mean wait (ticks).
    pub average_wait: Option<f64>,
    /// Mean response (ticks).
    pub average_response: Option<f64>,
    /// Fraction of ticks the CPU was busy (0.0..=1.0).
    pub cpu_utilization: f64,
    /// Number of dispatches, including re-dispatch after an interruption.
    pub dispatch_count: usize,
}

impl RunStatistics {
    /// Computes indicators from a finished run.
    pub fn calculate(run: &SimulationRun) -> Self {
        let cpu_utilization = if run.completion_tick == 0 {
            0.0
        } else {
            f64::from(run.busy_ticks) / f64::from(run.completion_tick)
        };
        let dispatch_count = run
            .trace
            .iter()
            .filter(|e| e.kind == TraceEventKind::Dispatched)
            .count();

        Self {
            process_count: run.stats.len(),
            completion_tick: run.completion_tick,
            average_turnaround: run.stats.average_turnaround(),
            average_wait: run.stats.average_wait(),
            average_response: run.stats.average_response(),
            cpu_utilization,
            dispatch_count,
        }
    }
}
