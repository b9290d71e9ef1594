//! Process (schedulable entity) model.
//!
//! A process is a unit of CPU work with a fixed arrival tick and a burst
//! of service time. While it is active the dispatcher mutates its working
//! counters; once the burst is exhausted the record is summarized into a
//! [`ProcessStats`](crate::simulator::ProcessStats) entry and dropped.
//!
//! # Time Representation
//! All times are whole ticks relative to the start of the simulation (t=0).

use serde::{Deserialize, Serialize};

/// A process to be scheduled on the simulated CPU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier (usually a single character).
    pub id: String,
    /// Remaining CPU service time (ticks). Reaches 0 at termination.
    pub burst_time: u32,
    /// CPU service time requested at creation (ticks).
    pub original_burst: u32,
    /// Tick at which the process becomes eligible for admission.
    pub arrival_time: u32,
    /// Tick of first dispatch. `None` until the process first runs.
    pub start_time: Option<u32>,
    /// Ticks spent admitted but not running.
    pub wait_time: u32,
    /// Ticks elapsed since arrival, running or waiting.
    pub turnaround_time: u32,
    /// Ticks left in the current Round Robin slice (0 for other policies).
    pub quantum_remaining: u32,
}

impl Process {
    /// Creates a process that arrives at `arrival_time` needing `burst_time` ticks.
    pub fn new(id: impl Into<String>, burst_time: u32, arrival_time: u32) -> Self {
        Self {
            id: id.into(),
            burst_time,
            original_burst: burst_time,
            arrival_time,
            start_time: None,
            wait_time: 0,
            turnaround_time: 0,
            quantum_remaining: 0,
        }
    }

    /// Whether the process has consumed its whole burst.
    pub fn is_finished(&self) -> bool {
        self.burst_time == 0
    }

    /// Ticks of service already received.
    pub fn executed(&self) -> u32 {
        self.original_burst - self.burst_time
    }

    /// Records the first dispatch. Later calls keep the original value.
    pub fn mark_started(&mut self, tick: u32) {
        self.start_time.get_or_insert(tick);
    }

    /// Applies one tick of execution.
    ///
    /// Saturating on every counter: a finished process stays at zero
    /// remaining burst, and policies without a quantum keep it at zero.
    pub fn execute_tick(&mut self) {
        self.burst_time = self.burst_time.saturating_sub(1);
        self.quantum_remaining = self.quantum_remaining.saturating_sub(1);
        self.turnaround_time += 1;
    }

    /// Applies one tick spent waiting in a ready structure.
    pub fn wait_tick(&mut self) {
        self.wait_time += 1;
        self.turnaround_time += 1;
    }

    /// Tick at which the process finished (`arrival + turnaround`).
    ///
    /// Only meaningful once [`is_finished`](Self::is_finished) holds.
    pub fn completion_time(&self) -> u32 {
        self.arrival_time + self.turnaround_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_new() {
        let p = Process::new("A", 5, 2);
        assert_eq!(p.id, "A");
        assert_eq!(p.burst_time, 5);
        assert_eq!(p.original_burst, 5);
        assert_eq!(p.arrival_time, 2);
        assert_eq!(p.start_time, None);
        assert_eq!(p.wait_time, 0);
        assert_eq!(p.turnaround_time, 0);
        assert!(!p.is_finished());
    }

    #[test]
    fn test_execute_tick() {
        let mut p = Process::new("A", 2, 0);
        p.quantum_remaining = 1;
        p.execute_tick();
        assert_eq!(p.burst_time, 1);
        assert_eq!(p.quantum_remaining, 0);
        assert_eq!(p.turnaround_time, 1);
        assert_eq!(p.executed(), 1);

        p.execute_tick();
        assert!(p.is_finished());
        assert_eq!(p.quantum_remaining, 0); // saturates
        assert_eq!(p.completion_time(), 2);
    }

    #[test]
    fn test_wait_tick() {
        let mut p = Process::new("B", 3, 1);
        p.wait_tick();
        p.wait_tick();
        assert_eq!(p.wait_time, 2);
        assert_eq!(p.turnaround_time, 2);
        assert_eq!(p.burst_time, 3);
    }

    #[test]
    fn test_mark_started_once() {
        let mut p = Process::new("C", 8, 2);
        p.mark_started(8);
        p.mark_started(12);
        assert_eq!(p.start_time, Some(8));
    }
}
