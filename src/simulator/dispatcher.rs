//! Discrete-time dispatcher loop.
//!
//! # Algorithm
//!
//! Every tick, in this order:
//! 1. Admit every pending process whose arrival tick has come.
//! 2. Run the current process for one tick.
//! 3. Retire it if its burst is exhausted.
//! 4. Otherwise ask the ready structure whether it must yield
//!    (quantum expiry, shorter process waiting) and requeue it if so.
//! 5. If the CPU is free, dispatch the next ready process. A process with
//!    nothing left to run is retired on the spot and the next one dispatched.
//! 6. Charge one tick of waiting to every process left in the ready structure.
//! 7. Stop once nothing is pending, ready, or running.
//! 8. Advance the clock.
//!
//! A process running during `[t, t+1)` is charged at step 2 of tick `t+1`;
//! a process waiting during `[t, t+1)` is charged at step 6 of tick `t`. Each
//! tick between arrival and completion is therefore counted exactly once,
//! which keeps `turnaround == wait + burst`.
//!
//! When the CPU is idle and nothing is ready, the clock jumps straight to the
//! next arrival; idle ticks produce no events and charge nobody.
//!
//! The clock is a `u32`. A run that would need a tick past `u32::MAX` stops
//! at `u32::MAX` with a warning and leaves the unfinished processes out of
//! the statistics; [`validate_workload`](crate::validation::validate_workload)
//! rejects such workloads up front.
//!
//! # Complexity
//! O(T * n) for T ticks and n processes (aging touches every waiting process).

use std::iter::Peekable;
use std::vec;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::{StatisticsCollector, TraceEvent, TraceEventKind};
use crate::dispatching::ReadyQueue;
use crate::models::{Process, Workload};

/// Outcome of a complete simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRun {
    /// Policy description (e.g., "Round Robin (quantum 2)").
    pub policy: String,
    /// Dispatcher decisions in tick order.
    pub trace: Vec<TraceEvent>,
    /// Final per-process statistics.
    pub stats: StatisticsCollector,
    /// Tick at which the run reported completion.
    pub completion_tick: u32,
    /// Ticks during which a process was running.
    pub busy_ticks: u32,
}

/// Tick-by-tick CPU dispatcher over a ready structure `Q`.
///
/// # Example
///
/// ```
/// use u_cpusim::dispatching::SjfQueue;
/// use u_cpusim::models::{Process, Workload};
/// use u_cpusim::simulator::Dispatcher;
///
/// let workload = Workload::new(vec![
///     Process::new("A", 5, 0),
///     Process::new("B", 3, 1),
///     Process::new("C", 8, 2),
/// ]);
/// let run = Dispatcher::new(&workload, SjfQueue::new()).run();
///
/// assert_eq!(run.completion_tick, 16);
/// assert_eq!(run.stats.get("B").unwrap().wait_time, 4);
/// ```
#[derive(Debug, Clone)]
pub struct Dispatcher<Q: ReadyQueue> {
    pending: Peekable<vec::IntoIter<Process>>,
    ready: Q,
    running: Option<Process>,
    clock: u32,
    trace: Vec<TraceEvent>,
    stats: StatisticsCollector,
    busy_ticks: u32,
    completion_tick: Option<u32>,
}

impl<Q: ReadyQueue> Dispatcher<Q> {
    /// Creates a dispatcher over a private copy of `workload`.
    pub fn new(workload: &Workload, ready: Q) -> Self {
        Self {
            pending: workload.processes().to_vec().into_iter().peekable(),
            ready,
            running: None,
            clock: 0,
            trace: Vec::new(),
            stats: StatisticsCollector::new(),
            busy_ticks: 0,
            completion_tick: None,
        }
    }

    /// Current tick (the next one [`step`](Self::step) will simulate).
    pub fn clock(&self) -> u32 {
        self.clock
    }

    /// Process holding the CPU, if any.
    pub fn running(&self) -> Option<&Process> {
        self.running.as_ref()
    }

    /// Ready structure.
    pub fn ready(&self) -> &Q {
        &self.ready
    }

    /// Processes that have not arrived yet.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Trace recorded so far.
    pub fn trace(&self) -> &[TraceEvent] {
        &self.trace
    }

    /// Statistics of processes terminated so far.
    pub fn stats(&self) -> &StatisticsCollector {
        &self.stats
    }

    /// Whether the run has reported completion.
    pub fn is_complete(&self) -> bool {
        self.completion_tick.is_some()
    }

    /// Simulates one tick. Returns `true` once the run is complete.
    ///
    /// Calling `step` after completion does nothing.
    pub fn step(&mut self) -> bool {
        if self.is_complete() {
            return true;
        }
        let tick = self.skip_idle();

        self.admit_arrivals(tick);
        self.service(tick);
        self.dispatch(tick);
        self.ready.age();

        let done = self.running.is_none() && self.ready.is_empty() && self.pending.peek().is_none();
        if done {
            self.finish(tick);
        }

        match self.clock.checked_add(1) {
            Some(next) => self.clock = next,
            None if !done => {
                warn!(
                    "{}: clock exhausted at tick {tick}; {} processes unfinished",
                    self.ready.name(),
                    self.pending.len() + self.ready.len() + usize::from(self.running.is_some())
                );
                self.finish(tick);
                return true;
            }
            None => {}
        }
        done
    }

    /// Steps until completion and returns the result.
    pub fn run(mut self) -> SimulationRun {
        while !self.step() {}
        SimulationRun {
            policy: self.ready.description(),
            completion_tick: self.completion_tick.unwrap_or(self.clock),
            trace: self.trace,
            stats: self.stats,
            busy_ticks: self.busy_ticks,
        }
    }

    fn admit_arrivals(&mut self, tick: u32) {
        while let Some(process) = self.pending.next_if(|p| p.arrival_time <= tick) {
            debug!("t={tick}: admit {}", process.id);
            self.ready.admit(process);
        }
    }

    fn service(&mut self, tick: u32) {
        let Some(mut process) = self.running.take() else {
            return;
        };
        process.execute_tick();
        self.busy_ticks += 1;

        if process.is_finished() {
            debug!(
                "t={tick}: {} terminated (wait {}, turnaround {})",
                process.id, process.wait_time, process.turnaround_time
            );
            self.trace
                .push(TraceEvent::process(tick, &process.id, TraceEventKind::Terminated));
            self.stats.record(process);
        } else if let Some(interruption) = self.ready.check_interruption(&process) {
            debug!(
                "t={tick}: {} {:?} with {} remaining",
                process.id, interruption, process.burst_time
            );
            self.trace
                .push(TraceEvent::process(tick, &process.id, interruption.into()));
            self.ready.requeue(process);
        } else {
            self.running = Some(process);
        }
    }

    fn dispatch(&mut self, tick: u32) {
        if self.running.is_some() {
            return;
        }
        while let Some(mut process) = self.ready.remove_next() {
            process.mark_started(tick);
            self.trace
                .push(TraceEvent::process(tick, &process.id, TraceEventKind::Dispatched));

            if process.is_finished() {
                debug!("t={tick}: {} has no burst, retired on dispatch", process.id);
                self.trace
                    .push(TraceEvent::process(tick, &process.id, TraceEventKind::Terminated));
                self.stats.record(process);
                continue;
            }

            self.ready.on_dispatch(&mut process);
            debug!("t={tick}: dispatch {} ({} remaining)", process.id, process.burst_time);
            self.running = Some(process);
            return;
        }
    }

    /// Jumps the clock to the next arrival when there is nothing to do.
    fn skip_idle(&mut self) -> u32 {
        if self.running.is_none() && self.ready.is_empty() {
            if let Some(next) = self.pending.peek() {
                if next.arrival_time > self.clock {
                    debug!("t={}: idle until {}", self.clock, next.arrival_time);
                    self.clock = next.arrival_time;
                }
            }
        }
        self.clock
    }

    fn finish(&mut self, tick: u32) {
        info!(
            "{}: complete at tick {tick} ({} processes)",
            self.ready.name(),
            self.stats.len()
        );
        self.trace.push(TraceEvent::complete(tick));
        self.completion_tick = Some(tick);
    }
}
