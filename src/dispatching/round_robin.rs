//! Round Robin (preemptive, fixed quantum).
//!
//! A strict FIFO. Each dispatch grants a fresh slice of `quantum` ticks; a
//! process whose slice runs out before its burst goes to the back of the
//! queue, behind anything that arrived on the same tick.

use std::collections::VecDeque;
use std::num::NonZeroU32;

use super::{Interruption, ReadyQueue};
use crate::models::Process;

/// Ready structure for Round Robin.
#[derive(Debug, Clone)]
pub struct RoundRobinQueue {
    queue: VecDeque<Process>,
    quantum: NonZeroU32,
}

impl RoundRobinQueue {
    /// Creates an empty queue with the given time slice.
    pub fn new(quantum: NonZeroU32) -> Self {
        Self {
            queue: VecDeque::new(),
            quantum,
        }
    }

    /// Time slice in ticks.
    pub fn quantum(&self) -> u32 {
        self.quantum.get()
    }
}

impl ReadyQueue for RoundRobinQueue {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn description(&self) -> String {
        format!("Round Robin (quantum {})", self.quantum)
    }

    fn admit(&mut self, mut process: Process) {
        process.quantum_remaining = self.quantum.get();
        self.queue.push_back(process);
    }

    /// Slice is refilled at the next dispatch, not here.
    fn requeue(&mut self, process: Process) {
        self.queue.push_back(process);
    }

    fn peek_next(&self) -> Option<&Process> {
        self.queue.front()
    }

    fn remove_next(&mut self) -> Option<Process> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn waiting(&self) -> Vec<&Process> {
        self.queue.iter().collect()
    }

    fn age(&mut self) {
        self.queue.iter_mut().for_each(Process::wait_tick);
    }

    fn on_dispatch(&self, process: &mut Process) {
        process.quantum_remaining = self.quantum.get();
    }

    fn check_interruption(&self, running: &Process) -> Option<Interruption> {
        (running.quantum_remaining == 0).then_some(Interruption::QuantumExpired)
    }
}
