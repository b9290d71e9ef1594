//! Shortest Job First (non-preemptive).
//!
//! Orders waiting processes by ascending burst, ties by admission order.
//! A dispatched process keeps the CPU until its burst is exhausted.

use super::burst_heap::BurstHeap;
use super::ReadyQueue;
use crate::models::Process;

/// Ready structure for Shortest Job First.
#[derive(Debug, Clone, Default)]
pub struct SjfQueue {
    heap: BurstHeap,
}

impl SjfQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReadyQueue for SjfQueue {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn description(&self) -> String {
        "Shortest Job First".to_string()
    }

    fn admit(&mut self, process: Process) {
        self.heap.push(process);
    }

    fn peek_next(&self) -> Option<&Process> {
        self.heap.peek()
    }

    fn remove_next(&mut self) -> Option<Process> {
        self.heap.pop()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn waiting(&self) -> Vec<&Process> {
        self.heap.ordered()
    }

    fn age(&mut self) {
        self.heap.for_each_mut(Process::wait_tick);
    }
}
