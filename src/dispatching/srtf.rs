//! Shortest Remaining Time First (preemptive).
//!
//! Same ordering as SJF but keyed on the *current* remaining burst, and the
//! running process is re-evaluated every tick: it is preempted as soon as a
//! waiting process needs strictly less time.

use super::burst_heap::BurstHeap;
use super::{Interruption, ReadyQueue};
use crate::models::Process;

/// Ready structure for Shortest Remaining Time First.
#[derive(Debug, Clone, Default)]
pub struct SrtfQueue {
    heap: BurstHeap,
}

impl SrtfQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Smallest remaining burst among waiting processes.
    pub fn peek_min(&self) -> Option<&Process> {
        self.heap.peek()
    }

    /// Removes the process with the smallest remaining burst.
    pub fn pop_min(&mut self) -> Option<Process> {
        self.heap.pop()
    }
}

impl ReadyQueue for SrtfQueue {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn description(&self) -> String {
        "Shortest Remaining Time First".to_string()
    }

    fn admit(&mut self, process: Process) {
        self.heap.push(process);
    }

    fn peek_next(&self) -> Option<&Process> {
        self.peek_min()
    }

    fn remove_next(&mut self) -> Option<Process> {
        self.pop_min()
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

    fn check_interruption(&self, running: &Process) -> Option<Interruption> {
        self.peek_min()
            .filter(|next| next.burst_time < running.burst_time)
            .map(|_| Interruption::Preempted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preempts_on_strictly_shorter() {
        let mut q = SrtfQueue::new();
        q.admit(Process::new("B", 3, 1));

        let mut running = Process::new("A", 5, 0);
        running.burst_time = 4;
        assert_eq!(q.check_interruption(&running), Some(Interruption::Preempted));
    }

    #[test]
    fn test_no_preemption_on_tie() {
        let mut q = SrtfQueue::new();
        q.admit(Process::new("B", 3, 1));

        let mut running = Process::new("A", 5, 0);
        running.burst_time = 3;
        assert_eq!(q.check_interruption(&running), None);
    }

    #[test]
    fn test_no_preemption_when_empty() {
        let q = SrtfQueue::new();
        assert_eq!(q.check_interruption(&Process::new("A", 5, 0)), None);
    }

    #[test]
    fn test_requeue_uses_remaining_burst() {
        let mut q = SrtfQueue::new();
        q.admit(Process::new("C", 8, 2));

        let mut a = Process::new("A", 5, 0);
        a.burst_time = 4;
        q.requeue(a);

        assert_eq!(q.pop_min().unwrap().id, "A");
        assert_eq!(q.pop_min().unwrap().id, "C");
        assert!(q.peek_min().is_none());
    }
}
