//! Min-burst priority heap shared by the SJF and SRTF ready structures.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::models::Process;

/// Heap slot keyed by `(burst_time, admission sequence)`.
///
/// `Ord` is reversed so that `BinaryHeap` (a max-heap) yields the smallest
/// key first.
#[derive(Debug, Clone)]
struct Entry {
    sequence: u64,
    process: Process,
}

impl Entry {
    fn key(&self) -> (u32, u64) {
        (self.process.burst_time, self.sequence)
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key())
    }
}

/// Priority heap ordered by ascending burst, ties by first admission.
///
/// A process keeps the sequence number of its first admission when it is
/// pushed again, so an interrupted process does not lose its place among
/// equal bursts.
#[derive(Debug, Clone, Default)]
pub(super) struct BurstHeap {
    heap: BinaryHeap<Entry>,
    sequences: HashMap<String, u64>,
    next_sequence: u64,
}

impl BurstHeap {
    pub(super) fn push(&mut self, process: Process) {
        let sequence = match self.sequences.get(&process.id) {
            Some(&sequence) => sequence,
            None => {
                let sequence = self.next_sequence;
                self.next_sequence += 1;
                self.sequences.insert(process.id.clone(), sequence);
                sequence
            }
        };
        self.heap.push(Entry { sequence, process });
    }

    pub(super) fn peek(&self) -> Option<&Process> {
        self.heap.peek().map(|e| &e.process)
    }

    pub(super) fn pop(&mut self) -> Option<Process> {
        self.heap.pop().map(|e| e.process)
    }

    pub(super) fn len(&self) -> usize {
        self.heap.len()
    }

    pub(super) fn ordered(&self) -> Vec<&Process> {
        let mut entries: Vec<&Entry> = self.heap.iter().collect();
        entries.sort_by(|a, b| b.cmp(a));
        entries.into_iter().map(|e| &e.process).collect()
    }

    /// Applies `f` to every queued process.
    ///
    /// `f` must not change `burst_time`; the heap is rebuilt from its own
    /// storage without re-sorting.
    pub(super) fn for_each_mut(&mut self, mut f: impl FnMut(&mut Process)) {
        let mut entries = std::mem::take(&mut self.heap).into_vec();
        for entry in &mut entries {
            f(&mut entry.process);
        }
        self.heap = BinaryHeap::from(entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(heap: &BurstHeap) -> Vec<&str> {
        heap.ordered().into_iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_min_burst_first() {
        let mut heap = BurstHeap::default();
        heap.push(Process::new("long", 9, 0));
        heap.push(Process::new("short", 2, 0));
        heap.push(Process::new("mid", 5, 0));

        assert_eq!(ids(&heap), ["short", "mid", "long"]);
        assert_eq!(heap.pop().unwrap().id, "short");
        assert_eq!(heap.pop().unwrap().id, "mid");
        assert_eq!(heap.pop().unwrap().id, "long");
        assert!(heap.pop().is_none());
    }

    #[test]
    fn test_ties_by_first_admission() {
        let mut heap = BurstHeap::default();
        heap.push(Process::new("first", 4, 0));
        heap.push(Process::new("second", 4, 0));
        heap.push(Process::new("third", 4, 1));
        assert_eq!(ids(&heap), ["first", "second", "third"]);
    }

    #[test]
    fn test_repush_keeps_sequence() {
        let mut heap = BurstHeap::default();
        heap.push(Process::new("A", 3, 0));
        heap.push(Process::new("B", 3, 0));

        let a = heap.pop().unwrap();
        assert_eq!(a.id, "A");
        heap.push(a);
        // A was admitted before B and keeps priority on the tie.
        assert_eq!(heap.peek().unwrap().id, "A");
    }

    #[test]
    fn test_for_each_mut() {
        let mut heap = BurstHeap::default();
        heap.push(Process::new("A", 3, 0));
        heap.push(Process::new("B", 1, 0));
        heap.for_each_mut(Process::wait_tick);

        assert_eq!(heap.len(), 2);
        assert!(heap.ordered().iter().all(|p| p.wait_time == 1));
        assert_eq!(heap.peek().unwrap().id, "B");
    }
}
