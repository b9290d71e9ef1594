//! Ready structures for CPU dispatching.
//!
//! A ready structure holds every admitted, unfinished process that is not
//! currently on the CPU, and decides which one runs next. Each policy has
//! its own type; the dispatcher is generic over [`ReadyQueue`] and never
//! branches on a policy flag.
//!
//! | Type | Policy | Order | Preemption |
//! |------|--------|-------|------------|
//! | [`SjfQueue`] | Shortest Job First | ascending burst, then admission | never |
//! | [`RoundRobinQueue`] | Round Robin | FIFO | quantum expiry |
//! | [`SrtfQueue`] | Shortest Remaining Time First | ascending remaining burst, then admission | shorter ready process |
//!
//! # Usage
//!
//! ```
//! use u_cpusim::dispatching::{ReadyQueue, SjfQueue};
//! use u_cpusim::models::Process;
//!
//! let mut queue = SjfQueue::new();
//! queue.admit(Process::new("C", 8, 2));
//! queue.admit(Process::new("B", 3, 1));
//! assert_eq!(queue.peek_next().map(|p| p.id.as_str()), Some("B"));
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5

mod burst_heap;
mod round_robin;
mod sjf;
mod srtf;

pub use round_robin::RoundRobinQueue;
pub use sjf::SjfQueue;
pub use srtf::SrtfQueue;

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Why a running process left the CPU before finishing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interruption {
    /// Round Robin slice used up.
    QuantumExpired,
    /// A ready process has strictly less remaining burst.
    Preempted,
}

/// Policy-specific set of ready processes.
///
/// Processes enter through [`admit`](Self::admit) on arrival and through
/// [`requeue`](Self::requeue) after an [`Interruption`]; the dispatcher takes
/// them back out with [`remove_next`](Self::remove_next).
pub trait ReadyQueue: Debug {
    /// Short policy name (e.g., "SJF", "RR").
    fn name(&self) -> &'static str;

    /// Human-readable policy description used in report headers.
    fn description(&self) -> String {
        self.name().to_string()
    }

    /// Inserts a newly arrived process.
    fn admit(&mut self, process: Process);

    /// Reinserts a process interrupted while running.
    fn requeue(&mut self, process: Process) {
        self.admit(process);
    }

    /// The process that would be dispatched next, without removing it.
    fn peek_next(&self) -> Option<&Process>;

    /// Removes and returns the next process to dispatch.
    fn remove_next(&mut self) -> Option<Process>;

    /// Number of waiting processes.
    fn len(&self) -> usize;

    /// Whether no process is waiting.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Waiting processes in dispatch order.
    fn waiting(&self) -> Vec<&Process>;

    /// Charges one tick of waiting to every queued process.
    fn age(&mut self);

    /// Prepares a process that is about to take the CPU.
    fn on_dispatch(&self, _process: &mut Process) {}

    /// Decides whether the running process must give up the CPU.
    ///
    /// Called after the tick's service step, only if the process has burst
    /// left. Non-preemptive policies keep the default.
    fn check_interruption(&self, _running: &Process) -> Option<Interruption> {
        None
    }
}
