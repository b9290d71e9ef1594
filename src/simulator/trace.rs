//! Ordered record of dispatcher decisions.

use serde::{Deserialize, Serialize};

use crate::dispatching::Interruption;

/// What happened at a traced tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraceEventKind {
    /// A process took the CPU.
    Dispatched,
    /// The running process exhausted its burst.
    Terminated,
    /// The running process used up its Round Robin slice.
    QuantumExpired,
    /// The running process was displaced by a shorter one.
    Preempted,
    /// Nothing is left to run; the simulation stops.
    Complete,
}

impl TraceEventKind {
    /// Console annotation for events that end a CPU slice.
    pub fn annotation(&self) -> Option<&'static str> {
        match self {
            Self::Terminated => Some("Process Terminated"),
            Self::QuantumExpired => Some("Quantum Expired"),
            Self::Preempted => Some("Process preempted by process with shorter burst time"),
            Self::Dispatched | Self::Complete => None,
        }
    }
}

impl From<Interruption> for TraceEventKind {
    fn from(interruption: Interruption) -> Self {
        match interruption {
            Interruption::QuantumExpired => Self::QuantumExpired,
            Interruption::Preempted => Self::Preempted,
        }
    }
}

/// A single `(tick, process, kind)` trace entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEvent {
    /// Tick at which the event happened.
    pub tick: u32,
    /// Process involved. `None` only for [`TraceEventKind::Complete`].
    pub process_id: Option<String>,
    /// Event kind.
    pub kind: TraceEventKind,
}

impl TraceEvent {
    /// Creates an event about a process.
    pub fn process(tick: u32, process_id: impl Into<String>, kind: TraceEventKind) -> Self {
        Self {
            tick,
            process_id: Some(process_id.into()),
            kind,
        }
    }

    /// Creates the final completion event.
    pub fn complete(tick: u32) -> Self {
        Self {
            tick,
            process_id: None,
            kind: TraceEventKind::Complete,
        }
    }
}
