//! Scheduling policy selection.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Dispatcher, SimulationRun};
use crate::dispatching::{RoundRobinQueue, SjfQueue, SrtfQueue};
use crate::error::{Error, Result};
use crate::models::Workload;

/// Policy family, without parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// Shortest Job First.
    Sjf,
    /// Round Robin.
    Rr,
    /// Shortest Remaining Time First.
    Srtf,
}

impl PolicyKind {
    /// All policies, in report order.
    pub const ALL: [PolicyKind; 3] = [PolicyKind::Sjf, PolicyKind::Rr, PolicyKind::Srtf];

    /// Lowercase name used on the command line and in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sjf => "sjf",
            Self::Rr => "rr",
            Self::Srtf => "srtf",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sjf" => Ok(Self::Sjf),
            "rr" | "round-robin" => Ok(Self::Rr),
            "srtf" => Ok(Self::Srtf),
            other => Err(format!(
                "unknown policy '{other}' (expected sjf, rr or srtf)"
            )),
        }
    }
}

/// A fully parameterized scheduling policy.
///
/// # Example
///
/// ```
/// use u_cpusim::models::{Process, Workload};
/// use u_cpusim::simulator::Policy;
///
/// let workload = Workload::new(vec![Process::new("A", 3, 0)]);
/// let run = Policy::round_robin(2).unwrap().simulate(&workload);
/// assert_eq!(run.completion_tick, 3);
///
/// assert!(Policy::round_robin(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Shortest Job First (non-preemptive).
    ShortestJobFirst,
    /// Round Robin with a fixed quantum.
    RoundRobin {
        /// Time slice (ticks).
        quantum: NonZeroU32,
    },
    /// Shortest Remaining Time First (preemptive).
    ShortestRemainingTime,
}

impl Policy {
    /// Round Robin with a validated quantum.
    ///
    /// # Errors
    /// [`Error::InvalidQuantum`] if `quantum` is 0.
    pub fn round_robin(quantum: u32) -> Result<Self> {
        NonZeroU32::new(quantum)
            .map(|quantum| Self::RoundRobin { quantum })
            .ok_or(Error::InvalidQuantum(quantum))
    }

    /// Builds a policy of the given kind. `quantum` is only used by Round Robin.
    pub fn from_kind(kind: PolicyKind, quantum: u32) -> Result<Self> {
        match kind {
            PolicyKind::Sjf => Ok(Self::ShortestJobFirst),
            PolicyKind::Rr => Self::round_robin(quantum),
            PolicyKind::Srtf => Ok(Self::ShortestRemainingTime),
        }
    }

    /// Policy family.
    pub fn kind(&self) -> PolicyKind {
        match self {
            Self::ShortestJobFirst => PolicyKind::Sjf,
            Self::RoundRobin { .. } => PolicyKind::Rr,
            Self::ShortestRemainingTime => PolicyKind::Srtf,
        }
    }

    /// Simulates `workload` to completion on a fresh copy.
    pub fn simulate(&self, workload: &Workload) -> SimulationRun {
        match *self {
            Self::ShortestJobFirst => Dispatcher::new(workload, SjfQueue::new()).run(),
            Self::RoundRobin { quantum } => {
                Dispatcher::new(workload, RoundRobinQueue::new(quantum)).run()
            }
            Self::ShortestRemainingTime => Dispatcher::new(workload, SrtfQueue::new()).run(),
        }
    }
}
