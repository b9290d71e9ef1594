//! Workload (input snapshot) model and loader.
//!
//! A workload is the immutable, arrival-sorted set of processes that every
//! policy run starts from. Each run clones its own working copy, so runs
//! never share mutable state.
//!
//! # Text Format
//!
//! Whitespace-separated triples `id burst_time arrival_time`. Line breaks
//! carry no meaning and the source order need not be sorted:
//!
//! ```
//! use u_cpusim::models::Workload;
//!
//! let workload = Workload::parse("C 8 2\nA 5 0\nB 3 1\n").unwrap();
//! let ids: Vec<&str> = workload.processes().iter().map(|p| p.id.as_str()).collect();
//! assert_eq!(ids, ["A", "B", "C"]);
//! ```
//!
//! A trailing record that cannot fill all three fields is discarded rather
//! than turned into a zero-valued process.

use std::fs;
use std::path::Path;

use log::warn;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Process;
use crate::error::{Error, Result};

const FIELDS_PER_RECORD: usize = 3;

/// An arrival-sorted snapshot of processes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Process>", into = "Vec<Process>")]
pub struct Workload {
    processes: Vec<Process>,
}

impl Workload {
    /// Creates a workload, sorting processes by arrival time.
    ///
    /// The sort is stable: processes arriving on the same tick keep their
    /// given order, which is also their admission order.
    pub fn new(mut processes: Vec<Process>) -> Self {
        processes.sort_by_key(|p| p.arrival_time);
        Self { processes }
    }

    /// Parses the whitespace-separated text format.
    ///
    /// # Errors
    /// [`Error::InvalidField`] if a numeric field is not a non-negative integer.
    pub fn parse(input: &str) -> Result<Self> {
        let tokens: Vec<&str> = input.split_whitespace().collect();
        let mut processes = Vec::with_capacity(tokens.len() / FIELDS_PER_RECORD);

        for (record, fields) in tokens.chunks(FIELDS_PER_RECORD).enumerate() {
            let [id, burst, arrival] = fields else {
                warn!(
                    "discarding incomplete record {record}: expected {FIELDS_PER_RECORD} fields, got {:?}",
                    fields
                );
                continue;
            };
            let burst_time = parse_field(record, "burst_time", burst)?;
            let arrival_time = parse_field(record, "arrival_time", arrival)?;
            processes.push(Process::new(*id, burst_time, arrival_time));
        }

        Ok(Self::new(processes))
    }

    /// Reads and parses a workload file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// Generates a synthetic workload with ids `P1..=Pn`.
    ///
    /// Bursts are drawn from `1..=max_burst`, arrivals from `0..=max_arrival`.
    pub fn random<R: Rng>(
        rng: &mut R,
        count: usize,
        max_burst: u32,
        max_arrival: u32,
    ) -> Self {
        let processes = (1..=count)
            .map(|n| {
                let burst = rng.random_range(1..=max_burst.max(1));
                let arrival = rng.random_range(0..=max_arrival);
                Process::new(format!("P{n}"), burst, arrival)
            })
            .collect();
        Self::new(processes)
    }

    /// Processes in admission order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the workload has no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Sum of all requested bursts (ticks).
    pub fn total_burst(&self) -> u64 {
        self.processes.iter().map(|p| u64::from(p.original_burst)).sum()
    }

    /// Latest arrival tick, if any.
    pub fn last_arrival(&self) -> Option<u32> {
        self.processes.last().map(|p| p.arrival_time)
    }
}

impl From<Vec<Process>> for Workload {
    fn from(processes: Vec<Process>) -> Self {
        Self::new(processes)
    }
}

impl From<Workload> for Vec<Process> {
    fn from(workload: Workload) -> Self {
        workload.processes
    }
}

fn parse_field(record: usize, field: &'static str, token: &str) -> Result<u32> {
    token.parse().map_err(|_| Error::InvalidField {
        record,
        field,
        value: token.to_string(),
    })
}
