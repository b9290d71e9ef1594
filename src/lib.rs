//! Discrete-time CPU scheduling simulator.
//!
//! Simulates how a single CPU dispatches a fixed set of processes under
//! classical scheduling policies and reports per-process wait and
//! turnaround times.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `Workload` (text loader included)
//! - **`dispatching`**: Ready structures — `SjfQueue`, `RoundRobinQueue`,
//!   `SrtfQueue` behind the `ReadyQueue` trait
//! - **`simulator`**: The tick-by-tick `Dispatcher`, trace events,
//!   statistics, `Policy` selection and the multi-policy `Simulator`
//! - **`report`**: Console and JSON rendering of finished runs
//! - **`config`**: `SimulationConfig` (quantum, policy list)
//! - **`validation`**: Workload integrity checks (duplicate IDs, tick range)
//!
//! # Example
//!
//! ```
//! use u_cpusim::models::Workload;
//! use u_cpusim::simulator::Policy;
//!
//! let workload = Workload::parse("A 5 0\nB 3 1\nC 8 2\n").unwrap();
//! let run = Policy::ShortestRemainingTime.simulate(&workload);
//!
//! assert_eq!(run.stats.get("B").unwrap().wait_time, 0);
//! println!("{}", u_cpusim::report::render_run(&run));
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod dispatching;
mod error;
pub mod models;
pub mod report;
pub mod simulator;
pub mod validation;

pub use error::{Error, Result};
