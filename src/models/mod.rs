//! Scheduling domain models.
//!
//! Provides the input data types of a simulation: the [`Process`] being
//! scheduled and the arrival-sorted [`Workload`] snapshot every policy run
//! starts from.
//!
//! # Field Glossary
//!
//! | Field | Meaning |
//! |-------|---------|
//! | `burst_time` | CPU time still needed |
//! | `arrival_time` | tick the process becomes ready |
//! | `wait_time` | ticks ready but not running |
//! | `turnaround_time` | ticks from arrival to completion |

mod process;
mod workload;

pub use process::Process;
pub use workload::Workload;
