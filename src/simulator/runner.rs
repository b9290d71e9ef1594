//! Validated multi-policy runs.

use log::info;

use super::{Policy, SimulationRun};
use crate::config::SimulationConfig;
use crate::error::Result;
use crate::models::Workload;
use crate::validation::validate_workload;

/// Runs a workload under every configured policy.
///
/// Configuration and workload are both validated before the first run;
/// each policy then gets its own copy of the snapshot.
///
/// # Example
///
/// ```
/// use u_cpusim::config::SimulationConfig;
/// use u_cpusim::models::Workload;
/// use u_cpusim::simulator::Simulator;
///
/// let workload = Workload::parse("A 5 0 B 3 1 C 8 2").unwrap();
/// let runs = Simulator::new(SimulationConfig::default()).run(&workload).unwrap();
///
/// assert_eq!(runs.len(), 3);
/// assert!(runs.iter().all(|run| run.completion_tick == 16));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Creates a simulator for the given configuration.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Validates and simulates `workload` under each configured policy, in order.
    ///
    /// # Errors
    /// - [`Error::InvalidQuantum`](crate::Error::InvalidQuantum) /
    ///   [`Error::NoPolicies`](crate::Error::NoPolicies) for a bad configuration.
    /// - [`Error::Validation`](crate::Error::Validation) for a bad workload.
    pub fn run(&self, workload: &Workload) -> Result<Vec<SimulationRun>> {
        let policies = self.config.policies()?;
        validate_workload(workload)?;

        Ok(policies
            .iter()
            .map(|policy| self.run_policy(*policy, workload))
            .collect())
    }

    fn run_policy(&self, policy: Policy, workload: &Workload) -> SimulationRun {
        let run = policy.simulate(workload);
        info!(
            "{}: {} processes finished by tick {}",
            run.policy,
            run.stats.len(),
            run.completion_tick
        );
        run
    }
}
