//! Run configuration.
//!
//! Loadable from JSON; every field is optional:
//!
//! ```
//! use u_cpusim::config::SimulationConfig;
//! use u_cpusim::simulator::PolicyKind;
//!
//! let config = SimulationConfig::from_json_str(r#"{ "quantum": 4, "policies": ["rr"] }"#).unwrap();
//! assert_eq!(config.quantum, 4);
//! assert_eq!(config.policies, vec![PolicyKind::Rr]);
//!
//! let defaults = SimulationConfig::from_json_str("{}").unwrap();
//! assert_eq!(defaults, SimulationConfig::default());
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::simulator::{Policy, PolicyKind};

/// Default Round Robin quantum (ticks).
pub const DEFAULT_QUANTUM: u32 = 2;

/// Which policies to run and how.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Round Robin time slice (ticks). Must be positive.
    pub quantum: u32,
    /// Policies to run, in order.
    pub policies: Vec<PolicyKind>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            policies: PolicyKind::ALL.to_vec(),
        }
    }
}

impl SimulationConfig {
    /// Creates the default configuration (all policies, quantum 2).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: u32) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the policies to run.
    pub fn with_policies(mut self, policies: impl IntoIterator<Item = PolicyKind>) -> Self {
        self.policies = policies.into_iter().collect();
        self
    }

    /// Parses a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Checks the configuration without building policies.
    pub fn validate(&self) -> Result<()> {
        self.policies().map(|_| ())
    }

    /// Builds the configured policies.
    ///
    /// # Errors
    /// - [`Error::NoPolicies`] if the list is empty.
    /// - [`Error::InvalidQuantum`] if Round Robin is selected with quantum 0.
    pub fn policies(&self) -> Result<Vec<Policy>> {
        if self.policies.is_empty() {
            return Err(Error::NoPolicies);
        }
        self.policies
            .iter()
            .map(|&kind| Policy::from_kind(kind, self.quantum))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::new();
        assert_eq!(config.quantum, 2);
        assert_eq!(config.policies.len(), 3);
        assert!(config.validate().is_ok());

        let policies = config.policies().unwrap();
        assert_eq!(policies[0], Policy::ShortestJobFirst);
        assert_eq!(policies[1].kind(), PolicyKind::Rr);
        assert_eq!(policies[2], Policy::ShortestRemainingTime);
    }

    #[test]
    fn test_zero_quantum_rejected() {
        let config = SimulationConfig::new().with_quantum(0);
        assert!(matches!(config.validate(), Err(Error::InvalidQuantum(0))));
    }

    #[test]
    fn test_zero_quantum_ok_without_round_robin() {
        let config = SimulationConfig::new()
            .with_quantum(0)
            .with_policies([PolicyKind::Sjf, PolicyKind::Srtf]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_policies_rejected() {
        let config = SimulationConfig::new().with_policies(Vec::new());
        assert!(matches!(config.validate(), Err(Error::NoPolicies)));
    }

    #[test]
    fn test_json_round_trip() {
        let config = SimulationConfig::new()
            .with_quantum(4)
            .with_policies([PolicyKind::Srtf]);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"quantum":4,"policies":["srtf"]}"#);
        assert_eq!(SimulationConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_invalid_json() {
        let err = SimulationConfig::from_json_str(r#"{ "quantum": -1 }"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = SimulationConfig::from_json_str(r#"{ "policies": ["fifo"] }"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
