//! Benchmark parameter types.

use std::fmt;

use netgen_core::{Network, NetworkParams};

use crate::error::BenchSetupError;

/// Parameters for a wiring benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct ConnectBenchParams {
    /// Number of nodes in the network.
    pub node_count: usize,
    /// Poisson rate for additional links per node.
    pub mean_degree: f64,
    /// Generator seed.
    pub seed: u64,
}

impl ConnectBenchParams {
    /// Converts the benchmark parameters into generation parameters.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::Network`] when the mean degree is rejected.
    pub fn network_params(&self) -> Result<NetworkParams, BenchSetupError> {
        Ok(NetworkParams::new(self.node_count, self.mean_degree)?.with_rng_seed(self.seed))
    }

    /// Generates the network described by these parameters.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::Network`] when generation fails.
    pub fn generate(&self) -> Result<Network, BenchSetupError> {
        let (network, _report) = Network::generate(&self.network_params()?)?;
        Ok(network)
    }
}

impl fmt::Display for ConnectBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},k={}", self.node_count, self.mean_degree)
    }
}
