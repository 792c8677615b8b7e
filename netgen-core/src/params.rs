//! Parameter handling for network generation.

use crate::error::NetworkError;

const DEFAULT_RNG_SEED: u64 = 0x5EED_CAFE;

/// Normal distribution node values are drawn from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueDistribution {
    mean: f64,
    std_dev: f64,
}

impl ValueDistribution {
    /// Standard normal: mean 0, standard deviation 1.
    pub const STANDARD: Self = Self {
        mean: 0.0,
        std_dev: 1.0,
    };

    /// Creates a normal value distribution.
    ///
    /// # Errors
    /// Returns [`NetworkError::InvalidParameters`] when `mean` is not finite or
    /// `std_dev` is negative or not finite.
    ///
    /// # Examples
    /// ```
    /// use netgen_core::ValueDistribution;
    ///
    /// let dist = ValueDistribution::new(2.0, 0.5)?;
    /// assert_eq!(dist.mean(), 2.0);
    /// assert!(ValueDistribution::new(0.0, -1.0).is_err());
    /// # Ok::<(), netgen_core::NetworkError>(())
    /// ```
    pub fn new(mean: f64, std_dev: f64) -> Result<Self, NetworkError> {
        if !mean.is_finite() {
            return Err(NetworkError::InvalidParameters {
                reason: format!("value mean must be finite (got {mean})"),
            });
        }
        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(NetworkError::InvalidParameters {
                reason: format!(
                    "value standard deviation must be finite and non-negative (got {std_dev})"
                ),
            });
        }
        Ok(Self { mean, std_dev })
    }

    /// Returns the mean.
    #[must_use]
    pub const fn mean(&self) -> f64 {
        self.mean
    }

    /// Returns the standard deviation.
    #[must_use]
    pub const fn std_dev(&self) -> f64 {
        self.std_dev
    }
}

impl Default for ValueDistribution {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Configuration for [`crate::Network::generate`].
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkParams {
    node_count: usize,
    mean_degree: f64,
    value_distribution: ValueDistribution,
    rng_seed: u64,
}

impl NetworkParams {
    /// Creates a parameter set for `node_count` nodes wired towards
    /// `mean_degree` additional links per node.
    ///
    /// # Errors
    /// Returns [`NetworkError::InvalidMeanDegree`] when `mean_degree` is
    /// negative or not finite.
    ///
    /// # Examples
    /// ```
    /// use netgen_core::NetworkParams;
    ///
    /// let params = NetworkParams::new(100, 4.0)?;
    /// assert_eq!(params.node_count(), 100);
    /// assert!(NetworkParams::new(10, f64::NAN).is_err());
    /// # Ok::<(), netgen_core::NetworkError>(())
    /// ```
    pub fn new(node_count: usize, mean_degree: f64) -> Result<Self, NetworkError> {
        if !mean_degree.is_finite() || mean_degree < 0.0 {
            return Err(NetworkError::InvalidMeanDegree { got: mean_degree });
        }
        Ok(Self {
            node_count,
            mean_degree,
            value_distribution: ValueDistribution::STANDARD,
            rng_seed: DEFAULT_RNG_SEED,
        })
    }

    /// Seeds the generator to make generation deterministic.
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = seed;
        self
    }

    /// Overrides the distribution node values are drawn from.
    #[must_use]
    pub fn with_value_distribution(mut self, distribution: ValueDistribution) -> Self {
        self.value_distribution = distribution;
        self
    }

    /// Returns the number of nodes to allocate.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the Poisson rate for additional links per node.
    #[must_use]
    pub fn mean_degree(&self) -> f64 {
        self.mean_degree
    }

    /// Returns the value distribution.
    #[must_use]
    pub fn value_distribution(&self) -> ValueDistribution {
        self.value_distribution
    }

    /// Returns the generator seed.
    #[must_use]
    pub fn rng_seed(&self) -> u64 {
        self.rng_seed
    }
}
