//! Node and value storage for the network.
//!
//! A [`Network`] owns one scalar value and one neighbour list per node. Node
//! identifiers are dense indices in `[0, size)`. Link storage and queries live
//! in the `links` submodule and the randomized wiring pass in `connect`.

mod connect;
mod links;

#[cfg(test)]
mod property;

use tracing::{debug, instrument};

use crate::{
    error::{NetworkError, Result},
    params::ValueDistribution,
    random::RandomSource,
};

pub use self::connect::GenerationReport;

/// Undirected network of valued nodes.
///
/// # Examples
/// ```
/// use netgen_core::{Network, SeededRandom};
///
/// let mut rng = SeededRandom::new(7);
/// let mut network = Network::new();
/// network.resize(4, &mut rng);
/// assert!(network.add_link(0, 1));
/// assert!(!network.add_link(1, 0));
/// assert_eq!(network.degree(0)?, 1);
/// assert_eq!(network.possible_neighbors(0)?, vec![2, 3]);
/// # Ok::<(), netgen_core::NetworkError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Network {
    pub(crate) values: Vec<f64>,
    pub(crate) adjacency: Vec<Vec<usize>>,
}

impl Network {
    /// Creates an empty network with no nodes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns `true` when the network has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Discards all values and links, then allocates `node_count` nodes whose
    /// values are drawn from a standard normal distribution.
    ///
    /// Links are not regenerated; call [`Self::random_connect`] afterwards.
    pub fn resize<R>(&mut self, node_count: usize, rng: &mut R)
    where
        R: RandomSource + ?Sized,
    {
        self.resize_with(node_count, ValueDistribution::STANDARD, rng);
    }

    /// Like [`Self::resize`], drawing values from `distribution` instead of the
    /// standard normal.
    #[instrument(level = "debug", skip(self, rng), fields(previous = self.size()))]
    pub fn resize_with<R>(
        &mut self,
        node_count: usize,
        distribution: ValueDistribution,
        rng: &mut R,
    ) where
        R: RandomSource + ?Sized,
    {
        self.values.clear();
        self.adjacency.clear();
        self.values.reserve(node_count);
        self.values.extend(
            (0..node_count).map(|_| rng.normal(distribution.mean(), distribution.std_dev())),
        );
        self.adjacency.resize_with(node_count, Vec::new);
        debug!(nodes = node_count, "network resized");
    }

    /// Returns the value stored at `node`.
    ///
    /// # Errors
    /// Returns [`NetworkError::OutOfRange`] when `node >= self.size()`.
    pub fn value(&self, node: usize) -> Result<f64> {
        self.values
            .get(node)
            .copied()
            .ok_or_else(|| self.out_of_range(node))
    }

    /// Returns every node value, indexed by node id.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Copies values into the network from index zero upwards.
    ///
    /// At most `self.size()` entries are copied. Surplus input is ignored and
    /// nodes past the end of a short input keep their current value. Returns
    /// the number of nodes updated.
    ///
    /// # Examples
    /// ```
    /// use netgen_core::{Network, SeededRandom};
    ///
    /// let mut network = Network::new();
    /// network.resize(3, &mut SeededRandom::new(1));
    /// assert_eq!(network.set_values(&[1.0, 2.0, 3.0, 4.0]), 3);
    /// assert_eq!(network.values(), &[1.0, 2.0, 3.0]);
    /// ```
    pub fn set_values(&mut self, new_values: &[f64]) -> usize {
        let copied = new_values.len().min(self.values.len());
        for (slot, value) in self.values.iter_mut().zip(new_values) {
            *slot = *value;
        }
        copied
    }

    /// Returns a copy of the node values sorted in non-increasing order.
    ///
    /// The relative order of equal values is unspecified.
    #[must_use]
    pub fn sorted_values(&self) -> Vec<f64> {
        let mut sorted = self.values.clone();
        sorted.sort_unstable_by(|left, right| right.total_cmp(left));
        sorted
    }

    fn out_of_range(&self, node: usize) -> NetworkError {
        NetworkError::OutOfRange {
            index: node,
            size: self.size(),
        }
    }
}
