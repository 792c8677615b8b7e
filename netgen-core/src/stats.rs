//! Degree statistics for reporting on generated networks.

use crate::network::Network;

/// Degree distribution of a non-empty network.
#[derive(Clone, Debug, PartialEq)]
pub struct DegreeSummary {
    /// Smallest node degree.
    pub min: usize,
    /// Largest node degree.
    pub max: usize,
    /// Mean node degree.
    pub mean: f64,
    /// `histogram[d]` is the number of nodes with degree `d`.
    pub histogram: Vec<usize>,
}

impl Network {
    /// Returns the degree of every node, indexed by node id.
    #[must_use]
    pub fn degrees(&self) -> Vec<usize> {
        self.adjacency.iter().map(Vec::len).collect()
    }

    /// Summarises the degree distribution, or `None` for an empty network.
    ///
    /// # Examples
    /// ```
    /// use netgen_core::{Network, SeededRandom};
    ///
    /// let mut network = Network::new();
    /// network.resize(3, &mut SeededRandom::new(0));
    /// network.add_link(0, 1);
    /// let summary = network.degree_summary().expect("network has nodes");
    /// assert_eq!((summary.min, summary.max), (0, 1));
    /// assert_eq!(summary.histogram, vec![1, 2]);
    /// ```
    #[must_use]
    pub fn degree_summary(&self) -> Option<DegreeSummary> {
        let degrees = self.degrees();
        let min = degrees.iter().copied().min()?;
        let max = degrees.iter().copied().max()?;
        let mut histogram = vec![0_usize; max + 1];
        for degree in &degrees {
            if let Some(count) = histogram.get_mut(*degree) {
                *count += 1;
            }
        }
        let total: usize = degrees.iter().sum();
        let mean = total as f64 / degrees.len() as f64;
        Some(DegreeSummary {
            min,
            max,
            mean,
            histogram,
        })
    }
}
