//! Structural invariant checks for [`Network`].
//!
//! The checkers are surfaced via [`Network::invariants`] so tests and callers
//! embedding the network can assert link-store health after mutations.

mod checks;


use thiserror::Error;

use crate::network::Network;

use self::checks::{
    check_degree_bound, check_endpoint_range, check_no_duplicates, check_no_self_loops,
    check_symmetry, check_value_count,
};

/// Enumerates the structural invariants of a [`Network`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NetworkInvariant {
    /// One value per node.
    ValueCount,
    /// Every referenced node id lies in `[0, size)`.
    EndpointRange,
    /// No node links to itself.
    NoSelfLoops,
    /// No neighbour appears twice in a node's list.
    NoDuplicates,
    /// Every link is recorded at both endpoints.
    Symmetry,
    /// No node has more than `size - 1` neighbours.
    DegreeBound,
}

impl NetworkInvariant {
    /// Returns all invariants in the order they should be evaluated.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::ValueCount,
            Self::EndpointRange,
            Self::NoSelfLoops,
            Self::NoDuplicates,
            Self::Symmetry,
            Self::DegreeBound,
        ]
    }
}

/// Reports an invariant violation surfaced by [`NetworkInvariantChecker`].
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum NetworkInvariantViolation {
    /// The value store and the link store disagree on the node count.
    #[error("network has {nodes} node(s) but {values} value(s)")]
    ValueCount {
        /// Nodes in the link store.
        nodes: usize,
        /// Entries in the value store.
        values: usize,
    },
    /// A node references a neighbour that does not exist.
    #[error("node {origin} references missing node {target} (size {size})")]
    EndpointOutOfRange {
        /// Node holding the reference.
        origin: usize,
        /// Referenced identifier.
        target: usize,
        /// Node count.
        size: usize,
    },
    /// A node is linked to itself.
    #[error("node {node} is linked to itself")]
    SelfLoop {
        /// Offending node.
        node: usize,
    },
    /// A neighbour is recorded more than once.
    #[error("node {origin} lists neighbour {target} {count} times")]
    DuplicateLink {
        /// Node holding the duplicate entries.
        origin: usize,
        /// Repeated neighbour.
        target: usize,
        /// Number of occurrences.
        count: usize,
    },
    /// A link is missing its reverse entry.
    #[error("link {origin}->{target} is missing the reverse link")]
    MissingBacklink {
        /// Node exposing the one-way link.
        origin: usize,
        /// Node lacking the reverse entry.
        target: usize,
    },
    /// A node has more neighbours than there are other nodes.
    #[error("node {node} has degree {degree}, exceeding limit {limit}")]
    DegreeBound {
        /// Offending node.
        node: usize,
        /// Observed degree.
        degree: usize,
        /// Maximum permitted degree.
        limit: usize,
    },
}

/// Helper returned by [`Network::invariants`] to run structural checks.
#[derive(Debug)]
pub struct NetworkInvariantChecker<'network> {
    network: &'network Network,
}

impl NetworkInvariantChecker<'_> {
    /// Runs all invariants, returning the first violation encountered.
    ///
    /// # Errors
    /// Returns the first [`NetworkInvariantViolation`] found.
    pub fn check_all(&self) -> Result<(), NetworkInvariantViolation> {
        self.check_many(NetworkInvariant::all())
    }

    /// Runs a custom subset of invariants in the provided order.
    ///
    /// # Errors
    /// Returns the first [`NetworkInvariantViolation`] found.
    pub fn check_many(
        &self,
        invariants: impl IntoIterator<Item = NetworkInvariant>,
    ) -> Result<(), NetworkInvariantViolation> {
        self.run_with_mode(invariants, &mut EvaluationMode::FailFast)
    }

    /// Runs a single invariant.
    ///
    /// # Errors
    /// Returns the first [`NetworkInvariantViolation`] found.
    pub fn check(&self, invariant: NetworkInvariant) -> Result<(), NetworkInvariantViolation> {
        self.check_many([invariant])
    }

    /// Runs the symmetry invariant directly.
    ///
    /// # Errors
    /// Returns the first missing backlink.
    pub fn symmetry(&self) -> Result<(), NetworkInvariantViolation> {
        self.check(NetworkInvariant::Symmetry)
    }

    /// Runs the degree-bound invariant directly.
    ///
    /// # Errors
    /// Returns the first node whose degree exceeds `size - 1`.
    pub fn degree_bound(&self) -> Result<(), NetworkInvariantViolation> {
        self.check(NetworkInvariant::DegreeBound)
    }

    /// Executes every invariant and returns the full set of violations.
    #[must_use]
    pub fn collect_all(&self) -> Vec<NetworkInvariantViolation> {
        self.collect_many(NetworkInvariant::all())
    }

    /// Executes the selected invariants and returns every violation discovered.
    #[must_use]
    pub fn collect_many(
        &self,
        invariants: impl IntoIterator<Item = NetworkInvariant>,
    ) -> Vec<NetworkInvariantViolation> {
        let mut violations = Vec::new();
        let mut mode = EvaluationMode::Collect(&mut violations);
        // Collect mode records instead of failing, so this always succeeds.
        if self.run_with_mode(invariants, &mut mode).is_err() {
            tracing::warn!("collecting invariant checker stopped early");
        }
        violations
    }

    fn run_with_mode(
        &self,
        invariants: impl IntoIterator<Item = NetworkInvariant>,
        mode: &mut EvaluationMode<'_>,
    ) -> Result<(), NetworkInvariantViolation> {
        for invariant in invariants {
            dispatch(self.network, invariant, mode)?;
        }
        Ok(())
    }
}

impl Network {
    /// Returns a checker for this network's structural invariants.
    #[must_use]
    pub fn invariants(&self) -> NetworkInvariantChecker<'_> {
        NetworkInvariantChecker { network: self }
    }
}

fn dispatch(
    network: &Network,
    invariant: NetworkInvariant,
    mode: &mut EvaluationMode<'_>,
) -> Result<(), NetworkInvariantViolation> {
    match invariant {
        NetworkInvariant::ValueCount => check_value_count(network, mode),
        NetworkInvariant::EndpointRange => check_endpoint_range(network, mode),
        NetworkInvariant::NoSelfLoops => check_no_self_loops(network, mode),
        NetworkInvariant::NoDuplicates => check_no_duplicates(network, mode),
        NetworkInvariant::Symmetry => check_symmetry(network, mode),
        NetworkInvariant::DegreeBound => check_degree_bound(network, mode),
    }
}

pub(crate) enum EvaluationMode<'a> {
    FailFast,
    Collect(&'a mut Vec<NetworkInvariantViolation>),
}

impl EvaluationMode<'_> {
    fn record(
        &mut self,
        violation: NetworkInvariantViolation,
    ) -> Result<(), NetworkInvariantViolation> {
        match self {
            Self::FailFast => Err(violation),
            Self::Collect(sink) => {
                sink.push(violation);
                Ok(())
            }
        }
    }
}
