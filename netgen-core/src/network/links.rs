//! Link storage and neighbour queries.
//!
//! Each undirected edge is recorded in both endpoints' neighbour lists, in
//! insertion order. [`Network::add_link`] is the only way edges enter the
//! network, so the no-duplicate check only inspects one direction.

use tracing::trace;

use crate::error::Result;

use super::Network;

impl Network {
    /// Returns the number of links incident to `node`.
    ///
    /// # Errors
    /// Returns [`crate::NetworkError::OutOfRange`] when `node >= self.size()`.
    pub fn degree(&self, node: usize) -> Result<usize> {
        Ok(self.neighbors(node)?.len())
    }

    /// Links `a` and `b`, returning whether a new edge was created.
    ///
    /// Out-of-range endpoints, self-loops and already linked pairs are
    /// rejected without error and leave the network unchanged.
    ///
    /// # Examples
    /// ```
    /// use netgen_core::{Network, SeededRandom};
    ///
    /// let mut network = Network::new();
    /// network.resize(3, &mut SeededRandom::new(0));
    /// assert!(network.add_link(0, 2));
    /// assert!(!network.add_link(2, 0));
    /// assert!(!network.add_link(1, 1));
    /// assert!(!network.add_link(1, 3));
    /// ```
    pub fn add_link(&mut self, a: usize, b: usize) -> bool {
        if a == b {
            trace!(node = a, "rejected self-loop");
            return false;
        }
        let size = self.size();
        if a >= size || b >= size {
            trace!(a, b, size, "rejected link to missing node");
            return false;
        }
        let Some(from_a) = self.adjacency.get_mut(a) else {
            return false;
        };
        if from_a.contains(&b) {
            trace!(a, b, "link already present");
            return false;
        }
        from_a.push(b);
        if let Some(from_b) = self.adjacency.get_mut(b) {
            from_b.push(a);
        }
        true
    }

    /// Returns the neighbours of `node` in insertion order.
    ///
    /// # Errors
    /// Returns [`crate::NetworkError::OutOfRange`] when `node >= self.size()`.
    pub fn neighbors(&self, node: usize) -> Result<&[usize]> {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .ok_or_else(|| self.out_of_range(node))
    }

    /// Returns, in ascending order, every node that could still be linked to
    /// `node`: all nodes except `node` itself and its current neighbours.
    ///
    /// # Errors
    /// Returns [`crate::NetworkError::OutOfRange`] when `node >= self.size()`.
    pub fn possible_neighbors(&self, node: usize) -> Result<Vec<usize>> {
        let mut unmatched = self.neighbors(node)?.to_vec();
        let size = self.size();
        let mut candidates = Vec::with_capacity(size.saturating_sub(unmatched.len() + 1));
        for other in (0..size).filter(|&other| other != node) {
            // Each neighbour matches exactly once, so drop it after the hit.
            match unmatched.iter().position(|&linked| linked == other) {
                Some(pos) => {
                    unmatched.swap_remove(pos);
                }
                None => candidates.push(other),
            }
        }
        Ok(candidates)
    }

    /// Returns `true` when `a` and `b` are linked. Invalid ids are never linked.
    #[must_use]
    pub fn is_linked(&self, a: usize, b: usize) -> bool {
        self.adjacency
            .get(a)
            .is_some_and(|neighbours| neighbours.contains(&b))
    }

    /// Returns the number of undirected links.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Iterates over undirected links as `(low, high)` pairs, each once.
    ///
    /// # Examples
    /// ```
    /// use netgen_core::{Network, SeededRandom};
    ///
    /// let mut network = Network::new();
    /// network.resize(3, &mut SeededRandom::new(0));
    /// network.add_link(2, 0);
    /// network.add_link(1, 2);
    /// assert_eq!(network.links().collect::<Vec<_>>(), vec![(0, 2), (1, 2)]);
    /// ```
    pub fn links(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(node, neighbours)| {
            neighbours
                .iter()
                .filter(move |&&other| node < other)
                .map(move |&other| (node, other))
        })
    }

    /// Removes every link while keeping nodes and values.
    pub fn clear_links(&mut self) {
        self.adjacency.iter_mut().for_each(Vec::clear);
    }
}
