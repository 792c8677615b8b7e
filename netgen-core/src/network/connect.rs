//! Randomized wiring of a network towards a target mean degree.

use tracing::{debug, info, instrument, trace};

use crate::{
    error::{NetworkError, Result},
    params::NetworkParams,
    random::{RandomSource, SeededRandom},
};

use super::Network;

/// Summary of a [`Network::generate`] run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GenerationReport {
    /// Sum of the per-node link targets returned by [`Network::random_connect`].
    pub requested_links: usize,
    /// Undirected links present once generation finished.
    pub undirected_links: usize,
    /// Seed the generator was created from.
    pub seed: u64,
}

impl Network {
    /// Clears every link and rewires the network at random.
    ///
    /// Nodes are visited in ascending order. Each node draws a Poisson number
    /// of additional links with rate `mean_degree`, capped at
    /// `size - degree`, and links to that many distinct nodes it is not yet
    /// connected to, chosen uniformly. Links made by earlier nodes count
    /// towards later nodes' degree but a later node may still add links to an
    /// earlier one, so low-index nodes end up with slightly more links than
    /// they drew.
    ///
    /// Returns the sum of the capped per-node targets. This is not the number
    /// of undirected links; see [`Self::link_count`].
    ///
    /// # Errors
    /// Returns [`NetworkError::InvalidMeanDegree`] when `mean_degree` is
    /// negative or not finite. The network is left untouched in that case.
    ///
    /// # Examples
    /// ```
    /// use netgen_core::{Network, SeededRandom};
    ///
    /// let mut rng = SeededRandom::new(21);
    /// let mut network = Network::new();
    /// network.resize(50, &mut rng);
    /// network.random_connect(4.0, &mut rng)?;
    /// assert!(network.invariants().check_all().is_ok());
    /// assert_eq!(network.random_connect(0.0, &mut rng)?, 0);
    /// assert_eq!(network.link_count(), 0);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[instrument(level = "debug", skip(self, rng), fields(nodes = self.size()))]
    pub fn random_connect<R>(&mut self, mean_degree: f64, rng: &mut R) -> Result<usize>
    where
        R: RandomSource + ?Sized,
    {
        if !mean_degree.is_finite() || mean_degree < 0.0 {
            return Err(NetworkError::InvalidMeanDegree { got: mean_degree });
        }

        self.clear_links();
        let size = self.size();
        let mut total = 0_usize;

        for node in 0..size {
            let degree = self.degree(node)?;
            let draw = rng.poisson(mean_degree);
            let target = usize::try_from(draw)
                .unwrap_or(usize::MAX)
                .min(size.saturating_sub(degree));
            if target == 0 {
                trace!(node, degree, draw, "no additional links");
                continue;
            }

            let mut pool = self.possible_neighbors(node)?;
            let mut added = 0_usize;
            for _ in 0..target {
                // The cap leaves room for one more draw than there are
                // candidates; stop once the pool runs dry.
                let Some(last) = pool.len().checked_sub(1) else {
                    break;
                };
                let pick = rng.uniform_int(0, last).min(last);
                let candidate = pool.swap_remove(pick);
                if self.add_link(node, candidate) {
                    added += 1;
                }
            }
            debug!(node, degree, draw, target, added, "linked node");
            total += target;
        }

        info!(
            requested = total,
            links = self.link_count(),
            "random connection pass completed"
        );
        Ok(total)
    }

    /// Builds a network from `params`: seeds a [`SeededRandom`], allocates and
    /// values the nodes, then wires them with [`Self::random_connect`].
    ///
    /// # Errors
    /// Propagates [`NetworkError::InvalidMeanDegree`] from the wiring pass.
    ///
    /// # Examples
    /// ```
    /// use netgen_core::{Network, NetworkParams};
    ///
    /// let params = NetworkParams::new(30, 3.0)?.with_rng_seed(5);
    /// let (first, report) = Network::generate(&params)?;
    /// let (second, _) = Network::generate(&params)?;
    /// assert_eq!(first, second);
    /// assert_eq!(report.undirected_links, first.link_count());
    /// assert_eq!(report.seed, 5);
    /// # Ok::<(), netgen_core::NetworkError>(())
    /// ```
    #[instrument(
        level = "info",
        skip(params),
        fields(
            nodes = params.node_count(),
            mean_degree = params.mean_degree(),
            seed = params.rng_seed(),
        )
    )]
    pub fn generate(params: &NetworkParams) -> Result<(Self, GenerationReport)> {
        let mut rng = SeededRandom::new(params.rng_seed());
        let mut network = Self::new();
        network.resize_with(params.node_count(), params.value_distribution(), &mut rng);
        let requested_links = network.random_connect(params.mean_degree(), &mut rng)?;
        let report = GenerationReport {
            requested_links,
            undirected_links: network.link_count(),
            seed: rng.seed(),
        };
        info!(
            requested = report.requested_links,
            links = report.undirected_links,
            "network generated"
        );
        Ok((network, report))
    }
}
