//! Netgen core library.
//!
//! Models an undirected network of valued nodes and wires it at random
//! towards a target mean degree. Randomness is injected through
//! [`RandomSource`] so generation is reproducible under a fixed seed.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod invariants;
mod network;
mod params;
mod random;
mod stats;

#[cfg(test)]
mod test_utils;

pub use crate::{
    error::{NetworkError, NetworkErrorCode, Result},
    invariants::{NetworkInvariant, NetworkInvariantChecker, NetworkInvariantViolation},
    network::{GenerationReport, Network},
    params::{NetworkParams, ValueDistribution},
    random::{RandomSource, SeededRandom},
    stats::DegreeSummary,
};
