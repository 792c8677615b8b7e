use tracing::{Level, debug, trace};

use super::{EvaluationMode, NetworkInvariantViolation};
use crate::network::Network;

fn for_each_link(
    network: &Network,
    mut visitor: impl FnMut(usize, usize) -> Result<(), NetworkInvariantViolation>,
) -> Result<(), NetworkInvariantViolation> {
    for (origin, neighbours) in network.adjacency.iter().enumerate() {
        for &target in neighbours {
            visitor(origin, target)?;
        }
    }
    Ok(())
}

pub(super) fn check_value_count(
    network: &Network,
    mode: &mut EvaluationMode<'_>,
) -> Result<(), NetworkInvariantViolation> {
    let nodes = network.adjacency.len();
    let values = network.values.len();
    if nodes == values {
        Ok(())
    } else {
        mode.record(NetworkInvariantViolation::ValueCount { nodes, values })
    }
}

pub(super) fn check_endpoint_range(
    network: &Network,
    mode: &mut EvaluationMode<'_>,
) -> Result<(), NetworkInvariantViolation> {
    let size = network.size();
    for_each_link(network, |origin, target| {
        if target < size {
            Ok(())
        } else {
            mode.record(NetworkInvariantViolation::EndpointOutOfRange {
                origin,
                target,
                size,
            })
        }
    })
}

pub(super) fn check_no_self_loops(
    network: &Network,
    mode: &mut EvaluationMode<'_>,
) -> Result<(), NetworkInvariantViolation> {
    for_each_link(network, |origin, target| {
        if origin == target {
            mode.record(NetworkInvariantViolation::SelfLoop { node: origin })
        } else {
            Ok(())
        }
    })
}

pub(super) fn check_no_duplicates(
    network: &Network,
    mode: &mut EvaluationMode<'_>,
) -> Result<(), NetworkInvariantViolation> {
    for (origin, neighbours) in network.adjacency.iter().enumerate() {
        let mut sorted = neighbours.clone();
        sorted.sort_unstable();
        for run in sorted.chunk_by(|left, right| left == right) {
            if let [target, _, ..] = run {
                mode.record(NetworkInvariantViolation::DuplicateLink {
                    origin,
                    target: *target,
                    count: run.len(),
                })?;
            }
        }
    }
    Ok(())
}

pub(super) fn check_symmetry(
    network: &Network,
    mode: &mut EvaluationMode<'_>,
) -> Result<(), NetworkInvariantViolation> {
    if tracing::enabled!(Level::TRACE) {
        trace!(links = network.link_count(), "checking link symmetry");
    }
    for_each_link(network, |origin, target| {
        let reverse = network
            .adjacency
            .get(target)
            .is_some_and(|neighbours| neighbours.contains(&origin));
        if reverse {
            Ok(())
        } else {
            debug!(origin, target, "missing backlink");
            mode.record(NetworkInvariantViolation::MissingBacklink { origin, target })
        }
    })
}

pub(super) fn check_degree_bound(
    network: &Network,
    mode: &mut EvaluationMode<'_>,
) -> Result<(), NetworkInvariantViolation> {
    let limit = network.size().saturating_sub(1);
    for (node, neighbours) in network.adjacency.iter().enumerate() {
        let degree = neighbours.len();
        if degree > limit {
            mode.record(NetworkInvariantViolation::DegreeBound {
                node,
                degree,
                limit,
            })?;
        }
    }
    Ok(())
}
