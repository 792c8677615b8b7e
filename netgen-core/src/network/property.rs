//! Property-based checks for the link store and the wiring pass.

use proptest::prelude::*;
use test_strategy::Arbitrary;

use super::Network;
use crate::{random::SeededRandom, test_utils::suite_proptest_config};

/// Random network configuration fed to the wiring properties.
#[derive(Clone, Debug, Arbitrary)]
struct ConnectScenario {
    #[strategy(0_usize..48)]
    node_count: usize,
    #[strategy(0.0_f64..8.0)]
    mean_degree: f64,
    seed: u64,
}

impl ConnectScenario {
    fn build(&self) -> (Network, usize) {
        let mut rng = SeededRandom::new(self.seed);
        let mut network = Network::new();
        network.resize(self.node_count, &mut rng);
        let total = network
            .random_connect(self.mean_degree, &mut rng)
            .expect("strategy only yields valid mean degrees");
        (network, total)
    }
}

/// Arbitrary sequence of link requests, some of them invalid.
#[derive(Clone, Debug, Arbitrary)]
struct LinkRequests {
    #[strategy(1_usize..16)]
    node_count: usize,
    #[strategy(proptest::collection::vec((0_usize..20, 0_usize..20), 0..64))]
    requests: Vec<(usize, usize)>,
}

fn assert_partition(network: &Network) -> Result<(), TestCaseError> {
    for node in 0..network.size() {
        let neighbors = network.neighbors(node).expect("node in range");
        let possible = network.possible_neighbors(node).expect("node in range");
        for other in (0..network.size()).filter(|&other| other != node) {
            let linked = neighbors.contains(&other);
            let candidate = possible.contains(&other);
            prop_assert!(
                linked ^ candidate,
                "node {} must be exactly one of neighbour/candidate of {}",
                other,
                node
            );
        }
        prop_assert!(!possible.contains(&node));
        prop_assert!(possible.windows(2).all(|pair| pair[0] < pair[1]));
    }
    Ok(())
}

proptest! {
    #![proptest_config(suite_proptest_config(64))]

    #[test]
    fn wiring_preserves_structural_invariants(scenario: ConnectScenario) {
        let (network, _) = scenario.build();
        prop_assert!(network.invariants().check_all().is_ok());
        let limit = scenario.node_count.saturating_sub(1);
        for node in 0..network.size() {
            prop_assert!(network.degree(node).expect("node in range") <= limit);
        }
    }

    #[test]
    fn wiring_partitions_every_neighbourhood(scenario: ConnectScenario) {
        let (network, _) = scenario.build();
        assert_partition(&network)?;
    }

    #[test]
    fn wiring_is_reproducible(scenario: ConnectScenario) {
        prop_assert_eq!(scenario.build(), scenario.build());
    }

    #[test]
    fn requested_total_bounds_realised_links(scenario: ConnectScenario) {
        let (network, total) = scenario.build();
        // Every link made by node v was counted in v's target.
        prop_assert!(network.link_count() <= total);
    }

    #[test]
    fn zero_mean_degree_adds_nothing(node_count in 0_usize..64, seed: u64) {
        let mut rng = SeededRandom::new(seed);
        let mut network = Network::new();
        network.resize(node_count, &mut rng);
        prop_assert_eq!(network.random_connect(0.0, &mut rng), Ok(0));
        prop_assert_eq!(network.link_count(), 0);
    }

    #[test]
    fn add_link_keeps_the_store_consistent(plan: LinkRequests) {
        let mut network = Network::new();
        network.resize(plan.node_count, &mut SeededRandom::new(0));
        for &(a, b) in &plan.requests {
            let before = network.link_count();
            let was_linked = network.is_linked(a, b);
            let added = network.add_link(a, b);
            let valid = a != b && a < plan.node_count && b < plan.node_count;
            prop_assert_eq!(added, valid && !was_linked);
            prop_assert_eq!(network.link_count(), before + usize::from(added));
            prop_assert!(!network.add_link(a, b));
        }
        prop_assert!(network.invariants().check_all().is_ok());
        assert_partition(&network)?;
    }

    #[test]
    fn sorted_values_permute_the_store(node_count in 0_usize..64, seed: u64) {
        let mut network = Network::new();
        network.resize(node_count, &mut SeededRandom::new(seed));
        let sorted = network.sorted_values();
        prop_assert!(sorted.windows(2).all(|pair| pair[0] >= pair[1]));
        let mut expected = network.values().to_vec();
        expected.sort_unstable_by(f64::total_cmp);
        let mut actual = sorted.clone();
        actual.reverse();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn resize_resets_every_store(first in 0_usize..32, second in 0_usize..32, seed: u64) {
        let mut rng = SeededRandom::new(seed);
        let mut network = Network::new();
        network.resize(first, &mut rng);
        network.random_connect(2.0, &mut rng).expect("mean degree is valid");
        network.resize(second, &mut rng);
        prop_assert_eq!(network.size(), second);
        prop_assert_eq!(network.values().len(), second);
        prop_assert_eq!(network.link_count(), 0);
    }
}
