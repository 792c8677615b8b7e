//! Shared test utilities for `netgen-core`.

use std::collections::VecDeque;

use netgen_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::random::RandomSource;

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `NETGEN_PBT_CASES` and
/// `NETGEN_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// [`RandomSource`] replaying scripted draws.
///
/// Poisson and uniform draws pop from their queues; an exhausted queue yields
/// zero for Poisson and `low` for uniform draws. Normal draws return
/// `mean + std_dev * k` for a counter `k` starting at zero, so resized values
/// are distinct and predictable. Every uniform request is logged.
#[derive(Clone, Debug, Default)]
pub(crate) struct ScriptedSource {
    poisson: VecDeque<u64>,
    uniform: VecDeque<usize>,
    normal_calls: u32,
    pub(crate) uniform_requests: Vec<(usize, usize)>,
    pub(crate) poisson_rates: Vec<f64>,
}

impl ScriptedSource {
    pub(crate) fn new(
        poisson: impl IntoIterator<Item = u64>,
        uniform: impl IntoIterator<Item = usize>,
    ) -> Self {
        Self {
            poisson: poisson.into_iter().collect(),
            uniform: uniform.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl RandomSource for ScriptedSource {
    fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        let step = f64::from(self.normal_calls);
        self.normal_calls += 1;
        mean + std_dev * step
    }

    fn poisson(&mut self, rate: f64) -> u64 {
        self.poisson_rates.push(rate);
        self.poisson.pop_front().unwrap_or(0)
    }

    fn uniform_int(&mut self, low: usize, high: usize) -> usize {
        self.uniform_requests.push((low, high));
        self.uniform.pop_front().unwrap_or(low)
    }
}
