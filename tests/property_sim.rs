//! Property tests for the growth simulator.
//!
//! Ensures the model's mathematical invariants survive arbitrary inputs:
//! - Version value non-decreasing in improvement, zero at zero
//! - Preference vectors normalized to probability distributions
//! - Tree invariants preserved by every growth-step sequence

use crecer::{reward, GrowthOutcome, ModuleTree, Simulation, SimulationParameters};
use proptest::prelude::*;

// =============================================================================
// Strategy Helpers
// =============================================================================

/// Valid model parameters over a range wide enough to matter
fn valid_params() -> impl Strategy<Value = SimulationParameters> {
    (0.0..3.0f64, 0.0..3.0f64, 0.2..5.0f64, 0.0..3.0f64).prop_map(
        |(gamma, lambda, delta, mu)| {
            SimulationParameters::default()
                .with_gamma(gamma)
                .with_lambda(lambda)
                .with_delta(delta)
                .with_mu(mu)
        },
    )
}

fn check_tree_invariants(tree: &ModuleTree) {
    for (index, module) in tree.iter().enumerate() {
        assert_eq!(module.id, index);
        assert!(module.x >= 0.0 && module.x.is_finite());
        assert!(module.depth >= 1);
        match module.parent {
            None => assert_eq!(module.id, 0),
            Some(parent) => {
                assert!(parent < module.id);
                assert_eq!(module.depth, tree.depth(parent).unwrap() + 1);
                assert!(module.c >= 1, "a founded module carries its seed contribution");
            }
        }
    }
}

// =============================================================================
// Version Function Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn prop_version_zero_improvement_is_zero(d in 1u32..100, mu in 0.0..4.0f64) {
        prop_assert_eq!(reward::version(0.0, d, mu).unwrap(), 0.0);
    }

    #[test]
    fn prop_version_non_decreasing_in_improvement(
        a in 0.0..1e6f64,
        b in 0.0..1e6f64,
        d in 1u32..100,
        mu in 0.0..4.0f64,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let v_lo = reward::version(lo, d, mu).unwrap();
        let v_hi = reward::version(hi, d, mu).unwrap();
        prop_assert!(v_hi >= v_lo, "version({hi}) = {v_hi} < version({lo}) = {v_lo}");
    }

    #[test]
    fn prop_version_is_finite_and_non_negative(
        x in 0.0..1e9f64,
        d in 1u32..1000,
        mu in 0.0..4.0f64,
    ) {
        let v = reward::version(x, d, mu).unwrap();
        prop_assert!(v.is_finite());
        prop_assert!(v >= 0.0);
    }
}

// =============================================================================
// Pipeline Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_preference_is_a_probability_distribution(
        params in valid_params(),
        seed in any::<u64>(),
        steps in 0usize..25,
        alpha in 0.01..10.0f64,
    ) {
        let mut sim = Simulation::with_seed(params, seed).unwrap();
        sim.run(steps).unwrap();

        let pref = sim.preference(alpha).unwrap();
        prop_assert_eq!(pref.len(), 2 * sim.module_count());
        prop_assert!(pref.iter().all(|&w| (0.0..=1.0).contains(&w) && w.is_finite()));

        let total: f64 = pref.iter().sum();
        prop_assert!((total - 1.0).abs() < 1e-9, "preference sums to {total}");
    }

    #[test]
    fn prop_tree_invariants_survive_any_run(
        params in valid_params(),
        seed in any::<u64>(),
        steps in 0usize..40,
    ) {
        let mut sim = Simulation::with_seed(params, seed).unwrap();
        let outcomes = sim.run(steps).unwrap();

        check_tree_invariants(sim.tree());
        prop_assert_eq!(sim.history().len(), steps);

        let founded = outcomes
            .iter()
            .filter(|o| matches!(o, GrowthOutcome::Founded { .. }))
            .count();
        prop_assert_eq!(sim.module_count(), 1 + founded);
    }

    #[test]
    fn prop_rewards_stay_non_negative_over_a_run(
        params in valid_params(),
        seed in any::<u64>(),
        steps in 1usize..30,
    ) {
        let mut sim = Simulation::with_seed(params, seed).unwrap();
        sim.run(steps).unwrap();

        for module in sim.tree().iter() {
            let r = sim.reward_of(module.id).unwrap();
            prop_assert!(r >= 0.0 && r.is_finite(), "reward of m{} is {r}", module.id);
        }
    }
}
