//! Selection engine: normalized preferences over growth outcomes.
//!
//! Turns raw reward values into a categorical distribution over the `2m`
//! possible outcomes of a tick — extend one of the `m` existing modules, or
//! found a new child under one of them — and draws one outcome from it.


use rand::Rng;

use crate::config::SimulationParameters;
use crate::error::{Result, SimError};
use crate::reward::{marginal_reward, virtual_reward};
use crate::tree::ModuleTree;

/// Preference vector over growth outcomes for contribution `alpha`
///
/// Entries `[0, m)` weight extending existing module `i`; entries `[m, 2m)`
/// weight founding a new child under module `i - m`, both in id order. The
/// vector is normalized to sum to 1. A total reward mass that is zero,
/// negative, or non-finite cannot be sampled and is rejected.
pub fn preference(
    tree: &ModuleTree,
    alpha: f64,
    params: &SimulationParameters,
) -> Result<Vec<f64>> {
    let m = tree.len();
    let mut weights = Vec::with_capacity(2 * m);
    for module in tree.iter() {
        weights.push(marginal_reward(tree, module.id, alpha, params)?);
    }
    for module in tree.iter() {
        weights.push(virtual_reward(tree, module.id, alpha, params)?);
    }

    let total: f64 = weights.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return Err(SimError::DegenerateSelection { total });
    }
    for w in &mut weights {
        *w /= total;
    }
    Ok(weights)
}

/// Draw one outcome index from a normalized preference vector
///
/// Cumulative-sum inversion of a single uniform draw; floating residue
/// falls through to the last index.
pub fn sample<R: Rng>(pref: &[f64], rng: &mut R) -> usize {
    let r: f64 = rng.random();
    let mut cumsum = 0.0;
    for (i, &w) in pref.iter().enumerate() {
        cumsum += w;
        if r < cumsum {
            return i;
        }
    }
    pref.len() - 1
}
