//! Reward model: pure scoring functions over the module tree.
//!
//! Implements the economic reward function of the growth model. All
//! functions here are pure and side-effect-free; the simulation calls them
//! to score both actual state and hypothetical state (an existing module
//! after absorbing a contribution, or a child module that does not exist
//! yet). Inputs are validated up front so domain violations surface as
//! errors instead of NaN propagating through the preference vector.


use crate::config::SimulationParameters;
use crate::error::{Result, SimError};
use crate::tree::{ModuleId, ModuleTree};

/// Effective value of accumulated improvement `x` at depth `d`
///
/// `version(x, d, mu) = ln(1 + x * d^mu)`. Zero improvement has zero value
/// at any depth; deeper modules leverage the same improvement more when
/// `mu > 0`.
pub fn version(x: f64, d: u32, mu: f64) -> Result<f64> {
    if !x.is_finite() || x < 0.0 {
        return Err(SimError::NumericDomain(format!(
            "improvement must be finite and non-negative, got {x}"
        )));
    }
    if d == 0 {
        return Err(SimError::NumericDomain(
            "module depth must be at least 1".to_string(),
        ));
    }
    if !mu.is_finite() || mu < 0.0 {
        return Err(SimError::NumericDomain(format!(
            "mu must be finite and non-negative, got {mu}"
        )));
    }
    let arg = 1.0 + x * f64::from(d).powf(mu);
    if arg <= 0.0 {
        return Err(SimError::NumericDomain(format!(
            "logarithm argument must be positive, got {arg}"
        )));
    }
    Ok(arg.ln())
}

/// Reward of module `id` evaluated at a hypothetical improvement `x`
///
/// `version(x, depth, mu) * depth^(-lambda) * (1 + c)^gamma`, with the
/// module's stored contribution count.
pub fn reward_at(
    tree: &ModuleTree,
    id: ModuleId,
    x: f64,
    params: &SimulationParameters,
) -> Result<f64> {
    let module = tree.get(id).ok_or(SimError::ModuleNotFound(id))?;
    let d = f64::from(module.depth);
    let v = version(x, module.depth, params.mu)?;
    Ok(v * d.powf(-params.lambda) * (1.0 + module.c as f64).powf(params.gamma))
}

/// Reward of module `id` at its current improvement
pub fn reward(tree: &ModuleTree, id: ModuleId, params: &SimulationParameters) -> Result<f64> {
    let module = tree.get(id).ok_or(SimError::ModuleNotFound(id))?;
    reward_at(tree, id, module.x, params)
}

/// Expected gain from investing contribution `alpha` into existing module `id`
pub fn marginal_reward(
    tree: &ModuleTree,
    id: ModuleId,
    alpha: f64,
    params: &SimulationParameters,
) -> Result<f64> {
    let module = tree.get(id).ok_or(SimError::ModuleNotFound(id))?;
    Ok(reward_at(tree, id, module.x + alpha, params)? - reward_at(tree, id, module.x, params)?)
}

/// Expected value of founding a new child of `id` seeded with `alpha`
///
/// The prospective child is scored one level below its parent with no crowd
/// factor; the model omits `(1 + c)^gamma` for modules that do not exist
/// yet, although a founded module is then created with `c = 1`.
pub fn virtual_reward(
    tree: &ModuleTree,
    id: ModuleId,
    alpha: f64,
    params: &SimulationParameters,
) -> Result<f64> {
    let module = tree.get(id).ok_or(SimError::ModuleNotFound(id))?;
    let child_depth = module.depth + 1;
    let v = version(alpha, child_depth, params.mu)?;
    Ok(v * f64::from(child_depth).powf(-params.lambda))
}
