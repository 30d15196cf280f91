//! Simulation handle and the growth step.
//!
//! A [`Simulation`] exclusively owns one tree, one parameter set, one RNG
//! stream, and one step log. Independent simulations can run side by side
//! because nothing is shared between instances. The growth step is the only
//! operation that mutates the tree; every accessor is pure.


use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::config::SimulationParameters;
use crate::contrib;
use crate::error::{Result, SimError};
use crate::history::StepLog;
use crate::reward;
use crate::select;
use crate::tree::{ModuleId, ModuleTree};

/// The effect of one growth step on the tree
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GrowthOutcome {
    /// An existing module absorbed the contribution
    Extended { id: ModuleId, alpha: f64 },
    /// A new child module was founded under `parent`
    Founded {
        parent: ModuleId,
        id: ModuleId,
        alpha: f64,
    },
}

/// One owned simulation: tree, parameters, RNG stream, and step log
pub struct Simulation {
    params: SimulationParameters,
    tree: ModuleTree,
    rng: StdRng,
    log: StepLog,
}

impl Simulation {
    /// Create a simulation seeded from OS entropy
    ///
    /// Fails if the parameters are invalid; no instance is produced in that
    /// case.
    pub fn new(params: SimulationParameters) -> Result<Self> {
        use rand::SeedableRng;
        params.validate()?;
        Ok(Self {
            params,
            tree: ModuleTree::new(),
            rng: StdRng::from_os_rng(),
            log: StepLog::new(),
        })
    }

    /// Create a reproducible simulation from a fixed seed
    pub fn with_seed(params: SimulationParameters, seed: u64) -> Result<Self> {
        use rand::SeedableRng;
        params.validate()?;
        Ok(Self {
            params,
            tree: ModuleTree::new(),
            rng: StdRng::seed_from_u64(seed),
            log: StepLog::new(),
        })
    }

    /// Execute one growth step: draw, score, select, mutate
    pub fn grow(&mut self) -> Result<GrowthOutcome> {
        let alpha = contrib::draw_one(self.params.delta, &mut self.rng)?;
        self.grow_with(alpha)
    }

    /// Execute one growth step with a caller-supplied contribution
    ///
    /// All fallible scoring happens before any mutation, so a failed step
    /// leaves the tree exactly as it was.
    pub fn grow_with(&mut self, alpha: f64) -> Result<GrowthOutcome> {
        let m = self.tree.len();
        let pref = select::preference(&self.tree, alpha, &self.params)?;
        let choice = select::sample(&pref, &mut self.rng);

        let outcome = if choice < m {
            self.tree.extend_module(choice, alpha);
            GrowthOutcome::Extended { id: choice, alpha }
        } else {
            let parent = choice - m;
            let id = self.tree.found_child(parent, alpha);
            GrowthOutcome::Founded { parent, id, alpha }
        };
        self.log.record(alpha, outcome);
        Ok(outcome)
    }

    /// Run `n` growth steps, returning their outcomes in order
    pub fn run(&mut self, n: usize) -> Result<Vec<GrowthOutcome>> {
        let mut outcomes = Vec::with_capacity(n);
        for _ in 0..n {
            outcomes.push(self.grow()?);
        }
        Ok(outcomes)
    }

    // -------------------------------------------------------------------------
    // Read-only accessors for the exploration layer
    // -------------------------------------------------------------------------

    /// The current tree
    pub fn tree(&self) -> &ModuleTree {
        &self.tree
    }

    /// The parameters this simulation was constructed with
    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    /// The log of completed steps
    pub fn history(&self) -> &StepLog {
        &self.log
    }

    /// Number of modules in the tree
    pub fn module_count(&self) -> usize {
        self.tree.len()
    }

    /// Depth of module `id`; root depth is 1
    pub fn depth(&self, id: ModuleId) -> Option<u32> {
        self.tree.depth(id)
    }

    /// Accumulated improvement of module `id`
    pub fn improvement(&self, id: ModuleId) -> Option<f64> {
        self.tree.get(id).map(|m| m.x)
    }

    /// Contribution count of module `id`
    pub fn contributions(&self, id: ModuleId) -> Option<u64> {
        self.tree.get(id).map(|m| m.c)
    }

    /// Version value of module `id` at its current improvement
    pub fn version_of(&self, id: ModuleId) -> Result<f64> {
        let module = self.tree.get(id).ok_or(SimError::ModuleNotFound(id))?;
        reward::version(module.x, module.depth, self.params.mu)
    }

    /// Reward of module `id` at its current improvement
    pub fn reward_of(&self, id: ModuleId) -> Result<f64> {
        reward::reward(&self.tree, id, &self.params)
    }

    /// The preference vector a contribution of `alpha` would be scored with
    pub fn preference(&self, alpha: f64) -> Result<Vec<f64>> {
        select::preference(&self.tree, alpha, &self.params)
    }
}
