//! Stochastic growth simulator for trees of interdependent modules.
//!
//! Models incentive-driven development of a module ecosystem: each tick a
//! random contribution magnitude is drawn, every existing module and every
//! prospective child module is scored by an economic reward function, and
//! one target is chosen in proportion to its expected marginal reward —
//! either deepening an existing module or founding a new one.
//!
//! - **`tree`**: append-only arena of module records with cached depths
//! - **`reward`**: pure scoring functions (version value, reward, marginals)
//! - **`select`**: preference normalization and categorical sampling
//! - **`contrib`**: exponential contribution sampling
//! - **`sim`**: the owning simulation handle and its growth step
//! - **`history`**: per-step records for post-hoc inspection
//!
//! # Toyota Way Principles
//!
//! - **Jidoka**: invalid parameters stop construction instead of being clamped
//! - **Genchi Genbutsu**: every step is recorded so runs can be inspected
//!
//! # Example
//!
//! ```
//! use crecer::{Simulation, SimulationParameters};
//!
//! # fn main() -> crecer::Result<()> {
//! let params = SimulationParameters::default().with_gamma(0.5);
//! let mut sim = Simulation::with_seed(params, 42)?;
//! for _ in 0..100 {
//!     sim.grow()?;
//! }
//! assert!(sim.module_count() >= 1);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod contrib;
pub mod error;
pub mod history;
pub mod reward;
pub mod select;
pub mod sim;
pub mod tree;

pub use config::SimulationParameters;
pub use error::{Result, SimError};
pub use history::{StepLog, StepRecord};
pub use sim::{GrowthOutcome, Simulation};
pub use tree::{Module, ModuleId, ModuleTree};
