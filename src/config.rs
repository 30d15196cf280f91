//! Simulation parameter configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// Economic parameters of the growth model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Crowd amplification exponent on a module's contribution count
    pub gamma: f64,
    /// Depth discount exponent applied to a module's reward
    pub lambda: f64,
    /// Rate of the exponential distribution contributions are drawn from
    pub delta: f64,
    /// Depth leverage exponent inside the version function
    pub mu: f64,
    /// Reserved by the published model; stored but not consulted
    pub theta: f64,
    /// Reserved by the published model; stored but not consulted
    pub xi: f64,
}

impl SimulationParameters {
    /// Create parameters with the published defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the crowd amplification exponent
    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    /// Set the depth discount exponent
    pub fn with_lambda(mut self, lambda: f64) -> Self {
        self.lambda = lambda;
        self
    }

    /// Set the contribution distribution rate
    pub fn with_delta(mut self, delta: f64) -> Self {
        self.delta = delta;
        self
    }

    /// Set the depth leverage exponent
    pub fn with_mu(mut self, mu: f64) -> Self {
        self.mu = mu;
        self
    }

    /// Set the reserved theta field
    pub fn with_theta(mut self, theta: f64) -> Self {
        self.theta = theta;
        self
    }

    /// Set the reserved xi field
    pub fn with_xi(mut self, xi: f64) -> Self {
        self.xi = xi;
        self
    }

    /// Validate parameters, rejecting values no formula can score
    pub fn validate(&self) -> Result<()> {
        if !self.gamma.is_finite() || self.gamma < 0.0 {
            return Err(SimError::InvalidConfig(
                "gamma must be non-negative".to_string(),
            ));
        }
        if !self.lambda.is_finite() || self.lambda < 0.0 {
            return Err(SimError::InvalidConfig(
                "lambda must be non-negative".to_string(),
            ));
        }
        if !self.delta.is_finite() || self.delta <= 0.0 {
            return Err(SimError::InvalidConfig(
                "delta must be positive".to_string(),
            ));
        }
        if !self.mu.is_finite() || self.mu < 0.0 {
            return Err(SimError::InvalidConfig(
                "mu must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            gamma: 1.0,
            lambda: 1.0,
            delta: 3.0,
            mu: 0.5,
            theta: 0.5,
            xi: 2.0,
        }
    }
}
