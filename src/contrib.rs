//! Contribution sampling.
//!
//! Contribution magnitudes are exponentially distributed with rate `delta`,
//! drawn by inverse-CDF: `alpha = -(1/delta) * ln(1 - rho)` for uniform
//! `rho` in `[0, 1)`.

use rand::Rng;

use crate::error::{Result, SimError};

/// Draw `n` independent contribution magnitudes with rate `delta`
pub fn draw<R: Rng>(n: usize, delta: f64, rng: &mut R) -> Result<Vec<f64>> {
    if !delta.is_finite() || delta <= 0.0 {
        return Err(SimError::InvalidConfig(format!(
            "delta must be positive, got {delta}"
        )));
    }
    let mut samples = Vec::with_capacity(n);
    for _ in 0..n {
        let rho: f64 = rng.random();
        samples.push(-(1.0 - rho).ln() / delta);
    }
    Ok(samples)
}

/// Draw the single contribution for one tick
pub fn draw_one<R: Rng>(delta: f64, rng: &mut R) -> Result<f64> {
    Ok(draw(1, delta, rng)?[0])
}
