//! Fault parameters
//!
//! Rate-and-state constants and loading state shared by the nucleation and
//! process-zone estimators.

use serde::{Deserialize, Serialize};

use crate::{ensure_positive, RuptureError};

/// Frictional and loading parameters of a fault patch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaultParams {
    /// Direct-effect parameter a
    pub a: f64,
    /// Evolution-effect parameter b (velocity weakening requires b > a)
    pub b: f64,
    /// Characteristic slip distance L [m]
    pub dc: f64,
    /// Effective normal stress sigma [Pa]
    pub sigma_n: f64,
}

impl FaultParams {
    /// Create new fault parameters
    pub fn new(a: f64, b: f64, dc: f64, sigma_n: f64) -> Self {
        Self { a, b, dc, sigma_n }
    }

    /// Velocity-weakening margin b - a, which must be strictly positive.
    pub fn weakening(&self) -> Result<f64, RuptureError> {
        if !(self.a.is_finite() && self.b.is_finite()) {
            return Err(RuptureError::domain(
                "b - a",
                format!("a and b must be finite, got a={} b={}", self.a, self.b),
            ));
        }
        let margin = self.b - self.a;
        if margin <= 0.0 {
            return Err(RuptureError::domain(
                "b - a",
                format!(
                    "requires b > a (velocity weakening), got a={} b={}",
                    self.a, self.b
                ),
            ));
        }
        Ok(margin)
    }

    /// Checks the inputs shared by every estimator: L > 0 and sigma > 0.
    pub(crate) fn loading(&self) -> Result<(f64, f64), RuptureError> {
        let dc = ensure_positive("characteristic slip distance", self.dc)?;
        let sigma_n = ensure_positive("effective normal stress", self.sigma_n)?;
        Ok((dc, sigma_n))
    }
}

impl Default for FaultParams {
    fn default() -> Self {
        Self {
            a: 0.003,
            b: 0.006,
            dc: 1.0e-3,
            sigma_n: 20.0e6,
        }
    }
}
