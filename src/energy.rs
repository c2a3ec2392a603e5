//! Energy release rate of a pulse-like rupture
//!
//! Gc = G0 (1 - vr_dot W' / (vs^2 alpha_s^3)), where W' = gamma W is the
//! effective seismogenic width and alpha_s = sqrt(1 - vr^2 / vs^2).

use std::f64::consts::FRAC_1_PI;
use std::f64::consts::FRAC_2_PI;

use serde::{Deserialize, Serialize};

use crate::{ensure_finite, ensure_positive, RuptureError};

/// Depth regime of the fault, which fixes the width coefficient gamma.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FaultDepth {
    /// Buried fault: gamma in [1/pi, 2/pi]
    Buried { gamma: f64 },
    /// Fault reaching the free surface: gamma = 2/pi
    #[default]
    Shallow,
}

impl FaultDepth {
    pub fn gamma(&self) -> Result<f64, RuptureError> {
        match *self {
            FaultDepth::Shallow => Ok(FRAC_2_PI),
            FaultDepth::Buried { gamma } => {
                if (FRAC_1_PI..=FRAC_2_PI).contains(&gamma) {
                    Ok(gamma)
                } else {
                    Err(RuptureError::InvalidArgument(format!(
                        "buried-fault gamma must lie in [1/pi, 2/pi], got {gamma}"
                    )))
                }
            }
        }
    }
}

/// Effective width W' = gamma W [m].
pub fn effective_width(width: f64, depth: FaultDepth) -> Result<f64, RuptureError> {
    let width = ensure_positive("seismogenic width", width)?;
    Ok(depth.gamma()? * width)
}

/// Relativistic-like shear factor alpha_s = sqrt(1 - vr^2 / vs^2) for a
/// rupture speed `vr` in [0, vs).
pub fn shear_wave_factor(vr: f64, vs: f64) -> Result<f64, RuptureError> {
    let vs = ensure_positive("shear-wave speed", vs)?;
    if !(vr.is_finite() && (0.0..vs).contains(&vr)) {
        return Err(RuptureError::domain(
            "shear-wave factor",
            format!("rupture speed must lie in [0, vs={vs}), got {vr}"),
        ));
    }
    let ratio = vr / vs;
    Ok((1.0 - ratio * ratio).sqrt())
}

/// Critical energy release rate Gc [J/m^2].
///
/// `vr_dot` is the rupture acceleration [m/s^2] and `w_prime` the effective
/// width from [`effective_width`].
pub fn energy_release_rate(
    g0: f64,
    vr_dot: f64,
    w_prime: f64,
    vs: f64,
    alpha_s: f64,
) -> Result<f64, RuptureError> {
    for (name, value) in [
        ("static energy release rate", g0),
        ("rupture acceleration", vr_dot),
        ("effective width", w_prime),
    ] {
        if !value.is_finite() {
            return Err(RuptureError::InvalidArgument(format!(
                "{name} must be finite, got {value}"
            )));
        }
    }
    let vs = ensure_positive("shear-wave speed", vs)?;
    if alpha_s == 0.0 || !alpha_s.is_finite() {
        return Err(RuptureError::domain(
            "energy release rate",
            format!("alpha_s must be finite and non-zero, got {alpha_s}"),
        ));
    }

    let reduction = vr_dot * w_prime / (vs * vs * alpha_s.powi(3));
    ensure_finite("energy release rate", g0 * (1.0 - reduction))
}
