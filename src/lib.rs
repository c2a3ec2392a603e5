//! Rupture estimates
//!
//! Closed-form estimates from earthquake-rupture mechanics: nucleation sizes
//! under rate-and-state friction (Rice–Ruina, Rubin–Ampuero, Chen–Lapusta),
//! the process-zone size, a grid-resolution check for numerical models, and
//! the energy release rate of a pulse-like rupture.

pub mod config;
pub mod energy;
pub mod labeled;
pub mod modulus;
pub mod nucleation;
pub mod params;
pub mod resolution;
pub mod scenario;

use thiserror::Error;

// Re-export main types
pub use config::ScenarioConfig;
pub use energy::{effective_width, energy_release_rate, shear_wave_factor, FaultDepth};
pub use labeled::LabeledValues;
pub use modulus::{effective_shear_modulus, CrackMode};
pub use nucleation::{
    chen_lapusta, process_zone_size, rice_ruina, rubin_ampuero, NucleationEstimates,
};
pub use params::FaultParams;
pub use resolution::{
    check_resolution, max_cell_size_for, Advisory, ResolutionReport, MIN_CELLS_PER_NUCLEATION,
};
pub use scenario::{run_scenario, ScenarioReport};

#[derive(Debug, Error)]
pub enum RuptureError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("{quantity} is undefined: {reason}")]
    Domain {
        quantity: &'static str,
        reason: String,
    },
}

impl RuptureError {
    pub(crate) fn domain(quantity: &'static str, reason: impl Into<String>) -> Self {
        Self::Domain {
            quantity,
            reason: reason.into(),
        }
    }
}

/// Rejects infinite and NaN results so they never reach the caller.
pub(crate) fn ensure_finite(quantity: &'static str, value: f64) -> Result<f64, RuptureError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RuptureError::domain(
            quantity,
            format!("evaluated to non-finite value {value}"),
        ))
    }
}

/// Requires a finite, strictly positive input.
pub(crate) fn ensure_positive(quantity: &'static str, value: f64) -> Result<f64, RuptureError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(RuptureError::domain(
            quantity,
            format!("must be finite and > 0, got {value}"),
        ))
    }
}
