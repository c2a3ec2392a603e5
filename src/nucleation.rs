//! Nucleation-size and process-zone estimators
//!
//! All lengths are in meters. Each estimator takes the effective shear
//! modulus mu* already resolved for the crack mode (see [`crate::modulus`]).

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::modulus::{effective_shear_modulus, CrackMode};
use crate::params::FaultParams;
use crate::{ensure_finite, ensure_positive, RuptureError};

/// Rice–Ruina (1983) linear-stability estimate:
/// h = (pi/4) mu* L / ((b - a) sigma).
pub fn rice_ruina(mu_star: f64, params: &FaultParams) -> Result<f64, RuptureError> {
    let mu_star = ensure_positive("effective shear modulus", mu_star)?;
    let margin = params.weakening()?;
    let (dc, sigma_n) = params.loading()?;

    ensure_finite(
        "Rice-Ruina nucleation size",
        PI / 4.0 * mu_star * dc / (margin * sigma_n),
    )
}

/// Rubin–Ampuero (2005) aging-law estimate:
/// h = (2/pi) mu* b L / ((b - a)^2 sigma).
pub fn rubin_ampuero(mu_star: f64, params: &FaultParams) -> Result<f64, RuptureError> {
    let mu_star = ensure_positive("effective shear modulus", mu_star)?;
    let margin = params.weakening()?;
    let (dc, sigma_n) = params.loading()?;
    let b = ensure_positive("evolution-effect parameter b", params.b)?;

    ensure_finite(
        "Rubin-Ampuero nucleation size",
        2.0 / PI * mu_star * b * dc / (margin * margin * sigma_n),
    )
}

/// Chen–Lapusta (2009) scaling of the Rubin–Ampuero length: h = (pi^2/4) h_RA.
pub fn chen_lapusta(h_rubin_ampuero: f64) -> Result<f64, RuptureError> {
    let h_ra = ensure_positive("Rubin-Ampuero nucleation size", h_rubin_ampuero)?;
    ensure_finite("Chen-Lapusta nucleation size", PI * PI / 4.0 * h_ra)
}

/// Process-zone size Pz = mu* L / (b sigma).
///
/// Only defined for a velocity-weakening patch, so b = a is rejected like the
/// nucleation estimators.
pub fn process_zone_size(mu_star: f64, params: &FaultParams) -> Result<f64, RuptureError> {
    let mu_star = ensure_positive("effective shear modulus", mu_star)?;
    params.weakening()?;
    let (dc, sigma_n) = params.loading()?;
    let b = ensure_positive("evolution-effect parameter b", params.b)?;

    ensure_finite("process-zone size", mu_star * dc / (b * sigma_n))
}

/// Every length estimate for one crack mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NucleationEstimates {
    pub mode: CrackMode,
    pub mu_star: f64,
    pub rice_ruina: f64,
    pub rubin_ampuero: f64,
    pub chen_lapusta: f64,
    pub process_zone: f64,
}

impl NucleationEstimates {
    pub fn for_mode(
        mode: CrackMode,
        mu: f64,
        nu: Option<f64>,
        params: &FaultParams,
    ) -> Result<Self, RuptureError> {
        let mu_star = effective_shear_modulus(mode, mu, nu)?;
        let h_rr = rice_ruina(mu_star, params)?;
        let h_ra = rubin_ampuero(mu_star, params)?;
        let h_cl = chen_lapusta(h_ra)?;
        let pz = process_zone_size(mu_star, params)?;

        tracing::debug!(
            %mode,
            mu_star,
            h_rr,
            h_ra,
            h_cl,
            pz,
            "computed nucleation estimates"
        );

        Ok(Self {
            mode,
            mu_star,
            rice_ruina: h_rr,
            rubin_ampuero: h_ra,
            chen_lapusta: h_cl,
            process_zone: pz,
        })
    }
}
