//! Effective shear modulus per crack mode
//!
//! Anti-plane (Mode III) ruptures see the bare shear modulus; in-plane
//! (Mode II) ruptures see the stiffer mu / (1 - nu).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ensure_finite, ensure_positive, RuptureError};

/// Loading configuration of the rupture. Mode I does not apply to shear faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrackMode {
    /// In-plane shear
    #[serde(rename = "II")]
    II,
    /// Anti-plane shear
    #[serde(rename = "III")]
    III,
}

impl CrackMode {
    pub const ALL: [CrackMode; 2] = [CrackMode::II, CrackMode::III];

    /// Suffix used in scenario labels, e.g. `modeII`.
    pub fn label(self) -> &'static str {
        match self {
            CrackMode::II => "modeII",
            CrackMode::III => "modeIII",
        }
    }
}

impl fmt::Display for CrackMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrackMode::II => f.write_str("II"),
            CrackMode::III => f.write_str("III"),
        }
    }
}

impl FromStr for CrackMode {
    type Err = RuptureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "II" => Ok(CrackMode::II),
            "III" => Ok(CrackMode::III),
            other => Err(RuptureError::InvalidArgument(format!(
                "unrecognized crack mode {other:?}, expected \"II\" or \"III\""
            ))),
        }
    }
}

/// Effective shear modulus mu* [Pa].
///
/// `nu` is required for Mode II and ignored for Mode III.
pub fn effective_shear_modulus(
    mode: CrackMode,
    mu: f64,
    nu: Option<f64>,
) -> Result<f64, RuptureError> {
    ensure_positive("shear modulus", mu)?;

    match mode {
        CrackMode::III => Ok(mu),
        CrackMode::II => {
            let nu = nu.ok_or_else(|| {
                RuptureError::InvalidArgument(
                    "Poisson's ratio is required for Mode II".to_string(),
                )
            })?;
            if !nu.is_finite() {
                return Err(RuptureError::InvalidArgument(format!(
                    "Poisson's ratio must be finite, got {nu}"
                )));
            }
            if nu == 1.0 {
                return Err(RuptureError::domain(
                    "Mode II effective shear modulus",
                    "Poisson's ratio of 1 makes 1 - nu zero",
                ));
            }
            if !(-1.0..0.5).contains(&nu) {
                tracing::warn!(nu, "Poisson's ratio outside the conventional range [-1, 0.5)");
            }

            ensure_finite("Mode II effective shear modulus", mu / (1.0 - nu))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mode_iii_ignores_poisson_ratio() {
        assert_eq!(effective_shear_modulus(CrackMode::III, 2.0e10, None).unwrap(), 2.0e10);
        assert_eq!(
            effective_shear_modulus(CrackMode::III, 2.0e10, Some(0.45)).unwrap(),
            2.0e10
        );
    }

    #[test]
    fn mode_ii_stiffens_by_poisson_ratio() {
        let mu_star = effective_shear_modulus(CrackMode::II, 2.0e10, Some(0.2)).unwrap();
        assert_relative_eq!(mu_star, 2.5e10, max_relative = 1e-12);
    }

    #[test]
    fn mode_ii_without_poisson_ratio_is_invalid() {
        let err = effective_shear_modulus(CrackMode::II, 2.0e10, None).unwrap_err();
        assert!(matches!(err, RuptureError::InvalidArgument(_)));
    }

    #[test]
    fn poisson_ratio_of_one_is_a_domain_error() {
        let err = effective_shear_modulus(CrackMode::II, 2.0e10, Some(1.0)).unwrap_err();
        assert!(matches!(err, RuptureError::Domain { .. }));
    }

    #[test]
    fn non_positive_modulus_is_rejected() {
        for mu in [0.0, -1.0, f64::NAN] {
            let err = effective_shear_modulus(CrackMode::III, mu, None).unwrap_err();
            assert!(matches!(err, RuptureError::Domain { .. }));
        }
    }

    #[test]
    fn parses_known_modes() {
        assert_eq!("II".parse::<CrackMode>().unwrap(), CrackMode::II);
        assert_eq!("III".parse::<CrackMode>().unwrap(), CrackMode::III);
    }

    #[test]
    fn unknown_mode_string_is_invalid_argument() {
        for raw in ["I", "IV", "", "mode2", "2", "3", " III ", "ii"] {
            let err = raw.parse::<CrackMode>().unwrap_err();
            assert!(matches!(err, RuptureError::InvalidArgument(_)), "{raw}");
        }
    }
}
