//! Worked scenario
//!
//! Evaluates every estimate for both crack modes from one [`ScenarioConfig`]
//! and collects the labeled results, their extrema, the grid-resolution check
//! and the energy release rate.

use serde::{Deserialize, Serialize};

use crate::config::ScenarioConfig;
use crate::energy::{effective_width, energy_release_rate, shear_wave_factor};
use crate::labeled::LabeledValues;
use crate::modulus::CrackMode;
use crate::nucleation::NucleationEstimates;
use crate::resolution::{check_resolution, ResolutionReport};
use crate::RuptureError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extremum {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyReleaseSummary {
    pub gamma: f64,
    pub w_prime: f64,
    pub alpha_s: f64,
    pub gc: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub modes: Vec<NucleationEstimates>,
    /// `h_RR_*`, `h_RA_*` and `h_*` (Chen–Lapusta) for both modes
    pub nucleation: LabeledValues,
    pub nucleation_min: Extremum,
    pub nucleation_max: Extremum,
    pub process_zone: LabeledValues,
    pub resolution: ResolutionReport,
    pub energy: EnergyReleaseSummary,
}

impl ScenarioReport {
    pub fn estimates(&self, mode: CrackMode) -> Option<&NucleationEstimates> {
        self.modes.iter().find(|est| est.mode == mode)
    }
}

pub fn nucleation_labels(est: &NucleationEstimates) -> [(String, f64); 3] {
    let suffix = est.mode.label();
    [
        (format!("h_RR_{suffix}"), est.rice_ruina),
        (format!("h_RA_{suffix}"), est.rubin_ampuero),
        (format!("h_{suffix}"), est.chen_lapusta),
    ]
}

fn extremum(found: Option<(&str, f64)>) -> Result<Extremum, RuptureError> {
    found
        .map(|(label, value)| Extremum {
            label: label.to_string(),
            value,
        })
        .ok_or_else(|| RuptureError::InvalidArgument("scenario produced no estimates".to_string()))
}

pub fn run_scenario(config: &ScenarioConfig) -> Result<ScenarioReport, RuptureError> {
    config.validate()?;
    let params = config.fault_params();

    let mut modes = Vec::with_capacity(CrackMode::ALL.len());
    let mut nucleation = LabeledValues::new();
    let mut process_zone = LabeledValues::new();

    for mode in CrackMode::ALL {
        let est = NucleationEstimates::for_mode(mode, config.mu, Some(config.nu), &params)?;
        for (label, value) in nucleation_labels(&est) {
            nucleation.insert(label, value);
        }
        process_zone.insert(format!("Pz_{}", mode.label()), est.process_zone);
        modes.push(est);
    }

    let nucleation_min = extremum(nucleation.min())?;
    let nucleation_max = extremum(nucleation.max())?;
    let resolution = check_resolution(&nucleation, config.grid_size_max)?;

    let gamma = config.depth.gamma()?;
    let w_prime = effective_width(config.width, config.depth)?;
    let alpha_s = shear_wave_factor(config.vr, config.vs)?;
    let gc = energy_release_rate(config.g0, config.vr_dot, w_prime, config.vs, alpha_s)?;

    tracing::info!(
        min = nucleation_min.value,
        max = nucleation_max.value,
        min_ratio = resolution.min_ratio,
        gc,
        "scenario evaluated"
    );

    Ok(ScenarioReport {
        modes,
        nucleation,
        nucleation_min,
        nucleation_max,
        process_zone,
        resolution,
        energy: EnergyReleaseSummary {
            gamma,
            w_prime,
            alpha_s,
            gc,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_scenario_has_six_labeled_estimates() {
        let report = run_scenario(&ScenarioConfig::default()).unwrap();
        let labels: Vec<&str> = report.nucleation.iter().map(|(label, _)| label).collect();
        assert_eq!(
            labels,
            [
                "h_RA_modeII",
                "h_RA_modeIII",
                "h_RR_modeII",
                "h_RR_modeIII",
                "h_modeII",
                "h_modeIII"
            ]
        );
    }

    #[test]
    fn default_scenario_extrema() {
        let report = run_scenario(&ScenarioConfig::default()).unwrap();
        assert_eq!(report.nucleation_min.label, "h_RR_modeIII");
        assert_relative_eq!(report.nucleation_min.value, 261.799_387_799_149_4, max_relative = 1e-9);
        assert_eq!(report.nucleation_max.label, "h_modeII");
        assert_relative_eq!(report.nucleation_max.value, 1308.996_938_995_747, max_relative = 1e-9);
    }

    #[test]
    fn default_grid_is_adequate() {
        let report = run_scenario(&ScenarioConfig::default()).unwrap();
        assert_relative_eq!(report.resolution.min_ratio, 3.079_992_797_637_052, max_relative = 1e-9);
        assert_relative_eq!(report.resolution.max_ratio, 15.399_963_988_185_26, max_relative = 1e-9);
        assert!(report.resolution.is_adequate());
    }

    #[test]
    fn coarse_grid_raises_advisory_without_failing() {
        let config = ScenarioConfig {
            grid_size_max: 100.0,
            ..Default::default()
        };
        let report = run_scenario(&config).unwrap();
        assert!(!report.resolution.is_adequate());
    }

    #[test]
    fn process_zones_per_mode() {
        let report = run_scenario(&ScenarioConfig::default()).unwrap();
        assert_relative_eq!(
            report.process_zone.get("Pz_modeII").unwrap(),
            208.333_333_333_333_3,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            report.process_zone.get("Pz_modeIII").unwrap(),
            166.666_666_666_666_7,
            max_relative = 1e-9
        );
    }

    #[test]
    fn steady_rupture_energy_is_static() {
        let report = run_scenario(&ScenarioConfig::default()).unwrap();
        assert_eq!(report.energy.gc, 1.0);
        assert_relative_eq!(report.energy.alpha_s, 0.6, max_relative = 1e-12);
    }

    #[test]
    fn invalid_config_aborts() {
        let config = ScenarioConfig {
            sigma_n: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            run_scenario(&config),
            Err(RuptureError::Domain { .. })
        ));
    }

    #[test]
    fn equal_friction_parameters_abort_with_domain_error() {
        let config = ScenarioConfig {
            a: 0.006,
            ..Default::default()
        };
        assert!(matches!(
            run_scenario(&config),
            Err(RuptureError::Domain { quantity: "b - a", .. })
        ));
    }

    #[test]
    fn report_lookup_by_mode() {
        let report = run_scenario(&ScenarioConfig::default()).unwrap();
        assert_eq!(report.estimates(CrackMode::III).unwrap().mu_star, 2.0e10);
    }
}
