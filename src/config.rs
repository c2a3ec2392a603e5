use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::energy::FaultDepth;
use crate::params::FaultParams;
use crate::{ensure_positive, RuptureError};

/// Inputs of the worked scenario. Missing or `null` fields take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ScenarioConfigFile")]
pub struct ScenarioConfig {
    /// Direct-effect parameter a
    pub a: f64,
    /// Evolution-effect parameter b
    pub b: f64,
    /// Shear modulus mu [Pa]
    pub mu: f64,
    /// Poisson's ratio nu, used for Mode II
    pub nu: f64,
    /// Characteristic slip distance L [m]
    pub dc: f64,
    /// Effective normal stress sigma [Pa]
    pub sigma_n: f64,
    /// Largest grid cell of the numerical model [m]
    pub grid_size_max: f64,
    /// Static energy release rate G0 [J/m^2]
    pub g0: f64,
    /// Rupture acceleration [m/s^2]
    pub vr_dot: f64,
    /// Rupture speed [m/s]
    pub vr: f64,
    /// Shear-wave speed [m/s]
    pub vs: f64,
    /// Seismogenic width W [m]
    pub width: f64,
    pub depth: FaultDepth,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        let fault = FaultParams::default();
        Self {
            a: fault.a,
            b: fault.b,
            mu: 2.0e10,
            nu: 0.2,
            dc: fault.dc,
            sigma_n: fault.sigma_n,
            grid_size_max: 85.0,
            g0: 1.0,
            vr_dot: 0.0,
            vr: 0.8 * 3464.0,
            vs: 3464.0,
            width: 15.0e3,
            depth: FaultDepth::Shallow,
        }
    }
}

/// On-disk form of [`ScenarioConfig`]: absent and `null` both read as `None`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ScenarioConfigFile {
    a: Option<f64>,
    b: Option<f64>,
    mu: Option<f64>,
    nu: Option<f64>,
    dc: Option<f64>,
    sigma_n: Option<f64>,
    grid_size_max: Option<f64>,
    g0: Option<f64>,
    vr_dot: Option<f64>,
    vr: Option<f64>,
    vs: Option<f64>,
    width: Option<f64>,
    depth: Option<FaultDepth>,
}

impl From<ScenarioConfigFile> for ScenarioConfig {
    fn from(file: ScenarioConfigFile) -> Self {
        let defaults = ScenarioConfig::default();
        Self {
            a: file.a.unwrap_or(defaults.a),
            b: file.b.unwrap_or(defaults.b),
            mu: file.mu.unwrap_or(defaults.mu),
            nu: file.nu.unwrap_or(defaults.nu),
            dc: file.dc.unwrap_or(defaults.dc),
            sigma_n: file.sigma_n.unwrap_or(defaults.sigma_n),
            grid_size_max: file.grid_size_max.unwrap_or(defaults.grid_size_max),
            g0: file.g0.unwrap_or(defaults.g0),
            vr_dot: file.vr_dot.unwrap_or(defaults.vr_dot),
            vr: file.vr.unwrap_or(defaults.vr),
            vs: file.vs.unwrap_or(defaults.vs),
            width: file.width.unwrap_or(defaults.width),
            depth: file.depth.unwrap_or(defaults.depth),
        }
    }
}

impl ScenarioConfig {
    pub fn validate(&self) -> Result<(), RuptureError> {
        let finite = [
            ("a", self.a),
            ("b", self.b),
            ("nu", self.nu),
            ("g0", self.g0),
            ("vr_dot", self.vr_dot),
            ("vr", self.vr),
        ];
        if let Some((name, value)) = finite.iter().find(|(_, value)| !value.is_finite()) {
            return Err(RuptureError::InvalidArgument(format!(
                "{name} must be finite, got {value}"
            )));
        }

        ensure_positive("mu", self.mu)?;
        ensure_positive("dc", self.dc)?;
        ensure_positive("sigma_n", self.sigma_n)?;
        ensure_positive("grid_size_max", self.grid_size_max)?;
        ensure_positive("vs", self.vs)?;
        ensure_positive("width", self.width)?;

        self.fault_params().weakening()?;

        if !(0.0..self.vs).contains(&self.vr) {
            return Err(RuptureError::domain(
                "vr",
                format!("must lie in [0, vs), got vr={} vs={}", self.vr, self.vs),
            ));
        }

        self.depth.gamma()?;
        Ok(())
    }

    pub fn from_json_file(path: &Path) -> Result<Self, RuptureError> {
        let raw = fs::read_to_string(path)?;
        let config: ScenarioConfig = serde_json::from_str(&raw)?;
        Ok(config)
    }

    pub fn fault_params(&self) -> FaultParams {
        FaultParams::new(self.a, self.b, self.dc, self.sigma_n)
    }
}
