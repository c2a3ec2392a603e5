use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use rupture_estimates::scenario::nucleation_labels;
use rupture_estimates::{run_scenario, Advisory, CrackMode, ScenarioConfig, ScenarioReport};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about = "Nucleation-size and energy-release-rate estimates")]
struct Cli {
    /// JSON scenario file (defaults to ./rupture.json when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,

    /// Only print estimates for this crack mode (II or III)
    #[arg(long)]
    mode: Option<CrackMode>,

    /// Direct-effect parameter a
    #[arg(long)]
    a: Option<f64>,

    /// Evolution-effect parameter b
    #[arg(long)]
    b: Option<f64>,

    /// Shear modulus [Pa]
    #[arg(long)]
    mu: Option<f64>,

    /// Poisson's ratio
    #[arg(long)]
    nu: Option<f64>,

    /// Characteristic slip distance [m]
    #[arg(long)]
    dc: Option<f64>,

    /// Effective normal stress [Pa]
    #[arg(long)]
    sigma_n: Option<f64>,

    /// Largest grid cell [m]
    #[arg(long)]
    grid_size_max: Option<f64>,

    /// Static energy release rate [J/m^2]
    #[arg(long)]
    g0: Option<f64>,

    /// Rupture acceleration [m/s^2]
    #[arg(long)]
    vr_dot: Option<f64>,

    /// Rupture speed [m/s]
    #[arg(long)]
    vr: Option<f64>,

    /// Shear-wave speed [m/s]
    #[arg(long)]
    vs: Option<f64>,

    /// Seismogenic width [m]
    #[arg(long)]
    width: Option<f64>,
}

impl Cli {
    fn apply_overrides(&self, cfg: &mut ScenarioConfig) {
        if let Some(v) = self.a {
            cfg.a = v;
        }
        if let Some(v) = self.b {
            cfg.b = v;
        }
        if let Some(v) = self.mu {
            cfg.mu = v;
        }
        if let Some(v) = self.nu {
            cfg.nu = v;
        }
        if let Some(v) = self.dc {
            cfg.dc = v;
        }
        if let Some(v) = self.sigma_n {
            cfg.sigma_n = v;
        }
        if let Some(v) = self.grid_size_max {
            cfg.grid_size_max = v;
        }
        if let Some(v) = self.g0 {
            cfg.g0 = v;
        }
        if let Some(v) = self.vr_dot {
            cfg.vr_dot = v;
        }
        if let Some(v) = self.vr {
            cfg.vr = v;
        }
        if let Some(v) = self.vs {
            cfg.vs = v;
        }
        if let Some(v) = self.width {
            cfg.width = v;
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut cfg = load_config(cli.config.as_deref())?;
    cli.apply_overrides(&mut cfg);

    let report = run_scenario(&cfg)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, cli.mode);
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ScenarioConfig> {
    if let Some(path) = path {
        return load_config_file(path);
    }

    let cwd_config = PathBuf::from("rupture.json");
    if cwd_config.exists() {
        return load_config_file(&cwd_config);
    }

    Ok(ScenarioConfig::default())
}

fn load_config_file(path: &Path) -> anyhow::Result<ScenarioConfig> {
    ScenarioConfig::from_json_file(path)
        .with_context(|| format!("loading config {}", path.display()))
}

fn print_report(report: &ScenarioReport, only: Option<CrackMode>) {
    for est in &report.modes {
        if only.is_some_and(|mode| mode != est.mode) {
            continue;
        }
        println!("Mode {}: mu* = {:.4e} Pa", est.mode, est.mu_star);
        for (label, value) in nucleation_labels(est) {
            println!("  {label:<14} {value:>12.3} m");
        }
        println!("  {:<14} {:>12.3} m", format!("Pz_{}", est.mode.label()), est.process_zone);
    }

    println!(
        "Nucleation size min/max: {:.3} m ({}) | {:.3} m ({})",
        report.nucleation_min.value,
        report.nucleation_min.label,
        report.nucleation_max.value,
        report.nucleation_max.label
    );
    println!(
        "Cells per nucleation length (cell {} m) min/max: {:.2} | {:.2}",
        report.resolution.cell_size, report.resolution.min_ratio, report.resolution.max_ratio
    );
    match &report.resolution.advisory {
        Some(Advisory::UnderResolved { label, ratio, required }) => println!(
            "Resolution advisory: {label} spans {ratio:.2} cells, at least {required} recommended"
        ),
        None => println!("Resolution: adequate"),
    }

    println!(
        "Energy release rate: Gc = {:.6} J/m^2 (gamma {:.4}, W' {:.1} m, alpha_s {:.4})",
        report.energy.gc, report.energy.gamma, report.energy.w_prime, report.energy.alpha_s
    );
}
