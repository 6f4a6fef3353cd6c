use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "pesdyn - Fit a diatomic potential energy surface with a cubic spline and run classical velocity-Verlet dynamics on it.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute kinetic and Coulomb energies of a one-dimensional particle ensemble.
    Ensemble(EnsembleArgs),
    /// Fit a sampled PES and report the equilibrium bond length and force constant.
    Pes(PesArgs),
    /// Fit a sampled PES and integrate classical trajectories on it.
    Dynamics(DynamicsArgs),
}

/// Arguments for the `ensemble` subcommand.
#[derive(Args, Debug)]
pub struct EnsembleArgs {
    /// Number of particles in the ensemble.
    #[arg(short = 'n', long, value_name = "INT")]
    pub particles: Option<usize>,

    /// Mass assigned to every particle (atomic units).
    #[arg(long, value_name = "FLOAT")]
    pub mass: Option<f64>,

    /// Charge assigned to every particle (atomic units).
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub charge: Option<f64>,

    /// Particle i is placed at i * DX.
    #[arg(long, value_name = "DX", allow_negative_numbers = true)]
    pub position_spacing: Option<f64>,

    /// Particle i moves with velocity i * DV.
    #[arg(long, value_name = "DV", allow_negative_numbers = true)]
    pub velocity_spacing: Option<f64>,

    /// Indices of the pair whose separation and potential energy are reported.
    #[arg(long, num_args = 2, value_names = ["I", "J"])]
    pub pair: Option<Vec<usize>>,
}

/// Input, output and override options shared by the PES-based subcommands.
#[derive(Args, Debug, Default)]
pub struct AnalysisArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// CSV file of PES samples with a `separation,energy` header.
    /// The built-in carbon monoxide table is used when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Directory that receives the CSV outputs. Nothing is written when omitted.
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S grid.points=400
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `pes` subcommand.
#[derive(Args, Debug, Default)]
pub struct PesArgs {
    #[command(flatten)]
    pub analysis: AnalysisArgs,
}

/// Arguments for the `dynamics` subcommand.
#[derive(Args, Debug, Default)]
pub struct DynamicsArgs {
    #[command(flatten)]
    pub analysis: AnalysisArgs,

    // --- Integration Overrides ---
    /// Override the integration time step (atomic time units).
    #[arg(short = 't', long, value_name = "FLOAT")]
    pub time_step: Option<f64>,

    /// Override the number of recorded frames per trajectory.
    #[arg(short = 'n', long, value_name = "INT")]
    pub steps: Option<usize>,

    // --- Sampling Overrides ---
    /// Seed for the initial-condition generator. Runs are not reproducible without one.
    #[arg(short, long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Number of independent trajectories to integrate.
    #[arg(short = 'k', long, value_name = "INT")]
    pub trajectories: Option<usize>,

    /// Start every trajectory at this separation (bohr) instead of sampling it.
    #[arg(long, value_name = "FLOAT")]
    pub initial_separation: Option<f64>,

    /// Start every trajectory with this velocity instead of sampling it.
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub initial_velocity: Option<f64>,

    /// Write every N-th frame to the trajectory CSV.
    #[arg(long, value_name = "INT")]
    pub stride: Option<usize>,
}
