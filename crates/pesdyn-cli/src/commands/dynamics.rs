use crate::cli::DynamicsArgs;
use crate::config::build_dynamics_config;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use pesdyn::core::io::trajectory::{TrajectoryFile, TrajectoryRecord};
use pesdyn::core::io::traits::TabularFile;
use pesdyn::core::units;
use pesdyn::engine::progress::ProgressReporter;
use pesdyn::workflows;
use pesdyn::workflows::dynamics::DynamicsResult;
use std::path::{Path, PathBuf};
use tracing::info;

pub async fn run(args: DynamicsArgs) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let app_config = build_dynamics_config(&args)?;
    let table = super::load_pes_table(app_config.data_path.as_deref())?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Starting trajectory integration...");
    info!("Invoking the dynamics workflow...");
    let result = tokio::task::block_in_place(|| {
        workflows::dynamics::run(&table, &app_config.core_config, &reporter)
    })?;

    super::print_analysis_summary(&result.analysis);
    print_trajectory_summary(&result);

    if let Some(dir) = &app_config.output.directory {
        let path = super::write_pes_curve(dir, &result.analysis.curve)?;
        println!("✓ PES curve written to: {}", path.display());
        write_trajectories(dir, &result, app_config.output.stride)?;
    }

    Ok(())
}

fn print_trajectory_summary(result: &DynamicsResult) {
    for (i, t) in result.trajectories.iter().enumerate() {
        let duration = t.trajectory.times().last().copied().unwrap_or(0.0);
        println!(
            "Trajectory {}: r0 = {:.6} bohr, v0 = {:.6e} bohr/a.u., {} frames over {:.1} a.u. ({:.1} fs)",
            i + 1,
            t.initial.position,
            t.initial.velocity,
            t.trajectory.len(),
            duration,
            units::au_time_to_femtoseconds(duration)
        );
        if let Some((low, high)) = t.trajectory.position_bounds() {
            println!("  Bond length range : [{:.6}, {:.6}] bohr", low, high);
        }
        println!("  Max energy drift  : {:.3e} hartree", t.energy_drift);
    }
}

fn trajectory_file_name(index: usize, count: usize) -> String {
    if count == 1 {
        "trajectory.csv".to_string()
    } else {
        format!("trajectory_{}.csv", index + 1)
    }
}

fn write_trajectories(dir: &Path, result: &DynamicsResult, stride: usize) -> Result<Vec<PathBuf>> {
    let count = result.trajectories.len();
    let reduced_mass = result.analysis.reduced_mass;
    let mut written = Vec::with_capacity(count);

    for (i, t) in result.trajectories.iter().enumerate() {
        let path = super::output_path(dir, &trajectory_file_name(i, count))?;
        let records =
            TrajectoryRecord::from_trajectory(&t.trajectory, reduced_mass, &result.analysis.model, stride);
        info!(
            "Writing trajectory {} ({} of {} frames) to {:?}",
            i + 1,
            records.len(),
            t.trajectory.len(),
            &path
        );
        TrajectoryFile::write_to_path(&records, &path).map_err(|e| CliError::FileParsing {
            path: path.clone(),
            source: e.into(),
        })?;
        println!("✓ Trajectory {} written to: {}", i + 1, path.display());
        written.push(path);
    }

    Ok(written)
}
