pub mod dynamics;
pub mod ensemble;
pub mod pes;

use crate::error::{CliError, Result};
use pesdyn::core::io::pes::{PesCurveFile, PesTableFile};
use pesdyn::core::io::traits::TabularFile;
use pesdyn::core::models::pes::{PesCurve, PesTable};
use pesdyn::core::units;
use pesdyn::engine::analysis::PesAnalysis;
use std::path::{Path, PathBuf};
use tracing::info;

pub(crate) fn load_pes_table(path: Option<&Path>) -> Result<PesTable> {
    match path {
        Some(path) => {
            info!("Loading PES samples from {:?}", path);
            PesTableFile::read_from_path(path).map_err(|e| CliError::FileParsing {
                path: path.to_path_buf(),
                source: e.into(),
            })
        }
        None => {
            info!("No PES data given; using the built-in carbon monoxide table.");
            Ok(PesTable::carbon_monoxide())
        }
    }
}

/// Creates `dir` if needed and returns the path of `file_name` inside it.
pub(crate) fn output_path(dir: &Path, file_name: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    Ok(dir.join(file_name))
}

pub(crate) fn write_pes_curve(dir: &Path, curve: &PesCurve) -> Result<PathBuf> {
    let path = output_path(dir, "pes_curve.csv")?;
    info!("Writing PES curve ({} points) to {:?}", curve.len(), &path);
    PesCurveFile::write_to_path(curve, &path).map_err(|e| CliError::FileParsing {
        path: path.clone(),
        source: e.into(),
    })?;
    Ok(path)
}

pub(crate) fn print_analysis_summary(analysis: &PesAnalysis) {
    println!("PES analysis ({} grid points)", analysis.curve.len());
    println!(
        "  Equilibrium bond length : {:.6} bohr ({:.6} Å)",
        analysis.r_eq,
        analysis.r_eq_angstrom()
    );
    println!(
        "  Energy at minimum       : {:.8} hartree",
        analysis.energy_at_eq
    );
    println!(
        "  Force constant          : {:.8} hartree/bohr²",
        analysis.force_constant
    );
    println!(
        "  Angular frequency       : {:.6e} a.u.",
        analysis.angular_frequency()
    );
    println!(
        "  Vibrational period      : {:.2} a.u. ({:.2} fs)",
        analysis.vibrational_period(),
        units::au_time_to_femtoseconds(analysis.vibrational_period())
    );
    println!(
        "  Velocity scale          : {:.6e} bohr/a.u.",
        analysis.velocity_scale()
    );
}
