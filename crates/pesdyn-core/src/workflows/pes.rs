use crate::core::models::pes::PesTable;
use crate::engine::analysis::PesAnalysis;
use crate::engine::config::AnalysisConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{info, instrument};

#[instrument(skip_all, name = "pes_workflow")]
pub fn run(
    table: &PesTable,
    config: &AnalysisConfig,
    reporter: &ProgressReporter,
) -> Result<PesAnalysis, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Fitting PES",
    });
    info!(
        "Fitting a {} spline through {} PES samples.",
        config.boundary,
        table.len()
    );

    let analysis = PesAnalysis::analyze(table, config)?;

    info!(
        "Equilibrium bond length {:.6} bohr ({:.6} Å), force constant {:.6} hartree/bohr².",
        analysis.r_eq,
        analysis.r_eq_angstrom(),
        analysis.force_constant
    );
    reporter.report(Progress::PhaseFinish);

    Ok(analysis)
}
