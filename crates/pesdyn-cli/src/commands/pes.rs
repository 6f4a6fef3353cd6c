use crate::cli::PesArgs;
use crate::config::build_pes_config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use pesdyn::engine::progress::ProgressReporter;
use pesdyn::workflows;
use tracing::info;

pub async fn run(args: PesArgs) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let app_config = build_pes_config(&args)?;
    let table = super::load_pes_table(app_config.data_path.as_deref())?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the PES workflow...");
    let analysis = tokio::task::block_in_place(|| {
        workflows::pes::run(&table, &app_config.core_config, &reporter)
    })?;

    super::print_analysis_summary(&analysis);

    if let Some(dir) = &app_config.output.directory {
        let path = super::write_pes_curve(dir, &analysis.curve)?;
        println!("✓ PES curve written to: {}", path.display());
    }

    Ok(())
}
