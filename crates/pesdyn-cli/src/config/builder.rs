use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::{DynamicsAppConfig, OutputConfig, PesAppConfig};
use crate::cli::{AnalysisArgs, DynamicsArgs, PesArgs};
use crate::error::{CliError, Result};
use pesdyn::core::interpolate::spline::BoundaryCondition;
use pesdyn::engine::config as core_config;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

pub fn build_pes_config(args: &PesArgs) -> Result<PesAppConfig> {
    let defaults = DefaultsConfig::default();
    let mut file_config = load_file_config(&args.analysis)?;

    let core_config = build_analysis_config(&mut file_config, &defaults)?;
    let data_path = resolve_data_path(&args.analysis, &file_config);
    let output = build_output_config(&args.analysis, None, &file_config, &defaults);

    Ok(PesAppConfig {
        data_path,
        output,
        core_config,
    })
}

pub fn build_dynamics_config(args: &DynamicsArgs) -> Result<DynamicsAppConfig> {
    let defaults = DefaultsConfig::default();
    let mut file_config = load_file_config(&args.analysis)?;

    let analysis = build_analysis_config(&mut file_config, &defaults)?;
    let data_path = resolve_data_path(&args.analysis, &file_config);
    let output = build_output_config(&args.analysis, args.stride, &file_config, &defaults);

    let dyn_file = file_config.dynamics.take().unwrap_or_default();
    let core_config = core_config::DynamicsConfigBuilder::new()
        .analysis(analysis)
        .time_step(
            args.time_step
                .or(dyn_file.time_step)
                .unwrap_or(defaults.time_step),
        )
        .num_steps(args.steps.or(dyn_file.num_steps).unwrap_or(defaults.num_steps))
        .seed(args.seed.or(dyn_file.seed))
        .num_trajectories(
            args.trajectories
                .or(dyn_file.num_trajectories)
                .unwrap_or(defaults.num_trajectories),
        )
        .initial_separation(args.initial_separation.or(dyn_file.initial_separation))
        .initial_velocity(args.initial_velocity.or(dyn_file.initial_velocity))
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(DynamicsAppConfig {
        data_path,
        output,
        core_config,
    })
}

fn load_file_config(args: &AnalysisArgs) -> Result<FileConfig> {
    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };
    apply_set_values(file_config, &args.set_values)
}

fn build_analysis_config(
    file_config: &mut FileConfig,
    defaults: &DefaultsConfig,
) -> Result<core_config::AnalysisConfig> {
    let grid_file = file_config.grid.take().unwrap_or_default();
    let grid = core_config::FineGrid {
        start: grid_file.start.unwrap_or(defaults.grid_start),
        end: grid_file.end.unwrap_or(defaults.grid_end),
        points: grid_file.points.unwrap_or(defaults.grid_points),
    };
    let boundary = file_config
        .pes
        .as_ref()
        .and_then(|pes| pes.boundary)
        .unwrap_or(defaults.boundary);
    let reduced_mass = file_config
        .dynamics
        .as_ref()
        .and_then(|d| d.reduced_mass)
        .unwrap_or(defaults.reduced_mass);
    debug!(?grid, %boundary, reduced_mass, "Resolved analysis settings.");

    core_config::AnalysisConfigBuilder::new()
        .boundary(boundary)
        .grid(grid)
        .reduced_mass(reduced_mass)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

fn resolve_data_path(args: &AnalysisArgs, file_config: &FileConfig) -> Option<PathBuf> {
    args.data
        .clone()
        .or_else(|| file_config.pes.as_ref().and_then(|pes| pes.data.clone()))
}

fn build_output_config(
    args: &AnalysisArgs,
    cli_stride: Option<usize>,
    file_config: &FileConfig,
    defaults: &DefaultsConfig,
) -> OutputConfig {
    let stride = cli_stride
        .or(file_config.output.as_ref().and_then(|o| o.stride))
        .unwrap_or(defaults.stride)
        .max(1);
    OutputConfig {
        directory: args.output_dir.clone(),
        stride,
    }
}

fn parse_value<T: FromStr>(key: &str, value_str: &str, kind: &str) -> Result<T> {
    value_str.trim().parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value_str))
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    if set_values.is_empty() {
        return Ok(config);
    }
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };
        let key = key.trim();
        debug!(key, value = value_str, "Applying --set override.");

        match key {
            "grid.start" => {
                config.grid.get_or_insert_with(Default::default).start =
                    Some(parse_value(key, value_str, "float")?);
            }
            "grid.end" => {
                config.grid.get_or_insert_with(Default::default).end =
                    Some(parse_value(key, value_str, "float")?);
            }
            "grid.points" => {
                config.grid.get_or_insert_with(Default::default).points =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "dynamics.reduced-mass" => {
                config
                    .dynamics
                    .get_or_insert_with(Default::default)
                    .reduced_mass = Some(parse_value(key, value_str, "float")?);
            }
            "dynamics.time-step" => {
                config.dynamics.get_or_insert_with(Default::default).time_step =
                    Some(parse_value(key, value_str, "float")?);
            }
            "dynamics.num-steps" => {
                config.dynamics.get_or_insert_with(Default::default).num_steps =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "dynamics.seed" => {
                config.dynamics.get_or_insert_with(Default::default).seed =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "dynamics.num-trajectories" => {
                config
                    .dynamics
                    .get_or_insert_with(Default::default)
                    .num_trajectories = Some(parse_value(key, value_str, "integer")?);
            }
            "output.stride" => {
                config.output.get_or_insert_with(Default::default).stride =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "pes.boundary" => {
                let boundary = value_str
                    .parse::<BoundaryCondition>()
                    .map_err(|e| CliError::Config(e.to_string()))?;
                config.pes.get_or_insert_with(Default::default).boundary = Some(boundary);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_config(dir: &std::path::Path, content: &str) -> PathBuf {
        let path = dir.join("config.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn build_dynamics_config_uses_defaults_without_file() {
        let app = build_dynamics_config(&DynamicsArgs::default()).expect("build ok");
        let defaults = DefaultsConfig::default();
        let cfg = app.core_config;

        assert_eq!(app.data_path, None);
        assert_eq!(app.output.directory, None);
        assert_eq!(app.output.stride, defaults.stride);
        assert_eq!(cfg.analysis.boundary, BoundaryCondition::NotAKnot);
        assert_eq!(cfg.analysis.grid, core_config::FineGrid::default());
        assert_eq!(cfg.analysis.reduced_mass, defaults.reduced_mass);
        assert_eq!(cfg.integration.time_step, 0.02);
        assert_eq!(cfg.integration.num_steps, 200_000);
        assert_eq!(cfg.sampling.num_trajectories, 1);
        assert_eq!(cfg.sampling.seed, None);
    }

    #[test]
    fn build_dynamics_config_reads_file_and_merges() {
        let dir = tempdir().unwrap();
        let cfg_path = write_config(
            dir.path(),
            r#"
            [pes]
            data = "co.csv"
            boundary = "natural"

            [grid]
            points = 400

            [dynamics]
            time-step = 0.01
            num-steps = 5000
            seed = 11
            num-trajectories = 4

            [output]
            stride = 25
            "#,
        );

        let mut args = DynamicsArgs::default();
        args.analysis.config = Some(cfg_path);
        let app = build_dynamics_config(&args).expect("build ok");
        let cfg = app.core_config;

        assert_eq!(app.data_path, Some(dir.path().join("co.csv")));
        assert_eq!(app.output.stride, 25);
        assert_eq!(cfg.analysis.boundary, BoundaryCondition::Natural);
        assert_eq!(cfg.analysis.grid.points, 400);
        assert_eq!(cfg.analysis.grid.start, 1.06);
        assert_eq!(cfg.integration.time_step, 0.01);
        assert_eq!(cfg.integration.num_steps, 5000);
        assert_eq!(cfg.sampling.seed, Some(11));
        assert_eq!(cfg.sampling.num_trajectories, 4);
    }

    #[test]
    fn cli_overrides_set_values_and_file() {
        let dir = tempdir().unwrap();
        let cfg_path = write_config(
            dir.path(),
            r#"
            [pes]
            data = "from-file.csv"

            [dynamics]
            num-steps = 5000
            seed = 11
            "#,
        );

        let mut args = DynamicsArgs::default();
        args.analysis.config = Some(cfg_path);
        args.analysis.data = Some(PathBuf::from("/tmp/from-cli.csv"));
        args.analysis.set_values = vec!["dynamics.num-steps=7000".to_string()];
        args.steps = Some(9000);
        args.seed = Some(3);
        args.stride = Some(0);

        let app = build_dynamics_config(&args).expect("build ok");

        assert_eq!(app.data_path, Some(PathBuf::from("/tmp/from-cli.csv")));
        assert_eq!(app.core_config.integration.num_steps, 9000);
        assert_eq!(app.core_config.sampling.seed, Some(3));
        assert_eq!(app.output.stride, 1);
    }

    #[test]
    fn set_values_override_file_values() {
        let dir = tempdir().unwrap();
        let cfg_path = write_config(
            dir.path(),
            "[grid]\nstart = 1.5\npoints = 100\n[dynamics]\nreduced-mass = 1000.0\n",
        );

        let mut args = DynamicsArgs::default();
        args.analysis.config = Some(cfg_path);
        args.analysis.set_values = vec![
            "grid.points=300".to_string(),
            "grid.end=4.5".to_string(),
            "dynamics.reduced-mass=2000".to_string(),
            "dynamics.time-step=0.005".to_string(),
            "dynamics.seed=99".to_string(),
            "dynamics.num-trajectories=2".to_string(),
            "output.stride=5".to_string(),
            "pes.boundary=natural".to_string(),
        ];

        let app = build_dynamics_config(&args).expect("build ok");
        let cfg = app.core_config;

        assert_eq!(cfg.analysis.grid.start, 1.5);
        assert_eq!(cfg.analysis.grid.end, 4.5);
        assert_eq!(cfg.analysis.grid.points, 300);
        assert_eq!(cfg.analysis.reduced_mass, 2000.0);
        assert!((cfg.integration.time_step - 0.005).abs() < 1e-12);
        assert_eq!(cfg.sampling.seed, Some(99));
        assert_eq!(cfg.sampling.num_trajectories, 2);
        assert_eq!(cfg.analysis.boundary, BoundaryCondition::Natural);
        assert_eq!(app.output.stride, 5);
    }

    #[test]
    fn build_pes_config_ignores_dynamics_only_settings() {
        let mut args = PesArgs::default();
        args.analysis.output_dir = Some(PathBuf::from("out"));
        args.analysis.set_values = vec!["dynamics.num-steps=10".to_string()];

        let app = build_pes_config(&args).expect("build ok");

        assert_eq!(app.output.directory, Some(PathBuf::from("out")));
        assert_eq!(app.core_config.grid, core_config::FineGrid::default());
    }

    #[test]
    fn malformed_set_values_are_rejected() {
        for bad in ["grid.points", "grid.points=many", "pes.boundary=clamped", "grid.spacing=0.1"] {
            let mut args = PesArgs::default();
            args.analysis.set_values = vec![bad.to_string()];
            let result = build_pes_config(&args);
            assert!(
                matches!(result, Err(CliError::Config(_))),
                "expected a config error for '{}'",
                bad
            );
        }
    }

    #[test]
    fn invalid_merged_values_surface_as_config_errors() {
        let mut args = DynamicsArgs::default();
        args.analysis.set_values = vec!["grid.start=6.0".to_string()];
        assert!(matches!(
            build_dynamics_config(&args),
            Err(CliError::Config(_))
        ));

        let mut args = DynamicsArgs::default();
        args.time_step = Some(-0.1);
        assert!(matches!(
            build_dynamics_config(&args),
            Err(CliError::Config(_))
        ));
    }
}
