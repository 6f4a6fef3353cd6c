use crate::error::{CliError, Result};
use pesdyn::core::interpolate::spline::BoundaryCondition;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FilePesConfig {
    pub data: Option<PathBuf>,
    pub boundary: Option<BoundaryCondition>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileGridConfig {
    pub start: Option<f64>,
    pub end: Option<f64>,
    pub points: Option<usize>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileDynamicsConfig {
    pub reduced_mass: Option<f64>,
    pub time_step: Option<f64>,
    pub num_steps: Option<usize>,
    pub seed: Option<u64>,
    pub num_trajectories: Option<usize>,
    pub initial_separation: Option<f64>,
    pub initial_velocity: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileOutputConfig {
    pub stride: Option<usize>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub pes: Option<FilePesConfig>,
    pub grid: Option<FileGridConfig>,
    pub dynamics: Option<FileDynamicsConfig>,
    pub output: Option<FileOutputConfig>,
}

impl FileConfig {
    /// Reads a TOML config file. A relative `pes.data` path is taken relative
    /// to the directory of the config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;

        if let Some(data) = config.pes.as_mut().and_then(|pes| pes.data.as_mut()) {
            if data.is_relative() {
                if let Some(parent) = path.parent() {
                    *data = parent.join(&*data);
                }
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn from_file_reads_all_sections() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run.toml");
        fs::write(
            &path,
            r#"
            [pes]
            data = "co.csv"
            boundary = "natural"

            [grid]
            start = 1.2
            end = 4.0
            points = 50

            [dynamics]
            reduced-mass = 12000.0
            time-step = 0.01
            num-steps = 1000
            seed = 42
            num-trajectories = 3
            initial-velocity = 0.0

            [output]
            stride = 10
            "#,
        )
        .unwrap();

        let config = FileConfig::from_file(&path).unwrap();
        let pes = config.pes.unwrap();
        assert_eq!(pes.data, Some(dir.path().join("co.csv")));
        assert_eq!(pes.boundary, Some(BoundaryCondition::Natural));
        assert_eq!(config.grid.unwrap().points, Some(50));
        let dynamics = config.dynamics.unwrap();
        assert_eq!(dynamics.reduced_mass, Some(12000.0));
        assert_eq!(dynamics.seed, Some(42));
        assert_eq!(dynamics.initial_separation, None);
        assert_eq!(dynamics.initial_velocity, Some(0.0));
        assert_eq!(config.output.unwrap().stride, Some(10));
    }

    #[test]
    fn absolute_data_path_is_kept() {
        let dir = tempdir().unwrap();
        let data = dir.path().join("elsewhere").join("pes.csv");
        let path = dir.path().join("run.toml");
        fs::write(
            &path,
            format!("[pes]\ndata = {:?}\n", data.to_str().unwrap()),
        )
        .unwrap();

        let config = FileConfig::from_file(&path).unwrap();
        assert_eq!(config.pes.unwrap().data, Some(data));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[dynamics]\ntimestep = 0.02\n").unwrap();

        let result = FileConfig::from_file(&path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let result = FileConfig::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
