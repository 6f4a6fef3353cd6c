use pesdyn::engine::config as core_config;
use std::path::PathBuf;

pub struct OutputConfig {
    pub directory: Option<PathBuf>,
    pub stride: usize,
}

pub struct PesAppConfig {
    /// PES sample file; the built-in CO table is used when `None`.
    pub data_path: Option<PathBuf>,
    pub output: OutputConfig,
    pub core_config: core_config::AnalysisConfig,
}

pub struct DynamicsAppConfig {
    pub data_path: Option<PathBuf>,
    pub output: OutputConfig,
    pub core_config: core_config::DynamicsConfig,
}
