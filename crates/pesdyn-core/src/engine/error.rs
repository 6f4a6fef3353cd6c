use super::config::ConfigError;
use crate::core::interpolate::spline::SplineError;
use crate::core::models::ensemble::EnsembleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Spline fit failed: {source}")]
    Spline {
        #[from]
        source: SplineError,
    },

    #[error("Ensemble calculation failed: {0}")]
    Ensemble(#[from] EnsembleError),

    #[error("Invalid value for '{name}': {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Force constant at r_eq = {r_eq:.6} bohr is not positive ({value:.6e})")]
    NonPositiveForceConstant { r_eq: f64, value: f64 },

    #[error("Trajectory became non-finite at step {step}")]
    NonFiniteState { step: usize },

    #[error("Internal logic error: {0}")]
    Internal(String),
}
