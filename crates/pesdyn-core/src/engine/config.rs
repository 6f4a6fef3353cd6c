use crate::core::interpolate::spline::BoundaryCondition;
use crate::core::models::ensemble::EnsembleRecipe;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

/// Uniform grid on which the fitted PES is tabulated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FineGrid {
    pub start: f64,
    pub end: f64,
    pub points: usize,
}

impl Default for FineGrid {
    fn default() -> Self {
        Self {
            start: 1.06,
            end: 5.0,
            points: 200,
        }
    }
}

impl FineGrid {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.start.is_finite() || !self.end.is_finite() || self.start >= self.end {
            return Err(ConfigError::InvalidValue {
                name: "grid",
                reason: format!(
                    "start ({}) must be finite and below end ({})",
                    self.start, self.end
                ),
            });
        }
        if self.points < 2 {
            return Err(ConfigError::InvalidValue {
                name: "grid.points",
                reason: format!("need at least 2 points, got {}", self.points),
            });
        }
        Ok(())
    }

    /// Evenly spaced values including both end points.
    pub fn values(&self) -> Vec<f64> {
        let last = (self.points - 1) as f64;
        let spacing = (self.end - self.start) / last;
        (0..self.points)
            .map(|i| {
                if i + 1 == self.points {
                    self.end
                } else {
                    self.start + spacing * i as f64
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub boundary: BoundaryCondition,
    pub grid: FineGrid,
    pub reduced_mass: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntegrationConfig {
    pub time_step: f64,
    /// Length of the trajectory arrays; frame 0 is the initial condition.
    pub num_steps: usize,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SamplingConfig {
    pub seed: Option<u64>,
    pub num_trajectories: usize,
    pub initial_separation: Option<f64>,
    pub initial_velocity: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DynamicsConfig {
    pub analysis: AnalysisConfig,
    pub integration: IntegrationConfig,
    pub sampling: SamplingConfig,
}

fn require_positive(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidValue {
            name,
            reason: format!("must be a positive finite number, got {}", value),
        })
    }
}

#[derive(Default)]
pub struct AnalysisConfigBuilder {
    boundary: Option<BoundaryCondition>,
    grid: Option<FineGrid>,
    reduced_mass: Option<f64>,
}

impl AnalysisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn boundary(mut self, boundary: BoundaryCondition) -> Self {
        self.boundary = Some(boundary);
        self
    }
    pub fn grid(mut self, grid: FineGrid) -> Self {
        self.grid = Some(grid);
        self
    }
    pub fn reduced_mass(mut self, mass: f64) -> Self {
        self.reduced_mass = Some(mass);
        self
    }

    pub fn build(self) -> Result<AnalysisConfig, ConfigError> {
        let grid = self.grid.ok_or(ConfigError::MissingParameter("grid"))?;
        grid.validate()?;
        let reduced_mass = self
            .reduced_mass
            .ok_or(ConfigError::MissingParameter("reduced_mass"))?;
        Ok(AnalysisConfig {
            boundary: self.boundary.unwrap_or_default(),
            grid,
            reduced_mass: require_positive("reduced_mass", reduced_mass)?,
        })
    }
}

#[derive(Default)]
pub struct DynamicsConfigBuilder {
    analysis: Option<AnalysisConfig>,
    time_step: Option<f64>,
    num_steps: Option<usize>,
    seed: Option<u64>,
    num_trajectories: Option<usize>,
    initial_separation: Option<f64>,
    initial_velocity: Option<f64>,
}

impl DynamicsConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn analysis(mut self, analysis: AnalysisConfig) -> Self {
        self.analysis = Some(analysis);
        self
    }
    pub fn time_step(mut self, dt: f64) -> Self {
        self.time_step = Some(dt);
        self
    }
    pub fn num_steps(mut self, n: usize) -> Self {
        self.num_steps = Some(n);
        self
    }
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
    pub fn num_trajectories(mut self, n: usize) -> Self {
        self.num_trajectories = Some(n);
        self
    }
    pub fn initial_separation(mut self, r: Option<f64>) -> Self {
        self.initial_separation = r;
        self
    }
    pub fn initial_velocity(mut self, v: Option<f64>) -> Self {
        self.initial_velocity = v;
        self
    }

    pub fn build(self) -> Result<DynamicsConfig, ConfigError> {
        let analysis = self
            .analysis
            .ok_or(ConfigError::MissingParameter("analysis"))?;
        let time_step = self
            .time_step
            .ok_or(ConfigError::MissingParameter("time_step"))?;
        let num_steps = self
            .num_steps
            .ok_or(ConfigError::MissingParameter("num_steps"))?;
        if num_steps == 0 {
            return Err(ConfigError::InvalidValue {
                name: "num_steps",
                reason: "a trajectory needs at least one frame".to_string(),
            });
        }
        let num_trajectories = self.num_trajectories.unwrap_or(1);
        if num_trajectories == 0 {
            return Err(ConfigError::InvalidValue {
                name: "num_trajectories",
                reason: "at least one trajectory is required".to_string(),
            });
        }
        if let Some(r) = self.initial_separation {
            require_positive("initial_separation", r)?;
        }
        if let Some(v) = self.initial_velocity {
            if !v.is_finite() {
                return Err(ConfigError::InvalidValue {
                    name: "initial_velocity",
                    reason: format!("must be finite, got {}", v),
                });
            }
        }

        Ok(DynamicsConfig {
            analysis,
            integration: IntegrationConfig {
                time_step: require_positive("time_step", time_step)?,
                num_steps,
            },
            sampling: SamplingConfig {
                seed: self.seed,
                num_trajectories,
                initial_separation: self.initial_separation,
                initial_velocity: self.initial_velocity,
            },
        })
    }
}

/// Settings of the particle-ensemble energetics.
#[derive(Debug, Clone, PartialEq)]
pub struct EnsembleConfig {
    pub num_particles: usize,
    pub recipe: EnsembleRecipe,
    pub pair: (usize, usize),
}

impl Default for EnsembleConfig {
    fn default() -> Self {
        Self {
            num_particles: 10,
            recipe: EnsembleRecipe::default(),
            pair: (0, 1),
        }
    }
}
