use pesdyn::core::interpolate::spline::BoundaryCondition;
use pesdyn::core::units;

pub struct DefaultsConfig {
    pub boundary: BoundaryCondition,
    pub grid_start: f64,
    pub grid_end: f64,
    pub grid_points: usize,
    pub reduced_mass: f64,
    pub time_step: f64,
    pub num_steps: usize,
    pub num_trajectories: usize,
    pub stride: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            boundary: BoundaryCondition::NotAKnot,
            grid_start: 1.06,
            grid_end: 5.0,
            grid_points: 200,
            reduced_mass: units::CO_REDUCED_MASS,
            time_step: 0.02,
            num_steps: 200_000,
            num_trajectories: 1,
            stride: 1,
        }
    }
}
