use super::config::AnalysisConfig;
use super::error::EngineError;
use crate::core::forcefield::model::{ForceModel, HarmonicWell, SplinePes};
use crate::core::models::pes::{PesCurve, PesTable};
use crate::core::units;
use tracing::{debug, warn};

/// Everything derived from fitting a spline to a sampled PES.
#[derive(Debug, Clone)]
pub struct PesAnalysis {
    pub model: SplinePes,
    pub curve: PesCurve,
    pub equilibrium_index: usize,
    /// Grid separation of lowest energy, in bohr.
    pub r_eq: f64,
    pub energy_at_eq: f64,
    /// Second derivative of the energy at `r_eq`, in hartree/bohr².
    pub force_constant: f64,
    pub reduced_mass: f64,
}

impl PesAnalysis {
    pub fn analyze(table: &PesTable, config: &AnalysisConfig) -> Result<Self, EngineError> {
        config.grid.validate()?;
        let model = SplinePes::fit(table, config.boundary)?;

        let separations = config.grid.values();
        let energies: Vec<f64> = separations.iter().map(|&r| model.energy(r)).collect();
        let forces: Vec<f64> = separations.iter().map(|&r| model.force(r)).collect();
        let curve = PesCurve {
            separations,
            energies,
            forces,
        };

        let equilibrium_index = curve
            .argmin()
            .ok_or_else(|| EngineError::Internal("PES grid is empty".to_string()))?;
        if equilibrium_index == 0 || equilibrium_index + 1 == curve.len() {
            warn!(
                "Energy minimum lies on the edge of the grid (index {}); the equilibrium bond length is unreliable.",
                equilibrium_index
            );
        }
        let (table_start, table_end) = table.range();
        if config.grid.start < table_start || config.grid.end > table_end {
            warn!(
                "Grid [{}, {}] extends beyond the sampled range [{}, {}]; values there are extrapolated.",
                config.grid.start, config.grid.end, table_start, table_end
            );
        }

        let r_eq = curve.separations[equilibrium_index];
        let energy_at_eq = curve.energies[equilibrium_index];
        let force_constant = model.curvature(r_eq);
        if !(force_constant > 0.0) {
            return Err(EngineError::NonPositiveForceConstant {
                r_eq,
                value: force_constant,
            });
        }
        debug!(r_eq, energy_at_eq, force_constant, "PES analysis complete.");

        Ok(Self {
            model,
            curve,
            equilibrium_index,
            r_eq,
            energy_at_eq,
            force_constant,
            reduced_mass: config.reduced_mass,
        })
    }

    pub fn r_eq_angstrom(&self) -> f64 {
        units::bohr_to_angstrom(self.r_eq)
    }

    /// Harmonic angular frequency ω = sqrt(k/μ).
    pub fn angular_frequency(&self) -> f64 {
        (self.force_constant / self.reduced_mass).sqrt()
    }

    /// Velocity scale of the harmonic ground state, sqrt(ω / 2μ).
    pub fn velocity_scale(&self) -> f64 {
        (self.angular_frequency() / (2.0 * self.reduced_mass)).sqrt()
    }

    pub fn vibrational_period(&self) -> f64 {
        2.0 * std::f64::consts::PI / self.angular_frequency()
    }

    /// Quadratic approximation of the PES around its minimum.
    pub fn harmonic_approximation(&self) -> HarmonicWell {
        HarmonicWell::new(self.r_eq, self.force_constant)
    }
}
