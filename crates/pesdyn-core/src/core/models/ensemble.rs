use crate::core::forcefield::potentials;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EnsembleError {
    #[error("Column '{column}' has length {found}, expected {expected}")]
    LengthMismatch {
        column: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("Particle index {index} is out of range for an ensemble of {len} particles")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("A pair requires two distinct particles, got index {index} twice")]
    SameParticle { index: usize },
    #[error("Particles {i} and {j} occupy the same position")]
    CoincidentParticles { i: usize, j: usize },
}

/// Per-index formula used to populate an ensemble.
///
/// Particle `i` receives `mass`, `charge`, position `i * position_spacing` and
/// velocity `i * velocity_spacing`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnsembleRecipe {
    pub mass: f64,
    pub charge: f64,
    pub position_spacing: f64,
    pub velocity_spacing: f64,
}

impl Default for EnsembleRecipe {
    fn default() -> Self {
        Self {
            mass: 1.0,
            charge: 1.0,
            position_spacing: 0.5,
            velocity_spacing: 0.2,
        }
    }
}

/// A set of point particles on a line, stored as parallel columns.
///
/// All columns always have the same length; the only way to build an ensemble
/// from explicit data is [`ParticleEnsemble::from_columns`], which checks it.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleEnsemble {
    masses: Vec<f64>,
    velocities: Vec<f64>,
    charges: Vec<f64>,
    positions: Vec<f64>,
}

impl ParticleEnsemble {
    pub fn from_recipe(num_particles: usize, recipe: &EnsembleRecipe) -> Self {
        let mut ensemble = Self {
            masses: vec![0.0; num_particles],
            velocities: vec![0.0; num_particles],
            charges: vec![0.0; num_particles],
            positions: vec![0.0; num_particles],
        };

        for i in 0..num_particles {
            let index = i as f64;
            ensemble.masses[i] = recipe.mass;
            ensemble.charges[i] = recipe.charge;
            ensemble.positions[i] = recipe.position_spacing * index;
            ensemble.velocities[i] = recipe.velocity_spacing * index;
        }
        ensemble
    }

    pub fn from_columns(
        masses: Vec<f64>,
        velocities: Vec<f64>,
        charges: Vec<f64>,
        positions: Vec<f64>,
    ) -> Result<Self, EnsembleError> {
        let expected = masses.len();
        for (column, found) in [
            ("velocities", velocities.len()),
            ("charges", charges.len()),
            ("positions", positions.len()),
        ] {
            if found != expected {
                return Err(EnsembleError::LengthMismatch {
                    column,
                    expected,
                    found,
                });
            }
        }
        Ok(Self {
            masses,
            velocities,
            charges,
            positions,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.masses.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }

    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    pub fn velocities(&self) -> &[f64] {
        &self.velocities
    }

    pub fn charges(&self) -> &[f64] {
        &self.charges
    }

    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    /// Kinetic energy ½·m·v² of every particle, in index order.
    pub fn kinetic_energies(&self) -> Vec<f64> {
        self.masses
            .iter()
            .zip(&self.velocities)
            .map(|(m, v)| 0.5 * m * v * v)
            .collect()
    }

    pub fn total_kinetic_energy(&self) -> f64 {
        self.kinetic_energies().iter().sum()
    }

    pub fn separation(&self, i: usize, j: usize) -> Result<f64, EnsembleError> {
        self.check_index(i)?;
        self.check_index(j)?;
        let dx = self.positions[i] - self.positions[j];
        Ok((dx * dx).sqrt())
    }

    /// Coulomb energy q_i·q_j / r_ij of a pair, in atomic units.
    pub fn pair_potential(&self, i: usize, j: usize) -> Result<f64, EnsembleError> {
        if i == j {
            return Err(EnsembleError::SameParticle { index: i });
        }
        let r = self.separation(i, j)?;
        if r == 0.0 {
            return Err(EnsembleError::CoincidentParticles { i, j });
        }
        Ok(potentials::coulomb_au(r, self.charges[i], self.charges[j]))
    }

    /// Sum of the pair potential over all distinct pairs.
    pub fn total_pair_potential(&self) -> Result<f64, EnsembleError> {
        let mut total = 0.0;
        for i in 0..self.len() {
            for j in (i + 1)..self.len() {
                total += self.pair_potential(i, j)?;
            }
        }
        Ok(total)
    }

    fn check_index(&self, index: usize) -> Result<(), EnsembleError> {
        if index >= self.len() {
            return Err(EnsembleError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn default_ensemble() -> ParticleEnsemble {
        ParticleEnsemble::from_recipe(10, &EnsembleRecipe::default())
    }

    #[test]
    fn from_recipe_populates_every_column_by_index() {
        let ensemble = default_ensemble();
        assert_eq!(ensemble.len(), 10);
        assert!(ensemble.masses().iter().all(|&m| m == 1.0));
        assert!(ensemble.charges().iter().all(|&q| q == 1.0));
        assert!((ensemble.positions()[3] - 1.5).abs() < TOLERANCE);
        assert!((ensemble.velocities()[9] - 1.8).abs() < TOLERANCE);
    }

    #[test]
    fn kinetic_energies_follow_half_m_v_squared() {
        let energies = default_ensemble().kinetic_energies();
        assert_eq!(energies.len(), 10);
        assert_eq!(energies[0], 0.0);
        assert!((energies[1] - 0.02).abs() < TOLERANCE);
        assert!((energies[5] - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn total_kinetic_energy_sums_particles() {
        // 0.02 * (0^2 + 1^2 + ... + 9^2) = 0.02 * 285
        let total = default_ensemble().total_kinetic_energy();
        assert!((total - 5.7).abs() < 1e-10);
    }

    #[test]
    fn pair_potential_of_first_two_particles() {
        let ensemble = default_ensemble();
        assert!((ensemble.separation(0, 1).unwrap() - 0.5).abs() < TOLERANCE);
        assert!((ensemble.pair_potential(0, 1).unwrap() - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn separation_is_symmetric_and_positive() {
        let ensemble = default_ensemble();
        let forward = ensemble.separation(2, 7).unwrap();
        let backward = ensemble.separation(7, 2).unwrap();
        assert_eq!(forward, backward);
        assert!((forward - 2.5).abs() < TOLERANCE);
    }

    #[test]
    fn pair_potential_with_opposite_charges_is_attractive() {
        let ensemble = ParticleEnsemble::from_columns(
            vec![1.0, 1.0],
            vec![0.0, 0.0],
            vec![1.0, -2.0],
            vec![0.0, 4.0],
        )
        .unwrap();
        assert!((ensemble.pair_potential(0, 1).unwrap() + 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn pair_potential_rejects_out_of_range_index() {
        let result = default_ensemble().pair_potential(0, 10);
        assert_eq!(
            result,
            Err(EnsembleError::IndexOutOfRange { index: 10, len: 10 })
        );
    }

    #[test]
    fn pair_potential_rejects_same_particle() {
        let result = default_ensemble().pair_potential(4, 4);
        assert_eq!(result, Err(EnsembleError::SameParticle { index: 4 }));
    }

    #[test]
    fn pair_potential_rejects_coincident_particles() {
        let recipe = EnsembleRecipe {
            position_spacing: 0.0,
            ..EnsembleRecipe::default()
        };
        let ensemble = ParticleEnsemble::from_recipe(3, &recipe);
        assert_eq!(
            ensemble.pair_potential(0, 2),
            Err(EnsembleError::CoincidentParticles { i: 0, j: 2 })
        );
        assert!(ensemble.total_pair_potential().is_err());
    }

    #[test]
    fn total_pair_potential_sums_distinct_pairs() {
        let ensemble = ParticleEnsemble::from_recipe(3, &EnsembleRecipe::default());
        // pairs at separations 0.5, 1.0, 0.5
        let total = ensemble.total_pair_potential().unwrap();
        assert!((total - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn pair_potential_of_close_pair_is_unbounded_inverse_distance() {
        let ensemble = ParticleEnsemble::from_columns(
            vec![1.0, 1.0],
            vec![0.0, 0.0],
            vec![1.0, 1.0],
            vec![0.0, 1e-7],
        )
        .unwrap();
        let v = ensemble.pair_potential(0, 1).unwrap();
        assert!((v - 1e7).abs() < 1e-3);
    }

    #[test]
    fn pair_potential_with_neutral_particle_is_zero() {
        let ensemble = ParticleEnsemble::from_columns(
            vec![1.0, 1.0],
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![0.0, 1e-7],
        )
        .unwrap();
        assert_eq!(ensemble.pair_potential(0, 1), Ok(0.0));
    }

    #[test]
    fn from_columns_rejects_mismatched_lengths() {
        let result = ParticleEnsemble::from_columns(
            vec![1.0, 1.0],
            vec![0.0, 0.0],
            vec![1.0],
            vec![0.0, 1.0],
        );
        assert_eq!(
            result,
            Err(EnsembleError::LengthMismatch {
                column: "charges",
                expected: 2,
                found: 1,
            })
        );
    }

    #[test]
    fn empty_ensemble_has_no_energy() {
        let ensemble = ParticleEnsemble::from_recipe(0, &EnsembleRecipe::default());
        assert!(ensemble.is_empty());
        assert_eq!(ensemble.total_kinetic_energy(), 0.0);
        assert_eq!(ensemble.total_pair_potential(), Ok(0.0));
    }
}
