use crate::core::forcefield::model::ForceModel;
use crate::core::forcefield::term::EnergyTerm;

/// Position and velocity of the bond-length coordinate at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseSpacePoint {
    pub position: f64,
    pub velocity: f64,
}

impl PhaseSpacePoint {
    pub fn new(position: f64, velocity: f64) -> Self {
        Self { position, velocity }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }

    pub fn energy(&self, reduced_mass: f64, model: &impl ForceModel) -> EnergyTerm {
        EnergyTerm::new(
            0.5 * reduced_mass * self.velocity * self.velocity,
            model.energy(self.position),
        )
    }
}

/// Sampled time series of a single trajectory.
///
/// Frame `i` holds the state after `i` integration steps at time `i * dt`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trajectory {
    times: Vec<f64>,
    positions: Vec<f64>,
    velocities: Vec<f64>,
}

impl Trajectory {
    pub fn with_capacity(frames: usize) -> Self {
        Self {
            times: Vec::with_capacity(frames),
            positions: Vec::with_capacity(frames),
            velocities: Vec::with_capacity(frames),
        }
    }

    pub fn push(&mut self, time: f64, state: PhaseSpacePoint) {
        self.times.push(time);
        self.positions.push(state.position);
        self.velocities.push(state.velocity);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    pub fn velocities(&self) -> &[f64] {
        &self.velocities
    }

    pub fn frame(&self, index: usize) -> Option<PhaseSpacePoint> {
        Some(PhaseSpacePoint::new(
            *self.positions.get(index)?,
            *self.velocities.get(index)?,
        ))
    }

    pub fn first(&self) -> Option<PhaseSpacePoint> {
        self.frame(0)
    }

    pub fn last(&self) -> Option<PhaseSpacePoint> {
        self.len().checked_sub(1).and_then(|i| self.frame(i))
    }

    pub fn momenta(&self, reduced_mass: f64) -> Vec<f64> {
        self.velocities.iter().map(|v| reduced_mass * v).collect()
    }

    pub fn kinetic_energies(&self, reduced_mass: f64) -> Vec<f64> {
        self.velocities
            .iter()
            .map(|v| 0.5 * reduced_mass * v * v)
            .collect()
    }

    pub fn energies(&self, reduced_mass: f64, model: &impl ForceModel) -> Vec<EnergyTerm> {
        self.positions
            .iter()
            .zip(&self.velocities)
            .map(|(&r, &v)| PhaseSpacePoint::new(r, v).energy(reduced_mass, model))
            .collect()
    }

    /// Largest deviation of the total energy from its initial value.
    pub fn energy_drift(&self, reduced_mass: f64, model: &impl ForceModel) -> f64 {
        let mut frames = self
            .positions
            .iter()
            .zip(&self.velocities)
            .map(|(&r, &v)| PhaseSpacePoint::new(r, v).energy(reduced_mass, model).total());
        let Some(initial) = frames.next() else {
            return 0.0;
        };
        frames.fold(0.0, |max, e| f64::max(max, (e - initial).abs()))
    }

    /// Smallest and largest bond length visited.
    pub fn position_bounds(&self) -> Option<(f64, f64)> {
        if self.is_empty() {
            return None;
        }
        Some(self.positions.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), &r| (lo.min(r), hi.max(r)),
        ))
    }
}
