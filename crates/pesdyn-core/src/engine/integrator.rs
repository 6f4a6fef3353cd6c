//! Velocity-Verlet integration of a single bond-length coordinate.
//!
//! One update from `(r, v)` with reduced mass μ and step `dt`:
//!
//! ```text
//! a  = F(r) / μ
//! r' = r + v·dt + ½·a·dt²
//! a' = F(r') / μ
//! v' = v + ½·(a + a')·dt
//! ```
//!
//! The scheme is symplectic and time-reversible, so the total energy of a
//! conservative system oscillates around its initial value instead of drifting.

use super::error::EngineError;
use super::progress::ProgressReporter;
use crate::core::forcefield::model::ForceModel;
use crate::core::models::trajectory::{PhaseSpacePoint, Trajectory};
use tracing::{debug, trace};

/// Steps between two progress updates.
const REPORT_INTERVAL: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityVerlet {
    reduced_mass: f64,
    time_step: f64,
}

impl VelocityVerlet {
    pub fn new(reduced_mass: f64, time_step: f64) -> Result<Self, EngineError> {
        if !(reduced_mass.is_finite() && reduced_mass > 0.0) {
            return Err(EngineError::InvalidParameter {
                name: "reduced_mass",
                value: reduced_mass,
                reason: "must be positive and finite",
            });
        }
        if !(time_step.is_finite() && time_step > 0.0) {
            return Err(EngineError::InvalidParameter {
                name: "time_step",
                value: time_step,
                reason: "must be positive and finite",
            });
        }
        Ok(Self {
            reduced_mass,
            time_step,
        })
    }

    pub fn reduced_mass(&self) -> f64 {
        self.reduced_mass
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    #[inline]
    pub fn acceleration(&self, r: f64, model: &impl ForceModel) -> f64 {
        model.force(r) / self.reduced_mass
    }

    /// Advances `state` by one time step.
    #[inline]
    pub fn step(&self, state: PhaseSpacePoint, model: &impl ForceModel) -> PhaseSpacePoint {
        let a_curr = self.acceleration(state.position, model);
        self.step_from(state, a_curr, model).0
    }

    /// One update given the acceleration at `state`; also returns the new acceleration.
    #[inline]
    fn step_from(
        &self,
        state: PhaseSpacePoint,
        a_curr: f64,
        model: &impl ForceModel,
    ) -> (PhaseSpacePoint, f64) {
        let dt = self.time_step;
        let r_fut = state.position + state.velocity * dt + 0.5 * a_curr * dt * dt;
        let a_fut = self.acceleration(r_fut, model);
        let v_fut = state.velocity + 0.5 * (a_curr + a_fut) * dt;
        (PhaseSpacePoint::new(r_fut, v_fut), a_fut)
    }

    /// Advances `state` by `steps` updates without recording intermediate frames.
    pub fn advance(
        &self,
        mut state: PhaseSpacePoint,
        steps: usize,
        model: &impl ForceModel,
    ) -> PhaseSpacePoint {
        let mut a_curr = self.acceleration(state.position, model);
        for _ in 0..steps {
            (state, a_curr) = self.step_from(state, a_curr, model);
        }
        state
    }

    /// Integrates a trajectory of `num_frames` frames starting at `initial`.
    ///
    /// Frame `i` is the state after `i` updates at time `i·dt`. Progress is
    /// reported as `TaskAdvance` events in blocks of steps.
    pub fn integrate(
        &self,
        initial: PhaseSpacePoint,
        num_frames: usize,
        model: &impl ForceModel,
        reporter: &ProgressReporter,
    ) -> Result<Trajectory, EngineError> {
        if !initial.is_finite() {
            return Err(EngineError::NonFiniteState { step: 0 });
        }
        debug!(
            r0 = initial.position,
            v0 = initial.velocity,
            num_frames,
            dt = self.time_step,
            "Starting velocity-Verlet integration."
        );

        let mut trajectory = Trajectory::with_capacity(num_frames);
        if num_frames == 0 {
            return Ok(trajectory);
        }
        trajectory.push(0.0, initial);

        let mut state = initial;
        let mut a_curr = self.acceleration(state.position, model);
        let mut unreported = 0;
        for step in 1..num_frames {
            (state, a_curr) = self.step_from(state, a_curr, model);
            if !state.is_finite() {
                return Err(EngineError::NonFiniteState { step });
            }
            trajectory.push(step as f64 * self.time_step, state);

            unreported += 1;
            if unreported == REPORT_INTERVAL {
                trace!(step, r = state.position, v = state.velocity, "Integration checkpoint.");
                reporter.advance(unreported as u64);
                unreported = 0;
            }
        }
        reporter.advance(unreported as u64);

        Ok(trajectory)
    }
}
