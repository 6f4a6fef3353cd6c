use super::config::SamplingConfig;
use crate::core::models::trajectory::PhaseSpacePoint;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Lower and upper bound of the initial separation, as multiples of r_eq.
const SEPARATION_RANGE: (f64, f64) = (0.75, 2.0);
/// Half-width of the initial velocity interval, as a multiple of the velocity scale.
const VELOCITY_SPREAD: f64 = 2.0;

/// Draws random starting points for trajectories around the PES minimum.
pub struct InitialConditionSampler {
    rng: StdRng,
}

impl InitialConditionSampler {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// r₀ ~ U[0.75·r_eq, 2·r_eq), v₀ ~ U[−2v, 2v).
    pub fn sample(&mut self, r_eq: f64, velocity_scale: f64) -> PhaseSpacePoint {
        let position = self.uniform(SEPARATION_RANGE.0 * r_eq, SEPARATION_RANGE.1 * r_eq);
        let velocity = self.uniform(
            -VELOCITY_SPREAD * velocity_scale,
            VELOCITY_SPREAD * velocity_scale,
        );
        PhaseSpacePoint::new(position, velocity)
    }

    /// Samples a starting point, honouring any fixed values in `config`.
    pub fn initial_condition(
        &mut self,
        r_eq: f64,
        velocity_scale: f64,
        config: &SamplingConfig,
    ) -> PhaseSpacePoint {
        let sampled = self.sample(r_eq, velocity_scale);
        let point = PhaseSpacePoint::new(
            config.initial_separation.unwrap_or(sampled.position),
            config.initial_velocity.unwrap_or(sampled.velocity),
        );
        debug!(r0 = point.position, v0 = point.velocity, "Initial condition chosen.");
        point
    }

    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if low < high {
            self.rng.gen_range(low..high)
        } else {
            low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_stay_within_the_documented_ranges() {
        let mut sampler = InitialConditionSampler::new(Some(11));
        for _ in 0..1000 {
            let point = sampler.sample(2.0, 0.01);
            assert!((1.5..4.0).contains(&point.position));
            assert!((-0.02..0.02).contains(&point.velocity));
        }
    }

    #[test]
    fn equal_seeds_produce_equal_samples() {
        let mut a = InitialConditionSampler::new(Some(42));
        let mut b = InitialConditionSampler::new(Some(42));
        for _ in 0..10 {
            assert_eq!(a.sample(2.1, 5e-4), b.sample(2.1, 5e-4));
        }
    }

    #[test]
    fn different_seeds_produce_different_samples() {
        let a = InitialConditionSampler::new(Some(1)).sample(2.1, 5e-4);
        let b = InitialConditionSampler::new(Some(2)).sample(2.1, 5e-4);
        assert_ne!(a, b);
    }

    #[test]
    fn overrides_replace_sampled_values() {
        let mut sampler = InitialConditionSampler::new(Some(3));
        let config = SamplingConfig {
            initial_separation: Some(2.5),
            initial_velocity: Some(0.0),
            ..SamplingConfig::default()
        };
        let point = sampler.initial_condition(2.1, 5e-4, &config);
        assert_eq!(point, PhaseSpacePoint::new(2.5, 0.0));
    }

    #[test]
    fn partial_override_keeps_sampled_velocity() {
        let config = SamplingConfig {
            initial_separation: Some(2.5),
            ..SamplingConfig::default()
        };
        let sampled = InitialConditionSampler::new(Some(9)).sample(2.1, 5e-4);
        let point = InitialConditionSampler::new(Some(9)).initial_condition(2.1, 5e-4, &config);
        assert_eq!(point.position, 2.5);
        assert_eq!(point.velocity, sampled.velocity);
    }

    #[test]
    fn zero_velocity_scale_yields_zero_velocity() {
        let point = InitialConditionSampler::new(Some(5)).sample(2.0, 0.0);
        assert_eq!(point.velocity, 0.0);
    }
}
