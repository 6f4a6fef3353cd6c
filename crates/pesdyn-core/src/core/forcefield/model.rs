use super::potentials;
use crate::core::interpolate::piecewise::PiecewisePolynomial;
use crate::core::interpolate::spline::{BoundaryCondition, CubicSpline, SplineError};
use crate::core::models::pes::PesTable;

/// A conservative one-dimensional interaction along the bond coordinate.
///
/// Implementors must keep `force` equal to the negative derivative of `energy`.
pub trait ForceModel: Send + Sync {
    fn energy(&self, r: f64) -> f64;
    fn force(&self, r: f64) -> f64;
}

impl<T: ForceModel + ?Sized> ForceModel for &T {
    #[inline]
    fn energy(&self, r: f64) -> f64 {
        (**self).energy(r)
    }

    #[inline]
    fn force(&self, r: f64) -> f64 {
        (**self).force(r)
    }
}

/// No interaction at all: uniform linear motion.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FreeMotion;

impl ForceModel for FreeMotion {
    #[inline]
    fn energy(&self, _r: f64) -> f64 {
        0.0
    }

    #[inline]
    fn force(&self, _r: f64) -> f64 {
        0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarmonicWell {
    pub r_eq: f64,
    pub k: f64,
}

impl HarmonicWell {
    pub fn new(r_eq: f64, k: f64) -> Self {
        Self { r_eq, k }
    }
}

impl ForceModel for HarmonicWell {
    #[inline]
    fn energy(&self, r: f64) -> f64 {
        potentials::harmonic(r, self.r_eq, self.k)
    }

    #[inline]
    fn force(&self, r: f64) -> f64 {
        potentials::harmonic_force(r, self.r_eq, self.k)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MorseWell {
    pub r_eq: f64,
    pub well_depth: f64,
    pub width: f64,
}

impl MorseWell {
    pub fn new(r_eq: f64, well_depth: f64, width: f64) -> Self {
        Self {
            r_eq,
            well_depth,
            width,
        }
    }

    /// Curvature at the minimum, 2·D·a².
    pub fn force_constant(&self) -> f64 {
        2.0 * self.well_depth * self.width * self.width
    }
}

impl ForceModel for MorseWell {
    #[inline]
    fn energy(&self, r: f64) -> f64 {
        potentials::morse(r, self.r_eq, self.well_depth, self.width)
    }

    #[inline]
    fn force(&self, r: f64) -> f64 {
        potentials::morse_force(r, self.r_eq, self.well_depth, self.width)
    }
}

/// A PES fitted with a cubic spline; the force is the negated spline derivative.
#[derive(Debug, Clone, PartialEq)]
pub struct SplinePes {
    energy: CubicSpline,
    gradient: PiecewisePolynomial,
    curvature: PiecewisePolynomial,
}

impl SplinePes {
    pub fn fit(table: &PesTable, boundary: BoundaryCondition) -> Result<Self, SplineError> {
        let energy = CubicSpline::fit(table.separations(), table.energies(), boundary)?;
        let gradient = energy.derivative();
        let curvature = gradient.derivative();
        Ok(Self {
            energy,
            gradient,
            curvature,
        })
    }

    pub fn spline(&self) -> &CubicSpline {
        &self.energy
    }

    /// dE/dr at `r`.
    #[inline]
    pub fn gradient(&self, r: f64) -> f64 {
        self.gradient.evaluate(r)
    }

    /// d²E/dr² at `r`.
    #[inline]
    pub fn curvature(&self, r: f64) -> f64 {
        self.curvature.evaluate(r)
    }
}

impl ForceModel for SplinePes {
    #[inline]
    fn energy(&self, r: f64) -> f64 {
        self.energy.evaluate(r)
    }

    #[inline]
    fn force(&self, r: f64) -> f64 {
        -self.gradient.evaluate(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sampled_morse(well: &MorseWell) -> PesTable {
        let separations: Vec<f64> = (0..80).map(|i| 1.2 + 0.05 * i as f64).collect();
        let energies = separations.iter().map(|&r| well.energy(r)).collect();
        PesTable::new(separations, energies).unwrap()
    }

    #[test]
    fn free_motion_has_no_force_or_energy() {
        assert_eq!(FreeMotion.force(3.0), 0.0);
        assert_eq!(FreeMotion.energy(3.0), 0.0);
    }

    #[test]
    fn harmonic_well_force_is_negative_gradient() {
        let well = HarmonicWell::new(2.0, 1.5);
        let h = 1e-6;
        let numeric = -(well.energy(2.3 + h) - well.energy(2.3 - h)) / (2.0 * h);
        assert!((well.force(2.3) - numeric).abs() < 1e-7);
    }

    #[test]
    fn morse_force_constant_matches_curvature() {
        let well = MorseWell::new(2.0, 0.4, 1.2);
        let h = 1e-4;
        let numeric =
            (well.energy(2.0 + h) - 2.0 * well.energy(2.0) + well.energy(2.0 - h)) / (h * h);
        assert!((well.force_constant() - numeric).abs() < 1e-5);
    }

    #[test]
    fn spline_pes_reproduces_sampled_morse_force() {
        let well = MorseWell::new(2.1, 0.4, 1.2);
        let pes = SplinePes::fit(&sampled_morse(&well), BoundaryCondition::NotAKnot).unwrap();
        for r in [1.5, 2.05, 2.6, 3.7] {
            assert!((pes.energy(r) - well.energy(r)).abs() < 1e-4);
            assert!((pes.force(r) - well.force(r)).abs() < 1e-3);
        }
        assert!((pes.curvature(2.1) - well.force_constant()).abs() < 1e-2);
    }

    #[test]
    fn spline_pes_force_is_negated_gradient() {
        let pes = SplinePes::fit(&PesTable::carbon_monoxide(), BoundaryCondition::NotAKnot).unwrap();
        assert_eq!(pes.force(3.0), -pes.gradient(3.0));
        assert!(pes.force(1.5) > 0.0);
        assert!(pes.force(3.0) < 0.0);
    }

    #[test]
    fn force_model_is_usable_through_references() {
        fn force_at<M: ForceModel>(model: M, r: f64) -> f64 {
            model.force(r)
        }
        let well = HarmonicWell::new(1.0, 2.0);
        assert_eq!(force_at(&well, 2.0), -2.0);
    }
}
