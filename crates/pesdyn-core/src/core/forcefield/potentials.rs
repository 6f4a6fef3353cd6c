/// Coulomb energy of two point charges in atomic units (k_e = 1).
///
/// `dist` must be non-zero; callers reject coincident charges.
#[inline]
pub fn coulomb_au(dist: f64, q1: f64, q2: f64) -> f64 {
    q1 * q2 / dist
}

#[inline]
pub fn harmonic(dist: f64, r_eq: f64, k: f64) -> f64 {
    let dr = dist - r_eq;
    0.5 * k * dr * dr
}

#[inline]
pub fn harmonic_force(dist: f64, r_eq: f64, k: f64) -> f64 {
    -k * (dist - r_eq)
}

/// Morse energy D·(1 − e^{−a(r − r_eq)})², zero at `r_eq` and approaching D on dissociation.
#[inline]
pub fn morse(dist: f64, r_eq: f64, well_depth: f64, width: f64) -> f64 {
    let x = 1.0 - (-width * (dist - r_eq)).exp();
    well_depth * x * x
}

#[inline]
pub fn morse_force(dist: f64, r_eq: f64, well_depth: f64, width: f64) -> f64 {
    let e = (-width * (dist - r_eq)).exp();
    -2.0 * well_depth * width * e * (1.0 - e)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn coulomb_calculates_repulsive_energy_correctly() {
        assert!(f64_approx_equal(coulomb_au(0.5, 1.0, 1.0), 2.0));
    }

    #[test]
    fn coulomb_calculates_attractive_energy_correctly() {
        assert!(f64_approx_equal(coulomb_au(2.0, 1.0, -1.0), -0.5));
    }

    #[test]
    fn coulomb_at_very_small_distance_follows_inverse_distance() {
        assert_eq!(coulomb_au(1e-7, 1.0, 1.0), 1.0 / 1e-7);
        assert_eq!(coulomb_au(1e-7, -1.0, 1.0), -1.0 / 1e-7);
    }

    #[test]
    fn coulomb_with_a_neutral_charge_is_zero() {
        assert_eq!(coulomb_au(1e-7, 0.0, 1.0), 0.0);
        assert_eq!(coulomb_au(3.0, 2.0, 0.0), 0.0);
    }

    #[test]
    fn harmonic_is_zero_at_equilibrium() {
        assert_eq!(harmonic(2.0, 2.0, 5.0), 0.0);
        assert_eq!(harmonic_force(2.0, 2.0, 5.0), 0.0);
    }

    #[test]
    fn harmonic_force_restores_towards_equilibrium() {
        assert!(f64_approx_equal(harmonic(3.0, 2.0, 4.0), 2.0));
        assert!(f64_approx_equal(harmonic_force(3.0, 2.0, 4.0), -4.0));
        assert!(f64_approx_equal(harmonic_force(1.5, 2.0, 4.0), 2.0));
    }

    #[test]
    fn morse_has_zero_energy_at_equilibrium_and_well_depth_at_infinity() {
        assert!(f64_approx_equal(morse(2.0, 2.0, 0.4, 1.2), 0.0));
        assert!(f64_approx_equal(morse(200.0, 2.0, 0.4, 1.2), 0.4));
    }

    #[test]
    fn morse_force_matches_finite_difference() {
        let h = 1e-6;
        let r = 2.4;
        let numeric = -(morse(r + h, 2.0, 0.4, 1.2) - morse(r - h, 2.0, 0.4, 1.2)) / (2.0 * h);
        assert!((morse_force(r, 2.0, 0.4, 1.2) - numeric).abs() < 1e-7);
    }
}
