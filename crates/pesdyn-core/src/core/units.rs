/// Bohr per ångström.
pub const BOHR_PER_ANGSTROM: f64 = 1.88973;

/// Ångström per bohr, rounded the way the bond-length report has always printed it.
pub const ANGSTROM_PER_BOHR: f64 = 0.529;

/// Femtoseconds per atomic unit of time.
pub const FEMTOSECONDS_PER_AU_TIME: f64 = 2.418_884_326_585_7e-2;

/// Reduced mass used for the carbon monoxide oscillator, in electron masses.
pub const CO_REDUCED_MASS: f64 = 13625.0;

#[inline]
pub fn bohr_to_angstrom(bohr: f64) -> f64 {
    bohr * ANGSTROM_PER_BOHR
}

#[inline]
pub fn angstrom_to_bohr(angstrom: f64) -> f64 {
    angstrom * BOHR_PER_ANGSTROM
}

#[inline]
pub fn au_time_to_femtoseconds(time: f64) -> f64 {
    time * FEMTOSECONDS_PER_AU_TIME
}

/// Reduced mass μ = m₁m₂/(m₁ + m₂).
#[inline]
pub fn reduced_mass(m1: f64, m2: f64) -> f64 {
    m1 * m2 / (m1 + m2)
}
