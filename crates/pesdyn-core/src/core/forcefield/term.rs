use std::ops::{Add, AddAssign};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EnergyTerm {
    pub kinetic: f64,
    pub potential: f64,
}

impl EnergyTerm {
    pub fn new(kinetic: f64, potential: f64) -> Self {
        Self { kinetic, potential }
    }

    #[inline]
    pub fn total(&self) -> f64 {
        self.kinetic + self.potential
    }
}

impl Add for EnergyTerm {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            kinetic: self.kinetic + rhs.kinetic,
            potential: self.potential + rhs.potential,
        }
    }
}

impl AddAssign for EnergyTerm {
    fn add_assign(&mut self, rhs: Self) {
        self.kinetic += rhs.kinetic;
        self.potential += rhs.potential;
    }
}
