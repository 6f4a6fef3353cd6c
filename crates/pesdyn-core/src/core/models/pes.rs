use thiserror::Error;

/// Minimum number of samples needed to fit a cubic interpolant.
pub const MIN_SAMPLES: usize = 4;

const CO_SEPARATIONS: [f64; 20] = [
    0.944865, 1.24324342, 1.54162184, 1.84000026, 2.13837868, 2.43675711, 2.73513553,
    3.03351395, 3.33189237, 3.63027079, 3.92864921, 4.22702763, 4.52540605, 4.82378447,
    5.12216289, 5.42054132, 5.71891974, 6.01729816, 6.31567658, 6.614055,
];

const CO_ENERGIES: [f64; 20] = [
    -107.6005848551,
    -111.3806002009,
    -112.7228746824,
    -113.1529129289,
    -113.2441488055,
    -113.2151596774,
    -113.1513342096,
    -113.0823324745,
    -113.0170650624,
    -112.9596693222,
    -112.9104794422,
    -112.8689540440,
    -112.8343322396,
    -112.8067244781,
    -112.7837633359,
    -112.7668290296,
    -112.7557318201,
    -112.7378824687,
    -112.737892888,
    -112.7397032863,
];

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PesTableError {
    #[error("Separation and energy columns differ in length ({separations} vs {energies})")]
    LengthMismatch { separations: usize, energies: usize },
    #[error("A PES table needs at least {required} samples, found {found}")]
    TooFewSamples { required: usize, found: usize },
    #[error("Sample {index} contains a non-finite value")]
    NonFinite { index: usize },
    #[error("Separations must be strictly increasing (violated at sample {index})")]
    NotIncreasing { index: usize },
}

/// Energies of a diatomic molecule sampled along its bond length.
///
/// Separations are in bohr and strictly increasing, energies in hartree.
#[derive(Debug, Clone, PartialEq)]
pub struct PesTable {
    separations: Vec<f64>,
    energies: Vec<f64>,
}

impl PesTable {
    pub fn new(separations: Vec<f64>, energies: Vec<f64>) -> Result<Self, PesTableError> {
        if separations.len() != energies.len() {
            return Err(PesTableError::LengthMismatch {
                separations: separations.len(),
                energies: energies.len(),
            });
        }
        if separations.len() < MIN_SAMPLES {
            return Err(PesTableError::TooFewSamples {
                required: MIN_SAMPLES,
                found: separations.len(),
            });
        }
        for (index, (r, e)) in separations.iter().zip(&energies).enumerate() {
            if !r.is_finite() || !e.is_finite() {
                return Err(PesTableError::NonFinite { index });
            }
        }
        if let Some(index) = separations.windows(2).position(|w| w[1] <= w[0]) {
            return Err(PesTableError::NotIncreasing { index: index + 1 });
        }
        Ok(Self {
            separations,
            energies,
        })
    }

    /// Ground-state PES of carbon monoxide, 20 points between 0.5 and 3.5 Å.
    pub fn carbon_monoxide() -> Self {
        Self {
            separations: CO_SEPARATIONS.to_vec(),
            energies: CO_ENERGIES.to_vec(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.separations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.separations.is_empty()
    }

    pub fn separations(&self) -> &[f64] {
        &self.separations
    }

    pub fn energies(&self) -> &[f64] {
        &self.energies
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.separations
            .iter()
            .copied()
            .zip(self.energies.iter().copied())
    }

    /// The lowest sampled energy as `(separation, energy)`.
    pub fn min_sample(&self) -> (f64, f64) {
        self.points()
            .fold((f64::NAN, f64::INFINITY), |best, point| {
                if point.1 < best.1 { point } else { best }
            })
    }

    pub fn range(&self) -> (f64, f64) {
        (self.separations[0], self.separations[self.len() - 1])
    }
}

/// A PES and its force evaluated on a dense grid.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PesCurve {
    pub separations: Vec<f64>,
    pub energies: Vec<f64>,
    pub forces: Vec<f64>,
}

impl PesCurve {
    #[inline]
    pub fn len(&self) -> usize {
        self.separations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.separations.is_empty()
    }

    /// Index of the lowest energy; the first one wins on ties.
    pub fn argmin(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, &e) in self.energies.iter().enumerate() {
            match best {
                Some(b) if self.energies[b] <= e => {}
                _ => best = Some(i),
            }
        }
        best
    }
}
