use super::piecewise::PiecewisePolynomial;
use nalgebra::{DMatrix, DVector};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Fewest samples that determine a cubic interpolant.
pub const MIN_POINTS: usize = 4;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SplineError {
    #[error("A cubic spline needs at least {required} points, found {found}")]
    TooFewPoints { required: usize, found: usize },
    #[error("Abscissa and ordinate lengths differ ({x} vs {y})")]
    LengthMismatch { x: usize, y: usize },
    #[error("Abscissae must be strictly increasing (violated at index {index})")]
    NonIncreasing { index: usize },
    #[error("Non-finite sample at index {index}")]
    NonFinite { index: usize },
    #[error("Spline system is singular")]
    Singular,
    #[error("Unknown boundary condition '{0}'. Expected 'not-a-knot' or 'natural'.")]
    UnknownBoundary(String),
}

/// End conditions closing the spline system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoundaryCondition {
    /// Third derivative continuous across the second and penultimate knots.
    #[default]
    NotAKnot,
    /// Zero second derivative at both ends.
    Natural,
}

impl fmt::Display for BoundaryCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryCondition::NotAKnot => write!(f, "not-a-knot"),
            BoundaryCondition::Natural => write!(f, "natural"),
        }
    }
}

impl FromStr for BoundaryCondition {
    type Err = SplineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "not-a-knot" | "notaknot" => Ok(BoundaryCondition::NotAKnot),
            "natural" => Ok(BoundaryCondition::Natural),
            other => Err(SplineError::UnknownBoundary(other.to_string())),
        }
    }
}

/// Cubic spline passing through every sample.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline {
    polynomial: PiecewisePolynomial,
    boundary: BoundaryCondition,
}

impl CubicSpline {
    pub fn fit(x: &[f64], y: &[f64], boundary: BoundaryCondition) -> Result<Self, SplineError> {
        validate_samples(x, y)?;

        let second_derivatives = solve_second_derivatives(x, y, boundary)?;
        let n = x.len();
        let coefficients = (0..n - 1)
            .map(|i| {
                let h = x[i + 1] - x[i];
                let (m0, m1) = (second_derivatives[i], second_derivatives[i + 1]);
                [
                    y[i],
                    (y[i + 1] - y[i]) / h - h * (2.0 * m0 + m1) / 6.0,
                    0.5 * m0,
                    (m1 - m0) / (6.0 * h),
                ]
            })
            .collect();

        Ok(Self {
            polynomial: PiecewisePolynomial::from_parts(x.to_vec(), coefficients),
            boundary,
        })
    }

    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.polynomial.evaluate(x)
    }

    pub fn evaluate_many(&self, xs: &[f64]) -> Vec<f64> {
        self.polynomial.evaluate_many(xs)
    }

    pub fn derivative(&self) -> PiecewisePolynomial {
        self.polynomial.derivative()
    }

    pub fn second_derivative(&self) -> PiecewisePolynomial {
        self.polynomial.derivative().derivative()
    }

    pub fn polynomial(&self) -> &PiecewisePolynomial {
        &self.polynomial
    }

    pub fn boundary(&self) -> BoundaryCondition {
        self.boundary
    }

    pub fn domain(&self) -> (f64, f64) {
        self.polynomial.domain()
    }
}

fn validate_samples(x: &[f64], y: &[f64]) -> Result<(), SplineError> {
    if x.len() != y.len() {
        return Err(SplineError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }
    if x.len() < MIN_POINTS {
        return Err(SplineError::TooFewPoints {
            required: MIN_POINTS,
            found: x.len(),
        });
    }
    if let Some(index) = x
        .iter()
        .zip(y)
        .position(|(a, b)| !a.is_finite() || !b.is_finite())
    {
        return Err(SplineError::NonFinite { index });
    }
    if let Some(index) = x.windows(2).position(|w| w[1] <= w[0]) {
        return Err(SplineError::NonIncreasing { index: index + 1 });
    }
    Ok(())
}

/// Solves for the second derivative of the spline at every knot.
fn solve_second_derivatives(
    x: &[f64],
    y: &[f64],
    boundary: BoundaryCondition,
) -> Result<DVector<f64>, SplineError> {
    let n = x.len();
    let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();

    let mut matrix = DMatrix::<f64>::zeros(n, n);
    let mut rhs = DVector::<f64>::zeros(n);

    for i in 1..n - 1 {
        matrix[(i, i - 1)] = h[i - 1];
        matrix[(i, i)] = 2.0 * (h[i - 1] + h[i]);
        matrix[(i, i + 1)] = h[i];
        rhs[i] = 6.0 * ((y[i + 1] - y[i]) / h[i] - (y[i] - y[i - 1]) / h[i - 1]);
    }

    match boundary {
        BoundaryCondition::NotAKnot => {
            matrix[(0, 0)] = h[1];
            matrix[(0, 1)] = -(h[0] + h[1]);
            matrix[(0, 2)] = h[0];

            matrix[(n - 1, n - 3)] = h[n - 2];
            matrix[(n - 1, n - 2)] = -(h[n - 3] + h[n - 2]);
            matrix[(n - 1, n - 1)] = h[n - 3];
        }
        BoundaryCondition::Natural => {
            matrix[(0, 0)] = 1.0;
            matrix[(n - 1, n - 1)] = 1.0;
        }
    }

    matrix.lu().solve(&rhs).ok_or(SplineError::Singular)
}
