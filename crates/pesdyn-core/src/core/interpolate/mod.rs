//! # Interpolation Module
//!
//! Smooth interpolants through tabulated data. The PES analysis fits a cubic
//! spline to sampled energies and differentiates it to obtain forces and the
//! curvature at the minimum.
//!
//! - [`spline`] - Interpolating cubic splines with not-a-knot or natural ends
//! - [`piecewise`] - Piecewise polynomials, their evaluation and derivatives

pub mod piecewise;
pub mod spline;
