//! # Force Field Module
//!
//! Potential-energy functions of a single bond-length coordinate and the
//! [`model::ForceModel`] seam through which the integrator sees them.
//!
//! ## Key Components
//!
//! - [`potentials`] - Pure analytical energy and force expressions (Coulomb, harmonic, Morse)
//! - [`model`] - The `ForceModel` trait and its implementations, including a spline-fitted PES
//! - [`term`] - Kinetic/potential energy bookkeeping
//!
//! ## Sign Convention
//!
//! Every force returned by this module is the negative derivative of the matching
//! potential energy, F(r) = −dE/dr.
//!
//! ```ignore
//! use pesdyn::core::forcefield::model::{ForceModel, HarmonicWell};
//!
//! let well = HarmonicWell::new(2.13, 1.2);
//! assert!(well.force(2.5) < 0.0);
//! ```

pub mod model;
pub mod potentials;
pub mod term;
