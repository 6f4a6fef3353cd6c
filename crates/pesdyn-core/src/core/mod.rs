//! # Core Module
//!
//! Fundamental building blocks for the diatomic dynamics workflows.
//!
//! ## Architecture
//!
//! - **Data Models** ([`models`]) - Particle ensembles, PES sample tables and trajectories
//! - **Force Models** ([`forcefield`]) - Analytical potentials and the [`forcefield::model::ForceModel`] seam
//! - **Interpolation** ([`interpolate`]) - Cubic splines and piecewise polynomials
//! - **File I/O** ([`io`]) - CSV reading and writing of tables, curves and trajectories
//! - **Units** ([`units`]) - Atomic-unit conversion factors and reference constants
//!
//! All quantities are expressed in Hartree atomic units unless a name says otherwise:
//! distances in bohr, energies in hartree, masses in electron masses and times in
//! atomic time units.

pub mod forcefield;
pub mod interpolate;
pub mod io;
pub mod models;
pub mod units;
