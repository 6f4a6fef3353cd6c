//! # pesdyn Core Library
//!
//! Potential-energy-surface fitting and classical molecular dynamics for a single
//! bond-length coordinate, together with the simple particle-ensemble energetics
//! used to introduce kinetic and Coulomb potential energy.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture to keep the numerical pieces
//! independent of the procedures that combine them.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`ParticleEnsemble`, `PesTable`,
//!   `Trajectory`), pure potentials and force models, cubic-spline interpolation,
//!   CSV I/O and unit constants.
//!
//! - **[`engine`]: The Logic Core.** Configuration, error types, progress reporting,
//!   the velocity-Verlet integrator, PES analysis and initial-condition sampling.
//!
//! - **[`workflows`]: The Public API.** Complete procedures such as fitting a PES and
//!   running a trajectory on it. This is the entry point for end-users of the library.

pub mod core;
pub mod engine;
pub mod workflows;
