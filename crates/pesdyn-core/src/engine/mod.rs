//! # Engine Module
//!
//! The numerical machinery that turns a sampled PES into trajectories.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Grid, integration and sampling settings with validating builders
//! - **Error Handling** ([`error`]) - Engine-specific error types and error propagation
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress reporting
//! - **Integration** ([`integrator`]) - The velocity-Verlet integrator
//! - **Analysis** ([`analysis`]) - Spline fit, equilibrium geometry and harmonic quantities
//! - **Sampling** ([`sampling`]) - Random initial conditions around the equilibrium
//!
//! ## Key Capabilities
//!
//! - **Symplectic integration** conserving energy over long trajectories
//! - **Reproducible sampling** through explicit seeds
//! - **Parallel trajectories** driven by the workflows on the rayon pool

pub mod analysis;
pub mod config;
pub mod error;
pub mod integrator;
pub mod progress;
pub mod sampling;
