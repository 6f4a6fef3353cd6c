//! # Workflows Module
//!
//! High-level procedures that tie the [`crate::core`] models and the
//! [`crate::engine`] machinery together.
//!
//! - **Ensemble Workflow** ([`ensemble`]) - Kinetic and Coulomb energetics of a particle ensemble
//! - **PES Workflow** ([`pes`]) - Spline fit of a sampled PES with equilibrium and force-constant analysis
//! - **Dynamics Workflow** ([`dynamics`]) - PES analysis followed by one or more velocity-Verlet trajectories
//!
//! Each workflow reports its phases through a
//! [`ProgressReporter`](crate::engine::progress::ProgressReporter) and returns a
//! plain result struct for the caller to print or persist.

pub mod dynamics;
pub mod ensemble;
pub mod pes;
