//! # Core Models Module
//!
//! Plain data structures shared by every layer of pesdyn.
//!
//! ## Key Components
//!
//! - [`ensemble`] - A one-dimensional particle ensemble stored as parallel columns
//! - [`pes`] - Sampled potential-energy surface of a single bond-length coordinate
//! - [`trajectory`] - Time series of position and velocity written by the integrator
//!
//! None of these types carries behaviour beyond validation and derived quantities;
//! fitting and integration live in [`crate::engine`].

pub mod ensemble;
pub mod pes;
pub mod trajectory;
