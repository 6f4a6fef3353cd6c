//! Layered run configuration: CLI flags over `-S` overrides over the TOML file
//! over built-in defaults.

mod builder;
mod defaults;
mod file;
mod models;

pub use builder::{build_dynamics_config, build_pes_config};
