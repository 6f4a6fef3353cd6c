//! # I/O Module
//!
//! CSV reading and writing for the tabular data pesdyn consumes and produces.
//!
//! - [`traits`] - The [`traits::TabularFile`] interface with path-based helpers
//! - [`pes`] - Sampled PES tables (`separation,energy`) and dense PES curves
//! - [`trajectory`] - Trajectory frames with derived momenta and energies

pub mod pes;
pub mod traits;
pub mod trajectory;

use crate::core::models::pes::PesTableError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CsvFileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid PES table: {0}")]
    Table(#[from] PesTableError),
}
