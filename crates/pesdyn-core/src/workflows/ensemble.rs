use crate::core::models::ensemble::ParticleEnsemble;
use crate::engine::config::EnsembleConfig;
use crate::engine::error::EngineError;
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct PairEnergy {
    pub i: usize,
    pub j: usize,
    pub separation: f64,
    pub potential: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnsembleReport {
    pub ensemble: ParticleEnsemble,
    pub kinetic_energies: Vec<f64>,
    pub total_kinetic_energy: f64,
    pub pair: PairEnergy,
    pub total_pair_potential: f64,
}

#[instrument(skip_all, name = "ensemble_workflow")]
pub fn run(config: &EnsembleConfig) -> Result<EnsembleReport, EngineError> {
    info!(
        "Building an ensemble of {} particles.",
        config.num_particles
    );
    let ensemble = ParticleEnsemble::from_recipe(config.num_particles, &config.recipe);

    let kinetic_energies = ensemble.kinetic_energies();
    let total_kinetic_energy = kinetic_energies.iter().sum();

    let (i, j) = config.pair;
    let pair = PairEnergy {
        i,
        j,
        separation: ensemble.separation(i, j)?,
        potential: ensemble.pair_potential(i, j)?,
    };
    let total_pair_potential = ensemble.total_pair_potential()?;
    info!(
        separation = pair.separation,
        potential = pair.potential,
        "Pair energy computed."
    );

    Ok(EnsembleReport {
        ensemble,
        kinetic_energies,
        total_kinetic_energy,
        pair,
        total_pair_potential,
    })
}
