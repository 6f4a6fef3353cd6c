use crate::cli::EnsembleArgs;
use crate::error::{CliError, Result};
use pesdyn::core::models::ensemble::EnsembleRecipe;
use pesdyn::engine::config::EnsembleConfig;
use pesdyn::workflows;
use tracing::info;

fn build_config(args: &EnsembleArgs) -> Result<EnsembleConfig> {
    let defaults = EnsembleConfig::default();
    let pair = match args.pair.as_deref() {
        None => defaults.pair,
        Some(&[i, j]) => (i, j),
        Some(other) => {
            return Err(CliError::Argument(format!(
                "--pair expects exactly two indices, got {}",
                other.len()
            )));
        }
    };

    let recipe = &defaults.recipe;
    let config = EnsembleConfig {
        num_particles: args.particles.unwrap_or(defaults.num_particles),
        recipe: EnsembleRecipe {
            mass: args.mass.unwrap_or(recipe.mass),
            charge: args.charge.unwrap_or(recipe.charge),
            position_spacing: args.position_spacing.unwrap_or(recipe.position_spacing),
            velocity_spacing: args.velocity_spacing.unwrap_or(recipe.velocity_spacing),
        },
        pair,
    };
    if config.num_particles < 2 {
        return Err(CliError::Argument(
            "an ensemble needs at least two particles".to_string(),
        ));
    }
    Ok(config)
}

pub async fn run(args: EnsembleArgs) -> Result<()> {
    let config = build_config(&args)?;
    info!("Invoking the ensemble workflow...");
    let report = workflows::ensemble::run(&config)?;

    println!(
        "{:>5} {:>12} {:>12} {:>12} {:>14}",
        "index", "mass", "charge", "position", "kinetic"
    );
    let ensemble = &report.ensemble;
    for (i, kinetic) in report.kinetic_energies.iter().enumerate() {
        println!(
            "{:>5} {:>12.4} {:>12.4} {:>12.4} {:>14.6}",
            i,
            ensemble.masses()[i],
            ensemble.charges()[i],
            ensemble.positions()[i],
            kinetic
        );
    }
    println!();
    println!(
        "Total kinetic energy      : {:.6} hartree",
        report.total_kinetic_energy
    );
    println!(
        "Pair ({}, {}) separation   : {:.6} bohr",
        report.pair.i, report.pair.j, report.pair.separation
    );
    println!(
        "Pair ({}, {}) potential    : {:.6} hartree",
        report.pair.i, report.pair.j, report.pair.potential
    );
    println!(
        "Total pair potential      : {:.6} hartree",
        report.total_pair_potential
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_args() -> EnsembleArgs {
        EnsembleArgs {
            particles: None,
            mass: None,
            charge: None,
            position_spacing: None,
            velocity_spacing: None,
            pair: None,
        }
    }

    #[test]
    fn build_config_defaults_match_core_defaults() {
        assert_eq!(build_config(&empty_args()).unwrap(), EnsembleConfig::default());
    }

    #[test]
    fn build_config_applies_overrides() {
        let mut args = empty_args();
        args.particles = Some(4);
        args.charge = Some(-2.0);
        args.pair = Some(vec![3, 1]);

        let config = build_config(&args).unwrap();

        assert_eq!(config.num_particles, 4);
        assert_eq!(config.recipe.charge, -2.0);
        assert_eq!(config.recipe.mass, 1.0);
        assert_eq!(config.pair, (3, 1));
    }

    #[test]
    fn build_config_rejects_single_particle() {
        let mut args = empty_args();
        args.particles = Some(1);
        assert!(matches!(build_config(&args), Err(CliError::Argument(_))));
    }
}
