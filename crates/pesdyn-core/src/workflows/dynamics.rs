use crate::core::models::pes::PesTable;
use crate::core::models::trajectory::{PhaseSpacePoint, Trajectory};
use crate::engine::analysis::PesAnalysis;
use crate::engine::config::DynamicsConfig;
use crate::engine::error::EngineError;
use crate::engine::integrator::VelocityVerlet;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::sampling::InitialConditionSampler;
use rayon::prelude::*;
use tracing::{info, instrument, warn};

/// One integrated trajectory together with the point it started from.
#[derive(Debug, Clone)]
pub struct TrajectoryResult {
    pub initial: PhaseSpacePoint,
    pub trajectory: Trajectory,
    /// Largest |E(t) − E(0)| over the trajectory.
    pub energy_drift: f64,
}

#[derive(Debug, Clone)]
pub struct DynamicsResult {
    pub analysis: PesAnalysis,
    pub trajectories: Vec<TrajectoryResult>,
}

impl DynamicsResult {
    pub fn max_energy_drift(&self) -> f64 {
        self.trajectories
            .iter()
            .map(|t| t.energy_drift)
            .fold(0.0, f64::max)
    }
}

#[instrument(skip_all, name = "dynamics_workflow")]
pub fn run(
    table: &PesTable,
    config: &DynamicsConfig,
    reporter: &ProgressReporter,
) -> Result<DynamicsResult, EngineError> {
    let analysis = super::pes::run(table, &config.analysis, reporter)?;

    reporter.report(Progress::PhaseStart {
        name: "Sampling Initial Conditions",
    });
    let initials = sample_initial_conditions(&analysis, config);
    reporter.report(Progress::PhaseFinish);

    let integrator = VelocityVerlet::new(
        config.analysis.reduced_mass,
        config.integration.time_step,
    )?;
    let num_frames = config.integration.num_steps;
    let steps_per_trajectory = num_frames.saturating_sub(1) as u64;

    info!(
        "Integrating {} trajectories of {} frames (dt = {}).",
        initials.len(),
        num_frames,
        integrator.time_step()
    );
    reporter.report(Progress::PhaseStart {
        name: "Integrating Trajectories",
    });
    reporter.report(Progress::TaskStart {
        total_steps: steps_per_trajectory * initials.len() as u64,
    });

    let model = &analysis.model;
    let reduced_mass = integrator.reduced_mass();
    let trajectories = initials
        .par_iter()
        .map(|&initial| {
            let trajectory = integrator.integrate(initial, num_frames, model, reporter)?;
            let energy_drift = trajectory.energy_drift(reduced_mass, model);
            Ok(TrajectoryResult {
                initial,
                trajectory,
                energy_drift,
            })
        })
        .collect::<Result<Vec<_>, EngineError>>();

    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);
    let trajectories = trajectories?;

    for (index, result) in trajectories.iter().enumerate() {
        if let Some((low, high)) = result.trajectory.position_bounds() {
            let (start, end) = table.range();
            if low < start || high > end {
                warn!(
                    trajectory = index,
                    low, high, "Trajectory left the sampled PES range; forces there are extrapolated."
                );
                reporter.report(Progress::Message(format!(
                    "Trajectory {} visited [{:.4}, {:.4}] bohr, outside the sampled range [{:.4}, {:.4}]",
                    index + 1,
                    low,
                    high,
                    start,
                    end
                )));
            }
        }
        info!(
            trajectory = index,
            drift = result.energy_drift,
            "Trajectory complete."
        );
    }

    Ok(DynamicsResult {
        analysis,
        trajectories,
    })
}

fn sample_initial_conditions(analysis: &PesAnalysis, config: &DynamicsConfig) -> Vec<PhaseSpacePoint> {
    let sampling = &config.sampling;
    let velocity_scale = analysis.velocity_scale();
    (0..sampling.num_trajectories)
        .map(|i| {
            let seed = sampling.seed.map(|s| s.wrapping_add(i as u64));
            InitialConditionSampler::new(seed).initial_condition(
                analysis.r_eq,
                velocity_scale,
                sampling,
            )
        })
        .collect()
}
