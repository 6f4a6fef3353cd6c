use super::CsvFileError;
use super::traits::TabularFile;
use crate::core::forcefield::model::ForceModel;
use crate::core::models::trajectory::{PhaseSpacePoint, Trajectory};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// One output row of a trajectory, with derived momentum and energies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryRecord {
    pub time: f64,
    pub position: f64,
    pub velocity: f64,
    pub momentum: f64,
    pub kinetic: f64,
    pub potential: f64,
    pub total: f64,
}

impl TrajectoryRecord {
    /// Builds the records of every `stride`-th frame; the last frame is always kept.
    pub fn from_trajectory(
        trajectory: &Trajectory,
        reduced_mass: f64,
        model: &impl ForceModel,
        stride: usize,
    ) -> Vec<Self> {
        let stride = stride.max(1);
        let last = trajectory.len().saturating_sub(1);
        trajectory
            .times()
            .iter()
            .zip(trajectory.positions())
            .zip(trajectory.velocities())
            .enumerate()
            .filter(|(i, _)| i % stride == 0 || *i == last)
            .map(|(_, ((&time, &position), &velocity))| {
                let energy =
                    PhaseSpacePoint::new(position, velocity).energy(reduced_mass, model);
                Self {
                    time,
                    position,
                    velocity,
                    momentum: reduced_mass * velocity,
                    kinetic: energy.kinetic,
                    potential: energy.potential,
                    total: energy.total(),
                }
            })
            .collect()
    }
}

/// `time,position,velocity,momentum,kinetic,potential,total` table.
pub struct TrajectoryFile;

impl TabularFile for TrajectoryFile {
    type Data = Vec<TrajectoryRecord>;
    type Error = CsvFileError;

    fn read_from(reader: &mut impl Read) -> Result<Self::Data, Self::Error> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let records = csv_reader
            .deserialize::<TrajectoryRecord>()
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    fn write_to(data: &Self::Data, writer: &mut impl Write) -> Result<(), Self::Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for record in data {
            csv_writer.serialize(record)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}
