use super::CsvFileError;
use super::traits::TabularFile;
use crate::core::models::pes::{PesCurve, PesTable};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

#[derive(Debug, Serialize, Deserialize)]
struct PesSampleRecord {
    separation: f64,
    energy: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct PesCurveRecord {
    r: f64,
    energy: f64,
    force: f64,
    abs_force: f64,
}

/// `separation,energy` table of PES samples.
pub struct PesTableFile;

impl TabularFile for PesTableFile {
    type Data = PesTable;
    type Error = CsvFileError;

    fn read_from(reader: &mut impl Read) -> Result<Self::Data, Self::Error> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(reader);

        let mut separations = Vec::new();
        let mut energies = Vec::new();
        for result in csv_reader.deserialize::<PesSampleRecord>() {
            let record = result?;
            separations.push(record.separation);
            energies.push(record.energy);
        }
        Ok(PesTable::new(separations, energies)?)
    }

    fn write_to(data: &Self::Data, writer: &mut impl Write) -> Result<(), Self::Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for (separation, energy) in data.points() {
            csv_writer.serialize(PesSampleRecord { separation, energy })?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

/// `r,energy,force,abs_force` curve evaluated on a fine grid.
pub struct PesCurveFile;

impl TabularFile for PesCurveFile {
    type Data = PesCurve;
    type Error = CsvFileError;

    fn read_from(reader: &mut impl Read) -> Result<Self::Data, Self::Error> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut curve = PesCurve::default();
        for result in csv_reader.deserialize::<PesCurveRecord>() {
            let record = result?;
            curve.separations.push(record.r);
            curve.energies.push(record.energy);
            curve.forces.push(record.force);
        }
        Ok(curve)
    }

    fn write_to(data: &Self::Data, writer: &mut impl Write) -> Result<(), Self::Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        let rows = data
            .separations
            .iter()
            .zip(&data.energies)
            .zip(&data.forces);
        for ((&r, &energy), &force) in rows {
            csv_writer.serialize(PesCurveRecord {
                r,
                energy,
                force,
                abs_force: force.abs(),
            })?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}
