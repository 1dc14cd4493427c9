use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::error::StandError;
use super::protocol::ThrustSample;

/// Thrust and time series captured during one acquisition session, in arrival order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThrustHistory {
    times: Vec<f64>,
    thrusts: Vec<f64>,
}

impl ThrustHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: ThrustSample) {
        self.times.push(sample.time);
        self.thrusts.push(sample.thrust);
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn thrusts(&self) -> &[f64] {
        &self.thrusts
    }

    pub fn last(&self) -> Option<ThrustSample> {
        Some(ThrustSample {
            thrust: *self.thrusts.last()?,
            time: *self.times.last()?,
        })
    }

    /// Peak thrust so far.
    pub fn peak(&self) -> Option<ThrustSample> {
        self.samples()
            .max_by(|a, b| a.thrust.total_cmp(&b.thrust))
    }

    pub fn samples(&self) -> impl Iterator<Item = ThrustSample> + '_ {
        self.times
            .iter()
            .zip(&self.thrusts)
            .map(|(&time, &thrust)| ThrustSample { thrust, time })
    }

    pub fn clear(&mut self) {
        self.times.clear();
        self.thrusts.clear();
    }

    /// Writes `Time,Thrust` followed by one row per sample.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), StandError> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(["Time", "Thrust"])?;
        for sample in self.samples() {
            wtr.write_record(&[sample.time.to_string(), sample.thrust.to_string()])?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn export_csv(&self, path: impl AsRef<Path>) -> Result<(), StandError> {
        let file = File::create(path)?;
        self.write_csv(file)
    }
}
