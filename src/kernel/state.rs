use rand::Rng;
use serde::{Deserialize, Serialize};

use super::channel::Channel;
use super::history::{HistoryBuffer, MAX_LENGTH};

const ALTITUDE_RANGE: (f64, f64) = (0.0, 1000.0);
const SPEED_RANGE: (f64, f64) = (0.0, 300.0);
const DRIFT_RANGE: (f64, f64) = (-10.0, 10.0);
const GYRO_RANGE: (f64, f64) = (-180.0, 180.0);
const PRESSURE_RANGE: (f64, f64) = (900.0, 1100.0);

/// Latest value of every channel, for tabular display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub accel_x: f64,
    pub accel_y: f64,
    pub accel_z: f64,
    pub gyro_yaw: f64,
    pub gyro_pitch: f64,
    pub gyro_roll: f64,
    pub pressure: f64,
    pub speed: f64,
    pub timestamp: f64,
    pub altitude: f64,
}

impl TelemetrySnapshot {
    pub fn value(&self, channel: Channel) -> f64 {
        match channel {
            Channel::AccelX => self.accel_x,
            Channel::AccelY => self.accel_y,
            Channel::AccelZ => self.accel_z,
            Channel::GyroYaw => self.gyro_yaw,
            Channel::GyroPitch => self.gyro_pitch,
            Channel::GyroRoll => self.gyro_roll,
            Channel::Pressure => self.pressure,
            Channel::Speed => self.speed,
            Channel::Timestamp => self.timestamp,
        }
    }
}

/// Owns every channel history of the simulated flight.
///
/// The only ways to mutate it are [`TelemetryState::tick`] and
/// [`TelemetryState::reset_all`]; both take `&mut self`, so a reset can never
/// interleave with a half-applied tick.
#[derive(Debug, Clone)]
pub struct TelemetryState {
    channels: [HistoryBuffer<f64>; Channel::COUNT],
    altitude: f64,
}

impl Default for TelemetryState {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryState {
    pub fn new() -> Self {
        Self::with_history_len(MAX_LENGTH)
    }

    pub fn with_history_len(history_len: usize) -> Self {
        Self {
            channels: std::array::from_fn(|_| HistoryBuffer::with_capacity(history_len)),
            altitude: 0.0,
        }
    }

    pub fn buffer(&self, channel: Channel) -> &HistoryBuffer<f64> {
        &self.channels[channel.index()]
    }

    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Latest sample of `channel`, or 0 when the channel has no history yet.
    pub fn latest(&self, channel: Channel) -> f64 {
        self.buffer(channel).last().unwrap_or(0.0)
    }

    fn append(&mut self, channel: Channel, value: f64) {
        self.channels[channel.index()].append(value);
    }

    /// Clears every channel and reseeds it with a single zero sample.
    pub fn reset_all(&mut self) {
        for buffer in self.channels.iter_mut() {
            buffer.clear();
        }
        self.altitude = 0.0;

        for channel in Channel::ALL {
            self.append(channel, 0.0);
        }
    }

    /// One generation step of the simulated flight.
    pub fn tick<R: Rng + ?Sized>(&mut self, clock: f64, rng: &mut R) {
        self.append(Channel::Timestamp, clock);

        self.altitude = uniform(rng, ALTITUDE_RANGE);
        self.append(Channel::Speed, uniform(rng, SPEED_RANGE));

        // X and Z travel as a random walk from the previous position.
        for channel in [Channel::AccelX, Channel::AccelZ] {
            let next = match self.buffer(channel).last() {
                None => 0.0,
                Some(previous) => previous + uniform(rng, DRIFT_RANGE),
            };
            self.append(channel, next);
        }

        let vertical = if self.buffer(Channel::AccelY).is_empty() {
            0.0
        } else {
            self.altitude
        };
        self.append(Channel::AccelY, vertical);

        for channel in [Channel::GyroYaw, Channel::GyroPitch, Channel::GyroRoll] {
            self.append(channel, uniform(rng, GYRO_RANGE));
        }

        self.append(Channel::Pressure, uniform(rng, PRESSURE_RANGE));
    }

    pub fn snapshot(&self) -> TelemetrySnapshot {
        TelemetrySnapshot {
            accel_x: self.latest(Channel::AccelX),
            accel_y: self.latest(Channel::AccelY),
            accel_z: self.latest(Channel::AccelZ),
            gyro_yaw: self.latest(Channel::GyroYaw),
            gyro_pitch: self.latest(Channel::GyroPitch),
            gyro_roll: self.latest(Channel::GyroRoll),
            pressure: self.latest(Channel::Pressure),
            speed: self.latest(Channel::Speed),
            timestamp: self.latest(Channel::Timestamp),
            altitude: self.altitude,
        }
    }
}

fn uniform<R: Rng + ?Sized>(rng: &mut R, (low, high): (f64, f64)) -> f64 {
    rng.random_range(low..=high)
}
