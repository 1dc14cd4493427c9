use serde::{Deserialize, Serialize};

/// One scalar telemetry stream. Every channel owns exactly one history buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    AccelX,
    /// Carries the current altitude, not a true acceleration (vertical position proxy).
    AccelY,
    AccelZ,
    GyroYaw,
    GyroPitch,
    GyroRoll,
    Pressure,
    Speed,
    Timestamp,
}

impl Channel {
    pub const COUNT: usize = 9;

    pub const ALL: [Channel; Channel::COUNT] = [
        Channel::AccelX,
        Channel::AccelY,
        Channel::AccelZ,
        Channel::GyroYaw,
        Channel::GyroPitch,
        Channel::GyroRoll,
        Channel::Pressure,
        Channel::Speed,
        Channel::Timestamp,
    ];

    /// Channels shown in the raw telemetry table, in display order.
    pub const TABLE: [Channel; 8] = [
        Channel::AccelX,
        Channel::AccelY,
        Channel::AccelZ,
        Channel::GyroYaw,
        Channel::GyroPitch,
        Channel::GyroRoll,
        Channel::Pressure,
        Channel::Speed,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Channel::AccelX => "Acc X",
            Channel::AccelY => "Acc Y",
            Channel::AccelZ => "Acc Z",
            Channel::GyroYaw => "Yaw",
            Channel::GyroPitch => "Pitch",
            Channel::GyroRoll => "Roll",
            Channel::Pressure => "Pressure",
            Channel::Speed => "Speed",
            Channel::Timestamp => "Time",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Channel::AccelX | Channel::AccelY | Channel::AccelZ => "m/s²",
            Channel::GyroYaw | Channel::GyroPitch | Channel::GyroRoll => "°/s",
            Channel::Pressure => "hPa",
            Channel::Speed => "m/s",
            Channel::Timestamp => "s",
        }
    }
}
