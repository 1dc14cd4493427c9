//! Thrust stand line protocol.
//!
//! Inbound, one sample per line: `<thrust>,<time>\n` (ASCII decimal floats).
//! Outbound, one command per line: `TARE`, `START`, `STOP`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThrustSample {
    pub thrust: f64,
    pub time: f64,
}

/// Parses one inbound line. Anything other than exactly two numeric fields is `None`.
pub fn parse_sample(line: &str) -> Option<ThrustSample> {
    let mut fields = line.trim().split(',');
    let thrust = fields.next()?.trim().parse::<f64>().ok()?;
    let time = fields.next()?.trim().parse::<f64>().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(ThrustSample { thrust, time })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StandCommand {
    /// Zero the load cell.
    Tare,
    Start,
    Stop,
}

impl StandCommand {
    /// Exact bytes written to the transport, newline included.
    pub fn wire(&self) -> &'static str {
        match self {
            StandCommand::Tare => "TARE\n",
            StandCommand::Start => "START\n",
            StandCommand::Stop => "STOP\n",
        }
    }
}
