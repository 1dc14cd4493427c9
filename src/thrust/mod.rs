//! Thrust stand companion: serial line protocol, capture thread, single-writer
//! stand loop and CSV export.
//!
//! Data path: [`transport::LineSource`] -> [`capture::SerialCapture`] (own thread)
//! -> ring buffer -> [`stand::ThrustStand`] -> [`history::ThrustHistory`].

pub mod capture;
pub mod error;
pub mod history;
pub mod protocol;
pub mod stand;
pub mod transport;

pub use error::StandError;
