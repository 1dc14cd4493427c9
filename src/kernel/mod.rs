//! Telemetry state engine.
//!
//! # SINGLE WRITER
//! [`state::TelemetryState`] is mutated only through `tick` and `reset_all`,
//! both driven from one [`reactor::Reactor`] round at a time.

pub mod channel;
pub mod event;
pub mod history;
pub mod reactor;
pub mod state;
pub mod time;
