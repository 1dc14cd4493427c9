//! Render-side projections of the telemetry engine. Everything here is pure:
//! no owned state, no failure modes, empty histories degrade to zeros.

pub mod frame;
pub mod geometry;
