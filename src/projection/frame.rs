use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::geometry::{
    compute_combined_range, compute_range, rotate_glyph, AttitudeGlyph, Point, RangeWindow,
    RANGE_MARGIN, SIDE_VIEW_FLOOR, TOP_DOWN_FLOOR,
};
use crate::kernel::channel::Channel;
use crate::kernel::state::TelemetryState;
use crate::kernel::time::Tick;

/// Gauge bounds for the speed dial.
pub const SPEED_GAUGE_MAX: f64 = 300.0;
/// Attitude glyph viewport half-width.
pub const GLYPH_VIEWPORT: f64 = 3.0;

const CURRENT_MARKER_SIZE: u32 = 10;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub position: Point,
    pub size: u32,
}

/// One trajectory plot: path, current position, launch point and axis ranges.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpatialPlot {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub path: Trace,
    pub current: Marker,
    pub start: Marker,
    pub x_range: RangeWindow,
    pub y_range: RangeWindow,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlyphView {
    pub title: &'static str,
    pub glyph: AttitudeGlyph,
    pub viewport: RangeWindow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GaugeZone {
    Green,
    Yellow,
    Red,
}

impl GaugeZone {
    pub fn for_speed(speed: f64) -> Self {
        if speed < 100.0 {
            GaugeZone::Green
        } else if speed < 200.0 {
            GaugeZone::Yellow
        } else {
            GaugeZone::Red
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedGauge {
    pub value: f64,
    pub zone: GaugeZone,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TelemetryRow {
    pub sensor: &'static str,
    pub value: String,
    pub unit: &'static str,
}

/// Everything the presentation layer needs for one update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub tick: Tick,
    pub launch_id: Uuid,
    pub horizontal: SpatialPlot,
    pub top_down: SpatialPlot,
    pub yaw: GlyphView,
    pub pitch: GlyphView,
    pub speed: SpeedGauge,
    pub table: Vec<TelemetryRow>,
}

impl Frame {
    /// Table row for `sensor`, matched on its display label.
    pub fn row(&self, sensor: &str) -> Option<&TelemetryRow> {
        self.table.iter().find(|row| row.sensor == sensor)
    }
}

/// Pure projection of the engine state into a render bundle.
pub fn project(state: &TelemetryState, tick: Tick, launch_id: Uuid) -> Frame {
    let snapshot = state.snapshot();

    Frame {
        tick,
        launch_id,
        horizontal: horizontal_plot(state),
        top_down: top_down_plot(state),
        yaw: glyph_view("Yaw Rotation", snapshot.gyro_yaw),
        pitch: glyph_view("Pitch Rotation", snapshot.gyro_pitch),
        speed: SpeedGauge {
            value: snapshot.speed,
            zone: GaugeZone::for_speed(snapshot.speed),
            max: SPEED_GAUGE_MAX,
        },
        table: Channel::TABLE
            .iter()
            .map(|&channel| TelemetryRow {
                sensor: channel.label(),
                value: format!("{:.2}", snapshot.value(channel)),
                unit: channel.unit(),
            })
            .collect(),
    }
}

fn horizontal_plot(state: &TelemetryState) -> SpatialPlot {
    let x = state.buffer(Channel::AccelX).to_vec();
    let y = state.buffer(Channel::AccelY).to_vec();
    let x_range = compute_range(&x, SIDE_VIEW_FLOOR, RANGE_MARGIN);
    let y_range = compute_range(&y, SIDE_VIEW_FLOOR, RANGE_MARGIN);

    SpatialPlot {
        title: "Scene, Horizontal",
        x_label: "X Travel (m)",
        y_label: "Altitude (m)",
        current: current_marker(state, Channel::AccelX, Channel::AccelY),
        start: Marker { position: Point::ORIGIN, size: 15 },
        x_range: RangeWindow::symmetric(x_range),
        // Altitude starts from the ground.
        y_range: RangeWindow::from_zero(y_range),
        path: Trace { x, y },
    }
}

fn top_down_plot(state: &TelemetryState) -> SpatialPlot {
    let x = state.buffer(Channel::AccelX).to_vec();
    let z = state.buffer(Channel::AccelZ).to_vec();
    // One range for both axes keeps the plot square.
    let range = compute_combined_range(&[x.as_slice(), z.as_slice()], TOP_DOWN_FLOOR, RANGE_MARGIN);

    SpatialPlot {
        title: "Scene, Top Down",
        x_label: "X Travel (m)",
        y_label: "Z Travel (m)",
        current: current_marker(state, Channel::AccelX, Channel::AccelZ),
        start: Marker { position: Point::ORIGIN, size: 10 },
        x_range: RangeWindow::symmetric(range),
        y_range: RangeWindow::symmetric(range),
        path: Trace { x, y: z },
    }
}

fn current_marker(state: &TelemetryState, x: Channel, y: Channel) -> Marker {
    Marker {
        position: Point::new(state.latest(x), state.latest(y)),
        size: CURRENT_MARKER_SIZE,
    }
}

fn glyph_view(title: &'static str, angle_degrees: f64) -> GlyphView {
    GlyphView {
        title,
        glyph: rotate_glyph(angle_degrees),
        viewport: RangeWindow::symmetric(GLYPH_VIEWPORT),
    }
}
