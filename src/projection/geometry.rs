//! Pure geometry behind the dashboard plots: attitude glyph rotation and
//! symmetric axis fitting.

use serde::{Deserialize, Serialize};

/// Headroom applied above the observed extrema.
pub const RANGE_MARGIN: f64 = 1.1;
/// Minimum half-width of the side-view plot axes.
pub const SIDE_VIEW_FLOOR: f64 = 25.0;
/// Minimum half-width of the top-down plot axes.
pub const TOP_DOWN_FLOOR: f64 = 50.0;

/// Marker size used for the nose vertex of a glyph.
pub const NOSE_MARKER_SIZE: u32 = 20;

const BODY: [Point; 5] = [
    Point::new(-0.5, -2.0),
    Point::new(0.5, -2.0),
    Point::new(0.5, 2.0),
    Point::new(-0.5, 2.0),
    Point::new(-0.5, -2.0),
];
const NOSE: Point = Point::new(0.0, 2.0);

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Rotates counter-clockwise by `theta` radians about the origin.
    pub fn rotated(&self, theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Point {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }
}

/// Rocket body outline rotated to the current attitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttitudeGlyph {
    /// Closed rectangle, first vertex repeated last.
    pub outline: [Point; 5],
    /// Highlighted top-center vertex.
    pub nose: Point,
    pub angle_degrees: f64,
}

impl AttitudeGlyph {
    /// Outline followed by the nose, the order the renderer draws them in.
    pub fn vertices(&self) -> Vec<Point> {
        let mut points = self.outline.to_vec();
        points.push(self.nose);
        points
    }

    /// Per-vertex marker sizes matching [`AttitudeGlyph::vertices`]: only the nose is drawn.
    pub fn marker_sizes(&self) -> [u32; 6] {
        [0, 0, 0, 0, 0, NOSE_MARKER_SIZE]
    }
}

/// Builds the body glyph rotated by `angle_degrees`, clockwise-positive.
pub fn rotate_glyph(angle_degrees: f64) -> AttitudeGlyph {
    let theta = (-angle_degrees).to_radians();
    AttitudeGlyph {
        outline: BODY.map(|p| p.rotated(theta)),
        nose: NOSE.rotated(theta),
        angle_degrees,
    }
}

/// Inclusive axis interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeWindow {
    pub min: f64,
    pub max: f64,
}

impl RangeWindow {
    /// `[-half_width, half_width]`
    pub fn symmetric(half_width: f64) -> Self {
        Self {
            min: -half_width,
            max: half_width,
        }
    }

    /// `[0, upper]`, for axes that never go negative.
    pub fn from_zero(upper: f64) -> Self {
        Self { min: 0.0, max: upper }
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Largest absolute value in `series`, 0 for an empty series.
pub fn peak_magnitude(series: &[f64]) -> f64 {
    series.iter().fold(0.0_f64, |peak, v| peak.max(v.abs()))
}

/// Half-width of an axis that fits `series` with `margin` headroom, never below `min_floor`.
pub fn compute_range(series: &[f64], min_floor: f64, margin: f64) -> f64 {
    min_floor.max(peak_magnitude(series) * margin)
}

/// Shared half-width for several series plotted on equal axes.
pub fn compute_combined_range(series: &[&[f64]], min_floor: f64, margin: f64) -> f64 {
    let peak = series
        .iter()
        .map(|s| peak_magnitude(s))
        .fold(0.0_f64, f64::max);
    min_floor.max(peak * margin)
}
