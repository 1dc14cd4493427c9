use approx::assert_relative_eq;
use ground_control::kernel::channel::Channel;
use ground_control::kernel::state::TelemetryState;
use ground_control::kernel::time::Tick;
use ground_control::projection::frame::{project, GaugeZone, GLYPH_VIEWPORT};
use ground_control::projection::geometry::{rotate_glyph, Point};
use rand::rngs::StdRng;
use rand::SeedableRng;
use uuid::Uuid;

fn flown(ticks: usize) -> TelemetryState {
    let mut state = TelemetryState::new();
    let mut rng = StdRng::seed_from_u64(99);
    for n in 0..ticks {
        state.tick(n as f64 * 0.5, &mut rng);
    }
    state
}

#[test]
fn test_empty_state_degrades_to_zero() {
    let state = TelemetryState::new();
    let frame = project(&state, Tick::new(), Uuid::nil());

    assert!(frame.horizontal.path.x.is_empty());
    assert_eq!(frame.horizontal.current.position, Point::ORIGIN);
    assert_eq!(frame.horizontal.x_range.max, 25.0);
    assert_eq!(frame.horizontal.y_range.min, 0.0);
    assert_eq!(frame.top_down.x_range.max, 50.0);
    assert_eq!(frame.speed.value, 0.0);
    assert_eq!(frame.table.len(), 8);
    assert!(frame.table.iter().all(|row| row.value == "0.00"));
}

#[test]
fn test_table_rows_and_units() {
    let state = flown(5);
    let frame = project(&state, Tick { frame: 5 }, Uuid::nil());

    let sensors: Vec<&str> = frame.table.iter().map(|row| row.sensor).collect();
    assert_eq!(
        sensors,
        vec!["Acc X", "Acc Y", "Acc Z", "Yaw", "Pitch", "Roll", "Pressure", "Speed"]
    );

    let units: Vec<&str> = frame.table.iter().map(|row| row.unit).collect();
    assert_eq!(units, vec!["m/s²", "m/s²", "m/s²", "°/s", "°/s", "°/s", "hPa", "m/s"]);

    let pressure = frame.row("Pressure").expect("pressure row");
    assert_eq!(pressure.value, format!("{:.2}", state.latest(Channel::Pressure)));
}

#[test]
fn test_single_tick_end_to_end() {
    let state = flown(1);
    let frame = project(&state, Tick { frame: 1 }, Uuid::nil());

    assert_eq!(frame.row("Acc X").map(|r| r.value.as_str()), Some("0.00"));
    assert_eq!(frame.row("Acc Z").map(|r| r.value.as_str()), Some("0.00"));

    let speed = frame.row("Speed").expect("speed row");
    assert_eq!(speed.value, format!("{:.2}", frame.speed.value), "Table and gauge agree");
}

#[test]
fn test_spatial_plots_follow_buffers() {
    let state = flown(30);
    let frame = project(&state, Tick { frame: 30 }, Uuid::nil());

    let x = state.buffer(Channel::AccelX).to_vec();
    let y = state.buffer(Channel::AccelY).to_vec();
    let z = state.buffer(Channel::AccelZ).to_vec();

    assert_eq!(frame.horizontal.path.x, x);
    assert_eq!(frame.horizontal.path.y, y);
    assert_eq!(frame.top_down.path.x, x);
    assert_eq!(frame.top_down.path.y, z);

    assert_eq!(frame.horizontal.current.position, Point::new(x[29], y[29]));
    assert_eq!(frame.top_down.current.position, Point::new(x[29], z[29]));
    assert_eq!(frame.horizontal.start.position, Point::ORIGIN);
    assert_eq!(frame.horizontal.start.size, 15);
    assert_eq!(frame.top_down.start.size, 10);

    // Every path point fits its window
    for (px, py) in x.iter().zip(&y) {
        assert!(frame.horizontal.x_range.contains(*px));
        assert!(frame.horizontal.y_range.contains(*py));
    }
    for (px, pz) in x.iter().zip(&z) {
        assert!(frame.top_down.x_range.contains(*px));
        assert!(frame.top_down.y_range.contains(*pz));
    }
}

#[test]
fn test_top_down_plot_is_square() {
    let state = flown(80);
    let frame = project(&state, Tick::new(), Uuid::nil());

    assert_eq!(frame.top_down.x_range, frame.top_down.y_range);
    assert_eq!(frame.top_down.x_range.min, -frame.top_down.x_range.max);
    assert!(frame.top_down.x_range.max >= 50.0);
}

#[test]
fn test_altitude_axis_fits_peak() {
    let state = flown(10);
    let frame = project(&state, Tick::new(), Uuid::nil());

    let peak = state
        .buffer(Channel::AccelY)
        .iter()
        .fold(0.0_f64, |acc, v| acc.max(v.abs()));
    assert_relative_eq!(frame.horizontal.y_range.max, (peak * 1.1).max(25.0), epsilon = 1e-9);
}

#[test]
fn test_glyphs_follow_latest_gyro() {
    let state = flown(12);
    let frame = project(&state, Tick::new(), Uuid::nil());

    assert_eq!(frame.yaw.glyph, rotate_glyph(state.latest(Channel::GyroYaw)));
    assert_eq!(frame.pitch.glyph, rotate_glyph(state.latest(Channel::GyroPitch)));
    assert_eq!(frame.yaw.viewport.max, GLYPH_VIEWPORT);
    assert_eq!(frame.yaw.title, "Yaw Rotation");
    assert_eq!(frame.pitch.title, "Pitch Rotation");
}

#[test]
fn test_gauge_zones() {
    assert_eq!(GaugeZone::for_speed(0.0), GaugeZone::Green);
    assert_eq!(GaugeZone::for_speed(99.99), GaugeZone::Green);
    assert_eq!(GaugeZone::for_speed(100.0), GaugeZone::Yellow);
    assert_eq!(GaugeZone::for_speed(200.0), GaugeZone::Red);
    assert_eq!(GaugeZone::for_speed(300.0), GaugeZone::Red);
}

#[test]
fn test_frame_serializes() {
    let state = flown(3);
    let frame = project(&state, Tick { frame: 3 }, Uuid::nil());

    let json = serde_json::to_value(&frame).expect("frame serializes");
    assert_eq!(json["tick"]["frame"], 3);
    assert_eq!(json["table"].as_array().map(|rows| rows.len()), Some(8));
    assert_eq!(json["speed"]["max"], 300.0);
    assert_eq!(json["horizontal"]["title"], "Scene, Horizontal");
}
