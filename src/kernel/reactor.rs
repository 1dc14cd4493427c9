use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::mpsc;
use tokio::time::{interval, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use uuid::Uuid;

use super::event::ControlEvent;
use super::state::TelemetryState;
use super::time::Tick;
use crate::config::EngineConfig;
use crate::projection::frame::{project, Frame};

/// Drives the telemetry engine: one reset-or-tick per round, one frame out.
pub struct Reactor {
    pub receiver: mpsc::Receiver<ControlEvent>,
    pub state: TelemetryState,
    pub tick: Tick,
    /// Identifies the current launch session; replaced on every reset.
    pub launch_id: Uuid,
    config: EngineConfig,
    rng: StdRng,
}

impl Reactor {
    pub fn new(receiver: mpsc::Receiver<ControlEvent>, config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            receiver,
            state: TelemetryState::with_history_len(config.history_len),
            tick: Tick::new(),
            launch_id: Uuid::new_v4(),
            config,
            rng,
        }
    }

    /// Pure step: applies this round's control events, advances the state, projects a frame.
    /// MUST NOT await I/O or timers.
    ///
    /// A reset request wins the round outright: the state is reseeded and no
    /// generation step runs until the next round. Resetting and then generating
    /// in the same round would instead leave two samples per channel.
    pub fn tick_step(&mut self, events: Vec<ControlEvent>, now: f64) -> Frame {
        self.tick = self.tick.next();

        // Every control event resets; the first one names the round
        match events.first() {
            Some(event) => {
                self.state.reset_all();
                self.launch_id = Uuid::new_v4();
                info!(
                    "Reset via {:?} at tick {}. Launch session {}",
                    event, self.tick.frame, self.launch_id
                );
            }
            None => {
                self.state.tick(now, &mut self.rng);
            }
        }

        let frame = project(&self.state, self.tick, self.launch_id);
        debug!(
            "Tick {}: speed {:.2}, altitude {:.2}",
            self.tick.frame,
            frame.speed.value,
            self.state.altitude()
        );
        frame
    }

    /// Async driver loop. Publishes one frame per cadence until cancelled or
    /// the frame consumer goes away.
    pub async fn run(&mut self, frames: mpsc::Sender<Frame>, cancel: CancellationToken) {
        info!("Telemetry Reactor Started. Tick: {}ms", self.config.tick_ms);

        let started = Instant::now();
        let mut cadence = interval(self.config.tick_interval());
        cadence.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    info!("Reactor cancelled at tick {}", self.tick.frame);
                    break;
                }
                _ = cadence.tick() => {}
            }

            // Drain control events (edge triggered, consumed by this round)
            let mut events = Vec::new();
            while let Ok(event) = self.receiver.try_recv() {
                events.push(event);
            }

            let frame = self.tick_step(events, started.elapsed().as_secs_f64());

            if frames.send(frame).await.is_err() {
                info!("Frame consumer closed. Stopping reactor.");
                break;
            }
        }
    }
}
