use std::path::{Path, PathBuf};
use std::thread::JoinHandle;
use std::time::Duration;

use ringbuf::traits::Consumer;
use tokio::sync::mpsc;
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use super::error::StandError;
use super::history::ThrustHistory;
use super::protocol::{StandCommand, ThrustSample};
use super::transport::CommandSink;

/// Operator console commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperatorCommand {
    Tare,
    Start,
    Stop,
    Toggle,
    Export(PathBuf),
    Quit,
}

impl OperatorCommand {
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let verb = words.next()?.to_ascii_lowercase();
        match verb.as_str() {
            "tare" => Some(OperatorCommand::Tare),
            "start" => Some(OperatorCommand::Start),
            "stop" => Some(OperatorCommand::Stop),
            "toggle" => Some(OperatorCommand::Toggle),
            "export" => words.next().map(|path| OperatorCommand::Export(PathBuf::from(path))),
            "quit" | "exit" => Some(OperatorCommand::Quit),
            _ => None,
        }
    }
}

/// Single owner of the stand's command link, sample queue and history.
pub struct ThrustStand<S, C>
where
    S: CommandSink,
    C: Consumer<Item = ThrustSample>,
{
    sink: S,
    samples: C,
    history: ThrustHistory,
    scale_on: bool,
}

impl<S, C> ThrustStand<S, C>
where
    S: CommandSink,
    C: Consumer<Item = ThrustSample>,
{
    pub fn new(sink: S, samples: C) -> Self {
        Self {
            sink,
            samples,
            history: ThrustHistory::new(),
            scale_on: false,
        }
    }

    pub fn history(&self) -> &ThrustHistory {
        &self.history
    }

    pub fn is_running(&self) -> bool {
        self.scale_on
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn tare(&mut self) -> Result<(), StandError> {
        info!("Taring load cell");
        self.sink.send(StandCommand::Tare)
    }

    pub fn start(&mut self) -> Result<(), StandError> {
        self.sink.send(StandCommand::Start)?;
        self.scale_on = true;
        info!("Scale started");
        Ok(())
    }

    pub fn stop(&mut self) -> Result<(), StandError> {
        self.sink.send(StandCommand::Stop)?;
        self.scale_on = false;
        info!("Scale stopped");
        Ok(())
    }

    /// Flips the scale between running and stopped. Returns the new state.
    pub fn toggle(&mut self) -> Result<bool, StandError> {
        if self.scale_on {
            self.stop()?;
        } else {
            self.start()?;
        }
        Ok(self.scale_on)
    }

    /// Moves every queued sample into the history. Returns how many arrived.
    pub fn drain(&mut self) -> usize {
        let mut count = 0;
        while let Some(sample) = self.samples.try_pop() {
            debug!("thrust : {}, time : {}", sample.thrust, sample.time);
            self.history.push(sample);
            count += 1;
        }
        count
    }

    pub fn export(&self, path: &Path) -> Result<(), StandError> {
        self.history.export_csv(path)?;
        info!("Exported {} samples to {}", self.history.len(), path.display());
        Ok(())
    }

    /// Applies one operator command. Returns `false` when the operator asked to quit.
    ///
    /// A failed export is reported and acquisition continues; a failed command
    /// write means the link is gone and is returned.
    pub fn apply(&mut self, command: OperatorCommand) -> Result<bool, StandError> {
        match command {
            OperatorCommand::Tare => self.tare()?,
            OperatorCommand::Start => self.start()?,
            OperatorCommand::Stop => self.stop()?,
            OperatorCommand::Toggle => {
                self.toggle()?;
            }
            OperatorCommand::Export(path) => {
                // Drain first so the file includes everything captured so far
                self.drain();
                if let Err(e) = self.export(&path) {
                    error!("Export to {} failed: {}", path.display(), e);
                }
            }
            OperatorCommand::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Acquisition loop: drains samples and applies operator commands every
    /// `poll`, until quit, cancellation, or a capture failure.
    pub async fn run(
        &mut self,
        mut commands: mpsc::Receiver<OperatorCommand>,
        capture: JoinHandle<Result<(), StandError>>,
        poll: Duration,
        cancel: CancellationToken,
    ) -> Result<(), StandError> {
        info!("Thrust stand loop started. Poll: {}ms", poll.as_millis());

        let mut cadence = interval(poll);
        cadence.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut capture = Some(capture);

        let result = loop {
            tokio::select! {
                _ = cancel.cancelled() => break Ok(()),
                _ = cadence.tick() => {}
            }

            self.drain();

            let mut quit = false;
            while let Ok(command) = commands.try_recv() {
                match self.apply(command) {
                    Ok(true) => {}
                    Ok(false) => quit = true,
                    Err(e) => {
                        cancel.cancel();
                        return Err(e);
                    }
                }
            }
            if quit {
                break Ok(());
            }

            // The capture thread only ends on its own when the transport failed.
            if capture.as_ref().is_some_and(|handle| handle.is_finished()) {
                if let Some(handle) = capture.take() {
                    self.drain();
                    break match handle.join() {
                        Ok(outcome) => outcome,
                        Err(_) => Err(StandError::CapturePanicked),
                    };
                }
            }
        };

        cancel.cancel();
        info!("Thrust stand loop stopped with {} samples", self.history.len());
        result
    }
}
