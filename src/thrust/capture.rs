use std::thread::JoinHandle;

use ringbuf::traits::Producer;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::error::StandError;
use super::protocol::{parse_sample, ThrustSample};
use super::transport::LineSource;

/// What one read cycle produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CaptureOutcome {
    Sample(ThrustSample),
    /// Line read but not a valid sample; no sample this cycle.
    Malformed,
    /// Read timed out.
    Idle,
    /// Valid sample lost because the hand-off queue was full.
    Overflow,
}

/// Reads the stand link and hands parsed samples to the stand loop.
pub struct SerialCapture<L, P>
where
    L: LineSource,
    P: Producer<Item = ThrustSample>,
{
    source: L,
    producer: P,
    dropped: u64,
}

impl<L, P> SerialCapture<L, P>
where
    L: LineSource,
    P: Producer<Item = ThrustSample>,
{
    pub fn new(source: L, producer: P) -> Self {
        Self {
            source,
            producer,
            dropped: 0,
        }
    }

    /// Lines discarded so far (malformed or overflowed).
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// One blocking read cycle. Only transport failures are errors.
    pub fn step(&mut self) -> Result<CaptureOutcome, StandError> {
        let Some(line) = self.source.read_line()? else {
            return Ok(CaptureOutcome::Idle);
        };

        let Some(sample) = parse_sample(&line) else {
            self.dropped += 1;
            debug!("Dropping malformed line: {:?}", line);
            return Ok(CaptureOutcome::Malformed);
        };

        // Lossy when the stand loop falls behind
        if self.producer.try_push(sample).is_err() {
            self.dropped += 1;
            warn!("Sample queue full, dropping {:?}", sample);
            return Ok(CaptureOutcome::Overflow);
        }

        Ok(CaptureOutcome::Sample(sample))
    }

    /// Runs until cancelled or the transport fails.
    pub fn run(mut self, cancel: CancellationToken) -> Result<(), StandError> {
        info!("Serial capture started");

        while !cancel.is_cancelled() {
            self.step()?;
        }

        info!("Serial capture stopped. {} lines dropped", self.dropped);
        Ok(())
    }
}

impl<L, P> SerialCapture<L, P>
where
    L: LineSource + Send + 'static,
    P: Producer<Item = ThrustSample> + Send + 'static,
{
    /// Moves the capture loop onto its own thread.
    pub fn spawn(self, cancel: CancellationToken) -> std::io::Result<JoinHandle<Result<(), StandError>>> {
        std::thread::Builder::new()
            .name("thrust-capture".to_string())
            .spawn(move || self.run(cancel))
    }
}
