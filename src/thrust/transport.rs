use std::io::{BufRead, BufReader, ErrorKind, Read, Write};

use serialport::SerialPort;
use tracing::{debug, info};

use super::error::StandError;
use super::protocol::StandCommand;
use crate::config::StandConfig;

/// Inbound half of the stand link.
pub trait LineSource {
    /// Next complete line without its terminator.
    ///
    /// `Ok(None)` means the bounded read timed out with no complete line; a
    /// partial line is kept and finished on a later call. End-of-stream is
    /// [`StandError::Disconnected`].
    fn read_line(&mut self) -> Result<Option<String>, StandError>;
}

/// Outbound half of the stand link. Commands are fire-and-forget.
pub trait CommandSink {
    fn send(&mut self, command: StandCommand) -> Result<(), StandError>;
}

impl<W: Write + ?Sized> CommandSink for W {
    fn send(&mut self, command: StandCommand) -> Result<(), StandError> {
        self.write_all(command.wire().as_bytes())?;
        self.flush()?;
        debug!("Sent {:?}", command);
        Ok(())
    }
}

/// Line framing over any byte stream.
pub struct StreamLines<R> {
    reader: BufReader<R>,
    pending: Vec<u8>,
}

impl<R: Read> StreamLines<R> {
    pub fn new(inner: R) -> Self {
        Self {
            reader: BufReader::new(inner),
            pending: Vec::new(),
        }
    }

    fn take_line(&mut self) -> String {
        let line = String::from_utf8_lossy(&self.pending)
            .trim_end_matches(['\r', '\n'])
            .to_string();
        self.pending.clear();
        line
    }
}

impl<R: Read> LineSource for StreamLines<R> {
    fn read_line(&mut self) -> Result<Option<String>, StandError> {
        // read_until keeps whatever it read before an error in `pending`
        match self.reader.read_until(b'\n', &mut self.pending) {
            Ok(0) if self.pending.is_empty() => Err(StandError::Disconnected),
            // Either a full line, or the final unterminated one before EOF.
            Ok(_) => Ok(Some(self.take_line())),
            Err(e) if matches!(e.kind(), ErrorKind::TimedOut | ErrorKind::WouldBlock | ErrorKind::Interrupted) => {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Serial port connection to the thrust stand.
pub struct SerialLink;

impl SerialLink {
    /// Opens the configured port and splits it into a line reader and a command writer.
    pub fn open(
        config: &StandConfig,
    ) -> Result<(StreamLines<Box<dyn SerialPort>>, Box<dyn SerialPort>), StandError> {
        let port = serialport::new(config.port.as_str(), config.baud_rate)
            .timeout(config.read_timeout())
            .open()?;
        let writer = port.try_clone()?;

        info!(
            "Opened thrust stand on {} at {} baud (read timeout {}ms)",
            config.port, config.baud_rate, config.read_timeout_ms
        );

        Ok((StreamLines::new(port), writer))
    }
}
