use thiserror::Error;

/// Failures of the thrust stand acquisition path.
///
/// Malformed serial lines are not errors; they are dropped where they are read.
#[derive(Error, Debug)]
pub enum StandError {
    /// Low-level read/write failure on the transport.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Opening or configuring the serial port failed.
    #[error("Serial port error: {0}")]
    Serial(#[from] serialport::Error),

    /// The transport reached end-of-stream; the stand is unplugged or powered off.
    #[error("Transport disconnected")]
    Disconnected,

    #[error("CSV export failed: {0}")]
    Export(#[from] csv::Error),

    #[error("Capture thread panicked")]
    CapturePanicked,
}
