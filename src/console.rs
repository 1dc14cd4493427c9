//! Line-oriented operator console.
//!
//! Reads run on a plain OS thread. A blocked read never holds the runtime
//! open, so the binaries exit as soon as their driver loop returns.

use std::io::BufRead;
use std::thread::JoinHandle;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// How the console treats one non-empty input line.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleInput<T> {
    Dispatch(T),
    /// Cancels the session token and stops reading.
    Quit,
    Unknown,
}

/// Spawns the console reader. Lines are trimmed, blanks are skipped, and
/// every other line goes through `interpret`.
///
/// The thread ends on end of input, on a read error, on `Quit`, or once the
/// receiving side of `tx` is gone.
pub fn spawn_console<R, T, F>(
    input: R,
    tx: mpsc::Sender<T>,
    cancel: CancellationToken,
    mut interpret: F,
) -> std::io::Result<JoinHandle<()>>
where
    R: BufRead + Send + 'static,
    T: Send + 'static,
    F: FnMut(&str) -> ConsoleInput<T> + Send + 'static,
{
    std::thread::Builder::new()
        .name("console".to_string())
        .spawn(move || {
            for line in input.lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        warn!("Console read failed: {}", e);
                        break;
                    }
                };
                let command = line.trim();
                if command.is_empty() {
                    continue;
                }

                match interpret(command) {
                    ConsoleInput::Dispatch(item) => {
                        if tx.blocking_send(item).is_err() {
                            break;
                        }
                    }
                    ConsoleInput::Quit => {
                        cancel.cancel();
                        break;
                    }
                    ConsoleInput::Unknown => warn!("Unknown command: '{}'", command),
                }
            }
            debug!("Console closed");
        })
}
