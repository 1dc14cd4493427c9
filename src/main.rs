use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use ground_control::config::GroundControlConfig;
use ground_control::console::{spawn_console, ConsoleInput};
use ground_control::kernel::event::ControlEvent;
use ground_control::Reactor;
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Simulated rocket telemetry engine. Frames are written to stdout as JSON lines.
#[derive(Parser, Debug)]
#[command(name = "ground-control", version, about)]
struct Args {
    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Tick interval in milliseconds
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Samples retained per channel
    #[arg(long)]
    history_len: Option<usize>,

    /// Seed for a reproducible flight
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries frames, logs go to stderr
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("setting default subscriber failed")?;

    let args = Args::parse();
    let mut config = GroundControlConfig::load(args.config.as_deref())?.engine;
    if let Some(tick_ms) = args.tick_ms {
        config.tick_ms = tick_ms;
    }
    if let Some(history_len) = args.history_len {
        config.history_len = history_len;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    tracing::info!("Ground Control Booting...");

    let (control_tx, control_rx) = mpsc::channel(16);
    let (frame_tx, mut frame_rx) = mpsc::channel(16);
    let cancel = CancellationToken::new();

    let mut reactor = Reactor::new(control_rx, config);

    // Operator console (stdin)
    tracing::info!("Commands: 'launch' (set launch site), 'abort', 'quit'");
    spawn_console(std::io::BufReader::new(std::io::stdin()), control_tx, cancel.clone(), |command| {
        if command.eq_ignore_ascii_case("quit") {
            return ConsoleInput::Quit;
        }
        match ControlEvent::from_command(command) {
            Some(event) => {
                tracing::info!("Console Control Dispatched: {:?}", event);
                ConsoleInput::Dispatch(event)
            }
            None => ConsoleInput::Unknown,
        }
    })
    .context("failed to spawn console thread")?;

    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Ctrl+C received. Shutting down.");
            signal_cancel.cancel();
        }
    });

    // Presentation boundary
    let writer = tokio::spawn(async move {
        let mut stdout = tokio::io::stdout();
        while let Some(frame) = frame_rx.recv().await {
            let mut line = serde_json::to_vec(&frame)?;
            line.push(b'\n');
            stdout.write_all(&line).await?;
            stdout.flush().await?;
        }
        anyhow::Ok(())
    });

    reactor.run(frame_tx, cancel).await;

    writer.await.context("frame writer panicked")??;
    tracing::info!("Ground Control stopped at tick {}", reactor.tick.frame);
    Ok(())
}
