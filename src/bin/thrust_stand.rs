use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use ground_control::config::GroundControlConfig;
use ground_control::console::{spawn_console, ConsoleInput};
use ground_control::thrust::capture::SerialCapture;
use ground_control::thrust::protocol::ThrustSample;
use ground_control::thrust::stand::{OperatorCommand, ThrustStand};
use ground_control::thrust::transport::SerialLink;
use ringbuf::traits::Split;
use ringbuf::HeapRb;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Rocket motor thrust stand acquisition over a serial link.
#[derive(Parser, Debug)]
#[command(name = "thrust_stand", version, about)]
struct Args {
    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Serial device path
    #[arg(short, long)]
    port: Option<String>,

    #[arg(short, long)]
    baud_rate: Option<u32>,

    /// Bound on one blocking serial read, in milliseconds
    #[arg(long)]
    read_timeout_ms: Option<u64>,

    /// Sample drain interval, in milliseconds
    #[arg(long)]
    poll_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("setting default subscriber failed")?;

    let args = Args::parse();
    let mut config = GroundControlConfig::load(args.config.as_deref())?.stand;
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(baud_rate) = args.baud_rate {
        config.baud_rate = baud_rate;
    }
    if let Some(read_timeout_ms) = args.read_timeout_ms {
        config.read_timeout_ms = read_timeout_ms;
    }
    if let Some(poll_ms) = args.poll_ms {
        config.poll_ms = poll_ms;
    }

    let (reader, writer) =
        SerialLink::open(&config).with_context(|| format!("failed to open {}", config.port))?;

    // Capture thread -> stand loop
    let rb = HeapRb::<ThrustSample>::new(config.queue_capacity.max(1));
    let (producer, consumer) = rb.split();

    let cancel = CancellationToken::new();
    let capture = SerialCapture::new(reader, producer)
        .spawn(cancel.clone())
        .context("failed to spawn capture thread")?;

    let mut stand = ThrustStand::new(writer, consumer);

    let (command_tx, command_rx) = mpsc::channel(16);
    tracing::info!("Commands: tare, start, stop, toggle, export <file.csv>, quit");
    spawn_console(std::io::BufReader::new(std::io::stdin()), command_tx, cancel.clone(), |line| {
        match OperatorCommand::parse(line) {
            Some(command) => ConsoleInput::Dispatch(command),
            None => ConsoleInput::Unknown,
        }
    })
    .context("failed to spawn console thread")?;

    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Ctrl+C received. Stopping acquisition.");
            signal_cancel.cancel();
        }
    });

    if let Err(e) = stand
        .run(command_rx, capture, config.poll_interval(), cancel)
        .await
    {
        tracing::error!("Acquisition halted: {}", e);
        return Err(e).context("thrust stand acquisition failed");
    }

    if let Some(peak) = stand.history().peak() {
        tracing::info!(
            "Session ended: {} samples, peak thrust {} at t={}",
            stand.history().len(),
            peak.thrust,
            peak.time
        );
    }
    Ok(())
}
