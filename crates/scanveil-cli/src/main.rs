use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use scanveil_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "scanveil")]
#[command(author, version, about = "Animated scan-region overlay for scanner previews")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive terminal preview
    Run {
        /// Start with the scan session paused
        #[arg(long)]
        paused: bool,
    },
    /// Print scan line positions for a number of ticks
    Trace {
        /// Number of ticks to sample
        #[arg(short = 'n', long, default_value_t = 20)]
        frames: u32,
        /// Milliseconds between ticks
        #[arg(short = 'i', long, default_value_t = 100)]
        interval_ms: u64,
        /// Surface width the scan area is laid out in
        #[arg(long, default_value_t = 300.0)]
        width: f64,
        /// Surface height the scan area is laid out in
        #[arg(long, default_value_t = 300.0)]
        height: f64,
        /// Stop the session before this tick
        #[arg(long)]
        stop_after: Option<u32>,
        /// Emit JSON lines
        #[arg(long)]
        json: bool,
        /// Tick from a real timer instead of a simulated clock
        #[arg(long)]
        realtime: bool,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config file path
    Path,
    /// Print the effective configuration
    Show,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    let interactive = matches!(cli.command, Some(Commands::Run { .. }) | None);
    init_logging(&config, interactive)?;

    match cli.command {
        Some(Commands::Run { paused }) => commands::run::run(config, paused),
        None => commands::run::run(config, false),
        Some(Commands::Trace {
            frames,
            interval_ms,
            width,
            height,
            stop_after,
            json,
            realtime,
        }) => {
            let opts = commands::trace::TraceOptions {
                frames,
                interval: Duration::from_millis(interval_ms),
                width,
                height,
                stop_after,
                json,
            };
            let mut stdout = std::io::stdout().lock();
            if realtime {
                commands::trace::run_realtime(&config, &opts, &mut stdout).await
            } else {
                commands::trace::run_simulated(&config, &opts, &mut stdout)
            }
        }
        Some(Commands::Config { action }) => match action {
            ConfigAction::Path => commands::config::path(),
            ConfigAction::Show => commands::config::show(&config),
            ConfigAction::Init { force } => commands::config::init(force),
        },
    }
}

/// Initialize logging
///
/// The interactive preview owns the terminal, so its logs go to a file in the
/// data directory; everything else logs to stderr.
fn init_logging(config: &AppConfig, interactive: bool) -> Result<()> {
    let filter = EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    );

    if interactive {
        let log_path = config.log_path();
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}
