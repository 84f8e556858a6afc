//! Microwave console simulator: main entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  ConsoleHardware     LogEventSink     JsonConfigFile     │
//! │  (4 oven ports)      (EventSink)      (ConfigPort)       │
//! │                                                          │
//! │  ─────────────── Port Trait Boundary ──────────────      │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │           OvenService (pure logic)             │      │
//! │  │  FSM · CookController · EventQueue             │      │
//! │  └────────────────────────────────────────────────┘      │
//! │                                                          │
//! │  stdin reader thread ──▶ ControlPanel ──▶ service        │
//! │  main loop tick      ──▶ CountdownTimer ──▶ service      │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Console lines from the appliance go to stdout; logs go to stderr.

use std::io::BufRead;
use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use microwave::adapters::config_file::JsonConfigFile;
use microwave::adapters::console::ConsoleHardware;
use microwave::adapters::log_sink::LogEventSink;
use microwave::adapters::stdout::StdoutOutput;
use microwave::app::commands::PanelCommand;
use microwave::app::events::AppEvent;
use microwave::app::ports::{ConfigError, ConfigPort, EventSink, HeatingElementPort, TimerPort};
use microwave::app::service::OvenService;
use microwave::config::OvenConfig;
use microwave::drivers::panel::ControlPanel;
use microwave::events::Event;

#[derive(Parser)]
#[command(name = "microwave")]
#[command(about = "Microwave oven control panel simulator", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, default_value = "microwave.json")]
    config: PathBuf,

    /// Write the default config to the config path and exit
    #[arg(long)]
    init_config: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Override the timer period in milliseconds
    #[arg(long)]
    tick_ms: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── 1. Logging ────────────────────────────────────────────
    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();

    info!("Microwave v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Config ─────────────────────────────────────────────
    let config_file = JsonConfigFile::new(&cli.config);
    if cli.init_config {
        config_file
            .save(&OvenConfig::default())
            .with_context(|| format!("writing default config to {}", cli.config.display()))?;
        return Ok(());
    }

    let mut config = match config_file.load() {
        Ok(cfg) => cfg,
        Err(ConfigError::NotFound) => {
            info!("No config at {}, using defaults", cli.config.display());
            OvenConfig::default()
        }
        Err(e) => {
            warn!("Config load failed ({}), using defaults", e);
            OvenConfig::default()
        }
    };
    if let Some(ms) = cli.tick_ms {
        config.tick_interval_ms = ms;
    }
    config.validate().context("invalid configuration")?;
    let tick = Duration::from_millis(config.tick_interval_ms);

    // ── 3. Wiring ─────────────────────────────────────────────
    let mut hw = ConsoleHardware::new(StdoutOutput::new(), &config);
    let mut sink = LogEventSink::new();
    let mut panel = ControlPanel::new();
    let mut service = OvenService::new(config);
    service.start(&mut sink);

    // ── 4. Console input ──────────────────────────────────────
    let (tx, rx) = mpsc::channel::<PanelCommand>();
    thread::Builder::new()
        .name("stdin".into())
        .spawn(move || {
            for line in std::io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<PanelCommand>() {
                    Ok(cmd) => {
                        if tx.send(cmd).is_err() {
                            return;
                        }
                    }
                    Err(e) => warn!("{}", e),
                }
            }
            let _ = tx.send(PanelCommand::Quit);
        })
        .context("spawning stdin reader")?;

    info!("Ready. Commands: power, time, start, open, close, status, quit");

    // ── 5. Event loop ─────────────────────────────────────────
    let mut next_tick = Instant::now() + tick;

    loop {
        let wait = next_tick.saturating_duration_since(Instant::now());
        match rx.recv_timeout(wait) {
            Ok(PanelCommand::Quit) | Err(RecvTimeoutError::Disconnected) => break,
            Ok(PanelCommand::Status) => sink.emit(&AppEvent::Status(service.status())),
            Ok(cmd) => {
                // One console line is one press; no contact bounce to filter.
                if let Some(event) = panel.command(cmd) {
                    dispatch(&mut service, event, &mut hw, &mut sink);
                }
            }
            Err(RecvTimeoutError::Timeout) => {
                for event in hw.elapse_second() {
                    dispatch(&mut service, event, &mut hw, &mut sink);
                }
                next_tick += tick;
            }
        }
    }

    // ── 6. Shutdown ───────────────────────────────────────────
    if service.cook_session().is_some() {
        warn!("Shutting down mid-session, heater off");
        hw.heater_off();
        hw.stop_timer();
    }
    info!("Bye");
    Ok(())
}

/// Faults are already reported through the sink.
fn dispatch(
    service: &mut OvenService,
    event: Event,
    hw: &mut ConsoleHardware<StdoutOutput>,
    sink: &mut LogEventSink,
) {
    if let Err(e) = service.handle(event, hw, sink) {
        debug!("{:?} not handled: {}", event, e);
    }
}
