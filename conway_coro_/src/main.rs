// main.rs - Desktop Game of Life on a wrapping grid
// The automaton lives in the `conway` crate; this binary wires it to egui.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use conway::coro::RowStepper;
use conway::{LifeConfig, LifeState, StepMode};
use eframe::egui;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod ui;

use ui::LifeApp;

#[derive(Parser, Debug)]
#[command(name = "conway_coro", version, about = "Conway's Game of Life on a wrapping grid")]
struct Cli {
    /// JSON settings file. Fields it leaves out keep their defaults.
    #[arg(long, env = "CONWAY_CONFIG")]
    config: Option<PathBuf>,

    /// Milliseconds between generations.
    #[arg(long, env = "CONWAY_STEP_MS")]
    step_ms: Option<u64>,

    /// Milliseconds between idle pattern injections.
    #[arg(long, env = "CONWAY_IDLE_MS")]
    idle_ms: Option<u64>,

    /// Seed for pattern stamping and random fills.
    #[arg(long, env = "CONWAY_SEED")]
    seed: Option<u64>,

    /// Start with glowing cells.
    #[arg(long)]
    glow: bool,

    /// Pause when the board repeats a recent state.
    #[arg(long)]
    stop_on_cycle: bool,

    /// Compute each generation as one tokio task per row.
    #[arg(long)]
    coroutines: bool,
}

impl Cli {
    fn life_config(&self) -> Result<LifeConfig> {
        let mut config = match &self.config {
            Some(path) => LifeConfig::load(path)
                .with_context(|| format!("loading settings from {}", path.display()))?,
            None => LifeConfig::default(),
        };
        if let Some(ms) = self.step_ms {
            config.step_interval_ms = ms;
        }
        if let Some(ms) = self.idle_ms {
            config.idle_interval_ms = ms;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.glow |= self.glow;
        config.stop_on_cycle |= self.stop_on_cycle;
        config.validate().context("invalid settings")?;
        Ok(config)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = cli.life_config()?;

    let mut state = LifeState::new(config).context("building initial state")?;
    if cli.coroutines {
        let stepper = RowStepper::new().context("starting row coroutine runtime")?;
        state = state.with_step_mode(StepMode::Rows(stepper));
    }
    info!(dims = %state.dims(), coroutines = cli.coroutines, "starting Game of Life");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(LifeApp::new(state))),
    )
    .map_err(|err| anyhow!("window closed with error: {err}"))
}
