//! Unveil CLI
//!
//! Validate tracker configuration files and replay scroll sessions against
//! an in-memory page.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use unveil_core::{ElementId, TrackerConfig};
use unveil_platform::PageEvent;
use unveil_tracker::{Embellisher, RevealReceiver};

mod scenario;

use scenario::Scenario;

/// Simulated time between scripted scroll steps
const STEP: Duration = Duration::from_millis(16);

#[derive(Parser)]
#[command(name = "unveil")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scroll reveal tracker tooling", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a tracker config file
    Check {
        /// Path to a TOML config
        config: PathBuf,
    },

    /// Print the default config as TOML
    Defaults,

    /// Replay a scroll session and report reveals and scroll metrics
    Simulate {
        /// Tracker config (defaults apply when omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Scenario file (built-in demo page when omitted)
        #[arg(short, long)]
        scenario: Option<PathBuf>,

        /// Override the scenario's scroll offsets
        #[arg(short, long, value_delimiter = ',')]
        offsets: Vec<f32>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Check { config } => cmd_check(&config),
        Commands::Defaults => cmd_defaults(),
        Commands::Simulate {
            config,
            scenario,
            offsets,
        } => cmd_simulate(config, scenario, offsets),
    }
}

fn cmd_check(path: &Path) -> Result<()> {
    let config = TrackerConfig::load(path)
        .with_context(|| format!("Invalid config {}", path.display()))?;

    info!("{} is valid", path.display());
    info!(
        "threshold={} margin=\"{}\" parallaxSpeed={}",
        config.threshold, config.activation_margin_px, config.parallax_speed
    );
    if !config.respect_reduced_motion_preference {
        warn!("respectReducedMotionPreference is off; motion-sensitive users will see animations");
    }
    Ok(())
}

fn cmd_defaults() -> Result<()> {
    let text = toml::to_string_pretty(&TrackerConfig::default())
        .context("Failed to serialize default config")?;
    print!("{}", text);
    Ok(())
}

fn cmd_simulate(
    config: Option<PathBuf>,
    scenario: Option<PathBuf>,
    offsets: Vec<f32>,
) -> Result<()> {
    let config = match config {
        Some(path) => TrackerConfig::load(&path)
            .with_context(|| format!("Invalid config {}", path.display()))?,
        None => TrackerConfig::default(),
    };
    let mut scenario = match scenario {
        Some(path) => Scenario::load(&path)?,
        None => Scenario::demo(),
    };
    if !offsets.is_empty() {
        scenario.offsets = offsets;
    }

    let (page, names) = scenario.build_page();
    let name_of = |id: ElementId| {
        names
            .iter()
            .find(|(_, element)| *element == id)
            .map(|(name, _)| name.as_str())
            .unwrap_or("<unnamed>")
    };

    let Some(mut app) = Embellisher::init(page.clone(), config) else {
        info!("Tracker declined to start (reduced motion preferred)");
        return Ok(());
    };
    let mut reveals = app
        .subscribe()
        .context("Reveal stream unavailable on a fresh tracker")?;

    info!(
        "Simulating {} elements over {} scroll steps",
        names.len(),
        scenario.offsets.len()
    );

    let mut now = Instant::now();
    app.on_frame(now);
    report_reveals(&mut reveals, &name_of);

    for offset in &scenario.offsets {
        now += STEP;
        page.set_scroll_offset(*offset);
        app.handle_event(PageEvent::Scroll, now);
        app.on_frame(now);

        let state = app.tracker().state();
        println!(
            "offset {:>7.1}  progress {:>5.1}%  {:<4}  to-top {}",
            state.last_known_offset,
            state.progress_percent,
            format!("{:?}", state.direction),
            if state.to_top_visible { "shown" } else { "hidden" },
        );
        report_reveals(&mut reveals, &name_of);
    }

    let revealed = names
        .iter()
        .filter(|(_, id)| app.tracker().is_revealed(*id))
        .count();
    info!(
        "{} of {} tracked elements revealed",
        revealed,
        app.tracker().tracked_len()
    );

    app.teardown();
    Ok(())
}

fn report_reveals<'a>(
    reveals: &mut RevealReceiver,
    name_of: &impl Fn(ElementId) -> &'a str,
) {
    while let Ok(event) = reveals.try_recv() {
        println!(
            "  revealed {} ({}, delay {}ms)",
            name_of(event.element),
            event.kind,
            event.delay.as_millis()
        );
    }
}
