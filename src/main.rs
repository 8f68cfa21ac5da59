#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing_subscriber::EnvFilter;
use vintrack_core::{provider_from_config, AppConfig, SharedSessionProvider};

/// Configuration and identity provider chosen at startup
#[derive(Clone)]
pub struct Startup {
    pub config: AppConfig,
    pub provider: SharedSessionProvider,
}

/// Set once from `main`, read by the root component
static STARTUP: OnceLock<Startup> = OnceLock::new();

/// Startup values, or demo defaults when `main` did not run (tests, hot reload)
pub fn startup() -> Startup {
    STARTUP.get().cloned().unwrap_or_else(|| Startup {
        config: AppConfig::default(),
        provider: std::sync::Arc::new(vintrack_core::DemoSessionProvider::new()),
    })
}

/// VinTrack - Vinted resale automation dashboard
#[derive(Parser, Debug)]
#[command(name = "vintrack-desktop")]
#[command(about = "VinTrack - Vinted resale automation dashboard")]
struct Args {
    /// Config file (default: <config dir>/vintrack/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Use the offline demo identity provider
    #[arg(long)]
    demo: bool,

    /// Verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "vintrack=info,vintrack_core=info,vintrack_ui=info",
        1 => "vintrack=debug,vintrack_core=debug,vintrack_ui=debug",
        _ => "vintrack=trace,vintrack_core=trace,vintrack_ui=trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut config = AppConfig::load(args.config.as_deref()).context("loading configuration")?;
    if args.demo {
        config.force_demo();
    }
    config.validate().context("invalid configuration")?;

    let provider = provider_from_config(&config.auth).context("creating identity provider")?;
    tracing::info!(backend = ?config.auth.effective_backend(), "Starting VinTrack");
    let _ = STARTUP.set(Startup { config, provider });

    let window = WindowBuilder::new()
        .with_title("VinTrack")
        .with_inner_size(LogicalSize::new(1280.0, 860.0))
        .with_resizable(true);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(app::App);

    Ok(())
}
