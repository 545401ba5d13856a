#![allow(non_snake_case)]

mod app;
mod catalog;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use cardshop_core::ShopConfig;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Settings resolved from the command line before launch
#[derive(Debug, Clone, Copy)]
pub struct LaunchSettings {
    pub config: ShopConfig,
    pub window_width: u32,
}

static SETTINGS: OnceLock<LaunchSettings> = OnceLock::new();

/// Launch settings (defaults if called before `main` stored them)
pub fn launch_settings() -> LaunchSettings {
    SETTINGS.get().copied().unwrap_or(LaunchSettings {
        config: ShopConfig::default(),
        window_width: DEFAULT_WIDTH,
    })
}

const DEFAULT_WIDTH: u32 = 1280;
const DEFAULT_HEIGHT: u32 = 900;

/// Card Shop - storefront desktop app
#[derive(Parser, Debug)]
#[command(name = "cardshop-desktop")]
#[command(about = "Card Shop - trading card storefront")]
struct Args {
    /// JSON config file (default: <config dir>/cardshop/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Initial window width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,
}

fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cardshop")
        .join("config.json")
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let config = match args.config {
        Some(ref path) => ShopConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => {
            let path = default_config_path();
            ShopConfig::load_or_default(&path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?
        }
    };

    let _ = SETTINGS.set(LaunchSettings {
        config,
        window_width: args.width,
    });

    tracing::info!(
        width = args.width,
        breakpoint = config.nav.breakpoint_px,
        "Starting Card Shop"
    );

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Duelist's Vault - Card Shop")
            .with_inner_size(dioxus::desktop::LogicalSize::new(
                f64::from(args.width),
                f64::from(args.height),
            ))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
