#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use diary_core::DiaryConfig;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Global display configuration, set from command line
static CONFIG: OnceLock<DiaryConfig> = OnceLock::new();

/// Get the display configuration (set from command line or default)
pub fn get_config() -> DiaryConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Creative Diary - a month of days and a shelf of keepsakes
#[derive(Parser, Debug)]
#[command(name = "creative-diary")]
#[command(about = "Creative Diary - personal diary with a calendar and a shelf")]
struct Args {
    /// Month heading above the calendar (defaults to the current month)
    #[arg(short, long)]
    month: Option<String>,

    /// Name shown on the profile card
    #[arg(short, long)]
    name: Option<String>,

    /// Line shown under the profile name
    #[arg(short, long)]
    tagline: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = DiaryConfig::new(args.month, args.name, args.tagline);

    let title = format!("Creative Diary - {}", config.month_label);
    tracing::info!("Starting diary for '{}' as {}", config.month_label, config.profile_name);

    let _ = CONFIG.set(config);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
