use std::path::PathBuf;

mod backend_bridge;
mod config;
mod controller;
mod ui;

use anyhow::Context;
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::{MentorHubApp, StartupConfig};

const COMMAND_QUEUE_CAPACITY: usize = 64;
const EVENT_QUEUE_CAPACITY: usize = 256;

#[derive(Parser, Debug)]
#[command(name = "mindful_mentors", about = "MindfulMentors desktop client")]
struct StartupArgs {
    /// Settings file; defaults to the per-user config directory.
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Prefills the sign-in email.
    #[arg(long)]
    identifier: Option<String>,
    /// Directory holding mentors.json and stories.json.
    #[arg(long)]
    seed_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = StartupArgs::parse();
    let settings = config::load_settings(args.settings.as_deref()).context("loading settings")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_filter.as_str()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let startup = StartupConfig::from_settings(settings, args.identifier, args.seed_dir);
    tracing::info!(seed_dir = ?startup.seed_dir, "starting desktop client");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(COMMAND_QUEUE_CAPACITY);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(EVENT_QUEUE_CAPACITY);
    backend_bridge::runtime::launch(startup.seed_dir.clone(), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(startup.window_title.clone())
            .with_inner_size([1180.0, 780.0])
            .with_min_inner_size([860.0, 600.0]),
        ..Default::default()
    };
    let title = startup.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(MentorHubApp::new(cmd_tx, ui_rx, &startup)))),
    )
    .map_err(|err| anyhow::anyhow!("desktop window failed: {err}"))
}
