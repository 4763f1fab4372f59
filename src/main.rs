mod app;
mod carousel;
mod color;
mod config;
mod data;
mod state;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use app::AlumniDirectoryApp;
use clap::Parser;
use eframe::egui;

use config::DirectoryConfig;
use state::AppState;

#[derive(Parser, Debug)]
#[command(version, about = "Browse the alumni directory", long_about = None)]
struct Args {
    /// Alumni dataset (.json or .csv); the bundled dataset when omitted
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Directory that relative image paths resolve against
    #[arg(short, long)]
    assets: Option<PathBuf>,

    /// JSON file overriding directory settings
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => DirectoryConfig::load(path)?,
        None => DirectoryConfig::default(),
    };

    let dataset = match &args.data {
        Some(path) => data::loader::load_file(path)?,
        None => data::loader::load_bundled()?,
    };
    log::info!(
        "Loaded {} alumni with courses {:?}",
        dataset.len(),
        dataset.courses
    );

    let asset_root = match (&args.assets, &args.data) {
        (Some(dir), _) => dir.clone(),
        (None, Some(path)) => path.parent().map(Path::to_path_buf).unwrap_or_default(),
        (None, None) => std::env::current_dir().context("resolving current directory")?,
    };

    let mut state = AppState::new(config, asset_root);
    state.asset_root_pinned = args.assets.is_some();
    state.set_dataset(dataset);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([480.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Alumni Directory",
        options,
        Box::new(|cc| {
            // Install image loaders so egui can render png/jpg and fetch URLs.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(AlumniDirectoryApp::new(state)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("running the UI: {e}"))
}
