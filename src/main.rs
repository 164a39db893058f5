mod app;
mod color;
mod data;
mod state;
mod ui;

use std::sync::Arc;

use anyhow::{Context, Result};
use app::ArcticVoiceApp;
use eframe::egui;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // The dashboard cannot render without data, so a broken table aborts here.
    let dataset = data::loader::load()
        .context("embedded event table is malformed")
        .inspect_err(|e| log::error!("{e:#}"))?;
    let dataset = Arc::new(dataset);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Arctic Voice")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Arctic Voice",
        options,
        Box::new(move |_cc| Ok(Box::new(ArcticVoiceApp::new(dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start the dashboard window: {e}"))
}
