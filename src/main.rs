#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod theme;
mod ui;

use anyhow::Context;
use eframe::egui;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Overrides the directory artwork paths are resolved against
const ASSET_ENV: &str = "PORTFOLIO_ASSETS";
const DEFAULT_ASSET_DIR: &str = "assets";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        build = env!("BUILD_INFO"),
        "starting portfolio"
    );

    match portfolio::metadata::person_json_ld() {
        Ok(json) => tracing::debug!(target: "portfolio::metadata", "{}", json),
        Err(e) => tracing::warn!("failed to render owner metadata: {}", e),
    }

    let gallery = portfolio::catalog::gallery().context("invalid artwork catalog")?;
    let text = portfolio::LanguageStore::load(portfolio::default_store());
    let asset_root = std::env::var_os(ASSET_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSET_DIR));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([320.0, 480.0])
            .with_title("Live Skaar Skogesal"),
        ..Default::default()
    };

    eframe::run_native(
        "Live Skaar Skogesal",
        options,
        Box::new(move |_cc| Ok(Box::new(app::PortfolioApp::new(text, gallery, asset_root)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to open the window: {}", e))
}
