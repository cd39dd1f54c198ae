mod app;
mod color;
mod data;
mod reactive;
mod state;
mod ui;

use std::path::Path;

use anyhow::Context;
use app::LaunchBoardApp;
use eframe::egui;

const DEFAULT_DATA_FILE: &str = "launches.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());

    // The dataset is loaded once, before the window opens. A missing or
    // malformed file is fatal.
    let dataset = data::loader::load_csv(Path::new(&path)).with_context(|| {
        format!(
            "loading launch records from '{path}' \
             (run `cargo run --bin generate_sample` to create a sample file)"
        )
    })?;

    log::info!(
        "Loaded {} launch records across {} sites",
        dataset.len(),
        dataset.sites.len()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "LaunchBoard – Launch Records Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchBoardApp::new(dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("running UI: {e}"))
}
