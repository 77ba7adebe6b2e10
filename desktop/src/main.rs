//! ZirraPay exchange desk binary.

use anyhow::{anyhow, Context};
use desktop::App;
use eframe::NativeOptions;

const APP_NAME: &str = "ZirraPay";

fn main() -> anyhow::Result<()> {
    desktop::debug::init();

    let config = lib_core::config::init_config().context("Failed to load exchange configuration")?;
    tracing::info!(
        debug_mode = desktop::debug::is_debug_mode(),
        assets = config.catalog.assets().len(),
        "Starting ZirraPay exchange desk"
    );

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("ZirraPay - Crypto to Naira")
            .with_inner_size([1120.0, 760.0])
            .with_min_inner_size([860.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(APP_NAME, options, Box::new(|_cc| Ok(Box::new(App::new()))))
        .map_err(|e| anyhow!("eframe error: {e}"))?;

    tracing::info!("ZirraPay exchange desk shut down");
    Ok(())
}
