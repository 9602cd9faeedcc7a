//! Application entry point: cipher-pad.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Build the configured transformation.
//! 4. Run [`eframe::run_native`]; the app starts the worker thread from the
//!    creation context and the call blocks until the window is closed.

use cipher_pad::{
    app::CipherPadApp,
    config::AppConfig,
    transform::{build_transform, Transform},
};

use eframe::egui;

// ---------------------------------------------------------------------------
// Native options builder
// ---------------------------------------------------------------------------

fn native_options(config: &AppConfig) -> eframe::NativeOptions {
    let (width, height) = config.ui.window_size;
    let mut vp = egui::ViewportBuilder::default()
        .with_title(&config.ui.title)
        .with_inner_size([width, height])
        .with_min_inner_size([320.0, 200.0]);

    if let Some((x, y)) = config.ui.window_position {
        vp = vp.with_position(egui::pos2(x, y));
    }

    eframe::NativeOptions {
        viewport: vp,
        centered: config.ui.window_position.is_none(),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> eframe::Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("cipher-pad starting up");

    // 2. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });

    // 3. Transformation
    let transform = build_transform(&config.transform);
    log::info!(
        "Transform: {} (delay {} ms)",
        transform.name(),
        config.transform.delay_ms
    );

    // 4. Window
    let options = native_options(&config);
    let title = config.ui.title.clone();

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            let app = CipherPadApp::new(cc, config, transform)?;
            Ok(Box::new(app))
        }),
    )
}
