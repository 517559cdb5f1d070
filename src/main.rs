#![warn(clippy::all, rust_2018_idioms)]

use quick_draw::{PaintApp, PaintConfig};

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = PaintConfig::default();
    log::info!(
        "Starting {}x{} canvas, {} undo steps",
        config.canvas_width,
        config.canvas_height,
        config.history_capacity
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title.clone())
            .with_inner_size(config.window_size())
            .with_resizable(false),
        ..Default::default()
    };

    let title = config.title.clone();
    eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc| Ok(Box::new(PaintApp::new(cc, &config)))),
    )
}
