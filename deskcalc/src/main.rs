//! deskcalc - a desk calculator
//!
//! Two operands at a time, classic accumulator keypad.

mod app;
mod keypad;

use app::DeskCalcApp;
use calccore::{CalcSettings, CalcTheme};
use eframe::NativeOptions;
use tracing::{info, warn};

fn main() -> eframe::Result<()> {
    let path = CalcSettings::config_path();
    let loaded = CalcSettings::load_from(&path);
    let settings = loaded.as_ref().cloned().unwrap_or_default();

    calccore::logging::init(&settings.log_filter);
    if let Err(e) = &loaded {
        if !CalcSettings::is_missing(e) {
            warn!(path = %path.display(), error = %e, "ignoring unreadable settings");
        }
    }
    info!(layout = ?settings.layout, "starting deskcalc");

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([app::WINDOW_WIDTH, app::window_height(settings.layout)])
            .with_min_inner_size(app::min_window_size(settings.layout))
            .with_title("calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "calculator",
        options,
        Box::new(move |cc| {
            CalcTheme::default().apply(&cc.egui_ctx);
            Box::new(DeskCalcApp::new(cc, settings))
        }),
    )
}
