// Mentor Connect Application
// Main entry point

use mentor_connect::services::config::AppConfig;
use mentor_connect::ui_egui::MentorConnectApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Mentor Connect");

    let config = AppConfig::load().unwrap_or_else(|err| {
        log::warn!("Could not load configuration: {err:#}. Using defaults");
        AppConfig::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Mentor Connect")
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([960.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Mentor Connect",
        options,
        Box::new(move |cc| Ok(Box::new(MentorConnectApp::new(cc, config)?))),
    )
}
