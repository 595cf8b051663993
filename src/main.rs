#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use docu_calendar::ui_egui::CalendarApp;

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting docu-calendar");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("Docu Calendar"),
        ..Default::default()
    };

    eframe::run_native(
        "docu-calendar",
        options,
        Box::new(|cc| {
            let app = CalendarApp::new(cc).expect("Failed to initialize application");
            Ok(Box::new(app))
        }),
    )
}
