// Tour Calendar Application
// Main entry point

use tour_calendar::models::booking::BookedEntry;
use tour_calendar::models::settings::Settings;
use tour_calendar::services::availability::load_booked_entries;
use tour_calendar::services::settings::SettingsService;
use tour_calendar::ui_egui::TourRequestApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Tour Calendar");

    let settings = load_settings_or_default(&SettingsService::from_project_dirs());
    let booked_entries = load_booked_entries_or_empty(&settings);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Tour Calendar")
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Tour Calendar",
        options,
        Box::new(move |cc| Ok(Box::new(TourRequestApp::new(cc, &settings, booked_entries)))),
    )
}

fn load_settings_or_default(service: &SettingsService) -> Settings {
    match service.get() {
        Ok(settings) => {
            log::info!("Loaded settings from {}", service.path().display());
            settings
        }
        Err(err) => {
            log::warn!("Failed to load settings, using defaults: {err:?}");
            Settings::default()
        }
    }
}

fn load_booked_entries_or_empty(settings: &Settings) -> Vec<BookedEntry> {
    let path = SettingsService::resolve_booked_entries_path(settings);
    load_booked_entries(&path).unwrap_or_else(|err| {
        log::warn!("Failed to load booked entries, treating every slot as open: {err:?}");
        Vec::new()
    })
}
