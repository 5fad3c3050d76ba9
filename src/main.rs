//! Entry point for the MooveIn facility map.
use std::sync::Arc;

use eframe::egui;
use moovein::config::{self, AppSettings};
use moovein::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use moovein::facility::DataSource;
use moovein::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let settings = match config::load_or_default() {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!(error = %err, "using default settings");
            AppSettings::default()
        }
    };
    let source = DataSource::parse(&settings.data.source);

    let viewport = egui::ViewportBuilder::default()
        .with_title("MooveIn")
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_inner_size([1280.0, 860.0]);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "MooveIn",
        native_options,
        Box::new(move |cc| match source {
            Ok(source) => {
                tracing::info!(?source, "starting facility map");
                Ok(Box::new(EguiApp::new(&cc.egui_ctx, settings, Arc::new(source))))
            }
            Err(err) => Ok(Box::new(LaunchError {
                message: format!("Invalid data source in config: {err}"),
            })),
        }),
    )?;
    Ok(())
}

struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start");
                ui.label(&self.message);
            });
        });
    }
}
