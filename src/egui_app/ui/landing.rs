use eframe::egui::{self, Frame, Margin, RichText, ScrollArea};

use super::style::{self, Palette};
use super::*;
use crate::facility::ManifestEntry;

impl EguiApp {
    pub(super) fn render_landing(&mut self, ctx: &egui::Context) {
        let palette = style::palette(self.settings.theme);
        let (entries, loading, error) = {
            let store = self.store.borrow();
            (
                store.manifest().to_vec(),
                store.is_loading(),
                store.error().map(str::to_owned),
            )
        };
        let mut open = None;
        let mut retry = false;
        let mut toggle_theme = false;
        egui::CentralPanel::default()
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .inner_margin(Margin::same(32)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(RichText::new("MooveIn").strong().color(palette.accent));
                    ui.label(RichText::new("Self storage").color(palette.text_muted));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        toggle_theme = ui.button("Theme").clicked();
                    });
                });
                ui.add_space(16.0);
                ui.label(RichText::new("Choose a location").size(22.0).strong());
                ui.add_space(12.0);
                if loading {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(RichText::new("Loading…").color(palette.text_muted));
                    });
                }
                if let Some(error) = error.as_deref() {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(error).color(palette.error));
                        retry = ui.button("Retry").clicked();
                    });
                    ui.add_space(8.0);
                }
                if entries.is_empty() && !loading && error.is_none() {
                    ui.label(RichText::new("No facilities found.").color(palette.text_muted));
                }
                ScrollArea::vertical().show(ui, |ui| {
                    for entry in &entries {
                        if facility_card(ui, entry, &palette, loading) {
                            open = Some(entry.id.clone());
                        }
                        ui.add_space(10.0);
                    }
                });
            });
        if retry {
            self.store.borrow_mut().load_facility_list();
        }
        if let Some(facility_id) = open {
            self.store.borrow_mut().select_facility(&facility_id);
        }
        if toggle_theme {
            self.toggle_theme();
        }
    }
}

/// One manifest row. Returns true when its map was requested.
fn facility_card(ui: &mut egui::Ui, entry: &ManifestEntry, palette: &Palette, busy: bool) -> bool {
    let mut clicked = false;
    style::panel_frame(palette).show(ui, |ui| {
        ui.set_width(ui.available_width().min(640.0));
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(&entry.name).strong().size(16.0));
                if !entry.address.is_empty() {
                    ui.label(&entry.address);
                }
                let locality = entry.locality();
                if !locality.is_empty() {
                    ui.label(RichText::new(locality).color(palette.text_muted));
                }
                if !entry.phone.is_empty() || !entry.hours.is_empty() {
                    ui.label(
                        RichText::new(format!("{}  {}", entry.phone, entry.hours))
                            .color(palette.text_muted),
                    );
                }
                if !entry.sizes.is_empty() {
                    ui.label(
                        RichText::new(format!("Sizes: {}", entry.sizes.join(", ")))
                            .color(palette.text_muted),
                    );
                }
                if !entry.features.is_empty() {
                    ui.label(
                        RichText::new(entry.features.join(" \u{b7} ")).color(palette.text_muted),
                    );
                }
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if entry.is_selectable() {
                    clicked = ui
                        .add_enabled(!busy, egui::Button::new("View units"))
                        .clicked();
                } else {
                    ui.add_enabled(false, egui::Button::new("Map coming soon"));
                }
            });
        });
    });
    clicked
}
