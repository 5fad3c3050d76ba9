use eframe::egui::{self, Align2, Area, Id, Order, RichText};

use super::style::{self, Palette};
use super::*;
use crate::egui_app::controller::ControlId;
use crate::facility::feature_list;

/// Summary lines shown for the selected unit.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct OrderSummary {
    pub facility: String,
    pub floor: String,
    pub unit_id: String,
    pub category: String,
    pub size: String,
    pub ceiling: String,
    pub access: String,
    pub features: Vec<&'static str>,
    pub price: String,
}

impl OrderSummary {
    pub(crate) fn from_store(store: &FacilityStore) -> Option<Self> {
        let facility = store.facility()?;
        let floor = store.current_floor()?;
        let unit = store.selected_unit()?;
        let info = unit.unit_type.info();
        Some(Self {
            facility: facility.name.clone(),
            floor: floor.name.clone(),
            unit_id: unit.id.clone(),
            category: info.name.to_string(),
            size: format!("{} ({})", info.dims, info.sqft),
            ceiling: info.ceiling.to_string(),
            access: info.access.to_string(),
            features: feature_list(&unit.features)
                .into_iter()
                .map(|feature| feature.label())
                .collect(),
            price: unit.unit_type.price_label(),
        })
    }
}

impl EguiApp {
    pub(super) fn render_checkout(&mut self, ctx: &egui::Context, palette: &Palette) {
        let Some(summary) = OrderSummary::from_store(&self.store.borrow()) else {
            return;
        };
        let mut back = false;
        let response = Area::new(Id::new("checkout_panel"))
            .order(Order::Foreground)
            .anchor(Align2::RIGHT_TOP, egui::vec2(-16.0, TOP_BAR_HEIGHT + 12.0))
            .show(ctx, |ui| {
                style::panel_frame(palette).show(ui, |ui| {
                    ui.set_width(280.0);
                    ui.label(RichText::new("Your unit").strong().size(18.0));
                    ui.label(RichText::new(&summary.facility).color(palette.text_muted));
                    ui.separator();
                    egui::Grid::new("checkout_summary")
                        .num_columns(2)
                        .spacing([12.0, 4.0])
                        .show(ui, |ui| {
                            let rows = [
                                ("Unit", summary.unit_id.as_str()),
                                ("Floor", summary.floor.as_str()),
                                ("Type", summary.category.as_str()),
                                ("Size", summary.size.as_str()),
                                ("Ceiling", summary.ceiling.as_str()),
                                ("Access", summary.access.as_str()),
                            ];
                            for (label, value) in rows {
                                ui.label(RichText::new(label).color(palette.text_muted));
                                ui.label(value);
                                ui.end_row();
                            }
                        });
                    ui.add_space(4.0);
                    ui.label(summary.features.join(" \u{b7} "));
                    ui.separator();
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("Monthly rent").color(palette.text_muted));
                        ui.label(RichText::new(&summary.price).strong().color(palette.accent));
                    });
                    ui.add_space(8.0);
                    ui.add_enabled(false, egui::Button::new("Continue to reservation"))
                        .on_disabled_hover_text("Online reservations are not available yet");
                    back = ui.button("Back to map (Esc)").clicked();
                });
            });
        self.registry
            .register(ControlId::CheckoutPanel, response.response.rect);
        if back {
            self.store.borrow_mut().go_to_map();
        }
    }
}
