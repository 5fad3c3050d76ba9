use eframe::egui::{self, Area, Id, Order, RichText, pos2};

use super::style::{self, Palette};
use super::*;
use crate::egui_app::controller::{TOOLTIP_WIDTH, TooltipStatus, tooltip_content};

impl EguiApp {
    /// Click-through info panel for the hovered unit.
    pub(super) fn render_tooltip(&mut self, ctx: &egui::Context, palette: &Palette) {
        let (content, x, y) = {
            let store = self.store.borrow();
            let Some(content) = tooltip_content(&store) else {
                return;
            };
            let tooltip = store.tooltip();
            (content, tooltip.x, tooltip.y)
        };
        Area::new(Id::new("unit_tooltip"))
            .order(Order::Tooltip)
            .interactable(false)
            .fixed_pos(pos2(x, y))
            .show(ctx, |ui| {
                style::panel_frame(palette).show(ui, |ui| {
                    ui.set_width(TOOLTIP_WIDTH - 24.0);
                    ui.label(RichText::new(&content.unit_id).strong().size(15.0));
                    ui.label(RichText::new(&content.category).color(palette.text_muted));
                    ui.horizontal_wrapped(|ui| {
                        for feature in &content.features {
                            ui.label(feature.icon()).on_hover_text(feature.label());
                        }
                    });
                    match &content.status {
                        TooltipStatus::Price(price) => {
                            ui.label(RichText::new(price).strong().color(palette.success));
                        }
                        TooltipStatus::Occupied => {
                            ui.label(RichText::new("Occupied").color(palette.text_muted));
                        }
                    }
                });
            });
    }
}
