use eframe::egui::{self, Align, Align2, Area, Frame, Id, Layout, Margin, Order, RichText};

use super::style::{self, Palette};
use super::*;
use crate::config::Theme;
use crate::egui_app::controller::ControlId;
use crate::facility::{Feature, UnitType, floor_stats, vacant_count};

/// Gap between overlays and the container edge.
const EDGE_GAP: f32 = 16.0;
/// Keeps bottom-anchored overlays above the status bar.
const STATUS_CLEARANCE: f32 = 32.0;

impl EguiApp {
    pub(super) fn render_top_bar(&mut self, ctx: &egui::Context, palette: &Palette) {
        let (facility_name, address) = {
            let store = self.store.borrow();
            match store.facility() {
                Some(facility) => (facility.name.clone(), facility.address.clone()),
                None => (String::new(), String::new()),
            }
        };
        let width = ctx.available_rect().width();
        let mut back = false;
        let mut toggle_theme = false;
        let response = Area::new(Id::new("map_top_bar"))
            .order(Order::Foreground)
            .fixed_pos(ctx.available_rect().min)
            .show(ctx, |ui| {
                Frame::new()
                    .fill(palette.bg_secondary)
                    .inner_margin(Margin::symmetric(16, 0))
                    .show(ui, |ui| {
                        ui.set_min_size(egui::vec2(width - 32.0, TOP_BAR_HEIGHT));
                        ui.set_max_height(TOP_BAR_HEIGHT);
                        ui.horizontal_centered(|ui| {
                            back = ui.button("\u{2190} All locations").clicked();
                            ui.separator();
                            ui.label(RichText::new("MooveIn").strong().color(palette.accent));
                            ui.label(RichText::new(&facility_name).strong());
                            if !address.is_empty() {
                                ui.label(RichText::new(&address).color(palette.text_muted));
                            }
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                let label = match self.settings.theme {
                                    Theme::Dark => "\u{2600} Light",
                                    Theme::Light => "\u{263e} Dark",
                                };
                                toggle_theme = ui.button(label).clicked();
                            });
                        });
                    });
            });
        self.registry
            .register(ControlId::TopBar, response.response.rect);
        if back {
            self.store.borrow_mut().return_to_landing();
        }
        if toggle_theme {
            self.toggle_theme();
        }
    }

    pub(super) fn render_floor_switcher(&mut self, ctx: &egui::Context, palette: &Palette) {
        let floors: Vec<(String, String, usize)> = {
            let store = self.store.borrow();
            let Some(facility) = store.facility() else {
                return;
            };
            facility
                .floors
                .iter()
                .map(|floor| (floor.id.clone(), floor.name.clone(), vacant_count(floor)))
                .collect()
        };
        if floors.len() < 2 {
            return;
        }
        let current = self.store.borrow().current_floor_id().map(str::to_owned);
        let mut switch_to = None;
        let response = Area::new(Id::new("floor_switcher"))
            .order(Order::Foreground)
            .anchor(Align2::CENTER_TOP, egui::vec2(0.0, TOP_BAR_HEIGHT + 12.0))
            .show(ctx, |ui| {
                style::panel_frame(palette)
                    .inner_margin(Margin::same(6))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            for (id, name, vacant) in &floors {
                                let selected = current.as_deref() == Some(id.as_str());
                                let text = format!("{name}  \u{b7}  {vacant} open");
                                if ui.selectable_label(selected, text).clicked() && !selected {
                                    switch_to = Some(id.clone());
                                }
                            }
                        });
                    });
            });
        self.registry
            .register(ControlId::FloorSwitcher, response.response.rect);
        if let Some(floor_id) = switch_to {
            self.store.borrow_mut().switch_floor(&floor_id);
        }
    }

    pub(super) fn render_filter_sidebar(&mut self, ctx: &egui::Context, palette: &Palette) {
        let (open, active): (bool, Vec<UnitType>) = {
            let store = self.store.borrow();
            (store.filter_sidebar_open(), store.filters().iter().collect())
        };
        let mut toggled = None;
        let mut clear = false;
        let mut collapse = false;
        let response = Area::new(Id::new("filter_sidebar"))
            .order(Order::Foreground)
            .anchor(Align2::LEFT_TOP, egui::vec2(EDGE_GAP, TOP_BAR_HEIGHT + 12.0))
            .show(ctx, |ui| {
                style::panel_frame(palette).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("Unit sizes").strong());
                        let arrow = if open { "\u{25c0}" } else { "\u{25b6}" };
                        collapse = ui.small_button(arrow).clicked();
                    });
                    if !open {
                        return;
                    }
                    ui.set_width(220.0);
                    ui.add_space(6.0);
                    for unit_type in UnitType::ALL {
                        let info = unit_type.info();
                        let selected = active.contains(&unit_type);
                        let text = format!("{}  {}  ${}", info.name, info.dims, info.price);
                        if ui.selectable_label(selected, text).clicked() {
                            toggled = Some(unit_type);
                        }
                    }
                    if !active.is_empty() {
                        ui.add_space(4.0);
                        clear = ui.button("Clear filters").clicked();
                    }
                    ui.separator();
                    render_legend(ui, palette);
                });
            });
        self.registry
            .register(ControlId::FilterSidebar, response.response.rect);
        let mut store = self.store.borrow_mut();
        if collapse {
            store.toggle_filter_sidebar();
        }
        if let Some(unit_type) = toggled {
            store.toggle_filter(unit_type);
        }
        if clear {
            store.clear_filters();
        }
    }

    pub(super) fn render_map_controls(&mut self, ctx: &egui::Context, palette: &Palette) {
        let mut zoom = None;
        let mut reset = false;
        let response = Area::new(Id::new("map_controls"))
            .order(Order::Foreground)
            .anchor(
                Align2::RIGHT_BOTTOM,
                egui::vec2(-EDGE_GAP, -(EDGE_GAP + STATUS_CLEARANCE + 48.0)),
            )
            .show(ctx, |ui| {
                style::panel_frame(palette)
                    .inner_margin(Margin::same(6))
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            if ui.button(" + ").on_hover_text("Zoom in").clicked() {
                                zoom = Some(0.2);
                            }
                            if ui.button(" \u{2212} ").on_hover_text("Zoom out").clicked() {
                                zoom = Some(-0.2);
                            }
                            reset = ui.button("Reset").on_hover_text("Fit floor").clicked();
                        });
                    });
            });
        self.registry
            .register(ControlId::MapControls, response.response.rect);
        let mut store = self.store.borrow_mut();
        if let Some(delta) = zoom {
            store.zoom_by(delta);
        }
        if reset {
            store.reset_view();
        }
    }

    pub(super) fn render_map_stats(&mut self, ctx: &egui::Context, palette: &Palette) {
        let (stats, filtered) = {
            let store = self.store.borrow();
            let Some(floor) = store.current_floor() else {
                return;
            };
            (floor_stats(floor, store.filters()), store.filters().is_active())
        };
        let response = Area::new(Id::new("map_stats"))
            .order(Order::Foreground)
            .anchor(
                Align2::RIGHT_BOTTOM,
                egui::vec2(-EDGE_GAP, -(EDGE_GAP + STATUS_CLEARANCE)),
            )
            .show(ctx, |ui| {
                style::panel_frame(palette)
                    .inner_margin(Margin::symmetric(12, 6))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(format!("{} available", stats.vacant))
                                    .color(palette.success),
                            );
                            ui.label(
                                RichText::new(format!("{} occupied", stats.occupied))
                                    .color(palette.text_muted),
                            );
                            if filtered {
                                ui.label(RichText::new("(filtered)").color(palette.text_muted));
                            }
                        });
                    });
            });
        self.registry
            .register(ControlId::MapStats, response.response.rect);
    }
}

fn render_legend(ui: &mut egui::Ui, palette: &Palette) {
    ui.label(RichText::new("Legend").strong());
    let swatches = [
        ("Available", palette.unit_vacant),
        ("Occupied", palette.unit_occupied),
        ("Selected", palette.unit_selected),
        ("Matches filter", palette.unit_highlight),
    ];
    for (label, color) in swatches {
        ui.horizontal(|ui| {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
            ui.painter().rect_filled(rect, 2.0, color);
            ui.label(RichText::new(label).color(palette.text_muted));
        });
    }
    ui.add_space(4.0);
    for feature in Feature::LEGEND {
        ui.label(
            RichText::new(format!("{}  {}", feature.icon(), feature.label()))
                .color(palette.text_muted),
        );
    }
}
