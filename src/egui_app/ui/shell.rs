use eframe::egui::{self, Frame, Key, Margin, RichText};

use super::style;
use super::*;

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.store.borrow_mut().poll_jobs();
        self.handle_escape(ctx);
        self.sync_map_view();
        self.registry.clear();
        self.render_status_bar(ctx);
        let phase = self.store.borrow().phase();
        match phase {
            AppPhase::Landing => self.render_landing(ctx),
            AppPhase::Map | AppPhase::Checkout => self.render_map(ctx, phase),
        }
    }
}

impl EguiApp {
    fn handle_escape(&mut self, ctx: &egui::Context) {
        if !ctx.input(|i| i.key_pressed(Key::Escape)) {
            return;
        }
        let mut store = self.store.borrow_mut();
        if store.phase() == AppPhase::Checkout {
            store.go_to_map();
        }
    }

    fn render_map(&mut self, ctx: &egui::Context, phase: AppPhase) {
        let palette = style::palette(self.settings.theme);
        // Overlays register their rects before the canvas hit-tests the pointer.
        self.render_top_bar(ctx, &palette);
        self.render_floor_switcher(ctx, &palette);
        self.render_filter_sidebar(ctx, &palette);
        self.render_map_controls(ctx, &palette);
        self.render_map_stats(ctx, &palette);
        if phase == AppPhase::Checkout {
            self.render_checkout(ctx, &palette);
        }
        self.render_map_canvas(ctx, &palette);
        self.render_tooltip(ctx, &palette);
    }

    fn render_status_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette(self.settings.theme);
        let zoom = self.map_view.as_ref().map(|view| view.visual().scale);
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_secondary)
                    .inner_margin(Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                let store = self.store.borrow();
                let status = store.status();
                ui.horizontal(|ui| {
                    let (dot, _) =
                        ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                    ui.painter().circle_filled(
                        dot.center(),
                        5.0,
                        style::status_color(status.tone, &palette),
                    );
                    ui.label(RichText::new(status.badge_label()).strong());
                    ui.separator();
                    ui.label(RichText::new(&status.text).color(palette.text_muted));
                    if let Some(scale) = zoom {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(
                                RichText::new(format!("{:.0}%", scale * 100.0))
                                    .color(palette.text_muted),
                            );
                        });
                    }
                });
            });
    }
}
